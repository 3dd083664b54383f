pub mod convert;
pub mod formats;
pub mod probe;
