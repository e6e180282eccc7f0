pub mod errors;
pub mod time;

pub use errors::*;
pub use time::*;
