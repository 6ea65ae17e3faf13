pub mod access;
pub mod analysis;
pub mod error;

pub use error::{Error, Result};
