pub mod account_reader;
pub mod error;

pub use account_reader::AccountReader;
pub use error::{DbError, Result};
