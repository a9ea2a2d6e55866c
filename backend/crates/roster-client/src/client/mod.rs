pub(crate) mod client;
pub(crate) mod error;

pub use client::SupersetClient;
pub use error::{ClientError, Result as ClientResult};
