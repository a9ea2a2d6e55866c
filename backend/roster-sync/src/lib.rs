pub mod error;
pub mod logger;
pub mod runner;


pub use error::{Result as RunnerErrorResult, RunnerError};
pub use runner::{log_file_path, reconcile_options, run, sync};
