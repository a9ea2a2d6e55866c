pub mod error;
pub mod models;
pub mod source;


pub use error::{Result, SyncError};
pub use models::database_account::DatabaseAccount;
pub use models::payload::{ACTIVE_FLAG, CreateUserPayload, DeleteUserPayload, EditUserPayload};
pub use models::role::{RoleId, RoleMap};
pub use models::roster_account::RosterAccount;
pub use models::username::normalize_username;
pub use source::{AccountSource, RosterSource, RosterWriter};
