pub mod database_account;
pub mod payload;
pub mod role;
pub mod roster_account;
pub mod username;
