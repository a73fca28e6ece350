mod config;
mod errors;
mod password;
mod types;
mod user;

pub use errors::UserError;
pub use types::User;
pub(crate) use password::{hash_password, verify_password};
pub(crate) use user::UserStore;

pub(crate) async fn init() -> Result<(), UserError> {
    UserStore::init().await
}
