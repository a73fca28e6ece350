mod errors;
mod storage;
mod types;

pub use errors::CommentError;
pub use types::{Comment, CommentId};
pub(crate) use storage::CommentStore;

pub(crate) async fn init() -> Result<(), CommentError> {
    CommentStore::init().await
}
