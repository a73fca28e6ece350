mod errors;
mod storage;
mod types;

pub use errors::NewsError;
pub use types::{News, news_detail_path};
pub(crate) use storage::NewsStore;

pub(crate) async fn init() -> Result<(), NewsError> {
    NewsStore::init().await
}
