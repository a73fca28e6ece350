mod config;
mod types;

pub(crate) use config::{DB_TABLE_COMMENTS, DB_TABLE_NEWS, DB_TABLE_USERS, GENERIC_DATA_STORE};
