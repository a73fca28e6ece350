mod comment;
mod home;
mod login;
mod logout;
mod news;
mod router;
mod signup;

pub(crate) use comment::{delete_comment, delete_comment_page, edit_comment, edit_comment_page};
pub(crate) use home::home;
pub(crate) use news::{create_comment, news_detail};
pub(crate) use router::router as auth_router;
