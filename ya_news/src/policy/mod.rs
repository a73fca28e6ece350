//! Comment authorization and moderation policy
//!
//! Pure decision functions. Every call receives the request [`Identity`]
//! and, for moderation, the [`ModerationConfig`] explicitly; nothing here
//! reads sessions, globals or storage.

mod authorize;
mod config;
mod errors;
mod identity;
mod moderation;

pub use authorize::{CommentAction, apply_edit, authorize_create, authorize_mutate};
pub use config::{DEFAULT_BANNED_WORDS, DEFAULT_WARNING, MODERATION_CONFIG, ModerationConfig};
pub use errors::PolicyError;
pub use identity::{Identity, UserId};
pub use moderation::moderate;
