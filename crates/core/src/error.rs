//! Error taxonomy for registry operations.
//!
//! Every failure is a caller precondition violation; the registry never
//! retries or recovers internally.

use thiserror::Error;
use tui_sprites_types::SpriteId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A name lookup missed, or an operation used a handle that is no longer
    /// (or never was) registered.
    #[error("sprite not found: {0}")]
    NotFound(String),

    /// A broadcast or group query named a tag with no live members.
    #[error("the group \"{0}\" doesn't exist")]
    GroupNotFound(String),
}

impl RegistryError {
    pub(crate) fn unknown_name(name: &str) -> Self {
        RegistryError::NotFound(format!("\"{name}\""))
    }

    pub(crate) fn dead(id: SpriteId) -> Self {
        RegistryError::NotFound(format!("id {id}"))
    }
}
