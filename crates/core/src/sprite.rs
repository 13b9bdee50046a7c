//! The per-sprite record owned by the registry.

use tui_sprites_types::{Position, SpriteId};

/// A registered sprite.
///
/// Sprites are created and destroyed only through the [`Registry`]; callers
/// hold a [`SpriteId`] and read records through registry accessors. There is
/// no way to mutate `position` without going through the registry, which is
/// what keeps the position index and the stored field in lockstep.
///
/// [`Registry`]: crate::registry::Registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub(crate) id: SpriteId,
    pub(crate) glyph: char,
    pub(crate) position: Position,
    pub(crate) name: String,
    pub(crate) group: Option<String>,
}

impl Sprite {
    pub fn id(&self) -> SpriteId {
        self.id
    }

    /// The character this sprite renders as.
    pub fn glyph(&self) -> char {
        self.glyph
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// The registry-unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The group tag, fixed at registration.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }
}
