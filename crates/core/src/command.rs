//! Broadcast commands.
//!
//! A group broadcast applies one command to every member of a group. The set
//! of operations is closed: dispatch is an enum match, so an unknown
//! operation is unrepresentable rather than a runtime error.

use tui_sprites_types::Position;

/// An operation that [`Registry::broadcast`] can apply to a sprite.
///
/// [`Registry::broadcast`]: crate::registry::Registry::broadcast
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Add a delta to the sprite's position.
    Translate { dx: i32, dy: i32 },
    /// Move the sprite to an absolute position.
    MoveTo(Position),
    /// Replace the sprite's glyph.
    SetGlyph(char),
    /// Destroy the sprite, removing it from every index.
    Destroy,
}
