//! Terminal rendering for the sprite registry.
//!
//! This is a small, game-oriented rendering layer. It intentionally avoids
//! widget/layout toolkits and instead renders into a simple glyph grid that
//! can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the camera pure so render order and culling can be unit-tested
//! - Keep the terminal backend behind a narrow draw/sink surface

pub mod camera;
pub mod grid;
pub mod renderer;

pub use tui_sprites_core as core;
pub use tui_sprites_types as types;

pub use camera::{Camera, PixelSink};
pub use grid::Grid;
pub use renderer::TerminalRenderer;
