//! TUI sprites (workspace facade crate).
//!
//! This package keeps a single `tui_sprites::{core,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_sprites_core as core;
pub use tui_sprites_term as term;
pub use tui_sprites_types as types;
