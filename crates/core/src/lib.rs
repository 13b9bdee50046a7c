//! Core sprite registry - pure, deterministic, and testable
//!
//! This crate owns every live sprite and the four indices that make them
//! queryable. It has **zero dependencies** on rendering, terminals, or I/O,
//! making it:
//!
//! - **Deterministic**: iteration order is registration order, always
//! - **Testable**: every operation is a synchronous call on one struct
//! - **Portable**: usable from a terminal renderer, a benchmark, or a headless test
//!
//! # Module Structure
//!
//! - [`registry`]: the [`Registry`] itself - registration, destruction, rename,
//!   position mutation, position/collision queries, group broadcast
//! - [`sprite`]: the per-sprite record stored by the registry
//! - [`command`]: the closed set of operations a group broadcast can apply
//! - [`error`]: the [`RegistryError`] taxonomy
//!
//! # Index Invariants
//!
//! After every public operation completes:
//!
//! - the name index and the sprite storage hold exactly the same set of sprites
//! - names are unique; collisions are resolved by suffixing the new id, never rejected
//! - the position index equals each live sprite's stored position (the registry
//!   is the only writer of both, in one step)
//! - group buckets are never empty; a tag exists exactly while it has members

pub mod command;
pub mod error;
pub mod registry;
pub mod sprite;

pub use command::Command;
pub use error::RegistryError;
pub use registry::Registry;
pub use sprite::Sprite;
