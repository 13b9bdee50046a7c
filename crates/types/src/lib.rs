//! Shared types for the sprite registry and renderer.
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core registry, rendering, benchmarks).
//!
//! # Coordinate System
//!
//! World coordinates are signed integers: `x` grows left to right, `y` grows
//! top to bottom. Sprites may live anywhere in the plane, including at
//! negative coordinates; the camera decides what is on screen.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// An integer position in world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(self, other: Position) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Position) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Process-unique handle for a registered sprite.
///
/// Ids are allocated by the registry from a monotonically increasing counter
/// and are never reused within a process, so a destroyed sprite's id stays
/// dead forever. Callers hold `SpriteId`s, not sprite references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteId(pub u64);

impl fmt::Display for SpriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_arithmetic() {
        let a = Position::new(3, -2);
        let b = Position::new(-1, 5);
        assert_eq!(a + b, Position::new(2, 3));
        assert_eq!(a - b, Position::new(4, -7));

        let mut c = a;
        c += b;
        assert_eq!(c, Position::new(2, 3));
    }

    #[test]
    fn distance_is_euclidean() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.distance_to(Position::new(3, 4)), 5.0);
        assert_eq!(origin.distance_to(origin), 0.0);
    }
}
