//! Registry - owns all live sprites and keeps four indices consistent.
//!
//! The four indices:
//!
//! - registration order (`order`): defines global and broadcast iteration order
//! - name index (`by_name`): unique name -> id, O(1) lookup
//! - position index (`by_position`): id -> current position, the reverse index
//!   behind position and collision queries
//! - group index (`by_group`): tag -> ordered member list; buckets are created
//!   with their first member and removed with their last
//!
//! All mutation goes through `&mut self` methods that update every affected
//! index before returning, so no query can observe a half-applied operation.

use std::collections::HashMap;

use tui_sprites_types::{Position, SpriteId};

use crate::command::Command;
use crate::error::RegistryError;
use crate::sprite::Sprite;

/// The owning index structure for all live sprites.
#[derive(Debug, Default)]
pub struct Registry {
    /// Next id to allocate. Ids are never reused.
    next_id: u64,
    /// Registration order of live sprites.
    order: Vec<SpriteId>,
    /// Sprite storage.
    sprites: HashMap<SpriteId, Sprite>,
    /// Unique name -> id.
    by_name: HashMap<String, SpriteId>,
    /// id -> position as of the last registry position write.
    by_position: HashMap<SpriteId, Position>,
    /// Group tag -> members in registration order. Never holds an empty bucket.
    by_group: HashMap<String, Vec<SpriteId>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sprites.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Live sprites in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (SpriteId, &Sprite)> {
        self.order.iter().map(move |id| (*id, &self.sprites[id]))
    }

    /// Register a new sprite, inserting it into all four indices.
    ///
    /// If `requested_name` is already taken the sprite gets
    /// `{requested_name}@{id}` instead, extended until unique if that exact
    /// spelling is also taken. Registration never fails.
    pub fn register(
        &mut self,
        glyph: char,
        position: Position,
        requested_name: &str,
        group: Option<&str>,
    ) -> SpriteId {
        let id = SpriteId(self.next_id);
        self.next_id += 1;

        let name = self.resolve_name(requested_name, id);

        self.sprites.insert(
            id,
            Sprite {
                id,
                glyph,
                position,
                name: name.clone(),
                group: group.map(str::to_owned),
            },
        );
        self.order.push(id);
        self.by_name.insert(name, id);
        self.by_position.insert(id, position);
        if let Some(tag) = group {
            self.by_group.entry(tag.to_owned()).or_default().push(id);
        }

        id
    }

    fn resolve_name(&self, requested: &str, id: SpriteId) -> String {
        if !self.by_name.contains_key(requested) {
            return requested.to_owned();
        }
        // The id suffix is unique among derived names, but a caller may have
        // registered the derived spelling literally; extend until free.
        let mut name = format!("{requested}@{id}");
        while self.by_name.contains_key(&name) {
            name.push('@');
        }
        name
    }

    /// Look up a sprite by its unique name.
    pub fn get(&self, name: &str) -> Result<SpriteId, RegistryError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::unknown_name(name))
    }

    /// Read access to a live sprite's record.
    pub fn sprite(&self, id: SpriteId) -> Result<&Sprite, RegistryError> {
        self.sprites.get(&id).ok_or_else(|| RegistryError::dead(id))
    }

    pub fn position(&self, id: SpriteId) -> Result<Position, RegistryError> {
        self.sprite(id).map(Sprite::position)
    }

    /// Replace a sprite's glyph. Affects rendering only, no index involved.
    pub fn set_glyph(&mut self, id: SpriteId, glyph: char) -> Result<(), RegistryError> {
        let sprite = self.sprites.get_mut(&id).ok_or_else(|| RegistryError::dead(id))?;
        sprite.glyph = glyph;
        Ok(())
    }

    /// Move a sprite to an absolute position.
    ///
    /// This is the single write path for positions: the stored field and the
    /// position index are updated together, so they cannot drift apart.
    pub fn set_position(&mut self, id: SpriteId, position: Position) -> Result<(), RegistryError> {
        let sprite = self.sprites.get_mut(&id).ok_or_else(|| RegistryError::dead(id))?;
        sprite.position = position;
        self.by_position.insert(id, position);
        Ok(())
    }

    /// Move a sprite by a delta.
    pub fn translate(&mut self, id: SpriteId, dx: i32, dy: i32) -> Result<(), RegistryError> {
        let current = self.position(id)?;
        self.set_position(id, current + Position::new(dx, dy))
    }

    pub fn set_x(&mut self, id: SpriteId, x: i32) -> Result<(), RegistryError> {
        let current = self.position(id)?;
        self.set_position(id, Position::new(x, current.y))
    }

    pub fn set_y(&mut self, id: SpriteId, y: i32) -> Result<(), RegistryError> {
        let current = self.position(id)?;
        self.set_position(id, Position::new(current.x, y))
    }

    /// Rename a sprite, applying the same collision rule as registration.
    ///
    /// Returns the name actually applied.
    pub fn rename(&mut self, id: SpriteId, requested_name: &str) -> Result<&str, RegistryError> {
        if !self.sprites.contains_key(&id) {
            return Err(RegistryError::dead(id));
        }

        let old_name = self.sprites[&id].name.clone();
        self.by_name.remove(&old_name);

        let name = self.resolve_name(requested_name, id);
        self.by_name.insert(name.clone(), id);

        let sprite = self.sprites.get_mut(&id).expect("checked above");
        sprite.name = name;
        Ok(&sprite.name)
    }

    /// Destroy a sprite, removing it from all four indices.
    ///
    /// The group bucket is dropped with its last member, so a later broadcast
    /// on that tag fails with `GroupNotFound`. Destroying an already-destroyed
    /// sprite is a caller error and reports `NotFound`.
    pub fn destroy(&mut self, id: SpriteId) -> Result<(), RegistryError> {
        let sprite = self.sprites.remove(&id).ok_or_else(|| RegistryError::dead(id))?;

        self.by_name.remove(&sprite.name);
        self.by_position.remove(&id);
        self.order.retain(|&other| other != id);

        if let Some(tag) = &sprite.group {
            if let Some(bucket) = self.by_group.get_mut(tag) {
                bucket.retain(|&other| other != id);
                if bucket.is_empty() {
                    self.by_group.remove(tag);
                }
            }
        }

        Ok(())
    }

    /// Every live sprite whose indexed position equals `position`.
    ///
    /// Order is unspecified; callers may rely on membership and count only.
    pub fn sprites_at(&self, position: Position) -> Vec<SpriteId> {
        self.by_position
            .iter()
            .filter(|(_, &at)| at == position)
            .map(|(&id, _)| id)
            .collect()
    }

    /// Sprites sharing `id`'s indexed position, excluding `id` itself.
    ///
    /// Exclusion is by identity, not by group: two sprites of the same group
    /// do report each other.
    pub fn colliding_sprites(&self, id: SpriteId) -> Result<Vec<SpriteId>, RegistryError> {
        let position = self.position(id)?;
        Ok(self
            .sprites_at(position)
            .into_iter()
            .filter(|&other| other != id)
            .collect())
    }

    /// Distinct group tags among the sprites colliding with `id`.
    pub fn colliding_groups(&self, id: SpriteId) -> Result<Vec<String>, RegistryError> {
        let mut tags: Vec<String> = Vec::new();
        for other in self.colliding_sprites(id)? {
            if let Some(tag) = self.sprites[&other].group() {
                if !tags.iter().any(|known| known == tag) {
                    tags.push(tag.to_owned());
                }
            }
        }
        Ok(tags)
    }

    /// Whether `tag` currently has at least one member.
    pub fn has_group(&self, tag: &str) -> bool {
        self.by_group.contains_key(tag)
    }

    /// Current members of `tag` in registration order.
    pub fn group_members(&self, tag: &str) -> Result<&[SpriteId], RegistryError> {
        self.by_group
            .get(tag)
            .map(Vec::as_slice)
            .ok_or_else(|| RegistryError::GroupNotFound(tag.to_owned()))
    }

    /// Apply `command` to every current member of `tag`.
    ///
    /// The member list is snapshotted before the first application, so a
    /// command that destroys siblings (or the whole group) cannot corrupt
    /// iteration: members destroyed mid-broadcast are skipped, and members
    /// added mid-broadcast are not picked up. Returns the number of sprites
    /// the command was applied to.
    pub fn broadcast(&mut self, tag: &str, command: Command) -> Result<usize, RegistryError> {
        let snapshot = self
            .by_group
            .get(tag)
            .cloned()
            .ok_or_else(|| RegistryError::GroupNotFound(tag.to_owned()))?;

        let mut reached = 0;
        for id in snapshot {
            if !self.sprites.contains_key(&id) {
                continue;
            }
            match command {
                Command::Translate { dx, dy } => self.translate(id, dx, dy)?,
                Command::MoveTo(position) => self.set_position(id, position)?,
                Command::SetGlyph(glyph) => self.set_glyph(id, glyph)?,
                Command::Destroy => self.destroy(id)?,
            }
            reached += 1;
        }
        Ok(reached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    /// Cross-checks the invariants the module docs promise.
    fn check_indices(reg: &Registry) {
        assert_eq!(reg.order.len(), reg.sprites.len());
        assert_eq!(reg.by_name.len(), reg.sprites.len());
        assert_eq!(reg.by_position.len(), reg.sprites.len());

        for (id, sprite) in reg.iter() {
            assert_eq!(reg.by_name[sprite.name()], id);
            assert_eq!(reg.by_position[&id], sprite.position());
        }
        for (tag, bucket) in &reg.by_group {
            assert!(!bucket.is_empty(), "empty bucket for {tag:?}");
            for id in bucket {
                assert_eq!(reg.sprites[id].group(), Some(tag.as_str()));
            }
        }
    }

    #[test]
    fn register_fills_all_indices() {
        let mut reg = Registry::new();
        let id = reg.register('@', at(1, 2), "player", Some("crew"));

        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get("player").unwrap(), id);
        assert_eq!(reg.position(id).unwrap(), at(1, 2));
        assert!(reg.has_group("crew"));
        check_indices(&reg);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut reg = Registry::new();
        let a = reg.register('a', at(0, 0), "a", None);
        reg.destroy(a).unwrap();
        let b = reg.register('b', at(0, 0), "b", None);
        assert_ne!(a, b);
    }

    #[test]
    fn iteration_is_registration_order() {
        let mut reg = Registry::new();
        let a = reg.register('a', at(0, 0), "a", None);
        let b = reg.register('b', at(0, 0), "b", None);
        let c = reg.register('c', at(0, 0), "c", None);
        reg.destroy(b).unwrap();
        let ids: Vec<_> = reg.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn destroy_keeps_indices_consistent() {
        let mut reg = Registry::new();
        let a = reg.register('a', at(0, 0), "a", Some("g"));
        let b = reg.register('b', at(0, 1), "b", Some("g"));

        reg.destroy(a).unwrap();
        check_indices(&reg);
        assert!(reg.has_group("g"));

        reg.destroy(b).unwrap();
        check_indices(&reg);
        assert!(!reg.has_group("g"));
    }

    #[test]
    fn rename_collision_gets_id_suffix() {
        let mut reg = Registry::new();
        let _a = reg.register('a', at(0, 0), "taken", None);
        let b = reg.register('b', at(0, 0), "other", None);

        let applied = reg.rename(b, "taken").unwrap().to_owned();
        assert_ne!(applied, "taken");
        assert!(applied.starts_with("taken@"));
        assert_eq!(reg.get(&applied).unwrap(), b);
        assert!(reg.get("other").is_err());
        check_indices(&reg);
    }

    #[test]
    fn derived_name_collision_is_extended_not_overwritten() {
        let mut reg = Registry::new();
        // id 2 will be the third registration; take its derived spelling
        // "wall@2" up front so the suffix itself collides.
        let wall = reg.register('w', at(0, 0), "wall", None);
        let squatter = reg.register('s', at(1, 0), "wall@2", None);
        let late = reg.register('l', at(2, 0), "wall", None);

        assert_eq!(reg.get("wall").unwrap(), wall);
        assert_eq!(reg.get("wall@2").unwrap(), squatter);

        let late_name = reg.sprites[&late].name().to_owned();
        assert_ne!(late_name, "wall");
        assert_ne!(late_name, "wall@2");
        assert_eq!(reg.get(&late_name).unwrap(), late);
        check_indices(&reg);
    }

    #[test]
    fn broadcast_snapshot_survives_destroy_of_members() {
        let mut reg = Registry::new();
        for i in 0..4 {
            reg.register('x', at(i, 0), &format!("x{i}"), Some("doomed"));
        }

        let reached = reg.broadcast("doomed", Command::Destroy).unwrap();
        assert_eq!(reached, 4);
        assert!(!reg.has_group("doomed"));
        assert!(reg.is_empty());
        check_indices(&reg);
    }

    #[test]
    fn stale_handle_fails_fast() {
        let mut reg = Registry::new();
        let id = reg.register('a', at(0, 0), "a", None);
        reg.destroy(id).unwrap();

        assert!(matches!(reg.destroy(id), Err(RegistryError::NotFound(_))));
        assert!(matches!(reg.set_position(id, at(1, 1)), Err(RegistryError::NotFound(_))));
        assert!(matches!(reg.rename(id, "z"), Err(RegistryError::NotFound(_))));
    }
}
