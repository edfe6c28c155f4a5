use std::collections::BTreeMap;

use bitflags::bitflags;

bitflags! {
    /// Views an entity belongs to. An entity is owned once, by the arena;
    /// groups only filter it.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Groups: u8 {
        const BACKGROUND = 1 << 0;
        const GROUND = 1 << 1;
        const COLLIDE = 1 << 2;
    }
}

/// Stable handle into an [`Arena`]. Never reused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

#[derive(Debug)]
struct Slot<T> {
    groups: Groups,
    value: T,
}

/// Owner of every live entity. Iteration follows insertion order.
#[derive(Debug)]
pub struct Arena<T> {
    next_id: u64,
    slots: BTreeMap<EntityId, Slot<T>>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            slots: BTreeMap::new(),
        }
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, groups: Groups, value: T) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.slots.insert(id, Slot { groups, value });
        id
    }

    pub fn remove(&mut self, id: EntityId) -> Option<T> {
        self.slots.remove(&id).map(|slot| slot.value)
    }

    #[cfg(test)]
    pub fn contains(&self, id: EntityId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.slots.get(&id).map(|slot| &slot.value)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.slots.get_mut(&id).map(|slot| &mut slot.value)
    }

    #[cfg(test)]
    pub fn groups(&self, id: EntityId) -> Option<Groups> {
        self.slots.get(&id).map(|slot| slot.groups)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.slots.iter().map(|(&id, slot)| (id, &slot.value))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut T)> {
        self.slots.iter_mut().map(|(&id, slot)| (id, &mut slot.value))
    }

    /// Members of any of `groups`, in insertion order.
    pub fn in_group(&self, groups: Groups) -> impl Iterator<Item = (EntityId, &T)> {
        self.slots
            .iter()
            .filter(move |(_, slot)| slot.groups.intersects(groups))
            .map(|(&id, slot)| (id, &slot.value))
    }

    #[cfg(test)]
    pub fn ids_in_group(&self, groups: Groups) -> Vec<EntityId> {
        self.in_group(groups).map(|(id, _)| id).collect()
    }

    pub fn retain(&mut self, mut keep: impl FnMut(EntityId, &T) -> bool) {
        self.slots.retain(|&id, slot| keep(id, &slot.value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_never_reused() {
        let mut arena = Arena::new();
        let a = arena.insert(Groups::COLLIDE, "a");
        arena.remove(a);
        let b = arena.insert(Groups::COLLIDE, "b");
        assert_ne!(a, b);
        assert!(!arena.contains(a));
        assert_eq!(arena.get(b), Some(&"b"));
    }

    #[test]
    fn groups_are_filtered_views_in_insertion_order() {
        let mut arena = Arena::new();
        arena.insert(Groups::BACKGROUND, "sky");
        let ground = arena.insert(Groups::GROUND | Groups::COLLIDE, "ground");
        arena.insert(Groups::COLLIDE, "pig");
        arena.insert(Groups::COLLIDE, "log");

        let collide: Vec<_> = arena.in_group(Groups::COLLIDE).map(|(_, v)| *v).collect();
        assert_eq!(collide, ["ground", "pig", "log"]);
        assert_eq!(arena.ids_in_group(Groups::GROUND), vec![ground]);
        assert_eq!(arena.groups(ground), Some(Groups::GROUND | Groups::COLLIDE));
        assert_eq!(arena.len(), 4);
    }

    #[test]
    fn retain_drops_rejected_entities() {
        let mut arena = Arena::new();
        for v in 0..6 {
            arena.insert(Groups::COLLIDE, v);
        }
        arena.retain(|_, v| v % 2 == 0);
        let left: Vec<_> = arena.iter().map(|(_, v)| *v).collect();
        assert_eq!(left, [0, 2, 4]);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut arena = Arena::new();
        let id = arena.insert(Groups::empty(), 1);
        *arena.get_mut(id).unwrap() += 41;
        for (_, v) in arena.iter_mut() {
            *v += 0;
        }
        assert_eq!(arena.remove(id), Some(42));
        assert!(arena.is_empty());
    }
}
