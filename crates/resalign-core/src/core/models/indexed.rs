use super::residue_key::ResidueKey;

/// Dense storage with one slot per residue key in `1..=max_key`.
///
/// Slots are addressed directly by `key - 1`, so inserting or looking up a
/// residue never searches. The container grows to the largest key it is
/// asked to hold; every slot below it is filled with `T::default()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueIndexed<T> {
    slots: Vec<T>,
}

impl<T> Default for ResidueIndexed<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T: Default> ResidueIndexed<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot for `key`, growing the container first if needed.
    pub fn slot_mut(&mut self, key: ResidueKey) -> &mut T {
        let index = key.index();
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, T::default);
        }
        &mut self.slots[index]
    }

    /// Extends the container so that `max_key` has a slot.
    pub fn grow_to(&mut self, max_key: ResidueKey) {
        let len = max_key.index() + 1;
        if len > self.slots.len() {
            self.slots.resize_with(len, T::default);
        }
    }
}

impl<T> ResidueIndexed<T> {
    pub fn get(&self, key: ResidueKey) -> Option<&T> {
        self.slots.get(key.index())
    }

    pub fn max_key(&self) -> Option<ResidueKey> {
        self.slots
            .len()
            .checked_sub(1)
            .map(ResidueKey::from_index)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn into_slots(self) -> Vec<T> {
        self.slots
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResidueKey, &T)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| (ResidueKey::from_index(index), slot))
    }
}
