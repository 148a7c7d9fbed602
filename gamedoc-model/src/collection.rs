//! Named, positionally ordered entity lists.

/// An entity that can live in an [`EntityCollection`].
pub trait NamedEntity {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: &str);
}

/// Ordered list of named entities, owning each of them.
///
/// Positions are always `0..len()` and define iteration and save order.
/// Names are not required to be unique: lookups by name return the first
/// match. Cloning the collection deep-clones every entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCollection<T> {
    items: Vec<T>,
}

impl<T> Default for EntityCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: NamedEntity> EntityCollection<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_named(&self, name: &str) -> bool {
        self.position_of(name).is_some()
    }

    /// First entity named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.name() == name)
    }

    #[must_use]
    pub fn get_at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the first entity named `name`.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }

    /// Creates a default entity named `name` at `position`.
    ///
    /// Positions past the end append.
    pub fn insert_new(&mut self, name: &str, position: usize) -> &mut T
    where
        T: Default,
    {
        let mut item = T::default();
        item.set_name(name);
        self.insert(item, position)
    }

    /// Inserts a deep copy of `value` at `position`.
    pub fn insert_copy(&mut self, value: &T, position: usize) -> &mut T
    where
        T: Clone,
    {
        self.insert(value.clone(), position)
    }

    /// Inserts `value` at `position`, appending when out of range.
    pub fn insert(&mut self, value: T, position: usize) -> &mut T {
        let index = position.min(self.items.len());
        self.items.insert(index, value);
        &mut self.items[index]
    }

    /// Appends `value` at the end.
    pub fn push(&mut self, value: T) -> &mut T {
        self.insert(value, usize::MAX)
    }

    /// Removes the first entity named `name`. Returns false if none matched.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position_of(name) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Moves the entity at `old_index` to `new_index`, shifting the others.
    ///
    /// Does nothing if either index is out of range.
    pub fn move_item(&mut self, old_index: usize, new_index: usize) {
        if old_index >= self.items.len() || new_index >= self.items.len() {
            return;
        }
        let item = self.items.remove(old_index);
        self.items.insert(new_index, item);
    }

    /// Exchanges two positions. Does nothing if either is out of range.
    pub fn swap(&mut self, first: usize, second: usize) {
        if first >= self.items.len() || second >= self.items.len() {
            return;
        }
        self.items.swap(first, second);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name()).collect()
    }
}

impl<'a, T> IntoIterator for &'a EntityCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: NamedEntity> FromIterator<T> for EntityCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
