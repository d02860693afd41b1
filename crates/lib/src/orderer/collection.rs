//! Caller-side list abstraction.
//!
//! The orderer never owns items. It enumerates them, reads their ids and keys,
//! and hands one new key back through [`OrderedCollection::set_item_order`].

use std::fmt::Debug;

use tracing::debug;

/// The capabilities [`ListOrderer`](super::ListOrderer) needs from a list.
///
/// Enumeration order does not matter; the orderer always sorts by key.
pub trait OrderedCollection {
    /// The stored item type.
    type Item;
    /// Identifier, unique within the collection.
    type Id: Clone + PartialEq + Debug;

    /// Enumerates every item.
    fn items(&self) -> impl Iterator<Item = &Self::Item>;

    /// Reads an item's identifier.
    fn item_id(&self, item: &Self::Item) -> Self::Id;

    /// Reads an item's order key.
    fn item_order<'a>(&self, item: &'a Self::Item) -> &'a str;

    /// Assigns a new order key to the item with `id`.
    ///
    /// The next call to [`items`](Self::items) must observe the new key.
    fn set_item_order(&mut self, id: &Self::Id, order: String);
}

impl<C: OrderedCollection> OrderedCollection for &mut C {
    type Item = C::Item;
    type Id = C::Id;

    fn items(&self) -> impl Iterator<Item = &Self::Item> {
        (**self).items()
    }

    fn item_id(&self, item: &Self::Item) -> Self::Id {
        (**self).item_id(item)
    }

    fn item_order<'a>(&self, item: &'a Self::Item) -> &'a str {
        (**self).item_order(item)
    }

    fn set_item_order(&mut self, id: &Self::Id, order: String) {
        (**self).set_item_order(id, order)
    }
}

/// An item that carries its own id and order key.
pub trait Ordered {
    /// Identifier, unique within a list.
    type Id: Clone + PartialEq + Debug;

    fn id(&self) -> Self::Id;
    fn order(&self) -> &str;
    fn set_order(&mut self, order: String);
}

impl<K: Clone + PartialEq + Debug> Ordered for (K, String) {
    type Id = K;

    fn id(&self) -> K {
        self.0.clone()
    }

    fn order(&self) -> &str {
        &self.1
    }

    fn set_order(&mut self, order: String) {
        self.1 = order;
    }
}

/// A `Vec`-backed [`OrderedCollection`].
///
/// Items are kept in insertion order; use
/// [`ListOrderer::ordered_items`](super::ListOrderer::ordered_items) for list order.
///
/// # Examples
///
/// ```
/// use lexorder::{OrderedCollection, VecCollection};
///
/// let mut list = VecCollection::from(vec![("a", "a0".to_string())]);
/// list.set_item_order(&"a", "a1".to_string());
/// assert_eq!(list.get(&"a").map(|item| item.1.as_str()), Some("a1"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VecCollection<T> {
    items: Vec<T>,
}

impl<T> Default for VecCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> VecCollection<T> {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item. The caller is responsible for giving it a fresh key.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Ordered> VecCollection<T> {
    /// Looks up an item by id.
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == *id)
    }

    /// Removes an item by id, returning it.
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == *id)?;
        Some(self.items.remove(index))
    }
}

impl<T> From<Vec<T>> for VecCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Ordered> OrderedCollection for VecCollection<T> {
    type Item = T;
    type Id = T::Id;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    fn item_id(&self, item: &T) -> T::Id {
        item.id()
    }

    fn item_order<'a>(&self, item: &'a T) -> &'a str {
        item.order()
    }

    fn set_item_order(&mut self, id: &T::Id, order: String) {
        match self.items.iter_mut().find(|item| item.id() == *id) {
            Some(item) => item.set_order(order),
            None => debug!(?id, "No item to assign order to"),
        }
    }
}
