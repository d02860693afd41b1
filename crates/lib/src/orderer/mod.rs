//! Reordering operations over a caller-owned list.
//!
//! Every write operation takes a fresh snapshot of the collection sorted by
//! key, picks the two neighbour keys that bound the requested position,
//! generates one key between them, and assigns it to the moved item. No other
//! item is touched, so the cost of a move does not grow with list length
//! beyond the snapshot sort.
//!
//! Missing items are handled on a best-effort basis, favouring availability
//! for interactive reordering:
//! - a moved item that is gone turns the call into a no-op
//! - `insert_before` with an unknown anchor appends instead
//! - a missing move target is reported as [`OrderError::TargetNotFound`]

pub mod collection;
pub mod errors;

pub use collection::{Ordered, OrderedCollection, VecCollection};
pub use errors::OrderError;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;
use crate::base::{Base62Digits, BaseBetween};
use crate::codec::KeyCodec;
use crate::codec::suffix::{OsRandomSuffix, SuffixSource};

/// Which side of a target item to place a moved item on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Before,
    After,
}

/// One item in a sorted snapshot.
struct Slot<'a, Id> {
    id: Id,
    order: &'a str,
}

/// Computes keys for list mutations and writes them back to the collection.
///
/// # Examples
///
/// ```
/// use lexorder::{ListOrderer, VecCollection};
///
/// # fn main() -> lexorder::Result<()> {
/// let mut orderer = ListOrderer::new(VecCollection::<(&str, String)>::new());
/// for id in ["a", "b", "c"] {
///     let key = orderer.new_trailing_key()?;
///     orderer.collection_mut().push((id, key));
/// }
///
/// // Dragging "a" onto "c" takes the slot "c" held; "c" shifts up.
/// orderer.move_item(&"a", &"c")?;
///
/// let ids: Vec<&str> = orderer.ordered_items().iter().map(|item| item.0).collect();
/// assert_eq!(ids, ["b", "c", "a"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ListOrderer<C, B = Base62Digits, S = OsRandomSuffix> {
    collection: C,
    codec: KeyCodec<B, S>,
}

impl<C: OrderedCollection> ListOrderer<C> {
    /// Creates an orderer using the default [`KeyCodec`].
    pub fn new(collection: C) -> Self {
        Self {
            collection,
            codec: KeyCodec::new(),
        }
    }
}

impl<C, B, S> ListOrderer<C, B, S>
where
    C: OrderedCollection,
    B: BaseBetween,
    S: SuffixSource,
{
    /// Creates an orderer with a specific codec.
    pub fn with_codec(collection: C, codec: KeyCodec<B, S>) -> Self {
        Self { collection, codec }
    }

    pub fn collection(&self) -> &C {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut C {
        &mut self.collection
    }

    pub fn codec(&self) -> &KeyCodec<B, S> {
        &self.codec
    }

    /// Consumes the orderer, returning the collection.
    pub fn into_inner(self) -> C {
        self.collection
    }

    /// Returns every item sorted ascending by key.
    ///
    /// The sort is recomputed on each call and is stable, so items with equal
    /// keys keep their enumeration order.
    pub fn ordered_items(&self) -> Vec<&C::Item> {
        let mut items: Vec<&C::Item> = self.collection.items().collect();
        items.sort_by(|a, b| {
            self.collection
                .item_order(a)
                .cmp(self.collection.item_order(b))
        });
        items
    }

    /// Key of the last item, or `None` for an empty list.
    pub fn largest_order(&self) -> Option<&str> {
        self.collection
            .items()
            .map(|item| self.collection.item_order(item))
            .max()
    }

    /// Key of the first item, or `None` for an empty list.
    pub fn smallest_order(&self) -> Option<&str> {
        self.collection
            .items()
            .map(|item| self.collection.item_order(item))
            .min()
    }

    /// Index of an item in sorted order.
    pub fn position_of(&self, id: &C::Id) -> Option<usize> {
        position(&self.snapshot(), id)
    }

    /// A key that sorts after every item, for appending.
    pub fn new_trailing_key(&self) -> Result<String> {
        self.codec.generate_between(self.largest_order(), None)
    }

    /// A key that sorts before every item, for prepending.
    pub fn new_leading_key(&self) -> Result<String> {
        self.codec.generate_between(None, self.smallest_order())
    }

    /// Moves `from_id` onto the position of `to_id`.
    ///
    /// The moved item takes the target's slot and the target shifts away from
    /// the direction of travel: moving down places the item just after the
    /// target, moving up places it just before.
    ///
    /// Returns the assigned key, or `None` if `from_id` is not in the list.
    ///
    /// # Errors
    /// Returns [`OrderError::TargetNotFound`] if `to_id` is not in the list.
    pub fn move_item(&mut self, from_id: &C::Id, to_id: &C::Id) -> Result<Option<String>> {
        let key = {
            let slots = self.snapshot();
            let Some(from) = position(&slots, from_id) else {
                debug!(?from_id, "Moved item not found, skipping");
                return Ok(None);
            };
            let to = target(&slots, to_id)?;
            let (lower, upper) = if from < to {
                (Some(slots[to].order), slots.get(to + 1).map(|slot| slot.order))
            } else {
                (
                    to.checked_sub(1).map(|i| slots[i].order),
                    Some(slots[to].order),
                )
            };
            self.codec.generate_between(lower, upper)?
        };
        Ok(Some(self.assign(from_id, key)))
    }

    /// Moves `from_id` to the given side of `to_id`, whatever the direction of travel.
    ///
    /// Returns the assigned key, or `None` if `from_id` is not in the list.
    ///
    /// # Errors
    /// Returns [`OrderError::TargetNotFound`] if `to_id` is not in the list.
    pub fn move_to(
        &mut self,
        from_id: &C::Id,
        to_id: &C::Id,
        side: Side,
    ) -> Result<Option<String>> {
        let key = {
            let slots = self.snapshot();
            if position(&slots, from_id).is_none() {
                debug!(?from_id, ?side, "Moved item not found, skipping");
                return Ok(None);
            }
            let to = target(&slots, to_id)?;
            let (lower, upper) = match side {
                Side::Before => (
                    to.checked_sub(1).map(|i| slots[i].order),
                    Some(slots[to].order),
                ),
                Side::After => (Some(slots[to].order), slots.get(to + 1).map(|slot| slot.order)),
            };
            self.codec.generate_between(lower, upper)?
        };
        Ok(Some(self.assign(from_id, key)))
    }

    /// Places `id` immediately before `before_id`, or at the end of the list
    /// when `before_id` is `None` or not in the list.
    ///
    /// Returns the assigned key, or `None` if `id` is not in the list.
    pub fn insert_before(
        &mut self,
        id: &C::Id,
        before_id: Option<&C::Id>,
    ) -> Result<Option<String>> {
        let key = {
            let slots = self.snapshot();
            if position(&slots, id).is_none() {
                debug!(?id, "Inserted item not found, skipping");
                return Ok(None);
            }
            let (lower, upper) = match before_id.and_then(|before_id| position(&slots, before_id)) {
                Some(before) => (
                    before.checked_sub(1).map(|i| slots[i].order),
                    Some(slots[before].order),
                ),
                None => {
                    if before_id.is_some() {
                        debug!(?id, ?before_id, "Anchor not found, appending instead");
                    }
                    let largest = slots
                        .iter()
                        .filter(|slot| slot.id != *id)
                        .map(|slot| slot.order)
                        .max();
                    (largest, None)
                }
            };
            self.codec.generate_between(lower, upper)?
        };
        Ok(Some(self.assign(id, key)))
    }

    /// Sorted view of ids and keys.
    fn snapshot(&self) -> Vec<Slot<'_, C::Id>> {
        self.ordered_items()
            .into_iter()
            .map(|item| Slot {
                id: self.collection.item_id(item),
                order: self.collection.item_order(item),
            })
            .collect()
    }

    fn assign(&mut self, id: &C::Id, key: String) -> String {
        debug!(?id, %key, "Assigning order key");
        self.collection.set_item_order(id, key.clone());
        key
    }
}

fn position<Id: PartialEq>(slots: &[Slot<'_, Id>], id: &Id) -> Option<usize> {
    slots.iter().position(|slot| slot.id == *id)
}

fn target<Id: PartialEq + std::fmt::Debug>(slots: &[Slot<'_, Id>], id: &Id) -> Result<usize> {
    position(slots, id).ok_or_else(|| {
        OrderError::TargetNotFound {
            id: format!("{id:?}"),
        }
        .into()
    })
}
