//! Move and move-to tests

use lexorder::{Error, ListOrderer, OrderError, OrderedCollection, Side, VecCollection};

use crate::helpers::*;

#[test]
fn test_move_forward_onto_neighbour() {
    let mut list = build_list(&["a", "b", "c"]);
    let (b, c) = (order_of(list.collection(), "b"), order_of(list.collection(), "c"));

    let key = list.move_item(&"a", &"b").unwrap().unwrap();

    assert_eq!(ordered_ids(&list), ["b", "a", "c"]);
    assert!(b < key && key < c);
    assert_eq!(order_of(list.collection(), "a"), key);
}

#[test]
fn test_move_forward_onto_last() {
    let mut list = build_list(&["a", "b", "c"]);
    let c = order_of(list.collection(), "c");

    let key = list.move_item(&"a", &"c").unwrap().unwrap();

    // The moved item takes the target's slot and the target shifts up.
    assert_eq!(ordered_ids(&list), ["b", "c", "a"]);
    assert!(key > c);
}

#[test]
fn test_move_backward() {
    let mut list = build_list(&["a", "b", "c", "d"]);
    let (a, b) = (order_of(list.collection(), "a"), order_of(list.collection(), "b"));

    list.move_item(&"d", &"b").unwrap();
    assert_eq!(ordered_ids(&list), ["a", "d", "b", "c"]);
    let d = order_of(list.collection(), "d");
    assert!(a < d && d < b);

    list.move_item(&"c", &"a").unwrap();
    assert_eq!(ordered_ids(&list), ["c", "a", "d", "b"]);
}

#[test]
fn test_move_writes_exactly_one_key() {
    let mut list = build_list(&["a", "b", "c", "d", "e"]);
    let before: Vec<String> = ["b", "c", "d", "e"]
        .into_iter()
        .map(|id| order_of(list.collection(), id))
        .collect();
    let writes = list.collection().writes;

    list.move_item(&"a", &"d").unwrap();

    assert_eq!(list.collection().writes, writes + 1);
    let after: Vec<String> = ["b", "c", "d", "e"]
        .into_iter()
        .map(|id| order_of(list.collection(), id))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_move_missing_item_is_noop() {
    let mut list = build_list(&["a", "b", "c"]);
    let snapshot = list.collection().inner.clone();
    let writes = list.collection().writes;

    assert_eq!(list.move_item(&"missing", &"c").unwrap(), None);
    assert_eq!(list.move_to(&"missing", &"c", Side::Before).unwrap(), None);

    assert_eq!(list.collection().inner, snapshot);
    assert_eq!(list.collection().writes, writes);
}

#[test]
fn test_move_missing_target_is_error() {
    let mut list = build_list(&["a", "b", "c"]);
    let snapshot = list.collection().inner.clone();

    let err = list.move_item(&"a", &"missing").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.module(), "orderer");
    match &err {
        Error::Order(OrderError::TargetNotFound { id }) => assert_eq!(id, "\"missing\""),
        other => panic!("expected TargetNotFound, got {other:?}"),
    }

    assert!(list.move_to(&"a", &"missing", Side::After).is_err());
    assert_eq!(list.collection().inner, snapshot);
}

#[test]
fn test_move_onto_itself_keeps_position() {
    let mut list = build_list(&["a", "b", "c"]);
    list.move_item(&"b", &"b").unwrap();
    assert_eq!(ordered_ids(&list), ["a", "b", "c"]);
}

#[test]
fn test_move_to_sides() {
    let mut list = build_list(&["a", "b", "c", "d"]);

    list.move_to(&"d", &"b", Side::Before).unwrap();
    assert_eq!(ordered_ids(&list), ["a", "d", "b", "c"]);

    list.move_to(&"a", &"c", Side::After).unwrap();
    assert_eq!(ordered_ids(&list), ["d", "b", "c", "a"]);

    list.move_to(&"a", &"d", Side::Before).unwrap();
    assert_eq!(ordered_ids(&list), ["a", "d", "b", "c"]);

    // Already in place; the key is regenerated but the order holds.
    let key = list.move_to(&"a", &"d", Side::Before).unwrap();
    assert!(key.is_some());
    assert_eq!(ordered_ids(&list), ["a", "d", "b", "c"]);
}

#[test]
fn test_move_to_ignores_direction_of_travel() {
    let mut list = build_list(&["a", "b", "c"]);
    // Moving down but asking for the slot before the target.
    list.move_to(&"a", &"c", Side::Before).unwrap();
    assert_eq!(ordered_ids(&list), ["b", "a", "c"]);
}

#[test]
fn test_orderer_over_borrowed_collection() {
    let mut items: VecCollection<(&str, String)> = VecCollection::new();
    {
        let mut orderer = ListOrderer::new(&mut items);
        for id in ["x", "y", "z"] {
            let key = orderer.new_trailing_key().unwrap();
            orderer.collection_mut().push((id, key));
        }
        orderer.move_item(&"z", &"x").unwrap();
    }

    let mut sorted: Vec<_> = items.items().collect();
    sorted.sort_by(|a, b| a.1.cmp(&b.1));
    let ids: Vec<&str> = sorted.iter().map(|item| item.0).collect();
    assert_eq!(ids, ["z", "x", "y"]);
}
