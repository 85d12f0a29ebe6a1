use super::repo::InsertError;
use std::sync::Mutex;
use tt_reminders_domain::{Entity, ID};

/// Useful functions for creating inmemory repositories

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    collection.push(val.clone());
}

/// Inserts `val` unless an existing item is considered a duplicate of it.
/// The check and the insert happen under the same lock.
pub fn insert_unique<T: Clone, F: Fn(&T, &T) -> bool>(
    val: &T,
    collection: &Mutex<Vec<T>>,
    is_duplicate: F,
) -> Result<(), InsertError> {
    let mut collection = collection.lock().unwrap();
    if collection.iter().any(|existing| is_duplicate(existing, val)) {
        return Err(InsertError::Conflict);
    }
    collection.push(val.clone());
    Ok(())
}

pub fn save<T: Clone + Entity<ID>>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    for item in collection.iter_mut() {
        if item.id() == val.id() {
            *item = val.clone();
        }
    }
}

pub fn find<T: Clone + Entity<ID>>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = collection.lock().unwrap();
    collection.iter().find(|item| item.id() == *val_id).cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    mut compare: F,
) -> Vec<T> {
    let collection = collection.lock().unwrap();
    let mut items = Vec::new();
    for item in collection.iter() {
        if compare(item) {
            items.push(item.clone());
        }
    }
    items
}

pub fn delete<T: Clone + Entity<ID>>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let mut collection = collection.lock().unwrap();
    let index = collection.iter().position(|item| item.id() == *val_id)?;
    Some(collection.remove(index))
}

pub fn find_and_delete_by<T: Clone, F: Fn(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    compare: F,
) -> Vec<T> {
    let mut collection = collection.lock().unwrap();
    let mut deleted_items = Vec::new();
    let mut i = 0;
    while i < collection.len() {
        if compare(&collection[i]) {
            deleted_items.push(collection.remove(i));
        } else {
            i += 1;
        }
    }
    deleted_items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item {
        id: ID,
        key: i32,
    }

    impl Entity<ID> for Item {
        fn id(&self) -> ID {
            self.id.clone()
        }
    }

    #[test]
    fn insert_unique_rejects_duplicates() {
        let collection = Mutex::new(vec![]);
        let item = Item {
            id: ID::default(),
            key: 1,
        };
        let same_key = Item {
            id: ID::default(),
            key: 1,
        };
        assert!(insert_unique(&item, &collection, |a, b| a.key == b.key).is_ok());
        assert!(matches!(
            insert_unique(&same_key, &collection, |a, b| a.key == b.key),
            Err(InsertError::Conflict)
        ));
        assert_eq!(find_by(&collection, |_| true), vec![item]);
    }

    #[test]
    fn find_and_delete_by_removes_all_matches() {
        let collection = Mutex::new(
            (0..5)
                .map(|key| Item {
                    id: ID::default(),
                    key,
                })
                .collect::<Vec<_>>(),
        );
        let deleted = find_and_delete_by(&collection, |i| i.key % 2 == 0);
        assert_eq!(deleted.iter().map(|i| i.key).collect::<Vec<_>>(), vec![0, 2, 4]);
        assert_eq!(
            find_by(&collection, |_| true).iter().map(|i| i.key).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }
}
