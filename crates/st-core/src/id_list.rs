//! Id-keyed entity list.
//!
//! Every persisted entity has an integer id that is unique within its list.
//! [`IdObjectList`] owns the entries, hands out unused ids and keeps dated
//! entries in chronological order.

use chrono::NaiveDateTime;

/// An entity identified by an integer id.
pub trait IdObject {
    /// The entity id.
    fn id(&self) -> i32;

    /// Sort key for lists that keep entries in chronological order.
    ///
    /// Entities without a timestamp return `None` and keep insertion order.
    fn sort_key(&self) -> Option<NaiveDateTime> {
        None
    }
}

/// An ordered list of entities with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct IdObjectList<T> {
    entries: Vec<T>,
}

impl<T> Default for IdObjectList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: IdObject> IdObjectList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from entries, replacing duplicates by id (last wins).
    pub fn from_entries(entries: impl IntoIterator<Item = T>) -> Self {
        let mut list = Self::new();
        for entry in entries {
            list.set(entry);
        }
        list
    }

    /// Returns the smallest positive id not used by any entry.
    pub fn new_id(&self) -> i32 {
        let mut used: Vec<i32> = self.entries.iter().map(IdObject::id).collect();
        used.sort_unstable();

        let mut candidate = 1;
        for id in used {
            if id == candidate {
                candidate += 1;
            } else if id > candidate {
                break;
            }
        }
        candidate
    }

    /// Looks up an entry by id.
    pub fn get_by_id(&self, id: i32) -> Option<&T> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Returns `true` if an entry with this id exists.
    pub fn contains(&self, id: i32) -> bool {
        self.get_by_id(id).is_some()
    }

    /// Inserts the entry, replacing an existing entry with the same id.
    ///
    /// Dated entries are kept ordered by timestamp, then by id.
    pub fn set(&mut self, entry: T) {
        if let Some(pos) = self.entries.iter().position(|e| e.id() == entry.id()) {
            self.entries.remove(pos);
        }

        match entry.sort_key() {
            Some(key) => {
                let id = entry.id();
                let pos = self
                    .entries
                    .iter()
                    .position(|e| e.sort_key().is_some_and(|k| (k, e.id()) > (key, id)))
                    .unwrap_or(self.entries.len());
                self.entries.insert(pos, entry);
            }
            None => self.entries.push(entry),
        }
    }

    /// Removes and returns the entry with the given id.
    pub fn remove_by_id(&mut self, id: i32) -> Option<T> {
        let pos = self.entries.iter().position(|e| e.id() == id)?;
        Some(self.entries.remove(pos))
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns all ids in list order.
    pub fn ids(&self) -> Vec<i32> {
        self.entries.iter().map(IdObject::id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Returns the entries as a slice in list order.
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }
}

impl<'a, T: IdObject> IntoIterator for &'a IdObjectList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Plain(i32);

    impl IdObject for Plain {
        fn id(&self) -> i32 {
            self.0
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Dated(i32, NaiveDateTime);

    impl IdObject for Dated {
        fn id(&self) -> i32 {
            self.0
        }

        fn sort_key(&self) -> Option<NaiveDateTime> {
            Some(self.1)
        }
    }

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn new_id_on_empty_list_is_one() {
        let list: IdObjectList<Plain> = IdObjectList::new();
        assert_eq!(list.new_id(), 1);
    }

    #[test]
    fn new_id_fills_gaps() {
        let list = IdObjectList::from_entries([Plain(1), Plain(2), Plain(4)]);
        assert_eq!(list.new_id(), 3);

        let list = IdObjectList::from_entries([Plain(2), Plain(3)]);
        assert_eq!(list.new_id(), 1);

        let list = IdObjectList::from_entries([Plain(3), Plain(1), Plain(2)]);
        assert_eq!(list.new_id(), 4);
    }

    #[test]
    fn set_replaces_same_id() {
        let mut list = IdObjectList::new();
        list.set(Dated(1, day(3)));
        list.set(Dated(1, day(5)));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get_by_id(1), Some(&Dated(1, day(5))));
    }

    #[test]
    fn dated_entries_stay_sorted() {
        let mut list = IdObjectList::new();
        list.set(Dated(1, day(10)));
        list.set(Dated(2, day(2)));
        list.set(Dated(3, day(6)));
        assert_eq!(list.ids(), vec![2, 3, 1]);

        // Moving an entry in time re-sorts it.
        list.set(Dated(2, day(20)));
        assert_eq!(list.ids(), vec![3, 1, 2]);
    }

    #[test]
    fn equal_timestamps_are_ordered_by_id() {
        let mut list = IdObjectList::new();
        list.set(Dated(5, day(1)));
        list.set(Dated(4, day(1)));
        list.set(Dated(6, day(1)));
        assert_eq!(list.ids(), vec![4, 5, 6]);

        // Same order whichever way the entries arrive.
        let reversed =
            IdObjectList::from_entries([Dated(6, day(1)), Dated(5, day(1)), Dated(4, day(1))]);
        assert_eq!(reversed, list);
    }

    #[test]
    fn plain_entries_keep_insertion_order() {
        let list = IdObjectList::from_entries([Plain(3), Plain(1), Plain(2)]);
        assert_eq!(list.ids(), vec![3, 1, 2]);
    }

    #[test]
    fn remove_by_id() {
        let mut list = IdObjectList::from_entries([Plain(1), Plain(2)]);
        assert_eq!(list.remove_by_id(1), Some(Plain(1)));
        assert_eq!(list.remove_by_id(1), None);
        assert!(!list.contains(1));
        assert!(list.contains(2));
        list.clear();
        assert!(list.is_empty());
    }
}
