//! # Item Store
//!
//! [`ItemStore`] owns a course's ordered item collection and is its single
//! source of truth. Every mutation goes through the methods here:
//!
//! 1. The next collection is built on the side.
//! 2. It is serialized and written to the [`DataStore`] under the course key.
//! 3. Only after the write succeeds does it replace the visible collection.
//!
//! A reader therefore never observes a half-applied change, and a failed
//! write leaves both the store and the in-memory view as they were.

use crate::error::{CourseError, Result};
use crate::model::{Item, ItemContent, ItemId, ItemPatch, NewItem};
use crate::reorder::{self, Move};
use crate::store::DataStore;
use tracing::{debug, info};

pub struct ItemStore<S: DataStore> {
    store: S,
    key: String,
    items: Vec<Item>,
}

impl<S: DataStore> ItemStore<S> {
    /// Reconstruct the collection stored under `key`. Missing state yields an
    /// empty course; malformed state is an error.
    pub fn load(store: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let items: Vec<Item> = match store.read(&key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(CourseError::Serialization)?,
            None => Vec::new(),
        };
        info!(key = %key, count = items.len(), "loaded course items");
        Ok(Self { store, key, items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn data_store(&self) -> &S {
        &self.store
    }

    /// Add an item at the end of the course and return its id.
    pub fn append(&mut self, new: NewItem) -> Result<ItemId> {
        let id = match new.id {
            Some(id) if self.find(id).is_some() => return Err(CourseError::DuplicateId(id)),
            Some(id) => id,
            None => self.next_id(ItemId::now())?,
        };

        let mut next = self.items.clone();
        next.push(Item {
            id,
            name: new.name,
            content: new.content,
        });
        self.commit(next)?;
        debug!(id = %id, "appended item");
        Ok(id)
    }

    /// Replace fields on the item at `index`. The id and kind never change.
    pub fn update_at(&mut self, index: usize, patch: ItemPatch) -> Result<&Item> {
        let current = self.items.get(index).ok_or(CourseError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })?;
        let mut updated = current.clone();

        if let Some(name) = patch.name {
            updated.name = name;
        }
        if let Some(new_url) = patch.url {
            match &mut updated.content {
                ItemContent::Link { url } => *url = new_url,
                _ => {
                    return Err(CourseError::KindMismatch {
                        kind: updated.kind(),
                        field: "url",
                    })
                }
            }
        }
        if let Some(new_file) = patch.file {
            match &mut updated.content {
                ItemContent::File { file } => *file = new_file,
                _ => {
                    return Err(CourseError::KindMismatch {
                        kind: updated.kind(),
                        field: "file",
                    })
                }
            }
        }

        let mut next = self.items.clone();
        next[index] = updated;
        self.commit(next)?;
        debug!(index, "updated item");
        Ok(&self.items[index])
    }

    /// Drop the item with `id`. Absent ids are not an error and cause no write.
    pub fn remove_by_id(&mut self, id: ItemId) -> Result<Option<Item>> {
        let Some(index) = self.position_of(id) else {
            debug!(id = %id, "remove skipped, no such item");
            return Ok(None);
        };

        let mut next = self.items.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        debug!(id = %id, index, "removed item");
        Ok(Some(removed))
    }

    /// Drop every item whose id is in `ids` with a single write, so either
    /// all of them go or none do. Removed items come back in `ids` order;
    /// absent and repeated ids are skipped.
    pub fn remove_all_by_id(&mut self, ids: &[ItemId]) -> Result<Vec<Item>> {
        let mut next = self.items.clone();
        let mut removed = Vec::new();
        for &id in ids {
            if let Some(index) = next.iter().position(|item| item.id == id) {
                removed.push(next.remove(index));
            }
        }
        if removed.is_empty() {
            return Ok(removed);
        }

        self.commit(next)?;
        debug!(count = removed.len(), "removed items");
        Ok(removed)
    }

    /// Move the item at `source` to `destination` (both 0-based). A missing
    /// destination abandons the move. Returns whether the order changed.
    pub fn reorder(&mut self, source: usize, destination: Option<usize>) -> Result<bool> {
        let mv = Move {
            source,
            destination,
        };
        match reorder::apply(&self.items, mv)? {
            Some(next) => {
                self.commit(next)?;
                debug!(source, ?destination, "reordered items");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn next_id(&self, now: ItemId) -> Result<ItemId> {
        match self.items.iter().map(|item| item.id).max() {
            Some(max) if max >= now => max
                .0
                .checked_add(1)
                .map(ItemId)
                .ok_or(CourseError::IdsExhausted(max)),
            _ => Ok(now),
        }
    }

    fn commit(&mut self, next: Vec<Item>) -> Result<()> {
        let json = serde_json::to_string(&next).map_err(CourseError::Serialization)?;
        self.store.write(&self.key, &json)?;
        debug!(key = %self.key, count = next.len(), bytes = json.len(), "persisted items");
        self.items = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FileRef, ItemKind};
    use crate::store::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::store::DEFAULT_KEY;

    fn empty() -> ItemStore<InMemoryStore> {
        ItemStore::load(InMemoryStore::new(), DEFAULT_KEY).unwrap()
    }

    fn names<S: DataStore>(items: &ItemStore<S>) -> Vec<&str> {
        items.items().iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn load_without_state_is_empty() {
        let items = empty();
        assert!(items.is_empty());
        assert_eq!(items.data_store().write_count(), 0);
    }

    #[test]
    fn load_reads_fixture_state() {
        let fixture = StoreFixture::new()
            .with_module("Week 1")
            .with_link("Syllabus", "http://x");
        let items = ItemStore::load(fixture.store, DEFAULT_KEY).unwrap();
        assert_eq!(names(&items), vec!["Week 1", "Syllabus"]);
        assert_eq!(items.get(1).unwrap().url(), Some("http://x"));
    }

    #[test]
    fn load_malformed_state_fails() {
        let fixture = StoreFixture::new().with_raw("{not json");
        let result = ItemStore::load(fixture.store, DEFAULT_KEY);
        assert!(matches!(result, Err(CourseError::Serialization(_))));
    }

    #[test]
    fn append_persists_and_assigns_ids() {
        let mut items = empty();
        let first = items.append(NewItem::module("Week 1")).unwrap();
        let second = items.append(NewItem::module("Week 2")).unwrap();

        assert!(second > first);
        assert_eq!(items.len(), 2);
        assert_eq!(items.data_store().write_count(), 2);

        let reloaded: Vec<Item> =
            serde_json::from_str(items.data_store().raw(DEFAULT_KEY).unwrap()).unwrap();
        assert_eq!(reloaded, items.items());
    }

    #[test]
    fn append_keeps_caller_supplied_id() {
        let mut items = empty();
        let id = items
            .append(NewItem::module("Week 1").with_id(ItemId(7)))
            .unwrap();
        assert_eq!(id, ItemId(7));
    }

    #[test]
    fn append_rejects_duplicate_id() {
        let mut items = empty();
        items
            .append(NewItem::module("Week 1").with_id(ItemId(7)))
            .unwrap();
        let result = items.append(NewItem::module("Week 2").with_id(ItemId(7)));
        assert!(matches!(result, Err(CourseError::DuplicateId(ItemId(7)))));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn generated_id_skips_past_future_ids() {
        let mut items = empty();
        let future = ItemId(i64::MAX / 2);
        items.append(NewItem::module("a").with_id(future)).unwrap();
        let id = items.append(NewItem::module("b")).unwrap();
        assert_eq!(id, ItemId(future.0 + 1));
    }

    #[test]
    fn generated_id_at_max_fails_without_write() {
        let mut items = empty();
        items
            .append(NewItem::module("last").with_id(ItemId(i64::MAX)))
            .unwrap();
        let writes = items.data_store().write_count();

        let result = items.append(NewItem::module("next"));

        assert!(matches!(result, Err(CourseError::IdsExhausted(ItemId(i64::MAX)))));
        assert_eq!(items.len(), 1);
        assert_eq!(items.data_store().write_count(), writes);
    }

    #[test]
    fn update_keeps_id_and_kind() {
        let fixture = StoreFixture::new().with_link("Syllabus", "http://x");
        let mut items = ItemStore::load(fixture.store, DEFAULT_KEY).unwrap();
        let before = items.get(0).unwrap().clone();

        let updated = items
            .update_at(0, ItemPatch::name("Course syllabus").with_url("http://y"))
            .unwrap();

        assert_eq!(updated.id, before.id);
        assert_eq!(updated.kind(), ItemKind::Link);
        assert_eq!(updated.name, "Course syllabus");
        assert_eq!(updated.url(), Some("http://y"));
    }

    #[test]
    fn update_rejects_fields_of_another_kind() {
        let fixture = StoreFixture::new().with_module("Week 1");
        let mut items = ItemStore::load(fixture.store, DEFAULT_KEY).unwrap();

        let result = items.update_at(0, ItemPatch::default().with_url("http://x"));
        assert!(matches!(
            result,
            Err(CourseError::KindMismatch {
                kind: ItemKind::Module,
                field: "url"
            })
        ));

        let file = FileRef {
            name: "a.pdf".into(),
            blob: "b".into(),
            size: 1,
        };
        assert!(items
            .update_at(0, ItemPatch::default().with_file(file))
            .is_err());
        assert_eq!(items.get(0).unwrap().name, "Week 1");
    }

    #[test]
    fn update_out_of_range() {
        let mut items = empty();
        let result = items.update_at(0, ItemPatch::name("x"));
        assert!(matches!(
            result,
            Err(CourseError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn remove_missing_id_leaves_store_untouched() {
        let fixture = StoreFixture::new().with_modules(2);
        let mut items = ItemStore::load(fixture.store, DEFAULT_KEY).unwrap();
        let raw_before = items.data_store().raw(DEFAULT_KEY).unwrap().to_string();
        let writes_before = items.data_store().write_count();

        assert_eq!(items.remove_by_id(ItemId(1)).unwrap(), None);

        assert_eq!(items.data_store().raw(DEFAULT_KEY).unwrap(), raw_before);
        assert_eq!(items.data_store().write_count(), writes_before);
    }

    #[test]
    fn reorder_and_back_restores_order() {
        let fixture = StoreFixture::new().with_modules(4);
        let mut items = ItemStore::load(fixture.store, DEFAULT_KEY).unwrap();
        let original = items.items().to_vec();

        assert!(items.reorder(1, Some(3)).unwrap());
        assert_eq!(names(&items), vec!["Week 1", "Week 3", "Week 4", "Week 2"]);
        assert!(items.reorder(3, Some(1)).unwrap());
        assert_eq!(items.items(), original.as_slice());
    }

    #[test]
    fn reorder_without_destination_does_not_write() {
        let fixture = StoreFixture::new().with_modules(2);
        let mut items = ItemStore::load(fixture.store, DEFAULT_KEY).unwrap();
        let writes_before = items.data_store().write_count();

        assert!(!items.reorder(0, None).unwrap());
        assert_eq!(items.data_store().write_count(), writes_before);
    }

    #[test]
    fn reorder_out_of_range_is_rejected() {
        let fixture = StoreFixture::new().with_modules(2);
        let mut items = ItemStore::load(fixture.store, DEFAULT_KEY).unwrap();
        assert!(items.reorder(0, Some(2)).is_err());
        assert_eq!(names(&items), vec!["Week 1", "Week 2"]);
    }

    #[test]
    fn remove_all_is_one_write() {
        let fixture = StoreFixture::new().with_modules(3);
        let mut items = ItemStore::load(fixture.store, DEFAULT_KEY).unwrap();
        let ids = [items.get(2).unwrap().id, ItemId(1), items.get(0).unwrap().id];
        let writes = items.data_store().write_count();

        let removed = items.remove_all_by_id(&ids).unwrap();

        let removed: Vec<_> = removed.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(removed, vec!["Week 3", "Week 1"]);
        assert_eq!(names(&items), vec!["Week 2"]);
        assert_eq!(items.data_store().write_count(), writes + 1);

        assert!(items.remove_all_by_id(&[ItemId(1)]).unwrap().is_empty());
        assert_eq!(items.data_store().write_count(), writes + 1);
    }

    #[test]
    fn failed_write_leaves_collection_unchanged() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let mut items = ItemStore::load(store, DEFAULT_KEY).unwrap();

        assert!(items.append(NewItem::module("Week 1")).is_err());
        assert!(items.is_empty());
    }

    #[test]
    fn course_scenario() {
        let mut items = empty();
        items.append(NewItem::module("Week 1")).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items.get(0).unwrap().kind(), ItemKind::Module);

        let link = items
            .append(NewItem::link("Syllabus", "http://x"))
            .unwrap();
        assert_eq!(names(&items), vec!["Week 1", "Syllabus"]);

        items.reorder(0, Some(1)).unwrap();
        let kinds: Vec<_> = items.items().iter().map(|i| i.kind()).collect();
        assert_eq!(kinds, vec![ItemKind::Link, ItemKind::Module]);

        items.remove_by_id(link).unwrap();
        assert_eq!(names(&items), vec!["Week 1"]);
        assert_eq!(items.get(0).unwrap().kind(), ItemKind::Module);
    }
}
