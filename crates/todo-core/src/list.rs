//! Todo Collection
//!
//! Ordered list of items. Every mutation returns a fresh snapshot instead of
//! changing the list in place; `None` means the call did not change anything
//! and nothing needs to be re-rendered or persisted.

use serde::{Deserialize, Serialize};

use crate::models::Item;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    items: Vec<Item>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a list read back from storage: blank entries are dropped,
    /// every row starts in view mode and repeated ids get a fresh one.
    pub(crate) fn restored(items: Vec<Item>) -> Self {
        let mut list = Self::new();
        for item in items {
            if item.text.trim().is_empty() {
                continue;
            }
            let id = if list.get(item.id).is_some() {
                let fresh = list.next_id(0);
                log::warn!("[STORAGE] duplicate id {} reassigned to {}", item.id, fresh);
                fresh
            } else {
                item.id
            };
            list.items.push(Item { id, is_editing: false, ..item });
        }
        list
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_complete).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.len() - self.completed_count()
    }

    /// Id for the next item: the clock reading, bumped past the newest id so
    /// two adds in the same millisecond never collide.
    pub fn next_id(&self, now_ms: u64) -> u64 {
        match self.items.iter().map(|item| item.id).max() {
            Some(last) => match last.checked_add(1) {
                Some(after) => now_ms.max(after),
                None => self.free_id_from(now_ms),
            },
            None => now_ms,
        }
    }

    /// First id at or after `start` (wrapping) that no item uses
    fn free_id_from(&self, start: u64) -> u64 {
        let mut id = start;
        while self.get(id).is_some() {
            id = id.wrapping_add(1);
        }
        id
    }

    // ========================
    // Mutations
    // ========================

    /// Append a new item with the trimmed text. Blank input is ignored.
    pub fn add(&self, raw_text: &str, now_ms: u64) -> Option<Self> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }
        let mut items = self.items.clone();
        items.push(Item::new(self.next_id(now_ms), text));
        Some(Self { items })
    }

    pub fn delete(&self, id: u64) -> Option<Self> {
        self.get(id)?;
        let items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        Some(Self { items })
    }

    pub fn toggle(&self, id: u64) -> Option<Self> {
        self.map_item(id, |item| item.is_complete = !item.is_complete)
    }

    pub fn toggle_editing(&self, id: u64) -> Option<Self> {
        self.map_item(id, |item| item.is_editing = !item.is_editing)
    }

    /// Replace the text and leave edit mode. Blank text is ignored so the
    /// stored text is never empty.
    pub fn edit(&self, id: u64, new_text: &str) -> Option<Self> {
        let text = new_text.trim();
        if text.is_empty() {
            return None;
        }
        self.map_item(id, |item| {
            item.text = text.to_string();
            item.is_editing = false;
        })
    }

    fn map_item(&self, id: u64, f: impl FnOnce(&mut Item)) -> Option<Self> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let mut items = self.items.clone();
        f(&mut items[index]);
        Some(Self { items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(texts: &[&str]) -> TodoList {
        let items = texts
            .iter()
            .enumerate()
            .map(|(i, text)| Item::new(100 + i as u64, *text))
            .collect();
        TodoList { items }
    }

    #[test]
    fn test_add_trims_and_appends() {
        let list = list_of(&["first"]);
        let added = list.add("  Walk dog \n", 5_000).unwrap();

        assert_eq!(added.len(), 2);
        let last = &added.items()[1];
        assert_eq!(last.text, "Walk dog");
        assert!(!last.is_complete);
        assert!(!last.is_editing);
        assert_eq!(added.items()[0].text, "first");
    }

    #[test]
    fn test_add_blank_is_noop() {
        let list = list_of(&["a"]);
        assert!(list.add("", 1).is_none());
        assert!(list.add("   ", 1).is_none());
        assert!(list.add("\t\n", 1).is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_next_id_uses_clock() {
        let list = list_of(&["a"]);
        assert_eq!(list.next_id(1_700_000_000_000), 1_700_000_000_000);
        assert_eq!(TodoList::new().next_id(42), 42);
    }

    #[test]
    fn test_same_tick_adds_get_distinct_ids() {
        let now = 1_700_000_000_000;
        let list = TodoList::new().add("one", now).unwrap();
        let list = list.add("two", now).unwrap();
        let list = list.add("three", now).unwrap();

        let ids: Vec<u64> = list.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![now, now + 1, now + 2]);
    }

    #[test]
    fn test_clock_behind_newest_id() {
        let list = list_of(&["a", "b"]);
        let added = list.add("c", 3).unwrap();
        assert_eq!(added.items()[2].id, 102);
    }

    #[test]
    fn test_next_id_after_max_id() {
        let list = TodoList { items: vec![Item::new(u64::MAX, "last")] };
        let added = list.add("x", 1_000).unwrap();
        assert_eq!(added.items()[1].id, 1_000);

        let added = added.add("y", 1_000).unwrap();
        assert_eq!(added.items()[2].id, 1_001);
        assert_eq!(added.len(), 3);
    }

    #[test]
    fn test_delete() {
        let list = list_of(&["a", "b", "c"]);
        let deleted = list.delete(101).unwrap();

        let texts: Vec<&str> = deleted.iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
        assert!(list.delete(999).is_none());
    }

    #[test]
    fn test_toggle_is_involution() {
        let list = list_of(&["a", "b"]);
        let once = list.toggle(100).unwrap();
        assert!(once.get(100).unwrap().is_complete);
        assert!(!once.get(101).unwrap().is_complete);

        let twice = once.toggle(100).unwrap();
        assert_eq!(twice, list);
    }

    #[test]
    fn test_toggle_unknown_id() {
        assert!(list_of(&["a"]).toggle(7).is_none());
        assert!(list_of(&["a"]).toggle_editing(7).is_none());
    }

    #[test]
    fn test_toggle_editing() {
        let list = list_of(&["a"]);
        let editing = list.toggle_editing(100).unwrap();
        assert!(editing.get(100).unwrap().is_editing);
        assert!(!editing.toggle_editing(100).unwrap().get(100).unwrap().is_editing);
    }

    #[test]
    fn test_edit_trims_and_leaves_edit_mode() {
        let list = list_of(&["old"]).toggle_editing(100).unwrap();
        let edited = list.edit(100, "  new  ").unwrap();

        let item = edited.get(100).unwrap();
        assert_eq!(item.text, "new");
        assert!(!item.is_editing);
    }

    #[test]
    fn test_edit_rejects_blank_and_unknown() {
        let list = list_of(&["old"]);
        assert!(list.edit(100, "   ").is_none());
        assert!(list.edit(5, "new").is_none());
    }

    #[test]
    fn test_mutations_leave_original_untouched() {
        let list = list_of(&["a"]);
        let _ = list.toggle(100).unwrap();
        let _ = list.edit(100, "b").unwrap();
        assert_eq!(list, list_of(&["a"]));
    }

    #[test]
    fn test_counts() {
        let list = list_of(&["a", "b", "c"]).toggle(101).unwrap();
        assert_eq!(list.completed_count(), 1);
        assert_eq!(list.remaining_count(), 2);
    }

    #[test]
    fn test_restored_drops_blank_and_resets_editing() {
        let mut editing = Item::new(1, "keep");
        editing.is_editing = true;
        let restored = TodoList::restored(vec![editing, Item::new(2, "  ")]);

        assert_eq!(restored.len(), 1);
        assert_eq!(restored.items()[0], Item::new(1, "keep"));
    }

    #[test]
    fn test_restored_reassigns_duplicate_ids() {
        let now = 1_700_000_000_000;
        let restored = TodoList::restored(vec![
            Item::new(now, "A"),
            Item::new(now, "B"),
            Item::new(now + 1, "C"),
        ]);

        let ids: Vec<u64> = restored.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![now, now + 1, now + 2]);

        let toggled = restored.toggle(restored.items()[1].id).unwrap();
        assert!(!toggled.items()[0].is_complete);
        assert!(toggled.items()[1].is_complete);

        let deleted = restored.delete(now).unwrap();
        let texts: Vec<&str> = deleted.iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, vec!["B", "C"]);
    }
}
