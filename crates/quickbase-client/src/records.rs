use crate::Record;

use std::ops::Index;

/// The in-memory working set of records for a table.
///
/// Append order is preserved: loaded records appear in server response order,
/// page by page. Removed records are tracked separately until the next
/// `accept_changes` pass drops them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Records {
    items: Vec<Record>,
    pending_removal: Vec<Record>,
}

impl Records {
    pub fn new() -> Records {
        Records::default()
    }

    pub fn push(&mut self, record: Record) {
        self.items.push(record);
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Record> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Record> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drops every record, including removal tracking.
    pub fn clear(&mut self) {
        self.items.clear();
        self.pending_removal.clear();
    }

    /// Records removed from the working set whose deletes await the next
    /// reconcile pass to be flushed from tracking.
    pub fn pending_removal(&self) -> &[Record] {
        &self.pending_removal
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Record {
        self.items.remove(index)
    }

    pub(crate) fn track_removed(&mut self, record: Record) {
        self.pending_removal.push(record);
    }

    /// The removal calls were already issued when the records left the
    /// working set; this only clears the tracking.
    pub(crate) fn flush_removed(&mut self) {
        self.pending_removal.clear();
    }
}

impl Index<usize> for Records {
    type Output = Record;

    fn index(&self, index: usize) -> &Record {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a Records {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
