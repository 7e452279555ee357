//! Segment Registry
//!
//! Ordered, append-only set of segments. Insertion order is display order and
//! the index used for slide direction. Once non-empty, exactly one segment is
//! selected.

use crate::error::SegmentError;
use crate::item::{SegmentId, SegmentItem};
use crate::Result;

#[derive(Debug, Clone, Default)]
pub struct SegmentRegistry {
    items: Vec<SegmentItem>,
}

impl SegmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a static list, selecting the first entry
    pub fn from_items<I>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = SegmentItem>,
    {
        let mut registry = Self::new();
        registry.extend(items)?;
        Ok(registry)
    }

    /// Append a segment. The first segment ever appended becomes selected.
    pub fn append(&mut self, mut item: SegmentItem) -> Result<usize> {
        if self.items.iter().any(|i| i.id() == item.id()) {
            return Err(SegmentError::DuplicateSegment(item.id().to_string()));
        }

        item.set_selected(self.items.is_empty());
        let index = self.items.len();

        tracing::debug!(
            segment_id = %item.id(),
            text = %item.text(),
            index,
            selected = item.is_selected(),
            "Appended segment"
        );

        self.items.push(item);
        Ok(index)
    }

    /// Append every item in order. Stops at the first failure.
    pub fn extend<I>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = SegmentItem>,
    {
        for item in items {
            self.append(item)?;
        }
        Ok(())
    }

    /// Remove every segment
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Index of the unique selected segment
    pub fn selected_index(&self) -> Result<usize> {
        let mut selected = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_selected())
            .map(|(index, _)| index);

        match (selected.next(), selected.next()) {
            (Some(index), None) => Ok(index),
            (None, _) => Err(SegmentError::InvariantViolation(
                "no segment is selected".to_string(),
            )),
            (Some(first), Some(second)) => Err(SegmentError::InvariantViolation(format!(
                "segments {first} and {second} are both selected"
            ))),
        }
    }

    /// The unique selected segment
    pub fn selected_item(&self) -> Result<&SegmentItem> {
        let index = self.selected_index()?;
        Ok(&self.items[index])
    }

    /// Position of a segment in display order
    pub fn index_of(&self, id: &SegmentId) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| SegmentError::NotFound(id.to_string()))
    }

    pub fn get(&self, index: usize) -> Result<&SegmentItem> {
        self.items.get(index).ok_or(SegmentError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut SegmentItem> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(SegmentError::IndexOutOfRange { index, len })
    }

    /// Move the selection to `index` and return the previously selected index.
    ///
    /// Both flags change inside this call, so no caller ever observes zero or
    /// two selected segments.
    pub fn select(&mut self, index: usize) -> Result<usize> {
        self.get(index)?;
        let previous = self.selected_index()?;

        self.items[previous].set_selected(false);
        self.items[index].set_selected(true);

        Ok(previous)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SegmentItem> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SegmentItem> {
        self.items.iter_mut()
    }
}
