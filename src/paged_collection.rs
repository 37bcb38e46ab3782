//! Ordered, mutable sequence split into fixed-size pages with a movable cursor.
//!
//! The cursor lives in `-1..=page_count`. Both ends are sentinels: stepping
//! past the first page pins the cursor at `-1`, stepping past the last page
//! pins it at `page_count`. Reads through [`PagedCollection::page_at`] and the
//! navigation methods move the cursor as part of the read.
//!
//! Every structural mutation (insert, remove, clear, sort) recomputes the page
//! count and resets the cursor to page `0`, forgetting the previous position.

use std::cmp::Ordering;
use std::ops::Range;

use thiserror::Error;

/// A page size of zero was requested.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("page size must be at least 1")]
pub struct ZeroPageSize;

#[derive(Debug, Clone)]
pub struct PagedCollection<E> {
    elements: Vec<E>,
    page_size: usize,
    page_count: usize,
    cursor: isize,
}

impl<E> PagedCollection<E> {
    /// Creates an empty collection.
    ///
    /// # Errors
    /// Returns [`ZeroPageSize`] if `page_size` is zero.
    pub fn new(page_size: usize) -> Result<Self, ZeroPageSize> {
        Self::from_elements(Vec::new(), page_size)
    }

    /// Creates a collection holding `elements` in their given order.
    ///
    /// # Errors
    /// Returns [`ZeroPageSize`] if `page_size` is zero.
    pub fn from_elements(
        elements: impl IntoIterator<Item = E>,
        page_size: usize,
    ) -> Result<Self, ZeroPageSize> {
        if page_size == 0 {
            return Err(ZeroPageSize);
        }
        let mut collection = Self {
            elements: elements.into_iter().collect(),
            page_size,
            page_count: 0,
            cursor: 0,
        };
        collection.repaginate();
        Ok(collection)
    }

    /// Number of pages. An empty collection has no pages.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The currently remembered page index, possibly one of the two sentinels.
    pub fn cursor(&self) -> isize {
        self.cursor
    }

    /// Every element, without pagination.
    pub fn all_elements(&self) -> &[E] {
        &self.elements
    }

    /// Element at `position` within page `page_index`.
    ///
    /// The position is checked against the page's own length, so on a short
    /// last page a position below `page_size` can still miss. A hit moves the
    /// cursor to `page_index` like [`PagedCollection::page_at`]; a miss leaves
    /// it where it was.
    pub fn element_at(&mut self, page_index: isize, position: isize) -> Option<&E> {
        let range = self.page_range(page_index)?;
        let position = usize::try_from(position)
            .ok()
            .filter(|position| *position < range.len())?;
        self.page_at(page_index)?.get(position)
    }

    /// Reads page `page_index` and moves the cursor there.
    ///
    /// On a miss the cursor is left untouched.
    pub fn page_at(&mut self, page_index: isize) -> Option<&[E]> {
        let range = self.page_range(page_index)?;
        self.cursor = page_index;
        Some(&self.elements[range])
    }

    /// Reads the page under the cursor, then advances the cursor by one.
    ///
    /// The cursor only advances when the read hits.
    pub fn current_page(&mut self) -> Option<&[E]> {
        let range = self.page_range(self.cursor)?;
        self.cursor += 1;
        Some(&self.elements[range])
    }

    /// Moves the cursor to `page_index`, collapsing any out-of-range request
    /// onto the nearest sentinel.
    pub fn set_cursor(&mut self, page_index: isize) {
        let last = self.last_page_index();
        self.cursor = if page_index < 0 {
            -1
        } else if page_index > last {
            last + 1
        } else {
            page_index
        };
    }

    pub fn first_page(&mut self) -> Option<&[E]> {
        self.cursor = 0;
        self.page_at(0)
    }

    pub fn last_page(&mut self) -> Option<&[E]> {
        let last = self.last_page_index();
        self.cursor = last;
        self.page_at(last)
    }

    /// Steps the cursor forward and reads that page.
    ///
    /// Past the last page the cursor is pinned at `page_count` and `None` is
    /// returned; repeated calls keep returning `None`.
    pub fn next_page(&mut self) -> Option<&[E]> {
        let last = self.last_page_index();
        self.cursor += 1;
        if self.cursor <= last {
            self.page_at(self.cursor)
        } else {
            self.cursor = last + 1;
            None
        }
    }

    /// Steps the cursor backward and reads that page.
    ///
    /// Before the first page the cursor is pinned at `-1` and `None` is
    /// returned.
    pub fn prev_page(&mut self) -> Option<&[E]> {
        self.cursor -= 1;
        if self.cursor >= 0 {
            self.page_at(self.cursor)
        } else {
            self.cursor = -1;
            None
        }
    }

    pub fn push(&mut self, element: E) {
        self.elements.push(element);
        self.repaginate();
    }

    /// Inserts at a global position, shifting later elements right.
    ///
    /// Returns `false` without touching the collection if `index > len`.
    pub fn insert_at(&mut self, index: usize, element: E) -> bool {
        if index > self.elements.len() {
            return false;
        }
        self.elements.insert(index, element);
        self.repaginate();
        true
    }

    /// Inserts at `position` within page `page_index`.
    ///
    /// Returns `false` if either index is negative or the resulting global
    /// position is past the end.
    pub fn insert_at_page(&mut self, page_index: isize, position: isize, element: E) -> bool {
        let (Ok(page_index), Ok(position)) = (usize::try_from(page_index), usize::try_from(position))
        else {
            return false;
        };
        match page_index
            .checked_mul(self.page_size)
            .and_then(|start| start.checked_add(position))
        {
            Some(index) => self.insert_at(index, element),
            None => false,
        }
    }

    pub fn insert_all(&mut self, elements: impl IntoIterator<Item = E>) {
        self.elements.extend(elements);
        self.repaginate();
    }

    pub fn clear(&mut self) {
        self.elements.clear();
        self.repaginate();
    }

    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        self.elements.sort_by(compare);
        self.repaginate();
    }

    /// Lazy traversal over every element, independent of the cursor.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }

    /// In-place access to the elements. Not a structural mutation: page count
    /// and cursor are left as they are.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, E> {
        self.elements.iter_mut()
    }

    fn last_page_index(&self) -> isize {
        self.page_count as isize - 1
    }

    fn page_range(&self, page_index: isize) -> Option<Range<usize>> {
        if page_index < 0 || page_index > self.last_page_index() {
            return None;
        }
        let start = page_index as usize * self.page_size;
        let end = self.elements.len().min(start + self.page_size);
        Some(start..end)
    }

    fn repaginate(&mut self) {
        self.page_count = self.elements.len().div_ceil(self.page_size);
        self.cursor = 0;
    }
}

impl<E: PartialEq> PagedCollection<E> {
    pub fn contains(&self, element: &E) -> bool {
        self.elements.contains(element)
    }

    /// Reads the page holding the first element equal to `element` and moves
    /// the cursor there.
    pub fn page_containing(&mut self, element: &E) -> Option<&[E]> {
        let index = self.elements.iter().position(|e| e == element)?;
        self.page_at((index / self.page_size) as isize)
    }

    /// Removes the first element equal to `element`.
    pub fn remove(&mut self, element: &E) -> Option<E> {
        let removed = self
            .elements
            .iter()
            .position(|e| e == element)
            .map(|index| self.elements.remove(index));
        self.repaginate();
        removed
    }
}

impl<'a, E> IntoIterator for &'a PagedCollection<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
