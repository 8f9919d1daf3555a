//! An arena-backed emulation of PostgreSQL's internal `List` type.
//!
//! Parse-tree nodes hold their children in these lists, so the type shows up
//! in nearly every node struct. Cells live in a `Vec` arena and are linked by
//! index handles, which keeps append O(1) and lets sub-list views address a
//! cell range without back-pointers. Positional access walks from the head,
//! mirroring the linked list this emulates; callers that need random access
//! should collect first.
//!
//! The list is a single-threaded structure. Detached cursors carry a
//! generation snapshot and fail deterministically when the list was
//! structurally modified under them; the borrowing iterator needs no guard
//! because the borrow checker already excludes mutation while it lives.

use std::fmt;
use std::ops::Index;

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

#[derive(Debug, Clone)]
struct ListCell<T> {
    value: T,
    next: Option<usize>,
}

/// Singly linked list with arena storage. Element order is link order, not
/// slot order; vacated slots are recycled through a free list.
#[derive(Debug, Clone)]
pub struct PgList<T> {
    cells: Vec<Option<ListCell<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    generation: u64,
}

/// A detached list position for splice-style traversal.
///
/// Unlike [`PgList::iter`], a cursor does not borrow the list, so the list
/// can be mutated while one exists; the next [`PgList::cursor_next`] call on
/// a cursor created before such a mutation reports
/// [`Error::ConcurrentModification`] instead of returning a stale element.
#[derive(Debug, Clone, Copy)]
pub struct ListCursor {
    next: Option<usize>,
    generation: u64,
}

impl<T> PgList<T> {
    pub fn new() -> Self {
        PgList {
            cells: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            generation: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn cell(&self, handle: usize) -> &ListCell<T> {
        match &self.cells[handle] {
            Some(cell) => cell,
            None => unreachable!("list handle {handle} points at a vacated cell"),
        }
    }

    fn cell_mut(&mut self, handle: usize) -> &mut ListCell<T> {
        match &mut self.cells[handle] {
            Some(cell) => cell,
            None => unreachable!("list handle {handle} points at a vacated cell"),
        }
    }

    fn alloc(&mut self, cell: ListCell<T>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.cells[slot] = Some(cell);
                slot
            }
            None => {
                self.cells.push(Some(cell));
                self.cells.len() - 1
            }
        }
    }

    /// Handle of the cell at position `index`, walking from the head.
    fn handle_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        let mut handle = self.head;
        for _ in 0..index {
            handle = self.cell(handle?).next;
        }
        handle
    }

    /// Splices a new cell in after `prev` (`None` means at the head).
    /// Returns the new cell's handle.
    fn insert_after(&mut self, prev: Option<usize>, value: T) -> usize {
        let next = match prev {
            Some(p) => self.cell(p).next,
            None => self.head,
        };
        let handle = self.alloc(ListCell { value, next });
        match prev {
            Some(p) => self.cell_mut(p).next = Some(handle),
            None => self.head = Some(handle),
        }
        if next.is_none() {
            self.tail = Some(handle);
        }
        self.len += 1;
        self.bump();
        handle
    }

    /// Unlinks and returns the cell after `prev` (`None` means the head
    /// cell). Returns `None` when there is no such cell.
    fn remove_after(&mut self, prev: Option<usize>) -> Option<T> {
        let victim = match prev {
            Some(p) => self.cell(p).next,
            None => self.head,
        }?;
        let next = self.cell(victim).next;
        match prev {
            Some(p) => self.cell_mut(p).next = next,
            None => self.head = next,
        }
        if self.tail == Some(victim) {
            self.tail = prev;
        }
        let cell = self.cells[victim].take();
        self.free.push(victim);
        self.len -= 1;
        self.bump();
        cell.map(|c| c.value)
    }

    /// Appends in O(1) via the tail handle.
    pub fn push(&mut self, value: T) {
        let tail = self.tail;
        self.insert_after(tail, value);
    }

    /// Removes and returns the first element in O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove_after(None)
    }

    /// Inserts before position `index`; `index == len` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(Error::IndexOutOfBounds { index, len: self.len });
        }
        let prev = if index == 0 { None } else { self.handle_at(index - 1) };
        self.insert_after(prev, value);
        Ok(())
    }

    /// O(index) walk from the head.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.handle_at(index).map(|h| &self.cell(h).value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let handle = self.handle_at(index)?;
        Some(&mut self.cell_mut(handle).value)
    }

    /// Replaces the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let len = self.len;
        match self.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(Error::IndexOutOfBounds { index, len }),
        }
    }

    /// Removes and returns the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds { index, len: self.len });
        }
        let prev = if index == 0 { None } else { self.handle_at(index - 1) };
        match self.remove_after(prev) {
            Some(value) => Ok(value),
            None => unreachable!("in-bounds index {index} had no cell"),
        }
    }

    /// Drops all elements past the first `keep`.
    pub fn truncate(&mut self, keep: usize) {
        if keep >= self.len {
            return;
        }
        let prev = if keep == 0 { None } else { self.handle_at(keep - 1) };
        while self.remove_after(prev).is_some() {}
    }

    pub fn clear(&mut self) {
        self.truncate(0);
        if self.len == 0 {
            // Arena slots are all free now; drop the bookkeeping too.
            self.cells.clear();
            self.free.clear();
        }
    }

    /// Moves every element of `other` onto the end of `self`.
    pub fn concat(&mut self, other: PgList<T>) {
        for value in other {
            self.push(value);
        }
    }

    pub fn first(&self) -> Option<&T> {
        self.head.map(|h| &self.cell(h).value)
    }

    pub fn last(&self) -> Option<&T> {
        self.tail.map(|h| &self.cell(h).value)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { list: self, next: self.head }
    }

    /// In-place mutation of every element, front to back.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut T)) {
        let mut handle = self.head;
        while let Some(h) = handle {
            let cell = self.cell_mut(h);
            handle = cell.next;
            f(&mut cell.value);
        }
    }

    /// Opens a detached cursor at the front of the list.
    pub fn cursor(&self) -> ListCursor {
        ListCursor { next: self.head, generation: self.generation }
    }

    /// Steps a cursor, failing if the list was structurally modified since
    /// the cursor was created.
    pub fn cursor_next<'a>(&'a self, cursor: &mut ListCursor) -> Result<Option<&'a T>> {
        if cursor.generation != self.generation {
            return Err(Error::ConcurrentModification);
        }
        match cursor.next {
            Some(handle) => {
                let cell = self.cell(handle);
                cursor.next = cell.next;
                Ok(Some(&cell.value))
            }
            None => Ok(None),
        }
    }

    /// A mutable view of the cell range `[from, to)` that splices the
    /// backing cells directly: every mutation through the view changes this
    /// list's reported length by the same delta. The exclusive borrow means
    /// the parent cannot be touched while the view is live, so the view's
    /// boundary handles cannot go stale.
    pub fn view_mut(&mut self, from: usize, to: usize) -> Result<SubListMut<'_, T>> {
        if from > to || to > self.len {
            return Err(Error::IndexOutOfBounds { index: to, len: self.len });
        }
        let before = if from == 0 { None } else { self.handle_at(from - 1) };
        Ok(SubListMut { before, len: to - from, list: self })
    }
}

impl<T> Default for PgList<T> {
    fn default() -> Self {
        PgList::new()
    }
}

impl<T: PartialEq> PgList<T> {
    /// Removes the first element equal to `value`. Returns whether one was
    /// found.
    pub fn remove_item(&mut self, value: &T) -> bool {
        let mut prev = None;
        let mut handle = self.head;
        while let Some(h) = handle {
            if self.cell(h).value == *value {
                self.remove_after(prev);
                return true;
            }
            prev = Some(h);
            handle = self.cell(h).next;
        }
        false
    }

    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }
}

/// A live mutable window onto a contiguous cell range of a parent list.
pub struct SubListMut<'a, T> {
    list: &'a mut PgList<T>,
    /// Handle of the cell just before the view, `None` when the view starts
    /// at the parent's head.
    before: Option<usize>,
    len: usize,
}

impl<'a, T> SubListMut<'a, T> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn handle_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        let mut handle = match self.before {
            Some(b) => self.list.cell(b).next,
            None => self.list.head,
        };
        for _ in 0..index {
            handle = self.list.cell(handle?).next;
        }
        handle
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.handle_at(index).map(|h| &self.list.cell(h).value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let handle = self.handle_at(index)?;
        Some(&mut self.list.cell_mut(handle).value)
    }

    /// Appends at the end of the view, splicing into the parent.
    pub fn push(&mut self, value: T) {
        let prev = if self.len == 0 { self.before } else { self.handle_at(self.len - 1) };
        self.list.insert_after(prev, value);
        self.len += 1;
    }

    /// Inserts before view position `index`; `index == len` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(Error::IndexOutOfBounds { index, len: self.len });
        }
        let prev = if index == 0 { self.before } else { self.handle_at(index - 1) };
        self.list.insert_after(prev, value);
        self.len += 1;
        Ok(())
    }

    /// Removes the element at view position `index` from the parent.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds { index, len: self.len });
        }
        let prev = if index == 0 { self.before } else { self.handle_at(index - 1) };
        match self.list.remove_after(prev) {
            Some(value) => {
                self.len -= 1;
                Ok(value)
            }
            None => unreachable!("in-bounds view index {index} had no cell"),
        }
    }

    pub fn iter(&self) -> ViewIter<'_, T> {
        ViewIter {
            list: self.list,
            next: if self.len == 0 { None } else { self.handle_at(0) },
            remaining: self.len,
        }
    }
}

pub struct Iter<'a, T> {
    list: &'a PgList<T>,
    next: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let handle = self.next?;
        let cell = self.list.cell(handle);
        self.next = cell.next;
        Some(&cell.value)
    }
}

pub struct ViewIter<'a, T> {
    list: &'a PgList<T>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for ViewIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.next?;
        let cell = self.list.cell(handle);
        self.next = cell.next;
        self.remaining -= 1;
        Some(&cell.value)
    }
}

pub struct IntoIter<T> {
    list: PgList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }
}

impl<T> IntoIterator for PgList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a PgList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> FromIterator<T> for PgList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = PgList::new();
        for value in iter {
            list.push(value);
        }
        list
    }
}

impl<T> Extend<T> for PgList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> From<Vec<T>> for PgList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> Index<usize> for PgList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!("list index {index} out of bounds (len {})", self.len),
        }
    }
}

impl<T: PartialEq> PartialEq for PgList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

/// `()` when empty, else `(e1, e2, ...)`. This exact form doubles as SQL
/// syntax for parenthesized lists (column lists, `in` lists), so renderers
/// rely on it verbatim.
impl<T: fmt::Display> fmt::Display for PgList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.iter().join(", "))
    }
}

impl<T: Serialize> Serialize for PgList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PgList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(Vec::<T>::deserialize(deserializer)?.into())
    }
}

/// Builds a `PgList` from its elements, `vec!`-style.
#[macro_export]
macro_rules! pg_list {
    () => { $crate::list::PgList::new() };
    ($($elem:expr),+ $(,)?) => {
        $crate::list::PgList::from(vec![$($elem),+])
    };
}
