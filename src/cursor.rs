//! SelectionCursor: which card of a resolved list is open in the detail dialog.
//!
//! The cursor does not own the list. It remembers both the position and the
//! id of the open card, and every read or step re-derives the position from
//! the id against the list it is given. If the card is gone the cursor closes
//! rather than landing on a different card.

use crate::domain::Problem;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Selected {
    index: usize,
    id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    selected: Option<Selected>,
}

impl SelectionCursor {
    pub fn index(&self) -> Option<usize> {
        self.selected.as_ref().map(|s| s.index)
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Position the cursor on the first card with `id`. Closes it when absent.
    pub fn open(&mut self, list: &[&Problem], id: &str) -> Option<usize> {
        self.selected = list
            .iter()
            .position(|p| p.id() == id)
            .map(|index| Selected { index, id: id.to_string() });
        self.index()
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Called whenever the list the cursor points into is recomputed.
    pub fn invalidate(&mut self) {
        self.close();
    }

    /// Where the open card sits in `list` now, looked up by id.
    pub fn locate(&self, list: &[&Problem]) -> Option<usize> {
        let sel = self.selected.as_ref()?;
        match list.get(sel.index) {
            Some(p) if p.id() == sel.id => Some(sel.index),
            _ => list.iter().position(|p| p.id() == sel.id),
        }
    }

    /// Re-anchor on the open card's id in `list`. Closes the cursor when the
    /// card is no longer there.
    pub fn revalidate(&mut self, list: &[&Problem]) -> Option<usize> {
        let Some(index) = self.locate(list) else {
            self.selected = None;
            return None;
        };
        if let Some(sel) = self.selected.as_mut() {
            sel.index = index;
        }
        Some(index)
    }

    /// Jump to `new_index` if it lies within the list. Out-of-range requests
    /// and requests on a closed cursor are ignored. Returns whether it moved.
    pub fn move_to(&mut self, list: &[&Problem], new_index: i64) -> bool {
        if self.revalidate(list).is_none() {
            return false;
        }
        let Ok(index) = usize::try_from(new_index) else {
            return false;
        };
        match list.get(index) {
            Some(p) => {
                self.selected = Some(Selected { index, id: p.id().to_string() });
                true
            }
            None => false,
        }
    }

    pub fn next(&mut self, list: &[&Problem]) -> bool {
        match self.revalidate(list) {
            Some(i) => self.move_to(list, i as i64 + 1),
            None => false,
        }
    }

    pub fn prev(&mut self, list: &[&Problem]) -> bool {
        match self.revalidate(list) {
            Some(i) => self.move_to(list, i as i64 - 1),
            None => false,
        }
    }

    /// The open card, wherever it now sits in `list`.
    pub fn current<'a>(&self, list: &[&'a Problem]) -> Option<&'a Problem> {
        self.locate(list).and_then(|i| list.get(i).copied())
    }
}
