//! Bounded cursor over a list whose length can change underneath it.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Current position, `None` for an empty list.
    pub fn index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Update the list length, keeping the cursor on the last row if it shrank past it.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.index = self.index.min(len.saturating_sub(1));
    }

    /// Move to `index` if it is in range. Returns whether the cursor moved there.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    pub fn down(&mut self) {
        self.page_down(1);
    }

    pub fn up(&mut self) {
        self.page_up(1);
    }

    pub fn page_down(&mut self, rows: usize) {
        if self.len > 0 {
            self.index = self.index.saturating_add(rows).min(self.len - 1);
        }
    }

    pub fn page_up(&mut self, rows: usize) {
        self.index = self.index.saturating_sub(rows);
    }

    pub fn first(&mut self) {
        self.index = 0;
    }

    pub fn last(&mut self) {
        self.index = self.len.saturating_sub(1);
    }

    pub fn is_at(&self, index: usize) -> bool {
        self.index() == Some(index)
    }
}
