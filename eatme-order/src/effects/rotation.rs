/// Cycles through a fixed list, wrapping at the end. Used for the hero tagline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Rotation<T> {
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self { items, index: 0 }
    }

    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    /// Step to the next item and return it.
    pub fn advance(&mut self) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.items.len();
        self.current()
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}
