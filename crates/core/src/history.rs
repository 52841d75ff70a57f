use std::collections::VecDeque;

/// Fixed-capacity rolling window of metric samples — one per chart panel.
///
/// Constructed pre-filled with a sentinel so a chart has a full-width
/// baseline on its very first draw, before any real sample has arrived.
#[derive(Debug, Clone)]
pub struct History<T: Copy> {
    samples: VecDeque<T>,
    capacity: usize,
}

impl<T: Copy> History<T> {
    /// Create a history holding `capacity` copies of `sentinel`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn filled(capacity: usize, sentinel: T) -> Self {
        assert!(capacity > 0, "history capacity must be non-zero");
        let mut samples = VecDeque::with_capacity(capacity);
        samples.resize(capacity, sentinel);
        Self { samples, capacity }
    }

    /// Push a new sample, evicting the oldest if at capacity. O(1), infallible.
    pub fn push(&mut self, value: T) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    /// Samples in arrival order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.samples.iter().copied()
    }

    /// Ordered copy of the current window, for rendering.
    pub fn snapshot(&self) -> Vec<T> {
        self.samples.iter().copied().collect()
    }

    /// Most recently pushed sample.
    pub fn latest(&self) -> Option<T> {
        self.samples.back().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
