use std::iter::FromIterator;
use std::mem;

/// An array-backed binary min-heap.
///
/// The tree shape is implicit in the element order: the root lives at
/// index 0 and the children of index `i` at `2i + 1` and `2i + 2`. After
/// every public operation each parent is less than or equal to both of
/// its children, so the root is always a minimal element.
#[derive(Debug, Clone, Default)]
pub struct MinHeap<T: Ord> {
    data: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the minimal element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// The raw array layout of the heap. Only index 0 is guaranteed to be
    /// minimal; adjacent elements are not sorted.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// O(log n)
    pub fn push(&mut self, el: T) {
        self.data.push(el);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns a minimal element, or `None` if the heap is
    /// empty. O(log n)
    pub fn pop(&mut self) -> Option<T> {
        let mut min = self.data.pop()?;
        if !self.data.is_empty() {
            mem::swap(&mut self.data[0], &mut min);
            self.sift_down(0);
        }
        Some(min)
    }

    /// Discards the current contents and rebuilds the heap from `items`.
    ///
    /// Repairing bottom-up from the last internal node is O(n), in
    /// contrast to pushing the elements one by one.
    pub fn build_from<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.data.clear();
        self.data.extend(items);
        self.rebuild();
    }

    /// Consumes the heap and returns the backing array in raw layout.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap and returns all elements in non-decreasing order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut result = Vec::with_capacity(self.len());
        while let Some(el) = self.pop() {
            result.push(el);
        }
        result
    }

    fn rebuild(&mut self) {
        // indices >= len / 2 are leaves and already valid subheaps
        for i in (0..self.data.len() / 2).rev() {
            self.sift_down(i);
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.data[pos] < self.data[parent] {
                self.data.swap(pos, parent);
                pos = parent;
            } else {
                return;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        loop {
            let left = 2 * pos + 1;
            if left >= self.data.len() {
                return;
            }
            let right = left + 1;
            // ties go to the left child
            let child = if right < self.data.len() && self.data[right] < self.data[left] {
                right
            } else {
                left
            };
            if self.data[child] < self.data[pos] {
                self.data.swap(pos, child);
                pos = child;
            } else {
                return;
            }
        }
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        heap.rebuild();
        heap
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(Vec::from_iter(iter))
    }
}

impl<'a, T: Ord> IntoIterator for &'a MinHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
