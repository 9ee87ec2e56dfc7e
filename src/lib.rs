pub mod heap;
pub use heap::MinHeap;
