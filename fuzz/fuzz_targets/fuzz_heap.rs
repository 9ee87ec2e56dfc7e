#![no_main]
use array_heap::MinHeap;
use libfuzzer_sys::fuzz_target;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fuzz_target!(|elements: Vec<Option<u8>>| {
    let mut heap = MinHeap::new();
    let mut bin_heap: BinaryHeap<Reverse<u8>> = BinaryHeap::new();
    let mut pushed = Vec::new();

    for el in elements {
        match el {
            Some(val) => {
                heap.push(val);
                bin_heap.push(Reverse(val));
                pushed.push(val);
            }
            None => {
                assert_eq!(heap.pop(), bin_heap.pop().map(|Reverse(x)| x), "bin_heap={:?}", &bin_heap);
            }
        }
        assert_eq!(heap.len(), bin_heap.len());
    }
    while let Some(val) = heap.pop() {
        assert_eq!(Some(Reverse(val)), bin_heap.pop(), "bin_heap={:?}", &bin_heap);
    }
    assert!(heap.is_empty());
    assert!(bin_heap.is_empty());

    // bulk build over everything that was ever pushed must agree with sorting
    heap.build_from(pushed.iter().copied());
    pushed.sort();
    assert_eq!(heap.into_sorted_vec(), pushed);
});
