//! Little-endian sequence of 32-bit words with a single-word inline
//! representation and copy-on-write sharing of heap buffers.
//!
//! Copying a heap-backed storage is O(1): both copies reference the same
//! buffer until one of them mutates. Every mutating entry point goes through
//! [`DigitStorage::make_exclusive`], which clones the buffer first if it is
//! shared. Shared reads never clone; `&self` access cannot mutate.

use std::ops::{Index, IndexMut};
use std::sync::Arc;

pub(crate) type Digit = u32;
pub(crate) type DoubleDigit = u64;
pub(crate) const DIGIT_BITS: usize = 32;

#[derive(Debug, Clone)]
pub(crate) struct DigitStorage {
    repr: Repr,
}

#[derive(Debug, Clone)]
enum Repr {
    /// Holds sequences of length 0 or 1 without allocating.
    Inline { word: Digit, len: usize },
    /// Sequences of length >= 2. The buffer may be shared between storages.
    Heap(Arc<Vec<Digit>>),
}

impl DigitStorage {
    pub(crate) const EMPTY: DigitStorage = DigitStorage {
        repr: Repr::Inline { word: 0, len: 0 },
    };

    pub(crate) fn new() -> DigitStorage {
        DigitStorage::EMPTY
    }

    /// Zero-filled storage of the given length.
    pub(crate) fn with_len(len: usize) -> DigitStorage {
        if len <= 1 {
            DigitStorage {
                repr: Repr::Inline { word: 0, len },
            }
        } else {
            DigitStorage {
                repr: Repr::Heap(Arc::new(vec![0; len])),
            }
        }
    }

    /// Adopts an already-built word sequence, transferring ownership of the
    /// buffer into the storage. Used to take over scratch buffers assembled
    /// by multiplication and division.
    pub(crate) fn from_words(words: Vec<Digit>) -> DigitStorage {
        match words.len() {
            0 => DigitStorage::EMPTY,
            1 => DigitStorage {
                repr: Repr::Inline { word: words[0], len: 1 },
            },
            _ => DigitStorage {
                repr: Repr::Heap(Arc::new(words)),
            },
        }
    }

    pub(crate) fn len(&self) -> usize {
        match &self.repr {
            Repr::Inline { len, .. } => *len,
            Repr::Heap(buf) => buf.len(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn clear(&mut self) {
        *self = DigitStorage::EMPTY;
    }

    pub(crate) fn as_slice(&self) -> &[Digit] {
        match &self.repr {
            Repr::Inline { word, len } => &std::slice::from_ref(word)[..*len],
            Repr::Heap(buf) => buf.as_slice(),
        }
    }

    /// Mutable view of the words. Runs the exclusivity check first.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Digit] {
        match &mut self.repr {
            Repr::Inline { word, len } => &mut std::slice::from_mut(word)[..*len],
            Repr::Heap(buf) => Self::make_exclusive(buf).as_mut_slice(),
        }
    }

    /// The ensure-exclusive step of copy-on-write: if the buffer is shared,
    /// copy the words into a private buffer of the same capacity and rebind.
    fn make_exclusive(buf: &mut Arc<Vec<Digit>>) -> &mut Vec<Digit> {
        if Arc::get_mut(buf).is_none() {
            let mut copy = Vec::with_capacity(buf.capacity());
            copy.extend_from_slice(buf);
            *buf = Arc::new(copy);
        }
        // Exclusively owned at this point, so no further clone happens.
        Arc::make_mut(buf)
    }

    /// Amortized O(1). The first growth promotes the inline word to a heap
    /// buffer of capacity 2; after that the capacity doubles and is never
    /// given back.
    pub(crate) fn push(&mut self, word: Digit) {
        match &mut self.repr {
            Repr::Inline { word: w, len } if *len == 0 => {
                *w = word;
                *len = 1;
            }
            Repr::Inline { word: w, .. } => {
                let first = *w;
                let mut buf = Vec::with_capacity(2);
                buf.push(first);
                buf.push(word);
                self.repr = Repr::Heap(Arc::new(buf));
            }
            Repr::Heap(buf) => {
                let words = Self::make_exclusive(buf);
                if words.len() == words.capacity() {
                    words.reserve_exact(words.capacity());
                }
                words.push(word);
            }
        }
    }

    /// Removes the most significant word. Dropping back to a single word
    /// restores the inline representation.
    pub(crate) fn pop(&mut self) {
        match &mut self.repr {
            Repr::Inline { word, len } => {
                assert!(*len > 0, "pop on empty digit storage");
                *word = 0;
                *len = 0;
            }
            Repr::Heap(buf) => {
                let words = Self::make_exclusive(buf);
                words.pop();
                let demoted = if words.len() == 1 { Some(words[0]) } else { None };
                if let Some(word) = demoted {
                    self.repr = Repr::Inline { word, len: 1 };
                }
            }
        }
    }

    /// O(n): shifts every subsequent word up by one position.
    pub(crate) fn insert(&mut self, idx: usize, word: Digit) {
        assert!(idx <= self.len(), "insert position out of range");
        match &mut self.repr {
            Repr::Inline { word: w, len } if *len == 0 => {
                *w = word;
                *len = 1;
            }
            Repr::Inline { word: w, .. } => {
                let prev = *w;
                let mut buf = Vec::with_capacity(2);
                buf.push(prev);
                buf.insert(idx, word);
                self.repr = Repr::Heap(Arc::new(buf));
            }
            Repr::Heap(buf) => {
                let words = Self::make_exclusive(buf);
                if words.len() == words.capacity() {
                    words.reserve_exact(words.capacity());
                }
                words.insert(idx, word);
            }
        }
    }

    /// O(n): shifts every subsequent word down by one position.
    pub(crate) fn remove(&mut self, idx: usize) {
        assert!(idx < self.len(), "remove position out of range");
        match &mut self.repr {
            Repr::Inline { word, len } => {
                *word = 0;
                *len = 0;
            }
            Repr::Heap(buf) => {
                let words = Self::make_exclusive(buf);
                words.remove(idx);
                let demoted = if words.len() == 1 { Some(words[0]) } else { None };
                if let Some(word) = demoted {
                    self.repr = Repr::Inline { word, len: 1 };
                }
            }
        }
    }

    #[cfg(test)]
    fn capacity(&self) -> usize {
        match &self.repr {
            Repr::Inline { .. } => 1,
            Repr::Heap(buf) => buf.capacity(),
        }
    }

    #[cfg(test)]
    fn shares_buffer_with(&self, other: &DigitStorage) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Heap(a), Repr::Heap(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Index<usize> for DigitStorage {
    type Output = Digit;

    /// O(1), never clones the buffer.
    fn index(&self, idx: usize) -> &Digit {
        &self.as_slice()[idx]
    }
}

impl IndexMut<usize> for DigitStorage {
    fn index_mut(&mut self, idx: usize) -> &mut Digit {
        &mut self.as_mut_slice()[idx]
    }
}

impl PartialEq for DigitStorage {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for DigitStorage {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_until_two_words() {
        let mut s = DigitStorage::new();
        assert_eq!(s.len(), 0);
        s.push(7);
        assert_eq!(s.as_slice(), &[7]);
        assert_eq!(s.capacity(), 1);
        s.push(8);
        assert_eq!(s.as_slice(), &[7, 8]);
        assert_eq!(s.capacity(), 2);
    }

    #[test]
    fn pop_demotes_to_inline() {
        let mut s = DigitStorage::from_words(vec![1, 2, 3]);
        s.pop();
        assert_eq!(s.as_slice(), &[1, 2]);
        s.pop();
        assert_eq!(s.as_slice(), &[1]);
        assert_eq!(s.capacity(), 1);
        s.pop();
        assert!(s.is_empty());
    }

    #[test]
    fn capacity_doubles_and_never_shrinks() {
        let mut s = DigitStorage::new();
        let mut last_capacity = 0;
        for i in 0..100 {
            s.push(i);
            assert!(s.capacity() >= last_capacity);
            last_capacity = s.capacity();
        }
        for _ in 0..50 {
            s.pop();
            assert_eq!(s.capacity(), last_capacity);
        }
    }

    #[test]
    fn clone_shares_heap_buffer() {
        let a = DigitStorage::from_words(vec![1, 2, 3]);
        let b = a.clone();
        assert!(a.shares_buffer_with(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn write_unshares_the_buffer() {
        let a = DigitStorage::from_words(vec![1, 2, 3]);
        let mut b = a.clone();
        b[0] = 9;
        assert!(!a.shares_buffer_with(&b));
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(b.as_slice(), &[9, 2, 3]);
    }

    #[test]
    fn write_keeps_capacity_of_the_shared_buffer() {
        let mut a = DigitStorage::new();
        for i in 0..9 {
            a.push(i);
        }
        let capacity = a.capacity();
        let mut b = a.clone();
        b[3] = 42;
        assert!(b.capacity() >= capacity);
    }

    #[test]
    fn insert_and_remove_shift_words() {
        let mut s = DigitStorage::from_words(vec![1, 2, 3]);
        s.insert(0, 0);
        assert_eq!(s.as_slice(), &[0, 1, 2, 3]);
        s.remove(0);
        assert_eq!(s.as_slice(), &[1, 2, 3]);
        s.insert(3, 4);
        assert_eq!(s.as_slice(), &[1, 2, 3, 4]);
        s.remove(1);
        assert_eq!(s.as_slice(), &[1, 3, 4]);
    }

    #[test]
    fn insert_into_empty_and_single() {
        let mut s = DigitStorage::new();
        s.insert(0, 5);
        assert_eq!(s.as_slice(), &[5]);
        s.insert(0, 4);
        assert_eq!(s.as_slice(), &[4, 5]);
    }

    #[test]
    fn equality_is_element_wise() {
        let a = DigitStorage::from_words(vec![1, 2]);
        let b = DigitStorage::from_words(vec![1, 2]);
        let c = DigitStorage::from_words(vec![1, 2, 0]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn remove_out_of_range_is_fatal() {
        let mut s = DigitStorage::from_words(vec![1, 2]);
        s.remove(2);
    }

    #[test]
    #[should_panic(expected = "pop on empty")]
    fn pop_on_empty_is_fatal() {
        let mut s = DigitStorage::new();
        s.pop();
    }
}
