//! Sorted-key lookup shared by every property table.
//!
//! All record arrays are sorted ascending by key, so one binary search serves
//! single-codepoint records, codepoint ranges, and codepoint pairs alike.

use std::cmp::Ordering;

/// A record that can be ordered against a lookup key of type `K`.
///
/// `cmp_key` reports where the record sits relative to the key: `Less` when
/// the record lies entirely before it, `Greater` when entirely after it, and
/// `Equal` when the record matches.
pub trait Keyed<K: ?Sized> {
    fn cmp_key(&self, key: &K) -> Ordering;
}

/// Find the record matching `key` in a slice sorted by key.
///
/// Runs in O(log N) comparisons. When a malformed table contains several
/// records for the same key, the lowest-indexed one is returned.
#[inline]
pub fn find<'r, R, K>(records: &'r [R], key: &K) -> Option<&'r R>
where
    R: Keyed<K>,
    K: ?Sized,
{
    let index = records.partition_point(|record| record.cmp_key(key) == Ordering::Less);
    records
        .get(index)
        .filter(|record| record.cmp_key(key) == Ordering::Equal)
}

/// Like [`find`], but returns the index of the match.
#[inline]
pub fn position<R, K>(records: &[R], key: &K) -> Option<usize>
where
    R: Keyed<K>,
    K: ?Sized,
{
    let index = records.partition_point(|record| record.cmp_key(key) == Ordering::Less);
    match records.get(index) {
        Some(record) if record.cmp_key(key) == Ordering::Equal => Some(index),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, PartialEq)]
    struct Entry {
        key: u32,
        tag: &'static str,
    }

    impl Keyed<u32> for Entry {
        fn cmp_key(&self, key: &u32) -> Ordering {
            self.key.cmp(key)
        }
    }

    const ENTRIES: &[Entry] = &[
        Entry { key: 3, tag: "a" },
        Entry { key: 7, tag: "b" },
        Entry { key: 7, tag: "c" },
        Entry { key: 7, tag: "d" },
        Entry { key: 12, tag: "e" },
    ];

    #[test]
    fn test_finds_exact_keys() {
        assert_eq!(find(ENTRIES, &3).map(|e| e.tag), Some("a"));
        assert_eq!(find(ENTRIES, &12).map(|e| e.tag), Some("e"));
    }

    #[test]
    fn test_missing_keys_return_none() {
        assert!(find(ENTRIES, &0).is_none());
        assert!(find(ENTRIES, &5).is_none());
        assert!(find(ENTRIES, &13).is_none());
        assert!(find::<Entry, u32>(&[], &1).is_none());
    }

    #[test]
    fn test_duplicates_resolve_to_lowest_index() {
        assert_eq!(find(ENTRIES, &7).map(|e| e.tag), Some("b"));
        assert_eq!(position(ENTRIES, &7), Some(1));
    }

    #[test]
    fn test_comparisons_are_logarithmic() {
        struct Counted<'c> {
            key: u32,
            calls: &'c Cell<u32>,
        }

        impl Keyed<u32> for Counted<'_> {
            fn cmp_key(&self, key: &u32) -> Ordering {
                self.calls.set(self.calls.get() + 1);
                self.key.cmp(key)
            }
        }

        let calls = Cell::new(0);
        let records: Vec<Counted<'_>> = (0..4096)
            .map(|key| Counted { key: key * 2, calls: &calls })
            .collect();

        assert!(find(&records, &4000).is_some());
        // log2(4096) plus a few extra comparisons
        assert!(calls.get() <= 16, "took {} comparisons", calls.get());
    }
}
