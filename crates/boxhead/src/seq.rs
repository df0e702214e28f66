//! Run-length grouping of sequences.
//!
//! [`seq_groups`] collapses consecutive equal elements into `(value, count)`
//! pairs. It is lazy and reads its input exactly once, so it works on
//! one-shot iterators as well as collections.
//!
//! ```rust
//! use boxhead::seq_groups;
//!
//! let groups: Vec<_> = seq_groups("aabbccd".chars()).collect();
//! assert_eq!(groups, vec![('a', 2), ('b', 2), ('c', 2), ('d', 1)]);
//! ```
//!
//! End of input is reported as `None` from [`Iterator::next`]; an empty input
//! yields no groups at all.

use std::iter::Fuse;

/// Iterator returned by [`seq_groups`] and [`seq_groups_by`].
#[derive(Debug, Clone)]
pub struct SeqGroups<I: Iterator, F> {
    iter: Fuse<I>,
    pending: Option<I::Item>,
    eq: F,
}

/// Groups consecutive equal elements using `PartialEq`.
///
/// `None` compares equal to `None`, so runs of `None` in an `Option`
/// sequence merge like any other value. Use [`seq_groups_by`] when some
/// values should never merge.
pub fn seq_groups<I>(seq: I) -> SeqGroups<I::IntoIter, fn(&I::Item, &I::Item) -> bool>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    seq_groups_by(seq, <I::Item as PartialEq>::eq as fn(&I::Item, &I::Item) -> bool)
}

/// Groups consecutive elements for which `eq(first_of_run, next)` holds.
///
/// ```rust
/// use boxhead::seq_groups_by;
///
/// // Nulls stay separate, everything else merges.
/// let seq = vec![Some("a"), Some("a"), None, None, Some("c")];
/// let groups: Vec<_> = seq_groups_by(seq, |a, b| a.is_some() && a == b).collect();
/// assert_eq!(
///     groups,
///     vec![(Some("a"), 2), (None, 1), (None, 1), (Some("c"), 1)]
/// );
/// ```
pub fn seq_groups_by<I, F>(seq: I, eq: F) -> SeqGroups<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    SeqGroups {
        iter: seq.into_iter().fuse(),
        pending: None,
        eq,
    }
}

impl<I, F> Iterator for SeqGroups<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = (I::Item, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let value = match self.pending.take() {
            Some(value) => value,
            None => self.iter.next()?,
        };

        let mut count = 1;
        for item in self.iter.by_ref() {
            if (self.eq)(&value, &item) {
                count += 1;
            } else {
                self.pending = Some(item);
                break;
            }
        }

        Some((value, count))
    }
}
