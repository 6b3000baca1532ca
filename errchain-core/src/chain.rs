//! Chain traversal and the two chain queries
//!
//! Both queries walk `cause` links from the candidate (inclusive) and stop at
//! the first match or at the root. A miss is an ordinary return value.

use crate::record::ErrorRecord;
use std::any::type_name;
use std::error::Error as StdError;
use std::iter::FusedIterator;
use tracing::trace;

/// Iterator over a record and every record it wraps, newest first
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a ErrorRecord>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a ErrorRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Iterator over any std error and its `source()` links
#[derive(Clone)]
pub struct Sources<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Sources<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Sources<'_> {}

/// Whether `target` is `candidate` or any record `candidate` wraps
///
/// Matching is by identity. Two records with equal text are different
/// records.
pub fn is(candidate: &ErrorRecord, target: &ErrorRecord) -> bool {
    let mut walked = 0usize;
    let found = candidate.chain().any(|record| {
        walked += 1;
        record.same_as(target)
    });
    trace!(walked, found, "identity lookup");
    found
}

/// First record in the chain whose payload is of kind `K`
///
/// `None` is the not-found outcome.
pub fn as_kind<K>(candidate: &ErrorRecord) -> Option<&K>
where
    K: StdError + 'static,
{
    let mut walked = 0usize;
    let found = candidate.chain().find_map(|record| {
        walked += 1;
        record.payload().and_then(|payload| payload.downcast_ref::<K>())
    });
    trace!(walked, kind = type_name::<K>(), found = found.is_some(), "kind lookup");
    found
}

/// [`as_kind`] in `(match, found)` form
pub fn find_kind<K>(candidate: &ErrorRecord) -> (Option<&K>, bool)
where
    K: StdError + 'static,
{
    let found = as_kind::<K>(candidate);
    let matched = found.is_some();
    (found, matched)
}

/// Walk any std error through its `source()` links, inclusive
pub fn std_chain<'a>(err: &'a (dyn StdError + 'static)) -> Sources<'a> {
    Sources { next: Some(err) }
}

/// First error of type `T` in a std source chain
///
/// Typed payloads carried by [`ErrorRecord`]s along the way are checked too,
/// along with the payload's own `source()` chain, so a record chain reached
/// through a foreign error type is still searchable.
pub fn find_source<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    std_chain(err).find_map(|source| {
        source.downcast_ref::<T>().or_else(|| {
            source
                .downcast_ref::<ErrorRecord>()
                .and_then(|record| record.payload())
                .and_then(|payload| {
                    let payload: &(dyn StdError + 'static) = payload;
                    std_chain(payload).find_map(|inner| inner.downcast_ref::<T>())
                })
        })
    })
}

impl ErrorRecord {
    /// Iterate this record and everything it wraps
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Number of records in the chain, this one included
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    /// The record at the end of the chain
    pub fn root_cause(&self) -> &ErrorRecord {
        self.chain().last().unwrap_or(self)
    }

    /// See [`is`]
    pub fn is(&self, target: &ErrorRecord) -> bool {
        is(self, target)
    }

    /// See [`as_kind`]
    pub fn as_kind<K>(&self) -> Option<&K>
    where
        K: StdError + 'static,
    {
        as_kind::<K>(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct Quota {
        limit: u64,
    }

    impl fmt::Display for Quota {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "quota {} exceeded", self.limit)
        }
    }

    impl StdError for Quota {}

    #[derive(Debug)]
    struct Other;

    impl fmt::Display for Other {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "other")
        }
    }

    impl StdError for Other {}

    #[test]
    fn test_chain_order_and_depth() {
        let root = ErrorRecord::new("root");
        let mid = ErrorRecord::wrap("mid", root.clone());
        let top = ErrorRecord::wrap("top", mid.clone());

        let messages: Vec<&str> = top.chain().map(|r| r.message()).collect();
        assert_eq!(messages, vec!["top", "mid", "root"]);
        assert_eq!(top.depth(), 3);
        assert_eq!(root.depth(), 1);
        assert!(top.root_cause().same_as(&root));
        assert!(root.root_cause().same_as(&root));
    }

    #[test]
    fn test_is_self_and_descendants() {
        let root = ErrorRecord::new("root");
        let top = ErrorRecord::wrap("top", root.clone());
        assert!(is(&root, &root));
        assert!(is(&top, &root));
        assert!(!is(&root, &top));
    }

    #[test]
    fn test_is_rejects_equal_text() {
        let a = ErrorRecord::new("this is error 1");
        let b = ErrorRecord::new("this is error 1");
        assert!(!is(&a, &b));
    }

    #[test]
    fn test_as_kind_finds_first_match() {
        let inner = ErrorRecord::from_kind(Quota { limit: 1 });
        let outer = ErrorRecord::wrap_kind(Quota { limit: 2 }, inner);
        let top = ErrorRecord::wrap("top", outer);

        assert_eq!(top.as_kind::<Quota>(), Some(&Quota { limit: 2 }));
        assert!(top.as_kind::<Other>().is_none());
    }

    #[test]
    fn test_find_kind_pair() {
        let top = ErrorRecord::wrap("top", ErrorRecord::from_kind(Quota { limit: 5 }));
        let (found, matched) = find_kind::<Quota>(&top);
        assert!(matched);
        assert_eq!(found.map(|q| q.limit), Some(5));

        let (missing, matched) = find_kind::<Other>(&top);
        assert!(!matched);
        assert!(missing.is_none());
    }

    #[test]
    fn test_find_source_through_std_chain() {
        let top = ErrorRecord::wrap("top", ErrorRecord::from_kind(Quota { limit: 9 }));
        let as_std: &(dyn StdError + 'static) = &top;

        assert_eq!(std_chain(as_std).count(), 2);
        assert_eq!(find_source::<Quota>(as_std).map(|q| q.limit), Some(9));
        assert!(find_source::<ErrorRecord>(as_std).is_some_and(|r| r.same_as(&top)));
        assert!(find_source::<Other>(as_std).is_none());
    }
}
