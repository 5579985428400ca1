//! Named predicate collections forming a WHERE clause.

use crate::options::BuildOptions;
use crate::predicate::Predicate;
use crate::value::Value;
use indexmap::IndexMap;

/// Mapping from field name to [`Predicate`], combined with `AND`.
///
/// Fields are unique; fragments are emitted in insertion order. Merging
/// replaces the predicate of a field that is already present.
///
/// # Example
/// ```ignore
/// use dbutils::{Predicate, PredicateSet};
///
/// let filter = PredicateSet::new()
///     .with("status", Predicate::eq("active"))
///     .with("age", Predicate::gte(18));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredicateSet {
    predicates: IndexMap<String, Predicate>,
}

impl PredicateSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the predicate for `field`, builder-style.
    pub fn with(mut self, field: impl Into<String>, predicate: Predicate) -> Self {
        self.insert(field, predicate);
        self
    }

    /// Add (or replace) the predicate for `field`, returning the previous one.
    pub fn insert(&mut self, field: impl Into<String>, predicate: Predicate) -> Option<Predicate> {
        self.predicates.insert(field.into(), predicate)
    }

    /// Merge other sets into this one; later sets win on key collision.
    pub fn merge<I>(&mut self, others: I)
    where
        I: IntoIterator<Item = PredicateSet>,
    {
        for other in others {
            for (field, predicate) in other.predicates {
                self.insert(field, predicate);
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&Predicate> {
        self.predicates.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Predicate)> {
        self.predicates.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Build the WHERE block with default options.
    ///
    /// Returns `None` (and leaves `args` untouched) when the set is empty.
    pub fn build_where_block(&self, args: &mut Vec<Value>) -> Option<String> {
        self.build_where_block_with(args, &BuildOptions::default())
    }

    /// Build the WHERE block, appending predicate arguments to `args`.
    ///
    /// Fragment *i* corresponds to the arguments appended while evaluating
    /// fragment *i*.
    pub fn build_where_block_with(
        &self,
        args: &mut Vec<Value>,
        opts: &BuildOptions,
    ) -> Option<String> {
        if self.predicates.is_empty() {
            return None;
        }
        let fragments: Vec<String> = self
            .predicates
            .iter()
            .map(|(field, predicate)| predicate.evaluate_with(field, args, opts))
            .collect();
        Some(format!("WHERE {}", fragments.join(" AND ")))
    }
}

impl<K: Into<String>> FromIterator<(K, Predicate)> for PredicateSet {
    fn from_iter<T: IntoIterator<Item = (K, Predicate)>>(iter: T) -> Self {
        let mut set = PredicateSet::new();
        set.extend(iter);
        set
    }
}

impl<K: Into<String>> Extend<(K, Predicate)> for PredicateSet {
    fn extend<T: IntoIterator<Item = (K, Predicate)>>(&mut self, iter: T) {
        for (field, predicate) in iter {
            self.insert(field, predicate);
        }
    }
}
