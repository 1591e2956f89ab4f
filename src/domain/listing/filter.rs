//! Filter building
//!
//! Each listable entity has a typed filter set: one optional slot per
//! filterable field. Only populated slots become equality predicates.

use std::fmt;

pub trait FilterSet: Clone + Default + fmt::Debug + Send + Sync + 'static {
    type Predicate: Clone + fmt::Debug + PartialEq + Send + Sync;

    /// Equality predicates for every present, non-empty slot, in field order.
    /// An empty result means "match all".
    fn predicates(&self) -> Vec<Self::Predicate>;
}

/// `Some` only for a non-empty string; empty query values count as absent.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
