//! Core Entity Trait
//!
//! Every record kept in an [`IndexedCollection`](crate::collection::IndexedCollection)
//! has a unique, stable id.

use std::fmt::Display;
use std::hash::Hash;

/// Core trait for all dashboard entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + Hash + Display + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}
