//! Two small fixed-capacity data structures: an integer hash set with linear probing and a
//! disjoint-set forest with path compression. Neither synchronizes internally; callers sharing an
//! instance across threads must serialize mutating calls themselves.

pub mod disjoint_sets;
pub mod probing;
pub mod report;
pub mod sample;

pub use crate::disjoint_sets::{DisjointSets, ForestError, Link};
pub use crate::probing::{InsertError, ProbeStrategy, ProbingHashSet, Slot};
