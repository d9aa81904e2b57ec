use log::{debug, trace};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ForestError {
    #[error("Element {index} is outside of a forest with {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
}

/// The parent link stored for each element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Link {
    /// The element is the representative of its set.
    Root,
    /// The element's parent, or some more distant ancestor within the same set.
    Parent(usize),
}

impl Link {
    pub fn parent(self) -> Option<usize> {
        match self {
            Self::Root => None,
            Self::Parent(parent) => Some(parent),
        }
    }
}

impl From<Option<usize>> for Link {
    fn from(parent: Option<usize>) -> Self {
        parent.map_or(Self::Root, Self::Parent)
    }
}

/// A fixed-size forest of up-trees over the elements `0..len`.
///
/// Every element starts out as a singleton root. Sets are merged only through [`union`], which
/// links root to root, so only roots ever carry [`Link::Root`].
///
/// [`union`]: DisjointSets::union
#[derive(Clone, Debug)]
pub struct DisjointSets {
    links: Vec<Link>,
}

impl DisjointSets {
    pub fn new(len: usize) -> Self {
        Self {
            links: vec![Link::Root; len],
        }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn link(&self, index: usize) -> Result<Link, ForestError> {
        self.check(index)?;
        Ok(self.links[index])
    }

    pub fn is_root(&self, index: usize) -> Result<bool, ForestError> {
        Ok(self.link(index)? == Link::Root)
    }

    pub fn set_count(&self) -> usize {
        self.links.iter().filter(|link| **link == Link::Root).count()
    }

    /// Returns the root of the set containing `index`, pointing `index` and each of its ancestors
    /// directly at that root.
    ///
    /// Runs in two passes without recursion. The first pass climbs to the root while reversing the
    /// links it crosses, so that each visited element points at the element it was reached from;
    /// `index` itself temporarily becomes a [`Link::Root`], which terminates the second pass. The
    /// second pass walks the reversed chain back down and points every element at the root.
    pub fn find(&mut self, index: usize) -> Result<usize, ForestError> {
        self.check(index)?;

        let mut child = None;
        let mut node = index;
        while let Link::Parent(parent) = self.links[node] {
            self.links[node] = Link::from(child);
            child = Some(node);
            node = parent;
        }
        let root = node;

        while let Some(node) = child {
            child = core::mem::replace(&mut self.links[node], Link::Parent(root)).parent();
            trace!("compressed {node} -> {root}");
        }

        Ok(root)
    }

    /// Merges the sets containing `a` and `b` by linking the root of `a` under the root of `b`.
    /// Returns `false` if both were already in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> Result<bool, ForestError> {
        let a = self.find(a)?;
        let b = self.find(b)?;
        if a == b {
            return Ok(false);
        }

        debug!("linking root {a} under root {b}");
        self.links[a] = Link::Parent(b);
        Ok(true)
    }

    pub fn same_set(&mut self, a: usize, b: usize) -> Result<bool, ForestError> {
        Ok(self.find(a)? == self.find(b)?)
    }

    fn check(&self, index: usize) -> Result<(), ForestError> {
        if index < self.links.len() {
            Ok(())
        } else {
            debug!("rejected element {index} of {}", self.links.len());
            Err(ForestError::IndexOutOfRange {
                index,
                len: self.links.len(),
            })
        }
    }
}
