//! A fixed-capacity set of integers using open addressing with linear probing.
//!
//! Each value hashes to its home slot `value mod capacity` (the Euclidean remainder, so negative
//! values are placed too). If the home slot is taken, the following slots are checked one by one
//! until a free one turns up. Every occupied slot checked on the way counts as one collision.
//!
//! The table never grows and values are never removed, so a value always lives somewhere along
//! its own probe sequence, after a run of occupied slots.
use core::ops::Range;
use log::{debug, trace};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InsertError {
    #[error("All {capacity} slots of the table are occupied")]
    TableFull { capacity: usize },

    #[error("Probing for {value} ran past the end of the table starting from slot {home}")]
    ProbeOverflow { value: i32, home: usize },

    #[error("Value {value} is already stored in slot {slot}")]
    AlreadyPresent { value: i32, slot: usize },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(i32),
}

impl Slot {
    pub fn value(self) -> Option<i32> {
        match self {
            Self::Empty => None,
            Self::Occupied(value) => Some(value),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }
}

/// What happens when probing reaches the last slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProbeStrategy {
    /// Stop at the end of the table. Slots before the home slot are never considered.
    #[default]
    Bounded,
    /// Continue from slot 0 until the home slot is reached again.
    Wrapping,
}

#[derive(Clone, Debug)]
pub struct ProbingHashSet {
    slots: Vec<Slot>,
    len: usize,
    strategy: ProbeStrategy,
}

impl ProbingHashSet {
    pub fn new(capacity: usize) -> Self {
        Self::with_strategy(capacity, ProbeStrategy::default())
    }

    pub fn with_strategy(capacity: usize, strategy: ProbeStrategy) -> Self {
        assert!(capacity > 0, "hash set capacity must be positive");
        Self {
            slots: vec![Slot::Empty; capacity],
            len: 0,
            strategy,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn strategy(&self) -> ProbeStrategy {
        self.strategy
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn home_slot(&self, value: i32) -> usize {
        // The capacity of an allocated `Vec<Slot>` always fits in `i64`.
        i64::from(value).rem_euclid(self.capacity() as i64) as usize
    }

    /// Stores `value` in the first free slot of its probe sequence and returns the number of
    /// occupied slots skipped to get there.
    ///
    /// A full table is rejected before probing. Under [`ProbeStrategy::Bounded`], a value whose
    /// probe sequence hits the end of the table without finding a free slot is rejected as well,
    /// even if free slots remain before its home slot. On error the table is unchanged.
    pub fn insert(&mut self, value: i32) -> Result<usize, InsertError> {
        if self.len == self.capacity() {
            debug!("rejected {value}: table is full");
            return Err(InsertError::TableFull {
                capacity: self.capacity(),
            });
        }

        let home = self.home_slot(value);
        for (collisions, index) in self.probe_sequence(home).enumerate() {
            match self.slots[index] {
                Slot::Empty => {
                    self.slots[index] = Slot::Occupied(value);
                    self.len += 1;
                    return Ok(collisions);
                }
                Slot::Occupied(existing) if existing == value => {
                    return Err(InsertError::AlreadyPresent { value, slot: index });
                }
                Slot::Occupied(existing) => {
                    trace!("slot {index} for {value} is taken by {existing}");
                }
            }
        }

        debug!("rejected {value}: no free slot after {home}");
        Err(InsertError::ProbeOverflow { value, home })
    }

    pub fn position(&self, value: i32) -> Option<usize> {
        self.probe_sequence(self.home_slot(value))
            .take_while(|&index| !self.slots[index].is_empty())
            .find(|&index| self.slots[index] == Slot::Occupied(value))
    }

    pub fn contains(&self, value: i32) -> bool {
        self.position(value).is_some()
    }

    /// Iterates over the stored values in slot order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.slots.iter().filter_map(|slot| slot.value())
    }

    fn probe_sequence(&self, home: usize) -> core::iter::Chain<Range<usize>, Range<usize>> {
        let wrapped = match self.strategy {
            ProbeStrategy::Bounded => 0..0,
            ProbeStrategy::Wrapping => 0..home,
        };
        (home..self.capacity()).chain(wrapped)
    }
}
