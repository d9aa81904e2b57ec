use crate::disjoint_sets::{DisjointSets, ForestError, Link};
use crate::probing::{ProbingHashSet, Slot};
use core::fmt::{self, Display};
use displaydoc::Display;
use rustc_hash::FxHashMap;

const SLOTS_PER_ROW: usize = 10;

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
/// Inserting value {value} experienced {collisions} collisions.
pub struct WorstInsertion {
    pub value: i32,
    pub collisions: usize,
}

/// Accumulates the collision counts reported by a run of insertions.
#[derive(Debug, Default)]
pub struct CollisionStats {
    worst: Option<WorstInsertion>,
    histogram: FxHashMap<usize, usize>,
    rejected: usize,
}

impl CollisionStats {
    pub fn new() -> Self {
        Self::default()
    }

    // Ties keep the earliest insertion.
    pub fn record(&mut self, value: i32, collisions: usize) {
        if self.worst.is_none_or(|worst| collisions > worst.collisions) {
            self.worst = Some(WorstInsertion { value, collisions });
        }
        *self.histogram.entry(collisions).or_default() += 1;
    }

    pub fn record_rejection(&mut self) {
        self.rejected += 1;
    }

    pub fn worst(&self) -> Option<WorstInsertion> {
        self.worst
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn inserted(&self) -> usize {
        self.histogram.values().sum()
    }

    /// Number of insertions per collision count, ordered by collision count.
    pub fn histogram(&self) -> Vec<(usize, usize)> {
        let mut rows: Vec<_> = self.histogram.iter().map(|(&k, &n)| (k, n)).collect();
        rows.sort_unstable();
        rows
    }

    pub fn display_histogram(&self) -> impl Display + '_ {
        struct HistogramDisplay<'a>(&'a CollisionStats);

        impl Display for HistogramDisplay<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for (collisions, count) in self.0.histogram() {
                    writeln!(f, "{collisions:>3} collisions: {count}")?;
                }
                if self.0.rejected > 0 {
                    writeln!(f, "rejected: {}", self.0.rejected)?;
                }
                Ok(())
            }
        }

        HistogramDisplay(self)
    }
}

/// Renders the slots ten per row, each row labelled with the index of its first slot.
pub fn display_table(set: &ProbingHashSet) -> impl Display + '_ {
    struct TableDisplay<'a>(&'a [Slot]);

    impl Display for TableDisplay<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            for (row, slots) in self.0.chunks(SLOTS_PER_ROW).enumerate() {
                write!(f, "{:>3}:", row * SLOTS_PER_ROW)?;
                for slot in slots {
                    match slot {
                        Slot::Empty => write!(f, "      ")?,
                        Slot::Occupied(value) => write!(f, "{value:>6}")?,
                    }
                }
                writeln!(f)?;
            }
            Ok(())
        }
    }

    TableDisplay(set.slots())
}

/// Renders the parent link of each listed element, one per line.
pub fn display_links(
    forest: &DisjointSets,
    elements: &[usize],
) -> Result<impl Display + use<>, ForestError> {
    struct LinksDisplay(Vec<(usize, Link)>);

    impl Display for LinksDisplay {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            for (element, link) in &self.0 {
                match link {
                    Link::Root => writeln!(f, "parent[{element}] = root")?,
                    Link::Parent(parent) => writeln!(f, "parent[{element}] = {parent}")?,
                }
            }
            Ok(())
        }
    }

    let links = elements
        .iter()
        .map(|&element| Ok((element, forest.link(element)?)))
        .collect::<Result<_, ForestError>>()?;
    Ok(LinksDisplay(links))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worst_insertion_keeps_first_maximum() {
        let mut stats = CollisionStats::new();
        stats.record(1001, 0);
        stats.record(2002, 3);
        stats.record(3003, 1);
        stats.record(4004, 3);
        stats.record_rejection();

        let worst = stats.worst().unwrap();
        assert_eq!(worst, WorstInsertion { value: 2002, collisions: 3 });
        assert_eq!(
            worst.to_string(),
            "Inserting value 2002 experienced 3 collisions."
        );
        assert_eq!(stats.histogram(), [(0, 1), (1, 1), (3, 2)]);
        assert_eq!(stats.inserted(), 4);
        assert_eq!(stats.rejected(), 1);
        assert_eq!(
            stats.display_histogram().to_string(),
            "  0 collisions: 1\n  1 collisions: 1\n  3 collisions: 2\nrejected: 1\n"
        );
    }

    #[test]
    fn empty_stats_have_no_worst() {
        let stats = CollisionStats::new();
        assert_eq!(stats.worst(), None);
        assert_eq!(stats.display_histogram().to_string(), "");
    }

    #[test]
    fn table_rows_hold_ten_slots() {
        let mut set = ProbingHashSet::new(12);
        set.insert(1).unwrap();
        set.insert(13).unwrap();
        set.insert(11).unwrap();

        let expected = format!(
            "  0:{}{:>6}{:>6}{}\n 10:{}{:>6}\n",
            " ".repeat(6),
            1,
            13,
            " ".repeat(6 * 7),
            " ".repeat(6),
            11,
        );
        assert_eq!(display_table(&set).to_string(), expected);
    }

    #[test]
    fn links_show_roots_and_parents() {
        let mut forest = DisjointSets::new(8);
        forest.union(1, 3).unwrap();
        forest.union(3, 5).unwrap();
        assert_eq!(
            display_links(&forest, &[1, 3, 5]).unwrap().to_string(),
            "parent[1] = 3\nparent[3] = 5\nparent[5] = root\n"
        );
        assert!(display_links(&forest, &[8]).is_err());
    }
}
