//! Fixed-capacity top-K of edge candidates, kept ascending by |magnitude|.
//!
//! The weakest candidate sits at index 0. A full set only admits a candidate
//! whose strength strictly exceeds the weakest, so among equal strengths the
//! earliest pushed is retained. Equal strengths are stored latest-first,
//! which makes index 0 the candidate to evict.
//!
//! Insertion is O(k): a binary search for the slot plus a shift.
use super::types::EdgeCandidate;
use crate::error::{EdgeError, Result};

#[derive(Clone, Debug)]
pub struct TopKEdges {
    k: usize,
    items: Vec<EdgeCandidate>,
}

impl TopKEdges {
    /// Create an empty set holding at most `k` candidates. `k` must be positive.
    pub fn new(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(EdgeError::InvalidParameter(
                "number of edges must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            k,
            items: Vec::with_capacity(k),
        })
    }

    /// Offer a candidate. Returns whether it was retained.
    pub fn push(&mut self, candidate: EdgeCandidate) -> bool {
        let strength = candidate.strength();
        if self.items.len() == self.k {
            let weakest = self.items[0].strength();
            if !strength.total_cmp(&weakest).is_gt() {
                return false;
            }
            self.items.remove(0);
        }
        let slot = self
            .items
            .partition_point(|e| e.strength().total_cmp(&strength).is_lt());
        self.items.insert(slot, candidate);
        true
    }

    pub fn capacity(&self) -> usize {
        self.k
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn weakest(&self) -> Option<&EdgeCandidate> {
        self.items.first()
    }

    pub fn strongest(&self) -> Option<&EdgeCandidate> {
        self.items.last()
    }

    pub fn as_slice(&self) -> &[EdgeCandidate] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<EdgeCandidate> {
        self.items
    }
}

impl Extend<EdgeCandidate> for TopKEdges {
    fn extend<T: IntoIterator<Item = EdgeCandidate>>(&mut self, iter: T) {
        for candidate in iter {
            self.push(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(row: usize, magnitude: f32) -> EdgeCandidate {
        EdgeCandidate {
            row,
            column: 0,
            magnitude,
        }
    }

    fn rows(set: &TopKEdges) -> Vec<usize> {
        set.as_slice().iter().map(|c| c.row).collect()
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(matches!(TopKEdges::new(0), Err(EdgeError::InvalidParameter(_))));
    }

    #[test]
    fn reports_only_what_was_pushed() {
        let mut set = TopKEdges::new(5).unwrap();
        set.push(cand(0, 0.0));
        set.push(cand(1, -2.0));
        assert_eq!(set.len(), 2);
        assert_eq!(rows(&set), vec![0, 1]);
    }

    #[test]
    fn keeps_strongest_by_absolute_value_in_ascending_order() {
        let mut set = TopKEdges::new(3).unwrap();
        set.extend([
            cand(0, 1.0),
            cand(1, -7.0),
            cand(2, 3.0),
            cand(3, 0.5),
            cand(4, 5.0),
            cand(5, -4.0),
        ]);
        assert_eq!(rows(&set), vec![5, 4, 1]);
        assert_eq!(set.weakest().unwrap().magnitude, -4.0);
        assert_eq!(set.strongest().unwrap().magnitude, -7.0);
        let strengths: Vec<f32> = set.as_slice().iter().map(|c| c.strength()).collect();
        assert!(strengths.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn ties_keep_the_first_encountered() {
        let mut set = TopKEdges::new(1).unwrap();
        assert!(set.push(cand(0, 1.0)));
        assert!(!set.push(cand(1, -1.0)));
        assert!(!set.push(cand(2, 1.0)));
        assert_eq!(rows(&set), vec![0]);

        let mut set = TopKEdges::new(2).unwrap();
        set.extend([cand(0, 2.0), cand(1, 2.0), cand(2, 2.0), cand(3, 3.0)]);
        // row 1 is evicted before row 0
        assert_eq!(rows(&set), vec![0, 3]);
    }
}
