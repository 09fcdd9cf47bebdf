use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use core::ops::AddAssign;

/// Accumulated dependency parser evaluation counts.
///
/// Scores are kept as counts so that adding two aggregates is exact; the
/// ratios are derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct ParserEvaluationScore {
    /// Head and label both correct.
    pub labeled_attachment: u32,
    /// Head correct.
    pub unlabeled_attachment: u32,
    /// Label correct.
    pub label: u32,
    pub total: u32,
}

impl ParserEvaluationScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score of a single compared relation.
    pub fn single(labeled_attachment: bool, unlabeled_attachment: bool, label: bool) -> Self {
        Self {
            labeled_attachment: labeled_attachment as u32,
            unlabeled_attachment: unlabeled_attachment as u32,
            label: label as u32,
            total: 1,
        }
    }

    pub fn add(&mut self, other: &ParserEvaluationScore) {
        self.labeled_attachment += other.labeled_attachment;
        self.unlabeled_attachment += other.unlabeled_attachment;
        self.label += other.label;
        self.total += other.total;
    }

    pub fn las(&self) -> f64 {
        self.ratio(self.labeled_attachment)
    }

    pub fn uas(&self) -> f64 {
        self.ratio(self.unlabeled_attachment)
    }

    pub fn ls(&self) -> f64 {
        self.ratio(self.label)
    }

    fn ratio(&self, count: u32) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64
        }
    }
}

impl AddAssign for ParserEvaluationScore {
    fn add_assign(&mut self, rhs: Self) {
        self.add(&rhs);
    }
}
