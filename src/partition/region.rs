/**
 * File: /src/partition/region.rs
 * Created Date: Tuesday, March 3rd 2026
 * Author: Zihan
 * -----
 * Last Modified: Tuesday, 10th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-03-03		Zihan	Region classification of (rough) equivalence classes
 */

use super::equivalence::{EquivalenceClass, Partition};
use super::histogram::DecisionHistogram;

/// Decision-consistency region of a class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Exactly one decision value
    Positive,
    /// Mixed, and no refinement within the attribute universe can make any
    /// part of it consistent. Carries the instance count.
    Negative(usize),
    /// Mixed, but refining may still separate a consistent part
    Boundary,
}

impl Region {
    pub fn is_positive(&self) -> bool {
        matches!(self, Region::Positive)
    }

    pub fn is_boundary(&self) -> bool {
        matches!(self, Region::Boundary)
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Region::Negative(_))
    }
}

/// Classify one equivalence class.
///
/// `refinable` is false when the class was built over the full conditional
/// attribute set, so a mixed class can never be split further.
pub fn classify_class(class: &EquivalenceClass, refinable: bool) -> Region {
    classify_histogram(class.histogram(), refinable)
}

pub fn classify_histogram(histogram: &DecisionHistogram, refinable: bool) -> Region {
    if histogram.is_consistent() {
        Region::Positive
    } else if refinable {
        Region::Boundary
    } else {
        Region::Negative(histogram.total())
    }
}

/// Classify a rough class from its merged histogram and the consistency of
/// its constituent classes (taken over the full attribute set).
///
/// A mixed rough class whose constituents are all inconsistent is
/// NEGATIVE: refinement only separates those constituents and each stays
/// mixed.
pub fn classify_rough<I>(merged: &DecisionHistogram, constituents_consistent: I) -> Region
where
    I: IntoIterator<Item = bool>,
{
    if merged.is_consistent() {
        return Region::Positive;
    }
    let mut any_consistent = false;
    for consistent in constituents_consistent {
        if consistent {
            any_consistent = true;
            break;
        }
    }
    if any_consistent {
        Region::Boundary
    } else {
        Region::Negative(merged.total())
    }
}

/// Instances lying in decision-consistent classes
pub fn positive_region_size(partition: &Partition) -> usize {
    partition
        .classes()
        .iter()
        .filter(|c| c.is_consistent())
        .map(|c| c.instance_count())
        .sum()
}
