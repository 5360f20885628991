//! # Partitioning
//!
//! Equivalence classes, region classification and rough (nested)
//! equivalence classes.

/**
 * File: /src/partition/mod.rs
 * Created Date: Monday, March 2nd 2026
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 5th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */

pub mod equivalence;
pub mod histogram;
pub mod key;
pub mod region;
pub mod rough;

pub use equivalence::{partition, refine, EquivalenceClass, Partition};
pub use histogram::DecisionHistogram;
pub use key::PartitionKey;
pub use region::{classify_class, classify_histogram, classify_rough, positive_region_size, Region};
pub use rough::{NestedPartition, RoughEquivalenceClass};
