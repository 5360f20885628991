//! # Equivalence Classes
//!
//! Partitioning of an instance universe by attribute-value signature, and
//! refinement of an existing partition by one more attribute.

/**
 * File: /src/partition/equivalence.rs
 * Created Date: Monday, March 2nd 2026
 * Author: Zihan
 * -----
 * Last Modified: Tuesday, 17th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-03-02		Zihan	Created partitioner and equivalence classes
 * 2026-03-09		Zihan	Refinement by a single attribute
 * 2026-03-17		Zihan	In-place absorption of arrived instances
 */

use std::collections::HashMap;

use log::debug;

use super::histogram::DecisionHistogram;
use super::key::PartitionKey;
use crate::error::ReductError;
use crate::table::{Attribute, InstanceSource};

/// Instances sharing one partition key
#[derive(Debug, Clone)]
pub struct EquivalenceClass {
    key: PartitionKey,
    members: Vec<usize>,
    histogram: DecisionHistogram,
}

impl EquivalenceClass {
    fn new(key: PartitionKey) -> Self {
        Self {
            key,
            members: Vec::new(),
            histogram: DecisionHistogram::new(),
        }
    }

    fn push<S: InstanceSource + ?Sized>(&mut self, source: &S, row: usize) {
        self.members.push(row);
        self.histogram.add(source.decision(row), source.weight(row));
    }

    pub fn key(&self) -> &PartitionKey {
        &self.key
    }

    /// Row indices of the source, in insertion order
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn histogram(&self) -> &DecisionHistogram {
        &self.histogram
    }

    /// Number of instances, counting row multiplicities
    pub fn instance_count(&self) -> usize {
        self.histogram.total()
    }

    pub fn is_consistent(&self) -> bool {
        self.histogram.is_consistent()
    }
}

/// Equivalence classes of a universe under one attribute subset
#[derive(Debug, Clone)]
pub struct Partition {
    attributes: Vec<Attribute>,
    classes: Vec<EquivalenceClass>,
    index: HashMap<PartitionKey, usize>,
}

impl Partition {
    fn empty(attributes: Vec<Attribute>) -> Self {
        Self {
            attributes,
            classes: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn insert<S: InstanceSource + ?Sized>(&mut self, source: &S, key: PartitionKey, row: usize) -> bool {
        match self.index.get(&key) {
            Some(&position) => {
                self.classes[position].push(source, row);
                false
            }
            None => {
                let mut class = EquivalenceClass::new(key.clone());
                class.push(source, row);
                self.index.insert(key, self.classes.len());
                self.classes.push(class);
                true
            }
        }
    }

    /// Attribute subset the partition was built from, in key layout order
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn classes(&self) -> &[EquivalenceClass] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn class(&self, key: &PartitionKey) -> Option<&EquivalenceClass> {
        self.index.get(key).map(|&position| &self.classes[position])
    }

    /// Total instances over all classes
    pub fn instance_count(&self) -> usize {
        self.classes.iter().map(|c| c.instance_count()).sum()
    }

    pub fn histograms(&self) -> Vec<&DecisionHistogram> {
        self.classes.iter().map(|c| c.histogram()).collect()
    }

    /// Class position of every row in `0..rows`; rows not covered map to
    /// `usize::MAX`
    pub fn labels(&self, rows: usize) -> Vec<usize> {
        let mut labels = vec![usize::MAX; rows];
        for (position, class) in self.classes.iter().enumerate() {
            for &member in class.members() {
                if member < rows {
                    labels[member] = position;
                }
            }
        }
        labels
    }

    /// Merge newly arrived rows into the existing classes in place.
    ///
    /// Returns the number of classes opened for keys not seen before.
    /// Significances cached against the old partition are stale afterwards.
    pub fn absorb<S, I>(&mut self, source: &S, rows: I) -> Result<usize, ReductError>
    where
        S: InstanceSource + ?Sized,
        I: IntoIterator<Item = usize>,
    {
        source.check_attributes(&self.attributes)?;
        let mut opened = 0;
        for row in rows {
            if row >= source.len() {
                return Err(ReductError::InvalidConfiguration(format!(
                    "row {} beyond source of {} rows",
                    row,
                    source.len()
                )));
            }
            let key = PartitionKey::of(source, row, &self.attributes);
            if self.insert(source, key, row) {
                opened += 1;
            }
        }
        debug!(
            "absorbed rows into partition over {:?}: {} new classes, {} total",
            self.attributes,
            opened,
            self.classes.len()
        );
        Ok(opened)
    }
}

/// Partition every row of `source` by `attributes`.
///
/// The empty subset yields a single class holding the whole universe.
/// Classes appear in the order of their first member.
pub fn partition<S: InstanceSource + ?Sized>(
    source: &S,
    attributes: &[Attribute],
) -> Result<Partition, ReductError> {
    if source.is_empty() {
        return Err(ReductError::EmptyUniverse);
    }
    source.check_attributes(attributes)?;

    let mut result = Partition::empty(attributes.to_vec());
    for row in 0..source.len() {
        let key = PartitionKey::of(source, row, attributes);
        result.insert(source, key, row);
    }
    Ok(result)
}

/// Partition of `attributes ∪ {attribute}` obtained by splitting each class
/// of `base` by `attribute` alone.
pub fn refine<S: InstanceSource + ?Sized>(
    source: &S,
    base: &Partition,
    attribute: Attribute,
) -> Result<Partition, ReductError> {
    source.check_attributes(&[attribute])?;
    if base.attributes.contains(&attribute) {
        return Ok(base.clone());
    }

    let mut attributes = base.attributes.clone();
    attributes.push(attribute);
    let mut result = Partition::empty(attributes);

    for class in &base.classes {
        for &row in class.members() {
            let key = class.key().extended(source.value(row, attribute));
            result.insert(source, key, row);
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::test_utils::{random_table, small_table};
    use crate::table::CompactedTable;
    use crate::util::are_equivalent_classifications;

    fn sizes(partition: &Partition) -> Vec<usize> {
        let mut sizes: Vec<usize> = partition.classes().iter().map(|c| c.instance_count()).collect();
        sizes.sort_unstable();
        sizes
    }

    #[test]
    fn test_small_table_partitions() {
        let table = small_table();
        assert_eq!(sizes(&partition(&table, &[1]).unwrap()), vec![1, 3]);
        let by_both = partition(&table, &[1, 2]).unwrap();
        assert_eq!(sizes(&by_both), vec![1, 1, 2]);
        let key = PartitionKey::from_values(vec![1, 1]);
        assert_eq!(by_both.class(&key).unwrap().members(), &[0, 1]);
    }

    #[test]
    fn test_empty_subset_single_class() {
        let table = small_table();
        let p = partition(&table, &[]).unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p.classes()[0].instance_count(), 4);
        assert_eq!(p.classes()[0].histogram().distinct(), 2);
    }

    #[test]
    fn test_configuration_errors() {
        let table = small_table();
        assert_eq!(
            partition(&table, &[0, 1]).unwrap_err(),
            ReductError::DecisionAttributeInSubset
        );
        let empty = crate::table::DecisionTable::from_rows(vec![]).unwrap();
        assert_eq!(partition(&empty, &[]).unwrap_err(), ReductError::EmptyUniverse);
    }

    #[test]
    fn test_every_instance_in_exactly_one_class() {
        let table = random_table(7, 200, 6, 3);
        for attributes in [vec![], vec![1], vec![2, 4], vec![1, 2, 3, 4, 5, 6]] {
            let p = partition(&table, &attributes).unwrap();
            assert_eq!(p.instance_count(), 200);
            let mut seen = vec![0usize; 200];
            for class in p.classes() {
                assert_eq!(class.histogram().total(), class.members().len());
                for &m in class.members() {
                    seen[m] += 1;
                }
            }
            assert!(seen.iter().all(|&n| n == 1));
        }
    }

    #[test]
    fn test_refine_matches_full_partition() {
        let table = random_table(11, 150, 5, 3);
        let base = partition(&table, &[2, 5]).unwrap();
        let refined = refine(&table, &base, 3).unwrap();
        let direct = partition(&table, &[2, 5, 3]).unwrap();
        assert_eq!(refined.attributes(), &[2, 5, 3]);
        assert!(are_equivalent_classifications(
            refined.labels(150),
            direct.labels(150)
        ));
    }

    #[test]
    fn test_refinement_is_finer() {
        let table = random_table(3, 120, 5, 2);
        let coarse = partition(&table, &[1]).unwrap();
        let fine = partition(&table, &[1, 4, 5]).unwrap();
        let coarse_labels = coarse.labels(120);
        for class in fine.classes() {
            let first = coarse_labels[class.members()[0]];
            assert!(class.members().iter().all(|&m| coarse_labels[m] == first));
        }
    }

    #[test]
    fn test_refine_by_present_attribute_is_noop() {
        let table = small_table();
        let base = partition(&table, &[1]).unwrap();
        let same = refine(&table, &base, 1).unwrap();
        assert_eq!(same.attributes(), &[1]);
        assert_eq!(same.len(), base.len());
    }

    #[test]
    fn test_absorb_arrivals() {
        let mut table = small_table();
        let mut p = partition(&table, &[1, 2]).unwrap();
        let arrived = table.append_rows(&[vec![0, 1, 1], vec![1, 3, 3]]).unwrap();
        let opened = p.absorb(&table, arrived).unwrap();
        assert_eq!(opened, 1);
        assert_eq!(p.instance_count(), 6);
        let rebuilt = partition(&table, &[1, 2]).unwrap();
        assert!(are_equivalent_classifications(p.labels(6), rebuilt.labels(6)));
    }

    #[test]
    fn test_compacted_table_same_histograms() {
        let table = random_table(5, 300, 3, 2);
        let compacted = CompactedTable::from_source(&table);
        assert!(compacted.len() < table.len());
        let plain = partition(&table, &[1, 3]).unwrap();
        let packed = partition(&compacted, &[1, 3]).unwrap();
        assert_eq!(plain.len(), packed.len());
        for class in plain.classes() {
            let other = packed.class(class.key()).unwrap();
            assert_eq!(class.histogram(), other.histogram());
        }
    }
}
