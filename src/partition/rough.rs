//! # Rough (Nested) Equivalence Classes
//!
//! A nested partition keeps the equivalence classes of the full conditional
//! attribute set as atoms and groups them into coarser rough classes under
//! an attribute subset. Refining or coarsening a nested partition reads the
//! attribute values from the atom keys, so the instances are never scanned
//! again after the atoms are built.

/**
 * File: /src/partition/rough.rs
 * Created Date: Thursday, March 5th 2026
 * Author: Zihan
 * -----
 * Last Modified: Friday, 20th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-03-05		Zihan	Created nested partition over full-attribute atoms
 * 2026-03-11		Zihan	Early-exit boundary scan for core finding
 * 2026-03-18		Zihan	Merge newly arrived classes in place
 * 2026-03-20		Zihan	Arrivals reopen retained-away rough classes
 */

use std::collections::HashMap;

use log::debug;

use super::equivalence::Partition;
use super::histogram::DecisionHistogram;
use super::key::PartitionKey;
use super::region::{classify_rough, Region};
use crate::error::ReductError;
use crate::table::Attribute;

/// Equivalence class of the full conditional attribute set
#[derive(Debug, Clone)]
struct Atom {
    key: PartitionKey,
    histogram: DecisionHistogram,
}

/// Group of atoms sharing one key under a smaller attribute subset
#[derive(Debug, Clone)]
pub struct RoughEquivalenceClass {
    key: PartitionKey,
    constituents: Vec<usize>,
    histogram: DecisionHistogram,
    region: Region,
}

impl RoughEquivalenceClass {
    pub fn key(&self) -> &PartitionKey {
        &self.key
    }

    /// Atom indices, in the atom order of the owning nested partition
    pub fn constituents(&self) -> &[usize] {
        &self.constituents
    }

    /// Decision histogram of all constituents merged
    pub fn histogram(&self) -> &DecisionHistogram {
        &self.histogram
    }

    pub fn instance_count(&self) -> usize {
        self.histogram.total()
    }

    pub fn region(&self) -> Region {
        self.region
    }
}

/// Rough classes of an attribute subset over the atoms of the full set
#[derive(Debug, Clone)]
pub struct NestedPartition {
    universe_attributes: Vec<Attribute>,
    atoms: Vec<Atom>,
    atom_index: HashMap<PartitionKey, usize>,
    attributes: Vec<Attribute>,
    positions: Vec<usize>,
    classes: Vec<RoughEquivalenceClass>,
    class_index: HashMap<PartitionKey, usize>,
}

impl NestedPartition {
    /// Take the classes of `base` as atoms and group them by `attributes`,
    /// which must be a subset of the attributes `base` was built from.
    pub fn new(base: &Partition, attributes: &[Attribute]) -> Result<Self, ReductError> {
        let universe_attributes = base.attributes().to_vec();
        let positions = key_positions(&universe_attributes, attributes)?;
        let mut atoms = Vec::with_capacity(base.len());
        let mut atom_index = HashMap::with_capacity(base.len());
        for class in base.classes() {
            atom_index.insert(class.key().clone(), atoms.len());
            atoms.push(Atom {
                key: class.key().clone(),
                histogram: class.histogram().clone(),
            });
        }

        let mut nested = Self {
            universe_attributes,
            atoms,
            atom_index,
            attributes: attributes.to_vec(),
            positions,
            classes: Vec::new(),
            class_index: HashMap::new(),
        };
        let all: Vec<usize> = (0..nested.atoms.len()).collect();
        let classes = nested.group(&all, &nested.positions);
        nested.set_classes(classes);
        Ok(nested)
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn classes(&self) -> &[RoughEquivalenceClass] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Instances covered by the current rough classes
    pub fn instance_count(&self) -> usize {
        self.classes.iter().map(|c| c.instance_count()).sum()
    }

    pub fn histograms(&self) -> Vec<&DecisionHistogram> {
        self.classes.iter().map(|c| c.histogram()).collect()
    }

    /// Instances in POSITIVE rough classes
    pub fn positive_region_size(&self) -> usize {
        self.classes
            .iter()
            .filter(|c| c.region().is_positive())
            .map(|c| c.instance_count())
            .sum()
    }

    /// Drop rough classes that fail `keep`, e.g. classes whose contribution
    /// has been accounted for elsewhere
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&RoughEquivalenceClass) -> bool,
    {
        let mut classes = std::mem::take(&mut self.classes);
        classes.retain(keep);
        self.set_classes(classes);
    }

    /// Nested partition of `attributes ∪ {attribute}`, splitting each rough
    /// class by the atom key value at `attribute`
    pub fn refine(&self, attribute: Attribute) -> Result<Self, ReductError> {
        if self.attributes.contains(&attribute) {
            return Ok(self.clone());
        }
        let position = key_positions(&self.universe_attributes, &[attribute])?[0];
        let mut classes = Vec::new();
        for class in &self.classes {
            classes.extend(self.split(class, position));
        }

        let mut attributes = self.attributes.clone();
        attributes.push(attribute);
        let mut positions = self.positions.clone();
        positions.push(position);

        let mut refined = Self {
            universe_attributes: self.universe_attributes.clone(),
            atoms: self.atoms.clone(),
            atom_index: self.atom_index.clone(),
            attributes,
            positions,
            classes: Vec::new(),
            class_index: HashMap::new(),
        };
        refined.set_classes(classes);
        Ok(refined)
    }

    /// Rough classes of the current classes split by `attribute`, without
    /// building a new nested partition
    pub fn refined_classes(&self, attribute: Attribute) -> Result<Vec<RoughEquivalenceClass>, ReductError> {
        if self.attributes.contains(&attribute) {
            return Ok(self.classes.clone());
        }
        let position = key_positions(&self.universe_attributes, &[attribute])?[0];
        Ok(self
            .classes
            .iter()
            .flat_map(|class| self.split(class, position))
            .collect())
    }

    /// Rough classes of the atoms grouped by `attributes` (any subset of the
    /// universe attributes), ignoring the current grouping
    pub fn project(&self, attributes: &[Attribute]) -> Result<Vec<RoughEquivalenceClass>, ReductError> {
        let positions = key_positions(&self.universe_attributes, attributes)?;
        let all: Vec<usize> = (0..self.atoms.len()).collect();
        Ok(self.group(&all, &positions))
    }

    /// Key of the first rough class that turns BOUNDARY when the atoms are
    /// grouped by `attributes`, scanning atoms in order and stopping at the
    /// first group proven mixed while holding a consistent atom.
    pub fn first_boundary(&self, attributes: &[Attribute]) -> Result<Option<PartitionKey>, ReductError> {
        let positions = key_positions(&self.universe_attributes, attributes)?;
        // key -> (decision of the first consistent-looking atom, mixed, any consistent)
        let mut groups: HashMap<PartitionKey, GroupState> = HashMap::new();
        for atom in &self.atoms {
            let key = atom.key.project(&positions);
            let state = groups.entry(key.clone()).or_default();
            state.absorb(&atom.histogram);
            if state.is_boundary() {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }

    /// Merge the classes of `arrived`, a partition of newly arrived rows
    /// over the same universe attributes, into the atoms and rough classes
    /// in place. Returns the number of atoms opened.
    ///
    /// An arrival whose rough class was dropped by `retain` reopens that
    /// class with every atom it groups, old instances included.
    pub fn merge_arrivals(&mut self, arrived: &Partition) -> Result<usize, ReductError> {
        if arrived.attributes() != self.universe_attributes.as_slice() {
            return Err(ReductError::InvalidConfiguration(format!(
                "arrived partition over {:?}, nested partition atoms over {:?}",
                arrived.attributes(),
                self.universe_attributes
            )));
        }

        let mut opened = 0;
        let mut reopened = 0;
        for class in arrived.classes() {
            let atom = match self.atom_index.get(class.key()) {
                Some(&atom) => {
                    self.atoms[atom].histogram.merge(class.histogram());
                    atom
                }
                None => {
                    let atom = self.atoms.len();
                    self.atom_index.insert(class.key().clone(), atom);
                    self.atoms.push(Atom {
                        key: class.key().clone(),
                        histogram: class.histogram().clone(),
                    });
                    opened += 1;
                    atom
                }
            };

            let rough_key = self.atoms[atom].key.project(&self.positions);
            match self.class_index.get(&rough_key) {
                Some(&position) => {
                    let rough = &mut self.classes[position];
                    if !rough.constituents.contains(&atom) {
                        rough.constituents.push(atom);
                    }
                    rough.histogram.merge(class.histogram());
                    rough.region = classify_rough(
                        &rough.histogram,
                        rough
                            .constituents
                            .iter()
                            .map(|&a| self.atoms[a].histogram.is_consistent()),
                    );
                }
                None => {
                    // atoms already hold the arrival, so rebuild from them
                    let constituents: Vec<usize> = (0..self.atoms.len())
                        .filter(|&a| self.atoms[a].key.project(&self.positions) == rough_key)
                        .collect();
                    let rough = self.build_class(rough_key.clone(), constituents);
                    if rough.instance_count() > class.instance_count() {
                        reopened += 1;
                    }
                    self.class_index.insert(rough_key, self.classes.len());
                    self.classes.push(rough);
                }
            }
        }

        debug!(
            "merged {} arrived classes: {} new atoms, {} reopened rough classes, {} rough classes",
            arrived.len(),
            opened,
            reopened,
            self.classes.len()
        );
        Ok(opened)
    }

    fn set_classes(&mut self, classes: Vec<RoughEquivalenceClass>) {
        self.class_index = classes
            .iter()
            .enumerate()
            .map(|(position, class)| (class.key.clone(), position))
            .collect();
        self.classes = classes;
    }

    fn split(&self, class: &RoughEquivalenceClass, position: usize) -> Vec<RoughEquivalenceClass> {
        let mut order: Vec<i32> = Vec::new();
        let mut buckets: HashMap<i32, Vec<usize>> = HashMap::new();
        for &atom in &class.constituents {
            let value = self.atoms[atom].key.get(position);
            buckets
                .entry(value)
                .or_insert_with(|| {
                    order.push(value);
                    Vec::new()
                })
                .push(atom);
        }
        order
            .into_iter()
            .map(|value| {
                let constituents = buckets.remove(&value).unwrap_or_default();
                self.build_class(class.key.extended(value), constituents)
            })
            .collect()
    }

    fn group(&self, atoms: &[usize], positions: &[usize]) -> Vec<RoughEquivalenceClass> {
        let mut order: Vec<PartitionKey> = Vec::new();
        let mut buckets: HashMap<PartitionKey, Vec<usize>> = HashMap::new();
        for &atom in atoms {
            let key = self.atoms[atom].key.project(positions);
            buckets
                .entry(key.clone())
                .or_insert_with(|| {
                    order.push(key);
                    Vec::new()
                })
                .push(atom);
        }
        order
            .into_iter()
            .map(|key| {
                let constituents = buckets.remove(&key).unwrap_or_default();
                self.build_class(key, constituents)
            })
            .collect()
    }

    fn build_class(&self, key: PartitionKey, constituents: Vec<usize>) -> RoughEquivalenceClass {
        let mut histogram = DecisionHistogram::new();
        for &atom in &constituents {
            histogram.merge(&self.atoms[atom].histogram);
        }
        let region = classify_rough(
            &histogram,
            constituents
                .iter()
                .map(|&atom| self.atoms[atom].histogram.is_consistent()),
        );
        RoughEquivalenceClass {
            key,
            constituents,
            histogram,
            region,
        }
    }
}

#[derive(Debug, Default)]
struct GroupState {
    decision: Option<i32>,
    mixed: bool,
    any_consistent: bool,
}

impl GroupState {
    fn absorb(&mut self, histogram: &DecisionHistogram) {
        match histogram.single_decision() {
            Some(decision) => {
                self.any_consistent = true;
                match self.decision {
                    Some(seen) if seen != decision => self.mixed = true,
                    None => self.decision = Some(decision),
                    _ => {}
                }
            }
            None => self.mixed = true,
        }
    }

    fn is_boundary(&self) -> bool {
        self.mixed && self.any_consistent
    }
}

fn key_positions(universe: &[Attribute], attributes: &[Attribute]) -> Result<Vec<usize>, ReductError> {
    attributes
        .iter()
        .map(|&attribute| {
            universe
                .iter()
                .position(|&a| a == attribute)
                .ok_or_else(|| {
                    ReductError::InvalidConfiguration(format!(
                        "attribute {} is not among the nested partition attributes {:?}",
                        attribute, universe
                    ))
                })
        })
        .collect()
}
