//! # Candidate Evaluation for Population Optimizers
//!
//! Genetic algorithms, particle swarms, harmony search and fish swarms all
//! carry a population of attribute subsets encoded as bit masks. The loops
//! differ but the per-candidate work does not, so every optimizer shares one
//! `Candidate` type tagged with its `CandidateKind`:
//! - `evaluate`: significance of the encoded subset as fitness
//! - `repair`: grow the subset with the seeking loop, then shrink it with
//!   the inspector, giving a valid reduct
//! - `mates_within`: neighbours within a Hamming radius, scanned in parallel

/**
 * File: /src/population.rs
 * Created Date: Tuesday, March 17th 2026
 * Author: Zihan
 * -----
 * Last Modified: Tuesday, 17th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ReductError;
use crate::measure::{Sig, SignificanceMeasure};
use crate::reduct::{inspect, seek_from, Reduct, SearchContext, SeekStrategy};
use crate::table::InstanceSource;
use crate::util::{attributes_to_mask, hamming_distance, mask_to_attributes};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateKind {
    Chromosome,
    Particle,
    Harmony,
    Fish,
}

/// One encoded attribute subset of a population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub kind: CandidateKind,
    /// Bit `i` selects conditional attribute `i + 1`
    pub attributes: Vec<bool>,
    /// Significance of the encoded subset, once evaluated
    pub fitness: Option<f64>,
}

impl Candidate {
    pub fn new(kind: CandidateKind, attributes: Vec<bool>) -> Self {
        Self {
            kind,
            attributes,
            fitness: None,
        }
    }

    /// Candidate encoding exactly `reduct` over `width` conditional attributes
    pub fn from_reduct(kind: CandidateKind, reduct: &Reduct, width: usize) -> Self {
        Self::new(kind, attributes_to_mask(reduct.as_slice(), width))
    }

    /// Selected attributes, ascending
    pub fn selected(&self) -> Vec<usize> {
        mask_to_attributes(&self.attributes)
    }

    pub fn len(&self) -> usize {
        self.attributes.iter().filter(|&&bit| bit).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compute and store the fitness of `candidate`
pub fn evaluate<S, M>(ctx: &mut SearchContext<'_, S, M>, candidate: &mut Candidate) -> Result<M::Value, ReductError>
where
    S: InstanceSource + ?Sized,
    M: SignificanceMeasure,
{
    let attributes = candidate.selected();
    let value = ctx.significance(&attributes)?;
    candidate.fitness = Some(value.as_f64());
    Ok(value)
}

/// Turn `candidate` into a reduct in place: add attributes until the global
/// significance is reached, then drop the redundant ones.
pub fn repair<S, M>(
    ctx: &mut SearchContext<'_, S, M>,
    candidate: &mut Candidate,
    strategy: SeekStrategy,
) -> Result<Reduct, ReductError>
where
    S: InstanceSource + ?Sized,
    M: SignificanceMeasure,
{
    let start = Reduct::from_attributes(candidate.selected());
    let grown = seek_from(ctx, start, strategy)?;
    let reduct = inspect(ctx, &grown)?;
    debug!(
        "[{:?}] repaired {:?} -> {}",
        candidate.kind,
        candidate.selected(),
        reduct
    );

    candidate.attributes = attributes_to_mask(reduct.as_slice(), candidate.attributes.len());
    let value = ctx.significance(reduct.as_slice())?;
    candidate.fitness = Some(value.as_f64());
    Ok(reduct)
}

/// Indices of the candidates within Hamming distance `radius` of
/// `population[index]`, the candidate itself excluded
pub fn mates_within(population: &[Candidate], index: usize, radius: usize) -> Vec<usize> {
    let Some(center) = population.get(index) else {
        return Vec::new();
    };
    population
        .par_iter()
        .enumerate()
        .filter(|(i, other)| *i != index && hamming_distance(&center.attributes, &other.attributes) <= radius)
        .map(|(i, _)| i)
        .collect()
}
