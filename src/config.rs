/**
 * File: /src/config.rs
 * Created Date: Friday, January 26th 2024
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 19th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-03-19		Zihan	Reduct search configuration replaces the matrix config
 */
use serde::{Deserialize, Serialize};

use crate::error::ReductError;
use crate::measure::MeasureKind;
use crate::reduct::{validate_deviation, CoreStrategy, SeekStrategy};

/// Quick-Reduct configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReductConfig {
    /// Significance measure
    pub measure: MeasureKind,
    /// Tolerated significance loss against the full attribute set
    pub deviation: f64,
    pub core_strategy: CoreStrategy,
    pub seek_strategy: SeekStrategy,
    /// Drop redundant attributes after seeking
    pub inspect: bool,
    /// Collect timings and evaluation counts
    pub collect_stats: bool,
}

impl Default for ReductConfig {
    fn default() -> Self {
        Self {
            measure: MeasureKind::default(),
            deviation: 0.0,
            core_strategy: CoreStrategy::default(),
            seek_strategy: SeekStrategy::default(),
            inspect: true,
            collect_stats: true,
        }
    }
}

impl ReductConfig {
    pub fn validate(&self) -> Result<(), ReductError> {
        validate_deviation(self.deviation)
    }
}

/// Command line configuration of the demo binary: a seeded random table
/// and the search settings
pub struct Config {
    rows: usize,
    attributes: usize,
    values: i32,
    seed: u64,
    reduct: ReductConfig,
}

impl Config {
    /// constructor
    ///
    /// # Examples
    /// ```bash
    /// $ cargo run -- 10000 20 4 42 shannon-entropy 0.001 nested
    /// ```
    pub fn new(mut args: impl Iterator<Item = String>) -> Result<Config, ReductError> {
        // args:
        // 0: program name
        // 1: rows
        // 2: conditional attributes
        // 3: values per attribute
        // 4: seed
        // 5: measure (optional)
        // 6: deviation (optional)
        // 7: seek strategy (optional)
        // 8: core strategy (optional)
        args.next();
        let rows = parse_arg(args.next(), "rows")?;
        let attributes = parse_arg(args.next(), "attributes")?;
        let values = parse_arg(args.next(), "values")?;
        let seed = parse_arg(args.next(), "seed")?;

        let mut reduct = ReductConfig::default();
        if let Some(measure) = args.next() {
            reduct.measure = measure.parse()?;
        }
        if let Some(deviation) = args.next() {
            reduct.deviation = parse_arg(Some(deviation), "deviation")?;
        }
        if let Some(seek) = args.next() {
            reduct.seek_strategy = seek.parse()?;
        }
        if let Some(core) = args.next() {
            reduct.core_strategy = core.parse()?;
        }
        reduct.validate()?;

        if rows == 0 || attributes == 0 || values < 1 {
            return Err(ReductError::InvalidConfiguration(format!(
                "need at least one row, one attribute and one value, got {} x {} with {} values",
                rows, attributes, values
            )));
        }

        Ok(Config {
            rows,
            attributes,
            values,
            seed,
            reduct,
        })
    }

    pub fn get_rows(&self) -> usize {
        self.rows
    }

    pub fn get_attributes(&self) -> usize {
        self.attributes
    }

    pub fn get_values(&self) -> i32 {
        self.values
    }

    pub fn get_seed(&self) -> u64 {
        self.seed
    }

    pub fn get_reduct(&self) -> &ReductConfig {
        &self.reduct
    }
}

fn parse_arg<T: std::str::FromStr>(arg: Option<String>, name: &str) -> Result<T, ReductError> {
    let arg = arg.ok_or_else(|| ReductError::InvalidConfiguration(format!("missing argument <{}>", name)))?;
    arg.parse::<T>()
        .map_err(|_| ReductError::InvalidConfiguration(format!("cannot parse <{}> from '{}'", name, arg)))
}
