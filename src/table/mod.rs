//! # Decision Tables
//!
//! Instance universes consumed by the partitioner. Column 0 of every row is
//! the decision attribute, columns `1..=attribute_count` are conditional.

/**
 * File: /src/table/mod.rs
 * Created Date: Monday, March 2nd 2026
 * Author: Zihan
 * -----
 * Last Modified: Tuesday, 17th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-03-02		Zihan	Created decision table backed by ndarray
 * 2026-03-17		Zihan	Added row appending for incremental partitions
 */

pub mod compacted;

pub use compacted::CompactedTable;

use std::ops::{Index, Range};

use ndarray::{Array2, ArrayView1};

use crate::error::ReductError;

/// 1-based conditional attribute index; 0 is the decision attribute
pub type Attribute = usize;

/// Index of the decision attribute in every row
pub const DECISION: Attribute = 0;

/// Read access to a universe of instances.
///
/// A row may stand for several identical instances (see
/// [`CompactedTable`]); `weight` gives that multiplicity.
pub trait InstanceSource {
    /// Number of rows
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of conditional attributes
    fn attribute_count(&self) -> usize;

    /// Value of `attribute` in `row`, attribute 0 being the decision
    fn value(&self, row: usize, attribute: Attribute) -> i32;

    fn decision(&self, row: usize) -> i32 {
        self.value(row, DECISION)
    }

    /// Number of instances the row stands for
    fn weight(&self, _row: usize) -> usize {
        1
    }

    /// Total number of instances, |U|
    fn instance_count(&self) -> usize {
        (0..self.len()).map(|row| self.weight(row)).sum()
    }

    /// All conditional attributes, `1..=attribute_count`
    fn conditional_attributes(&self) -> Vec<Attribute> {
        (1..=self.attribute_count()).collect()
    }

    /// Check that `attributes` only names conditional attributes of this source
    fn check_attributes(&self, attributes: &[Attribute]) -> Result<(), ReductError> {
        let attribute_count = self.attribute_count();
        for &attribute in attributes {
            if attribute == DECISION {
                return Err(ReductError::DecisionAttributeInSubset);
            }
            if attribute > attribute_count {
                return Err(ReductError::AttributeOutOfRange {
                    attribute,
                    attribute_count,
                });
            }
        }
        Ok(())
    }
}

/// Decision table stored row-major in an `Array2<i32>`
#[derive(Debug, Clone)]
pub struct DecisionTable {
    data: Array2<i32>,
    rows: usize,
    cols: usize,
}

impl DecisionTable {
    /// Build from a matrix whose column 0 holds the decision values
    ///
    /// # Example
    /// ```
    /// use rough_reduct::table::{DecisionTable, InstanceSource};
    /// use ndarray::array;
    /// let table = DecisionTable::from_array(array![[0, 1, 1], [1, 1, 2]]).unwrap();
    /// assert_eq!(table.attribute_count(), 2);
    /// assert_eq!(table.decision(1), 1);
    /// ```
    pub fn from_array(data: Array2<i32>) -> Result<Self, ReductError> {
        let rows = data.nrows();
        let cols = data.ncols();
        if cols == 0 {
            return Err(ReductError::InvalidConfiguration(
                "decision table needs at least the decision column".to_string(),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Build from row vectors, `row[0]` being the decision
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self, ReductError> {
        let expected = rows.first().map(|r| r.len()).unwrap_or(1);
        let mut flat = Vec::with_capacity(rows.len() * expected);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(ReductError::RaggedRow {
                    row: i,
                    expected,
                    found: row.len(),
                });
            }
            flat.extend_from_slice(row);
        }
        let data = Array2::from_shape_vec((rows.len(), expected), flat)?;
        Self::from_array(data)
    }

    /// Append newly arrived rows and return the range of their row indices
    pub fn append_rows(&mut self, rows: &[Vec<i32>]) -> Result<Range<usize>, ReductError> {
        let start = self.rows;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != self.cols {
                return Err(ReductError::RaggedRow {
                    row: start + i,
                    expected: self.cols,
                    found: row.len(),
                });
            }
            self.data.push_row(ArrayView1::from(row.as_slice()))?;
            self.rows += 1;
        }
        Ok(start..self.rows)
    }
}

impl InstanceSource for DecisionTable {
    fn len(&self) -> usize {
        self.rows
    }

    fn attribute_count(&self) -> usize {
        self.cols - 1
    }

    fn value(&self, row: usize, attribute: Attribute) -> i32 {
        self.data[(row, attribute)]
    }
}

impl Index<(usize, Attribute)> for DecisionTable {
    type Output = i32;

    fn index(&self, index: (usize, Attribute)) -> &Self::Output {
        &self.data[index]
    }
}

#[cfg(test)]
pub(crate) mod test_utils;
