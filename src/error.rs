//! # Error Types
//!
//! Errors raised while building decision tables, partitioning them and
//! searching for reducts.

/**
 * File: /src/error.rs
 * Created Date: Monday, March 2nd 2026
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 12th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-03-02		Zihan	Created error types for reduct search
 * 2026-03-12		Zihan	Added convergence error carrying the partial reduct
 */

use std::error::Error;
use std::fmt;

use crate::table::Attribute;

/// Errors that can occur during partitioning and reduct search
#[derive(Debug, Clone, PartialEq)]
pub enum ReductError {
    /// The decision table holds no instances
    EmptyUniverse,
    /// The decision attribute (index 0) was passed where only conditional
    /// attributes are allowed
    DecisionAttributeInSubset,
    /// Attribute index beyond the table's conditional attributes
    AttributeOutOfRange { attribute: Attribute, attribute_count: usize },
    /// A row of the raw table has a different width than the first row
    RaggedRow { row: usize, expected: usize, found: usize },
    /// Deviation must be finite and non-negative
    InvalidDeviation(f64),
    /// The seeking loop ran out of attributes before reaching the global
    /// significance. Always a bug in the significance measure.
    Convergence {
        reduct: Vec<Attribute>,
        significance: String,
        global_significance: String,
    },
    InvalidConfiguration(String),
}

impl fmt::Display for ReductError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReductError::EmptyUniverse => write!(f, "Decision table has no instances"),
            ReductError::DecisionAttributeInSubset => {
                write!(f, "Decision attribute 0 is not allowed in a conditional attribute subset")
            }
            ReductError::AttributeOutOfRange {
                attribute,
                attribute_count,
            } => write!(
                f,
                "Attribute {} out of range (table has {} conditional attributes)",
                attribute, attribute_count
            ),
            ReductError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {} has {} values, expected {}",
                row, found, expected
            ),
            ReductError::InvalidDeviation(d) => {
                write!(f, "Invalid deviation {} (must be finite and >= 0)", d)
            }
            ReductError::Convergence {
                reduct,
                significance,
                global_significance,
            } => write!(
                f,
                "Seeking loop exhausted all attributes at {:?} with significance {} (global {})",
                reduct, significance, global_significance
            ),
            ReductError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl Error for ReductError {}

impl From<ndarray::ShapeError> for ReductError {
    fn from(e: ndarray::ShapeError) -> Self {
        ReductError::InvalidConfiguration(format!("table shape: {}", e))
    }
}
