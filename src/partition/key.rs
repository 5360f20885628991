/**
 * File: /src/partition/key.rs
 * Created Date: Monday, March 2nd 2026
 * Author: Zihan
 * -----
 * Last Modified: Monday, 9th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */

use std::fmt;

use crate::table::{Attribute, InstanceSource};

/// Equality key of an instance under an attribute subset.
///
/// Equality and hashing are value-wise. The attribute order only changes
/// the layout of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartitionKey(Box<[i32]>);

impl PartitionKey {
    /// Key of `row` under `attributes`
    pub fn of<S: InstanceSource + ?Sized>(source: &S, row: usize, attributes: &[Attribute]) -> Self {
        PartitionKey(
            attributes
                .iter()
                .map(|&attribute| source.value(row, attribute))
                .collect(),
        )
    }

    pub fn from_values(values: Vec<i32>) -> Self {
        PartitionKey(values.into_boxed_slice())
    }

    pub fn values(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at key position `position`
    pub fn get(&self, position: usize) -> i32 {
        self.0[position]
    }

    /// Key with one more value appended, used when a class is refined by a
    /// further attribute
    pub fn extended(&self, value: i32) -> Self {
        let mut values = Vec::with_capacity(self.0.len() + 1);
        values.extend_from_slice(&self.0);
        values.push(value);
        PartitionKey::from_values(values)
    }

    /// Key restricted to `positions`, in that order
    pub fn project(&self, positions: &[usize]) -> Self {
        PartitionKey(positions.iter().map(|&p| self.0[p]).collect())
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::test_utils::small_table;
    use std::collections::HashSet;

    #[test]
    fn test_structural_equality() {
        let table = small_table();
        let a = PartitionKey::of(&table, 0, &[1, 2]);
        let b = PartitionKey::of(&table, 1, &[1, 2]);
        let c = PartitionKey::of(&table, 2, &[1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a.clone());
        assert!(set.contains(&b));
        assert_eq!(a, PartitionKey::from_values(vec![1, 1]));
    }

    #[test]
    fn test_extend_and_project() {
        let key = PartitionKey::from_values(vec![3, 5]);
        let extended = key.extended(7);
        assert_eq!(extended.values(), &[3, 5, 7]);
        assert_eq!(extended.project(&[2, 0]).values(), &[7, 3]);
        assert!(PartitionKey::from_values(vec![]).is_empty());
    }
}
