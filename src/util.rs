/**
 * File: /src/util.rs
 * Created Date: Tuesday, June 18th 2024
 * Author: Zihan
 * -----
 * Last Modified: Tuesday, 17th March 2026
 * Modified By: Zihan Wu <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-03-17		Zihan	Attribute mask helpers for candidate encodings
**/
use std::collections::HashMap;

use crate::table::Attribute;

/// 检查两个分类结果是否等价
///
/// Two labelings are equivalent when they induce the same partition of the
/// rows, whatever the label values.
pub fn are_equivalent_classifications(a: Vec<usize>, b: Vec<usize>) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut a_to_b_map = HashMap::new();
    let mut b_to_a_map = HashMap::new();

    for (&a_class, &b_class) in a.iter().zip(b.iter()) {
        let a_mapped = a_to_b_map.entry(a_class).or_insert(b_class);
        let b_mapped = b_to_a_map.entry(b_class).or_insert(a_class);

        if a_mapped != &b_class || b_mapped != &a_class {
            return false;
        }
    }

    true
}

/// Conditional attributes selected by a mask; bit `i` is attribute `i + 1`
pub fn mask_to_attributes(mask: &[bool]) -> Vec<Attribute> {
    mask.iter()
        .enumerate()
        .filter(|(_, &bit)| bit)
        .map(|(i, _)| i + 1)
        .collect()
}

/// Mask of `width` bits with the given conditional attributes set.
/// Attributes outside `1..=width` are ignored.
pub fn attributes_to_mask(attributes: &[Attribute], width: usize) -> Vec<bool> {
    let mut mask = vec![false; width];
    for &attribute in attributes {
        if attribute >= 1 && attribute <= width {
            mask[attribute - 1] = true;
        }
    }
    mask
}

/// Positions where two masks differ; the shorter mask is padded with `false`
pub fn hamming_distance(a: &[bool], b: &[bool]) -> usize {
    let len = a.len().max(b.len());
    (0..len)
        .filter(|&i| a.get(i).copied().unwrap_or(false) != b.get(i).copied().unwrap_or(false))
        .count()
}
