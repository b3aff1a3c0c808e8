//! Compiles structured styling selections into a single generation
//! instruction. Pure and deterministic: identical inputs always yield a
//! byte-identical string, and pose clauses are re-serialized through
//! `PoseTag::CANONICAL` so output never depends on set iteration order.

use crate::models::{FitChoice, LengthChoice, PoseTag};
use std::collections::HashSet;

const BASE_CLAUSE: &str = "A professional fashion photoshoot. A model is wearing the uploaded clothes and in the uploaded background. The model's face is exactly the same as the uploaded image. The lighting is soft and natural.";

/// Builds the instruction string: base clause, length clause, fit clause,
/// pose clauses in canonical order, then the raw detail text if any, all
/// joined by single spaces.
pub fn compile(
    length: LengthChoice,
    fit: FitChoice,
    poses: &HashSet<PoseTag>,
    detail_text: &str,
) -> String {
    let mut clauses: Vec<&str> = vec![BASE_CLAUSE, length.clause(), fit.clause()];

    for pose in PoseTag::CANONICAL {
        if poses.contains(&pose) {
            clauses.push(pose.clause());
        }
    }

    if !detail_text.is_empty() {
        clauses.push(detail_text);
    }

    clauses.join(" ")
}
