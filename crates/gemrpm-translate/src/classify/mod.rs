//! Requirement classification
//!
//! Splits the requirements of one dependency into exclusions (`!=`), which
//! become RPM conflicts, and regular constraints, which become RPM requires.

use gemrpm_core::{GemVersion, Op, Requirement};

use crate::compose::RpmOp;

/// Regular (non-exclusion) requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regular<'a> {
    /// Comparison with a direct RPM counterpart
    Flat(RpmOp, &'a GemVersion),
    /// `~>` constraint, still to be expanded into a range
    Pessimistic(&'a GemVersion),
}

/// Requirements of one dependency, partitioned by role
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified<'a> {
    /// Versions excluded with `!=`, in source order
    pub exclusions: Vec<&'a GemVersion>,
    /// Every other requirement, in source order
    pub regular: Vec<Regular<'a>>,
}

/// Partition requirements into exclusions and regular constraints
pub fn classify(requirements: &[Requirement]) -> Classified<'_> {
    let mut classified = Classified::default();

    for requirement in requirements {
        let version = &requirement.version;
        match requirement.op {
            Op::NotEqual => classified.exclusions.push(version),
            Op::Equal => classified.regular.push(Regular::Flat(RpmOp::Equal, version)),
            Op::Greater => classified.regular.push(Regular::Flat(RpmOp::Greater, version)),
            Op::GreaterEq => classified.regular.push(Regular::Flat(RpmOp::GreaterEq, version)),
            Op::Less => classified.regular.push(Regular::Flat(RpmOp::Less, version)),
            Op::LessEq => classified.regular.push(Regular::Flat(RpmOp::LessEq, version)),
            Op::Pessimistic => classified.regular.push(Regular::Pessimistic(version)),
        }
    }

    classified
}
