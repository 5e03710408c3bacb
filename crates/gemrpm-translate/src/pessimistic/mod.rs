//! Pessimistic constraint expansion
//!
//! RPM has no `~>` operator, so `~> 1.2.3` is rewritten as the range
//! `>= 1.2.3` and `< 1.3`. Flat comparisons pass through unchanged.

use tracing::trace;

use crate::classify::Regular;
use crate::compose::{Clause, RpmOp};
use crate::TranslateResult;

/// Expand one regular requirement into the RPM clauses it stands for
pub fn expand(regular: Regular<'_>) -> TranslateResult<Vec<Clause>> {
    match regular {
        Regular::Flat(op, version) => Ok(vec![Clause::new(op, version)]),
        Regular::Pessimistic(version) => {
            let upper = version.bump()?;
            trace!("Expanded ~> {} into >= {} < {}", version, version, upper);
            Ok(vec![
                Clause::new(RpmOp::GreaterEq, version),
                Clause::new(RpmOp::Less, &upper),
            ])
        },
    }
}

/// Expand every regular requirement, keeping source order
pub fn expand_all(regular: &[Regular<'_>]) -> TranslateResult<Vec<Clause>> {
    let mut clauses = Vec::with_capacity(regular.len() * 2);
    for requirement in regular {
        clauses.extend(expand(*requirement)?);
    }
    Ok(clauses)
}
