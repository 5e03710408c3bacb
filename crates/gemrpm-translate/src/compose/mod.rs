//! RPM dependency expression rendering
//!
//! One clause renders flat (`rubygem(bar) >= 2.3`); several clauses on the
//! same gem render as a rich dependency joined with `with`:
//! `(rubygem(bar) >= 1.2 with rubygem(bar) < 2)`.

use std::fmt;

use gemrpm_core::{GemVersion, RpmName};

use crate::version::translate;

/// Comparison operator of the RPM dependency dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpmOp {
    Equal,
    Greater,
    GreaterEq,
    Less,
    LessEq,
}

/// Translated (operator, version) pair ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub op: RpmOp,
    pub version: String,
}

impl RpmOp {
    /// Token as written in an RPM dependency
    pub fn as_str(&self) -> &'static str {
        match self {
            RpmOp::Equal => "=",
            RpmOp::Greater => ">",
            RpmOp::GreaterEq => ">=",
            RpmOp::Less => "<",
            RpmOp::LessEq => "<=",
        }
    }
}

impl fmt::Display for RpmOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Clause {
    /// Build a clause, translating the gem version to RPM syntax
    pub fn new(op: RpmOp, version: &GemVersion) -> Self {
        Self {
            op,
            version: translate(version),
        }
    }
}

/// Render every clause for one gem into a single dependency expression.
///
/// Returns `None` when there is nothing to constrain.
pub fn compose(name: &str, clauses: &[Clause]) -> Option<String> {
    let rpm_name = RpmName(name);
    let render = |clause: &Clause| format!("{} {} {}", rpm_name, clause.op, clause.version);

    match clauses {
        [] => None,
        [clause] => Some(render(clause)),
        _ => {
            let joined = clauses.iter().map(render).collect::<Vec<_>>().join(" with ");
            Some(format!("({})", joined))
        },
    }
}

/// Unversioned dependency on a gem
pub fn presence(name: &str) -> String {
    RpmName(name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clause(op: RpmOp, version: &str) -> Clause {
        Clause::new(op, &GemVersion::parse(version).unwrap())
    }

    #[test]
    fn test_no_clauses() {
        assert_eq!(compose("bar", &[]), None);
    }

    #[test]
    fn test_single_clause_is_flat() {
        let line = compose("bar", &[clause(RpmOp::GreaterEq, "2.3")]);
        assert_eq!(line.as_deref(), Some("rubygem(bar) >= 2.3"));
    }

    #[test]
    fn test_two_clauses_use_with() {
        let line = compose(
            "baz",
            &[clause(RpmOp::GreaterEq, "0.2.3"), clause(RpmOp::LessEq, "0.2.5")],
        );
        assert_eq!(
            line.as_deref(),
            Some("(rubygem(baz) >= 0.2.3 with rubygem(baz) <= 0.2.5)")
        );
    }

    #[test]
    fn test_many_clauses_keep_order() {
        let line = compose(
            "qux",
            &[
                clause(RpmOp::Greater, "0.4.5"),
                clause(RpmOp::Less, "0.6.4"),
                clause(RpmOp::GreaterEq, "2.3"),
                clause(RpmOp::LessEq, "2.5.3"),
            ],
        );
        assert_eq!(
            line.as_deref(),
            Some(
                "(rubygem(qux) > 0.4.5 with rubygem(qux) < 0.6.4 with \
                 rubygem(qux) >= 2.3 with rubygem(qux) <= 2.5.3)"
            )
        );
    }

    #[test]
    fn test_clause_translates_prerelease() {
        let c = clause(RpmOp::Equal, "1.2.3.dev.2");
        assert_eq!(c.version, "1.2.3~dev.2");
        assert_eq!(
            compose("foo2", &[c]).as_deref(),
            Some("rubygem(foo2) = 1.2.3~dev.2")
        );
    }

    #[test]
    fn test_presence() {
        assert_eq!(presence("bar"), "rubygem(bar)");
    }
}
