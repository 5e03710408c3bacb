//! RubyGems requirement tokens.
//!
//! A requirement is `<operator> <version>`, e.g. `>= 1.2`, `~> 3.0`, `!= 2.4.2`.

use super::GemVersion;
use crate::error::{GemRpmError, GemRpmResult};
use std::fmt;
use std::str::FromStr;

/// Comparison operator of the RubyGems requirement dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Equal,       // = 1.0
    NotEqual,    // != 1.0
    Greater,     // > 1.0
    GreaterEq,   // >= 1.0
    Less,        // < 1.0
    LessEq,      // <= 1.0
    Pessimistic, // ~> 1.0
}

/// Single requirement on a dependency version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Requirement {
    pub op: Op,
    pub version: GemVersion,
}

impl Op {
    /// Every operator, in declaration order
    pub const ALL: [Op; 7] = [
        Op::Equal,
        Op::NotEqual,
        Op::Greater,
        Op::GreaterEq,
        Op::Less,
        Op::LessEq,
        Op::Pessimistic,
    ];

    /// Look up an operator by its token
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "=" => Some(Op::Equal),
            "!=" => Some(Op::NotEqual),
            ">" => Some(Op::Greater),
            ">=" => Some(Op::GreaterEq),
            "<" => Some(Op::Less),
            "<=" => Some(Op::LessEq),
            "~>" => Some(Op::Pessimistic),
            _ => None,
        }
    }

    /// Token as written in a gemspec
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::Equal => "=",
            Op::NotEqual => "!=",
            Op::Greater => ">",
            Op::GreaterEq => ">=",
            Op::Less => "<",
            Op::LessEq => "<=",
            Op::Pessimistic => "~>",
        }
    }

    /// Check if this operator forbids a version instead of constraining it
    pub fn is_exclusion(&self) -> bool {
        matches!(self, Op::NotEqual)
    }
}

impl FromStr for Op {
    type Err = GemRpmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Op::from_token(s).ok_or_else(|| GemRpmError::UnknownOperator {
            operator: s.to_string(),
            requirement: s.to_string(),
        })
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Requirement {
    /// Create a requirement from parts
    pub fn new(op: Op, version: GemVersion) -> Self {
        Self { op, version }
    }

    /// Parse a requirement token such as `>= 1.2`
    pub fn parse(token: &str) -> GemRpmResult<Self> {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(malformed(token, "requirement is empty"));
        }

        // Operator is the leading run of symbol characters
        let op_len = trimmed
            .find(|c: char| c.is_alphanumeric() || c.is_whitespace())
            .unwrap_or(trimmed.len());
        let (op_token, rest) = trimmed.split_at(op_len);
        if op_token.is_empty() {
            return Err(malformed(token, "missing comparison operator"));
        }

        let op = Op::from_token(op_token).ok_or_else(|| GemRpmError::UnknownOperator {
            operator: op_token.to_string(),
            requirement: token.to_string(),
        })?;

        let literal = rest.trim();
        if literal.is_empty() {
            return Err(malformed(token, "missing version literal"));
        }
        if literal.split_whitespace().nth(1).is_some() {
            return Err(malformed(token, "expected a single version literal"));
        }

        let version =
            GemVersion::parse(literal).map_err(|source| GemRpmError::MalformedVersion {
                version: literal.to_string(),
                source,
            })?;

        Ok(Self { op, version })
    }
}

fn malformed(token: &str, reason: &str) -> GemRpmError {
    GemRpmError::MalformedRequirement {
        requirement: token.to_string(),
        reason: reason.to_string(),
    }
}

impl FromStr for Requirement {
    type Err = GemRpmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.op, self.version)
    }
}
