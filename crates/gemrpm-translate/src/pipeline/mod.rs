//! Emission pipeline
//!
//! The three generator modes share classification, expansion, translation
//! and composition; they only differ in which requirements they keep and
//! how they render them.

use std::fmt;

use gemrpm_core::{DependencySpec, PackageSpec, RUBYGEMS_CAPABILITY};
use rayon::prelude::*;
use tracing::debug;

use crate::classify::classify;
use crate::compose::{compose, presence, Clause, RpmOp};
use crate::pessimistic::expand_all;
use crate::version::translate;
use crate::TranslateResult;


/// Kind of RPM metadata to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// What the gem package satisfies
    Provides,
    /// What the gem package needs
    Requires,
    /// Which dependency versions the gem package cannot coexist with
    Conflicts,
}

/// Policy knobs that do not change the translation rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// Emit an unversioned requires line for dependencies that only carry `!=`
    pub exclusion_presence: bool,
}

/// Translation pipeline for a single mode
#[derive(Debug, Clone, Copy)]
pub struct Pipeline {
    mode: Mode,
    options: EmitOptions,
}

impl Mode {
    /// Every mode, in generator order
    pub const ALL: [Mode; 3] = [Mode::Provides, Mode::Requires, Mode::Conflicts];

    /// Lowercase mode name
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Provides => "provides",
            Mode::Requires => "requires",
            Mode::Conflicts => "conflicts",
        }
    }

    /// File name RPM uses for the dependency generator of this mode
    pub fn generator_name(&self) -> &'static str {
        match self {
            Mode::Provides => "rubygems.prov",
            Mode::Requires => "rubygems.req",
            Mode::Conflicts => "rubygems.con",
        }
    }

    /// Look up a mode by its dependency generator file name
    pub fn from_generator_name(name: &str) -> Option<Self> {
        Mode::ALL.into_iter().find(|mode| mode.generator_name() == name)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Pipeline {
    /// Create a pipeline with default options
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            options: EmitOptions::default(),
        }
    }

    /// Replace the emit options
    pub fn with_options(mut self, options: EmitOptions) -> Self {
        self.options = options;
        self
    }

    /// Translate one package specification into newline-terminated lines.
    ///
    /// Either every line for the specification is produced or an error is
    /// returned; there is no partial output.
    pub fn run(&self, spec: &PackageSpec) -> TranslateResult<Vec<String>> {
        debug!(
            "Generating {} for {} {} ({} dependencies)",
            self.mode,
            spec.name,
            spec.version,
            spec.dependencies.len()
        );

        let mut lines = Vec::new();
        match self.mode {
            Mode::Provides => {
                lines.push(format!("{} = {}\n", spec.rpm_name(), translate(&spec.version)));
            },
            Mode::Requires => {
                lines.push(format!("{}\n", RUBYGEMS_CAPABILITY));
                for dependency in &spec.dependencies {
                    if let Some(line) = self.requires_line(dependency)? {
                        lines.push(line + "\n");
                    }
                }
            },
            Mode::Conflicts => {
                for dependency in &spec.dependencies {
                    if let Some(line) = conflicts_line(dependency) {
                        lines.push(line + "\n");
                    }
                }
            },
        }

        Ok(lines)
    }

    /// Translate several specifications, concatenating their lines in input order
    pub fn run_many(&self, specs: &[PackageSpec]) -> TranslateResult<Vec<String>> {
        let outputs = specs
            .par_iter()
            .map(|spec| self.run(spec))
            .collect::<TranslateResult<Vec<Vec<String>>>>()?;

        Ok(outputs.into_iter().flatten().collect())
    }

    fn requires_line(&self, dependency: &DependencySpec) -> TranslateResult<Option<String>> {
        if dependency.is_bare() {
            return Ok(Some(presence(&dependency.name)));
        }

        if dependency.is_exclusion_only() {
            if self.options.exclusion_presence {
                return Ok(Some(presence(&dependency.name)));
            }
            debug!("No requires for {}: only exclusions", dependency.name);
            return Ok(None);
        }

        let classified = classify(&dependency.requirements);
        let clauses = expand_all(&classified.regular)?;
        Ok(compose(&dependency.name, &clauses))
    }
}

fn conflicts_line(dependency: &DependencySpec) -> Option<String> {
    let clauses: Vec<Clause> = classify(&dependency.requirements)
        .exclusions
        .into_iter()
        .map(|version| Clause::new(RpmOp::Equal, version))
        .collect();

    compose(&dependency.name, &clauses)
}
