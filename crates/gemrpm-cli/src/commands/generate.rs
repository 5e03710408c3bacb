//! The `provides`, `requires` and `conflicts` commands.
//!
//! Manifests are loaded concurrently and translated in parallel. Output is
//! collected in full before anything reaches stdout, so a failing manifest
//! leaves stdout empty.

use std::io::{self, BufRead, Write};

use camino::Utf8PathBuf;
use gemrpm_config::ManifestLoader;
use gemrpm_core::error::{GemRpmError, GemRpmResult};
use gemrpm_translate::{Mode, Pipeline};
use tracing::info;

use super::CommandContext;

/// Run one generator mode and write its lines to stdout
pub async fn execute(mode: Mode, paths: Vec<Utf8PathBuf>, ctx: &CommandContext) -> GemRpmResult<()> {
    let paths = if paths.is_empty() {
        let stdin = io::stdin();
        read_manifest_paths(stdin.lock())
            .map_err(|e| GemRpmError::io("Failed to read manifest paths from stdin", e))?
    } else {
        paths
    };

    if paths.is_empty() {
        ctx.output.warn("no manifests given");
        return Ok(());
    }

    let lines = generate(mode, &paths, ctx).await?;

    let stdout = io::stdout();
    write_lines(&mut stdout.lock(), &lines)
        .map_err(|e| GemRpmError::io("Failed to write generator output", e))
}

/// Load every manifest and translate them, keeping input order
pub async fn generate(
    mode: Mode,
    paths: &[Utf8PathBuf],
    ctx: &CommandContext,
) -> GemRpmResult<Vec<String>> {
    let loader = ManifestLoader::new(ctx.cwd.clone());
    let (specs, sources): (Vec<_>, Vec<_>) = loader.load_all(paths).await?.into_iter().unzip();

    for (spec, source) in specs.iter().zip(&sources) {
        info!(
            "Generating {} for {} {} from {} ({})",
            mode, spec.name, spec.version, source.path, source.format
        );
    }

    Pipeline::new(mode).with_options(ctx.options).run_many(&specs)
}

/// Read manifest paths one per line, skipping blank lines
pub fn read_manifest_paths<R: BufRead>(reader: R) -> io::Result<Vec<Utf8PathBuf>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(Utf8PathBuf::from(trimmed));
        }
    }
    Ok(paths)
}

/// Write already newline-terminated lines
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        out.write_all(line.as_bytes())?;
    }
    out.flush()
}
