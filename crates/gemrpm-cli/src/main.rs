//! # gemrpm
//!
//! RPM dependency generator for RubyGems packages.
//!
//! This is the entry point for the `gemrpm` binary. It parses the command
//! line (including the multi-call `rubygems.prov`/`.req`/`.con` names), sets
//! up logging and panic reporting, and dispatches to the command handlers.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use gemrpm_core::error::{GemRpmError, GemRpmResult};
use gemrpm_translate::{EmitOptions, Mode};
use std::ffi::OsString;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::CommandContext;
use output::OutputHandler;

/// RPM dependency generator for RubyGems packages
#[derive(Parser)]
#[command(name = "gemrpm", version, about = "RPM dependency generator for RubyGems")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit an unversioned requires line for dependencies that only exclude versions
    #[arg(
        long,
        global = true,
        env = "GEMRPM_EXCLUSION_PRESENCE",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub exclusion_presence: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the capability each gem package provides
    Provides {
        /// Manifest files; read from stdin one per line when omitted
        #[arg(value_name = "MANIFEST")]
        paths: Vec<Utf8PathBuf>,
    },
    /// Print the capabilities each gem package requires
    Requires {
        /// Manifest files; read from stdin one per line when omitted
        #[arg(value_name = "MANIFEST")]
        paths: Vec<Utf8PathBuf>,
    },
    /// Print the dependency versions each gem package conflicts with
    Conflicts {
        /// Manifest files; read from stdin one per line when omitted
        #[arg(value_name = "MANIFEST")]
        paths: Vec<Utf8PathBuf>,
    },
    /// Show version information
    Version,
}

impl Cli {
    fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            exclusion_presence: self.exclusion_presence,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(multi_call_args(std::env::args_os()));

    setup_logging(cli.verbose);
    setup_panic_handler();

    info!("Starting gemrpm v{}", env!("CARGO_PKG_VERSION"));

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_failure(&e),
    }
}

/// Print a failed run for the user; the log only gets it at debug level
fn report_failure(error: &GemRpmError) -> ExitCode {
    debug!("gemrpm failed: {:?}", error);
    OutputHandler::new().error(error);
    ExitCode::FAILURE
}

fn run_cli(cli: Cli) -> GemRpmResult<()> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| GemRpmError::io("Failed to create async runtime", e))?;

    rt.block_on(async {
        let ctx = CommandContext::new(cli.emit_options())?;
        commands::dispatch_command(cli.command, &ctx).await
    })
}

/// Rewrite the arguments of a multi-call invocation.
///
/// When the binary is installed as one of RPM's generator names, the mode
/// comes from that name and every remaining argument is a manifest path.
fn multi_call_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().collect();

    let mode = args
        .first()
        .and_then(|argv0| Path::new(argv0).file_name())
        .and_then(|name| name.to_str())
        .and_then(Mode::from_generator_name);

    if let Some(mode) = mode {
        args.insert(1, OsString::from(mode.as_str()));
    }

    args
}

/// Filter used when RUST_LOG is unset; covers every `gemrpm*` target
fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!("gemrpm={level}")
}

fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("gemrpm encountered an unexpected error: {}", panic_info);
        eprintln!("gemrpm crashed! This is a bug.");
        eprintln!("Please report this at: https://github.com/gemrpm/gemrpm/issues");
        eprintln!("Error: {}", panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under the CLI's default filter and return what was logged
    fn captured_logs(verbose: bool, f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(default_directives(verbose)))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn args(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_multi_call_names_select_mode() {
        assert_eq!(
            multi_call_args(args(&["/usr/lib/rpm/rubygems.req", "foo.toml"])),
            args(&["/usr/lib/rpm/rubygems.req", "requires", "foo.toml"])
        );
        assert_eq!(
            multi_call_args(args(&["rubygems.prov"])),
            args(&["rubygems.prov", "provides"])
        );
        assert_eq!(
            multi_call_args(args(&["rubygems.con", "--exclusion-presence"])),
            args(&["rubygems.con", "conflicts", "--exclusion-presence"])
        );
    }

    #[test]
    fn test_regular_name_is_untouched() {
        let original = args(&["/usr/bin/gemrpm", "provides", "foo.toml"]);
        assert_eq!(multi_call_args(original.clone()), original);
    }

    #[test]
    fn test_multi_call_parses() {
        let cli = Cli::try_parse_from(multi_call_args(args(&[
            "rubygems.req",
            "a.toml",
            "b.json",
        ])))
        .unwrap();

        match cli.command {
            Commands::Requires { paths } => {
                assert_eq!(paths, vec![Utf8PathBuf::from("a.toml"), Utf8PathBuf::from("b.json")])
            },
            _ => panic!("expected requires"),
        }
    }

    #[test]
    fn test_exclusion_presence_flag() {
        let cli = Cli::try_parse_from(["gemrpm", "requires", "--exclusion-presence"]).unwrap();
        assert!(cli.emit_options().exclusion_presence);

        let cli = Cli::try_parse_from(["gemrpm", "-v", "conflicts", "foo.toml"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Conflicts { ref paths } if paths.len() == 1));
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["gemrpm", "install"]).is_err());
    }

    #[test]
    fn test_default_filter_is_one_prefix_directive() {
        assert_eq!(default_directives(false), "gemrpm=warn");
        assert_eq!(default_directives(true), "gemrpm=debug");
    }

    #[test]
    fn test_verbose_filter_covers_library_crates() {
        let logs = captured_logs(true, || {
            tracing::debug!(target: "gemrpm_translate::pipeline", "translated foo");
            tracing::debug!(target: "gemrpm_config::loader", "loaded foo");
            tracing::debug!(target: "other_crate", "unrelated");
        });
        assert!(logs.contains("translated foo"));
        assert!(logs.contains("loaded foo"));
        assert!(!logs.contains("unrelated"));

        let logs = captured_logs(false, || {
            tracing::debug!(target: "gemrpm_translate::pipeline", "translated foo");
            tracing::warn!(target: "gemrpm_core", "heads up");
        });
        assert!(!logs.contains("translated foo"));
        assert!(logs.contains("heads up"));
    }

    #[test]
    fn test_failure_is_reported_once_by_default() {
        let err = GemRpmError::ManifestParse {
            message: "TOML parsing error: expected `=`".to_string(),
        };

        let logs = captured_logs(false, || {
            report_failure(&err);
        });
        assert!(logs.is_empty(), "unexpected log output: {logs}");

        let logs = captured_logs(true, || {
            report_failure(&err);
        });
        assert!(logs.contains("gemrpm failed"));
    }
}
