//! Command implementations and dispatch logic.
//!
//! Each command is an async function that takes a CommandContext.

use camino::Utf8PathBuf;
use gemrpm_core::error::{GemRpmError, GemRpmResult};
use gemrpm_translate::{EmitOptions, Mode};
use tracing::info;

pub mod generate;


use crate::{output::OutputHandler, Commands};

/// Shared context for all commands
pub struct CommandContext {
    pub cwd: Utf8PathBuf,
    pub options: EmitOptions,
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a command context rooted at the current directory
    pub fn new(options: EmitOptions) -> GemRpmResult<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| GemRpmError::io("Failed to get current directory", e))?;
        let cwd = Utf8PathBuf::from_path_buf(cwd).map_err(|path| {
            GemRpmError::io(
                format!("Current directory {} is not valid UTF-8", path.display()),
                std::io::Error::from(std::io::ErrorKind::InvalidData),
            )
        })?;

        Ok(Self {
            cwd,
            options,
            output: OutputHandler::new(),
        })
    }
}

/// Dispatch a command to its handler
pub async fn dispatch_command(command: Commands, ctx: &CommandContext) -> GemRpmResult<()> {
    match command {
        Commands::Provides { paths } => generate::execute(Mode::Provides, paths, ctx).await,
        Commands::Requires { paths } => generate::execute(Mode::Requires, paths, ctx).await,
        Commands::Conflicts { paths } => generate::execute(Mode::Conflicts, paths, ctx).await,
        Commands::Version => {
            info!("Showing version information");
            show_version(ctx);
            Ok(())
        },
    }
}

fn show_version(ctx: &CommandContext) {
    let target = format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS);

    ctx.output.info(&format!("gemrpm v{}", env!("CARGO_PKG_VERSION")));
    ctx.output.info(&format!("Built: {}", env!("BUILD_DATE")));
    ctx.output.info(&format!("Target: {}", target));
    ctx.output.info(&format!("Rust: {}", env!("RUSTC_VERSION")));
    ctx.output.info(&format!(
        "Generators: {}",
        Mode::ALL.map(|mode| mode.generator_name()).join(", ")
    ));
}
