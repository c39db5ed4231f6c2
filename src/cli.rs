//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{APPDIR_ENV, DEFAULT_APPDIR, TAP_ENV};

/// caskr - cask tap tool
///
/// Resolve, verify and plan macOS application cask descriptors.
#[derive(Parser, Debug)]
#[command(
    name = "caskr",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve, verify and plan macOS application casks",
    long_about = "caskr reads cask descriptors from a tap (a directory with a Casks/ \
                  subdirectory) and turns them into resolved download URLs, verified \
                  artifacts, install and uninstall plans, and livecheck reports.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  caskr list\n    \
                  caskr info plezy\n    \
                  caskr fetch plezy\n    \
                  caskr plan install plezy\n    \
                  caskr plan uninstall plezy --zap\n    \
                  caskr livecheck"
)]
pub struct Cli {
    /// Tap directory (defaults to the nearest parent with a Casks/ directory)
    #[arg(long, short = 't', global = true, env = TAP_ENV)]
    pub tap: Option<PathBuf>,

    /// Installation root for application bundles
    #[arg(long, global = true, env = APPDIR_ENV, default_value = DEFAULT_APPDIR)]
    pub appdir: PathBuf,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List casks in the tap
    List,

    /// Show cask information
    Info(InfoArgs),

    /// Print the resolved download URL
    Url(CaskArgs),

    /// Verify a local artifact against a cask's checksum
    Verify(VerifyArgs),

    /// Download a cask's artifact into the cache and verify it
    Fetch(CaskArgs),

    /// Show install or uninstall plans
    #[command(subcommand)]
    Plan(PlanCommands),

    /// Check upstream for newer versions
    Livecheck(LivecheckArgs),

    /// Validate every cask in the tap
    Audit(AuditArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Subcommand, Debug)]
pub enum PlanCommands {
    /// Plan an install
    Install(PlanInstallArgs),

    /// Plan an uninstall
    Uninstall(PlanUninstallArgs),
}

/// Arguments naming one cask
#[derive(Parser, Debug)]
pub struct CaskArgs {
    /// Cask identifier
    pub cask: String,
}

/// Arguments for the info command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Cask identifier
    pub cask: String,

    /// Print the descriptor as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the verify command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Verify a downloaded disk image:\n    caskr verify plezy ~/Downloads/plezy-macos.dmg")]
pub struct VerifyArgs {
    /// Cask identifier
    pub cask: String,

    /// Artifact file to verify
    pub file: PathBuf,
}

/// Arguments for plan install
#[derive(Parser, Debug)]
pub struct PlanInstallArgs {
    /// Cask identifier
    pub cask: String,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for plan uninstall
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove the application only:\n    caskr plan uninstall plezy\n\n\
                  Also remove preferences, caches and saved state:\n    caskr plan uninstall plezy --zap")]
pub struct PlanUninstallArgs {
    /// Cask identifier
    pub cask: String,

    /// Also remove user data, caches and state
    #[arg(long)]
    pub zap: bool,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the livecheck command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check every cask:\n    caskr livecheck\n\n\
                  Check one cask:\n    caskr livecheck plezy\n\n\
                  Only show outdated casks:\n    caskr livecheck --outdated")]
pub struct LivecheckArgs {
    /// Casks to check (defaults to all casks in the tap)
    pub casks: Vec<String>,

    /// Only print casks with a newer upstream version
    #[arg(long)]
    pub outdated: bool,

    /// Print reports as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the audit command
#[derive(Parser, Debug)]
pub struct AuditArgs {
    /// Print findings as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    caskr completions --shell bash > ~/.bash_completion.d/caskr\n\n\
                  Generate zsh completions:\n    caskr completions --shell zsh > ~/.zfunc/_caskr")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
