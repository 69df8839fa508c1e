use crate::config::GoifaceConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "goiface")]
#[command(
    about = "Generate Go interface declarations from the exported methods of concrete types",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Directory containing the Go package to scan
    #[arg(default_value = ".")]
    pub target: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to the nearest .goiface.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Key receiver types by package and name instead of name alone
    #[arg(long = "group-by-package")]
    pub group_by_package: bool,

    /// Fail when a receiver type declares the same method name twice
    #[arg(long = "strict-duplicates")]
    pub strict_duplicates: bool,

    /// Leave _test.go files out of the scan
    #[arg(long = "skip-tests")]
    pub skip_tests: bool,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Flags only switch settings on; they never turn off what the config enables
    pub fn apply_overrides(&self, mut config: GoifaceConfig) -> GoifaceConfig {
        config.group_by_package |= self.group_by_package;
        config.strict_duplicates |= self.strict_duplicates;
        config.skip_tests |= self.skip_tests;
        config
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
