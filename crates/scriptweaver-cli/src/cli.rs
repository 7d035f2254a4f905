//! CLI argument parsing via `clap`.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "scriptweaver",
    version,
    about = "Convert TRPG scenario text to HTML",
    long_about = "Convert TRPG scenario text (.txt) into HTML with skill, item, dice and sanity notation marked up, and optionally check the notation.\n\nConfiguration precedence: CLI > config file > defaults.",
    after_help = "Examples:\n  scriptweaver scenario.txt\n  scriptweaver --validate 'scenarios/*.txt'\n  scriptweaver --validate-only --format json scenario.txt\n  scriptweaver --fix scenario.txt",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Input files or glob patterns
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<String>,

    #[arg(long, value_name = "PATH", help = "Config file (default: ~/.config/scriptweaver/config.toml)")]
    pub config: Option<PathBuf>,

    #[arg(short, long, value_name = "PATH", help = "Output file (single input only)")]
    pub output: Option<PathBuf>,

    #[arg(long, action = clap::ArgAction::SetTrue, help = "Check notation and embed the report in the HTML")]
    pub validate: bool,

    #[arg(long, action = clap::ArgAction::SetTrue, help = "Check notation and print the report without writing HTML")]
    pub validate_only: bool,

    #[arg(long, value_enum, default_value_t = ReportFormat::Human, help = "Report format for --validate-only")]
    pub format: ReportFormat,

    #[arg(long, action = clap::ArgAction::SetTrue, conflicts_with = "beginner", help = "Strict checks; refuse output on critical issues")]
    pub strict: bool,

    #[arg(long, action = clap::ArgAction::SetTrue, help = "Lenient checks for first-time authors")]
    pub beginner: bool,

    #[arg(long, action = clap::ArgAction::SetTrue, help = "Write <input>.fixed.<ext> with proposed fixes applied")]
    pub fix: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Human,
    Json,
}

impl Cli {
    /// Any flag that needs the validation engine.
    pub fn wants_validation(&self) -> bool {
        self.validate || self.validate_only || self.fix
    }
}
