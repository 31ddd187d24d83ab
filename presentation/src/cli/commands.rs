//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use winconf_domain::ExpectedType;

/// Output format for command results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables; scripts are printed as-is
    Table,
    /// JSON output
    Json,
}

/// Shape of the encoded script
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExpectedTypeArg {
    /// One newline-delimited script
    Str,
    /// One statement per entry
    List,
}

impl From<ExpectedTypeArg> for ExpectedType {
    fn from(arg: ExpectedTypeArg) -> Self {
        match arg {
            ExpectedTypeArg::Str => ExpectedType::Str,
            ExpectedTypeArg::List => ExpectedType::List,
        }
    }
}

/// CLI arguments for winconf
#[derive(Parser, Debug)]
#[command(name = "winconf")]
#[command(author, version, about = "Encode Windows web-server tunables as PowerShell and read them back")]
#[command(long_about = r#"
winconf turns HTTP.sys registry values and IIS configuration properties into
PowerShell write scripts, builds the read script reporting their current
state, and decodes that report (or a previously applied script) back into
values.

The encoder section is read from --config (TOML or JSON). Keys may be
overridden with WINCONF_ENCODER_* environment variables.

Example:
  winconf --config encoder.toml describe
  winconf --config encoder.toml encode --values values.json
  winconf --config encoder.toml encode-describe > read.ps1
  powershell -File read.ps1 | winconf --config encoder.toml decode --data -
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the encoder configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Dotted key of the encoder section inside the configuration file
    #[arg(long, value_name = "KEY", global = true)]
    pub section: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show each setting's domain, with current values when --data is given
    Describe {
        /// Describe output or applied script (`-` for stdin)
        #[arg(long, value_name = "PATH")]
        data: Option<String>,

        /// Adjust driver configuration listing config-list paths
        #[arg(long, value_name = "PATH")]
        adjust: Option<String>,
    },

    /// Encode setting values into a write script
    Encode {
        /// JSON or TOML document of values (`-` for stdin)
        #[arg(long, value_name = "PATH")]
        values: String,

        /// Output shape; must not also be set in the configuration
        #[arg(long, value_enum)]
        expected_type: Option<ExpectedTypeArg>,

        #[arg(long, value_name = "PATH")]
        adjust: Option<String>,
    },

    /// Decode current values from describe output or an applied script
    Decode {
        /// Input file (`-` for stdin)
        #[arg(long, value_name = "PATH")]
        data: String,
    },

    /// Print the read script reporting the current state
    EncodeDescribe {
        #[arg(long, value_name = "PATH")]
        adjust: Option<String>,
    },

    /// List the supported setting identifiers
    ShowSettings,
}

impl Command {
    /// Whether the command needs an encoder configuration
    pub fn needs_config(&self) -> bool {
        !matches!(self, Command::ShowSettings)
    }
}
