use clap::{Parser, Subcommand, ValueEnum};
use yasl_diagnostic::termcolor::ColorChoice;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// When to colour diagnostics.
    #[arg(long, value_enum, global = true, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the tokens of a program, one per line.
    Tokens {
        /// The input file.
        input: String,

        /// Whether the given input should be used directly as the source instead
        /// of as the source file path.
        #[arg(long, short)]
        source: bool,
    },

    /// Parse a program and print it back in canonical form.
    Parse {
        /// The input file.
        input: String,

        /// Whether the given input should be used directly as the source instead
        /// of as the source file path.
        #[arg(long, short)]
        source: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}
