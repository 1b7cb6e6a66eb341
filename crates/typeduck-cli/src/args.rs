use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the typeduck binary.
#[derive(Parser, Debug)]
#[command(
    name = "typeduck",
    version,
    about = "Check whether one typing-style annotation is usable where another is expected"
)]
pub struct CliArgs {
    /// Never colorize output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check one source annotation against one target annotation.
    Check {
        /// Annotation of the value being supplied, e.g. `List[str]`.
        source: String,

        /// Annotation of the slot it is supplied to, e.g. `Optional[list]`.
        target: String,

        /// Explain why an incompatible pair fails.
        #[arg(long)]
        strict: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the canonical descriptor of an annotation.
    Normalize {
        expr: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check every case of a JSON file: `[{"source", "target", "expected"?}]`.
    Batch {
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_defaults() {
        let args = CliArgs::try_parse_from(["typeduck", "check", "str", "Optional[str]"])
            .expect("valid arguments");
        assert!(!args.no_color);
        match args.command {
            Command::Check {
                source,
                target,
                strict,
                format,
            } => {
                assert_eq!(source, "str");
                assert_eq!(target, "Optional[str]");
                assert!(!strict);
                assert_eq!(format, OutputFormat::Text);
            }
            other => panic!("expected check, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flag_after_subcommand() {
        let args = CliArgs::try_parse_from([
            "typeduck", "normalize", "int | None", "--format", "json", "--no-color",
        ])
        .expect("valid arguments");
        assert!(args.no_color);
        assert!(matches!(
            args.command,
            Command::Normalize {
                format: OutputFormat::Json,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(CliArgs::try_parse_from(["typeduck", "batch", "cases.json", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_check_requires_two_annotations() {
        assert!(CliArgs::try_parse_from(["typeduck", "check", "str"]).is_err());
    }
}
