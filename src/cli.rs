use crate::config::Options;
use crate::error::{DdpError, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ddp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Deduplicate entries or email addresses in a text file")]
#[command(
    long_about = "ddp reads a text file, extracts its entries (delimited values, quoted or \
                  bracketed substrings, or email addresses) and writes the unique entries, \
                  in first-seen order, to an output file."
)]
#[command(override_usage = "ddp <input-file> [/o|/output <path>] [/v|/verbose] [/e|/email]")]
#[command(after_help = "FLAGS (case-insensitive):\n  \
    /o, /output <path>   Write results to <path> (default: filtered.txt)\n  \
    /v, /verbose         Prepend a summary line and put one record per line\n  \
    /e, /email           Extract email addresses only\n\n\
    EXAMPLES:\n  \
    ddp contacts.csv\n  \
    ddp contacts.csv /o unique.txt /v\n  \
    ddp mailbox.txt /email /output addresses.txt")]
pub struct Cli {
    /// Input file followed by optional slash flags; unknown tokens are ignored
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse with clap for `--help`, `--version` and usage errors, then keep
    /// the arguments exactly as given. clap drops a literal `--`, which the
    /// slash-flag scan must still see (as the input path when it comes first).
    pub fn parse_raw<I>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let mut cli = Self::try_parse_from(&args)?;
        cli.args = args.into_iter().skip(1).collect();
        Ok(cli)
    }

    pub fn options(&self) -> Result<Options> {
        parse_options(&self.args)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Output,
    Verbose,
    Email,
}

impl Flag {
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "/o" | "/output" => Some(Flag::Output),
            "/v" | "/verbose" => Some(Flag::Verbose),
            "/e" | "/email" => Some(Flag::Email),
            _ => None,
        }
    }
}

/// Scan raw arguments into [`Options`].
///
/// The input path is always the first argument. Every argument, the first
/// included, is also checked for a flag. The argument following `/o` is taken
/// as the output path and is not itself checked for a flag; a trailing `/o`
/// leaves the default output in place.
pub fn parse_options<S: AsRef<str>>(args: &[S]) -> Result<Options> {
    let input = args.first().ok_or(DdpError::MissingInput)?;
    let mut options = Options::new(input.as_ref());

    let mut index = 0;
    while index < args.len() {
        match Flag::parse(args[index].as_ref()) {
            Some(Flag::Output) => {
                if let Some(path) = args.get(index + 1) {
                    options = options.with_output(path.as_ref());
                    index += 1;
                }
            }
            Some(Flag::Verbose) => options = options.with_verbose(true),
            Some(Flag::Email) => options = options.with_email_only(true),
            None => {}
        }
        index += 1;
    }

    options.validate()?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_OUTPUT_FILE;
    use std::path::Path;

    #[test]
    fn test_input_only() {
        let options = parse_options(&["list.txt"]).unwrap();
        assert_eq!(options.input_path(), Path::new("list.txt"));
        assert_eq!(options.output_path(), Path::new(DEFAULT_OUTPUT_FILE));
        assert!(!options.verbose);
        assert!(!options.email_only);
    }

    #[test]
    fn test_all_flags() {
        let options = parse_options(&["list.txt", "/o", "out.txt", "/v", "/e"]).unwrap();
        assert_eq!(options.output_path(), Path::new("out.txt"));
        assert!(options.verbose);
        assert!(options.email_only);
    }

    #[test]
    fn test_long_flags_case_insensitive() {
        let options =
            parse_options(&["list.txt", "/OUTPUT", "out.txt", "/Verbose", "/EMAIL"]).unwrap();
        assert_eq!(options.output_path(), Path::new("out.txt"));
        assert!(options.verbose);
        assert!(options.email_only);
    }

    #[test]
    fn test_flag_order_does_not_reset_earlier_flags() {
        let options = parse_options(&["list.txt", "/v", "/e", "--unknown"]).unwrap();
        assert!(options.verbose);
        assert!(options.email_only);
    }

    #[test]
    fn test_trailing_output_flag_keeps_default() {
        let options = parse_options(&["list.txt", "/o"]).unwrap();
        assert_eq!(options.output_path(), Path::new(DEFAULT_OUTPUT_FILE));
    }

    #[test]
    fn test_output_value_not_scanned_as_flag() {
        let options = parse_options(&["list.txt", "/o", "/v"]).unwrap();
        assert_eq!(options.output_path(), Path::new("/v"));
        assert!(!options.verbose);
    }

    #[test]
    fn test_unknown_tokens_ignored() {
        let options = parse_options(&["list.txt", "extra.txt", "/x", "-v"]).unwrap();
        assert_eq!(options.input_path(), Path::new("list.txt"));
        assert!(!options.verbose);
    }

    #[test]
    fn test_first_argument_is_input_even_when_flag() {
        let options = parse_options(&["/v", "list.txt"]).unwrap();
        assert_eq!(options.input_path(), Path::new("/v"));
        assert!(options.verbose);
    }

    #[test]
    fn test_no_arguments_is_error() {
        let empty: [&str; 0] = [];
        assert!(matches!(parse_options(&empty), Err(DdpError::MissingInput)));
    }

    #[test]
    fn test_empty_output_is_error() {
        assert!(matches!(
            parse_options(&["list.txt", "/o", ""]),
            Err(DdpError::Options { .. })
        ));
    }

    #[test]
    fn test_clap_collects_raw_arguments() {
        let cli = Cli::try_parse_from(["ddp", "list.txt", "/o", "out.txt", "/v"]).unwrap();
        assert_eq!(cli.args, vec!["list.txt", "/o", "out.txt", "/v"]);

        let options = cli.options().unwrap();
        assert_eq!(options.output_path(), Path::new("out.txt"));
        assert!(options.verbose);
    }

    #[test]
    fn test_raw_arguments_keep_double_dash() {
        let raw = ["ddp", "--", "list.txt", "/o", "out.txt"].map(String::from);
        let cli = Cli::parse_raw(raw).unwrap();
        assert_eq!(cli.args, vec!["--", "list.txt", "/o", "out.txt"]);

        let options = cli.options().unwrap();
        assert_eq!(options.input_path(), Path::new("--"));
        assert_eq!(options.output_path(), Path::new("out.txt"));
    }

    #[test]
    fn test_clap_accepts_no_arguments() {
        let cli = Cli::try_parse_from(["ddp"]).unwrap();
        assert!(cli.args.is_empty());
        assert!(matches!(cli.options(), Err(DdpError::MissingInput)));
    }
}
