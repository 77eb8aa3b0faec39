//! CLI handler for the `validate` command.

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use utf8codec::{validate_utf8, Utf8Error, Utf8ErrorKind};

use crate::exit_codes;

/// Validate files for strict UTF-8 well-formedness.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Input files to validate (reads from stdin if none provided)
    #[arg(trailing_var_arg = true)]
    pub files: Vec<PathBuf>,

    /// Quiet mode: exit code only, no output
    #[arg(short, long)]
    pub quiet: bool,

    /// Report each input as a JSON line on stdout instead of a snippet on stderr
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Force color output even when not a TTY
    #[arg(short = 'C', long = "color")]
    pub color: bool,

    /// Disable color output
    #[arg(short = 'M', long = "no-color")]
    pub no_color: bool,
}

/// ANSI color codes for error output.
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const LOCATION: &str = "\x1b[1;34m"; // Bold blue
    pub const LINE_NUM: &str = "\x1b[0;34m"; // Blue
    pub const CARET: &str = "\x1b[1;32m"; // Bold green
    pub const MESSAGE: &str = "\x1b[0;33m"; // Yellow
}

/// Color scheme that can be disabled.
struct ColorScheme {
    error: &'static str,
    location: &'static str,
    line_num: &'static str,
    caret: &'static str,
    message: &'static str,
    reset: &'static str,
}

impl ColorScheme {
    fn new(use_color: bool) -> Self {
        if use_color {
            Self {
                error: colors::ERROR,
                location: colors::LOCATION,
                line_num: colors::LINE_NUM,
                caret: colors::CARET,
                message: colors::MESSAGE,
                reset: colors::RESET,
            }
        } else {
            Self {
                error: "",
                location: "",
                line_num: "",
                caret: "",
                message: "",
                reset: "",
            }
        }
    }
}

/// One line of `--json` output.
#[derive(Debug, Serialize)]
struct Report<'a> {
    file: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<Utf8Error>,
}

/// Run the validate command.
pub fn run(args: ValidateArgs) -> Result<i32> {
    let use_color = if args.no_color {
        false
    } else if args.color {
        true
    } else {
        atty::is(atty::Stream::Stderr)
    };

    let scheme = ColorScheme::new(use_color);

    if args.files.is_empty() {
        let mut input = Vec::new();
        io::stdin()
            .read_to_end(&mut input)
            .context("failed to read from stdin")?;

        return validate_input(&input, "<stdin>", &args, &scheme);
    }

    let mut any_invalid = false;
    let mut any_io_error = false;

    for path in &args.files {
        match fs::read(path) {
            Ok(input) => {
                let filename = path.to_string_lossy();
                let result = validate_input(&input, &filename, &args, &scheme)?;
                if result == exit_codes::INVALID {
                    any_invalid = true;
                }
            }
            Err(e) => {
                any_io_error = true;
                if !args.quiet {
                    eprintln!(
                        "{}error{}: {}: {}",
                        scheme.error,
                        scheme.reset,
                        path.display(),
                        e
                    );
                }
            }
        }
    }

    if any_io_error {
        Ok(exit_codes::IO_ERROR)
    } else if any_invalid {
        Ok(exit_codes::INVALID)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

/// Validate a single input and print errors.
fn validate_input(
    input: &[u8],
    filename: &str,
    args: &ValidateArgs,
    scheme: &ColorScheme,
) -> Result<i32> {
    debug!("validating {} ({} bytes)", filename, input.len());
    let result = validate_utf8(input);

    if args.json {
        let report = Report {
            file: filename,
            valid: result.is_ok(),
            error: result.err(),
        };
        println!("{}", serde_json::to_string(&report)?);
    } else if let Err(err) = &result {
        if !args.quiet {
            print_error(err, input, filename, scheme);
        }
    }

    match result {
        Ok(()) => Ok(exit_codes::SUCCESS),
        Err(err) => {
            debug!("{}: {}", filename, err);
            Ok(exit_codes::INVALID)
        }
    }
}

/// Print a formatted error message with context snippet.
fn print_error(err: &Utf8Error, input: &[u8], filename: &str, scheme: &ColorScheme) {
    eprintln!(
        "{}error{}: {}",
        scheme.error,
        scheme.reset,
        format_error_kind(err.kind, err.offset, input)
    );

    eprintln!(
        "  {}--> {}:{}:{}{}",
        scheme.location, filename, err.line, err.column, scheme.reset
    );

    let snippet = error_snippet(input, err);
    let line_num_width = err.line.to_string().len().max(3);
    let blank_padding = " ".repeat(line_num_width + 2);

    eprintln!("{}{}|{}", blank_padding, scheme.line_num, scheme.reset);
    eprintln!(
        " {}{:>width$}{} {}|{} {}",
        scheme.line_num,
        err.line,
        scheme.reset,
        scheme.line_num,
        scheme.reset,
        snippet.line_content,
        width = line_num_width
    );
    eprintln!(
        "{}{}|{} {}{}^{} {}{}{}",
        blank_padding,
        scheme.line_num,
        scheme.reset,
        " ".repeat(snippet.caret_offset),
        scheme.caret,
        scheme.reset,
        scheme.message,
        err.kind.hint(),
        scheme.reset
    );
    eprintln!();
}

/// Format the error kind as a human-readable message.
fn format_error_kind(kind: Utf8ErrorKind, offset: usize, input: &[u8]) -> String {
    match input.get(offset) {
        Some(byte) => format!("{} ({})", kind, format_byte(*byte)),
        None => kind.to_string(),
    }
}

/// Format a byte as a human-readable string for error messages.
fn format_byte(byte: u8) -> String {
    if byte.is_ascii_graphic() || byte == b' ' {
        format!("byte 0x{:02X} {:?}", byte, byte as char)
    } else {
        format!("byte 0x{:02X}", byte)
    }
}

/// The line containing an error, rendered for display.
#[derive(Debug, PartialEq, Eq)]
struct ErrorSnippet {
    /// The content of the line, malformed bytes shown as U+FFFD.
    line_content: String,
    /// Number of characters before the caret.
    caret_offset: usize,
}

/// Maximum number of characters of the offending line that are shown.
const MAX_SNIPPET_WIDTH: usize = 80;

/// Extract the line around an error, windowed to [`MAX_SNIPPET_WIDTH`] characters.
fn error_snippet(input: &[u8], err: &Utf8Error) -> ErrorSnippet {
    let line_start = err.offset + 1 - err.column;
    let line_end = input[line_start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(input.len(), |i| line_start + i);
    let line = &input[line_start..line_end];

    // Everything before the error is well-formed, so the caret sits after
    // exactly as many characters as precede the error offset.
    let error_char = utf8codec::chars_lossy(&line[..err.column - 1]).count();
    let display = line.strip_suffix(b"\r").unwrap_or(line);
    let chars: Vec<char> = utf8codec::chars_lossy(display).collect();

    if chars.len() <= MAX_SNIPPET_WIDTH {
        return ErrorSnippet {
            line_content: chars.into_iter().collect(),
            caret_offset: error_char,
        };
    }

    let start = error_char
        .saturating_sub(MAX_SNIPPET_WIDTH / 2)
        .min(chars.len() - MAX_SNIPPET_WIDTH);
    let end = start + MAX_SNIPPET_WIDTH;
    let mut line_content = String::new();
    let mut caret_offset = error_char - start;
    if start > 0 {
        line_content.push_str("...");
        caret_offset += 3;
    }
    line_content.extend(&chars[start..end]);
    if end < chars.len() {
        line_content.push_str("...");
    }

    ErrorSnippet {
        line_content,
        caret_offset,
    }
}
