//! utf8codec CLI tool for inspecting and repairing UTF-8 data.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

mod generators;
mod inspect;
mod validate;

/// Exit codes shared by all commands.
pub mod exit_codes {
    /// Input is valid / command succeeded.
    pub const SUCCESS: i32 = 0;
    /// UTF-8 is invalid (validation error).
    pub const INVALID: i32 = 1;
    /// I/O error (file not found, permission denied, etc.).
    pub const IO_ERROR: i32 = 2;
}

#[derive(Debug, Parser)]
#[command(name = "utf8codec")]
#[command(about = "UTF-8 classification, decoding, encoding and validation toolkit", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Strictly validate files (or stdin) as UTF-8
    Validate(validate::ValidateArgs),
    /// Decode leniently, substituting U+FFFD for malformed bytes
    Decode(inspect::DecodeArgs),
    /// Encode code points and print their UTF-8 bytes
    Encode(inspect::EncodeArgs),
    /// Find the longest prefix that does not split a code point
    Truncate(inspect::TruncateArgs),
    /// Generate synthetic UTF-8 text for testing and benchmarking
    Generate(GenerateArgs),
}

/// Generate synthetic UTF-8 text for testing and benchmarking
#[derive(Debug, Parser)]
struct GenerateArgs {
    /// Size of text to generate (supports b, kb, mb, gb - case insensitive)
    /// Examples: 1024, 1kb, 512MB, 2Gb
    #[arg(value_parser = parse_size)]
    size: usize,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Text pattern to generate
    #[arg(short, long, default_value = "mixed")]
    pattern: PatternArg,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, ValueEnum)]
enum PatternArg {
    /// Printable ASCII (1-byte sequences)
    Ascii,
    /// Latin accented letters (2-byte sequences)
    Latin,
    /// CJK ideographs (3-byte sequences)
    Cjk,
    /// Emoji (4-byte sequences)
    Emoji,
    /// Uniform mix of all sequence lengths (default)
    Mixed,
    /// Mixed text with malformed bytes injected
    Corrupt,
}

impl From<PatternArg> for generators::Utf8Pattern {
    fn from(arg: PatternArg) -> Self {
        match arg {
            PatternArg::Ascii => generators::Utf8Pattern::Ascii,
            PatternArg::Latin => generators::Utf8Pattern::Latin,
            PatternArg::Cjk => generators::Utf8Pattern::Cjk,
            PatternArg::Emoji => generators::Utf8Pattern::Emoji,
            PatternArg::Mixed => generators::Utf8Pattern::Mixed,
            PatternArg::Corrupt => generators::Utf8Pattern::Corrupt,
        }
    }
}

/// Parse size string like "1mb", "512KB", "2GB", "1024" (case insensitive)
pub(crate) fn parse_size(s: &str) -> Result<usize, String> {
    let s = s.trim().to_lowercase();

    // Try parsing as plain number first
    if let Ok(bytes) = s.parse::<usize>() {
        return Ok(bytes);
    }

    // Parse with unit suffix
    let (num_str, unit) = if let Some(n) = s.strip_suffix("gb") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("mb") {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("kb") {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('b') {
        (n, 1)
    } else {
        return Err(format!(
            "Invalid size format: '{}'. Use format like '1mb', '512KB', or '1024'",
            s
        ));
    };

    num_str
        .trim()
        .parse::<usize>()
        .map(|n| n * unit)
        .map_err(|_| format!("Invalid number in size: '{}'", s))
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let text = generators::generate_utf8(args.size, args.pattern.into(), args.seed);
    log::debug!("generated {} bytes", text.len());

    match args.output {
        Some(path) => {
            std::fs::write(&path, &text)?;
            eprintln!("✓ Wrote {} bytes to {}", text.len(), path.display());
        }
        None => {
            std::io::stdout().write_all(&text)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::builder().format_timestamp(None).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Validate(args) => {
            let code = validate::run(args)?;
            if code != exit_codes::SUCCESS {
                std::process::exit(code);
            }
            Ok(())
        }
        Command::Decode(args) => inspect::run_decode(args),
        Command::Encode(args) => inspect::run_encode(args),
        Command::Truncate(args) => inspect::run_truncate(args),
        Command::Generate(args) => run_generate(args),
    }
}
