//! CLI handlers for `decode`, `encode` and `truncate`.

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::debug;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use utf8codec::{chars_lossy, encode, encode_length, is_scalar_value, truncation_point};

use crate::parse_size;

/// Decode input leniently, one code point at a time.
#[derive(Debug, Parser)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if omitted)
    pub file: Option<PathBuf>,

    /// Write the decoded text as UTF-8 instead of listing code points
    #[arg(long)]
    pub lossy: bool,

    /// Prefix each listed code point with its byte offset
    #[arg(long, conflicts_with = "lossy")]
    pub offsets: bool,
}

/// Encode code points as UTF-8.
#[derive(Debug, Parser)]
pub struct EncodeArgs {
    /// Code points as U+20AC, 0x20AC or decimal
    #[arg(required = true)]
    pub codepoints: Vec<String>,
}

/// Cut a file without splitting a multi-byte sequence.
#[derive(Debug, Parser)]
pub struct TruncateArgs {
    /// Input file
    pub file: PathBuf,

    /// Desired maximum length (supports b, kb, mb, gb - case insensitive)
    #[arg(long, value_parser = parse_size)]
    pub at: usize,

    /// Write the kept prefix to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn read_input(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut input = Vec::new();
            io::stdin()
                .read_to_end(&mut input)
                .context("failed to read from stdin")?;
            Ok(input)
        }
    }
}

/// Run the decode command.
pub fn run_decode(args: DecodeArgs) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    debug!("decoding {} bytes", input.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut chars = chars_lossy(&input);
    let mut replaced = 0usize;
    loop {
        let offset = chars.offset();
        let Some(ch) = chars.next() else {
            break;
        };
        if ch == utf8codec::REPLACEMENT_CHARACTER
            && !input[offset..].starts_with("\u{FFFD}".as_bytes())
        {
            replaced += 1;
        }

        if args.lossy {
            let mut buf = [0u8; 4];
            out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        } else if args.offsets {
            writeln!(out, "{}\t{}", offset, format_code_point(ch as u32))?;
        } else {
            writeln!(out, "{}", format_code_point(ch as u32))?;
        }
    }
    out.flush()?;

    debug!("substituted {} malformed bytes", replaced);
    Ok(())
}

/// Run the encode command.
pub fn run_encode(args: EncodeArgs) -> Result<()> {
    for text in &args.codepoints {
        let cp = parse_code_point(text)?;
        let mut buf = [0u8; 4];
        let len = encode(cp, &mut buf);
        debug_assert_eq!(len, encode_length(cp));
        println!("{}\t{}", format_code_point(cp), format_hex(&buf[..len]));
    }
    Ok(())
}

/// Run the truncate command.
pub fn run_truncate(args: TruncateArgs) -> Result<()> {
    let input = read_input(Some(args.file.as_path()))?;
    let window = &input[..args.at.min(input.len())];
    let keep = truncation_point(window);
    debug!(
        "requested {} of {} bytes, keeping {}",
        args.at,
        input.len(),
        keep
    );

    match args.output {
        Some(path) => {
            fs::write(&path, &input[..keep])
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("✓ Wrote {} bytes to {}", keep, path.display());
        }
        None => println!("{}", keep),
    }
    Ok(())
}

/// Parse `U+20AC`, `0x20AC` or `8364` into a checked code point.
fn parse_code_point(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    let hex = trimmed
        .strip_prefix("U+")
        .or_else(|| trimmed.strip_prefix("u+"))
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"));
    let cp = match hex {
        Some(digits) => u32::from_str_radix(digits, 16),
        None => trimmed.parse::<u32>(),
    }
    .with_context(|| format!("invalid code point: '{}'", text))?;

    if !is_scalar_value(cp) {
        bail!("U+{:04X} is not a Unicode scalar value", cp);
    }
    Ok(cp)
}

fn format_code_point(cp: u32) -> String {
    format!("U+{:04X}", cp)
}

fn format_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
