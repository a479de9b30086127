//! caesar — classic Caesar-cipher file codec (.txt <-> .cdc).
//!
//! Encoding writes the key as a single lowercase letter ('a' = 1 … 'z' = 26)
//! followed by the shifted byte stream; decoding reads the key back from
//! that first byte. ".cdc" stands for "codice di Cesare".

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

mod cipher;
mod codec;
mod error;
mod key;

const SYNTAX: &str = "Syntax:\n* caesar -c file_name.txt key\n* caesar -d file_name.cdc";

/* -------------------------------------------------------------------------- */
/*                                    CLI                                     */
/* -------------------------------------------------------------------------- */

/// Encode and decode text files with the classic Caesar cipher
#[derive(Parser, Debug)]
#[command(
    name = "caesar",
    version,
    about,
    override_usage = "caesar -c <file_name.txt> <key>\n       caesar -d <file_name.cdc>"
)]
struct Cli {
    /// Encode FILE; KEY is required
    #[arg(short = 'c', long = "code", value_name = "FILE", conflicts_with = "decode")]
    code: Option<PathBuf>,

    /// Decode FILE; the key is read from its first byte
    #[arg(short = 'd', long = "decode", value_name = "FILE")]
    decode: Option<PathBuf>,

    /// Rotation key, a number between 1 and 26
    #[arg(value_name = "KEY")]
    key: Option<String>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if err.kind() == ErrorKind::DisplayHelp
                || err.kind() == ErrorKind::DisplayVersion =>
        {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => return usage(),
    };

    let outcome = match (cli.code, cli.decode, cli.key) {
        (Some(input), None, Some(key)) => encode(&input, &key),
        (None, Some(input), None) => decode(&input),
        _ => return usage(),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn usage() -> ExitCode {
    println!("{SYNTAX}");
    ExitCode::FAILURE
}

/* -------------------------------------------------------------------------- */
/*                                 DISPATCH                                   */
/* -------------------------------------------------------------------------- */

fn encode(input: &Path, raw_key: &str) -> Result<()> {
    let key = key::parse_key(raw_key)?;
    let out = codec::encode_file(input, key)?;
    println!("Encoded '{}' -> '{}'", input.display(), out.display());
    Ok(())
}

fn decode(input: &Path) -> Result<()> {
    let out = codec::decode_file(input)?;
    println!("Decoded '{}' -> '{}'", input.display(), out.display());
    Ok(())
}
