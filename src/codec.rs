//! The file-to-file driver: derive the output name, stream the input through
//! the per-byte transform, and handle the one-byte key header.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::cipher::{transform, Mode};
use crate::error::CodecError;
use crate::key::Key;

const BUF_CAP: usize = 64 * 1024; // 64 KiB streaming buffers

/// Extension written by the encoder ("codice di Cesare").
pub const ENCODED_EXT: &str = "cdc";
/// Extension written by the decoder.
pub const PLAIN_EXT: &str = "txt";

/// Derive the output name by overwriting the last three characters of the
/// input name with `ext`. The input's extension is assumed to be exactly
/// three characters and is not validated.
pub fn output_path(input: &Path, ext: &str) -> PathBuf {
    let mut name = input.to_string_lossy().into_owned();
    let mut keep = name.len().saturating_sub(3);
    while !name.is_char_boundary(keep) {
        keep -= 1;
    }
    name.truncate(keep);
    name.push_str(ext);
    PathBuf::from(name)
}

/// Encode `input` with `key` into the sibling `.cdc` file: one key byte,
/// then the shifted stream. Returns the path written. The key has already
/// been range-checked, so no file is touched with an invalid key.
pub fn encode_file(input: &Path, key: Key) -> Result<PathBuf, CodecError> {
    let src = File::open(input).map_err(|source| CodecError::InputOpen {
        path: input.to_path_buf(),
        source,
    })?;

    let out = output_path(input, ENCODED_EXT);
    let dst = File::create(&out).map_err(|source| CodecError::OutputCreate {
        path: out.clone(),
        source,
    })?;

    let mut reader = BufReader::with_capacity(BUF_CAP, src);
    let mut writer = BufWriter::with_capacity(BUF_CAP, dst);

    writer.write_all(&[key.to_header_byte()])?;
    run_transform(&mut reader, &mut writer, key, Mode::Encode)?;
    writer.flush()?;
    Ok(out)
}

/// Decode `input` into the sibling `.txt` file. The first byte is consumed
/// as the key and never written to the output.
pub fn decode_file(input: &Path) -> Result<PathBuf, CodecError> {
    let src = File::open(input).map_err(|source| CodecError::InputOpen {
        path: input.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::with_capacity(BUF_CAP, src);

    let mut header = [0u8; 1];
    reader.read_exact(&mut header).map_err(|err| {
        // only a clean EOF means "no key byte"; anything else is a real
        // read failure
        if err.kind() == io::ErrorKind::UnexpectedEof {
            CodecError::MissingKeyByte {
                path: input.to_path_buf(),
            }
        } else {
            CodecError::Io(err)
        }
    })?;
    let key = Key::from_header_byte(header[0]);

    let out = output_path(input, PLAIN_EXT);
    let dst = File::create(&out).map_err(|source| CodecError::OutputCreate {
        path: out.clone(),
        source,
    })?;
    let mut writer = BufWriter::with_capacity(BUF_CAP, dst);

    run_transform(&mut reader, &mut writer, key, Mode::Decode)?;
    writer.flush()?;
    Ok(out)
}

/// The transform loop. Chunked for I/O efficiency only; the cipher itself is
/// stateless, one byte at a time, in order. A failure mid-loop leaves the
/// partially written output on disk, matching the original tool.
fn run_transform<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    key: Key,
    mode: Mode,
) -> Result<(), CodecError> {
    let mut buf = vec![0u8; BUF_CAP];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        for byte in &mut buf[..n] {
            *byte = transform(*byte, key.value(), mode);
        }
        writer.write_all(&buf[..n])?;
    }
    Ok(())
}
