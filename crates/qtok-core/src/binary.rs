//! Binary Codec — a length-prefixed serialization of a [`TokenMatrix`].
//!
//! Wire layout, all integers little-endian 32-bit signed, token text as
//! UTF-8 bytes behind the same int32 prefix convention:
//!
//! ```text
//! int32        lineCount
//! repeat lineCount times:
//!   int32      tokenCount
//!   repeat tokenCount times:
//!     int32    byteLength
//!     bytes    token UTF-8
//! ```
//!
//! Encoding is lossless for arbitrary token text, empty strings included —
//! unlike the text form, nothing is quoted or dropped. Both directions are a
//! single linear pass over a caller-owned stream and must run to completion:
//! there is no partial-result contract. A short read, a negative count, or
//! invalid UTF-8 aborts decoding with a fatal [`QtokError`]; a matrix whose
//! counts or token byte lengths exceed `i32::MAX` aborts encoding the same
//! way.

use std::io::{ErrorKind, Read, Write};

use crate::error::{QtokError, Result};
use crate::types::{TokenLine, TokenMatrix};

/// Serialize a matrix to a caller-owned stream.
pub fn encode<W: Write>(out: &mut W, matrix: &[TokenLine]) -> Result<()> {
    write_count(out, matrix.len(), "line count")?;
    for line in matrix {
        write_count(out, line.len(), "token count")?;
        for token in line {
            write_count(out, token.len(), "token byte length")?;
            out.write_all(token.as_bytes())?;
        }
    }
    Ok(())
}

/// Deserialize a matrix from a caller-owned stream.
///
/// Reads exactly the structure the counts declare and nothing more; trailing
/// bytes in the stream are left unread. Wire counts are untrusted, so
/// preallocation is capped — a corrupt count surfaces as a truncation fault,
/// not a giant allocation.
pub fn decode<R: Read>(input: &mut R) -> Result<TokenMatrix> {
    let line_count = read_count(input, "line count")?;
    let mut matrix = TokenMatrix::with_capacity(line_count.min(PREALLOC_CAP));
    for _ in 0..line_count {
        let token_count = read_count(input, "token count")?;
        let mut line = TokenLine::with_capacity(token_count.min(PREALLOC_CAP));
        for _ in 0..token_count {
            line.push(read_token(input)?);
        }
        matrix.push(line);
    }
    Ok(matrix)
}

/// Upper bound on speculative `with_capacity` calls driven by wire counts.
const PREALLOC_CAP: usize = 1024;

/// Serialize a matrix to an owned byte buffer.
pub fn encode_to_vec(matrix: &[TokenLine]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode(&mut out, matrix)?;
    Ok(out)
}

/// Deserialize a matrix from a byte slice.
pub fn decode_slice(mut bytes: &[u8]) -> Result<TokenMatrix> {
    decode(&mut bytes)
}

fn write_count<W: Write>(out: &mut W, value: usize, what: &'static str) -> Result<()> {
    let count = i32::try_from(value).map_err(|_| QtokError::Oversized { what, value })?;
    out.write_all(&count.to_le_bytes())?;
    Ok(())
}

fn read_count<R: Read>(input: &mut R, what: &'static str) -> Result<usize> {
    let mut buf = [0u8; 4];
    read_exact(input, &mut buf, what)?;
    let value = i32::from_le_bytes(buf);
    usize::try_from(value).map_err(|_| QtokError::NegativeCount { what, value })
}

fn read_token<R: Read>(input: &mut R) -> Result<String> {
    let len = read_count(input, "token byte length")?;
    // `take` + `read_to_end` grows the buffer as bytes actually arrive, so a
    // corrupt length cannot demand the whole allocation up front.
    let mut bytes = Vec::with_capacity(len.min(PREALLOC_CAP));
    input.take(len as u64).read_to_end(&mut bytes)?;
    if bytes.len() < len {
        return Err(QtokError::Truncated("token bytes"));
    }
    Ok(String::from_utf8(bytes)?)
}

/// `Read::read_exact` with end-of-stream surfaced as [`QtokError::Truncated`]
/// naming the structure field that was being read.
fn read_exact<R: Read>(input: &mut R, buf: &mut [u8], what: &'static str) -> Result<()> {
    input.read_exact(buf).map_err(|err| {
        if err.kind() == ErrorKind::UnexpectedEof {
            QtokError::Truncated(what)
        } else {
            QtokError::Io(err)
        }
    })
}
