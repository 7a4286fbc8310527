//! RTSP header block decoder.
//!
//! This module turns the header block of an RTSP message, everything between the start-line and
//! the body, into a [`Header`] collection.
//!
//! # Wire format
//!
//! ```text
//! CSeq: 2\r\n
//! Transport: RTP/AVP;unicast;client_port=8000-8001\r\n
//! \r\n
//! ```
//!
//! - keys are read up to the first `:` and canonicalized with [`normalize`]
//! - any number of spaces after the `:` is skipped, nothing else is trimmed
//! - a key seen more than once keeps all of its values in order
//! - the block ends with an empty line
//!
//! # Limits
//!
//! - Maximum number of distinct keys: [`MAX_HEADER_NUM`]
//! - Maximum key size, colon included: [`MAX_KEY_BYTES`]
//! - Maximum value size, trailing CR included: [`MAX_VALUE_BYTES`]
//!
//! Decoding is a single blocking pass. It either returns the complete collection or an error, and
//! after an error the stream position is unspecified.

use std::io::BufRead;

use tracing::trace;

use super::{HeaderReader, MAX_HEADER_NUM, MAX_KEY_BYTES, MAX_VALUE_BYTES};
use crate::ensure;
use crate::protocol::header_name::normalize;
use crate::protocol::{Header, ParseError};

/// Decoder for RTSP header blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderDecoder;

impl HeaderDecoder {
    /// Decodes one header block from `reader`.
    ///
    /// The reader must be positioned at the first byte after the start-line. On success it is
    /// positioned right after the terminating empty line.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - the stream fails or ends before the empty line
    /// - a CR is not followed by LF
    /// - a key or value exceeds its size limit
    /// - a value is empty
    /// - a new key would exceed `MAX_HEADER_NUM` distinct keys
    /// - a key or value is not valid UTF-8
    pub fn decode<R: BufRead>(reader: R) -> Result<Header, ParseError> {
        let mut reader = HeaderReader::new(reader);
        let mut header = Header::new();

        loop {
            let first = reader.read_byte()?;
            if first == b'\r' {
                reader.read_lf()?;
                break;
            }

            let key = read_key(&mut reader, first)?;
            ensure!(
                header.len() < MAX_HEADER_NUM || header.contains_normalized(&key),
                ParseError::too_many_headers(MAX_HEADER_NUM)
            );

            // the value may be preceded by any amount of spaces
            reader.skip_spaces()?;
            let value = read_value(&mut reader)?;

            header.append_normalized(key, value);
        }

        trace!(header_num = header.len(), "decoded header block");
        Ok(header)
    }
}

/// Reads the rest of a key whose first byte is `first`, returning it canonicalized.
fn read_key<R: BufRead>(reader: &mut HeaderReader<R>, first: u8) -> Result<String, ParseError> {
    let rest = reader.read_until_limited(b':', MAX_KEY_BYTES - 1)?.ok_or_else(|| ParseError::key_too_long(MAX_KEY_BYTES))?;

    let mut raw = Vec::with_capacity(rest.len() + 1);
    raw.push(first);
    raw.extend_from_slice(&rest);
    let raw = String::from_utf8(raw).map_err(|e| e.utf8_error())?;

    Ok(normalize(&raw))
}

fn read_value<R: BufRead>(reader: &mut HeaderReader<R>) -> Result<String, ParseError> {
    let bytes = reader.read_until_limited(b'\r', MAX_VALUE_BYTES)?.ok_or_else(|| ParseError::value_too_long(MAX_VALUE_BYTES))?;
    ensure!(!bytes.is_empty(), ParseError::EmptyValue);
    reader.read_lf()?;

    String::from_utf8(bytes).map_err(|e| e.utf8_error().into())
}
