//! A micro RTSP header block codec
//!
//! This crate converts the header block of an RTSP message, the `Key: Value` lines between the
//! start-line and the body, into a structured [`protocol::Header`] collection and back into its
//! canonical byte form. Message framing, transports and sessions live outside of this crate.
//!
//! # Features
//!
//! - Single pass, blocking decode over any [`std::io::BufRead`]
//! - Case-insensitive keys with the RTSP spelling exceptions (`CSeq`, `WWW-Authenticate`, `RTP-INFO`)
//! - Repeated keys kept as ordered value lists
//! - Deterministic encoding with keys in ascending byte-wise order
//! - Strict limits on key size, value size and number of keys
//!
//! # Example
//!
//! ```
//! use micro_rtsp::protocol::Header;
//! use micro_rtsp::protocol::header_name::{CSEQ, SESSION};
//!
//! let mut stream = &b"cseq: 4\r\nsession:  12345678\r\n\r\nv=0\r\n"[..];
//!
//! let header = Header::read_from(&mut stream).unwrap();
//! assert_eq!(header.get(CSEQ), Some("4"));
//! assert_eq!(header.get(SESSION), Some("12345678"));
//! // the body is left untouched in the stream
//! assert_eq!(stream, b"v=0\r\n");
//!
//! let mut reply = Header::new();
//! reply.append(CSEQ, "4");
//! reply.append(SESSION, "12345678");
//! assert_eq!(&reply.to_bytes()[..], b"CSeq: 4\r\nSession: 12345678\r\n\r\n");
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: The header collection, key canonicalization and error types
//! - [`codec`]: Header block decoding and encoding
//!
//! # Error Handling
//!
//! - [`protocol::RtspError`]: Top-level error type
//! - [`protocol::ParseError`]: Header decoding errors
//! - [`protocol::SendError`]: Header encoding errors
//!
//! Errors are never logged or retried by the crate, they are returned to the caller.
//!
//! # Limitations
//!
//! - No folded (multi-line) header values
//! - Maximum number of distinct keys: 255
//! - Maximum key and value size: 1024 bytes including the delimiter

pub mod codec;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
