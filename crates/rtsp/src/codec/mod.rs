//! RTSP codec module for encoding and decoding message headers
//!
//! This module converts the header block of an RTSP message between its wire form and the
//! [`Header`](crate::protocol::Header) collection. Framing of the start-line and the body is
//! left to the caller, which hands the decoder a stream positioned right after the start-line.
//!
//! # Example
//!
//! ```
//! use micro_rtsp::codec::header::{HeaderDecoder, HeaderEncoder};
//! use micro_rtsp::protocol::header_name::CSEQ;
//!
//! let mut input = &b"cseq: 1\r\nSession:   12345678\r\n\r\n"[..];
//! let header = HeaderDecoder::decode(&mut input).unwrap();
//! assert_eq!(header.get(CSEQ), Some("1"));
//!
//! let mut output = Vec::new();
//! HeaderEncoder::write(&header, &mut output).unwrap();
//! assert_eq!(output, b"CSeq: 1\r\nSession: 12345678\r\n\r\n");
//! ```
//!
//! # Features
//!
//! - Single pass blocking decode with strict resource bounds
//! - Case-insensitive key canonicalization
//! - Deterministic, sorted serialization

pub mod header;
