//! RTSP header block processing module for encoding and decoding headers
//!
//! This module provides functionality for handling the header block of RTSP requests and
//! responses, the `Key: Value` lines between the start-line and the body.
//!
//! # Components
//!
//! - [`HeaderDecoder`]: Decodes a header block from a buffered byte stream
//!   - Canonicalizes keys case-insensitively
//!   - Keeps repeated keys as ordered value lists
//!   - Enforces key, value and key count limits
//!
//! - [`HeaderEncoder`]: Encodes a header collection to bytes
//!   - Emits keys in ascending byte-wise order
//!   - Produces byte-for-byte reproducible output
//!
//! - [`HeaderReader`]: Bounded byte reading primitives shared by the decoder and message framing
//!
//! # Limits
//!
//! - Maximum number of distinct keys: [`MAX_HEADER_NUM`]
//! - Maximum key size, colon included: [`MAX_KEY_BYTES`]
//! - Maximum value size, trailing CR included: [`MAX_VALUE_BYTES`]

mod header_decoder;
mod header_encoder;
mod header_reader;

pub use header_decoder::HeaderDecoder;
pub use header_encoder::HeaderEncoder;
pub use header_reader::HeaderReader;

/// Maximum number of distinct keys allowed in a header block
pub const MAX_HEADER_NUM: usize = 255;

/// Maximum size in bytes of a key together with its trailing colon
pub const MAX_KEY_BYTES: usize = 1024;

/// Maximum size in bytes of a value together with its trailing CR
pub const MAX_VALUE_BYTES: usize = 1024;
