//! Core RTSP protocol abstractions.
//!
//! This module provides the types shared by the codec and the message-level logic built on top
//! of it.
//!
//! # Architecture
//!
//! - **Header Collection** ([`header`]): the decoded header block
//!   - [`Header`]: canonical key to ordered value list mapping
//!   - [`HeaderValue`]: the values of a single key
//!
//! - **Header Keys** ([`header_name`]): key canonicalization and well-known keys
//!
//! - **Error Handling** ([`error`]): error types
//!   - [`RtspError`]: Top-level error type
//!   - [`ParseError`]: Header decoding errors
//!   - [`SendError`]: Header encoding errors

pub mod header;
pub use header::Header;
pub use header::HeaderValue;

pub mod header_name;

mod error;
pub use error::ParseError;
pub use error::RtspError;
pub use error::SendError;
