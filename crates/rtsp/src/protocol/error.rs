use std::io;
use std::str::Utf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RtspError {
    #[error("header decode error: {source}")]
    DecodeError {
        #[from]
        source: ParseError,
    },

    #[error("header encode error: {source}")]
    EncodeError {
        #[from]
        source: SendError,
    },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("unexpected end of stream")]
    UnexpectedEof,

    #[error("malformed line ending: expected LF but found {found:#04x}")]
    MalformedLineEnding { found: u8 },

    #[error("header key exceeds the limit {max_size}")]
    KeyTooLong { max_size: usize },

    #[error("header value exceeds the limit {max_size}")]
    ValueTooLong { max_size: usize },

    #[error("empty header value")]
    EmptyValue,

    #[error("header number exceed the limit {max_num}")]
    TooManyHeaders { max_num: usize },

    #[error("invalid header encoding: {source}")]
    InvalidEncoding {
        #[from]
        source: Utf8Error,
    },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ParseError {
    pub fn malformed_line_ending(found: u8) -> Self {
        Self::MalformedLineEnding { found }
    }

    pub fn key_too_long(max_size: usize) -> Self {
        Self::KeyTooLong { max_size }
    }

    pub fn value_too_long(max_size: usize) -> Self {
        Self::ValueTooLong { max_size }
    }

    pub fn too_many_headers(max_num: usize) -> Self {
        Self::TooManyHeaders { max_num }
    }
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}
