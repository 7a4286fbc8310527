//! Byte level reading primitives for the header block.
//!
//! [`HeaderReader`] wraps any [`BufRead`] and offers exactly the operations the header grammar
//! needs: read one byte, peek one byte, skip a run of spaces and read up to a delimiter with a
//! hard length bound. Lookahead is served from the wrapped reader's own buffer, so a peeked byte
//! is never lost and the wrapped reader is always positioned right after the last consumed byte.

use std::io::{BufRead, ErrorKind};

use crate::ensure;
use crate::protocol::ParseError;

/// A bounded, byte oriented reader over a buffered stream.
#[derive(Debug)]
pub struct HeaderReader<R> {
    inner: R,
}

impl<R: BufRead> HeaderReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Consumes the reader, returning the wrapped stream.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Returns the buffered bytes, failing with [`ParseError::UnexpectedEof`] when the stream
    /// is exhausted. Interrupted reads are retried.
    fn fill_buf(&mut self) -> Result<&[u8], ParseError> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => {
                    ensure!(!buf.is_empty(), ParseError::UnexpectedEof);
                    break;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        // the buffer is non-empty now, so this hands back the same bytes without reading again
        Ok(self.inner.fill_buf()?)
    }

    /// Returns the next byte without consuming it.
    pub fn peek_byte(&mut self) -> Result<u8, ParseError> {
        Ok(self.fill_buf()?[0])
    }

    pub fn read_byte(&mut self) -> Result<u8, ParseError> {
        let byte = self.peek_byte()?;
        self.inner.consume(1);
        Ok(byte)
    }

    /// Reads one byte that must be a line feed.
    pub fn read_lf(&mut self) -> Result<(), ParseError> {
        let byte = self.read_byte()?;
        ensure!(byte == b'\n', ParseError::malformed_line_ending(byte));
        Ok(())
    }

    /// Discards ASCII spaces, leaving the first non-space byte unread.
    pub fn skip_spaces(&mut self) -> Result<(), ParseError> {
        loop {
            let buf = self.fill_buf()?;
            let spaces = buf.iter().take_while(|&&byte| byte == b' ').count();
            let found_other = spaces < buf.len();
            self.inner.consume(spaces);
            if found_other {
                return Ok(());
            }
        }
    }

    /// Reads up to and including `delim`, returning the bytes before it.
    ///
    /// At most `limit` bytes are consumed, the delimiter included. `Ok(None)` means `limit` bytes
    /// were read without meeting the delimiter; those bytes are gone from the stream.
    pub fn read_until_limited(&mut self, delim: u8, limit: usize) -> Result<Option<Vec<u8>>, ParseError> {
        let mut bytes = Vec::new();
        while bytes.len() < limit {
            let remaining = limit - bytes.len();
            let buf = self.fill_buf()?;
            let window = &buf[..buf.len().min(remaining)];

            if let Some(pos) = window.iter().position(|&byte| byte == delim) {
                bytes.extend_from_slice(&window[..pos]);
                self.inner.consume(pos + 1);
                return Ok(Some(bytes));
            }

            let read = window.len();
            bytes.extend_from_slice(window);
            self.inner.consume(read);
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Read};

    #[test]
    fn read_and_peek() {
        let mut reader = HeaderReader::new(&b"ab"[..]);

        assert_eq!(reader.peek_byte().unwrap(), b'a');
        assert_eq!(reader.peek_byte().unwrap(), b'a');
        assert_eq!(reader.read_byte().unwrap(), b'a');
        assert_eq!(reader.read_byte().unwrap(), b'b');
        assert!(matches!(reader.read_byte(), Err(ParseError::UnexpectedEof)));
        assert!(matches!(reader.peek_byte(), Err(ParseError::UnexpectedEof)));
    }

    #[test]
    fn read_lf() {
        let mut reader = HeaderReader::new(&b"\nx"[..]);

        reader.read_lf().unwrap();
        assert!(matches!(reader.read_lf(), Err(ParseError::MalformedLineEnding { found: b'x' })));
        assert!(matches!(reader.read_lf(), Err(ParseError::UnexpectedEof)));
    }

    #[test]
    fn skip_spaces_keeps_next_byte() {
        let mut reader = HeaderReader::new(&b"    value"[..]);

        reader.skip_spaces().unwrap();
        assert_eq!(reader.read_byte().unwrap(), b'v');

        let mut reader = HeaderReader::new(&b"value"[..]);
        reader.skip_spaces().unwrap();
        assert_eq!(reader.read_byte().unwrap(), b'v');
    }

    #[test]
    fn skip_spaces_across_buffer_refills() {
        let input = b"          x";
        // a tiny capacity forces several refills while skipping
        let mut reader = HeaderReader::new(BufReader::with_capacity(3, &input[..]));

        reader.skip_spaces().unwrap();
        assert_eq!(reader.read_byte().unwrap(), b'x');
    }

    #[test]
    fn skip_spaces_hits_eof() {
        let mut reader = HeaderReader::new(&b"   "[..]);

        assert!(matches!(reader.skip_spaces(), Err(ParseError::UnexpectedEof)));
    }

    #[test]
    fn read_until_limited_found() {
        let mut reader = HeaderReader::new(&b"Session: 1"[..]);

        let bytes = reader.read_until_limited(b':', 8).unwrap().unwrap();
        assert_eq!(&bytes[..], b"Session");

        let mut rest = Vec::new();
        reader.into_inner().read_to_end(&mut rest).unwrap();
        assert_eq!(&rest[..], b" 1");
    }

    #[test]
    fn read_until_limited_bound_includes_delimiter() {
        let mut reader = HeaderReader::new(&b"Session:"[..]);
        assert!(reader.read_until_limited(b':', 7).unwrap().is_none());

        let mut reader = HeaderReader::new(&b"Session:"[..]);
        assert_eq!(&reader.read_until_limited(b':', 8).unwrap().unwrap()[..], b"Session");
    }

    #[test]
    fn read_until_limited_across_buffer_refills() {
        let input = b"abcdefghij\rrest";
        let mut reader = HeaderReader::new(BufReader::with_capacity(4, &input[..]));

        let bytes = reader.read_until_limited(b'\r', 64).unwrap().unwrap();
        assert_eq!(&bytes[..], b"abcdefghij");
        assert_eq!(reader.read_byte().unwrap(), b'r');

        let mut reader = HeaderReader::new(BufReader::with_capacity(4, &input[..]));
        assert!(reader.read_until_limited(b'\r', 10).unwrap().is_none());
        assert_eq!(reader.read_byte().unwrap(), b'\r');
    }

    /// Fails its first read with `Interrupted`, then serves `data`.
    struct Interrupting {
        interrupted: bool,
        data: &'static [u8],
    }

    impl Read for Interrupting {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            self.data.read(buf)
        }
    }

    #[test]
    fn interrupted_read_is_retried() {
        let mut reader = HeaderReader::new(BufReader::new(Interrupting { interrupted: false, data: b"CSeq:" }));

        assert_eq!(&reader.read_until_limited(b':', 8).unwrap().unwrap()[..], b"CSeq");
    }

    #[test]
    fn other_read_errors_propagate() {
        struct Reset;

        impl Read for Reset {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::ConnectionReset))
            }
        }

        let mut reader = HeaderReader::new(BufReader::new(Reset));

        assert!(matches!(reader.read_byte(), Err(ParseError::Io { source }) if source.kind() == io::ErrorKind::ConnectionReset));
    }

    #[test]
    fn read_until_limited_eof() {
        let mut reader = HeaderReader::new(&b"no-delimiter"[..]);

        assert!(matches!(reader.read_until_limited(b':', 1024), Err(ParseError::UnexpectedEof)));
    }
}
