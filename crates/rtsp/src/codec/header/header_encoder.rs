//! RTSP header block encoder.
//!
//! Serializes a [`Header`] into its canonical wire form. Keys are written in ascending byte-wise
//! order whatever order the collection was built in, values of a key keep their append order,
//! and the block is closed by an empty line:
//!
//! ```text
//! CSeq: 1\r\n
//! Session: 12345678\r\n
//! \r\n
//! ```
//!
//! The output is byte-for-byte reproducible, which callers may rely on for digests or tests.

use std::io::Write;

use bytes::{BufMut, BytesMut};
use tokio_util::codec::Encoder;
use tracing::trace;

use crate::protocol::{Header, SendError};

/// Encoder for RTSP header blocks implementing the [`Encoder`] trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderEncoder;

impl HeaderEncoder {
    /// Appends the wire form of `header` to `dst`.
    pub fn encode_to(header: &Header, dst: &mut BytesMut) {
        let size = header.iter().flat_map(|(key, values)| values.iter().map(move |value| key.len() + value.len() + 4)).sum::<usize>() + 2;
        dst.reserve(size);

        // `Header` iterates in ascending key order
        for (key, values) in header {
            for value in values {
                dst.put_slice(key.as_bytes());
                dst.put_slice(b": ");
                dst.put_slice(value.as_bytes());
                dst.put_slice(b"\r\n");
            }
        }
        dst.put_slice(b"\r\n");

        trace!(header_num = header.len(), header_bytes = size, "encoded header block");
    }

    /// Writes the wire form of `header` to `writer`.
    ///
    /// The block is serialized in memory first and handed to the writer in one `write_all`, any
    /// write failure aborts the operation and is returned unchanged.
    pub fn write<W: Write>(header: &Header, mut writer: W) -> Result<(), SendError> {
        let mut dst = BytesMut::new();
        Self::encode_to(header, &mut dst);
        writer.write_all(&dst)?;
        Ok(())
    }
}

impl Encoder<&Header> for HeaderEncoder {
    type Error = SendError;

    fn encode(&mut self, item: &Header, dst: &mut BytesMut) -> Result<(), Self::Error> {
        Self::encode_to(item, dst);
        Ok(())
    }
}
