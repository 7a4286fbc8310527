//! The RTSP header collection.
//!
//! [`Header`] maps canonical header keys to the ordered list of values seen for that key. It is
//! present in both requests and responses and is produced by the
//! [`HeaderDecoder`](crate::codec::header::HeaderDecoder) or built directly by the caller before
//! encoding.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::io::{BufRead, Write};

use bytes::BytesMut;

use crate::codec::header::{HeaderDecoder, HeaderEncoder};
use crate::protocol::header_name::normalize;
use crate::protocol::{ParseError, SendError};

/// The values of a single header key, in the order they were appended.
pub type HeaderValue = Vec<String>;

/// A collection of RTSP headers.
///
/// Keys are always stored in canonical form (see [`normalize`]), and every accessor normalizes
/// its key argument first, so lookups are case-insensitive. Iteration yields keys in ascending
/// byte-wise order, which is also the order used on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    inner: BTreeMap<String, HeaderValue>,
}

impl Header {
    /// Creates an empty header collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a header block from `reader`.
    ///
    /// The reader must be positioned right after the start-line. On success it is left right
    /// after the blank line that terminates the block.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        HeaderDecoder::decode(reader)
    }

    /// Writes the canonical wire form of this collection, blank line included.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), SendError> {
        HeaderEncoder::write(self, writer)
    }

    /// Returns the canonical wire form of this collection.
    pub fn to_bytes(&self) -> BytesMut {
        let mut dst = BytesMut::new();
        HeaderEncoder::encode_to(self, &mut dst);
        dst
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(&normalize(key))
    }

    /// Returns the first value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(&normalize(key)).and_then(|values| values.first()).map(String::as_str)
    }

    /// Returns every value of `key` in append order.
    pub fn get_all(&self, key: &str) -> Option<&[String]> {
        self.inner.get(&normalize(key)).map(Vec::as_slice)
    }

    /// Appends a value to `key`, keeping the values already present.
    ///
    /// The collection does not validate what it stores. An encoded block only decodes back to
    /// the same collection when the caller keeps the wire invariants:
    ///
    /// - `key` is non-empty and contains neither `:` nor CR
    /// - `value` is non-empty, does not start with a space and contains no CR
    /// - keys stay below [`MAX_KEY_BYTES`], values below [`MAX_VALUE_BYTES`], and there are at most
    ///   [`MAX_HEADER_NUM`] distinct keys
    ///
    /// The character rules are checked with `debug_assert!`.
    ///
    /// [`MAX_KEY_BYTES`]: crate::codec::header::MAX_KEY_BYTES
    /// [`MAX_VALUE_BYTES`]: crate::codec::header::MAX_VALUE_BYTES
    /// [`MAX_HEADER_NUM`]: crate::codec::header::MAX_HEADER_NUM
    pub fn append<K: AsRef<str>, V: Into<String>>(&mut self, key: K, value: V) {
        let (key, value) = (key.as_ref(), value.into());
        debug_assert_wire_safe(key, &value);
        self.append_normalized(normalize(key), value);
    }

    /// Replaces all values of `key` with a single value, returning the previous ones.
    ///
    /// `key` and `value` follow the same rules as in [`append`](Self::append).
    pub fn insert<K: AsRef<str>, V: Into<String>>(&mut self, key: K, value: V) -> Option<HeaderValue> {
        let (key, value) = (key.as_ref(), value.into());
        debug_assert_wire_safe(key, &value);
        self.inner.insert(normalize(key), vec![value])
    }

    /// Removes `key`, returning its values.
    pub fn remove(&mut self, key: &str) -> Option<HeaderValue> {
        self.inner.remove(&normalize(key))
    }

    /// Iterates `(key, values)` pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.inner.iter() }
    }

    /// Iterates the canonical keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    pub(crate) fn contains_normalized(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub(crate) fn append_normalized(&mut self, key: String, value: String) {
        self.inner.entry(key).or_default().push(value);
    }
}

fn debug_assert_wire_safe(key: &str, value: &str) {
    debug_assert!(!key.is_empty() && !key.contains([':', '\r']), "header key {key:?} can not be encoded");
    debug_assert!(!value.is_empty() && !value.starts_with(' ') && !value.contains('\r'), "header value {value:?} can not be encoded");
}

/// Iterator over the entries of a [`Header`], see [`Header::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, HeaderValue>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a [String]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Header {
    type Item = (&'a str, &'a [String]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Header {
    type Item = (String, HeaderValue);
    type IntoIter = btree_map::IntoIter<String, HeaderValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<K: AsRef<str>, V: Into<String>> Extend<(K, V)> for Header {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.append(key, value);
        }
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Header {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut header = Header::new();
        header.extend(iter);
        header
    }
}
