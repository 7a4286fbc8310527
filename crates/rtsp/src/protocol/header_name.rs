//! Header key canonicalization.
//!
//! RTSP header keys are matched case-insensitively. Every key read from the wire or handed to
//! [`Header`](super::Header) goes through [`normalize`], so the collection only ever stores the
//! canonical spelling:
//!
//! - a few protocol keys keep a fixed spelling that does not follow the generic rule
//!   (`CSeq`, `WWW-Authenticate`, `RTP-INFO`)
//! - every other key is split on `-`, each segment gets an upper-case first letter and a
//!   lower-case rest, and the segments are joined again
//!
//! ```
//! use micro_rtsp::protocol::header_name::normalize;
//!
//! assert_eq!(normalize("cseq"), "CSeq");
//! assert_eq!(normalize("content-LENGTH"), "Content-Length");
//! ```

pub const CSEQ: &str = "CSeq";
pub const WWW_AUTHENTICATE: &str = "WWW-Authenticate";
pub const RTP_INFO: &str = "RTP-INFO";

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_BASE: &str = "Content-Base";
pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const PUBLIC: &str = "Public";
pub const RANGE: &str = "Range";
pub const SESSION: &str = "Session";
pub const TRANSPORT: &str = "Transport";
pub const USER_AGENT: &str = "User-Agent";

/// Keys whose canonical form does not follow the hyphen title case rule,
/// indexed by their lower-case spelling.
const EXCEPTIONS: [(&str, &str); 3] = [("cseq", CSEQ), ("www-authenticate", WWW_AUTHENTICATE), ("rtp-info", RTP_INFO)];

/// Returns the canonical form of a raw header key.
///
/// Only ASCII letters change case, any other byte is copied through untouched, so the function
/// is defined for every input and `normalize(normalize(k)) == normalize(k)`.
pub fn normalize(raw: &str) -> String {
    if let Some(&(_, canonical)) = EXCEPTIONS.iter().find(|(lower, _)| raw.eq_ignore_ascii_case(lower)) {
        return canonical.to_owned();
    }

    let mut canonical = String::with_capacity(raw.len());
    let mut upper = true;
    for c in raw.chars() {
        if upper {
            canonical.push(c.to_ascii_uppercase());
        } else {
            canonical.push(c.to_ascii_lowercase());
        }
        upper = c == '-';
    }
    canonical
}
