//! Percent-encoding for identifiers interpolated into request paths.
//!
//! Service ids come from callers and are placed in `/services/{id}`. A raw
//! `/`, `?` or `#` in an id would change which resource the request targets,
//! so every path segment goes through [`encode_path_segment`].
//!
//! Query parameters are encoded separately by `reqwest`'s `query()`.
//!
//! ```
//! use render_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("srv-abc123"), "srv-abc123");
//! assert_eq!(encode_path_segment("../owners"), "..%2Fowners");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped inside a single path segment (RFC 3986 section 3.3).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as exactly one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}
