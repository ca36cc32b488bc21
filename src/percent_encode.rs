use crate::compat::{Cow, String};
use crate::error::{ParseError, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode, utf8_percent_encode};

/// application/x-www-form-urlencoded percent-encode set
/// Everything except ASCII alphanumerics and `*`, `-`, `.`, `_`
/// Space is in the set but never reaches the encoder, it is written as `+`
pub const FORM_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Write a form-urlencoded component directly to buffer
pub fn encode_component_into(buffer: &mut String, input: &str) {
    buffer.reserve(input.len());

    for (i, segment) in input.split(' ').enumerate() {
        if i > 0 {
            buffer.push('+');
        }
        for chunk in utf8_percent_encode(segment, FORM_COMPONENT_SET) {
            buffer.push_str(chunk);
        }
    }
}

/// `+` means space in form encoding; it must be replaced before
/// percent-decoding so that `%2B` survives as a literal plus.
fn plus_to_space(input: &str) -> Cow<'_, [u8]> {
    let bytes = input.as_bytes();
    if memchr::memchr(b'+', bytes).is_none() {
        return Cow::Borrowed(bytes);
    }
    Cow::Owned(
        bytes
            .iter()
            .map(|&b| if b == b'+' { b' ' } else { b })
            .collect(),
    )
}

/// Decode a form-urlencoded component, replacing invalid UTF-8 with U+FFFD
pub fn decode_component_lossy(input: &str) -> String {
    let bytes = plus_to_space(input);
    percent_decode(&bytes).decode_utf8_lossy().into()
}

/// Decode a form-urlencoded component
pub fn decode_component(input: &str) -> Result<String> {
    let bytes = plus_to_space(input);
    percent_decode(&bytes)
        .decode_utf8()
        .map(Into::into)
        .map_err(|_| ParseError::InvalidPercentEncoding)
}
