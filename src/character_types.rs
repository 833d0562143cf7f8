
/// OWS
pub fn is_whitespace_byte(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// VCHAR
pub fn is_visible_byte(byte: u8) -> bool {
    byte >= 0x21 && byte <= 0x7e
}

/// obs-text
pub fn is_obs_text_byte(byte: u8) -> bool {
    byte >= 0x80 // and implicitly `byte <= 0xff`
}

/// tchar, the class forming method names, field names and codings
pub fn is_token_byte(byte: u8) -> bool {
    b"!#$%&'*+-.^_`|~".contains(&byte) || byte.is_ascii_digit() || byte.is_ascii_alphabetic()
}

pub fn is_field_value_byte(byte: u8) -> bool {
    is_visible_byte(byte) || is_obs_text_byte(byte) || is_whitespace_byte(byte)
}

/// Section 3.1.1 of RFC 7230 allows scanning the request target up to
/// the next whitespace; we still pin the alphabet down to the characters
/// request targets are actually made of.
pub fn is_request_target_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || b"?/-._~%!$&'()*+,;=:@".contains(&byte)
}

/// chunk-ext taken as one flat class: everything a token or a quoted
/// string may contain, i.e. any VCHAR or obs-text plus HT and SP. The
/// ext is skipped, never interpreted, so the inner `;token=value`
/// structure is not enforced here.
pub fn is_chunk_ext_byte(byte: u8) -> bool {
    is_visible_byte(byte) || is_obs_text_byte(byte) || is_whitespace_byte(byte)
}
