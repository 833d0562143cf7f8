//! The request tokenizer.
//!
//! [`RequestReader`] is a pull-style state machine over HTTP/1.x request
//! messages. The driver owns the buffer; the reader owns positions and
//! framing state. Each call to [`RequestReader::advance`] classifies the
//! next token of the message as a window `[token_start, token_start +
//! token_size)` into the driver's buffer, or reports
//! [`Code::InsufficientData`] when the buffer ends before the token
//! does, or parks the reader in a sticky error state.
//!
//! No byte of the message is ever copied or allocated here: the
//! accessors ([`RequestReader::method`] and friends) return subslices
//! of whatever buffer the driver passes in.

use crate::character_types::{
    is_chunk_ext_byte, is_field_value_byte, is_request_target_byte, is_token_byte,
    is_whitespace_byte,
};
use crate::numbers::{decode_decimal, decode_hex, Decoded};
use crate::transfer_encoding::{self, TransferEncoding};

const CR: u8 = b'\r';
const CRLF: &[u8] = b"\r\n";
const VERSION_PREFIX: &[u8] = b" HTTP/1.";

/// Classification of the current token.
///
/// After every [`RequestReader::advance`] call exactly one of these
/// describes what the window `[token_start, token_start + token_size)`
/// holds. `InsufficientData` is not an error: the buffer simply ends
/// before the token does, and the driver should feed more bytes. The
/// remaining `Invalid*`/`*Overflow`/`NoHost` codes are terminal; once
/// one is set, further `advance` calls keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    /// Structural bytes (SP, CRLF, colon plus OWS, chunk-size,
    /// chunk-ext). Consumed but carrying no value.
    Skip,
    Method,
    RequestTarget,
    /// The version digit after `HTTP/1.`.
    Version,
    FieldName,
    FieldValue,
    EndOfHeaders,
    BodyChunk,
    EndOfBody,
    EndOfMessage,
    /// Not an error: the current token cannot be completed with the
    /// bytes available. Extend the buffer and call `advance` again.
    InsufficientData,
    InvalidData,
    NoHost,
    InvalidContentLength,
    ContentLengthOverflow,
    InvalidTransferEncoding,
    ChunkSizeOverflow,
}

impl Code {
    /// True for the terminal error codes. `InsufficientData` is not
    /// one of them.
    pub fn is_error(self) -> bool {
        matches!(
            self,
            Code::InvalidData
                | Code::NoHost
                | Code::InvalidContentLength
                | Code::ContentLengthOverflow
                | Code::InvalidTransferEncoding
                | Code::ChunkSizeOverflow
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectMethod,
    ExpectSpAfterMethod,
    ExpectRequestTarget,
    ExpectStaticAfterTarget,
    ExpectVersion,
    ExpectCrlfAfterVersion,
    ExpectFieldName,
    ExpectColon,
    ExpectOwsAfterColon,
    ExpectFieldValue,
    ExpectCrlfAfterFieldValue,
    ExpectCrlfAfterHeaders,
    ExpectBody,
    ExpectChunkSize,
    ExpectChunkExt,
    ExpectCrlfAfterChunkExt,
    ExpectChunkData,
    ExpectCrlfAfterChunkData,
    ExpectTrailerName,
    ExpectTrailerColon,
    ExpectOwsAfterTrailerColon,
    ExpectTrailerValue,
    ExpectCrlfAfterTrailerValue,
    ExpectCrlfAfterTrailers,
    ExpectEndOfBody,
    ExpectEndOfMessage,
    Errored,
}

/// How the message body will be framed, per RFC 7230 section 3.3.3.
///
/// `ReadingContentLength` and `ReadingTransferEncoding` only live
/// between a length header's name and the end of its value; they are
/// resolved the moment the value token completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyFraming {
    None,
    ReadingContentLength,
    ContentLengthKnown,
    ReadingTransferEncoding,
    ChunkedFinal,
    NonChunkedEncoding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VersionState {
    Http10,
    Http11HostNotSeen,
    Http11HostSeen,
}

enum ScanEnd {
    /// A byte outside the class was found right after the token.
    Delimiter,
    /// The token runs to the end of the buffer; it may continue.
    More,
}

enum Step {
    Done,
    Stall,
    Mismatch,
}

/// Incremental tokenizer for HTTP/1.x request messages.
///
/// The reader holds no reference to the buffer. Instead, the driver
/// passes its buffer to every [`advance`](Self::advance) call and to
/// the accessors; `token_start`/`token_size` index into it. The bytes
/// at `[token_start, token_start + token_size)` must stay identical
/// across calls until the current token completes, and new bytes may
/// only ever appear at the tail. When the driver compacts or replaces
/// its buffer it must call [`set_buffer`](Self::set_buffer) first.
pub struct RequestReader {
    state: State,
    code: Code,
    idx: usize,
    token_size: usize,
    body: BodyFraming,
    body_size: u64,
    version: VersionState,
}

impl RequestReader {
    pub fn new() -> RequestReader {
        RequestReader {
            state: State::ExpectMethod,
            code: Code::InsufficientData,
            idx: 0,
            token_size: 0,
            body: BodyFraming::None,
            body_size: 0,
            version: VersionState::Http11HostNotSeen,
        }
    }

    /// Returns the reader to its initial state, forgetting any
    /// in-progress message (and any error).
    pub fn reset(&mut self) {
        *self = RequestReader::new();
    }

    /// Declares that the driver replaced its buffer.
    ///
    /// The new buffer must begin at the first unconsumed byte: the
    /// start of the in-progress token if `code()` is
    /// [`Code::InsufficientData`] (those `token_size` bytes must be
    /// carried over to the front of the new buffer), or the byte right
    /// after the current token otherwise.
    pub fn set_buffer(&mut self) {
        if self.state == State::Errored {
            return;
        }
        self.idx = 0;
        if self.code != Code::InsufficientData {
            // the current token was compacted away along with
            // everything before it
            self.token_size = 0;
            self.code = Code::InsufficientData;
        }
    }

    /// The current token classification.
    pub fn code(&self) -> Code {
        self.code
    }

    /// Offset of the current token window into the driver's buffer.
    pub fn token_start(&self) -> usize {
        self.idx
    }

    /// Length of the current token window. While `code()` is
    /// [`Code::InsufficientData`] this is the partial progress already
    /// scanned; it keeps growing across `advance` calls until the
    /// token completes.
    pub fn token_size(&self) -> usize {
        self.token_size
    }

    /// The token code the reader is trying to complete next, derived
    /// from its internal state. Drivers can use this to size their
    /// read-ahead. In the errored state this is the sticky error code.
    pub fn expected_token(&self) -> Code {
        match self.state {
            State::ExpectMethod => Code::Method,
            State::ExpectRequestTarget => Code::RequestTarget,
            State::ExpectVersion => Code::Version,
            State::ExpectFieldName | State::ExpectTrailerName => Code::FieldName,
            State::ExpectFieldValue | State::ExpectTrailerValue => Code::FieldValue,
            State::ExpectCrlfAfterHeaders => Code::EndOfHeaders,
            State::ExpectBody | State::ExpectChunkData => Code::BodyChunk,
            State::ExpectEndOfBody => Code::EndOfBody,
            State::ExpectEndOfMessage | State::ExpectCrlfAfterTrailers => Code::EndOfMessage,
            State::ExpectSpAfterMethod
            | State::ExpectStaticAfterTarget
            | State::ExpectCrlfAfterVersion
            | State::ExpectColon
            | State::ExpectOwsAfterColon
            | State::ExpectCrlfAfterFieldValue
            | State::ExpectChunkSize
            | State::ExpectChunkExt
            | State::ExpectCrlfAfterChunkExt
            | State::ExpectCrlfAfterChunkData
            | State::ExpectTrailerColon
            | State::ExpectOwsAfterTrailerColon
            | State::ExpectCrlfAfterTrailerValue => Code::Skip,
            State::Errored => self.code,
        }
    }

    /// Advances to the next token of the message.
    ///
    /// `buffer` is the driver's buffer. The already scanned bytes (up
    /// to `token_start() + token_size()`) must be unchanged since the
    /// previous call; growth happens at the tail only. After the call,
    /// consult [`code`](Self::code).
    ///
    /// In the errored state this is a no-op.
    pub fn advance(&mut self, buffer: &[u8]) {
        if self.state == State::Errored {
            return;
        }
        if self.code != Code::InsufficientData {
            // consume the previous token
            self.idx += self.token_size;
            self.token_size = 0;
        }

        // Zero-length skips re-drive instead of surfacing: the loop
        // runs until a meaningful token, a stall or an error.
        loop {
            match self.state {
                State::ExpectMethod => {
                    match self.scan(buffer, is_token_byte) {
                        ScanEnd::More => return self.stall(),
                        ScanEnd::Delimiter => {}
                    }
                    if self.token_size == 0 {
                        return self.fail(Code::InvalidData);
                    }
                    return self.emit(Code::Method, State::ExpectSpAfterMethod);
                }

                State::ExpectSpAfterMethod => match self.match_bytes(buffer, b" ") {
                    Step::Stall => return self.stall(),
                    Step::Mismatch => return self.fail(Code::InvalidData),
                    Step::Done => return self.emit(Code::Skip, State::ExpectRequestTarget),
                },

                State::ExpectRequestTarget => {
                    match self.scan(buffer, is_request_target_byte) {
                        ScanEnd::More => return self.stall(),
                        ScanEnd::Delimiter => {}
                    }
                    if self.token_size == 0 {
                        return self.fail(Code::InvalidData);
                    }
                    return self.emit(Code::RequestTarget, State::ExpectStaticAfterTarget);
                }

                State::ExpectStaticAfterTarget => match self.match_bytes(buffer, VERSION_PREFIX) {
                    Step::Stall => return self.stall(),
                    Step::Mismatch => return self.fail(Code::InvalidData),
                    Step::Done => return self.emit(Code::Skip, State::ExpectVersion),
                },

                State::ExpectVersion => {
                    if self.idx >= buffer.len() {
                        return self.stall();
                    }
                    let digit = buffer[self.idx];
                    if !digit.is_ascii_digit() {
                        return self.fail(Code::InvalidData);
                    }
                    self.version = if digit == b'0' {
                        VersionState::Http10
                    } else {
                        VersionState::Http11HostNotSeen
                    };
                    self.token_size = 1;
                    return self.emit(Code::Version, State::ExpectCrlfAfterVersion);
                }

                State::ExpectCrlfAfterVersion => match self.match_bytes(buffer, CRLF) {
                    Step::Stall => return self.stall(),
                    Step::Mismatch => return self.fail(Code::InvalidData),
                    Step::Done => return self.emit(Code::Skip, State::ExpectFieldName),
                },

                State::ExpectFieldName | State::ExpectTrailerName => {
                    let in_trailers = self.state == State::ExpectTrailerName;
                    match self.scan(buffer, is_token_byte) {
                        ScanEnd::More => return self.stall(),
                        ScanEnd::Delimiter => {}
                    }
                    if self.token_size == 0 {
                        if buffer[self.idx] != CR {
                            return self.fail(Code::InvalidData);
                        }
                        // end of the field block; no token for the
                        // empty name
                        self.state = if in_trailers {
                            State::ExpectCrlfAfterTrailers
                        } else {
                            State::ExpectCrlfAfterHeaders
                        };
                        continue;
                    }
                    if !in_trailers && !self.inspect_field_name(buffer) {
                        return;
                    }
                    let next = if in_trailers {
                        State::ExpectTrailerColon
                    } else {
                        State::ExpectColon
                    };
                    return self.emit(Code::FieldName, next);
                }

                State::ExpectColon | State::ExpectTrailerColon => {
                    let next = if self.state == State::ExpectTrailerColon {
                        State::ExpectOwsAfterTrailerColon
                    } else {
                        State::ExpectOwsAfterColon
                    };
                    match self.match_bytes(buffer, b":") {
                        Step::Stall => return self.stall(),
                        Step::Mismatch => return self.fail(Code::InvalidData),
                        // the colon starts a structural window that
                        // also swallows the OWS after it
                        Step::Done => self.state = next,
                    }
                }

                State::ExpectOwsAfterColon | State::ExpectOwsAfterTrailerColon => {
                    let next = if self.state == State::ExpectOwsAfterTrailerColon {
                        State::ExpectTrailerValue
                    } else {
                        State::ExpectFieldValue
                    };
                    match self.scan(buffer, is_whitespace_byte) {
                        ScanEnd::More => return self.stall(),
                        ScanEnd::Delimiter => return self.emit(Code::Skip, next),
                    }
                }

                State::ExpectFieldValue | State::ExpectTrailerValue => {
                    let in_trailers = self.state == State::ExpectTrailerValue;
                    match self.scan(buffer, is_field_value_byte) {
                        ScanEnd::More => return self.stall(),
                        ScanEnd::Delimiter => {}
                    }
                    if !in_trailers && !self.finish_field_value(buffer) {
                        return;
                    }
                    let next = if in_trailers {
                        State::ExpectCrlfAfterTrailerValue
                    } else {
                        State::ExpectCrlfAfterFieldValue
                    };
                    return self.emit(Code::FieldValue, next);
                }

                State::ExpectCrlfAfterFieldValue => match self.match_bytes(buffer, CRLF) {
                    Step::Stall => return self.stall(),
                    Step::Mismatch => return self.fail(Code::InvalidData),
                    Step::Done => return self.emit(Code::Skip, State::ExpectFieldName),
                },

                State::ExpectCrlfAfterHeaders => match self.match_bytes(buffer, CRLF) {
                    Step::Stall => return self.stall(),
                    Step::Mismatch => return self.fail(Code::InvalidData),
                    Step::Done => {
                        if self.version == VersionState::Http11HostNotSeen {
                            return self.fail(Code::NoHost);
                        }
                        let next = match self.body {
                            BodyFraming::None => State::ExpectEndOfBody,
                            BodyFraming::ContentLengthKnown => State::ExpectBody,
                            BodyFraming::ChunkedFinal => State::ExpectChunkSize,
                            // a Transfer-Encoding without chunked as the
                            // final coding leaves the body unframeable
                            BodyFraming::NonChunkedEncoding => {
                                return self.fail(Code::InvalidTransferEncoding)
                            }
                            BodyFraming::ReadingContentLength
                            | BodyFraming::ReadingTransferEncoding => {
                                unreachable!("length headers resolve when their value completes")
                            }
                        };
                        return self.emit(Code::EndOfHeaders, next);
                    }
                },

                State::ExpectBody => {
                    if self.body_size == 0 {
                        self.state = State::ExpectEndOfBody;
                        continue;
                    }
                    let available = buffer.len() - self.idx;
                    if available == 0 {
                        return self.stall();
                    }
                    let take = u64::min(available as u64, self.body_size) as usize;
                    self.token_size = take;
                    self.body_size -= take as u64;
                    let next = if self.body_size == 0 {
                        State::ExpectEndOfBody
                    } else {
                        State::ExpectBody
                    };
                    return self.emit(Code::BodyChunk, next);
                }

                State::ExpectChunkSize => {
                    match self.scan(buffer, |b| b.is_ascii_hexdigit()) {
                        // even with digits in hand we cannot tell where
                        // the size ends yet
                        ScanEnd::More => return self.stall(),
                        ScanEnd::Delimiter => {}
                    }
                    if self.token_size == 0 {
                        return self.fail(Code::InvalidData);
                    }
                    match decode_hex(self.window(buffer)) {
                        Decoded::Ok(size) => {
                            self.body_size = size;
                            return self.emit(Code::Skip, State::ExpectChunkExt);
                        }
                        Decoded::Invalid => return self.fail(Code::InvalidData),
                        Decoded::Overflow => return self.fail(Code::ChunkSizeOverflow),
                    }
                }

                State::ExpectChunkExt => {
                    match self.scan(buffer, is_chunk_ext_byte) {
                        ScanEnd::More => return self.stall(),
                        ScanEnd::Delimiter => {}
                    }
                    if buffer[self.idx + self.token_size] != CR {
                        return self.fail(Code::InvalidData);
                    }
                    if self.token_size == 0 {
                        self.state = State::ExpectCrlfAfterChunkExt;
                        continue;
                    }
                    return self.emit(Code::Skip, State::ExpectCrlfAfterChunkExt);
                }

                State::ExpectCrlfAfterChunkExt => match self.match_bytes(buffer, CRLF) {
                    Step::Stall => return self.stall(),
                    Step::Mismatch => return self.fail(Code::InvalidData),
                    Step::Done => {
                        if self.body_size != 0 {
                            return self.emit(Code::Skip, State::ExpectChunkData);
                        }
                        // the zero-size chunk ends the body; trailers
                        // may follow
                        return self.emit(Code::EndOfBody, State::ExpectTrailerName);
                    }
                },

                State::ExpectChunkData => {
                    let available = buffer.len() - self.idx;
                    if available == 0 {
                        return self.stall();
                    }
                    let take = u64::min(available as u64, self.body_size) as usize;
                    self.token_size = take;
                    self.body_size -= take as u64;
                    let next = if self.body_size == 0 {
                        State::ExpectCrlfAfterChunkData
                    } else {
                        State::ExpectChunkData
                    };
                    return self.emit(Code::BodyChunk, next);
                }

                State::ExpectCrlfAfterChunkData => match self.match_bytes(buffer, CRLF) {
                    Step::Stall => return self.stall(),
                    Step::Mismatch => return self.fail(Code::InvalidData),
                    Step::Done => return self.emit(Code::Skip, State::ExpectChunkSize),
                },

                State::ExpectCrlfAfterTrailerValue => match self.match_bytes(buffer, CRLF) {
                    Step::Stall => return self.stall(),
                    Step::Mismatch => return self.fail(Code::InvalidData),
                    Step::Done => return self.emit(Code::Skip, State::ExpectTrailerName),
                },

                State::ExpectCrlfAfterTrailers => match self.match_bytes(buffer, CRLF) {
                    Step::Stall => return self.stall(),
                    Step::Mismatch => return self.fail(Code::InvalidData),
                    Step::Done => {
                        self.body = BodyFraming::None;
                        self.body_size = 0;
                        return self.emit(Code::EndOfMessage, State::ExpectMethod);
                    }
                },

                State::ExpectEndOfBody => {
                    return self.emit(Code::EndOfBody, State::ExpectEndOfMessage);
                }

                State::ExpectEndOfMessage => {
                    self.body = BodyFraming::None;
                    self.body_size = 0;
                    return self.emit(Code::EndOfMessage, State::ExpectMethod);
                }

                State::Errored => return,
            }
        }
    }

    // ---- token value accessors ------------------------------------

    /// The method token, e.g. `b"GET"`.
    ///
    /// Panics if the current token is not [`Code::Method`].
    pub fn method<'b>(&self, buffer: &'b [u8]) -> &'b [u8] {
        assert_eq!(self.code, Code::Method, "current token is not a method");
        self.window(buffer)
    }

    /// The request target token, e.g. `b"/index.html"`.
    ///
    /// Panics if the current token is not [`Code::RequestTarget`].
    pub fn request_target<'b>(&self, buffer: &'b [u8]) -> &'b [u8] {
        assert_eq!(
            self.code,
            Code::RequestTarget,
            "current token is not a request target"
        );
        self.window(buffer)
    }

    /// The minor version digit: 0 for HTTP/1.0, 1 for HTTP/1.1.
    ///
    /// Panics if the current token is not [`Code::Version`].
    pub fn version(&self, buffer: &[u8]) -> u8 {
        assert_eq!(self.code, Code::Version, "current token is not a version");
        buffer[self.idx] - b'0'
    }

    /// A field (or trailer) name, case preserved.
    ///
    /// Panics if the current token is not [`Code::FieldName`].
    pub fn field_name<'b>(&self, buffer: &'b [u8]) -> &'b [u8] {
        assert_eq!(
            self.code,
            Code::FieldName,
            "current token is not a field name"
        );
        self.window(buffer)
    }

    /// A field (or trailer) value with trailing OWS trimmed.
    ///
    /// Leading OWS was already consumed after the colon; trailing OWS
    /// is part of the token window (the scanner cannot know where the
    /// value ends before seeing the CRLF) and is trimmed here, without
    /// touching the buffer.
    ///
    /// Panics if the current token is not [`Code::FieldValue`].
    pub fn field_value<'b>(&self, buffer: &'b [u8]) -> &'b [u8] {
        assert_eq!(
            self.code,
            Code::FieldValue,
            "current token is not a field value"
        );
        let window = self.window(buffer);
        let end = window
            .iter()
            .rposition(|&b| !is_whitespace_byte(b))
            .map_or(0, |p| p + 1);
        &window[..end]
    }

    /// A run of body bytes, uninterpreted.
    ///
    /// Panics if the current token is not [`Code::BodyChunk`].
    pub fn body_chunk<'b>(&self, buffer: &'b [u8]) -> &'b [u8] {
        assert_eq!(
            self.code,
            Code::BodyChunk,
            "current token is not a body chunk"
        );
        self.window(buffer)
    }

    // ---- internals ------------------------------------------------

    fn window<'b>(&self, buffer: &'b [u8]) -> &'b [u8] {
        &buffer[self.idx..self.idx + self.token_size]
    }

    /// Extends the token over `pred` bytes, resuming at the already
    /// scanned length.
    fn scan(&mut self, buffer: &[u8], pred: fn(u8) -> bool) -> ScanEnd {
        let mut end = self.idx + self.token_size;
        while end < buffer.len() && pred(buffer[end]) {
            end += 1;
        }
        self.token_size = end - self.idx;
        if end == buffer.len() {
            ScanEnd::More
        } else {
            ScanEnd::Delimiter
        }
    }

    /// Matches a literal byte by byte, resuming at the already matched
    /// length.
    fn match_bytes(&mut self, buffer: &[u8], expected: &[u8]) -> Step {
        while self.token_size < expected.len() {
            let at = self.idx + self.token_size;
            if at >= buffer.len() {
                return Step::Stall;
            }
            if buffer[at] != expected[self.token_size] {
                return Step::Mismatch;
            }
            self.token_size += 1;
        }
        Step::Done
    }

    fn emit(&mut self, code: Code, next: State) {
        self.code = code;
        self.state = next;
    }

    fn stall(&mut self) {
        self.code = Code::InsufficientData;
    }

    fn fail(&mut self, code: Code) {
        self.state = State::Errored;
        self.code = code;
        self.token_size = 0;
    }

    /// Framing inspection performed when a header name completes.
    /// Returns false if the reader errored. Trailer names are never
    /// inspected; a trailing `Content-Length` or `Transfer-Encoding`
    /// must not influence framing.
    fn inspect_field_name(&mut self, buffer: &[u8]) -> bool {
        let name = self.window(buffer);
        if name.eq_ignore_ascii_case(b"host") {
            if self.version == VersionState::Http11HostNotSeen {
                self.version = VersionState::Http11HostSeen;
            }
        } else if name.eq_ignore_ascii_case(b"transfer-encoding") {
            match self.body {
                BodyFraming::ChunkedFinal => {
                    self.fail(Code::InvalidTransferEncoding);
                    return false;
                }
                // a Transfer-Encoding overrides an earlier
                // Content-Length (RFC 7230 section 3.3.3 rule 3); the
                // final decision is made when the value completes
                _ => self.body = BodyFraming::ReadingTransferEncoding,
            }
        } else if name.eq_ignore_ascii_case(b"content-length") {
            match self.body {
                BodyFraming::None => self.body = BodyFraming::ReadingContentLength,
                BodyFraming::ContentLengthKnown => {
                    self.fail(Code::InvalidContentLength);
                    return false;
                }
                // Transfer-Encoding dominates; a Content-Length next
                // to it is ignored rather than rejected
                BodyFraming::ChunkedFinal | BodyFraming::NonChunkedEncoding => {}
                BodyFraming::ReadingContentLength | BodyFraming::ReadingTransferEncoding => {}
            }
        }
        true
    }

    /// Framing resolution performed when a header value completes.
    /// Returns false if the reader errored.
    fn finish_field_value(&mut self, buffer: &[u8]) -> bool {
        match self.body {
            BodyFraming::ReadingContentLength => match decode_decimal(self.window(buffer)) {
                Decoded::Ok(size) => {
                    self.body_size = size;
                    self.body = BodyFraming::ContentLengthKnown;
                }
                Decoded::Invalid => {
                    self.fail(Code::InvalidContentLength);
                    return false;
                }
                Decoded::Overflow => {
                    self.fail(Code::ContentLengthOverflow);
                    return false;
                }
            },
            BodyFraming::ReadingTransferEncoding => {
                let value = transfer_encoding::trim_ows(self.window(buffer));
                match transfer_encoding::analyze(value) {
                    TransferEncoding::NotFound => self.body = BodyFraming::NonChunkedEncoding,
                    TransferEncoding::ChunkedFinal => self.body = BodyFraming::ChunkedFinal,
                    TransferEncoding::Invalid => {
                        self.fail(Code::InvalidTransferEncoding);
                        return false;
                    }
                }
            }
            _ => {}
        }
        true
    }
}

impl Default for RequestReader {
    fn default() -> RequestReader {
        RequestReader::new()
    }
}
