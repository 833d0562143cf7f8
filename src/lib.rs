#![forbid(unsafe_code)]

//! A strict, zero-copy, incremental HTTP/1.x request tokenizer
//!
//! See [RFC 7230](https://tools.ietf.org/html/rfc7230).
//!
//! The core of the crate is [`RequestReader`], a pull-style state
//! machine that turns the bytes of a request message into a stream of
//! tokens (method, request target, version, field names and values,
//! body chunks, end markers). The reader never allocates and never
//! copies message bytes: every token is a window into the buffer the
//! driver passes in, and the driver may feed the message in as many
//! pieces as it likes.
//!
//! # Tokenizer example
//!
//! ```
//! use pullhttp::{Code, RequestReader};
//!
//! let buffer = b"GET / HTTP/1.1\r\nHost: x\r\n\r\n";
//! let mut reader = RequestReader::new();
//!
//! reader.advance(buffer);
//! assert_eq!(reader.code(), Code::Method);
//! assert_eq!(reader.method(buffer), b"GET");
//!
//! reader.advance(buffer); // the SP between method and target
//! assert_eq!(reader.code(), Code::Skip);
//!
//! reader.advance(buffer);
//! assert_eq!(reader.code(), Code::RequestTarget);
//! assert_eq!(reader.request_target(buffer), b"/");
//! ```
//!
//! # Buffered example
//!
//! For callers that just want a request head out of a blocking stream,
//! [`parse_request_head`] drives the tokenizer over an internal buffer:
//!
//! ```
//! use std::io;
//!
//! let source = io::Cursor::new(
//!     b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n".to_vec()
//! );
//! let config = &pullhttp::Config::DEFAULT;
//! let request = pullhttp::parse_request_head(source, config).unwrap();
//!
//! assert_eq!(request.method(), http::Method::GET);
//! assert_eq!(request.uri(), "/index.html");
//! assert_eq!(request.headers().get("host").unwrap(), "example.com");
//! ```

use std::io;
use std::str;

use http::header::{HeaderName, HeaderValue};
use http::{Method, Version};

mod character_types;

mod error;
pub use error::Error;

pub mod numbers;

pub mod transfer_encoding;

mod reader;
pub use reader::{Code, RequestReader};

/// Configuration for the buffered head parser.
///
/// Mostly used for limiting lengths (and prevents DoS attacks). You
/// should always use `DEFAULT` unless you really know what you are
/// doing. The tokenizer itself takes no configuration; limits are a
/// driver concern.
#[derive(Copy, Clone)]
pub struct Config {
    /// Stop buffering (and fail) once an incomplete head has grown
    /// past this many bytes
    pub max_head_length: usize,

    /// How many headers are allowed
    pub max_header_count: usize,

    /// Read granularity for the internal buffer
    pub read_length: usize,
}

impl Config {
    /// Should be sane defaults, suitable for most users.
    pub const DEFAULT: Config = Config {
        max_head_length: 16 * 1024,
        max_header_count: 32,
        read_length: 4 * 1024,
    };
}

/// The transport stream together with any bytes that were buffered
/// past the end of the head.
///
/// For a message with a body the buffered bytes are the first body
/// bytes; on a pipelined connection they may already belong to the
/// next request. Reading drains the buffered bytes first, then the
/// stream.
#[derive(Debug)]
pub struct Remainder<S> {
    buffered: Vec<u8>,
    stream: S,
}

impl<S> Remainder<S> {
    pub fn buffered(&self) -> &[u8] {
        &self.buffered
    }

    pub fn into_parts(self) -> (Vec<u8>, S) {
        (self.buffered, self.stream)
    }
}

impl<S: io::Read> io::Read for Remainder<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.buffered.is_empty() {
            let take = buf.len().min(self.buffered.len());
            buf[..take].copy_from_slice(&self.buffered[..take]);
            self.buffered.drain(..take);
            return Ok(take);
        }
        self.stream.read(buf)
    }
}

/// Appends up to `read_length` bytes from the stream to the buffer.
///
/// Retries on `Interrupted`; end of stream is an error here because
/// the head is not complete yet.
fn fill<S: io::Read>(
    stream: &mut S,
    buffer: &mut Vec<u8>,
    read_length: usize,
) -> Result<(), Error> {
    let old_len = buffer.len();
    buffer.resize(old_len + read_length, 0);
    loop {
        match stream.read(&mut buffer[old_len..]) {
            Ok(0) => {
                buffer.truncate(old_len);
                return Err(Error::UnexpectedEof);
            }
            Ok(size) => {
                buffer.truncate(old_len + size);
                return Ok(());
            }
            Err(err) => {
                if err.kind() != io::ErrorKind::Interrupted {
                    buffer.truncate(old_len);
                    return Err(Error::from_io(err));
                }
            }
        }
    }
}

/// Parses the request line and the headers of an HTTP request.
///
/// Drives a [`RequestReader`] over an internal buffer fed from the
/// stream, stopping after the end of the header block. The returned
/// request's body is the [`Remainder`]: the stream plus whatever was
/// buffered past the head, so the caller can go on to read the message
/// body (or the next pipelined request).
pub fn parse_request_head<S: io::Read>(
    mut stream: S,
    config: &Config,
) -> Result<http::Request<Remainder<S>>, Error> {
    let mut reader = RequestReader::new();
    let mut buffer: Vec<u8> = Vec::new();
    let mut request = http::Request::new(());
    let mut pending_name: Option<HeaderName> = None;
    let mut header_count: usize = 0;

    loop {
        reader.advance(&buffer);
        let code = reader.code();
        match code {
            Code::InsufficientData => {
                if buffer.len() >= config.max_head_length {
                    return Err(Error::HeadTooLong);
                }
                fill(&mut stream, &mut buffer, config.read_length)?;
            }
            Code::Method => {
                *request.method_mut() =
                    Method::from_bytes(reader.method(&buffer)).map_err(|_| Error::InvalidData)?;
            }
            Code::RequestTarget => {
                let target = str::from_utf8(reader.request_target(&buffer))
                    .map_err(|_| Error::InvalidRequestTarget)?;
                *request.uri_mut() =
                    target.parse().map_err(|_| Error::InvalidRequestTarget)?;
            }
            Code::Version => {
                *request.version_mut() = if reader.version(&buffer) == 0 {
                    Version::HTTP_10
                } else {
                    Version::HTTP_11
                };
            }
            Code::FieldName => {
                header_count += 1;
                if header_count > config.max_header_count {
                    return Err(Error::TooManyHeaders);
                }
                let name = HeaderName::from_bytes(reader.field_name(&buffer))
                    .map_err(|_| Error::InvalidData)?;
                pending_name = Some(name);
            }
            Code::FieldValue => {
                let value = HeaderValue::from_bytes(reader.field_value(&buffer))
                    .map_err(|_| Error::InvalidData)?;
                if let Some(name) = pending_name.take() {
                    request.headers_mut().append(name, value);
                }
            }
            Code::EndOfHeaders => break,
            _ if code.is_error() => return Err(Error::from_code(code)),
            _ => {} // structural skips
        }
    }

    let consumed = reader.token_start() + reader.token_size();
    let buffered = buffer.split_off(consumed);
    Ok(request.map(|_| Remainder { buffered, stream }))
}
