
use std::fmt;
use std::io;

use crate::reader::Code;

/// Errors raised by the buffered head parser.
///
/// The tokenizer itself reports failure through its token codes; this
/// enum is for callers that want a `Result`, and adds the conditions
/// only a buffered reader can hit (I/O failures, truncated streams,
/// oversized heads).
#[derive(Debug)]
pub enum Error {
    IO(io::Error),
    /// The stream ended before the head was complete.
    UnexpectedEof,
    /// The head grew past `Config::max_head_length`.
    HeadTooLong,
    TooManyHeaders,
    /// The request target does not parse as a URI.
    InvalidRequestTarget,
    InvalidData,
    NoHost,
    InvalidContentLength,
    ContentLengthOverflow,
    InvalidTransferEncoding,
    ChunkSizeOverflow,
}

impl Error {
    pub fn from_io(io_error: io::Error) -> Error {
        if io_error.kind() == io::ErrorKind::UnexpectedEof {
            Error::UnexpectedEof
        } else {
            Error::IO(io_error)
        }
    }

    pub(crate) fn from_code(code: Code) -> Error {
        match code {
            Code::NoHost => Error::NoHost,
            Code::InvalidContentLength => Error::InvalidContentLength,
            Code::ContentLengthOverflow => Error::ContentLengthOverflow,
            Code::InvalidTransferEncoding => Error::InvalidTransferEncoding,
            Code::ChunkSizeOverflow => Error::ChunkSizeOverflow,
            _ => Error::InvalidData,
        }
    }
}

impl PartialEq<Error> for Error {
    fn eq(&self, other: &Error) -> bool {
        macro_rules! d {
            ($n:ident) => {
                (Error::$n, Error::$n)
            };
        }

        match (self, other) {
            (Error::IO(io_e0), Error::IO(io_e1)) => io_e0.kind() == io_e1.kind(),

            d!(UnexpectedEof) => true,
            d!(HeadTooLong) => true,
            d!(TooManyHeaders) => true,
            d!(InvalidRequestTarget) => true,
            d!(InvalidData) => true,
            d!(NoHost) => true,
            d!(InvalidContentLength) => true,
            d!(ContentLengthOverflow) => true,
            d!(InvalidTransferEncoding) => true,
            d!(ChunkSizeOverflow) => true,

            (_, _) => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IO(e) => write!(f, "i/o error: {}", e),
            Error::UnexpectedEof => write!(f, "stream ended inside the request head"),
            Error::HeadTooLong => write!(f, "request head too long"),
            Error::TooManyHeaders => write!(f, "too many headers"),
            Error::InvalidRequestTarget => write!(f, "invalid request target"),
            Error::InvalidData => write!(f, "malformed request"),
            Error::NoHost => write!(f, "missing Host header"),
            Error::InvalidContentLength => write!(f, "invalid Content-Length"),
            Error::ContentLengthOverflow => write!(f, "Content-Length overflow"),
            Error::InvalidTransferEncoding => write!(f, "invalid Transfer-Encoding"),
            Error::ChunkSizeOverflow => write!(f, "chunk size overflow"),
        }
    }
}

impl std::error::Error for Error {}
