use nom::{error::ErrorKind, IResult};
use thiserror::Error;

use super::scalars::{Dword, Word};

pub type ParseResult<'a, O> = IResult<&'a [u8], O, ParseError<'a>>;

#[derive(Error, Debug)]
pub enum ParseError<'a> {
    #[error("raw palette must be exactly {expected} bytes, got {actual}")]
    InvalidRawLength { expected: usize, actual: usize },
    #[error("unsupported RIFF form type {0:?}")]
    UnsupportedFormType(&'a [u8]),
    #[error("unsupported PAL version {0:#06x}")]
    UnsupportedVersion(Word),
    #[error("chunk {id:?} declares {size} bytes but only {available} remain")]
    ChunkTooLarge {
        id: &'a [u8],
        size: Dword,
        available: usize,
    },
    #[error("PAL data chunk declares {count} entries but holds {size} bytes")]
    EntryTableTooShort { count: Word, size: usize },
    #[error("missing PAL data chunk")]
    MissingDataChunk,
    #[error("parser error {1:?} at {} remaining bytes", .0.len())]
    Nom(&'a [u8], ErrorKind),
}

impl ParseError<'_> {
    /// Errors that mean the file is a palette we recognize but cannot decode,
    /// as opposed to a damaged one.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            ParseError::UnsupportedFormType(_) | ParseError::UnsupportedVersion(_)
        )
    }
}

impl<'a> nom::error::ParseError<&'a [u8]> for ParseError<'a> {
    fn from_error_kind(input: &'a [u8], kind: ErrorKind) -> Self {
        ParseError::Nom(input, kind)
    }

    fn append(_input: &'a [u8], _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

/// Flatten a nom error into the inner parse error.
pub fn into_parse_error(err: nom::Err<ParseError<'_>>) -> ParseError<'_> {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => e,
        nom::Err::Incomplete(_) => ParseError::Nom(&[], ErrorKind::Eof),
    }
}
