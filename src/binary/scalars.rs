use nom::{
    bytes::complete::take,
    number::complete::{le_u16, le_u32, u8},
};

use super::errors::ParseResult;

pub type Byte = u8;
pub type Word = u16;
pub type Dword = u32;

pub fn byte(input: &[u8]) -> ParseResult<'_, Byte> {
    u8(input)
}

pub fn word(input: &[u8]) -> ParseResult<'_, Word> {
    le_u16(input)
}

pub fn dword(input: &[u8]) -> ParseResult<'_, Dword> {
    le_u32(input)
}

/// Four character code used as RIFF chunk identifier
pub fn fourcc(input: &[u8]) -> ParseResult<'_, &[u8]> {
    take(4usize)(input)
}

/// One 8-bit RGB triplet
pub fn rgb(input: &[u8]) -> ParseResult<'_, [Byte; 3]> {
    let (input, r) = byte(input)?;
    let (input, g) = byte(input)?;
    let (input, b) = byte(input)?;
    Ok((input, [r, g, b]))
}
