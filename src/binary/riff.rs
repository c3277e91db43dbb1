use bitflags::bitflags;
use nom::{
    bytes::complete::{tag, take},
    multi::count,
};

use super::{
    errors::{ParseError, ParseResult},
    scalars::{byte, dword, fourcc, rgb, word, Byte, Word},
};

pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";
pub const PAL_FORM_TYPE: &[u8; 4] = b"PAL ";
pub const DATA_CHUNK_ID: &[u8; 4] = b"data";
pub const PAL_VERSION: Word = 0x0300;

const CHUNK_HEADER_LEN: usize = 8;
const ENTRY_LEN: usize = 4;

/// Decoded `data` chunk of a RIFF PAL file
#[derive(Debug, Clone)]
pub struct RiffPalette {
    pub version: Word,
    pub entries: Vec<RiffPaletteEntry>,
}

/// A `PALETTEENTRY` record: red, green, blue, flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiffPaletteEntry {
    pub color: [Byte; 3],
    pub flags: PaletteEntryFlags,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PaletteEntryFlags: Byte {
        /// PC_RESERVED - entry is used for palette animation
        const RESERVED = 0x1;
        /// PC_EXPLICIT - low word of the entry is a hardware palette index
        const EXPLICIT = 0x2;
        /// PC_NOCOLLAPSE - never map onto an existing system color
        const NOCOLLAPSE = 0x4;
    }
}

/// Parse either a full `RIFF` file or a bare body starting at the
/// `PAL ` form type (files beginning with `PAL data`).
pub fn parse_riff_palette(input: &[u8]) -> ParseResult<'_, RiffPalette> {
    if !input.starts_with(RIFF_MAGIC) {
        return parse_pal_form(input);
    }
    let (input, _) = tag(RIFF_MAGIC.as_slice())(input)?;
    let (input, size) = dword(input)?;
    // Writers are sloppy with the outer size, trust the buffer instead
    let size = (size as usize).min(input.len());
    let (rest, body) = take(size)(input)?;
    let (_, palette) = parse_pal_form(body)?;
    Ok((rest, palette))
}

fn parse_pal_form(input: &[u8]) -> ParseResult<'_, RiffPalette> {
    let (mut input, form_type) = fourcc(input)?;
    if form_type != PAL_FORM_TYPE {
        return Err(nom::Err::Failure(ParseError::UnsupportedFormType(form_type)));
    }
    while input.len() >= CHUNK_HEADER_LEN {
        let (rest, (id, body)) = parse_chunk(input)?;
        if id == DATA_CHUNK_ID {
            let (_, palette) = parse_data_chunk(body)?;
            return Ok((rest, palette));
        }
        input = rest;
    }
    Err(nom::Err::Failure(ParseError::MissingDataChunk))
}

/// Returns the chunk id and its payload, skipping the pad byte of odd sized chunks.
pub fn parse_chunk(input: &[u8]) -> ParseResult<'_, (&[u8], &[u8])> {
    let (input, id) = fourcc(input)?;
    let (input, size) = dword(input)?;
    if size as usize > input.len() {
        return Err(nom::Err::Failure(ParseError::ChunkTooLarge {
            id,
            size,
            available: input.len(),
        }));
    }
    let (mut input, body) = take(size)(input)?;
    if size % 2 == 1 && !input.is_empty() {
        input = &input[1..];
    }
    Ok((input, (id, body)))
}

pub fn parse_data_chunk(input: &[u8]) -> ParseResult<'_, RiffPalette> {
    let (input, version) = word(input)?;
    if version != PAL_VERSION {
        return Err(nom::Err::Failure(ParseError::UnsupportedVersion(version)));
    }
    let (input, number_of_entries) = word(input)?;
    if usize::from(number_of_entries) * ENTRY_LEN > input.len() {
        return Err(nom::Err::Failure(ParseError::EntryTableTooShort {
            count: number_of_entries,
            size: input.len(),
        }));
    }
    let (input, entries) = count(parse_palette_entry, number_of_entries.into())(input)?;
    Ok((input, RiffPalette { version, entries }))
}

pub fn parse_palette_entry(input: &[u8]) -> ParseResult<'_, RiffPaletteEntry> {
    let (input, color) = rgb(input)?;
    let (input, flags) = byte(input)?;
    let flags = PaletteEntryFlags::from_bits_truncate(flags);
    Ok((input, RiffPaletteEntry { color, flags }))
}
