use strum_macros::Display;

use crate::binary::riff::RIFF_MAGIC;

/// Anything shorter cannot hold a text palette header
pub const MIN_PALETTE_LEN: usize = 50;
pub const RAW_TRIPLET_COUNT: usize = 256;
pub const RAW_TRIPLET_LEN: usize = RAW_TRIPLET_COUNT * 3;
pub const DEFAULT_FILE_EXTENSION: &str = ".gpl";

pub const TEXT_PALETTE_MAGIC: &[u8] = b"GIMP Palette";
/// Body of a RIFF PAL file without the outer RIFF header
pub const PAL_DATA_MAGIC: &[u8] = b"PAL data";

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteFormat {
    /// `GIMP Palette` text
    TextPalette,
    /// Microsoft RIFF PAL
    RiffPalette,
    /// 256 headerless RGB triplets
    RawTriplet,
    Unrecognized,
}

/// Sniff the palette format from the content alone.
///
/// Text signatures win over the raw table, so a 768 byte file that starts
/// with a known signature is never read as raw triplets.
pub fn detect(data: &[u8]) -> PaletteFormat {
    if data.len() < MIN_PALETTE_LEN {
        return PaletteFormat::Unrecognized;
    }
    // All signatures are ASCII, comparing bytes is the same as comparing
    // the decoded text and does not care about invalid UTF-8 further in.
    if data.starts_with(RIFF_MAGIC) || data.starts_with(PAL_DATA_MAGIC) {
        PaletteFormat::RiffPalette
    } else if data.starts_with(TEXT_PALETTE_MAGIC) {
        PaletteFormat::TextPalette
    } else if data.len() == RAW_TRIPLET_LEN {
        PaletteFormat::RawTriplet
    } else {
        PaletteFormat::Unrecognized
    }
}
