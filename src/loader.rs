use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{
    binary::{
        errors::{into_parse_error, ParseError},
        raw_triplet::parse_raw_triplets,
        riff::parse_riff_palette,
    },
    color::ColorValue,
    digest::{ContentHasher, Md5Hasher},
    format::{detect, PaletteFormat, DEFAULT_FILE_EXTENSION},
    palette::{Palette, PaletteEntry},
    text::{parse_text_palette, TextPalette},
};

#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("palette source is empty")]
    EmptySource,
    #[error("malformed palette: {message}")]
    MalformedPalette { message: String },
    #[error("cannot decode {format} palette: {message}")]
    UnsupportedFormat {
        format: PaletteFormat,
        message: String,
    },
    #[error("unrecognized palette format")]
    UnrecognizedFormat,
    #[error("palette i/o failed: {0}")]
    IoFailure(#[from] io::Error),
}

impl PaletteError {
    fn from_parse(format: PaletteFormat, err: nom::Err<ParseError<'_>>) -> Self {
        let err = into_parse_error(err);
        if err.is_unsupported() {
            PaletteError::UnsupportedFormat {
                format,
                message: err.to_string(),
            }
        } else {
            PaletteError::MalformedPalette {
                message: err.to_string(),
            }
        }
    }
}

impl<C: ColorValue> Palette<C> {
    /// Load a palette from a byte slice.
    /// `filename_hint` only names palettes whose format has no name of its own.
    pub fn from_bytes(data: &[u8], filename_hint: Option<&Path>) -> Result<Self, PaletteError> {
        let mut palette = Self::new();
        palette.load(data, filename_hint)?;
        Ok(palette)
    }

    /// Read and load a palette file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PaletteError> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        Self::from_bytes(&data, Some(path))
    }

    /// Replace the content of this palette with the one decoded from `data`,
    /// tagged with its MD5.
    pub fn load(&mut self, data: &[u8], filename_hint: Option<&Path>) -> Result<(), PaletteError> {
        self.load_with_hasher(data, filename_hint, &Md5Hasher)
    }

    /// On failure the palette is left empty and invalid.
    pub fn load_with_hasher(
        &mut self,
        data: &[u8],
        filename_hint: Option<&Path>,
        hasher: &impl ContentHasher,
    ) -> Result<(), PaletteError> {
        self.reset();
        match self.decode(data, filename_hint) {
            Ok(()) => {
                self.source_digest = hasher.digest(data);
                self.valid = true;
                Ok(())
            }
            Err(err) => {
                log::warn!(
                    "illegal palette file {}: {err}",
                    filename_hint.map_or("<memory>".into(), Path::to_string_lossy)
                );
                self.reset();
                Err(err)
            }
        }
    }

    fn decode(&mut self, data: &[u8], filename_hint: Option<&Path>) -> Result<(), PaletteError> {
        if data.is_empty() {
            return Err(PaletteError::EmptySource);
        }
        let format = detect(data);
        log::debug!("detected {format} palette, {} bytes", data.len());
        match format {
            PaletteFormat::TextPalette => {
                let text = String::from_utf8_lossy(data);
                parse_text_palette(&text, self).map_err(|e| PaletteError::MalformedPalette {
                    message: e.to_string(),
                })
            }
            PaletteFormat::RiffPalette => {
                let (_, riff) =
                    parse_riff_palette(data).map_err(|e| PaletteError::from_parse(format, e))?;
                self.name = base_name(filename_hint);
                self.entries.extend(
                    riff.entries
                        .iter()
                        .map(|e| PaletteEntry::from_rgb8(e.color, String::new())),
                );
                Ok(())
            }
            PaletteFormat::RawTriplet => {
                let (_, colors) =
                    parse_raw_triplets(data).map_err(|e| PaletteError::from_parse(format, e))?;
                self.name = base_name(filename_hint);
                self.entries.extend(
                    colors
                        .into_iter()
                        .map(|rgb| PaletteEntry::from_rgb8(rgb, String::new())),
                );
                Ok(())
            }
            PaletteFormat::Unrecognized => Err(PaletteError::UnrecognizedFormat),
        }
    }

    /// Write the palette as `GIMP Palette` text, whatever it was loaded from.
    /// A path without extension gets `.gpl`. Returns the path written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf, PaletteError> {
        let mut path = path.as_ref().to_path_buf();
        if path.extension().is_none() {
            path.set_extension(DEFAULT_FILE_EXTENSION.trim_start_matches('.'));
        }
        let mut writer = BufWriter::new(File::create(&path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(path)
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", TextPalette(self))
    }

    pub fn to_text(&self) -> String {
        TextPalette(self).to_string()
    }

    pub fn default_file_extension() -> &'static str {
        DEFAULT_FILE_EXTENSION
    }
}

/// File name up to the first dot
fn base_name(path: Option<&Path>) -> String {
    path.and_then(Path::file_name)
        .map(|name| {
            let name = name.to_string_lossy();
            name.split('.').next().unwrap_or_default().to_string()
        })
        .unwrap_or_default()
}
