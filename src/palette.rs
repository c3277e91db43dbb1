use image::Rgb;

use crate::{color::ColorValue, digest::ContentDigest};

/// Label shown for swatches without a name
pub const UNTITLED: &str = "Untitled";

/// One named color of a palette
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry<C = Rgb<u8>> {
    pub color: C,
    pub name: String,
}

impl<C: ColorValue> PaletteEntry<C> {
    pub fn new(color: C, name: impl Into<String>) -> Self {
        Self {
            color,
            name: name.into(),
        }
    }

    pub fn from_rgb8([r, g, b]: [u8; 3], name: impl Into<String>) -> Self {
        Self::new(C::from_rgb8(r, g, b), name)
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            UNTITLED
        } else {
            &self.name
        }
    }
}

/// An ordered collection of named colors plus display metadata.
///
/// Entries are kept in display order and may contain duplicates.
#[derive(Debug)]
pub struct Palette<C = Rgb<u8>> {
    pub name: String,
    /// `#` lines of a text palette, joined by spaces. Not written back on save.
    pub comment: String,
    /// Suggested grid width, 0 if unspecified
    pub column_hint: u32,
    pub(crate) entries: Vec<PaletteEntry<C>>,
    pub(crate) source_digest: ContentDigest,
    pub(crate) valid: bool,
    pub(crate) truncated: bool,
}

impl<C> Default for Palette<C> {
    fn default() -> Self {
        Self {
            name: String::new(),
            comment: String::new(),
            column_hint: 0,
            entries: Vec::new(),
            source_digest: ContentDigest::default(),
            valid: false,
            truncated: false,
        }
    }
}

/// A copy is new data with no tie to the bytes the original came from:
/// the digest is left empty and the copy counts as valid on its own.
impl<C: Clone> Clone for Palette<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            comment: self.comment.clone(),
            column_hint: self.column_hint,
            entries: self.entries.clone(),
            source_digest: ContentDigest::default(),
            valid: true,
            truncated: false,
        }
    }
}

impl<C: ColorValue> Palette<C> {
    /// Empty palette, not valid until something is loaded into it
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(name: impl Into<String>, entries: Vec<PaletteEntry<C>>) -> Self {
        Self {
            name: name.into(),
            entries,
            valid: true,
            ..Self::default()
        }
    }

    pub fn add(&mut self, entry: PaletteEntry<C>) {
        self.entries.push(entry);
    }

    /// Removes the first entry equal to `entry`, returns whether one was found.
    pub fn remove(&mut self, entry: &PaletteEntry<C>) -> bool {
        match self.entries.iter().position(|e| e == entry) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&PaletteEntry<C>> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[PaletteEntry<C>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry<C>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn column_count(&self) -> u32 {
        self.column_hint
    }

    pub fn source_digest(&self) -> &ContentDigest {
        &self.source_digest
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// True when a text palette body stopped at a line with fewer than three
    /// color components. Everything before that line was kept.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Back to the state of a fresh palette, before a (re)load
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
