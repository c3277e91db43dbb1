use std::fmt;

use itertools::Itertools;
use thiserror::Error;

use crate::{
    color::ColorValue,
    palette::{Palette, PaletteEntry, UNTITLED},
};

const MAGIC_PREFIX: &str = "GIMP";
const HEADER: &str = "GIMP Palette";
const NAME_PREFIX: &str = "Name: ";
const COLUMNS_PREFIX: &str = "Columns: ";
const COMMENT_PREFIX: char = '#';
const MIN_LINES: usize = 3;

#[derive(Debug, Copy, Clone, Error, PartialEq, Eq)]
pub enum TextPaletteError {
    #[error("expected at least 3 lines, found {0}")]
    TooFewLines(usize),
    #[error("first line does not start with \"GIMP\"")]
    MissingMagic,
    #[error("second line is not a \"Name: \" line")]
    MissingName,
}

/// Read a `GIMP Palette` text into `palette`.
///
/// Once the header checks out this cannot fail: the body stops at the first
/// line with fewer than three components and the palette keeps what came
/// before it, flagged as truncated.
pub fn parse_text_palette<C: ColorValue>(
    text: &str,
    palette: &mut Palette<C>,
) -> Result<(), TextPaletteError> {
    let lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .collect_vec();

    if lines.len() < MIN_LINES {
        return Err(TextPaletteError::TooFewLines(lines.len()));
    }
    if !lines[0].starts_with(MAGIC_PREFIX) {
        return Err(TextPaletteError::MissingMagic);
    }
    let name = lines[1]
        .strip_prefix(NAME_PREFIX)
        .ok_or(TextPaletteError::MissingName)?;
    palette.name = name.trim().to_string();

    let mut body = &lines[2..];
    if let Some(columns) = body[0].strip_prefix(COLUMNS_PREFIX) {
        palette.column_hint = columns.trim().parse().unwrap_or(0);
        body = &body[1..];
    }

    for line in body {
        if let Some(comment) = line.strip_prefix(COMMENT_PREFIX) {
            palette.comment.push_str(comment.trim());
            palette.comment.push(' ');
            continue;
        }
        let line = line.replace('\t', " ");
        let tokens = line.split(' ').filter(|t| !t.is_empty()).collect_vec();
        if tokens.len() < 3 {
            log::debug!(
                "palette {:?} stops at short color line {line:?}, {} entries kept",
                palette.name,
                palette.len()
            );
            palette.truncated = true;
            break;
        }
        let r = parse_component(tokens[0]);
        let g = parse_component(tokens[1]);
        let b = parse_component(tokens[2]);
        let name = tokens[3..].iter().join(" ");
        let name = if name.is_empty() {
            UNTITLED.to_string()
        } else {
            name
        };
        palette.add(PaletteEntry::new(C::from_rgb8(r, g, b), name));
    }

    palette.valid = true;
    Ok(())
}

/// Anything that is not an integer reads as 0, the rest is clamped.
fn parse_component(token: &str) -> u8 {
    token.parse::<i32>().unwrap_or(0).clamp(0, u8::MAX.into()) as u8
}

/// Text form of a palette, as written by `save`.
///
/// The comment is not written back.
pub struct TextPalette<'a, C>(pub &'a Palette<C>);

impl<C: ColorValue> fmt::Display for TextPalette<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let palette = self.0;
        writeln!(f, "{HEADER}")?;
        writeln!(f, "{NAME_PREFIX}{}", palette.name)?;
        writeln!(f, "{COLUMNS_PREFIX}{}", palette.column_hint)?;
        writeln!(f, "{COMMENT_PREFIX}")?;
        for entry in palette.iter() {
            let [r, g, b] = entry.color.to_rgb8();
            writeln!(f, "{r} {g} {b}\t{}", entry.display_name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Palette, TextPaletteError> {
        let mut palette = Palette::new();
        parse_text_palette(text, &mut palette).map(|_| palette)
    }

    fn rgb(entry: &PaletteEntry) -> [u8; 3] {
        entry.color.to_rgb8()
    }

    #[test]
    fn test_basic_palette() {
        let palette =
            parse("GIMP Palette\nName: Test\nColumns: 4\n#\n255 0 0\tRed\n0 255 0\n").unwrap();
        assert!(palette.is_valid());
        assert!(!palette.is_truncated());
        assert_eq!(palette.name, "Test");
        assert_eq!(palette.column_count(), 4);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get(0).unwrap(), &PaletteEntry::from_rgb8([255, 0, 0], "Red"));
        assert_eq!(
            palette.get(1).unwrap(),
            &PaletteEntry::from_rgb8([0, 255, 0], "Untitled")
        );
    }

    #[test]
    fn test_no_columns_line() {
        let palette = parse("GIMP Palette\nName:   Spaced  \n1 2 3 a\n").unwrap();
        assert_eq!(palette.name, "Spaced");
        assert_eq!(palette.column_count(), 0);
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_bad_columns_value() {
        let palette = parse("GIMP Palette\nName: x\nColumns: many\n1 2 3\n").unwrap();
        assert_eq!(palette.column_count(), 0);
        let palette = parse("GIMP Palette\nName: x\nColumns: 99999999999\n1 2 3\n").unwrap();
        assert_eq!(palette.column_count(), 0);
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_clamps_components() {
        let palette = parse("GIMP Palette\nName: x\n300 -10 abc\tOdd\n").unwrap();
        assert_eq!(rgb(palette.get(0).unwrap()), [255, 0, 0]);
    }

    #[test]
    fn test_name_tokens_are_joined() {
        let palette = parse("GIMP Palette\nName: x\n1\t2  3   Dark \t Sea   Green\n").unwrap();
        assert_eq!(palette.get(0).unwrap().name, "Dark Sea Green");
    }

    #[test]
    fn test_short_line_stops_body() {
        let palette =
            parse("GIMP Palette\nName: x\n1 2 3 one\n10 20\n4 5 6 dropped\n").unwrap();
        assert!(palette.is_valid());
        assert!(palette.is_truncated());
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.get(0).unwrap().name, "one");
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let palette =
            parse("GIMP Palette\nName: x\n#  first \n\n1 2 3\n\n#second\n4 5 6\n").unwrap();
        assert_eq!(palette.comment, "first second ");
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_crlf_lines() {
        let palette = parse("GIMP Palette\r\nName: Win\r\nColumns: 2\r\n10 20 30 Blue\r\n").unwrap();
        assert_eq!(palette.name, "Win");
        assert_eq!(palette.column_count(), 2);
        assert_eq!(palette.get(0).unwrap(), &PaletteEntry::from_rgb8([10, 20, 30], "Blue"));
    }

    #[test]
    fn test_header_errors() {
        assert_eq!(
            parse("GIMP Palette\n\nName: x\n").unwrap_err(),
            TextPaletteError::TooFewLines(2)
        );
        assert_eq!(
            parse("GIMP Palette\nTitle: x\n1 2 3\n").unwrap_err(),
            TextPaletteError::MissingName
        );
        assert_eq!(
            parse("Palette\nName: x\n1 2 3\n").unwrap_err(),
            TextPaletteError::MissingMagic
        );
    }

    #[test]
    fn test_write_format() {
        let mut palette = Palette::<image::Rgb<u8>>::with_entries(
            "Out",
            vec![
                PaletteEntry::from_rgb8([1, 2, 3], "One"),
                PaletteEntry::from_rgb8([4, 5, 6], ""),
            ],
        );
        palette.column_hint = 3;
        palette.comment = "not written ".to_string();
        assert_eq!(
            TextPalette(&palette).to_string(),
            "GIMP Palette\nName: Out\nColumns: 3\n#\n1 2 3\tOne\n4 5 6\tUntitled\n"
        );
    }

    #[test]
    fn test_generic_color_type() {
        let mut palette = Palette::<image::Rgba<u8>>::new();
        parse_text_palette("GIMP Palette\nName: a\n1 2 3\n", &mut palette).unwrap();
        assert_eq!(palette.get(0).unwrap().color, image::Rgba([1, 2, 3, 255]));
    }
}
