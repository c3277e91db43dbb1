use nom::{combinator::all_consuming, multi::count};

use crate::format::{RAW_TRIPLET_COUNT, RAW_TRIPLET_LEN};

use super::{
    errors::{ParseError, ParseResult},
    scalars::{rgb, Byte},
};

/// Headerless 256 color table, three bytes per color.
/// This is what Photoshop writes as `.act` without the trailing color count.
pub fn parse_raw_triplets(input: &[u8]) -> ParseResult<'_, Vec<[Byte; 3]>> {
    if input.len() != RAW_TRIPLET_LEN {
        return Err(nom::Err::Failure(ParseError::InvalidRawLength {
            expected: RAW_TRIPLET_LEN,
            actual: input.len(),
        }));
    }
    all_consuming(count(rgb, RAW_TRIPLET_COUNT))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_triplets_in_order() {
        let data: Vec<u8> = (0..RAW_TRIPLET_LEN).map(|i| (i % 256) as u8).collect();
        let (rest, colors) = parse_raw_triplets(&data).unwrap();
        assert!(rest.is_empty());
        assert_eq!(colors.len(), 256);
        assert_eq!(colors[0], [0, 1, 2]);
        assert_eq!(colors[1], [3, 4, 5]);
        assert_eq!(colors[255], [253, 254, 255]);
    }

    #[test]
    fn test_raw_triplets_wrong_length() {
        let data = vec![0u8; RAW_TRIPLET_LEN + 2];
        let err = parse_raw_triplets(&data).unwrap_err();
        assert!(matches!(
            err,
            nom::Err::Failure(ParseError::InvalidRawLength { actual: 770, .. })
        ));
    }
}
