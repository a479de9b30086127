//! The per-byte Caesar transform: three character bands, each shifted by the
//! key with wraparound at the band edges. Stateless, so a whole file is just
//! this applied byte by byte.

/// Transform direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}

/// A contiguous range of byte values shifted as one alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    pub lower: u8,
    pub upper: u8,
}

/// Digits and symbols, '!' through '@'.
pub const SYMBOLS: Band = Band { lower: 33, upper: 64 };
/// 'A' through 'Z'.
pub const UPPERCASE: Band = Band { lower: 65, upper: 90 };
/// 'a' through 'z'.
pub const LOWERCASE: Band = Band { lower: 97, upper: 122 };

/// Checked in this order: symbols/digits, then uppercase, then lowercase.
const BANDS: [Band; 3] = [SYMBOLS, UPPERCASE, LOWERCASE];

impl Band {
    pub fn contains(self, byte: u8) -> bool {
        self.lower <= byte && byte <= self.upper
    }
}

/// Pick the band a byte belongs to. Space and newline are never shifted, and
/// neither is anything outside the three bands (control bytes, the 91..=96
/// gap between the letter bands, 127..=255): all of those pass through
/// unchanged.
pub fn classify(byte: u8) -> Option<Band> {
    if byte == b' ' || byte == b'\n' {
        return None;
    }
    BANDS.iter().copied().find(|band| band.contains(byte))
}

/// Shift `byte` by `key` inside `band`, wrapping at the band edges. The
/// caller guarantees `byte` lies within `band`; `key` is normally 1..=26 but
/// a garbage key from a foreign `.cdc` header is accepted and produces
/// garbage output rather than a panic, which is why the math runs in `i32`.
pub fn shift(byte: u8, key: u8, band: Band, mode: Mode) -> u8 {
    let code = i32::from(byte);
    let key = i32::from(key);
    let lower = i32::from(band.lower);
    let upper = i32::from(band.upper);

    let shifted = match mode {
        Mode::Encode => {
            let code = code + key;
            if code > upper {
                // minus one: the lower limit itself is a usable character
                (code - upper) + lower - 1
            } else {
                code
            }
        }
        Mode::Decode => {
            if code - key < lower {
                upper + ((code - key) - lower) + 1
            } else {
                code - key
            }
        }
    };
    shifted as u8
}

/// Full per-byte transform: classify, then shift within the band, or pass
/// the byte through untouched.
pub fn transform(byte: u8, key: u8, mode: Mode) -> u8 {
    match classify(byte) {
        Some(band) => shift(byte, key, band, mode),
        None => byte,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band_bytes(band: Band) -> impl Iterator<Item = u8> {
        band.lower..=band.upper
    }

    #[test]
    fn classify_picks_the_right_band() {
        assert_eq!(classify(b'!'), Some(SYMBOLS));
        assert_eq!(classify(b'9'), Some(SYMBOLS));
        assert_eq!(classify(b'@'), Some(SYMBOLS));
        assert_eq!(classify(b'A'), Some(UPPERCASE));
        assert_eq!(classify(b'Z'), Some(UPPERCASE));
        assert_eq!(classify(b'a'), Some(LOWERCASE));
        assert_eq!(classify(b'z'), Some(LOWERCASE));
    }

    #[test]
    fn classify_passes_through_space_newline_and_out_of_band() {
        assert_eq!(classify(b' '), None);
        assert_eq!(classify(b'\n'), None);
        // control bytes, the gap between 'Z' and 'a', and high bytes
        for byte in (0..=31).chain(91..=96).chain(123..=255u16).map(|b| b as u8) {
            if byte == b'\n' {
                continue;
            }
            assert_eq!(classify(byte), None, "byte {byte} should not classify");
        }
    }

    #[test]
    fn encode_then_decode_is_identity_over_every_band_and_key() {
        for band in [SYMBOLS, UPPERCASE, LOWERCASE] {
            for byte in band_bytes(band) {
                for key in 1..=26u8 {
                    let enc = shift(byte, key, band, Mode::Encode);
                    let dec = shift(enc, key, band, Mode::Decode);
                    assert_eq!(dec, byte, "byte {byte} key {key} failed to round-trip");
                }
            }
        }
    }

    #[test]
    fn encode_stays_within_the_band() {
        for band in [SYMBOLS, UPPERCASE, LOWERCASE] {
            for byte in band_bytes(band) {
                for key in 1..=26u8 {
                    let enc = shift(byte, key, band, Mode::Encode);
                    assert!(band.contains(enc), "byte {byte} key {key} escaped the band");
                }
            }
        }
    }

    #[test]
    fn uppercase_boundary_wraps() {
        assert_eq!(shift(b'Z', 1, UPPERCASE, Mode::Encode), b'A');
        assert_eq!(shift(b'A', 1, UPPERCASE, Mode::Decode), b'Z');
    }

    #[test]
    fn symbol_band_wraps_with_the_largest_key() {
        // 57 + 26 = 83 > 64, so (83 - 64) + 33 - 1 = 51
        assert_eq!(shift(b'9', 26, SYMBOLS, Mode::Encode), b'3');
        assert_eq!(shift(b'3', 26, SYMBOLS, Mode::Decode), b'9');
    }

    #[test]
    fn transform_leaves_space_and_newline_alone_for_every_key() {
        for key in 1..=26u8 {
            for mode in [Mode::Encode, Mode::Decode] {
                assert_eq!(transform(b' ', key, mode), b' ');
                assert_eq!(transform(b'\n', key, mode), b'\n');
            }
        }
    }
}
