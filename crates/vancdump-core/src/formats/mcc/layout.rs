pub const SIGNATURE: &str = "File Format=MacCaption_MCC V1.0";
pub const MAX_LINE_SIZE: usize = 1 << 12;
pub const COMMENT_PREFIX: &str = "//";
pub const ATTRIBUTE_SEPARATOR: char = '=';

/// MCC does not record which VANC line a packet came from.
pub const DISPLAY_LINE_NUMBER: u16 = 9;

pub const CAPTION_PATTERN: &str =
    r"(?i)^([0-9]{2}):([0-9]{2}):([0-9]{2}):([0-9]{2})\t([0-9A-TUZ]*)$";

/// Letter substitutions applied before hex decoding. Letters `A`..`F` are
/// plain hex digits and are not listed.
pub const TRANSLATION_TABLE: [(u8, &str); 16] = [
    (b'G', "FA0000"),
    (b'H', "FA0000FA0000"),
    (b'I', "FA0000FA0000FA0000"),
    (b'J', "FA0000FA0000FA0000FA0000"),
    (b'K', "FA0000FA0000FA0000FA0000FA0000"),
    (b'L', "FA0000FA0000FA0000FA0000FA0000FA0000"),
    (b'M', "FA0000FA0000FA0000FA0000FA0000FA0000FA0000"),
    (b'N', "FA0000FA0000FA0000FA0000FA0000FA0000FA0000FA0000"),
    (b'O', "FA0000FA0000FA0000FA0000FA0000FA0000FA0000FA0000FA0000"),
    (b'P', "FB8080"),
    (b'Q', "FC8080"),
    (b'R', "FD8080"),
    (b'S', "9669"),
    (b'T', "6101"),
    (b'U', "E10000"),
    (b'Z', "00"),
];

/// Hex run for an uppercase shorthand letter.
pub fn expansion(letter: u8) -> Option<&'static str> {
    TRANSLATION_TABLE
        .iter()
        .find(|(key, _)| *key == letter)
        .map(|(_, hex)| *hex)
}
