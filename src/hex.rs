/// Formatting options for [`hex_encode_with`].
///
/// The default matches [`hex_encode`]: a single space between single-byte
/// groups, lowercase digits.
#[derive(Debug, Clone, Copy)]
pub struct HexFormat<'a> {
    /// Text appended after each complete group.
    pub separator: &'a str,
    /// Number of times `separator` is repeated at each insertion point.
    pub repeat: usize,
    /// Bytes per group. `0` is treated as `1`.
    pub group_size: usize,
    /// Emit `A`-`F` instead of `a`-`f`.
    pub upper: bool,
}

impl Default for HexFormat<'_> {
    fn default() -> Self {
        Self {
            separator: " ",
            repeat: 1,
            group_size: 1,
            upper: false,
        }
    }
}

/// Error from [`hex_decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// A character other than `0-9a-fA-F` survived separator stripping.
    #[error("invalid hex digit: {0:?}")]
    InvalidDigit(char),
}

fn to_nibble(c: u8) -> Result<u8, DecodeError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(DecodeError::InvalidDigit(c as char)),
    }
}

/// Parses a string of hex digit pairs into bytes.
///
/// Whitespace, `:` separators, and all other punctuation are stripped
/// first, so output copied straight out of Wireshark or tcpdump decodes
/// as-is. If an odd number of digits survives stripping, the final lone
/// digit is dropped.
///
/// # Errors
///
/// [`DecodeError::InvalidDigit`] if a non-hex letter, digit, or underscore
/// survives stripping.
pub fn hex_decode<B: AsRef<[u8]>>(data: B) -> Result<Vec<u8>, DecodeError> {
    let digits: Vec<u8> = data
        .as_ref()
        .iter()
        .copied()
        .filter(|c| c.is_ascii_alphanumeric() || *c == b'_')
        .collect();

    digits
        .chunks_exact(2)
        .map(|pair| Ok(to_nibble(pair[0])? << 4 | to_nibble(pair[1])?))
        .collect()
}

fn to_digit(nibble: u8, upper: bool) -> char {
    let c = if nibble < 10 {
        b'0' + nibble
    } else if upper {
        b'A' + nibble - 10
    } else {
        b'a' + nibble - 10
    };
    c as char
}

/// Renders bytes as hex digit pairs under `format`.
///
/// The separator is appended after every complete group, including the
/// last one, so `hex_encode(&[0x1a, 0x2b])` is `"1a 2b "`. `None` renders
/// as the empty string.
#[must_use]
pub fn hex_encode_with<B: AsRef<[u8]>>(data: Option<B>, format: &HexFormat) -> String {
    let Some(data) = data else {
        return String::new();
    };
    let data = data.as_ref();

    let group_size = format.group_size.max(1);
    let separator = format.separator.repeat(format.repeat);

    let mut out = String::with_capacity(data.len() * (2 + separator.len()));
    let mut in_group = 0;
    for &byte in data {
        out.push(to_digit(byte >> 4, format.upper));
        out.push(to_digit(byte & 0b0000_1111, format.upper));
        in_group += 1;
        if in_group == group_size {
            out.push_str(&separator);
            in_group = 0;
        }
    }
    out
}

/// Space-separated lowercase pairs: `"1a 2b 3c "`.
#[must_use]
pub fn hex_encode<B: AsRef<[u8]>>(data: B) -> String {
    hex_encode_with(Some(data), &HexFormat::default())
}

/// Space-separated uppercase pairs of bytes: `"1A2B 3C4D "`.
#[must_use]
pub fn hex_encode_paired<B: AsRef<[u8]>>(data: B) -> String {
    hex_encode_with(
        Some(data),
        &HexFormat {
            group_size: 2,
            upper: true,
            ..HexFormat::default()
        },
    )
}

/// Lowercase pairs with `spaces` spaces between bytes, for lining hex up
/// under other columnar output.
#[must_use]
pub fn hex_encode_spaced<B: AsRef<[u8]>>(data: B, spaces: usize) -> String {
    hex_encode_with(
        Some(data),
        &HexFormat {
            repeat: spaces,
            ..HexFormat::default()
        },
    )
}

/// Lowercase pairs with caller-chosen separator text between bytes.
#[must_use]
pub fn hex_encode_sep<B: AsRef<[u8]>>(data: B, separator: &str) -> String {
    hex_encode_with(
        Some(data),
        &HexFormat {
            separator,
            ..HexFormat::default()
        },
    )
}
