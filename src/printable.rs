/// Mnemonic and leading pad for each control code, indexed by byte value.
///
/// Pad widths vary per mnemonic so that entries line up loosely in
/// four-character columns next to the three-space pad printable bytes get.
const CONTROL_CODES: [(&str, &str); 33] = [
    ("NUL", " "),  // 0
    ("SOH", " "),  // 1
    ("STX", " "),  // 2
    ("ETX", " "),  // 3
    ("EOT", " "),  // 4
    ("ENQ", " "),  // 5
    ("ACK", " "),  // 6
    ("BEL", " "),  // 7
    ("BS", "  "),  // 8
    ("HT", "  "),  // 9
    ("LF", "  "),  // 10
    ("VT", " "),   // 11
    ("FF", "  "),  // 12
    ("CR", "  "),  // 13
    ("SO", "  "),  // 14
    ("SI", "  "),  // 15
    ("DLE", " "),  // 16
    ("DC1", " "),  // 17
    ("DC2", " "),  // 18
    ("DC3", " "),  // 19
    ("DC4", " "),  // 20
    ("NAK", " "),  // 21
    ("SYN", " "),  // 22
    ("ETB", " "),  // 23
    ("CAN", " "),  // 24
    ("EM", "  "),  // 25
    ("SUB", " "),  // 26
    ("ESC", " "),  // 27
    ("FS", "  "),  // 28
    ("GS", "  "),  // 29
    ("RS", "  "),  // 30
    ("US", "  "),  // 31
    ("SPC", " "),  // 32
];

/// Renders bytes as a padded, human-readable transcript: printable bytes
/// as themselves, control codes as their mnemonic, each entry preceded by
/// its leading pad.
///
/// Bytes above `DEL` are rendered as the Unicode code point with the same
/// value, so `0xE9` comes out as `é`. The table plus the fallthrough cover
/// all 256 byte values.
#[must_use]
pub fn printable<B: AsRef<[u8]>>(data: B) -> String {
    let data = data.as_ref();

    let mut out = String::with_capacity(data.len() * 4);
    for &byte in data {
        match byte {
            0..=32 => {
                let (mnemonic, pad) = CONTROL_CODES[usize::from(byte)];
                out.push_str(pad);
                out.push_str(mnemonic);
            }
            127 => out.push_str(" DEL"),
            _ => {
                out.push_str("   ");
                out.push(char::from(byte));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_transcript() {
        assert_eq!(printable([0, 9, 10, 32, 65]), " NUL  HT  LF SPC   A");
    }

    #[test]
    fn test_control_code_pads() {
        let cases: &[(u8, &str)] = &[
            (0, " NUL"),
            (7, " BEL"),
            (8, "  BS"),
            (10, "  LF"),
            (11, " VT"),
            (13, "  CR"),
            (27, " ESC"),
            (31, "  US"),
            (32, " SPC"),
            (127, " DEL"),
        ];

        for (byte, expected) in cases {
            assert_eq!(printable([*byte]), *expected);
        }
    }

    #[test]
    fn test_printable_bytes_render_as_themselves() {
        assert_eq!(printable(b"Hi!"), "   H   i   !");
        assert_eq!(printable([b'!']), "   !");
        assert_eq!(printable([b'~']), "   ~");
    }

    #[test]
    fn test_high_bytes_render_as_latin_1() {
        assert_eq!(printable([0x80]), "   \u{80}");
        assert_eq!(printable([0xe9]), "   é");
        assert_eq!(printable([0xff]), "   ÿ");
    }

    #[test]
    fn test_total_over_all_byte_values() {
        let all: Vec<u8> = (0..=255).collect();

        let transcript = printable(&all);
        // every entry carries at least a pad and one character
        assert!(transcript.chars().count() >= all.len() * 2);
    }
}
