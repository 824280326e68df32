//! UTF-8 boundary: bytes and strings to elements and back.
//!
//! Validation is delegated to [`<[u8]>::utf8_chunks`]. Each maximal invalid
//! byte sequence becomes a single [`Element::Malformed`].

use crate::codepoint::Element;

/// Decode UTF-8 bytes into elements.
#[must_use]
pub fn decode(bytes: &[u8]) -> Vec<Element> {
    let mut out = Vec::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.extend(chunk.valid().chars().map(Element::from));
        if !chunk.invalid().is_empty() {
            out.push(Element::Malformed);
        }
    }
    out
}

/// Decode a string into elements. Never yields [`Element::Malformed`].
#[must_use]
pub fn decode_str(text: &str) -> Vec<Element> {
    text.chars().map(Element::from).collect()
}

/// Encode elements as UTF-8, writing U+FFFD for malformed elements.
#[must_use]
pub fn encode(elements: &[Element]) -> String {
    let mut out = String::with_capacity(elements.len());
    for element in elements {
        out.push(
            element
                .scalar()
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        );
    }
    out
}

/// Encode codepoints as UTF-8, writing U+FFFD for non-scalar values.
#[must_use]
pub fn encode_codepoints(codepoints: &[u32]) -> String {
    codepoints
        .iter()
        .map(|&cp| char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid() {
        let elements = decode("caf\u{e9}".as_bytes());
        assert_eq!(
            elements,
            vec![
                Element::Codepoint(0x63),
                Element::Codepoint(0x61),
                Element::Codepoint(0x66),
                Element::Codepoint(0xE9),
            ]
        );
        assert_eq!(decode_str("caf\u{e9}"), elements);
    }

    #[test]
    fn test_decode_invalid_sequences() {
        // Lone continuation byte, then a truncated three-byte sequence
        let elements = decode(b"a\x80b\xE2\x82");
        assert_eq!(
            elements,
            vec![
                Element::Codepoint(0x61),
                Element::Malformed,
                Element::Codepoint(0x62),
                Element::Malformed,
            ]
        );
    }

    #[test]
    fn test_encode_replaces_malformed() {
        let elements = [
            Element::Codepoint(0x41),
            Element::Malformed,
            Element::Codepoint(0xD800),
            Element::Codepoint(0x1F600),
        ];
        assert_eq!(encode(&elements), "A\u{FFFD}\u{FFFD}\u{1F600}");
        assert_eq!(encode_codepoints(&[0x48, 0x110000]), "H\u{FFFD}");
    }
}
