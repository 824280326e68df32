//! Input elements and Hangul syllable arithmetic.

/// One unit of engine input and output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// A decoded codepoint.
    Codepoint(u32),
    /// Marker for a byte sequence the decoder could not read.
    Malformed,
}

impl Element {
    /// The codepoint, if this element is a Unicode scalar value.
    #[inline]
    #[must_use]
    pub const fn scalar(self) -> Option<u32> {
        match self {
            Self::Codepoint(cp) if is_scalar(cp) => Some(cp),
            _ => None,
        }
    }

    /// Whether the engine treats this element as malformed.
    #[inline]
    #[must_use]
    pub const fn is_malformed(self) -> bool {
        self.scalar().is_none()
    }
}

impl From<char> for Element {
    fn from(c: char) -> Self {
        Self::Codepoint(u32::from(c))
    }
}

impl From<u32> for Element {
    fn from(cp: u32) -> Self {
        Self::Codepoint(cp)
    }
}

/// Wrap every codepoint as an element.
#[must_use]
pub fn elements(codepoints: &[u32]) -> Vec<Element> {
    codepoints.iter().copied().map(Element::Codepoint).collect()
}

/// Whether `cp` is in `0..=0x10FFFF` and not a surrogate.
#[inline]
#[must_use]
pub const fn is_scalar(cp: u32) -> bool {
    cp <= 0x10FFFF && !(0xD800 <= cp && cp <= 0xDFFF)
}

// Hangul syllable composition constants (Unicode chapter 3.12).
pub const S_BASE: u32 = 0xAC00;
pub const L_BASE: u32 = 0x1100;
pub const V_BASE: u32 = 0x1161;
pub const T_BASE: u32 = 0x11A7;
pub const L_COUNT: u32 = 19;
pub const V_COUNT: u32 = 21;
pub const T_COUNT: u32 = 28;
pub const N_COUNT: u32 = V_COUNT * T_COUNT;
pub const S_COUNT: u32 = L_COUNT * N_COUNT;

#[inline]
#[must_use]
pub const fn is_hangul_syllable(cp: u32) -> bool {
    cp.wrapping_sub(S_BASE) < S_COUNT
}

#[inline]
#[must_use]
pub const fn is_leading_jamo(cp: u32) -> bool {
    cp.wrapping_sub(L_BASE) < L_COUNT
}

#[inline]
#[must_use]
pub const fn is_vowel_jamo(cp: u32) -> bool {
    cp.wrapping_sub(V_BASE) < V_COUNT
}

/// Trailing jamo; `T_BASE` itself is not a trailing consonant.
#[inline]
#[must_use]
pub const fn is_trailing_jamo(cp: u32) -> bool {
    cp > T_BASE && cp < T_BASE + T_COUNT
}

/// Split a precomposed syllable into its two or three jamo.
///
/// Returns the jamo and how many of them are valid.
#[inline]
#[must_use]
pub const fn decompose_hangul(cp: u32) -> Option<([u32; 3], usize)> {
    if !is_hangul_syllable(cp) {
        return None;
    }
    let s_index = cp - S_BASE;
    let l = L_BASE + s_index / N_COUNT;
    let v = V_BASE + (s_index % N_COUNT) / T_COUNT;
    let t = s_index % T_COUNT;
    if t == 0 {
        Some(([l, v, 0], 2))
    } else {
        Some(([l, v, T_BASE + t], 3))
    }
}

/// Combine `first` and `second` when they form an LV or LV+T syllable.
#[inline]
#[must_use]
pub const fn compose_hangul(first: u32, second: u32) -> Option<u32> {
    if is_leading_jamo(first) && is_vowel_jamo(second) {
        let l_index = first - L_BASE;
        let v_index = second - V_BASE;
        return Some(S_BASE + (l_index * V_COUNT + v_index) * T_COUNT);
    }
    if is_hangul_syllable(first) && (first - S_BASE) % T_COUNT == 0 && is_trailing_jamo(second) {
        return Some(first + (second - T_BASE));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_values() {
        assert!(is_scalar(0));
        assert!(is_scalar(0xD7FF));
        assert!(!is_scalar(0xD800));
        assert!(!is_scalar(0xDFFF));
        assert!(is_scalar(0xE000));
        assert!(is_scalar(0x10FFFF));
        assert!(!is_scalar(0x110000));

        assert!(Element::Codepoint(0xDC00).is_malformed());
        assert!(Element::Malformed.is_malformed());
        assert_eq!(Element::from('a').scalar(), Some(0x61));
    }

    #[test]
    fn test_hangul_decomposition() {
        // U+D55C HAN = HIEUH + A + NIEUN
        assert_eq!(decompose_hangul(0xD55C), Some(([0x1112, 0x1161, 0x11AB], 3)));
        // U+AC00 GA = KIYEOK + A
        assert_eq!(decompose_hangul(0xAC00), Some(([0x1100, 0x1161, 0], 2)));
        assert_eq!(decompose_hangul(0xD7A3), Some(([0x1112, 0x1175, 0x11C2], 3)));
        assert_eq!(decompose_hangul(0xD7A4), None);
        assert_eq!(decompose_hangul(0xABFF), None);
    }

    #[test]
    fn test_hangul_composition() {
        assert_eq!(compose_hangul(0x1100, 0x1161), Some(0xAC00));
        assert_eq!(compose_hangul(0xAC00, 0x11A8), Some(0xAC01));
        // LVT syllables take no further trailing consonant
        assert_eq!(compose_hangul(0xAC01, 0x11A8), None);
        // T_BASE is not a trailing consonant
        assert_eq!(compose_hangul(0xAC00, 0x11A7), None);
        assert_eq!(compose_hangul(0x1161, 0x1100), None);
    }
}
