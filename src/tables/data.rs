// Generated by scripts/gen_tables.py. Do not edit by hand.

#![allow(clippy::unreadable_literal)]

use super::{
    CaseFlags, CaseRecord, Category, CompositionRecord, DecompositionRecord,
    DecompositionTag, QuickCheck, RangeRecord,
};

pub const UNICODE_VERSION: (u8, u8, u8) = (15, 1, 0);

pub const COMBINING_CLASS: &[RangeRecord<u8>] = &[
    RangeRecord::new(0x0300, 0x0314, 230),
    RangeRecord::new(0x0315, 0x0315, 232),
    RangeRecord::new(0x0316, 0x0319, 220),
    RangeRecord::new(0x031A, 0x031A, 232),
    RangeRecord::new(0x031B, 0x031B, 216),
    RangeRecord::new(0x031C, 0x0320, 220),
    RangeRecord::new(0x0321, 0x0322, 202),
    RangeRecord::new(0x0323, 0x0326, 220),
    RangeRecord::new(0x0327, 0x0328, 202),
    RangeRecord::new(0x0329, 0x0333, 220),
    RangeRecord::new(0x0334, 0x0338, 1),
    RangeRecord::new(0x0339, 0x033C, 220),
    RangeRecord::new(0x033D, 0x0344, 230),
    RangeRecord::new(0x0345, 0x0345, 240),
    RangeRecord::new(0x0346, 0x0346, 230),
    RangeRecord::new(0x0347, 0x0349, 220),
    RangeRecord::new(0x034A, 0x034C, 230),
    RangeRecord::new(0x034D, 0x034E, 220),
    RangeRecord::new(0x0350, 0x0352, 230),
    RangeRecord::new(0x0353, 0x0356, 220),
    RangeRecord::new(0x0357, 0x0357, 230),
    RangeRecord::new(0x0358, 0x0358, 232),
    RangeRecord::new(0x0359, 0x035A, 220),
    RangeRecord::new(0x035B, 0x035B, 230),
    RangeRecord::new(0x035C, 0x035C, 233),
    RangeRecord::new(0x035D, 0x035E, 234),
    RangeRecord::new(0x035F, 0x035F, 233),
    RangeRecord::new(0x0360, 0x0361, 234),
    RangeRecord::new(0x0362, 0x0362, 233),
    RangeRecord::new(0x0363, 0x036F, 230),
    RangeRecord::new(0x0483, 0x0487, 230),
    RangeRecord::new(0x0591, 0x0591, 220),
    RangeRecord::new(0x0592, 0x0595, 230),
    RangeRecord::new(0x0596, 0x0596, 220),
    RangeRecord::new(0x0597, 0x0599, 230),
    RangeRecord::new(0x059A, 0x059A, 222),
    RangeRecord::new(0x059B, 0x059B, 220),
    RangeRecord::new(0x059C, 0x05A1, 230),
    RangeRecord::new(0x05A2, 0x05A7, 220),
    RangeRecord::new(0x05A8, 0x05A9, 230),
    RangeRecord::new(0x05AA, 0x05AA, 220),
    RangeRecord::new(0x05AB, 0x05AC, 230),
    RangeRecord::new(0x05AD, 0x05AD, 222),
    RangeRecord::new(0x05AE, 0x05AE, 228),
    RangeRecord::new(0x05AF, 0x05AF, 230),
    RangeRecord::new(0x05B0, 0x05B0, 10),
    RangeRecord::new(0x05B1, 0x05B1, 11),
    RangeRecord::new(0x05B2, 0x05B2, 12),
    RangeRecord::new(0x05B3, 0x05B3, 13),
    RangeRecord::new(0x05B4, 0x05B4, 14),
    RangeRecord::new(0x05B5, 0x05B5, 15),
    RangeRecord::new(0x05B6, 0x05B6, 16),
    RangeRecord::new(0x05B7, 0x05B7, 17),
    RangeRecord::new(0x05B8, 0x05B8, 18),
    RangeRecord::new(0x05B9, 0x05BA, 19),
    RangeRecord::new(0x05BB, 0x05BB, 20),
    RangeRecord::new(0x05BC, 0x05BC, 21),
    RangeRecord::new(0x05BD, 0x05BD, 22),
    RangeRecord::new(0x05BF, 0x05BF, 23),
    RangeRecord::new(0x05C1, 0x05C1, 24),
    RangeRecord::new(0x05C2, 0x05C2, 25),
    RangeRecord::new(0x05C4, 0x05C4, 230),
    RangeRecord::new(0x05C5, 0x05C5, 220),
    RangeRecord::new(0x05C7, 0x05C7, 18),
    RangeRecord::new(0x0610, 0x0617, 230),
    RangeRecord::new(0x0618, 0x0618, 30),
    RangeRecord::new(0x0619, 0x0619, 31),
    RangeRecord::new(0x061A, 0x061A, 32),
    RangeRecord::new(0x064B, 0x064B, 27),
    RangeRecord::new(0x064C, 0x064C, 28),
    RangeRecord::new(0x064D, 0x064D, 29),
    RangeRecord::new(0x064E, 0x064E, 30),
    RangeRecord::new(0x064F, 0x064F, 31),
    RangeRecord::new(0x0650, 0x0650, 32),
    RangeRecord::new(0x0651, 0x0651, 33),
    RangeRecord::new(0x0652, 0x0652, 34),
    RangeRecord::new(0x0653, 0x0654, 230),
    RangeRecord::new(0x0655, 0x0656, 220),
    RangeRecord::new(0x0657, 0x065B, 230),
    RangeRecord::new(0x065C, 0x065C, 220),
    RangeRecord::new(0x065D, 0x065E, 230),
    RangeRecord::new(0x065F, 0x065F, 220),
    RangeRecord::new(0x0670, 0x0670, 35),
    RangeRecord::new(0x06D6, 0x06DC, 230),
    RangeRecord::new(0x06DF, 0x06E2, 230),
    RangeRecord::new(0x06E3, 0x06E3, 220),
    RangeRecord::new(0x06E4, 0x06E4, 230),
    RangeRecord::new(0x06E7, 0x06E8, 230),
    RangeRecord::new(0x06EA, 0x06EA, 220),
    RangeRecord::new(0x06EB, 0x06EC, 230),
    RangeRecord::new(0x06ED, 0x06ED, 220),
    RangeRecord::new(0x0711, 0x0711, 36),
    RangeRecord::new(0x0730, 0x0730, 230),
    RangeRecord::new(0x0731, 0x0731, 220),
    RangeRecord::new(0x0732, 0x0733, 230),
    RangeRecord::new(0x0734, 0x0734, 220),
    RangeRecord::new(0x0735, 0x0736, 230),
    RangeRecord::new(0x0737, 0x0739, 220),
    RangeRecord::new(0x073A, 0x073A, 230),
    RangeRecord::new(0x073B, 0x073C, 220),
    RangeRecord::new(0x073D, 0x073D, 230),
    RangeRecord::new(0x073E, 0x073E, 220),
    RangeRecord::new(0x073F, 0x0741, 230),
    RangeRecord::new(0x0742, 0x0742, 220),
    RangeRecord::new(0x0743, 0x0743, 230),
    RangeRecord::new(0x0744, 0x0744, 220),
    RangeRecord::new(0x0745, 0x0745, 230),
    RangeRecord::new(0x0746, 0x0746, 220),
    RangeRecord::new(0x0747, 0x0747, 230),
    RangeRecord::new(0x0748, 0x0748, 220),
    RangeRecord::new(0x0749, 0x074A, 230),
    RangeRecord::new(0x07EB, 0x07F1, 230),
    RangeRecord::new(0x07F2, 0x07F2, 220),
    RangeRecord::new(0x07F3, 0x07F3, 230),
    RangeRecord::new(0x07FD, 0x07FD, 220),
    RangeRecord::new(0x0816, 0x0819, 230),
    RangeRecord::new(0x081B, 0x0823, 230),
    RangeRecord::new(0x0825, 0x0827, 230),
    RangeRecord::new(0x0829, 0x082D, 230),
    RangeRecord::new(0x0859, 0x085B, 220),
    RangeRecord::new(0x0898, 0x0898, 230),
    RangeRecord::new(0x0899, 0x089B, 220),
    RangeRecord::new(0x089C, 0x089F, 230),
    RangeRecord::new(0x08CA, 0x08CE, 230),
    RangeRecord::new(0x08CF, 0x08D3, 220),
    RangeRecord::new(0x08D4, 0x08E1, 230),
    RangeRecord::new(0x08E3, 0x08E3, 220),
    RangeRecord::new(0x08E4, 0x08E5, 230),
    RangeRecord::new(0x08E6, 0x08E6, 220),
    RangeRecord::new(0x08E7, 0x08E8, 230),
    RangeRecord::new(0x08E9, 0x08E9, 220),
    RangeRecord::new(0x08EA, 0x08EC, 230),
    RangeRecord::new(0x08ED, 0x08EF, 220),
    RangeRecord::new(0x08F0, 0x08F0, 27),
    RangeRecord::new(0x08F1, 0x08F1, 28),
    RangeRecord::new(0x08F2, 0x08F2, 29),
    RangeRecord::new(0x08F3, 0x08F5, 230),
    RangeRecord::new(0x08F6, 0x08F6, 220),
    RangeRecord::new(0x08F7, 0x08F8, 230),
    RangeRecord::new(0x08F9, 0x08FA, 220),
    RangeRecord::new(0x08FB, 0x08FF, 230),
    RangeRecord::new(0x093C, 0x093C, 7),
    RangeRecord::new(0x094D, 0x094D, 9),
    RangeRecord::new(0x0951, 0x0951, 230),
    RangeRecord::new(0x0952, 0x0952, 220),
    RangeRecord::new(0x0953, 0x0954, 230),
    RangeRecord::new(0x09BC, 0x09BC, 7),
    RangeRecord::new(0x09CD, 0x09CD, 9),
    RangeRecord::new(0x09FE, 0x09FE, 230),
    RangeRecord::new(0x0A3C, 0x0A3C, 7),
    RangeRecord::new(0x0A4D, 0x0A4D, 9),
    RangeRecord::new(0x0ABC, 0x0ABC, 7),
    RangeRecord::new(0x0ACD, 0x0ACD, 9),
    RangeRecord::new(0x0B3C, 0x0B3C, 7),
    RangeRecord::new(0x0B4D, 0x0B4D, 9),
    RangeRecord::new(0x0BCD, 0x0BCD, 9),
    RangeRecord::new(0x0C3C, 0x0C3C, 7),
    RangeRecord::new(0x0C4D, 0x0C4D, 9),
    RangeRecord::new(0x0C55, 0x0C55, 84),
    RangeRecord::new(0x0C56, 0x0C56, 91),
    RangeRecord::new(0x0CBC, 0x0CBC, 7),
    RangeRecord::new(0x0CCD, 0x0CCD, 9),
    RangeRecord::new(0x0D3B, 0x0D3C, 9),
    RangeRecord::new(0x0D4D, 0x0D4D, 9),
    RangeRecord::new(0x0DCA, 0x0DCA, 9),
    RangeRecord::new(0x0E38, 0x0E39, 103),
    RangeRecord::new(0x0E3A, 0x0E3A, 9),
    RangeRecord::new(0x0E48, 0x0E4B, 107),
    RangeRecord::new(0x0EB8, 0x0EB9, 118),
    RangeRecord::new(0x0EBA, 0x0EBA, 9),
    RangeRecord::new(0x0EC8, 0x0ECB, 122),
    RangeRecord::new(0x0F18, 0x0F19, 220),
    RangeRecord::new(0x0F35, 0x0F35, 220),
    RangeRecord::new(0x0F37, 0x0F37, 220),
    RangeRecord::new(0x0F39, 0x0F39, 216),
    RangeRecord::new(0x0F71, 0x0F71, 129),
    RangeRecord::new(0x0F72, 0x0F72, 130),
    RangeRecord::new(0x0F74, 0x0F74, 132),
    RangeRecord::new(0x0F7A, 0x0F7D, 130),
    RangeRecord::new(0x0F80, 0x0F80, 130),
    RangeRecord::new(0x0F82, 0x0F83, 230),
    RangeRecord::new(0x0F84, 0x0F84, 9),
    RangeRecord::new(0x0F86, 0x0F87, 230),
    RangeRecord::new(0x0FC6, 0x0FC6, 220),
    RangeRecord::new(0x1037, 0x1037, 7),
    RangeRecord::new(0x1039, 0x103A, 9),
    RangeRecord::new(0x108D, 0x108D, 220),
    RangeRecord::new(0x135D, 0x135F, 230),
    RangeRecord::new(0x1714, 0x1715, 9),
    RangeRecord::new(0x1734, 0x1734, 9),
    RangeRecord::new(0x17D2, 0x17D2, 9),
    RangeRecord::new(0x17DD, 0x17DD, 230),
    RangeRecord::new(0x18A9, 0x18A9, 228),
    RangeRecord::new(0x1939, 0x1939, 222),
    RangeRecord::new(0x193A, 0x193A, 230),
    RangeRecord::new(0x193B, 0x193B, 220),
    RangeRecord::new(0x1A17, 0x1A17, 230),
    RangeRecord::new(0x1A18, 0x1A18, 220),
    RangeRecord::new(0x1A60, 0x1A60, 9),
    RangeRecord::new(0x1A75, 0x1A7C, 230),
    RangeRecord::new(0x1A7F, 0x1A7F, 220),
    RangeRecord::new(0x1AB0, 0x1AB4, 230),
    RangeRecord::new(0x1AB5, 0x1ABA, 220),
    RangeRecord::new(0x1ABB, 0x1ABC, 230),
    RangeRecord::new(0x1ABD, 0x1ABD, 220),
    RangeRecord::new(0x1ABF, 0x1AC0, 220),
    RangeRecord::new(0x1AC1, 0x1AC2, 230),
    RangeRecord::new(0x1AC3, 0x1AC4, 220),
    RangeRecord::new(0x1AC5, 0x1AC9, 230),
    RangeRecord::new(0x1ACA, 0x1ACA, 220),
    RangeRecord::new(0x1ACB, 0x1ACE, 230),
    RangeRecord::new(0x1B34, 0x1B34, 7),
    RangeRecord::new(0x1B44, 0x1B44, 9),
    RangeRecord::new(0x1B6B, 0x1B6B, 230),
    RangeRecord::new(0x1B6C, 0x1B6C, 220),
    RangeRecord::new(0x1B6D, 0x1B73, 230),
    RangeRecord::new(0x1BAA, 0x1BAB, 9),
    RangeRecord::new(0x1BE6, 0x1BE6, 7),
    RangeRecord::new(0x1BF2, 0x1BF3, 9),
    RangeRecord::new(0x1C37, 0x1C37, 7),
    RangeRecord::new(0x1CD0, 0x1CD2, 230),
    RangeRecord::new(0x1CD4, 0x1CD4, 1),
    RangeRecord::new(0x1CD5, 0x1CD9, 220),
    RangeRecord::new(0x1CDA, 0x1CDB, 230),
    RangeRecord::new(0x1CDC, 0x1CDF, 220),
    RangeRecord::new(0x1CE0, 0x1CE0, 230),
    RangeRecord::new(0x1CE2, 0x1CE8, 1),
    RangeRecord::new(0x1CED, 0x1CED, 220),
    RangeRecord::new(0x1CF4, 0x1CF4, 230),
    RangeRecord::new(0x1CF8, 0x1CF9, 230),
    RangeRecord::new(0x1DC0, 0x1DC1, 230),
    RangeRecord::new(0x1DC2, 0x1DC2, 220),
    RangeRecord::new(0x1DC3, 0x1DC9, 230),
    RangeRecord::new(0x1DCA, 0x1DCA, 220),
    RangeRecord::new(0x1DCB, 0x1DCC, 230),
    RangeRecord::new(0x1DCD, 0x1DCD, 234),
    RangeRecord::new(0x1DCE, 0x1DCE, 214),
    RangeRecord::new(0x1DCF, 0x1DCF, 220),
    RangeRecord::new(0x1DD0, 0x1DD0, 202),
    RangeRecord::new(0x1DD1, 0x1DF5, 230),
    RangeRecord::new(0x1DF6, 0x1DF6, 232),
    RangeRecord::new(0x1DF7, 0x1DF8, 228),
    RangeRecord::new(0x1DF9, 0x1DF9, 220),
    RangeRecord::new(0x1DFA, 0x1DFA, 218),
    RangeRecord::new(0x1DFB, 0x1DFB, 230),
    RangeRecord::new(0x1DFC, 0x1DFC, 233),
    RangeRecord::new(0x1DFD, 0x1DFD, 220),
    RangeRecord::new(0x1DFE, 0x1DFE, 230),
    RangeRecord::new(0x1DFF, 0x1DFF, 220),
    RangeRecord::new(0x20D0, 0x20D1, 230),
    RangeRecord::new(0x20D2, 0x20D3, 1),
    RangeRecord::new(0x20D4, 0x20D7, 230),
    RangeRecord::new(0x20D8, 0x20DA, 1),
    RangeRecord::new(0x20DB, 0x20DC, 230),
    RangeRecord::new(0x20E1, 0x20E1, 230),
    RangeRecord::new(0x20E5, 0x20E6, 1),
    RangeRecord::new(0x20E7, 0x20E7, 230),
    RangeRecord::new(0x20E8, 0x20E8, 220),
    RangeRecord::new(0x20E9, 0x20E9, 230),
    RangeRecord::new(0x20EA, 0x20EB, 1),
    RangeRecord::new(0x20EC, 0x20EF, 220),
    RangeRecord::new(0x20F0, 0x20F0, 230),
    RangeRecord::new(0x2CEF, 0x2CF1, 230),
    RangeRecord::new(0x2D7F, 0x2D7F, 9),
    RangeRecord::new(0x2DE0, 0x2DFF, 230),
    RangeRecord::new(0x302A, 0x302A, 218),
    RangeRecord::new(0x302B, 0x302B, 228),
    RangeRecord::new(0x302C, 0x302C, 232),
    RangeRecord::new(0x302D, 0x302D, 222),
    RangeRecord::new(0x302E, 0x302F, 224),
    RangeRecord::new(0x3099, 0x309A, 8),
    RangeRecord::new(0xA66F, 0xA66F, 230),
    RangeRecord::new(0xA674, 0xA67D, 230),
    RangeRecord::new(0xA69E, 0xA69F, 230),
    RangeRecord::new(0xA6F0, 0xA6F1, 230),
    RangeRecord::new(0xA806, 0xA806, 9),
    RangeRecord::new(0xA82C, 0xA82C, 9),
    RangeRecord::new(0xA8C4, 0xA8C4, 9),
    RangeRecord::new(0xA8E0, 0xA8F1, 230),
    RangeRecord::new(0xA92B, 0xA92D, 220),
    RangeRecord::new(0xA953, 0xA953, 9),
    RangeRecord::new(0xA9B3, 0xA9B3, 7),
    RangeRecord::new(0xA9C0, 0xA9C0, 9),
    RangeRecord::new(0xAAB0, 0xAAB0, 230),
    RangeRecord::new(0xAAB2, 0xAAB3, 230),
    RangeRecord::new(0xAAB4, 0xAAB4, 220),
    RangeRecord::new(0xAAB7, 0xAAB8, 230),
    RangeRecord::new(0xAABE, 0xAABF, 230),
    RangeRecord::new(0xAAC1, 0xAAC1, 230),
    RangeRecord::new(0xAAF6, 0xAAF6, 9),
    RangeRecord::new(0xABED, 0xABED, 9),
    RangeRecord::new(0xFB1E, 0xFB1E, 26),
    RangeRecord::new(0xFE20, 0xFE26, 230),
    RangeRecord::new(0xFE27, 0xFE2D, 220),
    RangeRecord::new(0xFE2E, 0xFE2F, 230),
    RangeRecord::new(0x101FD, 0x101FD, 220),
    RangeRecord::new(0x102E0, 0x102E0, 220),
    RangeRecord::new(0x10376, 0x1037A, 230),
    RangeRecord::new(0x10A0D, 0x10A0D, 220),
    RangeRecord::new(0x10A0F, 0x10A0F, 230),
    RangeRecord::new(0x10A38, 0x10A38, 230),
    RangeRecord::new(0x10A39, 0x10A39, 1),
    RangeRecord::new(0x10A3A, 0x10A3A, 220),
    RangeRecord::new(0x10A3F, 0x10A3F, 9),
    RangeRecord::new(0x10AE5, 0x10AE5, 230),
    RangeRecord::new(0x10AE6, 0x10AE6, 220),
    RangeRecord::new(0x10D24, 0x10D27, 230),
    RangeRecord::new(0x10EAB, 0x10EAC, 230),
    RangeRecord::new(0x10EFD, 0x10EFF, 220),
    RangeRecord::new(0x10F46, 0x10F47, 220),
    RangeRecord::new(0x10F48, 0x10F4A, 230),
    RangeRecord::new(0x10F4B, 0x10F4B, 220),
    RangeRecord::new(0x10F4C, 0x10F4C, 230),
    RangeRecord::new(0x10F4D, 0x10F50, 220),
    RangeRecord::new(0x10F82, 0x10F82, 230),
    RangeRecord::new(0x10F83, 0x10F83, 220),
    RangeRecord::new(0x10F84, 0x10F84, 230),
    RangeRecord::new(0x10F85, 0x10F85, 220),
    RangeRecord::new(0x11046, 0x11046, 9),
    RangeRecord::new(0x11070, 0x11070, 9),
    RangeRecord::new(0x1107F, 0x1107F, 9),
    RangeRecord::new(0x110B9, 0x110B9, 9),
    RangeRecord::new(0x110BA, 0x110BA, 7),
    RangeRecord::new(0x11100, 0x11102, 230),
    RangeRecord::new(0x11133, 0x11134, 9),
    RangeRecord::new(0x11173, 0x11173, 7),
    RangeRecord::new(0x111C0, 0x111C0, 9),
    RangeRecord::new(0x111CA, 0x111CA, 7),
    RangeRecord::new(0x11235, 0x11235, 9),
    RangeRecord::new(0x11236, 0x11236, 7),
    RangeRecord::new(0x112E9, 0x112E9, 7),
    RangeRecord::new(0x112EA, 0x112EA, 9),
    RangeRecord::new(0x1133B, 0x1133C, 7),
    RangeRecord::new(0x1134D, 0x1134D, 9),
    RangeRecord::new(0x11366, 0x1136C, 230),
    RangeRecord::new(0x11370, 0x11374, 230),
    RangeRecord::new(0x11442, 0x11442, 9),
    RangeRecord::new(0x11446, 0x11446, 7),
    RangeRecord::new(0x1145E, 0x1145E, 230),
    RangeRecord::new(0x114C2, 0x114C2, 9),
    RangeRecord::new(0x114C3, 0x114C3, 7),
    RangeRecord::new(0x115BF, 0x115BF, 9),
    RangeRecord::new(0x115C0, 0x115C0, 7),
    RangeRecord::new(0x1163F, 0x1163F, 9),
    RangeRecord::new(0x116B6, 0x116B6, 9),
    RangeRecord::new(0x116B7, 0x116B7, 7),
    RangeRecord::new(0x1172B, 0x1172B, 9),
    RangeRecord::new(0x11839, 0x11839, 9),
    RangeRecord::new(0x1183A, 0x1183A, 7),
    RangeRecord::new(0x1193D, 0x1193E, 9),
    RangeRecord::new(0x11943, 0x11943, 7),
    RangeRecord::new(0x119E0, 0x119E0, 9),
    RangeRecord::new(0x11A34, 0x11A34, 9),
    RangeRecord::new(0x11A47, 0x11A47, 9),
    RangeRecord::new(0x11A99, 0x11A99, 9),
    RangeRecord::new(0x11C3F, 0x11C3F, 9),
    RangeRecord::new(0x11D42, 0x11D42, 7),
    RangeRecord::new(0x11D44, 0x11D45, 9),
    RangeRecord::new(0x11D97, 0x11D97, 9),
    RangeRecord::new(0x11F41, 0x11F42, 9),
    RangeRecord::new(0x16AF0, 0x16AF4, 1),
    RangeRecord::new(0x16B30, 0x16B36, 230),
    RangeRecord::new(0x16FF0, 0x16FF1, 6),
    RangeRecord::new(0x1BC9E, 0x1BC9E, 1),
    RangeRecord::new(0x1D165, 0x1D166, 216),
    RangeRecord::new(0x1D167, 0x1D169, 1),
    RangeRecord::new(0x1D16D, 0x1D16D, 226),
    RangeRecord::new(0x1D16E, 0x1D172, 216),
    RangeRecord::new(0x1D17B, 0x1D182, 220),
    RangeRecord::new(0x1D185, 0x1D189, 230),
    RangeRecord::new(0x1D18A, 0x1D18B, 220),
    RangeRecord::new(0x1D1AA, 0x1D1AD, 230),
    RangeRecord::new(0x1D242, 0x1D244, 230),
    RangeRecord::new(0x1E000, 0x1E006, 230),
    RangeRecord::new(0x1E008, 0x1E018, 230),
    RangeRecord::new(0x1E01B, 0x1E021, 230),
    RangeRecord::new(0x1E023, 0x1E024, 230),
    RangeRecord::new(0x1E026, 0x1E02A, 230),
    RangeRecord::new(0x1E08F, 0x1E08F, 230),
    RangeRecord::new(0x1E130, 0x1E136, 230),
    RangeRecord::new(0x1E2AE, 0x1E2AE, 230),
    RangeRecord::new(0x1E2EC, 0x1E2EF, 230),
    RangeRecord::new(0x1E4EC, 0x1E4ED, 232),
    RangeRecord::new(0x1E4EE, 0x1E4EE, 220),
    RangeRecord::new(0x1E4EF, 0x1E4EF, 230),
    RangeRecord::new(0x1E8D0, 0x1E8D6, 220),
    RangeRecord::new(0x1E944, 0x1E949, 230),
    RangeRecord::new(0x1E94A, 0x1E94A, 7),
];

pub const QUICK_CHECK_NFC: &[RangeRecord<QuickCheck>] = &[
    RangeRecord::new(0x0300, 0x0304, QuickCheck::Maybe),
    RangeRecord::new(0x0306, 0x030C, QuickCheck::Maybe),
    RangeRecord::new(0x030F, 0x030F, QuickCheck::Maybe),
    RangeRecord::new(0x0311, 0x0311, QuickCheck::Maybe),
    RangeRecord::new(0x0313, 0x0314, QuickCheck::Maybe),
    RangeRecord::new(0x031B, 0x031B, QuickCheck::Maybe),
    RangeRecord::new(0x0323, 0x0328, QuickCheck::Maybe),
    RangeRecord::new(0x032D, 0x032E, QuickCheck::Maybe),
    RangeRecord::new(0x0330, 0x0331, QuickCheck::Maybe),
    RangeRecord::new(0x0338, 0x0338, QuickCheck::Maybe),
    RangeRecord::new(0x0340, 0x0341, QuickCheck::No),
    RangeRecord::new(0x0342, 0x0342, QuickCheck::Maybe),
    RangeRecord::new(0x0343, 0x0344, QuickCheck::No),
    RangeRecord::new(0x0345, 0x0345, QuickCheck::Maybe),
    RangeRecord::new(0x0374, 0x0374, QuickCheck::No),
    RangeRecord::new(0x037E, 0x037E, QuickCheck::No),
    RangeRecord::new(0x0387, 0x0387, QuickCheck::No),
    RangeRecord::new(0x0653, 0x0655, QuickCheck::Maybe),
    RangeRecord::new(0x093C, 0x093C, QuickCheck::Maybe),
    RangeRecord::new(0x0958, 0x095F, QuickCheck::No),
    RangeRecord::new(0x09BE, 0x09BE, QuickCheck::Maybe),
    RangeRecord::new(0x09D7, 0x09D7, QuickCheck::Maybe),
    RangeRecord::new(0x09DC, 0x09DD, QuickCheck::No),
    RangeRecord::new(0x09DF, 0x09DF, QuickCheck::No),
    RangeRecord::new(0x0A33, 0x0A33, QuickCheck::No),
    RangeRecord::new(0x0A36, 0x0A36, QuickCheck::No),
    RangeRecord::new(0x0A59, 0x0A5B, QuickCheck::No),
    RangeRecord::new(0x0A5E, 0x0A5E, QuickCheck::No),
    RangeRecord::new(0x0B3E, 0x0B3E, QuickCheck::Maybe),
    RangeRecord::new(0x0B56, 0x0B57, QuickCheck::Maybe),
    RangeRecord::new(0x0B5C, 0x0B5D, QuickCheck::No),
    RangeRecord::new(0x0BBE, 0x0BBE, QuickCheck::Maybe),
    RangeRecord::new(0x0BD7, 0x0BD7, QuickCheck::Maybe),
    RangeRecord::new(0x0C56, 0x0C56, QuickCheck::Maybe),
    RangeRecord::new(0x0CC2, 0x0CC2, QuickCheck::Maybe),
    RangeRecord::new(0x0CD5, 0x0CD6, QuickCheck::Maybe),
    RangeRecord::new(0x0D3E, 0x0D3E, QuickCheck::Maybe),
    RangeRecord::new(0x0D57, 0x0D57, QuickCheck::Maybe),
    RangeRecord::new(0x0DCA, 0x0DCA, QuickCheck::Maybe),
    RangeRecord::new(0x0DCF, 0x0DCF, QuickCheck::Maybe),
    RangeRecord::new(0x0DDF, 0x0DDF, QuickCheck::Maybe),
    RangeRecord::new(0x0F43, 0x0F43, QuickCheck::No),
    RangeRecord::new(0x0F4D, 0x0F4D, QuickCheck::No),
    RangeRecord::new(0x0F52, 0x0F52, QuickCheck::No),
    RangeRecord::new(0x0F57, 0x0F57, QuickCheck::No),
    RangeRecord::new(0x0F5C, 0x0F5C, QuickCheck::No),
    RangeRecord::new(0x0F69, 0x0F69, QuickCheck::No),
    RangeRecord::new(0x0F73, 0x0F73, QuickCheck::No),
    RangeRecord::new(0x0F75, 0x0F76, QuickCheck::No),
    RangeRecord::new(0x0F78, 0x0F78, QuickCheck::No),
    RangeRecord::new(0x0F81, 0x0F81, QuickCheck::No),
    RangeRecord::new(0x0F93, 0x0F93, QuickCheck::No),
    RangeRecord::new(0x0F9D, 0x0F9D, QuickCheck::No),
    RangeRecord::new(0x0FA2, 0x0FA2, QuickCheck::No),
    RangeRecord::new(0x0FA7, 0x0FA7, QuickCheck::No),
    RangeRecord::new(0x0FAC, 0x0FAC, QuickCheck::No),
    RangeRecord::new(0x0FB9, 0x0FB9, QuickCheck::No),
    RangeRecord::new(0x102E, 0x102E, QuickCheck::Maybe),
    RangeRecord::new(0x1161, 0x1175, QuickCheck::Maybe),
    RangeRecord::new(0x11A8, 0x11C2, QuickCheck::Maybe),
    RangeRecord::new(0x1B35, 0x1B35, QuickCheck::Maybe),
    RangeRecord::new(0x1F71, 0x1F71, QuickCheck::No),
    RangeRecord::new(0x1F73, 0x1F73, QuickCheck::No),
    RangeRecord::new(0x1F75, 0x1F75, QuickCheck::No),
    RangeRecord::new(0x1F77, 0x1F77, QuickCheck::No),
    RangeRecord::new(0x1F79, 0x1F79, QuickCheck::No),
    RangeRecord::new(0x1F7B, 0x1F7B, QuickCheck::No),
    RangeRecord::new(0x1F7D, 0x1F7D, QuickCheck::No),
    RangeRecord::new(0x1FBB, 0x1FBB, QuickCheck::No),
    RangeRecord::new(0x1FBE, 0x1FBE, QuickCheck::No),
    RangeRecord::new(0x1FC9, 0x1FC9, QuickCheck::No),
    RangeRecord::new(0x1FCB, 0x1FCB, QuickCheck::No),
    RangeRecord::new(0x1FD3, 0x1FD3, QuickCheck::No),
    RangeRecord::new(0x1FDB, 0x1FDB, QuickCheck::No),
    RangeRecord::new(0x1FE3, 0x1FE3, QuickCheck::No),
    RangeRecord::new(0x1FEB, 0x1FEB, QuickCheck::No),
    RangeRecord::new(0x1FEE, 0x1FEF, QuickCheck::No),
    RangeRecord::new(0x1FF9, 0x1FF9, QuickCheck::No),
    RangeRecord::new(0x1FFB, 0x1FFB, QuickCheck::No),
    RangeRecord::new(0x1FFD, 0x1FFD, QuickCheck::No),
    RangeRecord::new(0x2000, 0x2001, QuickCheck::No),
    RangeRecord::new(0x2126, 0x2126, QuickCheck::No),
    RangeRecord::new(0x212A, 0x212B, QuickCheck::No),
    RangeRecord::new(0x2329, 0x232A, QuickCheck::No),
    RangeRecord::new(0x2ADC, 0x2ADC, QuickCheck::No),
    RangeRecord::new(0x3099, 0x309A, QuickCheck::Maybe),
    RangeRecord::new(0xF900, 0xFA0D, QuickCheck::No),
    RangeRecord::new(0xFA10, 0xFA10, QuickCheck::No),
    RangeRecord::new(0xFA12, 0xFA12, QuickCheck::No),
    RangeRecord::new(0xFA15, 0xFA1E, QuickCheck::No),
    RangeRecord::new(0xFA20, 0xFA20, QuickCheck::No),
    RangeRecord::new(0xFA22, 0xFA22, QuickCheck::No),
    RangeRecord::new(0xFA25, 0xFA26, QuickCheck::No),
    RangeRecord::new(0xFA2A, 0xFA6D, QuickCheck::No),
    RangeRecord::new(0xFA70, 0xFAD9, QuickCheck::No),
    RangeRecord::new(0xFB1D, 0xFB1D, QuickCheck::No),
    RangeRecord::new(0xFB1F, 0xFB1F, QuickCheck::No),
    RangeRecord::new(0xFB2A, 0xFB36, QuickCheck::No),
    RangeRecord::new(0xFB38, 0xFB3C, QuickCheck::No),
    RangeRecord::new(0xFB3E, 0xFB3E, QuickCheck::No),
    RangeRecord::new(0xFB40, 0xFB41, QuickCheck::No),
    RangeRecord::new(0xFB43, 0xFB44, QuickCheck::No),
    RangeRecord::new(0xFB46, 0xFB4E, QuickCheck::No),
    RangeRecord::new(0x110BA, 0x110BA, QuickCheck::Maybe),
    RangeRecord::new(0x11127, 0x11127, QuickCheck::Maybe),
    RangeRecord::new(0x1133E, 0x1133E, QuickCheck::Maybe),
    RangeRecord::new(0x11357, 0x11357, QuickCheck::Maybe),
    RangeRecord::new(0x114B0, 0x114B0, QuickCheck::Maybe),
    RangeRecord::new(0x114BA, 0x114BA, QuickCheck::Maybe),
    RangeRecord::new(0x114BD, 0x114BD, QuickCheck::Maybe),
    RangeRecord::new(0x115AF, 0x115AF, QuickCheck::Maybe),
    RangeRecord::new(0x11930, 0x11930, QuickCheck::Maybe),
    RangeRecord::new(0x1D15E, 0x1D164, QuickCheck::No),
    RangeRecord::new(0x1D1BB, 0x1D1C0, QuickCheck::No),
    RangeRecord::new(0x2F800, 0x2FA1D, QuickCheck::No),
];

pub const QUICK_CHECK_NFD: &[RangeRecord<QuickCheck>] = &[
    RangeRecord::new(0x00C0, 0x00C5, QuickCheck::No),
    RangeRecord::new(0x00C7, 0x00CF, QuickCheck::No),
    RangeRecord::new(0x00D1, 0x00D6, QuickCheck::No),
    RangeRecord::new(0x00D9, 0x00DD, QuickCheck::No),
    RangeRecord::new(0x00E0, 0x00E5, QuickCheck::No),
    RangeRecord::new(0x00E7, 0x00EF, QuickCheck::No),
    RangeRecord::new(0x00F1, 0x00F6, QuickCheck::No),
    RangeRecord::new(0x00F9, 0x00FD, QuickCheck::No),
    RangeRecord::new(0x00FF, 0x010F, QuickCheck::No),
    RangeRecord::new(0x0112, 0x0125, QuickCheck::No),
    RangeRecord::new(0x0128, 0x0130, QuickCheck::No),
    RangeRecord::new(0x0134, 0x0137, QuickCheck::No),
    RangeRecord::new(0x0139, 0x013E, QuickCheck::No),
    RangeRecord::new(0x0143, 0x0148, QuickCheck::No),
    RangeRecord::new(0x014C, 0x0151, QuickCheck::No),
    RangeRecord::new(0x0154, 0x0165, QuickCheck::No),
    RangeRecord::new(0x0168, 0x017E, QuickCheck::No),
    RangeRecord::new(0x01A0, 0x01A1, QuickCheck::No),
    RangeRecord::new(0x01AF, 0x01B0, QuickCheck::No),
    RangeRecord::new(0x01CD, 0x01DC, QuickCheck::No),
    RangeRecord::new(0x01DE, 0x01E3, QuickCheck::No),
    RangeRecord::new(0x01E6, 0x01F0, QuickCheck::No),
    RangeRecord::new(0x01F4, 0x01F5, QuickCheck::No),
    RangeRecord::new(0x01F8, 0x021B, QuickCheck::No),
    RangeRecord::new(0x021E, 0x021F, QuickCheck::No),
    RangeRecord::new(0x0226, 0x0233, QuickCheck::No),
    RangeRecord::new(0x0340, 0x0341, QuickCheck::No),
    RangeRecord::new(0x0343, 0x0344, QuickCheck::No),
    RangeRecord::new(0x0374, 0x0374, QuickCheck::No),
    RangeRecord::new(0x037E, 0x037E, QuickCheck::No),
    RangeRecord::new(0x0385, 0x038A, QuickCheck::No),
    RangeRecord::new(0x038C, 0x038C, QuickCheck::No),
    RangeRecord::new(0x038E, 0x0390, QuickCheck::No),
    RangeRecord::new(0x03AA, 0x03B0, QuickCheck::No),
    RangeRecord::new(0x03CA, 0x03CE, QuickCheck::No),
    RangeRecord::new(0x03D3, 0x03D4, QuickCheck::No),
    RangeRecord::new(0x0400, 0x0401, QuickCheck::No),
    RangeRecord::new(0x0403, 0x0403, QuickCheck::No),
    RangeRecord::new(0x0407, 0x0407, QuickCheck::No),
    RangeRecord::new(0x040C, 0x040E, QuickCheck::No),
    RangeRecord::new(0x0419, 0x0419, QuickCheck::No),
    RangeRecord::new(0x0439, 0x0439, QuickCheck::No),
    RangeRecord::new(0x0450, 0x0451, QuickCheck::No),
    RangeRecord::new(0x0453, 0x0453, QuickCheck::No),
    RangeRecord::new(0x0457, 0x0457, QuickCheck::No),
    RangeRecord::new(0x045C, 0x045E, QuickCheck::No),
    RangeRecord::new(0x0476, 0x0477, QuickCheck::No),
    RangeRecord::new(0x04C1, 0x04C2, QuickCheck::No),
    RangeRecord::new(0x04D0, 0x04D3, QuickCheck::No),
    RangeRecord::new(0x04D6, 0x04D7, QuickCheck::No),
    RangeRecord::new(0x04DA, 0x04DF, QuickCheck::No),
    RangeRecord::new(0x04E2, 0x04E7, QuickCheck::No),
    RangeRecord::new(0x04EA, 0x04F5, QuickCheck::No),
    RangeRecord::new(0x04F8, 0x04F9, QuickCheck::No),
    RangeRecord::new(0x0622, 0x0626, QuickCheck::No),
    RangeRecord::new(0x06C0, 0x06C0, QuickCheck::No),
    RangeRecord::new(0x06C2, 0x06C2, QuickCheck::No),
    RangeRecord::new(0x06D3, 0x06D3, QuickCheck::No),
    RangeRecord::new(0x0929, 0x0929, QuickCheck::No),
    RangeRecord::new(0x0931, 0x0931, QuickCheck::No),
    RangeRecord::new(0x0934, 0x0934, QuickCheck::No),
    RangeRecord::new(0x0958, 0x095F, QuickCheck::No),
    RangeRecord::new(0x09CB, 0x09CC, QuickCheck::No),
    RangeRecord::new(0x09DC, 0x09DD, QuickCheck::No),
    RangeRecord::new(0x09DF, 0x09DF, QuickCheck::No),
    RangeRecord::new(0x0A33, 0x0A33, QuickCheck::No),
    RangeRecord::new(0x0A36, 0x0A36, QuickCheck::No),
    RangeRecord::new(0x0A59, 0x0A5B, QuickCheck::No),
    RangeRecord::new(0x0A5E, 0x0A5E, QuickCheck::No),
    RangeRecord::new(0x0B48, 0x0B48, QuickCheck::No),
    RangeRecord::new(0x0B4B, 0x0B4C, QuickCheck::No),
    RangeRecord::new(0x0B5C, 0x0B5D, QuickCheck::No),
    RangeRecord::new(0x0B94, 0x0B94, QuickCheck::No),
    RangeRecord::new(0x0BCA, 0x0BCC, QuickCheck::No),
    RangeRecord::new(0x0C48, 0x0C48, QuickCheck::No),
    RangeRecord::new(0x0CC0, 0x0CC0, QuickCheck::No),
    RangeRecord::new(0x0CC7, 0x0CC8, QuickCheck::No),
    RangeRecord::new(0x0CCA, 0x0CCB, QuickCheck::No),
    RangeRecord::new(0x0D4A, 0x0D4C, QuickCheck::No),
    RangeRecord::new(0x0DDA, 0x0DDA, QuickCheck::No),
    RangeRecord::new(0x0DDC, 0x0DDE, QuickCheck::No),
    RangeRecord::new(0x0F43, 0x0F43, QuickCheck::No),
    RangeRecord::new(0x0F4D, 0x0F4D, QuickCheck::No),
    RangeRecord::new(0x0F52, 0x0F52, QuickCheck::No),
    RangeRecord::new(0x0F57, 0x0F57, QuickCheck::No),
    RangeRecord::new(0x0F5C, 0x0F5C, QuickCheck::No),
    RangeRecord::new(0x0F69, 0x0F69, QuickCheck::No),
    RangeRecord::new(0x0F73, 0x0F73, QuickCheck::No),
    RangeRecord::new(0x0F75, 0x0F76, QuickCheck::No),
    RangeRecord::new(0x0F78, 0x0F78, QuickCheck::No),
    RangeRecord::new(0x0F81, 0x0F81, QuickCheck::No),
    RangeRecord::new(0x0F93, 0x0F93, QuickCheck::No),
    RangeRecord::new(0x0F9D, 0x0F9D, QuickCheck::No),
    RangeRecord::new(0x0FA2, 0x0FA2, QuickCheck::No),
    RangeRecord::new(0x0FA7, 0x0FA7, QuickCheck::No),
    RangeRecord::new(0x0FAC, 0x0FAC, QuickCheck::No),
    RangeRecord::new(0x0FB9, 0x0FB9, QuickCheck::No),
    RangeRecord::new(0x1026, 0x1026, QuickCheck::No),
    RangeRecord::new(0x1B06, 0x1B06, QuickCheck::No),
    RangeRecord::new(0x1B08, 0x1B08, QuickCheck::No),
    RangeRecord::new(0x1B0A, 0x1B0A, QuickCheck::No),
    RangeRecord::new(0x1B0C, 0x1B0C, QuickCheck::No),
    RangeRecord::new(0x1B0E, 0x1B0E, QuickCheck::No),
    RangeRecord::new(0x1B12, 0x1B12, QuickCheck::No),
    RangeRecord::new(0x1B3B, 0x1B3B, QuickCheck::No),
    RangeRecord::new(0x1B3D, 0x1B3D, QuickCheck::No),
    RangeRecord::new(0x1B40, 0x1B41, QuickCheck::No),
    RangeRecord::new(0x1B43, 0x1B43, QuickCheck::No),
    RangeRecord::new(0x1E00, 0x1E99, QuickCheck::No),
    RangeRecord::new(0x1E9B, 0x1E9B, QuickCheck::No),
    RangeRecord::new(0x1EA0, 0x1EF9, QuickCheck::No),
    RangeRecord::new(0x1F00, 0x1F15, QuickCheck::No),
    RangeRecord::new(0x1F18, 0x1F1D, QuickCheck::No),
    RangeRecord::new(0x1F20, 0x1F45, QuickCheck::No),
    RangeRecord::new(0x1F48, 0x1F4D, QuickCheck::No),
    RangeRecord::new(0x1F50, 0x1F57, QuickCheck::No),
    RangeRecord::new(0x1F59, 0x1F59, QuickCheck::No),
    RangeRecord::new(0x1F5B, 0x1F5B, QuickCheck::No),
    RangeRecord::new(0x1F5D, 0x1F5D, QuickCheck::No),
    RangeRecord::new(0x1F5F, 0x1F7D, QuickCheck::No),
    RangeRecord::new(0x1F80, 0x1FB4, QuickCheck::No),
    RangeRecord::new(0x1FB6, 0x1FBC, QuickCheck::No),
    RangeRecord::new(0x1FBE, 0x1FBE, QuickCheck::No),
    RangeRecord::new(0x1FC1, 0x1FC4, QuickCheck::No),
    RangeRecord::new(0x1FC6, 0x1FD3, QuickCheck::No),
    RangeRecord::new(0x1FD6, 0x1FDB, QuickCheck::No),
    RangeRecord::new(0x1FDD, 0x1FEF, QuickCheck::No),
    RangeRecord::new(0x1FF2, 0x1FF4, QuickCheck::No),
    RangeRecord::new(0x1FF6, 0x1FFD, QuickCheck::No),
    RangeRecord::new(0x2000, 0x2001, QuickCheck::No),
    RangeRecord::new(0x2126, 0x2126, QuickCheck::No),
    RangeRecord::new(0x212A, 0x212B, QuickCheck::No),
    RangeRecord::new(0x219A, 0x219B, QuickCheck::No),
    RangeRecord::new(0x21AE, 0x21AE, QuickCheck::No),
    RangeRecord::new(0x21CD, 0x21CF, QuickCheck::No),
    RangeRecord::new(0x2204, 0x2204, QuickCheck::No),
    RangeRecord::new(0x2209, 0x2209, QuickCheck::No),
    RangeRecord::new(0x220C, 0x220C, QuickCheck::No),
    RangeRecord::new(0x2224, 0x2224, QuickCheck::No),
    RangeRecord::new(0x2226, 0x2226, QuickCheck::No),
    RangeRecord::new(0x2241, 0x2241, QuickCheck::No),
    RangeRecord::new(0x2244, 0x2244, QuickCheck::No),
    RangeRecord::new(0x2247, 0x2247, QuickCheck::No),
    RangeRecord::new(0x2249, 0x2249, QuickCheck::No),
    RangeRecord::new(0x2260, 0x2260, QuickCheck::No),
    RangeRecord::new(0x2262, 0x2262, QuickCheck::No),
    RangeRecord::new(0x226D, 0x2271, QuickCheck::No),
    RangeRecord::new(0x2274, 0x2275, QuickCheck::No),
    RangeRecord::new(0x2278, 0x2279, QuickCheck::No),
    RangeRecord::new(0x2280, 0x2281, QuickCheck::No),
    RangeRecord::new(0x2284, 0x2285, QuickCheck::No),
    RangeRecord::new(0x2288, 0x2289, QuickCheck::No),
    RangeRecord::new(0x22AC, 0x22AF, QuickCheck::No),
    RangeRecord::new(0x22E0, 0x22E3, QuickCheck::No),
    RangeRecord::new(0x22EA, 0x22ED, QuickCheck::No),
    RangeRecord::new(0x2329, 0x232A, QuickCheck::No),
    RangeRecord::new(0x2ADC, 0x2ADC, QuickCheck::No),
    RangeRecord::new(0x304C, 0x304C, QuickCheck::No),
    RangeRecord::new(0x304E, 0x304E, QuickCheck::No),
    RangeRecord::new(0x3050, 0x3050, QuickCheck::No),
    RangeRecord::new(0x3052, 0x3052, QuickCheck::No),
    RangeRecord::new(0x3054, 0x3054, QuickCheck::No),
    RangeRecord::new(0x3056, 0x3056, QuickCheck::No),
    RangeRecord::new(0x3058, 0x3058, QuickCheck::No),
    RangeRecord::new(0x305A, 0x305A, QuickCheck::No),
    RangeRecord::new(0x305C, 0x305C, QuickCheck::No),
    RangeRecord::new(0x305E, 0x305E, QuickCheck::No),
    RangeRecord::new(0x3060, 0x3060, QuickCheck::No),
    RangeRecord::new(0x3062, 0x3062, QuickCheck::No),
    RangeRecord::new(0x3065, 0x3065, QuickCheck::No),
    RangeRecord::new(0x3067, 0x3067, QuickCheck::No),
    RangeRecord::new(0x3069, 0x3069, QuickCheck::No),
    RangeRecord::new(0x3070, 0x3071, QuickCheck::No),
    RangeRecord::new(0x3073, 0x3074, QuickCheck::No),
    RangeRecord::new(0x3076, 0x3077, QuickCheck::No),
    RangeRecord::new(0x3079, 0x307A, QuickCheck::No),
    RangeRecord::new(0x307C, 0x307D, QuickCheck::No),
    RangeRecord::new(0x3094, 0x3094, QuickCheck::No),
    RangeRecord::new(0x309E, 0x309E, QuickCheck::No),
    RangeRecord::new(0x30AC, 0x30AC, QuickCheck::No),
    RangeRecord::new(0x30AE, 0x30AE, QuickCheck::No),
    RangeRecord::new(0x30B0, 0x30B0, QuickCheck::No),
    RangeRecord::new(0x30B2, 0x30B2, QuickCheck::No),
    RangeRecord::new(0x30B4, 0x30B4, QuickCheck::No),
    RangeRecord::new(0x30B6, 0x30B6, QuickCheck::No),
    RangeRecord::new(0x30B8, 0x30B8, QuickCheck::No),
    RangeRecord::new(0x30BA, 0x30BA, QuickCheck::No),
    RangeRecord::new(0x30BC, 0x30BC, QuickCheck::No),
    RangeRecord::new(0x30BE, 0x30BE, QuickCheck::No),
    RangeRecord::new(0x30C0, 0x30C0, QuickCheck::No),
    RangeRecord::new(0x30C2, 0x30C2, QuickCheck::No),
    RangeRecord::new(0x30C5, 0x30C5, QuickCheck::No),
    RangeRecord::new(0x30C7, 0x30C7, QuickCheck::No),
    RangeRecord::new(0x30C9, 0x30C9, QuickCheck::No),
    RangeRecord::new(0x30D0, 0x30D1, QuickCheck::No),
    RangeRecord::new(0x30D3, 0x30D4, QuickCheck::No),
    RangeRecord::new(0x30D6, 0x30D7, QuickCheck::No),
    RangeRecord::new(0x30D9, 0x30DA, QuickCheck::No),
    RangeRecord::new(0x30DC, 0x30DD, QuickCheck::No),
    RangeRecord::new(0x30F4, 0x30F4, QuickCheck::No),
    RangeRecord::new(0x30F7, 0x30FA, QuickCheck::No),
    RangeRecord::new(0x30FE, 0x30FE, QuickCheck::No),
    RangeRecord::new(0xAC00, 0xD7A3, QuickCheck::No),
    RangeRecord::new(0xF900, 0xFA0D, QuickCheck::No),
    RangeRecord::new(0xFA10, 0xFA10, QuickCheck::No),
    RangeRecord::new(0xFA12, 0xFA12, QuickCheck::No),
    RangeRecord::new(0xFA15, 0xFA1E, QuickCheck::No),
    RangeRecord::new(0xFA20, 0xFA20, QuickCheck::No),
    RangeRecord::new(0xFA22, 0xFA22, QuickCheck::No),
    RangeRecord::new(0xFA25, 0xFA26, QuickCheck::No),
    RangeRecord::new(0xFA2A, 0xFA6D, QuickCheck::No),
    RangeRecord::new(0xFA70, 0xFAD9, QuickCheck::No),
    RangeRecord::new(0xFB1D, 0xFB1D, QuickCheck::No),
    RangeRecord::new(0xFB1F, 0xFB1F, QuickCheck::No),
    RangeRecord::new(0xFB2A, 0xFB36, QuickCheck::No),
    RangeRecord::new(0xFB38, 0xFB3C, QuickCheck::No),
    RangeRecord::new(0xFB3E, 0xFB3E, QuickCheck::No),
    RangeRecord::new(0xFB40, 0xFB41, QuickCheck::No),
    RangeRecord::new(0xFB43, 0xFB44, QuickCheck::No),
    RangeRecord::new(0xFB46, 0xFB4E, QuickCheck::No),
    RangeRecord::new(0x1109A, 0x1109A, QuickCheck::No),
    RangeRecord::new(0x1109C, 0x1109C, QuickCheck::No),
    RangeRecord::new(0x110AB, 0x110AB, QuickCheck::No),
    RangeRecord::new(0x1112E, 0x1112F, QuickCheck::No),
    RangeRecord::new(0x1134B, 0x1134C, QuickCheck::No),
    RangeRecord::new(0x114BB, 0x114BC, QuickCheck::No),
    RangeRecord::new(0x114BE, 0x114BE, QuickCheck::No),
    RangeRecord::new(0x115BA, 0x115BB, QuickCheck::No),
    RangeRecord::new(0x11938, 0x11938, QuickCheck::No),
    RangeRecord::new(0x1D15E, 0x1D164, QuickCheck::No),
    RangeRecord::new(0x1D1BB, 0x1D1C0, QuickCheck::No),
    RangeRecord::new(0x2F800, 0x2FA1D, QuickCheck::No),
];

pub const QUICK_CHECK_NFKC: &[RangeRecord<QuickCheck>] = &[
    RangeRecord::new(0x00A0, 0x00A0, QuickCheck::No),
    RangeRecord::new(0x00A8, 0x00A8, QuickCheck::No),
    RangeRecord::new(0x00AA, 0x00AA, QuickCheck::No),
    RangeRecord::new(0x00AF, 0x00AF, QuickCheck::No),
    RangeRecord::new(0x00B2, 0x00B5, QuickCheck::No),
    RangeRecord::new(0x00B8, 0x00BA, QuickCheck::No),
    RangeRecord::new(0x00BC, 0x00BE, QuickCheck::No),
    RangeRecord::new(0x0132, 0x0133, QuickCheck::No),
    RangeRecord::new(0x013F, 0x0140, QuickCheck::No),
    RangeRecord::new(0x0149, 0x0149, QuickCheck::No),
    RangeRecord::new(0x017F, 0x017F, QuickCheck::No),
    RangeRecord::new(0x01C4, 0x01CC, QuickCheck::No),
    RangeRecord::new(0x01F1, 0x01F3, QuickCheck::No),
    RangeRecord::new(0x02B0, 0x02B8, QuickCheck::No),
    RangeRecord::new(0x02D8, 0x02DD, QuickCheck::No),
    RangeRecord::new(0x02E0, 0x02E4, QuickCheck::No),
    RangeRecord::new(0x0300, 0x0304, QuickCheck::Maybe),
    RangeRecord::new(0x0306, 0x030C, QuickCheck::Maybe),
    RangeRecord::new(0x030F, 0x030F, QuickCheck::Maybe),
    RangeRecord::new(0x0311, 0x0311, QuickCheck::Maybe),
    RangeRecord::new(0x0313, 0x0314, QuickCheck::Maybe),
    RangeRecord::new(0x031B, 0x031B, QuickCheck::Maybe),
    RangeRecord::new(0x0323, 0x0328, QuickCheck::Maybe),
    RangeRecord::new(0x032D, 0x032E, QuickCheck::Maybe),
    RangeRecord::new(0x0330, 0x0331, QuickCheck::Maybe),
    RangeRecord::new(0x0338, 0x0338, QuickCheck::Maybe),
    RangeRecord::new(0x0340, 0x0341, QuickCheck::No),
    RangeRecord::new(0x0342, 0x0342, QuickCheck::Maybe),
    RangeRecord::new(0x0343, 0x0344, QuickCheck::No),
    RangeRecord::new(0x0345, 0x0345, QuickCheck::Maybe),
    RangeRecord::new(0x0374, 0x0374, QuickCheck::No),
    RangeRecord::new(0x037A, 0x037A, QuickCheck::No),
    RangeRecord::new(0x037E, 0x037E, QuickCheck::No),
    RangeRecord::new(0x0384, 0x0385, QuickCheck::No),
    RangeRecord::new(0x0387, 0x0387, QuickCheck::No),
    RangeRecord::new(0x03D0, 0x03D6, QuickCheck::No),
    RangeRecord::new(0x03F0, 0x03F2, QuickCheck::No),
    RangeRecord::new(0x03F4, 0x03F5, QuickCheck::No),
    RangeRecord::new(0x03F9, 0x03F9, QuickCheck::No),
    RangeRecord::new(0x0587, 0x0587, QuickCheck::No),
    RangeRecord::new(0x0653, 0x0655, QuickCheck::Maybe),
    RangeRecord::new(0x0675, 0x0678, QuickCheck::No),
    RangeRecord::new(0x093C, 0x093C, QuickCheck::Maybe),
    RangeRecord::new(0x0958, 0x095F, QuickCheck::No),
    RangeRecord::new(0x09BE, 0x09BE, QuickCheck::Maybe),
    RangeRecord::new(0x09D7, 0x09D7, QuickCheck::Maybe),
    RangeRecord::new(0x09DC, 0x09DD, QuickCheck::No),
    RangeRecord::new(0x09DF, 0x09DF, QuickCheck::No),
    RangeRecord::new(0x0A33, 0x0A33, QuickCheck::No),
    RangeRecord::new(0x0A36, 0x0A36, QuickCheck::No),
    RangeRecord::new(0x0A59, 0x0A5B, QuickCheck::No),
    RangeRecord::new(0x0A5E, 0x0A5E, QuickCheck::No),
    RangeRecord::new(0x0B3E, 0x0B3E, QuickCheck::Maybe),
    RangeRecord::new(0x0B56, 0x0B57, QuickCheck::Maybe),
    RangeRecord::new(0x0B5C, 0x0B5D, QuickCheck::No),
    RangeRecord::new(0x0BBE, 0x0BBE, QuickCheck::Maybe),
    RangeRecord::new(0x0BD7, 0x0BD7, QuickCheck::Maybe),
    RangeRecord::new(0x0C56, 0x0C56, QuickCheck::Maybe),
    RangeRecord::new(0x0CC2, 0x0CC2, QuickCheck::Maybe),
    RangeRecord::new(0x0CD5, 0x0CD6, QuickCheck::Maybe),
    RangeRecord::new(0x0D3E, 0x0D3E, QuickCheck::Maybe),
    RangeRecord::new(0x0D57, 0x0D57, QuickCheck::Maybe),
    RangeRecord::new(0x0DCA, 0x0DCA, QuickCheck::Maybe),
    RangeRecord::new(0x0DCF, 0x0DCF, QuickCheck::Maybe),
    RangeRecord::new(0x0DDF, 0x0DDF, QuickCheck::Maybe),
    RangeRecord::new(0x0E33, 0x0E33, QuickCheck::No),
    RangeRecord::new(0x0EB3, 0x0EB3, QuickCheck::No),
    RangeRecord::new(0x0EDC, 0x0EDD, QuickCheck::No),
    RangeRecord::new(0x0F0C, 0x0F0C, QuickCheck::No),
    RangeRecord::new(0x0F43, 0x0F43, QuickCheck::No),
    RangeRecord::new(0x0F4D, 0x0F4D, QuickCheck::No),
    RangeRecord::new(0x0F52, 0x0F52, QuickCheck::No),
    RangeRecord::new(0x0F57, 0x0F57, QuickCheck::No),
    RangeRecord::new(0x0F5C, 0x0F5C, QuickCheck::No),
    RangeRecord::new(0x0F69, 0x0F69, QuickCheck::No),
    RangeRecord::new(0x0F73, 0x0F73, QuickCheck::No),
    RangeRecord::new(0x0F75, 0x0F79, QuickCheck::No),
    RangeRecord::new(0x0F81, 0x0F81, QuickCheck::No),
    RangeRecord::new(0x0F93, 0x0F93, QuickCheck::No),
    RangeRecord::new(0x0F9D, 0x0F9D, QuickCheck::No),
    RangeRecord::new(0x0FA2, 0x0FA2, QuickCheck::No),
    RangeRecord::new(0x0FA7, 0x0FA7, QuickCheck::No),
    RangeRecord::new(0x0FAC, 0x0FAC, QuickCheck::No),
    RangeRecord::new(0x0FB9, 0x0FB9, QuickCheck::No),
    RangeRecord::new(0x102E, 0x102E, QuickCheck::Maybe),
    RangeRecord::new(0x10FC, 0x10FC, QuickCheck::No),
    RangeRecord::new(0x1161, 0x1175, QuickCheck::Maybe),
    RangeRecord::new(0x11A8, 0x11C2, QuickCheck::Maybe),
    RangeRecord::new(0x1B35, 0x1B35, QuickCheck::Maybe),
    RangeRecord::new(0x1D2C, 0x1D2E, QuickCheck::No),
    RangeRecord::new(0x1D30, 0x1D3A, QuickCheck::No),
    RangeRecord::new(0x1D3C, 0x1D4D, QuickCheck::No),
    RangeRecord::new(0x1D4F, 0x1D6A, QuickCheck::No),
    RangeRecord::new(0x1D78, 0x1D78, QuickCheck::No),
    RangeRecord::new(0x1D9B, 0x1DBF, QuickCheck::No),
    RangeRecord::new(0x1E9A, 0x1E9B, QuickCheck::No),
    RangeRecord::new(0x1F71, 0x1F71, QuickCheck::No),
    RangeRecord::new(0x1F73, 0x1F73, QuickCheck::No),
    RangeRecord::new(0x1F75, 0x1F75, QuickCheck::No),
    RangeRecord::new(0x1F77, 0x1F77, QuickCheck::No),
    RangeRecord::new(0x1F79, 0x1F79, QuickCheck::No),
    RangeRecord::new(0x1F7B, 0x1F7B, QuickCheck::No),
    RangeRecord::new(0x1F7D, 0x1F7D, QuickCheck::No),
    RangeRecord::new(0x1FBB, 0x1FBB, QuickCheck::No),
    RangeRecord::new(0x1FBD, 0x1FC1, QuickCheck::No),
    RangeRecord::new(0x1FC9, 0x1FC9, QuickCheck::No),
    RangeRecord::new(0x1FCB, 0x1FCB, QuickCheck::No),
    RangeRecord::new(0x1FCD, 0x1FCF, QuickCheck::No),
    RangeRecord::new(0x1FD3, 0x1FD3, QuickCheck::No),
    RangeRecord::new(0x1FDB, 0x1FDB, QuickCheck::No),
    RangeRecord::new(0x1FDD, 0x1FDF, QuickCheck::No),
    RangeRecord::new(0x1FE3, 0x1FE3, QuickCheck::No),
    RangeRecord::new(0x1FEB, 0x1FEB, QuickCheck::No),
    RangeRecord::new(0x1FED, 0x1FEF, QuickCheck::No),
    RangeRecord::new(0x1FF9, 0x1FF9, QuickCheck::No),
    RangeRecord::new(0x1FFB, 0x1FFB, QuickCheck::No),
    RangeRecord::new(0x1FFD, 0x1FFE, QuickCheck::No),
    RangeRecord::new(0x2000, 0x200A, QuickCheck::No),
    RangeRecord::new(0x2011, 0x2011, QuickCheck::No),
    RangeRecord::new(0x2017, 0x2017, QuickCheck::No),
    RangeRecord::new(0x2024, 0x2026, QuickCheck::No),
    RangeRecord::new(0x202F, 0x202F, QuickCheck::No),
    RangeRecord::new(0x2033, 0x2034, QuickCheck::No),
    RangeRecord::new(0x2036, 0x2037, QuickCheck::No),
    RangeRecord::new(0x203C, 0x203C, QuickCheck::No),
    RangeRecord::new(0x203E, 0x203E, QuickCheck::No),
    RangeRecord::new(0x2047, 0x2049, QuickCheck::No),
    RangeRecord::new(0x2057, 0x2057, QuickCheck::No),
    RangeRecord::new(0x205F, 0x205F, QuickCheck::No),
    RangeRecord::new(0x2070, 0x2071, QuickCheck::No),
    RangeRecord::new(0x2074, 0x208E, QuickCheck::No),
    RangeRecord::new(0x2090, 0x209C, QuickCheck::No),
    RangeRecord::new(0x20A8, 0x20A8, QuickCheck::No),
    RangeRecord::new(0x2100, 0x2103, QuickCheck::No),
    RangeRecord::new(0x2105, 0x2107, QuickCheck::No),
    RangeRecord::new(0x2109, 0x2113, QuickCheck::No),
    RangeRecord::new(0x2115, 0x2116, QuickCheck::No),
    RangeRecord::new(0x2119, 0x211D, QuickCheck::No),
    RangeRecord::new(0x2120, 0x2122, QuickCheck::No),
    RangeRecord::new(0x2124, 0x2124, QuickCheck::No),
    RangeRecord::new(0x2126, 0x2126, QuickCheck::No),
    RangeRecord::new(0x2128, 0x2128, QuickCheck::No),
    RangeRecord::new(0x212A, 0x212D, QuickCheck::No),
    RangeRecord::new(0x212F, 0x2131, QuickCheck::No),
    RangeRecord::new(0x2133, 0x2139, QuickCheck::No),
    RangeRecord::new(0x213B, 0x2140, QuickCheck::No),
    RangeRecord::new(0x2145, 0x2149, QuickCheck::No),
    RangeRecord::new(0x2150, 0x217F, QuickCheck::No),
    RangeRecord::new(0x2189, 0x2189, QuickCheck::No),
    RangeRecord::new(0x222C, 0x222D, QuickCheck::No),
    RangeRecord::new(0x222F, 0x2230, QuickCheck::No),
    RangeRecord::new(0x2329, 0x232A, QuickCheck::No),
    RangeRecord::new(0x2460, 0x24EA, QuickCheck::No),
    RangeRecord::new(0x2A0C, 0x2A0C, QuickCheck::No),
    RangeRecord::new(0x2A74, 0x2A76, QuickCheck::No),
    RangeRecord::new(0x2ADC, 0x2ADC, QuickCheck::No),
    RangeRecord::new(0x2C7C, 0x2C7D, QuickCheck::No),
    RangeRecord::new(0x2D6F, 0x2D6F, QuickCheck::No),
    RangeRecord::new(0x2E9F, 0x2E9F, QuickCheck::No),
    RangeRecord::new(0x2EF3, 0x2EF3, QuickCheck::No),
    RangeRecord::new(0x2F00, 0x2FD5, QuickCheck::No),
    RangeRecord::new(0x3000, 0x3000, QuickCheck::No),
    RangeRecord::new(0x3036, 0x3036, QuickCheck::No),
    RangeRecord::new(0x3038, 0x303A, QuickCheck::No),
    RangeRecord::new(0x3099, 0x309A, QuickCheck::Maybe),
    RangeRecord::new(0x309B, 0x309C, QuickCheck::No),
    RangeRecord::new(0x309F, 0x309F, QuickCheck::No),
    RangeRecord::new(0x30FF, 0x30FF, QuickCheck::No),
    RangeRecord::new(0x3131, 0x318E, QuickCheck::No),
    RangeRecord::new(0x3192, 0x319F, QuickCheck::No),
    RangeRecord::new(0x3200, 0x321E, QuickCheck::No),
    RangeRecord::new(0x3220, 0x3247, QuickCheck::No),
    RangeRecord::new(0x3250, 0x327E, QuickCheck::No),
    RangeRecord::new(0x3280, 0x33FF, QuickCheck::No),
    RangeRecord::new(0xA69C, 0xA69D, QuickCheck::No),
    RangeRecord::new(0xA770, 0xA770, QuickCheck::No),
    RangeRecord::new(0xA7F2, 0xA7F4, QuickCheck::No),
    RangeRecord::new(0xA7F8, 0xA7F9, QuickCheck::No),
    RangeRecord::new(0xAB5C, 0xAB5F, QuickCheck::No),
    RangeRecord::new(0xAB69, 0xAB69, QuickCheck::No),
    RangeRecord::new(0xF900, 0xFA0D, QuickCheck::No),
    RangeRecord::new(0xFA10, 0xFA10, QuickCheck::No),
    RangeRecord::new(0xFA12, 0xFA12, QuickCheck::No),
    RangeRecord::new(0xFA15, 0xFA1E, QuickCheck::No),
    RangeRecord::new(0xFA20, 0xFA20, QuickCheck::No),
    RangeRecord::new(0xFA22, 0xFA22, QuickCheck::No),
    RangeRecord::new(0xFA25, 0xFA26, QuickCheck::No),
    RangeRecord::new(0xFA2A, 0xFA6D, QuickCheck::No),
    RangeRecord::new(0xFA70, 0xFAD9, QuickCheck::No),
    RangeRecord::new(0xFB00, 0xFB06, QuickCheck::No),
    RangeRecord::new(0xFB13, 0xFB17, QuickCheck::No),
    RangeRecord::new(0xFB1D, 0xFB1D, QuickCheck::No),
    RangeRecord::new(0xFB1F, 0xFB36, QuickCheck::No),
    RangeRecord::new(0xFB38, 0xFB3C, QuickCheck::No),
    RangeRecord::new(0xFB3E, 0xFB3E, QuickCheck::No),
    RangeRecord::new(0xFB40, 0xFB41, QuickCheck::No),
    RangeRecord::new(0xFB43, 0xFB44, QuickCheck::No),
    RangeRecord::new(0xFB46, 0xFBB1, QuickCheck::No),
    RangeRecord::new(0xFBD3, 0xFD3D, QuickCheck::No),
    RangeRecord::new(0xFD50, 0xFD8F, QuickCheck::No),
    RangeRecord::new(0xFD92, 0xFDC7, QuickCheck::No),
    RangeRecord::new(0xFDF0, 0xFDFC, QuickCheck::No),
    RangeRecord::new(0xFE10, 0xFE19, QuickCheck::No),
    RangeRecord::new(0xFE30, 0xFE44, QuickCheck::No),
    RangeRecord::new(0xFE47, 0xFE52, QuickCheck::No),
    RangeRecord::new(0xFE54, 0xFE66, QuickCheck::No),
    RangeRecord::new(0xFE68, 0xFE6B, QuickCheck::No),
    RangeRecord::new(0xFE70, 0xFE72, QuickCheck::No),
    RangeRecord::new(0xFE74, 0xFE74, QuickCheck::No),
    RangeRecord::new(0xFE76, 0xFEFC, QuickCheck::No),
    RangeRecord::new(0xFF01, 0xFFBE, QuickCheck::No),
    RangeRecord::new(0xFFC2, 0xFFC7, QuickCheck::No),
    RangeRecord::new(0xFFCA, 0xFFCF, QuickCheck::No),
    RangeRecord::new(0xFFD2, 0xFFD7, QuickCheck::No),
    RangeRecord::new(0xFFDA, 0xFFDC, QuickCheck::No),
    RangeRecord::new(0xFFE0, 0xFFE6, QuickCheck::No),
    RangeRecord::new(0xFFE8, 0xFFEE, QuickCheck::No),
    RangeRecord::new(0x10781, 0x10785, QuickCheck::No),
    RangeRecord::new(0x10787, 0x107B0, QuickCheck::No),
    RangeRecord::new(0x107B2, 0x107BA, QuickCheck::No),
    RangeRecord::new(0x110BA, 0x110BA, QuickCheck::Maybe),
    RangeRecord::new(0x11127, 0x11127, QuickCheck::Maybe),
    RangeRecord::new(0x1133E, 0x1133E, QuickCheck::Maybe),
    RangeRecord::new(0x11357, 0x11357, QuickCheck::Maybe),
    RangeRecord::new(0x114B0, 0x114B0, QuickCheck::Maybe),
    RangeRecord::new(0x114BA, 0x114BA, QuickCheck::Maybe),
    RangeRecord::new(0x114BD, 0x114BD, QuickCheck::Maybe),
    RangeRecord::new(0x115AF, 0x115AF, QuickCheck::Maybe),
    RangeRecord::new(0x11930, 0x11930, QuickCheck::Maybe),
    RangeRecord::new(0x1D15E, 0x1D164, QuickCheck::No),
    RangeRecord::new(0x1D1BB, 0x1D1C0, QuickCheck::No),
    RangeRecord::new(0x1D400, 0x1D454, QuickCheck::No),
    RangeRecord::new(0x1D456, 0x1D49C, QuickCheck::No),
    RangeRecord::new(0x1D49E, 0x1D49F, QuickCheck::No),
    RangeRecord::new(0x1D4A2, 0x1D4A2, QuickCheck::No),
    RangeRecord::new(0x1D4A5, 0x1D4A6, QuickCheck::No),
    RangeRecord::new(0x1D4A9, 0x1D4AC, QuickCheck::No),
    RangeRecord::new(0x1D4AE, 0x1D4B9, QuickCheck::No),
    RangeRecord::new(0x1D4BB, 0x1D4BB, QuickCheck::No),
    RangeRecord::new(0x1D4BD, 0x1D4C3, QuickCheck::No),
    RangeRecord::new(0x1D4C5, 0x1D505, QuickCheck::No),
    RangeRecord::new(0x1D507, 0x1D50A, QuickCheck::No),
    RangeRecord::new(0x1D50D, 0x1D514, QuickCheck::No),
    RangeRecord::new(0x1D516, 0x1D51C, QuickCheck::No),
    RangeRecord::new(0x1D51E, 0x1D539, QuickCheck::No),
    RangeRecord::new(0x1D53B, 0x1D53E, QuickCheck::No),
    RangeRecord::new(0x1D540, 0x1D544, QuickCheck::No),
    RangeRecord::new(0x1D546, 0x1D546, QuickCheck::No),
    RangeRecord::new(0x1D54A, 0x1D550, QuickCheck::No),
    RangeRecord::new(0x1D552, 0x1D6A5, QuickCheck::No),
    RangeRecord::new(0x1D6A8, 0x1D7CB, QuickCheck::No),
    RangeRecord::new(0x1D7CE, 0x1D7FF, QuickCheck::No),
    RangeRecord::new(0x1E030, 0x1E06D, QuickCheck::No),
    RangeRecord::new(0x1EE00, 0x1EE03, QuickCheck::No),
    RangeRecord::new(0x1EE05, 0x1EE1F, QuickCheck::No),
    RangeRecord::new(0x1EE21, 0x1EE22, QuickCheck::No),
    RangeRecord::new(0x1EE24, 0x1EE24, QuickCheck::No),
    RangeRecord::new(0x1EE27, 0x1EE27, QuickCheck::No),
    RangeRecord::new(0x1EE29, 0x1EE32, QuickCheck::No),
    RangeRecord::new(0x1EE34, 0x1EE37, QuickCheck::No),
    RangeRecord::new(0x1EE39, 0x1EE39, QuickCheck::No),
    RangeRecord::new(0x1EE3B, 0x1EE3B, QuickCheck::No),
    RangeRecord::new(0x1EE42, 0x1EE42, QuickCheck::No),
    RangeRecord::new(0x1EE47, 0x1EE47, QuickCheck::No),
    RangeRecord::new(0x1EE49, 0x1EE49, QuickCheck::No),
    RangeRecord::new(0x1EE4B, 0x1EE4B, QuickCheck::No),
    RangeRecord::new(0x1EE4D, 0x1EE4F, QuickCheck::No),
    RangeRecord::new(0x1EE51, 0x1EE52, QuickCheck::No),
    RangeRecord::new(0x1EE54, 0x1EE54, QuickCheck::No),
    RangeRecord::new(0x1EE57, 0x1EE57, QuickCheck::No),
    RangeRecord::new(0x1EE59, 0x1EE59, QuickCheck::No),
    RangeRecord::new(0x1EE5B, 0x1EE5B, QuickCheck::No),
    RangeRecord::new(0x1EE5D, 0x1EE5D, QuickCheck::No),
    RangeRecord::new(0x1EE5F, 0x1EE5F, QuickCheck::No),
    RangeRecord::new(0x1EE61, 0x1EE62, QuickCheck::No),
    RangeRecord::new(0x1EE64, 0x1EE64, QuickCheck::No),
    RangeRecord::new(0x1EE67, 0x1EE6A, QuickCheck::No),
    RangeRecord::new(0x1EE6C, 0x1EE72, QuickCheck::No),
    RangeRecord::new(0x1EE74, 0x1EE77, QuickCheck::No),
    RangeRecord::new(0x1EE79, 0x1EE7C, QuickCheck::No),
    RangeRecord::new(0x1EE7E, 0x1EE7E, QuickCheck::No),
    RangeRecord::new(0x1EE80, 0x1EE89, QuickCheck::No),
    RangeRecord::new(0x1EE8B, 0x1EE9B, QuickCheck::No),
    RangeRecord::new(0x1EEA1, 0x1EEA3, QuickCheck::No),
    RangeRecord::new(0x1EEA5, 0x1EEA9, QuickCheck::No),
    RangeRecord::new(0x1EEAB, 0x1EEBB, QuickCheck::No),
    RangeRecord::new(0x1F100, 0x1F10A, QuickCheck::No),
    RangeRecord::new(0x1F110, 0x1F12E, QuickCheck::No),
    RangeRecord::new(0x1F130, 0x1F14F, QuickCheck::No),
    RangeRecord::new(0x1F16A, 0x1F16C, QuickCheck::No),
    RangeRecord::new(0x1F190, 0x1F190, QuickCheck::No),
    RangeRecord::new(0x1F200, 0x1F202, QuickCheck::No),
    RangeRecord::new(0x1F210, 0x1F23B, QuickCheck::No),
    RangeRecord::new(0x1F240, 0x1F248, QuickCheck::No),
    RangeRecord::new(0x1F250, 0x1F251, QuickCheck::No),
    RangeRecord::new(0x1FBF0, 0x1FBF9, QuickCheck::No),
    RangeRecord::new(0x2F800, 0x2FA1D, QuickCheck::No),
];

pub const QUICK_CHECK_NFKD: &[RangeRecord<QuickCheck>] = &[
    RangeRecord::new(0x00A0, 0x00A0, QuickCheck::No),
    RangeRecord::new(0x00A8, 0x00A8, QuickCheck::No),
    RangeRecord::new(0x00AA, 0x00AA, QuickCheck::No),
    RangeRecord::new(0x00AF, 0x00AF, QuickCheck::No),
    RangeRecord::new(0x00B2, 0x00B5, QuickCheck::No),
    RangeRecord::new(0x00B8, 0x00BA, QuickCheck::No),
    RangeRecord::new(0x00BC, 0x00BE, QuickCheck::No),
    RangeRecord::new(0x00C0, 0x00C5, QuickCheck::No),
    RangeRecord::new(0x00C7, 0x00CF, QuickCheck::No),
    RangeRecord::new(0x00D1, 0x00D6, QuickCheck::No),
    RangeRecord::new(0x00D9, 0x00DD, QuickCheck::No),
    RangeRecord::new(0x00E0, 0x00E5, QuickCheck::No),
    RangeRecord::new(0x00E7, 0x00EF, QuickCheck::No),
    RangeRecord::new(0x00F1, 0x00F6, QuickCheck::No),
    RangeRecord::new(0x00F9, 0x00FD, QuickCheck::No),
    RangeRecord::new(0x00FF, 0x010F, QuickCheck::No),
    RangeRecord::new(0x0112, 0x0125, QuickCheck::No),
    RangeRecord::new(0x0128, 0x0130, QuickCheck::No),
    RangeRecord::new(0x0132, 0x0137, QuickCheck::No),
    RangeRecord::new(0x0139, 0x0140, QuickCheck::No),
    RangeRecord::new(0x0143, 0x0149, QuickCheck::No),
    RangeRecord::new(0x014C, 0x0151, QuickCheck::No),
    RangeRecord::new(0x0154, 0x0165, QuickCheck::No),
    RangeRecord::new(0x0168, 0x017F, QuickCheck::No),
    RangeRecord::new(0x01A0, 0x01A1, QuickCheck::No),
    RangeRecord::new(0x01AF, 0x01B0, QuickCheck::No),
    RangeRecord::new(0x01C4, 0x01DC, QuickCheck::No),
    RangeRecord::new(0x01DE, 0x01E3, QuickCheck::No),
    RangeRecord::new(0x01E6, 0x01F5, QuickCheck::No),
    RangeRecord::new(0x01F8, 0x021B, QuickCheck::No),
    RangeRecord::new(0x021E, 0x021F, QuickCheck::No),
    RangeRecord::new(0x0226, 0x0233, QuickCheck::No),
    RangeRecord::new(0x02B0, 0x02B8, QuickCheck::No),
    RangeRecord::new(0x02D8, 0x02DD, QuickCheck::No),
    RangeRecord::new(0x02E0, 0x02E4, QuickCheck::No),
    RangeRecord::new(0x0340, 0x0341, QuickCheck::No),
    RangeRecord::new(0x0343, 0x0344, QuickCheck::No),
    RangeRecord::new(0x0374, 0x0374, QuickCheck::No),
    RangeRecord::new(0x037A, 0x037A, QuickCheck::No),
    RangeRecord::new(0x037E, 0x037E, QuickCheck::No),
    RangeRecord::new(0x0384, 0x038A, QuickCheck::No),
    RangeRecord::new(0x038C, 0x038C, QuickCheck::No),
    RangeRecord::new(0x038E, 0x0390, QuickCheck::No),
    RangeRecord::new(0x03AA, 0x03B0, QuickCheck::No),
    RangeRecord::new(0x03CA, 0x03CE, QuickCheck::No),
    RangeRecord::new(0x03D0, 0x03D6, QuickCheck::No),
    RangeRecord::new(0x03F0, 0x03F2, QuickCheck::No),
    RangeRecord::new(0x03F4, 0x03F5, QuickCheck::No),
    RangeRecord::new(0x03F9, 0x03F9, QuickCheck::No),
    RangeRecord::new(0x0400, 0x0401, QuickCheck::No),
    RangeRecord::new(0x0403, 0x0403, QuickCheck::No),
    RangeRecord::new(0x0407, 0x0407, QuickCheck::No),
    RangeRecord::new(0x040C, 0x040E, QuickCheck::No),
    RangeRecord::new(0x0419, 0x0419, QuickCheck::No),
    RangeRecord::new(0x0439, 0x0439, QuickCheck::No),
    RangeRecord::new(0x0450, 0x0451, QuickCheck::No),
    RangeRecord::new(0x0453, 0x0453, QuickCheck::No),
    RangeRecord::new(0x0457, 0x0457, QuickCheck::No),
    RangeRecord::new(0x045C, 0x045E, QuickCheck::No),
    RangeRecord::new(0x0476, 0x0477, QuickCheck::No),
    RangeRecord::new(0x04C1, 0x04C2, QuickCheck::No),
    RangeRecord::new(0x04D0, 0x04D3, QuickCheck::No),
    RangeRecord::new(0x04D6, 0x04D7, QuickCheck::No),
    RangeRecord::new(0x04DA, 0x04DF, QuickCheck::No),
    RangeRecord::new(0x04E2, 0x04E7, QuickCheck::No),
    RangeRecord::new(0x04EA, 0x04F5, QuickCheck::No),
    RangeRecord::new(0x04F8, 0x04F9, QuickCheck::No),
    RangeRecord::new(0x0587, 0x0587, QuickCheck::No),
    RangeRecord::new(0x0622, 0x0626, QuickCheck::No),
    RangeRecord::new(0x0675, 0x0678, QuickCheck::No),
    RangeRecord::new(0x06C0, 0x06C0, QuickCheck::No),
    RangeRecord::new(0x06C2, 0x06C2, QuickCheck::No),
    RangeRecord::new(0x06D3, 0x06D3, QuickCheck::No),
    RangeRecord::new(0x0929, 0x0929, QuickCheck::No),
    RangeRecord::new(0x0931, 0x0931, QuickCheck::No),
    RangeRecord::new(0x0934, 0x0934, QuickCheck::No),
    RangeRecord::new(0x0958, 0x095F, QuickCheck::No),
    RangeRecord::new(0x09CB, 0x09CC, QuickCheck::No),
    RangeRecord::new(0x09DC, 0x09DD, QuickCheck::No),
    RangeRecord::new(0x09DF, 0x09DF, QuickCheck::No),
    RangeRecord::new(0x0A33, 0x0A33, QuickCheck::No),
    RangeRecord::new(0x0A36, 0x0A36, QuickCheck::No),
    RangeRecord::new(0x0A59, 0x0A5B, QuickCheck::No),
    RangeRecord::new(0x0A5E, 0x0A5E, QuickCheck::No),
    RangeRecord::new(0x0B48, 0x0B48, QuickCheck::No),
    RangeRecord::new(0x0B4B, 0x0B4C, QuickCheck::No),
    RangeRecord::new(0x0B5C, 0x0B5D, QuickCheck::No),
    RangeRecord::new(0x0B94, 0x0B94, QuickCheck::No),
    RangeRecord::new(0x0BCA, 0x0BCC, QuickCheck::No),
    RangeRecord::new(0x0C48, 0x0C48, QuickCheck::No),
    RangeRecord::new(0x0CC0, 0x0CC0, QuickCheck::No),
    RangeRecord::new(0x0CC7, 0x0CC8, QuickCheck::No),
    RangeRecord::new(0x0CCA, 0x0CCB, QuickCheck::No),
    RangeRecord::new(0x0D4A, 0x0D4C, QuickCheck::No),
    RangeRecord::new(0x0DDA, 0x0DDA, QuickCheck::No),
    RangeRecord::new(0x0DDC, 0x0DDE, QuickCheck::No),
    RangeRecord::new(0x0E33, 0x0E33, QuickCheck::No),
    RangeRecord::new(0x0EB3, 0x0EB3, QuickCheck::No),
    RangeRecord::new(0x0EDC, 0x0EDD, QuickCheck::No),
    RangeRecord::new(0x0F0C, 0x0F0C, QuickCheck::No),
    RangeRecord::new(0x0F43, 0x0F43, QuickCheck::No),
    RangeRecord::new(0x0F4D, 0x0F4D, QuickCheck::No),
    RangeRecord::new(0x0F52, 0x0F52, QuickCheck::No),
    RangeRecord::new(0x0F57, 0x0F57, QuickCheck::No),
    RangeRecord::new(0x0F5C, 0x0F5C, QuickCheck::No),
    RangeRecord::new(0x0F69, 0x0F69, QuickCheck::No),
    RangeRecord::new(0x0F73, 0x0F73, QuickCheck::No),
    RangeRecord::new(0x0F75, 0x0F79, QuickCheck::No),
    RangeRecord::new(0x0F81, 0x0F81, QuickCheck::No),
    RangeRecord::new(0x0F93, 0x0F93, QuickCheck::No),
    RangeRecord::new(0x0F9D, 0x0F9D, QuickCheck::No),
    RangeRecord::new(0x0FA2, 0x0FA2, QuickCheck::No),
    RangeRecord::new(0x0FA7, 0x0FA7, QuickCheck::No),
    RangeRecord::new(0x0FAC, 0x0FAC, QuickCheck::No),
    RangeRecord::new(0x0FB9, 0x0FB9, QuickCheck::No),
    RangeRecord::new(0x1026, 0x1026, QuickCheck::No),
    RangeRecord::new(0x10FC, 0x10FC, QuickCheck::No),
    RangeRecord::new(0x1B06, 0x1B06, QuickCheck::No),
    RangeRecord::new(0x1B08, 0x1B08, QuickCheck::No),
    RangeRecord::new(0x1B0A, 0x1B0A, QuickCheck::No),
    RangeRecord::new(0x1B0C, 0x1B0C, QuickCheck::No),
    RangeRecord::new(0x1B0E, 0x1B0E, QuickCheck::No),
    RangeRecord::new(0x1B12, 0x1B12, QuickCheck::No),
    RangeRecord::new(0x1B3B, 0x1B3B, QuickCheck::No),
    RangeRecord::new(0x1B3D, 0x1B3D, QuickCheck::No),
    RangeRecord::new(0x1B40, 0x1B41, QuickCheck::No),
    RangeRecord::new(0x1B43, 0x1B43, QuickCheck::No),
    RangeRecord::new(0x1D2C, 0x1D2E, QuickCheck::No),
    RangeRecord::new(0x1D30, 0x1D3A, QuickCheck::No),
    RangeRecord::new(0x1D3C, 0x1D4D, QuickCheck::No),
    RangeRecord::new(0x1D4F, 0x1D6A, QuickCheck::No),
    RangeRecord::new(0x1D78, 0x1D78, QuickCheck::No),
    RangeRecord::new(0x1D9B, 0x1DBF, QuickCheck::No),
    RangeRecord::new(0x1E00, 0x1E9B, QuickCheck::No),
    RangeRecord::new(0x1EA0, 0x1EF9, QuickCheck::No),
    RangeRecord::new(0x1F00, 0x1F15, QuickCheck::No),
    RangeRecord::new(0x1F18, 0x1F1D, QuickCheck::No),
    RangeRecord::new(0x1F20, 0x1F45, QuickCheck::No),
    RangeRecord::new(0x1F48, 0x1F4D, QuickCheck::No),
    RangeRecord::new(0x1F50, 0x1F57, QuickCheck::No),
    RangeRecord::new(0x1F59, 0x1F59, QuickCheck::No),
    RangeRecord::new(0x1F5B, 0x1F5B, QuickCheck::No),
    RangeRecord::new(0x1F5D, 0x1F5D, QuickCheck::No),
    RangeRecord::new(0x1F5F, 0x1F7D, QuickCheck::No),
    RangeRecord::new(0x1F80, 0x1FB4, QuickCheck::No),
    RangeRecord::new(0x1FB6, 0x1FC4, QuickCheck::No),
    RangeRecord::new(0x1FC6, 0x1FD3, QuickCheck::No),
    RangeRecord::new(0x1FD6, 0x1FDB, QuickCheck::No),
    RangeRecord::new(0x1FDD, 0x1FEF, QuickCheck::No),
    RangeRecord::new(0x1FF2, 0x1FF4, QuickCheck::No),
    RangeRecord::new(0x1FF6, 0x1FFE, QuickCheck::No),
    RangeRecord::new(0x2000, 0x200A, QuickCheck::No),
    RangeRecord::new(0x2011, 0x2011, QuickCheck::No),
    RangeRecord::new(0x2017, 0x2017, QuickCheck::No),
    RangeRecord::new(0x2024, 0x2026, QuickCheck::No),
    RangeRecord::new(0x202F, 0x202F, QuickCheck::No),
    RangeRecord::new(0x2033, 0x2034, QuickCheck::No),
    RangeRecord::new(0x2036, 0x2037, QuickCheck::No),
    RangeRecord::new(0x203C, 0x203C, QuickCheck::No),
    RangeRecord::new(0x203E, 0x203E, QuickCheck::No),
    RangeRecord::new(0x2047, 0x2049, QuickCheck::No),
    RangeRecord::new(0x2057, 0x2057, QuickCheck::No),
    RangeRecord::new(0x205F, 0x205F, QuickCheck::No),
    RangeRecord::new(0x2070, 0x2071, QuickCheck::No),
    RangeRecord::new(0x2074, 0x208E, QuickCheck::No),
    RangeRecord::new(0x2090, 0x209C, QuickCheck::No),
    RangeRecord::new(0x20A8, 0x20A8, QuickCheck::No),
    RangeRecord::new(0x2100, 0x2103, QuickCheck::No),
    RangeRecord::new(0x2105, 0x2107, QuickCheck::No),
    RangeRecord::new(0x2109, 0x2113, QuickCheck::No),
    RangeRecord::new(0x2115, 0x2116, QuickCheck::No),
    RangeRecord::new(0x2119, 0x211D, QuickCheck::No),
    RangeRecord::new(0x2120, 0x2122, QuickCheck::No),
    RangeRecord::new(0x2124, 0x2124, QuickCheck::No),
    RangeRecord::new(0x2126, 0x2126, QuickCheck::No),
    RangeRecord::new(0x2128, 0x2128, QuickCheck::No),
    RangeRecord::new(0x212A, 0x212D, QuickCheck::No),
    RangeRecord::new(0x212F, 0x2131, QuickCheck::No),
    RangeRecord::new(0x2133, 0x2139, QuickCheck::No),
    RangeRecord::new(0x213B, 0x2140, QuickCheck::No),
    RangeRecord::new(0x2145, 0x2149, QuickCheck::No),
    RangeRecord::new(0x2150, 0x217F, QuickCheck::No),
    RangeRecord::new(0x2189, 0x2189, QuickCheck::No),
    RangeRecord::new(0x219A, 0x219B, QuickCheck::No),
    RangeRecord::new(0x21AE, 0x21AE, QuickCheck::No),
    RangeRecord::new(0x21CD, 0x21CF, QuickCheck::No),
    RangeRecord::new(0x2204, 0x2204, QuickCheck::No),
    RangeRecord::new(0x2209, 0x2209, QuickCheck::No),
    RangeRecord::new(0x220C, 0x220C, QuickCheck::No),
    RangeRecord::new(0x2224, 0x2224, QuickCheck::No),
    RangeRecord::new(0x2226, 0x2226, QuickCheck::No),
    RangeRecord::new(0x222C, 0x222D, QuickCheck::No),
    RangeRecord::new(0x222F, 0x2230, QuickCheck::No),
    RangeRecord::new(0x2241, 0x2241, QuickCheck::No),
    RangeRecord::new(0x2244, 0x2244, QuickCheck::No),
    RangeRecord::new(0x2247, 0x2247, QuickCheck::No),
    RangeRecord::new(0x2249, 0x2249, QuickCheck::No),
    RangeRecord::new(0x2260, 0x2260, QuickCheck::No),
    RangeRecord::new(0x2262, 0x2262, QuickCheck::No),
    RangeRecord::new(0x226D, 0x2271, QuickCheck::No),
    RangeRecord::new(0x2274, 0x2275, QuickCheck::No),
    RangeRecord::new(0x2278, 0x2279, QuickCheck::No),
    RangeRecord::new(0x2280, 0x2281, QuickCheck::No),
    RangeRecord::new(0x2284, 0x2285, QuickCheck::No),
    RangeRecord::new(0x2288, 0x2289, QuickCheck::No),
    RangeRecord::new(0x22AC, 0x22AF, QuickCheck::No),
    RangeRecord::new(0x22E0, 0x22E3, QuickCheck::No),
    RangeRecord::new(0x22EA, 0x22ED, QuickCheck::No),
    RangeRecord::new(0x2329, 0x232A, QuickCheck::No),
    RangeRecord::new(0x2460, 0x24EA, QuickCheck::No),
    RangeRecord::new(0x2A0C, 0x2A0C, QuickCheck::No),
    RangeRecord::new(0x2A74, 0x2A76, QuickCheck::No),
    RangeRecord::new(0x2ADC, 0x2ADC, QuickCheck::No),
    RangeRecord::new(0x2C7C, 0x2C7D, QuickCheck::No),
    RangeRecord::new(0x2D6F, 0x2D6F, QuickCheck::No),
    RangeRecord::new(0x2E9F, 0x2E9F, QuickCheck::No),
    RangeRecord::new(0x2EF3, 0x2EF3, QuickCheck::No),
    RangeRecord::new(0x2F00, 0x2FD5, QuickCheck::No),
    RangeRecord::new(0x3000, 0x3000, QuickCheck::No),
    RangeRecord::new(0x3036, 0x3036, QuickCheck::No),
    RangeRecord::new(0x3038, 0x303A, QuickCheck::No),
    RangeRecord::new(0x304C, 0x304C, QuickCheck::No),
    RangeRecord::new(0x304E, 0x304E, QuickCheck::No),
    RangeRecord::new(0x3050, 0x3050, QuickCheck::No),
    RangeRecord::new(0x3052, 0x3052, QuickCheck::No),
    RangeRecord::new(0x3054, 0x3054, QuickCheck::No),
    RangeRecord::new(0x3056, 0x3056, QuickCheck::No),
    RangeRecord::new(0x3058, 0x3058, QuickCheck::No),
    RangeRecord::new(0x305A, 0x305A, QuickCheck::No),
    RangeRecord::new(0x305C, 0x305C, QuickCheck::No),
    RangeRecord::new(0x305E, 0x305E, QuickCheck::No),
    RangeRecord::new(0x3060, 0x3060, QuickCheck::No),
    RangeRecord::new(0x3062, 0x3062, QuickCheck::No),
    RangeRecord::new(0x3065, 0x3065, QuickCheck::No),
    RangeRecord::new(0x3067, 0x3067, QuickCheck::No),
    RangeRecord::new(0x3069, 0x3069, QuickCheck::No),
    RangeRecord::new(0x3070, 0x3071, QuickCheck::No),
    RangeRecord::new(0x3073, 0x3074, QuickCheck::No),
    RangeRecord::new(0x3076, 0x3077, QuickCheck::No),
    RangeRecord::new(0x3079, 0x307A, QuickCheck::No),
    RangeRecord::new(0x307C, 0x307D, QuickCheck::No),
    RangeRecord::new(0x3094, 0x3094, QuickCheck::No),
    RangeRecord::new(0x309B, 0x309C, QuickCheck::No),
    RangeRecord::new(0x309E, 0x309F, QuickCheck::No),
    RangeRecord::new(0x30AC, 0x30AC, QuickCheck::No),
    RangeRecord::new(0x30AE, 0x30AE, QuickCheck::No),
    RangeRecord::new(0x30B0, 0x30B0, QuickCheck::No),
    RangeRecord::new(0x30B2, 0x30B2, QuickCheck::No),
    RangeRecord::new(0x30B4, 0x30B4, QuickCheck::No),
    RangeRecord::new(0x30B6, 0x30B6, QuickCheck::No),
    RangeRecord::new(0x30B8, 0x30B8, QuickCheck::No),
    RangeRecord::new(0x30BA, 0x30BA, QuickCheck::No),
    RangeRecord::new(0x30BC, 0x30BC, QuickCheck::No),
    RangeRecord::new(0x30BE, 0x30BE, QuickCheck::No),
    RangeRecord::new(0x30C0, 0x30C0, QuickCheck::No),
    RangeRecord::new(0x30C2, 0x30C2, QuickCheck::No),
    RangeRecord::new(0x30C5, 0x30C5, QuickCheck::No),
    RangeRecord::new(0x30C7, 0x30C7, QuickCheck::No),
    RangeRecord::new(0x30C9, 0x30C9, QuickCheck::No),
    RangeRecord::new(0x30D0, 0x30D1, QuickCheck::No),
    RangeRecord::new(0x30D3, 0x30D4, QuickCheck::No),
    RangeRecord::new(0x30D6, 0x30D7, QuickCheck::No),
    RangeRecord::new(0x30D9, 0x30DA, QuickCheck::No),
    RangeRecord::new(0x30DC, 0x30DD, QuickCheck::No),
    RangeRecord::new(0x30F4, 0x30F4, QuickCheck::No),
    RangeRecord::new(0x30F7, 0x30FA, QuickCheck::No),
    RangeRecord::new(0x30FE, 0x30FF, QuickCheck::No),
    RangeRecord::new(0x3131, 0x318E, QuickCheck::No),
    RangeRecord::new(0x3192, 0x319F, QuickCheck::No),
    RangeRecord::new(0x3200, 0x321E, QuickCheck::No),
    RangeRecord::new(0x3220, 0x3247, QuickCheck::No),
    RangeRecord::new(0x3250, 0x327E, QuickCheck::No),
    RangeRecord::new(0x3280, 0x33FF, QuickCheck::No),
    RangeRecord::new(0xA69C, 0xA69D, QuickCheck::No),
    RangeRecord::new(0xA770, 0xA770, QuickCheck::No),
    RangeRecord::new(0xA7F2, 0xA7F4, QuickCheck::No),
    RangeRecord::new(0xA7F8, 0xA7F9, QuickCheck::No),
    RangeRecord::new(0xAB5C, 0xAB5F, QuickCheck::No),
    RangeRecord::new(0xAB69, 0xAB69, QuickCheck::No),
    RangeRecord::new(0xAC00, 0xD7A3, QuickCheck::No),
    RangeRecord::new(0xF900, 0xFA0D, QuickCheck::No),
    RangeRecord::new(0xFA10, 0xFA10, QuickCheck::No),
    RangeRecord::new(0xFA12, 0xFA12, QuickCheck::No),
    RangeRecord::new(0xFA15, 0xFA1E, QuickCheck::No),
    RangeRecord::new(0xFA20, 0xFA20, QuickCheck::No),
    RangeRecord::new(0xFA22, 0xFA22, QuickCheck::No),
    RangeRecord::new(0xFA25, 0xFA26, QuickCheck::No),
    RangeRecord::new(0xFA2A, 0xFA6D, QuickCheck::No),
    RangeRecord::new(0xFA70, 0xFAD9, QuickCheck::No),
    RangeRecord::new(0xFB00, 0xFB06, QuickCheck::No),
    RangeRecord::new(0xFB13, 0xFB17, QuickCheck::No),
    RangeRecord::new(0xFB1D, 0xFB1D, QuickCheck::No),
    RangeRecord::new(0xFB1F, 0xFB36, QuickCheck::No),
    RangeRecord::new(0xFB38, 0xFB3C, QuickCheck::No),
    RangeRecord::new(0xFB3E, 0xFB3E, QuickCheck::No),
    RangeRecord::new(0xFB40, 0xFB41, QuickCheck::No),
    RangeRecord::new(0xFB43, 0xFB44, QuickCheck::No),
    RangeRecord::new(0xFB46, 0xFBB1, QuickCheck::No),
    RangeRecord::new(0xFBD3, 0xFD3D, QuickCheck::No),
    RangeRecord::new(0xFD50, 0xFD8F, QuickCheck::No),
    RangeRecord::new(0xFD92, 0xFDC7, QuickCheck::No),
    RangeRecord::new(0xFDF0, 0xFDFC, QuickCheck::No),
    RangeRecord::new(0xFE10, 0xFE19, QuickCheck::No),
    RangeRecord::new(0xFE30, 0xFE44, QuickCheck::No),
    RangeRecord::new(0xFE47, 0xFE52, QuickCheck::No),
    RangeRecord::new(0xFE54, 0xFE66, QuickCheck::No),
    RangeRecord::new(0xFE68, 0xFE6B, QuickCheck::No),
    RangeRecord::new(0xFE70, 0xFE72, QuickCheck::No),
    RangeRecord::new(0xFE74, 0xFE74, QuickCheck::No),
    RangeRecord::new(0xFE76, 0xFEFC, QuickCheck::No),
    RangeRecord::new(0xFF01, 0xFFBE, QuickCheck::No),
    RangeRecord::new(0xFFC2, 0xFFC7, QuickCheck::No),
    RangeRecord::new(0xFFCA, 0xFFCF, QuickCheck::No),
    RangeRecord::new(0xFFD2, 0xFFD7, QuickCheck::No),
    RangeRecord::new(0xFFDA, 0xFFDC, QuickCheck::No),
    RangeRecord::new(0xFFE0, 0xFFE6, QuickCheck::No),
    RangeRecord::new(0xFFE8, 0xFFEE, QuickCheck::No),
    RangeRecord::new(0x10781, 0x10785, QuickCheck::No),
    RangeRecord::new(0x10787, 0x107B0, QuickCheck::No),
    RangeRecord::new(0x107B2, 0x107BA, QuickCheck::No),
    RangeRecord::new(0x1109A, 0x1109A, QuickCheck::No),
    RangeRecord::new(0x1109C, 0x1109C, QuickCheck::No),
    RangeRecord::new(0x110AB, 0x110AB, QuickCheck::No),
    RangeRecord::new(0x1112E, 0x1112F, QuickCheck::No),
    RangeRecord::new(0x1134B, 0x1134C, QuickCheck::No),
    RangeRecord::new(0x114BB, 0x114BC, QuickCheck::No),
    RangeRecord::new(0x114BE, 0x114BE, QuickCheck::No),
    RangeRecord::new(0x115BA, 0x115BB, QuickCheck::No),
    RangeRecord::new(0x11938, 0x11938, QuickCheck::No),
    RangeRecord::new(0x1D15E, 0x1D164, QuickCheck::No),
    RangeRecord::new(0x1D1BB, 0x1D1C0, QuickCheck::No),
    RangeRecord::new(0x1D400, 0x1D454, QuickCheck::No),
    RangeRecord::new(0x1D456, 0x1D49C, QuickCheck::No),
    RangeRecord::new(0x1D49E, 0x1D49F, QuickCheck::No),
    RangeRecord::new(0x1D4A2, 0x1D4A2, QuickCheck::No),
    RangeRecord::new(0x1D4A5, 0x1D4A6, QuickCheck::No),
    RangeRecord::new(0x1D4A9, 0x1D4AC, QuickCheck::No),
    RangeRecord::new(0x1D4AE, 0x1D4B9, QuickCheck::No),
    RangeRecord::new(0x1D4BB, 0x1D4BB, QuickCheck::No),
    RangeRecord::new(0x1D4BD, 0x1D4C3, QuickCheck::No),
    RangeRecord::new(0x1D4C5, 0x1D505, QuickCheck::No),
    RangeRecord::new(0x1D507, 0x1D50A, QuickCheck::No),
    RangeRecord::new(0x1D50D, 0x1D514, QuickCheck::No),
    RangeRecord::new(0x1D516, 0x1D51C, QuickCheck::No),
    RangeRecord::new(0x1D51E, 0x1D539, QuickCheck::No),
    RangeRecord::new(0x1D53B, 0x1D53E, QuickCheck::No),
    RangeRecord::new(0x1D540, 0x1D544, QuickCheck::No),
    RangeRecord::new(0x1D546, 0x1D546, QuickCheck::No),
    RangeRecord::new(0x1D54A, 0x1D550, QuickCheck::No),
    RangeRecord::new(0x1D552, 0x1D6A5, QuickCheck::No),
    RangeRecord::new(0x1D6A8, 0x1D7CB, QuickCheck::No),
    RangeRecord::new(0x1D7CE, 0x1D7FF, QuickCheck::No),
    RangeRecord::new(0x1E030, 0x1E06D, QuickCheck::No),
    RangeRecord::new(0x1EE00, 0x1EE03, QuickCheck::No),
    RangeRecord::new(0x1EE05, 0x1EE1F, QuickCheck::No),
    RangeRecord::new(0x1EE21, 0x1EE22, QuickCheck::No),
    RangeRecord::new(0x1EE24, 0x1EE24, QuickCheck::No),
    RangeRecord::new(0x1EE27, 0x1EE27, QuickCheck::No),
    RangeRecord::new(0x1EE29, 0x1EE32, QuickCheck::No),
    RangeRecord::new(0x1EE34, 0x1EE37, QuickCheck::No),
    RangeRecord::new(0x1EE39, 0x1EE39, QuickCheck::No),
    RangeRecord::new(0x1EE3B, 0x1EE3B, QuickCheck::No),
    RangeRecord::new(0x1EE42, 0x1EE42, QuickCheck::No),
    RangeRecord::new(0x1EE47, 0x1EE47, QuickCheck::No),
    RangeRecord::new(0x1EE49, 0x1EE49, QuickCheck::No),
    RangeRecord::new(0x1EE4B, 0x1EE4B, QuickCheck::No),
    RangeRecord::new(0x1EE4D, 0x1EE4F, QuickCheck::No),
    RangeRecord::new(0x1EE51, 0x1EE52, QuickCheck::No),
    RangeRecord::new(0x1EE54, 0x1EE54, QuickCheck::No),
    RangeRecord::new(0x1EE57, 0x1EE57, QuickCheck::No),
    RangeRecord::new(0x1EE59, 0x1EE59, QuickCheck::No),
    RangeRecord::new(0x1EE5B, 0x1EE5B, QuickCheck::No),
    RangeRecord::new(0x1EE5D, 0x1EE5D, QuickCheck::No),
    RangeRecord::new(0x1EE5F, 0x1EE5F, QuickCheck::No),
    RangeRecord::new(0x1EE61, 0x1EE62, QuickCheck::No),
    RangeRecord::new(0x1EE64, 0x1EE64, QuickCheck::No),
    RangeRecord::new(0x1EE67, 0x1EE6A, QuickCheck::No),
    RangeRecord::new(0x1EE6C, 0x1EE72, QuickCheck::No),
    RangeRecord::new(0x1EE74, 0x1EE77, QuickCheck::No),
    RangeRecord::new(0x1EE79, 0x1EE7C, QuickCheck::No),
    RangeRecord::new(0x1EE7E, 0x1EE7E, QuickCheck::No),
    RangeRecord::new(0x1EE80, 0x1EE89, QuickCheck::No),
    RangeRecord::new(0x1EE8B, 0x1EE9B, QuickCheck::No),
    RangeRecord::new(0x1EEA1, 0x1EEA3, QuickCheck::No),
    RangeRecord::new(0x1EEA5, 0x1EEA9, QuickCheck::No),
    RangeRecord::new(0x1EEAB, 0x1EEBB, QuickCheck::No),
    RangeRecord::new(0x1F100, 0x1F10A, QuickCheck::No),
    RangeRecord::new(0x1F110, 0x1F12E, QuickCheck::No),
    RangeRecord::new(0x1F130, 0x1F14F, QuickCheck::No),
    RangeRecord::new(0x1F16A, 0x1F16C, QuickCheck::No),
    RangeRecord::new(0x1F190, 0x1F190, QuickCheck::No),
    RangeRecord::new(0x1F200, 0x1F202, QuickCheck::No),
    RangeRecord::new(0x1F210, 0x1F23B, QuickCheck::No),
    RangeRecord::new(0x1F240, 0x1F248, QuickCheck::No),
    RangeRecord::new(0x1F250, 0x1F251, QuickCheck::No),
    RangeRecord::new(0x1FBF0, 0x1FBF9, QuickCheck::No),
    RangeRecord::new(0x2F800, 0x2FA1D, QuickCheck::No),
];

pub const CANONICAL_DECOMPOSITION: &[DecompositionRecord<'static>] = &[
    DecompositionRecord::new(0x00C0, DecompositionTag::Canonical, &[0x0041, 0x0300]),
    DecompositionRecord::new(0x00C1, DecompositionTag::Canonical, &[0x0041, 0x0301]),
    DecompositionRecord::new(0x00C2, DecompositionTag::Canonical, &[0x0041, 0x0302]),
    DecompositionRecord::new(0x00C3, DecompositionTag::Canonical, &[0x0041, 0x0303]),
    DecompositionRecord::new(0x00C4, DecompositionTag::Canonical, &[0x0041, 0x0308]),
    DecompositionRecord::new(0x00C5, DecompositionTag::Canonical, &[0x0041, 0x030A]),
    DecompositionRecord::new(0x00C7, DecompositionTag::Canonical, &[0x0043, 0x0327]),
    DecompositionRecord::new(0x00C8, DecompositionTag::Canonical, &[0x0045, 0x0300]),
    DecompositionRecord::new(0x00C9, DecompositionTag::Canonical, &[0x0045, 0x0301]),
    DecompositionRecord::new(0x00CA, DecompositionTag::Canonical, &[0x0045, 0x0302]),
    DecompositionRecord::new(0x00CB, DecompositionTag::Canonical, &[0x0045, 0x0308]),
    DecompositionRecord::new(0x00CC, DecompositionTag::Canonical, &[0x0049, 0x0300]),
    DecompositionRecord::new(0x00CD, DecompositionTag::Canonical, &[0x0049, 0x0301]),
    DecompositionRecord::new(0x00CE, DecompositionTag::Canonical, &[0x0049, 0x0302]),
    DecompositionRecord::new(0x00CF, DecompositionTag::Canonical, &[0x0049, 0x0308]),
    DecompositionRecord::new(0x00D1, DecompositionTag::Canonical, &[0x004E, 0x0303]),
    DecompositionRecord::new(0x00D2, DecompositionTag::Canonical, &[0x004F, 0x0300]),
    DecompositionRecord::new(0x00D3, DecompositionTag::Canonical, &[0x004F, 0x0301]),
    DecompositionRecord::new(0x00D4, DecompositionTag::Canonical, &[0x004F, 0x0302]),
    DecompositionRecord::new(0x00D5, DecompositionTag::Canonical, &[0x004F, 0x0303]),
    DecompositionRecord::new(0x00D6, DecompositionTag::Canonical, &[0x004F, 0x0308]),
    DecompositionRecord::new(0x00D9, DecompositionTag::Canonical, &[0x0055, 0x0300]),
    DecompositionRecord::new(0x00DA, DecompositionTag::Canonical, &[0x0055, 0x0301]),
    DecompositionRecord::new(0x00DB, DecompositionTag::Canonical, &[0x0055, 0x0302]),
    DecompositionRecord::new(0x00DC, DecompositionTag::Canonical, &[0x0055, 0x0308]),
    DecompositionRecord::new(0x00DD, DecompositionTag::Canonical, &[0x0059, 0x0301]),
    DecompositionRecord::new(0x00E0, DecompositionTag::Canonical, &[0x0061, 0x0300]),
    DecompositionRecord::new(0x00E1, DecompositionTag::Canonical, &[0x0061, 0x0301]),
    DecompositionRecord::new(0x00E2, DecompositionTag::Canonical, &[0x0061, 0x0302]),
    DecompositionRecord::new(0x00E3, DecompositionTag::Canonical, &[0x0061, 0x0303]),
    DecompositionRecord::new(0x00E4, DecompositionTag::Canonical, &[0x0061, 0x0308]),
    DecompositionRecord::new(0x00E5, DecompositionTag::Canonical, &[0x0061, 0x030A]),
    DecompositionRecord::new(0x00E7, DecompositionTag::Canonical, &[0x0063, 0x0327]),
    DecompositionRecord::new(0x00E8, DecompositionTag::Canonical, &[0x0065, 0x0300]),
    DecompositionRecord::new(0x00E9, DecompositionTag::Canonical, &[0x0065, 0x0301]),
    DecompositionRecord::new(0x00EA, DecompositionTag::Canonical, &[0x0065, 0x0302]),
    DecompositionRecord::new(0x00EB, DecompositionTag::Canonical, &[0x0065, 0x0308]),
    DecompositionRecord::new(0x00EC, DecompositionTag::Canonical, &[0x0069, 0x0300]),
    DecompositionRecord::new(0x00ED, DecompositionTag::Canonical, &[0x0069, 0x0301]),
    DecompositionRecord::new(0x00EE, DecompositionTag::Canonical, &[0x0069, 0x0302]),
    DecompositionRecord::new(0x00EF, DecompositionTag::Canonical, &[0x0069, 0x0308]),
    DecompositionRecord::new(0x00F1, DecompositionTag::Canonical, &[0x006E, 0x0303]),
    DecompositionRecord::new(0x00F2, DecompositionTag::Canonical, &[0x006F, 0x0300]),
    DecompositionRecord::new(0x00F3, DecompositionTag::Canonical, &[0x006F, 0x0301]),
    DecompositionRecord::new(0x00F4, DecompositionTag::Canonical, &[0x006F, 0x0302]),
    DecompositionRecord::new(0x00F5, DecompositionTag::Canonical, &[0x006F, 0x0303]),
    DecompositionRecord::new(0x00F6, DecompositionTag::Canonical, &[0x006F, 0x0308]),
    DecompositionRecord::new(0x00F9, DecompositionTag::Canonical, &[0x0075, 0x0300]),
    DecompositionRecord::new(0x00FA, DecompositionTag::Canonical, &[0x0075, 0x0301]),
    DecompositionRecord::new(0x00FB, DecompositionTag::Canonical, &[0x0075, 0x0302]),
    DecompositionRecord::new(0x00FC, DecompositionTag::Canonical, &[0x0075, 0x0308]),
    DecompositionRecord::new(0x00FD, DecompositionTag::Canonical, &[0x0079, 0x0301]),
    DecompositionRecord::new(0x00FF, DecompositionTag::Canonical, &[0x0079, 0x0308]),
    DecompositionRecord::new(0x0100, DecompositionTag::Canonical, &[0x0041, 0x0304]),
    DecompositionRecord::new(0x0101, DecompositionTag::Canonical, &[0x0061, 0x0304]),
    DecompositionRecord::new(0x0102, DecompositionTag::Canonical, &[0x0041, 0x0306]),
    DecompositionRecord::new(0x0103, DecompositionTag::Canonical, &[0x0061, 0x0306]),
    DecompositionRecord::new(0x0104, DecompositionTag::Canonical, &[0x0041, 0x0328]),
    DecompositionRecord::new(0x0105, DecompositionTag::Canonical, &[0x0061, 0x0328]),
    DecompositionRecord::new(0x0106, DecompositionTag::Canonical, &[0x0043, 0x0301]),
    DecompositionRecord::new(0x0107, DecompositionTag::Canonical, &[0x0063, 0x0301]),
    DecompositionRecord::new(0x0108, DecompositionTag::Canonical, &[0x0043, 0x0302]),
    DecompositionRecord::new(0x0109, DecompositionTag::Canonical, &[0x0063, 0x0302]),
    DecompositionRecord::new(0x010A, DecompositionTag::Canonical, &[0x0043, 0x0307]),
    DecompositionRecord::new(0x010B, DecompositionTag::Canonical, &[0x0063, 0x0307]),
    DecompositionRecord::new(0x010C, DecompositionTag::Canonical, &[0x0043, 0x030C]),
    DecompositionRecord::new(0x010D, DecompositionTag::Canonical, &[0x0063, 0x030C]),
    DecompositionRecord::new(0x010E, DecompositionTag::Canonical, &[0x0044, 0x030C]),
    DecompositionRecord::new(0x010F, DecompositionTag::Canonical, &[0x0064, 0x030C]),
    DecompositionRecord::new(0x0112, DecompositionTag::Canonical, &[0x0045, 0x0304]),
    DecompositionRecord::new(0x0113, DecompositionTag::Canonical, &[0x0065, 0x0304]),
    DecompositionRecord::new(0x0114, DecompositionTag::Canonical, &[0x0045, 0x0306]),
    DecompositionRecord::new(0x0115, DecompositionTag::Canonical, &[0x0065, 0x0306]),
    DecompositionRecord::new(0x0116, DecompositionTag::Canonical, &[0x0045, 0x0307]),
    DecompositionRecord::new(0x0117, DecompositionTag::Canonical, &[0x0065, 0x0307]),
    DecompositionRecord::new(0x0118, DecompositionTag::Canonical, &[0x0045, 0x0328]),
    DecompositionRecord::new(0x0119, DecompositionTag::Canonical, &[0x0065, 0x0328]),
    DecompositionRecord::new(0x011A, DecompositionTag::Canonical, &[0x0045, 0x030C]),
    DecompositionRecord::new(0x011B, DecompositionTag::Canonical, &[0x0065, 0x030C]),
    DecompositionRecord::new(0x011C, DecompositionTag::Canonical, &[0x0047, 0x0302]),
    DecompositionRecord::new(0x011D, DecompositionTag::Canonical, &[0x0067, 0x0302]),
    DecompositionRecord::new(0x011E, DecompositionTag::Canonical, &[0x0047, 0x0306]),
    DecompositionRecord::new(0x011F, DecompositionTag::Canonical, &[0x0067, 0x0306]),
    DecompositionRecord::new(0x0120, DecompositionTag::Canonical, &[0x0047, 0x0307]),
    DecompositionRecord::new(0x0121, DecompositionTag::Canonical, &[0x0067, 0x0307]),
    DecompositionRecord::new(0x0122, DecompositionTag::Canonical, &[0x0047, 0x0327]),
    DecompositionRecord::new(0x0123, DecompositionTag::Canonical, &[0x0067, 0x0327]),
    DecompositionRecord::new(0x0124, DecompositionTag::Canonical, &[0x0048, 0x0302]),
    DecompositionRecord::new(0x0125, DecompositionTag::Canonical, &[0x0068, 0x0302]),
    DecompositionRecord::new(0x0128, DecompositionTag::Canonical, &[0x0049, 0x0303]),
    DecompositionRecord::new(0x0129, DecompositionTag::Canonical, &[0x0069, 0x0303]),
    DecompositionRecord::new(0x012A, DecompositionTag::Canonical, &[0x0049, 0x0304]),
    DecompositionRecord::new(0x012B, DecompositionTag::Canonical, &[0x0069, 0x0304]),
    DecompositionRecord::new(0x012C, DecompositionTag::Canonical, &[0x0049, 0x0306]),
    DecompositionRecord::new(0x012D, DecompositionTag::Canonical, &[0x0069, 0x0306]),
    DecompositionRecord::new(0x012E, DecompositionTag::Canonical, &[0x0049, 0x0328]),
    DecompositionRecord::new(0x012F, DecompositionTag::Canonical, &[0x0069, 0x0328]),
    DecompositionRecord::new(0x0130, DecompositionTag::Canonical, &[0x0049, 0x0307]),
    DecompositionRecord::new(0x0134, DecompositionTag::Canonical, &[0x004A, 0x0302]),
    DecompositionRecord::new(0x0135, DecompositionTag::Canonical, &[0x006A, 0x0302]),
    DecompositionRecord::new(0x0136, DecompositionTag::Canonical, &[0x004B, 0x0327]),
    DecompositionRecord::new(0x0137, DecompositionTag::Canonical, &[0x006B, 0x0327]),
    DecompositionRecord::new(0x0139, DecompositionTag::Canonical, &[0x004C, 0x0301]),
    DecompositionRecord::new(0x013A, DecompositionTag::Canonical, &[0x006C, 0x0301]),
    DecompositionRecord::new(0x013B, DecompositionTag::Canonical, &[0x004C, 0x0327]),
    DecompositionRecord::new(0x013C, DecompositionTag::Canonical, &[0x006C, 0x0327]),
    DecompositionRecord::new(0x013D, DecompositionTag::Canonical, &[0x004C, 0x030C]),
    DecompositionRecord::new(0x013E, DecompositionTag::Canonical, &[0x006C, 0x030C]),
    DecompositionRecord::new(0x0143, DecompositionTag::Canonical, &[0x004E, 0x0301]),
    DecompositionRecord::new(0x0144, DecompositionTag::Canonical, &[0x006E, 0x0301]),
    DecompositionRecord::new(0x0145, DecompositionTag::Canonical, &[0x004E, 0x0327]),
    DecompositionRecord::new(0x0146, DecompositionTag::Canonical, &[0x006E, 0x0327]),
    DecompositionRecord::new(0x0147, DecompositionTag::Canonical, &[0x004E, 0x030C]),
    DecompositionRecord::new(0x0148, DecompositionTag::Canonical, &[0x006E, 0x030C]),
    DecompositionRecord::new(0x014C, DecompositionTag::Canonical, &[0x004F, 0x0304]),
    DecompositionRecord::new(0x014D, DecompositionTag::Canonical, &[0x006F, 0x0304]),
    DecompositionRecord::new(0x014E, DecompositionTag::Canonical, &[0x004F, 0x0306]),
    DecompositionRecord::new(0x014F, DecompositionTag::Canonical, &[0x006F, 0x0306]),
    DecompositionRecord::new(0x0150, DecompositionTag::Canonical, &[0x004F, 0x030B]),
    DecompositionRecord::new(0x0151, DecompositionTag::Canonical, &[0x006F, 0x030B]),
    DecompositionRecord::new(0x0154, DecompositionTag::Canonical, &[0x0052, 0x0301]),
    DecompositionRecord::new(0x0155, DecompositionTag::Canonical, &[0x0072, 0x0301]),
    DecompositionRecord::new(0x0156, DecompositionTag::Canonical, &[0x0052, 0x0327]),
    DecompositionRecord::new(0x0157, DecompositionTag::Canonical, &[0x0072, 0x0327]),
    DecompositionRecord::new(0x0158, DecompositionTag::Canonical, &[0x0052, 0x030C]),
    DecompositionRecord::new(0x0159, DecompositionTag::Canonical, &[0x0072, 0x030C]),
    DecompositionRecord::new(0x015A, DecompositionTag::Canonical, &[0x0053, 0x0301]),
    DecompositionRecord::new(0x015B, DecompositionTag::Canonical, &[0x0073, 0x0301]),
    DecompositionRecord::new(0x015C, DecompositionTag::Canonical, &[0x0053, 0x0302]),
    DecompositionRecord::new(0x015D, DecompositionTag::Canonical, &[0x0073, 0x0302]),
    DecompositionRecord::new(0x015E, DecompositionTag::Canonical, &[0x0053, 0x0327]),
    DecompositionRecord::new(0x015F, DecompositionTag::Canonical, &[0x0073, 0x0327]),
    DecompositionRecord::new(0x0160, DecompositionTag::Canonical, &[0x0053, 0x030C]),
    DecompositionRecord::new(0x0161, DecompositionTag::Canonical, &[0x0073, 0x030C]),
    DecompositionRecord::new(0x0162, DecompositionTag::Canonical, &[0x0054, 0x0327]),
    DecompositionRecord::new(0x0163, DecompositionTag::Canonical, &[0x0074, 0x0327]),
    DecompositionRecord::new(0x0164, DecompositionTag::Canonical, &[0x0054, 0x030C]),
    DecompositionRecord::new(0x0165, DecompositionTag::Canonical, &[0x0074, 0x030C]),
    DecompositionRecord::new(0x0168, DecompositionTag::Canonical, &[0x0055, 0x0303]),
    DecompositionRecord::new(0x0169, DecompositionTag::Canonical, &[0x0075, 0x0303]),
    DecompositionRecord::new(0x016A, DecompositionTag::Canonical, &[0x0055, 0x0304]),
    DecompositionRecord::new(0x016B, DecompositionTag::Canonical, &[0x0075, 0x0304]),
    DecompositionRecord::new(0x016C, DecompositionTag::Canonical, &[0x0055, 0x0306]),
    DecompositionRecord::new(0x016D, DecompositionTag::Canonical, &[0x0075, 0x0306]),
    DecompositionRecord::new(0x016E, DecompositionTag::Canonical, &[0x0055, 0x030A]),
    DecompositionRecord::new(0x016F, DecompositionTag::Canonical, &[0x0075, 0x030A]),
    DecompositionRecord::new(0x0170, DecompositionTag::Canonical, &[0x0055, 0x030B]),
    DecompositionRecord::new(0x0171, DecompositionTag::Canonical, &[0x0075, 0x030B]),
    DecompositionRecord::new(0x0172, DecompositionTag::Canonical, &[0x0055, 0x0328]),
    DecompositionRecord::new(0x0173, DecompositionTag::Canonical, &[0x0075, 0x0328]),
    DecompositionRecord::new(0x0174, DecompositionTag::Canonical, &[0x0057, 0x0302]),
    DecompositionRecord::new(0x0175, DecompositionTag::Canonical, &[0x0077, 0x0302]),
    DecompositionRecord::new(0x0176, DecompositionTag::Canonical, &[0x0059, 0x0302]),
    DecompositionRecord::new(0x0177, DecompositionTag::Canonical, &[0x0079, 0x0302]),
    DecompositionRecord::new(0x0178, DecompositionTag::Canonical, &[0x0059, 0x0308]),
    DecompositionRecord::new(0x0179, DecompositionTag::Canonical, &[0x005A, 0x0301]),
    DecompositionRecord::new(0x017A, DecompositionTag::Canonical, &[0x007A, 0x0301]),
    DecompositionRecord::new(0x017B, DecompositionTag::Canonical, &[0x005A, 0x0307]),
    DecompositionRecord::new(0x017C, DecompositionTag::Canonical, &[0x007A, 0x0307]),
    DecompositionRecord::new(0x017D, DecompositionTag::Canonical, &[0x005A, 0x030C]),
    DecompositionRecord::new(0x017E, DecompositionTag::Canonical, &[0x007A, 0x030C]),
    DecompositionRecord::new(0x01A0, DecompositionTag::Canonical, &[0x004F, 0x031B]),
    DecompositionRecord::new(0x01A1, DecompositionTag::Canonical, &[0x006F, 0x031B]),
    DecompositionRecord::new(0x01AF, DecompositionTag::Canonical, &[0x0055, 0x031B]),
    DecompositionRecord::new(0x01B0, DecompositionTag::Canonical, &[0x0075, 0x031B]),
    DecompositionRecord::new(0x01CD, DecompositionTag::Canonical, &[0x0041, 0x030C]),
    DecompositionRecord::new(0x01CE, DecompositionTag::Canonical, &[0x0061, 0x030C]),
    DecompositionRecord::new(0x01CF, DecompositionTag::Canonical, &[0x0049, 0x030C]),
    DecompositionRecord::new(0x01D0, DecompositionTag::Canonical, &[0x0069, 0x030C]),
    DecompositionRecord::new(0x01D1, DecompositionTag::Canonical, &[0x004F, 0x030C]),
    DecompositionRecord::new(0x01D2, DecompositionTag::Canonical, &[0x006F, 0x030C]),
    DecompositionRecord::new(0x01D3, DecompositionTag::Canonical, &[0x0055, 0x030C]),
    DecompositionRecord::new(0x01D4, DecompositionTag::Canonical, &[0x0075, 0x030C]),
    DecompositionRecord::new(0x01D5, DecompositionTag::Canonical, &[0x0055, 0x0308, 0x0304]),
    DecompositionRecord::new(0x01D6, DecompositionTag::Canonical, &[0x0075, 0x0308, 0x0304]),
    DecompositionRecord::new(0x01D7, DecompositionTag::Canonical, &[0x0055, 0x0308, 0x0301]),
    DecompositionRecord::new(0x01D8, DecompositionTag::Canonical, &[0x0075, 0x0308, 0x0301]),
    DecompositionRecord::new(0x01D9, DecompositionTag::Canonical, &[0x0055, 0x0308, 0x030C]),
    DecompositionRecord::new(0x01DA, DecompositionTag::Canonical, &[0x0075, 0x0308, 0x030C]),
    DecompositionRecord::new(0x01DB, DecompositionTag::Canonical, &[0x0055, 0x0308, 0x0300]),
    DecompositionRecord::new(0x01DC, DecompositionTag::Canonical, &[0x0075, 0x0308, 0x0300]),
    DecompositionRecord::new(0x01DE, DecompositionTag::Canonical, &[0x0041, 0x0308, 0x0304]),
    DecompositionRecord::new(0x01DF, DecompositionTag::Canonical, &[0x0061, 0x0308, 0x0304]),
    DecompositionRecord::new(0x01E0, DecompositionTag::Canonical, &[0x0041, 0x0307, 0x0304]),
    DecompositionRecord::new(0x01E1, DecompositionTag::Canonical, &[0x0061, 0x0307, 0x0304]),
    DecompositionRecord::new(0x01E2, DecompositionTag::Canonical, &[0x00C6, 0x0304]),
    DecompositionRecord::new(0x01E3, DecompositionTag::Canonical, &[0x00E6, 0x0304]),
    DecompositionRecord::new(0x01E6, DecompositionTag::Canonical, &[0x0047, 0x030C]),
    DecompositionRecord::new(0x01E7, DecompositionTag::Canonical, &[0x0067, 0x030C]),
    DecompositionRecord::new(0x01E8, DecompositionTag::Canonical, &[0x004B, 0x030C]),
    DecompositionRecord::new(0x01E9, DecompositionTag::Canonical, &[0x006B, 0x030C]),
    DecompositionRecord::new(0x01EA, DecompositionTag::Canonical, &[0x004F, 0x0328]),
    DecompositionRecord::new(0x01EB, DecompositionTag::Canonical, &[0x006F, 0x0328]),
    DecompositionRecord::new(0x01EC, DecompositionTag::Canonical, &[0x004F, 0x0328, 0x0304]),
    DecompositionRecord::new(0x01ED, DecompositionTag::Canonical, &[0x006F, 0x0328, 0x0304]),
    DecompositionRecord::new(0x01EE, DecompositionTag::Canonical, &[0x01B7, 0x030C]),
    DecompositionRecord::new(0x01EF, DecompositionTag::Canonical, &[0x0292, 0x030C]),
    DecompositionRecord::new(0x01F0, DecompositionTag::Canonical, &[0x006A, 0x030C]),
    DecompositionRecord::new(0x01F4, DecompositionTag::Canonical, &[0x0047, 0x0301]),
    DecompositionRecord::new(0x01F5, DecompositionTag::Canonical, &[0x0067, 0x0301]),
    DecompositionRecord::new(0x01F8, DecompositionTag::Canonical, &[0x004E, 0x0300]),
    DecompositionRecord::new(0x01F9, DecompositionTag::Canonical, &[0x006E, 0x0300]),
    DecompositionRecord::new(0x01FA, DecompositionTag::Canonical, &[0x0041, 0x030A, 0x0301]),
    DecompositionRecord::new(0x01FB, DecompositionTag::Canonical, &[0x0061, 0x030A, 0x0301]),
    DecompositionRecord::new(0x01FC, DecompositionTag::Canonical, &[0x00C6, 0x0301]),
    DecompositionRecord::new(0x01FD, DecompositionTag::Canonical, &[0x00E6, 0x0301]),
    DecompositionRecord::new(0x01FE, DecompositionTag::Canonical, &[0x00D8, 0x0301]),
    DecompositionRecord::new(0x01FF, DecompositionTag::Canonical, &[0x00F8, 0x0301]),
    DecompositionRecord::new(0x0200, DecompositionTag::Canonical, &[0x0041, 0x030F]),
    DecompositionRecord::new(0x0201, DecompositionTag::Canonical, &[0x0061, 0x030F]),
    DecompositionRecord::new(0x0202, DecompositionTag::Canonical, &[0x0041, 0x0311]),
    DecompositionRecord::new(0x0203, DecompositionTag::Canonical, &[0x0061, 0x0311]),
    DecompositionRecord::new(0x0204, DecompositionTag::Canonical, &[0x0045, 0x030F]),
    DecompositionRecord::new(0x0205, DecompositionTag::Canonical, &[0x0065, 0x030F]),
    DecompositionRecord::new(0x0206, DecompositionTag::Canonical, &[0x0045, 0x0311]),
    DecompositionRecord::new(0x0207, DecompositionTag::Canonical, &[0x0065, 0x0311]),
    DecompositionRecord::new(0x0208, DecompositionTag::Canonical, &[0x0049, 0x030F]),
    DecompositionRecord::new(0x0209, DecompositionTag::Canonical, &[0x0069, 0x030F]),
    DecompositionRecord::new(0x020A, DecompositionTag::Canonical, &[0x0049, 0x0311]),
    DecompositionRecord::new(0x020B, DecompositionTag::Canonical, &[0x0069, 0x0311]),
    DecompositionRecord::new(0x020C, DecompositionTag::Canonical, &[0x004F, 0x030F]),
    DecompositionRecord::new(0x020D, DecompositionTag::Canonical, &[0x006F, 0x030F]),
    DecompositionRecord::new(0x020E, DecompositionTag::Canonical, &[0x004F, 0x0311]),
    DecompositionRecord::new(0x020F, DecompositionTag::Canonical, &[0x006F, 0x0311]),
    DecompositionRecord::new(0x0210, DecompositionTag::Canonical, &[0x0052, 0x030F]),
    DecompositionRecord::new(0x0211, DecompositionTag::Canonical, &[0x0072, 0x030F]),
    DecompositionRecord::new(0x0212, DecompositionTag::Canonical, &[0x0052, 0x0311]),
    DecompositionRecord::new(0x0213, DecompositionTag::Canonical, &[0x0072, 0x0311]),
    DecompositionRecord::new(0x0214, DecompositionTag::Canonical, &[0x0055, 0x030F]),
    DecompositionRecord::new(0x0215, DecompositionTag::Canonical, &[0x0075, 0x030F]),
    DecompositionRecord::new(0x0216, DecompositionTag::Canonical, &[0x0055, 0x0311]),
    DecompositionRecord::new(0x0217, DecompositionTag::Canonical, &[0x0075, 0x0311]),
    DecompositionRecord::new(0x0218, DecompositionTag::Canonical, &[0x0053, 0x0326]),
    DecompositionRecord::new(0x0219, DecompositionTag::Canonical, &[0x0073, 0x0326]),
    DecompositionRecord::new(0x021A, DecompositionTag::Canonical, &[0x0054, 0x0326]),
    DecompositionRecord::new(0x021B, DecompositionTag::Canonical, &[0x0074, 0x0326]),
    DecompositionRecord::new(0x021E, DecompositionTag::Canonical, &[0x0048, 0x030C]),
    DecompositionRecord::new(0x021F, DecompositionTag::Canonical, &[0x0068, 0x030C]),
    DecompositionRecord::new(0x0226, DecompositionTag::Canonical, &[0x0041, 0x0307]),
    DecompositionRecord::new(0x0227, DecompositionTag::Canonical, &[0x0061, 0x0307]),
    DecompositionRecord::new(0x0228, DecompositionTag::Canonical, &[0x0045, 0x0327]),
    DecompositionRecord::new(0x0229, DecompositionTag::Canonical, &[0x0065, 0x0327]),
    DecompositionRecord::new(0x022A, DecompositionTag::Canonical, &[0x004F, 0x0308, 0x0304]),
    DecompositionRecord::new(0x022B, DecompositionTag::Canonical, &[0x006F, 0x0308, 0x0304]),
    DecompositionRecord::new(0x022C, DecompositionTag::Canonical, &[0x004F, 0x0303, 0x0304]),
    DecompositionRecord::new(0x022D, DecompositionTag::Canonical, &[0x006F, 0x0303, 0x0304]),
    DecompositionRecord::new(0x022E, DecompositionTag::Canonical, &[0x004F, 0x0307]),
    DecompositionRecord::new(0x022F, DecompositionTag::Canonical, &[0x006F, 0x0307]),
    DecompositionRecord::new(0x0230, DecompositionTag::Canonical, &[0x004F, 0x0307, 0x0304]),
    DecompositionRecord::new(0x0231, DecompositionTag::Canonical, &[0x006F, 0x0307, 0x0304]),
    DecompositionRecord::new(0x0232, DecompositionTag::Canonical, &[0x0059, 0x0304]),
    DecompositionRecord::new(0x0233, DecompositionTag::Canonical, &[0x0079, 0x0304]),
    DecompositionRecord::new(0x0340, DecompositionTag::Canonical, &[0x0300]),
    DecompositionRecord::new(0x0341, DecompositionTag::Canonical, &[0x0301]),
    DecompositionRecord::new(0x0343, DecompositionTag::Canonical, &[0x0313]),
    DecompositionRecord::new(0x0344, DecompositionTag::Canonical, &[0x0308, 0x0301]),
    DecompositionRecord::new(0x0374, DecompositionTag::Canonical, &[0x02B9]),
    DecompositionRecord::new(0x037E, DecompositionTag::Canonical, &[0x003B]),
    DecompositionRecord::new(0x0385, DecompositionTag::Canonical, &[0x00A8, 0x0301]),
    DecompositionRecord::new(0x0386, DecompositionTag::Canonical, &[0x0391, 0x0301]),
    DecompositionRecord::new(0x0387, DecompositionTag::Canonical, &[0x00B7]),
    DecompositionRecord::new(0x0388, DecompositionTag::Canonical, &[0x0395, 0x0301]),
    DecompositionRecord::new(0x0389, DecompositionTag::Canonical, &[0x0397, 0x0301]),
    DecompositionRecord::new(0x038A, DecompositionTag::Canonical, &[0x0399, 0x0301]),
    DecompositionRecord::new(0x038C, DecompositionTag::Canonical, &[0x039F, 0x0301]),
    DecompositionRecord::new(0x038E, DecompositionTag::Canonical, &[0x03A5, 0x0301]),
    DecompositionRecord::new(0x038F, DecompositionTag::Canonical, &[0x03A9, 0x0301]),
    DecompositionRecord::new(0x0390, DecompositionTag::Canonical, &[0x03B9, 0x0308, 0x0301]),
    DecompositionRecord::new(0x03AA, DecompositionTag::Canonical, &[0x0399, 0x0308]),
    DecompositionRecord::new(0x03AB, DecompositionTag::Canonical, &[0x03A5, 0x0308]),
    DecompositionRecord::new(0x03AC, DecompositionTag::Canonical, &[0x03B1, 0x0301]),
    DecompositionRecord::new(0x03AD, DecompositionTag::Canonical, &[0x03B5, 0x0301]),
    DecompositionRecord::new(0x03AE, DecompositionTag::Canonical, &[0x03B7, 0x0301]),
    DecompositionRecord::new(0x03AF, DecompositionTag::Canonical, &[0x03B9, 0x0301]),
    DecompositionRecord::new(0x03B0, DecompositionTag::Canonical, &[0x03C5, 0x0308, 0x0301]),
    DecompositionRecord::new(0x03CA, DecompositionTag::Canonical, &[0x03B9, 0x0308]),
    DecompositionRecord::new(0x03CB, DecompositionTag::Canonical, &[0x03C5, 0x0308]),
    DecompositionRecord::new(0x03CC, DecompositionTag::Canonical, &[0x03BF, 0x0301]),
    DecompositionRecord::new(0x03CD, DecompositionTag::Canonical, &[0x03C5, 0x0301]),
    DecompositionRecord::new(0x03CE, DecompositionTag::Canonical, &[0x03C9, 0x0301]),
    DecompositionRecord::new(0x03D3, DecompositionTag::Canonical, &[0x03D2, 0x0301]),
    DecompositionRecord::new(0x03D4, DecompositionTag::Canonical, &[0x03D2, 0x0308]),
    DecompositionRecord::new(0x0400, DecompositionTag::Canonical, &[0x0415, 0x0300]),
    DecompositionRecord::new(0x0401, DecompositionTag::Canonical, &[0x0415, 0x0308]),
    DecompositionRecord::new(0x0403, DecompositionTag::Canonical, &[0x0413, 0x0301]),
    DecompositionRecord::new(0x0407, DecompositionTag::Canonical, &[0x0406, 0x0308]),
    DecompositionRecord::new(0x040C, DecompositionTag::Canonical, &[0x041A, 0x0301]),
    DecompositionRecord::new(0x040D, DecompositionTag::Canonical, &[0x0418, 0x0300]),
    DecompositionRecord::new(0x040E, DecompositionTag::Canonical, &[0x0423, 0x0306]),
    DecompositionRecord::new(0x0419, DecompositionTag::Canonical, &[0x0418, 0x0306]),
    DecompositionRecord::new(0x0439, DecompositionTag::Canonical, &[0x0438, 0x0306]),
    DecompositionRecord::new(0x0450, DecompositionTag::Canonical, &[0x0435, 0x0300]),
    DecompositionRecord::new(0x0451, DecompositionTag::Canonical, &[0x0435, 0x0308]),
    DecompositionRecord::new(0x0453, DecompositionTag::Canonical, &[0x0433, 0x0301]),
    DecompositionRecord::new(0x0457, DecompositionTag::Canonical, &[0x0456, 0x0308]),
    DecompositionRecord::new(0x045C, DecompositionTag::Canonical, &[0x043A, 0x0301]),
    DecompositionRecord::new(0x045D, DecompositionTag::Canonical, &[0x0438, 0x0300]),
    DecompositionRecord::new(0x045E, DecompositionTag::Canonical, &[0x0443, 0x0306]),
    DecompositionRecord::new(0x0476, DecompositionTag::Canonical, &[0x0474, 0x030F]),
    DecompositionRecord::new(0x0477, DecompositionTag::Canonical, &[0x0475, 0x030F]),
    DecompositionRecord::new(0x04C1, DecompositionTag::Canonical, &[0x0416, 0x0306]),
    DecompositionRecord::new(0x04C2, DecompositionTag::Canonical, &[0x0436, 0x0306]),
    DecompositionRecord::new(0x04D0, DecompositionTag::Canonical, &[0x0410, 0x0306]),
    DecompositionRecord::new(0x04D1, DecompositionTag::Canonical, &[0x0430, 0x0306]),
    DecompositionRecord::new(0x04D2, DecompositionTag::Canonical, &[0x0410, 0x0308]),
    DecompositionRecord::new(0x04D3, DecompositionTag::Canonical, &[0x0430, 0x0308]),
    DecompositionRecord::new(0x04D6, DecompositionTag::Canonical, &[0x0415, 0x0306]),
    DecompositionRecord::new(0x04D7, DecompositionTag::Canonical, &[0x0435, 0x0306]),
    DecompositionRecord::new(0x04DA, DecompositionTag::Canonical, &[0x04D8, 0x0308]),
    DecompositionRecord::new(0x04DB, DecompositionTag::Canonical, &[0x04D9, 0x0308]),
    DecompositionRecord::new(0x04DC, DecompositionTag::Canonical, &[0x0416, 0x0308]),
    DecompositionRecord::new(0x04DD, DecompositionTag::Canonical, &[0x0436, 0x0308]),
    DecompositionRecord::new(0x04DE, DecompositionTag::Canonical, &[0x0417, 0x0308]),
    DecompositionRecord::new(0x04DF, DecompositionTag::Canonical, &[0x0437, 0x0308]),
    DecompositionRecord::new(0x04E2, DecompositionTag::Canonical, &[0x0418, 0x0304]),
    DecompositionRecord::new(0x04E3, DecompositionTag::Canonical, &[0x0438, 0x0304]),
    DecompositionRecord::new(0x04E4, DecompositionTag::Canonical, &[0x0418, 0x0308]),
    DecompositionRecord::new(0x04E5, DecompositionTag::Canonical, &[0x0438, 0x0308]),
    DecompositionRecord::new(0x04E6, DecompositionTag::Canonical, &[0x041E, 0x0308]),
    DecompositionRecord::new(0x04E7, DecompositionTag::Canonical, &[0x043E, 0x0308]),
    DecompositionRecord::new(0x04EA, DecompositionTag::Canonical, &[0x04E8, 0x0308]),
    DecompositionRecord::new(0x04EB, DecompositionTag::Canonical, &[0x04E9, 0x0308]),
    DecompositionRecord::new(0x04EC, DecompositionTag::Canonical, &[0x042D, 0x0308]),
    DecompositionRecord::new(0x04ED, DecompositionTag::Canonical, &[0x044D, 0x0308]),
    DecompositionRecord::new(0x04EE, DecompositionTag::Canonical, &[0x0423, 0x0304]),
    DecompositionRecord::new(0x04EF, DecompositionTag::Canonical, &[0x0443, 0x0304]),
    DecompositionRecord::new(0x04F0, DecompositionTag::Canonical, &[0x0423, 0x0308]),
    DecompositionRecord::new(0x04F1, DecompositionTag::Canonical, &[0x0443, 0x0308]),
    DecompositionRecord::new(0x04F2, DecompositionTag::Canonical, &[0x0423, 0x030B]),
    DecompositionRecord::new(0x04F3, DecompositionTag::Canonical, &[0x0443, 0x030B]),
    DecompositionRecord::new(0x04F4, DecompositionTag::Canonical, &[0x0427, 0x0308]),
    DecompositionRecord::new(0x04F5, DecompositionTag::Canonical, &[0x0447, 0x0308]),
    DecompositionRecord::new(0x04F8, DecompositionTag::Canonical, &[0x042B, 0x0308]),
    DecompositionRecord::new(0x04F9, DecompositionTag::Canonical, &[0x044B, 0x0308]),
    DecompositionRecord::new(0x0622, DecompositionTag::Canonical, &[0x0627, 0x0653]),
    DecompositionRecord::new(0x0623, DecompositionTag::Canonical, &[0x0627, 0x0654]),
    DecompositionRecord::new(0x0624, DecompositionTag::Canonical, &[0x0648, 0x0654]),
    DecompositionRecord::new(0x0625, DecompositionTag::Canonical, &[0x0627, 0x0655]),
    DecompositionRecord::new(0x0626, DecompositionTag::Canonical, &[0x064A, 0x0654]),
    DecompositionRecord::new(0x06C0, DecompositionTag::Canonical, &[0x06D5, 0x0654]),
    DecompositionRecord::new(0x06C2, DecompositionTag::Canonical, &[0x06C1, 0x0654]),
    DecompositionRecord::new(0x06D3, DecompositionTag::Canonical, &[0x06D2, 0x0654]),
    DecompositionRecord::new(0x0929, DecompositionTag::Canonical, &[0x0928, 0x093C]),
    DecompositionRecord::new(0x0931, DecompositionTag::Canonical, &[0x0930, 0x093C]),
    DecompositionRecord::new(0x0934, DecompositionTag::Canonical, &[0x0933, 0x093C]),
    DecompositionRecord::new(0x0958, DecompositionTag::Canonical, &[0x0915, 0x093C]),
    DecompositionRecord::new(0x0959, DecompositionTag::Canonical, &[0x0916, 0x093C]),
    DecompositionRecord::new(0x095A, DecompositionTag::Canonical, &[0x0917, 0x093C]),
    DecompositionRecord::new(0x095B, DecompositionTag::Canonical, &[0x091C, 0x093C]),
    DecompositionRecord::new(0x095C, DecompositionTag::Canonical, &[0x0921, 0x093C]),
    DecompositionRecord::new(0x095D, DecompositionTag::Canonical, &[0x0922, 0x093C]),
    DecompositionRecord::new(0x095E, DecompositionTag::Canonical, &[0x092B, 0x093C]),
    DecompositionRecord::new(0x095F, DecompositionTag::Canonical, &[0x092F, 0x093C]),
    DecompositionRecord::new(0x09CB, DecompositionTag::Canonical, &[0x09C7, 0x09BE]),
    DecompositionRecord::new(0x09CC, DecompositionTag::Canonical, &[0x09C7, 0x09D7]),
    DecompositionRecord::new(0x09DC, DecompositionTag::Canonical, &[0x09A1, 0x09BC]),
    DecompositionRecord::new(0x09DD, DecompositionTag::Canonical, &[0x09A2, 0x09BC]),
    DecompositionRecord::new(0x09DF, DecompositionTag::Canonical, &[0x09AF, 0x09BC]),
    DecompositionRecord::new(0x0A33, DecompositionTag::Canonical, &[0x0A32, 0x0A3C]),
    DecompositionRecord::new(0x0A36, DecompositionTag::Canonical, &[0x0A38, 0x0A3C]),
    DecompositionRecord::new(0x0A59, DecompositionTag::Canonical, &[0x0A16, 0x0A3C]),
    DecompositionRecord::new(0x0A5A, DecompositionTag::Canonical, &[0x0A17, 0x0A3C]),
    DecompositionRecord::new(0x0A5B, DecompositionTag::Canonical, &[0x0A1C, 0x0A3C]),
    DecompositionRecord::new(0x0A5E, DecompositionTag::Canonical, &[0x0A2B, 0x0A3C]),
    DecompositionRecord::new(0x0B48, DecompositionTag::Canonical, &[0x0B47, 0x0B56]),
    DecompositionRecord::new(0x0B4B, DecompositionTag::Canonical, &[0x0B47, 0x0B3E]),
    DecompositionRecord::new(0x0B4C, DecompositionTag::Canonical, &[0x0B47, 0x0B57]),
    DecompositionRecord::new(0x0B5C, DecompositionTag::Canonical, &[0x0B21, 0x0B3C]),
    DecompositionRecord::new(0x0B5D, DecompositionTag::Canonical, &[0x0B22, 0x0B3C]),
    DecompositionRecord::new(0x0B94, DecompositionTag::Canonical, &[0x0B92, 0x0BD7]),
    DecompositionRecord::new(0x0BCA, DecompositionTag::Canonical, &[0x0BC6, 0x0BBE]),
    DecompositionRecord::new(0x0BCB, DecompositionTag::Canonical, &[0x0BC7, 0x0BBE]),
    DecompositionRecord::new(0x0BCC, DecompositionTag::Canonical, &[0x0BC6, 0x0BD7]),
    DecompositionRecord::new(0x0C48, DecompositionTag::Canonical, &[0x0C46, 0x0C56]),
    DecompositionRecord::new(0x0CC0, DecompositionTag::Canonical, &[0x0CBF, 0x0CD5]),
    DecompositionRecord::new(0x0CC7, DecompositionTag::Canonical, &[0x0CC6, 0x0CD5]),
    DecompositionRecord::new(0x0CC8, DecompositionTag::Canonical, &[0x0CC6, 0x0CD6]),
    DecompositionRecord::new(0x0CCA, DecompositionTag::Canonical, &[0x0CC6, 0x0CC2]),
    DecompositionRecord::new(0x0CCB, DecompositionTag::Canonical, &[0x0CC6, 0x0CC2, 0x0CD5]),
    DecompositionRecord::new(0x0D4A, DecompositionTag::Canonical, &[0x0D46, 0x0D3E]),
    DecompositionRecord::new(0x0D4B, DecompositionTag::Canonical, &[0x0D47, 0x0D3E]),
    DecompositionRecord::new(0x0D4C, DecompositionTag::Canonical, &[0x0D46, 0x0D57]),
    DecompositionRecord::new(0x0DDA, DecompositionTag::Canonical, &[0x0DD9, 0x0DCA]),
    DecompositionRecord::new(0x0DDC, DecompositionTag::Canonical, &[0x0DD9, 0x0DCF]),
    DecompositionRecord::new(0x0DDD, DecompositionTag::Canonical, &[0x0DD9, 0x0DCF, 0x0DCA]),
    DecompositionRecord::new(0x0DDE, DecompositionTag::Canonical, &[0x0DD9, 0x0DDF]),
    DecompositionRecord::new(0x0F43, DecompositionTag::Canonical, &[0x0F42, 0x0FB7]),
    DecompositionRecord::new(0x0F4D, DecompositionTag::Canonical, &[0x0F4C, 0x0FB7]),
    DecompositionRecord::new(0x0F52, DecompositionTag::Canonical, &[0x0F51, 0x0FB7]),
    DecompositionRecord::new(0x0F57, DecompositionTag::Canonical, &[0x0F56, 0x0FB7]),
    DecompositionRecord::new(0x0F5C, DecompositionTag::Canonical, &[0x0F5B, 0x0FB7]),
    DecompositionRecord::new(0x0F69, DecompositionTag::Canonical, &[0x0F40, 0x0FB5]),
    DecompositionRecord::new(0x0F73, DecompositionTag::Canonical, &[0x0F71, 0x0F72]),
    DecompositionRecord::new(0x0F75, DecompositionTag::Canonical, &[0x0F71, 0x0F74]),
    DecompositionRecord::new(0x0F76, DecompositionTag::Canonical, &[0x0FB2, 0x0F80]),
    DecompositionRecord::new(0x0F78, DecompositionTag::Canonical, &[0x0FB3, 0x0F80]),
    DecompositionRecord::new(0x0F81, DecompositionTag::Canonical, &[0x0F71, 0x0F80]),
    DecompositionRecord::new(0x0F93, DecompositionTag::Canonical, &[0x0F92, 0x0FB7]),
    DecompositionRecord::new(0x0F9D, DecompositionTag::Canonical, &[0x0F9C, 0x0FB7]),
    DecompositionRecord::new(0x0FA2, DecompositionTag::Canonical, &[0x0FA1, 0x0FB7]),
    DecompositionRecord::new(0x0FA7, DecompositionTag::Canonical, &[0x0FA6, 0x0FB7]),
    DecompositionRecord::new(0x0FAC, DecompositionTag::Canonical, &[0x0FAB, 0x0FB7]),
    DecompositionRecord::new(0x0FB9, DecompositionTag::Canonical, &[0x0F90, 0x0FB5]),
    DecompositionRecord::new(0x1026, DecompositionTag::Canonical, &[0x1025, 0x102E]),
    DecompositionRecord::new(0x1B06, DecompositionTag::Canonical, &[0x1B05, 0x1B35]),
    DecompositionRecord::new(0x1B08, DecompositionTag::Canonical, &[0x1B07, 0x1B35]),
    DecompositionRecord::new(0x1B0A, DecompositionTag::Canonical, &[0x1B09, 0x1B35]),
    DecompositionRecord::new(0x1B0C, DecompositionTag::Canonical, &[0x1B0B, 0x1B35]),
    DecompositionRecord::new(0x1B0E, DecompositionTag::Canonical, &[0x1B0D, 0x1B35]),
    DecompositionRecord::new(0x1B12, DecompositionTag::Canonical, &[0x1B11, 0x1B35]),
    DecompositionRecord::new(0x1B3B, DecompositionTag::Canonical, &[0x1B3A, 0x1B35]),
    DecompositionRecord::new(0x1B3D, DecompositionTag::Canonical, &[0x1B3C, 0x1B35]),
    DecompositionRecord::new(0x1B40, DecompositionTag::Canonical, &[0x1B3E, 0x1B35]),
    DecompositionRecord::new(0x1B41, DecompositionTag::Canonical, &[0x1B3F, 0x1B35]),
    DecompositionRecord::new(0x1B43, DecompositionTag::Canonical, &[0x1B42, 0x1B35]),
    DecompositionRecord::new(0x1E00, DecompositionTag::Canonical, &[0x0041, 0x0325]),
    DecompositionRecord::new(0x1E01, DecompositionTag::Canonical, &[0x0061, 0x0325]),
    DecompositionRecord::new(0x1E02, DecompositionTag::Canonical, &[0x0042, 0x0307]),
    DecompositionRecord::new(0x1E03, DecompositionTag::Canonical, &[0x0062, 0x0307]),
    DecompositionRecord::new(0x1E04, DecompositionTag::Canonical, &[0x0042, 0x0323]),
    DecompositionRecord::new(0x1E05, DecompositionTag::Canonical, &[0x0062, 0x0323]),
    DecompositionRecord::new(0x1E06, DecompositionTag::Canonical, &[0x0042, 0x0331]),
    DecompositionRecord::new(0x1E07, DecompositionTag::Canonical, &[0x0062, 0x0331]),
    DecompositionRecord::new(0x1E08, DecompositionTag::Canonical, &[0x0043, 0x0327, 0x0301]),
    DecompositionRecord::new(0x1E09, DecompositionTag::Canonical, &[0x0063, 0x0327, 0x0301]),
    DecompositionRecord::new(0x1E0A, DecompositionTag::Canonical, &[0x0044, 0x0307]),
    DecompositionRecord::new(0x1E0B, DecompositionTag::Canonical, &[0x0064, 0x0307]),
    DecompositionRecord::new(0x1E0C, DecompositionTag::Canonical, &[0x0044, 0x0323]),
    DecompositionRecord::new(0x1E0D, DecompositionTag::Canonical, &[0x0064, 0x0323]),
    DecompositionRecord::new(0x1E0E, DecompositionTag::Canonical, &[0x0044, 0x0331]),
    DecompositionRecord::new(0x1E0F, DecompositionTag::Canonical, &[0x0064, 0x0331]),
    DecompositionRecord::new(0x1E10, DecompositionTag::Canonical, &[0x0044, 0x0327]),
    DecompositionRecord::new(0x1E11, DecompositionTag::Canonical, &[0x0064, 0x0327]),
    DecompositionRecord::new(0x1E12, DecompositionTag::Canonical, &[0x0044, 0x032D]),
    DecompositionRecord::new(0x1E13, DecompositionTag::Canonical, &[0x0064, 0x032D]),
    DecompositionRecord::new(0x1E14, DecompositionTag::Canonical, &[0x0045, 0x0304, 0x0300]),
    DecompositionRecord::new(0x1E15, DecompositionTag::Canonical, &[0x0065, 0x0304, 0x0300]),
    DecompositionRecord::new(0x1E16, DecompositionTag::Canonical, &[0x0045, 0x0304, 0x0301]),
    DecompositionRecord::new(0x1E17, DecompositionTag::Canonical, &[0x0065, 0x0304, 0x0301]),
    DecompositionRecord::new(0x1E18, DecompositionTag::Canonical, &[0x0045, 0x032D]),
    DecompositionRecord::new(0x1E19, DecompositionTag::Canonical, &[0x0065, 0x032D]),
    DecompositionRecord::new(0x1E1A, DecompositionTag::Canonical, &[0x0045, 0x0330]),
    DecompositionRecord::new(0x1E1B, DecompositionTag::Canonical, &[0x0065, 0x0330]),
    DecompositionRecord::new(0x1E1C, DecompositionTag::Canonical, &[0x0045, 0x0327, 0x0306]),
    DecompositionRecord::new(0x1E1D, DecompositionTag::Canonical, &[0x0065, 0x0327, 0x0306]),
    DecompositionRecord::new(0x1E1E, DecompositionTag::Canonical, &[0x0046, 0x0307]),
    DecompositionRecord::new(0x1E1F, DecompositionTag::Canonical, &[0x0066, 0x0307]),
    DecompositionRecord::new(0x1E20, DecompositionTag::Canonical, &[0x0047, 0x0304]),
    DecompositionRecord::new(0x1E21, DecompositionTag::Canonical, &[0x0067, 0x0304]),
    DecompositionRecord::new(0x1E22, DecompositionTag::Canonical, &[0x0048, 0x0307]),
    DecompositionRecord::new(0x1E23, DecompositionTag::Canonical, &[0x0068, 0x0307]),
    DecompositionRecord::new(0x1E24, DecompositionTag::Canonical, &[0x0048, 0x0323]),
    DecompositionRecord::new(0x1E25, DecompositionTag::Canonical, &[0x0068, 0x0323]),
    DecompositionRecord::new(0x1E26, DecompositionTag::Canonical, &[0x0048, 0x0308]),
    DecompositionRecord::new(0x1E27, DecompositionTag::Canonical, &[0x0068, 0x0308]),
    DecompositionRecord::new(0x1E28, DecompositionTag::Canonical, &[0x0048, 0x0327]),
    DecompositionRecord::new(0x1E29, DecompositionTag::Canonical, &[0x0068, 0x0327]),
    DecompositionRecord::new(0x1E2A, DecompositionTag::Canonical, &[0x0048, 0x032E]),
    DecompositionRecord::new(0x1E2B, DecompositionTag::Canonical, &[0x0068, 0x032E]),
    DecompositionRecord::new(0x1E2C, DecompositionTag::Canonical, &[0x0049, 0x0330]),
    DecompositionRecord::new(0x1E2D, DecompositionTag::Canonical, &[0x0069, 0x0330]),
    DecompositionRecord::new(0x1E2E, DecompositionTag::Canonical, &[0x0049, 0x0308, 0x0301]),
    DecompositionRecord::new(0x1E2F, DecompositionTag::Canonical, &[0x0069, 0x0308, 0x0301]),
    DecompositionRecord::new(0x1E30, DecompositionTag::Canonical, &[0x004B, 0x0301]),
    DecompositionRecord::new(0x1E31, DecompositionTag::Canonical, &[0x006B, 0x0301]),
    DecompositionRecord::new(0x1E32, DecompositionTag::Canonical, &[0x004B, 0x0323]),
    DecompositionRecord::new(0x1E33, DecompositionTag::Canonical, &[0x006B, 0x0323]),
    DecompositionRecord::new(0x1E34, DecompositionTag::Canonical, &[0x004B, 0x0331]),
    DecompositionRecord::new(0x1E35, DecompositionTag::Canonical, &[0x006B, 0x0331]),
    DecompositionRecord::new(0x1E36, DecompositionTag::Canonical, &[0x004C, 0x0323]),
    DecompositionRecord::new(0x1E37, DecompositionTag::Canonical, &[0x006C, 0x0323]),
    DecompositionRecord::new(0x1E38, DecompositionTag::Canonical, &[0x004C, 0x0323, 0x0304]),
    DecompositionRecord::new(0x1E39, DecompositionTag::Canonical, &[0x006C, 0x0323, 0x0304]),
    DecompositionRecord::new(0x1E3A, DecompositionTag::Canonical, &[0x004C, 0x0331]),
    DecompositionRecord::new(0x1E3B, DecompositionTag::Canonical, &[0x006C, 0x0331]),
    DecompositionRecord::new(0x1E3C, DecompositionTag::Canonical, &[0x004C, 0x032D]),
    DecompositionRecord::new(0x1E3D, DecompositionTag::Canonical, &[0x006C, 0x032D]),
    DecompositionRecord::new(0x1E3E, DecompositionTag::Canonical, &[0x004D, 0x0301]),
    DecompositionRecord::new(0x1E3F, DecompositionTag::Canonical, &[0x006D, 0x0301]),
    DecompositionRecord::new(0x1E40, DecompositionTag::Canonical, &[0x004D, 0x0307]),
    DecompositionRecord::new(0x1E41, DecompositionTag::Canonical, &[0x006D, 0x0307]),
    DecompositionRecord::new(0x1E42, DecompositionTag::Canonical, &[0x004D, 0x0323]),
    DecompositionRecord::new(0x1E43, DecompositionTag::Canonical, &[0x006D, 0x0323]),
    DecompositionRecord::new(0x1E44, DecompositionTag::Canonical, &[0x004E, 0x0307]),
    DecompositionRecord::new(0x1E45, DecompositionTag::Canonical, &[0x006E, 0x0307]),
    DecompositionRecord::new(0x1E46, DecompositionTag::Canonical, &[0x004E, 0x0323]),
    DecompositionRecord::new(0x1E47, DecompositionTag::Canonical, &[0x006E, 0x0323]),
    DecompositionRecord::new(0x1E48, DecompositionTag::Canonical, &[0x004E, 0x0331]),
    DecompositionRecord::new(0x1E49, DecompositionTag::Canonical, &[0x006E, 0x0331]),
    DecompositionRecord::new(0x1E4A, DecompositionTag::Canonical, &[0x004E, 0x032D]),
    DecompositionRecord::new(0x1E4B, DecompositionTag::Canonical, &[0x006E, 0x032D]),
    DecompositionRecord::new(0x1E4C, DecompositionTag::Canonical, &[0x004F, 0x0303, 0x0301]),
    DecompositionRecord::new(0x1E4D, DecompositionTag::Canonical, &[0x006F, 0x0303, 0x0301]),
    DecompositionRecord::new(0x1E4E, DecompositionTag::Canonical, &[0x004F, 0x0303, 0x0308]),
    DecompositionRecord::new(0x1E4F, DecompositionTag::Canonical, &[0x006F, 0x0303, 0x0308]),
    DecompositionRecord::new(0x1E50, DecompositionTag::Canonical, &[0x004F, 0x0304, 0x0300]),
    DecompositionRecord::new(0x1E51, DecompositionTag::Canonical, &[0x006F, 0x0304, 0x0300]),
    DecompositionRecord::new(0x1E52, DecompositionTag::Canonical, &[0x004F, 0x0304, 0x0301]),
    DecompositionRecord::new(0x1E53, DecompositionTag::Canonical, &[0x006F, 0x0304, 0x0301]),
    DecompositionRecord::new(0x1E54, DecompositionTag::Canonical, &[0x0050, 0x0301]),
    DecompositionRecord::new(0x1E55, DecompositionTag::Canonical, &[0x0070, 0x0301]),
    DecompositionRecord::new(0x1E56, DecompositionTag::Canonical, &[0x0050, 0x0307]),
    DecompositionRecord::new(0x1E57, DecompositionTag::Canonical, &[0x0070, 0x0307]),
    DecompositionRecord::new(0x1E58, DecompositionTag::Canonical, &[0x0052, 0x0307]),
    DecompositionRecord::new(0x1E59, DecompositionTag::Canonical, &[0x0072, 0x0307]),
    DecompositionRecord::new(0x1E5A, DecompositionTag::Canonical, &[0x0052, 0x0323]),
    DecompositionRecord::new(0x1E5B, DecompositionTag::Canonical, &[0x0072, 0x0323]),
    DecompositionRecord::new(0x1E5C, DecompositionTag::Canonical, &[0x0052, 0x0323, 0x0304]),
    DecompositionRecord::new(0x1E5D, DecompositionTag::Canonical, &[0x0072, 0x0323, 0x0304]),
    DecompositionRecord::new(0x1E5E, DecompositionTag::Canonical, &[0x0052, 0x0331]),
    DecompositionRecord::new(0x1E5F, DecompositionTag::Canonical, &[0x0072, 0x0331]),
    DecompositionRecord::new(0x1E60, DecompositionTag::Canonical, &[0x0053, 0x0307]),
    DecompositionRecord::new(0x1E61, DecompositionTag::Canonical, &[0x0073, 0x0307]),
    DecompositionRecord::new(0x1E62, DecompositionTag::Canonical, &[0x0053, 0x0323]),
    DecompositionRecord::new(0x1E63, DecompositionTag::Canonical, &[0x0073, 0x0323]),
    DecompositionRecord::new(0x1E64, DecompositionTag::Canonical, &[0x0053, 0x0301, 0x0307]),
    DecompositionRecord::new(0x1E65, DecompositionTag::Canonical, &[0x0073, 0x0301, 0x0307]),
    DecompositionRecord::new(0x1E66, DecompositionTag::Canonical, &[0x0053, 0x030C, 0x0307]),
    DecompositionRecord::new(0x1E67, DecompositionTag::Canonical, &[0x0073, 0x030C, 0x0307]),
    DecompositionRecord::new(0x1E68, DecompositionTag::Canonical, &[0x0053, 0x0323, 0x0307]),
    DecompositionRecord::new(0x1E69, DecompositionTag::Canonical, &[0x0073, 0x0323, 0x0307]),
    DecompositionRecord::new(0x1E6A, DecompositionTag::Canonical, &[0x0054, 0x0307]),
    DecompositionRecord::new(0x1E6B, DecompositionTag::Canonical, &[0x0074, 0x0307]),
    DecompositionRecord::new(0x1E6C, DecompositionTag::Canonical, &[0x0054, 0x0323]),
    DecompositionRecord::new(0x1E6D, DecompositionTag::Canonical, &[0x0074, 0x0323]),
    DecompositionRecord::new(0x1E6E, DecompositionTag::Canonical, &[0x0054, 0x0331]),
    DecompositionRecord::new(0x1E6F, DecompositionTag::Canonical, &[0x0074, 0x0331]),
    DecompositionRecord::new(0x1E70, DecompositionTag::Canonical, &[0x0054, 0x032D]),
    DecompositionRecord::new(0x1E71, DecompositionTag::Canonical, &[0x0074, 0x032D]),
    DecompositionRecord::new(0x1E72, DecompositionTag::Canonical, &[0x0055, 0x0324]),
    DecompositionRecord::new(0x1E73, DecompositionTag::Canonical, &[0x0075, 0x0324]),
    DecompositionRecord::new(0x1E74, DecompositionTag::Canonical, &[0x0055, 0x0330]),
    DecompositionRecord::new(0x1E75, DecompositionTag::Canonical, &[0x0075, 0x0330]),
    DecompositionRecord::new(0x1E76, DecompositionTag::Canonical, &[0x0055, 0x032D]),
    DecompositionRecord::new(0x1E77, DecompositionTag::Canonical, &[0x0075, 0x032D]),
    DecompositionRecord::new(0x1E78, DecompositionTag::Canonical, &[0x0055, 0x0303, 0x0301]),
    DecompositionRecord::new(0x1E79, DecompositionTag::Canonical, &[0x0075, 0x0303, 0x0301]),
    DecompositionRecord::new(0x1E7A, DecompositionTag::Canonical, &[0x0055, 0x0304, 0x0308]),
    DecompositionRecord::new(0x1E7B, DecompositionTag::Canonical, &[0x0075, 0x0304, 0x0308]),
    DecompositionRecord::new(0x1E7C, DecompositionTag::Canonical, &[0x0056, 0x0303]),
    DecompositionRecord::new(0x1E7D, DecompositionTag::Canonical, &[0x0076, 0x0303]),
    DecompositionRecord::new(0x1E7E, DecompositionTag::Canonical, &[0x0056, 0x0323]),
    DecompositionRecord::new(0x1E7F, DecompositionTag::Canonical, &[0x0076, 0x0323]),
    DecompositionRecord::new(0x1E80, DecompositionTag::Canonical, &[0x0057, 0x0300]),
    DecompositionRecord::new(0x1E81, DecompositionTag::Canonical, &[0x0077, 0x0300]),
    DecompositionRecord::new(0x1E82, DecompositionTag::Canonical, &[0x0057, 0x0301]),
    DecompositionRecord::new(0x1E83, DecompositionTag::Canonical, &[0x0077, 0x0301]),
    DecompositionRecord::new(0x1E84, DecompositionTag::Canonical, &[0x0057, 0x0308]),
    DecompositionRecord::new(0x1E85, DecompositionTag::Canonical, &[0x0077, 0x0308]),
    DecompositionRecord::new(0x1E86, DecompositionTag::Canonical, &[0x0057, 0x0307]),
    DecompositionRecord::new(0x1E87, DecompositionTag::Canonical, &[0x0077, 0x0307]),
    DecompositionRecord::new(0x1E88, DecompositionTag::Canonical, &[0x0057, 0x0323]),
    DecompositionRecord::new(0x1E89, DecompositionTag::Canonical, &[0x0077, 0x0323]),
    DecompositionRecord::new(0x1E8A, DecompositionTag::Canonical, &[0x0058, 0x0307]),
    DecompositionRecord::new(0x1E8B, DecompositionTag::Canonical, &[0x0078, 0x0307]),
    DecompositionRecord::new(0x1E8C, DecompositionTag::Canonical, &[0x0058, 0x0308]),
    DecompositionRecord::new(0x1E8D, DecompositionTag::Canonical, &[0x0078, 0x0308]),
    DecompositionRecord::new(0x1E8E, DecompositionTag::Canonical, &[0x0059, 0x0307]),
    DecompositionRecord::new(0x1E8F, DecompositionTag::Canonical, &[0x0079, 0x0307]),
    DecompositionRecord::new(0x1E90, DecompositionTag::Canonical, &[0x005A, 0x0302]),
    DecompositionRecord::new(0x1E91, DecompositionTag::Canonical, &[0x007A, 0x0302]),
    DecompositionRecord::new(0x1E92, DecompositionTag::Canonical, &[0x005A, 0x0323]),
    DecompositionRecord::new(0x1E93, DecompositionTag::Canonical, &[0x007A, 0x0323]),
    DecompositionRecord::new(0x1E94, DecompositionTag::Canonical, &[0x005A, 0x0331]),
    DecompositionRecord::new(0x1E95, DecompositionTag::Canonical, &[0x007A, 0x0331]),
    DecompositionRecord::new(0x1E96, DecompositionTag::Canonical, &[0x0068, 0x0331]),
    DecompositionRecord::new(0x1E97, DecompositionTag::Canonical, &[0x0074, 0x0308]),
    DecompositionRecord::new(0x1E98, DecompositionTag::Canonical, &[0x0077, 0x030A]),
    DecompositionRecord::new(0x1E99, DecompositionTag::Canonical, &[0x0079, 0x030A]),
    DecompositionRecord::new(0x1E9B, DecompositionTag::Canonical, &[0x017F, 0x0307]),
    DecompositionRecord::new(0x1EA0, DecompositionTag::Canonical, &[0x0041, 0x0323]),
    DecompositionRecord::new(0x1EA1, DecompositionTag::Canonical, &[0x0061, 0x0323]),
    DecompositionRecord::new(0x1EA2, DecompositionTag::Canonical, &[0x0041, 0x0309]),
    DecompositionRecord::new(0x1EA3, DecompositionTag::Canonical, &[0x0061, 0x0309]),
    DecompositionRecord::new(0x1EA4, DecompositionTag::Canonical, &[0x0041, 0x0302, 0x0301]),
    DecompositionRecord::new(0x1EA5, DecompositionTag::Canonical, &[0x0061, 0x0302, 0x0301]),
    DecompositionRecord::new(0x1EA6, DecompositionTag::Canonical, &[0x0041, 0x0302, 0x0300]),
    DecompositionRecord::new(0x1EA7, DecompositionTag::Canonical, &[0x0061, 0x0302, 0x0300]),
    DecompositionRecord::new(0x1EA8, DecompositionTag::Canonical, &[0x0041, 0x0302, 0x0309]),
    DecompositionRecord::new(0x1EA9, DecompositionTag::Canonical, &[0x0061, 0x0302, 0x0309]),
    DecompositionRecord::new(0x1EAA, DecompositionTag::Canonical, &[0x0041, 0x0302, 0x0303]),
    DecompositionRecord::new(0x1EAB, DecompositionTag::Canonical, &[0x0061, 0x0302, 0x0303]),
    DecompositionRecord::new(0x1EAC, DecompositionTag::Canonical, &[0x0041, 0x0323, 0x0302]),
    DecompositionRecord::new(0x1EAD, DecompositionTag::Canonical, &[0x0061, 0x0323, 0x0302]),
    DecompositionRecord::new(0x1EAE, DecompositionTag::Canonical, &[0x0041, 0x0306, 0x0301]),
    DecompositionRecord::new(0x1EAF, DecompositionTag::Canonical, &[0x0061, 0x0306, 0x0301]),
    DecompositionRecord::new(0x1EB0, DecompositionTag::Canonical, &[0x0041, 0x0306, 0x0300]),
    DecompositionRecord::new(0x1EB1, DecompositionTag::Canonical, &[0x0061, 0x0306, 0x0300]),
    DecompositionRecord::new(0x1EB2, DecompositionTag::Canonical, &[0x0041, 0x0306, 0x0309]),
    DecompositionRecord::new(0x1EB3, DecompositionTag::Canonical, &[0x0061, 0x0306, 0x0309]),
    DecompositionRecord::new(0x1EB4, DecompositionTag::Canonical, &[0x0041, 0x0306, 0x0303]),
    DecompositionRecord::new(0x1EB5, DecompositionTag::Canonical, &[0x0061, 0x0306, 0x0303]),
    DecompositionRecord::new(0x1EB6, DecompositionTag::Canonical, &[0x0041, 0x0323, 0x0306]),
    DecompositionRecord::new(0x1EB7, DecompositionTag::Canonical, &[0x0061, 0x0323, 0x0306]),
    DecompositionRecord::new(0x1EB8, DecompositionTag::Canonical, &[0x0045, 0x0323]),
    DecompositionRecord::new(0x1EB9, DecompositionTag::Canonical, &[0x0065, 0x0323]),
    DecompositionRecord::new(0x1EBA, DecompositionTag::Canonical, &[0x0045, 0x0309]),
    DecompositionRecord::new(0x1EBB, DecompositionTag::Canonical, &[0x0065, 0x0309]),
    DecompositionRecord::new(0x1EBC, DecompositionTag::Canonical, &[0x0045, 0x0303]),
    DecompositionRecord::new(0x1EBD, DecompositionTag::Canonical, &[0x0065, 0x0303]),
    DecompositionRecord::new(0x1EBE, DecompositionTag::Canonical, &[0x0045, 0x0302, 0x0301]),
    DecompositionRecord::new(0x1EBF, DecompositionTag::Canonical, &[0x0065, 0x0302, 0x0301]),
    DecompositionRecord::new(0x1EC0, DecompositionTag::Canonical, &[0x0045, 0x0302, 0x0300]),
    DecompositionRecord::new(0x1EC1, DecompositionTag::Canonical, &[0x0065, 0x0302, 0x0300]),
    DecompositionRecord::new(0x1EC2, DecompositionTag::Canonical, &[0x0045, 0x0302, 0x0309]),
    DecompositionRecord::new(0x1EC3, DecompositionTag::Canonical, &[0x0065, 0x0302, 0x0309]),
    DecompositionRecord::new(0x1EC4, DecompositionTag::Canonical, &[0x0045, 0x0302, 0x0303]),
    DecompositionRecord::new(0x1EC5, DecompositionTag::Canonical, &[0x0065, 0x0302, 0x0303]),
    DecompositionRecord::new(0x1EC6, DecompositionTag::Canonical, &[0x0045, 0x0323, 0x0302]),
    DecompositionRecord::new(0x1EC7, DecompositionTag::Canonical, &[0x0065, 0x0323, 0x0302]),
    DecompositionRecord::new(0x1EC8, DecompositionTag::Canonical, &[0x0049, 0x0309]),
    DecompositionRecord::new(0x1EC9, DecompositionTag::Canonical, &[0x0069, 0x0309]),
    DecompositionRecord::new(0x1ECA, DecompositionTag::Canonical, &[0x0049, 0x0323]),
    DecompositionRecord::new(0x1ECB, DecompositionTag::Canonical, &[0x0069, 0x0323]),
    DecompositionRecord::new(0x1ECC, DecompositionTag::Canonical, &[0x004F, 0x0323]),
    DecompositionRecord::new(0x1ECD, DecompositionTag::Canonical, &[0x006F, 0x0323]),
    DecompositionRecord::new(0x1ECE, DecompositionTag::Canonical, &[0x004F, 0x0309]),
    DecompositionRecord::new(0x1ECF, DecompositionTag::Canonical, &[0x006F, 0x0309]),
    DecompositionRecord::new(0x1ED0, DecompositionTag::Canonical, &[0x004F, 0x0302, 0x0301]),
    DecompositionRecord::new(0x1ED1, DecompositionTag::Canonical, &[0x006F, 0x0302, 0x0301]),
    DecompositionRecord::new(0x1ED2, DecompositionTag::Canonical, &[0x004F, 0x0302, 0x0300]),
    DecompositionRecord::new(0x1ED3, DecompositionTag::Canonical, &[0x006F, 0x0302, 0x0300]),
    DecompositionRecord::new(0x1ED4, DecompositionTag::Canonical, &[0x004F, 0x0302, 0x0309]),
    DecompositionRecord::new(0x1ED5, DecompositionTag::Canonical, &[0x006F, 0x0302, 0x0309]),
    DecompositionRecord::new(0x1ED6, DecompositionTag::Canonical, &[0x004F, 0x0302, 0x0303]),
    DecompositionRecord::new(0x1ED7, DecompositionTag::Canonical, &[0x006F, 0x0302, 0x0303]),
    DecompositionRecord::new(0x1ED8, DecompositionTag::Canonical, &[0x004F, 0x0323, 0x0302]),
    DecompositionRecord::new(0x1ED9, DecompositionTag::Canonical, &[0x006F, 0x0323, 0x0302]),
    DecompositionRecord::new(0x1EDA, DecompositionTag::Canonical, &[0x004F, 0x031B, 0x0301]),
    DecompositionRecord::new(0x1EDB, DecompositionTag::Canonical, &[0x006F, 0x031B, 0x0301]),
    DecompositionRecord::new(0x1EDC, DecompositionTag::Canonical, &[0x004F, 0x031B, 0x0300]),
    DecompositionRecord::new(0x1EDD, DecompositionTag::Canonical, &[0x006F, 0x031B, 0x0300]),
    DecompositionRecord::new(0x1EDE, DecompositionTag::Canonical, &[0x004F, 0x031B, 0x0309]),
    DecompositionRecord::new(0x1EDF, DecompositionTag::Canonical, &[0x006F, 0x031B, 0x0309]),
    DecompositionRecord::new(0x1EE0, DecompositionTag::Canonical, &[0x004F, 0x031B, 0x0303]),
    DecompositionRecord::new(0x1EE1, DecompositionTag::Canonical, &[0x006F, 0x031B, 0x0303]),
    DecompositionRecord::new(0x1EE2, DecompositionTag::Canonical, &[0x004F, 0x031B, 0x0323]),
    DecompositionRecord::new(0x1EE3, DecompositionTag::Canonical, &[0x006F, 0x031B, 0x0323]),
    DecompositionRecord::new(0x1EE4, DecompositionTag::Canonical, &[0x0055, 0x0323]),
    DecompositionRecord::new(0x1EE5, DecompositionTag::Canonical, &[0x0075, 0x0323]),
    DecompositionRecord::new(0x1EE6, DecompositionTag::Canonical, &[0x0055, 0x0309]),
    DecompositionRecord::new(0x1EE7, DecompositionTag::Canonical, &[0x0075, 0x0309]),
    DecompositionRecord::new(0x1EE8, DecompositionTag::Canonical, &[0x0055, 0x031B, 0x0301]),
    DecompositionRecord::new(0x1EE9, DecompositionTag::Canonical, &[0x0075, 0x031B, 0x0301]),
    DecompositionRecord::new(0x1EEA, DecompositionTag::Canonical, &[0x0055, 0x031B, 0x0300]),
    DecompositionRecord::new(0x1EEB, DecompositionTag::Canonical, &[0x0075, 0x031B, 0x0300]),
    DecompositionRecord::new(0x1EEC, DecompositionTag::Canonical, &[0x0055, 0x031B, 0x0309]),
    DecompositionRecord::new(0x1EED, DecompositionTag::Canonical, &[0x0075, 0x031B, 0x0309]),
    DecompositionRecord::new(0x1EEE, DecompositionTag::Canonical, &[0x0055, 0x031B, 0x0303]),
    DecompositionRecord::new(0x1EEF, DecompositionTag::Canonical, &[0x0075, 0x031B, 0x0303]),
    DecompositionRecord::new(0x1EF0, DecompositionTag::Canonical, &[0x0055, 0x031B, 0x0323]),
    DecompositionRecord::new(0x1EF1, DecompositionTag::Canonical, &[0x0075, 0x031B, 0x0323]),
    DecompositionRecord::new(0x1EF2, DecompositionTag::Canonical, &[0x0059, 0x0300]),
    DecompositionRecord::new(0x1EF3, DecompositionTag::Canonical, &[0x0079, 0x0300]),
    DecompositionRecord::new(0x1EF4, DecompositionTag::Canonical, &[0x0059, 0x0323]),
    DecompositionRecord::new(0x1EF5, DecompositionTag::Canonical, &[0x0079, 0x0323]),
    DecompositionRecord::new(0x1EF6, DecompositionTag::Canonical, &[0x0059, 0x0309]),
    DecompositionRecord::new(0x1EF7, DecompositionTag::Canonical, &[0x0079, 0x0309]),
    DecompositionRecord::new(0x1EF8, DecompositionTag::Canonical, &[0x0059, 0x0303]),
    DecompositionRecord::new(0x1EF9, DecompositionTag::Canonical, &[0x0079, 0x0303]),
    DecompositionRecord::new(0x1F00, DecompositionTag::Canonical, &[0x03B1, 0x0313]),
    DecompositionRecord::new(0x1F01, DecompositionTag::Canonical, &[0x03B1, 0x0314]),
    DecompositionRecord::new(0x1F02, DecompositionTag::Canonical, &[0x03B1, 0x0313, 0x0300]),
    DecompositionRecord::new(0x1F03, DecompositionTag::Canonical, &[0x03B1, 0x0314, 0x0300]),
    DecompositionRecord::new(0x1F04, DecompositionTag::Canonical, &[0x03B1, 0x0313, 0x0301]),
    DecompositionRecord::new(0x1F05, DecompositionTag::Canonical, &[0x03B1, 0x0314, 0x0301]),
    DecompositionRecord::new(0x1F06, DecompositionTag::Canonical, &[0x03B1, 0x0313, 0x0342]),
    DecompositionRecord::new(0x1F07, DecompositionTag::Canonical, &[0x03B1, 0x0314, 0x0342]),
    DecompositionRecord::new(0x1F08, DecompositionTag::Canonical, &[0x0391, 0x0313]),
    DecompositionRecord::new(0x1F09, DecompositionTag::Canonical, &[0x0391, 0x0314]),
    DecompositionRecord::new(0x1F0A, DecompositionTag::Canonical, &[0x0391, 0x0313, 0x0300]),
    DecompositionRecord::new(0x1F0B, DecompositionTag::Canonical, &[0x0391, 0x0314, 0x0300]),
    DecompositionRecord::new(0x1F0C, DecompositionTag::Canonical, &[0x0391, 0x0313, 0x0301]),
    DecompositionRecord::new(0x1F0D, DecompositionTag::Canonical, &[0x0391, 0x0314, 0x0301]),
    DecompositionRecord::new(0x1F0E, DecompositionTag::Canonical, &[0x0391, 0x0313, 0x0342]),
    DecompositionRecord::new(0x1F0F, DecompositionTag::Canonical, &[0x0391, 0x0314, 0x0342]),
    DecompositionRecord::new(0x1F10, DecompositionTag::Canonical, &[0x03B5, 0x0313]),
    DecompositionRecord::new(0x1F11, DecompositionTag::Canonical, &[0x03B5, 0x0314]),
    DecompositionRecord::new(0x1F12, DecompositionTag::Canonical, &[0x03B5, 0x0313, 0x0300]),
    DecompositionRecord::new(0x1F13, DecompositionTag::Canonical, &[0x03B5, 0x0314, 0x0300]),
    DecompositionRecord::new(0x1F14, DecompositionTag::Canonical, &[0x03B5, 0x0313, 0x0301]),
    DecompositionRecord::new(0x1F15, DecompositionTag::Canonical, &[0x03B5, 0x0314, 0x0301]),
    DecompositionRecord::new(0x1F18, DecompositionTag::Canonical, &[0x0395, 0x0313]),
    DecompositionRecord::new(0x1F19, DecompositionTag::Canonical, &[0x0395, 0x0314]),
    DecompositionRecord::new(0x1F1A, DecompositionTag::Canonical, &[0x0395, 0x0313, 0x0300]),
    DecompositionRecord::new(0x1F1B, DecompositionTag::Canonical, &[0x0395, 0x0314, 0x0300]),
    DecompositionRecord::new(0x1F1C, DecompositionTag::Canonical, &[0x0395, 0x0313, 0x0301]),
    DecompositionRecord::new(0x1F1D, DecompositionTag::Canonical, &[0x0395, 0x0314, 0x0301]),
    DecompositionRecord::new(0x1F20, DecompositionTag::Canonical, &[0x03B7, 0x0313]),
    DecompositionRecord::new(0x1F21, DecompositionTag::Canonical, &[0x03B7, 0x0314]),
    DecompositionRecord::new(0x1F22, DecompositionTag::Canonical, &[0x03B7, 0x0313, 0x0300]),
    DecompositionRecord::new(0x1F23, DecompositionTag::Canonical, &[0x03B7, 0x0314, 0x0300]),
    DecompositionRecord::new(0x1F24, DecompositionTag::Canonical, &[0x03B7, 0x0313, 0x0301]),
    DecompositionRecord::new(0x1F25, DecompositionTag::Canonical, &[0x03B7, 0x0314, 0x0301]),
    DecompositionRecord::new(0x1F26, DecompositionTag::Canonical, &[0x03B7, 0x0313, 0x0342]),
    DecompositionRecord::new(0x1F27, DecompositionTag::Canonical, &[0x03B7, 0x0314, 0x0342]),
    DecompositionRecord::new(0x1F28, DecompositionTag::Canonical, &[0x0397, 0x0313]),
    DecompositionRecord::new(0x1F29, DecompositionTag::Canonical, &[0x0397, 0x0314]),
    DecompositionRecord::new(0x1F2A, DecompositionTag::Canonical, &[0x0397, 0x0313, 0x0300]),
    DecompositionRecord::new(0x1F2B, DecompositionTag::Canonical, &[0x0397, 0x0314, 0x0300]),
    DecompositionRecord::new(0x1F2C, DecompositionTag::Canonical, &[0x0397, 0x0313, 0x0301]),
    DecompositionRecord::new(0x1F2D, DecompositionTag::Canonical, &[0x0397, 0x0314, 0x0301]),
    DecompositionRecord::new(0x1F2E, DecompositionTag::Canonical, &[0x0397, 0x0313, 0x0342]),
    DecompositionRecord::new(0x1F2F, DecompositionTag::Canonical, &[0x0397, 0x0314, 0x0342]),
    DecompositionRecord::new(0x1F30, DecompositionTag::Canonical, &[0x03B9, 0x0313]),
    DecompositionRecord::new(0x1F31, DecompositionTag::Canonical, &[0x03B9, 0x0314]),
    DecompositionRecord::new(0x1F32, DecompositionTag::Canonical, &[0x03B9, 0x0313, 0x0300]),
    DecompositionRecord::new(0x1F33, DecompositionTag::Canonical, &[0x03B9, 0x0314, 0x0300]),
    DecompositionRecord::new(0x1F34, DecompositionTag::Canonical, &[0x03B9, 0x0313, 0x0301]),
    DecompositionRecord::new(0x1F35, DecompositionTag::Canonical, &[0x03B9, 0x0314, 0x0301]),
    DecompositionRecord::new(0x1F36, DecompositionTag::Canonical, &[0x03B9, 0x0313, 0x0342]),
    DecompositionRecord::new(0x1F37, DecompositionTag::Canonical, &[0x03B9, 0x0314, 0x0342]),
    DecompositionRecord::new(0x1F38, DecompositionTag::Canonical, &[0x0399, 0x0313]),
    DecompositionRecord::new(0x1F39, DecompositionTag::Canonical, &[0x0399, 0x0314]),
    DecompositionRecord::new(0x1F3A, DecompositionTag::Canonical, &[0x0399, 0x0313, 0x0300]),
    DecompositionRecord::new(0x1F3B, DecompositionTag::Canonical, &[0x0399, 0x0314, 0x0300]),
    DecompositionRecord::new(0x1F3C, DecompositionTag::Canonical, &[0x0399, 0x0313, 0x0301]),
    DecompositionRecord::new(0x1F3D, DecompositionTag::Canonical, &[0x0399, 0x0314, 0x0301]),
    DecompositionRecord::new(0x1F3E, DecompositionTag::Canonical, &[0x0399, 0x0313, 0x0342]),
    DecompositionRecord::new(0x1F3F, DecompositionTag::Canonical, &[0x0399, 0x0314, 0x0342]),
    DecompositionRecord::new(0x1F40, DecompositionTag::Canonical, &[0x03BF, 0x0313]),
    DecompositionRecord::new(0x1F41, DecompositionTag::Canonical, &[0x03BF, 0x0314]),
    DecompositionRecord::new(0x1F42, DecompositionTag::Canonical, &[0x03BF, 0x0313, 0x0300]),
    DecompositionRecord::new(0x1F43, DecompositionTag::Canonical, &[0x03BF, 0x0314, 0x0300]),
    DecompositionRecord::new(0x1F44, DecompositionTag::Canonical, &[0x03BF, 0x0313, 0x0301]),
    DecompositionRecord::new(0x1F45, DecompositionTag::Canonical, &[0x03BF, 0x0314, 0x0301]),
    DecompositionRecord::new(0x1F48, DecompositionTag::Canonical, &[0x039F, 0x0313]),
    DecompositionRecord::new(0x1F49, DecompositionTag::Canonical, &[0x039F, 0x0314]),
    DecompositionRecord::new(0x1F4A, DecompositionTag::Canonical, &[0x039F, 0x0313, 0x0300]),
    DecompositionRecord::new(0x1F4B, DecompositionTag::Canonical, &[0x039F, 0x0314, 0x0300]),
    DecompositionRecord::new(0x1F4C, DecompositionTag::Canonical, &[0x039F, 0x0313, 0x0301]),
    DecompositionRecord::new(0x1F4D, DecompositionTag::Canonical, &[0x039F, 0x0314, 0x0301]),
    DecompositionRecord::new(0x1F50, DecompositionTag::Canonical, &[0x03C5, 0x0313]),
    DecompositionRecord::new(0x1F51, DecompositionTag::Canonical, &[0x03C5, 0x0314]),
    DecompositionRecord::new(0x1F52, DecompositionTag::Canonical, &[0x03C5, 0x0313, 0x0300]),
    DecompositionRecord::new(0x1F53, DecompositionTag::Canonical, &[0x03C5, 0x0314, 0x0300]),
    DecompositionRecord::new(0x1F54, DecompositionTag::Canonical, &[0x03C5, 0x0313, 0x0301]),
    DecompositionRecord::new(0x1F55, DecompositionTag::Canonical, &[0x03C5, 0x0314, 0x0301]),
    DecompositionRecord::new(0x1F56, DecompositionTag::Canonical, &[0x03C5, 0x0313, 0x0342]),
    DecompositionRecord::new(0x1F57, DecompositionTag::Canonical, &[0x03C5, 0x0314, 0x0342]),
    DecompositionRecord::new(0x1F59, DecompositionTag::Canonical, &[0x03A5, 0x0314]),
    DecompositionRecord::new(0x1F5B, DecompositionTag::Canonical, &[0x03A5, 0x0314, 0x0300]),
    DecompositionRecord::new(0x1F5D, DecompositionTag::Canonical, &[0x03A5, 0x0314, 0x0301]),
    DecompositionRecord::new(0x1F5F, DecompositionTag::Canonical, &[0x03A5, 0x0314, 0x0342]),
    DecompositionRecord::new(0x1F60, DecompositionTag::Canonical, &[0x03C9, 0x0313]),
    DecompositionRecord::new(0x1F61, DecompositionTag::Canonical, &[0x03C9, 0x0314]),
    DecompositionRecord::new(0x1F62, DecompositionTag::Canonical, &[0x03C9, 0x0313, 0x0300]),
    DecompositionRecord::new(0x1F63, DecompositionTag::Canonical, &[0x03C9, 0x0314, 0x0300]),
    DecompositionRecord::new(0x1F64, DecompositionTag::Canonical, &[0x03C9, 0x0313, 0x0301]),
    DecompositionRecord::new(0x1F65, DecompositionTag::Canonical, &[0x03C9, 0x0314, 0x0301]),
    DecompositionRecord::new(0x1F66, DecompositionTag::Canonical, &[0x03C9, 0x0313, 0x0342]),
    DecompositionRecord::new(0x1F67, DecompositionTag::Canonical, &[0x03C9, 0x0314, 0x0342]),
    DecompositionRecord::new(0x1F68, DecompositionTag::Canonical, &[0x03A9, 0x0313]),
    DecompositionRecord::new(0x1F69, DecompositionTag::Canonical, &[0x03A9, 0x0314]),
    DecompositionRecord::new(0x1F6A, DecompositionTag::Canonical, &[0x03A9, 0x0313, 0x0300]),
    DecompositionRecord::new(0x1F6B, DecompositionTag::Canonical, &[0x03A9, 0x0314, 0x0300]),
    DecompositionRecord::new(0x1F6C, DecompositionTag::Canonical, &[0x03A9, 0x0313, 0x0301]),
    DecompositionRecord::new(0x1F6D, DecompositionTag::Canonical, &[0x03A9, 0x0314, 0x0301]),
    DecompositionRecord::new(0x1F6E, DecompositionTag::Canonical, &[0x03A9, 0x0313, 0x0342]),
    DecompositionRecord::new(0x1F6F, DecompositionTag::Canonical, &[0x03A9, 0x0314, 0x0342]),
    DecompositionRecord::new(0x1F70, DecompositionTag::Canonical, &[0x03B1, 0x0300]),
    DecompositionRecord::new(0x1F71, DecompositionTag::Canonical, &[0x03B1, 0x0301]),
    DecompositionRecord::new(0x1F72, DecompositionTag::Canonical, &[0x03B5, 0x0300]),
    DecompositionRecord::new(0x1F73, DecompositionTag::Canonical, &[0x03B5, 0x0301]),
    DecompositionRecord::new(0x1F74, DecompositionTag::Canonical, &[0x03B7, 0x0300]),
    DecompositionRecord::new(0x1F75, DecompositionTag::Canonical, &[0x03B7, 0x0301]),
    DecompositionRecord::new(0x1F76, DecompositionTag::Canonical, &[0x03B9, 0x0300]),
    DecompositionRecord::new(0x1F77, DecompositionTag::Canonical, &[0x03B9, 0x0301]),
    DecompositionRecord::new(0x1F78, DecompositionTag::Canonical, &[0x03BF, 0x0300]),
    DecompositionRecord::new(0x1F79, DecompositionTag::Canonical, &[0x03BF, 0x0301]),
    DecompositionRecord::new(0x1F7A, DecompositionTag::Canonical, &[0x03C5, 0x0300]),
    DecompositionRecord::new(0x1F7B, DecompositionTag::Canonical, &[0x03C5, 0x0301]),
    DecompositionRecord::new(0x1F7C, DecompositionTag::Canonical, &[0x03C9, 0x0300]),
    DecompositionRecord::new(0x1F7D, DecompositionTag::Canonical, &[0x03C9, 0x0301]),
    DecompositionRecord::new(0x1F80, DecompositionTag::Canonical, &[0x03B1, 0x0313, 0x0345]),
    DecompositionRecord::new(0x1F81, DecompositionTag::Canonical, &[0x03B1, 0x0314, 0x0345]),
    DecompositionRecord::new(0x1F82, DecompositionTag::Canonical, &[0x03B1, 0x0313, 0x0300, 0x0345]),
    DecompositionRecord::new(0x1F83, DecompositionTag::Canonical, &[0x03B1, 0x0314, 0x0300, 0x0345]),
    DecompositionRecord::new(0x1F84, DecompositionTag::Canonical, &[0x03B1, 0x0313, 0x0301, 0x0345]),
    DecompositionRecord::new(0x1F85, DecompositionTag::Canonical, &[0x03B1, 0x0314, 0x0301, 0x0345]),
    DecompositionRecord::new(0x1F86, DecompositionTag::Canonical, &[0x03B1, 0x0313, 0x0342, 0x0345]),
    DecompositionRecord::new(0x1F87, DecompositionTag::Canonical, &[0x03B1, 0x0314, 0x0342, 0x0345]),
    DecompositionRecord::new(0x1F88, DecompositionTag::Canonical, &[0x0391, 0x0313, 0x0345]),
    DecompositionRecord::new(0x1F89, DecompositionTag::Canonical, &[0x0391, 0x0314, 0x0345]),
    DecompositionRecord::new(0x1F8A, DecompositionTag::Canonical, &[0x0391, 0x0313, 0x0300, 0x0345]),
    DecompositionRecord::new(0x1F8B, DecompositionTag::Canonical, &[0x0391, 0x0314, 0x0300, 0x0345]),
    DecompositionRecord::new(0x1F8C, DecompositionTag::Canonical, &[0x0391, 0x0313, 0x0301, 0x0345]),
    DecompositionRecord::new(0x1F8D, DecompositionTag::Canonical, &[0x0391, 0x0314, 0x0301, 0x0345]),
    DecompositionRecord::new(0x1F8E, DecompositionTag::Canonical, &[0x0391, 0x0313, 0x0342, 0x0345]),
    DecompositionRecord::new(0x1F8F, DecompositionTag::Canonical, &[0x0391, 0x0314, 0x0342, 0x0345]),
    DecompositionRecord::new(0x1F90, DecompositionTag::Canonical, &[0x03B7, 0x0313, 0x0345]),
    DecompositionRecord::new(0x1F91, DecompositionTag::Canonical, &[0x03B7, 0x0314, 0x0345]),
    DecompositionRecord::new(0x1F92, DecompositionTag::Canonical, &[0x03B7, 0x0313, 0x0300, 0x0345]),
    DecompositionRecord::new(0x1F93, DecompositionTag::Canonical, &[0x03B7, 0x0314, 0x0300, 0x0345]),
    DecompositionRecord::new(0x1F94, DecompositionTag::Canonical, &[0x03B7, 0x0313, 0x0301, 0x0345]),
    DecompositionRecord::new(0x1F95, DecompositionTag::Canonical, &[0x03B7, 0x0314, 0x0301, 0x0345]),
    DecompositionRecord::new(0x1F96, DecompositionTag::Canonical, &[0x03B7, 0x0313, 0x0342, 0x0345]),
    DecompositionRecord::new(0x1F97, DecompositionTag::Canonical, &[0x03B7, 0x0314, 0x0342, 0x0345]),
    DecompositionRecord::new(0x1F98, DecompositionTag::Canonical, &[0x0397, 0x0313, 0x0345]),
    DecompositionRecord::new(0x1F99, DecompositionTag::Canonical, &[0x0397, 0x0314, 0x0345]),
    DecompositionRecord::new(0x1F9A, DecompositionTag::Canonical, &[0x0397, 0x0313, 0x0300, 0x0345]),
    DecompositionRecord::new(0x1F9B, DecompositionTag::Canonical, &[0x0397, 0x0314, 0x0300, 0x0345]),
    DecompositionRecord::new(0x1F9C, DecompositionTag::Canonical, &[0x0397, 0x0313, 0x0301, 0x0345]),
    DecompositionRecord::new(0x1F9D, DecompositionTag::Canonical, &[0x0397, 0x0314, 0x0301, 0x0345]),
    DecompositionRecord::new(0x1F9E, DecompositionTag::Canonical, &[0x0397, 0x0313, 0x0342, 0x0345]),
    DecompositionRecord::new(0x1F9F, DecompositionTag::Canonical, &[0x0397, 0x0314, 0x0342, 0x0345]),
    DecompositionRecord::new(0x1FA0, DecompositionTag::Canonical, &[0x03C9, 0x0313, 0x0345]),
    DecompositionRecord::new(0x1FA1, DecompositionTag::Canonical, &[0x03C9, 0x0314, 0x0345]),
    DecompositionRecord::new(0x1FA2, DecompositionTag::Canonical, &[0x03C9, 0x0313, 0x0300, 0x0345]),
    DecompositionRecord::new(0x1FA3, DecompositionTag::Canonical, &[0x03C9, 0x0314, 0x0300, 0x0345]),
    DecompositionRecord::new(0x1FA4, DecompositionTag::Canonical, &[0x03C9, 0x0313, 0x0301, 0x0345]),
    DecompositionRecord::new(0x1FA5, DecompositionTag::Canonical, &[0x03C9, 0x0314, 0x0301, 0x0345]),
    DecompositionRecord::new(0x1FA6, DecompositionTag::Canonical, &[0x03C9, 0x0313, 0x0342, 0x0345]),
    DecompositionRecord::new(0x1FA7, DecompositionTag::Canonical, &[0x03C9, 0x0314, 0x0342, 0x0345]),
    DecompositionRecord::new(0x1FA8, DecompositionTag::Canonical, &[0x03A9, 0x0313, 0x0345]),
    DecompositionRecord::new(0x1FA9, DecompositionTag::Canonical, &[0x03A9, 0x0314, 0x0345]),
    DecompositionRecord::new(0x1FAA, DecompositionTag::Canonical, &[0x03A9, 0x0313, 0x0300, 0x0345]),
    DecompositionRecord::new(0x1FAB, DecompositionTag::Canonical, &[0x03A9, 0x0314, 0x0300, 0x0345]),
    DecompositionRecord::new(0x1FAC, DecompositionTag::Canonical, &[0x03A9, 0x0313, 0x0301, 0x0345]),
    DecompositionRecord::new(0x1FAD, DecompositionTag::Canonical, &[0x03A9, 0x0314, 0x0301, 0x0345]),
    DecompositionRecord::new(0x1FAE, DecompositionTag::Canonical, &[0x03A9, 0x0313, 0x0342, 0x0345]),
    DecompositionRecord::new(0x1FAF, DecompositionTag::Canonical, &[0x03A9, 0x0314, 0x0342, 0x0345]),
    DecompositionRecord::new(0x1FB0, DecompositionTag::Canonical, &[0x03B1, 0x0306]),
    DecompositionRecord::new(0x1FB1, DecompositionTag::Canonical, &[0x03B1, 0x0304]),
    DecompositionRecord::new(0x1FB2, DecompositionTag::Canonical, &[0x03B1, 0x0300, 0x0345]),
    DecompositionRecord::new(0x1FB3, DecompositionTag::Canonical, &[0x03B1, 0x0345]),
    DecompositionRecord::new(0x1FB4, DecompositionTag::Canonical, &[0x03B1, 0x0301, 0x0345]),
    DecompositionRecord::new(0x1FB6, DecompositionTag::Canonical, &[0x03B1, 0x0342]),
    DecompositionRecord::new(0x1FB7, DecompositionTag::Canonical, &[0x03B1, 0x0342, 0x0345]),
    DecompositionRecord::new(0x1FB8, DecompositionTag::Canonical, &[0x0391, 0x0306]),
    DecompositionRecord::new(0x1FB9, DecompositionTag::Canonical, &[0x0391, 0x0304]),
    DecompositionRecord::new(0x1FBA, DecompositionTag::Canonical, &[0x0391, 0x0300]),
    DecompositionRecord::new(0x1FBB, DecompositionTag::Canonical, &[0x0391, 0x0301]),
    DecompositionRecord::new(0x1FBC, DecompositionTag::Canonical, &[0x0391, 0x0345]),
    DecompositionRecord::new(0x1FBE, DecompositionTag::Canonical, &[0x03B9]),
    DecompositionRecord::new(0x1FC1, DecompositionTag::Canonical, &[0x00A8, 0x0342]),
    DecompositionRecord::new(0x1FC2, DecompositionTag::Canonical, &[0x03B7, 0x0300, 0x0345]),
    DecompositionRecord::new(0x1FC3, DecompositionTag::Canonical, &[0x03B7, 0x0345]),
    DecompositionRecord::new(0x1FC4, DecompositionTag::Canonical, &[0x03B7, 0x0301, 0x0345]),
    DecompositionRecord::new(0x1FC6, DecompositionTag::Canonical, &[0x03B7, 0x0342]),
    DecompositionRecord::new(0x1FC7, DecompositionTag::Canonical, &[0x03B7, 0x0342, 0x0345]),
    DecompositionRecord::new(0x1FC8, DecompositionTag::Canonical, &[0x0395, 0x0300]),
    DecompositionRecord::new(0x1FC9, DecompositionTag::Canonical, &[0x0395, 0x0301]),
    DecompositionRecord::new(0x1FCA, DecompositionTag::Canonical, &[0x0397, 0x0300]),
    DecompositionRecord::new(0x1FCB, DecompositionTag::Canonical, &[0x0397, 0x0301]),
    DecompositionRecord::new(0x1FCC, DecompositionTag::Canonical, &[0x0397, 0x0345]),
    DecompositionRecord::new(0x1FCD, DecompositionTag::Canonical, &[0x1FBF, 0x0300]),
    DecompositionRecord::new(0x1FCE, DecompositionTag::Canonical, &[0x1FBF, 0x0301]),
    DecompositionRecord::new(0x1FCF, DecompositionTag::Canonical, &[0x1FBF, 0x0342]),
    DecompositionRecord::new(0x1FD0, DecompositionTag::Canonical, &[0x03B9, 0x0306]),
    DecompositionRecord::new(0x1FD1, DecompositionTag::Canonical, &[0x03B9, 0x0304]),
    DecompositionRecord::new(0x1FD2, DecompositionTag::Canonical, &[0x03B9, 0x0308, 0x0300]),
    DecompositionRecord::new(0x1FD3, DecompositionTag::Canonical, &[0x03B9, 0x0308, 0x0301]),
    DecompositionRecord::new(0x1FD6, DecompositionTag::Canonical, &[0x03B9, 0x0342]),
    DecompositionRecord::new(0x1FD7, DecompositionTag::Canonical, &[0x03B9, 0x0308, 0x0342]),
    DecompositionRecord::new(0x1FD8, DecompositionTag::Canonical, &[0x0399, 0x0306]),
    DecompositionRecord::new(0x1FD9, DecompositionTag::Canonical, &[0x0399, 0x0304]),
    DecompositionRecord::new(0x1FDA, DecompositionTag::Canonical, &[0x0399, 0x0300]),
    DecompositionRecord::new(0x1FDB, DecompositionTag::Canonical, &[0x0399, 0x0301]),
    DecompositionRecord::new(0x1FDD, DecompositionTag::Canonical, &[0x1FFE, 0x0300]),
    DecompositionRecord::new(0x1FDE, DecompositionTag::Canonical, &[0x1FFE, 0x0301]),
    DecompositionRecord::new(0x1FDF, DecompositionTag::Canonical, &[0x1FFE, 0x0342]),
    DecompositionRecord::new(0x1FE0, DecompositionTag::Canonical, &[0x03C5, 0x0306]),
    DecompositionRecord::new(0x1FE1, DecompositionTag::Canonical, &[0x03C5, 0x0304]),
    DecompositionRecord::new(0x1FE2, DecompositionTag::Canonical, &[0x03C5, 0x0308, 0x0300]),
    DecompositionRecord::new(0x1FE3, DecompositionTag::Canonical, &[0x03C5, 0x0308, 0x0301]),
    DecompositionRecord::new(0x1FE4, DecompositionTag::Canonical, &[0x03C1, 0x0313]),
    DecompositionRecord::new(0x1FE5, DecompositionTag::Canonical, &[0x03C1, 0x0314]),
    DecompositionRecord::new(0x1FE6, DecompositionTag::Canonical, &[0x03C5, 0x0342]),
    DecompositionRecord::new(0x1FE7, DecompositionTag::Canonical, &[0x03C5, 0x0308, 0x0342]),
    DecompositionRecord::new(0x1FE8, DecompositionTag::Canonical, &[0x03A5, 0x0306]),
    DecompositionRecord::new(0x1FE9, DecompositionTag::Canonical, &[0x03A5, 0x0304]),
    DecompositionRecord::new(0x1FEA, DecompositionTag::Canonical, &[0x03A5, 0x0300]),
    DecompositionRecord::new(0x1FEB, DecompositionTag::Canonical, &[0x03A5, 0x0301]),
    DecompositionRecord::new(0x1FEC, DecompositionTag::Canonical, &[0x03A1, 0x0314]),
    DecompositionRecord::new(0x1FED, DecompositionTag::Canonical, &[0x00A8, 0x0300]),
    DecompositionRecord::new(0x1FEE, DecompositionTag::Canonical, &[0x00A8, 0x0301]),
    DecompositionRecord::new(0x1FEF, DecompositionTag::Canonical, &[0x0060]),
    DecompositionRecord::new(0x1FF2, DecompositionTag::Canonical, &[0x03C9, 0x0300, 0x0345]),
    DecompositionRecord::new(0x1FF3, DecompositionTag::Canonical, &[0x03C9, 0x0345]),
    DecompositionRecord::new(0x1FF4, DecompositionTag::Canonical, &[0x03C9, 0x0301, 0x0345]),
    DecompositionRecord::new(0x1FF6, DecompositionTag::Canonical, &[0x03C9, 0x0342]),
    DecompositionRecord::new(0x1FF7, DecompositionTag::Canonical, &[0x03C9, 0x0342, 0x0345]),
    DecompositionRecord::new(0x1FF8, DecompositionTag::Canonical, &[0x039F, 0x0300]),
    DecompositionRecord::new(0x1FF9, DecompositionTag::Canonical, &[0x039F, 0x0301]),
    DecompositionRecord::new(0x1FFA, DecompositionTag::Canonical, &[0x03A9, 0x0300]),
    DecompositionRecord::new(0x1FFB, DecompositionTag::Canonical, &[0x03A9, 0x0301]),
    DecompositionRecord::new(0x1FFC, DecompositionTag::Canonical, &[0x03A9, 0x0345]),
    DecompositionRecord::new(0x1FFD, DecompositionTag::Canonical, &[0x00B4]),
    DecompositionRecord::new(0x2000, DecompositionTag::Canonical, &[0x2002]),
    DecompositionRecord::new(0x2001, DecompositionTag::Canonical, &[0x2003]),
    DecompositionRecord::new(0x2126, DecompositionTag::Canonical, &[0x03A9]),
    DecompositionRecord::new(0x212A, DecompositionTag::Canonical, &[0x004B]),
    DecompositionRecord::new(0x212B, DecompositionTag::Canonical, &[0x0041, 0x030A]),
    DecompositionRecord::new(0x219A, DecompositionTag::Canonical, &[0x2190, 0x0338]),
    DecompositionRecord::new(0x219B, DecompositionTag::Canonical, &[0x2192, 0x0338]),
    DecompositionRecord::new(0x21AE, DecompositionTag::Canonical, &[0x2194, 0x0338]),
    DecompositionRecord::new(0x21CD, DecompositionTag::Canonical, &[0x21D0, 0x0338]),
    DecompositionRecord::new(0x21CE, DecompositionTag::Canonical, &[0x21D4, 0x0338]),
    DecompositionRecord::new(0x21CF, DecompositionTag::Canonical, &[0x21D2, 0x0338]),
    DecompositionRecord::new(0x2204, DecompositionTag::Canonical, &[0x2203, 0x0338]),
    DecompositionRecord::new(0x2209, DecompositionTag::Canonical, &[0x2208, 0x0338]),
    DecompositionRecord::new(0x220C, DecompositionTag::Canonical, &[0x220B, 0x0338]),
    DecompositionRecord::new(0x2224, DecompositionTag::Canonical, &[0x2223, 0x0338]),
    DecompositionRecord::new(0x2226, DecompositionTag::Canonical, &[0x2225, 0x0338]),
    DecompositionRecord::new(0x2241, DecompositionTag::Canonical, &[0x223C, 0x0338]),
    DecompositionRecord::new(0x2244, DecompositionTag::Canonical, &[0x2243, 0x0338]),
    DecompositionRecord::new(0x2247, DecompositionTag::Canonical, &[0x2245, 0x0338]),
    DecompositionRecord::new(0x2249, DecompositionTag::Canonical, &[0x2248, 0x0338]),
    DecompositionRecord::new(0x2260, DecompositionTag::Canonical, &[0x003D, 0x0338]),
    DecompositionRecord::new(0x2262, DecompositionTag::Canonical, &[0x2261, 0x0338]),
    DecompositionRecord::new(0x226D, DecompositionTag::Canonical, &[0x224D, 0x0338]),
    DecompositionRecord::new(0x226E, DecompositionTag::Canonical, &[0x003C, 0x0338]),
    DecompositionRecord::new(0x226F, DecompositionTag::Canonical, &[0x003E, 0x0338]),
    DecompositionRecord::new(0x2270, DecompositionTag::Canonical, &[0x2264, 0x0338]),
    DecompositionRecord::new(0x2271, DecompositionTag::Canonical, &[0x2265, 0x0338]),
    DecompositionRecord::new(0x2274, DecompositionTag::Canonical, &[0x2272, 0x0338]),
    DecompositionRecord::new(0x2275, DecompositionTag::Canonical, &[0x2273, 0x0338]),
    DecompositionRecord::new(0x2278, DecompositionTag::Canonical, &[0x2276, 0x0338]),
    DecompositionRecord::new(0x2279, DecompositionTag::Canonical, &[0x2277, 0x0338]),
    DecompositionRecord::new(0x2280, DecompositionTag::Canonical, &[0x227A, 0x0338]),
    DecompositionRecord::new(0x2281, DecompositionTag::Canonical, &[0x227B, 0x0338]),
    DecompositionRecord::new(0x2284, DecompositionTag::Canonical, &[0x2282, 0x0338]),
    DecompositionRecord::new(0x2285, DecompositionTag::Canonical, &[0x2283, 0x0338]),
    DecompositionRecord::new(0x2288, DecompositionTag::Canonical, &[0x2286, 0x0338]),
    DecompositionRecord::new(0x2289, DecompositionTag::Canonical, &[0x2287, 0x0338]),
    DecompositionRecord::new(0x22AC, DecompositionTag::Canonical, &[0x22A2, 0x0338]),
    DecompositionRecord::new(0x22AD, DecompositionTag::Canonical, &[0x22A8, 0x0338]),
    DecompositionRecord::new(0x22AE, DecompositionTag::Canonical, &[0x22A9, 0x0338]),
    DecompositionRecord::new(0x22AF, DecompositionTag::Canonical, &[0x22AB, 0x0338]),
    DecompositionRecord::new(0x22E0, DecompositionTag::Canonical, &[0x227C, 0x0338]),
    DecompositionRecord::new(0x22E1, DecompositionTag::Canonical, &[0x227D, 0x0338]),
    DecompositionRecord::new(0x22E2, DecompositionTag::Canonical, &[0x2291, 0x0338]),
    DecompositionRecord::new(0x22E3, DecompositionTag::Canonical, &[0x2292, 0x0338]),
    DecompositionRecord::new(0x22EA, DecompositionTag::Canonical, &[0x22B2, 0x0338]),
    DecompositionRecord::new(0x22EB, DecompositionTag::Canonical, &[0x22B3, 0x0338]),
    DecompositionRecord::new(0x22EC, DecompositionTag::Canonical, &[0x22B4, 0x0338]),
    DecompositionRecord::new(0x22ED, DecompositionTag::Canonical, &[0x22B5, 0x0338]),
    DecompositionRecord::new(0x2329, DecompositionTag::Canonical, &[0x3008]),
    DecompositionRecord::new(0x232A, DecompositionTag::Canonical, &[0x3009]),
    DecompositionRecord::new(0x2ADC, DecompositionTag::Canonical, &[0x2ADD, 0x0338]),
    DecompositionRecord::new(0x304C, DecompositionTag::Canonical, &[0x304B, 0x3099]),
    DecompositionRecord::new(0x304E, DecompositionTag::Canonical, &[0x304D, 0x3099]),
    DecompositionRecord::new(0x3050, DecompositionTag::Canonical, &[0x304F, 0x3099]),
    DecompositionRecord::new(0x3052, DecompositionTag::Canonical, &[0x3051, 0x3099]),
    DecompositionRecord::new(0x3054, DecompositionTag::Canonical, &[0x3053, 0x3099]),
    DecompositionRecord::new(0x3056, DecompositionTag::Canonical, &[0x3055, 0x3099]),
    DecompositionRecord::new(0x3058, DecompositionTag::Canonical, &[0x3057, 0x3099]),
    DecompositionRecord::new(0x305A, DecompositionTag::Canonical, &[0x3059, 0x3099]),
    DecompositionRecord::new(0x305C, DecompositionTag::Canonical, &[0x305B, 0x3099]),
    DecompositionRecord::new(0x305E, DecompositionTag::Canonical, &[0x305D, 0x3099]),
    DecompositionRecord::new(0x3060, DecompositionTag::Canonical, &[0x305F, 0x3099]),
    DecompositionRecord::new(0x3062, DecompositionTag::Canonical, &[0x3061, 0x3099]),
    DecompositionRecord::new(0x3065, DecompositionTag::Canonical, &[0x3064, 0x3099]),
    DecompositionRecord::new(0x3067, DecompositionTag::Canonical, &[0x3066, 0x3099]),
    DecompositionRecord::new(0x3069, DecompositionTag::Canonical, &[0x3068, 0x3099]),
    DecompositionRecord::new(0x3070, DecompositionTag::Canonical, &[0x306F, 0x3099]),
    DecompositionRecord::new(0x3071, DecompositionTag::Canonical, &[0x306F, 0x309A]),
    DecompositionRecord::new(0x3073, DecompositionTag::Canonical, &[0x3072, 0x3099]),
    DecompositionRecord::new(0x3074, DecompositionTag::Canonical, &[0x3072, 0x309A]),
    DecompositionRecord::new(0x3076, DecompositionTag::Canonical, &[0x3075, 0x3099]),
    DecompositionRecord::new(0x3077, DecompositionTag::Canonical, &[0x3075, 0x309A]),
    DecompositionRecord::new(0x3079, DecompositionTag::Canonical, &[0x3078, 0x3099]),
    DecompositionRecord::new(0x307A, DecompositionTag::Canonical, &[0x3078, 0x309A]),
    DecompositionRecord::new(0x307C, DecompositionTag::Canonical, &[0x307B, 0x3099]),
    DecompositionRecord::new(0x307D, DecompositionTag::Canonical, &[0x307B, 0x309A]),
    DecompositionRecord::new(0x3094, DecompositionTag::Canonical, &[0x3046, 0x3099]),
    DecompositionRecord::new(0x309E, DecompositionTag::Canonical, &[0x309D, 0x3099]),
    DecompositionRecord::new(0x30AC, DecompositionTag::Canonical, &[0x30AB, 0x3099]),
    DecompositionRecord::new(0x30AE, DecompositionTag::Canonical, &[0x30AD, 0x3099]),
    DecompositionRecord::new(0x30B0, DecompositionTag::Canonical, &[0x30AF, 0x3099]),
    DecompositionRecord::new(0x30B2, DecompositionTag::Canonical, &[0x30B1, 0x3099]),
    DecompositionRecord::new(0x30B4, DecompositionTag::Canonical, &[0x30B3, 0x3099]),
    DecompositionRecord::new(0x30B6, DecompositionTag::Canonical, &[0x30B5, 0x3099]),
    DecompositionRecord::new(0x30B8, DecompositionTag::Canonical, &[0x30B7, 0x3099]),
    DecompositionRecord::new(0x30BA, DecompositionTag::Canonical, &[0x30B9, 0x3099]),
    DecompositionRecord::new(0x30BC, DecompositionTag::Canonical, &[0x30BB, 0x3099]),
    DecompositionRecord::new(0x30BE, DecompositionTag::Canonical, &[0x30BD, 0x3099]),
    DecompositionRecord::new(0x30C0, DecompositionTag::Canonical, &[0x30BF, 0x3099]),
    DecompositionRecord::new(0x30C2, DecompositionTag::Canonical, &[0x30C1, 0x3099]),
    DecompositionRecord::new(0x30C5, DecompositionTag::Canonical, &[0x30C4, 0x3099]),
    DecompositionRecord::new(0x30C7, DecompositionTag::Canonical, &[0x30C6, 0x3099]),
    DecompositionRecord::new(0x30C9, DecompositionTag::Canonical, &[0x30C8, 0x3099]),
    DecompositionRecord::new(0x30D0, DecompositionTag::Canonical, &[0x30CF, 0x3099]),
    DecompositionRecord::new(0x30D1, DecompositionTag::Canonical, &[0x30CF, 0x309A]),
    DecompositionRecord::new(0x30D3, DecompositionTag::Canonical, &[0x30D2, 0x3099]),
    DecompositionRecord::new(0x30D4, DecompositionTag::Canonical, &[0x30D2, 0x309A]),
    DecompositionRecord::new(0x30D6, DecompositionTag::Canonical, &[0x30D5, 0x3099]),
    DecompositionRecord::new(0x30D7, DecompositionTag::Canonical, &[0x30D5, 0x309A]),
    DecompositionRecord::new(0x30D9, DecompositionTag::Canonical, &[0x30D8, 0x3099]),
    DecompositionRecord::new(0x30DA, DecompositionTag::Canonical, &[0x30D8, 0x309A]),
    DecompositionRecord::new(0x30DC, DecompositionTag::Canonical, &[0x30DB, 0x3099]),
    DecompositionRecord::new(0x30DD, DecompositionTag::Canonical, &[0x30DB, 0x309A]),
    DecompositionRecord::new(0x30F4, DecompositionTag::Canonical, &[0x30A6, 0x3099]),
    DecompositionRecord::new(0x30F7, DecompositionTag::Canonical, &[0x30EF, 0x3099]),
    DecompositionRecord::new(0x30F8, DecompositionTag::Canonical, &[0x30F0, 0x3099]),
    DecompositionRecord::new(0x30F9, DecompositionTag::Canonical, &[0x30F1, 0x3099]),
    DecompositionRecord::new(0x30FA, DecompositionTag::Canonical, &[0x30F2, 0x3099]),
    DecompositionRecord::new(0x30FE, DecompositionTag::Canonical, &[0x30FD, 0x3099]),
    DecompositionRecord::new(0xF900, DecompositionTag::Canonical, &[0x8C48]),
    DecompositionRecord::new(0xF901, DecompositionTag::Canonical, &[0x66F4]),
    DecompositionRecord::new(0xF902, DecompositionTag::Canonical, &[0x8ECA]),
    DecompositionRecord::new(0xF903, DecompositionTag::Canonical, &[0x8CC8]),
    DecompositionRecord::new(0xF904, DecompositionTag::Canonical, &[0x6ED1]),
    DecompositionRecord::new(0xF905, DecompositionTag::Canonical, &[0x4E32]),
    DecompositionRecord::new(0xF906, DecompositionTag::Canonical, &[0x53E5]),
    DecompositionRecord::new(0xF907, DecompositionTag::Canonical, &[0x9F9C]),
    DecompositionRecord::new(0xF908, DecompositionTag::Canonical, &[0x9F9C]),
    DecompositionRecord::new(0xF909, DecompositionTag::Canonical, &[0x5951]),
    DecompositionRecord::new(0xF90A, DecompositionTag::Canonical, &[0x91D1]),
    DecompositionRecord::new(0xF90B, DecompositionTag::Canonical, &[0x5587]),
    DecompositionRecord::new(0xF90C, DecompositionTag::Canonical, &[0x5948]),
    DecompositionRecord::new(0xF90D, DecompositionTag::Canonical, &[0x61F6]),
    DecompositionRecord::new(0xF90E, DecompositionTag::Canonical, &[0x7669]),
    DecompositionRecord::new(0xF90F, DecompositionTag::Canonical, &[0x7F85]),
    DecompositionRecord::new(0xF910, DecompositionTag::Canonical, &[0x863F]),
    DecompositionRecord::new(0xF911, DecompositionTag::Canonical, &[0x87BA]),
    DecompositionRecord::new(0xF912, DecompositionTag::Canonical, &[0x88F8]),
    DecompositionRecord::new(0xF913, DecompositionTag::Canonical, &[0x908F]),
    DecompositionRecord::new(0xF914, DecompositionTag::Canonical, &[0x6A02]),
    DecompositionRecord::new(0xF915, DecompositionTag::Canonical, &[0x6D1B]),
    DecompositionRecord::new(0xF916, DecompositionTag::Canonical, &[0x70D9]),
    DecompositionRecord::new(0xF917, DecompositionTag::Canonical, &[0x73DE]),
    DecompositionRecord::new(0xF918, DecompositionTag::Canonical, &[0x843D]),
    DecompositionRecord::new(0xF919, DecompositionTag::Canonical, &[0x916A]),
    DecompositionRecord::new(0xF91A, DecompositionTag::Canonical, &[0x99F1]),
    DecompositionRecord::new(0xF91B, DecompositionTag::Canonical, &[0x4E82]),
    DecompositionRecord::new(0xF91C, DecompositionTag::Canonical, &[0x5375]),
    DecompositionRecord::new(0xF91D, DecompositionTag::Canonical, &[0x6B04]),
    DecompositionRecord::new(0xF91E, DecompositionTag::Canonical, &[0x721B]),
    DecompositionRecord::new(0xF91F, DecompositionTag::Canonical, &[0x862D]),
    DecompositionRecord::new(0xF920, DecompositionTag::Canonical, &[0x9E1E]),
    DecompositionRecord::new(0xF921, DecompositionTag::Canonical, &[0x5D50]),
    DecompositionRecord::new(0xF922, DecompositionTag::Canonical, &[0x6FEB]),
    DecompositionRecord::new(0xF923, DecompositionTag::Canonical, &[0x85CD]),
    DecompositionRecord::new(0xF924, DecompositionTag::Canonical, &[0x8964]),
    DecompositionRecord::new(0xF925, DecompositionTag::Canonical, &[0x62C9]),
    DecompositionRecord::new(0xF926, DecompositionTag::Canonical, &[0x81D8]),
    DecompositionRecord::new(0xF927, DecompositionTag::Canonical, &[0x881F]),
    DecompositionRecord::new(0xF928, DecompositionTag::Canonical, &[0x5ECA]),
    DecompositionRecord::new(0xF929, DecompositionTag::Canonical, &[0x6717]),
    DecompositionRecord::new(0xF92A, DecompositionTag::Canonical, &[0x6D6A]),
    DecompositionRecord::new(0xF92B, DecompositionTag::Canonical, &[0x72FC]),
    DecompositionRecord::new(0xF92C, DecompositionTag::Canonical, &[0x90CE]),
    DecompositionRecord::new(0xF92D, DecompositionTag::Canonical, &[0x4F86]),
    DecompositionRecord::new(0xF92E, DecompositionTag::Canonical, &[0x51B7]),
    DecompositionRecord::new(0xF92F, DecompositionTag::Canonical, &[0x52DE]),
    DecompositionRecord::new(0xF930, DecompositionTag::Canonical, &[0x64C4]),
    DecompositionRecord::new(0xF931, DecompositionTag::Canonical, &[0x6AD3]),
    DecompositionRecord::new(0xF932, DecompositionTag::Canonical, &[0x7210]),
    DecompositionRecord::new(0xF933, DecompositionTag::Canonical, &[0x76E7]),
    DecompositionRecord::new(0xF934, DecompositionTag::Canonical, &[0x8001]),
    DecompositionRecord::new(0xF935, DecompositionTag::Canonical, &[0x8606]),
    DecompositionRecord::new(0xF936, DecompositionTag::Canonical, &[0x865C]),
    DecompositionRecord::new(0xF937, DecompositionTag::Canonical, &[0x8DEF]),
    DecompositionRecord::new(0xF938, DecompositionTag::Canonical, &[0x9732]),
    DecompositionRecord::new(0xF939, DecompositionTag::Canonical, &[0x9B6F]),
    DecompositionRecord::new(0xF93A, DecompositionTag::Canonical, &[0x9DFA]),
    DecompositionRecord::new(0xF93B, DecompositionTag::Canonical, &[0x788C]),
    DecompositionRecord::new(0xF93C, DecompositionTag::Canonical, &[0x797F]),
    DecompositionRecord::new(0xF93D, DecompositionTag::Canonical, &[0x7DA0]),
    DecompositionRecord::new(0xF93E, DecompositionTag::Canonical, &[0x83C9]),
    DecompositionRecord::new(0xF93F, DecompositionTag::Canonical, &[0x9304]),
    DecompositionRecord::new(0xF940, DecompositionTag::Canonical, &[0x9E7F]),
    DecompositionRecord::new(0xF941, DecompositionTag::Canonical, &[0x8AD6]),
    DecompositionRecord::new(0xF942, DecompositionTag::Canonical, &[0x58DF]),
    DecompositionRecord::new(0xF943, DecompositionTag::Canonical, &[0x5F04]),
    DecompositionRecord::new(0xF944, DecompositionTag::Canonical, &[0x7C60]),
    DecompositionRecord::new(0xF945, DecompositionTag::Canonical, &[0x807E]),
    DecompositionRecord::new(0xF946, DecompositionTag::Canonical, &[0x7262]),
    DecompositionRecord::new(0xF947, DecompositionTag::Canonical, &[0x78CA]),
    DecompositionRecord::new(0xF948, DecompositionTag::Canonical, &[0x8CC2]),
    DecompositionRecord::new(0xF949, DecompositionTag::Canonical, &[0x96F7]),
    DecompositionRecord::new(0xF94A, DecompositionTag::Canonical, &[0x58D8]),
    DecompositionRecord::new(0xF94B, DecompositionTag::Canonical, &[0x5C62]),
    DecompositionRecord::new(0xF94C, DecompositionTag::Canonical, &[0x6A13]),
    DecompositionRecord::new(0xF94D, DecompositionTag::Canonical, &[0x6DDA]),
    DecompositionRecord::new(0xF94E, DecompositionTag::Canonical, &[0x6F0F]),
    DecompositionRecord::new(0xF94F, DecompositionTag::Canonical, &[0x7D2F]),
    DecompositionRecord::new(0xF950, DecompositionTag::Canonical, &[0x7E37]),
    DecompositionRecord::new(0xF951, DecompositionTag::Canonical, &[0x964B]),
    DecompositionRecord::new(0xF952, DecompositionTag::Canonical, &[0x52D2]),
    DecompositionRecord::new(0xF953, DecompositionTag::Canonical, &[0x808B]),
    DecompositionRecord::new(0xF954, DecompositionTag::Canonical, &[0x51DC]),
    DecompositionRecord::new(0xF955, DecompositionTag::Canonical, &[0x51CC]),
    DecompositionRecord::new(0xF956, DecompositionTag::Canonical, &[0x7A1C]),
    DecompositionRecord::new(0xF957, DecompositionTag::Canonical, &[0x7DBE]),
    DecompositionRecord::new(0xF958, DecompositionTag::Canonical, &[0x83F1]),
    DecompositionRecord::new(0xF959, DecompositionTag::Canonical, &[0x9675]),
    DecompositionRecord::new(0xF95A, DecompositionTag::Canonical, &[0x8B80]),
    DecompositionRecord::new(0xF95B, DecompositionTag::Canonical, &[0x62CF]),
    DecompositionRecord::new(0xF95C, DecompositionTag::Canonical, &[0x6A02]),
    DecompositionRecord::new(0xF95D, DecompositionTag::Canonical, &[0x8AFE]),
    DecompositionRecord::new(0xF95E, DecompositionTag::Canonical, &[0x4E39]),
    DecompositionRecord::new(0xF95F, DecompositionTag::Canonical, &[0x5BE7]),
    DecompositionRecord::new(0xF960, DecompositionTag::Canonical, &[0x6012]),
    DecompositionRecord::new(0xF961, DecompositionTag::Canonical, &[0x7387]),
    DecompositionRecord::new(0xF962, DecompositionTag::Canonical, &[0x7570]),
    DecompositionRecord::new(0xF963, DecompositionTag::Canonical, &[0x5317]),
    DecompositionRecord::new(0xF964, DecompositionTag::Canonical, &[0x78FB]),
    DecompositionRecord::new(0xF965, DecompositionTag::Canonical, &[0x4FBF]),
    DecompositionRecord::new(0xF966, DecompositionTag::Canonical, &[0x5FA9]),
    DecompositionRecord::new(0xF967, DecompositionTag::Canonical, &[0x4E0D]),
    DecompositionRecord::new(0xF968, DecompositionTag::Canonical, &[0x6CCC]),
    DecompositionRecord::new(0xF969, DecompositionTag::Canonical, &[0x6578]),
    DecompositionRecord::new(0xF96A, DecompositionTag::Canonical, &[0x7D22]),
    DecompositionRecord::new(0xF96B, DecompositionTag::Canonical, &[0x53C3]),
    DecompositionRecord::new(0xF96C, DecompositionTag::Canonical, &[0x585E]),
    DecompositionRecord::new(0xF96D, DecompositionTag::Canonical, &[0x7701]),
    DecompositionRecord::new(0xF96E, DecompositionTag::Canonical, &[0x8449]),
    DecompositionRecord::new(0xF96F, DecompositionTag::Canonical, &[0x8AAA]),
    DecompositionRecord::new(0xF970, DecompositionTag::Canonical, &[0x6BBA]),
    DecompositionRecord::new(0xF971, DecompositionTag::Canonical, &[0x8FB0]),
    DecompositionRecord::new(0xF972, DecompositionTag::Canonical, &[0x6C88]),
    DecompositionRecord::new(0xF973, DecompositionTag::Canonical, &[0x62FE]),
    DecompositionRecord::new(0xF974, DecompositionTag::Canonical, &[0x82E5]),
    DecompositionRecord::new(0xF975, DecompositionTag::Canonical, &[0x63A0]),
    DecompositionRecord::new(0xF976, DecompositionTag::Canonical, &[0x7565]),
    DecompositionRecord::new(0xF977, DecompositionTag::Canonical, &[0x4EAE]),
    DecompositionRecord::new(0xF978, DecompositionTag::Canonical, &[0x5169]),
    DecompositionRecord::new(0xF979, DecompositionTag::Canonical, &[0x51C9]),
    DecompositionRecord::new(0xF97A, DecompositionTag::Canonical, &[0x6881]),
    DecompositionRecord::new(0xF97B, DecompositionTag::Canonical, &[0x7CE7]),
    DecompositionRecord::new(0xF97C, DecompositionTag::Canonical, &[0x826F]),
    DecompositionRecord::new(0xF97D, DecompositionTag::Canonical, &[0x8AD2]),
    DecompositionRecord::new(0xF97E, DecompositionTag::Canonical, &[0x91CF]),
    DecompositionRecord::new(0xF97F, DecompositionTag::Canonical, &[0x52F5]),
    DecompositionRecord::new(0xF980, DecompositionTag::Canonical, &[0x5442]),
    DecompositionRecord::new(0xF981, DecompositionTag::Canonical, &[0x5973]),
    DecompositionRecord::new(0xF982, DecompositionTag::Canonical, &[0x5EEC]),
    DecompositionRecord::new(0xF983, DecompositionTag::Canonical, &[0x65C5]),
    DecompositionRecord::new(0xF984, DecompositionTag::Canonical, &[0x6FFE]),
    DecompositionRecord::new(0xF985, DecompositionTag::Canonical, &[0x792A]),
    DecompositionRecord::new(0xF986, DecompositionTag::Canonical, &[0x95AD]),
    DecompositionRecord::new(0xF987, DecompositionTag::Canonical, &[0x9A6A]),
    DecompositionRecord::new(0xF988, DecompositionTag::Canonical, &[0x9E97]),
    DecompositionRecord::new(0xF989, DecompositionTag::Canonical, &[0x9ECE]),
    DecompositionRecord::new(0xF98A, DecompositionTag::Canonical, &[0x529B]),
    DecompositionRecord::new(0xF98B, DecompositionTag::Canonical, &[0x66C6]),
    DecompositionRecord::new(0xF98C, DecompositionTag::Canonical, &[0x6B77]),
    DecompositionRecord::new(0xF98D, DecompositionTag::Canonical, &[0x8F62]),
    DecompositionRecord::new(0xF98E, DecompositionTag::Canonical, &[0x5E74]),
    DecompositionRecord::new(0xF98F, DecompositionTag::Canonical, &[0x6190]),
    DecompositionRecord::new(0xF990, DecompositionTag::Canonical, &[0x6200]),
    DecompositionRecord::new(0xF991, DecompositionTag::Canonical, &[0x649A]),
    DecompositionRecord::new(0xF992, DecompositionTag::Canonical, &[0x6F23]),
    DecompositionRecord::new(0xF993, DecompositionTag::Canonical, &[0x7149]),
    DecompositionRecord::new(0xF994, DecompositionTag::Canonical, &[0x7489]),
    DecompositionRecord::new(0xF995, DecompositionTag::Canonical, &[0x79CA]),
    DecompositionRecord::new(0xF996, DecompositionTag::Canonical, &[0x7DF4]),
    DecompositionRecord::new(0xF997, DecompositionTag::Canonical, &[0x806F]),
    DecompositionRecord::new(0xF998, DecompositionTag::Canonical, &[0x8F26]),
    DecompositionRecord::new(0xF999, DecompositionTag::Canonical, &[0x84EE]),
    DecompositionRecord::new(0xF99A, DecompositionTag::Canonical, &[0x9023]),
    DecompositionRecord::new(0xF99B, DecompositionTag::Canonical, &[0x934A]),
    DecompositionRecord::new(0xF99C, DecompositionTag::Canonical, &[0x5217]),
    DecompositionRecord::new(0xF99D, DecompositionTag::Canonical, &[0x52A3]),
    DecompositionRecord::new(0xF99E, DecompositionTag::Canonical, &[0x54BD]),
    DecompositionRecord::new(0xF99F, DecompositionTag::Canonical, &[0x70C8]),
    DecompositionRecord::new(0xF9A0, DecompositionTag::Canonical, &[0x88C2]),
    DecompositionRecord::new(0xF9A1, DecompositionTag::Canonical, &[0x8AAA]),
    DecompositionRecord::new(0xF9A2, DecompositionTag::Canonical, &[0x5EC9]),
    DecompositionRecord::new(0xF9A3, DecompositionTag::Canonical, &[0x5FF5]),
    DecompositionRecord::new(0xF9A4, DecompositionTag::Canonical, &[0x637B]),
    DecompositionRecord::new(0xF9A5, DecompositionTag::Canonical, &[0x6BAE]),
    DecompositionRecord::new(0xF9A6, DecompositionTag::Canonical, &[0x7C3E]),
    DecompositionRecord::new(0xF9A7, DecompositionTag::Canonical, &[0x7375]),
    DecompositionRecord::new(0xF9A8, DecompositionTag::Canonical, &[0x4EE4]),
    DecompositionRecord::new(0xF9A9, DecompositionTag::Canonical, &[0x56F9]),
    DecompositionRecord::new(0xF9AA, DecompositionTag::Canonical, &[0x5BE7]),
    DecompositionRecord::new(0xF9AB, DecompositionTag::Canonical, &[0x5DBA]),
    DecompositionRecord::new(0xF9AC, DecompositionTag::Canonical, &[0x601C]),
    DecompositionRecord::new(0xF9AD, DecompositionTag::Canonical, &[0x73B2]),
    DecompositionRecord::new(0xF9AE, DecompositionTag::Canonical, &[0x7469]),
    DecompositionRecord::new(0xF9AF, DecompositionTag::Canonical, &[0x7F9A]),
    DecompositionRecord::new(0xF9B0, DecompositionTag::Canonical, &[0x8046]),
    DecompositionRecord::new(0xF9B1, DecompositionTag::Canonical, &[0x9234]),
    DecompositionRecord::new(0xF9B2, DecompositionTag::Canonical, &[0x96F6]),
    DecompositionRecord::new(0xF9B3, DecompositionTag::Canonical, &[0x9748]),
    DecompositionRecord::new(0xF9B4, DecompositionTag::Canonical, &[0x9818]),
    DecompositionRecord::new(0xF9B5, DecompositionTag::Canonical, &[0x4F8B]),
    DecompositionRecord::new(0xF9B6, DecompositionTag::Canonical, &[0x79AE]),
    DecompositionRecord::new(0xF9B7, DecompositionTag::Canonical, &[0x91B4]),
    DecompositionRecord::new(0xF9B8, DecompositionTag::Canonical, &[0x96B8]),
    DecompositionRecord::new(0xF9B9, DecompositionTag::Canonical, &[0x60E1]),
    DecompositionRecord::new(0xF9BA, DecompositionTag::Canonical, &[0x4E86]),
    DecompositionRecord::new(0xF9BB, DecompositionTag::Canonical, &[0x50DA]),
    DecompositionRecord::new(0xF9BC, DecompositionTag::Canonical, &[0x5BEE]),
    DecompositionRecord::new(0xF9BD, DecompositionTag::Canonical, &[0x5C3F]),
    DecompositionRecord::new(0xF9BE, DecompositionTag::Canonical, &[0x6599]),
    DecompositionRecord::new(0xF9BF, DecompositionTag::Canonical, &[0x6A02]),
    DecompositionRecord::new(0xF9C0, DecompositionTag::Canonical, &[0x71CE]),
    DecompositionRecord::new(0xF9C1, DecompositionTag::Canonical, &[0x7642]),
    DecompositionRecord::new(0xF9C2, DecompositionTag::Canonical, &[0x84FC]),
    DecompositionRecord::new(0xF9C3, DecompositionTag::Canonical, &[0x907C]),
    DecompositionRecord::new(0xF9C4, DecompositionTag::Canonical, &[0x9F8D]),
    DecompositionRecord::new(0xF9C5, DecompositionTag::Canonical, &[0x6688]),
    DecompositionRecord::new(0xF9C6, DecompositionTag::Canonical, &[0x962E]),
    DecompositionRecord::new(0xF9C7, DecompositionTag::Canonical, &[0x5289]),
    DecompositionRecord::new(0xF9C8, DecompositionTag::Canonical, &[0x677B]),
    DecompositionRecord::new(0xF9C9, DecompositionTag::Canonical, &[0x67F3]),
    DecompositionRecord::new(0xF9CA, DecompositionTag::Canonical, &[0x6D41]),
    DecompositionRecord::new(0xF9CB, DecompositionTag::Canonical, &[0x6E9C]),
    DecompositionRecord::new(0xF9CC, DecompositionTag::Canonical, &[0x7409]),
    DecompositionRecord::new(0xF9CD, DecompositionTag::Canonical, &[0x7559]),
    DecompositionRecord::new(0xF9CE, DecompositionTag::Canonical, &[0x786B]),
    DecompositionRecord::new(0xF9CF, DecompositionTag::Canonical, &[0x7D10]),
    DecompositionRecord::new(0xF9D0, DecompositionTag::Canonical, &[0x985E]),
    DecompositionRecord::new(0xF9D1, DecompositionTag::Canonical, &[0x516D]),
    DecompositionRecord::new(0xF9D2, DecompositionTag::Canonical, &[0x622E]),
    DecompositionRecord::new(0xF9D3, DecompositionTag::Canonical, &[0x9678]),
    DecompositionRecord::new(0xF9D4, DecompositionTag::Canonical, &[0x502B]),
    DecompositionRecord::new(0xF9D5, DecompositionTag::Canonical, &[0x5D19]),
    DecompositionRecord::new(0xF9D6, DecompositionTag::Canonical, &[0x6DEA]),
    DecompositionRecord::new(0xF9D7, DecompositionTag::Canonical, &[0x8F2A]),
    DecompositionRecord::new(0xF9D8, DecompositionTag::Canonical, &[0x5F8B]),
    DecompositionRecord::new(0xF9D9, DecompositionTag::Canonical, &[0x6144]),
    DecompositionRecord::new(0xF9DA, DecompositionTag::Canonical, &[0x6817]),
    DecompositionRecord::new(0xF9DB, DecompositionTag::Canonical, &[0x7387]),
    DecompositionRecord::new(0xF9DC, DecompositionTag::Canonical, &[0x9686]),
    DecompositionRecord::new(0xF9DD, DecompositionTag::Canonical, &[0x5229]),
    DecompositionRecord::new(0xF9DE, DecompositionTag::Canonical, &[0x540F]),
    DecompositionRecord::new(0xF9DF, DecompositionTag::Canonical, &[0x5C65]),
    DecompositionRecord::new(0xF9E0, DecompositionTag::Canonical, &[0x6613]),
    DecompositionRecord::new(0xF9E1, DecompositionTag::Canonical, &[0x674E]),
    DecompositionRecord::new(0xF9E2, DecompositionTag::Canonical, &[0x68A8]),
    DecompositionRecord::new(0xF9E3, DecompositionTag::Canonical, &[0x6CE5]),
    DecompositionRecord::new(0xF9E4, DecompositionTag::Canonical, &[0x7406]),
    DecompositionRecord::new(0xF9E5, DecompositionTag::Canonical, &[0x75E2]),
    DecompositionRecord::new(0xF9E6, DecompositionTag::Canonical, &[0x7F79]),
    DecompositionRecord::new(0xF9E7, DecompositionTag::Canonical, &[0x88CF]),
    DecompositionRecord::new(0xF9E8, DecompositionTag::Canonical, &[0x88E1]),
    DecompositionRecord::new(0xF9E9, DecompositionTag::Canonical, &[0x91CC]),
    DecompositionRecord::new(0xF9EA, DecompositionTag::Canonical, &[0x96E2]),
    DecompositionRecord::new(0xF9EB, DecompositionTag::Canonical, &[0x533F]),
    DecompositionRecord::new(0xF9EC, DecompositionTag::Canonical, &[0x6EBA]),
    DecompositionRecord::new(0xF9ED, DecompositionTag::Canonical, &[0x541D]),
    DecompositionRecord::new(0xF9EE, DecompositionTag::Canonical, &[0x71D0]),
    DecompositionRecord::new(0xF9EF, DecompositionTag::Canonical, &[0x7498]),
    DecompositionRecord::new(0xF9F0, DecompositionTag::Canonical, &[0x85FA]),
    DecompositionRecord::new(0xF9F1, DecompositionTag::Canonical, &[0x96A3]),
    DecompositionRecord::new(0xF9F2, DecompositionTag::Canonical, &[0x9C57]),
    DecompositionRecord::new(0xF9F3, DecompositionTag::Canonical, &[0x9E9F]),
    DecompositionRecord::new(0xF9F4, DecompositionTag::Canonical, &[0x6797]),
    DecompositionRecord::new(0xF9F5, DecompositionTag::Canonical, &[0x6DCB]),
    DecompositionRecord::new(0xF9F6, DecompositionTag::Canonical, &[0x81E8]),
    DecompositionRecord::new(0xF9F7, DecompositionTag::Canonical, &[0x7ACB]),
    DecompositionRecord::new(0xF9F8, DecompositionTag::Canonical, &[0x7B20]),
    DecompositionRecord::new(0xF9F9, DecompositionTag::Canonical, &[0x7C92]),
    DecompositionRecord::new(0xF9FA, DecompositionTag::Canonical, &[0x72C0]),
    DecompositionRecord::new(0xF9FB, DecompositionTag::Canonical, &[0x7099]),
    DecompositionRecord::new(0xF9FC, DecompositionTag::Canonical, &[0x8B58]),
    DecompositionRecord::new(0xF9FD, DecompositionTag::Canonical, &[0x4EC0]),
    DecompositionRecord::new(0xF9FE, DecompositionTag::Canonical, &[0x8336]),
    DecompositionRecord::new(0xF9FF, DecompositionTag::Canonical, &[0x523A]),
    DecompositionRecord::new(0xFA00, DecompositionTag::Canonical, &[0x5207]),
    DecompositionRecord::new(0xFA01, DecompositionTag::Canonical, &[0x5EA6]),
    DecompositionRecord::new(0xFA02, DecompositionTag::Canonical, &[0x62D3]),
    DecompositionRecord::new(0xFA03, DecompositionTag::Canonical, &[0x7CD6]),
    DecompositionRecord::new(0xFA04, DecompositionTag::Canonical, &[0x5B85]),
    DecompositionRecord::new(0xFA05, DecompositionTag::Canonical, &[0x6D1E]),
    DecompositionRecord::new(0xFA06, DecompositionTag::Canonical, &[0x66B4]),
    DecompositionRecord::new(0xFA07, DecompositionTag::Canonical, &[0x8F3B]),
    DecompositionRecord::new(0xFA08, DecompositionTag::Canonical, &[0x884C]),
    DecompositionRecord::new(0xFA09, DecompositionTag::Canonical, &[0x964D]),
    DecompositionRecord::new(0xFA0A, DecompositionTag::Canonical, &[0x898B]),
    DecompositionRecord::new(0xFA0B, DecompositionTag::Canonical, &[0x5ED3]),
    DecompositionRecord::new(0xFA0C, DecompositionTag::Canonical, &[0x5140]),
    DecompositionRecord::new(0xFA0D, DecompositionTag::Canonical, &[0x55C0]),
    DecompositionRecord::new(0xFA10, DecompositionTag::Canonical, &[0x585A]),
    DecompositionRecord::new(0xFA12, DecompositionTag::Canonical, &[0x6674]),
    DecompositionRecord::new(0xFA15, DecompositionTag::Canonical, &[0x51DE]),
    DecompositionRecord::new(0xFA16, DecompositionTag::Canonical, &[0x732A]),
    DecompositionRecord::new(0xFA17, DecompositionTag::Canonical, &[0x76CA]),
    DecompositionRecord::new(0xFA18, DecompositionTag::Canonical, &[0x793C]),
    DecompositionRecord::new(0xFA19, DecompositionTag::Canonical, &[0x795E]),
    DecompositionRecord::new(0xFA1A, DecompositionTag::Canonical, &[0x7965]),
    DecompositionRecord::new(0xFA1B, DecompositionTag::Canonical, &[0x798F]),
    DecompositionRecord::new(0xFA1C, DecompositionTag::Canonical, &[0x9756]),
    DecompositionRecord::new(0xFA1D, DecompositionTag::Canonical, &[0x7CBE]),
    DecompositionRecord::new(0xFA1E, DecompositionTag::Canonical, &[0x7FBD]),
    DecompositionRecord::new(0xFA20, DecompositionTag::Canonical, &[0x8612]),
    DecompositionRecord::new(0xFA22, DecompositionTag::Canonical, &[0x8AF8]),
    DecompositionRecord::new(0xFA25, DecompositionTag::Canonical, &[0x9038]),
    DecompositionRecord::new(0xFA26, DecompositionTag::Canonical, &[0x90FD]),
    DecompositionRecord::new(0xFA2A, DecompositionTag::Canonical, &[0x98EF]),
    DecompositionRecord::new(0xFA2B, DecompositionTag::Canonical, &[0x98FC]),
    DecompositionRecord::new(0xFA2C, DecompositionTag::Canonical, &[0x9928]),
    DecompositionRecord::new(0xFA2D, DecompositionTag::Canonical, &[0x9DB4]),
    DecompositionRecord::new(0xFA2E, DecompositionTag::Canonical, &[0x90DE]),
    DecompositionRecord::new(0xFA2F, DecompositionTag::Canonical, &[0x96B7]),
    DecompositionRecord::new(0xFA30, DecompositionTag::Canonical, &[0x4FAE]),
    DecompositionRecord::new(0xFA31, DecompositionTag::Canonical, &[0x50E7]),
    DecompositionRecord::new(0xFA32, DecompositionTag::Canonical, &[0x514D]),
    DecompositionRecord::new(0xFA33, DecompositionTag::Canonical, &[0x52C9]),
    DecompositionRecord::new(0xFA34, DecompositionTag::Canonical, &[0x52E4]),
    DecompositionRecord::new(0xFA35, DecompositionTag::Canonical, &[0x5351]),
    DecompositionRecord::new(0xFA36, DecompositionTag::Canonical, &[0x559D]),
    DecompositionRecord::new(0xFA37, DecompositionTag::Canonical, &[0x5606]),
    DecompositionRecord::new(0xFA38, DecompositionTag::Canonical, &[0x5668]),
    DecompositionRecord::new(0xFA39, DecompositionTag::Canonical, &[0x5840]),
    DecompositionRecord::new(0xFA3A, DecompositionTag::Canonical, &[0x58A8]),
    DecompositionRecord::new(0xFA3B, DecompositionTag::Canonical, &[0x5C64]),
    DecompositionRecord::new(0xFA3C, DecompositionTag::Canonical, &[0x5C6E]),
    DecompositionRecord::new(0xFA3D, DecompositionTag::Canonical, &[0x6094]),
    DecompositionRecord::new(0xFA3E, DecompositionTag::Canonical, &[0x6168]),
    DecompositionRecord::new(0xFA3F, DecompositionTag::Canonical, &[0x618E]),
    DecompositionRecord::new(0xFA40, DecompositionTag::Canonical, &[0x61F2]),
    DecompositionRecord::new(0xFA41, DecompositionTag::Canonical, &[0x654F]),
    DecompositionRecord::new(0xFA42, DecompositionTag::Canonical, &[0x65E2]),
    DecompositionRecord::new(0xFA43, DecompositionTag::Canonical, &[0x6691]),
    DecompositionRecord::new(0xFA44, DecompositionTag::Canonical, &[0x6885]),
    DecompositionRecord::new(0xFA45, DecompositionTag::Canonical, &[0x6D77]),
    DecompositionRecord::new(0xFA46, DecompositionTag::Canonical, &[0x6E1A]),
    DecompositionRecord::new(0xFA47, DecompositionTag::Canonical, &[0x6F22]),
    DecompositionRecord::new(0xFA48, DecompositionTag::Canonical, &[0x716E]),
    DecompositionRecord::new(0xFA49, DecompositionTag::Canonical, &[0x722B]),
    DecompositionRecord::new(0xFA4A, DecompositionTag::Canonical, &[0x7422]),
    DecompositionRecord::new(0xFA4B, DecompositionTag::Canonical, &[0x7891]),
    DecompositionRecord::new(0xFA4C, DecompositionTag::Canonical, &[0x793E]),
    DecompositionRecord::new(0xFA4D, DecompositionTag::Canonical, &[0x7949]),
    DecompositionRecord::new(0xFA4E, DecompositionTag::Canonical, &[0x7948]),
    DecompositionRecord::new(0xFA4F, DecompositionTag::Canonical, &[0x7950]),
    DecompositionRecord::new(0xFA50, DecompositionTag::Canonical, &[0x7956]),
    DecompositionRecord::new(0xFA51, DecompositionTag::Canonical, &[0x795D]),
    DecompositionRecord::new(0xFA52, DecompositionTag::Canonical, &[0x798D]),
    DecompositionRecord::new(0xFA53, DecompositionTag::Canonical, &[0x798E]),
    DecompositionRecord::new(0xFA54, DecompositionTag::Canonical, &[0x7A40]),
    DecompositionRecord::new(0xFA55, DecompositionTag::Canonical, &[0x7A81]),
    DecompositionRecord::new(0xFA56, DecompositionTag::Canonical, &[0x7BC0]),
    DecompositionRecord::new(0xFA57, DecompositionTag::Canonical, &[0x7DF4]),
    DecompositionRecord::new(0xFA58, DecompositionTag::Canonical, &[0x7E09]),
    DecompositionRecord::new(0xFA59, DecompositionTag::Canonical, &[0x7E41]),
    DecompositionRecord::new(0xFA5A, DecompositionTag::Canonical, &[0x7F72]),
    DecompositionRecord::new(0xFA5B, DecompositionTag::Canonical, &[0x8005]),
    DecompositionRecord::new(0xFA5C, DecompositionTag::Canonical, &[0x81ED]),
    DecompositionRecord::new(0xFA5D, DecompositionTag::Canonical, &[0x8279]),
    DecompositionRecord::new(0xFA5E, DecompositionTag::Canonical, &[0x8279]),
    DecompositionRecord::new(0xFA5F, DecompositionTag::Canonical, &[0x8457]),
    DecompositionRecord::new(0xFA60, DecompositionTag::Canonical, &[0x8910]),
    DecompositionRecord::new(0xFA61, DecompositionTag::Canonical, &[0x8996]),
    DecompositionRecord::new(0xFA62, DecompositionTag::Canonical, &[0x8B01]),
    DecompositionRecord::new(0xFA63, DecompositionTag::Canonical, &[0x8B39]),
    DecompositionRecord::new(0xFA64, DecompositionTag::Canonical, &[0x8CD3]),
    DecompositionRecord::new(0xFA65, DecompositionTag::Canonical, &[0x8D08]),
    DecompositionRecord::new(0xFA66, DecompositionTag::Canonical, &[0x8FB6]),
    DecompositionRecord::new(0xFA67, DecompositionTag::Canonical, &[0x9038]),
    DecompositionRecord::new(0xFA68, DecompositionTag::Canonical, &[0x96E3]),
    DecompositionRecord::new(0xFA69, DecompositionTag::Canonical, &[0x97FF]),
    DecompositionRecord::new(0xFA6A, DecompositionTag::Canonical, &[0x983B]),
    DecompositionRecord::new(0xFA6B, DecompositionTag::Canonical, &[0x6075]),
    DecompositionRecord::new(0xFA6C, DecompositionTag::Canonical, &[0x242EE]),
    DecompositionRecord::new(0xFA6D, DecompositionTag::Canonical, &[0x8218]),
    DecompositionRecord::new(0xFA70, DecompositionTag::Canonical, &[0x4E26]),
    DecompositionRecord::new(0xFA71, DecompositionTag::Canonical, &[0x51B5]),
    DecompositionRecord::new(0xFA72, DecompositionTag::Canonical, &[0x5168]),
    DecompositionRecord::new(0xFA73, DecompositionTag::Canonical, &[0x4F80]),
    DecompositionRecord::new(0xFA74, DecompositionTag::Canonical, &[0x5145]),
    DecompositionRecord::new(0xFA75, DecompositionTag::Canonical, &[0x5180]),
    DecompositionRecord::new(0xFA76, DecompositionTag::Canonical, &[0x52C7]),
    DecompositionRecord::new(0xFA77, DecompositionTag::Canonical, &[0x52FA]),
    DecompositionRecord::new(0xFA78, DecompositionTag::Canonical, &[0x559D]),
    DecompositionRecord::new(0xFA79, DecompositionTag::Canonical, &[0x5555]),
    DecompositionRecord::new(0xFA7A, DecompositionTag::Canonical, &[0x5599]),
    DecompositionRecord::new(0xFA7B, DecompositionTag::Canonical, &[0x55E2]),
    DecompositionRecord::new(0xFA7C, DecompositionTag::Canonical, &[0x585A]),
    DecompositionRecord::new(0xFA7D, DecompositionTag::Canonical, &[0x58B3]),
    DecompositionRecord::new(0xFA7E, DecompositionTag::Canonical, &[0x5944]),
    DecompositionRecord::new(0xFA7F, DecompositionTag::Canonical, &[0x5954]),
    DecompositionRecord::new(0xFA80, DecompositionTag::Canonical, &[0x5A62]),
    DecompositionRecord::new(0xFA81, DecompositionTag::Canonical, &[0x5B28]),
    DecompositionRecord::new(0xFA82, DecompositionTag::Canonical, &[0x5ED2]),
    DecompositionRecord::new(0xFA83, DecompositionTag::Canonical, &[0x5ED9]),
    DecompositionRecord::new(0xFA84, DecompositionTag::Canonical, &[0x5F69]),
    DecompositionRecord::new(0xFA85, DecompositionTag::Canonical, &[0x5FAD]),
    DecompositionRecord::new(0xFA86, DecompositionTag::Canonical, &[0x60D8]),
    DecompositionRecord::new(0xFA87, DecompositionTag::Canonical, &[0x614E]),
    DecompositionRecord::new(0xFA88, DecompositionTag::Canonical, &[0x6108]),
    DecompositionRecord::new(0xFA89, DecompositionTag::Canonical, &[0x618E]),
    DecompositionRecord::new(0xFA8A, DecompositionTag::Canonical, &[0x6160]),
    DecompositionRecord::new(0xFA8B, DecompositionTag::Canonical, &[0x61F2]),
    DecompositionRecord::new(0xFA8C, DecompositionTag::Canonical, &[0x6234]),
    DecompositionRecord::new(0xFA8D, DecompositionTag::Canonical, &[0x63C4]),
    DecompositionRecord::new(0xFA8E, DecompositionTag::Canonical, &[0x641C]),
    DecompositionRecord::new(0xFA8F, DecompositionTag::Canonical, &[0x6452]),
    DecompositionRecord::new(0xFA90, DecompositionTag::Canonical, &[0x6556]),
    DecompositionRecord::new(0xFA91, DecompositionTag::Canonical, &[0x6674]),
    DecompositionRecord::new(0xFA92, DecompositionTag::Canonical, &[0x6717]),
    DecompositionRecord::new(0xFA93, DecompositionTag::Canonical, &[0x671B]),
    DecompositionRecord::new(0xFA94, DecompositionTag::Canonical, &[0x6756]),
    DecompositionRecord::new(0xFA95, DecompositionTag::Canonical, &[0x6B79]),
    DecompositionRecord::new(0xFA96, DecompositionTag::Canonical, &[0x6BBA]),
    DecompositionRecord::new(0xFA97, DecompositionTag::Canonical, &[0x6D41]),
    DecompositionRecord::new(0xFA98, DecompositionTag::Canonical, &[0x6EDB]),
    DecompositionRecord::new(0xFA99, DecompositionTag::Canonical, &[0x6ECB]),
    DecompositionRecord::new(0xFA9A, DecompositionTag::Canonical, &[0x6F22]),
    DecompositionRecord::new(0xFA9B, DecompositionTag::Canonical, &[0x701E]),
    DecompositionRecord::new(0xFA9C, DecompositionTag::Canonical, &[0x716E]),
    DecompositionRecord::new(0xFA9D, DecompositionTag::Canonical, &[0x77A7]),
    DecompositionRecord::new(0xFA9E, DecompositionTag::Canonical, &[0x7235]),
    DecompositionRecord::new(0xFA9F, DecompositionTag::Canonical, &[0x72AF]),
    DecompositionRecord::new(0xFAA0, DecompositionTag::Canonical, &[0x732A]),
    DecompositionRecord::new(0xFAA1, DecompositionTag::Canonical, &[0x7471]),
    DecompositionRecord::new(0xFAA2, DecompositionTag::Canonical, &[0x7506]),
    DecompositionRecord::new(0xFAA3, DecompositionTag::Canonical, &[0x753B]),
    DecompositionRecord::new(0xFAA4, DecompositionTag::Canonical, &[0x761D]),
    DecompositionRecord::new(0xFAA5, DecompositionTag::Canonical, &[0x761F]),
    DecompositionRecord::new(0xFAA6, DecompositionTag::Canonical, &[0x76CA]),
    DecompositionRecord::new(0xFAA7, DecompositionTag::Canonical, &[0x76DB]),
    DecompositionRecord::new(0xFAA8, DecompositionTag::Canonical, &[0x76F4]),
    DecompositionRecord::new(0xFAA9, DecompositionTag::Canonical, &[0x774A]),
    DecompositionRecord::new(0xFAAA, DecompositionTag::Canonical, &[0x7740]),
    DecompositionRecord::new(0xFAAB, DecompositionTag::Canonical, &[0x78CC]),
    DecompositionRecord::new(0xFAAC, DecompositionTag::Canonical, &[0x7AB1]),
    DecompositionRecord::new(0xFAAD, DecompositionTag::Canonical, &[0x7BC0]),
    DecompositionRecord::new(0xFAAE, DecompositionTag::Canonical, &[0x7C7B]),
    DecompositionRecord::new(0xFAAF, DecompositionTag::Canonical, &[0x7D5B]),
    DecompositionRecord::new(0xFAB0, DecompositionTag::Canonical, &[0x7DF4]),
    DecompositionRecord::new(0xFAB1, DecompositionTag::Canonical, &[0x7F3E]),
    DecompositionRecord::new(0xFAB2, DecompositionTag::Canonical, &[0x8005]),
    DecompositionRecord::new(0xFAB3, DecompositionTag::Canonical, &[0x8352]),
    DecompositionRecord::new(0xFAB4, DecompositionTag::Canonical, &[0x83EF]),
    DecompositionRecord::new(0xFAB5, DecompositionTag::Canonical, &[0x8779]),
    DecompositionRecord::new(0xFAB6, DecompositionTag::Canonical, &[0x8941]),
    DecompositionRecord::new(0xFAB7, DecompositionTag::Canonical, &[0x8986]),
    DecompositionRecord::new(0xFAB8, DecompositionTag::Canonical, &[0x8996]),
    DecompositionRecord::new(0xFAB9, DecompositionTag::Canonical, &[0x8ABF]),
    DecompositionRecord::new(0xFABA, DecompositionTag::Canonical, &[0x8AF8]),
    DecompositionRecord::new(0xFABB, DecompositionTag::Canonical, &[0x8ACB]),
    DecompositionRecord::new(0xFABC, DecompositionTag::Canonical, &[0x8B01]),
    DecompositionRecord::new(0xFABD, DecompositionTag::Canonical, &[0x8AFE]),
    DecompositionRecord::new(0xFABE, DecompositionTag::Canonical, &[0x8AED]),
    DecompositionRecord::new(0xFABF, DecompositionTag::Canonical, &[0x8B39]),
    DecompositionRecord::new(0xFAC0, DecompositionTag::Canonical, &[0x8B8A]),
    DecompositionRecord::new(0xFAC1, DecompositionTag::Canonical, &[0x8D08]),
    DecompositionRecord::new(0xFAC2, DecompositionTag::Canonical, &[0x8F38]),
    DecompositionRecord::new(0xFAC3, DecompositionTag::Canonical, &[0x9072]),
    DecompositionRecord::new(0xFAC4, DecompositionTag::Canonical, &[0x9199]),
    DecompositionRecord::new(0xFAC5, DecompositionTag::Canonical, &[0x9276]),
    DecompositionRecord::new(0xFAC6, DecompositionTag::Canonical, &[0x967C]),
    DecompositionRecord::new(0xFAC7, DecompositionTag::Canonical, &[0x96E3]),
    DecompositionRecord::new(0xFAC8, DecompositionTag::Canonical, &[0x9756]),
    DecompositionRecord::new(0xFAC9, DecompositionTag::Canonical, &[0x97DB]),
    DecompositionRecord::new(0xFACA, DecompositionTag::Canonical, &[0x97FF]),
    DecompositionRecord::new(0xFACB, DecompositionTag::Canonical, &[0x980B]),
    DecompositionRecord::new(0xFACC, DecompositionTag::Canonical, &[0x983B]),
    DecompositionRecord::new(0xFACD, DecompositionTag::Canonical, &[0x9B12]),
    DecompositionRecord::new(0xFACE, DecompositionTag::Canonical, &[0x9F9C]),
    DecompositionRecord::new(0xFACF, DecompositionTag::Canonical, &[0x2284A]),
    DecompositionRecord::new(0xFAD0, DecompositionTag::Canonical, &[0x22844]),
    DecompositionRecord::new(0xFAD1, DecompositionTag::Canonical, &[0x233D5]),
    DecompositionRecord::new(0xFAD2, DecompositionTag::Canonical, &[0x3B9D]),
    DecompositionRecord::new(0xFAD3, DecompositionTag::Canonical, &[0x4018]),
    DecompositionRecord::new(0xFAD4, DecompositionTag::Canonical, &[0x4039]),
    DecompositionRecord::new(0xFAD5, DecompositionTag::Canonical, &[0x25249]),
    DecompositionRecord::new(0xFAD6, DecompositionTag::Canonical, &[0x25CD0]),
    DecompositionRecord::new(0xFAD7, DecompositionTag::Canonical, &[0x27ED3]),
    DecompositionRecord::new(0xFAD8, DecompositionTag::Canonical, &[0x9F43]),
    DecompositionRecord::new(0xFAD9, DecompositionTag::Canonical, &[0x9F8E]),
    DecompositionRecord::new(0xFB1D, DecompositionTag::Canonical, &[0x05D9, 0x05B4]),
    DecompositionRecord::new(0xFB1F, DecompositionTag::Canonical, &[0x05F2, 0x05B7]),
    DecompositionRecord::new(0xFB2A, DecompositionTag::Canonical, &[0x05E9, 0x05C1]),
    DecompositionRecord::new(0xFB2B, DecompositionTag::Canonical, &[0x05E9, 0x05C2]),
    DecompositionRecord::new(0xFB2C, DecompositionTag::Canonical, &[0x05E9, 0x05BC, 0x05C1]),
    DecompositionRecord::new(0xFB2D, DecompositionTag::Canonical, &[0x05E9, 0x05BC, 0x05C2]),
    DecompositionRecord::new(0xFB2E, DecompositionTag::Canonical, &[0x05D0, 0x05B7]),
    DecompositionRecord::new(0xFB2F, DecompositionTag::Canonical, &[0x05D0, 0x05B8]),
    DecompositionRecord::new(0xFB30, DecompositionTag::Canonical, &[0x05D0, 0x05BC]),
    DecompositionRecord::new(0xFB31, DecompositionTag::Canonical, &[0x05D1, 0x05BC]),
    DecompositionRecord::new(0xFB32, DecompositionTag::Canonical, &[0x05D2, 0x05BC]),
    DecompositionRecord::new(0xFB33, DecompositionTag::Canonical, &[0x05D3, 0x05BC]),
    DecompositionRecord::new(0xFB34, DecompositionTag::Canonical, &[0x05D4, 0x05BC]),
    DecompositionRecord::new(0xFB35, DecompositionTag::Canonical, &[0x05D5, 0x05BC]),
    DecompositionRecord::new(0xFB36, DecompositionTag::Canonical, &[0x05D6, 0x05BC]),
    DecompositionRecord::new(0xFB38, DecompositionTag::Canonical, &[0x05D8, 0x05BC]),
    DecompositionRecord::new(0xFB39, DecompositionTag::Canonical, &[0x05D9, 0x05BC]),
    DecompositionRecord::new(0xFB3A, DecompositionTag::Canonical, &[0x05DA, 0x05BC]),
    DecompositionRecord::new(0xFB3B, DecompositionTag::Canonical, &[0x05DB, 0x05BC]),
    DecompositionRecord::new(0xFB3C, DecompositionTag::Canonical, &[0x05DC, 0x05BC]),
    DecompositionRecord::new(0xFB3E, DecompositionTag::Canonical, &[0x05DE, 0x05BC]),
    DecompositionRecord::new(0xFB40, DecompositionTag::Canonical, &[0x05E0, 0x05BC]),
    DecompositionRecord::new(0xFB41, DecompositionTag::Canonical, &[0x05E1, 0x05BC]),
    DecompositionRecord::new(0xFB43, DecompositionTag::Canonical, &[0x05E3, 0x05BC]),
    DecompositionRecord::new(0xFB44, DecompositionTag::Canonical, &[0x05E4, 0x05BC]),
    DecompositionRecord::new(0xFB46, DecompositionTag::Canonical, &[0x05E6, 0x05BC]),
    DecompositionRecord::new(0xFB47, DecompositionTag::Canonical, &[0x05E7, 0x05BC]),
    DecompositionRecord::new(0xFB48, DecompositionTag::Canonical, &[0x05E8, 0x05BC]),
    DecompositionRecord::new(0xFB49, DecompositionTag::Canonical, &[0x05E9, 0x05BC]),
    DecompositionRecord::new(0xFB4A, DecompositionTag::Canonical, &[0x05EA, 0x05BC]),
    DecompositionRecord::new(0xFB4B, DecompositionTag::Canonical, &[0x05D5, 0x05B9]),
    DecompositionRecord::new(0xFB4C, DecompositionTag::Canonical, &[0x05D1, 0x05BF]),
    DecompositionRecord::new(0xFB4D, DecompositionTag::Canonical, &[0x05DB, 0x05BF]),
    DecompositionRecord::new(0xFB4E, DecompositionTag::Canonical, &[0x05E4, 0x05BF]),
    DecompositionRecord::new(0x1109A, DecompositionTag::Canonical, &[0x11099, 0x110BA]),
    DecompositionRecord::new(0x1109C, DecompositionTag::Canonical, &[0x1109B, 0x110BA]),
    DecompositionRecord::new(0x110AB, DecompositionTag::Canonical, &[0x110A5, 0x110BA]),
    DecompositionRecord::new(0x1112E, DecompositionTag::Canonical, &[0x11131, 0x11127]),
    DecompositionRecord::new(0x1112F, DecompositionTag::Canonical, &[0x11132, 0x11127]),
    DecompositionRecord::new(0x1134B, DecompositionTag::Canonical, &[0x11347, 0x1133E]),
    DecompositionRecord::new(0x1134C, DecompositionTag::Canonical, &[0x11347, 0x11357]),
    DecompositionRecord::new(0x114BB, DecompositionTag::Canonical, &[0x114B9, 0x114BA]),
    DecompositionRecord::new(0x114BC, DecompositionTag::Canonical, &[0x114B9, 0x114B0]),
    DecompositionRecord::new(0x114BE, DecompositionTag::Canonical, &[0x114B9, 0x114BD]),
    DecompositionRecord::new(0x115BA, DecompositionTag::Canonical, &[0x115B8, 0x115AF]),
    DecompositionRecord::new(0x115BB, DecompositionTag::Canonical, &[0x115B9, 0x115AF]),
    DecompositionRecord::new(0x11938, DecompositionTag::Canonical, &[0x11935, 0x11930]),
    DecompositionRecord::new(0x1D15E, DecompositionTag::Canonical, &[0x1D157, 0x1D165]),
    DecompositionRecord::new(0x1D15F, DecompositionTag::Canonical, &[0x1D158, 0x1D165]),
    DecompositionRecord::new(0x1D160, DecompositionTag::Canonical, &[0x1D158, 0x1D165, 0x1D16E]),
    DecompositionRecord::new(0x1D161, DecompositionTag::Canonical, &[0x1D158, 0x1D165, 0x1D16F]),
    DecompositionRecord::new(0x1D162, DecompositionTag::Canonical, &[0x1D158, 0x1D165, 0x1D170]),
    DecompositionRecord::new(0x1D163, DecompositionTag::Canonical, &[0x1D158, 0x1D165, 0x1D171]),
    DecompositionRecord::new(0x1D164, DecompositionTag::Canonical, &[0x1D158, 0x1D165, 0x1D172]),
    DecompositionRecord::new(0x1D1BB, DecompositionTag::Canonical, &[0x1D1B9, 0x1D165]),
    DecompositionRecord::new(0x1D1BC, DecompositionTag::Canonical, &[0x1D1BA, 0x1D165]),
    DecompositionRecord::new(0x1D1BD, DecompositionTag::Canonical, &[0x1D1B9, 0x1D165, 0x1D16E]),
    DecompositionRecord::new(0x1D1BE, DecompositionTag::Canonical, &[0x1D1BA, 0x1D165, 0x1D16E]),
    DecompositionRecord::new(0x1D1BF, DecompositionTag::Canonical, &[0x1D1B9, 0x1D165, 0x1D16F]),
    DecompositionRecord::new(0x1D1C0, DecompositionTag::Canonical, &[0x1D1BA, 0x1D165, 0x1D16F]),
    DecompositionRecord::new(0x2F800, DecompositionTag::Canonical, &[0x4E3D]),
    DecompositionRecord::new(0x2F801, DecompositionTag::Canonical, &[0x4E38]),
    DecompositionRecord::new(0x2F802, DecompositionTag::Canonical, &[0x4E41]),
    DecompositionRecord::new(0x2F803, DecompositionTag::Canonical, &[0x20122]),
    DecompositionRecord::new(0x2F804, DecompositionTag::Canonical, &[0x4F60]),
    DecompositionRecord::new(0x2F805, DecompositionTag::Canonical, &[0x4FAE]),
    DecompositionRecord::new(0x2F806, DecompositionTag::Canonical, &[0x4FBB]),
    DecompositionRecord::new(0x2F807, DecompositionTag::Canonical, &[0x5002]),
    DecompositionRecord::new(0x2F808, DecompositionTag::Canonical, &[0x507A]),
    DecompositionRecord::new(0x2F809, DecompositionTag::Canonical, &[0x5099]),
    DecompositionRecord::new(0x2F80A, DecompositionTag::Canonical, &[0x50E7]),
    DecompositionRecord::new(0x2F80B, DecompositionTag::Canonical, &[0x50CF]),
    DecompositionRecord::new(0x2F80C, DecompositionTag::Canonical, &[0x349E]),
    DecompositionRecord::new(0x2F80D, DecompositionTag::Canonical, &[0x2063A]),
    DecompositionRecord::new(0x2F80E, DecompositionTag::Canonical, &[0x514D]),
    DecompositionRecord::new(0x2F80F, DecompositionTag::Canonical, &[0x5154]),
    DecompositionRecord::new(0x2F810, DecompositionTag::Canonical, &[0x5164]),
    DecompositionRecord::new(0x2F811, DecompositionTag::Canonical, &[0x5177]),
    DecompositionRecord::new(0x2F812, DecompositionTag::Canonical, &[0x2051C]),
    DecompositionRecord::new(0x2F813, DecompositionTag::Canonical, &[0x34B9]),
    DecompositionRecord::new(0x2F814, DecompositionTag::Canonical, &[0x5167]),
    DecompositionRecord::new(0x2F815, DecompositionTag::Canonical, &[0x518D]),
    DecompositionRecord::new(0x2F816, DecompositionTag::Canonical, &[0x2054B]),
    DecompositionRecord::new(0x2F817, DecompositionTag::Canonical, &[0x5197]),
    DecompositionRecord::new(0x2F818, DecompositionTag::Canonical, &[0x51A4]),
    DecompositionRecord::new(0x2F819, DecompositionTag::Canonical, &[0x4ECC]),
    DecompositionRecord::new(0x2F81A, DecompositionTag::Canonical, &[0x51AC]),
    DecompositionRecord::new(0x2F81B, DecompositionTag::Canonical, &[0x51B5]),
    DecompositionRecord::new(0x2F81C, DecompositionTag::Canonical, &[0x291DF]),
    DecompositionRecord::new(0x2F81D, DecompositionTag::Canonical, &[0x51F5]),
    DecompositionRecord::new(0x2F81E, DecompositionTag::Canonical, &[0x5203]),
    DecompositionRecord::new(0x2F81F, DecompositionTag::Canonical, &[0x34DF]),
    DecompositionRecord::new(0x2F820, DecompositionTag::Canonical, &[0x523B]),
    DecompositionRecord::new(0x2F821, DecompositionTag::Canonical, &[0x5246]),
    DecompositionRecord::new(0x2F822, DecompositionTag::Canonical, &[0x5272]),
    DecompositionRecord::new(0x2F823, DecompositionTag::Canonical, &[0x5277]),
    DecompositionRecord::new(0x2F824, DecompositionTag::Canonical, &[0x3515]),
    DecompositionRecord::new(0x2F825, DecompositionTag::Canonical, &[0x52C7]),
    DecompositionRecord::new(0x2F826, DecompositionTag::Canonical, &[0x52C9]),
    DecompositionRecord::new(0x2F827, DecompositionTag::Canonical, &[0x52E4]),
    DecompositionRecord::new(0x2F828, DecompositionTag::Canonical, &[0x52FA]),
    DecompositionRecord::new(0x2F829, DecompositionTag::Canonical, &[0x5305]),
    DecompositionRecord::new(0x2F82A, DecompositionTag::Canonical, &[0x5306]),
    DecompositionRecord::new(0x2F82B, DecompositionTag::Canonical, &[0x5317]),
    DecompositionRecord::new(0x2F82C, DecompositionTag::Canonical, &[0x5349]),
    DecompositionRecord::new(0x2F82D, DecompositionTag::Canonical, &[0x5351]),
    DecompositionRecord::new(0x2F82E, DecompositionTag::Canonical, &[0x535A]),
    DecompositionRecord::new(0x2F82F, DecompositionTag::Canonical, &[0x5373]),
    DecompositionRecord::new(0x2F830, DecompositionTag::Canonical, &[0x537D]),
    DecompositionRecord::new(0x2F831, DecompositionTag::Canonical, &[0x537F]),
    DecompositionRecord::new(0x2F832, DecompositionTag::Canonical, &[0x537F]),
    DecompositionRecord::new(0x2F833, DecompositionTag::Canonical, &[0x537F]),
    DecompositionRecord::new(0x2F834, DecompositionTag::Canonical, &[0x20A2C]),
    DecompositionRecord::new(0x2F835, DecompositionTag::Canonical, &[0x7070]),
    DecompositionRecord::new(0x2F836, DecompositionTag::Canonical, &[0x53CA]),
    DecompositionRecord::new(0x2F837, DecompositionTag::Canonical, &[0x53DF]),
    DecompositionRecord::new(0x2F838, DecompositionTag::Canonical, &[0x20B63]),
    DecompositionRecord::new(0x2F839, DecompositionTag::Canonical, &[0x53EB]),
    DecompositionRecord::new(0x2F83A, DecompositionTag::Canonical, &[0x53F1]),
    DecompositionRecord::new(0x2F83B, DecompositionTag::Canonical, &[0x5406]),
    DecompositionRecord::new(0x2F83C, DecompositionTag::Canonical, &[0x549E]),
    DecompositionRecord::new(0x2F83D, DecompositionTag::Canonical, &[0x5438]),
    DecompositionRecord::new(0x2F83E, DecompositionTag::Canonical, &[0x5448]),
    DecompositionRecord::new(0x2F83F, DecompositionTag::Canonical, &[0x5468]),
    DecompositionRecord::new(0x2F840, DecompositionTag::Canonical, &[0x54A2]),
    DecompositionRecord::new(0x2F841, DecompositionTag::Canonical, &[0x54F6]),
    DecompositionRecord::new(0x2F842, DecompositionTag::Canonical, &[0x5510]),
    DecompositionRecord::new(0x2F843, DecompositionTag::Canonical, &[0x5553]),
    DecompositionRecord::new(0x2F844, DecompositionTag::Canonical, &[0x5563]),
    DecompositionRecord::new(0x2F845, DecompositionTag::Canonical, &[0x5584]),
    DecompositionRecord::new(0x2F846, DecompositionTag::Canonical, &[0x5584]),
    DecompositionRecord::new(0x2F847, DecompositionTag::Canonical, &[0x5599]),
    DecompositionRecord::new(0x2F848, DecompositionTag::Canonical, &[0x55AB]),
    DecompositionRecord::new(0x2F849, DecompositionTag::Canonical, &[0x55B3]),
    DecompositionRecord::new(0x2F84A, DecompositionTag::Canonical, &[0x55C2]),
    DecompositionRecord::new(0x2F84B, DecompositionTag::Canonical, &[0x5716]),
    DecompositionRecord::new(0x2F84C, DecompositionTag::Canonical, &[0x5606]),
    DecompositionRecord::new(0x2F84D, DecompositionTag::Canonical, &[0x5717]),
    DecompositionRecord::new(0x2F84E, DecompositionTag::Canonical, &[0x5651]),
    DecompositionRecord::new(0x2F84F, DecompositionTag::Canonical, &[0x5674]),
    DecompositionRecord::new(0x2F850, DecompositionTag::Canonical, &[0x5207]),
    DecompositionRecord::new(0x2F851, DecompositionTag::Canonical, &[0x58EE]),
    DecompositionRecord::new(0x2F852, DecompositionTag::Canonical, &[0x57CE]),
    DecompositionRecord::new(0x2F853, DecompositionTag::Canonical, &[0x57F4]),
    DecompositionRecord::new(0x2F854, DecompositionTag::Canonical, &[0x580D]),
    DecompositionRecord::new(0x2F855, DecompositionTag::Canonical, &[0x578B]),
    DecompositionRecord::new(0x2F856, DecompositionTag::Canonical, &[0x5832]),
    DecompositionRecord::new(0x2F857, DecompositionTag::Canonical, &[0x5831]),
    DecompositionRecord::new(0x2F858, DecompositionTag::Canonical, &[0x58AC]),
    DecompositionRecord::new(0x2F859, DecompositionTag::Canonical, &[0x214E4]),
    DecompositionRecord::new(0x2F85A, DecompositionTag::Canonical, &[0x58F2]),
    DecompositionRecord::new(0x2F85B, DecompositionTag::Canonical, &[0x58F7]),
    DecompositionRecord::new(0x2F85C, DecompositionTag::Canonical, &[0x5906]),
    DecompositionRecord::new(0x2F85D, DecompositionTag::Canonical, &[0x591A]),
    DecompositionRecord::new(0x2F85E, DecompositionTag::Canonical, &[0x5922]),
    DecompositionRecord::new(0x2F85F, DecompositionTag::Canonical, &[0x5962]),
    DecompositionRecord::new(0x2F860, DecompositionTag::Canonical, &[0x216A8]),
    DecompositionRecord::new(0x2F861, DecompositionTag::Canonical, &[0x216EA]),
    DecompositionRecord::new(0x2F862, DecompositionTag::Canonical, &[0x59EC]),
    DecompositionRecord::new(0x2F863, DecompositionTag::Canonical, &[0x5A1B]),
    DecompositionRecord::new(0x2F864, DecompositionTag::Canonical, &[0x5A27]),
    DecompositionRecord::new(0x2F865, DecompositionTag::Canonical, &[0x59D8]),
    DecompositionRecord::new(0x2F866, DecompositionTag::Canonical, &[0x5A66]),
    DecompositionRecord::new(0x2F867, DecompositionTag::Canonical, &[0x36EE]),
    DecompositionRecord::new(0x2F868, DecompositionTag::Canonical, &[0x36FC]),
    DecompositionRecord::new(0x2F869, DecompositionTag::Canonical, &[0x5B08]),
    DecompositionRecord::new(0x2F86A, DecompositionTag::Canonical, &[0x5B3E]),
    DecompositionRecord::new(0x2F86B, DecompositionTag::Canonical, &[0x5B3E]),
    DecompositionRecord::new(0x2F86C, DecompositionTag::Canonical, &[0x219C8]),
    DecompositionRecord::new(0x2F86D, DecompositionTag::Canonical, &[0x5BC3]),
    DecompositionRecord::new(0x2F86E, DecompositionTag::Canonical, &[0x5BD8]),
    DecompositionRecord::new(0x2F86F, DecompositionTag::Canonical, &[0x5BE7]),
    DecompositionRecord::new(0x2F870, DecompositionTag::Canonical, &[0x5BF3]),
    DecompositionRecord::new(0x2F871, DecompositionTag::Canonical, &[0x21B18]),
    DecompositionRecord::new(0x2F872, DecompositionTag::Canonical, &[0x5BFF]),
    DecompositionRecord::new(0x2F873, DecompositionTag::Canonical, &[0x5C06]),
    DecompositionRecord::new(0x2F874, DecompositionTag::Canonical, &[0x5F53]),
    DecompositionRecord::new(0x2F875, DecompositionTag::Canonical, &[0x5C22]),
    DecompositionRecord::new(0x2F876, DecompositionTag::Canonical, &[0x3781]),
    DecompositionRecord::new(0x2F877, DecompositionTag::Canonical, &[0x5C60]),
    DecompositionRecord::new(0x2F878, DecompositionTag::Canonical, &[0x5C6E]),
    DecompositionRecord::new(0x2F879, DecompositionTag::Canonical, &[0x5CC0]),
    DecompositionRecord::new(0x2F87A, DecompositionTag::Canonical, &[0x5C8D]),
    DecompositionRecord::new(0x2F87B, DecompositionTag::Canonical, &[0x21DE4]),
    DecompositionRecord::new(0x2F87C, DecompositionTag::Canonical, &[0x5D43]),
    DecompositionRecord::new(0x2F87D, DecompositionTag::Canonical, &[0x21DE6]),
    DecompositionRecord::new(0x2F87E, DecompositionTag::Canonical, &[0x5D6E]),
    DecompositionRecord::new(0x2F87F, DecompositionTag::Canonical, &[0x5D6B]),
    DecompositionRecord::new(0x2F880, DecompositionTag::Canonical, &[0x5D7C]),
    DecompositionRecord::new(0x2F881, DecompositionTag::Canonical, &[0x5DE1]),
    DecompositionRecord::new(0x2F882, DecompositionTag::Canonical, &[0x5DE2]),
    DecompositionRecord::new(0x2F883, DecompositionTag::Canonical, &[0x382F]),
    DecompositionRecord::new(0x2F884, DecompositionTag::Canonical, &[0x5DFD]),
    DecompositionRecord::new(0x2F885, DecompositionTag::Canonical, &[0x5E28]),
    DecompositionRecord::new(0x2F886, DecompositionTag::Canonical, &[0x5E3D]),
    DecompositionRecord::new(0x2F887, DecompositionTag::Canonical, &[0x5E69]),
    DecompositionRecord::new(0x2F888, DecompositionTag::Canonical, &[0x3862]),
    DecompositionRecord::new(0x2F889, DecompositionTag::Canonical, &[0x22183]),
    DecompositionRecord::new(0x2F88A, DecompositionTag::Canonical, &[0x387C]),
    DecompositionRecord::new(0x2F88B, DecompositionTag::Canonical, &[0x5EB0]),
    DecompositionRecord::new(0x2F88C, DecompositionTag::Canonical, &[0x5EB3]),
    DecompositionRecord::new(0x2F88D, DecompositionTag::Canonical, &[0x5EB6]),
    DecompositionRecord::new(0x2F88E, DecompositionTag::Canonical, &[0x5ECA]),
    DecompositionRecord::new(0x2F88F, DecompositionTag::Canonical, &[0x2A392]),
    DecompositionRecord::new(0x2F890, DecompositionTag::Canonical, &[0x5EFE]),
    DecompositionRecord::new(0x2F891, DecompositionTag::Canonical, &[0x22331]),
    DecompositionRecord::new(0x2F892, DecompositionTag::Canonical, &[0x22331]),
    DecompositionRecord::new(0x2F893, DecompositionTag::Canonical, &[0x8201]),
    DecompositionRecord::new(0x2F894, DecompositionTag::Canonical, &[0x5F22]),
    DecompositionRecord::new(0x2F895, DecompositionTag::Canonical, &[0x5F22]),
    DecompositionRecord::new(0x2F896, DecompositionTag::Canonical, &[0x38C7]),
    DecompositionRecord::new(0x2F897, DecompositionTag::Canonical, &[0x232B8]),
    DecompositionRecord::new(0x2F898, DecompositionTag::Canonical, &[0x261DA]),
    DecompositionRecord::new(0x2F899, DecompositionTag::Canonical, &[0x5F62]),
    DecompositionRecord::new(0x2F89A, DecompositionTag::Canonical, &[0x5F6B]),
    DecompositionRecord::new(0x2F89B, DecompositionTag::Canonical, &[0x38E3]),
    DecompositionRecord::new(0x2F89C, DecompositionTag::Canonical, &[0x5F9A]),
    DecompositionRecord::new(0x2F89D, DecompositionTag::Canonical, &[0x5FCD]),
    DecompositionRecord::new(0x2F89E, DecompositionTag::Canonical, &[0x5FD7]),
    DecompositionRecord::new(0x2F89F, DecompositionTag::Canonical, &[0x5FF9]),
    DecompositionRecord::new(0x2F8A0, DecompositionTag::Canonical, &[0x6081]),
    DecompositionRecord::new(0x2F8A1, DecompositionTag::Canonical, &[0x393A]),
    DecompositionRecord::new(0x2F8A2, DecompositionTag::Canonical, &[0x391C]),
    DecompositionRecord::new(0x2F8A3, DecompositionTag::Canonical, &[0x6094]),
    DecompositionRecord::new(0x2F8A4, DecompositionTag::Canonical, &[0x226D4]),
    DecompositionRecord::new(0x2F8A5, DecompositionTag::Canonical, &[0x60C7]),
    DecompositionRecord::new(0x2F8A6, DecompositionTag::Canonical, &[0x6148]),
    DecompositionRecord::new(0x2F8A7, DecompositionTag::Canonical, &[0x614C]),
    DecompositionRecord::new(0x2F8A8, DecompositionTag::Canonical, &[0x614E]),
    DecompositionRecord::new(0x2F8A9, DecompositionTag::Canonical, &[0x614C]),
    DecompositionRecord::new(0x2F8AA, DecompositionTag::Canonical, &[0x617A]),
    DecompositionRecord::new(0x2F8AB, DecompositionTag::Canonical, &[0x618E]),
    DecompositionRecord::new(0x2F8AC, DecompositionTag::Canonical, &[0x61B2]),
    DecompositionRecord::new(0x2F8AD, DecompositionTag::Canonical, &[0x61A4]),
    DecompositionRecord::new(0x2F8AE, DecompositionTag::Canonical, &[0x61AF]),
    DecompositionRecord::new(0x2F8AF, DecompositionTag::Canonical, &[0x61DE]),
    DecompositionRecord::new(0x2F8B0, DecompositionTag::Canonical, &[0x61F2]),
    DecompositionRecord::new(0x2F8B1, DecompositionTag::Canonical, &[0x61F6]),
    DecompositionRecord::new(0x2F8B2, DecompositionTag::Canonical, &[0x6210]),
    DecompositionRecord::new(0x2F8B3, DecompositionTag::Canonical, &[0x621B]),
    DecompositionRecord::new(0x2F8B4, DecompositionTag::Canonical, &[0x625D]),
    DecompositionRecord::new(0x2F8B5, DecompositionTag::Canonical, &[0x62B1]),
    DecompositionRecord::new(0x2F8B6, DecompositionTag::Canonical, &[0x62D4]),
    DecompositionRecord::new(0x2F8B7, DecompositionTag::Canonical, &[0x6350]),
    DecompositionRecord::new(0x2F8B8, DecompositionTag::Canonical, &[0x22B0C]),
    DecompositionRecord::new(0x2F8B9, DecompositionTag::Canonical, &[0x633D]),
    DecompositionRecord::new(0x2F8BA, DecompositionTag::Canonical, &[0x62FC]),
    DecompositionRecord::new(0x2F8BB, DecompositionTag::Canonical, &[0x6368]),
    DecompositionRecord::new(0x2F8BC, DecompositionTag::Canonical, &[0x6383]),
    DecompositionRecord::new(0x2F8BD, DecompositionTag::Canonical, &[0x63E4]),
    DecompositionRecord::new(0x2F8BE, DecompositionTag::Canonical, &[0x22BF1]),
    DecompositionRecord::new(0x2F8BF, DecompositionTag::Canonical, &[0x6422]),
    DecompositionRecord::new(0x2F8C0, DecompositionTag::Canonical, &[0x63C5]),
    DecompositionRecord::new(0x2F8C1, DecompositionTag::Canonical, &[0x63A9]),
    DecompositionRecord::new(0x2F8C2, DecompositionTag::Canonical, &[0x3A2E]),
    DecompositionRecord::new(0x2F8C3, DecompositionTag::Canonical, &[0x6469]),
    DecompositionRecord::new(0x2F8C4, DecompositionTag::Canonical, &[0x647E]),
    DecompositionRecord::new(0x2F8C5, DecompositionTag::Canonical, &[0x649D]),
    DecompositionRecord::new(0x2F8C6, DecompositionTag::Canonical, &[0x6477]),
    DecompositionRecord::new(0x2F8C7, DecompositionTag::Canonical, &[0x3A6C]),
    DecompositionRecord::new(0x2F8C8, DecompositionTag::Canonical, &[0x654F]),
    DecompositionRecord::new(0x2F8C9, DecompositionTag::Canonical, &[0x656C]),
    DecompositionRecord::new(0x2F8CA, DecompositionTag::Canonical, &[0x2300A]),
    DecompositionRecord::new(0x2F8CB, DecompositionTag::Canonical, &[0x65E3]),
    DecompositionRecord::new(0x2F8CC, DecompositionTag::Canonical, &[0x66F8]),
    DecompositionRecord::new(0x2F8CD, DecompositionTag::Canonical, &[0x6649]),
    DecompositionRecord::new(0x2F8CE, DecompositionTag::Canonical, &[0x3B19]),
    DecompositionRecord::new(0x2F8CF, DecompositionTag::Canonical, &[0x6691]),
    DecompositionRecord::new(0x2F8D0, DecompositionTag::Canonical, &[0x3B08]),
    DecompositionRecord::new(0x2F8D1, DecompositionTag::Canonical, &[0x3AE4]),
    DecompositionRecord::new(0x2F8D2, DecompositionTag::Canonical, &[0x5192]),
    DecompositionRecord::new(0x2F8D3, DecompositionTag::Canonical, &[0x5195]),
    DecompositionRecord::new(0x2F8D4, DecompositionTag::Canonical, &[0x6700]),
    DecompositionRecord::new(0x2F8D5, DecompositionTag::Canonical, &[0x669C]),
    DecompositionRecord::new(0x2F8D6, DecompositionTag::Canonical, &[0x80AD]),
    DecompositionRecord::new(0x2F8D7, DecompositionTag::Canonical, &[0x43D9]),
    DecompositionRecord::new(0x2F8D8, DecompositionTag::Canonical, &[0x6717]),
    DecompositionRecord::new(0x2F8D9, DecompositionTag::Canonical, &[0x671B]),
    DecompositionRecord::new(0x2F8DA, DecompositionTag::Canonical, &[0x6721]),
    DecompositionRecord::new(0x2F8DB, DecompositionTag::Canonical, &[0x675E]),
    DecompositionRecord::new(0x2F8DC, DecompositionTag::Canonical, &[0x6753]),
    DecompositionRecord::new(0x2F8DD, DecompositionTag::Canonical, &[0x233C3]),
    DecompositionRecord::new(0x2F8DE, DecompositionTag::Canonical, &[0x3B49]),
    DecompositionRecord::new(0x2F8DF, DecompositionTag::Canonical, &[0x67FA]),
    DecompositionRecord::new(0x2F8E0, DecompositionTag::Canonical, &[0x6785]),
    DecompositionRecord::new(0x2F8E1, DecompositionTag::Canonical, &[0x6852]),
    DecompositionRecord::new(0x2F8E2, DecompositionTag::Canonical, &[0x6885]),
    DecompositionRecord::new(0x2F8E3, DecompositionTag::Canonical, &[0x2346D]),
    DecompositionRecord::new(0x2F8E4, DecompositionTag::Canonical, &[0x688E]),
    DecompositionRecord::new(0x2F8E5, DecompositionTag::Canonical, &[0x681F]),
    DecompositionRecord::new(0x2F8E6, DecompositionTag::Canonical, &[0x6914]),
    DecompositionRecord::new(0x2F8E7, DecompositionTag::Canonical, &[0x3B9D]),
    DecompositionRecord::new(0x2F8E8, DecompositionTag::Canonical, &[0x6942]),
    DecompositionRecord::new(0x2F8E9, DecompositionTag::Canonical, &[0x69A3]),
    DecompositionRecord::new(0x2F8EA, DecompositionTag::Canonical, &[0x69EA]),
    DecompositionRecord::new(0x2F8EB, DecompositionTag::Canonical, &[0x6AA8]),
    DecompositionRecord::new(0x2F8EC, DecompositionTag::Canonical, &[0x236A3]),
    DecompositionRecord::new(0x2F8ED, DecompositionTag::Canonical, &[0x6ADB]),
    DecompositionRecord::new(0x2F8EE, DecompositionTag::Canonical, &[0x3C18]),
    DecompositionRecord::new(0x2F8EF, DecompositionTag::Canonical, &[0x6B21]),
    DecompositionRecord::new(0x2F8F0, DecompositionTag::Canonical, &[0x238A7]),
    DecompositionRecord::new(0x2F8F1, DecompositionTag::Canonical, &[0x6B54]),
    DecompositionRecord::new(0x2F8F2, DecompositionTag::Canonical, &[0x3C4E]),
    DecompositionRecord::new(0x2F8F3, DecompositionTag::Canonical, &[0x6B72]),
    DecompositionRecord::new(0x2F8F4, DecompositionTag::Canonical, &[0x6B9F]),
    DecompositionRecord::new(0x2F8F5, DecompositionTag::Canonical, &[0x6BBA]),
    DecompositionRecord::new(0x2F8F6, DecompositionTag::Canonical, &[0x6BBB]),
    DecompositionRecord::new(0x2F8F7, DecompositionTag::Canonical, &[0x23A8D]),
    DecompositionRecord::new(0x2F8F8, DecompositionTag::Canonical, &[0x21D0B]),
    DecompositionRecord::new(0x2F8F9, DecompositionTag::Canonical, &[0x23AFA]),
    DecompositionRecord::new(0x2F8FA, DecompositionTag::Canonical, &[0x6C4E]),
    DecompositionRecord::new(0x2F8FB, DecompositionTag::Canonical, &[0x23CBC]),
    DecompositionRecord::new(0x2F8FC, DecompositionTag::Canonical, &[0x6CBF]),
    DecompositionRecord::new(0x2F8FD, DecompositionTag::Canonical, &[0x6CCD]),
    DecompositionRecord::new(0x2F8FE, DecompositionTag::Canonical, &[0x6C67]),
    DecompositionRecord::new(0x2F8FF, DecompositionTag::Canonical, &[0x6D16]),
    DecompositionRecord::new(0x2F900, DecompositionTag::Canonical, &[0x6D3E]),
    DecompositionRecord::new(0x2F901, DecompositionTag::Canonical, &[0x6D77]),
    DecompositionRecord::new(0x2F902, DecompositionTag::Canonical, &[0x6D41]),
    DecompositionRecord::new(0x2F903, DecompositionTag::Canonical, &[0x6D69]),
    DecompositionRecord::new(0x2F904, DecompositionTag::Canonical, &[0x6D78]),
    DecompositionRecord::new(0x2F905, DecompositionTag::Canonical, &[0x6D85]),
    DecompositionRecord::new(0x2F906, DecompositionTag::Canonical, &[0x23D1E]),
    DecompositionRecord::new(0x2F907, DecompositionTag::Canonical, &[0x6D34]),
    DecompositionRecord::new(0x2F908, DecompositionTag::Canonical, &[0x6E2F]),
    DecompositionRecord::new(0x2F909, DecompositionTag::Canonical, &[0x6E6E]),
    DecompositionRecord::new(0x2F90A, DecompositionTag::Canonical, &[0x3D33]),
    DecompositionRecord::new(0x2F90B, DecompositionTag::Canonical, &[0x6ECB]),
    DecompositionRecord::new(0x2F90C, DecompositionTag::Canonical, &[0x6EC7]),
    DecompositionRecord::new(0x2F90D, DecompositionTag::Canonical, &[0x23ED1]),
    DecompositionRecord::new(0x2F90E, DecompositionTag::Canonical, &[0x6DF9]),
    DecompositionRecord::new(0x2F90F, DecompositionTag::Canonical, &[0x6F6E]),
    DecompositionRecord::new(0x2F910, DecompositionTag::Canonical, &[0x23F5E]),
    DecompositionRecord::new(0x2F911, DecompositionTag::Canonical, &[0x23F8E]),
    DecompositionRecord::new(0x2F912, DecompositionTag::Canonical, &[0x6FC6]),
    DecompositionRecord::new(0x2F913, DecompositionTag::Canonical, &[0x7039]),
    DecompositionRecord::new(0x2F914, DecompositionTag::Canonical, &[0x701E]),
    DecompositionRecord::new(0x2F915, DecompositionTag::Canonical, &[0x701B]),
    DecompositionRecord::new(0x2F916, DecompositionTag::Canonical, &[0x3D96]),
    DecompositionRecord::new(0x2F917, DecompositionTag::Canonical, &[0x704A]),
    DecompositionRecord::new(0x2F918, DecompositionTag::Canonical, &[0x707D]),
    DecompositionRecord::new(0x2F919, DecompositionTag::Canonical, &[0x7077]),
    DecompositionRecord::new(0x2F91A, DecompositionTag::Canonical, &[0x70AD]),
    DecompositionRecord::new(0x2F91B, DecompositionTag::Canonical, &[0x20525]),
    DecompositionRecord::new(0x2F91C, DecompositionTag::Canonical, &[0x7145]),
    DecompositionRecord::new(0x2F91D, DecompositionTag::Canonical, &[0x24263]),
    DecompositionRecord::new(0x2F91E, DecompositionTag::Canonical, &[0x719C]),
    DecompositionRecord::new(0x2F91F, DecompositionTag::Canonical, &[0x243AB]),
    DecompositionRecord::new(0x2F920, DecompositionTag::Canonical, &[0x7228]),
    DecompositionRecord::new(0x2F921, DecompositionTag::Canonical, &[0x7235]),
    DecompositionRecord::new(0x2F922, DecompositionTag::Canonical, &[0x7250]),
    DecompositionRecord::new(0x2F923, DecompositionTag::Canonical, &[0x24608]),
    DecompositionRecord::new(0x2F924, DecompositionTag::Canonical, &[0x7280]),
    DecompositionRecord::new(0x2F925, DecompositionTag::Canonical, &[0x7295]),
    DecompositionRecord::new(0x2F926, DecompositionTag::Canonical, &[0x24735]),
    DecompositionRecord::new(0x2F927, DecompositionTag::Canonical, &[0x24814]),
    DecompositionRecord::new(0x2F928, DecompositionTag::Canonical, &[0x737A]),
    DecompositionRecord::new(0x2F929, DecompositionTag::Canonical, &[0x738B]),
    DecompositionRecord::new(0x2F92A, DecompositionTag::Canonical, &[0x3EAC]),
    DecompositionRecord::new(0x2F92B, DecompositionTag::Canonical, &[0x73A5]),
    DecompositionRecord::new(0x2F92C, DecompositionTag::Canonical, &[0x3EB8]),
    DecompositionRecord::new(0x2F92D, DecompositionTag::Canonical, &[0x3EB8]),
    DecompositionRecord::new(0x2F92E, DecompositionTag::Canonical, &[0x7447]),
    DecompositionRecord::new(0x2F92F, DecompositionTag::Canonical, &[0x745C]),
    DecompositionRecord::new(0x2F930, DecompositionTag::Canonical, &[0x7471]),
    DecompositionRecord::new(0x2F931, DecompositionTag::Canonical, &[0x7485]),
    DecompositionRecord::new(0x2F932, DecompositionTag::Canonical, &[0x74CA]),
    DecompositionRecord::new(0x2F933, DecompositionTag::Canonical, &[0x3F1B]),
    DecompositionRecord::new(0x2F934, DecompositionTag::Canonical, &[0x7524]),
    DecompositionRecord::new(0x2F935, DecompositionTag::Canonical, &[0x24C36]),
    DecompositionRecord::new(0x2F936, DecompositionTag::Canonical, &[0x753E]),
    DecompositionRecord::new(0x2F937, DecompositionTag::Canonical, &[0x24C92]),
    DecompositionRecord::new(0x2F938, DecompositionTag::Canonical, &[0x7570]),
    DecompositionRecord::new(0x2F939, DecompositionTag::Canonical, &[0x2219F]),
    DecompositionRecord::new(0x2F93A, DecompositionTag::Canonical, &[0x7610]),
    DecompositionRecord::new(0x2F93B, DecompositionTag::Canonical, &[0x24FA1]),
    DecompositionRecord::new(0x2F93C, DecompositionTag::Canonical, &[0x24FB8]),
    DecompositionRecord::new(0x2F93D, DecompositionTag::Canonical, &[0x25044]),
    DecompositionRecord::new(0x2F93E, DecompositionTag::Canonical, &[0x3FFC]),
    DecompositionRecord::new(0x2F93F, DecompositionTag::Canonical, &[0x4008]),
    DecompositionRecord::new(0x2F940, DecompositionTag::Canonical, &[0x76F4]),
    DecompositionRecord::new(0x2F941, DecompositionTag::Canonical, &[0x250F3]),
    DecompositionRecord::new(0x2F942, DecompositionTag::Canonical, &[0x250F2]),
    DecompositionRecord::new(0x2F943, DecompositionTag::Canonical, &[0x25119]),
    DecompositionRecord::new(0x2F944, DecompositionTag::Canonical, &[0x25133]),
    DecompositionRecord::new(0x2F945, DecompositionTag::Canonical, &[0x771E]),
    DecompositionRecord::new(0x2F946, DecompositionTag::Canonical, &[0x771F]),
    DecompositionRecord::new(0x2F947, DecompositionTag::Canonical, &[0x771F]),
    DecompositionRecord::new(0x2F948, DecompositionTag::Canonical, &[0x774A]),
    DecompositionRecord::new(0x2F949, DecompositionTag::Canonical, &[0x4039]),
    DecompositionRecord::new(0x2F94A, DecompositionTag::Canonical, &[0x778B]),
    DecompositionRecord::new(0x2F94B, DecompositionTag::Canonical, &[0x4046]),
    DecompositionRecord::new(0x2F94C, DecompositionTag::Canonical, &[0x4096]),
    DecompositionRecord::new(0x2F94D, DecompositionTag::Canonical, &[0x2541D]),
    DecompositionRecord::new(0x2F94E, DecompositionTag::Canonical, &[0x784E]),
    DecompositionRecord::new(0x2F94F, DecompositionTag::Canonical, &[0x788C]),
    DecompositionRecord::new(0x2F950, DecompositionTag::Canonical, &[0x78CC]),
    DecompositionRecord::new(0x2F951, DecompositionTag::Canonical, &[0x40E3]),
    DecompositionRecord::new(0x2F952, DecompositionTag::Canonical, &[0x25626]),
    DecompositionRecord::new(0x2F953, DecompositionTag::Canonical, &[0x7956]),
    DecompositionRecord::new(0x2F954, DecompositionTag::Canonical, &[0x2569A]),
    DecompositionRecord::new(0x2F955, DecompositionTag::Canonical, &[0x256C5]),
    DecompositionRecord::new(0x2F956, DecompositionTag::Canonical, &[0x798F]),
    DecompositionRecord::new(0x2F957, DecompositionTag::Canonical, &[0x79EB]),
    DecompositionRecord::new(0x2F958, DecompositionTag::Canonical, &[0x412F]),
    DecompositionRecord::new(0x2F959, DecompositionTag::Canonical, &[0x7A40]),
    DecompositionRecord::new(0x2F95A, DecompositionTag::Canonical, &[0x7A4A]),
    DecompositionRecord::new(0x2F95B, DecompositionTag::Canonical, &[0x7A4F]),
    DecompositionRecord::new(0x2F95C, DecompositionTag::Canonical, &[0x2597C]),
    DecompositionRecord::new(0x2F95D, DecompositionTag::Canonical, &[0x25AA7]),
    DecompositionRecord::new(0x2F95E, DecompositionTag::Canonical, &[0x25AA7]),
    DecompositionRecord::new(0x2F95F, DecompositionTag::Canonical, &[0x7AEE]),
    DecompositionRecord::new(0x2F960, DecompositionTag::Canonical, &[0x4202]),
    DecompositionRecord::new(0x2F961, DecompositionTag::Canonical, &[0x25BAB]),
    DecompositionRecord::new(0x2F962, DecompositionTag::Canonical, &[0x7BC6]),
    DecompositionRecord::new(0x2F963, DecompositionTag::Canonical, &[0x7BC9]),
    DecompositionRecord::new(0x2F964, DecompositionTag::Canonical, &[0x4227]),
    DecompositionRecord::new(0x2F965, DecompositionTag::Canonical, &[0x25C80]),
    DecompositionRecord::new(0x2F966, DecompositionTag::Canonical, &[0x7CD2]),
    DecompositionRecord::new(0x2F967, DecompositionTag::Canonical, &[0x42A0]),
    DecompositionRecord::new(0x2F968, DecompositionTag::Canonical, &[0x7CE8]),
    DecompositionRecord::new(0x2F969, DecompositionTag::Canonical, &[0x7CE3]),
    DecompositionRecord::new(0x2F96A, DecompositionTag::Canonical, &[0x7D00]),
    DecompositionRecord::new(0x2F96B, DecompositionTag::Canonical, &[0x25F86]),
    DecompositionRecord::new(0x2F96C, DecompositionTag::Canonical, &[0x7D63]),
    DecompositionRecord::new(0x2F96D, DecompositionTag::Canonical, &[0x4301]),
    DecompositionRecord::new(0x2F96E, DecompositionTag::Canonical, &[0x7DC7]),
    DecompositionRecord::new(0x2F96F, DecompositionTag::Canonical, &[0x7E02]),
    DecompositionRecord::new(0x2F970, DecompositionTag::Canonical, &[0x7E45]),
    DecompositionRecord::new(0x2F971, DecompositionTag::Canonical, &[0x4334]),
    DecompositionRecord::new(0x2F972, DecompositionTag::Canonical, &[0x26228]),
    DecompositionRecord::new(0x2F973, DecompositionTag::Canonical, &[0x26247]),
    DecompositionRecord::new(0x2F974, DecompositionTag::Canonical, &[0x4359]),
    DecompositionRecord::new(0x2F975, DecompositionTag::Canonical, &[0x262D9]),
    DecompositionRecord::new(0x2F976, DecompositionTag::Canonical, &[0x7F7A]),
    DecompositionRecord::new(0x2F977, DecompositionTag::Canonical, &[0x2633E]),
    DecompositionRecord::new(0x2F978, DecompositionTag::Canonical, &[0x7F95]),
    DecompositionRecord::new(0x2F979, DecompositionTag::Canonical, &[0x7FFA]),
    DecompositionRecord::new(0x2F97A, DecompositionTag::Canonical, &[0x8005]),
    DecompositionRecord::new(0x2F97B, DecompositionTag::Canonical, &[0x264DA]),
    DecompositionRecord::new(0x2F97C, DecompositionTag::Canonical, &[0x26523]),
    DecompositionRecord::new(0x2F97D, DecompositionTag::Canonical, &[0x8060]),
    DecompositionRecord::new(0x2F97E, DecompositionTag::Canonical, &[0x265A8]),
    DecompositionRecord::new(0x2F97F, DecompositionTag::Canonical, &[0x8070]),
    DecompositionRecord::new(0x2F980, DecompositionTag::Canonical, &[0x2335F]),
    DecompositionRecord::new(0x2F981, DecompositionTag::Canonical, &[0x43D5]),
    DecompositionRecord::new(0x2F982, DecompositionTag::Canonical, &[0x80B2]),
    DecompositionRecord::new(0x2F983, DecompositionTag::Canonical, &[0x8103]),
    DecompositionRecord::new(0x2F984, DecompositionTag::Canonical, &[0x440B]),
    DecompositionRecord::new(0x2F985, DecompositionTag::Canonical, &[0x813E]),
    DecompositionRecord::new(0x2F986, DecompositionTag::Canonical, &[0x5AB5]),
    DecompositionRecord::new(0x2F987, DecompositionTag::Canonical, &[0x267A7]),
    DecompositionRecord::new(0x2F988, DecompositionTag::Canonical, &[0x267B5]),
    DecompositionRecord::new(0x2F989, DecompositionTag::Canonical, &[0x23393]),
    DecompositionRecord::new(0x2F98A, DecompositionTag::Canonical, &[0x2339C]),
    DecompositionRecord::new(0x2F98B, DecompositionTag::Canonical, &[0x8201]),
    DecompositionRecord::new(0x2F98C, DecompositionTag::Canonical, &[0x8204]),
    DecompositionRecord::new(0x2F98D, DecompositionTag::Canonical, &[0x8F9E]),
    DecompositionRecord::new(0x2F98E, DecompositionTag::Canonical, &[0x446B]),
    DecompositionRecord::new(0x2F98F, DecompositionTag::Canonical, &[0x8291]),
    DecompositionRecord::new(0x2F990, DecompositionTag::Canonical, &[0x828B]),
    DecompositionRecord::new(0x2F991, DecompositionTag::Canonical, &[0x829D]),
    DecompositionRecord::new(0x2F992, DecompositionTag::Canonical, &[0x52B3]),
    DecompositionRecord::new(0x2F993, DecompositionTag::Canonical, &[0x82B1]),
    DecompositionRecord::new(0x2F994, DecompositionTag::Canonical, &[0x82B3]),
    DecompositionRecord::new(0x2F995, DecompositionTag::Canonical, &[0x82BD]),
    DecompositionRecord::new(0x2F996, DecompositionTag::Canonical, &[0x82E6]),
    DecompositionRecord::new(0x2F997, DecompositionTag::Canonical, &[0x26B3C]),
    DecompositionRecord::new(0x2F998, DecompositionTag::Canonical, &[0x82E5]),
    DecompositionRecord::new(0x2F999, DecompositionTag::Canonical, &[0x831D]),
    DecompositionRecord::new(0x2F99A, DecompositionTag::Canonical, &[0x8363]),
    DecompositionRecord::new(0x2F99B, DecompositionTag::Canonical, &[0x83AD]),
    DecompositionRecord::new(0x2F99C, DecompositionTag::Canonical, &[0x8323]),
    DecompositionRecord::new(0x2F99D, DecompositionTag::Canonical, &[0x83BD]),
    DecompositionRecord::new(0x2F99E, DecompositionTag::Canonical, &[0x83E7]),
    DecompositionRecord::new(0x2F99F, DecompositionTag::Canonical, &[0x8457]),
    DecompositionRecord::new(0x2F9A0, DecompositionTag::Canonical, &[0x8353]),
    DecompositionRecord::new(0x2F9A1, DecompositionTag::Canonical, &[0x83CA]),
    DecompositionRecord::new(0x2F9A2, DecompositionTag::Canonical, &[0x83CC]),
    DecompositionRecord::new(0x2F9A3, DecompositionTag::Canonical, &[0x83DC]),
    DecompositionRecord::new(0x2F9A4, DecompositionTag::Canonical, &[0x26C36]),
    DecompositionRecord::new(0x2F9A5, DecompositionTag::Canonical, &[0x26D6B]),
    DecompositionRecord::new(0x2F9A6, DecompositionTag::Canonical, &[0x26CD5]),
    DecompositionRecord::new(0x2F9A7, DecompositionTag::Canonical, &[0x452B]),
    DecompositionRecord::new(0x2F9A8, DecompositionTag::Canonical, &[0x84F1]),
    DecompositionRecord::new(0x2F9A9, DecompositionTag::Canonical, &[0x84F3]),
    DecompositionRecord::new(0x2F9AA, DecompositionTag::Canonical, &[0x8516]),
    DecompositionRecord::new(0x2F9AB, DecompositionTag::Canonical, &[0x273CA]),
    DecompositionRecord::new(0x2F9AC, DecompositionTag::Canonical, &[0x8564]),
    DecompositionRecord::new(0x2F9AD, DecompositionTag::Canonical, &[0x26F2C]),
    DecompositionRecord::new(0x2F9AE, DecompositionTag::Canonical, &[0x455D]),
    DecompositionRecord::new(0x2F9AF, DecompositionTag::Canonical, &[0x4561]),
    DecompositionRecord::new(0x2F9B0, DecompositionTag::Canonical, &[0x26FB1]),
    DecompositionRecord::new(0x2F9B1, DecompositionTag::Canonical, &[0x270D2]),
    DecompositionRecord::new(0x2F9B2, DecompositionTag::Canonical, &[0x456B]),
    DecompositionRecord::new(0x2F9B3, DecompositionTag::Canonical, &[0x8650]),
    DecompositionRecord::new(0x2F9B4, DecompositionTag::Canonical, &[0x865C]),
    DecompositionRecord::new(0x2F9B5, DecompositionTag::Canonical, &[0x8667]),
    DecompositionRecord::new(0x2F9B6, DecompositionTag::Canonical, &[0x8669]),
    DecompositionRecord::new(0x2F9B7, DecompositionTag::Canonical, &[0x86A9]),
    DecompositionRecord::new(0x2F9B8, DecompositionTag::Canonical, &[0x8688]),
    DecompositionRecord::new(0x2F9B9, DecompositionTag::Canonical, &[0x870E]),
    DecompositionRecord::new(0x2F9BA, DecompositionTag::Canonical, &[0x86E2]),
    DecompositionRecord::new(0x2F9BB, DecompositionTag::Canonical, &[0x8779]),
    DecompositionRecord::new(0x2F9BC, DecompositionTag::Canonical, &[0x8728]),
    DecompositionRecord::new(0x2F9BD, DecompositionTag::Canonical, &[0x876B]),
    DecompositionRecord::new(0x2F9BE, DecompositionTag::Canonical, &[0x8786]),
    DecompositionRecord::new(0x2F9BF, DecompositionTag::Canonical, &[0x45D7]),
    DecompositionRecord::new(0x2F9C0, DecompositionTag::Canonical, &[0x87E1]),
    DecompositionRecord::new(0x2F9C1, DecompositionTag::Canonical, &[0x8801]),
    DecompositionRecord::new(0x2F9C2, DecompositionTag::Canonical, &[0x45F9]),
    DecompositionRecord::new(0x2F9C3, DecompositionTag::Canonical, &[0x8860]),
    DecompositionRecord::new(0x2F9C4, DecompositionTag::Canonical, &[0x8863]),
    DecompositionRecord::new(0x2F9C5, DecompositionTag::Canonical, &[0x27667]),
    DecompositionRecord::new(0x2F9C6, DecompositionTag::Canonical, &[0x88D7]),
    DecompositionRecord::new(0x2F9C7, DecompositionTag::Canonical, &[0x88DE]),
    DecompositionRecord::new(0x2F9C8, DecompositionTag::Canonical, &[0x4635]),
    DecompositionRecord::new(0x2F9C9, DecompositionTag::Canonical, &[0x88FA]),
    DecompositionRecord::new(0x2F9CA, DecompositionTag::Canonical, &[0x34BB]),
    DecompositionRecord::new(0x2F9CB, DecompositionTag::Canonical, &[0x278AE]),
    DecompositionRecord::new(0x2F9CC, DecompositionTag::Canonical, &[0x27966]),
    DecompositionRecord::new(0x2F9CD, DecompositionTag::Canonical, &[0x46BE]),
    DecompositionRecord::new(0x2F9CE, DecompositionTag::Canonical, &[0x46C7]),
    DecompositionRecord::new(0x2F9CF, DecompositionTag::Canonical, &[0x8AA0]),
    DecompositionRecord::new(0x2F9D0, DecompositionTag::Canonical, &[0x8AED]),
    DecompositionRecord::new(0x2F9D1, DecompositionTag::Canonical, &[0x8B8A]),
    DecompositionRecord::new(0x2F9D2, DecompositionTag::Canonical, &[0x8C55]),
    DecompositionRecord::new(0x2F9D3, DecompositionTag::Canonical, &[0x27CA8]),
    DecompositionRecord::new(0x2F9D4, DecompositionTag::Canonical, &[0x8CAB]),
    DecompositionRecord::new(0x2F9D5, DecompositionTag::Canonical, &[0x8CC1]),
    DecompositionRecord::new(0x2F9D6, DecompositionTag::Canonical, &[0x8D1B]),
    DecompositionRecord::new(0x2F9D7, DecompositionTag::Canonical, &[0x8D77]),
    DecompositionRecord::new(0x2F9D8, DecompositionTag::Canonical, &[0x27F2F]),
    DecompositionRecord::new(0x2F9D9, DecompositionTag::Canonical, &[0x20804]),
    DecompositionRecord::new(0x2F9DA, DecompositionTag::Canonical, &[0x8DCB]),
    DecompositionRecord::new(0x2F9DB, DecompositionTag::Canonical, &[0x8DBC]),
    DecompositionRecord::new(0x2F9DC, DecompositionTag::Canonical, &[0x8DF0]),
    DecompositionRecord::new(0x2F9DD, DecompositionTag::Canonical, &[0x208DE]),
    DecompositionRecord::new(0x2F9DE, DecompositionTag::Canonical, &[0x8ED4]),
    DecompositionRecord::new(0x2F9DF, DecompositionTag::Canonical, &[0x8F38]),
    DecompositionRecord::new(0x2F9E0, DecompositionTag::Canonical, &[0x285D2]),
    DecompositionRecord::new(0x2F9E1, DecompositionTag::Canonical, &[0x285ED]),
    DecompositionRecord::new(0x2F9E2, DecompositionTag::Canonical, &[0x9094]),
    DecompositionRecord::new(0x2F9E3, DecompositionTag::Canonical, &[0x90F1]),
    DecompositionRecord::new(0x2F9E4, DecompositionTag::Canonical, &[0x9111]),
    DecompositionRecord::new(0x2F9E5, DecompositionTag::Canonical, &[0x2872E]),
    DecompositionRecord::new(0x2F9E6, DecompositionTag::Canonical, &[0x911B]),
    DecompositionRecord::new(0x2F9E7, DecompositionTag::Canonical, &[0x9238]),
    DecompositionRecord::new(0x2F9E8, DecompositionTag::Canonical, &[0x92D7]),
    DecompositionRecord::new(0x2F9E9, DecompositionTag::Canonical, &[0x92D8]),
    DecompositionRecord::new(0x2F9EA, DecompositionTag::Canonical, &[0x927C]),
    DecompositionRecord::new(0x2F9EB, DecompositionTag::Canonical, &[0x93F9]),
    DecompositionRecord::new(0x2F9EC, DecompositionTag::Canonical, &[0x9415]),
    DecompositionRecord::new(0x2F9ED, DecompositionTag::Canonical, &[0x28BFA]),
    DecompositionRecord::new(0x2F9EE, DecompositionTag::Canonical, &[0x958B]),
    DecompositionRecord::new(0x2F9EF, DecompositionTag::Canonical, &[0x4995]),
    DecompositionRecord::new(0x2F9F0, DecompositionTag::Canonical, &[0x95B7]),
    DecompositionRecord::new(0x2F9F1, DecompositionTag::Canonical, &[0x28D77]),
    DecompositionRecord::new(0x2F9F2, DecompositionTag::Canonical, &[0x49E6]),
    DecompositionRecord::new(0x2F9F3, DecompositionTag::Canonical, &[0x96C3]),
    DecompositionRecord::new(0x2F9F4, DecompositionTag::Canonical, &[0x5DB2]),
    DecompositionRecord::new(0x2F9F5, DecompositionTag::Canonical, &[0x9723]),
    DecompositionRecord::new(0x2F9F6, DecompositionTag::Canonical, &[0x29145]),
    DecompositionRecord::new(0x2F9F7, DecompositionTag::Canonical, &[0x2921A]),
    DecompositionRecord::new(0x2F9F8, DecompositionTag::Canonical, &[0x4A6E]),
    DecompositionRecord::new(0x2F9F9, DecompositionTag::Canonical, &[0x4A76]),
    DecompositionRecord::new(0x2F9FA, DecompositionTag::Canonical, &[0x97E0]),
    DecompositionRecord::new(0x2F9FB, DecompositionTag::Canonical, &[0x2940A]),
    DecompositionRecord::new(0x2F9FC, DecompositionTag::Canonical, &[0x4AB2]),
    DecompositionRecord::new(0x2F9FD, DecompositionTag::Canonical, &[0x29496]),
    DecompositionRecord::new(0x2F9FE, DecompositionTag::Canonical, &[0x980B]),
    DecompositionRecord::new(0x2F9FF, DecompositionTag::Canonical, &[0x980B]),
    DecompositionRecord::new(0x2FA00, DecompositionTag::Canonical, &[0x9829]),
    DecompositionRecord::new(0x2FA01, DecompositionTag::Canonical, &[0x295B6]),
    DecompositionRecord::new(0x2FA02, DecompositionTag::Canonical, &[0x98E2]),
    DecompositionRecord::new(0x2FA03, DecompositionTag::Canonical, &[0x4B33]),
    DecompositionRecord::new(0x2FA04, DecompositionTag::Canonical, &[0x9929]),
    DecompositionRecord::new(0x2FA05, DecompositionTag::Canonical, &[0x99A7]),
    DecompositionRecord::new(0x2FA06, DecompositionTag::Canonical, &[0x99C2]),
    DecompositionRecord::new(0x2FA07, DecompositionTag::Canonical, &[0x99FE]),
    DecompositionRecord::new(0x2FA08, DecompositionTag::Canonical, &[0x4BCE]),
    DecompositionRecord::new(0x2FA09, DecompositionTag::Canonical, &[0x29B30]),
    DecompositionRecord::new(0x2FA0A, DecompositionTag::Canonical, &[0x9B12]),
    DecompositionRecord::new(0x2FA0B, DecompositionTag::Canonical, &[0x9C40]),
    DecompositionRecord::new(0x2FA0C, DecompositionTag::Canonical, &[0x9CFD]),
    DecompositionRecord::new(0x2FA0D, DecompositionTag::Canonical, &[0x4CCE]),
    DecompositionRecord::new(0x2FA0E, DecompositionTag::Canonical, &[0x4CED]),
    DecompositionRecord::new(0x2FA0F, DecompositionTag::Canonical, &[0x9D67]),
    DecompositionRecord::new(0x2FA10, DecompositionTag::Canonical, &[0x2A0CE]),
    DecompositionRecord::new(0x2FA11, DecompositionTag::Canonical, &[0x4CF8]),
    DecompositionRecord::new(0x2FA12, DecompositionTag::Canonical, &[0x2A105]),
    DecompositionRecord::new(0x2FA13, DecompositionTag::Canonical, &[0x2A20E]),
    DecompositionRecord::new(0x2FA14, DecompositionTag::Canonical, &[0x2A291]),
    DecompositionRecord::new(0x2FA15, DecompositionTag::Canonical, &[0x9EBB]),
    DecompositionRecord::new(0x2FA16, DecompositionTag::Canonical, &[0x4D56]),
    DecompositionRecord::new(0x2FA17, DecompositionTag::Canonical, &[0x9EF9]),
    DecompositionRecord::new(0x2FA18, DecompositionTag::Canonical, &[0x9EFE]),
    DecompositionRecord::new(0x2FA19, DecompositionTag::Canonical, &[0x9F05]),
    DecompositionRecord::new(0x2FA1A, DecompositionTag::Canonical, &[0x9F0F]),
    DecompositionRecord::new(0x2FA1B, DecompositionTag::Canonical, &[0x9F16]),
    DecompositionRecord::new(0x2FA1C, DecompositionTag::Canonical, &[0x9F3B]),
    DecompositionRecord::new(0x2FA1D, DecompositionTag::Canonical, &[0x2A600]),
];

pub const COMPATIBILITY_DECOMPOSITION: &[DecompositionRecord<'static>] = &[
    DecompositionRecord::new(0x00A0, DecompositionTag::Compatibility, &[0x0020]),
    DecompositionRecord::new(0x00A8, DecompositionTag::Compatibility, &[0x0020, 0x0308]),
    DecompositionRecord::new(0x00AA, DecompositionTag::Compatibility, &[0x0061]),
    DecompositionRecord::new(0x00AF, DecompositionTag::Compatibility, &[0x0020, 0x0304]),
    DecompositionRecord::new(0x00B2, DecompositionTag::Compatibility, &[0x0032]),
    DecompositionRecord::new(0x00B3, DecompositionTag::Compatibility, &[0x0033]),
    DecompositionRecord::new(0x00B4, DecompositionTag::Compatibility, &[0x0020, 0x0301]),
    DecompositionRecord::new(0x00B5, DecompositionTag::Compatibility, &[0x03BC]),
    DecompositionRecord::new(0x00B8, DecompositionTag::Compatibility, &[0x0020, 0x0327]),
    DecompositionRecord::new(0x00B9, DecompositionTag::Compatibility, &[0x0031]),
    DecompositionRecord::new(0x00BA, DecompositionTag::Compatibility, &[0x006F]),
    DecompositionRecord::new(0x00BC, DecompositionTag::Compatibility, &[0x0031, 0x2044, 0x0034]),
    DecompositionRecord::new(0x00BD, DecompositionTag::Compatibility, &[0x0031, 0x2044, 0x0032]),
    DecompositionRecord::new(0x00BE, DecompositionTag::Compatibility, &[0x0033, 0x2044, 0x0034]),
    DecompositionRecord::new(0x0132, DecompositionTag::Compatibility, &[0x0049, 0x004A]),
    DecompositionRecord::new(0x0133, DecompositionTag::Compatibility, &[0x0069, 0x006A]),
    DecompositionRecord::new(0x013F, DecompositionTag::Compatibility, &[0x004C, 0x00B7]),
    DecompositionRecord::new(0x0140, DecompositionTag::Compatibility, &[0x006C, 0x00B7]),
    DecompositionRecord::new(0x0149, DecompositionTag::Compatibility, &[0x02BC, 0x006E]),
    DecompositionRecord::new(0x017F, DecompositionTag::Compatibility, &[0x0073]),
    DecompositionRecord::new(0x01C4, DecompositionTag::Compatibility, &[0x0044, 0x005A, 0x030C]),
    DecompositionRecord::new(0x01C5, DecompositionTag::Compatibility, &[0x0044, 0x007A, 0x030C]),
    DecompositionRecord::new(0x01C6, DecompositionTag::Compatibility, &[0x0064, 0x007A, 0x030C]),
    DecompositionRecord::new(0x01C7, DecompositionTag::Compatibility, &[0x004C, 0x004A]),
    DecompositionRecord::new(0x01C8, DecompositionTag::Compatibility, &[0x004C, 0x006A]),
    DecompositionRecord::new(0x01C9, DecompositionTag::Compatibility, &[0x006C, 0x006A]),
    DecompositionRecord::new(0x01CA, DecompositionTag::Compatibility, &[0x004E, 0x004A]),
    DecompositionRecord::new(0x01CB, DecompositionTag::Compatibility, &[0x004E, 0x006A]),
    DecompositionRecord::new(0x01CC, DecompositionTag::Compatibility, &[0x006E, 0x006A]),
    DecompositionRecord::new(0x01F1, DecompositionTag::Compatibility, &[0x0044, 0x005A]),
    DecompositionRecord::new(0x01F2, DecompositionTag::Compatibility, &[0x0044, 0x007A]),
    DecompositionRecord::new(0x01F3, DecompositionTag::Compatibility, &[0x0064, 0x007A]),
    DecompositionRecord::new(0x02B0, DecompositionTag::Compatibility, &[0x0068]),
    DecompositionRecord::new(0x02B1, DecompositionTag::Compatibility, &[0x0266]),
    DecompositionRecord::new(0x02B2, DecompositionTag::Compatibility, &[0x006A]),
    DecompositionRecord::new(0x02B3, DecompositionTag::Compatibility, &[0x0072]),
    DecompositionRecord::new(0x02B4, DecompositionTag::Compatibility, &[0x0279]),
    DecompositionRecord::new(0x02B5, DecompositionTag::Compatibility, &[0x027B]),
    DecompositionRecord::new(0x02B6, DecompositionTag::Compatibility, &[0x0281]),
    DecompositionRecord::new(0x02B7, DecompositionTag::Compatibility, &[0x0077]),
    DecompositionRecord::new(0x02B8, DecompositionTag::Compatibility, &[0x0079]),
    DecompositionRecord::new(0x02D8, DecompositionTag::Compatibility, &[0x0020, 0x0306]),
    DecompositionRecord::new(0x02D9, DecompositionTag::Compatibility, &[0x0020, 0x0307]),
    DecompositionRecord::new(0x02DA, DecompositionTag::Compatibility, &[0x0020, 0x030A]),
    DecompositionRecord::new(0x02DB, DecompositionTag::Compatibility, &[0x0020, 0x0328]),
    DecompositionRecord::new(0x02DC, DecompositionTag::Compatibility, &[0x0020, 0x0303]),
    DecompositionRecord::new(0x02DD, DecompositionTag::Compatibility, &[0x0020, 0x030B]),
    DecompositionRecord::new(0x02E0, DecompositionTag::Compatibility, &[0x0263]),
    DecompositionRecord::new(0x02E1, DecompositionTag::Compatibility, &[0x006C]),
    DecompositionRecord::new(0x02E2, DecompositionTag::Compatibility, &[0x0073]),
    DecompositionRecord::new(0x02E3, DecompositionTag::Compatibility, &[0x0078]),
    DecompositionRecord::new(0x02E4, DecompositionTag::Compatibility, &[0x0295]),
    DecompositionRecord::new(0x037A, DecompositionTag::Compatibility, &[0x0020, 0x0345]),
    DecompositionRecord::new(0x0384, DecompositionTag::Compatibility, &[0x0020, 0x0301]),
    DecompositionRecord::new(0x0385, DecompositionTag::Compatibility, &[0x0020, 0x0308, 0x0301]),
    DecompositionRecord::new(0x03D0, DecompositionTag::Compatibility, &[0x03B2]),
    DecompositionRecord::new(0x03D1, DecompositionTag::Compatibility, &[0x03B8]),
    DecompositionRecord::new(0x03D2, DecompositionTag::Compatibility, &[0x03A5]),
    DecompositionRecord::new(0x03D3, DecompositionTag::Compatibility, &[0x03A5, 0x0301]),
    DecompositionRecord::new(0x03D4, DecompositionTag::Compatibility, &[0x03A5, 0x0308]),
    DecompositionRecord::new(0x03D5, DecompositionTag::Compatibility, &[0x03C6]),
    DecompositionRecord::new(0x03D6, DecompositionTag::Compatibility, &[0x03C0]),
    DecompositionRecord::new(0x03F0, DecompositionTag::Compatibility, &[0x03BA]),
    DecompositionRecord::new(0x03F1, DecompositionTag::Compatibility, &[0x03C1]),
    DecompositionRecord::new(0x03F2, DecompositionTag::Compatibility, &[0x03C2]),
    DecompositionRecord::new(0x03F4, DecompositionTag::Compatibility, &[0x0398]),
    DecompositionRecord::new(0x03F5, DecompositionTag::Compatibility, &[0x03B5]),
    DecompositionRecord::new(0x03F9, DecompositionTag::Compatibility, &[0x03A3]),
    DecompositionRecord::new(0x0587, DecompositionTag::Compatibility, &[0x0565, 0x0582]),
    DecompositionRecord::new(0x0675, DecompositionTag::Compatibility, &[0x0627, 0x0674]),
    DecompositionRecord::new(0x0676, DecompositionTag::Compatibility, &[0x0648, 0x0674]),
    DecompositionRecord::new(0x0677, DecompositionTag::Compatibility, &[0x06C7, 0x0674]),
    DecompositionRecord::new(0x0678, DecompositionTag::Compatibility, &[0x064A, 0x0674]),
    DecompositionRecord::new(0x0E33, DecompositionTag::Compatibility, &[0x0E4D, 0x0E32]),
    DecompositionRecord::new(0x0EB3, DecompositionTag::Compatibility, &[0x0ECD, 0x0EB2]),
    DecompositionRecord::new(0x0EDC, DecompositionTag::Compatibility, &[0x0EAB, 0x0E99]),
    DecompositionRecord::new(0x0EDD, DecompositionTag::Compatibility, &[0x0EAB, 0x0EA1]),
    DecompositionRecord::new(0x0F0C, DecompositionTag::Compatibility, &[0x0F0B]),
    DecompositionRecord::new(0x0F77, DecompositionTag::Compatibility, &[0x0FB2, 0x0F71, 0x0F80]),
    DecompositionRecord::new(0x0F79, DecompositionTag::Compatibility, &[0x0FB3, 0x0F71, 0x0F80]),
    DecompositionRecord::new(0x10FC, DecompositionTag::Compatibility, &[0x10DC]),
    DecompositionRecord::new(0x1D2C, DecompositionTag::Compatibility, &[0x0041]),
    DecompositionRecord::new(0x1D2D, DecompositionTag::Compatibility, &[0x00C6]),
    DecompositionRecord::new(0x1D2E, DecompositionTag::Compatibility, &[0x0042]),
    DecompositionRecord::new(0x1D30, DecompositionTag::Compatibility, &[0x0044]),
    DecompositionRecord::new(0x1D31, DecompositionTag::Compatibility, &[0x0045]),
    DecompositionRecord::new(0x1D32, DecompositionTag::Compatibility, &[0x018E]),
    DecompositionRecord::new(0x1D33, DecompositionTag::Compatibility, &[0x0047]),
    DecompositionRecord::new(0x1D34, DecompositionTag::Compatibility, &[0x0048]),
    DecompositionRecord::new(0x1D35, DecompositionTag::Compatibility, &[0x0049]),
    DecompositionRecord::new(0x1D36, DecompositionTag::Compatibility, &[0x004A]),
    DecompositionRecord::new(0x1D37, DecompositionTag::Compatibility, &[0x004B]),
    DecompositionRecord::new(0x1D38, DecompositionTag::Compatibility, &[0x004C]),
    DecompositionRecord::new(0x1D39, DecompositionTag::Compatibility, &[0x004D]),
    DecompositionRecord::new(0x1D3A, DecompositionTag::Compatibility, &[0x004E]),
    DecompositionRecord::new(0x1D3C, DecompositionTag::Compatibility, &[0x004F]),
    DecompositionRecord::new(0x1D3D, DecompositionTag::Compatibility, &[0x0222]),
    DecompositionRecord::new(0x1D3E, DecompositionTag::Compatibility, &[0x0050]),
    DecompositionRecord::new(0x1D3F, DecompositionTag::Compatibility, &[0x0052]),
    DecompositionRecord::new(0x1D40, DecompositionTag::Compatibility, &[0x0054]),
    DecompositionRecord::new(0x1D41, DecompositionTag::Compatibility, &[0x0055]),
    DecompositionRecord::new(0x1D42, DecompositionTag::Compatibility, &[0x0057]),
    DecompositionRecord::new(0x1D43, DecompositionTag::Compatibility, &[0x0061]),
    DecompositionRecord::new(0x1D44, DecompositionTag::Compatibility, &[0x0250]),
    DecompositionRecord::new(0x1D45, DecompositionTag::Compatibility, &[0x0251]),
    DecompositionRecord::new(0x1D46, DecompositionTag::Compatibility, &[0x1D02]),
    DecompositionRecord::new(0x1D47, DecompositionTag::Compatibility, &[0x0062]),
    DecompositionRecord::new(0x1D48, DecompositionTag::Compatibility, &[0x0064]),
    DecompositionRecord::new(0x1D49, DecompositionTag::Compatibility, &[0x0065]),
    DecompositionRecord::new(0x1D4A, DecompositionTag::Compatibility, &[0x0259]),
    DecompositionRecord::new(0x1D4B, DecompositionTag::Compatibility, &[0x025B]),
    DecompositionRecord::new(0x1D4C, DecompositionTag::Compatibility, &[0x025C]),
    DecompositionRecord::new(0x1D4D, DecompositionTag::Compatibility, &[0x0067]),
    DecompositionRecord::new(0x1D4F, DecompositionTag::Compatibility, &[0x006B]),
    DecompositionRecord::new(0x1D50, DecompositionTag::Compatibility, &[0x006D]),
    DecompositionRecord::new(0x1D51, DecompositionTag::Compatibility, &[0x014B]),
    DecompositionRecord::new(0x1D52, DecompositionTag::Compatibility, &[0x006F]),
    DecompositionRecord::new(0x1D53, DecompositionTag::Compatibility, &[0x0254]),
    DecompositionRecord::new(0x1D54, DecompositionTag::Compatibility, &[0x1D16]),
    DecompositionRecord::new(0x1D55, DecompositionTag::Compatibility, &[0x1D17]),
    DecompositionRecord::new(0x1D56, DecompositionTag::Compatibility, &[0x0070]),
    DecompositionRecord::new(0x1D57, DecompositionTag::Compatibility, &[0x0074]),
    DecompositionRecord::new(0x1D58, DecompositionTag::Compatibility, &[0x0075]),
    DecompositionRecord::new(0x1D59, DecompositionTag::Compatibility, &[0x1D1D]),
    DecompositionRecord::new(0x1D5A, DecompositionTag::Compatibility, &[0x026F]),
    DecompositionRecord::new(0x1D5B, DecompositionTag::Compatibility, &[0x0076]),
    DecompositionRecord::new(0x1D5C, DecompositionTag::Compatibility, &[0x1D25]),
    DecompositionRecord::new(0x1D5D, DecompositionTag::Compatibility, &[0x03B2]),
    DecompositionRecord::new(0x1D5E, DecompositionTag::Compatibility, &[0x03B3]),
    DecompositionRecord::new(0x1D5F, DecompositionTag::Compatibility, &[0x03B4]),
    DecompositionRecord::new(0x1D60, DecompositionTag::Compatibility, &[0x03C6]),
    DecompositionRecord::new(0x1D61, DecompositionTag::Compatibility, &[0x03C7]),
    DecompositionRecord::new(0x1D62, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0x1D63, DecompositionTag::Compatibility, &[0x0072]),
    DecompositionRecord::new(0x1D64, DecompositionTag::Compatibility, &[0x0075]),
    DecompositionRecord::new(0x1D65, DecompositionTag::Compatibility, &[0x0076]),
    DecompositionRecord::new(0x1D66, DecompositionTag::Compatibility, &[0x03B2]),
    DecompositionRecord::new(0x1D67, DecompositionTag::Compatibility, &[0x03B3]),
    DecompositionRecord::new(0x1D68, DecompositionTag::Compatibility, &[0x03C1]),
    DecompositionRecord::new(0x1D69, DecompositionTag::Compatibility, &[0x03C6]),
    DecompositionRecord::new(0x1D6A, DecompositionTag::Compatibility, &[0x03C7]),
    DecompositionRecord::new(0x1D78, DecompositionTag::Compatibility, &[0x043D]),
    DecompositionRecord::new(0x1D9B, DecompositionTag::Compatibility, &[0x0252]),
    DecompositionRecord::new(0x1D9C, DecompositionTag::Compatibility, &[0x0063]),
    DecompositionRecord::new(0x1D9D, DecompositionTag::Compatibility, &[0x0255]),
    DecompositionRecord::new(0x1D9E, DecompositionTag::Compatibility, &[0x00F0]),
    DecompositionRecord::new(0x1D9F, DecompositionTag::Compatibility, &[0x025C]),
    DecompositionRecord::new(0x1DA0, DecompositionTag::Compatibility, &[0x0066]),
    DecompositionRecord::new(0x1DA1, DecompositionTag::Compatibility, &[0x025F]),
    DecompositionRecord::new(0x1DA2, DecompositionTag::Compatibility, &[0x0261]),
    DecompositionRecord::new(0x1DA3, DecompositionTag::Compatibility, &[0x0265]),
    DecompositionRecord::new(0x1DA4, DecompositionTag::Compatibility, &[0x0268]),
    DecompositionRecord::new(0x1DA5, DecompositionTag::Compatibility, &[0x0269]),
    DecompositionRecord::new(0x1DA6, DecompositionTag::Compatibility, &[0x026A]),
    DecompositionRecord::new(0x1DA7, DecompositionTag::Compatibility, &[0x1D7B]),
    DecompositionRecord::new(0x1DA8, DecompositionTag::Compatibility, &[0x029D]),
    DecompositionRecord::new(0x1DA9, DecompositionTag::Compatibility, &[0x026D]),
    DecompositionRecord::new(0x1DAA, DecompositionTag::Compatibility, &[0x1D85]),
    DecompositionRecord::new(0x1DAB, DecompositionTag::Compatibility, &[0x029F]),
    DecompositionRecord::new(0x1DAC, DecompositionTag::Compatibility, &[0x0271]),
    DecompositionRecord::new(0x1DAD, DecompositionTag::Compatibility, &[0x0270]),
    DecompositionRecord::new(0x1DAE, DecompositionTag::Compatibility, &[0x0272]),
    DecompositionRecord::new(0x1DAF, DecompositionTag::Compatibility, &[0x0273]),
    DecompositionRecord::new(0x1DB0, DecompositionTag::Compatibility, &[0x0274]),
    DecompositionRecord::new(0x1DB1, DecompositionTag::Compatibility, &[0x0275]),
    DecompositionRecord::new(0x1DB2, DecompositionTag::Compatibility, &[0x0278]),
    DecompositionRecord::new(0x1DB3, DecompositionTag::Compatibility, &[0x0282]),
    DecompositionRecord::new(0x1DB4, DecompositionTag::Compatibility, &[0x0283]),
    DecompositionRecord::new(0x1DB5, DecompositionTag::Compatibility, &[0x01AB]),
    DecompositionRecord::new(0x1DB6, DecompositionTag::Compatibility, &[0x0289]),
    DecompositionRecord::new(0x1DB7, DecompositionTag::Compatibility, &[0x028A]),
    DecompositionRecord::new(0x1DB8, DecompositionTag::Compatibility, &[0x1D1C]),
    DecompositionRecord::new(0x1DB9, DecompositionTag::Compatibility, &[0x028B]),
    DecompositionRecord::new(0x1DBA, DecompositionTag::Compatibility, &[0x028C]),
    DecompositionRecord::new(0x1DBB, DecompositionTag::Compatibility, &[0x007A]),
    DecompositionRecord::new(0x1DBC, DecompositionTag::Compatibility, &[0x0290]),
    DecompositionRecord::new(0x1DBD, DecompositionTag::Compatibility, &[0x0291]),
    DecompositionRecord::new(0x1DBE, DecompositionTag::Compatibility, &[0x0292]),
    DecompositionRecord::new(0x1DBF, DecompositionTag::Compatibility, &[0x03B8]),
    DecompositionRecord::new(0x1E9A, DecompositionTag::Compatibility, &[0x0061, 0x02BE]),
    DecompositionRecord::new(0x1E9B, DecompositionTag::Compatibility, &[0x0073, 0x0307]),
    DecompositionRecord::new(0x1FBD, DecompositionTag::Compatibility, &[0x0020, 0x0313]),
    DecompositionRecord::new(0x1FBF, DecompositionTag::Compatibility, &[0x0020, 0x0313]),
    DecompositionRecord::new(0x1FC0, DecompositionTag::Compatibility, &[0x0020, 0x0342]),
    DecompositionRecord::new(0x1FC1, DecompositionTag::Compatibility, &[0x0020, 0x0308, 0x0342]),
    DecompositionRecord::new(0x1FCD, DecompositionTag::Compatibility, &[0x0020, 0x0313, 0x0300]),
    DecompositionRecord::new(0x1FCE, DecompositionTag::Compatibility, &[0x0020, 0x0313, 0x0301]),
    DecompositionRecord::new(0x1FCF, DecompositionTag::Compatibility, &[0x0020, 0x0313, 0x0342]),
    DecompositionRecord::new(0x1FDD, DecompositionTag::Compatibility, &[0x0020, 0x0314, 0x0300]),
    DecompositionRecord::new(0x1FDE, DecompositionTag::Compatibility, &[0x0020, 0x0314, 0x0301]),
    DecompositionRecord::new(0x1FDF, DecompositionTag::Compatibility, &[0x0020, 0x0314, 0x0342]),
    DecompositionRecord::new(0x1FED, DecompositionTag::Compatibility, &[0x0020, 0x0308, 0x0300]),
    DecompositionRecord::new(0x1FEE, DecompositionTag::Compatibility, &[0x0020, 0x0308, 0x0301]),
    DecompositionRecord::new(0x1FFD, DecompositionTag::Compatibility, &[0x0020, 0x0301]),
    DecompositionRecord::new(0x1FFE, DecompositionTag::Compatibility, &[0x0020, 0x0314]),
    DecompositionRecord::new(0x2000, DecompositionTag::Compatibility, &[0x0020]),
    DecompositionRecord::new(0x2001, DecompositionTag::Compatibility, &[0x0020]),
    DecompositionRecord::new(0x2002, DecompositionTag::Compatibility, &[0x0020]),
    DecompositionRecord::new(0x2003, DecompositionTag::Compatibility, &[0x0020]),
    DecompositionRecord::new(0x2004, DecompositionTag::Compatibility, &[0x0020]),
    DecompositionRecord::new(0x2005, DecompositionTag::Compatibility, &[0x0020]),
    DecompositionRecord::new(0x2006, DecompositionTag::Compatibility, &[0x0020]),
    DecompositionRecord::new(0x2007, DecompositionTag::Compatibility, &[0x0020]),
    DecompositionRecord::new(0x2008, DecompositionTag::Compatibility, &[0x0020]),
    DecompositionRecord::new(0x2009, DecompositionTag::Compatibility, &[0x0020]),
    DecompositionRecord::new(0x200A, DecompositionTag::Compatibility, &[0x0020]),
    DecompositionRecord::new(0x2011, DecompositionTag::Compatibility, &[0x2010]),
    DecompositionRecord::new(0x2017, DecompositionTag::Compatibility, &[0x0020, 0x0333]),
    DecompositionRecord::new(0x2024, DecompositionTag::Compatibility, &[0x002E]),
    DecompositionRecord::new(0x2025, DecompositionTag::Compatibility, &[0x002E, 0x002E]),
    DecompositionRecord::new(0x2026, DecompositionTag::Compatibility, &[0x002E, 0x002E, 0x002E]),
    DecompositionRecord::new(0x202F, DecompositionTag::Compatibility, &[0x0020]),
    DecompositionRecord::new(0x2033, DecompositionTag::Compatibility, &[0x2032, 0x2032]),
    DecompositionRecord::new(0x2034, DecompositionTag::Compatibility, &[0x2032, 0x2032, 0x2032]),
    DecompositionRecord::new(0x2036, DecompositionTag::Compatibility, &[0x2035, 0x2035]),
    DecompositionRecord::new(0x2037, DecompositionTag::Compatibility, &[0x2035, 0x2035, 0x2035]),
    DecompositionRecord::new(0x203C, DecompositionTag::Compatibility, &[0x0021, 0x0021]),
    DecompositionRecord::new(0x203E, DecompositionTag::Compatibility, &[0x0020, 0x0305]),
    DecompositionRecord::new(0x2047, DecompositionTag::Compatibility, &[0x003F, 0x003F]),
    DecompositionRecord::new(0x2048, DecompositionTag::Compatibility, &[0x003F, 0x0021]),
    DecompositionRecord::new(0x2049, DecompositionTag::Compatibility, &[0x0021, 0x003F]),
    DecompositionRecord::new(0x2057, DecompositionTag::Compatibility, &[0x2032, 0x2032, 0x2032, 0x2032]),
    DecompositionRecord::new(0x205F, DecompositionTag::Compatibility, &[0x0020]),
    DecompositionRecord::new(0x2070, DecompositionTag::Compatibility, &[0x0030]),
    DecompositionRecord::new(0x2071, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0x2074, DecompositionTag::Compatibility, &[0x0034]),
    DecompositionRecord::new(0x2075, DecompositionTag::Compatibility, &[0x0035]),
    DecompositionRecord::new(0x2076, DecompositionTag::Compatibility, &[0x0036]),
    DecompositionRecord::new(0x2077, DecompositionTag::Compatibility, &[0x0037]),
    DecompositionRecord::new(0x2078, DecompositionTag::Compatibility, &[0x0038]),
    DecompositionRecord::new(0x2079, DecompositionTag::Compatibility, &[0x0039]),
    DecompositionRecord::new(0x207A, DecompositionTag::Compatibility, &[0x002B]),
    DecompositionRecord::new(0x207B, DecompositionTag::Compatibility, &[0x2212]),
    DecompositionRecord::new(0x207C, DecompositionTag::Compatibility, &[0x003D]),
    DecompositionRecord::new(0x207D, DecompositionTag::Compatibility, &[0x0028]),
    DecompositionRecord::new(0x207E, DecompositionTag::Compatibility, &[0x0029]),
    DecompositionRecord::new(0x207F, DecompositionTag::Compatibility, &[0x006E]),
    DecompositionRecord::new(0x2080, DecompositionTag::Compatibility, &[0x0030]),
    DecompositionRecord::new(0x2081, DecompositionTag::Compatibility, &[0x0031]),
    DecompositionRecord::new(0x2082, DecompositionTag::Compatibility, &[0x0032]),
    DecompositionRecord::new(0x2083, DecompositionTag::Compatibility, &[0x0033]),
    DecompositionRecord::new(0x2084, DecompositionTag::Compatibility, &[0x0034]),
    DecompositionRecord::new(0x2085, DecompositionTag::Compatibility, &[0x0035]),
    DecompositionRecord::new(0x2086, DecompositionTag::Compatibility, &[0x0036]),
    DecompositionRecord::new(0x2087, DecompositionTag::Compatibility, &[0x0037]),
    DecompositionRecord::new(0x2088, DecompositionTag::Compatibility, &[0x0038]),
    DecompositionRecord::new(0x2089, DecompositionTag::Compatibility, &[0x0039]),
    DecompositionRecord::new(0x208A, DecompositionTag::Compatibility, &[0x002B]),
    DecompositionRecord::new(0x208B, DecompositionTag::Compatibility, &[0x2212]),
    DecompositionRecord::new(0x208C, DecompositionTag::Compatibility, &[0x003D]),
    DecompositionRecord::new(0x208D, DecompositionTag::Compatibility, &[0x0028]),
    DecompositionRecord::new(0x208E, DecompositionTag::Compatibility, &[0x0029]),
    DecompositionRecord::new(0x2090, DecompositionTag::Compatibility, &[0x0061]),
    DecompositionRecord::new(0x2091, DecompositionTag::Compatibility, &[0x0065]),
    DecompositionRecord::new(0x2092, DecompositionTag::Compatibility, &[0x006F]),
    DecompositionRecord::new(0x2093, DecompositionTag::Compatibility, &[0x0078]),
    DecompositionRecord::new(0x2094, DecompositionTag::Compatibility, &[0x0259]),
    DecompositionRecord::new(0x2095, DecompositionTag::Compatibility, &[0x0068]),
    DecompositionRecord::new(0x2096, DecompositionTag::Compatibility, &[0x006B]),
    DecompositionRecord::new(0x2097, DecompositionTag::Compatibility, &[0x006C]),
    DecompositionRecord::new(0x2098, DecompositionTag::Compatibility, &[0x006D]),
    DecompositionRecord::new(0x2099, DecompositionTag::Compatibility, &[0x006E]),
    DecompositionRecord::new(0x209A, DecompositionTag::Compatibility, &[0x0070]),
    DecompositionRecord::new(0x209B, DecompositionTag::Compatibility, &[0x0073]),
    DecompositionRecord::new(0x209C, DecompositionTag::Compatibility, &[0x0074]),
    DecompositionRecord::new(0x20A8, DecompositionTag::Compatibility, &[0x0052, 0x0073]),
    DecompositionRecord::new(0x2100, DecompositionTag::Compatibility, &[0x0061, 0x002F, 0x0063]),
    DecompositionRecord::new(0x2101, DecompositionTag::Compatibility, &[0x0061, 0x002F, 0x0073]),
    DecompositionRecord::new(0x2102, DecompositionTag::Compatibility, &[0x0043]),
    DecompositionRecord::new(0x2103, DecompositionTag::Compatibility, &[0x00B0, 0x0043]),
    DecompositionRecord::new(0x2105, DecompositionTag::Compatibility, &[0x0063, 0x002F, 0x006F]),
    DecompositionRecord::new(0x2106, DecompositionTag::Compatibility, &[0x0063, 0x002F, 0x0075]),
    DecompositionRecord::new(0x2107, DecompositionTag::Compatibility, &[0x0190]),
    DecompositionRecord::new(0x2109, DecompositionTag::Compatibility, &[0x00B0, 0x0046]),
    DecompositionRecord::new(0x210A, DecompositionTag::Compatibility, &[0x0067]),
    DecompositionRecord::new(0x210B, DecompositionTag::Compatibility, &[0x0048]),
    DecompositionRecord::new(0x210C, DecompositionTag::Compatibility, &[0x0048]),
    DecompositionRecord::new(0x210D, DecompositionTag::Compatibility, &[0x0048]),
    DecompositionRecord::new(0x210E, DecompositionTag::Compatibility, &[0x0068]),
    DecompositionRecord::new(0x210F, DecompositionTag::Compatibility, &[0x0127]),
    DecompositionRecord::new(0x2110, DecompositionTag::Compatibility, &[0x0049]),
    DecompositionRecord::new(0x2111, DecompositionTag::Compatibility, &[0x0049]),
    DecompositionRecord::new(0x2112, DecompositionTag::Compatibility, &[0x004C]),
    DecompositionRecord::new(0x2113, DecompositionTag::Compatibility, &[0x006C]),
    DecompositionRecord::new(0x2115, DecompositionTag::Compatibility, &[0x004E]),
    DecompositionRecord::new(0x2116, DecompositionTag::Compatibility, &[0x004E, 0x006F]),
    DecompositionRecord::new(0x2119, DecompositionTag::Compatibility, &[0x0050]),
    DecompositionRecord::new(0x211A, DecompositionTag::Compatibility, &[0x0051]),
    DecompositionRecord::new(0x211B, DecompositionTag::Compatibility, &[0x0052]),
    DecompositionRecord::new(0x211C, DecompositionTag::Compatibility, &[0x0052]),
    DecompositionRecord::new(0x211D, DecompositionTag::Compatibility, &[0x0052]),
    DecompositionRecord::new(0x2120, DecompositionTag::Compatibility, &[0x0053, 0x004D]),
    DecompositionRecord::new(0x2121, DecompositionTag::Compatibility, &[0x0054, 0x0045, 0x004C]),
    DecompositionRecord::new(0x2122, DecompositionTag::Compatibility, &[0x0054, 0x004D]),
    DecompositionRecord::new(0x2124, DecompositionTag::Compatibility, &[0x005A]),
    DecompositionRecord::new(0x2128, DecompositionTag::Compatibility, &[0x005A]),
    DecompositionRecord::new(0x212C, DecompositionTag::Compatibility, &[0x0042]),
    DecompositionRecord::new(0x212D, DecompositionTag::Compatibility, &[0x0043]),
    DecompositionRecord::new(0x212F, DecompositionTag::Compatibility, &[0x0065]),
    DecompositionRecord::new(0x2130, DecompositionTag::Compatibility, &[0x0045]),
    DecompositionRecord::new(0x2131, DecompositionTag::Compatibility, &[0x0046]),
    DecompositionRecord::new(0x2133, DecompositionTag::Compatibility, &[0x004D]),
    DecompositionRecord::new(0x2134, DecompositionTag::Compatibility, &[0x006F]),
    DecompositionRecord::new(0x2135, DecompositionTag::Compatibility, &[0x05D0]),
    DecompositionRecord::new(0x2136, DecompositionTag::Compatibility, &[0x05D1]),
    DecompositionRecord::new(0x2137, DecompositionTag::Compatibility, &[0x05D2]),
    DecompositionRecord::new(0x2138, DecompositionTag::Compatibility, &[0x05D3]),
    DecompositionRecord::new(0x2139, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0x213B, DecompositionTag::Compatibility, &[0x0046, 0x0041, 0x0058]),
    DecompositionRecord::new(0x213C, DecompositionTag::Compatibility, &[0x03C0]),
    DecompositionRecord::new(0x213D, DecompositionTag::Compatibility, &[0x03B3]),
    DecompositionRecord::new(0x213E, DecompositionTag::Compatibility, &[0x0393]),
    DecompositionRecord::new(0x213F, DecompositionTag::Compatibility, &[0x03A0]),
    DecompositionRecord::new(0x2140, DecompositionTag::Compatibility, &[0x2211]),
    DecompositionRecord::new(0x2145, DecompositionTag::Compatibility, &[0x0044]),
    DecompositionRecord::new(0x2146, DecompositionTag::Compatibility, &[0x0064]),
    DecompositionRecord::new(0x2147, DecompositionTag::Compatibility, &[0x0065]),
    DecompositionRecord::new(0x2148, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0x2149, DecompositionTag::Compatibility, &[0x006A]),
    DecompositionRecord::new(0x2150, DecompositionTag::Compatibility, &[0x0031, 0x2044, 0x0037]),
    DecompositionRecord::new(0x2151, DecompositionTag::Compatibility, &[0x0031, 0x2044, 0x0039]),
    DecompositionRecord::new(0x2152, DecompositionTag::Compatibility, &[0x0031, 0x2044, 0x0031, 0x0030]),
    DecompositionRecord::new(0x2153, DecompositionTag::Compatibility, &[0x0031, 0x2044, 0x0033]),
    DecompositionRecord::new(0x2154, DecompositionTag::Compatibility, &[0x0032, 0x2044, 0x0033]),
    DecompositionRecord::new(0x2155, DecompositionTag::Compatibility, &[0x0031, 0x2044, 0x0035]),
    DecompositionRecord::new(0x2156, DecompositionTag::Compatibility, &[0x0032, 0x2044, 0x0035]),
    DecompositionRecord::new(0x2157, DecompositionTag::Compatibility, &[0x0033, 0x2044, 0x0035]),
    DecompositionRecord::new(0x2158, DecompositionTag::Compatibility, &[0x0034, 0x2044, 0x0035]),
    DecompositionRecord::new(0x2159, DecompositionTag::Compatibility, &[0x0031, 0x2044, 0x0036]),
    DecompositionRecord::new(0x215A, DecompositionTag::Compatibility, &[0x0035, 0x2044, 0x0036]),
    DecompositionRecord::new(0x215B, DecompositionTag::Compatibility, &[0x0031, 0x2044, 0x0038]),
    DecompositionRecord::new(0x215C, DecompositionTag::Compatibility, &[0x0033, 0x2044, 0x0038]),
    DecompositionRecord::new(0x215D, DecompositionTag::Compatibility, &[0x0035, 0x2044, 0x0038]),
    DecompositionRecord::new(0x215E, DecompositionTag::Compatibility, &[0x0037, 0x2044, 0x0038]),
    DecompositionRecord::new(0x215F, DecompositionTag::Compatibility, &[0x0031, 0x2044]),
    DecompositionRecord::new(0x2160, DecompositionTag::Compatibility, &[0x0049]),
    DecompositionRecord::new(0x2161, DecompositionTag::Compatibility, &[0x0049, 0x0049]),
    DecompositionRecord::new(0x2162, DecompositionTag::Compatibility, &[0x0049, 0x0049, 0x0049]),
    DecompositionRecord::new(0x2163, DecompositionTag::Compatibility, &[0x0049, 0x0056]),
    DecompositionRecord::new(0x2164, DecompositionTag::Compatibility, &[0x0056]),
    DecompositionRecord::new(0x2165, DecompositionTag::Compatibility, &[0x0056, 0x0049]),
    DecompositionRecord::new(0x2166, DecompositionTag::Compatibility, &[0x0056, 0x0049, 0x0049]),
    DecompositionRecord::new(0x2167, DecompositionTag::Compatibility, &[0x0056, 0x0049, 0x0049, 0x0049]),
    DecompositionRecord::new(0x2168, DecompositionTag::Compatibility, &[0x0049, 0x0058]),
    DecompositionRecord::new(0x2169, DecompositionTag::Compatibility, &[0x0058]),
    DecompositionRecord::new(0x216A, DecompositionTag::Compatibility, &[0x0058, 0x0049]),
    DecompositionRecord::new(0x216B, DecompositionTag::Compatibility, &[0x0058, 0x0049, 0x0049]),
    DecompositionRecord::new(0x216C, DecompositionTag::Compatibility, &[0x004C]),
    DecompositionRecord::new(0x216D, DecompositionTag::Compatibility, &[0x0043]),
    DecompositionRecord::new(0x216E, DecompositionTag::Compatibility, &[0x0044]),
    DecompositionRecord::new(0x216F, DecompositionTag::Compatibility, &[0x004D]),
    DecompositionRecord::new(0x2170, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0x2171, DecompositionTag::Compatibility, &[0x0069, 0x0069]),
    DecompositionRecord::new(0x2172, DecompositionTag::Compatibility, &[0x0069, 0x0069, 0x0069]),
    DecompositionRecord::new(0x2173, DecompositionTag::Compatibility, &[0x0069, 0x0076]),
    DecompositionRecord::new(0x2174, DecompositionTag::Compatibility, &[0x0076]),
    DecompositionRecord::new(0x2175, DecompositionTag::Compatibility, &[0x0076, 0x0069]),
    DecompositionRecord::new(0x2176, DecompositionTag::Compatibility, &[0x0076, 0x0069, 0x0069]),
    DecompositionRecord::new(0x2177, DecompositionTag::Compatibility, &[0x0076, 0x0069, 0x0069, 0x0069]),
    DecompositionRecord::new(0x2178, DecompositionTag::Compatibility, &[0x0069, 0x0078]),
    DecompositionRecord::new(0x2179, DecompositionTag::Compatibility, &[0x0078]),
    DecompositionRecord::new(0x217A, DecompositionTag::Compatibility, &[0x0078, 0x0069]),
    DecompositionRecord::new(0x217B, DecompositionTag::Compatibility, &[0x0078, 0x0069, 0x0069]),
    DecompositionRecord::new(0x217C, DecompositionTag::Compatibility, &[0x006C]),
    DecompositionRecord::new(0x217D, DecompositionTag::Compatibility, &[0x0063]),
    DecompositionRecord::new(0x217E, DecompositionTag::Compatibility, &[0x0064]),
    DecompositionRecord::new(0x217F, DecompositionTag::Compatibility, &[0x006D]),
    DecompositionRecord::new(0x2189, DecompositionTag::Compatibility, &[0x0030, 0x2044, 0x0033]),
    DecompositionRecord::new(0x222C, DecompositionTag::Compatibility, &[0x222B, 0x222B]),
    DecompositionRecord::new(0x222D, DecompositionTag::Compatibility, &[0x222B, 0x222B, 0x222B]),
    DecompositionRecord::new(0x222F, DecompositionTag::Compatibility, &[0x222E, 0x222E]),
    DecompositionRecord::new(0x2230, DecompositionTag::Compatibility, &[0x222E, 0x222E, 0x222E]),
    DecompositionRecord::new(0x2460, DecompositionTag::Compatibility, &[0x0031]),
    DecompositionRecord::new(0x2461, DecompositionTag::Compatibility, &[0x0032]),
    DecompositionRecord::new(0x2462, DecompositionTag::Compatibility, &[0x0033]),
    DecompositionRecord::new(0x2463, DecompositionTag::Compatibility, &[0x0034]),
    DecompositionRecord::new(0x2464, DecompositionTag::Compatibility, &[0x0035]),
    DecompositionRecord::new(0x2465, DecompositionTag::Compatibility, &[0x0036]),
    DecompositionRecord::new(0x2466, DecompositionTag::Compatibility, &[0x0037]),
    DecompositionRecord::new(0x2467, DecompositionTag::Compatibility, &[0x0038]),
    DecompositionRecord::new(0x2468, DecompositionTag::Compatibility, &[0x0039]),
    DecompositionRecord::new(0x2469, DecompositionTag::Compatibility, &[0x0031, 0x0030]),
    DecompositionRecord::new(0x246A, DecompositionTag::Compatibility, &[0x0031, 0x0031]),
    DecompositionRecord::new(0x246B, DecompositionTag::Compatibility, &[0x0031, 0x0032]),
    DecompositionRecord::new(0x246C, DecompositionTag::Compatibility, &[0x0031, 0x0033]),
    DecompositionRecord::new(0x246D, DecompositionTag::Compatibility, &[0x0031, 0x0034]),
    DecompositionRecord::new(0x246E, DecompositionTag::Compatibility, &[0x0031, 0x0035]),
    DecompositionRecord::new(0x246F, DecompositionTag::Compatibility, &[0x0031, 0x0036]),
    DecompositionRecord::new(0x2470, DecompositionTag::Compatibility, &[0x0031, 0x0037]),
    DecompositionRecord::new(0x2471, DecompositionTag::Compatibility, &[0x0031, 0x0038]),
    DecompositionRecord::new(0x2472, DecompositionTag::Compatibility, &[0x0031, 0x0039]),
    DecompositionRecord::new(0x2473, DecompositionTag::Compatibility, &[0x0032, 0x0030]),
    DecompositionRecord::new(0x2474, DecompositionTag::Compatibility, &[0x0028, 0x0031, 0x0029]),
    DecompositionRecord::new(0x2475, DecompositionTag::Compatibility, &[0x0028, 0x0032, 0x0029]),
    DecompositionRecord::new(0x2476, DecompositionTag::Compatibility, &[0x0028, 0x0033, 0x0029]),
    DecompositionRecord::new(0x2477, DecompositionTag::Compatibility, &[0x0028, 0x0034, 0x0029]),
    DecompositionRecord::new(0x2478, DecompositionTag::Compatibility, &[0x0028, 0x0035, 0x0029]),
    DecompositionRecord::new(0x2479, DecompositionTag::Compatibility, &[0x0028, 0x0036, 0x0029]),
    DecompositionRecord::new(0x247A, DecompositionTag::Compatibility, &[0x0028, 0x0037, 0x0029]),
    DecompositionRecord::new(0x247B, DecompositionTag::Compatibility, &[0x0028, 0x0038, 0x0029]),
    DecompositionRecord::new(0x247C, DecompositionTag::Compatibility, &[0x0028, 0x0039, 0x0029]),
    DecompositionRecord::new(0x247D, DecompositionTag::Compatibility, &[0x0028, 0x0031, 0x0030, 0x0029]),
    DecompositionRecord::new(0x247E, DecompositionTag::Compatibility, &[0x0028, 0x0031, 0x0031, 0x0029]),
    DecompositionRecord::new(0x247F, DecompositionTag::Compatibility, &[0x0028, 0x0031, 0x0032, 0x0029]),
    DecompositionRecord::new(0x2480, DecompositionTag::Compatibility, &[0x0028, 0x0031, 0x0033, 0x0029]),
    DecompositionRecord::new(0x2481, DecompositionTag::Compatibility, &[0x0028, 0x0031, 0x0034, 0x0029]),
    DecompositionRecord::new(0x2482, DecompositionTag::Compatibility, &[0x0028, 0x0031, 0x0035, 0x0029]),
    DecompositionRecord::new(0x2483, DecompositionTag::Compatibility, &[0x0028, 0x0031, 0x0036, 0x0029]),
    DecompositionRecord::new(0x2484, DecompositionTag::Compatibility, &[0x0028, 0x0031, 0x0037, 0x0029]),
    DecompositionRecord::new(0x2485, DecompositionTag::Compatibility, &[0x0028, 0x0031, 0x0038, 0x0029]),
    DecompositionRecord::new(0x2486, DecompositionTag::Compatibility, &[0x0028, 0x0031, 0x0039, 0x0029]),
    DecompositionRecord::new(0x2487, DecompositionTag::Compatibility, &[0x0028, 0x0032, 0x0030, 0x0029]),
    DecompositionRecord::new(0x2488, DecompositionTag::Compatibility, &[0x0031, 0x002E]),
    DecompositionRecord::new(0x2489, DecompositionTag::Compatibility, &[0x0032, 0x002E]),
    DecompositionRecord::new(0x248A, DecompositionTag::Compatibility, &[0x0033, 0x002E]),
    DecompositionRecord::new(0x248B, DecompositionTag::Compatibility, &[0x0034, 0x002E]),
    DecompositionRecord::new(0x248C, DecompositionTag::Compatibility, &[0x0035, 0x002E]),
    DecompositionRecord::new(0x248D, DecompositionTag::Compatibility, &[0x0036, 0x002E]),
    DecompositionRecord::new(0x248E, DecompositionTag::Compatibility, &[0x0037, 0x002E]),
    DecompositionRecord::new(0x248F, DecompositionTag::Compatibility, &[0x0038, 0x002E]),
    DecompositionRecord::new(0x2490, DecompositionTag::Compatibility, &[0x0039, 0x002E]),
    DecompositionRecord::new(0x2491, DecompositionTag::Compatibility, &[0x0031, 0x0030, 0x002E]),
    DecompositionRecord::new(0x2492, DecompositionTag::Compatibility, &[0x0031, 0x0031, 0x002E]),
    DecompositionRecord::new(0x2493, DecompositionTag::Compatibility, &[0x0031, 0x0032, 0x002E]),
    DecompositionRecord::new(0x2494, DecompositionTag::Compatibility, &[0x0031, 0x0033, 0x002E]),
    DecompositionRecord::new(0x2495, DecompositionTag::Compatibility, &[0x0031, 0x0034, 0x002E]),
    DecompositionRecord::new(0x2496, DecompositionTag::Compatibility, &[0x0031, 0x0035, 0x002E]),
    DecompositionRecord::new(0x2497, DecompositionTag::Compatibility, &[0x0031, 0x0036, 0x002E]),
    DecompositionRecord::new(0x2498, DecompositionTag::Compatibility, &[0x0031, 0x0037, 0x002E]),
    DecompositionRecord::new(0x2499, DecompositionTag::Compatibility, &[0x0031, 0x0038, 0x002E]),
    DecompositionRecord::new(0x249A, DecompositionTag::Compatibility, &[0x0031, 0x0039, 0x002E]),
    DecompositionRecord::new(0x249B, DecompositionTag::Compatibility, &[0x0032, 0x0030, 0x002E]),
    DecompositionRecord::new(0x249C, DecompositionTag::Compatibility, &[0x0028, 0x0061, 0x0029]),
    DecompositionRecord::new(0x249D, DecompositionTag::Compatibility, &[0x0028, 0x0062, 0x0029]),
    DecompositionRecord::new(0x249E, DecompositionTag::Compatibility, &[0x0028, 0x0063, 0x0029]),
    DecompositionRecord::new(0x249F, DecompositionTag::Compatibility, &[0x0028, 0x0064, 0x0029]),
    DecompositionRecord::new(0x24A0, DecompositionTag::Compatibility, &[0x0028, 0x0065, 0x0029]),
    DecompositionRecord::new(0x24A1, DecompositionTag::Compatibility, &[0x0028, 0x0066, 0x0029]),
    DecompositionRecord::new(0x24A2, DecompositionTag::Compatibility, &[0x0028, 0x0067, 0x0029]),
    DecompositionRecord::new(0x24A3, DecompositionTag::Compatibility, &[0x0028, 0x0068, 0x0029]),
    DecompositionRecord::new(0x24A4, DecompositionTag::Compatibility, &[0x0028, 0x0069, 0x0029]),
    DecompositionRecord::new(0x24A5, DecompositionTag::Compatibility, &[0x0028, 0x006A, 0x0029]),
    DecompositionRecord::new(0x24A6, DecompositionTag::Compatibility, &[0x0028, 0x006B, 0x0029]),
    DecompositionRecord::new(0x24A7, DecompositionTag::Compatibility, &[0x0028, 0x006C, 0x0029]),
    DecompositionRecord::new(0x24A8, DecompositionTag::Compatibility, &[0x0028, 0x006D, 0x0029]),
    DecompositionRecord::new(0x24A9, DecompositionTag::Compatibility, &[0x0028, 0x006E, 0x0029]),
    DecompositionRecord::new(0x24AA, DecompositionTag::Compatibility, &[0x0028, 0x006F, 0x0029]),
    DecompositionRecord::new(0x24AB, DecompositionTag::Compatibility, &[0x0028, 0x0070, 0x0029]),
    DecompositionRecord::new(0x24AC, DecompositionTag::Compatibility, &[0x0028, 0x0071, 0x0029]),
    DecompositionRecord::new(0x24AD, DecompositionTag::Compatibility, &[0x0028, 0x0072, 0x0029]),
    DecompositionRecord::new(0x24AE, DecompositionTag::Compatibility, &[0x0028, 0x0073, 0x0029]),
    DecompositionRecord::new(0x24AF, DecompositionTag::Compatibility, &[0x0028, 0x0074, 0x0029]),
    DecompositionRecord::new(0x24B0, DecompositionTag::Compatibility, &[0x0028, 0x0075, 0x0029]),
    DecompositionRecord::new(0x24B1, DecompositionTag::Compatibility, &[0x0028, 0x0076, 0x0029]),
    DecompositionRecord::new(0x24B2, DecompositionTag::Compatibility, &[0x0028, 0x0077, 0x0029]),
    DecompositionRecord::new(0x24B3, DecompositionTag::Compatibility, &[0x0028, 0x0078, 0x0029]),
    DecompositionRecord::new(0x24B4, DecompositionTag::Compatibility, &[0x0028, 0x0079, 0x0029]),
    DecompositionRecord::new(0x24B5, DecompositionTag::Compatibility, &[0x0028, 0x007A, 0x0029]),
    DecompositionRecord::new(0x24B6, DecompositionTag::Compatibility, &[0x0041]),
    DecompositionRecord::new(0x24B7, DecompositionTag::Compatibility, &[0x0042]),
    DecompositionRecord::new(0x24B8, DecompositionTag::Compatibility, &[0x0043]),
    DecompositionRecord::new(0x24B9, DecompositionTag::Compatibility, &[0x0044]),
    DecompositionRecord::new(0x24BA, DecompositionTag::Compatibility, &[0x0045]),
    DecompositionRecord::new(0x24BB, DecompositionTag::Compatibility, &[0x0046]),
    DecompositionRecord::new(0x24BC, DecompositionTag::Compatibility, &[0x0047]),
    DecompositionRecord::new(0x24BD, DecompositionTag::Compatibility, &[0x0048]),
    DecompositionRecord::new(0x24BE, DecompositionTag::Compatibility, &[0x0049]),
    DecompositionRecord::new(0x24BF, DecompositionTag::Compatibility, &[0x004A]),
    DecompositionRecord::new(0x24C0, DecompositionTag::Compatibility, &[0x004B]),
    DecompositionRecord::new(0x24C1, DecompositionTag::Compatibility, &[0x004C]),
    DecompositionRecord::new(0x24C2, DecompositionTag::Compatibility, &[0x004D]),
    DecompositionRecord::new(0x24C3, DecompositionTag::Compatibility, &[0x004E]),
    DecompositionRecord::new(0x24C4, DecompositionTag::Compatibility, &[0x004F]),
    DecompositionRecord::new(0x24C5, DecompositionTag::Compatibility, &[0x0050]),
    DecompositionRecord::new(0x24C6, DecompositionTag::Compatibility, &[0x0051]),
    DecompositionRecord::new(0x24C7, DecompositionTag::Compatibility, &[0x0052]),
    DecompositionRecord::new(0x24C8, DecompositionTag::Compatibility, &[0x0053]),
    DecompositionRecord::new(0x24C9, DecompositionTag::Compatibility, &[0x0054]),
    DecompositionRecord::new(0x24CA, DecompositionTag::Compatibility, &[0x0055]),
    DecompositionRecord::new(0x24CB, DecompositionTag::Compatibility, &[0x0056]),
    DecompositionRecord::new(0x24CC, DecompositionTag::Compatibility, &[0x0057]),
    DecompositionRecord::new(0x24CD, DecompositionTag::Compatibility, &[0x0058]),
    DecompositionRecord::new(0x24CE, DecompositionTag::Compatibility, &[0x0059]),
    DecompositionRecord::new(0x24CF, DecompositionTag::Compatibility, &[0x005A]),
    DecompositionRecord::new(0x24D0, DecompositionTag::Compatibility, &[0x0061]),
    DecompositionRecord::new(0x24D1, DecompositionTag::Compatibility, &[0x0062]),
    DecompositionRecord::new(0x24D2, DecompositionTag::Compatibility, &[0x0063]),
    DecompositionRecord::new(0x24D3, DecompositionTag::Compatibility, &[0x0064]),
    DecompositionRecord::new(0x24D4, DecompositionTag::Compatibility, &[0x0065]),
    DecompositionRecord::new(0x24D5, DecompositionTag::Compatibility, &[0x0066]),
    DecompositionRecord::new(0x24D6, DecompositionTag::Compatibility, &[0x0067]),
    DecompositionRecord::new(0x24D7, DecompositionTag::Compatibility, &[0x0068]),
    DecompositionRecord::new(0x24D8, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0x24D9, DecompositionTag::Compatibility, &[0x006A]),
    DecompositionRecord::new(0x24DA, DecompositionTag::Compatibility, &[0x006B]),
    DecompositionRecord::new(0x24DB, DecompositionTag::Compatibility, &[0x006C]),
    DecompositionRecord::new(0x24DC, DecompositionTag::Compatibility, &[0x006D]),
    DecompositionRecord::new(0x24DD, DecompositionTag::Compatibility, &[0x006E]),
    DecompositionRecord::new(0x24DE, DecompositionTag::Compatibility, &[0x006F]),
    DecompositionRecord::new(0x24DF, DecompositionTag::Compatibility, &[0x0070]),
    DecompositionRecord::new(0x24E0, DecompositionTag::Compatibility, &[0x0071]),
    DecompositionRecord::new(0x24E1, DecompositionTag::Compatibility, &[0x0072]),
    DecompositionRecord::new(0x24E2, DecompositionTag::Compatibility, &[0x0073]),
    DecompositionRecord::new(0x24E3, DecompositionTag::Compatibility, &[0x0074]),
    DecompositionRecord::new(0x24E4, DecompositionTag::Compatibility, &[0x0075]),
    DecompositionRecord::new(0x24E5, DecompositionTag::Compatibility, &[0x0076]),
    DecompositionRecord::new(0x24E6, DecompositionTag::Compatibility, &[0x0077]),
    DecompositionRecord::new(0x24E7, DecompositionTag::Compatibility, &[0x0078]),
    DecompositionRecord::new(0x24E8, DecompositionTag::Compatibility, &[0x0079]),
    DecompositionRecord::new(0x24E9, DecompositionTag::Compatibility, &[0x007A]),
    DecompositionRecord::new(0x24EA, DecompositionTag::Compatibility, &[0x0030]),
    DecompositionRecord::new(0x2A0C, DecompositionTag::Compatibility, &[0x222B, 0x222B, 0x222B, 0x222B]),
    DecompositionRecord::new(0x2A74, DecompositionTag::Compatibility, &[0x003A, 0x003A, 0x003D]),
    DecompositionRecord::new(0x2A75, DecompositionTag::Compatibility, &[0x003D, 0x003D]),
    DecompositionRecord::new(0x2A76, DecompositionTag::Compatibility, &[0x003D, 0x003D, 0x003D]),
    DecompositionRecord::new(0x2C7C, DecompositionTag::Compatibility, &[0x006A]),
    DecompositionRecord::new(0x2C7D, DecompositionTag::Compatibility, &[0x0056]),
    DecompositionRecord::new(0x2D6F, DecompositionTag::Compatibility, &[0x2D61]),
    DecompositionRecord::new(0x2E9F, DecompositionTag::Compatibility, &[0x6BCD]),
    DecompositionRecord::new(0x2EF3, DecompositionTag::Compatibility, &[0x9F9F]),
    DecompositionRecord::new(0x2F00, DecompositionTag::Compatibility, &[0x4E00]),
    DecompositionRecord::new(0x2F01, DecompositionTag::Compatibility, &[0x4E28]),
    DecompositionRecord::new(0x2F02, DecompositionTag::Compatibility, &[0x4E36]),
    DecompositionRecord::new(0x2F03, DecompositionTag::Compatibility, &[0x4E3F]),
    DecompositionRecord::new(0x2F04, DecompositionTag::Compatibility, &[0x4E59]),
    DecompositionRecord::new(0x2F05, DecompositionTag::Compatibility, &[0x4E85]),
    DecompositionRecord::new(0x2F06, DecompositionTag::Compatibility, &[0x4E8C]),
    DecompositionRecord::new(0x2F07, DecompositionTag::Compatibility, &[0x4EA0]),
    DecompositionRecord::new(0x2F08, DecompositionTag::Compatibility, &[0x4EBA]),
    DecompositionRecord::new(0x2F09, DecompositionTag::Compatibility, &[0x513F]),
    DecompositionRecord::new(0x2F0A, DecompositionTag::Compatibility, &[0x5165]),
    DecompositionRecord::new(0x2F0B, DecompositionTag::Compatibility, &[0x516B]),
    DecompositionRecord::new(0x2F0C, DecompositionTag::Compatibility, &[0x5182]),
    DecompositionRecord::new(0x2F0D, DecompositionTag::Compatibility, &[0x5196]),
    DecompositionRecord::new(0x2F0E, DecompositionTag::Compatibility, &[0x51AB]),
    DecompositionRecord::new(0x2F0F, DecompositionTag::Compatibility, &[0x51E0]),
    DecompositionRecord::new(0x2F10, DecompositionTag::Compatibility, &[0x51F5]),
    DecompositionRecord::new(0x2F11, DecompositionTag::Compatibility, &[0x5200]),
    DecompositionRecord::new(0x2F12, DecompositionTag::Compatibility, &[0x529B]),
    DecompositionRecord::new(0x2F13, DecompositionTag::Compatibility, &[0x52F9]),
    DecompositionRecord::new(0x2F14, DecompositionTag::Compatibility, &[0x5315]),
    DecompositionRecord::new(0x2F15, DecompositionTag::Compatibility, &[0x531A]),
    DecompositionRecord::new(0x2F16, DecompositionTag::Compatibility, &[0x5338]),
    DecompositionRecord::new(0x2F17, DecompositionTag::Compatibility, &[0x5341]),
    DecompositionRecord::new(0x2F18, DecompositionTag::Compatibility, &[0x535C]),
    DecompositionRecord::new(0x2F19, DecompositionTag::Compatibility, &[0x5369]),
    DecompositionRecord::new(0x2F1A, DecompositionTag::Compatibility, &[0x5382]),
    DecompositionRecord::new(0x2F1B, DecompositionTag::Compatibility, &[0x53B6]),
    DecompositionRecord::new(0x2F1C, DecompositionTag::Compatibility, &[0x53C8]),
    DecompositionRecord::new(0x2F1D, DecompositionTag::Compatibility, &[0x53E3]),
    DecompositionRecord::new(0x2F1E, DecompositionTag::Compatibility, &[0x56D7]),
    DecompositionRecord::new(0x2F1F, DecompositionTag::Compatibility, &[0x571F]),
    DecompositionRecord::new(0x2F20, DecompositionTag::Compatibility, &[0x58EB]),
    DecompositionRecord::new(0x2F21, DecompositionTag::Compatibility, &[0x5902]),
    DecompositionRecord::new(0x2F22, DecompositionTag::Compatibility, &[0x590A]),
    DecompositionRecord::new(0x2F23, DecompositionTag::Compatibility, &[0x5915]),
    DecompositionRecord::new(0x2F24, DecompositionTag::Compatibility, &[0x5927]),
    DecompositionRecord::new(0x2F25, DecompositionTag::Compatibility, &[0x5973]),
    DecompositionRecord::new(0x2F26, DecompositionTag::Compatibility, &[0x5B50]),
    DecompositionRecord::new(0x2F27, DecompositionTag::Compatibility, &[0x5B80]),
    DecompositionRecord::new(0x2F28, DecompositionTag::Compatibility, &[0x5BF8]),
    DecompositionRecord::new(0x2F29, DecompositionTag::Compatibility, &[0x5C0F]),
    DecompositionRecord::new(0x2F2A, DecompositionTag::Compatibility, &[0x5C22]),
    DecompositionRecord::new(0x2F2B, DecompositionTag::Compatibility, &[0x5C38]),
    DecompositionRecord::new(0x2F2C, DecompositionTag::Compatibility, &[0x5C6E]),
    DecompositionRecord::new(0x2F2D, DecompositionTag::Compatibility, &[0x5C71]),
    DecompositionRecord::new(0x2F2E, DecompositionTag::Compatibility, &[0x5DDB]),
    DecompositionRecord::new(0x2F2F, DecompositionTag::Compatibility, &[0x5DE5]),
    DecompositionRecord::new(0x2F30, DecompositionTag::Compatibility, &[0x5DF1]),
    DecompositionRecord::new(0x2F31, DecompositionTag::Compatibility, &[0x5DFE]),
    DecompositionRecord::new(0x2F32, DecompositionTag::Compatibility, &[0x5E72]),
    DecompositionRecord::new(0x2F33, DecompositionTag::Compatibility, &[0x5E7A]),
    DecompositionRecord::new(0x2F34, DecompositionTag::Compatibility, &[0x5E7F]),
    DecompositionRecord::new(0x2F35, DecompositionTag::Compatibility, &[0x5EF4]),
    DecompositionRecord::new(0x2F36, DecompositionTag::Compatibility, &[0x5EFE]),
    DecompositionRecord::new(0x2F37, DecompositionTag::Compatibility, &[0x5F0B]),
    DecompositionRecord::new(0x2F38, DecompositionTag::Compatibility, &[0x5F13]),
    DecompositionRecord::new(0x2F39, DecompositionTag::Compatibility, &[0x5F50]),
    DecompositionRecord::new(0x2F3A, DecompositionTag::Compatibility, &[0x5F61]),
    DecompositionRecord::new(0x2F3B, DecompositionTag::Compatibility, &[0x5F73]),
    DecompositionRecord::new(0x2F3C, DecompositionTag::Compatibility, &[0x5FC3]),
    DecompositionRecord::new(0x2F3D, DecompositionTag::Compatibility, &[0x6208]),
    DecompositionRecord::new(0x2F3E, DecompositionTag::Compatibility, &[0x6236]),
    DecompositionRecord::new(0x2F3F, DecompositionTag::Compatibility, &[0x624B]),
    DecompositionRecord::new(0x2F40, DecompositionTag::Compatibility, &[0x652F]),
    DecompositionRecord::new(0x2F41, DecompositionTag::Compatibility, &[0x6534]),
    DecompositionRecord::new(0x2F42, DecompositionTag::Compatibility, &[0x6587]),
    DecompositionRecord::new(0x2F43, DecompositionTag::Compatibility, &[0x6597]),
    DecompositionRecord::new(0x2F44, DecompositionTag::Compatibility, &[0x65A4]),
    DecompositionRecord::new(0x2F45, DecompositionTag::Compatibility, &[0x65B9]),
    DecompositionRecord::new(0x2F46, DecompositionTag::Compatibility, &[0x65E0]),
    DecompositionRecord::new(0x2F47, DecompositionTag::Compatibility, &[0x65E5]),
    DecompositionRecord::new(0x2F48, DecompositionTag::Compatibility, &[0x66F0]),
    DecompositionRecord::new(0x2F49, DecompositionTag::Compatibility, &[0x6708]),
    DecompositionRecord::new(0x2F4A, DecompositionTag::Compatibility, &[0x6728]),
    DecompositionRecord::new(0x2F4B, DecompositionTag::Compatibility, &[0x6B20]),
    DecompositionRecord::new(0x2F4C, DecompositionTag::Compatibility, &[0x6B62]),
    DecompositionRecord::new(0x2F4D, DecompositionTag::Compatibility, &[0x6B79]),
    DecompositionRecord::new(0x2F4E, DecompositionTag::Compatibility, &[0x6BB3]),
    DecompositionRecord::new(0x2F4F, DecompositionTag::Compatibility, &[0x6BCB]),
    DecompositionRecord::new(0x2F50, DecompositionTag::Compatibility, &[0x6BD4]),
    DecompositionRecord::new(0x2F51, DecompositionTag::Compatibility, &[0x6BDB]),
    DecompositionRecord::new(0x2F52, DecompositionTag::Compatibility, &[0x6C0F]),
    DecompositionRecord::new(0x2F53, DecompositionTag::Compatibility, &[0x6C14]),
    DecompositionRecord::new(0x2F54, DecompositionTag::Compatibility, &[0x6C34]),
    DecompositionRecord::new(0x2F55, DecompositionTag::Compatibility, &[0x706B]),
    DecompositionRecord::new(0x2F56, DecompositionTag::Compatibility, &[0x722A]),
    DecompositionRecord::new(0x2F57, DecompositionTag::Compatibility, &[0x7236]),
    DecompositionRecord::new(0x2F58, DecompositionTag::Compatibility, &[0x723B]),
    DecompositionRecord::new(0x2F59, DecompositionTag::Compatibility, &[0x723F]),
    DecompositionRecord::new(0x2F5A, DecompositionTag::Compatibility, &[0x7247]),
    DecompositionRecord::new(0x2F5B, DecompositionTag::Compatibility, &[0x7259]),
    DecompositionRecord::new(0x2F5C, DecompositionTag::Compatibility, &[0x725B]),
    DecompositionRecord::new(0x2F5D, DecompositionTag::Compatibility, &[0x72AC]),
    DecompositionRecord::new(0x2F5E, DecompositionTag::Compatibility, &[0x7384]),
    DecompositionRecord::new(0x2F5F, DecompositionTag::Compatibility, &[0x7389]),
    DecompositionRecord::new(0x2F60, DecompositionTag::Compatibility, &[0x74DC]),
    DecompositionRecord::new(0x2F61, DecompositionTag::Compatibility, &[0x74E6]),
    DecompositionRecord::new(0x2F62, DecompositionTag::Compatibility, &[0x7518]),
    DecompositionRecord::new(0x2F63, DecompositionTag::Compatibility, &[0x751F]),
    DecompositionRecord::new(0x2F64, DecompositionTag::Compatibility, &[0x7528]),
    DecompositionRecord::new(0x2F65, DecompositionTag::Compatibility, &[0x7530]),
    DecompositionRecord::new(0x2F66, DecompositionTag::Compatibility, &[0x758B]),
    DecompositionRecord::new(0x2F67, DecompositionTag::Compatibility, &[0x7592]),
    DecompositionRecord::new(0x2F68, DecompositionTag::Compatibility, &[0x7676]),
    DecompositionRecord::new(0x2F69, DecompositionTag::Compatibility, &[0x767D]),
    DecompositionRecord::new(0x2F6A, DecompositionTag::Compatibility, &[0x76AE]),
    DecompositionRecord::new(0x2F6B, DecompositionTag::Compatibility, &[0x76BF]),
    DecompositionRecord::new(0x2F6C, DecompositionTag::Compatibility, &[0x76EE]),
    DecompositionRecord::new(0x2F6D, DecompositionTag::Compatibility, &[0x77DB]),
    DecompositionRecord::new(0x2F6E, DecompositionTag::Compatibility, &[0x77E2]),
    DecompositionRecord::new(0x2F6F, DecompositionTag::Compatibility, &[0x77F3]),
    DecompositionRecord::new(0x2F70, DecompositionTag::Compatibility, &[0x793A]),
    DecompositionRecord::new(0x2F71, DecompositionTag::Compatibility, &[0x79B8]),
    DecompositionRecord::new(0x2F72, DecompositionTag::Compatibility, &[0x79BE]),
    DecompositionRecord::new(0x2F73, DecompositionTag::Compatibility, &[0x7A74]),
    DecompositionRecord::new(0x2F74, DecompositionTag::Compatibility, &[0x7ACB]),
    DecompositionRecord::new(0x2F75, DecompositionTag::Compatibility, &[0x7AF9]),
    DecompositionRecord::new(0x2F76, DecompositionTag::Compatibility, &[0x7C73]),
    DecompositionRecord::new(0x2F77, DecompositionTag::Compatibility, &[0x7CF8]),
    DecompositionRecord::new(0x2F78, DecompositionTag::Compatibility, &[0x7F36]),
    DecompositionRecord::new(0x2F79, DecompositionTag::Compatibility, &[0x7F51]),
    DecompositionRecord::new(0x2F7A, DecompositionTag::Compatibility, &[0x7F8A]),
    DecompositionRecord::new(0x2F7B, DecompositionTag::Compatibility, &[0x7FBD]),
    DecompositionRecord::new(0x2F7C, DecompositionTag::Compatibility, &[0x8001]),
    DecompositionRecord::new(0x2F7D, DecompositionTag::Compatibility, &[0x800C]),
    DecompositionRecord::new(0x2F7E, DecompositionTag::Compatibility, &[0x8012]),
    DecompositionRecord::new(0x2F7F, DecompositionTag::Compatibility, &[0x8033]),
    DecompositionRecord::new(0x2F80, DecompositionTag::Compatibility, &[0x807F]),
    DecompositionRecord::new(0x2F81, DecompositionTag::Compatibility, &[0x8089]),
    DecompositionRecord::new(0x2F82, DecompositionTag::Compatibility, &[0x81E3]),
    DecompositionRecord::new(0x2F83, DecompositionTag::Compatibility, &[0x81EA]),
    DecompositionRecord::new(0x2F84, DecompositionTag::Compatibility, &[0x81F3]),
    DecompositionRecord::new(0x2F85, DecompositionTag::Compatibility, &[0x81FC]),
    DecompositionRecord::new(0x2F86, DecompositionTag::Compatibility, &[0x820C]),
    DecompositionRecord::new(0x2F87, DecompositionTag::Compatibility, &[0x821B]),
    DecompositionRecord::new(0x2F88, DecompositionTag::Compatibility, &[0x821F]),
    DecompositionRecord::new(0x2F89, DecompositionTag::Compatibility, &[0x826E]),
    DecompositionRecord::new(0x2F8A, DecompositionTag::Compatibility, &[0x8272]),
    DecompositionRecord::new(0x2F8B, DecompositionTag::Compatibility, &[0x8278]),
    DecompositionRecord::new(0x2F8C, DecompositionTag::Compatibility, &[0x864D]),
    DecompositionRecord::new(0x2F8D, DecompositionTag::Compatibility, &[0x866B]),
    DecompositionRecord::new(0x2F8E, DecompositionTag::Compatibility, &[0x8840]),
    DecompositionRecord::new(0x2F8F, DecompositionTag::Compatibility, &[0x884C]),
    DecompositionRecord::new(0x2F90, DecompositionTag::Compatibility, &[0x8863]),
    DecompositionRecord::new(0x2F91, DecompositionTag::Compatibility, &[0x897E]),
    DecompositionRecord::new(0x2F92, DecompositionTag::Compatibility, &[0x898B]),
    DecompositionRecord::new(0x2F93, DecompositionTag::Compatibility, &[0x89D2]),
    DecompositionRecord::new(0x2F94, DecompositionTag::Compatibility, &[0x8A00]),
    DecompositionRecord::new(0x2F95, DecompositionTag::Compatibility, &[0x8C37]),
    DecompositionRecord::new(0x2F96, DecompositionTag::Compatibility, &[0x8C46]),
    DecompositionRecord::new(0x2F97, DecompositionTag::Compatibility, &[0x8C55]),
    DecompositionRecord::new(0x2F98, DecompositionTag::Compatibility, &[0x8C78]),
    DecompositionRecord::new(0x2F99, DecompositionTag::Compatibility, &[0x8C9D]),
    DecompositionRecord::new(0x2F9A, DecompositionTag::Compatibility, &[0x8D64]),
    DecompositionRecord::new(0x2F9B, DecompositionTag::Compatibility, &[0x8D70]),
    DecompositionRecord::new(0x2F9C, DecompositionTag::Compatibility, &[0x8DB3]),
    DecompositionRecord::new(0x2F9D, DecompositionTag::Compatibility, &[0x8EAB]),
    DecompositionRecord::new(0x2F9E, DecompositionTag::Compatibility, &[0x8ECA]),
    DecompositionRecord::new(0x2F9F, DecompositionTag::Compatibility, &[0x8F9B]),
    DecompositionRecord::new(0x2FA0, DecompositionTag::Compatibility, &[0x8FB0]),
    DecompositionRecord::new(0x2FA1, DecompositionTag::Compatibility, &[0x8FB5]),
    DecompositionRecord::new(0x2FA2, DecompositionTag::Compatibility, &[0x9091]),
    DecompositionRecord::new(0x2FA3, DecompositionTag::Compatibility, &[0x9149]),
    DecompositionRecord::new(0x2FA4, DecompositionTag::Compatibility, &[0x91C6]),
    DecompositionRecord::new(0x2FA5, DecompositionTag::Compatibility, &[0x91CC]),
    DecompositionRecord::new(0x2FA6, DecompositionTag::Compatibility, &[0x91D1]),
    DecompositionRecord::new(0x2FA7, DecompositionTag::Compatibility, &[0x9577]),
    DecompositionRecord::new(0x2FA8, DecompositionTag::Compatibility, &[0x9580]),
    DecompositionRecord::new(0x2FA9, DecompositionTag::Compatibility, &[0x961C]),
    DecompositionRecord::new(0x2FAA, DecompositionTag::Compatibility, &[0x96B6]),
    DecompositionRecord::new(0x2FAB, DecompositionTag::Compatibility, &[0x96B9]),
    DecompositionRecord::new(0x2FAC, DecompositionTag::Compatibility, &[0x96E8]),
    DecompositionRecord::new(0x2FAD, DecompositionTag::Compatibility, &[0x9751]),
    DecompositionRecord::new(0x2FAE, DecompositionTag::Compatibility, &[0x975E]),
    DecompositionRecord::new(0x2FAF, DecompositionTag::Compatibility, &[0x9762]),
    DecompositionRecord::new(0x2FB0, DecompositionTag::Compatibility, &[0x9769]),
    DecompositionRecord::new(0x2FB1, DecompositionTag::Compatibility, &[0x97CB]),
    DecompositionRecord::new(0x2FB2, DecompositionTag::Compatibility, &[0x97ED]),
    DecompositionRecord::new(0x2FB3, DecompositionTag::Compatibility, &[0x97F3]),
    DecompositionRecord::new(0x2FB4, DecompositionTag::Compatibility, &[0x9801]),
    DecompositionRecord::new(0x2FB5, DecompositionTag::Compatibility, &[0x98A8]),
    DecompositionRecord::new(0x2FB6, DecompositionTag::Compatibility, &[0x98DB]),
    DecompositionRecord::new(0x2FB7, DecompositionTag::Compatibility, &[0x98DF]),
    DecompositionRecord::new(0x2FB8, DecompositionTag::Compatibility, &[0x9996]),
    DecompositionRecord::new(0x2FB9, DecompositionTag::Compatibility, &[0x9999]),
    DecompositionRecord::new(0x2FBA, DecompositionTag::Compatibility, &[0x99AC]),
    DecompositionRecord::new(0x2FBB, DecompositionTag::Compatibility, &[0x9AA8]),
    DecompositionRecord::new(0x2FBC, DecompositionTag::Compatibility, &[0x9AD8]),
    DecompositionRecord::new(0x2FBD, DecompositionTag::Compatibility, &[0x9ADF]),
    DecompositionRecord::new(0x2FBE, DecompositionTag::Compatibility, &[0x9B25]),
    DecompositionRecord::new(0x2FBF, DecompositionTag::Compatibility, &[0x9B2F]),
    DecompositionRecord::new(0x2FC0, DecompositionTag::Compatibility, &[0x9B32]),
    DecompositionRecord::new(0x2FC1, DecompositionTag::Compatibility, &[0x9B3C]),
    DecompositionRecord::new(0x2FC2, DecompositionTag::Compatibility, &[0x9B5A]),
    DecompositionRecord::new(0x2FC3, DecompositionTag::Compatibility, &[0x9CE5]),
    DecompositionRecord::new(0x2FC4, DecompositionTag::Compatibility, &[0x9E75]),
    DecompositionRecord::new(0x2FC5, DecompositionTag::Compatibility, &[0x9E7F]),
    DecompositionRecord::new(0x2FC6, DecompositionTag::Compatibility, &[0x9EA5]),
    DecompositionRecord::new(0x2FC7, DecompositionTag::Compatibility, &[0x9EBB]),
    DecompositionRecord::new(0x2FC8, DecompositionTag::Compatibility, &[0x9EC3]),
    DecompositionRecord::new(0x2FC9, DecompositionTag::Compatibility, &[0x9ECD]),
    DecompositionRecord::new(0x2FCA, DecompositionTag::Compatibility, &[0x9ED1]),
    DecompositionRecord::new(0x2FCB, DecompositionTag::Compatibility, &[0x9EF9]),
    DecompositionRecord::new(0x2FCC, DecompositionTag::Compatibility, &[0x9EFD]),
    DecompositionRecord::new(0x2FCD, DecompositionTag::Compatibility, &[0x9F0E]),
    DecompositionRecord::new(0x2FCE, DecompositionTag::Compatibility, &[0x9F13]),
    DecompositionRecord::new(0x2FCF, DecompositionTag::Compatibility, &[0x9F20]),
    DecompositionRecord::new(0x2FD0, DecompositionTag::Compatibility, &[0x9F3B]),
    DecompositionRecord::new(0x2FD1, DecompositionTag::Compatibility, &[0x9F4A]),
    DecompositionRecord::new(0x2FD2, DecompositionTag::Compatibility, &[0x9F52]),
    DecompositionRecord::new(0x2FD3, DecompositionTag::Compatibility, &[0x9F8D]),
    DecompositionRecord::new(0x2FD4, DecompositionTag::Compatibility, &[0x9F9C]),
    DecompositionRecord::new(0x2FD5, DecompositionTag::Compatibility, &[0x9FA0]),
    DecompositionRecord::new(0x3000, DecompositionTag::Compatibility, &[0x0020]),
    DecompositionRecord::new(0x3036, DecompositionTag::Compatibility, &[0x3012]),
    DecompositionRecord::new(0x3038, DecompositionTag::Compatibility, &[0x5341]),
    DecompositionRecord::new(0x3039, DecompositionTag::Compatibility, &[0x5344]),
    DecompositionRecord::new(0x303A, DecompositionTag::Compatibility, &[0x5345]),
    DecompositionRecord::new(0x309B, DecompositionTag::Compatibility, &[0x0020, 0x3099]),
    DecompositionRecord::new(0x309C, DecompositionTag::Compatibility, &[0x0020, 0x309A]),
    DecompositionRecord::new(0x309F, DecompositionTag::Compatibility, &[0x3088, 0x308A]),
    DecompositionRecord::new(0x30FF, DecompositionTag::Compatibility, &[0x30B3, 0x30C8]),
    DecompositionRecord::new(0x3131, DecompositionTag::Compatibility, &[0x1100]),
    DecompositionRecord::new(0x3132, DecompositionTag::Compatibility, &[0x1101]),
    DecompositionRecord::new(0x3133, DecompositionTag::Compatibility, &[0x11AA]),
    DecompositionRecord::new(0x3134, DecompositionTag::Compatibility, &[0x1102]),
    DecompositionRecord::new(0x3135, DecompositionTag::Compatibility, &[0x11AC]),
    DecompositionRecord::new(0x3136, DecompositionTag::Compatibility, &[0x11AD]),
    DecompositionRecord::new(0x3137, DecompositionTag::Compatibility, &[0x1103]),
    DecompositionRecord::new(0x3138, DecompositionTag::Compatibility, &[0x1104]),
    DecompositionRecord::new(0x3139, DecompositionTag::Compatibility, &[0x1105]),
    DecompositionRecord::new(0x313A, DecompositionTag::Compatibility, &[0x11B0]),
    DecompositionRecord::new(0x313B, DecompositionTag::Compatibility, &[0x11B1]),
    DecompositionRecord::new(0x313C, DecompositionTag::Compatibility, &[0x11B2]),
    DecompositionRecord::new(0x313D, DecompositionTag::Compatibility, &[0x11B3]),
    DecompositionRecord::new(0x313E, DecompositionTag::Compatibility, &[0x11B4]),
    DecompositionRecord::new(0x313F, DecompositionTag::Compatibility, &[0x11B5]),
    DecompositionRecord::new(0x3140, DecompositionTag::Compatibility, &[0x111A]),
    DecompositionRecord::new(0x3141, DecompositionTag::Compatibility, &[0x1106]),
    DecompositionRecord::new(0x3142, DecompositionTag::Compatibility, &[0x1107]),
    DecompositionRecord::new(0x3143, DecompositionTag::Compatibility, &[0x1108]),
    DecompositionRecord::new(0x3144, DecompositionTag::Compatibility, &[0x1121]),
    DecompositionRecord::new(0x3145, DecompositionTag::Compatibility, &[0x1109]),
    DecompositionRecord::new(0x3146, DecompositionTag::Compatibility, &[0x110A]),
    DecompositionRecord::new(0x3147, DecompositionTag::Compatibility, &[0x110B]),
    DecompositionRecord::new(0x3148, DecompositionTag::Compatibility, &[0x110C]),
    DecompositionRecord::new(0x3149, DecompositionTag::Compatibility, &[0x110D]),
    DecompositionRecord::new(0x314A, DecompositionTag::Compatibility, &[0x110E]),
    DecompositionRecord::new(0x314B, DecompositionTag::Compatibility, &[0x110F]),
    DecompositionRecord::new(0x314C, DecompositionTag::Compatibility, &[0x1110]),
    DecompositionRecord::new(0x314D, DecompositionTag::Compatibility, &[0x1111]),
    DecompositionRecord::new(0x314E, DecompositionTag::Compatibility, &[0x1112]),
    DecompositionRecord::new(0x314F, DecompositionTag::Compatibility, &[0x1161]),
    DecompositionRecord::new(0x3150, DecompositionTag::Compatibility, &[0x1162]),
    DecompositionRecord::new(0x3151, DecompositionTag::Compatibility, &[0x1163]),
    DecompositionRecord::new(0x3152, DecompositionTag::Compatibility, &[0x1164]),
    DecompositionRecord::new(0x3153, DecompositionTag::Compatibility, &[0x1165]),
    DecompositionRecord::new(0x3154, DecompositionTag::Compatibility, &[0x1166]),
    DecompositionRecord::new(0x3155, DecompositionTag::Compatibility, &[0x1167]),
    DecompositionRecord::new(0x3156, DecompositionTag::Compatibility, &[0x1168]),
    DecompositionRecord::new(0x3157, DecompositionTag::Compatibility, &[0x1169]),
    DecompositionRecord::new(0x3158, DecompositionTag::Compatibility, &[0x116A]),
    DecompositionRecord::new(0x3159, DecompositionTag::Compatibility, &[0x116B]),
    DecompositionRecord::new(0x315A, DecompositionTag::Compatibility, &[0x116C]),
    DecompositionRecord::new(0x315B, DecompositionTag::Compatibility, &[0x116D]),
    DecompositionRecord::new(0x315C, DecompositionTag::Compatibility, &[0x116E]),
    DecompositionRecord::new(0x315D, DecompositionTag::Compatibility, &[0x116F]),
    DecompositionRecord::new(0x315E, DecompositionTag::Compatibility, &[0x1170]),
    DecompositionRecord::new(0x315F, DecompositionTag::Compatibility, &[0x1171]),
    DecompositionRecord::new(0x3160, DecompositionTag::Compatibility, &[0x1172]),
    DecompositionRecord::new(0x3161, DecompositionTag::Compatibility, &[0x1173]),
    DecompositionRecord::new(0x3162, DecompositionTag::Compatibility, &[0x1174]),
    DecompositionRecord::new(0x3163, DecompositionTag::Compatibility, &[0x1175]),
    DecompositionRecord::new(0x3164, DecompositionTag::Compatibility, &[0x1160]),
    DecompositionRecord::new(0x3165, DecompositionTag::Compatibility, &[0x1114]),
    DecompositionRecord::new(0x3166, DecompositionTag::Compatibility, &[0x1115]),
    DecompositionRecord::new(0x3167, DecompositionTag::Compatibility, &[0x11C7]),
    DecompositionRecord::new(0x3168, DecompositionTag::Compatibility, &[0x11C8]),
    DecompositionRecord::new(0x3169, DecompositionTag::Compatibility, &[0x11CC]),
    DecompositionRecord::new(0x316A, DecompositionTag::Compatibility, &[0x11CE]),
    DecompositionRecord::new(0x316B, DecompositionTag::Compatibility, &[0x11D3]),
    DecompositionRecord::new(0x316C, DecompositionTag::Compatibility, &[0x11D7]),
    DecompositionRecord::new(0x316D, DecompositionTag::Compatibility, &[0x11D9]),
    DecompositionRecord::new(0x316E, DecompositionTag::Compatibility, &[0x111C]),
    DecompositionRecord::new(0x316F, DecompositionTag::Compatibility, &[0x11DD]),
    DecompositionRecord::new(0x3170, DecompositionTag::Compatibility, &[0x11DF]),
    DecompositionRecord::new(0x3171, DecompositionTag::Compatibility, &[0x111D]),
    DecompositionRecord::new(0x3172, DecompositionTag::Compatibility, &[0x111E]),
    DecompositionRecord::new(0x3173, DecompositionTag::Compatibility, &[0x1120]),
    DecompositionRecord::new(0x3174, DecompositionTag::Compatibility, &[0x1122]),
    DecompositionRecord::new(0x3175, DecompositionTag::Compatibility, &[0x1123]),
    DecompositionRecord::new(0x3176, DecompositionTag::Compatibility, &[0x1127]),
    DecompositionRecord::new(0x3177, DecompositionTag::Compatibility, &[0x1129]),
    DecompositionRecord::new(0x3178, DecompositionTag::Compatibility, &[0x112B]),
    DecompositionRecord::new(0x3179, DecompositionTag::Compatibility, &[0x112C]),
    DecompositionRecord::new(0x317A, DecompositionTag::Compatibility, &[0x112D]),
    DecompositionRecord::new(0x317B, DecompositionTag::Compatibility, &[0x112E]),
    DecompositionRecord::new(0x317C, DecompositionTag::Compatibility, &[0x112F]),
    DecompositionRecord::new(0x317D, DecompositionTag::Compatibility, &[0x1132]),
    DecompositionRecord::new(0x317E, DecompositionTag::Compatibility, &[0x1136]),
    DecompositionRecord::new(0x317F, DecompositionTag::Compatibility, &[0x1140]),
    DecompositionRecord::new(0x3180, DecompositionTag::Compatibility, &[0x1147]),
    DecompositionRecord::new(0x3181, DecompositionTag::Compatibility, &[0x114C]),
    DecompositionRecord::new(0x3182, DecompositionTag::Compatibility, &[0x11F1]),
    DecompositionRecord::new(0x3183, DecompositionTag::Compatibility, &[0x11F2]),
    DecompositionRecord::new(0x3184, DecompositionTag::Compatibility, &[0x1157]),
    DecompositionRecord::new(0x3185, DecompositionTag::Compatibility, &[0x1158]),
    DecompositionRecord::new(0x3186, DecompositionTag::Compatibility, &[0x1159]),
    DecompositionRecord::new(0x3187, DecompositionTag::Compatibility, &[0x1184]),
    DecompositionRecord::new(0x3188, DecompositionTag::Compatibility, &[0x1185]),
    DecompositionRecord::new(0x3189, DecompositionTag::Compatibility, &[0x1188]),
    DecompositionRecord::new(0x318A, DecompositionTag::Compatibility, &[0x1191]),
    DecompositionRecord::new(0x318B, DecompositionTag::Compatibility, &[0x1192]),
    DecompositionRecord::new(0x318C, DecompositionTag::Compatibility, &[0x1194]),
    DecompositionRecord::new(0x318D, DecompositionTag::Compatibility, &[0x119E]),
    DecompositionRecord::new(0x318E, DecompositionTag::Compatibility, &[0x11A1]),
    DecompositionRecord::new(0x3192, DecompositionTag::Compatibility, &[0x4E00]),
    DecompositionRecord::new(0x3193, DecompositionTag::Compatibility, &[0x4E8C]),
    DecompositionRecord::new(0x3194, DecompositionTag::Compatibility, &[0x4E09]),
    DecompositionRecord::new(0x3195, DecompositionTag::Compatibility, &[0x56DB]),
    DecompositionRecord::new(0x3196, DecompositionTag::Compatibility, &[0x4E0A]),
    DecompositionRecord::new(0x3197, DecompositionTag::Compatibility, &[0x4E2D]),
    DecompositionRecord::new(0x3198, DecompositionTag::Compatibility, &[0x4E0B]),
    DecompositionRecord::new(0x3199, DecompositionTag::Compatibility, &[0x7532]),
    DecompositionRecord::new(0x319A, DecompositionTag::Compatibility, &[0x4E59]),
    DecompositionRecord::new(0x319B, DecompositionTag::Compatibility, &[0x4E19]),
    DecompositionRecord::new(0x319C, DecompositionTag::Compatibility, &[0x4E01]),
    DecompositionRecord::new(0x319D, DecompositionTag::Compatibility, &[0x5929]),
    DecompositionRecord::new(0x319E, DecompositionTag::Compatibility, &[0x5730]),
    DecompositionRecord::new(0x319F, DecompositionTag::Compatibility, &[0x4EBA]),
    DecompositionRecord::new(0x3200, DecompositionTag::Compatibility, &[0x0028, 0x1100, 0x0029]),
    DecompositionRecord::new(0x3201, DecompositionTag::Compatibility, &[0x0028, 0x1102, 0x0029]),
    DecompositionRecord::new(0x3202, DecompositionTag::Compatibility, &[0x0028, 0x1103, 0x0029]),
    DecompositionRecord::new(0x3203, DecompositionTag::Compatibility, &[0x0028, 0x1105, 0x0029]),
    DecompositionRecord::new(0x3204, DecompositionTag::Compatibility, &[0x0028, 0x1106, 0x0029]),
    DecompositionRecord::new(0x3205, DecompositionTag::Compatibility, &[0x0028, 0x1107, 0x0029]),
    DecompositionRecord::new(0x3206, DecompositionTag::Compatibility, &[0x0028, 0x1109, 0x0029]),
    DecompositionRecord::new(0x3207, DecompositionTag::Compatibility, &[0x0028, 0x110B, 0x0029]),
    DecompositionRecord::new(0x3208, DecompositionTag::Compatibility, &[0x0028, 0x110C, 0x0029]),
    DecompositionRecord::new(0x3209, DecompositionTag::Compatibility, &[0x0028, 0x110E, 0x0029]),
    DecompositionRecord::new(0x320A, DecompositionTag::Compatibility, &[0x0028, 0x110F, 0x0029]),
    DecompositionRecord::new(0x320B, DecompositionTag::Compatibility, &[0x0028, 0x1110, 0x0029]),
    DecompositionRecord::new(0x320C, DecompositionTag::Compatibility, &[0x0028, 0x1111, 0x0029]),
    DecompositionRecord::new(0x320D, DecompositionTag::Compatibility, &[0x0028, 0x1112, 0x0029]),
    DecompositionRecord::new(0x320E, DecompositionTag::Compatibility, &[0x0028, 0x1100, 0x1161, 0x0029]),
    DecompositionRecord::new(0x320F, DecompositionTag::Compatibility, &[0x0028, 0x1102, 0x1161, 0x0029]),
    DecompositionRecord::new(0x3210, DecompositionTag::Compatibility, &[0x0028, 0x1103, 0x1161, 0x0029]),
    DecompositionRecord::new(0x3211, DecompositionTag::Compatibility, &[0x0028, 0x1105, 0x1161, 0x0029]),
    DecompositionRecord::new(0x3212, DecompositionTag::Compatibility, &[0x0028, 0x1106, 0x1161, 0x0029]),
    DecompositionRecord::new(0x3213, DecompositionTag::Compatibility, &[0x0028, 0x1107, 0x1161, 0x0029]),
    DecompositionRecord::new(0x3214, DecompositionTag::Compatibility, &[0x0028, 0x1109, 0x1161, 0x0029]),
    DecompositionRecord::new(0x3215, DecompositionTag::Compatibility, &[0x0028, 0x110B, 0x1161, 0x0029]),
    DecompositionRecord::new(0x3216, DecompositionTag::Compatibility, &[0x0028, 0x110C, 0x1161, 0x0029]),
    DecompositionRecord::new(0x3217, DecompositionTag::Compatibility, &[0x0028, 0x110E, 0x1161, 0x0029]),
    DecompositionRecord::new(0x3218, DecompositionTag::Compatibility, &[0x0028, 0x110F, 0x1161, 0x0029]),
    DecompositionRecord::new(0x3219, DecompositionTag::Compatibility, &[0x0028, 0x1110, 0x1161, 0x0029]),
    DecompositionRecord::new(0x321A, DecompositionTag::Compatibility, &[0x0028, 0x1111, 0x1161, 0x0029]),
    DecompositionRecord::new(0x321B, DecompositionTag::Compatibility, &[0x0028, 0x1112, 0x1161, 0x0029]),
    DecompositionRecord::new(0x321C, DecompositionTag::Compatibility, &[0x0028, 0x110C, 0x116E, 0x0029]),
    DecompositionRecord::new(0x321D, DecompositionTag::Compatibility, &[0x0028, 0x110B, 0x1169, 0x110C, 0x1165, 0x11AB, 0x0029]),
    DecompositionRecord::new(0x321E, DecompositionTag::Compatibility, &[0x0028, 0x110B, 0x1169, 0x1112, 0x116E, 0x0029]),
    DecompositionRecord::new(0x3220, DecompositionTag::Compatibility, &[0x0028, 0x4E00, 0x0029]),
    DecompositionRecord::new(0x3221, DecompositionTag::Compatibility, &[0x0028, 0x4E8C, 0x0029]),
    DecompositionRecord::new(0x3222, DecompositionTag::Compatibility, &[0x0028, 0x4E09, 0x0029]),
    DecompositionRecord::new(0x3223, DecompositionTag::Compatibility, &[0x0028, 0x56DB, 0x0029]),
    DecompositionRecord::new(0x3224, DecompositionTag::Compatibility, &[0x0028, 0x4E94, 0x0029]),
    DecompositionRecord::new(0x3225, DecompositionTag::Compatibility, &[0x0028, 0x516D, 0x0029]),
    DecompositionRecord::new(0x3226, DecompositionTag::Compatibility, &[0x0028, 0x4E03, 0x0029]),
    DecompositionRecord::new(0x3227, DecompositionTag::Compatibility, &[0x0028, 0x516B, 0x0029]),
    DecompositionRecord::new(0x3228, DecompositionTag::Compatibility, &[0x0028, 0x4E5D, 0x0029]),
    DecompositionRecord::new(0x3229, DecompositionTag::Compatibility, &[0x0028, 0x5341, 0x0029]),
    DecompositionRecord::new(0x322A, DecompositionTag::Compatibility, &[0x0028, 0x6708, 0x0029]),
    DecompositionRecord::new(0x322B, DecompositionTag::Compatibility, &[0x0028, 0x706B, 0x0029]),
    DecompositionRecord::new(0x322C, DecompositionTag::Compatibility, &[0x0028, 0x6C34, 0x0029]),
    DecompositionRecord::new(0x322D, DecompositionTag::Compatibility, &[0x0028, 0x6728, 0x0029]),
    DecompositionRecord::new(0x322E, DecompositionTag::Compatibility, &[0x0028, 0x91D1, 0x0029]),
    DecompositionRecord::new(0x322F, DecompositionTag::Compatibility, &[0x0028, 0x571F, 0x0029]),
    DecompositionRecord::new(0x3230, DecompositionTag::Compatibility, &[0x0028, 0x65E5, 0x0029]),
    DecompositionRecord::new(0x3231, DecompositionTag::Compatibility, &[0x0028, 0x682A, 0x0029]),
    DecompositionRecord::new(0x3232, DecompositionTag::Compatibility, &[0x0028, 0x6709, 0x0029]),
    DecompositionRecord::new(0x3233, DecompositionTag::Compatibility, &[0x0028, 0x793E, 0x0029]),
    DecompositionRecord::new(0x3234, DecompositionTag::Compatibility, &[0x0028, 0x540D, 0x0029]),
    DecompositionRecord::new(0x3235, DecompositionTag::Compatibility, &[0x0028, 0x7279, 0x0029]),
    DecompositionRecord::new(0x3236, DecompositionTag::Compatibility, &[0x0028, 0x8CA1, 0x0029]),
    DecompositionRecord::new(0x3237, DecompositionTag::Compatibility, &[0x0028, 0x795D, 0x0029]),
    DecompositionRecord::new(0x3238, DecompositionTag::Compatibility, &[0x0028, 0x52B4, 0x0029]),
    DecompositionRecord::new(0x3239, DecompositionTag::Compatibility, &[0x0028, 0x4EE3, 0x0029]),
    DecompositionRecord::new(0x323A, DecompositionTag::Compatibility, &[0x0028, 0x547C, 0x0029]),
    DecompositionRecord::new(0x323B, DecompositionTag::Compatibility, &[0x0028, 0x5B66, 0x0029]),
    DecompositionRecord::new(0x323C, DecompositionTag::Compatibility, &[0x0028, 0x76E3, 0x0029]),
    DecompositionRecord::new(0x323D, DecompositionTag::Compatibility, &[0x0028, 0x4F01, 0x0029]),
    DecompositionRecord::new(0x323E, DecompositionTag::Compatibility, &[0x0028, 0x8CC7, 0x0029]),
    DecompositionRecord::new(0x323F, DecompositionTag::Compatibility, &[0x0028, 0x5354, 0x0029]),
    DecompositionRecord::new(0x3240, DecompositionTag::Compatibility, &[0x0028, 0x796D, 0x0029]),
    DecompositionRecord::new(0x3241, DecompositionTag::Compatibility, &[0x0028, 0x4F11, 0x0029]),
    DecompositionRecord::new(0x3242, DecompositionTag::Compatibility, &[0x0028, 0x81EA, 0x0029]),
    DecompositionRecord::new(0x3243, DecompositionTag::Compatibility, &[0x0028, 0x81F3, 0x0029]),
    DecompositionRecord::new(0x3244, DecompositionTag::Compatibility, &[0x554F]),
    DecompositionRecord::new(0x3245, DecompositionTag::Compatibility, &[0x5E7C]),
    DecompositionRecord::new(0x3246, DecompositionTag::Compatibility, &[0x6587]),
    DecompositionRecord::new(0x3247, DecompositionTag::Compatibility, &[0x7B8F]),
    DecompositionRecord::new(0x3250, DecompositionTag::Compatibility, &[0x0050, 0x0054, 0x0045]),
    DecompositionRecord::new(0x3251, DecompositionTag::Compatibility, &[0x0032, 0x0031]),
    DecompositionRecord::new(0x3252, DecompositionTag::Compatibility, &[0x0032, 0x0032]),
    DecompositionRecord::new(0x3253, DecompositionTag::Compatibility, &[0x0032, 0x0033]),
    DecompositionRecord::new(0x3254, DecompositionTag::Compatibility, &[0x0032, 0x0034]),
    DecompositionRecord::new(0x3255, DecompositionTag::Compatibility, &[0x0032, 0x0035]),
    DecompositionRecord::new(0x3256, DecompositionTag::Compatibility, &[0x0032, 0x0036]),
    DecompositionRecord::new(0x3257, DecompositionTag::Compatibility, &[0x0032, 0x0037]),
    DecompositionRecord::new(0x3258, DecompositionTag::Compatibility, &[0x0032, 0x0038]),
    DecompositionRecord::new(0x3259, DecompositionTag::Compatibility, &[0x0032, 0x0039]),
    DecompositionRecord::new(0x325A, DecompositionTag::Compatibility, &[0x0033, 0x0030]),
    DecompositionRecord::new(0x325B, DecompositionTag::Compatibility, &[0x0033, 0x0031]),
    DecompositionRecord::new(0x325C, DecompositionTag::Compatibility, &[0x0033, 0x0032]),
    DecompositionRecord::new(0x325D, DecompositionTag::Compatibility, &[0x0033, 0x0033]),
    DecompositionRecord::new(0x325E, DecompositionTag::Compatibility, &[0x0033, 0x0034]),
    DecompositionRecord::new(0x325F, DecompositionTag::Compatibility, &[0x0033, 0x0035]),
    DecompositionRecord::new(0x3260, DecompositionTag::Compatibility, &[0x1100]),
    DecompositionRecord::new(0x3261, DecompositionTag::Compatibility, &[0x1102]),
    DecompositionRecord::new(0x3262, DecompositionTag::Compatibility, &[0x1103]),
    DecompositionRecord::new(0x3263, DecompositionTag::Compatibility, &[0x1105]),
    DecompositionRecord::new(0x3264, DecompositionTag::Compatibility, &[0x1106]),
    DecompositionRecord::new(0x3265, DecompositionTag::Compatibility, &[0x1107]),
    DecompositionRecord::new(0x3266, DecompositionTag::Compatibility, &[0x1109]),
    DecompositionRecord::new(0x3267, DecompositionTag::Compatibility, &[0x110B]),
    DecompositionRecord::new(0x3268, DecompositionTag::Compatibility, &[0x110C]),
    DecompositionRecord::new(0x3269, DecompositionTag::Compatibility, &[0x110E]),
    DecompositionRecord::new(0x326A, DecompositionTag::Compatibility, &[0x110F]),
    DecompositionRecord::new(0x326B, DecompositionTag::Compatibility, &[0x1110]),
    DecompositionRecord::new(0x326C, DecompositionTag::Compatibility, &[0x1111]),
    DecompositionRecord::new(0x326D, DecompositionTag::Compatibility, &[0x1112]),
    DecompositionRecord::new(0x326E, DecompositionTag::Compatibility, &[0x1100, 0x1161]),
    DecompositionRecord::new(0x326F, DecompositionTag::Compatibility, &[0x1102, 0x1161]),
    DecompositionRecord::new(0x3270, DecompositionTag::Compatibility, &[0x1103, 0x1161]),
    DecompositionRecord::new(0x3271, DecompositionTag::Compatibility, &[0x1105, 0x1161]),
    DecompositionRecord::new(0x3272, DecompositionTag::Compatibility, &[0x1106, 0x1161]),
    DecompositionRecord::new(0x3273, DecompositionTag::Compatibility, &[0x1107, 0x1161]),
    DecompositionRecord::new(0x3274, DecompositionTag::Compatibility, &[0x1109, 0x1161]),
    DecompositionRecord::new(0x3275, DecompositionTag::Compatibility, &[0x110B, 0x1161]),
    DecompositionRecord::new(0x3276, DecompositionTag::Compatibility, &[0x110C, 0x1161]),
    DecompositionRecord::new(0x3277, DecompositionTag::Compatibility, &[0x110E, 0x1161]),
    DecompositionRecord::new(0x3278, DecompositionTag::Compatibility, &[0x110F, 0x1161]),
    DecompositionRecord::new(0x3279, DecompositionTag::Compatibility, &[0x1110, 0x1161]),
    DecompositionRecord::new(0x327A, DecompositionTag::Compatibility, &[0x1111, 0x1161]),
    DecompositionRecord::new(0x327B, DecompositionTag::Compatibility, &[0x1112, 0x1161]),
    DecompositionRecord::new(0x327C, DecompositionTag::Compatibility, &[0x110E, 0x1161, 0x11B7, 0x1100, 0x1169]),
    DecompositionRecord::new(0x327D, DecompositionTag::Compatibility, &[0x110C, 0x116E, 0x110B, 0x1174]),
    DecompositionRecord::new(0x327E, DecompositionTag::Compatibility, &[0x110B, 0x116E]),
    DecompositionRecord::new(0x3280, DecompositionTag::Compatibility, &[0x4E00]),
    DecompositionRecord::new(0x3281, DecompositionTag::Compatibility, &[0x4E8C]),
    DecompositionRecord::new(0x3282, DecompositionTag::Compatibility, &[0x4E09]),
    DecompositionRecord::new(0x3283, DecompositionTag::Compatibility, &[0x56DB]),
    DecompositionRecord::new(0x3284, DecompositionTag::Compatibility, &[0x4E94]),
    DecompositionRecord::new(0x3285, DecompositionTag::Compatibility, &[0x516D]),
    DecompositionRecord::new(0x3286, DecompositionTag::Compatibility, &[0x4E03]),
    DecompositionRecord::new(0x3287, DecompositionTag::Compatibility, &[0x516B]),
    DecompositionRecord::new(0x3288, DecompositionTag::Compatibility, &[0x4E5D]),
    DecompositionRecord::new(0x3289, DecompositionTag::Compatibility, &[0x5341]),
    DecompositionRecord::new(0x328A, DecompositionTag::Compatibility, &[0x6708]),
    DecompositionRecord::new(0x328B, DecompositionTag::Compatibility, &[0x706B]),
    DecompositionRecord::new(0x328C, DecompositionTag::Compatibility, &[0x6C34]),
    DecompositionRecord::new(0x328D, DecompositionTag::Compatibility, &[0x6728]),
    DecompositionRecord::new(0x328E, DecompositionTag::Compatibility, &[0x91D1]),
    DecompositionRecord::new(0x328F, DecompositionTag::Compatibility, &[0x571F]),
    DecompositionRecord::new(0x3290, DecompositionTag::Compatibility, &[0x65E5]),
    DecompositionRecord::new(0x3291, DecompositionTag::Compatibility, &[0x682A]),
    DecompositionRecord::new(0x3292, DecompositionTag::Compatibility, &[0x6709]),
    DecompositionRecord::new(0x3293, DecompositionTag::Compatibility, &[0x793E]),
    DecompositionRecord::new(0x3294, DecompositionTag::Compatibility, &[0x540D]),
    DecompositionRecord::new(0x3295, DecompositionTag::Compatibility, &[0x7279]),
    DecompositionRecord::new(0x3296, DecompositionTag::Compatibility, &[0x8CA1]),
    DecompositionRecord::new(0x3297, DecompositionTag::Compatibility, &[0x795D]),
    DecompositionRecord::new(0x3298, DecompositionTag::Compatibility, &[0x52B4]),
    DecompositionRecord::new(0x3299, DecompositionTag::Compatibility, &[0x79D8]),
    DecompositionRecord::new(0x329A, DecompositionTag::Compatibility, &[0x7537]),
    DecompositionRecord::new(0x329B, DecompositionTag::Compatibility, &[0x5973]),
    DecompositionRecord::new(0x329C, DecompositionTag::Compatibility, &[0x9069]),
    DecompositionRecord::new(0x329D, DecompositionTag::Compatibility, &[0x512A]),
    DecompositionRecord::new(0x329E, DecompositionTag::Compatibility, &[0x5370]),
    DecompositionRecord::new(0x329F, DecompositionTag::Compatibility, &[0x6CE8]),
    DecompositionRecord::new(0x32A0, DecompositionTag::Compatibility, &[0x9805]),
    DecompositionRecord::new(0x32A1, DecompositionTag::Compatibility, &[0x4F11]),
    DecompositionRecord::new(0x32A2, DecompositionTag::Compatibility, &[0x5199]),
    DecompositionRecord::new(0x32A3, DecompositionTag::Compatibility, &[0x6B63]),
    DecompositionRecord::new(0x32A4, DecompositionTag::Compatibility, &[0x4E0A]),
    DecompositionRecord::new(0x32A5, DecompositionTag::Compatibility, &[0x4E2D]),
    DecompositionRecord::new(0x32A6, DecompositionTag::Compatibility, &[0x4E0B]),
    DecompositionRecord::new(0x32A7, DecompositionTag::Compatibility, &[0x5DE6]),
    DecompositionRecord::new(0x32A8, DecompositionTag::Compatibility, &[0x53F3]),
    DecompositionRecord::new(0x32A9, DecompositionTag::Compatibility, &[0x533B]),
    DecompositionRecord::new(0x32AA, DecompositionTag::Compatibility, &[0x5B97]),
    DecompositionRecord::new(0x32AB, DecompositionTag::Compatibility, &[0x5B66]),
    DecompositionRecord::new(0x32AC, DecompositionTag::Compatibility, &[0x76E3]),
    DecompositionRecord::new(0x32AD, DecompositionTag::Compatibility, &[0x4F01]),
    DecompositionRecord::new(0x32AE, DecompositionTag::Compatibility, &[0x8CC7]),
    DecompositionRecord::new(0x32AF, DecompositionTag::Compatibility, &[0x5354]),
    DecompositionRecord::new(0x32B0, DecompositionTag::Compatibility, &[0x591C]),
    DecompositionRecord::new(0x32B1, DecompositionTag::Compatibility, &[0x0033, 0x0036]),
    DecompositionRecord::new(0x32B2, DecompositionTag::Compatibility, &[0x0033, 0x0037]),
    DecompositionRecord::new(0x32B3, DecompositionTag::Compatibility, &[0x0033, 0x0038]),
    DecompositionRecord::new(0x32B4, DecompositionTag::Compatibility, &[0x0033, 0x0039]),
    DecompositionRecord::new(0x32B5, DecompositionTag::Compatibility, &[0x0034, 0x0030]),
    DecompositionRecord::new(0x32B6, DecompositionTag::Compatibility, &[0x0034, 0x0031]),
    DecompositionRecord::new(0x32B7, DecompositionTag::Compatibility, &[0x0034, 0x0032]),
    DecompositionRecord::new(0x32B8, DecompositionTag::Compatibility, &[0x0034, 0x0033]),
    DecompositionRecord::new(0x32B9, DecompositionTag::Compatibility, &[0x0034, 0x0034]),
    DecompositionRecord::new(0x32BA, DecompositionTag::Compatibility, &[0x0034, 0x0035]),
    DecompositionRecord::new(0x32BB, DecompositionTag::Compatibility, &[0x0034, 0x0036]),
    DecompositionRecord::new(0x32BC, DecompositionTag::Compatibility, &[0x0034, 0x0037]),
    DecompositionRecord::new(0x32BD, DecompositionTag::Compatibility, &[0x0034, 0x0038]),
    DecompositionRecord::new(0x32BE, DecompositionTag::Compatibility, &[0x0034, 0x0039]),
    DecompositionRecord::new(0x32BF, DecompositionTag::Compatibility, &[0x0035, 0x0030]),
    DecompositionRecord::new(0x32C0, DecompositionTag::Compatibility, &[0x0031, 0x6708]),
    DecompositionRecord::new(0x32C1, DecompositionTag::Compatibility, &[0x0032, 0x6708]),
    DecompositionRecord::new(0x32C2, DecompositionTag::Compatibility, &[0x0033, 0x6708]),
    DecompositionRecord::new(0x32C3, DecompositionTag::Compatibility, &[0x0034, 0x6708]),
    DecompositionRecord::new(0x32C4, DecompositionTag::Compatibility, &[0x0035, 0x6708]),
    DecompositionRecord::new(0x32C5, DecompositionTag::Compatibility, &[0x0036, 0x6708]),
    DecompositionRecord::new(0x32C6, DecompositionTag::Compatibility, &[0x0037, 0x6708]),
    DecompositionRecord::new(0x32C7, DecompositionTag::Compatibility, &[0x0038, 0x6708]),
    DecompositionRecord::new(0x32C8, DecompositionTag::Compatibility, &[0x0039, 0x6708]),
    DecompositionRecord::new(0x32C9, DecompositionTag::Compatibility, &[0x0031, 0x0030, 0x6708]),
    DecompositionRecord::new(0x32CA, DecompositionTag::Compatibility, &[0x0031, 0x0031, 0x6708]),
    DecompositionRecord::new(0x32CB, DecompositionTag::Compatibility, &[0x0031, 0x0032, 0x6708]),
    DecompositionRecord::new(0x32CC, DecompositionTag::Compatibility, &[0x0048, 0x0067]),
    DecompositionRecord::new(0x32CD, DecompositionTag::Compatibility, &[0x0065, 0x0072, 0x0067]),
    DecompositionRecord::new(0x32CE, DecompositionTag::Compatibility, &[0x0065, 0x0056]),
    DecompositionRecord::new(0x32CF, DecompositionTag::Compatibility, &[0x004C, 0x0054, 0x0044]),
    DecompositionRecord::new(0x32D0, DecompositionTag::Compatibility, &[0x30A2]),
    DecompositionRecord::new(0x32D1, DecompositionTag::Compatibility, &[0x30A4]),
    DecompositionRecord::new(0x32D2, DecompositionTag::Compatibility, &[0x30A6]),
    DecompositionRecord::new(0x32D3, DecompositionTag::Compatibility, &[0x30A8]),
    DecompositionRecord::new(0x32D4, DecompositionTag::Compatibility, &[0x30AA]),
    DecompositionRecord::new(0x32D5, DecompositionTag::Compatibility, &[0x30AB]),
    DecompositionRecord::new(0x32D6, DecompositionTag::Compatibility, &[0x30AD]),
    DecompositionRecord::new(0x32D7, DecompositionTag::Compatibility, &[0x30AF]),
    DecompositionRecord::new(0x32D8, DecompositionTag::Compatibility, &[0x30B1]),
    DecompositionRecord::new(0x32D9, DecompositionTag::Compatibility, &[0x30B3]),
    DecompositionRecord::new(0x32DA, DecompositionTag::Compatibility, &[0x30B5]),
    DecompositionRecord::new(0x32DB, DecompositionTag::Compatibility, &[0x30B7]),
    DecompositionRecord::new(0x32DC, DecompositionTag::Compatibility, &[0x30B9]),
    DecompositionRecord::new(0x32DD, DecompositionTag::Compatibility, &[0x30BB]),
    DecompositionRecord::new(0x32DE, DecompositionTag::Compatibility, &[0x30BD]),
    DecompositionRecord::new(0x32DF, DecompositionTag::Compatibility, &[0x30BF]),
    DecompositionRecord::new(0x32E0, DecompositionTag::Compatibility, &[0x30C1]),
    DecompositionRecord::new(0x32E1, DecompositionTag::Compatibility, &[0x30C4]),
    DecompositionRecord::new(0x32E2, DecompositionTag::Compatibility, &[0x30C6]),
    DecompositionRecord::new(0x32E3, DecompositionTag::Compatibility, &[0x30C8]),
    DecompositionRecord::new(0x32E4, DecompositionTag::Compatibility, &[0x30CA]),
    DecompositionRecord::new(0x32E5, DecompositionTag::Compatibility, &[0x30CB]),
    DecompositionRecord::new(0x32E6, DecompositionTag::Compatibility, &[0x30CC]),
    DecompositionRecord::new(0x32E7, DecompositionTag::Compatibility, &[0x30CD]),
    DecompositionRecord::new(0x32E8, DecompositionTag::Compatibility, &[0x30CE]),
    DecompositionRecord::new(0x32E9, DecompositionTag::Compatibility, &[0x30CF]),
    DecompositionRecord::new(0x32EA, DecompositionTag::Compatibility, &[0x30D2]),
    DecompositionRecord::new(0x32EB, DecompositionTag::Compatibility, &[0x30D5]),
    DecompositionRecord::new(0x32EC, DecompositionTag::Compatibility, &[0x30D8]),
    DecompositionRecord::new(0x32ED, DecompositionTag::Compatibility, &[0x30DB]),
    DecompositionRecord::new(0x32EE, DecompositionTag::Compatibility, &[0x30DE]),
    DecompositionRecord::new(0x32EF, DecompositionTag::Compatibility, &[0x30DF]),
    DecompositionRecord::new(0x32F0, DecompositionTag::Compatibility, &[0x30E0]),
    DecompositionRecord::new(0x32F1, DecompositionTag::Compatibility, &[0x30E1]),
    DecompositionRecord::new(0x32F2, DecompositionTag::Compatibility, &[0x30E2]),
    DecompositionRecord::new(0x32F3, DecompositionTag::Compatibility, &[0x30E4]),
    DecompositionRecord::new(0x32F4, DecompositionTag::Compatibility, &[0x30E6]),
    DecompositionRecord::new(0x32F5, DecompositionTag::Compatibility, &[0x30E8]),
    DecompositionRecord::new(0x32F6, DecompositionTag::Compatibility, &[0x30E9]),
    DecompositionRecord::new(0x32F7, DecompositionTag::Compatibility, &[0x30EA]),
    DecompositionRecord::new(0x32F8, DecompositionTag::Compatibility, &[0x30EB]),
    DecompositionRecord::new(0x32F9, DecompositionTag::Compatibility, &[0x30EC]),
    DecompositionRecord::new(0x32FA, DecompositionTag::Compatibility, &[0x30ED]),
    DecompositionRecord::new(0x32FB, DecompositionTag::Compatibility, &[0x30EF]),
    DecompositionRecord::new(0x32FC, DecompositionTag::Compatibility, &[0x30F0]),
    DecompositionRecord::new(0x32FD, DecompositionTag::Compatibility, &[0x30F1]),
    DecompositionRecord::new(0x32FE, DecompositionTag::Compatibility, &[0x30F2]),
    DecompositionRecord::new(0x32FF, DecompositionTag::Compatibility, &[0x4EE4, 0x548C]),
    DecompositionRecord::new(0x3300, DecompositionTag::Compatibility, &[0x30A2, 0x30CF, 0x309A, 0x30FC, 0x30C8]),
    DecompositionRecord::new(0x3301, DecompositionTag::Compatibility, &[0x30A2, 0x30EB, 0x30D5, 0x30A1]),
    DecompositionRecord::new(0x3302, DecompositionTag::Compatibility, &[0x30A2, 0x30F3, 0x30D8, 0x309A, 0x30A2]),
    DecompositionRecord::new(0x3303, DecompositionTag::Compatibility, &[0x30A2, 0x30FC, 0x30EB]),
    DecompositionRecord::new(0x3304, DecompositionTag::Compatibility, &[0x30A4, 0x30CB, 0x30F3, 0x30AF, 0x3099]),
    DecompositionRecord::new(0x3305, DecompositionTag::Compatibility, &[0x30A4, 0x30F3, 0x30C1]),
    DecompositionRecord::new(0x3306, DecompositionTag::Compatibility, &[0x30A6, 0x30A9, 0x30F3]),
    DecompositionRecord::new(0x3307, DecompositionTag::Compatibility, &[0x30A8, 0x30B9, 0x30AF, 0x30FC, 0x30C8, 0x3099]),
    DecompositionRecord::new(0x3308, DecompositionTag::Compatibility, &[0x30A8, 0x30FC, 0x30AB, 0x30FC]),
    DecompositionRecord::new(0x3309, DecompositionTag::Compatibility, &[0x30AA, 0x30F3, 0x30B9]),
    DecompositionRecord::new(0x330A, DecompositionTag::Compatibility, &[0x30AA, 0x30FC, 0x30E0]),
    DecompositionRecord::new(0x330B, DecompositionTag::Compatibility, &[0x30AB, 0x30A4, 0x30EA]),
    DecompositionRecord::new(0x330C, DecompositionTag::Compatibility, &[0x30AB, 0x30E9, 0x30C3, 0x30C8]),
    DecompositionRecord::new(0x330D, DecompositionTag::Compatibility, &[0x30AB, 0x30ED, 0x30EA, 0x30FC]),
    DecompositionRecord::new(0x330E, DecompositionTag::Compatibility, &[0x30AB, 0x3099, 0x30ED, 0x30F3]),
    DecompositionRecord::new(0x330F, DecompositionTag::Compatibility, &[0x30AB, 0x3099, 0x30F3, 0x30DE]),
    DecompositionRecord::new(0x3310, DecompositionTag::Compatibility, &[0x30AD, 0x3099, 0x30AB, 0x3099]),
    DecompositionRecord::new(0x3311, DecompositionTag::Compatibility, &[0x30AD, 0x3099, 0x30CB, 0x30FC]),
    DecompositionRecord::new(0x3312, DecompositionTag::Compatibility, &[0x30AD, 0x30E5, 0x30EA, 0x30FC]),
    DecompositionRecord::new(0x3313, DecompositionTag::Compatibility, &[0x30AD, 0x3099, 0x30EB, 0x30BF, 0x3099, 0x30FC]),
    DecompositionRecord::new(0x3314, DecompositionTag::Compatibility, &[0x30AD, 0x30ED]),
    DecompositionRecord::new(0x3315, DecompositionTag::Compatibility, &[0x30AD, 0x30ED, 0x30AF, 0x3099, 0x30E9, 0x30E0]),
    DecompositionRecord::new(0x3316, DecompositionTag::Compatibility, &[0x30AD, 0x30ED, 0x30E1, 0x30FC, 0x30C8, 0x30EB]),
    DecompositionRecord::new(0x3317, DecompositionTag::Compatibility, &[0x30AD, 0x30ED, 0x30EF, 0x30C3, 0x30C8]),
    DecompositionRecord::new(0x3318, DecompositionTag::Compatibility, &[0x30AF, 0x3099, 0x30E9, 0x30E0]),
    DecompositionRecord::new(0x3319, DecompositionTag::Compatibility, &[0x30AF, 0x3099, 0x30E9, 0x30E0, 0x30C8, 0x30F3]),
    DecompositionRecord::new(0x331A, DecompositionTag::Compatibility, &[0x30AF, 0x30EB, 0x30BB, 0x3099, 0x30A4, 0x30ED]),
    DecompositionRecord::new(0x331B, DecompositionTag::Compatibility, &[0x30AF, 0x30ED, 0x30FC, 0x30CD]),
    DecompositionRecord::new(0x331C, DecompositionTag::Compatibility, &[0x30B1, 0x30FC, 0x30B9]),
    DecompositionRecord::new(0x331D, DecompositionTag::Compatibility, &[0x30B3, 0x30EB, 0x30CA]),
    DecompositionRecord::new(0x331E, DecompositionTag::Compatibility, &[0x30B3, 0x30FC, 0x30DB, 0x309A]),
    DecompositionRecord::new(0x331F, DecompositionTag::Compatibility, &[0x30B5, 0x30A4, 0x30AF, 0x30EB]),
    DecompositionRecord::new(0x3320, DecompositionTag::Compatibility, &[0x30B5, 0x30F3, 0x30C1, 0x30FC, 0x30E0]),
    DecompositionRecord::new(0x3321, DecompositionTag::Compatibility, &[0x30B7, 0x30EA, 0x30F3, 0x30AF, 0x3099]),
    DecompositionRecord::new(0x3322, DecompositionTag::Compatibility, &[0x30BB, 0x30F3, 0x30C1]),
    DecompositionRecord::new(0x3323, DecompositionTag::Compatibility, &[0x30BB, 0x30F3, 0x30C8]),
    DecompositionRecord::new(0x3324, DecompositionTag::Compatibility, &[0x30BF, 0x3099, 0x30FC, 0x30B9]),
    DecompositionRecord::new(0x3325, DecompositionTag::Compatibility, &[0x30C6, 0x3099, 0x30B7]),
    DecompositionRecord::new(0x3326, DecompositionTag::Compatibility, &[0x30C8, 0x3099, 0x30EB]),
    DecompositionRecord::new(0x3327, DecompositionTag::Compatibility, &[0x30C8, 0x30F3]),
    DecompositionRecord::new(0x3328, DecompositionTag::Compatibility, &[0x30CA, 0x30CE]),
    DecompositionRecord::new(0x3329, DecompositionTag::Compatibility, &[0x30CE, 0x30C3, 0x30C8]),
    DecompositionRecord::new(0x332A, DecompositionTag::Compatibility, &[0x30CF, 0x30A4, 0x30C4]),
    DecompositionRecord::new(0x332B, DecompositionTag::Compatibility, &[0x30CF, 0x309A, 0x30FC, 0x30BB, 0x30F3, 0x30C8]),
    DecompositionRecord::new(0x332C, DecompositionTag::Compatibility, &[0x30CF, 0x309A, 0x30FC, 0x30C4]),
    DecompositionRecord::new(0x332D, DecompositionTag::Compatibility, &[0x30CF, 0x3099, 0x30FC, 0x30EC, 0x30EB]),
    DecompositionRecord::new(0x332E, DecompositionTag::Compatibility, &[0x30D2, 0x309A, 0x30A2, 0x30B9, 0x30C8, 0x30EB]),
    DecompositionRecord::new(0x332F, DecompositionTag::Compatibility, &[0x30D2, 0x309A, 0x30AF, 0x30EB]),
    DecompositionRecord::new(0x3330, DecompositionTag::Compatibility, &[0x30D2, 0x309A, 0x30B3]),
    DecompositionRecord::new(0x3331, DecompositionTag::Compatibility, &[0x30D2, 0x3099, 0x30EB]),
    DecompositionRecord::new(0x3332, DecompositionTag::Compatibility, &[0x30D5, 0x30A1, 0x30E9, 0x30C3, 0x30C8, 0x3099]),
    DecompositionRecord::new(0x3333, DecompositionTag::Compatibility, &[0x30D5, 0x30A3, 0x30FC, 0x30C8]),
    DecompositionRecord::new(0x3334, DecompositionTag::Compatibility, &[0x30D5, 0x3099, 0x30C3, 0x30B7, 0x30A7, 0x30EB]),
    DecompositionRecord::new(0x3335, DecompositionTag::Compatibility, &[0x30D5, 0x30E9, 0x30F3]),
    DecompositionRecord::new(0x3336, DecompositionTag::Compatibility, &[0x30D8, 0x30AF, 0x30BF, 0x30FC, 0x30EB]),
    DecompositionRecord::new(0x3337, DecompositionTag::Compatibility, &[0x30D8, 0x309A, 0x30BD]),
    DecompositionRecord::new(0x3338, DecompositionTag::Compatibility, &[0x30D8, 0x309A, 0x30CB, 0x30D2]),
    DecompositionRecord::new(0x3339, DecompositionTag::Compatibility, &[0x30D8, 0x30EB, 0x30C4]),
    DecompositionRecord::new(0x333A, DecompositionTag::Compatibility, &[0x30D8, 0x309A, 0x30F3, 0x30B9]),
    DecompositionRecord::new(0x333B, DecompositionTag::Compatibility, &[0x30D8, 0x309A, 0x30FC, 0x30B7, 0x3099]),
    DecompositionRecord::new(0x333C, DecompositionTag::Compatibility, &[0x30D8, 0x3099, 0x30FC, 0x30BF]),
    DecompositionRecord::new(0x333D, DecompositionTag::Compatibility, &[0x30DB, 0x309A, 0x30A4, 0x30F3, 0x30C8]),
    DecompositionRecord::new(0x333E, DecompositionTag::Compatibility, &[0x30DB, 0x3099, 0x30EB, 0x30C8]),
    DecompositionRecord::new(0x333F, DecompositionTag::Compatibility, &[0x30DB, 0x30F3]),
    DecompositionRecord::new(0x3340, DecompositionTag::Compatibility, &[0x30DB, 0x309A, 0x30F3, 0x30C8, 0x3099]),
    DecompositionRecord::new(0x3341, DecompositionTag::Compatibility, &[0x30DB, 0x30FC, 0x30EB]),
    DecompositionRecord::new(0x3342, DecompositionTag::Compatibility, &[0x30DB, 0x30FC, 0x30F3]),
    DecompositionRecord::new(0x3343, DecompositionTag::Compatibility, &[0x30DE, 0x30A4, 0x30AF, 0x30ED]),
    DecompositionRecord::new(0x3344, DecompositionTag::Compatibility, &[0x30DE, 0x30A4, 0x30EB]),
    DecompositionRecord::new(0x3345, DecompositionTag::Compatibility, &[0x30DE, 0x30C3, 0x30CF]),
    DecompositionRecord::new(0x3346, DecompositionTag::Compatibility, &[0x30DE, 0x30EB, 0x30AF]),
    DecompositionRecord::new(0x3347, DecompositionTag::Compatibility, &[0x30DE, 0x30F3, 0x30B7, 0x30E7, 0x30F3]),
    DecompositionRecord::new(0x3348, DecompositionTag::Compatibility, &[0x30DF, 0x30AF, 0x30ED, 0x30F3]),
    DecompositionRecord::new(0x3349, DecompositionTag::Compatibility, &[0x30DF, 0x30EA]),
    DecompositionRecord::new(0x334A, DecompositionTag::Compatibility, &[0x30DF, 0x30EA, 0x30CF, 0x3099, 0x30FC, 0x30EB]),
    DecompositionRecord::new(0x334B, DecompositionTag::Compatibility, &[0x30E1, 0x30AB, 0x3099]),
    DecompositionRecord::new(0x334C, DecompositionTag::Compatibility, &[0x30E1, 0x30AB, 0x3099, 0x30C8, 0x30F3]),
    DecompositionRecord::new(0x334D, DecompositionTag::Compatibility, &[0x30E1, 0x30FC, 0x30C8, 0x30EB]),
    DecompositionRecord::new(0x334E, DecompositionTag::Compatibility, &[0x30E4, 0x30FC, 0x30C8, 0x3099]),
    DecompositionRecord::new(0x334F, DecompositionTag::Compatibility, &[0x30E4, 0x30FC, 0x30EB]),
    DecompositionRecord::new(0x3350, DecompositionTag::Compatibility, &[0x30E6, 0x30A2, 0x30F3]),
    DecompositionRecord::new(0x3351, DecompositionTag::Compatibility, &[0x30EA, 0x30C3, 0x30C8, 0x30EB]),
    DecompositionRecord::new(0x3352, DecompositionTag::Compatibility, &[0x30EA, 0x30E9]),
    DecompositionRecord::new(0x3353, DecompositionTag::Compatibility, &[0x30EB, 0x30D2, 0x309A, 0x30FC]),
    DecompositionRecord::new(0x3354, DecompositionTag::Compatibility, &[0x30EB, 0x30FC, 0x30D5, 0x3099, 0x30EB]),
    DecompositionRecord::new(0x3355, DecompositionTag::Compatibility, &[0x30EC, 0x30E0]),
    DecompositionRecord::new(0x3356, DecompositionTag::Compatibility, &[0x30EC, 0x30F3, 0x30C8, 0x30B1, 0x3099, 0x30F3]),
    DecompositionRecord::new(0x3357, DecompositionTag::Compatibility, &[0x30EF, 0x30C3, 0x30C8]),
    DecompositionRecord::new(0x3358, DecompositionTag::Compatibility, &[0x0030, 0x70B9]),
    DecompositionRecord::new(0x3359, DecompositionTag::Compatibility, &[0x0031, 0x70B9]),
    DecompositionRecord::new(0x335A, DecompositionTag::Compatibility, &[0x0032, 0x70B9]),
    DecompositionRecord::new(0x335B, DecompositionTag::Compatibility, &[0x0033, 0x70B9]),
    DecompositionRecord::new(0x335C, DecompositionTag::Compatibility, &[0x0034, 0x70B9]),
    DecompositionRecord::new(0x335D, DecompositionTag::Compatibility, &[0x0035, 0x70B9]),
    DecompositionRecord::new(0x335E, DecompositionTag::Compatibility, &[0x0036, 0x70B9]),
    DecompositionRecord::new(0x335F, DecompositionTag::Compatibility, &[0x0037, 0x70B9]),
    DecompositionRecord::new(0x3360, DecompositionTag::Compatibility, &[0x0038, 0x70B9]),
    DecompositionRecord::new(0x3361, DecompositionTag::Compatibility, &[0x0039, 0x70B9]),
    DecompositionRecord::new(0x3362, DecompositionTag::Compatibility, &[0x0031, 0x0030, 0x70B9]),
    DecompositionRecord::new(0x3363, DecompositionTag::Compatibility, &[0x0031, 0x0031, 0x70B9]),
    DecompositionRecord::new(0x3364, DecompositionTag::Compatibility, &[0x0031, 0x0032, 0x70B9]),
    DecompositionRecord::new(0x3365, DecompositionTag::Compatibility, &[0x0031, 0x0033, 0x70B9]),
    DecompositionRecord::new(0x3366, DecompositionTag::Compatibility, &[0x0031, 0x0034, 0x70B9]),
    DecompositionRecord::new(0x3367, DecompositionTag::Compatibility, &[0x0031, 0x0035, 0x70B9]),
    DecompositionRecord::new(0x3368, DecompositionTag::Compatibility, &[0x0031, 0x0036, 0x70B9]),
    DecompositionRecord::new(0x3369, DecompositionTag::Compatibility, &[0x0031, 0x0037, 0x70B9]),
    DecompositionRecord::new(0x336A, DecompositionTag::Compatibility, &[0x0031, 0x0038, 0x70B9]),
    DecompositionRecord::new(0x336B, DecompositionTag::Compatibility, &[0x0031, 0x0039, 0x70B9]),
    DecompositionRecord::new(0x336C, DecompositionTag::Compatibility, &[0x0032, 0x0030, 0x70B9]),
    DecompositionRecord::new(0x336D, DecompositionTag::Compatibility, &[0x0032, 0x0031, 0x70B9]),
    DecompositionRecord::new(0x336E, DecompositionTag::Compatibility, &[0x0032, 0x0032, 0x70B9]),
    DecompositionRecord::new(0x336F, DecompositionTag::Compatibility, &[0x0032, 0x0033, 0x70B9]),
    DecompositionRecord::new(0x3370, DecompositionTag::Compatibility, &[0x0032, 0x0034, 0x70B9]),
    DecompositionRecord::new(0x3371, DecompositionTag::Compatibility, &[0x0068, 0x0050, 0x0061]),
    DecompositionRecord::new(0x3372, DecompositionTag::Compatibility, &[0x0064, 0x0061]),
    DecompositionRecord::new(0x3373, DecompositionTag::Compatibility, &[0x0041, 0x0055]),
    DecompositionRecord::new(0x3374, DecompositionTag::Compatibility, &[0x0062, 0x0061, 0x0072]),
    DecompositionRecord::new(0x3375, DecompositionTag::Compatibility, &[0x006F, 0x0056]),
    DecompositionRecord::new(0x3376, DecompositionTag::Compatibility, &[0x0070, 0x0063]),
    DecompositionRecord::new(0x3377, DecompositionTag::Compatibility, &[0x0064, 0x006D]),
    DecompositionRecord::new(0x3378, DecompositionTag::Compatibility, &[0x0064, 0x006D, 0x0032]),
    DecompositionRecord::new(0x3379, DecompositionTag::Compatibility, &[0x0064, 0x006D, 0x0033]),
    DecompositionRecord::new(0x337A, DecompositionTag::Compatibility, &[0x0049, 0x0055]),
    DecompositionRecord::new(0x337B, DecompositionTag::Compatibility, &[0x5E73, 0x6210]),
    DecompositionRecord::new(0x337C, DecompositionTag::Compatibility, &[0x662D, 0x548C]),
    DecompositionRecord::new(0x337D, DecompositionTag::Compatibility, &[0x5927, 0x6B63]),
    DecompositionRecord::new(0x337E, DecompositionTag::Compatibility, &[0x660E, 0x6CBB]),
    DecompositionRecord::new(0x337F, DecompositionTag::Compatibility, &[0x682A, 0x5F0F, 0x4F1A, 0x793E]),
    DecompositionRecord::new(0x3380, DecompositionTag::Compatibility, &[0x0070, 0x0041]),
    DecompositionRecord::new(0x3381, DecompositionTag::Compatibility, &[0x006E, 0x0041]),
    DecompositionRecord::new(0x3382, DecompositionTag::Compatibility, &[0x03BC, 0x0041]),
    DecompositionRecord::new(0x3383, DecompositionTag::Compatibility, &[0x006D, 0x0041]),
    DecompositionRecord::new(0x3384, DecompositionTag::Compatibility, &[0x006B, 0x0041]),
    DecompositionRecord::new(0x3385, DecompositionTag::Compatibility, &[0x004B, 0x0042]),
    DecompositionRecord::new(0x3386, DecompositionTag::Compatibility, &[0x004D, 0x0042]),
    DecompositionRecord::new(0x3387, DecompositionTag::Compatibility, &[0x0047, 0x0042]),
    DecompositionRecord::new(0x3388, DecompositionTag::Compatibility, &[0x0063, 0x0061, 0x006C]),
    DecompositionRecord::new(0x3389, DecompositionTag::Compatibility, &[0x006B, 0x0063, 0x0061, 0x006C]),
    DecompositionRecord::new(0x338A, DecompositionTag::Compatibility, &[0x0070, 0x0046]),
    DecompositionRecord::new(0x338B, DecompositionTag::Compatibility, &[0x006E, 0x0046]),
    DecompositionRecord::new(0x338C, DecompositionTag::Compatibility, &[0x03BC, 0x0046]),
    DecompositionRecord::new(0x338D, DecompositionTag::Compatibility, &[0x03BC, 0x0067]),
    DecompositionRecord::new(0x338E, DecompositionTag::Compatibility, &[0x006D, 0x0067]),
    DecompositionRecord::new(0x338F, DecompositionTag::Compatibility, &[0x006B, 0x0067]),
    DecompositionRecord::new(0x3390, DecompositionTag::Compatibility, &[0x0048, 0x007A]),
    DecompositionRecord::new(0x3391, DecompositionTag::Compatibility, &[0x006B, 0x0048, 0x007A]),
    DecompositionRecord::new(0x3392, DecompositionTag::Compatibility, &[0x004D, 0x0048, 0x007A]),
    DecompositionRecord::new(0x3393, DecompositionTag::Compatibility, &[0x0047, 0x0048, 0x007A]),
    DecompositionRecord::new(0x3394, DecompositionTag::Compatibility, &[0x0054, 0x0048, 0x007A]),
    DecompositionRecord::new(0x3395, DecompositionTag::Compatibility, &[0x03BC, 0x006C]),
    DecompositionRecord::new(0x3396, DecompositionTag::Compatibility, &[0x006D, 0x006C]),
    DecompositionRecord::new(0x3397, DecompositionTag::Compatibility, &[0x0064, 0x006C]),
    DecompositionRecord::new(0x3398, DecompositionTag::Compatibility, &[0x006B, 0x006C]),
    DecompositionRecord::new(0x3399, DecompositionTag::Compatibility, &[0x0066, 0x006D]),
    DecompositionRecord::new(0x339A, DecompositionTag::Compatibility, &[0x006E, 0x006D]),
    DecompositionRecord::new(0x339B, DecompositionTag::Compatibility, &[0x03BC, 0x006D]),
    DecompositionRecord::new(0x339C, DecompositionTag::Compatibility, &[0x006D, 0x006D]),
    DecompositionRecord::new(0x339D, DecompositionTag::Compatibility, &[0x0063, 0x006D]),
    DecompositionRecord::new(0x339E, DecompositionTag::Compatibility, &[0x006B, 0x006D]),
    DecompositionRecord::new(0x339F, DecompositionTag::Compatibility, &[0x006D, 0x006D, 0x0032]),
    DecompositionRecord::new(0x33A0, DecompositionTag::Compatibility, &[0x0063, 0x006D, 0x0032]),
    DecompositionRecord::new(0x33A1, DecompositionTag::Compatibility, &[0x006D, 0x0032]),
    DecompositionRecord::new(0x33A2, DecompositionTag::Compatibility, &[0x006B, 0x006D, 0x0032]),
    DecompositionRecord::new(0x33A3, DecompositionTag::Compatibility, &[0x006D, 0x006D, 0x0033]),
    DecompositionRecord::new(0x33A4, DecompositionTag::Compatibility, &[0x0063, 0x006D, 0x0033]),
    DecompositionRecord::new(0x33A5, DecompositionTag::Compatibility, &[0x006D, 0x0033]),
    DecompositionRecord::new(0x33A6, DecompositionTag::Compatibility, &[0x006B, 0x006D, 0x0033]),
    DecompositionRecord::new(0x33A7, DecompositionTag::Compatibility, &[0x006D, 0x2215, 0x0073]),
    DecompositionRecord::new(0x33A8, DecompositionTag::Compatibility, &[0x006D, 0x2215, 0x0073, 0x0032]),
    DecompositionRecord::new(0x33A9, DecompositionTag::Compatibility, &[0x0050, 0x0061]),
    DecompositionRecord::new(0x33AA, DecompositionTag::Compatibility, &[0x006B, 0x0050, 0x0061]),
    DecompositionRecord::new(0x33AB, DecompositionTag::Compatibility, &[0x004D, 0x0050, 0x0061]),
    DecompositionRecord::new(0x33AC, DecompositionTag::Compatibility, &[0x0047, 0x0050, 0x0061]),
    DecompositionRecord::new(0x33AD, DecompositionTag::Compatibility, &[0x0072, 0x0061, 0x0064]),
    DecompositionRecord::new(0x33AE, DecompositionTag::Compatibility, &[0x0072, 0x0061, 0x0064, 0x2215, 0x0073]),
    DecompositionRecord::new(0x33AF, DecompositionTag::Compatibility, &[0x0072, 0x0061, 0x0064, 0x2215, 0x0073, 0x0032]),
    DecompositionRecord::new(0x33B0, DecompositionTag::Compatibility, &[0x0070, 0x0073]),
    DecompositionRecord::new(0x33B1, DecompositionTag::Compatibility, &[0x006E, 0x0073]),
    DecompositionRecord::new(0x33B2, DecompositionTag::Compatibility, &[0x03BC, 0x0073]),
    DecompositionRecord::new(0x33B3, DecompositionTag::Compatibility, &[0x006D, 0x0073]),
    DecompositionRecord::new(0x33B4, DecompositionTag::Compatibility, &[0x0070, 0x0056]),
    DecompositionRecord::new(0x33B5, DecompositionTag::Compatibility, &[0x006E, 0x0056]),
    DecompositionRecord::new(0x33B6, DecompositionTag::Compatibility, &[0x03BC, 0x0056]),
    DecompositionRecord::new(0x33B7, DecompositionTag::Compatibility, &[0x006D, 0x0056]),
    DecompositionRecord::new(0x33B8, DecompositionTag::Compatibility, &[0x006B, 0x0056]),
    DecompositionRecord::new(0x33B9, DecompositionTag::Compatibility, &[0x004D, 0x0056]),
    DecompositionRecord::new(0x33BA, DecompositionTag::Compatibility, &[0x0070, 0x0057]),
    DecompositionRecord::new(0x33BB, DecompositionTag::Compatibility, &[0x006E, 0x0057]),
    DecompositionRecord::new(0x33BC, DecompositionTag::Compatibility, &[0x03BC, 0x0057]),
    DecompositionRecord::new(0x33BD, DecompositionTag::Compatibility, &[0x006D, 0x0057]),
    DecompositionRecord::new(0x33BE, DecompositionTag::Compatibility, &[0x006B, 0x0057]),
    DecompositionRecord::new(0x33BF, DecompositionTag::Compatibility, &[0x004D, 0x0057]),
    DecompositionRecord::new(0x33C0, DecompositionTag::Compatibility, &[0x006B, 0x03A9]),
    DecompositionRecord::new(0x33C1, DecompositionTag::Compatibility, &[0x004D, 0x03A9]),
    DecompositionRecord::new(0x33C2, DecompositionTag::Compatibility, &[0x0061, 0x002E, 0x006D, 0x002E]),
    DecompositionRecord::new(0x33C3, DecompositionTag::Compatibility, &[0x0042, 0x0071]),
    DecompositionRecord::new(0x33C4, DecompositionTag::Compatibility, &[0x0063, 0x0063]),
    DecompositionRecord::new(0x33C5, DecompositionTag::Compatibility, &[0x0063, 0x0064]),
    DecompositionRecord::new(0x33C6, DecompositionTag::Compatibility, &[0x0043, 0x2215, 0x006B, 0x0067]),
    DecompositionRecord::new(0x33C7, DecompositionTag::Compatibility, &[0x0043, 0x006F, 0x002E]),
    DecompositionRecord::new(0x33C8, DecompositionTag::Compatibility, &[0x0064, 0x0042]),
    DecompositionRecord::new(0x33C9, DecompositionTag::Compatibility, &[0x0047, 0x0079]),
    DecompositionRecord::new(0x33CA, DecompositionTag::Compatibility, &[0x0068, 0x0061]),
    DecompositionRecord::new(0x33CB, DecompositionTag::Compatibility, &[0x0048, 0x0050]),
    DecompositionRecord::new(0x33CC, DecompositionTag::Compatibility, &[0x0069, 0x006E]),
    DecompositionRecord::new(0x33CD, DecompositionTag::Compatibility, &[0x004B, 0x004B]),
    DecompositionRecord::new(0x33CE, DecompositionTag::Compatibility, &[0x004B, 0x004D]),
    DecompositionRecord::new(0x33CF, DecompositionTag::Compatibility, &[0x006B, 0x0074]),
    DecompositionRecord::new(0x33D0, DecompositionTag::Compatibility, &[0x006C, 0x006D]),
    DecompositionRecord::new(0x33D1, DecompositionTag::Compatibility, &[0x006C, 0x006E]),
    DecompositionRecord::new(0x33D2, DecompositionTag::Compatibility, &[0x006C, 0x006F, 0x0067]),
    DecompositionRecord::new(0x33D3, DecompositionTag::Compatibility, &[0x006C, 0x0078]),
    DecompositionRecord::new(0x33D4, DecompositionTag::Compatibility, &[0x006D, 0x0062]),
    DecompositionRecord::new(0x33D5, DecompositionTag::Compatibility, &[0x006D, 0x0069, 0x006C]),
    DecompositionRecord::new(0x33D6, DecompositionTag::Compatibility, &[0x006D, 0x006F, 0x006C]),
    DecompositionRecord::new(0x33D7, DecompositionTag::Compatibility, &[0x0050, 0x0048]),
    DecompositionRecord::new(0x33D8, DecompositionTag::Compatibility, &[0x0070, 0x002E, 0x006D, 0x002E]),
    DecompositionRecord::new(0x33D9, DecompositionTag::Compatibility, &[0x0050, 0x0050, 0x004D]),
    DecompositionRecord::new(0x33DA, DecompositionTag::Compatibility, &[0x0050, 0x0052]),
    DecompositionRecord::new(0x33DB, DecompositionTag::Compatibility, &[0x0073, 0x0072]),
    DecompositionRecord::new(0x33DC, DecompositionTag::Compatibility, &[0x0053, 0x0076]),
    DecompositionRecord::new(0x33DD, DecompositionTag::Compatibility, &[0x0057, 0x0062]),
    DecompositionRecord::new(0x33DE, DecompositionTag::Compatibility, &[0x0056, 0x2215, 0x006D]),
    DecompositionRecord::new(0x33DF, DecompositionTag::Compatibility, &[0x0041, 0x2215, 0x006D]),
    DecompositionRecord::new(0x33E0, DecompositionTag::Compatibility, &[0x0031, 0x65E5]),
    DecompositionRecord::new(0x33E1, DecompositionTag::Compatibility, &[0x0032, 0x65E5]),
    DecompositionRecord::new(0x33E2, DecompositionTag::Compatibility, &[0x0033, 0x65E5]),
    DecompositionRecord::new(0x33E3, DecompositionTag::Compatibility, &[0x0034, 0x65E5]),
    DecompositionRecord::new(0x33E4, DecompositionTag::Compatibility, &[0x0035, 0x65E5]),
    DecompositionRecord::new(0x33E5, DecompositionTag::Compatibility, &[0x0036, 0x65E5]),
    DecompositionRecord::new(0x33E6, DecompositionTag::Compatibility, &[0x0037, 0x65E5]),
    DecompositionRecord::new(0x33E7, DecompositionTag::Compatibility, &[0x0038, 0x65E5]),
    DecompositionRecord::new(0x33E8, DecompositionTag::Compatibility, &[0x0039, 0x65E5]),
    DecompositionRecord::new(0x33E9, DecompositionTag::Compatibility, &[0x0031, 0x0030, 0x65E5]),
    DecompositionRecord::new(0x33EA, DecompositionTag::Compatibility, &[0x0031, 0x0031, 0x65E5]),
    DecompositionRecord::new(0x33EB, DecompositionTag::Compatibility, &[0x0031, 0x0032, 0x65E5]),
    DecompositionRecord::new(0x33EC, DecompositionTag::Compatibility, &[0x0031, 0x0033, 0x65E5]),
    DecompositionRecord::new(0x33ED, DecompositionTag::Compatibility, &[0x0031, 0x0034, 0x65E5]),
    DecompositionRecord::new(0x33EE, DecompositionTag::Compatibility, &[0x0031, 0x0035, 0x65E5]),
    DecompositionRecord::new(0x33EF, DecompositionTag::Compatibility, &[0x0031, 0x0036, 0x65E5]),
    DecompositionRecord::new(0x33F0, DecompositionTag::Compatibility, &[0x0031, 0x0037, 0x65E5]),
    DecompositionRecord::new(0x33F1, DecompositionTag::Compatibility, &[0x0031, 0x0038, 0x65E5]),
    DecompositionRecord::new(0x33F2, DecompositionTag::Compatibility, &[0x0031, 0x0039, 0x65E5]),
    DecompositionRecord::new(0x33F3, DecompositionTag::Compatibility, &[0x0032, 0x0030, 0x65E5]),
    DecompositionRecord::new(0x33F4, DecompositionTag::Compatibility, &[0x0032, 0x0031, 0x65E5]),
    DecompositionRecord::new(0x33F5, DecompositionTag::Compatibility, &[0x0032, 0x0032, 0x65E5]),
    DecompositionRecord::new(0x33F6, DecompositionTag::Compatibility, &[0x0032, 0x0033, 0x65E5]),
    DecompositionRecord::new(0x33F7, DecompositionTag::Compatibility, &[0x0032, 0x0034, 0x65E5]),
    DecompositionRecord::new(0x33F8, DecompositionTag::Compatibility, &[0x0032, 0x0035, 0x65E5]),
    DecompositionRecord::new(0x33F9, DecompositionTag::Compatibility, &[0x0032, 0x0036, 0x65E5]),
    DecompositionRecord::new(0x33FA, DecompositionTag::Compatibility, &[0x0032, 0x0037, 0x65E5]),
    DecompositionRecord::new(0x33FB, DecompositionTag::Compatibility, &[0x0032, 0x0038, 0x65E5]),
    DecompositionRecord::new(0x33FC, DecompositionTag::Compatibility, &[0x0032, 0x0039, 0x65E5]),
    DecompositionRecord::new(0x33FD, DecompositionTag::Compatibility, &[0x0033, 0x0030, 0x65E5]),
    DecompositionRecord::new(0x33FE, DecompositionTag::Compatibility, &[0x0033, 0x0031, 0x65E5]),
    DecompositionRecord::new(0x33FF, DecompositionTag::Compatibility, &[0x0067, 0x0061, 0x006C]),
    DecompositionRecord::new(0xA69C, DecompositionTag::Compatibility, &[0x044A]),
    DecompositionRecord::new(0xA69D, DecompositionTag::Compatibility, &[0x044C]),
    DecompositionRecord::new(0xA770, DecompositionTag::Compatibility, &[0xA76F]),
    DecompositionRecord::new(0xA7F2, DecompositionTag::Compatibility, &[0x0043]),
    DecompositionRecord::new(0xA7F3, DecompositionTag::Compatibility, &[0x0046]),
    DecompositionRecord::new(0xA7F4, DecompositionTag::Compatibility, &[0x0051]),
    DecompositionRecord::new(0xA7F8, DecompositionTag::Compatibility, &[0x0126]),
    DecompositionRecord::new(0xA7F9, DecompositionTag::Compatibility, &[0x0153]),
    DecompositionRecord::new(0xAB5C, DecompositionTag::Compatibility, &[0xA727]),
    DecompositionRecord::new(0xAB5D, DecompositionTag::Compatibility, &[0xAB37]),
    DecompositionRecord::new(0xAB5E, DecompositionTag::Compatibility, &[0x026B]),
    DecompositionRecord::new(0xAB5F, DecompositionTag::Compatibility, &[0xAB52]),
    DecompositionRecord::new(0xAB69, DecompositionTag::Compatibility, &[0x028D]),
    DecompositionRecord::new(0xFB00, DecompositionTag::Compatibility, &[0x0066, 0x0066]),
    DecompositionRecord::new(0xFB01, DecompositionTag::Compatibility, &[0x0066, 0x0069]),
    DecompositionRecord::new(0xFB02, DecompositionTag::Compatibility, &[0x0066, 0x006C]),
    DecompositionRecord::new(0xFB03, DecompositionTag::Compatibility, &[0x0066, 0x0066, 0x0069]),
    DecompositionRecord::new(0xFB04, DecompositionTag::Compatibility, &[0x0066, 0x0066, 0x006C]),
    DecompositionRecord::new(0xFB05, DecompositionTag::Compatibility, &[0x0073, 0x0074]),
    DecompositionRecord::new(0xFB06, DecompositionTag::Compatibility, &[0x0073, 0x0074]),
    DecompositionRecord::new(0xFB13, DecompositionTag::Compatibility, &[0x0574, 0x0576]),
    DecompositionRecord::new(0xFB14, DecompositionTag::Compatibility, &[0x0574, 0x0565]),
    DecompositionRecord::new(0xFB15, DecompositionTag::Compatibility, &[0x0574, 0x056B]),
    DecompositionRecord::new(0xFB16, DecompositionTag::Compatibility, &[0x057E, 0x0576]),
    DecompositionRecord::new(0xFB17, DecompositionTag::Compatibility, &[0x0574, 0x056D]),
    DecompositionRecord::new(0xFB20, DecompositionTag::Compatibility, &[0x05E2]),
    DecompositionRecord::new(0xFB21, DecompositionTag::Compatibility, &[0x05D0]),
    DecompositionRecord::new(0xFB22, DecompositionTag::Compatibility, &[0x05D3]),
    DecompositionRecord::new(0xFB23, DecompositionTag::Compatibility, &[0x05D4]),
    DecompositionRecord::new(0xFB24, DecompositionTag::Compatibility, &[0x05DB]),
    DecompositionRecord::new(0xFB25, DecompositionTag::Compatibility, &[0x05DC]),
    DecompositionRecord::new(0xFB26, DecompositionTag::Compatibility, &[0x05DD]),
    DecompositionRecord::new(0xFB27, DecompositionTag::Compatibility, &[0x05E8]),
    DecompositionRecord::new(0xFB28, DecompositionTag::Compatibility, &[0x05EA]),
    DecompositionRecord::new(0xFB29, DecompositionTag::Compatibility, &[0x002B]),
    DecompositionRecord::new(0xFB4F, DecompositionTag::Compatibility, &[0x05D0, 0x05DC]),
    DecompositionRecord::new(0xFB50, DecompositionTag::Compatibility, &[0x0671]),
    DecompositionRecord::new(0xFB51, DecompositionTag::Compatibility, &[0x0671]),
    DecompositionRecord::new(0xFB52, DecompositionTag::Compatibility, &[0x067B]),
    DecompositionRecord::new(0xFB53, DecompositionTag::Compatibility, &[0x067B]),
    DecompositionRecord::new(0xFB54, DecompositionTag::Compatibility, &[0x067B]),
    DecompositionRecord::new(0xFB55, DecompositionTag::Compatibility, &[0x067B]),
    DecompositionRecord::new(0xFB56, DecompositionTag::Compatibility, &[0x067E]),
    DecompositionRecord::new(0xFB57, DecompositionTag::Compatibility, &[0x067E]),
    DecompositionRecord::new(0xFB58, DecompositionTag::Compatibility, &[0x067E]),
    DecompositionRecord::new(0xFB59, DecompositionTag::Compatibility, &[0x067E]),
    DecompositionRecord::new(0xFB5A, DecompositionTag::Compatibility, &[0x0680]),
    DecompositionRecord::new(0xFB5B, DecompositionTag::Compatibility, &[0x0680]),
    DecompositionRecord::new(0xFB5C, DecompositionTag::Compatibility, &[0x0680]),
    DecompositionRecord::new(0xFB5D, DecompositionTag::Compatibility, &[0x0680]),
    DecompositionRecord::new(0xFB5E, DecompositionTag::Compatibility, &[0x067A]),
    DecompositionRecord::new(0xFB5F, DecompositionTag::Compatibility, &[0x067A]),
    DecompositionRecord::new(0xFB60, DecompositionTag::Compatibility, &[0x067A]),
    DecompositionRecord::new(0xFB61, DecompositionTag::Compatibility, &[0x067A]),
    DecompositionRecord::new(0xFB62, DecompositionTag::Compatibility, &[0x067F]),
    DecompositionRecord::new(0xFB63, DecompositionTag::Compatibility, &[0x067F]),
    DecompositionRecord::new(0xFB64, DecompositionTag::Compatibility, &[0x067F]),
    DecompositionRecord::new(0xFB65, DecompositionTag::Compatibility, &[0x067F]),
    DecompositionRecord::new(0xFB66, DecompositionTag::Compatibility, &[0x0679]),
    DecompositionRecord::new(0xFB67, DecompositionTag::Compatibility, &[0x0679]),
    DecompositionRecord::new(0xFB68, DecompositionTag::Compatibility, &[0x0679]),
    DecompositionRecord::new(0xFB69, DecompositionTag::Compatibility, &[0x0679]),
    DecompositionRecord::new(0xFB6A, DecompositionTag::Compatibility, &[0x06A4]),
    DecompositionRecord::new(0xFB6B, DecompositionTag::Compatibility, &[0x06A4]),
    DecompositionRecord::new(0xFB6C, DecompositionTag::Compatibility, &[0x06A4]),
    DecompositionRecord::new(0xFB6D, DecompositionTag::Compatibility, &[0x06A4]),
    DecompositionRecord::new(0xFB6E, DecompositionTag::Compatibility, &[0x06A6]),
    DecompositionRecord::new(0xFB6F, DecompositionTag::Compatibility, &[0x06A6]),
    DecompositionRecord::new(0xFB70, DecompositionTag::Compatibility, &[0x06A6]),
    DecompositionRecord::new(0xFB71, DecompositionTag::Compatibility, &[0x06A6]),
    DecompositionRecord::new(0xFB72, DecompositionTag::Compatibility, &[0x0684]),
    DecompositionRecord::new(0xFB73, DecompositionTag::Compatibility, &[0x0684]),
    DecompositionRecord::new(0xFB74, DecompositionTag::Compatibility, &[0x0684]),
    DecompositionRecord::new(0xFB75, DecompositionTag::Compatibility, &[0x0684]),
    DecompositionRecord::new(0xFB76, DecompositionTag::Compatibility, &[0x0683]),
    DecompositionRecord::new(0xFB77, DecompositionTag::Compatibility, &[0x0683]),
    DecompositionRecord::new(0xFB78, DecompositionTag::Compatibility, &[0x0683]),
    DecompositionRecord::new(0xFB79, DecompositionTag::Compatibility, &[0x0683]),
    DecompositionRecord::new(0xFB7A, DecompositionTag::Compatibility, &[0x0686]),
    DecompositionRecord::new(0xFB7B, DecompositionTag::Compatibility, &[0x0686]),
    DecompositionRecord::new(0xFB7C, DecompositionTag::Compatibility, &[0x0686]),
    DecompositionRecord::new(0xFB7D, DecompositionTag::Compatibility, &[0x0686]),
    DecompositionRecord::new(0xFB7E, DecompositionTag::Compatibility, &[0x0687]),
    DecompositionRecord::new(0xFB7F, DecompositionTag::Compatibility, &[0x0687]),
    DecompositionRecord::new(0xFB80, DecompositionTag::Compatibility, &[0x0687]),
    DecompositionRecord::new(0xFB81, DecompositionTag::Compatibility, &[0x0687]),
    DecompositionRecord::new(0xFB82, DecompositionTag::Compatibility, &[0x068D]),
    DecompositionRecord::new(0xFB83, DecompositionTag::Compatibility, &[0x068D]),
    DecompositionRecord::new(0xFB84, DecompositionTag::Compatibility, &[0x068C]),
    DecompositionRecord::new(0xFB85, DecompositionTag::Compatibility, &[0x068C]),
    DecompositionRecord::new(0xFB86, DecompositionTag::Compatibility, &[0x068E]),
    DecompositionRecord::new(0xFB87, DecompositionTag::Compatibility, &[0x068E]),
    DecompositionRecord::new(0xFB88, DecompositionTag::Compatibility, &[0x0688]),
    DecompositionRecord::new(0xFB89, DecompositionTag::Compatibility, &[0x0688]),
    DecompositionRecord::new(0xFB8A, DecompositionTag::Compatibility, &[0x0698]),
    DecompositionRecord::new(0xFB8B, DecompositionTag::Compatibility, &[0x0698]),
    DecompositionRecord::new(0xFB8C, DecompositionTag::Compatibility, &[0x0691]),
    DecompositionRecord::new(0xFB8D, DecompositionTag::Compatibility, &[0x0691]),
    DecompositionRecord::new(0xFB8E, DecompositionTag::Compatibility, &[0x06A9]),
    DecompositionRecord::new(0xFB8F, DecompositionTag::Compatibility, &[0x06A9]),
    DecompositionRecord::new(0xFB90, DecompositionTag::Compatibility, &[0x06A9]),
    DecompositionRecord::new(0xFB91, DecompositionTag::Compatibility, &[0x06A9]),
    DecompositionRecord::new(0xFB92, DecompositionTag::Compatibility, &[0x06AF]),
    DecompositionRecord::new(0xFB93, DecompositionTag::Compatibility, &[0x06AF]),
    DecompositionRecord::new(0xFB94, DecompositionTag::Compatibility, &[0x06AF]),
    DecompositionRecord::new(0xFB95, DecompositionTag::Compatibility, &[0x06AF]),
    DecompositionRecord::new(0xFB96, DecompositionTag::Compatibility, &[0x06B3]),
    DecompositionRecord::new(0xFB97, DecompositionTag::Compatibility, &[0x06B3]),
    DecompositionRecord::new(0xFB98, DecompositionTag::Compatibility, &[0x06B3]),
    DecompositionRecord::new(0xFB99, DecompositionTag::Compatibility, &[0x06B3]),
    DecompositionRecord::new(0xFB9A, DecompositionTag::Compatibility, &[0x06B1]),
    DecompositionRecord::new(0xFB9B, DecompositionTag::Compatibility, &[0x06B1]),
    DecompositionRecord::new(0xFB9C, DecompositionTag::Compatibility, &[0x06B1]),
    DecompositionRecord::new(0xFB9D, DecompositionTag::Compatibility, &[0x06B1]),
    DecompositionRecord::new(0xFB9E, DecompositionTag::Compatibility, &[0x06BA]),
    DecompositionRecord::new(0xFB9F, DecompositionTag::Compatibility, &[0x06BA]),
    DecompositionRecord::new(0xFBA0, DecompositionTag::Compatibility, &[0x06BB]),
    DecompositionRecord::new(0xFBA1, DecompositionTag::Compatibility, &[0x06BB]),
    DecompositionRecord::new(0xFBA2, DecompositionTag::Compatibility, &[0x06BB]),
    DecompositionRecord::new(0xFBA3, DecompositionTag::Compatibility, &[0x06BB]),
    DecompositionRecord::new(0xFBA4, DecompositionTag::Compatibility, &[0x06D5, 0x0654]),
    DecompositionRecord::new(0xFBA5, DecompositionTag::Compatibility, &[0x06D5, 0x0654]),
    DecompositionRecord::new(0xFBA6, DecompositionTag::Compatibility, &[0x06C1]),
    DecompositionRecord::new(0xFBA7, DecompositionTag::Compatibility, &[0x06C1]),
    DecompositionRecord::new(0xFBA8, DecompositionTag::Compatibility, &[0x06C1]),
    DecompositionRecord::new(0xFBA9, DecompositionTag::Compatibility, &[0x06C1]),
    DecompositionRecord::new(0xFBAA, DecompositionTag::Compatibility, &[0x06BE]),
    DecompositionRecord::new(0xFBAB, DecompositionTag::Compatibility, &[0x06BE]),
    DecompositionRecord::new(0xFBAC, DecompositionTag::Compatibility, &[0x06BE]),
    DecompositionRecord::new(0xFBAD, DecompositionTag::Compatibility, &[0x06BE]),
    DecompositionRecord::new(0xFBAE, DecompositionTag::Compatibility, &[0x06D2]),
    DecompositionRecord::new(0xFBAF, DecompositionTag::Compatibility, &[0x06D2]),
    DecompositionRecord::new(0xFBB0, DecompositionTag::Compatibility, &[0x06D2, 0x0654]),
    DecompositionRecord::new(0xFBB1, DecompositionTag::Compatibility, &[0x06D2, 0x0654]),
    DecompositionRecord::new(0xFBD3, DecompositionTag::Compatibility, &[0x06AD]),
    DecompositionRecord::new(0xFBD4, DecompositionTag::Compatibility, &[0x06AD]),
    DecompositionRecord::new(0xFBD5, DecompositionTag::Compatibility, &[0x06AD]),
    DecompositionRecord::new(0xFBD6, DecompositionTag::Compatibility, &[0x06AD]),
    DecompositionRecord::new(0xFBD7, DecompositionTag::Compatibility, &[0x06C7]),
    DecompositionRecord::new(0xFBD8, DecompositionTag::Compatibility, &[0x06C7]),
    DecompositionRecord::new(0xFBD9, DecompositionTag::Compatibility, &[0x06C6]),
    DecompositionRecord::new(0xFBDA, DecompositionTag::Compatibility, &[0x06C6]),
    DecompositionRecord::new(0xFBDB, DecompositionTag::Compatibility, &[0x06C8]),
    DecompositionRecord::new(0xFBDC, DecompositionTag::Compatibility, &[0x06C8]),
    DecompositionRecord::new(0xFBDD, DecompositionTag::Compatibility, &[0x06C7, 0x0674]),
    DecompositionRecord::new(0xFBDE, DecompositionTag::Compatibility, &[0x06CB]),
    DecompositionRecord::new(0xFBDF, DecompositionTag::Compatibility, &[0x06CB]),
    DecompositionRecord::new(0xFBE0, DecompositionTag::Compatibility, &[0x06C5]),
    DecompositionRecord::new(0xFBE1, DecompositionTag::Compatibility, &[0x06C5]),
    DecompositionRecord::new(0xFBE2, DecompositionTag::Compatibility, &[0x06C9]),
    DecompositionRecord::new(0xFBE3, DecompositionTag::Compatibility, &[0x06C9]),
    DecompositionRecord::new(0xFBE4, DecompositionTag::Compatibility, &[0x06D0]),
    DecompositionRecord::new(0xFBE5, DecompositionTag::Compatibility, &[0x06D0]),
    DecompositionRecord::new(0xFBE6, DecompositionTag::Compatibility, &[0x06D0]),
    DecompositionRecord::new(0xFBE7, DecompositionTag::Compatibility, &[0x06D0]),
    DecompositionRecord::new(0xFBE8, DecompositionTag::Compatibility, &[0x0649]),
    DecompositionRecord::new(0xFBE9, DecompositionTag::Compatibility, &[0x0649]),
    DecompositionRecord::new(0xFBEA, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x0627]),
    DecompositionRecord::new(0xFBEB, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x0627]),
    DecompositionRecord::new(0xFBEC, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x06D5]),
    DecompositionRecord::new(0xFBED, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x06D5]),
    DecompositionRecord::new(0xFBEE, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x0648]),
    DecompositionRecord::new(0xFBEF, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x0648]),
    DecompositionRecord::new(0xFBF0, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x06C7]),
    DecompositionRecord::new(0xFBF1, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x06C7]),
    DecompositionRecord::new(0xFBF2, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x06C6]),
    DecompositionRecord::new(0xFBF3, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x06C6]),
    DecompositionRecord::new(0xFBF4, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x06C8]),
    DecompositionRecord::new(0xFBF5, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x06C8]),
    DecompositionRecord::new(0xFBF6, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x06D0]),
    DecompositionRecord::new(0xFBF7, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x06D0]),
    DecompositionRecord::new(0xFBF8, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x06D0]),
    DecompositionRecord::new(0xFBF9, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x0649]),
    DecompositionRecord::new(0xFBFA, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x0649]),
    DecompositionRecord::new(0xFBFB, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x0649]),
    DecompositionRecord::new(0xFBFC, DecompositionTag::Compatibility, &[0x06CC]),
    DecompositionRecord::new(0xFBFD, DecompositionTag::Compatibility, &[0x06CC]),
    DecompositionRecord::new(0xFBFE, DecompositionTag::Compatibility, &[0x06CC]),
    DecompositionRecord::new(0xFBFF, DecompositionTag::Compatibility, &[0x06CC]),
    DecompositionRecord::new(0xFC00, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x062C]),
    DecompositionRecord::new(0xFC01, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x062D]),
    DecompositionRecord::new(0xFC02, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x0645]),
    DecompositionRecord::new(0xFC03, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x0649]),
    DecompositionRecord::new(0xFC04, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x064A]),
    DecompositionRecord::new(0xFC05, DecompositionTag::Compatibility, &[0x0628, 0x062C]),
    DecompositionRecord::new(0xFC06, DecompositionTag::Compatibility, &[0x0628, 0x062D]),
    DecompositionRecord::new(0xFC07, DecompositionTag::Compatibility, &[0x0628, 0x062E]),
    DecompositionRecord::new(0xFC08, DecompositionTag::Compatibility, &[0x0628, 0x0645]),
    DecompositionRecord::new(0xFC09, DecompositionTag::Compatibility, &[0x0628, 0x0649]),
    DecompositionRecord::new(0xFC0A, DecompositionTag::Compatibility, &[0x0628, 0x064A]),
    DecompositionRecord::new(0xFC0B, DecompositionTag::Compatibility, &[0x062A, 0x062C]),
    DecompositionRecord::new(0xFC0C, DecompositionTag::Compatibility, &[0x062A, 0x062D]),
    DecompositionRecord::new(0xFC0D, DecompositionTag::Compatibility, &[0x062A, 0x062E]),
    DecompositionRecord::new(0xFC0E, DecompositionTag::Compatibility, &[0x062A, 0x0645]),
    DecompositionRecord::new(0xFC0F, DecompositionTag::Compatibility, &[0x062A, 0x0649]),
    DecompositionRecord::new(0xFC10, DecompositionTag::Compatibility, &[0x062A, 0x064A]),
    DecompositionRecord::new(0xFC11, DecompositionTag::Compatibility, &[0x062B, 0x062C]),
    DecompositionRecord::new(0xFC12, DecompositionTag::Compatibility, &[0x062B, 0x0645]),
    DecompositionRecord::new(0xFC13, DecompositionTag::Compatibility, &[0x062B, 0x0649]),
    DecompositionRecord::new(0xFC14, DecompositionTag::Compatibility, &[0x062B, 0x064A]),
    DecompositionRecord::new(0xFC15, DecompositionTag::Compatibility, &[0x062C, 0x062D]),
    DecompositionRecord::new(0xFC16, DecompositionTag::Compatibility, &[0x062C, 0x0645]),
    DecompositionRecord::new(0xFC17, DecompositionTag::Compatibility, &[0x062D, 0x062C]),
    DecompositionRecord::new(0xFC18, DecompositionTag::Compatibility, &[0x062D, 0x0645]),
    DecompositionRecord::new(0xFC19, DecompositionTag::Compatibility, &[0x062E, 0x062C]),
    DecompositionRecord::new(0xFC1A, DecompositionTag::Compatibility, &[0x062E, 0x062D]),
    DecompositionRecord::new(0xFC1B, DecompositionTag::Compatibility, &[0x062E, 0x0645]),
    DecompositionRecord::new(0xFC1C, DecompositionTag::Compatibility, &[0x0633, 0x062C]),
    DecompositionRecord::new(0xFC1D, DecompositionTag::Compatibility, &[0x0633, 0x062D]),
    DecompositionRecord::new(0xFC1E, DecompositionTag::Compatibility, &[0x0633, 0x062E]),
    DecompositionRecord::new(0xFC1F, DecompositionTag::Compatibility, &[0x0633, 0x0645]),
    DecompositionRecord::new(0xFC20, DecompositionTag::Compatibility, &[0x0635, 0x062D]),
    DecompositionRecord::new(0xFC21, DecompositionTag::Compatibility, &[0x0635, 0x0645]),
    DecompositionRecord::new(0xFC22, DecompositionTag::Compatibility, &[0x0636, 0x062C]),
    DecompositionRecord::new(0xFC23, DecompositionTag::Compatibility, &[0x0636, 0x062D]),
    DecompositionRecord::new(0xFC24, DecompositionTag::Compatibility, &[0x0636, 0x062E]),
    DecompositionRecord::new(0xFC25, DecompositionTag::Compatibility, &[0x0636, 0x0645]),
    DecompositionRecord::new(0xFC26, DecompositionTag::Compatibility, &[0x0637, 0x062D]),
    DecompositionRecord::new(0xFC27, DecompositionTag::Compatibility, &[0x0637, 0x0645]),
    DecompositionRecord::new(0xFC28, DecompositionTag::Compatibility, &[0x0638, 0x0645]),
    DecompositionRecord::new(0xFC29, DecompositionTag::Compatibility, &[0x0639, 0x062C]),
    DecompositionRecord::new(0xFC2A, DecompositionTag::Compatibility, &[0x0639, 0x0645]),
    DecompositionRecord::new(0xFC2B, DecompositionTag::Compatibility, &[0x063A, 0x062C]),
    DecompositionRecord::new(0xFC2C, DecompositionTag::Compatibility, &[0x063A, 0x0645]),
    DecompositionRecord::new(0xFC2D, DecompositionTag::Compatibility, &[0x0641, 0x062C]),
    DecompositionRecord::new(0xFC2E, DecompositionTag::Compatibility, &[0x0641, 0x062D]),
    DecompositionRecord::new(0xFC2F, DecompositionTag::Compatibility, &[0x0641, 0x062E]),
    DecompositionRecord::new(0xFC30, DecompositionTag::Compatibility, &[0x0641, 0x0645]),
    DecompositionRecord::new(0xFC31, DecompositionTag::Compatibility, &[0x0641, 0x0649]),
    DecompositionRecord::new(0xFC32, DecompositionTag::Compatibility, &[0x0641, 0x064A]),
    DecompositionRecord::new(0xFC33, DecompositionTag::Compatibility, &[0x0642, 0x062D]),
    DecompositionRecord::new(0xFC34, DecompositionTag::Compatibility, &[0x0642, 0x0645]),
    DecompositionRecord::new(0xFC35, DecompositionTag::Compatibility, &[0x0642, 0x0649]),
    DecompositionRecord::new(0xFC36, DecompositionTag::Compatibility, &[0x0642, 0x064A]),
    DecompositionRecord::new(0xFC37, DecompositionTag::Compatibility, &[0x0643, 0x0627]),
    DecompositionRecord::new(0xFC38, DecompositionTag::Compatibility, &[0x0643, 0x062C]),
    DecompositionRecord::new(0xFC39, DecompositionTag::Compatibility, &[0x0643, 0x062D]),
    DecompositionRecord::new(0xFC3A, DecompositionTag::Compatibility, &[0x0643, 0x062E]),
    DecompositionRecord::new(0xFC3B, DecompositionTag::Compatibility, &[0x0643, 0x0644]),
    DecompositionRecord::new(0xFC3C, DecompositionTag::Compatibility, &[0x0643, 0x0645]),
    DecompositionRecord::new(0xFC3D, DecompositionTag::Compatibility, &[0x0643, 0x0649]),
    DecompositionRecord::new(0xFC3E, DecompositionTag::Compatibility, &[0x0643, 0x064A]),
    DecompositionRecord::new(0xFC3F, DecompositionTag::Compatibility, &[0x0644, 0x062C]),
    DecompositionRecord::new(0xFC40, DecompositionTag::Compatibility, &[0x0644, 0x062D]),
    DecompositionRecord::new(0xFC41, DecompositionTag::Compatibility, &[0x0644, 0x062E]),
    DecompositionRecord::new(0xFC42, DecompositionTag::Compatibility, &[0x0644, 0x0645]),
    DecompositionRecord::new(0xFC43, DecompositionTag::Compatibility, &[0x0644, 0x0649]),
    DecompositionRecord::new(0xFC44, DecompositionTag::Compatibility, &[0x0644, 0x064A]),
    DecompositionRecord::new(0xFC45, DecompositionTag::Compatibility, &[0x0645, 0x062C]),
    DecompositionRecord::new(0xFC46, DecompositionTag::Compatibility, &[0x0645, 0x062D]),
    DecompositionRecord::new(0xFC47, DecompositionTag::Compatibility, &[0x0645, 0x062E]),
    DecompositionRecord::new(0xFC48, DecompositionTag::Compatibility, &[0x0645, 0x0645]),
    DecompositionRecord::new(0xFC49, DecompositionTag::Compatibility, &[0x0645, 0x0649]),
    DecompositionRecord::new(0xFC4A, DecompositionTag::Compatibility, &[0x0645, 0x064A]),
    DecompositionRecord::new(0xFC4B, DecompositionTag::Compatibility, &[0x0646, 0x062C]),
    DecompositionRecord::new(0xFC4C, DecompositionTag::Compatibility, &[0x0646, 0x062D]),
    DecompositionRecord::new(0xFC4D, DecompositionTag::Compatibility, &[0x0646, 0x062E]),
    DecompositionRecord::new(0xFC4E, DecompositionTag::Compatibility, &[0x0646, 0x0645]),
    DecompositionRecord::new(0xFC4F, DecompositionTag::Compatibility, &[0x0646, 0x0649]),
    DecompositionRecord::new(0xFC50, DecompositionTag::Compatibility, &[0x0646, 0x064A]),
    DecompositionRecord::new(0xFC51, DecompositionTag::Compatibility, &[0x0647, 0x062C]),
    DecompositionRecord::new(0xFC52, DecompositionTag::Compatibility, &[0x0647, 0x0645]),
    DecompositionRecord::new(0xFC53, DecompositionTag::Compatibility, &[0x0647, 0x0649]),
    DecompositionRecord::new(0xFC54, DecompositionTag::Compatibility, &[0x0647, 0x064A]),
    DecompositionRecord::new(0xFC55, DecompositionTag::Compatibility, &[0x064A, 0x062C]),
    DecompositionRecord::new(0xFC56, DecompositionTag::Compatibility, &[0x064A, 0x062D]),
    DecompositionRecord::new(0xFC57, DecompositionTag::Compatibility, &[0x064A, 0x062E]),
    DecompositionRecord::new(0xFC58, DecompositionTag::Compatibility, &[0x064A, 0x0645]),
    DecompositionRecord::new(0xFC59, DecompositionTag::Compatibility, &[0x064A, 0x0649]),
    DecompositionRecord::new(0xFC5A, DecompositionTag::Compatibility, &[0x064A, 0x064A]),
    DecompositionRecord::new(0xFC5B, DecompositionTag::Compatibility, &[0x0630, 0x0670]),
    DecompositionRecord::new(0xFC5C, DecompositionTag::Compatibility, &[0x0631, 0x0670]),
    DecompositionRecord::new(0xFC5D, DecompositionTag::Compatibility, &[0x0649, 0x0670]),
    DecompositionRecord::new(0xFC5E, DecompositionTag::Compatibility, &[0x0020, 0x064C, 0x0651]),
    DecompositionRecord::new(0xFC5F, DecompositionTag::Compatibility, &[0x0020, 0x064D, 0x0651]),
    DecompositionRecord::new(0xFC60, DecompositionTag::Compatibility, &[0x0020, 0x064E, 0x0651]),
    DecompositionRecord::new(0xFC61, DecompositionTag::Compatibility, &[0x0020, 0x064F, 0x0651]),
    DecompositionRecord::new(0xFC62, DecompositionTag::Compatibility, &[0x0020, 0x0650, 0x0651]),
    DecompositionRecord::new(0xFC63, DecompositionTag::Compatibility, &[0x0020, 0x0651, 0x0670]),
    DecompositionRecord::new(0xFC64, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x0631]),
    DecompositionRecord::new(0xFC65, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x0632]),
    DecompositionRecord::new(0xFC66, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x0645]),
    DecompositionRecord::new(0xFC67, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x0646]),
    DecompositionRecord::new(0xFC68, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x0649]),
    DecompositionRecord::new(0xFC69, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x064A]),
    DecompositionRecord::new(0xFC6A, DecompositionTag::Compatibility, &[0x0628, 0x0631]),
    DecompositionRecord::new(0xFC6B, DecompositionTag::Compatibility, &[0x0628, 0x0632]),
    DecompositionRecord::new(0xFC6C, DecompositionTag::Compatibility, &[0x0628, 0x0645]),
    DecompositionRecord::new(0xFC6D, DecompositionTag::Compatibility, &[0x0628, 0x0646]),
    DecompositionRecord::new(0xFC6E, DecompositionTag::Compatibility, &[0x0628, 0x0649]),
    DecompositionRecord::new(0xFC6F, DecompositionTag::Compatibility, &[0x0628, 0x064A]),
    DecompositionRecord::new(0xFC70, DecompositionTag::Compatibility, &[0x062A, 0x0631]),
    DecompositionRecord::new(0xFC71, DecompositionTag::Compatibility, &[0x062A, 0x0632]),
    DecompositionRecord::new(0xFC72, DecompositionTag::Compatibility, &[0x062A, 0x0645]),
    DecompositionRecord::new(0xFC73, DecompositionTag::Compatibility, &[0x062A, 0x0646]),
    DecompositionRecord::new(0xFC74, DecompositionTag::Compatibility, &[0x062A, 0x0649]),
    DecompositionRecord::new(0xFC75, DecompositionTag::Compatibility, &[0x062A, 0x064A]),
    DecompositionRecord::new(0xFC76, DecompositionTag::Compatibility, &[0x062B, 0x0631]),
    DecompositionRecord::new(0xFC77, DecompositionTag::Compatibility, &[0x062B, 0x0632]),
    DecompositionRecord::new(0xFC78, DecompositionTag::Compatibility, &[0x062B, 0x0645]),
    DecompositionRecord::new(0xFC79, DecompositionTag::Compatibility, &[0x062B, 0x0646]),
    DecompositionRecord::new(0xFC7A, DecompositionTag::Compatibility, &[0x062B, 0x0649]),
    DecompositionRecord::new(0xFC7B, DecompositionTag::Compatibility, &[0x062B, 0x064A]),
    DecompositionRecord::new(0xFC7C, DecompositionTag::Compatibility, &[0x0641, 0x0649]),
    DecompositionRecord::new(0xFC7D, DecompositionTag::Compatibility, &[0x0641, 0x064A]),
    DecompositionRecord::new(0xFC7E, DecompositionTag::Compatibility, &[0x0642, 0x0649]),
    DecompositionRecord::new(0xFC7F, DecompositionTag::Compatibility, &[0x0642, 0x064A]),
    DecompositionRecord::new(0xFC80, DecompositionTag::Compatibility, &[0x0643, 0x0627]),
    DecompositionRecord::new(0xFC81, DecompositionTag::Compatibility, &[0x0643, 0x0644]),
    DecompositionRecord::new(0xFC82, DecompositionTag::Compatibility, &[0x0643, 0x0645]),
    DecompositionRecord::new(0xFC83, DecompositionTag::Compatibility, &[0x0643, 0x0649]),
    DecompositionRecord::new(0xFC84, DecompositionTag::Compatibility, &[0x0643, 0x064A]),
    DecompositionRecord::new(0xFC85, DecompositionTag::Compatibility, &[0x0644, 0x0645]),
    DecompositionRecord::new(0xFC86, DecompositionTag::Compatibility, &[0x0644, 0x0649]),
    DecompositionRecord::new(0xFC87, DecompositionTag::Compatibility, &[0x0644, 0x064A]),
    DecompositionRecord::new(0xFC88, DecompositionTag::Compatibility, &[0x0645, 0x0627]),
    DecompositionRecord::new(0xFC89, DecompositionTag::Compatibility, &[0x0645, 0x0645]),
    DecompositionRecord::new(0xFC8A, DecompositionTag::Compatibility, &[0x0646, 0x0631]),
    DecompositionRecord::new(0xFC8B, DecompositionTag::Compatibility, &[0x0646, 0x0632]),
    DecompositionRecord::new(0xFC8C, DecompositionTag::Compatibility, &[0x0646, 0x0645]),
    DecompositionRecord::new(0xFC8D, DecompositionTag::Compatibility, &[0x0646, 0x0646]),
    DecompositionRecord::new(0xFC8E, DecompositionTag::Compatibility, &[0x0646, 0x0649]),
    DecompositionRecord::new(0xFC8F, DecompositionTag::Compatibility, &[0x0646, 0x064A]),
    DecompositionRecord::new(0xFC90, DecompositionTag::Compatibility, &[0x0649, 0x0670]),
    DecompositionRecord::new(0xFC91, DecompositionTag::Compatibility, &[0x064A, 0x0631]),
    DecompositionRecord::new(0xFC92, DecompositionTag::Compatibility, &[0x064A, 0x0632]),
    DecompositionRecord::new(0xFC93, DecompositionTag::Compatibility, &[0x064A, 0x0645]),
    DecompositionRecord::new(0xFC94, DecompositionTag::Compatibility, &[0x064A, 0x0646]),
    DecompositionRecord::new(0xFC95, DecompositionTag::Compatibility, &[0x064A, 0x0649]),
    DecompositionRecord::new(0xFC96, DecompositionTag::Compatibility, &[0x064A, 0x064A]),
    DecompositionRecord::new(0xFC97, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x062C]),
    DecompositionRecord::new(0xFC98, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x062D]),
    DecompositionRecord::new(0xFC99, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x062E]),
    DecompositionRecord::new(0xFC9A, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x0645]),
    DecompositionRecord::new(0xFC9B, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x0647]),
    DecompositionRecord::new(0xFC9C, DecompositionTag::Compatibility, &[0x0628, 0x062C]),
    DecompositionRecord::new(0xFC9D, DecompositionTag::Compatibility, &[0x0628, 0x062D]),
    DecompositionRecord::new(0xFC9E, DecompositionTag::Compatibility, &[0x0628, 0x062E]),
    DecompositionRecord::new(0xFC9F, DecompositionTag::Compatibility, &[0x0628, 0x0645]),
    DecompositionRecord::new(0xFCA0, DecompositionTag::Compatibility, &[0x0628, 0x0647]),
    DecompositionRecord::new(0xFCA1, DecompositionTag::Compatibility, &[0x062A, 0x062C]),
    DecompositionRecord::new(0xFCA2, DecompositionTag::Compatibility, &[0x062A, 0x062D]),
    DecompositionRecord::new(0xFCA3, DecompositionTag::Compatibility, &[0x062A, 0x062E]),
    DecompositionRecord::new(0xFCA4, DecompositionTag::Compatibility, &[0x062A, 0x0645]),
    DecompositionRecord::new(0xFCA5, DecompositionTag::Compatibility, &[0x062A, 0x0647]),
    DecompositionRecord::new(0xFCA6, DecompositionTag::Compatibility, &[0x062B, 0x0645]),
    DecompositionRecord::new(0xFCA7, DecompositionTag::Compatibility, &[0x062C, 0x062D]),
    DecompositionRecord::new(0xFCA8, DecompositionTag::Compatibility, &[0x062C, 0x0645]),
    DecompositionRecord::new(0xFCA9, DecompositionTag::Compatibility, &[0x062D, 0x062C]),
    DecompositionRecord::new(0xFCAA, DecompositionTag::Compatibility, &[0x062D, 0x0645]),
    DecompositionRecord::new(0xFCAB, DecompositionTag::Compatibility, &[0x062E, 0x062C]),
    DecompositionRecord::new(0xFCAC, DecompositionTag::Compatibility, &[0x062E, 0x0645]),
    DecompositionRecord::new(0xFCAD, DecompositionTag::Compatibility, &[0x0633, 0x062C]),
    DecompositionRecord::new(0xFCAE, DecompositionTag::Compatibility, &[0x0633, 0x062D]),
    DecompositionRecord::new(0xFCAF, DecompositionTag::Compatibility, &[0x0633, 0x062E]),
    DecompositionRecord::new(0xFCB0, DecompositionTag::Compatibility, &[0x0633, 0x0645]),
    DecompositionRecord::new(0xFCB1, DecompositionTag::Compatibility, &[0x0635, 0x062D]),
    DecompositionRecord::new(0xFCB2, DecompositionTag::Compatibility, &[0x0635, 0x062E]),
    DecompositionRecord::new(0xFCB3, DecompositionTag::Compatibility, &[0x0635, 0x0645]),
    DecompositionRecord::new(0xFCB4, DecompositionTag::Compatibility, &[0x0636, 0x062C]),
    DecompositionRecord::new(0xFCB5, DecompositionTag::Compatibility, &[0x0636, 0x062D]),
    DecompositionRecord::new(0xFCB6, DecompositionTag::Compatibility, &[0x0636, 0x062E]),
    DecompositionRecord::new(0xFCB7, DecompositionTag::Compatibility, &[0x0636, 0x0645]),
    DecompositionRecord::new(0xFCB8, DecompositionTag::Compatibility, &[0x0637, 0x062D]),
    DecompositionRecord::new(0xFCB9, DecompositionTag::Compatibility, &[0x0638, 0x0645]),
    DecompositionRecord::new(0xFCBA, DecompositionTag::Compatibility, &[0x0639, 0x062C]),
    DecompositionRecord::new(0xFCBB, DecompositionTag::Compatibility, &[0x0639, 0x0645]),
    DecompositionRecord::new(0xFCBC, DecompositionTag::Compatibility, &[0x063A, 0x062C]),
    DecompositionRecord::new(0xFCBD, DecompositionTag::Compatibility, &[0x063A, 0x0645]),
    DecompositionRecord::new(0xFCBE, DecompositionTag::Compatibility, &[0x0641, 0x062C]),
    DecompositionRecord::new(0xFCBF, DecompositionTag::Compatibility, &[0x0641, 0x062D]),
    DecompositionRecord::new(0xFCC0, DecompositionTag::Compatibility, &[0x0641, 0x062E]),
    DecompositionRecord::new(0xFCC1, DecompositionTag::Compatibility, &[0x0641, 0x0645]),
    DecompositionRecord::new(0xFCC2, DecompositionTag::Compatibility, &[0x0642, 0x062D]),
    DecompositionRecord::new(0xFCC3, DecompositionTag::Compatibility, &[0x0642, 0x0645]),
    DecompositionRecord::new(0xFCC4, DecompositionTag::Compatibility, &[0x0643, 0x062C]),
    DecompositionRecord::new(0xFCC5, DecompositionTag::Compatibility, &[0x0643, 0x062D]),
    DecompositionRecord::new(0xFCC6, DecompositionTag::Compatibility, &[0x0643, 0x062E]),
    DecompositionRecord::new(0xFCC7, DecompositionTag::Compatibility, &[0x0643, 0x0644]),
    DecompositionRecord::new(0xFCC8, DecompositionTag::Compatibility, &[0x0643, 0x0645]),
    DecompositionRecord::new(0xFCC9, DecompositionTag::Compatibility, &[0x0644, 0x062C]),
    DecompositionRecord::new(0xFCCA, DecompositionTag::Compatibility, &[0x0644, 0x062D]),
    DecompositionRecord::new(0xFCCB, DecompositionTag::Compatibility, &[0x0644, 0x062E]),
    DecompositionRecord::new(0xFCCC, DecompositionTag::Compatibility, &[0x0644, 0x0645]),
    DecompositionRecord::new(0xFCCD, DecompositionTag::Compatibility, &[0x0644, 0x0647]),
    DecompositionRecord::new(0xFCCE, DecompositionTag::Compatibility, &[0x0645, 0x062C]),
    DecompositionRecord::new(0xFCCF, DecompositionTag::Compatibility, &[0x0645, 0x062D]),
    DecompositionRecord::new(0xFCD0, DecompositionTag::Compatibility, &[0x0645, 0x062E]),
    DecompositionRecord::new(0xFCD1, DecompositionTag::Compatibility, &[0x0645, 0x0645]),
    DecompositionRecord::new(0xFCD2, DecompositionTag::Compatibility, &[0x0646, 0x062C]),
    DecompositionRecord::new(0xFCD3, DecompositionTag::Compatibility, &[0x0646, 0x062D]),
    DecompositionRecord::new(0xFCD4, DecompositionTag::Compatibility, &[0x0646, 0x062E]),
    DecompositionRecord::new(0xFCD5, DecompositionTag::Compatibility, &[0x0646, 0x0645]),
    DecompositionRecord::new(0xFCD6, DecompositionTag::Compatibility, &[0x0646, 0x0647]),
    DecompositionRecord::new(0xFCD7, DecompositionTag::Compatibility, &[0x0647, 0x062C]),
    DecompositionRecord::new(0xFCD8, DecompositionTag::Compatibility, &[0x0647, 0x0645]),
    DecompositionRecord::new(0xFCD9, DecompositionTag::Compatibility, &[0x0647, 0x0670]),
    DecompositionRecord::new(0xFCDA, DecompositionTag::Compatibility, &[0x064A, 0x062C]),
    DecompositionRecord::new(0xFCDB, DecompositionTag::Compatibility, &[0x064A, 0x062D]),
    DecompositionRecord::new(0xFCDC, DecompositionTag::Compatibility, &[0x064A, 0x062E]),
    DecompositionRecord::new(0xFCDD, DecompositionTag::Compatibility, &[0x064A, 0x0645]),
    DecompositionRecord::new(0xFCDE, DecompositionTag::Compatibility, &[0x064A, 0x0647]),
    DecompositionRecord::new(0xFCDF, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x0645]),
    DecompositionRecord::new(0xFCE0, DecompositionTag::Compatibility, &[0x064A, 0x0654, 0x0647]),
    DecompositionRecord::new(0xFCE1, DecompositionTag::Compatibility, &[0x0628, 0x0645]),
    DecompositionRecord::new(0xFCE2, DecompositionTag::Compatibility, &[0x0628, 0x0647]),
    DecompositionRecord::new(0xFCE3, DecompositionTag::Compatibility, &[0x062A, 0x0645]),
    DecompositionRecord::new(0xFCE4, DecompositionTag::Compatibility, &[0x062A, 0x0647]),
    DecompositionRecord::new(0xFCE5, DecompositionTag::Compatibility, &[0x062B, 0x0645]),
    DecompositionRecord::new(0xFCE6, DecompositionTag::Compatibility, &[0x062B, 0x0647]),
    DecompositionRecord::new(0xFCE7, DecompositionTag::Compatibility, &[0x0633, 0x0645]),
    DecompositionRecord::new(0xFCE8, DecompositionTag::Compatibility, &[0x0633, 0x0647]),
    DecompositionRecord::new(0xFCE9, DecompositionTag::Compatibility, &[0x0634, 0x0645]),
    DecompositionRecord::new(0xFCEA, DecompositionTag::Compatibility, &[0x0634, 0x0647]),
    DecompositionRecord::new(0xFCEB, DecompositionTag::Compatibility, &[0x0643, 0x0644]),
    DecompositionRecord::new(0xFCEC, DecompositionTag::Compatibility, &[0x0643, 0x0645]),
    DecompositionRecord::new(0xFCED, DecompositionTag::Compatibility, &[0x0644, 0x0645]),
    DecompositionRecord::new(0xFCEE, DecompositionTag::Compatibility, &[0x0646, 0x0645]),
    DecompositionRecord::new(0xFCEF, DecompositionTag::Compatibility, &[0x0646, 0x0647]),
    DecompositionRecord::new(0xFCF0, DecompositionTag::Compatibility, &[0x064A, 0x0645]),
    DecompositionRecord::new(0xFCF1, DecompositionTag::Compatibility, &[0x064A, 0x0647]),
    DecompositionRecord::new(0xFCF2, DecompositionTag::Compatibility, &[0x0640, 0x064E, 0x0651]),
    DecompositionRecord::new(0xFCF3, DecompositionTag::Compatibility, &[0x0640, 0x064F, 0x0651]),
    DecompositionRecord::new(0xFCF4, DecompositionTag::Compatibility, &[0x0640, 0x0650, 0x0651]),
    DecompositionRecord::new(0xFCF5, DecompositionTag::Compatibility, &[0x0637, 0x0649]),
    DecompositionRecord::new(0xFCF6, DecompositionTag::Compatibility, &[0x0637, 0x064A]),
    DecompositionRecord::new(0xFCF7, DecompositionTag::Compatibility, &[0x0639, 0x0649]),
    DecompositionRecord::new(0xFCF8, DecompositionTag::Compatibility, &[0x0639, 0x064A]),
    DecompositionRecord::new(0xFCF9, DecompositionTag::Compatibility, &[0x063A, 0x0649]),
    DecompositionRecord::new(0xFCFA, DecompositionTag::Compatibility, &[0x063A, 0x064A]),
    DecompositionRecord::new(0xFCFB, DecompositionTag::Compatibility, &[0x0633, 0x0649]),
    DecompositionRecord::new(0xFCFC, DecompositionTag::Compatibility, &[0x0633, 0x064A]),
    DecompositionRecord::new(0xFCFD, DecompositionTag::Compatibility, &[0x0634, 0x0649]),
    DecompositionRecord::new(0xFCFE, DecompositionTag::Compatibility, &[0x0634, 0x064A]),
    DecompositionRecord::new(0xFCFF, DecompositionTag::Compatibility, &[0x062D, 0x0649]),
    DecompositionRecord::new(0xFD00, DecompositionTag::Compatibility, &[0x062D, 0x064A]),
    DecompositionRecord::new(0xFD01, DecompositionTag::Compatibility, &[0x062C, 0x0649]),
    DecompositionRecord::new(0xFD02, DecompositionTag::Compatibility, &[0x062C, 0x064A]),
    DecompositionRecord::new(0xFD03, DecompositionTag::Compatibility, &[0x062E, 0x0649]),
    DecompositionRecord::new(0xFD04, DecompositionTag::Compatibility, &[0x062E, 0x064A]),
    DecompositionRecord::new(0xFD05, DecompositionTag::Compatibility, &[0x0635, 0x0649]),
    DecompositionRecord::new(0xFD06, DecompositionTag::Compatibility, &[0x0635, 0x064A]),
    DecompositionRecord::new(0xFD07, DecompositionTag::Compatibility, &[0x0636, 0x0649]),
    DecompositionRecord::new(0xFD08, DecompositionTag::Compatibility, &[0x0636, 0x064A]),
    DecompositionRecord::new(0xFD09, DecompositionTag::Compatibility, &[0x0634, 0x062C]),
    DecompositionRecord::new(0xFD0A, DecompositionTag::Compatibility, &[0x0634, 0x062D]),
    DecompositionRecord::new(0xFD0B, DecompositionTag::Compatibility, &[0x0634, 0x062E]),
    DecompositionRecord::new(0xFD0C, DecompositionTag::Compatibility, &[0x0634, 0x0645]),
    DecompositionRecord::new(0xFD0D, DecompositionTag::Compatibility, &[0x0634, 0x0631]),
    DecompositionRecord::new(0xFD0E, DecompositionTag::Compatibility, &[0x0633, 0x0631]),
    DecompositionRecord::new(0xFD0F, DecompositionTag::Compatibility, &[0x0635, 0x0631]),
    DecompositionRecord::new(0xFD10, DecompositionTag::Compatibility, &[0x0636, 0x0631]),
    DecompositionRecord::new(0xFD11, DecompositionTag::Compatibility, &[0x0637, 0x0649]),
    DecompositionRecord::new(0xFD12, DecompositionTag::Compatibility, &[0x0637, 0x064A]),
    DecompositionRecord::new(0xFD13, DecompositionTag::Compatibility, &[0x0639, 0x0649]),
    DecompositionRecord::new(0xFD14, DecompositionTag::Compatibility, &[0x0639, 0x064A]),
    DecompositionRecord::new(0xFD15, DecompositionTag::Compatibility, &[0x063A, 0x0649]),
    DecompositionRecord::new(0xFD16, DecompositionTag::Compatibility, &[0x063A, 0x064A]),
    DecompositionRecord::new(0xFD17, DecompositionTag::Compatibility, &[0x0633, 0x0649]),
    DecompositionRecord::new(0xFD18, DecompositionTag::Compatibility, &[0x0633, 0x064A]),
    DecompositionRecord::new(0xFD19, DecompositionTag::Compatibility, &[0x0634, 0x0649]),
    DecompositionRecord::new(0xFD1A, DecompositionTag::Compatibility, &[0x0634, 0x064A]),
    DecompositionRecord::new(0xFD1B, DecompositionTag::Compatibility, &[0x062D, 0x0649]),
    DecompositionRecord::new(0xFD1C, DecompositionTag::Compatibility, &[0x062D, 0x064A]),
    DecompositionRecord::new(0xFD1D, DecompositionTag::Compatibility, &[0x062C, 0x0649]),
    DecompositionRecord::new(0xFD1E, DecompositionTag::Compatibility, &[0x062C, 0x064A]),
    DecompositionRecord::new(0xFD1F, DecompositionTag::Compatibility, &[0x062E, 0x0649]),
    DecompositionRecord::new(0xFD20, DecompositionTag::Compatibility, &[0x062E, 0x064A]),
    DecompositionRecord::new(0xFD21, DecompositionTag::Compatibility, &[0x0635, 0x0649]),
    DecompositionRecord::new(0xFD22, DecompositionTag::Compatibility, &[0x0635, 0x064A]),
    DecompositionRecord::new(0xFD23, DecompositionTag::Compatibility, &[0x0636, 0x0649]),
    DecompositionRecord::new(0xFD24, DecompositionTag::Compatibility, &[0x0636, 0x064A]),
    DecompositionRecord::new(0xFD25, DecompositionTag::Compatibility, &[0x0634, 0x062C]),
    DecompositionRecord::new(0xFD26, DecompositionTag::Compatibility, &[0x0634, 0x062D]),
    DecompositionRecord::new(0xFD27, DecompositionTag::Compatibility, &[0x0634, 0x062E]),
    DecompositionRecord::new(0xFD28, DecompositionTag::Compatibility, &[0x0634, 0x0645]),
    DecompositionRecord::new(0xFD29, DecompositionTag::Compatibility, &[0x0634, 0x0631]),
    DecompositionRecord::new(0xFD2A, DecompositionTag::Compatibility, &[0x0633, 0x0631]),
    DecompositionRecord::new(0xFD2B, DecompositionTag::Compatibility, &[0x0635, 0x0631]),
    DecompositionRecord::new(0xFD2C, DecompositionTag::Compatibility, &[0x0636, 0x0631]),
    DecompositionRecord::new(0xFD2D, DecompositionTag::Compatibility, &[0x0634, 0x062C]),
    DecompositionRecord::new(0xFD2E, DecompositionTag::Compatibility, &[0x0634, 0x062D]),
    DecompositionRecord::new(0xFD2F, DecompositionTag::Compatibility, &[0x0634, 0x062E]),
    DecompositionRecord::new(0xFD30, DecompositionTag::Compatibility, &[0x0634, 0x0645]),
    DecompositionRecord::new(0xFD31, DecompositionTag::Compatibility, &[0x0633, 0x0647]),
    DecompositionRecord::new(0xFD32, DecompositionTag::Compatibility, &[0x0634, 0x0647]),
    DecompositionRecord::new(0xFD33, DecompositionTag::Compatibility, &[0x0637, 0x0645]),
    DecompositionRecord::new(0xFD34, DecompositionTag::Compatibility, &[0x0633, 0x062C]),
    DecompositionRecord::new(0xFD35, DecompositionTag::Compatibility, &[0x0633, 0x062D]),
    DecompositionRecord::new(0xFD36, DecompositionTag::Compatibility, &[0x0633, 0x062E]),
    DecompositionRecord::new(0xFD37, DecompositionTag::Compatibility, &[0x0634, 0x062C]),
    DecompositionRecord::new(0xFD38, DecompositionTag::Compatibility, &[0x0634, 0x062D]),
    DecompositionRecord::new(0xFD39, DecompositionTag::Compatibility, &[0x0634, 0x062E]),
    DecompositionRecord::new(0xFD3A, DecompositionTag::Compatibility, &[0x0637, 0x0645]),
    DecompositionRecord::new(0xFD3B, DecompositionTag::Compatibility, &[0x0638, 0x0645]),
    DecompositionRecord::new(0xFD3C, DecompositionTag::Compatibility, &[0x0627, 0x064B]),
    DecompositionRecord::new(0xFD3D, DecompositionTag::Compatibility, &[0x0627, 0x064B]),
    DecompositionRecord::new(0xFD50, DecompositionTag::Compatibility, &[0x062A, 0x062C, 0x0645]),
    DecompositionRecord::new(0xFD51, DecompositionTag::Compatibility, &[0x062A, 0x062D, 0x062C]),
    DecompositionRecord::new(0xFD52, DecompositionTag::Compatibility, &[0x062A, 0x062D, 0x062C]),
    DecompositionRecord::new(0xFD53, DecompositionTag::Compatibility, &[0x062A, 0x062D, 0x0645]),
    DecompositionRecord::new(0xFD54, DecompositionTag::Compatibility, &[0x062A, 0x062E, 0x0645]),
    DecompositionRecord::new(0xFD55, DecompositionTag::Compatibility, &[0x062A, 0x0645, 0x062C]),
    DecompositionRecord::new(0xFD56, DecompositionTag::Compatibility, &[0x062A, 0x0645, 0x062D]),
    DecompositionRecord::new(0xFD57, DecompositionTag::Compatibility, &[0x062A, 0x0645, 0x062E]),
    DecompositionRecord::new(0xFD58, DecompositionTag::Compatibility, &[0x062C, 0x0645, 0x062D]),
    DecompositionRecord::new(0xFD59, DecompositionTag::Compatibility, &[0x062C, 0x0645, 0x062D]),
    DecompositionRecord::new(0xFD5A, DecompositionTag::Compatibility, &[0x062D, 0x0645, 0x064A]),
    DecompositionRecord::new(0xFD5B, DecompositionTag::Compatibility, &[0x062D, 0x0645, 0x0649]),
    DecompositionRecord::new(0xFD5C, DecompositionTag::Compatibility, &[0x0633, 0x062D, 0x062C]),
    DecompositionRecord::new(0xFD5D, DecompositionTag::Compatibility, &[0x0633, 0x062C, 0x062D]),
    DecompositionRecord::new(0xFD5E, DecompositionTag::Compatibility, &[0x0633, 0x062C, 0x0649]),
    DecompositionRecord::new(0xFD5F, DecompositionTag::Compatibility, &[0x0633, 0x0645, 0x062D]),
    DecompositionRecord::new(0xFD60, DecompositionTag::Compatibility, &[0x0633, 0x0645, 0x062D]),
    DecompositionRecord::new(0xFD61, DecompositionTag::Compatibility, &[0x0633, 0x0645, 0x062C]),
    DecompositionRecord::new(0xFD62, DecompositionTag::Compatibility, &[0x0633, 0x0645, 0x0645]),
    DecompositionRecord::new(0xFD63, DecompositionTag::Compatibility, &[0x0633, 0x0645, 0x0645]),
    DecompositionRecord::new(0xFD64, DecompositionTag::Compatibility, &[0x0635, 0x062D, 0x062D]),
    DecompositionRecord::new(0xFD65, DecompositionTag::Compatibility, &[0x0635, 0x062D, 0x062D]),
    DecompositionRecord::new(0xFD66, DecompositionTag::Compatibility, &[0x0635, 0x0645, 0x0645]),
    DecompositionRecord::new(0xFD67, DecompositionTag::Compatibility, &[0x0634, 0x062D, 0x0645]),
    DecompositionRecord::new(0xFD68, DecompositionTag::Compatibility, &[0x0634, 0x062D, 0x0645]),
    DecompositionRecord::new(0xFD69, DecompositionTag::Compatibility, &[0x0634, 0x062C, 0x064A]),
    DecompositionRecord::new(0xFD6A, DecompositionTag::Compatibility, &[0x0634, 0x0645, 0x062E]),
    DecompositionRecord::new(0xFD6B, DecompositionTag::Compatibility, &[0x0634, 0x0645, 0x062E]),
    DecompositionRecord::new(0xFD6C, DecompositionTag::Compatibility, &[0x0634, 0x0645, 0x0645]),
    DecompositionRecord::new(0xFD6D, DecompositionTag::Compatibility, &[0x0634, 0x0645, 0x0645]),
    DecompositionRecord::new(0xFD6E, DecompositionTag::Compatibility, &[0x0636, 0x062D, 0x0649]),
    DecompositionRecord::new(0xFD6F, DecompositionTag::Compatibility, &[0x0636, 0x062E, 0x0645]),
    DecompositionRecord::new(0xFD70, DecompositionTag::Compatibility, &[0x0636, 0x062E, 0x0645]),
    DecompositionRecord::new(0xFD71, DecompositionTag::Compatibility, &[0x0637, 0x0645, 0x062D]),
    DecompositionRecord::new(0xFD72, DecompositionTag::Compatibility, &[0x0637, 0x0645, 0x062D]),
    DecompositionRecord::new(0xFD73, DecompositionTag::Compatibility, &[0x0637, 0x0645, 0x0645]),
    DecompositionRecord::new(0xFD74, DecompositionTag::Compatibility, &[0x0637, 0x0645, 0x064A]),
    DecompositionRecord::new(0xFD75, DecompositionTag::Compatibility, &[0x0639, 0x062C, 0x0645]),
    DecompositionRecord::new(0xFD76, DecompositionTag::Compatibility, &[0x0639, 0x0645, 0x0645]),
    DecompositionRecord::new(0xFD77, DecompositionTag::Compatibility, &[0x0639, 0x0645, 0x0645]),
    DecompositionRecord::new(0xFD78, DecompositionTag::Compatibility, &[0x0639, 0x0645, 0x0649]),
    DecompositionRecord::new(0xFD79, DecompositionTag::Compatibility, &[0x063A, 0x0645, 0x0645]),
    DecompositionRecord::new(0xFD7A, DecompositionTag::Compatibility, &[0x063A, 0x0645, 0x064A]),
    DecompositionRecord::new(0xFD7B, DecompositionTag::Compatibility, &[0x063A, 0x0645, 0x0649]),
    DecompositionRecord::new(0xFD7C, DecompositionTag::Compatibility, &[0x0641, 0x062E, 0x0645]),
    DecompositionRecord::new(0xFD7D, DecompositionTag::Compatibility, &[0x0641, 0x062E, 0x0645]),
    DecompositionRecord::new(0xFD7E, DecompositionTag::Compatibility, &[0x0642, 0x0645, 0x062D]),
    DecompositionRecord::new(0xFD7F, DecompositionTag::Compatibility, &[0x0642, 0x0645, 0x0645]),
    DecompositionRecord::new(0xFD80, DecompositionTag::Compatibility, &[0x0644, 0x062D, 0x0645]),
    DecompositionRecord::new(0xFD81, DecompositionTag::Compatibility, &[0x0644, 0x062D, 0x064A]),
    DecompositionRecord::new(0xFD82, DecompositionTag::Compatibility, &[0x0644, 0x062D, 0x0649]),
    DecompositionRecord::new(0xFD83, DecompositionTag::Compatibility, &[0x0644, 0x062C, 0x062C]),
    DecompositionRecord::new(0xFD84, DecompositionTag::Compatibility, &[0x0644, 0x062C, 0x062C]),
    DecompositionRecord::new(0xFD85, DecompositionTag::Compatibility, &[0x0644, 0x062E, 0x0645]),
    DecompositionRecord::new(0xFD86, DecompositionTag::Compatibility, &[0x0644, 0x062E, 0x0645]),
    DecompositionRecord::new(0xFD87, DecompositionTag::Compatibility, &[0x0644, 0x0645, 0x062D]),
    DecompositionRecord::new(0xFD88, DecompositionTag::Compatibility, &[0x0644, 0x0645, 0x062D]),
    DecompositionRecord::new(0xFD89, DecompositionTag::Compatibility, &[0x0645, 0x062D, 0x062C]),
    DecompositionRecord::new(0xFD8A, DecompositionTag::Compatibility, &[0x0645, 0x062D, 0x0645]),
    DecompositionRecord::new(0xFD8B, DecompositionTag::Compatibility, &[0x0645, 0x062D, 0x064A]),
    DecompositionRecord::new(0xFD8C, DecompositionTag::Compatibility, &[0x0645, 0x062C, 0x062D]),
    DecompositionRecord::new(0xFD8D, DecompositionTag::Compatibility, &[0x0645, 0x062C, 0x0645]),
    DecompositionRecord::new(0xFD8E, DecompositionTag::Compatibility, &[0x0645, 0x062E, 0x062C]),
    DecompositionRecord::new(0xFD8F, DecompositionTag::Compatibility, &[0x0645, 0x062E, 0x0645]),
    DecompositionRecord::new(0xFD92, DecompositionTag::Compatibility, &[0x0645, 0x062C, 0x062E]),
    DecompositionRecord::new(0xFD93, DecompositionTag::Compatibility, &[0x0647, 0x0645, 0x062C]),
    DecompositionRecord::new(0xFD94, DecompositionTag::Compatibility, &[0x0647, 0x0645, 0x0645]),
    DecompositionRecord::new(0xFD95, DecompositionTag::Compatibility, &[0x0646, 0x062D, 0x0645]),
    DecompositionRecord::new(0xFD96, DecompositionTag::Compatibility, &[0x0646, 0x062D, 0x0649]),
    DecompositionRecord::new(0xFD97, DecompositionTag::Compatibility, &[0x0646, 0x062C, 0x0645]),
    DecompositionRecord::new(0xFD98, DecompositionTag::Compatibility, &[0x0646, 0x062C, 0x0645]),
    DecompositionRecord::new(0xFD99, DecompositionTag::Compatibility, &[0x0646, 0x062C, 0x0649]),
    DecompositionRecord::new(0xFD9A, DecompositionTag::Compatibility, &[0x0646, 0x0645, 0x064A]),
    DecompositionRecord::new(0xFD9B, DecompositionTag::Compatibility, &[0x0646, 0x0645, 0x0649]),
    DecompositionRecord::new(0xFD9C, DecompositionTag::Compatibility, &[0x064A, 0x0645, 0x0645]),
    DecompositionRecord::new(0xFD9D, DecompositionTag::Compatibility, &[0x064A, 0x0645, 0x0645]),
    DecompositionRecord::new(0xFD9E, DecompositionTag::Compatibility, &[0x0628, 0x062E, 0x064A]),
    DecompositionRecord::new(0xFD9F, DecompositionTag::Compatibility, &[0x062A, 0x062C, 0x064A]),
    DecompositionRecord::new(0xFDA0, DecompositionTag::Compatibility, &[0x062A, 0x062C, 0x0649]),
    DecompositionRecord::new(0xFDA1, DecompositionTag::Compatibility, &[0x062A, 0x062E, 0x064A]),
    DecompositionRecord::new(0xFDA2, DecompositionTag::Compatibility, &[0x062A, 0x062E, 0x0649]),
    DecompositionRecord::new(0xFDA3, DecompositionTag::Compatibility, &[0x062A, 0x0645, 0x064A]),
    DecompositionRecord::new(0xFDA4, DecompositionTag::Compatibility, &[0x062A, 0x0645, 0x0649]),
    DecompositionRecord::new(0xFDA5, DecompositionTag::Compatibility, &[0x062C, 0x0645, 0x064A]),
    DecompositionRecord::new(0xFDA6, DecompositionTag::Compatibility, &[0x062C, 0x062D, 0x0649]),
    DecompositionRecord::new(0xFDA7, DecompositionTag::Compatibility, &[0x062C, 0x0645, 0x0649]),
    DecompositionRecord::new(0xFDA8, DecompositionTag::Compatibility, &[0x0633, 0x062E, 0x0649]),
    DecompositionRecord::new(0xFDA9, DecompositionTag::Compatibility, &[0x0635, 0x062D, 0x064A]),
    DecompositionRecord::new(0xFDAA, DecompositionTag::Compatibility, &[0x0634, 0x062D, 0x064A]),
    DecompositionRecord::new(0xFDAB, DecompositionTag::Compatibility, &[0x0636, 0x062D, 0x064A]),
    DecompositionRecord::new(0xFDAC, DecompositionTag::Compatibility, &[0x0644, 0x062C, 0x064A]),
    DecompositionRecord::new(0xFDAD, DecompositionTag::Compatibility, &[0x0644, 0x0645, 0x064A]),
    DecompositionRecord::new(0xFDAE, DecompositionTag::Compatibility, &[0x064A, 0x062D, 0x064A]),
    DecompositionRecord::new(0xFDAF, DecompositionTag::Compatibility, &[0x064A, 0x062C, 0x064A]),
    DecompositionRecord::new(0xFDB0, DecompositionTag::Compatibility, &[0x064A, 0x0645, 0x064A]),
    DecompositionRecord::new(0xFDB1, DecompositionTag::Compatibility, &[0x0645, 0x0645, 0x064A]),
    DecompositionRecord::new(0xFDB2, DecompositionTag::Compatibility, &[0x0642, 0x0645, 0x064A]),
    DecompositionRecord::new(0xFDB3, DecompositionTag::Compatibility, &[0x0646, 0x062D, 0x064A]),
    DecompositionRecord::new(0xFDB4, DecompositionTag::Compatibility, &[0x0642, 0x0645, 0x062D]),
    DecompositionRecord::new(0xFDB5, DecompositionTag::Compatibility, &[0x0644, 0x062D, 0x0645]),
    DecompositionRecord::new(0xFDB6, DecompositionTag::Compatibility, &[0x0639, 0x0645, 0x064A]),
    DecompositionRecord::new(0xFDB7, DecompositionTag::Compatibility, &[0x0643, 0x0645, 0x064A]),
    DecompositionRecord::new(0xFDB8, DecompositionTag::Compatibility, &[0x0646, 0x062C, 0x062D]),
    DecompositionRecord::new(0xFDB9, DecompositionTag::Compatibility, &[0x0645, 0x062E, 0x064A]),
    DecompositionRecord::new(0xFDBA, DecompositionTag::Compatibility, &[0x0644, 0x062C, 0x0645]),
    DecompositionRecord::new(0xFDBB, DecompositionTag::Compatibility, &[0x0643, 0x0645, 0x0645]),
    DecompositionRecord::new(0xFDBC, DecompositionTag::Compatibility, &[0x0644, 0x062C, 0x0645]),
    DecompositionRecord::new(0xFDBD, DecompositionTag::Compatibility, &[0x0646, 0x062C, 0x062D]),
    DecompositionRecord::new(0xFDBE, DecompositionTag::Compatibility, &[0x062C, 0x062D, 0x064A]),
    DecompositionRecord::new(0xFDBF, DecompositionTag::Compatibility, &[0x062D, 0x062C, 0x064A]),
    DecompositionRecord::new(0xFDC0, DecompositionTag::Compatibility, &[0x0645, 0x062C, 0x064A]),
    DecompositionRecord::new(0xFDC1, DecompositionTag::Compatibility, &[0x0641, 0x0645, 0x064A]),
    DecompositionRecord::new(0xFDC2, DecompositionTag::Compatibility, &[0x0628, 0x062D, 0x064A]),
    DecompositionRecord::new(0xFDC3, DecompositionTag::Compatibility, &[0x0643, 0x0645, 0x0645]),
    DecompositionRecord::new(0xFDC4, DecompositionTag::Compatibility, &[0x0639, 0x062C, 0x0645]),
    DecompositionRecord::new(0xFDC5, DecompositionTag::Compatibility, &[0x0635, 0x0645, 0x0645]),
    DecompositionRecord::new(0xFDC6, DecompositionTag::Compatibility, &[0x0633, 0x062E, 0x064A]),
    DecompositionRecord::new(0xFDC7, DecompositionTag::Compatibility, &[0x0646, 0x062C, 0x064A]),
    DecompositionRecord::new(0xFDF0, DecompositionTag::Compatibility, &[0x0635, 0x0644, 0x06D2]),
    DecompositionRecord::new(0xFDF1, DecompositionTag::Compatibility, &[0x0642, 0x0644, 0x06D2]),
    DecompositionRecord::new(0xFDF2, DecompositionTag::Compatibility, &[0x0627, 0x0644, 0x0644, 0x0647]),
    DecompositionRecord::new(0xFDF3, DecompositionTag::Compatibility, &[0x0627, 0x0643, 0x0628, 0x0631]),
    DecompositionRecord::new(0xFDF4, DecompositionTag::Compatibility, &[0x0645, 0x062D, 0x0645, 0x062F]),
    DecompositionRecord::new(0xFDF5, DecompositionTag::Compatibility, &[0x0635, 0x0644, 0x0639, 0x0645]),
    DecompositionRecord::new(0xFDF6, DecompositionTag::Compatibility, &[0x0631, 0x0633, 0x0648, 0x0644]),
    DecompositionRecord::new(0xFDF7, DecompositionTag::Compatibility, &[0x0639, 0x0644, 0x064A, 0x0647]),
    DecompositionRecord::new(0xFDF8, DecompositionTag::Compatibility, &[0x0648, 0x0633, 0x0644, 0x0645]),
    DecompositionRecord::new(0xFDF9, DecompositionTag::Compatibility, &[0x0635, 0x0644, 0x0649]),
    DecompositionRecord::new(0xFDFA, DecompositionTag::Compatibility, &[0x0635, 0x0644, 0x0649, 0x0020, 0x0627, 0x0644, 0x0644, 0x0647, 0x0020, 0x0639, 0x0644, 0x064A, 0x0647, 0x0020, 0x0648, 0x0633, 0x0644, 0x0645]),
    DecompositionRecord::new(0xFDFB, DecompositionTag::Compatibility, &[0x062C, 0x0644, 0x0020, 0x062C, 0x0644, 0x0627, 0x0644, 0x0647]),
    DecompositionRecord::new(0xFDFC, DecompositionTag::Compatibility, &[0x0631, 0x06CC, 0x0627, 0x0644]),
    DecompositionRecord::new(0xFE10, DecompositionTag::Compatibility, &[0x002C]),
    DecompositionRecord::new(0xFE11, DecompositionTag::Compatibility, &[0x3001]),
    DecompositionRecord::new(0xFE12, DecompositionTag::Compatibility, &[0x3002]),
    DecompositionRecord::new(0xFE13, DecompositionTag::Compatibility, &[0x003A]),
    DecompositionRecord::new(0xFE14, DecompositionTag::Compatibility, &[0x003B]),
    DecompositionRecord::new(0xFE15, DecompositionTag::Compatibility, &[0x0021]),
    DecompositionRecord::new(0xFE16, DecompositionTag::Compatibility, &[0x003F]),
    DecompositionRecord::new(0xFE17, DecompositionTag::Compatibility, &[0x3016]),
    DecompositionRecord::new(0xFE18, DecompositionTag::Compatibility, &[0x3017]),
    DecompositionRecord::new(0xFE19, DecompositionTag::Compatibility, &[0x002E, 0x002E, 0x002E]),
    DecompositionRecord::new(0xFE30, DecompositionTag::Compatibility, &[0x002E, 0x002E]),
    DecompositionRecord::new(0xFE31, DecompositionTag::Compatibility, &[0x2014]),
    DecompositionRecord::new(0xFE32, DecompositionTag::Compatibility, &[0x2013]),
    DecompositionRecord::new(0xFE33, DecompositionTag::Compatibility, &[0x005F]),
    DecompositionRecord::new(0xFE34, DecompositionTag::Compatibility, &[0x005F]),
    DecompositionRecord::new(0xFE35, DecompositionTag::Compatibility, &[0x0028]),
    DecompositionRecord::new(0xFE36, DecompositionTag::Compatibility, &[0x0029]),
    DecompositionRecord::new(0xFE37, DecompositionTag::Compatibility, &[0x007B]),
    DecompositionRecord::new(0xFE38, DecompositionTag::Compatibility, &[0x007D]),
    DecompositionRecord::new(0xFE39, DecompositionTag::Compatibility, &[0x3014]),
    DecompositionRecord::new(0xFE3A, DecompositionTag::Compatibility, &[0x3015]),
    DecompositionRecord::new(0xFE3B, DecompositionTag::Compatibility, &[0x3010]),
    DecompositionRecord::new(0xFE3C, DecompositionTag::Compatibility, &[0x3011]),
    DecompositionRecord::new(0xFE3D, DecompositionTag::Compatibility, &[0x300A]),
    DecompositionRecord::new(0xFE3E, DecompositionTag::Compatibility, &[0x300B]),
    DecompositionRecord::new(0xFE3F, DecompositionTag::Compatibility, &[0x3008]),
    DecompositionRecord::new(0xFE40, DecompositionTag::Compatibility, &[0x3009]),
    DecompositionRecord::new(0xFE41, DecompositionTag::Compatibility, &[0x300C]),
    DecompositionRecord::new(0xFE42, DecompositionTag::Compatibility, &[0x300D]),
    DecompositionRecord::new(0xFE43, DecompositionTag::Compatibility, &[0x300E]),
    DecompositionRecord::new(0xFE44, DecompositionTag::Compatibility, &[0x300F]),
    DecompositionRecord::new(0xFE47, DecompositionTag::Compatibility, &[0x005B]),
    DecompositionRecord::new(0xFE48, DecompositionTag::Compatibility, &[0x005D]),
    DecompositionRecord::new(0xFE49, DecompositionTag::Compatibility, &[0x0020, 0x0305]),
    DecompositionRecord::new(0xFE4A, DecompositionTag::Compatibility, &[0x0020, 0x0305]),
    DecompositionRecord::new(0xFE4B, DecompositionTag::Compatibility, &[0x0020, 0x0305]),
    DecompositionRecord::new(0xFE4C, DecompositionTag::Compatibility, &[0x0020, 0x0305]),
    DecompositionRecord::new(0xFE4D, DecompositionTag::Compatibility, &[0x005F]),
    DecompositionRecord::new(0xFE4E, DecompositionTag::Compatibility, &[0x005F]),
    DecompositionRecord::new(0xFE4F, DecompositionTag::Compatibility, &[0x005F]),
    DecompositionRecord::new(0xFE50, DecompositionTag::Compatibility, &[0x002C]),
    DecompositionRecord::new(0xFE51, DecompositionTag::Compatibility, &[0x3001]),
    DecompositionRecord::new(0xFE52, DecompositionTag::Compatibility, &[0x002E]),
    DecompositionRecord::new(0xFE54, DecompositionTag::Compatibility, &[0x003B]),
    DecompositionRecord::new(0xFE55, DecompositionTag::Compatibility, &[0x003A]),
    DecompositionRecord::new(0xFE56, DecompositionTag::Compatibility, &[0x003F]),
    DecompositionRecord::new(0xFE57, DecompositionTag::Compatibility, &[0x0021]),
    DecompositionRecord::new(0xFE58, DecompositionTag::Compatibility, &[0x2014]),
    DecompositionRecord::new(0xFE59, DecompositionTag::Compatibility, &[0x0028]),
    DecompositionRecord::new(0xFE5A, DecompositionTag::Compatibility, &[0x0029]),
    DecompositionRecord::new(0xFE5B, DecompositionTag::Compatibility, &[0x007B]),
    DecompositionRecord::new(0xFE5C, DecompositionTag::Compatibility, &[0x007D]),
    DecompositionRecord::new(0xFE5D, DecompositionTag::Compatibility, &[0x3014]),
    DecompositionRecord::new(0xFE5E, DecompositionTag::Compatibility, &[0x3015]),
    DecompositionRecord::new(0xFE5F, DecompositionTag::Compatibility, &[0x0023]),
    DecompositionRecord::new(0xFE60, DecompositionTag::Compatibility, &[0x0026]),
    DecompositionRecord::new(0xFE61, DecompositionTag::Compatibility, &[0x002A]),
    DecompositionRecord::new(0xFE62, DecompositionTag::Compatibility, &[0x002B]),
    DecompositionRecord::new(0xFE63, DecompositionTag::Compatibility, &[0x002D]),
    DecompositionRecord::new(0xFE64, DecompositionTag::Compatibility, &[0x003C]),
    DecompositionRecord::new(0xFE65, DecompositionTag::Compatibility, &[0x003E]),
    DecompositionRecord::new(0xFE66, DecompositionTag::Compatibility, &[0x003D]),
    DecompositionRecord::new(0xFE68, DecompositionTag::Compatibility, &[0x005C]),
    DecompositionRecord::new(0xFE69, DecompositionTag::Compatibility, &[0x0024]),
    DecompositionRecord::new(0xFE6A, DecompositionTag::Compatibility, &[0x0025]),
    DecompositionRecord::new(0xFE6B, DecompositionTag::Compatibility, &[0x0040]),
    DecompositionRecord::new(0xFE70, DecompositionTag::Compatibility, &[0x0020, 0x064B]),
    DecompositionRecord::new(0xFE71, DecompositionTag::Compatibility, &[0x0640, 0x064B]),
    DecompositionRecord::new(0xFE72, DecompositionTag::Compatibility, &[0x0020, 0x064C]),
    DecompositionRecord::new(0xFE74, DecompositionTag::Compatibility, &[0x0020, 0x064D]),
    DecompositionRecord::new(0xFE76, DecompositionTag::Compatibility, &[0x0020, 0x064E]),
    DecompositionRecord::new(0xFE77, DecompositionTag::Compatibility, &[0x0640, 0x064E]),
    DecompositionRecord::new(0xFE78, DecompositionTag::Compatibility, &[0x0020, 0x064F]),
    DecompositionRecord::new(0xFE79, DecompositionTag::Compatibility, &[0x0640, 0x064F]),
    DecompositionRecord::new(0xFE7A, DecompositionTag::Compatibility, &[0x0020, 0x0650]),
    DecompositionRecord::new(0xFE7B, DecompositionTag::Compatibility, &[0x0640, 0x0650]),
    DecompositionRecord::new(0xFE7C, DecompositionTag::Compatibility, &[0x0020, 0x0651]),
    DecompositionRecord::new(0xFE7D, DecompositionTag::Compatibility, &[0x0640, 0x0651]),
    DecompositionRecord::new(0xFE7E, DecompositionTag::Compatibility, &[0x0020, 0x0652]),
    DecompositionRecord::new(0xFE7F, DecompositionTag::Compatibility, &[0x0640, 0x0652]),
    DecompositionRecord::new(0xFE80, DecompositionTag::Compatibility, &[0x0621]),
    DecompositionRecord::new(0xFE81, DecompositionTag::Compatibility, &[0x0627, 0x0653]),
    DecompositionRecord::new(0xFE82, DecompositionTag::Compatibility, &[0x0627, 0x0653]),
    DecompositionRecord::new(0xFE83, DecompositionTag::Compatibility, &[0x0627, 0x0654]),
    DecompositionRecord::new(0xFE84, DecompositionTag::Compatibility, &[0x0627, 0x0654]),
    DecompositionRecord::new(0xFE85, DecompositionTag::Compatibility, &[0x0648, 0x0654]),
    DecompositionRecord::new(0xFE86, DecompositionTag::Compatibility, &[0x0648, 0x0654]),
    DecompositionRecord::new(0xFE87, DecompositionTag::Compatibility, &[0x0627, 0x0655]),
    DecompositionRecord::new(0xFE88, DecompositionTag::Compatibility, &[0x0627, 0x0655]),
    DecompositionRecord::new(0xFE89, DecompositionTag::Compatibility, &[0x064A, 0x0654]),
    DecompositionRecord::new(0xFE8A, DecompositionTag::Compatibility, &[0x064A, 0x0654]),
    DecompositionRecord::new(0xFE8B, DecompositionTag::Compatibility, &[0x064A, 0x0654]),
    DecompositionRecord::new(0xFE8C, DecompositionTag::Compatibility, &[0x064A, 0x0654]),
    DecompositionRecord::new(0xFE8D, DecompositionTag::Compatibility, &[0x0627]),
    DecompositionRecord::new(0xFE8E, DecompositionTag::Compatibility, &[0x0627]),
    DecompositionRecord::new(0xFE8F, DecompositionTag::Compatibility, &[0x0628]),
    DecompositionRecord::new(0xFE90, DecompositionTag::Compatibility, &[0x0628]),
    DecompositionRecord::new(0xFE91, DecompositionTag::Compatibility, &[0x0628]),
    DecompositionRecord::new(0xFE92, DecompositionTag::Compatibility, &[0x0628]),
    DecompositionRecord::new(0xFE93, DecompositionTag::Compatibility, &[0x0629]),
    DecompositionRecord::new(0xFE94, DecompositionTag::Compatibility, &[0x0629]),
    DecompositionRecord::new(0xFE95, DecompositionTag::Compatibility, &[0x062A]),
    DecompositionRecord::new(0xFE96, DecompositionTag::Compatibility, &[0x062A]),
    DecompositionRecord::new(0xFE97, DecompositionTag::Compatibility, &[0x062A]),
    DecompositionRecord::new(0xFE98, DecompositionTag::Compatibility, &[0x062A]),
    DecompositionRecord::new(0xFE99, DecompositionTag::Compatibility, &[0x062B]),
    DecompositionRecord::new(0xFE9A, DecompositionTag::Compatibility, &[0x062B]),
    DecompositionRecord::new(0xFE9B, DecompositionTag::Compatibility, &[0x062B]),
    DecompositionRecord::new(0xFE9C, DecompositionTag::Compatibility, &[0x062B]),
    DecompositionRecord::new(0xFE9D, DecompositionTag::Compatibility, &[0x062C]),
    DecompositionRecord::new(0xFE9E, DecompositionTag::Compatibility, &[0x062C]),
    DecompositionRecord::new(0xFE9F, DecompositionTag::Compatibility, &[0x062C]),
    DecompositionRecord::new(0xFEA0, DecompositionTag::Compatibility, &[0x062C]),
    DecompositionRecord::new(0xFEA1, DecompositionTag::Compatibility, &[0x062D]),
    DecompositionRecord::new(0xFEA2, DecompositionTag::Compatibility, &[0x062D]),
    DecompositionRecord::new(0xFEA3, DecompositionTag::Compatibility, &[0x062D]),
    DecompositionRecord::new(0xFEA4, DecompositionTag::Compatibility, &[0x062D]),
    DecompositionRecord::new(0xFEA5, DecompositionTag::Compatibility, &[0x062E]),
    DecompositionRecord::new(0xFEA6, DecompositionTag::Compatibility, &[0x062E]),
    DecompositionRecord::new(0xFEA7, DecompositionTag::Compatibility, &[0x062E]),
    DecompositionRecord::new(0xFEA8, DecompositionTag::Compatibility, &[0x062E]),
    DecompositionRecord::new(0xFEA9, DecompositionTag::Compatibility, &[0x062F]),
    DecompositionRecord::new(0xFEAA, DecompositionTag::Compatibility, &[0x062F]),
    DecompositionRecord::new(0xFEAB, DecompositionTag::Compatibility, &[0x0630]),
    DecompositionRecord::new(0xFEAC, DecompositionTag::Compatibility, &[0x0630]),
    DecompositionRecord::new(0xFEAD, DecompositionTag::Compatibility, &[0x0631]),
    DecompositionRecord::new(0xFEAE, DecompositionTag::Compatibility, &[0x0631]),
    DecompositionRecord::new(0xFEAF, DecompositionTag::Compatibility, &[0x0632]),
    DecompositionRecord::new(0xFEB0, DecompositionTag::Compatibility, &[0x0632]),
    DecompositionRecord::new(0xFEB1, DecompositionTag::Compatibility, &[0x0633]),
    DecompositionRecord::new(0xFEB2, DecompositionTag::Compatibility, &[0x0633]),
    DecompositionRecord::new(0xFEB3, DecompositionTag::Compatibility, &[0x0633]),
    DecompositionRecord::new(0xFEB4, DecompositionTag::Compatibility, &[0x0633]),
    DecompositionRecord::new(0xFEB5, DecompositionTag::Compatibility, &[0x0634]),
    DecompositionRecord::new(0xFEB6, DecompositionTag::Compatibility, &[0x0634]),
    DecompositionRecord::new(0xFEB7, DecompositionTag::Compatibility, &[0x0634]),
    DecompositionRecord::new(0xFEB8, DecompositionTag::Compatibility, &[0x0634]),
    DecompositionRecord::new(0xFEB9, DecompositionTag::Compatibility, &[0x0635]),
    DecompositionRecord::new(0xFEBA, DecompositionTag::Compatibility, &[0x0635]),
    DecompositionRecord::new(0xFEBB, DecompositionTag::Compatibility, &[0x0635]),
    DecompositionRecord::new(0xFEBC, DecompositionTag::Compatibility, &[0x0635]),
    DecompositionRecord::new(0xFEBD, DecompositionTag::Compatibility, &[0x0636]),
    DecompositionRecord::new(0xFEBE, DecompositionTag::Compatibility, &[0x0636]),
    DecompositionRecord::new(0xFEBF, DecompositionTag::Compatibility, &[0x0636]),
    DecompositionRecord::new(0xFEC0, DecompositionTag::Compatibility, &[0x0636]),
    DecompositionRecord::new(0xFEC1, DecompositionTag::Compatibility, &[0x0637]),
    DecompositionRecord::new(0xFEC2, DecompositionTag::Compatibility, &[0x0637]),
    DecompositionRecord::new(0xFEC3, DecompositionTag::Compatibility, &[0x0637]),
    DecompositionRecord::new(0xFEC4, DecompositionTag::Compatibility, &[0x0637]),
    DecompositionRecord::new(0xFEC5, DecompositionTag::Compatibility, &[0x0638]),
    DecompositionRecord::new(0xFEC6, DecompositionTag::Compatibility, &[0x0638]),
    DecompositionRecord::new(0xFEC7, DecompositionTag::Compatibility, &[0x0638]),
    DecompositionRecord::new(0xFEC8, DecompositionTag::Compatibility, &[0x0638]),
    DecompositionRecord::new(0xFEC9, DecompositionTag::Compatibility, &[0x0639]),
    DecompositionRecord::new(0xFECA, DecompositionTag::Compatibility, &[0x0639]),
    DecompositionRecord::new(0xFECB, DecompositionTag::Compatibility, &[0x0639]),
    DecompositionRecord::new(0xFECC, DecompositionTag::Compatibility, &[0x0639]),
    DecompositionRecord::new(0xFECD, DecompositionTag::Compatibility, &[0x063A]),
    DecompositionRecord::new(0xFECE, DecompositionTag::Compatibility, &[0x063A]),
    DecompositionRecord::new(0xFECF, DecompositionTag::Compatibility, &[0x063A]),
    DecompositionRecord::new(0xFED0, DecompositionTag::Compatibility, &[0x063A]),
    DecompositionRecord::new(0xFED1, DecompositionTag::Compatibility, &[0x0641]),
    DecompositionRecord::new(0xFED2, DecompositionTag::Compatibility, &[0x0641]),
    DecompositionRecord::new(0xFED3, DecompositionTag::Compatibility, &[0x0641]),
    DecompositionRecord::new(0xFED4, DecompositionTag::Compatibility, &[0x0641]),
    DecompositionRecord::new(0xFED5, DecompositionTag::Compatibility, &[0x0642]),
    DecompositionRecord::new(0xFED6, DecompositionTag::Compatibility, &[0x0642]),
    DecompositionRecord::new(0xFED7, DecompositionTag::Compatibility, &[0x0642]),
    DecompositionRecord::new(0xFED8, DecompositionTag::Compatibility, &[0x0642]),
    DecompositionRecord::new(0xFED9, DecompositionTag::Compatibility, &[0x0643]),
    DecompositionRecord::new(0xFEDA, DecompositionTag::Compatibility, &[0x0643]),
    DecompositionRecord::new(0xFEDB, DecompositionTag::Compatibility, &[0x0643]),
    DecompositionRecord::new(0xFEDC, DecompositionTag::Compatibility, &[0x0643]),
    DecompositionRecord::new(0xFEDD, DecompositionTag::Compatibility, &[0x0644]),
    DecompositionRecord::new(0xFEDE, DecompositionTag::Compatibility, &[0x0644]),
    DecompositionRecord::new(0xFEDF, DecompositionTag::Compatibility, &[0x0644]),
    DecompositionRecord::new(0xFEE0, DecompositionTag::Compatibility, &[0x0644]),
    DecompositionRecord::new(0xFEE1, DecompositionTag::Compatibility, &[0x0645]),
    DecompositionRecord::new(0xFEE2, DecompositionTag::Compatibility, &[0x0645]),
    DecompositionRecord::new(0xFEE3, DecompositionTag::Compatibility, &[0x0645]),
    DecompositionRecord::new(0xFEE4, DecompositionTag::Compatibility, &[0x0645]),
    DecompositionRecord::new(0xFEE5, DecompositionTag::Compatibility, &[0x0646]),
    DecompositionRecord::new(0xFEE6, DecompositionTag::Compatibility, &[0x0646]),
    DecompositionRecord::new(0xFEE7, DecompositionTag::Compatibility, &[0x0646]),
    DecompositionRecord::new(0xFEE8, DecompositionTag::Compatibility, &[0x0646]),
    DecompositionRecord::new(0xFEE9, DecompositionTag::Compatibility, &[0x0647]),
    DecompositionRecord::new(0xFEEA, DecompositionTag::Compatibility, &[0x0647]),
    DecompositionRecord::new(0xFEEB, DecompositionTag::Compatibility, &[0x0647]),
    DecompositionRecord::new(0xFEEC, DecompositionTag::Compatibility, &[0x0647]),
    DecompositionRecord::new(0xFEED, DecompositionTag::Compatibility, &[0x0648]),
    DecompositionRecord::new(0xFEEE, DecompositionTag::Compatibility, &[0x0648]),
    DecompositionRecord::new(0xFEEF, DecompositionTag::Compatibility, &[0x0649]),
    DecompositionRecord::new(0xFEF0, DecompositionTag::Compatibility, &[0x0649]),
    DecompositionRecord::new(0xFEF1, DecompositionTag::Compatibility, &[0x064A]),
    DecompositionRecord::new(0xFEF2, DecompositionTag::Compatibility, &[0x064A]),
    DecompositionRecord::new(0xFEF3, DecompositionTag::Compatibility, &[0x064A]),
    DecompositionRecord::new(0xFEF4, DecompositionTag::Compatibility, &[0x064A]),
    DecompositionRecord::new(0xFEF5, DecompositionTag::Compatibility, &[0x0644, 0x0627, 0x0653]),
    DecompositionRecord::new(0xFEF6, DecompositionTag::Compatibility, &[0x0644, 0x0627, 0x0653]),
    DecompositionRecord::new(0xFEF7, DecompositionTag::Compatibility, &[0x0644, 0x0627, 0x0654]),
    DecompositionRecord::new(0xFEF8, DecompositionTag::Compatibility, &[0x0644, 0x0627, 0x0654]),
    DecompositionRecord::new(0xFEF9, DecompositionTag::Compatibility, &[0x0644, 0x0627, 0x0655]),
    DecompositionRecord::new(0xFEFA, DecompositionTag::Compatibility, &[0x0644, 0x0627, 0x0655]),
    DecompositionRecord::new(0xFEFB, DecompositionTag::Compatibility, &[0x0644, 0x0627]),
    DecompositionRecord::new(0xFEFC, DecompositionTag::Compatibility, &[0x0644, 0x0627]),
    DecompositionRecord::new(0xFF01, DecompositionTag::Compatibility, &[0x0021]),
    DecompositionRecord::new(0xFF02, DecompositionTag::Compatibility, &[0x0022]),
    DecompositionRecord::new(0xFF03, DecompositionTag::Compatibility, &[0x0023]),
    DecompositionRecord::new(0xFF04, DecompositionTag::Compatibility, &[0x0024]),
    DecompositionRecord::new(0xFF05, DecompositionTag::Compatibility, &[0x0025]),
    DecompositionRecord::new(0xFF06, DecompositionTag::Compatibility, &[0x0026]),
    DecompositionRecord::new(0xFF07, DecompositionTag::Compatibility, &[0x0027]),
    DecompositionRecord::new(0xFF08, DecompositionTag::Compatibility, &[0x0028]),
    DecompositionRecord::new(0xFF09, DecompositionTag::Compatibility, &[0x0029]),
    DecompositionRecord::new(0xFF0A, DecompositionTag::Compatibility, &[0x002A]),
    DecompositionRecord::new(0xFF0B, DecompositionTag::Compatibility, &[0x002B]),
    DecompositionRecord::new(0xFF0C, DecompositionTag::Compatibility, &[0x002C]),
    DecompositionRecord::new(0xFF0D, DecompositionTag::Compatibility, &[0x002D]),
    DecompositionRecord::new(0xFF0E, DecompositionTag::Compatibility, &[0x002E]),
    DecompositionRecord::new(0xFF0F, DecompositionTag::Compatibility, &[0x002F]),
    DecompositionRecord::new(0xFF10, DecompositionTag::Compatibility, &[0x0030]),
    DecompositionRecord::new(0xFF11, DecompositionTag::Compatibility, &[0x0031]),
    DecompositionRecord::new(0xFF12, DecompositionTag::Compatibility, &[0x0032]),
    DecompositionRecord::new(0xFF13, DecompositionTag::Compatibility, &[0x0033]),
    DecompositionRecord::new(0xFF14, DecompositionTag::Compatibility, &[0x0034]),
    DecompositionRecord::new(0xFF15, DecompositionTag::Compatibility, &[0x0035]),
    DecompositionRecord::new(0xFF16, DecompositionTag::Compatibility, &[0x0036]),
    DecompositionRecord::new(0xFF17, DecompositionTag::Compatibility, &[0x0037]),
    DecompositionRecord::new(0xFF18, DecompositionTag::Compatibility, &[0x0038]),
    DecompositionRecord::new(0xFF19, DecompositionTag::Compatibility, &[0x0039]),
    DecompositionRecord::new(0xFF1A, DecompositionTag::Compatibility, &[0x003A]),
    DecompositionRecord::new(0xFF1B, DecompositionTag::Compatibility, &[0x003B]),
    DecompositionRecord::new(0xFF1C, DecompositionTag::Compatibility, &[0x003C]),
    DecompositionRecord::new(0xFF1D, DecompositionTag::Compatibility, &[0x003D]),
    DecompositionRecord::new(0xFF1E, DecompositionTag::Compatibility, &[0x003E]),
    DecompositionRecord::new(0xFF1F, DecompositionTag::Compatibility, &[0x003F]),
    DecompositionRecord::new(0xFF20, DecompositionTag::Compatibility, &[0x0040]),
    DecompositionRecord::new(0xFF21, DecompositionTag::Compatibility, &[0x0041]),
    DecompositionRecord::new(0xFF22, DecompositionTag::Compatibility, &[0x0042]),
    DecompositionRecord::new(0xFF23, DecompositionTag::Compatibility, &[0x0043]),
    DecompositionRecord::new(0xFF24, DecompositionTag::Compatibility, &[0x0044]),
    DecompositionRecord::new(0xFF25, DecompositionTag::Compatibility, &[0x0045]),
    DecompositionRecord::new(0xFF26, DecompositionTag::Compatibility, &[0x0046]),
    DecompositionRecord::new(0xFF27, DecompositionTag::Compatibility, &[0x0047]),
    DecompositionRecord::new(0xFF28, DecompositionTag::Compatibility, &[0x0048]),
    DecompositionRecord::new(0xFF29, DecompositionTag::Compatibility, &[0x0049]),
    DecompositionRecord::new(0xFF2A, DecompositionTag::Compatibility, &[0x004A]),
    DecompositionRecord::new(0xFF2B, DecompositionTag::Compatibility, &[0x004B]),
    DecompositionRecord::new(0xFF2C, DecompositionTag::Compatibility, &[0x004C]),
    DecompositionRecord::new(0xFF2D, DecompositionTag::Compatibility, &[0x004D]),
    DecompositionRecord::new(0xFF2E, DecompositionTag::Compatibility, &[0x004E]),
    DecompositionRecord::new(0xFF2F, DecompositionTag::Compatibility, &[0x004F]),
    DecompositionRecord::new(0xFF30, DecompositionTag::Compatibility, &[0x0050]),
    DecompositionRecord::new(0xFF31, DecompositionTag::Compatibility, &[0x0051]),
    DecompositionRecord::new(0xFF32, DecompositionTag::Compatibility, &[0x0052]),
    DecompositionRecord::new(0xFF33, DecompositionTag::Compatibility, &[0x0053]),
    DecompositionRecord::new(0xFF34, DecompositionTag::Compatibility, &[0x0054]),
    DecompositionRecord::new(0xFF35, DecompositionTag::Compatibility, &[0x0055]),
    DecompositionRecord::new(0xFF36, DecompositionTag::Compatibility, &[0x0056]),
    DecompositionRecord::new(0xFF37, DecompositionTag::Compatibility, &[0x0057]),
    DecompositionRecord::new(0xFF38, DecompositionTag::Compatibility, &[0x0058]),
    DecompositionRecord::new(0xFF39, DecompositionTag::Compatibility, &[0x0059]),
    DecompositionRecord::new(0xFF3A, DecompositionTag::Compatibility, &[0x005A]),
    DecompositionRecord::new(0xFF3B, DecompositionTag::Compatibility, &[0x005B]),
    DecompositionRecord::new(0xFF3C, DecompositionTag::Compatibility, &[0x005C]),
    DecompositionRecord::new(0xFF3D, DecompositionTag::Compatibility, &[0x005D]),
    DecompositionRecord::new(0xFF3E, DecompositionTag::Compatibility, &[0x005E]),
    DecompositionRecord::new(0xFF3F, DecompositionTag::Compatibility, &[0x005F]),
    DecompositionRecord::new(0xFF40, DecompositionTag::Compatibility, &[0x0060]),
    DecompositionRecord::new(0xFF41, DecompositionTag::Compatibility, &[0x0061]),
    DecompositionRecord::new(0xFF42, DecompositionTag::Compatibility, &[0x0062]),
    DecompositionRecord::new(0xFF43, DecompositionTag::Compatibility, &[0x0063]),
    DecompositionRecord::new(0xFF44, DecompositionTag::Compatibility, &[0x0064]),
    DecompositionRecord::new(0xFF45, DecompositionTag::Compatibility, &[0x0065]),
    DecompositionRecord::new(0xFF46, DecompositionTag::Compatibility, &[0x0066]),
    DecompositionRecord::new(0xFF47, DecompositionTag::Compatibility, &[0x0067]),
    DecompositionRecord::new(0xFF48, DecompositionTag::Compatibility, &[0x0068]),
    DecompositionRecord::new(0xFF49, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0xFF4A, DecompositionTag::Compatibility, &[0x006A]),
    DecompositionRecord::new(0xFF4B, DecompositionTag::Compatibility, &[0x006B]),
    DecompositionRecord::new(0xFF4C, DecompositionTag::Compatibility, &[0x006C]),
    DecompositionRecord::new(0xFF4D, DecompositionTag::Compatibility, &[0x006D]),
    DecompositionRecord::new(0xFF4E, DecompositionTag::Compatibility, &[0x006E]),
    DecompositionRecord::new(0xFF4F, DecompositionTag::Compatibility, &[0x006F]),
    DecompositionRecord::new(0xFF50, DecompositionTag::Compatibility, &[0x0070]),
    DecompositionRecord::new(0xFF51, DecompositionTag::Compatibility, &[0x0071]),
    DecompositionRecord::new(0xFF52, DecompositionTag::Compatibility, &[0x0072]),
    DecompositionRecord::new(0xFF53, DecompositionTag::Compatibility, &[0x0073]),
    DecompositionRecord::new(0xFF54, DecompositionTag::Compatibility, &[0x0074]),
    DecompositionRecord::new(0xFF55, DecompositionTag::Compatibility, &[0x0075]),
    DecompositionRecord::new(0xFF56, DecompositionTag::Compatibility, &[0x0076]),
    DecompositionRecord::new(0xFF57, DecompositionTag::Compatibility, &[0x0077]),
    DecompositionRecord::new(0xFF58, DecompositionTag::Compatibility, &[0x0078]),
    DecompositionRecord::new(0xFF59, DecompositionTag::Compatibility, &[0x0079]),
    DecompositionRecord::new(0xFF5A, DecompositionTag::Compatibility, &[0x007A]),
    DecompositionRecord::new(0xFF5B, DecompositionTag::Compatibility, &[0x007B]),
    DecompositionRecord::new(0xFF5C, DecompositionTag::Compatibility, &[0x007C]),
    DecompositionRecord::new(0xFF5D, DecompositionTag::Compatibility, &[0x007D]),
    DecompositionRecord::new(0xFF5E, DecompositionTag::Compatibility, &[0x007E]),
    DecompositionRecord::new(0xFF5F, DecompositionTag::Compatibility, &[0x2985]),
    DecompositionRecord::new(0xFF60, DecompositionTag::Compatibility, &[0x2986]),
    DecompositionRecord::new(0xFF61, DecompositionTag::Compatibility, &[0x3002]),
    DecompositionRecord::new(0xFF62, DecompositionTag::Compatibility, &[0x300C]),
    DecompositionRecord::new(0xFF63, DecompositionTag::Compatibility, &[0x300D]),
    DecompositionRecord::new(0xFF64, DecompositionTag::Compatibility, &[0x3001]),
    DecompositionRecord::new(0xFF65, DecompositionTag::Compatibility, &[0x30FB]),
    DecompositionRecord::new(0xFF66, DecompositionTag::Compatibility, &[0x30F2]),
    DecompositionRecord::new(0xFF67, DecompositionTag::Compatibility, &[0x30A1]),
    DecompositionRecord::new(0xFF68, DecompositionTag::Compatibility, &[0x30A3]),
    DecompositionRecord::new(0xFF69, DecompositionTag::Compatibility, &[0x30A5]),
    DecompositionRecord::new(0xFF6A, DecompositionTag::Compatibility, &[0x30A7]),
    DecompositionRecord::new(0xFF6B, DecompositionTag::Compatibility, &[0x30A9]),
    DecompositionRecord::new(0xFF6C, DecompositionTag::Compatibility, &[0x30E3]),
    DecompositionRecord::new(0xFF6D, DecompositionTag::Compatibility, &[0x30E5]),
    DecompositionRecord::new(0xFF6E, DecompositionTag::Compatibility, &[0x30E7]),
    DecompositionRecord::new(0xFF6F, DecompositionTag::Compatibility, &[0x30C3]),
    DecompositionRecord::new(0xFF70, DecompositionTag::Compatibility, &[0x30FC]),
    DecompositionRecord::new(0xFF71, DecompositionTag::Compatibility, &[0x30A2]),
    DecompositionRecord::new(0xFF72, DecompositionTag::Compatibility, &[0x30A4]),
    DecompositionRecord::new(0xFF73, DecompositionTag::Compatibility, &[0x30A6]),
    DecompositionRecord::new(0xFF74, DecompositionTag::Compatibility, &[0x30A8]),
    DecompositionRecord::new(0xFF75, DecompositionTag::Compatibility, &[0x30AA]),
    DecompositionRecord::new(0xFF76, DecompositionTag::Compatibility, &[0x30AB]),
    DecompositionRecord::new(0xFF77, DecompositionTag::Compatibility, &[0x30AD]),
    DecompositionRecord::new(0xFF78, DecompositionTag::Compatibility, &[0x30AF]),
    DecompositionRecord::new(0xFF79, DecompositionTag::Compatibility, &[0x30B1]),
    DecompositionRecord::new(0xFF7A, DecompositionTag::Compatibility, &[0x30B3]),
    DecompositionRecord::new(0xFF7B, DecompositionTag::Compatibility, &[0x30B5]),
    DecompositionRecord::new(0xFF7C, DecompositionTag::Compatibility, &[0x30B7]),
    DecompositionRecord::new(0xFF7D, DecompositionTag::Compatibility, &[0x30B9]),
    DecompositionRecord::new(0xFF7E, DecompositionTag::Compatibility, &[0x30BB]),
    DecompositionRecord::new(0xFF7F, DecompositionTag::Compatibility, &[0x30BD]),
    DecompositionRecord::new(0xFF80, DecompositionTag::Compatibility, &[0x30BF]),
    DecompositionRecord::new(0xFF81, DecompositionTag::Compatibility, &[0x30C1]),
    DecompositionRecord::new(0xFF82, DecompositionTag::Compatibility, &[0x30C4]),
    DecompositionRecord::new(0xFF83, DecompositionTag::Compatibility, &[0x30C6]),
    DecompositionRecord::new(0xFF84, DecompositionTag::Compatibility, &[0x30C8]),
    DecompositionRecord::new(0xFF85, DecompositionTag::Compatibility, &[0x30CA]),
    DecompositionRecord::new(0xFF86, DecompositionTag::Compatibility, &[0x30CB]),
    DecompositionRecord::new(0xFF87, DecompositionTag::Compatibility, &[0x30CC]),
    DecompositionRecord::new(0xFF88, DecompositionTag::Compatibility, &[0x30CD]),
    DecompositionRecord::new(0xFF89, DecompositionTag::Compatibility, &[0x30CE]),
    DecompositionRecord::new(0xFF8A, DecompositionTag::Compatibility, &[0x30CF]),
    DecompositionRecord::new(0xFF8B, DecompositionTag::Compatibility, &[0x30D2]),
    DecompositionRecord::new(0xFF8C, DecompositionTag::Compatibility, &[0x30D5]),
    DecompositionRecord::new(0xFF8D, DecompositionTag::Compatibility, &[0x30D8]),
    DecompositionRecord::new(0xFF8E, DecompositionTag::Compatibility, &[0x30DB]),
    DecompositionRecord::new(0xFF8F, DecompositionTag::Compatibility, &[0x30DE]),
    DecompositionRecord::new(0xFF90, DecompositionTag::Compatibility, &[0x30DF]),
    DecompositionRecord::new(0xFF91, DecompositionTag::Compatibility, &[0x30E0]),
    DecompositionRecord::new(0xFF92, DecompositionTag::Compatibility, &[0x30E1]),
    DecompositionRecord::new(0xFF93, DecompositionTag::Compatibility, &[0x30E2]),
    DecompositionRecord::new(0xFF94, DecompositionTag::Compatibility, &[0x30E4]),
    DecompositionRecord::new(0xFF95, DecompositionTag::Compatibility, &[0x30E6]),
    DecompositionRecord::new(0xFF96, DecompositionTag::Compatibility, &[0x30E8]),
    DecompositionRecord::new(0xFF97, DecompositionTag::Compatibility, &[0x30E9]),
    DecompositionRecord::new(0xFF98, DecompositionTag::Compatibility, &[0x30EA]),
    DecompositionRecord::new(0xFF99, DecompositionTag::Compatibility, &[0x30EB]),
    DecompositionRecord::new(0xFF9A, DecompositionTag::Compatibility, &[0x30EC]),
    DecompositionRecord::new(0xFF9B, DecompositionTag::Compatibility, &[0x30ED]),
    DecompositionRecord::new(0xFF9C, DecompositionTag::Compatibility, &[0x30EF]),
    DecompositionRecord::new(0xFF9D, DecompositionTag::Compatibility, &[0x30F3]),
    DecompositionRecord::new(0xFF9E, DecompositionTag::Compatibility, &[0x3099]),
    DecompositionRecord::new(0xFF9F, DecompositionTag::Compatibility, &[0x309A]),
    DecompositionRecord::new(0xFFA0, DecompositionTag::Compatibility, &[0x1160]),
    DecompositionRecord::new(0xFFA1, DecompositionTag::Compatibility, &[0x1100]),
    DecompositionRecord::new(0xFFA2, DecompositionTag::Compatibility, &[0x1101]),
    DecompositionRecord::new(0xFFA3, DecompositionTag::Compatibility, &[0x11AA]),
    DecompositionRecord::new(0xFFA4, DecompositionTag::Compatibility, &[0x1102]),
    DecompositionRecord::new(0xFFA5, DecompositionTag::Compatibility, &[0x11AC]),
    DecompositionRecord::new(0xFFA6, DecompositionTag::Compatibility, &[0x11AD]),
    DecompositionRecord::new(0xFFA7, DecompositionTag::Compatibility, &[0x1103]),
    DecompositionRecord::new(0xFFA8, DecompositionTag::Compatibility, &[0x1104]),
    DecompositionRecord::new(0xFFA9, DecompositionTag::Compatibility, &[0x1105]),
    DecompositionRecord::new(0xFFAA, DecompositionTag::Compatibility, &[0x11B0]),
    DecompositionRecord::new(0xFFAB, DecompositionTag::Compatibility, &[0x11B1]),
    DecompositionRecord::new(0xFFAC, DecompositionTag::Compatibility, &[0x11B2]),
    DecompositionRecord::new(0xFFAD, DecompositionTag::Compatibility, &[0x11B3]),
    DecompositionRecord::new(0xFFAE, DecompositionTag::Compatibility, &[0x11B4]),
    DecompositionRecord::new(0xFFAF, DecompositionTag::Compatibility, &[0x11B5]),
    DecompositionRecord::new(0xFFB0, DecompositionTag::Compatibility, &[0x111A]),
    DecompositionRecord::new(0xFFB1, DecompositionTag::Compatibility, &[0x1106]),
    DecompositionRecord::new(0xFFB2, DecompositionTag::Compatibility, &[0x1107]),
    DecompositionRecord::new(0xFFB3, DecompositionTag::Compatibility, &[0x1108]),
    DecompositionRecord::new(0xFFB4, DecompositionTag::Compatibility, &[0x1121]),
    DecompositionRecord::new(0xFFB5, DecompositionTag::Compatibility, &[0x1109]),
    DecompositionRecord::new(0xFFB6, DecompositionTag::Compatibility, &[0x110A]),
    DecompositionRecord::new(0xFFB7, DecompositionTag::Compatibility, &[0x110B]),
    DecompositionRecord::new(0xFFB8, DecompositionTag::Compatibility, &[0x110C]),
    DecompositionRecord::new(0xFFB9, DecompositionTag::Compatibility, &[0x110D]),
    DecompositionRecord::new(0xFFBA, DecompositionTag::Compatibility, &[0x110E]),
    DecompositionRecord::new(0xFFBB, DecompositionTag::Compatibility, &[0x110F]),
    DecompositionRecord::new(0xFFBC, DecompositionTag::Compatibility, &[0x1110]),
    DecompositionRecord::new(0xFFBD, DecompositionTag::Compatibility, &[0x1111]),
    DecompositionRecord::new(0xFFBE, DecompositionTag::Compatibility, &[0x1112]),
    DecompositionRecord::new(0xFFC2, DecompositionTag::Compatibility, &[0x1161]),
    DecompositionRecord::new(0xFFC3, DecompositionTag::Compatibility, &[0x1162]),
    DecompositionRecord::new(0xFFC4, DecompositionTag::Compatibility, &[0x1163]),
    DecompositionRecord::new(0xFFC5, DecompositionTag::Compatibility, &[0x1164]),
    DecompositionRecord::new(0xFFC6, DecompositionTag::Compatibility, &[0x1165]),
    DecompositionRecord::new(0xFFC7, DecompositionTag::Compatibility, &[0x1166]),
    DecompositionRecord::new(0xFFCA, DecompositionTag::Compatibility, &[0x1167]),
    DecompositionRecord::new(0xFFCB, DecompositionTag::Compatibility, &[0x1168]),
    DecompositionRecord::new(0xFFCC, DecompositionTag::Compatibility, &[0x1169]),
    DecompositionRecord::new(0xFFCD, DecompositionTag::Compatibility, &[0x116A]),
    DecompositionRecord::new(0xFFCE, DecompositionTag::Compatibility, &[0x116B]),
    DecompositionRecord::new(0xFFCF, DecompositionTag::Compatibility, &[0x116C]),
    DecompositionRecord::new(0xFFD2, DecompositionTag::Compatibility, &[0x116D]),
    DecompositionRecord::new(0xFFD3, DecompositionTag::Compatibility, &[0x116E]),
    DecompositionRecord::new(0xFFD4, DecompositionTag::Compatibility, &[0x116F]),
    DecompositionRecord::new(0xFFD5, DecompositionTag::Compatibility, &[0x1170]),
    DecompositionRecord::new(0xFFD6, DecompositionTag::Compatibility, &[0x1171]),
    DecompositionRecord::new(0xFFD7, DecompositionTag::Compatibility, &[0x1172]),
    DecompositionRecord::new(0xFFDA, DecompositionTag::Compatibility, &[0x1173]),
    DecompositionRecord::new(0xFFDB, DecompositionTag::Compatibility, &[0x1174]),
    DecompositionRecord::new(0xFFDC, DecompositionTag::Compatibility, &[0x1175]),
    DecompositionRecord::new(0xFFE0, DecompositionTag::Compatibility, &[0x00A2]),
    DecompositionRecord::new(0xFFE1, DecompositionTag::Compatibility, &[0x00A3]),
    DecompositionRecord::new(0xFFE2, DecompositionTag::Compatibility, &[0x00AC]),
    DecompositionRecord::new(0xFFE3, DecompositionTag::Compatibility, &[0x0020, 0x0304]),
    DecompositionRecord::new(0xFFE4, DecompositionTag::Compatibility, &[0x00A6]),
    DecompositionRecord::new(0xFFE5, DecompositionTag::Compatibility, &[0x00A5]),
    DecompositionRecord::new(0xFFE6, DecompositionTag::Compatibility, &[0x20A9]),
    DecompositionRecord::new(0xFFE8, DecompositionTag::Compatibility, &[0x2502]),
    DecompositionRecord::new(0xFFE9, DecompositionTag::Compatibility, &[0x2190]),
    DecompositionRecord::new(0xFFEA, DecompositionTag::Compatibility, &[0x2191]),
    DecompositionRecord::new(0xFFEB, DecompositionTag::Compatibility, &[0x2192]),
    DecompositionRecord::new(0xFFEC, DecompositionTag::Compatibility, &[0x2193]),
    DecompositionRecord::new(0xFFED, DecompositionTag::Compatibility, &[0x25A0]),
    DecompositionRecord::new(0xFFEE, DecompositionTag::Compatibility, &[0x25CB]),
    DecompositionRecord::new(0x10781, DecompositionTag::Compatibility, &[0x02D0]),
    DecompositionRecord::new(0x10782, DecompositionTag::Compatibility, &[0x02D1]),
    DecompositionRecord::new(0x10783, DecompositionTag::Compatibility, &[0x00E6]),
    DecompositionRecord::new(0x10784, DecompositionTag::Compatibility, &[0x0299]),
    DecompositionRecord::new(0x10785, DecompositionTag::Compatibility, &[0x0253]),
    DecompositionRecord::new(0x10787, DecompositionTag::Compatibility, &[0x02A3]),
    DecompositionRecord::new(0x10788, DecompositionTag::Compatibility, &[0xAB66]),
    DecompositionRecord::new(0x10789, DecompositionTag::Compatibility, &[0x02A5]),
    DecompositionRecord::new(0x1078A, DecompositionTag::Compatibility, &[0x02A4]),
    DecompositionRecord::new(0x1078B, DecompositionTag::Compatibility, &[0x0256]),
    DecompositionRecord::new(0x1078C, DecompositionTag::Compatibility, &[0x0257]),
    DecompositionRecord::new(0x1078D, DecompositionTag::Compatibility, &[0x1D91]),
    DecompositionRecord::new(0x1078E, DecompositionTag::Compatibility, &[0x0258]),
    DecompositionRecord::new(0x1078F, DecompositionTag::Compatibility, &[0x025E]),
    DecompositionRecord::new(0x10790, DecompositionTag::Compatibility, &[0x02A9]),
    DecompositionRecord::new(0x10791, DecompositionTag::Compatibility, &[0x0264]),
    DecompositionRecord::new(0x10792, DecompositionTag::Compatibility, &[0x0262]),
    DecompositionRecord::new(0x10793, DecompositionTag::Compatibility, &[0x0260]),
    DecompositionRecord::new(0x10794, DecompositionTag::Compatibility, &[0x029B]),
    DecompositionRecord::new(0x10795, DecompositionTag::Compatibility, &[0x0127]),
    DecompositionRecord::new(0x10796, DecompositionTag::Compatibility, &[0x029C]),
    DecompositionRecord::new(0x10797, DecompositionTag::Compatibility, &[0x0267]),
    DecompositionRecord::new(0x10798, DecompositionTag::Compatibility, &[0x0284]),
    DecompositionRecord::new(0x10799, DecompositionTag::Compatibility, &[0x02AA]),
    DecompositionRecord::new(0x1079A, DecompositionTag::Compatibility, &[0x02AB]),
    DecompositionRecord::new(0x1079B, DecompositionTag::Compatibility, &[0x026C]),
    DecompositionRecord::new(0x1079C, DecompositionTag::Compatibility, &[0x1DF04]),
    DecompositionRecord::new(0x1079D, DecompositionTag::Compatibility, &[0xA78E]),
    DecompositionRecord::new(0x1079E, DecompositionTag::Compatibility, &[0x026E]),
    DecompositionRecord::new(0x1079F, DecompositionTag::Compatibility, &[0x1DF05]),
    DecompositionRecord::new(0x107A0, DecompositionTag::Compatibility, &[0x028E]),
    DecompositionRecord::new(0x107A1, DecompositionTag::Compatibility, &[0x1DF06]),
    DecompositionRecord::new(0x107A2, DecompositionTag::Compatibility, &[0x00F8]),
    DecompositionRecord::new(0x107A3, DecompositionTag::Compatibility, &[0x0276]),
    DecompositionRecord::new(0x107A4, DecompositionTag::Compatibility, &[0x0277]),
    DecompositionRecord::new(0x107A5, DecompositionTag::Compatibility, &[0x0071]),
    DecompositionRecord::new(0x107A6, DecompositionTag::Compatibility, &[0x027A]),
    DecompositionRecord::new(0x107A7, DecompositionTag::Compatibility, &[0x1DF08]),
    DecompositionRecord::new(0x107A8, DecompositionTag::Compatibility, &[0x027D]),
    DecompositionRecord::new(0x107A9, DecompositionTag::Compatibility, &[0x027E]),
    DecompositionRecord::new(0x107AA, DecompositionTag::Compatibility, &[0x0280]),
    DecompositionRecord::new(0x107AB, DecompositionTag::Compatibility, &[0x02A8]),
    DecompositionRecord::new(0x107AC, DecompositionTag::Compatibility, &[0x02A6]),
    DecompositionRecord::new(0x107AD, DecompositionTag::Compatibility, &[0xAB67]),
    DecompositionRecord::new(0x107AE, DecompositionTag::Compatibility, &[0x02A7]),
    DecompositionRecord::new(0x107AF, DecompositionTag::Compatibility, &[0x0288]),
    DecompositionRecord::new(0x107B0, DecompositionTag::Compatibility, &[0x2C71]),
    DecompositionRecord::new(0x107B2, DecompositionTag::Compatibility, &[0x028F]),
    DecompositionRecord::new(0x107B3, DecompositionTag::Compatibility, &[0x02A1]),
    DecompositionRecord::new(0x107B4, DecompositionTag::Compatibility, &[0x02A2]),
    DecompositionRecord::new(0x107B5, DecompositionTag::Compatibility, &[0x0298]),
    DecompositionRecord::new(0x107B6, DecompositionTag::Compatibility, &[0x01C0]),
    DecompositionRecord::new(0x107B7, DecompositionTag::Compatibility, &[0x01C1]),
    DecompositionRecord::new(0x107B8, DecompositionTag::Compatibility, &[0x01C2]),
    DecompositionRecord::new(0x107B9, DecompositionTag::Compatibility, &[0x1DF0A]),
    DecompositionRecord::new(0x107BA, DecompositionTag::Compatibility, &[0x1DF1E]),
    DecompositionRecord::new(0x1D400, DecompositionTag::Compatibility, &[0x0041]),
    DecompositionRecord::new(0x1D401, DecompositionTag::Compatibility, &[0x0042]),
    DecompositionRecord::new(0x1D402, DecompositionTag::Compatibility, &[0x0043]),
    DecompositionRecord::new(0x1D403, DecompositionTag::Compatibility, &[0x0044]),
    DecompositionRecord::new(0x1D404, DecompositionTag::Compatibility, &[0x0045]),
    DecompositionRecord::new(0x1D405, DecompositionTag::Compatibility, &[0x0046]),
    DecompositionRecord::new(0x1D406, DecompositionTag::Compatibility, &[0x0047]),
    DecompositionRecord::new(0x1D407, DecompositionTag::Compatibility, &[0x0048]),
    DecompositionRecord::new(0x1D408, DecompositionTag::Compatibility, &[0x0049]),
    DecompositionRecord::new(0x1D409, DecompositionTag::Compatibility, &[0x004A]),
    DecompositionRecord::new(0x1D40A, DecompositionTag::Compatibility, &[0x004B]),
    DecompositionRecord::new(0x1D40B, DecompositionTag::Compatibility, &[0x004C]),
    DecompositionRecord::new(0x1D40C, DecompositionTag::Compatibility, &[0x004D]),
    DecompositionRecord::new(0x1D40D, DecompositionTag::Compatibility, &[0x004E]),
    DecompositionRecord::new(0x1D40E, DecompositionTag::Compatibility, &[0x004F]),
    DecompositionRecord::new(0x1D40F, DecompositionTag::Compatibility, &[0x0050]),
    DecompositionRecord::new(0x1D410, DecompositionTag::Compatibility, &[0x0051]),
    DecompositionRecord::new(0x1D411, DecompositionTag::Compatibility, &[0x0052]),
    DecompositionRecord::new(0x1D412, DecompositionTag::Compatibility, &[0x0053]),
    DecompositionRecord::new(0x1D413, DecompositionTag::Compatibility, &[0x0054]),
    DecompositionRecord::new(0x1D414, DecompositionTag::Compatibility, &[0x0055]),
    DecompositionRecord::new(0x1D415, DecompositionTag::Compatibility, &[0x0056]),
    DecompositionRecord::new(0x1D416, DecompositionTag::Compatibility, &[0x0057]),
    DecompositionRecord::new(0x1D417, DecompositionTag::Compatibility, &[0x0058]),
    DecompositionRecord::new(0x1D418, DecompositionTag::Compatibility, &[0x0059]),
    DecompositionRecord::new(0x1D419, DecompositionTag::Compatibility, &[0x005A]),
    DecompositionRecord::new(0x1D41A, DecompositionTag::Compatibility, &[0x0061]),
    DecompositionRecord::new(0x1D41B, DecompositionTag::Compatibility, &[0x0062]),
    DecompositionRecord::new(0x1D41C, DecompositionTag::Compatibility, &[0x0063]),
    DecompositionRecord::new(0x1D41D, DecompositionTag::Compatibility, &[0x0064]),
    DecompositionRecord::new(0x1D41E, DecompositionTag::Compatibility, &[0x0065]),
    DecompositionRecord::new(0x1D41F, DecompositionTag::Compatibility, &[0x0066]),
    DecompositionRecord::new(0x1D420, DecompositionTag::Compatibility, &[0x0067]),
    DecompositionRecord::new(0x1D421, DecompositionTag::Compatibility, &[0x0068]),
    DecompositionRecord::new(0x1D422, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0x1D423, DecompositionTag::Compatibility, &[0x006A]),
    DecompositionRecord::new(0x1D424, DecompositionTag::Compatibility, &[0x006B]),
    DecompositionRecord::new(0x1D425, DecompositionTag::Compatibility, &[0x006C]),
    DecompositionRecord::new(0x1D426, DecompositionTag::Compatibility, &[0x006D]),
    DecompositionRecord::new(0x1D427, DecompositionTag::Compatibility, &[0x006E]),
    DecompositionRecord::new(0x1D428, DecompositionTag::Compatibility, &[0x006F]),
    DecompositionRecord::new(0x1D429, DecompositionTag::Compatibility, &[0x0070]),
    DecompositionRecord::new(0x1D42A, DecompositionTag::Compatibility, &[0x0071]),
    DecompositionRecord::new(0x1D42B, DecompositionTag::Compatibility, &[0x0072]),
    DecompositionRecord::new(0x1D42C, DecompositionTag::Compatibility, &[0x0073]),
    DecompositionRecord::new(0x1D42D, DecompositionTag::Compatibility, &[0x0074]),
    DecompositionRecord::new(0x1D42E, DecompositionTag::Compatibility, &[0x0075]),
    DecompositionRecord::new(0x1D42F, DecompositionTag::Compatibility, &[0x0076]),
    DecompositionRecord::new(0x1D430, DecompositionTag::Compatibility, &[0x0077]),
    DecompositionRecord::new(0x1D431, DecompositionTag::Compatibility, &[0x0078]),
    DecompositionRecord::new(0x1D432, DecompositionTag::Compatibility, &[0x0079]),
    DecompositionRecord::new(0x1D433, DecompositionTag::Compatibility, &[0x007A]),
    DecompositionRecord::new(0x1D434, DecompositionTag::Compatibility, &[0x0041]),
    DecompositionRecord::new(0x1D435, DecompositionTag::Compatibility, &[0x0042]),
    DecompositionRecord::new(0x1D436, DecompositionTag::Compatibility, &[0x0043]),
    DecompositionRecord::new(0x1D437, DecompositionTag::Compatibility, &[0x0044]),
    DecompositionRecord::new(0x1D438, DecompositionTag::Compatibility, &[0x0045]),
    DecompositionRecord::new(0x1D439, DecompositionTag::Compatibility, &[0x0046]),
    DecompositionRecord::new(0x1D43A, DecompositionTag::Compatibility, &[0x0047]),
    DecompositionRecord::new(0x1D43B, DecompositionTag::Compatibility, &[0x0048]),
    DecompositionRecord::new(0x1D43C, DecompositionTag::Compatibility, &[0x0049]),
    DecompositionRecord::new(0x1D43D, DecompositionTag::Compatibility, &[0x004A]),
    DecompositionRecord::new(0x1D43E, DecompositionTag::Compatibility, &[0x004B]),
    DecompositionRecord::new(0x1D43F, DecompositionTag::Compatibility, &[0x004C]),
    DecompositionRecord::new(0x1D440, DecompositionTag::Compatibility, &[0x004D]),
    DecompositionRecord::new(0x1D441, DecompositionTag::Compatibility, &[0x004E]),
    DecompositionRecord::new(0x1D442, DecompositionTag::Compatibility, &[0x004F]),
    DecompositionRecord::new(0x1D443, DecompositionTag::Compatibility, &[0x0050]),
    DecompositionRecord::new(0x1D444, DecompositionTag::Compatibility, &[0x0051]),
    DecompositionRecord::new(0x1D445, DecompositionTag::Compatibility, &[0x0052]),
    DecompositionRecord::new(0x1D446, DecompositionTag::Compatibility, &[0x0053]),
    DecompositionRecord::new(0x1D447, DecompositionTag::Compatibility, &[0x0054]),
    DecompositionRecord::new(0x1D448, DecompositionTag::Compatibility, &[0x0055]),
    DecompositionRecord::new(0x1D449, DecompositionTag::Compatibility, &[0x0056]),
    DecompositionRecord::new(0x1D44A, DecompositionTag::Compatibility, &[0x0057]),
    DecompositionRecord::new(0x1D44B, DecompositionTag::Compatibility, &[0x0058]),
    DecompositionRecord::new(0x1D44C, DecompositionTag::Compatibility, &[0x0059]),
    DecompositionRecord::new(0x1D44D, DecompositionTag::Compatibility, &[0x005A]),
    DecompositionRecord::new(0x1D44E, DecompositionTag::Compatibility, &[0x0061]),
    DecompositionRecord::new(0x1D44F, DecompositionTag::Compatibility, &[0x0062]),
    DecompositionRecord::new(0x1D450, DecompositionTag::Compatibility, &[0x0063]),
    DecompositionRecord::new(0x1D451, DecompositionTag::Compatibility, &[0x0064]),
    DecompositionRecord::new(0x1D452, DecompositionTag::Compatibility, &[0x0065]),
    DecompositionRecord::new(0x1D453, DecompositionTag::Compatibility, &[0x0066]),
    DecompositionRecord::new(0x1D454, DecompositionTag::Compatibility, &[0x0067]),
    DecompositionRecord::new(0x1D456, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0x1D457, DecompositionTag::Compatibility, &[0x006A]),
    DecompositionRecord::new(0x1D458, DecompositionTag::Compatibility, &[0x006B]),
    DecompositionRecord::new(0x1D459, DecompositionTag::Compatibility, &[0x006C]),
    DecompositionRecord::new(0x1D45A, DecompositionTag::Compatibility, &[0x006D]),
    DecompositionRecord::new(0x1D45B, DecompositionTag::Compatibility, &[0x006E]),
    DecompositionRecord::new(0x1D45C, DecompositionTag::Compatibility, &[0x006F]),
    DecompositionRecord::new(0x1D45D, DecompositionTag::Compatibility, &[0x0070]),
    DecompositionRecord::new(0x1D45E, DecompositionTag::Compatibility, &[0x0071]),
    DecompositionRecord::new(0x1D45F, DecompositionTag::Compatibility, &[0x0072]),
    DecompositionRecord::new(0x1D460, DecompositionTag::Compatibility, &[0x0073]),
    DecompositionRecord::new(0x1D461, DecompositionTag::Compatibility, &[0x0074]),
    DecompositionRecord::new(0x1D462, DecompositionTag::Compatibility, &[0x0075]),
    DecompositionRecord::new(0x1D463, DecompositionTag::Compatibility, &[0x0076]),
    DecompositionRecord::new(0x1D464, DecompositionTag::Compatibility, &[0x0077]),
    DecompositionRecord::new(0x1D465, DecompositionTag::Compatibility, &[0x0078]),
    DecompositionRecord::new(0x1D466, DecompositionTag::Compatibility, &[0x0079]),
    DecompositionRecord::new(0x1D467, DecompositionTag::Compatibility, &[0x007A]),
    DecompositionRecord::new(0x1D468, DecompositionTag::Compatibility, &[0x0041]),
    DecompositionRecord::new(0x1D469, DecompositionTag::Compatibility, &[0x0042]),
    DecompositionRecord::new(0x1D46A, DecompositionTag::Compatibility, &[0x0043]),
    DecompositionRecord::new(0x1D46B, DecompositionTag::Compatibility, &[0x0044]),
    DecompositionRecord::new(0x1D46C, DecompositionTag::Compatibility, &[0x0045]),
    DecompositionRecord::new(0x1D46D, DecompositionTag::Compatibility, &[0x0046]),
    DecompositionRecord::new(0x1D46E, DecompositionTag::Compatibility, &[0x0047]),
    DecompositionRecord::new(0x1D46F, DecompositionTag::Compatibility, &[0x0048]),
    DecompositionRecord::new(0x1D470, DecompositionTag::Compatibility, &[0x0049]),
    DecompositionRecord::new(0x1D471, DecompositionTag::Compatibility, &[0x004A]),
    DecompositionRecord::new(0x1D472, DecompositionTag::Compatibility, &[0x004B]),
    DecompositionRecord::new(0x1D473, DecompositionTag::Compatibility, &[0x004C]),
    DecompositionRecord::new(0x1D474, DecompositionTag::Compatibility, &[0x004D]),
    DecompositionRecord::new(0x1D475, DecompositionTag::Compatibility, &[0x004E]),
    DecompositionRecord::new(0x1D476, DecompositionTag::Compatibility, &[0x004F]),
    DecompositionRecord::new(0x1D477, DecompositionTag::Compatibility, &[0x0050]),
    DecompositionRecord::new(0x1D478, DecompositionTag::Compatibility, &[0x0051]),
    DecompositionRecord::new(0x1D479, DecompositionTag::Compatibility, &[0x0052]),
    DecompositionRecord::new(0x1D47A, DecompositionTag::Compatibility, &[0x0053]),
    DecompositionRecord::new(0x1D47B, DecompositionTag::Compatibility, &[0x0054]),
    DecompositionRecord::new(0x1D47C, DecompositionTag::Compatibility, &[0x0055]),
    DecompositionRecord::new(0x1D47D, DecompositionTag::Compatibility, &[0x0056]),
    DecompositionRecord::new(0x1D47E, DecompositionTag::Compatibility, &[0x0057]),
    DecompositionRecord::new(0x1D47F, DecompositionTag::Compatibility, &[0x0058]),
    DecompositionRecord::new(0x1D480, DecompositionTag::Compatibility, &[0x0059]),
    DecompositionRecord::new(0x1D481, DecompositionTag::Compatibility, &[0x005A]),
    DecompositionRecord::new(0x1D482, DecompositionTag::Compatibility, &[0x0061]),
    DecompositionRecord::new(0x1D483, DecompositionTag::Compatibility, &[0x0062]),
    DecompositionRecord::new(0x1D484, DecompositionTag::Compatibility, &[0x0063]),
    DecompositionRecord::new(0x1D485, DecompositionTag::Compatibility, &[0x0064]),
    DecompositionRecord::new(0x1D486, DecompositionTag::Compatibility, &[0x0065]),
    DecompositionRecord::new(0x1D487, DecompositionTag::Compatibility, &[0x0066]),
    DecompositionRecord::new(0x1D488, DecompositionTag::Compatibility, &[0x0067]),
    DecompositionRecord::new(0x1D489, DecompositionTag::Compatibility, &[0x0068]),
    DecompositionRecord::new(0x1D48A, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0x1D48B, DecompositionTag::Compatibility, &[0x006A]),
    DecompositionRecord::new(0x1D48C, DecompositionTag::Compatibility, &[0x006B]),
    DecompositionRecord::new(0x1D48D, DecompositionTag::Compatibility, &[0x006C]),
    DecompositionRecord::new(0x1D48E, DecompositionTag::Compatibility, &[0x006D]),
    DecompositionRecord::new(0x1D48F, DecompositionTag::Compatibility, &[0x006E]),
    DecompositionRecord::new(0x1D490, DecompositionTag::Compatibility, &[0x006F]),
    DecompositionRecord::new(0x1D491, DecompositionTag::Compatibility, &[0x0070]),
    DecompositionRecord::new(0x1D492, DecompositionTag::Compatibility, &[0x0071]),
    DecompositionRecord::new(0x1D493, DecompositionTag::Compatibility, &[0x0072]),
    DecompositionRecord::new(0x1D494, DecompositionTag::Compatibility, &[0x0073]),
    DecompositionRecord::new(0x1D495, DecompositionTag::Compatibility, &[0x0074]),
    DecompositionRecord::new(0x1D496, DecompositionTag::Compatibility, &[0x0075]),
    DecompositionRecord::new(0x1D497, DecompositionTag::Compatibility, &[0x0076]),
    DecompositionRecord::new(0x1D498, DecompositionTag::Compatibility, &[0x0077]),
    DecompositionRecord::new(0x1D499, DecompositionTag::Compatibility, &[0x0078]),
    DecompositionRecord::new(0x1D49A, DecompositionTag::Compatibility, &[0x0079]),
    DecompositionRecord::new(0x1D49B, DecompositionTag::Compatibility, &[0x007A]),
    DecompositionRecord::new(0x1D49C, DecompositionTag::Compatibility, &[0x0041]),
    DecompositionRecord::new(0x1D49E, DecompositionTag::Compatibility, &[0x0043]),
    DecompositionRecord::new(0x1D49F, DecompositionTag::Compatibility, &[0x0044]),
    DecompositionRecord::new(0x1D4A2, DecompositionTag::Compatibility, &[0x0047]),
    DecompositionRecord::new(0x1D4A5, DecompositionTag::Compatibility, &[0x004A]),
    DecompositionRecord::new(0x1D4A6, DecompositionTag::Compatibility, &[0x004B]),
    DecompositionRecord::new(0x1D4A9, DecompositionTag::Compatibility, &[0x004E]),
    DecompositionRecord::new(0x1D4AA, DecompositionTag::Compatibility, &[0x004F]),
    DecompositionRecord::new(0x1D4AB, DecompositionTag::Compatibility, &[0x0050]),
    DecompositionRecord::new(0x1D4AC, DecompositionTag::Compatibility, &[0x0051]),
    DecompositionRecord::new(0x1D4AE, DecompositionTag::Compatibility, &[0x0053]),
    DecompositionRecord::new(0x1D4AF, DecompositionTag::Compatibility, &[0x0054]),
    DecompositionRecord::new(0x1D4B0, DecompositionTag::Compatibility, &[0x0055]),
    DecompositionRecord::new(0x1D4B1, DecompositionTag::Compatibility, &[0x0056]),
    DecompositionRecord::new(0x1D4B2, DecompositionTag::Compatibility, &[0x0057]),
    DecompositionRecord::new(0x1D4B3, DecompositionTag::Compatibility, &[0x0058]),
    DecompositionRecord::new(0x1D4B4, DecompositionTag::Compatibility, &[0x0059]),
    DecompositionRecord::new(0x1D4B5, DecompositionTag::Compatibility, &[0x005A]),
    DecompositionRecord::new(0x1D4B6, DecompositionTag::Compatibility, &[0x0061]),
    DecompositionRecord::new(0x1D4B7, DecompositionTag::Compatibility, &[0x0062]),
    DecompositionRecord::new(0x1D4B8, DecompositionTag::Compatibility, &[0x0063]),
    DecompositionRecord::new(0x1D4B9, DecompositionTag::Compatibility, &[0x0064]),
    DecompositionRecord::new(0x1D4BB, DecompositionTag::Compatibility, &[0x0066]),
    DecompositionRecord::new(0x1D4BD, DecompositionTag::Compatibility, &[0x0068]),
    DecompositionRecord::new(0x1D4BE, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0x1D4BF, DecompositionTag::Compatibility, &[0x006A]),
    DecompositionRecord::new(0x1D4C0, DecompositionTag::Compatibility, &[0x006B]),
    DecompositionRecord::new(0x1D4C1, DecompositionTag::Compatibility, &[0x006C]),
    DecompositionRecord::new(0x1D4C2, DecompositionTag::Compatibility, &[0x006D]),
    DecompositionRecord::new(0x1D4C3, DecompositionTag::Compatibility, &[0x006E]),
    DecompositionRecord::new(0x1D4C5, DecompositionTag::Compatibility, &[0x0070]),
    DecompositionRecord::new(0x1D4C6, DecompositionTag::Compatibility, &[0x0071]),
    DecompositionRecord::new(0x1D4C7, DecompositionTag::Compatibility, &[0x0072]),
    DecompositionRecord::new(0x1D4C8, DecompositionTag::Compatibility, &[0x0073]),
    DecompositionRecord::new(0x1D4C9, DecompositionTag::Compatibility, &[0x0074]),
    DecompositionRecord::new(0x1D4CA, DecompositionTag::Compatibility, &[0x0075]),
    DecompositionRecord::new(0x1D4CB, DecompositionTag::Compatibility, &[0x0076]),
    DecompositionRecord::new(0x1D4CC, DecompositionTag::Compatibility, &[0x0077]),
    DecompositionRecord::new(0x1D4CD, DecompositionTag::Compatibility, &[0x0078]),
    DecompositionRecord::new(0x1D4CE, DecompositionTag::Compatibility, &[0x0079]),
    DecompositionRecord::new(0x1D4CF, DecompositionTag::Compatibility, &[0x007A]),
    DecompositionRecord::new(0x1D4D0, DecompositionTag::Compatibility, &[0x0041]),
    DecompositionRecord::new(0x1D4D1, DecompositionTag::Compatibility, &[0x0042]),
    DecompositionRecord::new(0x1D4D2, DecompositionTag::Compatibility, &[0x0043]),
    DecompositionRecord::new(0x1D4D3, DecompositionTag::Compatibility, &[0x0044]),
    DecompositionRecord::new(0x1D4D4, DecompositionTag::Compatibility, &[0x0045]),
    DecompositionRecord::new(0x1D4D5, DecompositionTag::Compatibility, &[0x0046]),
    DecompositionRecord::new(0x1D4D6, DecompositionTag::Compatibility, &[0x0047]),
    DecompositionRecord::new(0x1D4D7, DecompositionTag::Compatibility, &[0x0048]),
    DecompositionRecord::new(0x1D4D8, DecompositionTag::Compatibility, &[0x0049]),
    DecompositionRecord::new(0x1D4D9, DecompositionTag::Compatibility, &[0x004A]),
    DecompositionRecord::new(0x1D4DA, DecompositionTag::Compatibility, &[0x004B]),
    DecompositionRecord::new(0x1D4DB, DecompositionTag::Compatibility, &[0x004C]),
    DecompositionRecord::new(0x1D4DC, DecompositionTag::Compatibility, &[0x004D]),
    DecompositionRecord::new(0x1D4DD, DecompositionTag::Compatibility, &[0x004E]),
    DecompositionRecord::new(0x1D4DE, DecompositionTag::Compatibility, &[0x004F]),
    DecompositionRecord::new(0x1D4DF, DecompositionTag::Compatibility, &[0x0050]),
    DecompositionRecord::new(0x1D4E0, DecompositionTag::Compatibility, &[0x0051]),
    DecompositionRecord::new(0x1D4E1, DecompositionTag::Compatibility, &[0x0052]),
    DecompositionRecord::new(0x1D4E2, DecompositionTag::Compatibility, &[0x0053]),
    DecompositionRecord::new(0x1D4E3, DecompositionTag::Compatibility, &[0x0054]),
    DecompositionRecord::new(0x1D4E4, DecompositionTag::Compatibility, &[0x0055]),
    DecompositionRecord::new(0x1D4E5, DecompositionTag::Compatibility, &[0x0056]),
    DecompositionRecord::new(0x1D4E6, DecompositionTag::Compatibility, &[0x0057]),
    DecompositionRecord::new(0x1D4E7, DecompositionTag::Compatibility, &[0x0058]),
    DecompositionRecord::new(0x1D4E8, DecompositionTag::Compatibility, &[0x0059]),
    DecompositionRecord::new(0x1D4E9, DecompositionTag::Compatibility, &[0x005A]),
    DecompositionRecord::new(0x1D4EA, DecompositionTag::Compatibility, &[0x0061]),
    DecompositionRecord::new(0x1D4EB, DecompositionTag::Compatibility, &[0x0062]),
    DecompositionRecord::new(0x1D4EC, DecompositionTag::Compatibility, &[0x0063]),
    DecompositionRecord::new(0x1D4ED, DecompositionTag::Compatibility, &[0x0064]),
    DecompositionRecord::new(0x1D4EE, DecompositionTag::Compatibility, &[0x0065]),
    DecompositionRecord::new(0x1D4EF, DecompositionTag::Compatibility, &[0x0066]),
    DecompositionRecord::new(0x1D4F0, DecompositionTag::Compatibility, &[0x0067]),
    DecompositionRecord::new(0x1D4F1, DecompositionTag::Compatibility, &[0x0068]),
    DecompositionRecord::new(0x1D4F2, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0x1D4F3, DecompositionTag::Compatibility, &[0x006A]),
    DecompositionRecord::new(0x1D4F4, DecompositionTag::Compatibility, &[0x006B]),
    DecompositionRecord::new(0x1D4F5, DecompositionTag::Compatibility, &[0x006C]),
    DecompositionRecord::new(0x1D4F6, DecompositionTag::Compatibility, &[0x006D]),
    DecompositionRecord::new(0x1D4F7, DecompositionTag::Compatibility, &[0x006E]),
    DecompositionRecord::new(0x1D4F8, DecompositionTag::Compatibility, &[0x006F]),
    DecompositionRecord::new(0x1D4F9, DecompositionTag::Compatibility, &[0x0070]),
    DecompositionRecord::new(0x1D4FA, DecompositionTag::Compatibility, &[0x0071]),
    DecompositionRecord::new(0x1D4FB, DecompositionTag::Compatibility, &[0x0072]),
    DecompositionRecord::new(0x1D4FC, DecompositionTag::Compatibility, &[0x0073]),
    DecompositionRecord::new(0x1D4FD, DecompositionTag::Compatibility, &[0x0074]),
    DecompositionRecord::new(0x1D4FE, DecompositionTag::Compatibility, &[0x0075]),
    DecompositionRecord::new(0x1D4FF, DecompositionTag::Compatibility, &[0x0076]),
    DecompositionRecord::new(0x1D500, DecompositionTag::Compatibility, &[0x0077]),
    DecompositionRecord::new(0x1D501, DecompositionTag::Compatibility, &[0x0078]),
    DecompositionRecord::new(0x1D502, DecompositionTag::Compatibility, &[0x0079]),
    DecompositionRecord::new(0x1D503, DecompositionTag::Compatibility, &[0x007A]),
    DecompositionRecord::new(0x1D504, DecompositionTag::Compatibility, &[0x0041]),
    DecompositionRecord::new(0x1D505, DecompositionTag::Compatibility, &[0x0042]),
    DecompositionRecord::new(0x1D507, DecompositionTag::Compatibility, &[0x0044]),
    DecompositionRecord::new(0x1D508, DecompositionTag::Compatibility, &[0x0045]),
    DecompositionRecord::new(0x1D509, DecompositionTag::Compatibility, &[0x0046]),
    DecompositionRecord::new(0x1D50A, DecompositionTag::Compatibility, &[0x0047]),
    DecompositionRecord::new(0x1D50D, DecompositionTag::Compatibility, &[0x004A]),
    DecompositionRecord::new(0x1D50E, DecompositionTag::Compatibility, &[0x004B]),
    DecompositionRecord::new(0x1D50F, DecompositionTag::Compatibility, &[0x004C]),
    DecompositionRecord::new(0x1D510, DecompositionTag::Compatibility, &[0x004D]),
    DecompositionRecord::new(0x1D511, DecompositionTag::Compatibility, &[0x004E]),
    DecompositionRecord::new(0x1D512, DecompositionTag::Compatibility, &[0x004F]),
    DecompositionRecord::new(0x1D513, DecompositionTag::Compatibility, &[0x0050]),
    DecompositionRecord::new(0x1D514, DecompositionTag::Compatibility, &[0x0051]),
    DecompositionRecord::new(0x1D516, DecompositionTag::Compatibility, &[0x0053]),
    DecompositionRecord::new(0x1D517, DecompositionTag::Compatibility, &[0x0054]),
    DecompositionRecord::new(0x1D518, DecompositionTag::Compatibility, &[0x0055]),
    DecompositionRecord::new(0x1D519, DecompositionTag::Compatibility, &[0x0056]),
    DecompositionRecord::new(0x1D51A, DecompositionTag::Compatibility, &[0x0057]),
    DecompositionRecord::new(0x1D51B, DecompositionTag::Compatibility, &[0x0058]),
    DecompositionRecord::new(0x1D51C, DecompositionTag::Compatibility, &[0x0059]),
    DecompositionRecord::new(0x1D51E, DecompositionTag::Compatibility, &[0x0061]),
    DecompositionRecord::new(0x1D51F, DecompositionTag::Compatibility, &[0x0062]),
    DecompositionRecord::new(0x1D520, DecompositionTag::Compatibility, &[0x0063]),
    DecompositionRecord::new(0x1D521, DecompositionTag::Compatibility, &[0x0064]),
    DecompositionRecord::new(0x1D522, DecompositionTag::Compatibility, &[0x0065]),
    DecompositionRecord::new(0x1D523, DecompositionTag::Compatibility, &[0x0066]),
    DecompositionRecord::new(0x1D524, DecompositionTag::Compatibility, &[0x0067]),
    DecompositionRecord::new(0x1D525, DecompositionTag::Compatibility, &[0x0068]),
    DecompositionRecord::new(0x1D526, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0x1D527, DecompositionTag::Compatibility, &[0x006A]),
    DecompositionRecord::new(0x1D528, DecompositionTag::Compatibility, &[0x006B]),
    DecompositionRecord::new(0x1D529, DecompositionTag::Compatibility, &[0x006C]),
    DecompositionRecord::new(0x1D52A, DecompositionTag::Compatibility, &[0x006D]),
    DecompositionRecord::new(0x1D52B, DecompositionTag::Compatibility, &[0x006E]),
    DecompositionRecord::new(0x1D52C, DecompositionTag::Compatibility, &[0x006F]),
    DecompositionRecord::new(0x1D52D, DecompositionTag::Compatibility, &[0x0070]),
    DecompositionRecord::new(0x1D52E, DecompositionTag::Compatibility, &[0x0071]),
    DecompositionRecord::new(0x1D52F, DecompositionTag::Compatibility, &[0x0072]),
    DecompositionRecord::new(0x1D530, DecompositionTag::Compatibility, &[0x0073]),
    DecompositionRecord::new(0x1D531, DecompositionTag::Compatibility, &[0x0074]),
    DecompositionRecord::new(0x1D532, DecompositionTag::Compatibility, &[0x0075]),
    DecompositionRecord::new(0x1D533, DecompositionTag::Compatibility, &[0x0076]),
    DecompositionRecord::new(0x1D534, DecompositionTag::Compatibility, &[0x0077]),
    DecompositionRecord::new(0x1D535, DecompositionTag::Compatibility, &[0x0078]),
    DecompositionRecord::new(0x1D536, DecompositionTag::Compatibility, &[0x0079]),
    DecompositionRecord::new(0x1D537, DecompositionTag::Compatibility, &[0x007A]),
    DecompositionRecord::new(0x1D538, DecompositionTag::Compatibility, &[0x0041]),
    DecompositionRecord::new(0x1D539, DecompositionTag::Compatibility, &[0x0042]),
    DecompositionRecord::new(0x1D53B, DecompositionTag::Compatibility, &[0x0044]),
    DecompositionRecord::new(0x1D53C, DecompositionTag::Compatibility, &[0x0045]),
    DecompositionRecord::new(0x1D53D, DecompositionTag::Compatibility, &[0x0046]),
    DecompositionRecord::new(0x1D53E, DecompositionTag::Compatibility, &[0x0047]),
    DecompositionRecord::new(0x1D540, DecompositionTag::Compatibility, &[0x0049]),
    DecompositionRecord::new(0x1D541, DecompositionTag::Compatibility, &[0x004A]),
    DecompositionRecord::new(0x1D542, DecompositionTag::Compatibility, &[0x004B]),
    DecompositionRecord::new(0x1D543, DecompositionTag::Compatibility, &[0x004C]),
    DecompositionRecord::new(0x1D544, DecompositionTag::Compatibility, &[0x004D]),
    DecompositionRecord::new(0x1D546, DecompositionTag::Compatibility, &[0x004F]),
    DecompositionRecord::new(0x1D54A, DecompositionTag::Compatibility, &[0x0053]),
    DecompositionRecord::new(0x1D54B, DecompositionTag::Compatibility, &[0x0054]),
    DecompositionRecord::new(0x1D54C, DecompositionTag::Compatibility, &[0x0055]),
    DecompositionRecord::new(0x1D54D, DecompositionTag::Compatibility, &[0x0056]),
    DecompositionRecord::new(0x1D54E, DecompositionTag::Compatibility, &[0x0057]),
    DecompositionRecord::new(0x1D54F, DecompositionTag::Compatibility, &[0x0058]),
    DecompositionRecord::new(0x1D550, DecompositionTag::Compatibility, &[0x0059]),
    DecompositionRecord::new(0x1D552, DecompositionTag::Compatibility, &[0x0061]),
    DecompositionRecord::new(0x1D553, DecompositionTag::Compatibility, &[0x0062]),
    DecompositionRecord::new(0x1D554, DecompositionTag::Compatibility, &[0x0063]),
    DecompositionRecord::new(0x1D555, DecompositionTag::Compatibility, &[0x0064]),
    DecompositionRecord::new(0x1D556, DecompositionTag::Compatibility, &[0x0065]),
    DecompositionRecord::new(0x1D557, DecompositionTag::Compatibility, &[0x0066]),
    DecompositionRecord::new(0x1D558, DecompositionTag::Compatibility, &[0x0067]),
    DecompositionRecord::new(0x1D559, DecompositionTag::Compatibility, &[0x0068]),
    DecompositionRecord::new(0x1D55A, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0x1D55B, DecompositionTag::Compatibility, &[0x006A]),
    DecompositionRecord::new(0x1D55C, DecompositionTag::Compatibility, &[0x006B]),
    DecompositionRecord::new(0x1D55D, DecompositionTag::Compatibility, &[0x006C]),
    DecompositionRecord::new(0x1D55E, DecompositionTag::Compatibility, &[0x006D]),
    DecompositionRecord::new(0x1D55F, DecompositionTag::Compatibility, &[0x006E]),
    DecompositionRecord::new(0x1D560, DecompositionTag::Compatibility, &[0x006F]),
    DecompositionRecord::new(0x1D561, DecompositionTag::Compatibility, &[0x0070]),
    DecompositionRecord::new(0x1D562, DecompositionTag::Compatibility, &[0x0071]),
    DecompositionRecord::new(0x1D563, DecompositionTag::Compatibility, &[0x0072]),
    DecompositionRecord::new(0x1D564, DecompositionTag::Compatibility, &[0x0073]),
    DecompositionRecord::new(0x1D565, DecompositionTag::Compatibility, &[0x0074]),
    DecompositionRecord::new(0x1D566, DecompositionTag::Compatibility, &[0x0075]),
    DecompositionRecord::new(0x1D567, DecompositionTag::Compatibility, &[0x0076]),
    DecompositionRecord::new(0x1D568, DecompositionTag::Compatibility, &[0x0077]),
    DecompositionRecord::new(0x1D569, DecompositionTag::Compatibility, &[0x0078]),
    DecompositionRecord::new(0x1D56A, DecompositionTag::Compatibility, &[0x0079]),
    DecompositionRecord::new(0x1D56B, DecompositionTag::Compatibility, &[0x007A]),
    DecompositionRecord::new(0x1D56C, DecompositionTag::Compatibility, &[0x0041]),
    DecompositionRecord::new(0x1D56D, DecompositionTag::Compatibility, &[0x0042]),
    DecompositionRecord::new(0x1D56E, DecompositionTag::Compatibility, &[0x0043]),
    DecompositionRecord::new(0x1D56F, DecompositionTag::Compatibility, &[0x0044]),
    DecompositionRecord::new(0x1D570, DecompositionTag::Compatibility, &[0x0045]),
    DecompositionRecord::new(0x1D571, DecompositionTag::Compatibility, &[0x0046]),
    DecompositionRecord::new(0x1D572, DecompositionTag::Compatibility, &[0x0047]),
    DecompositionRecord::new(0x1D573, DecompositionTag::Compatibility, &[0x0048]),
    DecompositionRecord::new(0x1D574, DecompositionTag::Compatibility, &[0x0049]),
    DecompositionRecord::new(0x1D575, DecompositionTag::Compatibility, &[0x004A]),
    DecompositionRecord::new(0x1D576, DecompositionTag::Compatibility, &[0x004B]),
    DecompositionRecord::new(0x1D577, DecompositionTag::Compatibility, &[0x004C]),
    DecompositionRecord::new(0x1D578, DecompositionTag::Compatibility, &[0x004D]),
    DecompositionRecord::new(0x1D579, DecompositionTag::Compatibility, &[0x004E]),
    DecompositionRecord::new(0x1D57A, DecompositionTag::Compatibility, &[0x004F]),
    DecompositionRecord::new(0x1D57B, DecompositionTag::Compatibility, &[0x0050]),
    DecompositionRecord::new(0x1D57C, DecompositionTag::Compatibility, &[0x0051]),
    DecompositionRecord::new(0x1D57D, DecompositionTag::Compatibility, &[0x0052]),
    DecompositionRecord::new(0x1D57E, DecompositionTag::Compatibility, &[0x0053]),
    DecompositionRecord::new(0x1D57F, DecompositionTag::Compatibility, &[0x0054]),
    DecompositionRecord::new(0x1D580, DecompositionTag::Compatibility, &[0x0055]),
    DecompositionRecord::new(0x1D581, DecompositionTag::Compatibility, &[0x0056]),
    DecompositionRecord::new(0x1D582, DecompositionTag::Compatibility, &[0x0057]),
    DecompositionRecord::new(0x1D583, DecompositionTag::Compatibility, &[0x0058]),
    DecompositionRecord::new(0x1D584, DecompositionTag::Compatibility, &[0x0059]),
    DecompositionRecord::new(0x1D585, DecompositionTag::Compatibility, &[0x005A]),
    DecompositionRecord::new(0x1D586, DecompositionTag::Compatibility, &[0x0061]),
    DecompositionRecord::new(0x1D587, DecompositionTag::Compatibility, &[0x0062]),
    DecompositionRecord::new(0x1D588, DecompositionTag::Compatibility, &[0x0063]),
    DecompositionRecord::new(0x1D589, DecompositionTag::Compatibility, &[0x0064]),
    DecompositionRecord::new(0x1D58A, DecompositionTag::Compatibility, &[0x0065]),
    DecompositionRecord::new(0x1D58B, DecompositionTag::Compatibility, &[0x0066]),
    DecompositionRecord::new(0x1D58C, DecompositionTag::Compatibility, &[0x0067]),
    DecompositionRecord::new(0x1D58D, DecompositionTag::Compatibility, &[0x0068]),
    DecompositionRecord::new(0x1D58E, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0x1D58F, DecompositionTag::Compatibility, &[0x006A]),
    DecompositionRecord::new(0x1D590, DecompositionTag::Compatibility, &[0x006B]),
    DecompositionRecord::new(0x1D591, DecompositionTag::Compatibility, &[0x006C]),
    DecompositionRecord::new(0x1D592, DecompositionTag::Compatibility, &[0x006D]),
    DecompositionRecord::new(0x1D593, DecompositionTag::Compatibility, &[0x006E]),
    DecompositionRecord::new(0x1D594, DecompositionTag::Compatibility, &[0x006F]),
    DecompositionRecord::new(0x1D595, DecompositionTag::Compatibility, &[0x0070]),
    DecompositionRecord::new(0x1D596, DecompositionTag::Compatibility, &[0x0071]),
    DecompositionRecord::new(0x1D597, DecompositionTag::Compatibility, &[0x0072]),
    DecompositionRecord::new(0x1D598, DecompositionTag::Compatibility, &[0x0073]),
    DecompositionRecord::new(0x1D599, DecompositionTag::Compatibility, &[0x0074]),
    DecompositionRecord::new(0x1D59A, DecompositionTag::Compatibility, &[0x0075]),
    DecompositionRecord::new(0x1D59B, DecompositionTag::Compatibility, &[0x0076]),
    DecompositionRecord::new(0x1D59C, DecompositionTag::Compatibility, &[0x0077]),
    DecompositionRecord::new(0x1D59D, DecompositionTag::Compatibility, &[0x0078]),
    DecompositionRecord::new(0x1D59E, DecompositionTag::Compatibility, &[0x0079]),
    DecompositionRecord::new(0x1D59F, DecompositionTag::Compatibility, &[0x007A]),
    DecompositionRecord::new(0x1D5A0, DecompositionTag::Compatibility, &[0x0041]),
    DecompositionRecord::new(0x1D5A1, DecompositionTag::Compatibility, &[0x0042]),
    DecompositionRecord::new(0x1D5A2, DecompositionTag::Compatibility, &[0x0043]),
    DecompositionRecord::new(0x1D5A3, DecompositionTag::Compatibility, &[0x0044]),
    DecompositionRecord::new(0x1D5A4, DecompositionTag::Compatibility, &[0x0045]),
    DecompositionRecord::new(0x1D5A5, DecompositionTag::Compatibility, &[0x0046]),
    DecompositionRecord::new(0x1D5A6, DecompositionTag::Compatibility, &[0x0047]),
    DecompositionRecord::new(0x1D5A7, DecompositionTag::Compatibility, &[0x0048]),
    DecompositionRecord::new(0x1D5A8, DecompositionTag::Compatibility, &[0x0049]),
    DecompositionRecord::new(0x1D5A9, DecompositionTag::Compatibility, &[0x004A]),
    DecompositionRecord::new(0x1D5AA, DecompositionTag::Compatibility, &[0x004B]),
    DecompositionRecord::new(0x1D5AB, DecompositionTag::Compatibility, &[0x004C]),
    DecompositionRecord::new(0x1D5AC, DecompositionTag::Compatibility, &[0x004D]),
    DecompositionRecord::new(0x1D5AD, DecompositionTag::Compatibility, &[0x004E]),
    DecompositionRecord::new(0x1D5AE, DecompositionTag::Compatibility, &[0x004F]),
    DecompositionRecord::new(0x1D5AF, DecompositionTag::Compatibility, &[0x0050]),
    DecompositionRecord::new(0x1D5B0, DecompositionTag::Compatibility, &[0x0051]),
    DecompositionRecord::new(0x1D5B1, DecompositionTag::Compatibility, &[0x0052]),
    DecompositionRecord::new(0x1D5B2, DecompositionTag::Compatibility, &[0x0053]),
    DecompositionRecord::new(0x1D5B3, DecompositionTag::Compatibility, &[0x0054]),
    DecompositionRecord::new(0x1D5B4, DecompositionTag::Compatibility, &[0x0055]),
    DecompositionRecord::new(0x1D5B5, DecompositionTag::Compatibility, &[0x0056]),
    DecompositionRecord::new(0x1D5B6, DecompositionTag::Compatibility, &[0x0057]),
    DecompositionRecord::new(0x1D5B7, DecompositionTag::Compatibility, &[0x0058]),
    DecompositionRecord::new(0x1D5B8, DecompositionTag::Compatibility, &[0x0059]),
    DecompositionRecord::new(0x1D5B9, DecompositionTag::Compatibility, &[0x005A]),
    DecompositionRecord::new(0x1D5BA, DecompositionTag::Compatibility, &[0x0061]),
    DecompositionRecord::new(0x1D5BB, DecompositionTag::Compatibility, &[0x0062]),
    DecompositionRecord::new(0x1D5BC, DecompositionTag::Compatibility, &[0x0063]),
    DecompositionRecord::new(0x1D5BD, DecompositionTag::Compatibility, &[0x0064]),
    DecompositionRecord::new(0x1D5BE, DecompositionTag::Compatibility, &[0x0065]),
    DecompositionRecord::new(0x1D5BF, DecompositionTag::Compatibility, &[0x0066]),
    DecompositionRecord::new(0x1D5C0, DecompositionTag::Compatibility, &[0x0067]),
    DecompositionRecord::new(0x1D5C1, DecompositionTag::Compatibility, &[0x0068]),
    DecompositionRecord::new(0x1D5C2, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0x1D5C3, DecompositionTag::Compatibility, &[0x006A]),
    DecompositionRecord::new(0x1D5C4, DecompositionTag::Compatibility, &[0x006B]),
    DecompositionRecord::new(0x1D5C5, DecompositionTag::Compatibility, &[0x006C]),
    DecompositionRecord::new(0x1D5C6, DecompositionTag::Compatibility, &[0x006D]),
    DecompositionRecord::new(0x1D5C7, DecompositionTag::Compatibility, &[0x006E]),
    DecompositionRecord::new(0x1D5C8, DecompositionTag::Compatibility, &[0x006F]),
    DecompositionRecord::new(0x1D5C9, DecompositionTag::Compatibility, &[0x0070]),
    DecompositionRecord::new(0x1D5CA, DecompositionTag::Compatibility, &[0x0071]),
    DecompositionRecord::new(0x1D5CB, DecompositionTag::Compatibility, &[0x0072]),
    DecompositionRecord::new(0x1D5CC, DecompositionTag::Compatibility, &[0x0073]),
    DecompositionRecord::new(0x1D5CD, DecompositionTag::Compatibility, &[0x0074]),
    DecompositionRecord::new(0x1D5CE, DecompositionTag::Compatibility, &[0x0075]),
    DecompositionRecord::new(0x1D5CF, DecompositionTag::Compatibility, &[0x0076]),
    DecompositionRecord::new(0x1D5D0, DecompositionTag::Compatibility, &[0x0077]),
    DecompositionRecord::new(0x1D5D1, DecompositionTag::Compatibility, &[0x0078]),
    DecompositionRecord::new(0x1D5D2, DecompositionTag::Compatibility, &[0x0079]),
    DecompositionRecord::new(0x1D5D3, DecompositionTag::Compatibility, &[0x007A]),
    DecompositionRecord::new(0x1D5D4, DecompositionTag::Compatibility, &[0x0041]),
    DecompositionRecord::new(0x1D5D5, DecompositionTag::Compatibility, &[0x0042]),
    DecompositionRecord::new(0x1D5D6, DecompositionTag::Compatibility, &[0x0043]),
    DecompositionRecord::new(0x1D5D7, DecompositionTag::Compatibility, &[0x0044]),
    DecompositionRecord::new(0x1D5D8, DecompositionTag::Compatibility, &[0x0045]),
    DecompositionRecord::new(0x1D5D9, DecompositionTag::Compatibility, &[0x0046]),
    DecompositionRecord::new(0x1D5DA, DecompositionTag::Compatibility, &[0x0047]),
    DecompositionRecord::new(0x1D5DB, DecompositionTag::Compatibility, &[0x0048]),
    DecompositionRecord::new(0x1D5DC, DecompositionTag::Compatibility, &[0x0049]),
    DecompositionRecord::new(0x1D5DD, DecompositionTag::Compatibility, &[0x004A]),
    DecompositionRecord::new(0x1D5DE, DecompositionTag::Compatibility, &[0x004B]),
    DecompositionRecord::new(0x1D5DF, DecompositionTag::Compatibility, &[0x004C]),
    DecompositionRecord::new(0x1D5E0, DecompositionTag::Compatibility, &[0x004D]),
    DecompositionRecord::new(0x1D5E1, DecompositionTag::Compatibility, &[0x004E]),
    DecompositionRecord::new(0x1D5E2, DecompositionTag::Compatibility, &[0x004F]),
    DecompositionRecord::new(0x1D5E3, DecompositionTag::Compatibility, &[0x0050]),
    DecompositionRecord::new(0x1D5E4, DecompositionTag::Compatibility, &[0x0051]),
    DecompositionRecord::new(0x1D5E5, DecompositionTag::Compatibility, &[0x0052]),
    DecompositionRecord::new(0x1D5E6, DecompositionTag::Compatibility, &[0x0053]),
    DecompositionRecord::new(0x1D5E7, DecompositionTag::Compatibility, &[0x0054]),
    DecompositionRecord::new(0x1D5E8, DecompositionTag::Compatibility, &[0x0055]),
    DecompositionRecord::new(0x1D5E9, DecompositionTag::Compatibility, &[0x0056]),
    DecompositionRecord::new(0x1D5EA, DecompositionTag::Compatibility, &[0x0057]),
    DecompositionRecord::new(0x1D5EB, DecompositionTag::Compatibility, &[0x0058]),
    DecompositionRecord::new(0x1D5EC, DecompositionTag::Compatibility, &[0x0059]),
    DecompositionRecord::new(0x1D5ED, DecompositionTag::Compatibility, &[0x005A]),
    DecompositionRecord::new(0x1D5EE, DecompositionTag::Compatibility, &[0x0061]),
    DecompositionRecord::new(0x1D5EF, DecompositionTag::Compatibility, &[0x0062]),
    DecompositionRecord::new(0x1D5F0, DecompositionTag::Compatibility, &[0x0063]),
    DecompositionRecord::new(0x1D5F1, DecompositionTag::Compatibility, &[0x0064]),
    DecompositionRecord::new(0x1D5F2, DecompositionTag::Compatibility, &[0x0065]),
    DecompositionRecord::new(0x1D5F3, DecompositionTag::Compatibility, &[0x0066]),
    DecompositionRecord::new(0x1D5F4, DecompositionTag::Compatibility, &[0x0067]),
    DecompositionRecord::new(0x1D5F5, DecompositionTag::Compatibility, &[0x0068]),
    DecompositionRecord::new(0x1D5F6, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0x1D5F7, DecompositionTag::Compatibility, &[0x006A]),
    DecompositionRecord::new(0x1D5F8, DecompositionTag::Compatibility, &[0x006B]),
    DecompositionRecord::new(0x1D5F9, DecompositionTag::Compatibility, &[0x006C]),
    DecompositionRecord::new(0x1D5FA, DecompositionTag::Compatibility, &[0x006D]),
    DecompositionRecord::new(0x1D5FB, DecompositionTag::Compatibility, &[0x006E]),
    DecompositionRecord::new(0x1D5FC, DecompositionTag::Compatibility, &[0x006F]),
    DecompositionRecord::new(0x1D5FD, DecompositionTag::Compatibility, &[0x0070]),
    DecompositionRecord::new(0x1D5FE, DecompositionTag::Compatibility, &[0x0071]),
    DecompositionRecord::new(0x1D5FF, DecompositionTag::Compatibility, &[0x0072]),
    DecompositionRecord::new(0x1D600, DecompositionTag::Compatibility, &[0x0073]),
    DecompositionRecord::new(0x1D601, DecompositionTag::Compatibility, &[0x0074]),
    DecompositionRecord::new(0x1D602, DecompositionTag::Compatibility, &[0x0075]),
    DecompositionRecord::new(0x1D603, DecompositionTag::Compatibility, &[0x0076]),
    DecompositionRecord::new(0x1D604, DecompositionTag::Compatibility, &[0x0077]),
    DecompositionRecord::new(0x1D605, DecompositionTag::Compatibility, &[0x0078]),
    DecompositionRecord::new(0x1D606, DecompositionTag::Compatibility, &[0x0079]),
    DecompositionRecord::new(0x1D607, DecompositionTag::Compatibility, &[0x007A]),
    DecompositionRecord::new(0x1D608, DecompositionTag::Compatibility, &[0x0041]),
    DecompositionRecord::new(0x1D609, DecompositionTag::Compatibility, &[0x0042]),
    DecompositionRecord::new(0x1D60A, DecompositionTag::Compatibility, &[0x0043]),
    DecompositionRecord::new(0x1D60B, DecompositionTag::Compatibility, &[0x0044]),
    DecompositionRecord::new(0x1D60C, DecompositionTag::Compatibility, &[0x0045]),
    DecompositionRecord::new(0x1D60D, DecompositionTag::Compatibility, &[0x0046]),
    DecompositionRecord::new(0x1D60E, DecompositionTag::Compatibility, &[0x0047]),
    DecompositionRecord::new(0x1D60F, DecompositionTag::Compatibility, &[0x0048]),
    DecompositionRecord::new(0x1D610, DecompositionTag::Compatibility, &[0x0049]),
    DecompositionRecord::new(0x1D611, DecompositionTag::Compatibility, &[0x004A]),
    DecompositionRecord::new(0x1D612, DecompositionTag::Compatibility, &[0x004B]),
    DecompositionRecord::new(0x1D613, DecompositionTag::Compatibility, &[0x004C]),
    DecompositionRecord::new(0x1D614, DecompositionTag::Compatibility, &[0x004D]),
    DecompositionRecord::new(0x1D615, DecompositionTag::Compatibility, &[0x004E]),
    DecompositionRecord::new(0x1D616, DecompositionTag::Compatibility, &[0x004F]),
    DecompositionRecord::new(0x1D617, DecompositionTag::Compatibility, &[0x0050]),
    DecompositionRecord::new(0x1D618, DecompositionTag::Compatibility, &[0x0051]),
    DecompositionRecord::new(0x1D619, DecompositionTag::Compatibility, &[0x0052]),
    DecompositionRecord::new(0x1D61A, DecompositionTag::Compatibility, &[0x0053]),
    DecompositionRecord::new(0x1D61B, DecompositionTag::Compatibility, &[0x0054]),
    DecompositionRecord::new(0x1D61C, DecompositionTag::Compatibility, &[0x0055]),
    DecompositionRecord::new(0x1D61D, DecompositionTag::Compatibility, &[0x0056]),
    DecompositionRecord::new(0x1D61E, DecompositionTag::Compatibility, &[0x0057]),
    DecompositionRecord::new(0x1D61F, DecompositionTag::Compatibility, &[0x0058]),
    DecompositionRecord::new(0x1D620, DecompositionTag::Compatibility, &[0x0059]),
    DecompositionRecord::new(0x1D621, DecompositionTag::Compatibility, &[0x005A]),
    DecompositionRecord::new(0x1D622, DecompositionTag::Compatibility, &[0x0061]),
    DecompositionRecord::new(0x1D623, DecompositionTag::Compatibility, &[0x0062]),
    DecompositionRecord::new(0x1D624, DecompositionTag::Compatibility, &[0x0063]),
    DecompositionRecord::new(0x1D625, DecompositionTag::Compatibility, &[0x0064]),
    DecompositionRecord::new(0x1D626, DecompositionTag::Compatibility, &[0x0065]),
    DecompositionRecord::new(0x1D627, DecompositionTag::Compatibility, &[0x0066]),
    DecompositionRecord::new(0x1D628, DecompositionTag::Compatibility, &[0x0067]),
    DecompositionRecord::new(0x1D629, DecompositionTag::Compatibility, &[0x0068]),
    DecompositionRecord::new(0x1D62A, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0x1D62B, DecompositionTag::Compatibility, &[0x006A]),
    DecompositionRecord::new(0x1D62C, DecompositionTag::Compatibility, &[0x006B]),
    DecompositionRecord::new(0x1D62D, DecompositionTag::Compatibility, &[0x006C]),
    DecompositionRecord::new(0x1D62E, DecompositionTag::Compatibility, &[0x006D]),
    DecompositionRecord::new(0x1D62F, DecompositionTag::Compatibility, &[0x006E]),
    DecompositionRecord::new(0x1D630, DecompositionTag::Compatibility, &[0x006F]),
    DecompositionRecord::new(0x1D631, DecompositionTag::Compatibility, &[0x0070]),
    DecompositionRecord::new(0x1D632, DecompositionTag::Compatibility, &[0x0071]),
    DecompositionRecord::new(0x1D633, DecompositionTag::Compatibility, &[0x0072]),
    DecompositionRecord::new(0x1D634, DecompositionTag::Compatibility, &[0x0073]),
    DecompositionRecord::new(0x1D635, DecompositionTag::Compatibility, &[0x0074]),
    DecompositionRecord::new(0x1D636, DecompositionTag::Compatibility, &[0x0075]),
    DecompositionRecord::new(0x1D637, DecompositionTag::Compatibility, &[0x0076]),
    DecompositionRecord::new(0x1D638, DecompositionTag::Compatibility, &[0x0077]),
    DecompositionRecord::new(0x1D639, DecompositionTag::Compatibility, &[0x0078]),
    DecompositionRecord::new(0x1D63A, DecompositionTag::Compatibility, &[0x0079]),
    DecompositionRecord::new(0x1D63B, DecompositionTag::Compatibility, &[0x007A]),
    DecompositionRecord::new(0x1D63C, DecompositionTag::Compatibility, &[0x0041]),
    DecompositionRecord::new(0x1D63D, DecompositionTag::Compatibility, &[0x0042]),
    DecompositionRecord::new(0x1D63E, DecompositionTag::Compatibility, &[0x0043]),
    DecompositionRecord::new(0x1D63F, DecompositionTag::Compatibility, &[0x0044]),
    DecompositionRecord::new(0x1D640, DecompositionTag::Compatibility, &[0x0045]),
    DecompositionRecord::new(0x1D641, DecompositionTag::Compatibility, &[0x0046]),
    DecompositionRecord::new(0x1D642, DecompositionTag::Compatibility, &[0x0047]),
    DecompositionRecord::new(0x1D643, DecompositionTag::Compatibility, &[0x0048]),
    DecompositionRecord::new(0x1D644, DecompositionTag::Compatibility, &[0x0049]),
    DecompositionRecord::new(0x1D645, DecompositionTag::Compatibility, &[0x004A]),
    DecompositionRecord::new(0x1D646, DecompositionTag::Compatibility, &[0x004B]),
    DecompositionRecord::new(0x1D647, DecompositionTag::Compatibility, &[0x004C]),
    DecompositionRecord::new(0x1D648, DecompositionTag::Compatibility, &[0x004D]),
    DecompositionRecord::new(0x1D649, DecompositionTag::Compatibility, &[0x004E]),
    DecompositionRecord::new(0x1D64A, DecompositionTag::Compatibility, &[0x004F]),
    DecompositionRecord::new(0x1D64B, DecompositionTag::Compatibility, &[0x0050]),
    DecompositionRecord::new(0x1D64C, DecompositionTag::Compatibility, &[0x0051]),
    DecompositionRecord::new(0x1D64D, DecompositionTag::Compatibility, &[0x0052]),
    DecompositionRecord::new(0x1D64E, DecompositionTag::Compatibility, &[0x0053]),
    DecompositionRecord::new(0x1D64F, DecompositionTag::Compatibility, &[0x0054]),
    DecompositionRecord::new(0x1D650, DecompositionTag::Compatibility, &[0x0055]),
    DecompositionRecord::new(0x1D651, DecompositionTag::Compatibility, &[0x0056]),
    DecompositionRecord::new(0x1D652, DecompositionTag::Compatibility, &[0x0057]),
    DecompositionRecord::new(0x1D653, DecompositionTag::Compatibility, &[0x0058]),
    DecompositionRecord::new(0x1D654, DecompositionTag::Compatibility, &[0x0059]),
    DecompositionRecord::new(0x1D655, DecompositionTag::Compatibility, &[0x005A]),
    DecompositionRecord::new(0x1D656, DecompositionTag::Compatibility, &[0x0061]),
    DecompositionRecord::new(0x1D657, DecompositionTag::Compatibility, &[0x0062]),
    DecompositionRecord::new(0x1D658, DecompositionTag::Compatibility, &[0x0063]),
    DecompositionRecord::new(0x1D659, DecompositionTag::Compatibility, &[0x0064]),
    DecompositionRecord::new(0x1D65A, DecompositionTag::Compatibility, &[0x0065]),
    DecompositionRecord::new(0x1D65B, DecompositionTag::Compatibility, &[0x0066]),
    DecompositionRecord::new(0x1D65C, DecompositionTag::Compatibility, &[0x0067]),
    DecompositionRecord::new(0x1D65D, DecompositionTag::Compatibility, &[0x0068]),
    DecompositionRecord::new(0x1D65E, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0x1D65F, DecompositionTag::Compatibility, &[0x006A]),
    DecompositionRecord::new(0x1D660, DecompositionTag::Compatibility, &[0x006B]),
    DecompositionRecord::new(0x1D661, DecompositionTag::Compatibility, &[0x006C]),
    DecompositionRecord::new(0x1D662, DecompositionTag::Compatibility, &[0x006D]),
    DecompositionRecord::new(0x1D663, DecompositionTag::Compatibility, &[0x006E]),
    DecompositionRecord::new(0x1D664, DecompositionTag::Compatibility, &[0x006F]),
    DecompositionRecord::new(0x1D665, DecompositionTag::Compatibility, &[0x0070]),
    DecompositionRecord::new(0x1D666, DecompositionTag::Compatibility, &[0x0071]),
    DecompositionRecord::new(0x1D667, DecompositionTag::Compatibility, &[0x0072]),
    DecompositionRecord::new(0x1D668, DecompositionTag::Compatibility, &[0x0073]),
    DecompositionRecord::new(0x1D669, DecompositionTag::Compatibility, &[0x0074]),
    DecompositionRecord::new(0x1D66A, DecompositionTag::Compatibility, &[0x0075]),
    DecompositionRecord::new(0x1D66B, DecompositionTag::Compatibility, &[0x0076]),
    DecompositionRecord::new(0x1D66C, DecompositionTag::Compatibility, &[0x0077]),
    DecompositionRecord::new(0x1D66D, DecompositionTag::Compatibility, &[0x0078]),
    DecompositionRecord::new(0x1D66E, DecompositionTag::Compatibility, &[0x0079]),
    DecompositionRecord::new(0x1D66F, DecompositionTag::Compatibility, &[0x007A]),
    DecompositionRecord::new(0x1D670, DecompositionTag::Compatibility, &[0x0041]),
    DecompositionRecord::new(0x1D671, DecompositionTag::Compatibility, &[0x0042]),
    DecompositionRecord::new(0x1D672, DecompositionTag::Compatibility, &[0x0043]),
    DecompositionRecord::new(0x1D673, DecompositionTag::Compatibility, &[0x0044]),
    DecompositionRecord::new(0x1D674, DecompositionTag::Compatibility, &[0x0045]),
    DecompositionRecord::new(0x1D675, DecompositionTag::Compatibility, &[0x0046]),
    DecompositionRecord::new(0x1D676, DecompositionTag::Compatibility, &[0x0047]),
    DecompositionRecord::new(0x1D677, DecompositionTag::Compatibility, &[0x0048]),
    DecompositionRecord::new(0x1D678, DecompositionTag::Compatibility, &[0x0049]),
    DecompositionRecord::new(0x1D679, DecompositionTag::Compatibility, &[0x004A]),
    DecompositionRecord::new(0x1D67A, DecompositionTag::Compatibility, &[0x004B]),
    DecompositionRecord::new(0x1D67B, DecompositionTag::Compatibility, &[0x004C]),
    DecompositionRecord::new(0x1D67C, DecompositionTag::Compatibility, &[0x004D]),
    DecompositionRecord::new(0x1D67D, DecompositionTag::Compatibility, &[0x004E]),
    DecompositionRecord::new(0x1D67E, DecompositionTag::Compatibility, &[0x004F]),
    DecompositionRecord::new(0x1D67F, DecompositionTag::Compatibility, &[0x0050]),
    DecompositionRecord::new(0x1D680, DecompositionTag::Compatibility, &[0x0051]),
    DecompositionRecord::new(0x1D681, DecompositionTag::Compatibility, &[0x0052]),
    DecompositionRecord::new(0x1D682, DecompositionTag::Compatibility, &[0x0053]),
    DecompositionRecord::new(0x1D683, DecompositionTag::Compatibility, &[0x0054]),
    DecompositionRecord::new(0x1D684, DecompositionTag::Compatibility, &[0x0055]),
    DecompositionRecord::new(0x1D685, DecompositionTag::Compatibility, &[0x0056]),
    DecompositionRecord::new(0x1D686, DecompositionTag::Compatibility, &[0x0057]),
    DecompositionRecord::new(0x1D687, DecompositionTag::Compatibility, &[0x0058]),
    DecompositionRecord::new(0x1D688, DecompositionTag::Compatibility, &[0x0059]),
    DecompositionRecord::new(0x1D689, DecompositionTag::Compatibility, &[0x005A]),
    DecompositionRecord::new(0x1D68A, DecompositionTag::Compatibility, &[0x0061]),
    DecompositionRecord::new(0x1D68B, DecompositionTag::Compatibility, &[0x0062]),
    DecompositionRecord::new(0x1D68C, DecompositionTag::Compatibility, &[0x0063]),
    DecompositionRecord::new(0x1D68D, DecompositionTag::Compatibility, &[0x0064]),
    DecompositionRecord::new(0x1D68E, DecompositionTag::Compatibility, &[0x0065]),
    DecompositionRecord::new(0x1D68F, DecompositionTag::Compatibility, &[0x0066]),
    DecompositionRecord::new(0x1D690, DecompositionTag::Compatibility, &[0x0067]),
    DecompositionRecord::new(0x1D691, DecompositionTag::Compatibility, &[0x0068]),
    DecompositionRecord::new(0x1D692, DecompositionTag::Compatibility, &[0x0069]),
    DecompositionRecord::new(0x1D693, DecompositionTag::Compatibility, &[0x006A]),
    DecompositionRecord::new(0x1D694, DecompositionTag::Compatibility, &[0x006B]),
    DecompositionRecord::new(0x1D695, DecompositionTag::Compatibility, &[0x006C]),
    DecompositionRecord::new(0x1D696, DecompositionTag::Compatibility, &[0x006D]),
    DecompositionRecord::new(0x1D697, DecompositionTag::Compatibility, &[0x006E]),
    DecompositionRecord::new(0x1D698, DecompositionTag::Compatibility, &[0x006F]),
    DecompositionRecord::new(0x1D699, DecompositionTag::Compatibility, &[0x0070]),
    DecompositionRecord::new(0x1D69A, DecompositionTag::Compatibility, &[0x0071]),
    DecompositionRecord::new(0x1D69B, DecompositionTag::Compatibility, &[0x0072]),
    DecompositionRecord::new(0x1D69C, DecompositionTag::Compatibility, &[0x0073]),
    DecompositionRecord::new(0x1D69D, DecompositionTag::Compatibility, &[0x0074]),
    DecompositionRecord::new(0x1D69E, DecompositionTag::Compatibility, &[0x0075]),
    DecompositionRecord::new(0x1D69F, DecompositionTag::Compatibility, &[0x0076]),
    DecompositionRecord::new(0x1D6A0, DecompositionTag::Compatibility, &[0x0077]),
    DecompositionRecord::new(0x1D6A1, DecompositionTag::Compatibility, &[0x0078]),
    DecompositionRecord::new(0x1D6A2, DecompositionTag::Compatibility, &[0x0079]),
    DecompositionRecord::new(0x1D6A3, DecompositionTag::Compatibility, &[0x007A]),
    DecompositionRecord::new(0x1D6A4, DecompositionTag::Compatibility, &[0x0131]),
    DecompositionRecord::new(0x1D6A5, DecompositionTag::Compatibility, &[0x0237]),
    DecompositionRecord::new(0x1D6A8, DecompositionTag::Compatibility, &[0x0391]),
    DecompositionRecord::new(0x1D6A9, DecompositionTag::Compatibility, &[0x0392]),
    DecompositionRecord::new(0x1D6AA, DecompositionTag::Compatibility, &[0x0393]),
    DecompositionRecord::new(0x1D6AB, DecompositionTag::Compatibility, &[0x0394]),
    DecompositionRecord::new(0x1D6AC, DecompositionTag::Compatibility, &[0x0395]),
    DecompositionRecord::new(0x1D6AD, DecompositionTag::Compatibility, &[0x0396]),
    DecompositionRecord::new(0x1D6AE, DecompositionTag::Compatibility, &[0x0397]),
    DecompositionRecord::new(0x1D6AF, DecompositionTag::Compatibility, &[0x0398]),
    DecompositionRecord::new(0x1D6B0, DecompositionTag::Compatibility, &[0x0399]),
    DecompositionRecord::new(0x1D6B1, DecompositionTag::Compatibility, &[0x039A]),
    DecompositionRecord::new(0x1D6B2, DecompositionTag::Compatibility, &[0x039B]),
    DecompositionRecord::new(0x1D6B3, DecompositionTag::Compatibility, &[0x039C]),
    DecompositionRecord::new(0x1D6B4, DecompositionTag::Compatibility, &[0x039D]),
    DecompositionRecord::new(0x1D6B5, DecompositionTag::Compatibility, &[0x039E]),
    DecompositionRecord::new(0x1D6B6, DecompositionTag::Compatibility, &[0x039F]),
    DecompositionRecord::new(0x1D6B7, DecompositionTag::Compatibility, &[0x03A0]),
    DecompositionRecord::new(0x1D6B8, DecompositionTag::Compatibility, &[0x03A1]),
    DecompositionRecord::new(0x1D6B9, DecompositionTag::Compatibility, &[0x0398]),
    DecompositionRecord::new(0x1D6BA, DecompositionTag::Compatibility, &[0x03A3]),
    DecompositionRecord::new(0x1D6BB, DecompositionTag::Compatibility, &[0x03A4]),
    DecompositionRecord::new(0x1D6BC, DecompositionTag::Compatibility, &[0x03A5]),
    DecompositionRecord::new(0x1D6BD, DecompositionTag::Compatibility, &[0x03A6]),
    DecompositionRecord::new(0x1D6BE, DecompositionTag::Compatibility, &[0x03A7]),
    DecompositionRecord::new(0x1D6BF, DecompositionTag::Compatibility, &[0x03A8]),
    DecompositionRecord::new(0x1D6C0, DecompositionTag::Compatibility, &[0x03A9]),
    DecompositionRecord::new(0x1D6C1, DecompositionTag::Compatibility, &[0x2207]),
    DecompositionRecord::new(0x1D6C2, DecompositionTag::Compatibility, &[0x03B1]),
    DecompositionRecord::new(0x1D6C3, DecompositionTag::Compatibility, &[0x03B2]),
    DecompositionRecord::new(0x1D6C4, DecompositionTag::Compatibility, &[0x03B3]),
    DecompositionRecord::new(0x1D6C5, DecompositionTag::Compatibility, &[0x03B4]),
    DecompositionRecord::new(0x1D6C6, DecompositionTag::Compatibility, &[0x03B5]),
    DecompositionRecord::new(0x1D6C7, DecompositionTag::Compatibility, &[0x03B6]),
    DecompositionRecord::new(0x1D6C8, DecompositionTag::Compatibility, &[0x03B7]),
    DecompositionRecord::new(0x1D6C9, DecompositionTag::Compatibility, &[0x03B8]),
    DecompositionRecord::new(0x1D6CA, DecompositionTag::Compatibility, &[0x03B9]),
    DecompositionRecord::new(0x1D6CB, DecompositionTag::Compatibility, &[0x03BA]),
    DecompositionRecord::new(0x1D6CC, DecompositionTag::Compatibility, &[0x03BB]),
    DecompositionRecord::new(0x1D6CD, DecompositionTag::Compatibility, &[0x03BC]),
    DecompositionRecord::new(0x1D6CE, DecompositionTag::Compatibility, &[0x03BD]),
    DecompositionRecord::new(0x1D6CF, DecompositionTag::Compatibility, &[0x03BE]),
    DecompositionRecord::new(0x1D6D0, DecompositionTag::Compatibility, &[0x03BF]),
    DecompositionRecord::new(0x1D6D1, DecompositionTag::Compatibility, &[0x03C0]),
    DecompositionRecord::new(0x1D6D2, DecompositionTag::Compatibility, &[0x03C1]),
    DecompositionRecord::new(0x1D6D3, DecompositionTag::Compatibility, &[0x03C2]),
    DecompositionRecord::new(0x1D6D4, DecompositionTag::Compatibility, &[0x03C3]),
    DecompositionRecord::new(0x1D6D5, DecompositionTag::Compatibility, &[0x03C4]),
    DecompositionRecord::new(0x1D6D6, DecompositionTag::Compatibility, &[0x03C5]),
    DecompositionRecord::new(0x1D6D7, DecompositionTag::Compatibility, &[0x03C6]),
    DecompositionRecord::new(0x1D6D8, DecompositionTag::Compatibility, &[0x03C7]),
    DecompositionRecord::new(0x1D6D9, DecompositionTag::Compatibility, &[0x03C8]),
    DecompositionRecord::new(0x1D6DA, DecompositionTag::Compatibility, &[0x03C9]),
    DecompositionRecord::new(0x1D6DB, DecompositionTag::Compatibility, &[0x2202]),
    DecompositionRecord::new(0x1D6DC, DecompositionTag::Compatibility, &[0x03B5]),
    DecompositionRecord::new(0x1D6DD, DecompositionTag::Compatibility, &[0x03B8]),
    DecompositionRecord::new(0x1D6DE, DecompositionTag::Compatibility, &[0x03BA]),
    DecompositionRecord::new(0x1D6DF, DecompositionTag::Compatibility, &[0x03C6]),
    DecompositionRecord::new(0x1D6E0, DecompositionTag::Compatibility, &[0x03C1]),
    DecompositionRecord::new(0x1D6E1, DecompositionTag::Compatibility, &[0x03C0]),
    DecompositionRecord::new(0x1D6E2, DecompositionTag::Compatibility, &[0x0391]),
    DecompositionRecord::new(0x1D6E3, DecompositionTag::Compatibility, &[0x0392]),
    DecompositionRecord::new(0x1D6E4, DecompositionTag::Compatibility, &[0x0393]),
    DecompositionRecord::new(0x1D6E5, DecompositionTag::Compatibility, &[0x0394]),
    DecompositionRecord::new(0x1D6E6, DecompositionTag::Compatibility, &[0x0395]),
    DecompositionRecord::new(0x1D6E7, DecompositionTag::Compatibility, &[0x0396]),
    DecompositionRecord::new(0x1D6E8, DecompositionTag::Compatibility, &[0x0397]),
    DecompositionRecord::new(0x1D6E9, DecompositionTag::Compatibility, &[0x0398]),
    DecompositionRecord::new(0x1D6EA, DecompositionTag::Compatibility, &[0x0399]),
    DecompositionRecord::new(0x1D6EB, DecompositionTag::Compatibility, &[0x039A]),
    DecompositionRecord::new(0x1D6EC, DecompositionTag::Compatibility, &[0x039B]),
    DecompositionRecord::new(0x1D6ED, DecompositionTag::Compatibility, &[0x039C]),
    DecompositionRecord::new(0x1D6EE, DecompositionTag::Compatibility, &[0x039D]),
    DecompositionRecord::new(0x1D6EF, DecompositionTag::Compatibility, &[0x039E]),
    DecompositionRecord::new(0x1D6F0, DecompositionTag::Compatibility, &[0x039F]),
    DecompositionRecord::new(0x1D6F1, DecompositionTag::Compatibility, &[0x03A0]),
    DecompositionRecord::new(0x1D6F2, DecompositionTag::Compatibility, &[0x03A1]),
    DecompositionRecord::new(0x1D6F3, DecompositionTag::Compatibility, &[0x0398]),
    DecompositionRecord::new(0x1D6F4, DecompositionTag::Compatibility, &[0x03A3]),
    DecompositionRecord::new(0x1D6F5, DecompositionTag::Compatibility, &[0x03A4]),
    DecompositionRecord::new(0x1D6F6, DecompositionTag::Compatibility, &[0x03A5]),
    DecompositionRecord::new(0x1D6F7, DecompositionTag::Compatibility, &[0x03A6]),
    DecompositionRecord::new(0x1D6F8, DecompositionTag::Compatibility, &[0x03A7]),
    DecompositionRecord::new(0x1D6F9, DecompositionTag::Compatibility, &[0x03A8]),
    DecompositionRecord::new(0x1D6FA, DecompositionTag::Compatibility, &[0x03A9]),
    DecompositionRecord::new(0x1D6FB, DecompositionTag::Compatibility, &[0x2207]),
    DecompositionRecord::new(0x1D6FC, DecompositionTag::Compatibility, &[0x03B1]),
    DecompositionRecord::new(0x1D6FD, DecompositionTag::Compatibility, &[0x03B2]),
    DecompositionRecord::new(0x1D6FE, DecompositionTag::Compatibility, &[0x03B3]),
    DecompositionRecord::new(0x1D6FF, DecompositionTag::Compatibility, &[0x03B4]),
    DecompositionRecord::new(0x1D700, DecompositionTag::Compatibility, &[0x03B5]),
    DecompositionRecord::new(0x1D701, DecompositionTag::Compatibility, &[0x03B6]),
    DecompositionRecord::new(0x1D702, DecompositionTag::Compatibility, &[0x03B7]),
    DecompositionRecord::new(0x1D703, DecompositionTag::Compatibility, &[0x03B8]),
    DecompositionRecord::new(0x1D704, DecompositionTag::Compatibility, &[0x03B9]),
    DecompositionRecord::new(0x1D705, DecompositionTag::Compatibility, &[0x03BA]),
    DecompositionRecord::new(0x1D706, DecompositionTag::Compatibility, &[0x03BB]),
    DecompositionRecord::new(0x1D707, DecompositionTag::Compatibility, &[0x03BC]),
    DecompositionRecord::new(0x1D708, DecompositionTag::Compatibility, &[0x03BD]),
    DecompositionRecord::new(0x1D709, DecompositionTag::Compatibility, &[0x03BE]),
    DecompositionRecord::new(0x1D70A, DecompositionTag::Compatibility, &[0x03BF]),
    DecompositionRecord::new(0x1D70B, DecompositionTag::Compatibility, &[0x03C0]),
    DecompositionRecord::new(0x1D70C, DecompositionTag::Compatibility, &[0x03C1]),
    DecompositionRecord::new(0x1D70D, DecompositionTag::Compatibility, &[0x03C2]),
    DecompositionRecord::new(0x1D70E, DecompositionTag::Compatibility, &[0x03C3]),
    DecompositionRecord::new(0x1D70F, DecompositionTag::Compatibility, &[0x03C4]),
    DecompositionRecord::new(0x1D710, DecompositionTag::Compatibility, &[0x03C5]),
    DecompositionRecord::new(0x1D711, DecompositionTag::Compatibility, &[0x03C6]),
    DecompositionRecord::new(0x1D712, DecompositionTag::Compatibility, &[0x03C7]),
    DecompositionRecord::new(0x1D713, DecompositionTag::Compatibility, &[0x03C8]),
    DecompositionRecord::new(0x1D714, DecompositionTag::Compatibility, &[0x03C9]),
    DecompositionRecord::new(0x1D715, DecompositionTag::Compatibility, &[0x2202]),
    DecompositionRecord::new(0x1D716, DecompositionTag::Compatibility, &[0x03B5]),
    DecompositionRecord::new(0x1D717, DecompositionTag::Compatibility, &[0x03B8]),
    DecompositionRecord::new(0x1D718, DecompositionTag::Compatibility, &[0x03BA]),
    DecompositionRecord::new(0x1D719, DecompositionTag::Compatibility, &[0x03C6]),
    DecompositionRecord::new(0x1D71A, DecompositionTag::Compatibility, &[0x03C1]),
    DecompositionRecord::new(0x1D71B, DecompositionTag::Compatibility, &[0x03C0]),
    DecompositionRecord::new(0x1D71C, DecompositionTag::Compatibility, &[0x0391]),
    DecompositionRecord::new(0x1D71D, DecompositionTag::Compatibility, &[0x0392]),
    DecompositionRecord::new(0x1D71E, DecompositionTag::Compatibility, &[0x0393]),
    DecompositionRecord::new(0x1D71F, DecompositionTag::Compatibility, &[0x0394]),
    DecompositionRecord::new(0x1D720, DecompositionTag::Compatibility, &[0x0395]),
    DecompositionRecord::new(0x1D721, DecompositionTag::Compatibility, &[0x0396]),
    DecompositionRecord::new(0x1D722, DecompositionTag::Compatibility, &[0x0397]),
    DecompositionRecord::new(0x1D723, DecompositionTag::Compatibility, &[0x0398]),
    DecompositionRecord::new(0x1D724, DecompositionTag::Compatibility, &[0x0399]),
    DecompositionRecord::new(0x1D725, DecompositionTag::Compatibility, &[0x039A]),
    DecompositionRecord::new(0x1D726, DecompositionTag::Compatibility, &[0x039B]),
    DecompositionRecord::new(0x1D727, DecompositionTag::Compatibility, &[0x039C]),
    DecompositionRecord::new(0x1D728, DecompositionTag::Compatibility, &[0x039D]),
    DecompositionRecord::new(0x1D729, DecompositionTag::Compatibility, &[0x039E]),
    DecompositionRecord::new(0x1D72A, DecompositionTag::Compatibility, &[0x039F]),
    DecompositionRecord::new(0x1D72B, DecompositionTag::Compatibility, &[0x03A0]),
    DecompositionRecord::new(0x1D72C, DecompositionTag::Compatibility, &[0x03A1]),
    DecompositionRecord::new(0x1D72D, DecompositionTag::Compatibility, &[0x0398]),
    DecompositionRecord::new(0x1D72E, DecompositionTag::Compatibility, &[0x03A3]),
    DecompositionRecord::new(0x1D72F, DecompositionTag::Compatibility, &[0x03A4]),
    DecompositionRecord::new(0x1D730, DecompositionTag::Compatibility, &[0x03A5]),
    DecompositionRecord::new(0x1D731, DecompositionTag::Compatibility, &[0x03A6]),
    DecompositionRecord::new(0x1D732, DecompositionTag::Compatibility, &[0x03A7]),
    DecompositionRecord::new(0x1D733, DecompositionTag::Compatibility, &[0x03A8]),
    DecompositionRecord::new(0x1D734, DecompositionTag::Compatibility, &[0x03A9]),
    DecompositionRecord::new(0x1D735, DecompositionTag::Compatibility, &[0x2207]),
    DecompositionRecord::new(0x1D736, DecompositionTag::Compatibility, &[0x03B1]),
    DecompositionRecord::new(0x1D737, DecompositionTag::Compatibility, &[0x03B2]),
    DecompositionRecord::new(0x1D738, DecompositionTag::Compatibility, &[0x03B3]),
    DecompositionRecord::new(0x1D739, DecompositionTag::Compatibility, &[0x03B4]),
    DecompositionRecord::new(0x1D73A, DecompositionTag::Compatibility, &[0x03B5]),
    DecompositionRecord::new(0x1D73B, DecompositionTag::Compatibility, &[0x03B6]),
    DecompositionRecord::new(0x1D73C, DecompositionTag::Compatibility, &[0x03B7]),
    DecompositionRecord::new(0x1D73D, DecompositionTag::Compatibility, &[0x03B8]),
    DecompositionRecord::new(0x1D73E, DecompositionTag::Compatibility, &[0x03B9]),
    DecompositionRecord::new(0x1D73F, DecompositionTag::Compatibility, &[0x03BA]),
    DecompositionRecord::new(0x1D740, DecompositionTag::Compatibility, &[0x03BB]),
    DecompositionRecord::new(0x1D741, DecompositionTag::Compatibility, &[0x03BC]),
    DecompositionRecord::new(0x1D742, DecompositionTag::Compatibility, &[0x03BD]),
    DecompositionRecord::new(0x1D743, DecompositionTag::Compatibility, &[0x03BE]),
    DecompositionRecord::new(0x1D744, DecompositionTag::Compatibility, &[0x03BF]),
    DecompositionRecord::new(0x1D745, DecompositionTag::Compatibility, &[0x03C0]),
    DecompositionRecord::new(0x1D746, DecompositionTag::Compatibility, &[0x03C1]),
    DecompositionRecord::new(0x1D747, DecompositionTag::Compatibility, &[0x03C2]),
    DecompositionRecord::new(0x1D748, DecompositionTag::Compatibility, &[0x03C3]),
    DecompositionRecord::new(0x1D749, DecompositionTag::Compatibility, &[0x03C4]),
    DecompositionRecord::new(0x1D74A, DecompositionTag::Compatibility, &[0x03C5]),
    DecompositionRecord::new(0x1D74B, DecompositionTag::Compatibility, &[0x03C6]),
    DecompositionRecord::new(0x1D74C, DecompositionTag::Compatibility, &[0x03C7]),
    DecompositionRecord::new(0x1D74D, DecompositionTag::Compatibility, &[0x03C8]),
    DecompositionRecord::new(0x1D74E, DecompositionTag::Compatibility, &[0x03C9]),
    DecompositionRecord::new(0x1D74F, DecompositionTag::Compatibility, &[0x2202]),
    DecompositionRecord::new(0x1D750, DecompositionTag::Compatibility, &[0x03B5]),
    DecompositionRecord::new(0x1D751, DecompositionTag::Compatibility, &[0x03B8]),
    DecompositionRecord::new(0x1D752, DecompositionTag::Compatibility, &[0x03BA]),
    DecompositionRecord::new(0x1D753, DecompositionTag::Compatibility, &[0x03C6]),
    DecompositionRecord::new(0x1D754, DecompositionTag::Compatibility, &[0x03C1]),
    DecompositionRecord::new(0x1D755, DecompositionTag::Compatibility, &[0x03C0]),
    DecompositionRecord::new(0x1D756, DecompositionTag::Compatibility, &[0x0391]),
    DecompositionRecord::new(0x1D757, DecompositionTag::Compatibility, &[0x0392]),
    DecompositionRecord::new(0x1D758, DecompositionTag::Compatibility, &[0x0393]),
    DecompositionRecord::new(0x1D759, DecompositionTag::Compatibility, &[0x0394]),
    DecompositionRecord::new(0x1D75A, DecompositionTag::Compatibility, &[0x0395]),
    DecompositionRecord::new(0x1D75B, DecompositionTag::Compatibility, &[0x0396]),
    DecompositionRecord::new(0x1D75C, DecompositionTag::Compatibility, &[0x0397]),
    DecompositionRecord::new(0x1D75D, DecompositionTag::Compatibility, &[0x0398]),
    DecompositionRecord::new(0x1D75E, DecompositionTag::Compatibility, &[0x0399]),
    DecompositionRecord::new(0x1D75F, DecompositionTag::Compatibility, &[0x039A]),
    DecompositionRecord::new(0x1D760, DecompositionTag::Compatibility, &[0x039B]),
    DecompositionRecord::new(0x1D761, DecompositionTag::Compatibility, &[0x039C]),
    DecompositionRecord::new(0x1D762, DecompositionTag::Compatibility, &[0x039D]),
    DecompositionRecord::new(0x1D763, DecompositionTag::Compatibility, &[0x039E]),
    DecompositionRecord::new(0x1D764, DecompositionTag::Compatibility, &[0x039F]),
    DecompositionRecord::new(0x1D765, DecompositionTag::Compatibility, &[0x03A0]),
    DecompositionRecord::new(0x1D766, DecompositionTag::Compatibility, &[0x03A1]),
    DecompositionRecord::new(0x1D767, DecompositionTag::Compatibility, &[0x0398]),
    DecompositionRecord::new(0x1D768, DecompositionTag::Compatibility, &[0x03A3]),
    DecompositionRecord::new(0x1D769, DecompositionTag::Compatibility, &[0x03A4]),
    DecompositionRecord::new(0x1D76A, DecompositionTag::Compatibility, &[0x03A5]),
    DecompositionRecord::new(0x1D76B, DecompositionTag::Compatibility, &[0x03A6]),
    DecompositionRecord::new(0x1D76C, DecompositionTag::Compatibility, &[0x03A7]),
    DecompositionRecord::new(0x1D76D, DecompositionTag::Compatibility, &[0x03A8]),
    DecompositionRecord::new(0x1D76E, DecompositionTag::Compatibility, &[0x03A9]),
    DecompositionRecord::new(0x1D76F, DecompositionTag::Compatibility, &[0x2207]),
    DecompositionRecord::new(0x1D770, DecompositionTag::Compatibility, &[0x03B1]),
    DecompositionRecord::new(0x1D771, DecompositionTag::Compatibility, &[0x03B2]),
    DecompositionRecord::new(0x1D772, DecompositionTag::Compatibility, &[0x03B3]),
    DecompositionRecord::new(0x1D773, DecompositionTag::Compatibility, &[0x03B4]),
    DecompositionRecord::new(0x1D774, DecompositionTag::Compatibility, &[0x03B5]),
    DecompositionRecord::new(0x1D775, DecompositionTag::Compatibility, &[0x03B6]),
    DecompositionRecord::new(0x1D776, DecompositionTag::Compatibility, &[0x03B7]),
    DecompositionRecord::new(0x1D777, DecompositionTag::Compatibility, &[0x03B8]),
    DecompositionRecord::new(0x1D778, DecompositionTag::Compatibility, &[0x03B9]),
    DecompositionRecord::new(0x1D779, DecompositionTag::Compatibility, &[0x03BA]),
    DecompositionRecord::new(0x1D77A, DecompositionTag::Compatibility, &[0x03BB]),
    DecompositionRecord::new(0x1D77B, DecompositionTag::Compatibility, &[0x03BC]),
    DecompositionRecord::new(0x1D77C, DecompositionTag::Compatibility, &[0x03BD]),
    DecompositionRecord::new(0x1D77D, DecompositionTag::Compatibility, &[0x03BE]),
    DecompositionRecord::new(0x1D77E, DecompositionTag::Compatibility, &[0x03BF]),
    DecompositionRecord::new(0x1D77F, DecompositionTag::Compatibility, &[0x03C0]),
    DecompositionRecord::new(0x1D780, DecompositionTag::Compatibility, &[0x03C1]),
    DecompositionRecord::new(0x1D781, DecompositionTag::Compatibility, &[0x03C2]),
    DecompositionRecord::new(0x1D782, DecompositionTag::Compatibility, &[0x03C3]),
    DecompositionRecord::new(0x1D783, DecompositionTag::Compatibility, &[0x03C4]),
    DecompositionRecord::new(0x1D784, DecompositionTag::Compatibility, &[0x03C5]),
    DecompositionRecord::new(0x1D785, DecompositionTag::Compatibility, &[0x03C6]),
    DecompositionRecord::new(0x1D786, DecompositionTag::Compatibility, &[0x03C7]),
    DecompositionRecord::new(0x1D787, DecompositionTag::Compatibility, &[0x03C8]),
    DecompositionRecord::new(0x1D788, DecompositionTag::Compatibility, &[0x03C9]),
    DecompositionRecord::new(0x1D789, DecompositionTag::Compatibility, &[0x2202]),
    DecompositionRecord::new(0x1D78A, DecompositionTag::Compatibility, &[0x03B5]),
    DecompositionRecord::new(0x1D78B, DecompositionTag::Compatibility, &[0x03B8]),
    DecompositionRecord::new(0x1D78C, DecompositionTag::Compatibility, &[0x03BA]),
    DecompositionRecord::new(0x1D78D, DecompositionTag::Compatibility, &[0x03C6]),
    DecompositionRecord::new(0x1D78E, DecompositionTag::Compatibility, &[0x03C1]),
    DecompositionRecord::new(0x1D78F, DecompositionTag::Compatibility, &[0x03C0]),
    DecompositionRecord::new(0x1D790, DecompositionTag::Compatibility, &[0x0391]),
    DecompositionRecord::new(0x1D791, DecompositionTag::Compatibility, &[0x0392]),
    DecompositionRecord::new(0x1D792, DecompositionTag::Compatibility, &[0x0393]),
    DecompositionRecord::new(0x1D793, DecompositionTag::Compatibility, &[0x0394]),
    DecompositionRecord::new(0x1D794, DecompositionTag::Compatibility, &[0x0395]),
    DecompositionRecord::new(0x1D795, DecompositionTag::Compatibility, &[0x0396]),
    DecompositionRecord::new(0x1D796, DecompositionTag::Compatibility, &[0x0397]),
    DecompositionRecord::new(0x1D797, DecompositionTag::Compatibility, &[0x0398]),
    DecompositionRecord::new(0x1D798, DecompositionTag::Compatibility, &[0x0399]),
    DecompositionRecord::new(0x1D799, DecompositionTag::Compatibility, &[0x039A]),
    DecompositionRecord::new(0x1D79A, DecompositionTag::Compatibility, &[0x039B]),
    DecompositionRecord::new(0x1D79B, DecompositionTag::Compatibility, &[0x039C]),
    DecompositionRecord::new(0x1D79C, DecompositionTag::Compatibility, &[0x039D]),
    DecompositionRecord::new(0x1D79D, DecompositionTag::Compatibility, &[0x039E]),
    DecompositionRecord::new(0x1D79E, DecompositionTag::Compatibility, &[0x039F]),
    DecompositionRecord::new(0x1D79F, DecompositionTag::Compatibility, &[0x03A0]),
    DecompositionRecord::new(0x1D7A0, DecompositionTag::Compatibility, &[0x03A1]),
    DecompositionRecord::new(0x1D7A1, DecompositionTag::Compatibility, &[0x0398]),
    DecompositionRecord::new(0x1D7A2, DecompositionTag::Compatibility, &[0x03A3]),
    DecompositionRecord::new(0x1D7A3, DecompositionTag::Compatibility, &[0x03A4]),
    DecompositionRecord::new(0x1D7A4, DecompositionTag::Compatibility, &[0x03A5]),
    DecompositionRecord::new(0x1D7A5, DecompositionTag::Compatibility, &[0x03A6]),
    DecompositionRecord::new(0x1D7A6, DecompositionTag::Compatibility, &[0x03A7]),
    DecompositionRecord::new(0x1D7A7, DecompositionTag::Compatibility, &[0x03A8]),
    DecompositionRecord::new(0x1D7A8, DecompositionTag::Compatibility, &[0x03A9]),
    DecompositionRecord::new(0x1D7A9, DecompositionTag::Compatibility, &[0x2207]),
    DecompositionRecord::new(0x1D7AA, DecompositionTag::Compatibility, &[0x03B1]),
    DecompositionRecord::new(0x1D7AB, DecompositionTag::Compatibility, &[0x03B2]),
    DecompositionRecord::new(0x1D7AC, DecompositionTag::Compatibility, &[0x03B3]),
    DecompositionRecord::new(0x1D7AD, DecompositionTag::Compatibility, &[0x03B4]),
    DecompositionRecord::new(0x1D7AE, DecompositionTag::Compatibility, &[0x03B5]),
    DecompositionRecord::new(0x1D7AF, DecompositionTag::Compatibility, &[0x03B6]),
    DecompositionRecord::new(0x1D7B0, DecompositionTag::Compatibility, &[0x03B7]),
    DecompositionRecord::new(0x1D7B1, DecompositionTag::Compatibility, &[0x03B8]),
    DecompositionRecord::new(0x1D7B2, DecompositionTag::Compatibility, &[0x03B9]),
    DecompositionRecord::new(0x1D7B3, DecompositionTag::Compatibility, &[0x03BA]),
    DecompositionRecord::new(0x1D7B4, DecompositionTag::Compatibility, &[0x03BB]),
    DecompositionRecord::new(0x1D7B5, DecompositionTag::Compatibility, &[0x03BC]),
    DecompositionRecord::new(0x1D7B6, DecompositionTag::Compatibility, &[0x03BD]),
    DecompositionRecord::new(0x1D7B7, DecompositionTag::Compatibility, &[0x03BE]),
    DecompositionRecord::new(0x1D7B8, DecompositionTag::Compatibility, &[0x03BF]),
    DecompositionRecord::new(0x1D7B9, DecompositionTag::Compatibility, &[0x03C0]),
    DecompositionRecord::new(0x1D7BA, DecompositionTag::Compatibility, &[0x03C1]),
    DecompositionRecord::new(0x1D7BB, DecompositionTag::Compatibility, &[0x03C2]),
    DecompositionRecord::new(0x1D7BC, DecompositionTag::Compatibility, &[0x03C3]),
    DecompositionRecord::new(0x1D7BD, DecompositionTag::Compatibility, &[0x03C4]),
    DecompositionRecord::new(0x1D7BE, DecompositionTag::Compatibility, &[0x03C5]),
    DecompositionRecord::new(0x1D7BF, DecompositionTag::Compatibility, &[0x03C6]),
    DecompositionRecord::new(0x1D7C0, DecompositionTag::Compatibility, &[0x03C7]),
    DecompositionRecord::new(0x1D7C1, DecompositionTag::Compatibility, &[0x03C8]),
    DecompositionRecord::new(0x1D7C2, DecompositionTag::Compatibility, &[0x03C9]),
    DecompositionRecord::new(0x1D7C3, DecompositionTag::Compatibility, &[0x2202]),
    DecompositionRecord::new(0x1D7C4, DecompositionTag::Compatibility, &[0x03B5]),
    DecompositionRecord::new(0x1D7C5, DecompositionTag::Compatibility, &[0x03B8]),
    DecompositionRecord::new(0x1D7C6, DecompositionTag::Compatibility, &[0x03BA]),
    DecompositionRecord::new(0x1D7C7, DecompositionTag::Compatibility, &[0x03C6]),
    DecompositionRecord::new(0x1D7C8, DecompositionTag::Compatibility, &[0x03C1]),
    DecompositionRecord::new(0x1D7C9, DecompositionTag::Compatibility, &[0x03C0]),
    DecompositionRecord::new(0x1D7CA, DecompositionTag::Compatibility, &[0x03DC]),
    DecompositionRecord::new(0x1D7CB, DecompositionTag::Compatibility, &[0x03DD]),
    DecompositionRecord::new(0x1D7CE, DecompositionTag::Compatibility, &[0x0030]),
    DecompositionRecord::new(0x1D7CF, DecompositionTag::Compatibility, &[0x0031]),
    DecompositionRecord::new(0x1D7D0, DecompositionTag::Compatibility, &[0x0032]),
    DecompositionRecord::new(0x1D7D1, DecompositionTag::Compatibility, &[0x0033]),
    DecompositionRecord::new(0x1D7D2, DecompositionTag::Compatibility, &[0x0034]),
    DecompositionRecord::new(0x1D7D3, DecompositionTag::Compatibility, &[0x0035]),
    DecompositionRecord::new(0x1D7D4, DecompositionTag::Compatibility, &[0x0036]),
    DecompositionRecord::new(0x1D7D5, DecompositionTag::Compatibility, &[0x0037]),
    DecompositionRecord::new(0x1D7D6, DecompositionTag::Compatibility, &[0x0038]),
    DecompositionRecord::new(0x1D7D7, DecompositionTag::Compatibility, &[0x0039]),
    DecompositionRecord::new(0x1D7D8, DecompositionTag::Compatibility, &[0x0030]),
    DecompositionRecord::new(0x1D7D9, DecompositionTag::Compatibility, &[0x0031]),
    DecompositionRecord::new(0x1D7DA, DecompositionTag::Compatibility, &[0x0032]),
    DecompositionRecord::new(0x1D7DB, DecompositionTag::Compatibility, &[0x0033]),
    DecompositionRecord::new(0x1D7DC, DecompositionTag::Compatibility, &[0x0034]),
    DecompositionRecord::new(0x1D7DD, DecompositionTag::Compatibility, &[0x0035]),
    DecompositionRecord::new(0x1D7DE, DecompositionTag::Compatibility, &[0x0036]),
    DecompositionRecord::new(0x1D7DF, DecompositionTag::Compatibility, &[0x0037]),
    DecompositionRecord::new(0x1D7E0, DecompositionTag::Compatibility, &[0x0038]),
    DecompositionRecord::new(0x1D7E1, DecompositionTag::Compatibility, &[0x0039]),
    DecompositionRecord::new(0x1D7E2, DecompositionTag::Compatibility, &[0x0030]),
    DecompositionRecord::new(0x1D7E3, DecompositionTag::Compatibility, &[0x0031]),
    DecompositionRecord::new(0x1D7E4, DecompositionTag::Compatibility, &[0x0032]),
    DecompositionRecord::new(0x1D7E5, DecompositionTag::Compatibility, &[0x0033]),
    DecompositionRecord::new(0x1D7E6, DecompositionTag::Compatibility, &[0x0034]),
    DecompositionRecord::new(0x1D7E7, DecompositionTag::Compatibility, &[0x0035]),
    DecompositionRecord::new(0x1D7E8, DecompositionTag::Compatibility, &[0x0036]),
    DecompositionRecord::new(0x1D7E9, DecompositionTag::Compatibility, &[0x0037]),
    DecompositionRecord::new(0x1D7EA, DecompositionTag::Compatibility, &[0x0038]),
    DecompositionRecord::new(0x1D7EB, DecompositionTag::Compatibility, &[0x0039]),
    DecompositionRecord::new(0x1D7EC, DecompositionTag::Compatibility, &[0x0030]),
    DecompositionRecord::new(0x1D7ED, DecompositionTag::Compatibility, &[0x0031]),
    DecompositionRecord::new(0x1D7EE, DecompositionTag::Compatibility, &[0x0032]),
    DecompositionRecord::new(0x1D7EF, DecompositionTag::Compatibility, &[0x0033]),
    DecompositionRecord::new(0x1D7F0, DecompositionTag::Compatibility, &[0x0034]),
    DecompositionRecord::new(0x1D7F1, DecompositionTag::Compatibility, &[0x0035]),
    DecompositionRecord::new(0x1D7F2, DecompositionTag::Compatibility, &[0x0036]),
    DecompositionRecord::new(0x1D7F3, DecompositionTag::Compatibility, &[0x0037]),
    DecompositionRecord::new(0x1D7F4, DecompositionTag::Compatibility, &[0x0038]),
    DecompositionRecord::new(0x1D7F5, DecompositionTag::Compatibility, &[0x0039]),
    DecompositionRecord::new(0x1D7F6, DecompositionTag::Compatibility, &[0x0030]),
    DecompositionRecord::new(0x1D7F7, DecompositionTag::Compatibility, &[0x0031]),
    DecompositionRecord::new(0x1D7F8, DecompositionTag::Compatibility, &[0x0032]),
    DecompositionRecord::new(0x1D7F9, DecompositionTag::Compatibility, &[0x0033]),
    DecompositionRecord::new(0x1D7FA, DecompositionTag::Compatibility, &[0x0034]),
    DecompositionRecord::new(0x1D7FB, DecompositionTag::Compatibility, &[0x0035]),
    DecompositionRecord::new(0x1D7FC, DecompositionTag::Compatibility, &[0x0036]),
    DecompositionRecord::new(0x1D7FD, DecompositionTag::Compatibility, &[0x0037]),
    DecompositionRecord::new(0x1D7FE, DecompositionTag::Compatibility, &[0x0038]),
    DecompositionRecord::new(0x1D7FF, DecompositionTag::Compatibility, &[0x0039]),
    DecompositionRecord::new(0x1E030, DecompositionTag::Compatibility, &[0x0430]),
    DecompositionRecord::new(0x1E031, DecompositionTag::Compatibility, &[0x0431]),
    DecompositionRecord::new(0x1E032, DecompositionTag::Compatibility, &[0x0432]),
    DecompositionRecord::new(0x1E033, DecompositionTag::Compatibility, &[0x0433]),
    DecompositionRecord::new(0x1E034, DecompositionTag::Compatibility, &[0x0434]),
    DecompositionRecord::new(0x1E035, DecompositionTag::Compatibility, &[0x0435]),
    DecompositionRecord::new(0x1E036, DecompositionTag::Compatibility, &[0x0436]),
    DecompositionRecord::new(0x1E037, DecompositionTag::Compatibility, &[0x0437]),
    DecompositionRecord::new(0x1E038, DecompositionTag::Compatibility, &[0x0438]),
    DecompositionRecord::new(0x1E039, DecompositionTag::Compatibility, &[0x043A]),
    DecompositionRecord::new(0x1E03A, DecompositionTag::Compatibility, &[0x043B]),
    DecompositionRecord::new(0x1E03B, DecompositionTag::Compatibility, &[0x043C]),
    DecompositionRecord::new(0x1E03C, DecompositionTag::Compatibility, &[0x043E]),
    DecompositionRecord::new(0x1E03D, DecompositionTag::Compatibility, &[0x043F]),
    DecompositionRecord::new(0x1E03E, DecompositionTag::Compatibility, &[0x0440]),
    DecompositionRecord::new(0x1E03F, DecompositionTag::Compatibility, &[0x0441]),
    DecompositionRecord::new(0x1E040, DecompositionTag::Compatibility, &[0x0442]),
    DecompositionRecord::new(0x1E041, DecompositionTag::Compatibility, &[0x0443]),
    DecompositionRecord::new(0x1E042, DecompositionTag::Compatibility, &[0x0444]),
    DecompositionRecord::new(0x1E043, DecompositionTag::Compatibility, &[0x0445]),
    DecompositionRecord::new(0x1E044, DecompositionTag::Compatibility, &[0x0446]),
    DecompositionRecord::new(0x1E045, DecompositionTag::Compatibility, &[0x0447]),
    DecompositionRecord::new(0x1E046, DecompositionTag::Compatibility, &[0x0448]),
    DecompositionRecord::new(0x1E047, DecompositionTag::Compatibility, &[0x044B]),
    DecompositionRecord::new(0x1E048, DecompositionTag::Compatibility, &[0x044D]),
    DecompositionRecord::new(0x1E049, DecompositionTag::Compatibility, &[0x044E]),
    DecompositionRecord::new(0x1E04A, DecompositionTag::Compatibility, &[0xA689]),
    DecompositionRecord::new(0x1E04B, DecompositionTag::Compatibility, &[0x04D9]),
    DecompositionRecord::new(0x1E04C, DecompositionTag::Compatibility, &[0x0456]),
    DecompositionRecord::new(0x1E04D, DecompositionTag::Compatibility, &[0x0458]),
    DecompositionRecord::new(0x1E04E, DecompositionTag::Compatibility, &[0x04E9]),
    DecompositionRecord::new(0x1E04F, DecompositionTag::Compatibility, &[0x04AF]),
    DecompositionRecord::new(0x1E050, DecompositionTag::Compatibility, &[0x04CF]),
    DecompositionRecord::new(0x1E051, DecompositionTag::Compatibility, &[0x0430]),
    DecompositionRecord::new(0x1E052, DecompositionTag::Compatibility, &[0x0431]),
    DecompositionRecord::new(0x1E053, DecompositionTag::Compatibility, &[0x0432]),
    DecompositionRecord::new(0x1E054, DecompositionTag::Compatibility, &[0x0433]),
    DecompositionRecord::new(0x1E055, DecompositionTag::Compatibility, &[0x0434]),
    DecompositionRecord::new(0x1E056, DecompositionTag::Compatibility, &[0x0435]),
    DecompositionRecord::new(0x1E057, DecompositionTag::Compatibility, &[0x0436]),
    DecompositionRecord::new(0x1E058, DecompositionTag::Compatibility, &[0x0437]),
    DecompositionRecord::new(0x1E059, DecompositionTag::Compatibility, &[0x0438]),
    DecompositionRecord::new(0x1E05A, DecompositionTag::Compatibility, &[0x043A]),
    DecompositionRecord::new(0x1E05B, DecompositionTag::Compatibility, &[0x043B]),
    DecompositionRecord::new(0x1E05C, DecompositionTag::Compatibility, &[0x043E]),
    DecompositionRecord::new(0x1E05D, DecompositionTag::Compatibility, &[0x043F]),
    DecompositionRecord::new(0x1E05E, DecompositionTag::Compatibility, &[0x0441]),
    DecompositionRecord::new(0x1E05F, DecompositionTag::Compatibility, &[0x0443]),
    DecompositionRecord::new(0x1E060, DecompositionTag::Compatibility, &[0x0444]),
    DecompositionRecord::new(0x1E061, DecompositionTag::Compatibility, &[0x0445]),
    DecompositionRecord::new(0x1E062, DecompositionTag::Compatibility, &[0x0446]),
    DecompositionRecord::new(0x1E063, DecompositionTag::Compatibility, &[0x0447]),
    DecompositionRecord::new(0x1E064, DecompositionTag::Compatibility, &[0x0448]),
    DecompositionRecord::new(0x1E065, DecompositionTag::Compatibility, &[0x044A]),
    DecompositionRecord::new(0x1E066, DecompositionTag::Compatibility, &[0x044B]),
    DecompositionRecord::new(0x1E067, DecompositionTag::Compatibility, &[0x0491]),
    DecompositionRecord::new(0x1E068, DecompositionTag::Compatibility, &[0x0456]),
    DecompositionRecord::new(0x1E069, DecompositionTag::Compatibility, &[0x0455]),
    DecompositionRecord::new(0x1E06A, DecompositionTag::Compatibility, &[0x045F]),
    DecompositionRecord::new(0x1E06B, DecompositionTag::Compatibility, &[0x04AB]),
    DecompositionRecord::new(0x1E06C, DecompositionTag::Compatibility, &[0xA651]),
    DecompositionRecord::new(0x1E06D, DecompositionTag::Compatibility, &[0x04B1]),
    DecompositionRecord::new(0x1EE00, DecompositionTag::Compatibility, &[0x0627]),
    DecompositionRecord::new(0x1EE01, DecompositionTag::Compatibility, &[0x0628]),
    DecompositionRecord::new(0x1EE02, DecompositionTag::Compatibility, &[0x062C]),
    DecompositionRecord::new(0x1EE03, DecompositionTag::Compatibility, &[0x062F]),
    DecompositionRecord::new(0x1EE05, DecompositionTag::Compatibility, &[0x0648]),
    DecompositionRecord::new(0x1EE06, DecompositionTag::Compatibility, &[0x0632]),
    DecompositionRecord::new(0x1EE07, DecompositionTag::Compatibility, &[0x062D]),
    DecompositionRecord::new(0x1EE08, DecompositionTag::Compatibility, &[0x0637]),
    DecompositionRecord::new(0x1EE09, DecompositionTag::Compatibility, &[0x064A]),
    DecompositionRecord::new(0x1EE0A, DecompositionTag::Compatibility, &[0x0643]),
    DecompositionRecord::new(0x1EE0B, DecompositionTag::Compatibility, &[0x0644]),
    DecompositionRecord::new(0x1EE0C, DecompositionTag::Compatibility, &[0x0645]),
    DecompositionRecord::new(0x1EE0D, DecompositionTag::Compatibility, &[0x0646]),
    DecompositionRecord::new(0x1EE0E, DecompositionTag::Compatibility, &[0x0633]),
    DecompositionRecord::new(0x1EE0F, DecompositionTag::Compatibility, &[0x0639]),
    DecompositionRecord::new(0x1EE10, DecompositionTag::Compatibility, &[0x0641]),
    DecompositionRecord::new(0x1EE11, DecompositionTag::Compatibility, &[0x0635]),
    DecompositionRecord::new(0x1EE12, DecompositionTag::Compatibility, &[0x0642]),
    DecompositionRecord::new(0x1EE13, DecompositionTag::Compatibility, &[0x0631]),
    DecompositionRecord::new(0x1EE14, DecompositionTag::Compatibility, &[0x0634]),
    DecompositionRecord::new(0x1EE15, DecompositionTag::Compatibility, &[0x062A]),
    DecompositionRecord::new(0x1EE16, DecompositionTag::Compatibility, &[0x062B]),
    DecompositionRecord::new(0x1EE17, DecompositionTag::Compatibility, &[0x062E]),
    DecompositionRecord::new(0x1EE18, DecompositionTag::Compatibility, &[0x0630]),
    DecompositionRecord::new(0x1EE19, DecompositionTag::Compatibility, &[0x0636]),
    DecompositionRecord::new(0x1EE1A, DecompositionTag::Compatibility, &[0x0638]),
    DecompositionRecord::new(0x1EE1B, DecompositionTag::Compatibility, &[0x063A]),
    DecompositionRecord::new(0x1EE1C, DecompositionTag::Compatibility, &[0x066E]),
    DecompositionRecord::new(0x1EE1D, DecompositionTag::Compatibility, &[0x06BA]),
    DecompositionRecord::new(0x1EE1E, DecompositionTag::Compatibility, &[0x06A1]),
    DecompositionRecord::new(0x1EE1F, DecompositionTag::Compatibility, &[0x066F]),
    DecompositionRecord::new(0x1EE21, DecompositionTag::Compatibility, &[0x0628]),
    DecompositionRecord::new(0x1EE22, DecompositionTag::Compatibility, &[0x062C]),
    DecompositionRecord::new(0x1EE24, DecompositionTag::Compatibility, &[0x0647]),
    DecompositionRecord::new(0x1EE27, DecompositionTag::Compatibility, &[0x062D]),
    DecompositionRecord::new(0x1EE29, DecompositionTag::Compatibility, &[0x064A]),
    DecompositionRecord::new(0x1EE2A, DecompositionTag::Compatibility, &[0x0643]),
    DecompositionRecord::new(0x1EE2B, DecompositionTag::Compatibility, &[0x0644]),
    DecompositionRecord::new(0x1EE2C, DecompositionTag::Compatibility, &[0x0645]),
    DecompositionRecord::new(0x1EE2D, DecompositionTag::Compatibility, &[0x0646]),
    DecompositionRecord::new(0x1EE2E, DecompositionTag::Compatibility, &[0x0633]),
    DecompositionRecord::new(0x1EE2F, DecompositionTag::Compatibility, &[0x0639]),
    DecompositionRecord::new(0x1EE30, DecompositionTag::Compatibility, &[0x0641]),
    DecompositionRecord::new(0x1EE31, DecompositionTag::Compatibility, &[0x0635]),
    DecompositionRecord::new(0x1EE32, DecompositionTag::Compatibility, &[0x0642]),
    DecompositionRecord::new(0x1EE34, DecompositionTag::Compatibility, &[0x0634]),
    DecompositionRecord::new(0x1EE35, DecompositionTag::Compatibility, &[0x062A]),
    DecompositionRecord::new(0x1EE36, DecompositionTag::Compatibility, &[0x062B]),
    DecompositionRecord::new(0x1EE37, DecompositionTag::Compatibility, &[0x062E]),
    DecompositionRecord::new(0x1EE39, DecompositionTag::Compatibility, &[0x0636]),
    DecompositionRecord::new(0x1EE3B, DecompositionTag::Compatibility, &[0x063A]),
    DecompositionRecord::new(0x1EE42, DecompositionTag::Compatibility, &[0x062C]),
    DecompositionRecord::new(0x1EE47, DecompositionTag::Compatibility, &[0x062D]),
    DecompositionRecord::new(0x1EE49, DecompositionTag::Compatibility, &[0x064A]),
    DecompositionRecord::new(0x1EE4B, DecompositionTag::Compatibility, &[0x0644]),
    DecompositionRecord::new(0x1EE4D, DecompositionTag::Compatibility, &[0x0646]),
    DecompositionRecord::new(0x1EE4E, DecompositionTag::Compatibility, &[0x0633]),
    DecompositionRecord::new(0x1EE4F, DecompositionTag::Compatibility, &[0x0639]),
    DecompositionRecord::new(0x1EE51, DecompositionTag::Compatibility, &[0x0635]),
    DecompositionRecord::new(0x1EE52, DecompositionTag::Compatibility, &[0x0642]),
    DecompositionRecord::new(0x1EE54, DecompositionTag::Compatibility, &[0x0634]),
    DecompositionRecord::new(0x1EE57, DecompositionTag::Compatibility, &[0x062E]),
    DecompositionRecord::new(0x1EE59, DecompositionTag::Compatibility, &[0x0636]),
    DecompositionRecord::new(0x1EE5B, DecompositionTag::Compatibility, &[0x063A]),
    DecompositionRecord::new(0x1EE5D, DecompositionTag::Compatibility, &[0x06BA]),
    DecompositionRecord::new(0x1EE5F, DecompositionTag::Compatibility, &[0x066F]),
    DecompositionRecord::new(0x1EE61, DecompositionTag::Compatibility, &[0x0628]),
    DecompositionRecord::new(0x1EE62, DecompositionTag::Compatibility, &[0x062C]),
    DecompositionRecord::new(0x1EE64, DecompositionTag::Compatibility, &[0x0647]),
    DecompositionRecord::new(0x1EE67, DecompositionTag::Compatibility, &[0x062D]),
    DecompositionRecord::new(0x1EE68, DecompositionTag::Compatibility, &[0x0637]),
    DecompositionRecord::new(0x1EE69, DecompositionTag::Compatibility, &[0x064A]),
    DecompositionRecord::new(0x1EE6A, DecompositionTag::Compatibility, &[0x0643]),
    DecompositionRecord::new(0x1EE6C, DecompositionTag::Compatibility, &[0x0645]),
    DecompositionRecord::new(0x1EE6D, DecompositionTag::Compatibility, &[0x0646]),
    DecompositionRecord::new(0x1EE6E, DecompositionTag::Compatibility, &[0x0633]),
    DecompositionRecord::new(0x1EE6F, DecompositionTag::Compatibility, &[0x0639]),
    DecompositionRecord::new(0x1EE70, DecompositionTag::Compatibility, &[0x0641]),
    DecompositionRecord::new(0x1EE71, DecompositionTag::Compatibility, &[0x0635]),
    DecompositionRecord::new(0x1EE72, DecompositionTag::Compatibility, &[0x0642]),
    DecompositionRecord::new(0x1EE74, DecompositionTag::Compatibility, &[0x0634]),
    DecompositionRecord::new(0x1EE75, DecompositionTag::Compatibility, &[0x062A]),
    DecompositionRecord::new(0x1EE76, DecompositionTag::Compatibility, &[0x062B]),
    DecompositionRecord::new(0x1EE77, DecompositionTag::Compatibility, &[0x062E]),
    DecompositionRecord::new(0x1EE79, DecompositionTag::Compatibility, &[0x0636]),
    DecompositionRecord::new(0x1EE7A, DecompositionTag::Compatibility, &[0x0638]),
    DecompositionRecord::new(0x1EE7B, DecompositionTag::Compatibility, &[0x063A]),
    DecompositionRecord::new(0x1EE7C, DecompositionTag::Compatibility, &[0x066E]),
    DecompositionRecord::new(0x1EE7E, DecompositionTag::Compatibility, &[0x06A1]),
    DecompositionRecord::new(0x1EE80, DecompositionTag::Compatibility, &[0x0627]),
    DecompositionRecord::new(0x1EE81, DecompositionTag::Compatibility, &[0x0628]),
    DecompositionRecord::new(0x1EE82, DecompositionTag::Compatibility, &[0x062C]),
    DecompositionRecord::new(0x1EE83, DecompositionTag::Compatibility, &[0x062F]),
    DecompositionRecord::new(0x1EE84, DecompositionTag::Compatibility, &[0x0647]),
    DecompositionRecord::new(0x1EE85, DecompositionTag::Compatibility, &[0x0648]),
    DecompositionRecord::new(0x1EE86, DecompositionTag::Compatibility, &[0x0632]),
    DecompositionRecord::new(0x1EE87, DecompositionTag::Compatibility, &[0x062D]),
    DecompositionRecord::new(0x1EE88, DecompositionTag::Compatibility, &[0x0637]),
    DecompositionRecord::new(0x1EE89, DecompositionTag::Compatibility, &[0x064A]),
    DecompositionRecord::new(0x1EE8B, DecompositionTag::Compatibility, &[0x0644]),
    DecompositionRecord::new(0x1EE8C, DecompositionTag::Compatibility, &[0x0645]),
    DecompositionRecord::new(0x1EE8D, DecompositionTag::Compatibility, &[0x0646]),
    DecompositionRecord::new(0x1EE8E, DecompositionTag::Compatibility, &[0x0633]),
    DecompositionRecord::new(0x1EE8F, DecompositionTag::Compatibility, &[0x0639]),
    DecompositionRecord::new(0x1EE90, DecompositionTag::Compatibility, &[0x0641]),
    DecompositionRecord::new(0x1EE91, DecompositionTag::Compatibility, &[0x0635]),
    DecompositionRecord::new(0x1EE92, DecompositionTag::Compatibility, &[0x0642]),
    DecompositionRecord::new(0x1EE93, DecompositionTag::Compatibility, &[0x0631]),
    DecompositionRecord::new(0x1EE94, DecompositionTag::Compatibility, &[0x0634]),
    DecompositionRecord::new(0x1EE95, DecompositionTag::Compatibility, &[0x062A]),
    DecompositionRecord::new(0x1EE96, DecompositionTag::Compatibility, &[0x062B]),
    DecompositionRecord::new(0x1EE97, DecompositionTag::Compatibility, &[0x062E]),
    DecompositionRecord::new(0x1EE98, DecompositionTag::Compatibility, &[0x0630]),
    DecompositionRecord::new(0x1EE99, DecompositionTag::Compatibility, &[0x0636]),
    DecompositionRecord::new(0x1EE9A, DecompositionTag::Compatibility, &[0x0638]),
    DecompositionRecord::new(0x1EE9B, DecompositionTag::Compatibility, &[0x063A]),
    DecompositionRecord::new(0x1EEA1, DecompositionTag::Compatibility, &[0x0628]),
    DecompositionRecord::new(0x1EEA2, DecompositionTag::Compatibility, &[0x062C]),
    DecompositionRecord::new(0x1EEA3, DecompositionTag::Compatibility, &[0x062F]),
    DecompositionRecord::new(0x1EEA5, DecompositionTag::Compatibility, &[0x0648]),
    DecompositionRecord::new(0x1EEA6, DecompositionTag::Compatibility, &[0x0632]),
    DecompositionRecord::new(0x1EEA7, DecompositionTag::Compatibility, &[0x062D]),
    DecompositionRecord::new(0x1EEA8, DecompositionTag::Compatibility, &[0x0637]),
    DecompositionRecord::new(0x1EEA9, DecompositionTag::Compatibility, &[0x064A]),
    DecompositionRecord::new(0x1EEAB, DecompositionTag::Compatibility, &[0x0644]),
    DecompositionRecord::new(0x1EEAC, DecompositionTag::Compatibility, &[0x0645]),
    DecompositionRecord::new(0x1EEAD, DecompositionTag::Compatibility, &[0x0646]),
    DecompositionRecord::new(0x1EEAE, DecompositionTag::Compatibility, &[0x0633]),
    DecompositionRecord::new(0x1EEAF, DecompositionTag::Compatibility, &[0x0639]),
    DecompositionRecord::new(0x1EEB0, DecompositionTag::Compatibility, &[0x0641]),
    DecompositionRecord::new(0x1EEB1, DecompositionTag::Compatibility, &[0x0635]),
    DecompositionRecord::new(0x1EEB2, DecompositionTag::Compatibility, &[0x0642]),
    DecompositionRecord::new(0x1EEB3, DecompositionTag::Compatibility, &[0x0631]),
    DecompositionRecord::new(0x1EEB4, DecompositionTag::Compatibility, &[0x0634]),
    DecompositionRecord::new(0x1EEB5, DecompositionTag::Compatibility, &[0x062A]),
    DecompositionRecord::new(0x1EEB6, DecompositionTag::Compatibility, &[0x062B]),
    DecompositionRecord::new(0x1EEB7, DecompositionTag::Compatibility, &[0x062E]),
    DecompositionRecord::new(0x1EEB8, DecompositionTag::Compatibility, &[0x0630]),
    DecompositionRecord::new(0x1EEB9, DecompositionTag::Compatibility, &[0x0636]),
    DecompositionRecord::new(0x1EEBA, DecompositionTag::Compatibility, &[0x0638]),
    DecompositionRecord::new(0x1EEBB, DecompositionTag::Compatibility, &[0x063A]),
    DecompositionRecord::new(0x1F100, DecompositionTag::Compatibility, &[0x0030, 0x002E]),
    DecompositionRecord::new(0x1F101, DecompositionTag::Compatibility, &[0x0030, 0x002C]),
    DecompositionRecord::new(0x1F102, DecompositionTag::Compatibility, &[0x0031, 0x002C]),
    DecompositionRecord::new(0x1F103, DecompositionTag::Compatibility, &[0x0032, 0x002C]),
    DecompositionRecord::new(0x1F104, DecompositionTag::Compatibility, &[0x0033, 0x002C]),
    DecompositionRecord::new(0x1F105, DecompositionTag::Compatibility, &[0x0034, 0x002C]),
    DecompositionRecord::new(0x1F106, DecompositionTag::Compatibility, &[0x0035, 0x002C]),
    DecompositionRecord::new(0x1F107, DecompositionTag::Compatibility, &[0x0036, 0x002C]),
    DecompositionRecord::new(0x1F108, DecompositionTag::Compatibility, &[0x0037, 0x002C]),
    DecompositionRecord::new(0x1F109, DecompositionTag::Compatibility, &[0x0038, 0x002C]),
    DecompositionRecord::new(0x1F10A, DecompositionTag::Compatibility, &[0x0039, 0x002C]),
    DecompositionRecord::new(0x1F110, DecompositionTag::Compatibility, &[0x0028, 0x0041, 0x0029]),
    DecompositionRecord::new(0x1F111, DecompositionTag::Compatibility, &[0x0028, 0x0042, 0x0029]),
    DecompositionRecord::new(0x1F112, DecompositionTag::Compatibility, &[0x0028, 0x0043, 0x0029]),
    DecompositionRecord::new(0x1F113, DecompositionTag::Compatibility, &[0x0028, 0x0044, 0x0029]),
    DecompositionRecord::new(0x1F114, DecompositionTag::Compatibility, &[0x0028, 0x0045, 0x0029]),
    DecompositionRecord::new(0x1F115, DecompositionTag::Compatibility, &[0x0028, 0x0046, 0x0029]),
    DecompositionRecord::new(0x1F116, DecompositionTag::Compatibility, &[0x0028, 0x0047, 0x0029]),
    DecompositionRecord::new(0x1F117, DecompositionTag::Compatibility, &[0x0028, 0x0048, 0x0029]),
    DecompositionRecord::new(0x1F118, DecompositionTag::Compatibility, &[0x0028, 0x0049, 0x0029]),
    DecompositionRecord::new(0x1F119, DecompositionTag::Compatibility, &[0x0028, 0x004A, 0x0029]),
    DecompositionRecord::new(0x1F11A, DecompositionTag::Compatibility, &[0x0028, 0x004B, 0x0029]),
    DecompositionRecord::new(0x1F11B, DecompositionTag::Compatibility, &[0x0028, 0x004C, 0x0029]),
    DecompositionRecord::new(0x1F11C, DecompositionTag::Compatibility, &[0x0028, 0x004D, 0x0029]),
    DecompositionRecord::new(0x1F11D, DecompositionTag::Compatibility, &[0x0028, 0x004E, 0x0029]),
    DecompositionRecord::new(0x1F11E, DecompositionTag::Compatibility, &[0x0028, 0x004F, 0x0029]),
    DecompositionRecord::new(0x1F11F, DecompositionTag::Compatibility, &[0x0028, 0x0050, 0x0029]),
    DecompositionRecord::new(0x1F120, DecompositionTag::Compatibility, &[0x0028, 0x0051, 0x0029]),
    DecompositionRecord::new(0x1F121, DecompositionTag::Compatibility, &[0x0028, 0x0052, 0x0029]),
    DecompositionRecord::new(0x1F122, DecompositionTag::Compatibility, &[0x0028, 0x0053, 0x0029]),
    DecompositionRecord::new(0x1F123, DecompositionTag::Compatibility, &[0x0028, 0x0054, 0x0029]),
    DecompositionRecord::new(0x1F124, DecompositionTag::Compatibility, &[0x0028, 0x0055, 0x0029]),
    DecompositionRecord::new(0x1F125, DecompositionTag::Compatibility, &[0x0028, 0x0056, 0x0029]),
    DecompositionRecord::new(0x1F126, DecompositionTag::Compatibility, &[0x0028, 0x0057, 0x0029]),
    DecompositionRecord::new(0x1F127, DecompositionTag::Compatibility, &[0x0028, 0x0058, 0x0029]),
    DecompositionRecord::new(0x1F128, DecompositionTag::Compatibility, &[0x0028, 0x0059, 0x0029]),
    DecompositionRecord::new(0x1F129, DecompositionTag::Compatibility, &[0x0028, 0x005A, 0x0029]),
    DecompositionRecord::new(0x1F12A, DecompositionTag::Compatibility, &[0x3014, 0x0053, 0x3015]),
    DecompositionRecord::new(0x1F12B, DecompositionTag::Compatibility, &[0x0043]),
    DecompositionRecord::new(0x1F12C, DecompositionTag::Compatibility, &[0x0052]),
    DecompositionRecord::new(0x1F12D, DecompositionTag::Compatibility, &[0x0043, 0x0044]),
    DecompositionRecord::new(0x1F12E, DecompositionTag::Compatibility, &[0x0057, 0x005A]),
    DecompositionRecord::new(0x1F130, DecompositionTag::Compatibility, &[0x0041]),
    DecompositionRecord::new(0x1F131, DecompositionTag::Compatibility, &[0x0042]),
    DecompositionRecord::new(0x1F132, DecompositionTag::Compatibility, &[0x0043]),
    DecompositionRecord::new(0x1F133, DecompositionTag::Compatibility, &[0x0044]),
    DecompositionRecord::new(0x1F134, DecompositionTag::Compatibility, &[0x0045]),
    DecompositionRecord::new(0x1F135, DecompositionTag::Compatibility, &[0x0046]),
    DecompositionRecord::new(0x1F136, DecompositionTag::Compatibility, &[0x0047]),
    DecompositionRecord::new(0x1F137, DecompositionTag::Compatibility, &[0x0048]),
    DecompositionRecord::new(0x1F138, DecompositionTag::Compatibility, &[0x0049]),
    DecompositionRecord::new(0x1F139, DecompositionTag::Compatibility, &[0x004A]),
    DecompositionRecord::new(0x1F13A, DecompositionTag::Compatibility, &[0x004B]),
    DecompositionRecord::new(0x1F13B, DecompositionTag::Compatibility, &[0x004C]),
    DecompositionRecord::new(0x1F13C, DecompositionTag::Compatibility, &[0x004D]),
    DecompositionRecord::new(0x1F13D, DecompositionTag::Compatibility, &[0x004E]),
    DecompositionRecord::new(0x1F13E, DecompositionTag::Compatibility, &[0x004F]),
    DecompositionRecord::new(0x1F13F, DecompositionTag::Compatibility, &[0x0050]),
    DecompositionRecord::new(0x1F140, DecompositionTag::Compatibility, &[0x0051]),
    DecompositionRecord::new(0x1F141, DecompositionTag::Compatibility, &[0x0052]),
    DecompositionRecord::new(0x1F142, DecompositionTag::Compatibility, &[0x0053]),
    DecompositionRecord::new(0x1F143, DecompositionTag::Compatibility, &[0x0054]),
    DecompositionRecord::new(0x1F144, DecompositionTag::Compatibility, &[0x0055]),
    DecompositionRecord::new(0x1F145, DecompositionTag::Compatibility, &[0x0056]),
    DecompositionRecord::new(0x1F146, DecompositionTag::Compatibility, &[0x0057]),
    DecompositionRecord::new(0x1F147, DecompositionTag::Compatibility, &[0x0058]),
    DecompositionRecord::new(0x1F148, DecompositionTag::Compatibility, &[0x0059]),
    DecompositionRecord::new(0x1F149, DecompositionTag::Compatibility, &[0x005A]),
    DecompositionRecord::new(0x1F14A, DecompositionTag::Compatibility, &[0x0048, 0x0056]),
    DecompositionRecord::new(0x1F14B, DecompositionTag::Compatibility, &[0x004D, 0x0056]),
    DecompositionRecord::new(0x1F14C, DecompositionTag::Compatibility, &[0x0053, 0x0044]),
    DecompositionRecord::new(0x1F14D, DecompositionTag::Compatibility, &[0x0053, 0x0053]),
    DecompositionRecord::new(0x1F14E, DecompositionTag::Compatibility, &[0x0050, 0x0050, 0x0056]),
    DecompositionRecord::new(0x1F14F, DecompositionTag::Compatibility, &[0x0057, 0x0043]),
    DecompositionRecord::new(0x1F16A, DecompositionTag::Compatibility, &[0x004D, 0x0043]),
    DecompositionRecord::new(0x1F16B, DecompositionTag::Compatibility, &[0x004D, 0x0044]),
    DecompositionRecord::new(0x1F16C, DecompositionTag::Compatibility, &[0x004D, 0x0052]),
    DecompositionRecord::new(0x1F190, DecompositionTag::Compatibility, &[0x0044, 0x004A]),
    DecompositionRecord::new(0x1F200, DecompositionTag::Compatibility, &[0x307B, 0x304B]),
    DecompositionRecord::new(0x1F201, DecompositionTag::Compatibility, &[0x30B3, 0x30B3]),
    DecompositionRecord::new(0x1F202, DecompositionTag::Compatibility, &[0x30B5]),
    DecompositionRecord::new(0x1F210, DecompositionTag::Compatibility, &[0x624B]),
    DecompositionRecord::new(0x1F211, DecompositionTag::Compatibility, &[0x5B57]),
    DecompositionRecord::new(0x1F212, DecompositionTag::Compatibility, &[0x53CC]),
    DecompositionRecord::new(0x1F213, DecompositionTag::Compatibility, &[0x30C6, 0x3099]),
    DecompositionRecord::new(0x1F214, DecompositionTag::Compatibility, &[0x4E8C]),
    DecompositionRecord::new(0x1F215, DecompositionTag::Compatibility, &[0x591A]),
    DecompositionRecord::new(0x1F216, DecompositionTag::Compatibility, &[0x89E3]),
    DecompositionRecord::new(0x1F217, DecompositionTag::Compatibility, &[0x5929]),
    DecompositionRecord::new(0x1F218, DecompositionTag::Compatibility, &[0x4EA4]),
    DecompositionRecord::new(0x1F219, DecompositionTag::Compatibility, &[0x6620]),
    DecompositionRecord::new(0x1F21A, DecompositionTag::Compatibility, &[0x7121]),
    DecompositionRecord::new(0x1F21B, DecompositionTag::Compatibility, &[0x6599]),
    DecompositionRecord::new(0x1F21C, DecompositionTag::Compatibility, &[0x524D]),
    DecompositionRecord::new(0x1F21D, DecompositionTag::Compatibility, &[0x5F8C]),
    DecompositionRecord::new(0x1F21E, DecompositionTag::Compatibility, &[0x518D]),
    DecompositionRecord::new(0x1F21F, DecompositionTag::Compatibility, &[0x65B0]),
    DecompositionRecord::new(0x1F220, DecompositionTag::Compatibility, &[0x521D]),
    DecompositionRecord::new(0x1F221, DecompositionTag::Compatibility, &[0x7D42]),
    DecompositionRecord::new(0x1F222, DecompositionTag::Compatibility, &[0x751F]),
    DecompositionRecord::new(0x1F223, DecompositionTag::Compatibility, &[0x8CA9]),
    DecompositionRecord::new(0x1F224, DecompositionTag::Compatibility, &[0x58F0]),
    DecompositionRecord::new(0x1F225, DecompositionTag::Compatibility, &[0x5439]),
    DecompositionRecord::new(0x1F226, DecompositionTag::Compatibility, &[0x6F14]),
    DecompositionRecord::new(0x1F227, DecompositionTag::Compatibility, &[0x6295]),
    DecompositionRecord::new(0x1F228, DecompositionTag::Compatibility, &[0x6355]),
    DecompositionRecord::new(0x1F229, DecompositionTag::Compatibility, &[0x4E00]),
    DecompositionRecord::new(0x1F22A, DecompositionTag::Compatibility, &[0x4E09]),
    DecompositionRecord::new(0x1F22B, DecompositionTag::Compatibility, &[0x904A]),
    DecompositionRecord::new(0x1F22C, DecompositionTag::Compatibility, &[0x5DE6]),
    DecompositionRecord::new(0x1F22D, DecompositionTag::Compatibility, &[0x4E2D]),
    DecompositionRecord::new(0x1F22E, DecompositionTag::Compatibility, &[0x53F3]),
    DecompositionRecord::new(0x1F22F, DecompositionTag::Compatibility, &[0x6307]),
    DecompositionRecord::new(0x1F230, DecompositionTag::Compatibility, &[0x8D70]),
    DecompositionRecord::new(0x1F231, DecompositionTag::Compatibility, &[0x6253]),
    DecompositionRecord::new(0x1F232, DecompositionTag::Compatibility, &[0x7981]),
    DecompositionRecord::new(0x1F233, DecompositionTag::Compatibility, &[0x7A7A]),
    DecompositionRecord::new(0x1F234, DecompositionTag::Compatibility, &[0x5408]),
    DecompositionRecord::new(0x1F235, DecompositionTag::Compatibility, &[0x6E80]),
    DecompositionRecord::new(0x1F236, DecompositionTag::Compatibility, &[0x6709]),
    DecompositionRecord::new(0x1F237, DecompositionTag::Compatibility, &[0x6708]),
    DecompositionRecord::new(0x1F238, DecompositionTag::Compatibility, &[0x7533]),
    DecompositionRecord::new(0x1F239, DecompositionTag::Compatibility, &[0x5272]),
    DecompositionRecord::new(0x1F23A, DecompositionTag::Compatibility, &[0x55B6]),
    DecompositionRecord::new(0x1F23B, DecompositionTag::Compatibility, &[0x914D]),
    DecompositionRecord::new(0x1F240, DecompositionTag::Compatibility, &[0x3014, 0x672C, 0x3015]),
    DecompositionRecord::new(0x1F241, DecompositionTag::Compatibility, &[0x3014, 0x4E09, 0x3015]),
    DecompositionRecord::new(0x1F242, DecompositionTag::Compatibility, &[0x3014, 0x4E8C, 0x3015]),
    DecompositionRecord::new(0x1F243, DecompositionTag::Compatibility, &[0x3014, 0x5B89, 0x3015]),
    DecompositionRecord::new(0x1F244, DecompositionTag::Compatibility, &[0x3014, 0x70B9, 0x3015]),
    DecompositionRecord::new(0x1F245, DecompositionTag::Compatibility, &[0x3014, 0x6253, 0x3015]),
    DecompositionRecord::new(0x1F246, DecompositionTag::Compatibility, &[0x3014, 0x76D7, 0x3015]),
    DecompositionRecord::new(0x1F247, DecompositionTag::Compatibility, &[0x3014, 0x52DD, 0x3015]),
    DecompositionRecord::new(0x1F248, DecompositionTag::Compatibility, &[0x3014, 0x6557, 0x3015]),
    DecompositionRecord::new(0x1F250, DecompositionTag::Compatibility, &[0x5F97]),
    DecompositionRecord::new(0x1F251, DecompositionTag::Compatibility, &[0x53EF]),
    DecompositionRecord::new(0x1FBF0, DecompositionTag::Compatibility, &[0x0030]),
    DecompositionRecord::new(0x1FBF1, DecompositionTag::Compatibility, &[0x0031]),
    DecompositionRecord::new(0x1FBF2, DecompositionTag::Compatibility, &[0x0032]),
    DecompositionRecord::new(0x1FBF3, DecompositionTag::Compatibility, &[0x0033]),
    DecompositionRecord::new(0x1FBF4, DecompositionTag::Compatibility, &[0x0034]),
    DecompositionRecord::new(0x1FBF5, DecompositionTag::Compatibility, &[0x0035]),
    DecompositionRecord::new(0x1FBF6, DecompositionTag::Compatibility, &[0x0036]),
    DecompositionRecord::new(0x1FBF7, DecompositionTag::Compatibility, &[0x0037]),
    DecompositionRecord::new(0x1FBF8, DecompositionTag::Compatibility, &[0x0038]),
    DecompositionRecord::new(0x1FBF9, DecompositionTag::Compatibility, &[0x0039]),
];

pub const COMPOSITION: &[CompositionRecord] = &[
    CompositionRecord::new(0x003C, 0x0338, 0x226E),
    CompositionRecord::new(0x003D, 0x0338, 0x2260),
    CompositionRecord::new(0x003E, 0x0338, 0x226F),
    CompositionRecord::new(0x0041, 0x0300, 0x00C0),
    CompositionRecord::new(0x0041, 0x0301, 0x00C1),
    CompositionRecord::new(0x0041, 0x0302, 0x00C2),
    CompositionRecord::new(0x0041, 0x0303, 0x00C3),
    CompositionRecord::new(0x0041, 0x0304, 0x0100),
    CompositionRecord::new(0x0041, 0x0306, 0x0102),
    CompositionRecord::new(0x0041, 0x0307, 0x0226),
    CompositionRecord::new(0x0041, 0x0308, 0x00C4),
    CompositionRecord::new(0x0041, 0x0309, 0x1EA2),
    CompositionRecord::new(0x0041, 0x030A, 0x00C5),
    CompositionRecord::new(0x0041, 0x030C, 0x01CD),
    CompositionRecord::new(0x0041, 0x030F, 0x0200),
    CompositionRecord::new(0x0041, 0x0311, 0x0202),
    CompositionRecord::new(0x0041, 0x0323, 0x1EA0),
    CompositionRecord::new(0x0041, 0x0325, 0x1E00),
    CompositionRecord::new(0x0041, 0x0328, 0x0104),
    CompositionRecord::new(0x0042, 0x0307, 0x1E02),
    CompositionRecord::new(0x0042, 0x0323, 0x1E04),
    CompositionRecord::new(0x0042, 0x0331, 0x1E06),
    CompositionRecord::new(0x0043, 0x0301, 0x0106),
    CompositionRecord::new(0x0043, 0x0302, 0x0108),
    CompositionRecord::new(0x0043, 0x0307, 0x010A),
    CompositionRecord::new(0x0043, 0x030C, 0x010C),
    CompositionRecord::new(0x0043, 0x0327, 0x00C7),
    CompositionRecord::new(0x0044, 0x0307, 0x1E0A),
    CompositionRecord::new(0x0044, 0x030C, 0x010E),
    CompositionRecord::new(0x0044, 0x0323, 0x1E0C),
    CompositionRecord::new(0x0044, 0x0327, 0x1E10),
    CompositionRecord::new(0x0044, 0x032D, 0x1E12),
    CompositionRecord::new(0x0044, 0x0331, 0x1E0E),
    CompositionRecord::new(0x0045, 0x0300, 0x00C8),
    CompositionRecord::new(0x0045, 0x0301, 0x00C9),
    CompositionRecord::new(0x0045, 0x0302, 0x00CA),
    CompositionRecord::new(0x0045, 0x0303, 0x1EBC),
    CompositionRecord::new(0x0045, 0x0304, 0x0112),
    CompositionRecord::new(0x0045, 0x0306, 0x0114),
    CompositionRecord::new(0x0045, 0x0307, 0x0116),
    CompositionRecord::new(0x0045, 0x0308, 0x00CB),
    CompositionRecord::new(0x0045, 0x0309, 0x1EBA),
    CompositionRecord::new(0x0045, 0x030C, 0x011A),
    CompositionRecord::new(0x0045, 0x030F, 0x0204),
    CompositionRecord::new(0x0045, 0x0311, 0x0206),
    CompositionRecord::new(0x0045, 0x0323, 0x1EB8),
    CompositionRecord::new(0x0045, 0x0327, 0x0228),
    CompositionRecord::new(0x0045, 0x0328, 0x0118),
    CompositionRecord::new(0x0045, 0x032D, 0x1E18),
    CompositionRecord::new(0x0045, 0x0330, 0x1E1A),
    CompositionRecord::new(0x0046, 0x0307, 0x1E1E),
    CompositionRecord::new(0x0047, 0x0301, 0x01F4),
    CompositionRecord::new(0x0047, 0x0302, 0x011C),
    CompositionRecord::new(0x0047, 0x0304, 0x1E20),
    CompositionRecord::new(0x0047, 0x0306, 0x011E),
    CompositionRecord::new(0x0047, 0x0307, 0x0120),
    CompositionRecord::new(0x0047, 0x030C, 0x01E6),
    CompositionRecord::new(0x0047, 0x0327, 0x0122),
    CompositionRecord::new(0x0048, 0x0302, 0x0124),
    CompositionRecord::new(0x0048, 0x0307, 0x1E22),
    CompositionRecord::new(0x0048, 0x0308, 0x1E26),
    CompositionRecord::new(0x0048, 0x030C, 0x021E),
    CompositionRecord::new(0x0048, 0x0323, 0x1E24),
    CompositionRecord::new(0x0048, 0x0327, 0x1E28),
    CompositionRecord::new(0x0048, 0x032E, 0x1E2A),
    CompositionRecord::new(0x0049, 0x0300, 0x00CC),
    CompositionRecord::new(0x0049, 0x0301, 0x00CD),
    CompositionRecord::new(0x0049, 0x0302, 0x00CE),
    CompositionRecord::new(0x0049, 0x0303, 0x0128),
    CompositionRecord::new(0x0049, 0x0304, 0x012A),
    CompositionRecord::new(0x0049, 0x0306, 0x012C),
    CompositionRecord::new(0x0049, 0x0307, 0x0130),
    CompositionRecord::new(0x0049, 0x0308, 0x00CF),
    CompositionRecord::new(0x0049, 0x0309, 0x1EC8),
    CompositionRecord::new(0x0049, 0x030C, 0x01CF),
    CompositionRecord::new(0x0049, 0x030F, 0x0208),
    CompositionRecord::new(0x0049, 0x0311, 0x020A),
    CompositionRecord::new(0x0049, 0x0323, 0x1ECA),
    CompositionRecord::new(0x0049, 0x0328, 0x012E),
    CompositionRecord::new(0x0049, 0x0330, 0x1E2C),
    CompositionRecord::new(0x004A, 0x0302, 0x0134),
    CompositionRecord::new(0x004B, 0x0301, 0x1E30),
    CompositionRecord::new(0x004B, 0x030C, 0x01E8),
    CompositionRecord::new(0x004B, 0x0323, 0x1E32),
    CompositionRecord::new(0x004B, 0x0327, 0x0136),
    CompositionRecord::new(0x004B, 0x0331, 0x1E34),
    CompositionRecord::new(0x004C, 0x0301, 0x0139),
    CompositionRecord::new(0x004C, 0x030C, 0x013D),
    CompositionRecord::new(0x004C, 0x0323, 0x1E36),
    CompositionRecord::new(0x004C, 0x0327, 0x013B),
    CompositionRecord::new(0x004C, 0x032D, 0x1E3C),
    CompositionRecord::new(0x004C, 0x0331, 0x1E3A),
    CompositionRecord::new(0x004D, 0x0301, 0x1E3E),
    CompositionRecord::new(0x004D, 0x0307, 0x1E40),
    CompositionRecord::new(0x004D, 0x0323, 0x1E42),
    CompositionRecord::new(0x004E, 0x0300, 0x01F8),
    CompositionRecord::new(0x004E, 0x0301, 0x0143),
    CompositionRecord::new(0x004E, 0x0303, 0x00D1),
    CompositionRecord::new(0x004E, 0x0307, 0x1E44),
    CompositionRecord::new(0x004E, 0x030C, 0x0147),
    CompositionRecord::new(0x004E, 0x0323, 0x1E46),
    CompositionRecord::new(0x004E, 0x0327, 0x0145),
    CompositionRecord::new(0x004E, 0x032D, 0x1E4A),
    CompositionRecord::new(0x004E, 0x0331, 0x1E48),
    CompositionRecord::new(0x004F, 0x0300, 0x00D2),
    CompositionRecord::new(0x004F, 0x0301, 0x00D3),
    CompositionRecord::new(0x004F, 0x0302, 0x00D4),
    CompositionRecord::new(0x004F, 0x0303, 0x00D5),
    CompositionRecord::new(0x004F, 0x0304, 0x014C),
    CompositionRecord::new(0x004F, 0x0306, 0x014E),
    CompositionRecord::new(0x004F, 0x0307, 0x022E),
    CompositionRecord::new(0x004F, 0x0308, 0x00D6),
    CompositionRecord::new(0x004F, 0x0309, 0x1ECE),
    CompositionRecord::new(0x004F, 0x030B, 0x0150),
    CompositionRecord::new(0x004F, 0x030C, 0x01D1),
    CompositionRecord::new(0x004F, 0x030F, 0x020C),
    CompositionRecord::new(0x004F, 0x0311, 0x020E),
    CompositionRecord::new(0x004F, 0x031B, 0x01A0),
    CompositionRecord::new(0x004F, 0x0323, 0x1ECC),
    CompositionRecord::new(0x004F, 0x0328, 0x01EA),
    CompositionRecord::new(0x0050, 0x0301, 0x1E54),
    CompositionRecord::new(0x0050, 0x0307, 0x1E56),
    CompositionRecord::new(0x0052, 0x0301, 0x0154),
    CompositionRecord::new(0x0052, 0x0307, 0x1E58),
    CompositionRecord::new(0x0052, 0x030C, 0x0158),
    CompositionRecord::new(0x0052, 0x030F, 0x0210),
    CompositionRecord::new(0x0052, 0x0311, 0x0212),
    CompositionRecord::new(0x0052, 0x0323, 0x1E5A),
    CompositionRecord::new(0x0052, 0x0327, 0x0156),
    CompositionRecord::new(0x0052, 0x0331, 0x1E5E),
    CompositionRecord::new(0x0053, 0x0301, 0x015A),
    CompositionRecord::new(0x0053, 0x0302, 0x015C),
    CompositionRecord::new(0x0053, 0x0307, 0x1E60),
    CompositionRecord::new(0x0053, 0x030C, 0x0160),
    CompositionRecord::new(0x0053, 0x0323, 0x1E62),
    CompositionRecord::new(0x0053, 0x0326, 0x0218),
    CompositionRecord::new(0x0053, 0x0327, 0x015E),
    CompositionRecord::new(0x0054, 0x0307, 0x1E6A),
    CompositionRecord::new(0x0054, 0x030C, 0x0164),
    CompositionRecord::new(0x0054, 0x0323, 0x1E6C),
    CompositionRecord::new(0x0054, 0x0326, 0x021A),
    CompositionRecord::new(0x0054, 0x0327, 0x0162),
    CompositionRecord::new(0x0054, 0x032D, 0x1E70),
    CompositionRecord::new(0x0054, 0x0331, 0x1E6E),
    CompositionRecord::new(0x0055, 0x0300, 0x00D9),
    CompositionRecord::new(0x0055, 0x0301, 0x00DA),
    CompositionRecord::new(0x0055, 0x0302, 0x00DB),
    CompositionRecord::new(0x0055, 0x0303, 0x0168),
    CompositionRecord::new(0x0055, 0x0304, 0x016A),
    CompositionRecord::new(0x0055, 0x0306, 0x016C),
    CompositionRecord::new(0x0055, 0x0308, 0x00DC),
    CompositionRecord::new(0x0055, 0x0309, 0x1EE6),
    CompositionRecord::new(0x0055, 0x030A, 0x016E),
    CompositionRecord::new(0x0055, 0x030B, 0x0170),
    CompositionRecord::new(0x0055, 0x030C, 0x01D3),
    CompositionRecord::new(0x0055, 0x030F, 0x0214),
    CompositionRecord::new(0x0055, 0x0311, 0x0216),
    CompositionRecord::new(0x0055, 0x031B, 0x01AF),
    CompositionRecord::new(0x0055, 0x0323, 0x1EE4),
    CompositionRecord::new(0x0055, 0x0324, 0x1E72),
    CompositionRecord::new(0x0055, 0x0328, 0x0172),
    CompositionRecord::new(0x0055, 0x032D, 0x1E76),
    CompositionRecord::new(0x0055, 0x0330, 0x1E74),
    CompositionRecord::new(0x0056, 0x0303, 0x1E7C),
    CompositionRecord::new(0x0056, 0x0323, 0x1E7E),
    CompositionRecord::new(0x0057, 0x0300, 0x1E80),
    CompositionRecord::new(0x0057, 0x0301, 0x1E82),
    CompositionRecord::new(0x0057, 0x0302, 0x0174),
    CompositionRecord::new(0x0057, 0x0307, 0x1E86),
    CompositionRecord::new(0x0057, 0x0308, 0x1E84),
    CompositionRecord::new(0x0057, 0x0323, 0x1E88),
    CompositionRecord::new(0x0058, 0x0307, 0x1E8A),
    CompositionRecord::new(0x0058, 0x0308, 0x1E8C),
    CompositionRecord::new(0x0059, 0x0300, 0x1EF2),
    CompositionRecord::new(0x0059, 0x0301, 0x00DD),
    CompositionRecord::new(0x0059, 0x0302, 0x0176),
    CompositionRecord::new(0x0059, 0x0303, 0x1EF8),
    CompositionRecord::new(0x0059, 0x0304, 0x0232),
    CompositionRecord::new(0x0059, 0x0307, 0x1E8E),
    CompositionRecord::new(0x0059, 0x0308, 0x0178),
    CompositionRecord::new(0x0059, 0x0309, 0x1EF6),
    CompositionRecord::new(0x0059, 0x0323, 0x1EF4),
    CompositionRecord::new(0x005A, 0x0301, 0x0179),
    CompositionRecord::new(0x005A, 0x0302, 0x1E90),
    CompositionRecord::new(0x005A, 0x0307, 0x017B),
    CompositionRecord::new(0x005A, 0x030C, 0x017D),
    CompositionRecord::new(0x005A, 0x0323, 0x1E92),
    CompositionRecord::new(0x005A, 0x0331, 0x1E94),
    CompositionRecord::new(0x0061, 0x0300, 0x00E0),
    CompositionRecord::new(0x0061, 0x0301, 0x00E1),
    CompositionRecord::new(0x0061, 0x0302, 0x00E2),
    CompositionRecord::new(0x0061, 0x0303, 0x00E3),
    CompositionRecord::new(0x0061, 0x0304, 0x0101),
    CompositionRecord::new(0x0061, 0x0306, 0x0103),
    CompositionRecord::new(0x0061, 0x0307, 0x0227),
    CompositionRecord::new(0x0061, 0x0308, 0x00E4),
    CompositionRecord::new(0x0061, 0x0309, 0x1EA3),
    CompositionRecord::new(0x0061, 0x030A, 0x00E5),
    CompositionRecord::new(0x0061, 0x030C, 0x01CE),
    CompositionRecord::new(0x0061, 0x030F, 0x0201),
    CompositionRecord::new(0x0061, 0x0311, 0x0203),
    CompositionRecord::new(0x0061, 0x0323, 0x1EA1),
    CompositionRecord::new(0x0061, 0x0325, 0x1E01),
    CompositionRecord::new(0x0061, 0x0328, 0x0105),
    CompositionRecord::new(0x0062, 0x0307, 0x1E03),
    CompositionRecord::new(0x0062, 0x0323, 0x1E05),
    CompositionRecord::new(0x0062, 0x0331, 0x1E07),
    CompositionRecord::new(0x0063, 0x0301, 0x0107),
    CompositionRecord::new(0x0063, 0x0302, 0x0109),
    CompositionRecord::new(0x0063, 0x0307, 0x010B),
    CompositionRecord::new(0x0063, 0x030C, 0x010D),
    CompositionRecord::new(0x0063, 0x0327, 0x00E7),
    CompositionRecord::new(0x0064, 0x0307, 0x1E0B),
    CompositionRecord::new(0x0064, 0x030C, 0x010F),
    CompositionRecord::new(0x0064, 0x0323, 0x1E0D),
    CompositionRecord::new(0x0064, 0x0327, 0x1E11),
    CompositionRecord::new(0x0064, 0x032D, 0x1E13),
    CompositionRecord::new(0x0064, 0x0331, 0x1E0F),
    CompositionRecord::new(0x0065, 0x0300, 0x00E8),
    CompositionRecord::new(0x0065, 0x0301, 0x00E9),
    CompositionRecord::new(0x0065, 0x0302, 0x00EA),
    CompositionRecord::new(0x0065, 0x0303, 0x1EBD),
    CompositionRecord::new(0x0065, 0x0304, 0x0113),
    CompositionRecord::new(0x0065, 0x0306, 0x0115),
    CompositionRecord::new(0x0065, 0x0307, 0x0117),
    CompositionRecord::new(0x0065, 0x0308, 0x00EB),
    CompositionRecord::new(0x0065, 0x0309, 0x1EBB),
    CompositionRecord::new(0x0065, 0x030C, 0x011B),
    CompositionRecord::new(0x0065, 0x030F, 0x0205),
    CompositionRecord::new(0x0065, 0x0311, 0x0207),
    CompositionRecord::new(0x0065, 0x0323, 0x1EB9),
    CompositionRecord::new(0x0065, 0x0327, 0x0229),
    CompositionRecord::new(0x0065, 0x0328, 0x0119),
    CompositionRecord::new(0x0065, 0x032D, 0x1E19),
    CompositionRecord::new(0x0065, 0x0330, 0x1E1B),
    CompositionRecord::new(0x0066, 0x0307, 0x1E1F),
    CompositionRecord::new(0x0067, 0x0301, 0x01F5),
    CompositionRecord::new(0x0067, 0x0302, 0x011D),
    CompositionRecord::new(0x0067, 0x0304, 0x1E21),
    CompositionRecord::new(0x0067, 0x0306, 0x011F),
    CompositionRecord::new(0x0067, 0x0307, 0x0121),
    CompositionRecord::new(0x0067, 0x030C, 0x01E7),
    CompositionRecord::new(0x0067, 0x0327, 0x0123),
    CompositionRecord::new(0x0068, 0x0302, 0x0125),
    CompositionRecord::new(0x0068, 0x0307, 0x1E23),
    CompositionRecord::new(0x0068, 0x0308, 0x1E27),
    CompositionRecord::new(0x0068, 0x030C, 0x021F),
    CompositionRecord::new(0x0068, 0x0323, 0x1E25),
    CompositionRecord::new(0x0068, 0x0327, 0x1E29),
    CompositionRecord::new(0x0068, 0x032E, 0x1E2B),
    CompositionRecord::new(0x0068, 0x0331, 0x1E96),
    CompositionRecord::new(0x0069, 0x0300, 0x00EC),
    CompositionRecord::new(0x0069, 0x0301, 0x00ED),
    CompositionRecord::new(0x0069, 0x0302, 0x00EE),
    CompositionRecord::new(0x0069, 0x0303, 0x0129),
    CompositionRecord::new(0x0069, 0x0304, 0x012B),
    CompositionRecord::new(0x0069, 0x0306, 0x012D),
    CompositionRecord::new(0x0069, 0x0308, 0x00EF),
    CompositionRecord::new(0x0069, 0x0309, 0x1EC9),
    CompositionRecord::new(0x0069, 0x030C, 0x01D0),
    CompositionRecord::new(0x0069, 0x030F, 0x0209),
    CompositionRecord::new(0x0069, 0x0311, 0x020B),
    CompositionRecord::new(0x0069, 0x0323, 0x1ECB),
    CompositionRecord::new(0x0069, 0x0328, 0x012F),
    CompositionRecord::new(0x0069, 0x0330, 0x1E2D),
    CompositionRecord::new(0x006A, 0x0302, 0x0135),
    CompositionRecord::new(0x006A, 0x030C, 0x01F0),
    CompositionRecord::new(0x006B, 0x0301, 0x1E31),
    CompositionRecord::new(0x006B, 0x030C, 0x01E9),
    CompositionRecord::new(0x006B, 0x0323, 0x1E33),
    CompositionRecord::new(0x006B, 0x0327, 0x0137),
    CompositionRecord::new(0x006B, 0x0331, 0x1E35),
    CompositionRecord::new(0x006C, 0x0301, 0x013A),
    CompositionRecord::new(0x006C, 0x030C, 0x013E),
    CompositionRecord::new(0x006C, 0x0323, 0x1E37),
    CompositionRecord::new(0x006C, 0x0327, 0x013C),
    CompositionRecord::new(0x006C, 0x032D, 0x1E3D),
    CompositionRecord::new(0x006C, 0x0331, 0x1E3B),
    CompositionRecord::new(0x006D, 0x0301, 0x1E3F),
    CompositionRecord::new(0x006D, 0x0307, 0x1E41),
    CompositionRecord::new(0x006D, 0x0323, 0x1E43),
    CompositionRecord::new(0x006E, 0x0300, 0x01F9),
    CompositionRecord::new(0x006E, 0x0301, 0x0144),
    CompositionRecord::new(0x006E, 0x0303, 0x00F1),
    CompositionRecord::new(0x006E, 0x0307, 0x1E45),
    CompositionRecord::new(0x006E, 0x030C, 0x0148),
    CompositionRecord::new(0x006E, 0x0323, 0x1E47),
    CompositionRecord::new(0x006E, 0x0327, 0x0146),
    CompositionRecord::new(0x006E, 0x032D, 0x1E4B),
    CompositionRecord::new(0x006E, 0x0331, 0x1E49),
    CompositionRecord::new(0x006F, 0x0300, 0x00F2),
    CompositionRecord::new(0x006F, 0x0301, 0x00F3),
    CompositionRecord::new(0x006F, 0x0302, 0x00F4),
    CompositionRecord::new(0x006F, 0x0303, 0x00F5),
    CompositionRecord::new(0x006F, 0x0304, 0x014D),
    CompositionRecord::new(0x006F, 0x0306, 0x014F),
    CompositionRecord::new(0x006F, 0x0307, 0x022F),
    CompositionRecord::new(0x006F, 0x0308, 0x00F6),
    CompositionRecord::new(0x006F, 0x0309, 0x1ECF),
    CompositionRecord::new(0x006F, 0x030B, 0x0151),
    CompositionRecord::new(0x006F, 0x030C, 0x01D2),
    CompositionRecord::new(0x006F, 0x030F, 0x020D),
    CompositionRecord::new(0x006F, 0x0311, 0x020F),
    CompositionRecord::new(0x006F, 0x031B, 0x01A1),
    CompositionRecord::new(0x006F, 0x0323, 0x1ECD),
    CompositionRecord::new(0x006F, 0x0328, 0x01EB),
    CompositionRecord::new(0x0070, 0x0301, 0x1E55),
    CompositionRecord::new(0x0070, 0x0307, 0x1E57),
    CompositionRecord::new(0x0072, 0x0301, 0x0155),
    CompositionRecord::new(0x0072, 0x0307, 0x1E59),
    CompositionRecord::new(0x0072, 0x030C, 0x0159),
    CompositionRecord::new(0x0072, 0x030F, 0x0211),
    CompositionRecord::new(0x0072, 0x0311, 0x0213),
    CompositionRecord::new(0x0072, 0x0323, 0x1E5B),
    CompositionRecord::new(0x0072, 0x0327, 0x0157),
    CompositionRecord::new(0x0072, 0x0331, 0x1E5F),
    CompositionRecord::new(0x0073, 0x0301, 0x015B),
    CompositionRecord::new(0x0073, 0x0302, 0x015D),
    CompositionRecord::new(0x0073, 0x0307, 0x1E61),
    CompositionRecord::new(0x0073, 0x030C, 0x0161),
    CompositionRecord::new(0x0073, 0x0323, 0x1E63),
    CompositionRecord::new(0x0073, 0x0326, 0x0219),
    CompositionRecord::new(0x0073, 0x0327, 0x015F),
    CompositionRecord::new(0x0074, 0x0307, 0x1E6B),
    CompositionRecord::new(0x0074, 0x0308, 0x1E97),
    CompositionRecord::new(0x0074, 0x030C, 0x0165),
    CompositionRecord::new(0x0074, 0x0323, 0x1E6D),
    CompositionRecord::new(0x0074, 0x0326, 0x021B),
    CompositionRecord::new(0x0074, 0x0327, 0x0163),
    CompositionRecord::new(0x0074, 0x032D, 0x1E71),
    CompositionRecord::new(0x0074, 0x0331, 0x1E6F),
    CompositionRecord::new(0x0075, 0x0300, 0x00F9),
    CompositionRecord::new(0x0075, 0x0301, 0x00FA),
    CompositionRecord::new(0x0075, 0x0302, 0x00FB),
    CompositionRecord::new(0x0075, 0x0303, 0x0169),
    CompositionRecord::new(0x0075, 0x0304, 0x016B),
    CompositionRecord::new(0x0075, 0x0306, 0x016D),
    CompositionRecord::new(0x0075, 0x0308, 0x00FC),
    CompositionRecord::new(0x0075, 0x0309, 0x1EE7),
    CompositionRecord::new(0x0075, 0x030A, 0x016F),
    CompositionRecord::new(0x0075, 0x030B, 0x0171),
    CompositionRecord::new(0x0075, 0x030C, 0x01D4),
    CompositionRecord::new(0x0075, 0x030F, 0x0215),
    CompositionRecord::new(0x0075, 0x0311, 0x0217),
    CompositionRecord::new(0x0075, 0x031B, 0x01B0),
    CompositionRecord::new(0x0075, 0x0323, 0x1EE5),
    CompositionRecord::new(0x0075, 0x0324, 0x1E73),
    CompositionRecord::new(0x0075, 0x0328, 0x0173),
    CompositionRecord::new(0x0075, 0x032D, 0x1E77),
    CompositionRecord::new(0x0075, 0x0330, 0x1E75),
    CompositionRecord::new(0x0076, 0x0303, 0x1E7D),
    CompositionRecord::new(0x0076, 0x0323, 0x1E7F),
    CompositionRecord::new(0x0077, 0x0300, 0x1E81),
    CompositionRecord::new(0x0077, 0x0301, 0x1E83),
    CompositionRecord::new(0x0077, 0x0302, 0x0175),
    CompositionRecord::new(0x0077, 0x0307, 0x1E87),
    CompositionRecord::new(0x0077, 0x0308, 0x1E85),
    CompositionRecord::new(0x0077, 0x030A, 0x1E98),
    CompositionRecord::new(0x0077, 0x0323, 0x1E89),
    CompositionRecord::new(0x0078, 0x0307, 0x1E8B),
    CompositionRecord::new(0x0078, 0x0308, 0x1E8D),
    CompositionRecord::new(0x0079, 0x0300, 0x1EF3),
    CompositionRecord::new(0x0079, 0x0301, 0x00FD),
    CompositionRecord::new(0x0079, 0x0302, 0x0177),
    CompositionRecord::new(0x0079, 0x0303, 0x1EF9),
    CompositionRecord::new(0x0079, 0x0304, 0x0233),
    CompositionRecord::new(0x0079, 0x0307, 0x1E8F),
    CompositionRecord::new(0x0079, 0x0308, 0x00FF),
    CompositionRecord::new(0x0079, 0x0309, 0x1EF7),
    CompositionRecord::new(0x0079, 0x030A, 0x1E99),
    CompositionRecord::new(0x0079, 0x0323, 0x1EF5),
    CompositionRecord::new(0x007A, 0x0301, 0x017A),
    CompositionRecord::new(0x007A, 0x0302, 0x1E91),
    CompositionRecord::new(0x007A, 0x0307, 0x017C),
    CompositionRecord::new(0x007A, 0x030C, 0x017E),
    CompositionRecord::new(0x007A, 0x0323, 0x1E93),
    CompositionRecord::new(0x007A, 0x0331, 0x1E95),
    CompositionRecord::new(0x00A8, 0x0300, 0x1FED),
    CompositionRecord::new(0x00A8, 0x0301, 0x0385),
    CompositionRecord::new(0x00A8, 0x0342, 0x1FC1),
    CompositionRecord::new(0x00C2, 0x0300, 0x1EA6),
    CompositionRecord::new(0x00C2, 0x0301, 0x1EA4),
    CompositionRecord::new(0x00C2, 0x0303, 0x1EAA),
    CompositionRecord::new(0x00C2, 0x0309, 0x1EA8),
    CompositionRecord::new(0x00C4, 0x0304, 0x01DE),
    CompositionRecord::new(0x00C5, 0x0301, 0x01FA),
    CompositionRecord::new(0x00C6, 0x0301, 0x01FC),
    CompositionRecord::new(0x00C6, 0x0304, 0x01E2),
    CompositionRecord::new(0x00C7, 0x0301, 0x1E08),
    CompositionRecord::new(0x00CA, 0x0300, 0x1EC0),
    CompositionRecord::new(0x00CA, 0x0301, 0x1EBE),
    CompositionRecord::new(0x00CA, 0x0303, 0x1EC4),
    CompositionRecord::new(0x00CA, 0x0309, 0x1EC2),
    CompositionRecord::new(0x00CF, 0x0301, 0x1E2E),
    CompositionRecord::new(0x00D4, 0x0300, 0x1ED2),
    CompositionRecord::new(0x00D4, 0x0301, 0x1ED0),
    CompositionRecord::new(0x00D4, 0x0303, 0x1ED6),
    CompositionRecord::new(0x00D4, 0x0309, 0x1ED4),
    CompositionRecord::new(0x00D5, 0x0301, 0x1E4C),
    CompositionRecord::new(0x00D5, 0x0304, 0x022C),
    CompositionRecord::new(0x00D5, 0x0308, 0x1E4E),
    CompositionRecord::new(0x00D6, 0x0304, 0x022A),
    CompositionRecord::new(0x00D8, 0x0301, 0x01FE),
    CompositionRecord::new(0x00DC, 0x0300, 0x01DB),
    CompositionRecord::new(0x00DC, 0x0301, 0x01D7),
    CompositionRecord::new(0x00DC, 0x0304, 0x01D5),
    CompositionRecord::new(0x00DC, 0x030C, 0x01D9),
    CompositionRecord::new(0x00E2, 0x0300, 0x1EA7),
    CompositionRecord::new(0x00E2, 0x0301, 0x1EA5),
    CompositionRecord::new(0x00E2, 0x0303, 0x1EAB),
    CompositionRecord::new(0x00E2, 0x0309, 0x1EA9),
    CompositionRecord::new(0x00E4, 0x0304, 0x01DF),
    CompositionRecord::new(0x00E5, 0x0301, 0x01FB),
    CompositionRecord::new(0x00E6, 0x0301, 0x01FD),
    CompositionRecord::new(0x00E6, 0x0304, 0x01E3),
    CompositionRecord::new(0x00E7, 0x0301, 0x1E09),
    CompositionRecord::new(0x00EA, 0x0300, 0x1EC1),
    CompositionRecord::new(0x00EA, 0x0301, 0x1EBF),
    CompositionRecord::new(0x00EA, 0x0303, 0x1EC5),
    CompositionRecord::new(0x00EA, 0x0309, 0x1EC3),
    CompositionRecord::new(0x00EF, 0x0301, 0x1E2F),
    CompositionRecord::new(0x00F4, 0x0300, 0x1ED3),
    CompositionRecord::new(0x00F4, 0x0301, 0x1ED1),
    CompositionRecord::new(0x00F4, 0x0303, 0x1ED7),
    CompositionRecord::new(0x00F4, 0x0309, 0x1ED5),
    CompositionRecord::new(0x00F5, 0x0301, 0x1E4D),
    CompositionRecord::new(0x00F5, 0x0304, 0x022D),
    CompositionRecord::new(0x00F5, 0x0308, 0x1E4F),
    CompositionRecord::new(0x00F6, 0x0304, 0x022B),
    CompositionRecord::new(0x00F8, 0x0301, 0x01FF),
    CompositionRecord::new(0x00FC, 0x0300, 0x01DC),
    CompositionRecord::new(0x00FC, 0x0301, 0x01D8),
    CompositionRecord::new(0x00FC, 0x0304, 0x01D6),
    CompositionRecord::new(0x00FC, 0x030C, 0x01DA),
    CompositionRecord::new(0x0102, 0x0300, 0x1EB0),
    CompositionRecord::new(0x0102, 0x0301, 0x1EAE),
    CompositionRecord::new(0x0102, 0x0303, 0x1EB4),
    CompositionRecord::new(0x0102, 0x0309, 0x1EB2),
    CompositionRecord::new(0x0103, 0x0300, 0x1EB1),
    CompositionRecord::new(0x0103, 0x0301, 0x1EAF),
    CompositionRecord::new(0x0103, 0x0303, 0x1EB5),
    CompositionRecord::new(0x0103, 0x0309, 0x1EB3),
    CompositionRecord::new(0x0112, 0x0300, 0x1E14),
    CompositionRecord::new(0x0112, 0x0301, 0x1E16),
    CompositionRecord::new(0x0113, 0x0300, 0x1E15),
    CompositionRecord::new(0x0113, 0x0301, 0x1E17),
    CompositionRecord::new(0x014C, 0x0300, 0x1E50),
    CompositionRecord::new(0x014C, 0x0301, 0x1E52),
    CompositionRecord::new(0x014D, 0x0300, 0x1E51),
    CompositionRecord::new(0x014D, 0x0301, 0x1E53),
    CompositionRecord::new(0x015A, 0x0307, 0x1E64),
    CompositionRecord::new(0x015B, 0x0307, 0x1E65),
    CompositionRecord::new(0x0160, 0x0307, 0x1E66),
    CompositionRecord::new(0x0161, 0x0307, 0x1E67),
    CompositionRecord::new(0x0168, 0x0301, 0x1E78),
    CompositionRecord::new(0x0169, 0x0301, 0x1E79),
    CompositionRecord::new(0x016A, 0x0308, 0x1E7A),
    CompositionRecord::new(0x016B, 0x0308, 0x1E7B),
    CompositionRecord::new(0x017F, 0x0307, 0x1E9B),
    CompositionRecord::new(0x01A0, 0x0300, 0x1EDC),
    CompositionRecord::new(0x01A0, 0x0301, 0x1EDA),
    CompositionRecord::new(0x01A0, 0x0303, 0x1EE0),
    CompositionRecord::new(0x01A0, 0x0309, 0x1EDE),
    CompositionRecord::new(0x01A0, 0x0323, 0x1EE2),
    CompositionRecord::new(0x01A1, 0x0300, 0x1EDD),
    CompositionRecord::new(0x01A1, 0x0301, 0x1EDB),
    CompositionRecord::new(0x01A1, 0x0303, 0x1EE1),
    CompositionRecord::new(0x01A1, 0x0309, 0x1EDF),
    CompositionRecord::new(0x01A1, 0x0323, 0x1EE3),
    CompositionRecord::new(0x01AF, 0x0300, 0x1EEA),
    CompositionRecord::new(0x01AF, 0x0301, 0x1EE8),
    CompositionRecord::new(0x01AF, 0x0303, 0x1EEE),
    CompositionRecord::new(0x01AF, 0x0309, 0x1EEC),
    CompositionRecord::new(0x01AF, 0x0323, 0x1EF0),
    CompositionRecord::new(0x01B0, 0x0300, 0x1EEB),
    CompositionRecord::new(0x01B0, 0x0301, 0x1EE9),
    CompositionRecord::new(0x01B0, 0x0303, 0x1EEF),
    CompositionRecord::new(0x01B0, 0x0309, 0x1EED),
    CompositionRecord::new(0x01B0, 0x0323, 0x1EF1),
    CompositionRecord::new(0x01B7, 0x030C, 0x01EE),
    CompositionRecord::new(0x01EA, 0x0304, 0x01EC),
    CompositionRecord::new(0x01EB, 0x0304, 0x01ED),
    CompositionRecord::new(0x0226, 0x0304, 0x01E0),
    CompositionRecord::new(0x0227, 0x0304, 0x01E1),
    CompositionRecord::new(0x0228, 0x0306, 0x1E1C),
    CompositionRecord::new(0x0229, 0x0306, 0x1E1D),
    CompositionRecord::new(0x022E, 0x0304, 0x0230),
    CompositionRecord::new(0x022F, 0x0304, 0x0231),
    CompositionRecord::new(0x0292, 0x030C, 0x01EF),
    CompositionRecord::new(0x0308, 0x0301, 0x0344),
    CompositionRecord::new(0x0391, 0x0300, 0x1FBA),
    CompositionRecord::new(0x0391, 0x0301, 0x0386),
    CompositionRecord::new(0x0391, 0x0304, 0x1FB9),
    CompositionRecord::new(0x0391, 0x0306, 0x1FB8),
    CompositionRecord::new(0x0391, 0x0313, 0x1F08),
    CompositionRecord::new(0x0391, 0x0314, 0x1F09),
    CompositionRecord::new(0x0391, 0x0345, 0x1FBC),
    CompositionRecord::new(0x0395, 0x0300, 0x1FC8),
    CompositionRecord::new(0x0395, 0x0301, 0x0388),
    CompositionRecord::new(0x0395, 0x0313, 0x1F18),
    CompositionRecord::new(0x0395, 0x0314, 0x1F19),
    CompositionRecord::new(0x0397, 0x0300, 0x1FCA),
    CompositionRecord::new(0x0397, 0x0301, 0x0389),
    CompositionRecord::new(0x0397, 0x0313, 0x1F28),
    CompositionRecord::new(0x0397, 0x0314, 0x1F29),
    CompositionRecord::new(0x0397, 0x0345, 0x1FCC),
    CompositionRecord::new(0x0399, 0x0300, 0x1FDA),
    CompositionRecord::new(0x0399, 0x0301, 0x038A),
    CompositionRecord::new(0x0399, 0x0304, 0x1FD9),
    CompositionRecord::new(0x0399, 0x0306, 0x1FD8),
    CompositionRecord::new(0x0399, 0x0308, 0x03AA),
    CompositionRecord::new(0x0399, 0x0313, 0x1F38),
    CompositionRecord::new(0x0399, 0x0314, 0x1F39),
    CompositionRecord::new(0x039F, 0x0300, 0x1FF8),
    CompositionRecord::new(0x039F, 0x0301, 0x038C),
    CompositionRecord::new(0x039F, 0x0313, 0x1F48),
    CompositionRecord::new(0x039F, 0x0314, 0x1F49),
    CompositionRecord::new(0x03A1, 0x0314, 0x1FEC),
    CompositionRecord::new(0x03A5, 0x0300, 0x1FEA),
    CompositionRecord::new(0x03A5, 0x0301, 0x038E),
    CompositionRecord::new(0x03A5, 0x0304, 0x1FE9),
    CompositionRecord::new(0x03A5, 0x0306, 0x1FE8),
    CompositionRecord::new(0x03A5, 0x0308, 0x03AB),
    CompositionRecord::new(0x03A5, 0x0314, 0x1F59),
    CompositionRecord::new(0x03A9, 0x0300, 0x1FFA),
    CompositionRecord::new(0x03A9, 0x0301, 0x038F),
    CompositionRecord::new(0x03A9, 0x0313, 0x1F68),
    CompositionRecord::new(0x03A9, 0x0314, 0x1F69),
    CompositionRecord::new(0x03A9, 0x0345, 0x1FFC),
    CompositionRecord::new(0x03AC, 0x0345, 0x1FB4),
    CompositionRecord::new(0x03AE, 0x0345, 0x1FC4),
    CompositionRecord::new(0x03B1, 0x0300, 0x1F70),
    CompositionRecord::new(0x03B1, 0x0301, 0x03AC),
    CompositionRecord::new(0x03B1, 0x0304, 0x1FB1),
    CompositionRecord::new(0x03B1, 0x0306, 0x1FB0),
    CompositionRecord::new(0x03B1, 0x0313, 0x1F00),
    CompositionRecord::new(0x03B1, 0x0314, 0x1F01),
    CompositionRecord::new(0x03B1, 0x0342, 0x1FB6),
    CompositionRecord::new(0x03B1, 0x0345, 0x1FB3),
    CompositionRecord::new(0x03B5, 0x0300, 0x1F72),
    CompositionRecord::new(0x03B5, 0x0301, 0x03AD),
    CompositionRecord::new(0x03B5, 0x0313, 0x1F10),
    CompositionRecord::new(0x03B5, 0x0314, 0x1F11),
    CompositionRecord::new(0x03B7, 0x0300, 0x1F74),
    CompositionRecord::new(0x03B7, 0x0301, 0x03AE),
    CompositionRecord::new(0x03B7, 0x0313, 0x1F20),
    CompositionRecord::new(0x03B7, 0x0314, 0x1F21),
    CompositionRecord::new(0x03B7, 0x0342, 0x1FC6),
    CompositionRecord::new(0x03B7, 0x0345, 0x1FC3),
    CompositionRecord::new(0x03B9, 0x0300, 0x1F76),
    CompositionRecord::new(0x03B9, 0x0301, 0x03AF),
    CompositionRecord::new(0x03B9, 0x0304, 0x1FD1),
    CompositionRecord::new(0x03B9, 0x0306, 0x1FD0),
    CompositionRecord::new(0x03B9, 0x0308, 0x03CA),
    CompositionRecord::new(0x03B9, 0x0313, 0x1F30),
    CompositionRecord::new(0x03B9, 0x0314, 0x1F31),
    CompositionRecord::new(0x03B9, 0x0342, 0x1FD6),
    CompositionRecord::new(0x03BF, 0x0300, 0x1F78),
    CompositionRecord::new(0x03BF, 0x0301, 0x03CC),
    CompositionRecord::new(0x03BF, 0x0313, 0x1F40),
    CompositionRecord::new(0x03BF, 0x0314, 0x1F41),
    CompositionRecord::new(0x03C1, 0x0313, 0x1FE4),
    CompositionRecord::new(0x03C1, 0x0314, 0x1FE5),
    CompositionRecord::new(0x03C5, 0x0300, 0x1F7A),
    CompositionRecord::new(0x03C5, 0x0301, 0x03CD),
    CompositionRecord::new(0x03C5, 0x0304, 0x1FE1),
    CompositionRecord::new(0x03C5, 0x0306, 0x1FE0),
    CompositionRecord::new(0x03C5, 0x0308, 0x03CB),
    CompositionRecord::new(0x03C5, 0x0313, 0x1F50),
    CompositionRecord::new(0x03C5, 0x0314, 0x1F51),
    CompositionRecord::new(0x03C5, 0x0342, 0x1FE6),
    CompositionRecord::new(0x03C9, 0x0300, 0x1F7C),
    CompositionRecord::new(0x03C9, 0x0301, 0x03CE),
    CompositionRecord::new(0x03C9, 0x0313, 0x1F60),
    CompositionRecord::new(0x03C9, 0x0314, 0x1F61),
    CompositionRecord::new(0x03C9, 0x0342, 0x1FF6),
    CompositionRecord::new(0x03C9, 0x0345, 0x1FF3),
    CompositionRecord::new(0x03CA, 0x0300, 0x1FD2),
    CompositionRecord::new(0x03CA, 0x0301, 0x0390),
    CompositionRecord::new(0x03CA, 0x0342, 0x1FD7),
    CompositionRecord::new(0x03CB, 0x0300, 0x1FE2),
    CompositionRecord::new(0x03CB, 0x0301, 0x03B0),
    CompositionRecord::new(0x03CB, 0x0342, 0x1FE7),
    CompositionRecord::new(0x03CE, 0x0345, 0x1FF4),
    CompositionRecord::new(0x03D2, 0x0301, 0x03D3),
    CompositionRecord::new(0x03D2, 0x0308, 0x03D4),
    CompositionRecord::new(0x0406, 0x0308, 0x0407),
    CompositionRecord::new(0x0410, 0x0306, 0x04D0),
    CompositionRecord::new(0x0410, 0x0308, 0x04D2),
    CompositionRecord::new(0x0413, 0x0301, 0x0403),
    CompositionRecord::new(0x0415, 0x0300, 0x0400),
    CompositionRecord::new(0x0415, 0x0306, 0x04D6),
    CompositionRecord::new(0x0415, 0x0308, 0x0401),
    CompositionRecord::new(0x0416, 0x0306, 0x04C1),
    CompositionRecord::new(0x0416, 0x0308, 0x04DC),
    CompositionRecord::new(0x0417, 0x0308, 0x04DE),
    CompositionRecord::new(0x0418, 0x0300, 0x040D),
    CompositionRecord::new(0x0418, 0x0304, 0x04E2),
    CompositionRecord::new(0x0418, 0x0306, 0x0419),
    CompositionRecord::new(0x0418, 0x0308, 0x04E4),
    CompositionRecord::new(0x041A, 0x0301, 0x040C),
    CompositionRecord::new(0x041E, 0x0308, 0x04E6),
    CompositionRecord::new(0x0423, 0x0304, 0x04EE),
    CompositionRecord::new(0x0423, 0x0306, 0x040E),
    CompositionRecord::new(0x0423, 0x0308, 0x04F0),
    CompositionRecord::new(0x0423, 0x030B, 0x04F2),
    CompositionRecord::new(0x0427, 0x0308, 0x04F4),
    CompositionRecord::new(0x042B, 0x0308, 0x04F8),
    CompositionRecord::new(0x042D, 0x0308, 0x04EC),
    CompositionRecord::new(0x0430, 0x0306, 0x04D1),
    CompositionRecord::new(0x0430, 0x0308, 0x04D3),
    CompositionRecord::new(0x0433, 0x0301, 0x0453),
    CompositionRecord::new(0x0435, 0x0300, 0x0450),
    CompositionRecord::new(0x0435, 0x0306, 0x04D7),
    CompositionRecord::new(0x0435, 0x0308, 0x0451),
    CompositionRecord::new(0x0436, 0x0306, 0x04C2),
    CompositionRecord::new(0x0436, 0x0308, 0x04DD),
    CompositionRecord::new(0x0437, 0x0308, 0x04DF),
    CompositionRecord::new(0x0438, 0x0300, 0x045D),
    CompositionRecord::new(0x0438, 0x0304, 0x04E3),
    CompositionRecord::new(0x0438, 0x0306, 0x0439),
    CompositionRecord::new(0x0438, 0x0308, 0x04E5),
    CompositionRecord::new(0x043A, 0x0301, 0x045C),
    CompositionRecord::new(0x043E, 0x0308, 0x04E7),
    CompositionRecord::new(0x0443, 0x0304, 0x04EF),
    CompositionRecord::new(0x0443, 0x0306, 0x045E),
    CompositionRecord::new(0x0443, 0x0308, 0x04F1),
    CompositionRecord::new(0x0443, 0x030B, 0x04F3),
    CompositionRecord::new(0x0447, 0x0308, 0x04F5),
    CompositionRecord::new(0x044B, 0x0308, 0x04F9),
    CompositionRecord::new(0x044D, 0x0308, 0x04ED),
    CompositionRecord::new(0x0456, 0x0308, 0x0457),
    CompositionRecord::new(0x0474, 0x030F, 0x0476),
    CompositionRecord::new(0x0475, 0x030F, 0x0477),
    CompositionRecord::new(0x04D8, 0x0308, 0x04DA),
    CompositionRecord::new(0x04D9, 0x0308, 0x04DB),
    CompositionRecord::new(0x04E8, 0x0308, 0x04EA),
    CompositionRecord::new(0x04E9, 0x0308, 0x04EB),
    CompositionRecord::new(0x05D0, 0x05B7, 0xFB2E),
    CompositionRecord::new(0x05D0, 0x05B8, 0xFB2F),
    CompositionRecord::new(0x05D0, 0x05BC, 0xFB30),
    CompositionRecord::new(0x05D1, 0x05BC, 0xFB31),
    CompositionRecord::new(0x05D1, 0x05BF, 0xFB4C),
    CompositionRecord::new(0x05D2, 0x05BC, 0xFB32),
    CompositionRecord::new(0x05D3, 0x05BC, 0xFB33),
    CompositionRecord::new(0x05D4, 0x05BC, 0xFB34),
    CompositionRecord::new(0x05D5, 0x05B9, 0xFB4B),
    CompositionRecord::new(0x05D5, 0x05BC, 0xFB35),
    CompositionRecord::new(0x05D6, 0x05BC, 0xFB36),
    CompositionRecord::new(0x05D8, 0x05BC, 0xFB38),
    CompositionRecord::new(0x05D9, 0x05B4, 0xFB1D),
    CompositionRecord::new(0x05D9, 0x05BC, 0xFB39),
    CompositionRecord::new(0x05DA, 0x05BC, 0xFB3A),
    CompositionRecord::new(0x05DB, 0x05BC, 0xFB3B),
    CompositionRecord::new(0x05DB, 0x05BF, 0xFB4D),
    CompositionRecord::new(0x05DC, 0x05BC, 0xFB3C),
    CompositionRecord::new(0x05DE, 0x05BC, 0xFB3E),
    CompositionRecord::new(0x05E0, 0x05BC, 0xFB40),
    CompositionRecord::new(0x05E1, 0x05BC, 0xFB41),
    CompositionRecord::new(0x05E3, 0x05BC, 0xFB43),
    CompositionRecord::new(0x05E4, 0x05BC, 0xFB44),
    CompositionRecord::new(0x05E4, 0x05BF, 0xFB4E),
    CompositionRecord::new(0x05E6, 0x05BC, 0xFB46),
    CompositionRecord::new(0x05E7, 0x05BC, 0xFB47),
    CompositionRecord::new(0x05E8, 0x05BC, 0xFB48),
    CompositionRecord::new(0x05E9, 0x05BC, 0xFB49),
    CompositionRecord::new(0x05E9, 0x05C1, 0xFB2A),
    CompositionRecord::new(0x05E9, 0x05C2, 0xFB2B),
    CompositionRecord::new(0x05EA, 0x05BC, 0xFB4A),
    CompositionRecord::new(0x05F2, 0x05B7, 0xFB1F),
    CompositionRecord::new(0x0627, 0x0653, 0x0622),
    CompositionRecord::new(0x0627, 0x0654, 0x0623),
    CompositionRecord::new(0x0627, 0x0655, 0x0625),
    CompositionRecord::new(0x0648, 0x0654, 0x0624),
    CompositionRecord::new(0x064A, 0x0654, 0x0626),
    CompositionRecord::new(0x06C1, 0x0654, 0x06C2),
    CompositionRecord::new(0x06D2, 0x0654, 0x06D3),
    CompositionRecord::new(0x06D5, 0x0654, 0x06C0),
    CompositionRecord::new(0x0915, 0x093C, 0x0958),
    CompositionRecord::new(0x0916, 0x093C, 0x0959),
    CompositionRecord::new(0x0917, 0x093C, 0x095A),
    CompositionRecord::new(0x091C, 0x093C, 0x095B),
    CompositionRecord::new(0x0921, 0x093C, 0x095C),
    CompositionRecord::new(0x0922, 0x093C, 0x095D),
    CompositionRecord::new(0x0928, 0x093C, 0x0929),
    CompositionRecord::new(0x092B, 0x093C, 0x095E),
    CompositionRecord::new(0x092F, 0x093C, 0x095F),
    CompositionRecord::new(0x0930, 0x093C, 0x0931),
    CompositionRecord::new(0x0933, 0x093C, 0x0934),
    CompositionRecord::new(0x09A1, 0x09BC, 0x09DC),
    CompositionRecord::new(0x09A2, 0x09BC, 0x09DD),
    CompositionRecord::new(0x09AF, 0x09BC, 0x09DF),
    CompositionRecord::new(0x09C7, 0x09BE, 0x09CB),
    CompositionRecord::new(0x09C7, 0x09D7, 0x09CC),
    CompositionRecord::new(0x0A16, 0x0A3C, 0x0A59),
    CompositionRecord::new(0x0A17, 0x0A3C, 0x0A5A),
    CompositionRecord::new(0x0A1C, 0x0A3C, 0x0A5B),
    CompositionRecord::new(0x0A2B, 0x0A3C, 0x0A5E),
    CompositionRecord::new(0x0A32, 0x0A3C, 0x0A33),
    CompositionRecord::new(0x0A38, 0x0A3C, 0x0A36),
    CompositionRecord::new(0x0B21, 0x0B3C, 0x0B5C),
    CompositionRecord::new(0x0B22, 0x0B3C, 0x0B5D),
    CompositionRecord::new(0x0B47, 0x0B3E, 0x0B4B),
    CompositionRecord::new(0x0B47, 0x0B56, 0x0B48),
    CompositionRecord::new(0x0B47, 0x0B57, 0x0B4C),
    CompositionRecord::new(0x0B92, 0x0BD7, 0x0B94),
    CompositionRecord::new(0x0BC6, 0x0BBE, 0x0BCA),
    CompositionRecord::new(0x0BC6, 0x0BD7, 0x0BCC),
    CompositionRecord::new(0x0BC7, 0x0BBE, 0x0BCB),
    CompositionRecord::new(0x0C46, 0x0C56, 0x0C48),
    CompositionRecord::new(0x0CBF, 0x0CD5, 0x0CC0),
    CompositionRecord::new(0x0CC6, 0x0CC2, 0x0CCA),
    CompositionRecord::new(0x0CC6, 0x0CD5, 0x0CC7),
    CompositionRecord::new(0x0CC6, 0x0CD6, 0x0CC8),
    CompositionRecord::new(0x0CCA, 0x0CD5, 0x0CCB),
    CompositionRecord::new(0x0D46, 0x0D3E, 0x0D4A),
    CompositionRecord::new(0x0D46, 0x0D57, 0x0D4C),
    CompositionRecord::new(0x0D47, 0x0D3E, 0x0D4B),
    CompositionRecord::new(0x0DD9, 0x0DCA, 0x0DDA),
    CompositionRecord::new(0x0DD9, 0x0DCF, 0x0DDC),
    CompositionRecord::new(0x0DD9, 0x0DDF, 0x0DDE),
    CompositionRecord::new(0x0DDC, 0x0DCA, 0x0DDD),
    CompositionRecord::new(0x0F40, 0x0FB5, 0x0F69),
    CompositionRecord::new(0x0F42, 0x0FB7, 0x0F43),
    CompositionRecord::new(0x0F4C, 0x0FB7, 0x0F4D),
    CompositionRecord::new(0x0F51, 0x0FB7, 0x0F52),
    CompositionRecord::new(0x0F56, 0x0FB7, 0x0F57),
    CompositionRecord::new(0x0F5B, 0x0FB7, 0x0F5C),
    CompositionRecord::new(0x0F71, 0x0F72, 0x0F73),
    CompositionRecord::new(0x0F71, 0x0F74, 0x0F75),
    CompositionRecord::new(0x0F71, 0x0F80, 0x0F81),
    CompositionRecord::new(0x0F90, 0x0FB5, 0x0FB9),
    CompositionRecord::new(0x0F92, 0x0FB7, 0x0F93),
    CompositionRecord::new(0x0F9C, 0x0FB7, 0x0F9D),
    CompositionRecord::new(0x0FA1, 0x0FB7, 0x0FA2),
    CompositionRecord::new(0x0FA6, 0x0FB7, 0x0FA7),
    CompositionRecord::new(0x0FAB, 0x0FB7, 0x0FAC),
    CompositionRecord::new(0x0FB2, 0x0F80, 0x0F76),
    CompositionRecord::new(0x0FB3, 0x0F80, 0x0F78),
    CompositionRecord::new(0x1025, 0x102E, 0x1026),
    CompositionRecord::new(0x1B05, 0x1B35, 0x1B06),
    CompositionRecord::new(0x1B07, 0x1B35, 0x1B08),
    CompositionRecord::new(0x1B09, 0x1B35, 0x1B0A),
    CompositionRecord::new(0x1B0B, 0x1B35, 0x1B0C),
    CompositionRecord::new(0x1B0D, 0x1B35, 0x1B0E),
    CompositionRecord::new(0x1B11, 0x1B35, 0x1B12),
    CompositionRecord::new(0x1B3A, 0x1B35, 0x1B3B),
    CompositionRecord::new(0x1B3C, 0x1B35, 0x1B3D),
    CompositionRecord::new(0x1B3E, 0x1B35, 0x1B40),
    CompositionRecord::new(0x1B3F, 0x1B35, 0x1B41),
    CompositionRecord::new(0x1B42, 0x1B35, 0x1B43),
    CompositionRecord::new(0x1E36, 0x0304, 0x1E38),
    CompositionRecord::new(0x1E37, 0x0304, 0x1E39),
    CompositionRecord::new(0x1E5A, 0x0304, 0x1E5C),
    CompositionRecord::new(0x1E5B, 0x0304, 0x1E5D),
    CompositionRecord::new(0x1E62, 0x0307, 0x1E68),
    CompositionRecord::new(0x1E63, 0x0307, 0x1E69),
    CompositionRecord::new(0x1EA0, 0x0302, 0x1EAC),
    CompositionRecord::new(0x1EA0, 0x0306, 0x1EB6),
    CompositionRecord::new(0x1EA1, 0x0302, 0x1EAD),
    CompositionRecord::new(0x1EA1, 0x0306, 0x1EB7),
    CompositionRecord::new(0x1EB8, 0x0302, 0x1EC6),
    CompositionRecord::new(0x1EB9, 0x0302, 0x1EC7),
    CompositionRecord::new(0x1ECC, 0x0302, 0x1ED8),
    CompositionRecord::new(0x1ECD, 0x0302, 0x1ED9),
    CompositionRecord::new(0x1F00, 0x0300, 0x1F02),
    CompositionRecord::new(0x1F00, 0x0301, 0x1F04),
    CompositionRecord::new(0x1F00, 0x0342, 0x1F06),
    CompositionRecord::new(0x1F00, 0x0345, 0x1F80),
    CompositionRecord::new(0x1F01, 0x0300, 0x1F03),
    CompositionRecord::new(0x1F01, 0x0301, 0x1F05),
    CompositionRecord::new(0x1F01, 0x0342, 0x1F07),
    CompositionRecord::new(0x1F01, 0x0345, 0x1F81),
    CompositionRecord::new(0x1F02, 0x0345, 0x1F82),
    CompositionRecord::new(0x1F03, 0x0345, 0x1F83),
    CompositionRecord::new(0x1F04, 0x0345, 0x1F84),
    CompositionRecord::new(0x1F05, 0x0345, 0x1F85),
    CompositionRecord::new(0x1F06, 0x0345, 0x1F86),
    CompositionRecord::new(0x1F07, 0x0345, 0x1F87),
    CompositionRecord::new(0x1F08, 0x0300, 0x1F0A),
    CompositionRecord::new(0x1F08, 0x0301, 0x1F0C),
    CompositionRecord::new(0x1F08, 0x0342, 0x1F0E),
    CompositionRecord::new(0x1F08, 0x0345, 0x1F88),
    CompositionRecord::new(0x1F09, 0x0300, 0x1F0B),
    CompositionRecord::new(0x1F09, 0x0301, 0x1F0D),
    CompositionRecord::new(0x1F09, 0x0342, 0x1F0F),
    CompositionRecord::new(0x1F09, 0x0345, 0x1F89),
    CompositionRecord::new(0x1F0A, 0x0345, 0x1F8A),
    CompositionRecord::new(0x1F0B, 0x0345, 0x1F8B),
    CompositionRecord::new(0x1F0C, 0x0345, 0x1F8C),
    CompositionRecord::new(0x1F0D, 0x0345, 0x1F8D),
    CompositionRecord::new(0x1F0E, 0x0345, 0x1F8E),
    CompositionRecord::new(0x1F0F, 0x0345, 0x1F8F),
    CompositionRecord::new(0x1F10, 0x0300, 0x1F12),
    CompositionRecord::new(0x1F10, 0x0301, 0x1F14),
    CompositionRecord::new(0x1F11, 0x0300, 0x1F13),
    CompositionRecord::new(0x1F11, 0x0301, 0x1F15),
    CompositionRecord::new(0x1F18, 0x0300, 0x1F1A),
    CompositionRecord::new(0x1F18, 0x0301, 0x1F1C),
    CompositionRecord::new(0x1F19, 0x0300, 0x1F1B),
    CompositionRecord::new(0x1F19, 0x0301, 0x1F1D),
    CompositionRecord::new(0x1F20, 0x0300, 0x1F22),
    CompositionRecord::new(0x1F20, 0x0301, 0x1F24),
    CompositionRecord::new(0x1F20, 0x0342, 0x1F26),
    CompositionRecord::new(0x1F20, 0x0345, 0x1F90),
    CompositionRecord::new(0x1F21, 0x0300, 0x1F23),
    CompositionRecord::new(0x1F21, 0x0301, 0x1F25),
    CompositionRecord::new(0x1F21, 0x0342, 0x1F27),
    CompositionRecord::new(0x1F21, 0x0345, 0x1F91),
    CompositionRecord::new(0x1F22, 0x0345, 0x1F92),
    CompositionRecord::new(0x1F23, 0x0345, 0x1F93),
    CompositionRecord::new(0x1F24, 0x0345, 0x1F94),
    CompositionRecord::new(0x1F25, 0x0345, 0x1F95),
    CompositionRecord::new(0x1F26, 0x0345, 0x1F96),
    CompositionRecord::new(0x1F27, 0x0345, 0x1F97),
    CompositionRecord::new(0x1F28, 0x0300, 0x1F2A),
    CompositionRecord::new(0x1F28, 0x0301, 0x1F2C),
    CompositionRecord::new(0x1F28, 0x0342, 0x1F2E),
    CompositionRecord::new(0x1F28, 0x0345, 0x1F98),
    CompositionRecord::new(0x1F29, 0x0300, 0x1F2B),
    CompositionRecord::new(0x1F29, 0x0301, 0x1F2D),
    CompositionRecord::new(0x1F29, 0x0342, 0x1F2F),
    CompositionRecord::new(0x1F29, 0x0345, 0x1F99),
    CompositionRecord::new(0x1F2A, 0x0345, 0x1F9A),
    CompositionRecord::new(0x1F2B, 0x0345, 0x1F9B),
    CompositionRecord::new(0x1F2C, 0x0345, 0x1F9C),
    CompositionRecord::new(0x1F2D, 0x0345, 0x1F9D),
    CompositionRecord::new(0x1F2E, 0x0345, 0x1F9E),
    CompositionRecord::new(0x1F2F, 0x0345, 0x1F9F),
    CompositionRecord::new(0x1F30, 0x0300, 0x1F32),
    CompositionRecord::new(0x1F30, 0x0301, 0x1F34),
    CompositionRecord::new(0x1F30, 0x0342, 0x1F36),
    CompositionRecord::new(0x1F31, 0x0300, 0x1F33),
    CompositionRecord::new(0x1F31, 0x0301, 0x1F35),
    CompositionRecord::new(0x1F31, 0x0342, 0x1F37),
    CompositionRecord::new(0x1F38, 0x0300, 0x1F3A),
    CompositionRecord::new(0x1F38, 0x0301, 0x1F3C),
    CompositionRecord::new(0x1F38, 0x0342, 0x1F3E),
    CompositionRecord::new(0x1F39, 0x0300, 0x1F3B),
    CompositionRecord::new(0x1F39, 0x0301, 0x1F3D),
    CompositionRecord::new(0x1F39, 0x0342, 0x1F3F),
    CompositionRecord::new(0x1F40, 0x0300, 0x1F42),
    CompositionRecord::new(0x1F40, 0x0301, 0x1F44),
    CompositionRecord::new(0x1F41, 0x0300, 0x1F43),
    CompositionRecord::new(0x1F41, 0x0301, 0x1F45),
    CompositionRecord::new(0x1F48, 0x0300, 0x1F4A),
    CompositionRecord::new(0x1F48, 0x0301, 0x1F4C),
    CompositionRecord::new(0x1F49, 0x0300, 0x1F4B),
    CompositionRecord::new(0x1F49, 0x0301, 0x1F4D),
    CompositionRecord::new(0x1F50, 0x0300, 0x1F52),
    CompositionRecord::new(0x1F50, 0x0301, 0x1F54),
    CompositionRecord::new(0x1F50, 0x0342, 0x1F56),
    CompositionRecord::new(0x1F51, 0x0300, 0x1F53),
    CompositionRecord::new(0x1F51, 0x0301, 0x1F55),
    CompositionRecord::new(0x1F51, 0x0342, 0x1F57),
    CompositionRecord::new(0x1F59, 0x0300, 0x1F5B),
    CompositionRecord::new(0x1F59, 0x0301, 0x1F5D),
    CompositionRecord::new(0x1F59, 0x0342, 0x1F5F),
    CompositionRecord::new(0x1F60, 0x0300, 0x1F62),
    CompositionRecord::new(0x1F60, 0x0301, 0x1F64),
    CompositionRecord::new(0x1F60, 0x0342, 0x1F66),
    CompositionRecord::new(0x1F60, 0x0345, 0x1FA0),
    CompositionRecord::new(0x1F61, 0x0300, 0x1F63),
    CompositionRecord::new(0x1F61, 0x0301, 0x1F65),
    CompositionRecord::new(0x1F61, 0x0342, 0x1F67),
    CompositionRecord::new(0x1F61, 0x0345, 0x1FA1),
    CompositionRecord::new(0x1F62, 0x0345, 0x1FA2),
    CompositionRecord::new(0x1F63, 0x0345, 0x1FA3),
    CompositionRecord::new(0x1F64, 0x0345, 0x1FA4),
    CompositionRecord::new(0x1F65, 0x0345, 0x1FA5),
    CompositionRecord::new(0x1F66, 0x0345, 0x1FA6),
    CompositionRecord::new(0x1F67, 0x0345, 0x1FA7),
    CompositionRecord::new(0x1F68, 0x0300, 0x1F6A),
    CompositionRecord::new(0x1F68, 0x0301, 0x1F6C),
    CompositionRecord::new(0x1F68, 0x0342, 0x1F6E),
    CompositionRecord::new(0x1F68, 0x0345, 0x1FA8),
    CompositionRecord::new(0x1F69, 0x0300, 0x1F6B),
    CompositionRecord::new(0x1F69, 0x0301, 0x1F6D),
    CompositionRecord::new(0x1F69, 0x0342, 0x1F6F),
    CompositionRecord::new(0x1F69, 0x0345, 0x1FA9),
    CompositionRecord::new(0x1F6A, 0x0345, 0x1FAA),
    CompositionRecord::new(0x1F6B, 0x0345, 0x1FAB),
    CompositionRecord::new(0x1F6C, 0x0345, 0x1FAC),
    CompositionRecord::new(0x1F6D, 0x0345, 0x1FAD),
    CompositionRecord::new(0x1F6E, 0x0345, 0x1FAE),
    CompositionRecord::new(0x1F6F, 0x0345, 0x1FAF),
    CompositionRecord::new(0x1F70, 0x0345, 0x1FB2),
    CompositionRecord::new(0x1F74, 0x0345, 0x1FC2),
    CompositionRecord::new(0x1F7C, 0x0345, 0x1FF2),
    CompositionRecord::new(0x1FB6, 0x0345, 0x1FB7),
    CompositionRecord::new(0x1FBF, 0x0300, 0x1FCD),
    CompositionRecord::new(0x1FBF, 0x0301, 0x1FCE),
    CompositionRecord::new(0x1FBF, 0x0342, 0x1FCF),
    CompositionRecord::new(0x1FC6, 0x0345, 0x1FC7),
    CompositionRecord::new(0x1FF6, 0x0345, 0x1FF7),
    CompositionRecord::new(0x1FFE, 0x0300, 0x1FDD),
    CompositionRecord::new(0x1FFE, 0x0301, 0x1FDE),
    CompositionRecord::new(0x1FFE, 0x0342, 0x1FDF),
    CompositionRecord::new(0x2190, 0x0338, 0x219A),
    CompositionRecord::new(0x2192, 0x0338, 0x219B),
    CompositionRecord::new(0x2194, 0x0338, 0x21AE),
    CompositionRecord::new(0x21D0, 0x0338, 0x21CD),
    CompositionRecord::new(0x21D2, 0x0338, 0x21CF),
    CompositionRecord::new(0x21D4, 0x0338, 0x21CE),
    CompositionRecord::new(0x2203, 0x0338, 0x2204),
    CompositionRecord::new(0x2208, 0x0338, 0x2209),
    CompositionRecord::new(0x220B, 0x0338, 0x220C),
    CompositionRecord::new(0x2223, 0x0338, 0x2224),
    CompositionRecord::new(0x2225, 0x0338, 0x2226),
    CompositionRecord::new(0x223C, 0x0338, 0x2241),
    CompositionRecord::new(0x2243, 0x0338, 0x2244),
    CompositionRecord::new(0x2245, 0x0338, 0x2247),
    CompositionRecord::new(0x2248, 0x0338, 0x2249),
    CompositionRecord::new(0x224D, 0x0338, 0x226D),
    CompositionRecord::new(0x2261, 0x0338, 0x2262),
    CompositionRecord::new(0x2264, 0x0338, 0x2270),
    CompositionRecord::new(0x2265, 0x0338, 0x2271),
    CompositionRecord::new(0x2272, 0x0338, 0x2274),
    CompositionRecord::new(0x2273, 0x0338, 0x2275),
    CompositionRecord::new(0x2276, 0x0338, 0x2278),
    CompositionRecord::new(0x2277, 0x0338, 0x2279),
    CompositionRecord::new(0x227A, 0x0338, 0x2280),
    CompositionRecord::new(0x227B, 0x0338, 0x2281),
    CompositionRecord::new(0x227C, 0x0338, 0x22E0),
    CompositionRecord::new(0x227D, 0x0338, 0x22E1),
    CompositionRecord::new(0x2282, 0x0338, 0x2284),
    CompositionRecord::new(0x2283, 0x0338, 0x2285),
    CompositionRecord::new(0x2286, 0x0338, 0x2288),
    CompositionRecord::new(0x2287, 0x0338, 0x2289),
    CompositionRecord::new(0x2291, 0x0338, 0x22E2),
    CompositionRecord::new(0x2292, 0x0338, 0x22E3),
    CompositionRecord::new(0x22A2, 0x0338, 0x22AC),
    CompositionRecord::new(0x22A8, 0x0338, 0x22AD),
    CompositionRecord::new(0x22A9, 0x0338, 0x22AE),
    CompositionRecord::new(0x22AB, 0x0338, 0x22AF),
    CompositionRecord::new(0x22B2, 0x0338, 0x22EA),
    CompositionRecord::new(0x22B3, 0x0338, 0x22EB),
    CompositionRecord::new(0x22B4, 0x0338, 0x22EC),
    CompositionRecord::new(0x22B5, 0x0338, 0x22ED),
    CompositionRecord::new(0x2ADD, 0x0338, 0x2ADC),
    CompositionRecord::new(0x3046, 0x3099, 0x3094),
    CompositionRecord::new(0x304B, 0x3099, 0x304C),
    CompositionRecord::new(0x304D, 0x3099, 0x304E),
    CompositionRecord::new(0x304F, 0x3099, 0x3050),
    CompositionRecord::new(0x3051, 0x3099, 0x3052),
    CompositionRecord::new(0x3053, 0x3099, 0x3054),
    CompositionRecord::new(0x3055, 0x3099, 0x3056),
    CompositionRecord::new(0x3057, 0x3099, 0x3058),
    CompositionRecord::new(0x3059, 0x3099, 0x305A),
    CompositionRecord::new(0x305B, 0x3099, 0x305C),
    CompositionRecord::new(0x305D, 0x3099, 0x305E),
    CompositionRecord::new(0x305F, 0x3099, 0x3060),
    CompositionRecord::new(0x3061, 0x3099, 0x3062),
    CompositionRecord::new(0x3064, 0x3099, 0x3065),
    CompositionRecord::new(0x3066, 0x3099, 0x3067),
    CompositionRecord::new(0x3068, 0x3099, 0x3069),
    CompositionRecord::new(0x306F, 0x3099, 0x3070),
    CompositionRecord::new(0x306F, 0x309A, 0x3071),
    CompositionRecord::new(0x3072, 0x3099, 0x3073),
    CompositionRecord::new(0x3072, 0x309A, 0x3074),
    CompositionRecord::new(0x3075, 0x3099, 0x3076),
    CompositionRecord::new(0x3075, 0x309A, 0x3077),
    CompositionRecord::new(0x3078, 0x3099, 0x3079),
    CompositionRecord::new(0x3078, 0x309A, 0x307A),
    CompositionRecord::new(0x307B, 0x3099, 0x307C),
    CompositionRecord::new(0x307B, 0x309A, 0x307D),
    CompositionRecord::new(0x309D, 0x3099, 0x309E),
    CompositionRecord::new(0x30A6, 0x3099, 0x30F4),
    CompositionRecord::new(0x30AB, 0x3099, 0x30AC),
    CompositionRecord::new(0x30AD, 0x3099, 0x30AE),
    CompositionRecord::new(0x30AF, 0x3099, 0x30B0),
    CompositionRecord::new(0x30B1, 0x3099, 0x30B2),
    CompositionRecord::new(0x30B3, 0x3099, 0x30B4),
    CompositionRecord::new(0x30B5, 0x3099, 0x30B6),
    CompositionRecord::new(0x30B7, 0x3099, 0x30B8),
    CompositionRecord::new(0x30B9, 0x3099, 0x30BA),
    CompositionRecord::new(0x30BB, 0x3099, 0x30BC),
    CompositionRecord::new(0x30BD, 0x3099, 0x30BE),
    CompositionRecord::new(0x30BF, 0x3099, 0x30C0),
    CompositionRecord::new(0x30C1, 0x3099, 0x30C2),
    CompositionRecord::new(0x30C4, 0x3099, 0x30C5),
    CompositionRecord::new(0x30C6, 0x3099, 0x30C7),
    CompositionRecord::new(0x30C8, 0x3099, 0x30C9),
    CompositionRecord::new(0x30CF, 0x3099, 0x30D0),
    CompositionRecord::new(0x30CF, 0x309A, 0x30D1),
    CompositionRecord::new(0x30D2, 0x3099, 0x30D3),
    CompositionRecord::new(0x30D2, 0x309A, 0x30D4),
    CompositionRecord::new(0x30D5, 0x3099, 0x30D6),
    CompositionRecord::new(0x30D5, 0x309A, 0x30D7),
    CompositionRecord::new(0x30D8, 0x3099, 0x30D9),
    CompositionRecord::new(0x30D8, 0x309A, 0x30DA),
    CompositionRecord::new(0x30DB, 0x3099, 0x30DC),
    CompositionRecord::new(0x30DB, 0x309A, 0x30DD),
    CompositionRecord::new(0x30EF, 0x3099, 0x30F7),
    CompositionRecord::new(0x30F0, 0x3099, 0x30F8),
    CompositionRecord::new(0x30F1, 0x3099, 0x30F9),
    CompositionRecord::new(0x30F2, 0x3099, 0x30FA),
    CompositionRecord::new(0x30FD, 0x3099, 0x30FE),
    CompositionRecord::new(0xFB49, 0x05C1, 0xFB2C),
    CompositionRecord::new(0xFB49, 0x05C2, 0xFB2D),
    CompositionRecord::new(0x11099, 0x110BA, 0x1109A),
    CompositionRecord::new(0x1109B, 0x110BA, 0x1109C),
    CompositionRecord::new(0x110A5, 0x110BA, 0x110AB),
    CompositionRecord::new(0x11131, 0x11127, 0x1112E),
    CompositionRecord::new(0x11132, 0x11127, 0x1112F),
    CompositionRecord::new(0x11347, 0x1133E, 0x1134B),
    CompositionRecord::new(0x11347, 0x11357, 0x1134C),
    CompositionRecord::new(0x114B9, 0x114B0, 0x114BC),
    CompositionRecord::new(0x114B9, 0x114BA, 0x114BB),
    CompositionRecord::new(0x114B9, 0x114BD, 0x114BE),
    CompositionRecord::new(0x115B8, 0x115AF, 0x115BA),
    CompositionRecord::new(0x115B9, 0x115AF, 0x115BB),
    CompositionRecord::new(0x11935, 0x11930, 0x11938),
    CompositionRecord::new(0x1D157, 0x1D165, 0x1D15E),
    CompositionRecord::new(0x1D158, 0x1D165, 0x1D15F),
    CompositionRecord::new(0x1D15F, 0x1D16E, 0x1D160),
    CompositionRecord::new(0x1D15F, 0x1D16F, 0x1D161),
    CompositionRecord::new(0x1D15F, 0x1D170, 0x1D162),
    CompositionRecord::new(0x1D15F, 0x1D171, 0x1D163),
    CompositionRecord::new(0x1D15F, 0x1D172, 0x1D164),
    CompositionRecord::new(0x1D1B9, 0x1D165, 0x1D1BB),
    CompositionRecord::new(0x1D1BA, 0x1D165, 0x1D1BC),
    CompositionRecord::new(0x1D1BB, 0x1D16E, 0x1D1BD),
    CompositionRecord::new(0x1D1BB, 0x1D16F, 0x1D1BF),
    CompositionRecord::new(0x1D1BC, 0x1D16E, 0x1D1BE),
    CompositionRecord::new(0x1D1BC, 0x1D16F, 0x1D1C0),
];

pub const COMPOSITION_EXCLUSIONS: &[RangeRecord<()>] = &[
    RangeRecord::new(0x0340, 0x0341, ()),
    RangeRecord::new(0x0343, 0x0344, ()),
    RangeRecord::new(0x0374, 0x0374, ()),
    RangeRecord::new(0x037E, 0x037E, ()),
    RangeRecord::new(0x0387, 0x0387, ()),
    RangeRecord::new(0x0958, 0x095F, ()),
    RangeRecord::new(0x09DC, 0x09DD, ()),
    RangeRecord::new(0x09DF, 0x09DF, ()),
    RangeRecord::new(0x0A33, 0x0A33, ()),
    RangeRecord::new(0x0A36, 0x0A36, ()),
    RangeRecord::new(0x0A59, 0x0A5B, ()),
    RangeRecord::new(0x0A5E, 0x0A5E, ()),
    RangeRecord::new(0x0B5C, 0x0B5D, ()),
    RangeRecord::new(0x0F43, 0x0F43, ()),
    RangeRecord::new(0x0F4D, 0x0F4D, ()),
    RangeRecord::new(0x0F52, 0x0F52, ()),
    RangeRecord::new(0x0F57, 0x0F57, ()),
    RangeRecord::new(0x0F5C, 0x0F5C, ()),
    RangeRecord::new(0x0F69, 0x0F69, ()),
    RangeRecord::new(0x0F73, 0x0F73, ()),
    RangeRecord::new(0x0F75, 0x0F76, ()),
    RangeRecord::new(0x0F78, 0x0F78, ()),
    RangeRecord::new(0x0F81, 0x0F81, ()),
    RangeRecord::new(0x0F93, 0x0F93, ()),
    RangeRecord::new(0x0F9D, 0x0F9D, ()),
    RangeRecord::new(0x0FA2, 0x0FA2, ()),
    RangeRecord::new(0x0FA7, 0x0FA7, ()),
    RangeRecord::new(0x0FAC, 0x0FAC, ()),
    RangeRecord::new(0x0FB9, 0x0FB9, ()),
    RangeRecord::new(0x1F71, 0x1F71, ()),
    RangeRecord::new(0x1F73, 0x1F73, ()),
    RangeRecord::new(0x1F75, 0x1F75, ()),
    RangeRecord::new(0x1F77, 0x1F77, ()),
    RangeRecord::new(0x1F79, 0x1F79, ()),
    RangeRecord::new(0x1F7B, 0x1F7B, ()),
    RangeRecord::new(0x1F7D, 0x1F7D, ()),
    RangeRecord::new(0x1FBB, 0x1FBB, ()),
    RangeRecord::new(0x1FBE, 0x1FBE, ()),
    RangeRecord::new(0x1FC9, 0x1FC9, ()),
    RangeRecord::new(0x1FCB, 0x1FCB, ()),
    RangeRecord::new(0x1FD3, 0x1FD3, ()),
    RangeRecord::new(0x1FDB, 0x1FDB, ()),
    RangeRecord::new(0x1FE3, 0x1FE3, ()),
    RangeRecord::new(0x1FEB, 0x1FEB, ()),
    RangeRecord::new(0x1FEE, 0x1FEF, ()),
    RangeRecord::new(0x1FF9, 0x1FF9, ()),
    RangeRecord::new(0x1FFB, 0x1FFB, ()),
    RangeRecord::new(0x1FFD, 0x1FFD, ()),
    RangeRecord::new(0x2000, 0x2001, ()),
    RangeRecord::new(0x2126, 0x2126, ()),
    RangeRecord::new(0x212A, 0x212B, ()),
    RangeRecord::new(0x2329, 0x232A, ()),
    RangeRecord::new(0x2ADC, 0x2ADC, ()),
    RangeRecord::new(0xF900, 0xFA0D, ()),
    RangeRecord::new(0xFA10, 0xFA10, ()),
    RangeRecord::new(0xFA12, 0xFA12, ()),
    RangeRecord::new(0xFA15, 0xFA1E, ()),
    RangeRecord::new(0xFA20, 0xFA20, ()),
    RangeRecord::new(0xFA22, 0xFA22, ()),
    RangeRecord::new(0xFA25, 0xFA26, ()),
    RangeRecord::new(0xFA2A, 0xFA6D, ()),
    RangeRecord::new(0xFA70, 0xFAD9, ()),
    RangeRecord::new(0xFB1D, 0xFB1D, ()),
    RangeRecord::new(0xFB1F, 0xFB1F, ()),
    RangeRecord::new(0xFB2A, 0xFB36, ()),
    RangeRecord::new(0xFB38, 0xFB3C, ()),
    RangeRecord::new(0xFB3E, 0xFB3E, ()),
    RangeRecord::new(0xFB40, 0xFB41, ()),
    RangeRecord::new(0xFB43, 0xFB44, ()),
    RangeRecord::new(0xFB46, 0xFB4E, ()),
    RangeRecord::new(0x1D15E, 0x1D164, ()),
    RangeRecord::new(0x1D1BB, 0x1D1C0, ()),
    RangeRecord::new(0x2F800, 0x2FA1D, ()),
];

pub const UPPERCASE: &[CaseRecord<'static>] = &[
    CaseRecord::new(0x0061, &[0x0041]),
    CaseRecord::new(0x0062, &[0x0042]),
    CaseRecord::new(0x0063, &[0x0043]),
    CaseRecord::new(0x0064, &[0x0044]),
    CaseRecord::new(0x0065, &[0x0045]),
    CaseRecord::new(0x0066, &[0x0046]),
    CaseRecord::new(0x0067, &[0x0047]),
    CaseRecord::new(0x0068, &[0x0048]),
    CaseRecord::new(0x0069, &[0x0049]),
    CaseRecord::new(0x006A, &[0x004A]),
    CaseRecord::new(0x006B, &[0x004B]),
    CaseRecord::new(0x006C, &[0x004C]),
    CaseRecord::new(0x006D, &[0x004D]),
    CaseRecord::new(0x006E, &[0x004E]),
    CaseRecord::new(0x006F, &[0x004F]),
    CaseRecord::new(0x0070, &[0x0050]),
    CaseRecord::new(0x0071, &[0x0051]),
    CaseRecord::new(0x0072, &[0x0052]),
    CaseRecord::new(0x0073, &[0x0053]),
    CaseRecord::new(0x0074, &[0x0054]),
    CaseRecord::new(0x0075, &[0x0055]),
    CaseRecord::new(0x0076, &[0x0056]),
    CaseRecord::new(0x0077, &[0x0057]),
    CaseRecord::new(0x0078, &[0x0058]),
    CaseRecord::new(0x0079, &[0x0059]),
    CaseRecord::new(0x007A, &[0x005A]),
    CaseRecord::new(0x00B5, &[0x039C]),
    CaseRecord::new(0x00DF, &[0x0053, 0x0053]),
    CaseRecord::new(0x00E0, &[0x00C0]),
    CaseRecord::new(0x00E1, &[0x00C1]),
    CaseRecord::new(0x00E2, &[0x00C2]),
    CaseRecord::new(0x00E3, &[0x00C3]),
    CaseRecord::new(0x00E4, &[0x00C4]),
    CaseRecord::new(0x00E5, &[0x00C5]),
    CaseRecord::new(0x00E6, &[0x00C6]),
    CaseRecord::new(0x00E7, &[0x00C7]),
    CaseRecord::new(0x00E8, &[0x00C8]),
    CaseRecord::new(0x00E9, &[0x00C9]),
    CaseRecord::new(0x00EA, &[0x00CA]),
    CaseRecord::new(0x00EB, &[0x00CB]),
    CaseRecord::new(0x00EC, &[0x00CC]),
    CaseRecord::new(0x00ED, &[0x00CD]),
    CaseRecord::new(0x00EE, &[0x00CE]),
    CaseRecord::new(0x00EF, &[0x00CF]),
    CaseRecord::new(0x00F0, &[0x00D0]),
    CaseRecord::new(0x00F1, &[0x00D1]),
    CaseRecord::new(0x00F2, &[0x00D2]),
    CaseRecord::new(0x00F3, &[0x00D3]),
    CaseRecord::new(0x00F4, &[0x00D4]),
    CaseRecord::new(0x00F5, &[0x00D5]),
    CaseRecord::new(0x00F6, &[0x00D6]),
    CaseRecord::new(0x00F8, &[0x00D8]),
    CaseRecord::new(0x00F9, &[0x00D9]),
    CaseRecord::new(0x00FA, &[0x00DA]),
    CaseRecord::new(0x00FB, &[0x00DB]),
    CaseRecord::new(0x00FC, &[0x00DC]),
    CaseRecord::new(0x00FD, &[0x00DD]),
    CaseRecord::new(0x00FE, &[0x00DE]),
    CaseRecord::new(0x00FF, &[0x0178]),
    CaseRecord::new(0x0101, &[0x0100]),
    CaseRecord::new(0x0103, &[0x0102]),
    CaseRecord::new(0x0105, &[0x0104]),
    CaseRecord::new(0x0107, &[0x0106]),
    CaseRecord::new(0x0109, &[0x0108]),
    CaseRecord::new(0x010B, &[0x010A]),
    CaseRecord::new(0x010D, &[0x010C]),
    CaseRecord::new(0x010F, &[0x010E]),
    CaseRecord::new(0x0111, &[0x0110]),
    CaseRecord::new(0x0113, &[0x0112]),
    CaseRecord::new(0x0115, &[0x0114]),
    CaseRecord::new(0x0117, &[0x0116]),
    CaseRecord::new(0x0119, &[0x0118]),
    CaseRecord::new(0x011B, &[0x011A]),
    CaseRecord::new(0x011D, &[0x011C]),
    CaseRecord::new(0x011F, &[0x011E]),
    CaseRecord::new(0x0121, &[0x0120]),
    CaseRecord::new(0x0123, &[0x0122]),
    CaseRecord::new(0x0125, &[0x0124]),
    CaseRecord::new(0x0127, &[0x0126]),
    CaseRecord::new(0x0129, &[0x0128]),
    CaseRecord::new(0x012B, &[0x012A]),
    CaseRecord::new(0x012D, &[0x012C]),
    CaseRecord::new(0x012F, &[0x012E]),
    CaseRecord::new(0x0131, &[0x0049]),
    CaseRecord::new(0x0133, &[0x0132]),
    CaseRecord::new(0x0135, &[0x0134]),
    CaseRecord::new(0x0137, &[0x0136]),
    CaseRecord::new(0x013A, &[0x0139]),
    CaseRecord::new(0x013C, &[0x013B]),
    CaseRecord::new(0x013E, &[0x013D]),
    CaseRecord::new(0x0140, &[0x013F]),
    CaseRecord::new(0x0142, &[0x0141]),
    CaseRecord::new(0x0144, &[0x0143]),
    CaseRecord::new(0x0146, &[0x0145]),
    CaseRecord::new(0x0148, &[0x0147]),
    CaseRecord::new(0x0149, &[0x02BC, 0x004E]),
    CaseRecord::new(0x014B, &[0x014A]),
    CaseRecord::new(0x014D, &[0x014C]),
    CaseRecord::new(0x014F, &[0x014E]),
    CaseRecord::new(0x0151, &[0x0150]),
    CaseRecord::new(0x0153, &[0x0152]),
    CaseRecord::new(0x0155, &[0x0154]),
    CaseRecord::new(0x0157, &[0x0156]),
    CaseRecord::new(0x0159, &[0x0158]),
    CaseRecord::new(0x015B, &[0x015A]),
    CaseRecord::new(0x015D, &[0x015C]),
    CaseRecord::new(0x015F, &[0x015E]),
    CaseRecord::new(0x0161, &[0x0160]),
    CaseRecord::new(0x0163, &[0x0162]),
    CaseRecord::new(0x0165, &[0x0164]),
    CaseRecord::new(0x0167, &[0x0166]),
    CaseRecord::new(0x0169, &[0x0168]),
    CaseRecord::new(0x016B, &[0x016A]),
    CaseRecord::new(0x016D, &[0x016C]),
    CaseRecord::new(0x016F, &[0x016E]),
    CaseRecord::new(0x0171, &[0x0170]),
    CaseRecord::new(0x0173, &[0x0172]),
    CaseRecord::new(0x0175, &[0x0174]),
    CaseRecord::new(0x0177, &[0x0176]),
    CaseRecord::new(0x017A, &[0x0179]),
    CaseRecord::new(0x017C, &[0x017B]),
    CaseRecord::new(0x017E, &[0x017D]),
    CaseRecord::new(0x017F, &[0x0053]),
    CaseRecord::new(0x0180, &[0x0243]),
    CaseRecord::new(0x0183, &[0x0182]),
    CaseRecord::new(0x0185, &[0x0184]),
    CaseRecord::new(0x0188, &[0x0187]),
    CaseRecord::new(0x018C, &[0x018B]),
    CaseRecord::new(0x0192, &[0x0191]),
    CaseRecord::new(0x0195, &[0x01F6]),
    CaseRecord::new(0x0199, &[0x0198]),
    CaseRecord::new(0x019A, &[0x023D]),
    CaseRecord::new(0x019E, &[0x0220]),
    CaseRecord::new(0x01A1, &[0x01A0]),
    CaseRecord::new(0x01A3, &[0x01A2]),
    CaseRecord::new(0x01A5, &[0x01A4]),
    CaseRecord::new(0x01A8, &[0x01A7]),
    CaseRecord::new(0x01AD, &[0x01AC]),
    CaseRecord::new(0x01B0, &[0x01AF]),
    CaseRecord::new(0x01B4, &[0x01B3]),
    CaseRecord::new(0x01B6, &[0x01B5]),
    CaseRecord::new(0x01B9, &[0x01B8]),
    CaseRecord::new(0x01BD, &[0x01BC]),
    CaseRecord::new(0x01BF, &[0x01F7]),
    CaseRecord::new(0x01C5, &[0x01C4]),
    CaseRecord::new(0x01C6, &[0x01C4]),
    CaseRecord::new(0x01C8, &[0x01C7]),
    CaseRecord::new(0x01C9, &[0x01C7]),
    CaseRecord::new(0x01CB, &[0x01CA]),
    CaseRecord::new(0x01CC, &[0x01CA]),
    CaseRecord::new(0x01CE, &[0x01CD]),
    CaseRecord::new(0x01D0, &[0x01CF]),
    CaseRecord::new(0x01D2, &[0x01D1]),
    CaseRecord::new(0x01D4, &[0x01D3]),
    CaseRecord::new(0x01D6, &[0x01D5]),
    CaseRecord::new(0x01D8, &[0x01D7]),
    CaseRecord::new(0x01DA, &[0x01D9]),
    CaseRecord::new(0x01DC, &[0x01DB]),
    CaseRecord::new(0x01DD, &[0x018E]),
    CaseRecord::new(0x01DF, &[0x01DE]),
    CaseRecord::new(0x01E1, &[0x01E0]),
    CaseRecord::new(0x01E3, &[0x01E2]),
    CaseRecord::new(0x01E5, &[0x01E4]),
    CaseRecord::new(0x01E7, &[0x01E6]),
    CaseRecord::new(0x01E9, &[0x01E8]),
    CaseRecord::new(0x01EB, &[0x01EA]),
    CaseRecord::new(0x01ED, &[0x01EC]),
    CaseRecord::new(0x01EF, &[0x01EE]),
    CaseRecord::new(0x01F0, &[0x004A, 0x030C]),
    CaseRecord::new(0x01F2, &[0x01F1]),
    CaseRecord::new(0x01F3, &[0x01F1]),
    CaseRecord::new(0x01F5, &[0x01F4]),
    CaseRecord::new(0x01F9, &[0x01F8]),
    CaseRecord::new(0x01FB, &[0x01FA]),
    CaseRecord::new(0x01FD, &[0x01FC]),
    CaseRecord::new(0x01FF, &[0x01FE]),
    CaseRecord::new(0x0201, &[0x0200]),
    CaseRecord::new(0x0203, &[0x0202]),
    CaseRecord::new(0x0205, &[0x0204]),
    CaseRecord::new(0x0207, &[0x0206]),
    CaseRecord::new(0x0209, &[0x0208]),
    CaseRecord::new(0x020B, &[0x020A]),
    CaseRecord::new(0x020D, &[0x020C]),
    CaseRecord::new(0x020F, &[0x020E]),
    CaseRecord::new(0x0211, &[0x0210]),
    CaseRecord::new(0x0213, &[0x0212]),
    CaseRecord::new(0x0215, &[0x0214]),
    CaseRecord::new(0x0217, &[0x0216]),
    CaseRecord::new(0x0219, &[0x0218]),
    CaseRecord::new(0x021B, &[0x021A]),
    CaseRecord::new(0x021D, &[0x021C]),
    CaseRecord::new(0x021F, &[0x021E]),
    CaseRecord::new(0x0223, &[0x0222]),
    CaseRecord::new(0x0225, &[0x0224]),
    CaseRecord::new(0x0227, &[0x0226]),
    CaseRecord::new(0x0229, &[0x0228]),
    CaseRecord::new(0x022B, &[0x022A]),
    CaseRecord::new(0x022D, &[0x022C]),
    CaseRecord::new(0x022F, &[0x022E]),
    CaseRecord::new(0x0231, &[0x0230]),
    CaseRecord::new(0x0233, &[0x0232]),
    CaseRecord::new(0x023C, &[0x023B]),
    CaseRecord::new(0x023F, &[0x2C7E]),
    CaseRecord::new(0x0240, &[0x2C7F]),
    CaseRecord::new(0x0242, &[0x0241]),
    CaseRecord::new(0x0247, &[0x0246]),
    CaseRecord::new(0x0249, &[0x0248]),
    CaseRecord::new(0x024B, &[0x024A]),
    CaseRecord::new(0x024D, &[0x024C]),
    CaseRecord::new(0x024F, &[0x024E]),
    CaseRecord::new(0x0250, &[0x2C6F]),
    CaseRecord::new(0x0251, &[0x2C6D]),
    CaseRecord::new(0x0252, &[0x2C70]),
    CaseRecord::new(0x0253, &[0x0181]),
    CaseRecord::new(0x0254, &[0x0186]),
    CaseRecord::new(0x0256, &[0x0189]),
    CaseRecord::new(0x0257, &[0x018A]),
    CaseRecord::new(0x0259, &[0x018F]),
    CaseRecord::new(0x025B, &[0x0190]),
    CaseRecord::new(0x025C, &[0xA7AB]),
    CaseRecord::new(0x0260, &[0x0193]),
    CaseRecord::new(0x0261, &[0xA7AC]),
    CaseRecord::new(0x0263, &[0x0194]),
    CaseRecord::new(0x0265, &[0xA78D]),
    CaseRecord::new(0x0266, &[0xA7AA]),
    CaseRecord::new(0x0268, &[0x0197]),
    CaseRecord::new(0x0269, &[0x0196]),
    CaseRecord::new(0x026A, &[0xA7AE]),
    CaseRecord::new(0x026B, &[0x2C62]),
    CaseRecord::new(0x026C, &[0xA7AD]),
    CaseRecord::new(0x026F, &[0x019C]),
    CaseRecord::new(0x0271, &[0x2C6E]),
    CaseRecord::new(0x0272, &[0x019D]),
    CaseRecord::new(0x0275, &[0x019F]),
    CaseRecord::new(0x027D, &[0x2C64]),
    CaseRecord::new(0x0280, &[0x01A6]),
    CaseRecord::new(0x0282, &[0xA7C5]),
    CaseRecord::new(0x0283, &[0x01A9]),
    CaseRecord::new(0x0287, &[0xA7B1]),
    CaseRecord::new(0x0288, &[0x01AE]),
    CaseRecord::new(0x0289, &[0x0244]),
    CaseRecord::new(0x028A, &[0x01B1]),
    CaseRecord::new(0x028B, &[0x01B2]),
    CaseRecord::new(0x028C, &[0x0245]),
    CaseRecord::new(0x0292, &[0x01B7]),
    CaseRecord::new(0x029D, &[0xA7B2]),
    CaseRecord::new(0x029E, &[0xA7B0]),
    CaseRecord::new(0x0345, &[0x0399]),
    CaseRecord::new(0x0371, &[0x0370]),
    CaseRecord::new(0x0373, &[0x0372]),
    CaseRecord::new(0x0377, &[0x0376]),
    CaseRecord::new(0x037B, &[0x03FD]),
    CaseRecord::new(0x037C, &[0x03FE]),
    CaseRecord::new(0x037D, &[0x03FF]),
    CaseRecord::new(0x0390, &[0x0399, 0x0308, 0x0301]),
    CaseRecord::new(0x03AC, &[0x0386]),
    CaseRecord::new(0x03AD, &[0x0388]),
    CaseRecord::new(0x03AE, &[0x0389]),
    CaseRecord::new(0x03AF, &[0x038A]),
    CaseRecord::new(0x03B0, &[0x03A5, 0x0308, 0x0301]),
    CaseRecord::new(0x03B1, &[0x0391]),
    CaseRecord::new(0x03B2, &[0x0392]),
    CaseRecord::new(0x03B3, &[0x0393]),
    CaseRecord::new(0x03B4, &[0x0394]),
    CaseRecord::new(0x03B5, &[0x0395]),
    CaseRecord::new(0x03B6, &[0x0396]),
    CaseRecord::new(0x03B7, &[0x0397]),
    CaseRecord::new(0x03B8, &[0x0398]),
    CaseRecord::new(0x03B9, &[0x0399]),
    CaseRecord::new(0x03BA, &[0x039A]),
    CaseRecord::new(0x03BB, &[0x039B]),
    CaseRecord::new(0x03BC, &[0x039C]),
    CaseRecord::new(0x03BD, &[0x039D]),
    CaseRecord::new(0x03BE, &[0x039E]),
    CaseRecord::new(0x03BF, &[0x039F]),
    CaseRecord::new(0x03C0, &[0x03A0]),
    CaseRecord::new(0x03C1, &[0x03A1]),
    CaseRecord::new(0x03C2, &[0x03A3]),
    CaseRecord::new(0x03C3, &[0x03A3]),
    CaseRecord::new(0x03C4, &[0x03A4]),
    CaseRecord::new(0x03C5, &[0x03A5]),
    CaseRecord::new(0x03C6, &[0x03A6]),
    CaseRecord::new(0x03C7, &[0x03A7]),
    CaseRecord::new(0x03C8, &[0x03A8]),
    CaseRecord::new(0x03C9, &[0x03A9]),
    CaseRecord::new(0x03CA, &[0x03AA]),
    CaseRecord::new(0x03CB, &[0x03AB]),
    CaseRecord::new(0x03CC, &[0x038C]),
    CaseRecord::new(0x03CD, &[0x038E]),
    CaseRecord::new(0x03CE, &[0x038F]),
    CaseRecord::new(0x03D0, &[0x0392]),
    CaseRecord::new(0x03D1, &[0x0398]),
    CaseRecord::new(0x03D5, &[0x03A6]),
    CaseRecord::new(0x03D6, &[0x03A0]),
    CaseRecord::new(0x03D7, &[0x03CF]),
    CaseRecord::new(0x03D9, &[0x03D8]),
    CaseRecord::new(0x03DB, &[0x03DA]),
    CaseRecord::new(0x03DD, &[0x03DC]),
    CaseRecord::new(0x03DF, &[0x03DE]),
    CaseRecord::new(0x03E1, &[0x03E0]),
    CaseRecord::new(0x03E3, &[0x03E2]),
    CaseRecord::new(0x03E5, &[0x03E4]),
    CaseRecord::new(0x03E7, &[0x03E6]),
    CaseRecord::new(0x03E9, &[0x03E8]),
    CaseRecord::new(0x03EB, &[0x03EA]),
    CaseRecord::new(0x03ED, &[0x03EC]),
    CaseRecord::new(0x03EF, &[0x03EE]),
    CaseRecord::new(0x03F0, &[0x039A]),
    CaseRecord::new(0x03F1, &[0x03A1]),
    CaseRecord::new(0x03F2, &[0x03F9]),
    CaseRecord::new(0x03F3, &[0x037F]),
    CaseRecord::new(0x03F5, &[0x0395]),
    CaseRecord::new(0x03F8, &[0x03F7]),
    CaseRecord::new(0x03FB, &[0x03FA]),
    CaseRecord::new(0x0430, &[0x0410]),
    CaseRecord::new(0x0431, &[0x0411]),
    CaseRecord::new(0x0432, &[0x0412]),
    CaseRecord::new(0x0433, &[0x0413]),
    CaseRecord::new(0x0434, &[0x0414]),
    CaseRecord::new(0x0435, &[0x0415]),
    CaseRecord::new(0x0436, &[0x0416]),
    CaseRecord::new(0x0437, &[0x0417]),
    CaseRecord::new(0x0438, &[0x0418]),
    CaseRecord::new(0x0439, &[0x0419]),
    CaseRecord::new(0x043A, &[0x041A]),
    CaseRecord::new(0x043B, &[0x041B]),
    CaseRecord::new(0x043C, &[0x041C]),
    CaseRecord::new(0x043D, &[0x041D]),
    CaseRecord::new(0x043E, &[0x041E]),
    CaseRecord::new(0x043F, &[0x041F]),
    CaseRecord::new(0x0440, &[0x0420]),
    CaseRecord::new(0x0441, &[0x0421]),
    CaseRecord::new(0x0442, &[0x0422]),
    CaseRecord::new(0x0443, &[0x0423]),
    CaseRecord::new(0x0444, &[0x0424]),
    CaseRecord::new(0x0445, &[0x0425]),
    CaseRecord::new(0x0446, &[0x0426]),
    CaseRecord::new(0x0447, &[0x0427]),
    CaseRecord::new(0x0448, &[0x0428]),
    CaseRecord::new(0x0449, &[0x0429]),
    CaseRecord::new(0x044A, &[0x042A]),
    CaseRecord::new(0x044B, &[0x042B]),
    CaseRecord::new(0x044C, &[0x042C]),
    CaseRecord::new(0x044D, &[0x042D]),
    CaseRecord::new(0x044E, &[0x042E]),
    CaseRecord::new(0x044F, &[0x042F]),
    CaseRecord::new(0x0450, &[0x0400]),
    CaseRecord::new(0x0451, &[0x0401]),
    CaseRecord::new(0x0452, &[0x0402]),
    CaseRecord::new(0x0453, &[0x0403]),
    CaseRecord::new(0x0454, &[0x0404]),
    CaseRecord::new(0x0455, &[0x0405]),
    CaseRecord::new(0x0456, &[0x0406]),
    CaseRecord::new(0x0457, &[0x0407]),
    CaseRecord::new(0x0458, &[0x0408]),
    CaseRecord::new(0x0459, &[0x0409]),
    CaseRecord::new(0x045A, &[0x040A]),
    CaseRecord::new(0x045B, &[0x040B]),
    CaseRecord::new(0x045C, &[0x040C]),
    CaseRecord::new(0x045D, &[0x040D]),
    CaseRecord::new(0x045E, &[0x040E]),
    CaseRecord::new(0x045F, &[0x040F]),
    CaseRecord::new(0x0461, &[0x0460]),
    CaseRecord::new(0x0463, &[0x0462]),
    CaseRecord::new(0x0465, &[0x0464]),
    CaseRecord::new(0x0467, &[0x0466]),
    CaseRecord::new(0x0469, &[0x0468]),
    CaseRecord::new(0x046B, &[0x046A]),
    CaseRecord::new(0x046D, &[0x046C]),
    CaseRecord::new(0x046F, &[0x046E]),
    CaseRecord::new(0x0471, &[0x0470]),
    CaseRecord::new(0x0473, &[0x0472]),
    CaseRecord::new(0x0475, &[0x0474]),
    CaseRecord::new(0x0477, &[0x0476]),
    CaseRecord::new(0x0479, &[0x0478]),
    CaseRecord::new(0x047B, &[0x047A]),
    CaseRecord::new(0x047D, &[0x047C]),
    CaseRecord::new(0x047F, &[0x047E]),
    CaseRecord::new(0x0481, &[0x0480]),
    CaseRecord::new(0x048B, &[0x048A]),
    CaseRecord::new(0x048D, &[0x048C]),
    CaseRecord::new(0x048F, &[0x048E]),
    CaseRecord::new(0x0491, &[0x0490]),
    CaseRecord::new(0x0493, &[0x0492]),
    CaseRecord::new(0x0495, &[0x0494]),
    CaseRecord::new(0x0497, &[0x0496]),
    CaseRecord::new(0x0499, &[0x0498]),
    CaseRecord::new(0x049B, &[0x049A]),
    CaseRecord::new(0x049D, &[0x049C]),
    CaseRecord::new(0x049F, &[0x049E]),
    CaseRecord::new(0x04A1, &[0x04A0]),
    CaseRecord::new(0x04A3, &[0x04A2]),
    CaseRecord::new(0x04A5, &[0x04A4]),
    CaseRecord::new(0x04A7, &[0x04A6]),
    CaseRecord::new(0x04A9, &[0x04A8]),
    CaseRecord::new(0x04AB, &[0x04AA]),
    CaseRecord::new(0x04AD, &[0x04AC]),
    CaseRecord::new(0x04AF, &[0x04AE]),
    CaseRecord::new(0x04B1, &[0x04B0]),
    CaseRecord::new(0x04B3, &[0x04B2]),
    CaseRecord::new(0x04B5, &[0x04B4]),
    CaseRecord::new(0x04B7, &[0x04B6]),
    CaseRecord::new(0x04B9, &[0x04B8]),
    CaseRecord::new(0x04BB, &[0x04BA]),
    CaseRecord::new(0x04BD, &[0x04BC]),
    CaseRecord::new(0x04BF, &[0x04BE]),
    CaseRecord::new(0x04C2, &[0x04C1]),
    CaseRecord::new(0x04C4, &[0x04C3]),
    CaseRecord::new(0x04C6, &[0x04C5]),
    CaseRecord::new(0x04C8, &[0x04C7]),
    CaseRecord::new(0x04CA, &[0x04C9]),
    CaseRecord::new(0x04CC, &[0x04CB]),
    CaseRecord::new(0x04CE, &[0x04CD]),
    CaseRecord::new(0x04CF, &[0x04C0]),
    CaseRecord::new(0x04D1, &[0x04D0]),
    CaseRecord::new(0x04D3, &[0x04D2]),
    CaseRecord::new(0x04D5, &[0x04D4]),
    CaseRecord::new(0x04D7, &[0x04D6]),
    CaseRecord::new(0x04D9, &[0x04D8]),
    CaseRecord::new(0x04DB, &[0x04DA]),
    CaseRecord::new(0x04DD, &[0x04DC]),
    CaseRecord::new(0x04DF, &[0x04DE]),
    CaseRecord::new(0x04E1, &[0x04E0]),
    CaseRecord::new(0x04E3, &[0x04E2]),
    CaseRecord::new(0x04E5, &[0x04E4]),
    CaseRecord::new(0x04E7, &[0x04E6]),
    CaseRecord::new(0x04E9, &[0x04E8]),
    CaseRecord::new(0x04EB, &[0x04EA]),
    CaseRecord::new(0x04ED, &[0x04EC]),
    CaseRecord::new(0x04EF, &[0x04EE]),
    CaseRecord::new(0x04F1, &[0x04F0]),
    CaseRecord::new(0x04F3, &[0x04F2]),
    CaseRecord::new(0x04F5, &[0x04F4]),
    CaseRecord::new(0x04F7, &[0x04F6]),
    CaseRecord::new(0x04F9, &[0x04F8]),
    CaseRecord::new(0x04FB, &[0x04FA]),
    CaseRecord::new(0x04FD, &[0x04FC]),
    CaseRecord::new(0x04FF, &[0x04FE]),
    CaseRecord::new(0x0501, &[0x0500]),
    CaseRecord::new(0x0503, &[0x0502]),
    CaseRecord::new(0x0505, &[0x0504]),
    CaseRecord::new(0x0507, &[0x0506]),
    CaseRecord::new(0x0509, &[0x0508]),
    CaseRecord::new(0x050B, &[0x050A]),
    CaseRecord::new(0x050D, &[0x050C]),
    CaseRecord::new(0x050F, &[0x050E]),
    CaseRecord::new(0x0511, &[0x0510]),
    CaseRecord::new(0x0513, &[0x0512]),
    CaseRecord::new(0x0515, &[0x0514]),
    CaseRecord::new(0x0517, &[0x0516]),
    CaseRecord::new(0x0519, &[0x0518]),
    CaseRecord::new(0x051B, &[0x051A]),
    CaseRecord::new(0x051D, &[0x051C]),
    CaseRecord::new(0x051F, &[0x051E]),
    CaseRecord::new(0x0521, &[0x0520]),
    CaseRecord::new(0x0523, &[0x0522]),
    CaseRecord::new(0x0525, &[0x0524]),
    CaseRecord::new(0x0527, &[0x0526]),
    CaseRecord::new(0x0529, &[0x0528]),
    CaseRecord::new(0x052B, &[0x052A]),
    CaseRecord::new(0x052D, &[0x052C]),
    CaseRecord::new(0x052F, &[0x052E]),
    CaseRecord::new(0x0561, &[0x0531]),
    CaseRecord::new(0x0562, &[0x0532]),
    CaseRecord::new(0x0563, &[0x0533]),
    CaseRecord::new(0x0564, &[0x0534]),
    CaseRecord::new(0x0565, &[0x0535]),
    CaseRecord::new(0x0566, &[0x0536]),
    CaseRecord::new(0x0567, &[0x0537]),
    CaseRecord::new(0x0568, &[0x0538]),
    CaseRecord::new(0x0569, &[0x0539]),
    CaseRecord::new(0x056A, &[0x053A]),
    CaseRecord::new(0x056B, &[0x053B]),
    CaseRecord::new(0x056C, &[0x053C]),
    CaseRecord::new(0x056D, &[0x053D]),
    CaseRecord::new(0x056E, &[0x053E]),
    CaseRecord::new(0x056F, &[0x053F]),
    CaseRecord::new(0x0570, &[0x0540]),
    CaseRecord::new(0x0571, &[0x0541]),
    CaseRecord::new(0x0572, &[0x0542]),
    CaseRecord::new(0x0573, &[0x0543]),
    CaseRecord::new(0x0574, &[0x0544]),
    CaseRecord::new(0x0575, &[0x0545]),
    CaseRecord::new(0x0576, &[0x0546]),
    CaseRecord::new(0x0577, &[0x0547]),
    CaseRecord::new(0x0578, &[0x0548]),
    CaseRecord::new(0x0579, &[0x0549]),
    CaseRecord::new(0x057A, &[0x054A]),
    CaseRecord::new(0x057B, &[0x054B]),
    CaseRecord::new(0x057C, &[0x054C]),
    CaseRecord::new(0x057D, &[0x054D]),
    CaseRecord::new(0x057E, &[0x054E]),
    CaseRecord::new(0x057F, &[0x054F]),
    CaseRecord::new(0x0580, &[0x0550]),
    CaseRecord::new(0x0581, &[0x0551]),
    CaseRecord::new(0x0582, &[0x0552]),
    CaseRecord::new(0x0583, &[0x0553]),
    CaseRecord::new(0x0584, &[0x0554]),
    CaseRecord::new(0x0585, &[0x0555]),
    CaseRecord::new(0x0586, &[0x0556]),
    CaseRecord::new(0x0587, &[0x0535, 0x0552]),
    CaseRecord::new(0x10D0, &[0x1C90]),
    CaseRecord::new(0x10D1, &[0x1C91]),
    CaseRecord::new(0x10D2, &[0x1C92]),
    CaseRecord::new(0x10D3, &[0x1C93]),
    CaseRecord::new(0x10D4, &[0x1C94]),
    CaseRecord::new(0x10D5, &[0x1C95]),
    CaseRecord::new(0x10D6, &[0x1C96]),
    CaseRecord::new(0x10D7, &[0x1C97]),
    CaseRecord::new(0x10D8, &[0x1C98]),
    CaseRecord::new(0x10D9, &[0x1C99]),
    CaseRecord::new(0x10DA, &[0x1C9A]),
    CaseRecord::new(0x10DB, &[0x1C9B]),
    CaseRecord::new(0x10DC, &[0x1C9C]),
    CaseRecord::new(0x10DD, &[0x1C9D]),
    CaseRecord::new(0x10DE, &[0x1C9E]),
    CaseRecord::new(0x10DF, &[0x1C9F]),
    CaseRecord::new(0x10E0, &[0x1CA0]),
    CaseRecord::new(0x10E1, &[0x1CA1]),
    CaseRecord::new(0x10E2, &[0x1CA2]),
    CaseRecord::new(0x10E3, &[0x1CA3]),
    CaseRecord::new(0x10E4, &[0x1CA4]),
    CaseRecord::new(0x10E5, &[0x1CA5]),
    CaseRecord::new(0x10E6, &[0x1CA6]),
    CaseRecord::new(0x10E7, &[0x1CA7]),
    CaseRecord::new(0x10E8, &[0x1CA8]),
    CaseRecord::new(0x10E9, &[0x1CA9]),
    CaseRecord::new(0x10EA, &[0x1CAA]),
    CaseRecord::new(0x10EB, &[0x1CAB]),
    CaseRecord::new(0x10EC, &[0x1CAC]),
    CaseRecord::new(0x10ED, &[0x1CAD]),
    CaseRecord::new(0x10EE, &[0x1CAE]),
    CaseRecord::new(0x10EF, &[0x1CAF]),
    CaseRecord::new(0x10F0, &[0x1CB0]),
    CaseRecord::new(0x10F1, &[0x1CB1]),
    CaseRecord::new(0x10F2, &[0x1CB2]),
    CaseRecord::new(0x10F3, &[0x1CB3]),
    CaseRecord::new(0x10F4, &[0x1CB4]),
    CaseRecord::new(0x10F5, &[0x1CB5]),
    CaseRecord::new(0x10F6, &[0x1CB6]),
    CaseRecord::new(0x10F7, &[0x1CB7]),
    CaseRecord::new(0x10F8, &[0x1CB8]),
    CaseRecord::new(0x10F9, &[0x1CB9]),
    CaseRecord::new(0x10FA, &[0x1CBA]),
    CaseRecord::new(0x10FD, &[0x1CBD]),
    CaseRecord::new(0x10FE, &[0x1CBE]),
    CaseRecord::new(0x10FF, &[0x1CBF]),
    CaseRecord::new(0x13F8, &[0x13F0]),
    CaseRecord::new(0x13F9, &[0x13F1]),
    CaseRecord::new(0x13FA, &[0x13F2]),
    CaseRecord::new(0x13FB, &[0x13F3]),
    CaseRecord::new(0x13FC, &[0x13F4]),
    CaseRecord::new(0x13FD, &[0x13F5]),
    CaseRecord::new(0x1C80, &[0x0412]),
    CaseRecord::new(0x1C81, &[0x0414]),
    CaseRecord::new(0x1C82, &[0x041E]),
    CaseRecord::new(0x1C83, &[0x0421]),
    CaseRecord::new(0x1C84, &[0x0422]),
    CaseRecord::new(0x1C85, &[0x0422]),
    CaseRecord::new(0x1C86, &[0x042A]),
    CaseRecord::new(0x1C87, &[0x0462]),
    CaseRecord::new(0x1C88, &[0xA64A]),
    CaseRecord::new(0x1D79, &[0xA77D]),
    CaseRecord::new(0x1D7D, &[0x2C63]),
    CaseRecord::new(0x1D8E, &[0xA7C6]),
    CaseRecord::new(0x1E01, &[0x1E00]),
    CaseRecord::new(0x1E03, &[0x1E02]),
    CaseRecord::new(0x1E05, &[0x1E04]),
    CaseRecord::new(0x1E07, &[0x1E06]),
    CaseRecord::new(0x1E09, &[0x1E08]),
    CaseRecord::new(0x1E0B, &[0x1E0A]),
    CaseRecord::new(0x1E0D, &[0x1E0C]),
    CaseRecord::new(0x1E0F, &[0x1E0E]),
    CaseRecord::new(0x1E11, &[0x1E10]),
    CaseRecord::new(0x1E13, &[0x1E12]),
    CaseRecord::new(0x1E15, &[0x1E14]),
    CaseRecord::new(0x1E17, &[0x1E16]),
    CaseRecord::new(0x1E19, &[0x1E18]),
    CaseRecord::new(0x1E1B, &[0x1E1A]),
    CaseRecord::new(0x1E1D, &[0x1E1C]),
    CaseRecord::new(0x1E1F, &[0x1E1E]),
    CaseRecord::new(0x1E21, &[0x1E20]),
    CaseRecord::new(0x1E23, &[0x1E22]),
    CaseRecord::new(0x1E25, &[0x1E24]),
    CaseRecord::new(0x1E27, &[0x1E26]),
    CaseRecord::new(0x1E29, &[0x1E28]),
    CaseRecord::new(0x1E2B, &[0x1E2A]),
    CaseRecord::new(0x1E2D, &[0x1E2C]),
    CaseRecord::new(0x1E2F, &[0x1E2E]),
    CaseRecord::new(0x1E31, &[0x1E30]),
    CaseRecord::new(0x1E33, &[0x1E32]),
    CaseRecord::new(0x1E35, &[0x1E34]),
    CaseRecord::new(0x1E37, &[0x1E36]),
    CaseRecord::new(0x1E39, &[0x1E38]),
    CaseRecord::new(0x1E3B, &[0x1E3A]),
    CaseRecord::new(0x1E3D, &[0x1E3C]),
    CaseRecord::new(0x1E3F, &[0x1E3E]),
    CaseRecord::new(0x1E41, &[0x1E40]),
    CaseRecord::new(0x1E43, &[0x1E42]),
    CaseRecord::new(0x1E45, &[0x1E44]),
    CaseRecord::new(0x1E47, &[0x1E46]),
    CaseRecord::new(0x1E49, &[0x1E48]),
    CaseRecord::new(0x1E4B, &[0x1E4A]),
    CaseRecord::new(0x1E4D, &[0x1E4C]),
    CaseRecord::new(0x1E4F, &[0x1E4E]),
    CaseRecord::new(0x1E51, &[0x1E50]),
    CaseRecord::new(0x1E53, &[0x1E52]),
    CaseRecord::new(0x1E55, &[0x1E54]),
    CaseRecord::new(0x1E57, &[0x1E56]),
    CaseRecord::new(0x1E59, &[0x1E58]),
    CaseRecord::new(0x1E5B, &[0x1E5A]),
    CaseRecord::new(0x1E5D, &[0x1E5C]),
    CaseRecord::new(0x1E5F, &[0x1E5E]),
    CaseRecord::new(0x1E61, &[0x1E60]),
    CaseRecord::new(0x1E63, &[0x1E62]),
    CaseRecord::new(0x1E65, &[0x1E64]),
    CaseRecord::new(0x1E67, &[0x1E66]),
    CaseRecord::new(0x1E69, &[0x1E68]),
    CaseRecord::new(0x1E6B, &[0x1E6A]),
    CaseRecord::new(0x1E6D, &[0x1E6C]),
    CaseRecord::new(0x1E6F, &[0x1E6E]),
    CaseRecord::new(0x1E71, &[0x1E70]),
    CaseRecord::new(0x1E73, &[0x1E72]),
    CaseRecord::new(0x1E75, &[0x1E74]),
    CaseRecord::new(0x1E77, &[0x1E76]),
    CaseRecord::new(0x1E79, &[0x1E78]),
    CaseRecord::new(0x1E7B, &[0x1E7A]),
    CaseRecord::new(0x1E7D, &[0x1E7C]),
    CaseRecord::new(0x1E7F, &[0x1E7E]),
    CaseRecord::new(0x1E81, &[0x1E80]),
    CaseRecord::new(0x1E83, &[0x1E82]),
    CaseRecord::new(0x1E85, &[0x1E84]),
    CaseRecord::new(0x1E87, &[0x1E86]),
    CaseRecord::new(0x1E89, &[0x1E88]),
    CaseRecord::new(0x1E8B, &[0x1E8A]),
    CaseRecord::new(0x1E8D, &[0x1E8C]),
    CaseRecord::new(0x1E8F, &[0x1E8E]),
    CaseRecord::new(0x1E91, &[0x1E90]),
    CaseRecord::new(0x1E93, &[0x1E92]),
    CaseRecord::new(0x1E95, &[0x1E94]),
    CaseRecord::new(0x1E96, &[0x0048, 0x0331]),
    CaseRecord::new(0x1E97, &[0x0054, 0x0308]),
    CaseRecord::new(0x1E98, &[0x0057, 0x030A]),
    CaseRecord::new(0x1E99, &[0x0059, 0x030A]),
    CaseRecord::new(0x1E9A, &[0x0041, 0x02BE]),
    CaseRecord::new(0x1E9B, &[0x1E60]),
    CaseRecord::new(0x1EA1, &[0x1EA0]),
    CaseRecord::new(0x1EA3, &[0x1EA2]),
    CaseRecord::new(0x1EA5, &[0x1EA4]),
    CaseRecord::new(0x1EA7, &[0x1EA6]),
    CaseRecord::new(0x1EA9, &[0x1EA8]),
    CaseRecord::new(0x1EAB, &[0x1EAA]),
    CaseRecord::new(0x1EAD, &[0x1EAC]),
    CaseRecord::new(0x1EAF, &[0x1EAE]),
    CaseRecord::new(0x1EB1, &[0x1EB0]),
    CaseRecord::new(0x1EB3, &[0x1EB2]),
    CaseRecord::new(0x1EB5, &[0x1EB4]),
    CaseRecord::new(0x1EB7, &[0x1EB6]),
    CaseRecord::new(0x1EB9, &[0x1EB8]),
    CaseRecord::new(0x1EBB, &[0x1EBA]),
    CaseRecord::new(0x1EBD, &[0x1EBC]),
    CaseRecord::new(0x1EBF, &[0x1EBE]),
    CaseRecord::new(0x1EC1, &[0x1EC0]),
    CaseRecord::new(0x1EC3, &[0x1EC2]),
    CaseRecord::new(0x1EC5, &[0x1EC4]),
    CaseRecord::new(0x1EC7, &[0x1EC6]),
    CaseRecord::new(0x1EC9, &[0x1EC8]),
    CaseRecord::new(0x1ECB, &[0x1ECA]),
    CaseRecord::new(0x1ECD, &[0x1ECC]),
    CaseRecord::new(0x1ECF, &[0x1ECE]),
    CaseRecord::new(0x1ED1, &[0x1ED0]),
    CaseRecord::new(0x1ED3, &[0x1ED2]),
    CaseRecord::new(0x1ED5, &[0x1ED4]),
    CaseRecord::new(0x1ED7, &[0x1ED6]),
    CaseRecord::new(0x1ED9, &[0x1ED8]),
    CaseRecord::new(0x1EDB, &[0x1EDA]),
    CaseRecord::new(0x1EDD, &[0x1EDC]),
    CaseRecord::new(0x1EDF, &[0x1EDE]),
    CaseRecord::new(0x1EE1, &[0x1EE0]),
    CaseRecord::new(0x1EE3, &[0x1EE2]),
    CaseRecord::new(0x1EE5, &[0x1EE4]),
    CaseRecord::new(0x1EE7, &[0x1EE6]),
    CaseRecord::new(0x1EE9, &[0x1EE8]),
    CaseRecord::new(0x1EEB, &[0x1EEA]),
    CaseRecord::new(0x1EED, &[0x1EEC]),
    CaseRecord::new(0x1EEF, &[0x1EEE]),
    CaseRecord::new(0x1EF1, &[0x1EF0]),
    CaseRecord::new(0x1EF3, &[0x1EF2]),
    CaseRecord::new(0x1EF5, &[0x1EF4]),
    CaseRecord::new(0x1EF7, &[0x1EF6]),
    CaseRecord::new(0x1EF9, &[0x1EF8]),
    CaseRecord::new(0x1EFB, &[0x1EFA]),
    CaseRecord::new(0x1EFD, &[0x1EFC]),
    CaseRecord::new(0x1EFF, &[0x1EFE]),
    CaseRecord::new(0x1F00, &[0x1F08]),
    CaseRecord::new(0x1F01, &[0x1F09]),
    CaseRecord::new(0x1F02, &[0x1F0A]),
    CaseRecord::new(0x1F03, &[0x1F0B]),
    CaseRecord::new(0x1F04, &[0x1F0C]),
    CaseRecord::new(0x1F05, &[0x1F0D]),
    CaseRecord::new(0x1F06, &[0x1F0E]),
    CaseRecord::new(0x1F07, &[0x1F0F]),
    CaseRecord::new(0x1F10, &[0x1F18]),
    CaseRecord::new(0x1F11, &[0x1F19]),
    CaseRecord::new(0x1F12, &[0x1F1A]),
    CaseRecord::new(0x1F13, &[0x1F1B]),
    CaseRecord::new(0x1F14, &[0x1F1C]),
    CaseRecord::new(0x1F15, &[0x1F1D]),
    CaseRecord::new(0x1F20, &[0x1F28]),
    CaseRecord::new(0x1F21, &[0x1F29]),
    CaseRecord::new(0x1F22, &[0x1F2A]),
    CaseRecord::new(0x1F23, &[0x1F2B]),
    CaseRecord::new(0x1F24, &[0x1F2C]),
    CaseRecord::new(0x1F25, &[0x1F2D]),
    CaseRecord::new(0x1F26, &[0x1F2E]),
    CaseRecord::new(0x1F27, &[0x1F2F]),
    CaseRecord::new(0x1F30, &[0x1F38]),
    CaseRecord::new(0x1F31, &[0x1F39]),
    CaseRecord::new(0x1F32, &[0x1F3A]),
    CaseRecord::new(0x1F33, &[0x1F3B]),
    CaseRecord::new(0x1F34, &[0x1F3C]),
    CaseRecord::new(0x1F35, &[0x1F3D]),
    CaseRecord::new(0x1F36, &[0x1F3E]),
    CaseRecord::new(0x1F37, &[0x1F3F]),
    CaseRecord::new(0x1F40, &[0x1F48]),
    CaseRecord::new(0x1F41, &[0x1F49]),
    CaseRecord::new(0x1F42, &[0x1F4A]),
    CaseRecord::new(0x1F43, &[0x1F4B]),
    CaseRecord::new(0x1F44, &[0x1F4C]),
    CaseRecord::new(0x1F45, &[0x1F4D]),
    CaseRecord::new(0x1F50, &[0x03A5, 0x0313]),
    CaseRecord::new(0x1F51, &[0x1F59]),
    CaseRecord::new(0x1F52, &[0x03A5, 0x0313, 0x0300]),
    CaseRecord::new(0x1F53, &[0x1F5B]),
    CaseRecord::new(0x1F54, &[0x03A5, 0x0313, 0x0301]),
    CaseRecord::new(0x1F55, &[0x1F5D]),
    CaseRecord::new(0x1F56, &[0x03A5, 0x0313, 0x0342]),
    CaseRecord::new(0x1F57, &[0x1F5F]),
    CaseRecord::new(0x1F60, &[0x1F68]),
    CaseRecord::new(0x1F61, &[0x1F69]),
    CaseRecord::new(0x1F62, &[0x1F6A]),
    CaseRecord::new(0x1F63, &[0x1F6B]),
    CaseRecord::new(0x1F64, &[0x1F6C]),
    CaseRecord::new(0x1F65, &[0x1F6D]),
    CaseRecord::new(0x1F66, &[0x1F6E]),
    CaseRecord::new(0x1F67, &[0x1F6F]),
    CaseRecord::new(0x1F70, &[0x1FBA]),
    CaseRecord::new(0x1F71, &[0x1FBB]),
    CaseRecord::new(0x1F72, &[0x1FC8]),
    CaseRecord::new(0x1F73, &[0x1FC9]),
    CaseRecord::new(0x1F74, &[0x1FCA]),
    CaseRecord::new(0x1F75, &[0x1FCB]),
    CaseRecord::new(0x1F76, &[0x1FDA]),
    CaseRecord::new(0x1F77, &[0x1FDB]),
    CaseRecord::new(0x1F78, &[0x1FF8]),
    CaseRecord::new(0x1F79, &[0x1FF9]),
    CaseRecord::new(0x1F7A, &[0x1FEA]),
    CaseRecord::new(0x1F7B, &[0x1FEB]),
    CaseRecord::new(0x1F7C, &[0x1FFA]),
    CaseRecord::new(0x1F7D, &[0x1FFB]),
    CaseRecord::new(0x1F80, &[0x1F08, 0x0399]),
    CaseRecord::new(0x1F81, &[0x1F09, 0x0399]),
    CaseRecord::new(0x1F82, &[0x1F0A, 0x0399]),
    CaseRecord::new(0x1F83, &[0x1F0B, 0x0399]),
    CaseRecord::new(0x1F84, &[0x1F0C, 0x0399]),
    CaseRecord::new(0x1F85, &[0x1F0D, 0x0399]),
    CaseRecord::new(0x1F86, &[0x1F0E, 0x0399]),
    CaseRecord::new(0x1F87, &[0x1F0F, 0x0399]),
    CaseRecord::new(0x1F88, &[0x1F08, 0x0399]),
    CaseRecord::new(0x1F89, &[0x1F09, 0x0399]),
    CaseRecord::new(0x1F8A, &[0x1F0A, 0x0399]),
    CaseRecord::new(0x1F8B, &[0x1F0B, 0x0399]),
    CaseRecord::new(0x1F8C, &[0x1F0C, 0x0399]),
    CaseRecord::new(0x1F8D, &[0x1F0D, 0x0399]),
    CaseRecord::new(0x1F8E, &[0x1F0E, 0x0399]),
    CaseRecord::new(0x1F8F, &[0x1F0F, 0x0399]),
    CaseRecord::new(0x1F90, &[0x1F28, 0x0399]),
    CaseRecord::new(0x1F91, &[0x1F29, 0x0399]),
    CaseRecord::new(0x1F92, &[0x1F2A, 0x0399]),
    CaseRecord::new(0x1F93, &[0x1F2B, 0x0399]),
    CaseRecord::new(0x1F94, &[0x1F2C, 0x0399]),
    CaseRecord::new(0x1F95, &[0x1F2D, 0x0399]),
    CaseRecord::new(0x1F96, &[0x1F2E, 0x0399]),
    CaseRecord::new(0x1F97, &[0x1F2F, 0x0399]),
    CaseRecord::new(0x1F98, &[0x1F28, 0x0399]),
    CaseRecord::new(0x1F99, &[0x1F29, 0x0399]),
    CaseRecord::new(0x1F9A, &[0x1F2A, 0x0399]),
    CaseRecord::new(0x1F9B, &[0x1F2B, 0x0399]),
    CaseRecord::new(0x1F9C, &[0x1F2C, 0x0399]),
    CaseRecord::new(0x1F9D, &[0x1F2D, 0x0399]),
    CaseRecord::new(0x1F9E, &[0x1F2E, 0x0399]),
    CaseRecord::new(0x1F9F, &[0x1F2F, 0x0399]),
    CaseRecord::new(0x1FA0, &[0x1F68, 0x0399]),
    CaseRecord::new(0x1FA1, &[0x1F69, 0x0399]),
    CaseRecord::new(0x1FA2, &[0x1F6A, 0x0399]),
    CaseRecord::new(0x1FA3, &[0x1F6B, 0x0399]),
    CaseRecord::new(0x1FA4, &[0x1F6C, 0x0399]),
    CaseRecord::new(0x1FA5, &[0x1F6D, 0x0399]),
    CaseRecord::new(0x1FA6, &[0x1F6E, 0x0399]),
    CaseRecord::new(0x1FA7, &[0x1F6F, 0x0399]),
    CaseRecord::new(0x1FA8, &[0x1F68, 0x0399]),
    CaseRecord::new(0x1FA9, &[0x1F69, 0x0399]),
    CaseRecord::new(0x1FAA, &[0x1F6A, 0x0399]),
    CaseRecord::new(0x1FAB, &[0x1F6B, 0x0399]),
    CaseRecord::new(0x1FAC, &[0x1F6C, 0x0399]),
    CaseRecord::new(0x1FAD, &[0x1F6D, 0x0399]),
    CaseRecord::new(0x1FAE, &[0x1F6E, 0x0399]),
    CaseRecord::new(0x1FAF, &[0x1F6F, 0x0399]),
    CaseRecord::new(0x1FB0, &[0x1FB8]),
    CaseRecord::new(0x1FB1, &[0x1FB9]),
    CaseRecord::new(0x1FB2, &[0x1FBA, 0x0399]),
    CaseRecord::new(0x1FB3, &[0x0391, 0x0399]),
    CaseRecord::new(0x1FB4, &[0x0386, 0x0399]),
    CaseRecord::new(0x1FB6, &[0x0391, 0x0342]),
    CaseRecord::new(0x1FB7, &[0x0391, 0x0342, 0x0399]),
    CaseRecord::new(0x1FBC, &[0x0391, 0x0399]),
    CaseRecord::new(0x1FBE, &[0x0399]),
    CaseRecord::new(0x1FC2, &[0x1FCA, 0x0399]),
    CaseRecord::new(0x1FC3, &[0x0397, 0x0399]),
    CaseRecord::new(0x1FC4, &[0x0389, 0x0399]),
    CaseRecord::new(0x1FC6, &[0x0397, 0x0342]),
    CaseRecord::new(0x1FC7, &[0x0397, 0x0342, 0x0399]),
    CaseRecord::new(0x1FCC, &[0x0397, 0x0399]),
    CaseRecord::new(0x1FD0, &[0x1FD8]),
    CaseRecord::new(0x1FD1, &[0x1FD9]),
    CaseRecord::new(0x1FD2, &[0x0399, 0x0308, 0x0300]),
    CaseRecord::new(0x1FD3, &[0x0399, 0x0308, 0x0301]),
    CaseRecord::new(0x1FD6, &[0x0399, 0x0342]),
    CaseRecord::new(0x1FD7, &[0x0399, 0x0308, 0x0342]),
    CaseRecord::new(0x1FE0, &[0x1FE8]),
    CaseRecord::new(0x1FE1, &[0x1FE9]),
    CaseRecord::new(0x1FE2, &[0x03A5, 0x0308, 0x0300]),
    CaseRecord::new(0x1FE3, &[0x03A5, 0x0308, 0x0301]),
    CaseRecord::new(0x1FE4, &[0x03A1, 0x0313]),
    CaseRecord::new(0x1FE5, &[0x1FEC]),
    CaseRecord::new(0x1FE6, &[0x03A5, 0x0342]),
    CaseRecord::new(0x1FE7, &[0x03A5, 0x0308, 0x0342]),
    CaseRecord::new(0x1FF2, &[0x1FFA, 0x0399]),
    CaseRecord::new(0x1FF3, &[0x03A9, 0x0399]),
    CaseRecord::new(0x1FF4, &[0x038F, 0x0399]),
    CaseRecord::new(0x1FF6, &[0x03A9, 0x0342]),
    CaseRecord::new(0x1FF7, &[0x03A9, 0x0342, 0x0399]),
    CaseRecord::new(0x1FFC, &[0x03A9, 0x0399]),
    CaseRecord::new(0x214E, &[0x2132]),
    CaseRecord::new(0x2170, &[0x2160]),
    CaseRecord::new(0x2171, &[0x2161]),
    CaseRecord::new(0x2172, &[0x2162]),
    CaseRecord::new(0x2173, &[0x2163]),
    CaseRecord::new(0x2174, &[0x2164]),
    CaseRecord::new(0x2175, &[0x2165]),
    CaseRecord::new(0x2176, &[0x2166]),
    CaseRecord::new(0x2177, &[0x2167]),
    CaseRecord::new(0x2178, &[0x2168]),
    CaseRecord::new(0x2179, &[0x2169]),
    CaseRecord::new(0x217A, &[0x216A]),
    CaseRecord::new(0x217B, &[0x216B]),
    CaseRecord::new(0x217C, &[0x216C]),
    CaseRecord::new(0x217D, &[0x216D]),
    CaseRecord::new(0x217E, &[0x216E]),
    CaseRecord::new(0x217F, &[0x216F]),
    CaseRecord::new(0x2184, &[0x2183]),
    CaseRecord::new(0x24D0, &[0x24B6]),
    CaseRecord::new(0x24D1, &[0x24B7]),
    CaseRecord::new(0x24D2, &[0x24B8]),
    CaseRecord::new(0x24D3, &[0x24B9]),
    CaseRecord::new(0x24D4, &[0x24BA]),
    CaseRecord::new(0x24D5, &[0x24BB]),
    CaseRecord::new(0x24D6, &[0x24BC]),
    CaseRecord::new(0x24D7, &[0x24BD]),
    CaseRecord::new(0x24D8, &[0x24BE]),
    CaseRecord::new(0x24D9, &[0x24BF]),
    CaseRecord::new(0x24DA, &[0x24C0]),
    CaseRecord::new(0x24DB, &[0x24C1]),
    CaseRecord::new(0x24DC, &[0x24C2]),
    CaseRecord::new(0x24DD, &[0x24C3]),
    CaseRecord::new(0x24DE, &[0x24C4]),
    CaseRecord::new(0x24DF, &[0x24C5]),
    CaseRecord::new(0x24E0, &[0x24C6]),
    CaseRecord::new(0x24E1, &[0x24C7]),
    CaseRecord::new(0x24E2, &[0x24C8]),
    CaseRecord::new(0x24E3, &[0x24C9]),
    CaseRecord::new(0x24E4, &[0x24CA]),
    CaseRecord::new(0x24E5, &[0x24CB]),
    CaseRecord::new(0x24E6, &[0x24CC]),
    CaseRecord::new(0x24E7, &[0x24CD]),
    CaseRecord::new(0x24E8, &[0x24CE]),
    CaseRecord::new(0x24E9, &[0x24CF]),
    CaseRecord::new(0x2C30, &[0x2C00]),
    CaseRecord::new(0x2C31, &[0x2C01]),
    CaseRecord::new(0x2C32, &[0x2C02]),
    CaseRecord::new(0x2C33, &[0x2C03]),
    CaseRecord::new(0x2C34, &[0x2C04]),
    CaseRecord::new(0x2C35, &[0x2C05]),
    CaseRecord::new(0x2C36, &[0x2C06]),
    CaseRecord::new(0x2C37, &[0x2C07]),
    CaseRecord::new(0x2C38, &[0x2C08]),
    CaseRecord::new(0x2C39, &[0x2C09]),
    CaseRecord::new(0x2C3A, &[0x2C0A]),
    CaseRecord::new(0x2C3B, &[0x2C0B]),
    CaseRecord::new(0x2C3C, &[0x2C0C]),
    CaseRecord::new(0x2C3D, &[0x2C0D]),
    CaseRecord::new(0x2C3E, &[0x2C0E]),
    CaseRecord::new(0x2C3F, &[0x2C0F]),
    CaseRecord::new(0x2C40, &[0x2C10]),
    CaseRecord::new(0x2C41, &[0x2C11]),
    CaseRecord::new(0x2C42, &[0x2C12]),
    CaseRecord::new(0x2C43, &[0x2C13]),
    CaseRecord::new(0x2C44, &[0x2C14]),
    CaseRecord::new(0x2C45, &[0x2C15]),
    CaseRecord::new(0x2C46, &[0x2C16]),
    CaseRecord::new(0x2C47, &[0x2C17]),
    CaseRecord::new(0x2C48, &[0x2C18]),
    CaseRecord::new(0x2C49, &[0x2C19]),
    CaseRecord::new(0x2C4A, &[0x2C1A]),
    CaseRecord::new(0x2C4B, &[0x2C1B]),
    CaseRecord::new(0x2C4C, &[0x2C1C]),
    CaseRecord::new(0x2C4D, &[0x2C1D]),
    CaseRecord::new(0x2C4E, &[0x2C1E]),
    CaseRecord::new(0x2C4F, &[0x2C1F]),
    CaseRecord::new(0x2C50, &[0x2C20]),
    CaseRecord::new(0x2C51, &[0x2C21]),
    CaseRecord::new(0x2C52, &[0x2C22]),
    CaseRecord::new(0x2C53, &[0x2C23]),
    CaseRecord::new(0x2C54, &[0x2C24]),
    CaseRecord::new(0x2C55, &[0x2C25]),
    CaseRecord::new(0x2C56, &[0x2C26]),
    CaseRecord::new(0x2C57, &[0x2C27]),
    CaseRecord::new(0x2C58, &[0x2C28]),
    CaseRecord::new(0x2C59, &[0x2C29]),
    CaseRecord::new(0x2C5A, &[0x2C2A]),
    CaseRecord::new(0x2C5B, &[0x2C2B]),
    CaseRecord::new(0x2C5C, &[0x2C2C]),
    CaseRecord::new(0x2C5D, &[0x2C2D]),
    CaseRecord::new(0x2C5E, &[0x2C2E]),
    CaseRecord::new(0x2C5F, &[0x2C2F]),
    CaseRecord::new(0x2C61, &[0x2C60]),
    CaseRecord::new(0x2C65, &[0x023A]),
    CaseRecord::new(0x2C66, &[0x023E]),
    CaseRecord::new(0x2C68, &[0x2C67]),
    CaseRecord::new(0x2C6A, &[0x2C69]),
    CaseRecord::new(0x2C6C, &[0x2C6B]),
    CaseRecord::new(0x2C73, &[0x2C72]),
    CaseRecord::new(0x2C76, &[0x2C75]),
    CaseRecord::new(0x2C81, &[0x2C80]),
    CaseRecord::new(0x2C83, &[0x2C82]),
    CaseRecord::new(0x2C85, &[0x2C84]),
    CaseRecord::new(0x2C87, &[0x2C86]),
    CaseRecord::new(0x2C89, &[0x2C88]),
    CaseRecord::new(0x2C8B, &[0x2C8A]),
    CaseRecord::new(0x2C8D, &[0x2C8C]),
    CaseRecord::new(0x2C8F, &[0x2C8E]),
    CaseRecord::new(0x2C91, &[0x2C90]),
    CaseRecord::new(0x2C93, &[0x2C92]),
    CaseRecord::new(0x2C95, &[0x2C94]),
    CaseRecord::new(0x2C97, &[0x2C96]),
    CaseRecord::new(0x2C99, &[0x2C98]),
    CaseRecord::new(0x2C9B, &[0x2C9A]),
    CaseRecord::new(0x2C9D, &[0x2C9C]),
    CaseRecord::new(0x2C9F, &[0x2C9E]),
    CaseRecord::new(0x2CA1, &[0x2CA0]),
    CaseRecord::new(0x2CA3, &[0x2CA2]),
    CaseRecord::new(0x2CA5, &[0x2CA4]),
    CaseRecord::new(0x2CA7, &[0x2CA6]),
    CaseRecord::new(0x2CA9, &[0x2CA8]),
    CaseRecord::new(0x2CAB, &[0x2CAA]),
    CaseRecord::new(0x2CAD, &[0x2CAC]),
    CaseRecord::new(0x2CAF, &[0x2CAE]),
    CaseRecord::new(0x2CB1, &[0x2CB0]),
    CaseRecord::new(0x2CB3, &[0x2CB2]),
    CaseRecord::new(0x2CB5, &[0x2CB4]),
    CaseRecord::new(0x2CB7, &[0x2CB6]),
    CaseRecord::new(0x2CB9, &[0x2CB8]),
    CaseRecord::new(0x2CBB, &[0x2CBA]),
    CaseRecord::new(0x2CBD, &[0x2CBC]),
    CaseRecord::new(0x2CBF, &[0x2CBE]),
    CaseRecord::new(0x2CC1, &[0x2CC0]),
    CaseRecord::new(0x2CC3, &[0x2CC2]),
    CaseRecord::new(0x2CC5, &[0x2CC4]),
    CaseRecord::new(0x2CC7, &[0x2CC6]),
    CaseRecord::new(0x2CC9, &[0x2CC8]),
    CaseRecord::new(0x2CCB, &[0x2CCA]),
    CaseRecord::new(0x2CCD, &[0x2CCC]),
    CaseRecord::new(0x2CCF, &[0x2CCE]),
    CaseRecord::new(0x2CD1, &[0x2CD0]),
    CaseRecord::new(0x2CD3, &[0x2CD2]),
    CaseRecord::new(0x2CD5, &[0x2CD4]),
    CaseRecord::new(0x2CD7, &[0x2CD6]),
    CaseRecord::new(0x2CD9, &[0x2CD8]),
    CaseRecord::new(0x2CDB, &[0x2CDA]),
    CaseRecord::new(0x2CDD, &[0x2CDC]),
    CaseRecord::new(0x2CDF, &[0x2CDE]),
    CaseRecord::new(0x2CE1, &[0x2CE0]),
    CaseRecord::new(0x2CE3, &[0x2CE2]),
    CaseRecord::new(0x2CEC, &[0x2CEB]),
    CaseRecord::new(0x2CEE, &[0x2CED]),
    CaseRecord::new(0x2CF3, &[0x2CF2]),
    CaseRecord::new(0x2D00, &[0x10A0]),
    CaseRecord::new(0x2D01, &[0x10A1]),
    CaseRecord::new(0x2D02, &[0x10A2]),
    CaseRecord::new(0x2D03, &[0x10A3]),
    CaseRecord::new(0x2D04, &[0x10A4]),
    CaseRecord::new(0x2D05, &[0x10A5]),
    CaseRecord::new(0x2D06, &[0x10A6]),
    CaseRecord::new(0x2D07, &[0x10A7]),
    CaseRecord::new(0x2D08, &[0x10A8]),
    CaseRecord::new(0x2D09, &[0x10A9]),
    CaseRecord::new(0x2D0A, &[0x10AA]),
    CaseRecord::new(0x2D0B, &[0x10AB]),
    CaseRecord::new(0x2D0C, &[0x10AC]),
    CaseRecord::new(0x2D0D, &[0x10AD]),
    CaseRecord::new(0x2D0E, &[0x10AE]),
    CaseRecord::new(0x2D0F, &[0x10AF]),
    CaseRecord::new(0x2D10, &[0x10B0]),
    CaseRecord::new(0x2D11, &[0x10B1]),
    CaseRecord::new(0x2D12, &[0x10B2]),
    CaseRecord::new(0x2D13, &[0x10B3]),
    CaseRecord::new(0x2D14, &[0x10B4]),
    CaseRecord::new(0x2D15, &[0x10B5]),
    CaseRecord::new(0x2D16, &[0x10B6]),
    CaseRecord::new(0x2D17, &[0x10B7]),
    CaseRecord::new(0x2D18, &[0x10B8]),
    CaseRecord::new(0x2D19, &[0x10B9]),
    CaseRecord::new(0x2D1A, &[0x10BA]),
    CaseRecord::new(0x2D1B, &[0x10BB]),
    CaseRecord::new(0x2D1C, &[0x10BC]),
    CaseRecord::new(0x2D1D, &[0x10BD]),
    CaseRecord::new(0x2D1E, &[0x10BE]),
    CaseRecord::new(0x2D1F, &[0x10BF]),
    CaseRecord::new(0x2D20, &[0x10C0]),
    CaseRecord::new(0x2D21, &[0x10C1]),
    CaseRecord::new(0x2D22, &[0x10C2]),
    CaseRecord::new(0x2D23, &[0x10C3]),
    CaseRecord::new(0x2D24, &[0x10C4]),
    CaseRecord::new(0x2D25, &[0x10C5]),
    CaseRecord::new(0x2D27, &[0x10C7]),
    CaseRecord::new(0x2D2D, &[0x10CD]),
    CaseRecord::new(0xA641, &[0xA640]),
    CaseRecord::new(0xA643, &[0xA642]),
    CaseRecord::new(0xA645, &[0xA644]),
    CaseRecord::new(0xA647, &[0xA646]),
    CaseRecord::new(0xA649, &[0xA648]),
    CaseRecord::new(0xA64B, &[0xA64A]),
    CaseRecord::new(0xA64D, &[0xA64C]),
    CaseRecord::new(0xA64F, &[0xA64E]),
    CaseRecord::new(0xA651, &[0xA650]),
    CaseRecord::new(0xA653, &[0xA652]),
    CaseRecord::new(0xA655, &[0xA654]),
    CaseRecord::new(0xA657, &[0xA656]),
    CaseRecord::new(0xA659, &[0xA658]),
    CaseRecord::new(0xA65B, &[0xA65A]),
    CaseRecord::new(0xA65D, &[0xA65C]),
    CaseRecord::new(0xA65F, &[0xA65E]),
    CaseRecord::new(0xA661, &[0xA660]),
    CaseRecord::new(0xA663, &[0xA662]),
    CaseRecord::new(0xA665, &[0xA664]),
    CaseRecord::new(0xA667, &[0xA666]),
    CaseRecord::new(0xA669, &[0xA668]),
    CaseRecord::new(0xA66B, &[0xA66A]),
    CaseRecord::new(0xA66D, &[0xA66C]),
    CaseRecord::new(0xA681, &[0xA680]),
    CaseRecord::new(0xA683, &[0xA682]),
    CaseRecord::new(0xA685, &[0xA684]),
    CaseRecord::new(0xA687, &[0xA686]),
    CaseRecord::new(0xA689, &[0xA688]),
    CaseRecord::new(0xA68B, &[0xA68A]),
    CaseRecord::new(0xA68D, &[0xA68C]),
    CaseRecord::new(0xA68F, &[0xA68E]),
    CaseRecord::new(0xA691, &[0xA690]),
    CaseRecord::new(0xA693, &[0xA692]),
    CaseRecord::new(0xA695, &[0xA694]),
    CaseRecord::new(0xA697, &[0xA696]),
    CaseRecord::new(0xA699, &[0xA698]),
    CaseRecord::new(0xA69B, &[0xA69A]),
    CaseRecord::new(0xA723, &[0xA722]),
    CaseRecord::new(0xA725, &[0xA724]),
    CaseRecord::new(0xA727, &[0xA726]),
    CaseRecord::new(0xA729, &[0xA728]),
    CaseRecord::new(0xA72B, &[0xA72A]),
    CaseRecord::new(0xA72D, &[0xA72C]),
    CaseRecord::new(0xA72F, &[0xA72E]),
    CaseRecord::new(0xA733, &[0xA732]),
    CaseRecord::new(0xA735, &[0xA734]),
    CaseRecord::new(0xA737, &[0xA736]),
    CaseRecord::new(0xA739, &[0xA738]),
    CaseRecord::new(0xA73B, &[0xA73A]),
    CaseRecord::new(0xA73D, &[0xA73C]),
    CaseRecord::new(0xA73F, &[0xA73E]),
    CaseRecord::new(0xA741, &[0xA740]),
    CaseRecord::new(0xA743, &[0xA742]),
    CaseRecord::new(0xA745, &[0xA744]),
    CaseRecord::new(0xA747, &[0xA746]),
    CaseRecord::new(0xA749, &[0xA748]),
    CaseRecord::new(0xA74B, &[0xA74A]),
    CaseRecord::new(0xA74D, &[0xA74C]),
    CaseRecord::new(0xA74F, &[0xA74E]),
    CaseRecord::new(0xA751, &[0xA750]),
    CaseRecord::new(0xA753, &[0xA752]),
    CaseRecord::new(0xA755, &[0xA754]),
    CaseRecord::new(0xA757, &[0xA756]),
    CaseRecord::new(0xA759, &[0xA758]),
    CaseRecord::new(0xA75B, &[0xA75A]),
    CaseRecord::new(0xA75D, &[0xA75C]),
    CaseRecord::new(0xA75F, &[0xA75E]),
    CaseRecord::new(0xA761, &[0xA760]),
    CaseRecord::new(0xA763, &[0xA762]),
    CaseRecord::new(0xA765, &[0xA764]),
    CaseRecord::new(0xA767, &[0xA766]),
    CaseRecord::new(0xA769, &[0xA768]),
    CaseRecord::new(0xA76B, &[0xA76A]),
    CaseRecord::new(0xA76D, &[0xA76C]),
    CaseRecord::new(0xA76F, &[0xA76E]),
    CaseRecord::new(0xA77A, &[0xA779]),
    CaseRecord::new(0xA77C, &[0xA77B]),
    CaseRecord::new(0xA77F, &[0xA77E]),
    CaseRecord::new(0xA781, &[0xA780]),
    CaseRecord::new(0xA783, &[0xA782]),
    CaseRecord::new(0xA785, &[0xA784]),
    CaseRecord::new(0xA787, &[0xA786]),
    CaseRecord::new(0xA78C, &[0xA78B]),
    CaseRecord::new(0xA791, &[0xA790]),
    CaseRecord::new(0xA793, &[0xA792]),
    CaseRecord::new(0xA794, &[0xA7C4]),
    CaseRecord::new(0xA797, &[0xA796]),
    CaseRecord::new(0xA799, &[0xA798]),
    CaseRecord::new(0xA79B, &[0xA79A]),
    CaseRecord::new(0xA79D, &[0xA79C]),
    CaseRecord::new(0xA79F, &[0xA79E]),
    CaseRecord::new(0xA7A1, &[0xA7A0]),
    CaseRecord::new(0xA7A3, &[0xA7A2]),
    CaseRecord::new(0xA7A5, &[0xA7A4]),
    CaseRecord::new(0xA7A7, &[0xA7A6]),
    CaseRecord::new(0xA7A9, &[0xA7A8]),
    CaseRecord::new(0xA7B5, &[0xA7B4]),
    CaseRecord::new(0xA7B7, &[0xA7B6]),
    CaseRecord::new(0xA7B9, &[0xA7B8]),
    CaseRecord::new(0xA7BB, &[0xA7BA]),
    CaseRecord::new(0xA7BD, &[0xA7BC]),
    CaseRecord::new(0xA7BF, &[0xA7BE]),
    CaseRecord::new(0xA7C1, &[0xA7C0]),
    CaseRecord::new(0xA7C3, &[0xA7C2]),
    CaseRecord::new(0xA7C8, &[0xA7C7]),
    CaseRecord::new(0xA7CA, &[0xA7C9]),
    CaseRecord::new(0xA7D1, &[0xA7D0]),
    CaseRecord::new(0xA7D7, &[0xA7D6]),
    CaseRecord::new(0xA7D9, &[0xA7D8]),
    CaseRecord::new(0xA7F6, &[0xA7F5]),
    CaseRecord::new(0xAB53, &[0xA7B3]),
    CaseRecord::new(0xAB70, &[0x13A0]),
    CaseRecord::new(0xAB71, &[0x13A1]),
    CaseRecord::new(0xAB72, &[0x13A2]),
    CaseRecord::new(0xAB73, &[0x13A3]),
    CaseRecord::new(0xAB74, &[0x13A4]),
    CaseRecord::new(0xAB75, &[0x13A5]),
    CaseRecord::new(0xAB76, &[0x13A6]),
    CaseRecord::new(0xAB77, &[0x13A7]),
    CaseRecord::new(0xAB78, &[0x13A8]),
    CaseRecord::new(0xAB79, &[0x13A9]),
    CaseRecord::new(0xAB7A, &[0x13AA]),
    CaseRecord::new(0xAB7B, &[0x13AB]),
    CaseRecord::new(0xAB7C, &[0x13AC]),
    CaseRecord::new(0xAB7D, &[0x13AD]),
    CaseRecord::new(0xAB7E, &[0x13AE]),
    CaseRecord::new(0xAB7F, &[0x13AF]),
    CaseRecord::new(0xAB80, &[0x13B0]),
    CaseRecord::new(0xAB81, &[0x13B1]),
    CaseRecord::new(0xAB82, &[0x13B2]),
    CaseRecord::new(0xAB83, &[0x13B3]),
    CaseRecord::new(0xAB84, &[0x13B4]),
    CaseRecord::new(0xAB85, &[0x13B5]),
    CaseRecord::new(0xAB86, &[0x13B6]),
    CaseRecord::new(0xAB87, &[0x13B7]),
    CaseRecord::new(0xAB88, &[0x13B8]),
    CaseRecord::new(0xAB89, &[0x13B9]),
    CaseRecord::new(0xAB8A, &[0x13BA]),
    CaseRecord::new(0xAB8B, &[0x13BB]),
    CaseRecord::new(0xAB8C, &[0x13BC]),
    CaseRecord::new(0xAB8D, &[0x13BD]),
    CaseRecord::new(0xAB8E, &[0x13BE]),
    CaseRecord::new(0xAB8F, &[0x13BF]),
    CaseRecord::new(0xAB90, &[0x13C0]),
    CaseRecord::new(0xAB91, &[0x13C1]),
    CaseRecord::new(0xAB92, &[0x13C2]),
    CaseRecord::new(0xAB93, &[0x13C3]),
    CaseRecord::new(0xAB94, &[0x13C4]),
    CaseRecord::new(0xAB95, &[0x13C5]),
    CaseRecord::new(0xAB96, &[0x13C6]),
    CaseRecord::new(0xAB97, &[0x13C7]),
    CaseRecord::new(0xAB98, &[0x13C8]),
    CaseRecord::new(0xAB99, &[0x13C9]),
    CaseRecord::new(0xAB9A, &[0x13CA]),
    CaseRecord::new(0xAB9B, &[0x13CB]),
    CaseRecord::new(0xAB9C, &[0x13CC]),
    CaseRecord::new(0xAB9D, &[0x13CD]),
    CaseRecord::new(0xAB9E, &[0x13CE]),
    CaseRecord::new(0xAB9F, &[0x13CF]),
    CaseRecord::new(0xABA0, &[0x13D0]),
    CaseRecord::new(0xABA1, &[0x13D1]),
    CaseRecord::new(0xABA2, &[0x13D2]),
    CaseRecord::new(0xABA3, &[0x13D3]),
    CaseRecord::new(0xABA4, &[0x13D4]),
    CaseRecord::new(0xABA5, &[0x13D5]),
    CaseRecord::new(0xABA6, &[0x13D6]),
    CaseRecord::new(0xABA7, &[0x13D7]),
    CaseRecord::new(0xABA8, &[0x13D8]),
    CaseRecord::new(0xABA9, &[0x13D9]),
    CaseRecord::new(0xABAA, &[0x13DA]),
    CaseRecord::new(0xABAB, &[0x13DB]),
    CaseRecord::new(0xABAC, &[0x13DC]),
    CaseRecord::new(0xABAD, &[0x13DD]),
    CaseRecord::new(0xABAE, &[0x13DE]),
    CaseRecord::new(0xABAF, &[0x13DF]),
    CaseRecord::new(0xABB0, &[0x13E0]),
    CaseRecord::new(0xABB1, &[0x13E1]),
    CaseRecord::new(0xABB2, &[0x13E2]),
    CaseRecord::new(0xABB3, &[0x13E3]),
    CaseRecord::new(0xABB4, &[0x13E4]),
    CaseRecord::new(0xABB5, &[0x13E5]),
    CaseRecord::new(0xABB6, &[0x13E6]),
    CaseRecord::new(0xABB7, &[0x13E7]),
    CaseRecord::new(0xABB8, &[0x13E8]),
    CaseRecord::new(0xABB9, &[0x13E9]),
    CaseRecord::new(0xABBA, &[0x13EA]),
    CaseRecord::new(0xABBB, &[0x13EB]),
    CaseRecord::new(0xABBC, &[0x13EC]),
    CaseRecord::new(0xABBD, &[0x13ED]),
    CaseRecord::new(0xABBE, &[0x13EE]),
    CaseRecord::new(0xABBF, &[0x13EF]),
    CaseRecord::new(0xFB00, &[0x0046, 0x0046]),
    CaseRecord::new(0xFB01, &[0x0046, 0x0049]),
    CaseRecord::new(0xFB02, &[0x0046, 0x004C]),
    CaseRecord::new(0xFB03, &[0x0046, 0x0046, 0x0049]),
    CaseRecord::new(0xFB04, &[0x0046, 0x0046, 0x004C]),
    CaseRecord::new(0xFB05, &[0x0053, 0x0054]),
    CaseRecord::new(0xFB06, &[0x0053, 0x0054]),
    CaseRecord::new(0xFB13, &[0x0544, 0x0546]),
    CaseRecord::new(0xFB14, &[0x0544, 0x0535]),
    CaseRecord::new(0xFB15, &[0x0544, 0x053B]),
    CaseRecord::new(0xFB16, &[0x054E, 0x0546]),
    CaseRecord::new(0xFB17, &[0x0544, 0x053D]),
    CaseRecord::new(0xFF41, &[0xFF21]),
    CaseRecord::new(0xFF42, &[0xFF22]),
    CaseRecord::new(0xFF43, &[0xFF23]),
    CaseRecord::new(0xFF44, &[0xFF24]),
    CaseRecord::new(0xFF45, &[0xFF25]),
    CaseRecord::new(0xFF46, &[0xFF26]),
    CaseRecord::new(0xFF47, &[0xFF27]),
    CaseRecord::new(0xFF48, &[0xFF28]),
    CaseRecord::new(0xFF49, &[0xFF29]),
    CaseRecord::new(0xFF4A, &[0xFF2A]),
    CaseRecord::new(0xFF4B, &[0xFF2B]),
    CaseRecord::new(0xFF4C, &[0xFF2C]),
    CaseRecord::new(0xFF4D, &[0xFF2D]),
    CaseRecord::new(0xFF4E, &[0xFF2E]),
    CaseRecord::new(0xFF4F, &[0xFF2F]),
    CaseRecord::new(0xFF50, &[0xFF30]),
    CaseRecord::new(0xFF51, &[0xFF31]),
    CaseRecord::new(0xFF52, &[0xFF32]),
    CaseRecord::new(0xFF53, &[0xFF33]),
    CaseRecord::new(0xFF54, &[0xFF34]),
    CaseRecord::new(0xFF55, &[0xFF35]),
    CaseRecord::new(0xFF56, &[0xFF36]),
    CaseRecord::new(0xFF57, &[0xFF37]),
    CaseRecord::new(0xFF58, &[0xFF38]),
    CaseRecord::new(0xFF59, &[0xFF39]),
    CaseRecord::new(0xFF5A, &[0xFF3A]),
    CaseRecord::new(0x10428, &[0x10400]),
    CaseRecord::new(0x10429, &[0x10401]),
    CaseRecord::new(0x1042A, &[0x10402]),
    CaseRecord::new(0x1042B, &[0x10403]),
    CaseRecord::new(0x1042C, &[0x10404]),
    CaseRecord::new(0x1042D, &[0x10405]),
    CaseRecord::new(0x1042E, &[0x10406]),
    CaseRecord::new(0x1042F, &[0x10407]),
    CaseRecord::new(0x10430, &[0x10408]),
    CaseRecord::new(0x10431, &[0x10409]),
    CaseRecord::new(0x10432, &[0x1040A]),
    CaseRecord::new(0x10433, &[0x1040B]),
    CaseRecord::new(0x10434, &[0x1040C]),
    CaseRecord::new(0x10435, &[0x1040D]),
    CaseRecord::new(0x10436, &[0x1040E]),
    CaseRecord::new(0x10437, &[0x1040F]),
    CaseRecord::new(0x10438, &[0x10410]),
    CaseRecord::new(0x10439, &[0x10411]),
    CaseRecord::new(0x1043A, &[0x10412]),
    CaseRecord::new(0x1043B, &[0x10413]),
    CaseRecord::new(0x1043C, &[0x10414]),
    CaseRecord::new(0x1043D, &[0x10415]),
    CaseRecord::new(0x1043E, &[0x10416]),
    CaseRecord::new(0x1043F, &[0x10417]),
    CaseRecord::new(0x10440, &[0x10418]),
    CaseRecord::new(0x10441, &[0x10419]),
    CaseRecord::new(0x10442, &[0x1041A]),
    CaseRecord::new(0x10443, &[0x1041B]),
    CaseRecord::new(0x10444, &[0x1041C]),
    CaseRecord::new(0x10445, &[0x1041D]),
    CaseRecord::new(0x10446, &[0x1041E]),
    CaseRecord::new(0x10447, &[0x1041F]),
    CaseRecord::new(0x10448, &[0x10420]),
    CaseRecord::new(0x10449, &[0x10421]),
    CaseRecord::new(0x1044A, &[0x10422]),
    CaseRecord::new(0x1044B, &[0x10423]),
    CaseRecord::new(0x1044C, &[0x10424]),
    CaseRecord::new(0x1044D, &[0x10425]),
    CaseRecord::new(0x1044E, &[0x10426]),
    CaseRecord::new(0x1044F, &[0x10427]),
    CaseRecord::new(0x104D8, &[0x104B0]),
    CaseRecord::new(0x104D9, &[0x104B1]),
    CaseRecord::new(0x104DA, &[0x104B2]),
    CaseRecord::new(0x104DB, &[0x104B3]),
    CaseRecord::new(0x104DC, &[0x104B4]),
    CaseRecord::new(0x104DD, &[0x104B5]),
    CaseRecord::new(0x104DE, &[0x104B6]),
    CaseRecord::new(0x104DF, &[0x104B7]),
    CaseRecord::new(0x104E0, &[0x104B8]),
    CaseRecord::new(0x104E1, &[0x104B9]),
    CaseRecord::new(0x104E2, &[0x104BA]),
    CaseRecord::new(0x104E3, &[0x104BB]),
    CaseRecord::new(0x104E4, &[0x104BC]),
    CaseRecord::new(0x104E5, &[0x104BD]),
    CaseRecord::new(0x104E6, &[0x104BE]),
    CaseRecord::new(0x104E7, &[0x104BF]),
    CaseRecord::new(0x104E8, &[0x104C0]),
    CaseRecord::new(0x104E9, &[0x104C1]),
    CaseRecord::new(0x104EA, &[0x104C2]),
    CaseRecord::new(0x104EB, &[0x104C3]),
    CaseRecord::new(0x104EC, &[0x104C4]),
    CaseRecord::new(0x104ED, &[0x104C5]),
    CaseRecord::new(0x104EE, &[0x104C6]),
    CaseRecord::new(0x104EF, &[0x104C7]),
    CaseRecord::new(0x104F0, &[0x104C8]),
    CaseRecord::new(0x104F1, &[0x104C9]),
    CaseRecord::new(0x104F2, &[0x104CA]),
    CaseRecord::new(0x104F3, &[0x104CB]),
    CaseRecord::new(0x104F4, &[0x104CC]),
    CaseRecord::new(0x104F5, &[0x104CD]),
    CaseRecord::new(0x104F6, &[0x104CE]),
    CaseRecord::new(0x104F7, &[0x104CF]),
    CaseRecord::new(0x104F8, &[0x104D0]),
    CaseRecord::new(0x104F9, &[0x104D1]),
    CaseRecord::new(0x104FA, &[0x104D2]),
    CaseRecord::new(0x104FB, &[0x104D3]),
    CaseRecord::new(0x10597, &[0x10570]),
    CaseRecord::new(0x10598, &[0x10571]),
    CaseRecord::new(0x10599, &[0x10572]),
    CaseRecord::new(0x1059A, &[0x10573]),
    CaseRecord::new(0x1059B, &[0x10574]),
    CaseRecord::new(0x1059C, &[0x10575]),
    CaseRecord::new(0x1059D, &[0x10576]),
    CaseRecord::new(0x1059E, &[0x10577]),
    CaseRecord::new(0x1059F, &[0x10578]),
    CaseRecord::new(0x105A0, &[0x10579]),
    CaseRecord::new(0x105A1, &[0x1057A]),
    CaseRecord::new(0x105A3, &[0x1057C]),
    CaseRecord::new(0x105A4, &[0x1057D]),
    CaseRecord::new(0x105A5, &[0x1057E]),
    CaseRecord::new(0x105A6, &[0x1057F]),
    CaseRecord::new(0x105A7, &[0x10580]),
    CaseRecord::new(0x105A8, &[0x10581]),
    CaseRecord::new(0x105A9, &[0x10582]),
    CaseRecord::new(0x105AA, &[0x10583]),
    CaseRecord::new(0x105AB, &[0x10584]),
    CaseRecord::new(0x105AC, &[0x10585]),
    CaseRecord::new(0x105AD, &[0x10586]),
    CaseRecord::new(0x105AE, &[0x10587]),
    CaseRecord::new(0x105AF, &[0x10588]),
    CaseRecord::new(0x105B0, &[0x10589]),
    CaseRecord::new(0x105B1, &[0x1058A]),
    CaseRecord::new(0x105B3, &[0x1058C]),
    CaseRecord::new(0x105B4, &[0x1058D]),
    CaseRecord::new(0x105B5, &[0x1058E]),
    CaseRecord::new(0x105B6, &[0x1058F]),
    CaseRecord::new(0x105B7, &[0x10590]),
    CaseRecord::new(0x105B8, &[0x10591]),
    CaseRecord::new(0x105B9, &[0x10592]),
    CaseRecord::new(0x105BB, &[0x10594]),
    CaseRecord::new(0x105BC, &[0x10595]),
    CaseRecord::new(0x10CC0, &[0x10C80]),
    CaseRecord::new(0x10CC1, &[0x10C81]),
    CaseRecord::new(0x10CC2, &[0x10C82]),
    CaseRecord::new(0x10CC3, &[0x10C83]),
    CaseRecord::new(0x10CC4, &[0x10C84]),
    CaseRecord::new(0x10CC5, &[0x10C85]),
    CaseRecord::new(0x10CC6, &[0x10C86]),
    CaseRecord::new(0x10CC7, &[0x10C87]),
    CaseRecord::new(0x10CC8, &[0x10C88]),
    CaseRecord::new(0x10CC9, &[0x10C89]),
    CaseRecord::new(0x10CCA, &[0x10C8A]),
    CaseRecord::new(0x10CCB, &[0x10C8B]),
    CaseRecord::new(0x10CCC, &[0x10C8C]),
    CaseRecord::new(0x10CCD, &[0x10C8D]),
    CaseRecord::new(0x10CCE, &[0x10C8E]),
    CaseRecord::new(0x10CCF, &[0x10C8F]),
    CaseRecord::new(0x10CD0, &[0x10C90]),
    CaseRecord::new(0x10CD1, &[0x10C91]),
    CaseRecord::new(0x10CD2, &[0x10C92]),
    CaseRecord::new(0x10CD3, &[0x10C93]),
    CaseRecord::new(0x10CD4, &[0x10C94]),
    CaseRecord::new(0x10CD5, &[0x10C95]),
    CaseRecord::new(0x10CD6, &[0x10C96]),
    CaseRecord::new(0x10CD7, &[0x10C97]),
    CaseRecord::new(0x10CD8, &[0x10C98]),
    CaseRecord::new(0x10CD9, &[0x10C99]),
    CaseRecord::new(0x10CDA, &[0x10C9A]),
    CaseRecord::new(0x10CDB, &[0x10C9B]),
    CaseRecord::new(0x10CDC, &[0x10C9C]),
    CaseRecord::new(0x10CDD, &[0x10C9D]),
    CaseRecord::new(0x10CDE, &[0x10C9E]),
    CaseRecord::new(0x10CDF, &[0x10C9F]),
    CaseRecord::new(0x10CE0, &[0x10CA0]),
    CaseRecord::new(0x10CE1, &[0x10CA1]),
    CaseRecord::new(0x10CE2, &[0x10CA2]),
    CaseRecord::new(0x10CE3, &[0x10CA3]),
    CaseRecord::new(0x10CE4, &[0x10CA4]),
    CaseRecord::new(0x10CE5, &[0x10CA5]),
    CaseRecord::new(0x10CE6, &[0x10CA6]),
    CaseRecord::new(0x10CE7, &[0x10CA7]),
    CaseRecord::new(0x10CE8, &[0x10CA8]),
    CaseRecord::new(0x10CE9, &[0x10CA9]),
    CaseRecord::new(0x10CEA, &[0x10CAA]),
    CaseRecord::new(0x10CEB, &[0x10CAB]),
    CaseRecord::new(0x10CEC, &[0x10CAC]),
    CaseRecord::new(0x10CED, &[0x10CAD]),
    CaseRecord::new(0x10CEE, &[0x10CAE]),
    CaseRecord::new(0x10CEF, &[0x10CAF]),
    CaseRecord::new(0x10CF0, &[0x10CB0]),
    CaseRecord::new(0x10CF1, &[0x10CB1]),
    CaseRecord::new(0x10CF2, &[0x10CB2]),
    CaseRecord::new(0x118C0, &[0x118A0]),
    CaseRecord::new(0x118C1, &[0x118A1]),
    CaseRecord::new(0x118C2, &[0x118A2]),
    CaseRecord::new(0x118C3, &[0x118A3]),
    CaseRecord::new(0x118C4, &[0x118A4]),
    CaseRecord::new(0x118C5, &[0x118A5]),
    CaseRecord::new(0x118C6, &[0x118A6]),
    CaseRecord::new(0x118C7, &[0x118A7]),
    CaseRecord::new(0x118C8, &[0x118A8]),
    CaseRecord::new(0x118C9, &[0x118A9]),
    CaseRecord::new(0x118CA, &[0x118AA]),
    CaseRecord::new(0x118CB, &[0x118AB]),
    CaseRecord::new(0x118CC, &[0x118AC]),
    CaseRecord::new(0x118CD, &[0x118AD]),
    CaseRecord::new(0x118CE, &[0x118AE]),
    CaseRecord::new(0x118CF, &[0x118AF]),
    CaseRecord::new(0x118D0, &[0x118B0]),
    CaseRecord::new(0x118D1, &[0x118B1]),
    CaseRecord::new(0x118D2, &[0x118B2]),
    CaseRecord::new(0x118D3, &[0x118B3]),
    CaseRecord::new(0x118D4, &[0x118B4]),
    CaseRecord::new(0x118D5, &[0x118B5]),
    CaseRecord::new(0x118D6, &[0x118B6]),
    CaseRecord::new(0x118D7, &[0x118B7]),
    CaseRecord::new(0x118D8, &[0x118B8]),
    CaseRecord::new(0x118D9, &[0x118B9]),
    CaseRecord::new(0x118DA, &[0x118BA]),
    CaseRecord::new(0x118DB, &[0x118BB]),
    CaseRecord::new(0x118DC, &[0x118BC]),
    CaseRecord::new(0x118DD, &[0x118BD]),
    CaseRecord::new(0x118DE, &[0x118BE]),
    CaseRecord::new(0x118DF, &[0x118BF]),
    CaseRecord::new(0x16E60, &[0x16E40]),
    CaseRecord::new(0x16E61, &[0x16E41]),
    CaseRecord::new(0x16E62, &[0x16E42]),
    CaseRecord::new(0x16E63, &[0x16E43]),
    CaseRecord::new(0x16E64, &[0x16E44]),
    CaseRecord::new(0x16E65, &[0x16E45]),
    CaseRecord::new(0x16E66, &[0x16E46]),
    CaseRecord::new(0x16E67, &[0x16E47]),
    CaseRecord::new(0x16E68, &[0x16E48]),
    CaseRecord::new(0x16E69, &[0x16E49]),
    CaseRecord::new(0x16E6A, &[0x16E4A]),
    CaseRecord::new(0x16E6B, &[0x16E4B]),
    CaseRecord::new(0x16E6C, &[0x16E4C]),
    CaseRecord::new(0x16E6D, &[0x16E4D]),
    CaseRecord::new(0x16E6E, &[0x16E4E]),
    CaseRecord::new(0x16E6F, &[0x16E4F]),
    CaseRecord::new(0x16E70, &[0x16E50]),
    CaseRecord::new(0x16E71, &[0x16E51]),
    CaseRecord::new(0x16E72, &[0x16E52]),
    CaseRecord::new(0x16E73, &[0x16E53]),
    CaseRecord::new(0x16E74, &[0x16E54]),
    CaseRecord::new(0x16E75, &[0x16E55]),
    CaseRecord::new(0x16E76, &[0x16E56]),
    CaseRecord::new(0x16E77, &[0x16E57]),
    CaseRecord::new(0x16E78, &[0x16E58]),
    CaseRecord::new(0x16E79, &[0x16E59]),
    CaseRecord::new(0x16E7A, &[0x16E5A]),
    CaseRecord::new(0x16E7B, &[0x16E5B]),
    CaseRecord::new(0x16E7C, &[0x16E5C]),
    CaseRecord::new(0x16E7D, &[0x16E5D]),
    CaseRecord::new(0x16E7E, &[0x16E5E]),
    CaseRecord::new(0x16E7F, &[0x16E5F]),
    CaseRecord::new(0x1E922, &[0x1E900]),
    CaseRecord::new(0x1E923, &[0x1E901]),
    CaseRecord::new(0x1E924, &[0x1E902]),
    CaseRecord::new(0x1E925, &[0x1E903]),
    CaseRecord::new(0x1E926, &[0x1E904]),
    CaseRecord::new(0x1E927, &[0x1E905]),
    CaseRecord::new(0x1E928, &[0x1E906]),
    CaseRecord::new(0x1E929, &[0x1E907]),
    CaseRecord::new(0x1E92A, &[0x1E908]),
    CaseRecord::new(0x1E92B, &[0x1E909]),
    CaseRecord::new(0x1E92C, &[0x1E90A]),
    CaseRecord::new(0x1E92D, &[0x1E90B]),
    CaseRecord::new(0x1E92E, &[0x1E90C]),
    CaseRecord::new(0x1E92F, &[0x1E90D]),
    CaseRecord::new(0x1E930, &[0x1E90E]),
    CaseRecord::new(0x1E931, &[0x1E90F]),
    CaseRecord::new(0x1E932, &[0x1E910]),
    CaseRecord::new(0x1E933, &[0x1E911]),
    CaseRecord::new(0x1E934, &[0x1E912]),
    CaseRecord::new(0x1E935, &[0x1E913]),
    CaseRecord::new(0x1E936, &[0x1E914]),
    CaseRecord::new(0x1E937, &[0x1E915]),
    CaseRecord::new(0x1E938, &[0x1E916]),
    CaseRecord::new(0x1E939, &[0x1E917]),
    CaseRecord::new(0x1E93A, &[0x1E918]),
    CaseRecord::new(0x1E93B, &[0x1E919]),
    CaseRecord::new(0x1E93C, &[0x1E91A]),
    CaseRecord::new(0x1E93D, &[0x1E91B]),
    CaseRecord::new(0x1E93E, &[0x1E91C]),
    CaseRecord::new(0x1E93F, &[0x1E91D]),
    CaseRecord::new(0x1E940, &[0x1E91E]),
    CaseRecord::new(0x1E941, &[0x1E91F]),
    CaseRecord::new(0x1E942, &[0x1E920]),
    CaseRecord::new(0x1E943, &[0x1E921]),
];

pub const LOWERCASE: &[CaseRecord<'static>] = &[
    CaseRecord::new(0x0041, &[0x0061]),
    CaseRecord::new(0x0042, &[0x0062]),
    CaseRecord::new(0x0043, &[0x0063]),
    CaseRecord::new(0x0044, &[0x0064]),
    CaseRecord::new(0x0045, &[0x0065]),
    CaseRecord::new(0x0046, &[0x0066]),
    CaseRecord::new(0x0047, &[0x0067]),
    CaseRecord::new(0x0048, &[0x0068]),
    CaseRecord::new(0x0049, &[0x0069]),
    CaseRecord::new(0x004A, &[0x006A]),
    CaseRecord::new(0x004B, &[0x006B]),
    CaseRecord::new(0x004C, &[0x006C]),
    CaseRecord::new(0x004D, &[0x006D]),
    CaseRecord::new(0x004E, &[0x006E]),
    CaseRecord::new(0x004F, &[0x006F]),
    CaseRecord::new(0x0050, &[0x0070]),
    CaseRecord::new(0x0051, &[0x0071]),
    CaseRecord::new(0x0052, &[0x0072]),
    CaseRecord::new(0x0053, &[0x0073]),
    CaseRecord::new(0x0054, &[0x0074]),
    CaseRecord::new(0x0055, &[0x0075]),
    CaseRecord::new(0x0056, &[0x0076]),
    CaseRecord::new(0x0057, &[0x0077]),
    CaseRecord::new(0x0058, &[0x0078]),
    CaseRecord::new(0x0059, &[0x0079]),
    CaseRecord::new(0x005A, &[0x007A]),
    CaseRecord::new(0x00C0, &[0x00E0]),
    CaseRecord::new(0x00C1, &[0x00E1]),
    CaseRecord::new(0x00C2, &[0x00E2]),
    CaseRecord::new(0x00C3, &[0x00E3]),
    CaseRecord::new(0x00C4, &[0x00E4]),
    CaseRecord::new(0x00C5, &[0x00E5]),
    CaseRecord::new(0x00C6, &[0x00E6]),
    CaseRecord::new(0x00C7, &[0x00E7]),
    CaseRecord::new(0x00C8, &[0x00E8]),
    CaseRecord::new(0x00C9, &[0x00E9]),
    CaseRecord::new(0x00CA, &[0x00EA]),
    CaseRecord::new(0x00CB, &[0x00EB]),
    CaseRecord::new(0x00CC, &[0x00EC]),
    CaseRecord::new(0x00CD, &[0x00ED]),
    CaseRecord::new(0x00CE, &[0x00EE]),
    CaseRecord::new(0x00CF, &[0x00EF]),
    CaseRecord::new(0x00D0, &[0x00F0]),
    CaseRecord::new(0x00D1, &[0x00F1]),
    CaseRecord::new(0x00D2, &[0x00F2]),
    CaseRecord::new(0x00D3, &[0x00F3]),
    CaseRecord::new(0x00D4, &[0x00F4]),
    CaseRecord::new(0x00D5, &[0x00F5]),
    CaseRecord::new(0x00D6, &[0x00F6]),
    CaseRecord::new(0x00D8, &[0x00F8]),
    CaseRecord::new(0x00D9, &[0x00F9]),
    CaseRecord::new(0x00DA, &[0x00FA]),
    CaseRecord::new(0x00DB, &[0x00FB]),
    CaseRecord::new(0x00DC, &[0x00FC]),
    CaseRecord::new(0x00DD, &[0x00FD]),
    CaseRecord::new(0x00DE, &[0x00FE]),
    CaseRecord::new(0x0100, &[0x0101]),
    CaseRecord::new(0x0102, &[0x0103]),
    CaseRecord::new(0x0104, &[0x0105]),
    CaseRecord::new(0x0106, &[0x0107]),
    CaseRecord::new(0x0108, &[0x0109]),
    CaseRecord::new(0x010A, &[0x010B]),
    CaseRecord::new(0x010C, &[0x010D]),
    CaseRecord::new(0x010E, &[0x010F]),
    CaseRecord::new(0x0110, &[0x0111]),
    CaseRecord::new(0x0112, &[0x0113]),
    CaseRecord::new(0x0114, &[0x0115]),
    CaseRecord::new(0x0116, &[0x0117]),
    CaseRecord::new(0x0118, &[0x0119]),
    CaseRecord::new(0x011A, &[0x011B]),
    CaseRecord::new(0x011C, &[0x011D]),
    CaseRecord::new(0x011E, &[0x011F]),
    CaseRecord::new(0x0120, &[0x0121]),
    CaseRecord::new(0x0122, &[0x0123]),
    CaseRecord::new(0x0124, &[0x0125]),
    CaseRecord::new(0x0126, &[0x0127]),
    CaseRecord::new(0x0128, &[0x0129]),
    CaseRecord::new(0x012A, &[0x012B]),
    CaseRecord::new(0x012C, &[0x012D]),
    CaseRecord::new(0x012E, &[0x012F]),
    CaseRecord::new(0x0130, &[0x0069, 0x0307]),
    CaseRecord::new(0x0132, &[0x0133]),
    CaseRecord::new(0x0134, &[0x0135]),
    CaseRecord::new(0x0136, &[0x0137]),
    CaseRecord::new(0x0139, &[0x013A]),
    CaseRecord::new(0x013B, &[0x013C]),
    CaseRecord::new(0x013D, &[0x013E]),
    CaseRecord::new(0x013F, &[0x0140]),
    CaseRecord::new(0x0141, &[0x0142]),
    CaseRecord::new(0x0143, &[0x0144]),
    CaseRecord::new(0x0145, &[0x0146]),
    CaseRecord::new(0x0147, &[0x0148]),
    CaseRecord::new(0x014A, &[0x014B]),
    CaseRecord::new(0x014C, &[0x014D]),
    CaseRecord::new(0x014E, &[0x014F]),
    CaseRecord::new(0x0150, &[0x0151]),
    CaseRecord::new(0x0152, &[0x0153]),
    CaseRecord::new(0x0154, &[0x0155]),
    CaseRecord::new(0x0156, &[0x0157]),
    CaseRecord::new(0x0158, &[0x0159]),
    CaseRecord::new(0x015A, &[0x015B]),
    CaseRecord::new(0x015C, &[0x015D]),
    CaseRecord::new(0x015E, &[0x015F]),
    CaseRecord::new(0x0160, &[0x0161]),
    CaseRecord::new(0x0162, &[0x0163]),
    CaseRecord::new(0x0164, &[0x0165]),
    CaseRecord::new(0x0166, &[0x0167]),
    CaseRecord::new(0x0168, &[0x0169]),
    CaseRecord::new(0x016A, &[0x016B]),
    CaseRecord::new(0x016C, &[0x016D]),
    CaseRecord::new(0x016E, &[0x016F]),
    CaseRecord::new(0x0170, &[0x0171]),
    CaseRecord::new(0x0172, &[0x0173]),
    CaseRecord::new(0x0174, &[0x0175]),
    CaseRecord::new(0x0176, &[0x0177]),
    CaseRecord::new(0x0178, &[0x00FF]),
    CaseRecord::new(0x0179, &[0x017A]),
    CaseRecord::new(0x017B, &[0x017C]),
    CaseRecord::new(0x017D, &[0x017E]),
    CaseRecord::new(0x0181, &[0x0253]),
    CaseRecord::new(0x0182, &[0x0183]),
    CaseRecord::new(0x0184, &[0x0185]),
    CaseRecord::new(0x0186, &[0x0254]),
    CaseRecord::new(0x0187, &[0x0188]),
    CaseRecord::new(0x0189, &[0x0256]),
    CaseRecord::new(0x018A, &[0x0257]),
    CaseRecord::new(0x018B, &[0x018C]),
    CaseRecord::new(0x018E, &[0x01DD]),
    CaseRecord::new(0x018F, &[0x0259]),
    CaseRecord::new(0x0190, &[0x025B]),
    CaseRecord::new(0x0191, &[0x0192]),
    CaseRecord::new(0x0193, &[0x0260]),
    CaseRecord::new(0x0194, &[0x0263]),
    CaseRecord::new(0x0196, &[0x0269]),
    CaseRecord::new(0x0197, &[0x0268]),
    CaseRecord::new(0x0198, &[0x0199]),
    CaseRecord::new(0x019C, &[0x026F]),
    CaseRecord::new(0x019D, &[0x0272]),
    CaseRecord::new(0x019F, &[0x0275]),
    CaseRecord::new(0x01A0, &[0x01A1]),
    CaseRecord::new(0x01A2, &[0x01A3]),
    CaseRecord::new(0x01A4, &[0x01A5]),
    CaseRecord::new(0x01A6, &[0x0280]),
    CaseRecord::new(0x01A7, &[0x01A8]),
    CaseRecord::new(0x01A9, &[0x0283]),
    CaseRecord::new(0x01AC, &[0x01AD]),
    CaseRecord::new(0x01AE, &[0x0288]),
    CaseRecord::new(0x01AF, &[0x01B0]),
    CaseRecord::new(0x01B1, &[0x028A]),
    CaseRecord::new(0x01B2, &[0x028B]),
    CaseRecord::new(0x01B3, &[0x01B4]),
    CaseRecord::new(0x01B5, &[0x01B6]),
    CaseRecord::new(0x01B7, &[0x0292]),
    CaseRecord::new(0x01B8, &[0x01B9]),
    CaseRecord::new(0x01BC, &[0x01BD]),
    CaseRecord::new(0x01C4, &[0x01C6]),
    CaseRecord::new(0x01C5, &[0x01C6]),
    CaseRecord::new(0x01C7, &[0x01C9]),
    CaseRecord::new(0x01C8, &[0x01C9]),
    CaseRecord::new(0x01CA, &[0x01CC]),
    CaseRecord::new(0x01CB, &[0x01CC]),
    CaseRecord::new(0x01CD, &[0x01CE]),
    CaseRecord::new(0x01CF, &[0x01D0]),
    CaseRecord::new(0x01D1, &[0x01D2]),
    CaseRecord::new(0x01D3, &[0x01D4]),
    CaseRecord::new(0x01D5, &[0x01D6]),
    CaseRecord::new(0x01D7, &[0x01D8]),
    CaseRecord::new(0x01D9, &[0x01DA]),
    CaseRecord::new(0x01DB, &[0x01DC]),
    CaseRecord::new(0x01DE, &[0x01DF]),
    CaseRecord::new(0x01E0, &[0x01E1]),
    CaseRecord::new(0x01E2, &[0x01E3]),
    CaseRecord::new(0x01E4, &[0x01E5]),
    CaseRecord::new(0x01E6, &[0x01E7]),
    CaseRecord::new(0x01E8, &[0x01E9]),
    CaseRecord::new(0x01EA, &[0x01EB]),
    CaseRecord::new(0x01EC, &[0x01ED]),
    CaseRecord::new(0x01EE, &[0x01EF]),
    CaseRecord::new(0x01F1, &[0x01F3]),
    CaseRecord::new(0x01F2, &[0x01F3]),
    CaseRecord::new(0x01F4, &[0x01F5]),
    CaseRecord::new(0x01F6, &[0x0195]),
    CaseRecord::new(0x01F7, &[0x01BF]),
    CaseRecord::new(0x01F8, &[0x01F9]),
    CaseRecord::new(0x01FA, &[0x01FB]),
    CaseRecord::new(0x01FC, &[0x01FD]),
    CaseRecord::new(0x01FE, &[0x01FF]),
    CaseRecord::new(0x0200, &[0x0201]),
    CaseRecord::new(0x0202, &[0x0203]),
    CaseRecord::new(0x0204, &[0x0205]),
    CaseRecord::new(0x0206, &[0x0207]),
    CaseRecord::new(0x0208, &[0x0209]),
    CaseRecord::new(0x020A, &[0x020B]),
    CaseRecord::new(0x020C, &[0x020D]),
    CaseRecord::new(0x020E, &[0x020F]),
    CaseRecord::new(0x0210, &[0x0211]),
    CaseRecord::new(0x0212, &[0x0213]),
    CaseRecord::new(0x0214, &[0x0215]),
    CaseRecord::new(0x0216, &[0x0217]),
    CaseRecord::new(0x0218, &[0x0219]),
    CaseRecord::new(0x021A, &[0x021B]),
    CaseRecord::new(0x021C, &[0x021D]),
    CaseRecord::new(0x021E, &[0x021F]),
    CaseRecord::new(0x0220, &[0x019E]),
    CaseRecord::new(0x0222, &[0x0223]),
    CaseRecord::new(0x0224, &[0x0225]),
    CaseRecord::new(0x0226, &[0x0227]),
    CaseRecord::new(0x0228, &[0x0229]),
    CaseRecord::new(0x022A, &[0x022B]),
    CaseRecord::new(0x022C, &[0x022D]),
    CaseRecord::new(0x022E, &[0x022F]),
    CaseRecord::new(0x0230, &[0x0231]),
    CaseRecord::new(0x0232, &[0x0233]),
    CaseRecord::new(0x023A, &[0x2C65]),
    CaseRecord::new(0x023B, &[0x023C]),
    CaseRecord::new(0x023D, &[0x019A]),
    CaseRecord::new(0x023E, &[0x2C66]),
    CaseRecord::new(0x0241, &[0x0242]),
    CaseRecord::new(0x0243, &[0x0180]),
    CaseRecord::new(0x0244, &[0x0289]),
    CaseRecord::new(0x0245, &[0x028C]),
    CaseRecord::new(0x0246, &[0x0247]),
    CaseRecord::new(0x0248, &[0x0249]),
    CaseRecord::new(0x024A, &[0x024B]),
    CaseRecord::new(0x024C, &[0x024D]),
    CaseRecord::new(0x024E, &[0x024F]),
    CaseRecord::new(0x0370, &[0x0371]),
    CaseRecord::new(0x0372, &[0x0373]),
    CaseRecord::new(0x0376, &[0x0377]),
    CaseRecord::new(0x037F, &[0x03F3]),
    CaseRecord::new(0x0386, &[0x03AC]),
    CaseRecord::new(0x0388, &[0x03AD]),
    CaseRecord::new(0x0389, &[0x03AE]),
    CaseRecord::new(0x038A, &[0x03AF]),
    CaseRecord::new(0x038C, &[0x03CC]),
    CaseRecord::new(0x038E, &[0x03CD]),
    CaseRecord::new(0x038F, &[0x03CE]),
    CaseRecord::new(0x0391, &[0x03B1]),
    CaseRecord::new(0x0392, &[0x03B2]),
    CaseRecord::new(0x0393, &[0x03B3]),
    CaseRecord::new(0x0394, &[0x03B4]),
    CaseRecord::new(0x0395, &[0x03B5]),
    CaseRecord::new(0x0396, &[0x03B6]),
    CaseRecord::new(0x0397, &[0x03B7]),
    CaseRecord::new(0x0398, &[0x03B8]),
    CaseRecord::new(0x0399, &[0x03B9]),
    CaseRecord::new(0x039A, &[0x03BA]),
    CaseRecord::new(0x039B, &[0x03BB]),
    CaseRecord::new(0x039C, &[0x03BC]),
    CaseRecord::new(0x039D, &[0x03BD]),
    CaseRecord::new(0x039E, &[0x03BE]),
    CaseRecord::new(0x039F, &[0x03BF]),
    CaseRecord::new(0x03A0, &[0x03C0]),
    CaseRecord::new(0x03A1, &[0x03C1]),
    CaseRecord::new(0x03A3, &[0x03C3]),
    CaseRecord::new(0x03A4, &[0x03C4]),
    CaseRecord::new(0x03A5, &[0x03C5]),
    CaseRecord::new(0x03A6, &[0x03C6]),
    CaseRecord::new(0x03A7, &[0x03C7]),
    CaseRecord::new(0x03A8, &[0x03C8]),
    CaseRecord::new(0x03A9, &[0x03C9]),
    CaseRecord::new(0x03AA, &[0x03CA]),
    CaseRecord::new(0x03AB, &[0x03CB]),
    CaseRecord::new(0x03CF, &[0x03D7]),
    CaseRecord::new(0x03D8, &[0x03D9]),
    CaseRecord::new(0x03DA, &[0x03DB]),
    CaseRecord::new(0x03DC, &[0x03DD]),
    CaseRecord::new(0x03DE, &[0x03DF]),
    CaseRecord::new(0x03E0, &[0x03E1]),
    CaseRecord::new(0x03E2, &[0x03E3]),
    CaseRecord::new(0x03E4, &[0x03E5]),
    CaseRecord::new(0x03E6, &[0x03E7]),
    CaseRecord::new(0x03E8, &[0x03E9]),
    CaseRecord::new(0x03EA, &[0x03EB]),
    CaseRecord::new(0x03EC, &[0x03ED]),
    CaseRecord::new(0x03EE, &[0x03EF]),
    CaseRecord::new(0x03F4, &[0x03B8]),
    CaseRecord::new(0x03F7, &[0x03F8]),
    CaseRecord::new(0x03F9, &[0x03F2]),
    CaseRecord::new(0x03FA, &[0x03FB]),
    CaseRecord::new(0x03FD, &[0x037B]),
    CaseRecord::new(0x03FE, &[0x037C]),
    CaseRecord::new(0x03FF, &[0x037D]),
    CaseRecord::new(0x0400, &[0x0450]),
    CaseRecord::new(0x0401, &[0x0451]),
    CaseRecord::new(0x0402, &[0x0452]),
    CaseRecord::new(0x0403, &[0x0453]),
    CaseRecord::new(0x0404, &[0x0454]),
    CaseRecord::new(0x0405, &[0x0455]),
    CaseRecord::new(0x0406, &[0x0456]),
    CaseRecord::new(0x0407, &[0x0457]),
    CaseRecord::new(0x0408, &[0x0458]),
    CaseRecord::new(0x0409, &[0x0459]),
    CaseRecord::new(0x040A, &[0x045A]),
    CaseRecord::new(0x040B, &[0x045B]),
    CaseRecord::new(0x040C, &[0x045C]),
    CaseRecord::new(0x040D, &[0x045D]),
    CaseRecord::new(0x040E, &[0x045E]),
    CaseRecord::new(0x040F, &[0x045F]),
    CaseRecord::new(0x0410, &[0x0430]),
    CaseRecord::new(0x0411, &[0x0431]),
    CaseRecord::new(0x0412, &[0x0432]),
    CaseRecord::new(0x0413, &[0x0433]),
    CaseRecord::new(0x0414, &[0x0434]),
    CaseRecord::new(0x0415, &[0x0435]),
    CaseRecord::new(0x0416, &[0x0436]),
    CaseRecord::new(0x0417, &[0x0437]),
    CaseRecord::new(0x0418, &[0x0438]),
    CaseRecord::new(0x0419, &[0x0439]),
    CaseRecord::new(0x041A, &[0x043A]),
    CaseRecord::new(0x041B, &[0x043B]),
    CaseRecord::new(0x041C, &[0x043C]),
    CaseRecord::new(0x041D, &[0x043D]),
    CaseRecord::new(0x041E, &[0x043E]),
    CaseRecord::new(0x041F, &[0x043F]),
    CaseRecord::new(0x0420, &[0x0440]),
    CaseRecord::new(0x0421, &[0x0441]),
    CaseRecord::new(0x0422, &[0x0442]),
    CaseRecord::new(0x0423, &[0x0443]),
    CaseRecord::new(0x0424, &[0x0444]),
    CaseRecord::new(0x0425, &[0x0445]),
    CaseRecord::new(0x0426, &[0x0446]),
    CaseRecord::new(0x0427, &[0x0447]),
    CaseRecord::new(0x0428, &[0x0448]),
    CaseRecord::new(0x0429, &[0x0449]),
    CaseRecord::new(0x042A, &[0x044A]),
    CaseRecord::new(0x042B, &[0x044B]),
    CaseRecord::new(0x042C, &[0x044C]),
    CaseRecord::new(0x042D, &[0x044D]),
    CaseRecord::new(0x042E, &[0x044E]),
    CaseRecord::new(0x042F, &[0x044F]),
    CaseRecord::new(0x0460, &[0x0461]),
    CaseRecord::new(0x0462, &[0x0463]),
    CaseRecord::new(0x0464, &[0x0465]),
    CaseRecord::new(0x0466, &[0x0467]),
    CaseRecord::new(0x0468, &[0x0469]),
    CaseRecord::new(0x046A, &[0x046B]),
    CaseRecord::new(0x046C, &[0x046D]),
    CaseRecord::new(0x046E, &[0x046F]),
    CaseRecord::new(0x0470, &[0x0471]),
    CaseRecord::new(0x0472, &[0x0473]),
    CaseRecord::new(0x0474, &[0x0475]),
    CaseRecord::new(0x0476, &[0x0477]),
    CaseRecord::new(0x0478, &[0x0479]),
    CaseRecord::new(0x047A, &[0x047B]),
    CaseRecord::new(0x047C, &[0x047D]),
    CaseRecord::new(0x047E, &[0x047F]),
    CaseRecord::new(0x0480, &[0x0481]),
    CaseRecord::new(0x048A, &[0x048B]),
    CaseRecord::new(0x048C, &[0x048D]),
    CaseRecord::new(0x048E, &[0x048F]),
    CaseRecord::new(0x0490, &[0x0491]),
    CaseRecord::new(0x0492, &[0x0493]),
    CaseRecord::new(0x0494, &[0x0495]),
    CaseRecord::new(0x0496, &[0x0497]),
    CaseRecord::new(0x0498, &[0x0499]),
    CaseRecord::new(0x049A, &[0x049B]),
    CaseRecord::new(0x049C, &[0x049D]),
    CaseRecord::new(0x049E, &[0x049F]),
    CaseRecord::new(0x04A0, &[0x04A1]),
    CaseRecord::new(0x04A2, &[0x04A3]),
    CaseRecord::new(0x04A4, &[0x04A5]),
    CaseRecord::new(0x04A6, &[0x04A7]),
    CaseRecord::new(0x04A8, &[0x04A9]),
    CaseRecord::new(0x04AA, &[0x04AB]),
    CaseRecord::new(0x04AC, &[0x04AD]),
    CaseRecord::new(0x04AE, &[0x04AF]),
    CaseRecord::new(0x04B0, &[0x04B1]),
    CaseRecord::new(0x04B2, &[0x04B3]),
    CaseRecord::new(0x04B4, &[0x04B5]),
    CaseRecord::new(0x04B6, &[0x04B7]),
    CaseRecord::new(0x04B8, &[0x04B9]),
    CaseRecord::new(0x04BA, &[0x04BB]),
    CaseRecord::new(0x04BC, &[0x04BD]),
    CaseRecord::new(0x04BE, &[0x04BF]),
    CaseRecord::new(0x04C0, &[0x04CF]),
    CaseRecord::new(0x04C1, &[0x04C2]),
    CaseRecord::new(0x04C3, &[0x04C4]),
    CaseRecord::new(0x04C5, &[0x04C6]),
    CaseRecord::new(0x04C7, &[0x04C8]),
    CaseRecord::new(0x04C9, &[0x04CA]),
    CaseRecord::new(0x04CB, &[0x04CC]),
    CaseRecord::new(0x04CD, &[0x04CE]),
    CaseRecord::new(0x04D0, &[0x04D1]),
    CaseRecord::new(0x04D2, &[0x04D3]),
    CaseRecord::new(0x04D4, &[0x04D5]),
    CaseRecord::new(0x04D6, &[0x04D7]),
    CaseRecord::new(0x04D8, &[0x04D9]),
    CaseRecord::new(0x04DA, &[0x04DB]),
    CaseRecord::new(0x04DC, &[0x04DD]),
    CaseRecord::new(0x04DE, &[0x04DF]),
    CaseRecord::new(0x04E0, &[0x04E1]),
    CaseRecord::new(0x04E2, &[0x04E3]),
    CaseRecord::new(0x04E4, &[0x04E5]),
    CaseRecord::new(0x04E6, &[0x04E7]),
    CaseRecord::new(0x04E8, &[0x04E9]),
    CaseRecord::new(0x04EA, &[0x04EB]),
    CaseRecord::new(0x04EC, &[0x04ED]),
    CaseRecord::new(0x04EE, &[0x04EF]),
    CaseRecord::new(0x04F0, &[0x04F1]),
    CaseRecord::new(0x04F2, &[0x04F3]),
    CaseRecord::new(0x04F4, &[0x04F5]),
    CaseRecord::new(0x04F6, &[0x04F7]),
    CaseRecord::new(0x04F8, &[0x04F9]),
    CaseRecord::new(0x04FA, &[0x04FB]),
    CaseRecord::new(0x04FC, &[0x04FD]),
    CaseRecord::new(0x04FE, &[0x04FF]),
    CaseRecord::new(0x0500, &[0x0501]),
    CaseRecord::new(0x0502, &[0x0503]),
    CaseRecord::new(0x0504, &[0x0505]),
    CaseRecord::new(0x0506, &[0x0507]),
    CaseRecord::new(0x0508, &[0x0509]),
    CaseRecord::new(0x050A, &[0x050B]),
    CaseRecord::new(0x050C, &[0x050D]),
    CaseRecord::new(0x050E, &[0x050F]),
    CaseRecord::new(0x0510, &[0x0511]),
    CaseRecord::new(0x0512, &[0x0513]),
    CaseRecord::new(0x0514, &[0x0515]),
    CaseRecord::new(0x0516, &[0x0517]),
    CaseRecord::new(0x0518, &[0x0519]),
    CaseRecord::new(0x051A, &[0x051B]),
    CaseRecord::new(0x051C, &[0x051D]),
    CaseRecord::new(0x051E, &[0x051F]),
    CaseRecord::new(0x0520, &[0x0521]),
    CaseRecord::new(0x0522, &[0x0523]),
    CaseRecord::new(0x0524, &[0x0525]),
    CaseRecord::new(0x0526, &[0x0527]),
    CaseRecord::new(0x0528, &[0x0529]),
    CaseRecord::new(0x052A, &[0x052B]),
    CaseRecord::new(0x052C, &[0x052D]),
    CaseRecord::new(0x052E, &[0x052F]),
    CaseRecord::new(0x0531, &[0x0561]),
    CaseRecord::new(0x0532, &[0x0562]),
    CaseRecord::new(0x0533, &[0x0563]),
    CaseRecord::new(0x0534, &[0x0564]),
    CaseRecord::new(0x0535, &[0x0565]),
    CaseRecord::new(0x0536, &[0x0566]),
    CaseRecord::new(0x0537, &[0x0567]),
    CaseRecord::new(0x0538, &[0x0568]),
    CaseRecord::new(0x0539, &[0x0569]),
    CaseRecord::new(0x053A, &[0x056A]),
    CaseRecord::new(0x053B, &[0x056B]),
    CaseRecord::new(0x053C, &[0x056C]),
    CaseRecord::new(0x053D, &[0x056D]),
    CaseRecord::new(0x053E, &[0x056E]),
    CaseRecord::new(0x053F, &[0x056F]),
    CaseRecord::new(0x0540, &[0x0570]),
    CaseRecord::new(0x0541, &[0x0571]),
    CaseRecord::new(0x0542, &[0x0572]),
    CaseRecord::new(0x0543, &[0x0573]),
    CaseRecord::new(0x0544, &[0x0574]),
    CaseRecord::new(0x0545, &[0x0575]),
    CaseRecord::new(0x0546, &[0x0576]),
    CaseRecord::new(0x0547, &[0x0577]),
    CaseRecord::new(0x0548, &[0x0578]),
    CaseRecord::new(0x0549, &[0x0579]),
    CaseRecord::new(0x054A, &[0x057A]),
    CaseRecord::new(0x054B, &[0x057B]),
    CaseRecord::new(0x054C, &[0x057C]),
    CaseRecord::new(0x054D, &[0x057D]),
    CaseRecord::new(0x054E, &[0x057E]),
    CaseRecord::new(0x054F, &[0x057F]),
    CaseRecord::new(0x0550, &[0x0580]),
    CaseRecord::new(0x0551, &[0x0581]),
    CaseRecord::new(0x0552, &[0x0582]),
    CaseRecord::new(0x0553, &[0x0583]),
    CaseRecord::new(0x0554, &[0x0584]),
    CaseRecord::new(0x0555, &[0x0585]),
    CaseRecord::new(0x0556, &[0x0586]),
    CaseRecord::new(0x10A0, &[0x2D00]),
    CaseRecord::new(0x10A1, &[0x2D01]),
    CaseRecord::new(0x10A2, &[0x2D02]),
    CaseRecord::new(0x10A3, &[0x2D03]),
    CaseRecord::new(0x10A4, &[0x2D04]),
    CaseRecord::new(0x10A5, &[0x2D05]),
    CaseRecord::new(0x10A6, &[0x2D06]),
    CaseRecord::new(0x10A7, &[0x2D07]),
    CaseRecord::new(0x10A8, &[0x2D08]),
    CaseRecord::new(0x10A9, &[0x2D09]),
    CaseRecord::new(0x10AA, &[0x2D0A]),
    CaseRecord::new(0x10AB, &[0x2D0B]),
    CaseRecord::new(0x10AC, &[0x2D0C]),
    CaseRecord::new(0x10AD, &[0x2D0D]),
    CaseRecord::new(0x10AE, &[0x2D0E]),
    CaseRecord::new(0x10AF, &[0x2D0F]),
    CaseRecord::new(0x10B0, &[0x2D10]),
    CaseRecord::new(0x10B1, &[0x2D11]),
    CaseRecord::new(0x10B2, &[0x2D12]),
    CaseRecord::new(0x10B3, &[0x2D13]),
    CaseRecord::new(0x10B4, &[0x2D14]),
    CaseRecord::new(0x10B5, &[0x2D15]),
    CaseRecord::new(0x10B6, &[0x2D16]),
    CaseRecord::new(0x10B7, &[0x2D17]),
    CaseRecord::new(0x10B8, &[0x2D18]),
    CaseRecord::new(0x10B9, &[0x2D19]),
    CaseRecord::new(0x10BA, &[0x2D1A]),
    CaseRecord::new(0x10BB, &[0x2D1B]),
    CaseRecord::new(0x10BC, &[0x2D1C]),
    CaseRecord::new(0x10BD, &[0x2D1D]),
    CaseRecord::new(0x10BE, &[0x2D1E]),
    CaseRecord::new(0x10BF, &[0x2D1F]),
    CaseRecord::new(0x10C0, &[0x2D20]),
    CaseRecord::new(0x10C1, &[0x2D21]),
    CaseRecord::new(0x10C2, &[0x2D22]),
    CaseRecord::new(0x10C3, &[0x2D23]),
    CaseRecord::new(0x10C4, &[0x2D24]),
    CaseRecord::new(0x10C5, &[0x2D25]),
    CaseRecord::new(0x10C7, &[0x2D27]),
    CaseRecord::new(0x10CD, &[0x2D2D]),
    CaseRecord::new(0x13A0, &[0xAB70]),
    CaseRecord::new(0x13A1, &[0xAB71]),
    CaseRecord::new(0x13A2, &[0xAB72]),
    CaseRecord::new(0x13A3, &[0xAB73]),
    CaseRecord::new(0x13A4, &[0xAB74]),
    CaseRecord::new(0x13A5, &[0xAB75]),
    CaseRecord::new(0x13A6, &[0xAB76]),
    CaseRecord::new(0x13A7, &[0xAB77]),
    CaseRecord::new(0x13A8, &[0xAB78]),
    CaseRecord::new(0x13A9, &[0xAB79]),
    CaseRecord::new(0x13AA, &[0xAB7A]),
    CaseRecord::new(0x13AB, &[0xAB7B]),
    CaseRecord::new(0x13AC, &[0xAB7C]),
    CaseRecord::new(0x13AD, &[0xAB7D]),
    CaseRecord::new(0x13AE, &[0xAB7E]),
    CaseRecord::new(0x13AF, &[0xAB7F]),
    CaseRecord::new(0x13B0, &[0xAB80]),
    CaseRecord::new(0x13B1, &[0xAB81]),
    CaseRecord::new(0x13B2, &[0xAB82]),
    CaseRecord::new(0x13B3, &[0xAB83]),
    CaseRecord::new(0x13B4, &[0xAB84]),
    CaseRecord::new(0x13B5, &[0xAB85]),
    CaseRecord::new(0x13B6, &[0xAB86]),
    CaseRecord::new(0x13B7, &[0xAB87]),
    CaseRecord::new(0x13B8, &[0xAB88]),
    CaseRecord::new(0x13B9, &[0xAB89]),
    CaseRecord::new(0x13BA, &[0xAB8A]),
    CaseRecord::new(0x13BB, &[0xAB8B]),
    CaseRecord::new(0x13BC, &[0xAB8C]),
    CaseRecord::new(0x13BD, &[0xAB8D]),
    CaseRecord::new(0x13BE, &[0xAB8E]),
    CaseRecord::new(0x13BF, &[0xAB8F]),
    CaseRecord::new(0x13C0, &[0xAB90]),
    CaseRecord::new(0x13C1, &[0xAB91]),
    CaseRecord::new(0x13C2, &[0xAB92]),
    CaseRecord::new(0x13C3, &[0xAB93]),
    CaseRecord::new(0x13C4, &[0xAB94]),
    CaseRecord::new(0x13C5, &[0xAB95]),
    CaseRecord::new(0x13C6, &[0xAB96]),
    CaseRecord::new(0x13C7, &[0xAB97]),
    CaseRecord::new(0x13C8, &[0xAB98]),
    CaseRecord::new(0x13C9, &[0xAB99]),
    CaseRecord::new(0x13CA, &[0xAB9A]),
    CaseRecord::new(0x13CB, &[0xAB9B]),
    CaseRecord::new(0x13CC, &[0xAB9C]),
    CaseRecord::new(0x13CD, &[0xAB9D]),
    CaseRecord::new(0x13CE, &[0xAB9E]),
    CaseRecord::new(0x13CF, &[0xAB9F]),
    CaseRecord::new(0x13D0, &[0xABA0]),
    CaseRecord::new(0x13D1, &[0xABA1]),
    CaseRecord::new(0x13D2, &[0xABA2]),
    CaseRecord::new(0x13D3, &[0xABA3]),
    CaseRecord::new(0x13D4, &[0xABA4]),
    CaseRecord::new(0x13D5, &[0xABA5]),
    CaseRecord::new(0x13D6, &[0xABA6]),
    CaseRecord::new(0x13D7, &[0xABA7]),
    CaseRecord::new(0x13D8, &[0xABA8]),
    CaseRecord::new(0x13D9, &[0xABA9]),
    CaseRecord::new(0x13DA, &[0xABAA]),
    CaseRecord::new(0x13DB, &[0xABAB]),
    CaseRecord::new(0x13DC, &[0xABAC]),
    CaseRecord::new(0x13DD, &[0xABAD]),
    CaseRecord::new(0x13DE, &[0xABAE]),
    CaseRecord::new(0x13DF, &[0xABAF]),
    CaseRecord::new(0x13E0, &[0xABB0]),
    CaseRecord::new(0x13E1, &[0xABB1]),
    CaseRecord::new(0x13E2, &[0xABB2]),
    CaseRecord::new(0x13E3, &[0xABB3]),
    CaseRecord::new(0x13E4, &[0xABB4]),
    CaseRecord::new(0x13E5, &[0xABB5]),
    CaseRecord::new(0x13E6, &[0xABB6]),
    CaseRecord::new(0x13E7, &[0xABB7]),
    CaseRecord::new(0x13E8, &[0xABB8]),
    CaseRecord::new(0x13E9, &[0xABB9]),
    CaseRecord::new(0x13EA, &[0xABBA]),
    CaseRecord::new(0x13EB, &[0xABBB]),
    CaseRecord::new(0x13EC, &[0xABBC]),
    CaseRecord::new(0x13ED, &[0xABBD]),
    CaseRecord::new(0x13EE, &[0xABBE]),
    CaseRecord::new(0x13EF, &[0xABBF]),
    CaseRecord::new(0x13F0, &[0x13F8]),
    CaseRecord::new(0x13F1, &[0x13F9]),
    CaseRecord::new(0x13F2, &[0x13FA]),
    CaseRecord::new(0x13F3, &[0x13FB]),
    CaseRecord::new(0x13F4, &[0x13FC]),
    CaseRecord::new(0x13F5, &[0x13FD]),
    CaseRecord::new(0x1C90, &[0x10D0]),
    CaseRecord::new(0x1C91, &[0x10D1]),
    CaseRecord::new(0x1C92, &[0x10D2]),
    CaseRecord::new(0x1C93, &[0x10D3]),
    CaseRecord::new(0x1C94, &[0x10D4]),
    CaseRecord::new(0x1C95, &[0x10D5]),
    CaseRecord::new(0x1C96, &[0x10D6]),
    CaseRecord::new(0x1C97, &[0x10D7]),
    CaseRecord::new(0x1C98, &[0x10D8]),
    CaseRecord::new(0x1C99, &[0x10D9]),
    CaseRecord::new(0x1C9A, &[0x10DA]),
    CaseRecord::new(0x1C9B, &[0x10DB]),
    CaseRecord::new(0x1C9C, &[0x10DC]),
    CaseRecord::new(0x1C9D, &[0x10DD]),
    CaseRecord::new(0x1C9E, &[0x10DE]),
    CaseRecord::new(0x1C9F, &[0x10DF]),
    CaseRecord::new(0x1CA0, &[0x10E0]),
    CaseRecord::new(0x1CA1, &[0x10E1]),
    CaseRecord::new(0x1CA2, &[0x10E2]),
    CaseRecord::new(0x1CA3, &[0x10E3]),
    CaseRecord::new(0x1CA4, &[0x10E4]),
    CaseRecord::new(0x1CA5, &[0x10E5]),
    CaseRecord::new(0x1CA6, &[0x10E6]),
    CaseRecord::new(0x1CA7, &[0x10E7]),
    CaseRecord::new(0x1CA8, &[0x10E8]),
    CaseRecord::new(0x1CA9, &[0x10E9]),
    CaseRecord::new(0x1CAA, &[0x10EA]),
    CaseRecord::new(0x1CAB, &[0x10EB]),
    CaseRecord::new(0x1CAC, &[0x10EC]),
    CaseRecord::new(0x1CAD, &[0x10ED]),
    CaseRecord::new(0x1CAE, &[0x10EE]),
    CaseRecord::new(0x1CAF, &[0x10EF]),
    CaseRecord::new(0x1CB0, &[0x10F0]),
    CaseRecord::new(0x1CB1, &[0x10F1]),
    CaseRecord::new(0x1CB2, &[0x10F2]),
    CaseRecord::new(0x1CB3, &[0x10F3]),
    CaseRecord::new(0x1CB4, &[0x10F4]),
    CaseRecord::new(0x1CB5, &[0x10F5]),
    CaseRecord::new(0x1CB6, &[0x10F6]),
    CaseRecord::new(0x1CB7, &[0x10F7]),
    CaseRecord::new(0x1CB8, &[0x10F8]),
    CaseRecord::new(0x1CB9, &[0x10F9]),
    CaseRecord::new(0x1CBA, &[0x10FA]),
    CaseRecord::new(0x1CBD, &[0x10FD]),
    CaseRecord::new(0x1CBE, &[0x10FE]),
    CaseRecord::new(0x1CBF, &[0x10FF]),
    CaseRecord::new(0x1E00, &[0x1E01]),
    CaseRecord::new(0x1E02, &[0x1E03]),
    CaseRecord::new(0x1E04, &[0x1E05]),
    CaseRecord::new(0x1E06, &[0x1E07]),
    CaseRecord::new(0x1E08, &[0x1E09]),
    CaseRecord::new(0x1E0A, &[0x1E0B]),
    CaseRecord::new(0x1E0C, &[0x1E0D]),
    CaseRecord::new(0x1E0E, &[0x1E0F]),
    CaseRecord::new(0x1E10, &[0x1E11]),
    CaseRecord::new(0x1E12, &[0x1E13]),
    CaseRecord::new(0x1E14, &[0x1E15]),
    CaseRecord::new(0x1E16, &[0x1E17]),
    CaseRecord::new(0x1E18, &[0x1E19]),
    CaseRecord::new(0x1E1A, &[0x1E1B]),
    CaseRecord::new(0x1E1C, &[0x1E1D]),
    CaseRecord::new(0x1E1E, &[0x1E1F]),
    CaseRecord::new(0x1E20, &[0x1E21]),
    CaseRecord::new(0x1E22, &[0x1E23]),
    CaseRecord::new(0x1E24, &[0x1E25]),
    CaseRecord::new(0x1E26, &[0x1E27]),
    CaseRecord::new(0x1E28, &[0x1E29]),
    CaseRecord::new(0x1E2A, &[0x1E2B]),
    CaseRecord::new(0x1E2C, &[0x1E2D]),
    CaseRecord::new(0x1E2E, &[0x1E2F]),
    CaseRecord::new(0x1E30, &[0x1E31]),
    CaseRecord::new(0x1E32, &[0x1E33]),
    CaseRecord::new(0x1E34, &[0x1E35]),
    CaseRecord::new(0x1E36, &[0x1E37]),
    CaseRecord::new(0x1E38, &[0x1E39]),
    CaseRecord::new(0x1E3A, &[0x1E3B]),
    CaseRecord::new(0x1E3C, &[0x1E3D]),
    CaseRecord::new(0x1E3E, &[0x1E3F]),
    CaseRecord::new(0x1E40, &[0x1E41]),
    CaseRecord::new(0x1E42, &[0x1E43]),
    CaseRecord::new(0x1E44, &[0x1E45]),
    CaseRecord::new(0x1E46, &[0x1E47]),
    CaseRecord::new(0x1E48, &[0x1E49]),
    CaseRecord::new(0x1E4A, &[0x1E4B]),
    CaseRecord::new(0x1E4C, &[0x1E4D]),
    CaseRecord::new(0x1E4E, &[0x1E4F]),
    CaseRecord::new(0x1E50, &[0x1E51]),
    CaseRecord::new(0x1E52, &[0x1E53]),
    CaseRecord::new(0x1E54, &[0x1E55]),
    CaseRecord::new(0x1E56, &[0x1E57]),
    CaseRecord::new(0x1E58, &[0x1E59]),
    CaseRecord::new(0x1E5A, &[0x1E5B]),
    CaseRecord::new(0x1E5C, &[0x1E5D]),
    CaseRecord::new(0x1E5E, &[0x1E5F]),
    CaseRecord::new(0x1E60, &[0x1E61]),
    CaseRecord::new(0x1E62, &[0x1E63]),
    CaseRecord::new(0x1E64, &[0x1E65]),
    CaseRecord::new(0x1E66, &[0x1E67]),
    CaseRecord::new(0x1E68, &[0x1E69]),
    CaseRecord::new(0x1E6A, &[0x1E6B]),
    CaseRecord::new(0x1E6C, &[0x1E6D]),
    CaseRecord::new(0x1E6E, &[0x1E6F]),
    CaseRecord::new(0x1E70, &[0x1E71]),
    CaseRecord::new(0x1E72, &[0x1E73]),
    CaseRecord::new(0x1E74, &[0x1E75]),
    CaseRecord::new(0x1E76, &[0x1E77]),
    CaseRecord::new(0x1E78, &[0x1E79]),
    CaseRecord::new(0x1E7A, &[0x1E7B]),
    CaseRecord::new(0x1E7C, &[0x1E7D]),
    CaseRecord::new(0x1E7E, &[0x1E7F]),
    CaseRecord::new(0x1E80, &[0x1E81]),
    CaseRecord::new(0x1E82, &[0x1E83]),
    CaseRecord::new(0x1E84, &[0x1E85]),
    CaseRecord::new(0x1E86, &[0x1E87]),
    CaseRecord::new(0x1E88, &[0x1E89]),
    CaseRecord::new(0x1E8A, &[0x1E8B]),
    CaseRecord::new(0x1E8C, &[0x1E8D]),
    CaseRecord::new(0x1E8E, &[0x1E8F]),
    CaseRecord::new(0x1E90, &[0x1E91]),
    CaseRecord::new(0x1E92, &[0x1E93]),
    CaseRecord::new(0x1E94, &[0x1E95]),
    CaseRecord::new(0x1E9E, &[0x00DF]),
    CaseRecord::new(0x1EA0, &[0x1EA1]),
    CaseRecord::new(0x1EA2, &[0x1EA3]),
    CaseRecord::new(0x1EA4, &[0x1EA5]),
    CaseRecord::new(0x1EA6, &[0x1EA7]),
    CaseRecord::new(0x1EA8, &[0x1EA9]),
    CaseRecord::new(0x1EAA, &[0x1EAB]),
    CaseRecord::new(0x1EAC, &[0x1EAD]),
    CaseRecord::new(0x1EAE, &[0x1EAF]),
    CaseRecord::new(0x1EB0, &[0x1EB1]),
    CaseRecord::new(0x1EB2, &[0x1EB3]),
    CaseRecord::new(0x1EB4, &[0x1EB5]),
    CaseRecord::new(0x1EB6, &[0x1EB7]),
    CaseRecord::new(0x1EB8, &[0x1EB9]),
    CaseRecord::new(0x1EBA, &[0x1EBB]),
    CaseRecord::new(0x1EBC, &[0x1EBD]),
    CaseRecord::new(0x1EBE, &[0x1EBF]),
    CaseRecord::new(0x1EC0, &[0x1EC1]),
    CaseRecord::new(0x1EC2, &[0x1EC3]),
    CaseRecord::new(0x1EC4, &[0x1EC5]),
    CaseRecord::new(0x1EC6, &[0x1EC7]),
    CaseRecord::new(0x1EC8, &[0x1EC9]),
    CaseRecord::new(0x1ECA, &[0x1ECB]),
    CaseRecord::new(0x1ECC, &[0x1ECD]),
    CaseRecord::new(0x1ECE, &[0x1ECF]),
    CaseRecord::new(0x1ED0, &[0x1ED1]),
    CaseRecord::new(0x1ED2, &[0x1ED3]),
    CaseRecord::new(0x1ED4, &[0x1ED5]),
    CaseRecord::new(0x1ED6, &[0x1ED7]),
    CaseRecord::new(0x1ED8, &[0x1ED9]),
    CaseRecord::new(0x1EDA, &[0x1EDB]),
    CaseRecord::new(0x1EDC, &[0x1EDD]),
    CaseRecord::new(0x1EDE, &[0x1EDF]),
    CaseRecord::new(0x1EE0, &[0x1EE1]),
    CaseRecord::new(0x1EE2, &[0x1EE3]),
    CaseRecord::new(0x1EE4, &[0x1EE5]),
    CaseRecord::new(0x1EE6, &[0x1EE7]),
    CaseRecord::new(0x1EE8, &[0x1EE9]),
    CaseRecord::new(0x1EEA, &[0x1EEB]),
    CaseRecord::new(0x1EEC, &[0x1EED]),
    CaseRecord::new(0x1EEE, &[0x1EEF]),
    CaseRecord::new(0x1EF0, &[0x1EF1]),
    CaseRecord::new(0x1EF2, &[0x1EF3]),
    CaseRecord::new(0x1EF4, &[0x1EF5]),
    CaseRecord::new(0x1EF6, &[0x1EF7]),
    CaseRecord::new(0x1EF8, &[0x1EF9]),
    CaseRecord::new(0x1EFA, &[0x1EFB]),
    CaseRecord::new(0x1EFC, &[0x1EFD]),
    CaseRecord::new(0x1EFE, &[0x1EFF]),
    CaseRecord::new(0x1F08, &[0x1F00]),
    CaseRecord::new(0x1F09, &[0x1F01]),
    CaseRecord::new(0x1F0A, &[0x1F02]),
    CaseRecord::new(0x1F0B, &[0x1F03]),
    CaseRecord::new(0x1F0C, &[0x1F04]),
    CaseRecord::new(0x1F0D, &[0x1F05]),
    CaseRecord::new(0x1F0E, &[0x1F06]),
    CaseRecord::new(0x1F0F, &[0x1F07]),
    CaseRecord::new(0x1F18, &[0x1F10]),
    CaseRecord::new(0x1F19, &[0x1F11]),
    CaseRecord::new(0x1F1A, &[0x1F12]),
    CaseRecord::new(0x1F1B, &[0x1F13]),
    CaseRecord::new(0x1F1C, &[0x1F14]),
    CaseRecord::new(0x1F1D, &[0x1F15]),
    CaseRecord::new(0x1F28, &[0x1F20]),
    CaseRecord::new(0x1F29, &[0x1F21]),
    CaseRecord::new(0x1F2A, &[0x1F22]),
    CaseRecord::new(0x1F2B, &[0x1F23]),
    CaseRecord::new(0x1F2C, &[0x1F24]),
    CaseRecord::new(0x1F2D, &[0x1F25]),
    CaseRecord::new(0x1F2E, &[0x1F26]),
    CaseRecord::new(0x1F2F, &[0x1F27]),
    CaseRecord::new(0x1F38, &[0x1F30]),
    CaseRecord::new(0x1F39, &[0x1F31]),
    CaseRecord::new(0x1F3A, &[0x1F32]),
    CaseRecord::new(0x1F3B, &[0x1F33]),
    CaseRecord::new(0x1F3C, &[0x1F34]),
    CaseRecord::new(0x1F3D, &[0x1F35]),
    CaseRecord::new(0x1F3E, &[0x1F36]),
    CaseRecord::new(0x1F3F, &[0x1F37]),
    CaseRecord::new(0x1F48, &[0x1F40]),
    CaseRecord::new(0x1F49, &[0x1F41]),
    CaseRecord::new(0x1F4A, &[0x1F42]),
    CaseRecord::new(0x1F4B, &[0x1F43]),
    CaseRecord::new(0x1F4C, &[0x1F44]),
    CaseRecord::new(0x1F4D, &[0x1F45]),
    CaseRecord::new(0x1F59, &[0x1F51]),
    CaseRecord::new(0x1F5B, &[0x1F53]),
    CaseRecord::new(0x1F5D, &[0x1F55]),
    CaseRecord::new(0x1F5F, &[0x1F57]),
    CaseRecord::new(0x1F68, &[0x1F60]),
    CaseRecord::new(0x1F69, &[0x1F61]),
    CaseRecord::new(0x1F6A, &[0x1F62]),
    CaseRecord::new(0x1F6B, &[0x1F63]),
    CaseRecord::new(0x1F6C, &[0x1F64]),
    CaseRecord::new(0x1F6D, &[0x1F65]),
    CaseRecord::new(0x1F6E, &[0x1F66]),
    CaseRecord::new(0x1F6F, &[0x1F67]),
    CaseRecord::new(0x1F88, &[0x1F80]),
    CaseRecord::new(0x1F89, &[0x1F81]),
    CaseRecord::new(0x1F8A, &[0x1F82]),
    CaseRecord::new(0x1F8B, &[0x1F83]),
    CaseRecord::new(0x1F8C, &[0x1F84]),
    CaseRecord::new(0x1F8D, &[0x1F85]),
    CaseRecord::new(0x1F8E, &[0x1F86]),
    CaseRecord::new(0x1F8F, &[0x1F87]),
    CaseRecord::new(0x1F98, &[0x1F90]),
    CaseRecord::new(0x1F99, &[0x1F91]),
    CaseRecord::new(0x1F9A, &[0x1F92]),
    CaseRecord::new(0x1F9B, &[0x1F93]),
    CaseRecord::new(0x1F9C, &[0x1F94]),
    CaseRecord::new(0x1F9D, &[0x1F95]),
    CaseRecord::new(0x1F9E, &[0x1F96]),
    CaseRecord::new(0x1F9F, &[0x1F97]),
    CaseRecord::new(0x1FA8, &[0x1FA0]),
    CaseRecord::new(0x1FA9, &[0x1FA1]),
    CaseRecord::new(0x1FAA, &[0x1FA2]),
    CaseRecord::new(0x1FAB, &[0x1FA3]),
    CaseRecord::new(0x1FAC, &[0x1FA4]),
    CaseRecord::new(0x1FAD, &[0x1FA5]),
    CaseRecord::new(0x1FAE, &[0x1FA6]),
    CaseRecord::new(0x1FAF, &[0x1FA7]),
    CaseRecord::new(0x1FB8, &[0x1FB0]),
    CaseRecord::new(0x1FB9, &[0x1FB1]),
    CaseRecord::new(0x1FBA, &[0x1F70]),
    CaseRecord::new(0x1FBB, &[0x1F71]),
    CaseRecord::new(0x1FBC, &[0x1FB3]),
    CaseRecord::new(0x1FC8, &[0x1F72]),
    CaseRecord::new(0x1FC9, &[0x1F73]),
    CaseRecord::new(0x1FCA, &[0x1F74]),
    CaseRecord::new(0x1FCB, &[0x1F75]),
    CaseRecord::new(0x1FCC, &[0x1FC3]),
    CaseRecord::new(0x1FD8, &[0x1FD0]),
    CaseRecord::new(0x1FD9, &[0x1FD1]),
    CaseRecord::new(0x1FDA, &[0x1F76]),
    CaseRecord::new(0x1FDB, &[0x1F77]),
    CaseRecord::new(0x1FE8, &[0x1FE0]),
    CaseRecord::new(0x1FE9, &[0x1FE1]),
    CaseRecord::new(0x1FEA, &[0x1F7A]),
    CaseRecord::new(0x1FEB, &[0x1F7B]),
    CaseRecord::new(0x1FEC, &[0x1FE5]),
    CaseRecord::new(0x1FF8, &[0x1F78]),
    CaseRecord::new(0x1FF9, &[0x1F79]),
    CaseRecord::new(0x1FFA, &[0x1F7C]),
    CaseRecord::new(0x1FFB, &[0x1F7D]),
    CaseRecord::new(0x1FFC, &[0x1FF3]),
    CaseRecord::new(0x2126, &[0x03C9]),
    CaseRecord::new(0x212A, &[0x006B]),
    CaseRecord::new(0x212B, &[0x00E5]),
    CaseRecord::new(0x2132, &[0x214E]),
    CaseRecord::new(0x2160, &[0x2170]),
    CaseRecord::new(0x2161, &[0x2171]),
    CaseRecord::new(0x2162, &[0x2172]),
    CaseRecord::new(0x2163, &[0x2173]),
    CaseRecord::new(0x2164, &[0x2174]),
    CaseRecord::new(0x2165, &[0x2175]),
    CaseRecord::new(0x2166, &[0x2176]),
    CaseRecord::new(0x2167, &[0x2177]),
    CaseRecord::new(0x2168, &[0x2178]),
    CaseRecord::new(0x2169, &[0x2179]),
    CaseRecord::new(0x216A, &[0x217A]),
    CaseRecord::new(0x216B, &[0x217B]),
    CaseRecord::new(0x216C, &[0x217C]),
    CaseRecord::new(0x216D, &[0x217D]),
    CaseRecord::new(0x216E, &[0x217E]),
    CaseRecord::new(0x216F, &[0x217F]),
    CaseRecord::new(0x2183, &[0x2184]),
    CaseRecord::new(0x24B6, &[0x24D0]),
    CaseRecord::new(0x24B7, &[0x24D1]),
    CaseRecord::new(0x24B8, &[0x24D2]),
    CaseRecord::new(0x24B9, &[0x24D3]),
    CaseRecord::new(0x24BA, &[0x24D4]),
    CaseRecord::new(0x24BB, &[0x24D5]),
    CaseRecord::new(0x24BC, &[0x24D6]),
    CaseRecord::new(0x24BD, &[0x24D7]),
    CaseRecord::new(0x24BE, &[0x24D8]),
    CaseRecord::new(0x24BF, &[0x24D9]),
    CaseRecord::new(0x24C0, &[0x24DA]),
    CaseRecord::new(0x24C1, &[0x24DB]),
    CaseRecord::new(0x24C2, &[0x24DC]),
    CaseRecord::new(0x24C3, &[0x24DD]),
    CaseRecord::new(0x24C4, &[0x24DE]),
    CaseRecord::new(0x24C5, &[0x24DF]),
    CaseRecord::new(0x24C6, &[0x24E0]),
    CaseRecord::new(0x24C7, &[0x24E1]),
    CaseRecord::new(0x24C8, &[0x24E2]),
    CaseRecord::new(0x24C9, &[0x24E3]),
    CaseRecord::new(0x24CA, &[0x24E4]),
    CaseRecord::new(0x24CB, &[0x24E5]),
    CaseRecord::new(0x24CC, &[0x24E6]),
    CaseRecord::new(0x24CD, &[0x24E7]),
    CaseRecord::new(0x24CE, &[0x24E8]),
    CaseRecord::new(0x24CF, &[0x24E9]),
    CaseRecord::new(0x2C00, &[0x2C30]),
    CaseRecord::new(0x2C01, &[0x2C31]),
    CaseRecord::new(0x2C02, &[0x2C32]),
    CaseRecord::new(0x2C03, &[0x2C33]),
    CaseRecord::new(0x2C04, &[0x2C34]),
    CaseRecord::new(0x2C05, &[0x2C35]),
    CaseRecord::new(0x2C06, &[0x2C36]),
    CaseRecord::new(0x2C07, &[0x2C37]),
    CaseRecord::new(0x2C08, &[0x2C38]),
    CaseRecord::new(0x2C09, &[0x2C39]),
    CaseRecord::new(0x2C0A, &[0x2C3A]),
    CaseRecord::new(0x2C0B, &[0x2C3B]),
    CaseRecord::new(0x2C0C, &[0x2C3C]),
    CaseRecord::new(0x2C0D, &[0x2C3D]),
    CaseRecord::new(0x2C0E, &[0x2C3E]),
    CaseRecord::new(0x2C0F, &[0x2C3F]),
    CaseRecord::new(0x2C10, &[0x2C40]),
    CaseRecord::new(0x2C11, &[0x2C41]),
    CaseRecord::new(0x2C12, &[0x2C42]),
    CaseRecord::new(0x2C13, &[0x2C43]),
    CaseRecord::new(0x2C14, &[0x2C44]),
    CaseRecord::new(0x2C15, &[0x2C45]),
    CaseRecord::new(0x2C16, &[0x2C46]),
    CaseRecord::new(0x2C17, &[0x2C47]),
    CaseRecord::new(0x2C18, &[0x2C48]),
    CaseRecord::new(0x2C19, &[0x2C49]),
    CaseRecord::new(0x2C1A, &[0x2C4A]),
    CaseRecord::new(0x2C1B, &[0x2C4B]),
    CaseRecord::new(0x2C1C, &[0x2C4C]),
    CaseRecord::new(0x2C1D, &[0x2C4D]),
    CaseRecord::new(0x2C1E, &[0x2C4E]),
    CaseRecord::new(0x2C1F, &[0x2C4F]),
    CaseRecord::new(0x2C20, &[0x2C50]),
    CaseRecord::new(0x2C21, &[0x2C51]),
    CaseRecord::new(0x2C22, &[0x2C52]),
    CaseRecord::new(0x2C23, &[0x2C53]),
    CaseRecord::new(0x2C24, &[0x2C54]),
    CaseRecord::new(0x2C25, &[0x2C55]),
    CaseRecord::new(0x2C26, &[0x2C56]),
    CaseRecord::new(0x2C27, &[0x2C57]),
    CaseRecord::new(0x2C28, &[0x2C58]),
    CaseRecord::new(0x2C29, &[0x2C59]),
    CaseRecord::new(0x2C2A, &[0x2C5A]),
    CaseRecord::new(0x2C2B, &[0x2C5B]),
    CaseRecord::new(0x2C2C, &[0x2C5C]),
    CaseRecord::new(0x2C2D, &[0x2C5D]),
    CaseRecord::new(0x2C2E, &[0x2C5E]),
    CaseRecord::new(0x2C2F, &[0x2C5F]),
    CaseRecord::new(0x2C60, &[0x2C61]),
    CaseRecord::new(0x2C62, &[0x026B]),
    CaseRecord::new(0x2C63, &[0x1D7D]),
    CaseRecord::new(0x2C64, &[0x027D]),
    CaseRecord::new(0x2C67, &[0x2C68]),
    CaseRecord::new(0x2C69, &[0x2C6A]),
    CaseRecord::new(0x2C6B, &[0x2C6C]),
    CaseRecord::new(0x2C6D, &[0x0251]),
    CaseRecord::new(0x2C6E, &[0x0271]),
    CaseRecord::new(0x2C6F, &[0x0250]),
    CaseRecord::new(0x2C70, &[0x0252]),
    CaseRecord::new(0x2C72, &[0x2C73]),
    CaseRecord::new(0x2C75, &[0x2C76]),
    CaseRecord::new(0x2C7E, &[0x023F]),
    CaseRecord::new(0x2C7F, &[0x0240]),
    CaseRecord::new(0x2C80, &[0x2C81]),
    CaseRecord::new(0x2C82, &[0x2C83]),
    CaseRecord::new(0x2C84, &[0x2C85]),
    CaseRecord::new(0x2C86, &[0x2C87]),
    CaseRecord::new(0x2C88, &[0x2C89]),
    CaseRecord::new(0x2C8A, &[0x2C8B]),
    CaseRecord::new(0x2C8C, &[0x2C8D]),
    CaseRecord::new(0x2C8E, &[0x2C8F]),
    CaseRecord::new(0x2C90, &[0x2C91]),
    CaseRecord::new(0x2C92, &[0x2C93]),
    CaseRecord::new(0x2C94, &[0x2C95]),
    CaseRecord::new(0x2C96, &[0x2C97]),
    CaseRecord::new(0x2C98, &[0x2C99]),
    CaseRecord::new(0x2C9A, &[0x2C9B]),
    CaseRecord::new(0x2C9C, &[0x2C9D]),
    CaseRecord::new(0x2C9E, &[0x2C9F]),
    CaseRecord::new(0x2CA0, &[0x2CA1]),
    CaseRecord::new(0x2CA2, &[0x2CA3]),
    CaseRecord::new(0x2CA4, &[0x2CA5]),
    CaseRecord::new(0x2CA6, &[0x2CA7]),
    CaseRecord::new(0x2CA8, &[0x2CA9]),
    CaseRecord::new(0x2CAA, &[0x2CAB]),
    CaseRecord::new(0x2CAC, &[0x2CAD]),
    CaseRecord::new(0x2CAE, &[0x2CAF]),
    CaseRecord::new(0x2CB0, &[0x2CB1]),
    CaseRecord::new(0x2CB2, &[0x2CB3]),
    CaseRecord::new(0x2CB4, &[0x2CB5]),
    CaseRecord::new(0x2CB6, &[0x2CB7]),
    CaseRecord::new(0x2CB8, &[0x2CB9]),
    CaseRecord::new(0x2CBA, &[0x2CBB]),
    CaseRecord::new(0x2CBC, &[0x2CBD]),
    CaseRecord::new(0x2CBE, &[0x2CBF]),
    CaseRecord::new(0x2CC0, &[0x2CC1]),
    CaseRecord::new(0x2CC2, &[0x2CC3]),
    CaseRecord::new(0x2CC4, &[0x2CC5]),
    CaseRecord::new(0x2CC6, &[0x2CC7]),
    CaseRecord::new(0x2CC8, &[0x2CC9]),
    CaseRecord::new(0x2CCA, &[0x2CCB]),
    CaseRecord::new(0x2CCC, &[0x2CCD]),
    CaseRecord::new(0x2CCE, &[0x2CCF]),
    CaseRecord::new(0x2CD0, &[0x2CD1]),
    CaseRecord::new(0x2CD2, &[0x2CD3]),
    CaseRecord::new(0x2CD4, &[0x2CD5]),
    CaseRecord::new(0x2CD6, &[0x2CD7]),
    CaseRecord::new(0x2CD8, &[0x2CD9]),
    CaseRecord::new(0x2CDA, &[0x2CDB]),
    CaseRecord::new(0x2CDC, &[0x2CDD]),
    CaseRecord::new(0x2CDE, &[0x2CDF]),
    CaseRecord::new(0x2CE0, &[0x2CE1]),
    CaseRecord::new(0x2CE2, &[0x2CE3]),
    CaseRecord::new(0x2CEB, &[0x2CEC]),
    CaseRecord::new(0x2CED, &[0x2CEE]),
    CaseRecord::new(0x2CF2, &[0x2CF3]),
    CaseRecord::new(0xA640, &[0xA641]),
    CaseRecord::new(0xA642, &[0xA643]),
    CaseRecord::new(0xA644, &[0xA645]),
    CaseRecord::new(0xA646, &[0xA647]),
    CaseRecord::new(0xA648, &[0xA649]),
    CaseRecord::new(0xA64A, &[0xA64B]),
    CaseRecord::new(0xA64C, &[0xA64D]),
    CaseRecord::new(0xA64E, &[0xA64F]),
    CaseRecord::new(0xA650, &[0xA651]),
    CaseRecord::new(0xA652, &[0xA653]),
    CaseRecord::new(0xA654, &[0xA655]),
    CaseRecord::new(0xA656, &[0xA657]),
    CaseRecord::new(0xA658, &[0xA659]),
    CaseRecord::new(0xA65A, &[0xA65B]),
    CaseRecord::new(0xA65C, &[0xA65D]),
    CaseRecord::new(0xA65E, &[0xA65F]),
    CaseRecord::new(0xA660, &[0xA661]),
    CaseRecord::new(0xA662, &[0xA663]),
    CaseRecord::new(0xA664, &[0xA665]),
    CaseRecord::new(0xA666, &[0xA667]),
    CaseRecord::new(0xA668, &[0xA669]),
    CaseRecord::new(0xA66A, &[0xA66B]),
    CaseRecord::new(0xA66C, &[0xA66D]),
    CaseRecord::new(0xA680, &[0xA681]),
    CaseRecord::new(0xA682, &[0xA683]),
    CaseRecord::new(0xA684, &[0xA685]),
    CaseRecord::new(0xA686, &[0xA687]),
    CaseRecord::new(0xA688, &[0xA689]),
    CaseRecord::new(0xA68A, &[0xA68B]),
    CaseRecord::new(0xA68C, &[0xA68D]),
    CaseRecord::new(0xA68E, &[0xA68F]),
    CaseRecord::new(0xA690, &[0xA691]),
    CaseRecord::new(0xA692, &[0xA693]),
    CaseRecord::new(0xA694, &[0xA695]),
    CaseRecord::new(0xA696, &[0xA697]),
    CaseRecord::new(0xA698, &[0xA699]),
    CaseRecord::new(0xA69A, &[0xA69B]),
    CaseRecord::new(0xA722, &[0xA723]),
    CaseRecord::new(0xA724, &[0xA725]),
    CaseRecord::new(0xA726, &[0xA727]),
    CaseRecord::new(0xA728, &[0xA729]),
    CaseRecord::new(0xA72A, &[0xA72B]),
    CaseRecord::new(0xA72C, &[0xA72D]),
    CaseRecord::new(0xA72E, &[0xA72F]),
    CaseRecord::new(0xA732, &[0xA733]),
    CaseRecord::new(0xA734, &[0xA735]),
    CaseRecord::new(0xA736, &[0xA737]),
    CaseRecord::new(0xA738, &[0xA739]),
    CaseRecord::new(0xA73A, &[0xA73B]),
    CaseRecord::new(0xA73C, &[0xA73D]),
    CaseRecord::new(0xA73E, &[0xA73F]),
    CaseRecord::new(0xA740, &[0xA741]),
    CaseRecord::new(0xA742, &[0xA743]),
    CaseRecord::new(0xA744, &[0xA745]),
    CaseRecord::new(0xA746, &[0xA747]),
    CaseRecord::new(0xA748, &[0xA749]),
    CaseRecord::new(0xA74A, &[0xA74B]),
    CaseRecord::new(0xA74C, &[0xA74D]),
    CaseRecord::new(0xA74E, &[0xA74F]),
    CaseRecord::new(0xA750, &[0xA751]),
    CaseRecord::new(0xA752, &[0xA753]),
    CaseRecord::new(0xA754, &[0xA755]),
    CaseRecord::new(0xA756, &[0xA757]),
    CaseRecord::new(0xA758, &[0xA759]),
    CaseRecord::new(0xA75A, &[0xA75B]),
    CaseRecord::new(0xA75C, &[0xA75D]),
    CaseRecord::new(0xA75E, &[0xA75F]),
    CaseRecord::new(0xA760, &[0xA761]),
    CaseRecord::new(0xA762, &[0xA763]),
    CaseRecord::new(0xA764, &[0xA765]),
    CaseRecord::new(0xA766, &[0xA767]),
    CaseRecord::new(0xA768, &[0xA769]),
    CaseRecord::new(0xA76A, &[0xA76B]),
    CaseRecord::new(0xA76C, &[0xA76D]),
    CaseRecord::new(0xA76E, &[0xA76F]),
    CaseRecord::new(0xA779, &[0xA77A]),
    CaseRecord::new(0xA77B, &[0xA77C]),
    CaseRecord::new(0xA77D, &[0x1D79]),
    CaseRecord::new(0xA77E, &[0xA77F]),
    CaseRecord::new(0xA780, &[0xA781]),
    CaseRecord::new(0xA782, &[0xA783]),
    CaseRecord::new(0xA784, &[0xA785]),
    CaseRecord::new(0xA786, &[0xA787]),
    CaseRecord::new(0xA78B, &[0xA78C]),
    CaseRecord::new(0xA78D, &[0x0265]),
    CaseRecord::new(0xA790, &[0xA791]),
    CaseRecord::new(0xA792, &[0xA793]),
    CaseRecord::new(0xA796, &[0xA797]),
    CaseRecord::new(0xA798, &[0xA799]),
    CaseRecord::new(0xA79A, &[0xA79B]),
    CaseRecord::new(0xA79C, &[0xA79D]),
    CaseRecord::new(0xA79E, &[0xA79F]),
    CaseRecord::new(0xA7A0, &[0xA7A1]),
    CaseRecord::new(0xA7A2, &[0xA7A3]),
    CaseRecord::new(0xA7A4, &[0xA7A5]),
    CaseRecord::new(0xA7A6, &[0xA7A7]),
    CaseRecord::new(0xA7A8, &[0xA7A9]),
    CaseRecord::new(0xA7AA, &[0x0266]),
    CaseRecord::new(0xA7AB, &[0x025C]),
    CaseRecord::new(0xA7AC, &[0x0261]),
    CaseRecord::new(0xA7AD, &[0x026C]),
    CaseRecord::new(0xA7AE, &[0x026A]),
    CaseRecord::new(0xA7B0, &[0x029E]),
    CaseRecord::new(0xA7B1, &[0x0287]),
    CaseRecord::new(0xA7B2, &[0x029D]),
    CaseRecord::new(0xA7B3, &[0xAB53]),
    CaseRecord::new(0xA7B4, &[0xA7B5]),
    CaseRecord::new(0xA7B6, &[0xA7B7]),
    CaseRecord::new(0xA7B8, &[0xA7B9]),
    CaseRecord::new(0xA7BA, &[0xA7BB]),
    CaseRecord::new(0xA7BC, &[0xA7BD]),
    CaseRecord::new(0xA7BE, &[0xA7BF]),
    CaseRecord::new(0xA7C0, &[0xA7C1]),
    CaseRecord::new(0xA7C2, &[0xA7C3]),
    CaseRecord::new(0xA7C4, &[0xA794]),
    CaseRecord::new(0xA7C5, &[0x0282]),
    CaseRecord::new(0xA7C6, &[0x1D8E]),
    CaseRecord::new(0xA7C7, &[0xA7C8]),
    CaseRecord::new(0xA7C9, &[0xA7CA]),
    CaseRecord::new(0xA7D0, &[0xA7D1]),
    CaseRecord::new(0xA7D6, &[0xA7D7]),
    CaseRecord::new(0xA7D8, &[0xA7D9]),
    CaseRecord::new(0xA7F5, &[0xA7F6]),
    CaseRecord::new(0xFF21, &[0xFF41]),
    CaseRecord::new(0xFF22, &[0xFF42]),
    CaseRecord::new(0xFF23, &[0xFF43]),
    CaseRecord::new(0xFF24, &[0xFF44]),
    CaseRecord::new(0xFF25, &[0xFF45]),
    CaseRecord::new(0xFF26, &[0xFF46]),
    CaseRecord::new(0xFF27, &[0xFF47]),
    CaseRecord::new(0xFF28, &[0xFF48]),
    CaseRecord::new(0xFF29, &[0xFF49]),
    CaseRecord::new(0xFF2A, &[0xFF4A]),
    CaseRecord::new(0xFF2B, &[0xFF4B]),
    CaseRecord::new(0xFF2C, &[0xFF4C]),
    CaseRecord::new(0xFF2D, &[0xFF4D]),
    CaseRecord::new(0xFF2E, &[0xFF4E]),
    CaseRecord::new(0xFF2F, &[0xFF4F]),
    CaseRecord::new(0xFF30, &[0xFF50]),
    CaseRecord::new(0xFF31, &[0xFF51]),
    CaseRecord::new(0xFF32, &[0xFF52]),
    CaseRecord::new(0xFF33, &[0xFF53]),
    CaseRecord::new(0xFF34, &[0xFF54]),
    CaseRecord::new(0xFF35, &[0xFF55]),
    CaseRecord::new(0xFF36, &[0xFF56]),
    CaseRecord::new(0xFF37, &[0xFF57]),
    CaseRecord::new(0xFF38, &[0xFF58]),
    CaseRecord::new(0xFF39, &[0xFF59]),
    CaseRecord::new(0xFF3A, &[0xFF5A]),
    CaseRecord::new(0x10400, &[0x10428]),
    CaseRecord::new(0x10401, &[0x10429]),
    CaseRecord::new(0x10402, &[0x1042A]),
    CaseRecord::new(0x10403, &[0x1042B]),
    CaseRecord::new(0x10404, &[0x1042C]),
    CaseRecord::new(0x10405, &[0x1042D]),
    CaseRecord::new(0x10406, &[0x1042E]),
    CaseRecord::new(0x10407, &[0x1042F]),
    CaseRecord::new(0x10408, &[0x10430]),
    CaseRecord::new(0x10409, &[0x10431]),
    CaseRecord::new(0x1040A, &[0x10432]),
    CaseRecord::new(0x1040B, &[0x10433]),
    CaseRecord::new(0x1040C, &[0x10434]),
    CaseRecord::new(0x1040D, &[0x10435]),
    CaseRecord::new(0x1040E, &[0x10436]),
    CaseRecord::new(0x1040F, &[0x10437]),
    CaseRecord::new(0x10410, &[0x10438]),
    CaseRecord::new(0x10411, &[0x10439]),
    CaseRecord::new(0x10412, &[0x1043A]),
    CaseRecord::new(0x10413, &[0x1043B]),
    CaseRecord::new(0x10414, &[0x1043C]),
    CaseRecord::new(0x10415, &[0x1043D]),
    CaseRecord::new(0x10416, &[0x1043E]),
    CaseRecord::new(0x10417, &[0x1043F]),
    CaseRecord::new(0x10418, &[0x10440]),
    CaseRecord::new(0x10419, &[0x10441]),
    CaseRecord::new(0x1041A, &[0x10442]),
    CaseRecord::new(0x1041B, &[0x10443]),
    CaseRecord::new(0x1041C, &[0x10444]),
    CaseRecord::new(0x1041D, &[0x10445]),
    CaseRecord::new(0x1041E, &[0x10446]),
    CaseRecord::new(0x1041F, &[0x10447]),
    CaseRecord::new(0x10420, &[0x10448]),
    CaseRecord::new(0x10421, &[0x10449]),
    CaseRecord::new(0x10422, &[0x1044A]),
    CaseRecord::new(0x10423, &[0x1044B]),
    CaseRecord::new(0x10424, &[0x1044C]),
    CaseRecord::new(0x10425, &[0x1044D]),
    CaseRecord::new(0x10426, &[0x1044E]),
    CaseRecord::new(0x10427, &[0x1044F]),
    CaseRecord::new(0x104B0, &[0x104D8]),
    CaseRecord::new(0x104B1, &[0x104D9]),
    CaseRecord::new(0x104B2, &[0x104DA]),
    CaseRecord::new(0x104B3, &[0x104DB]),
    CaseRecord::new(0x104B4, &[0x104DC]),
    CaseRecord::new(0x104B5, &[0x104DD]),
    CaseRecord::new(0x104B6, &[0x104DE]),
    CaseRecord::new(0x104B7, &[0x104DF]),
    CaseRecord::new(0x104B8, &[0x104E0]),
    CaseRecord::new(0x104B9, &[0x104E1]),
    CaseRecord::new(0x104BA, &[0x104E2]),
    CaseRecord::new(0x104BB, &[0x104E3]),
    CaseRecord::new(0x104BC, &[0x104E4]),
    CaseRecord::new(0x104BD, &[0x104E5]),
    CaseRecord::new(0x104BE, &[0x104E6]),
    CaseRecord::new(0x104BF, &[0x104E7]),
    CaseRecord::new(0x104C0, &[0x104E8]),
    CaseRecord::new(0x104C1, &[0x104E9]),
    CaseRecord::new(0x104C2, &[0x104EA]),
    CaseRecord::new(0x104C3, &[0x104EB]),
    CaseRecord::new(0x104C4, &[0x104EC]),
    CaseRecord::new(0x104C5, &[0x104ED]),
    CaseRecord::new(0x104C6, &[0x104EE]),
    CaseRecord::new(0x104C7, &[0x104EF]),
    CaseRecord::new(0x104C8, &[0x104F0]),
    CaseRecord::new(0x104C9, &[0x104F1]),
    CaseRecord::new(0x104CA, &[0x104F2]),
    CaseRecord::new(0x104CB, &[0x104F3]),
    CaseRecord::new(0x104CC, &[0x104F4]),
    CaseRecord::new(0x104CD, &[0x104F5]),
    CaseRecord::new(0x104CE, &[0x104F6]),
    CaseRecord::new(0x104CF, &[0x104F7]),
    CaseRecord::new(0x104D0, &[0x104F8]),
    CaseRecord::new(0x104D1, &[0x104F9]),
    CaseRecord::new(0x104D2, &[0x104FA]),
    CaseRecord::new(0x104D3, &[0x104FB]),
    CaseRecord::new(0x10570, &[0x10597]),
    CaseRecord::new(0x10571, &[0x10598]),
    CaseRecord::new(0x10572, &[0x10599]),
    CaseRecord::new(0x10573, &[0x1059A]),
    CaseRecord::new(0x10574, &[0x1059B]),
    CaseRecord::new(0x10575, &[0x1059C]),
    CaseRecord::new(0x10576, &[0x1059D]),
    CaseRecord::new(0x10577, &[0x1059E]),
    CaseRecord::new(0x10578, &[0x1059F]),
    CaseRecord::new(0x10579, &[0x105A0]),
    CaseRecord::new(0x1057A, &[0x105A1]),
    CaseRecord::new(0x1057C, &[0x105A3]),
    CaseRecord::new(0x1057D, &[0x105A4]),
    CaseRecord::new(0x1057E, &[0x105A5]),
    CaseRecord::new(0x1057F, &[0x105A6]),
    CaseRecord::new(0x10580, &[0x105A7]),
    CaseRecord::new(0x10581, &[0x105A8]),
    CaseRecord::new(0x10582, &[0x105A9]),
    CaseRecord::new(0x10583, &[0x105AA]),
    CaseRecord::new(0x10584, &[0x105AB]),
    CaseRecord::new(0x10585, &[0x105AC]),
    CaseRecord::new(0x10586, &[0x105AD]),
    CaseRecord::new(0x10587, &[0x105AE]),
    CaseRecord::new(0x10588, &[0x105AF]),
    CaseRecord::new(0x10589, &[0x105B0]),
    CaseRecord::new(0x1058A, &[0x105B1]),
    CaseRecord::new(0x1058C, &[0x105B3]),
    CaseRecord::new(0x1058D, &[0x105B4]),
    CaseRecord::new(0x1058E, &[0x105B5]),
    CaseRecord::new(0x1058F, &[0x105B6]),
    CaseRecord::new(0x10590, &[0x105B7]),
    CaseRecord::new(0x10591, &[0x105B8]),
    CaseRecord::new(0x10592, &[0x105B9]),
    CaseRecord::new(0x10594, &[0x105BB]),
    CaseRecord::new(0x10595, &[0x105BC]),
    CaseRecord::new(0x10C80, &[0x10CC0]),
    CaseRecord::new(0x10C81, &[0x10CC1]),
    CaseRecord::new(0x10C82, &[0x10CC2]),
    CaseRecord::new(0x10C83, &[0x10CC3]),
    CaseRecord::new(0x10C84, &[0x10CC4]),
    CaseRecord::new(0x10C85, &[0x10CC5]),
    CaseRecord::new(0x10C86, &[0x10CC6]),
    CaseRecord::new(0x10C87, &[0x10CC7]),
    CaseRecord::new(0x10C88, &[0x10CC8]),
    CaseRecord::new(0x10C89, &[0x10CC9]),
    CaseRecord::new(0x10C8A, &[0x10CCA]),
    CaseRecord::new(0x10C8B, &[0x10CCB]),
    CaseRecord::new(0x10C8C, &[0x10CCC]),
    CaseRecord::new(0x10C8D, &[0x10CCD]),
    CaseRecord::new(0x10C8E, &[0x10CCE]),
    CaseRecord::new(0x10C8F, &[0x10CCF]),
    CaseRecord::new(0x10C90, &[0x10CD0]),
    CaseRecord::new(0x10C91, &[0x10CD1]),
    CaseRecord::new(0x10C92, &[0x10CD2]),
    CaseRecord::new(0x10C93, &[0x10CD3]),
    CaseRecord::new(0x10C94, &[0x10CD4]),
    CaseRecord::new(0x10C95, &[0x10CD5]),
    CaseRecord::new(0x10C96, &[0x10CD6]),
    CaseRecord::new(0x10C97, &[0x10CD7]),
    CaseRecord::new(0x10C98, &[0x10CD8]),
    CaseRecord::new(0x10C99, &[0x10CD9]),
    CaseRecord::new(0x10C9A, &[0x10CDA]),
    CaseRecord::new(0x10C9B, &[0x10CDB]),
    CaseRecord::new(0x10C9C, &[0x10CDC]),
    CaseRecord::new(0x10C9D, &[0x10CDD]),
    CaseRecord::new(0x10C9E, &[0x10CDE]),
    CaseRecord::new(0x10C9F, &[0x10CDF]),
    CaseRecord::new(0x10CA0, &[0x10CE0]),
    CaseRecord::new(0x10CA1, &[0x10CE1]),
    CaseRecord::new(0x10CA2, &[0x10CE2]),
    CaseRecord::new(0x10CA3, &[0x10CE3]),
    CaseRecord::new(0x10CA4, &[0x10CE4]),
    CaseRecord::new(0x10CA5, &[0x10CE5]),
    CaseRecord::new(0x10CA6, &[0x10CE6]),
    CaseRecord::new(0x10CA7, &[0x10CE7]),
    CaseRecord::new(0x10CA8, &[0x10CE8]),
    CaseRecord::new(0x10CA9, &[0x10CE9]),
    CaseRecord::new(0x10CAA, &[0x10CEA]),
    CaseRecord::new(0x10CAB, &[0x10CEB]),
    CaseRecord::new(0x10CAC, &[0x10CEC]),
    CaseRecord::new(0x10CAD, &[0x10CED]),
    CaseRecord::new(0x10CAE, &[0x10CEE]),
    CaseRecord::new(0x10CAF, &[0x10CEF]),
    CaseRecord::new(0x10CB0, &[0x10CF0]),
    CaseRecord::new(0x10CB1, &[0x10CF1]),
    CaseRecord::new(0x10CB2, &[0x10CF2]),
    CaseRecord::new(0x118A0, &[0x118C0]),
    CaseRecord::new(0x118A1, &[0x118C1]),
    CaseRecord::new(0x118A2, &[0x118C2]),
    CaseRecord::new(0x118A3, &[0x118C3]),
    CaseRecord::new(0x118A4, &[0x118C4]),
    CaseRecord::new(0x118A5, &[0x118C5]),
    CaseRecord::new(0x118A6, &[0x118C6]),
    CaseRecord::new(0x118A7, &[0x118C7]),
    CaseRecord::new(0x118A8, &[0x118C8]),
    CaseRecord::new(0x118A9, &[0x118C9]),
    CaseRecord::new(0x118AA, &[0x118CA]),
    CaseRecord::new(0x118AB, &[0x118CB]),
    CaseRecord::new(0x118AC, &[0x118CC]),
    CaseRecord::new(0x118AD, &[0x118CD]),
    CaseRecord::new(0x118AE, &[0x118CE]),
    CaseRecord::new(0x118AF, &[0x118CF]),
    CaseRecord::new(0x118B0, &[0x118D0]),
    CaseRecord::new(0x118B1, &[0x118D1]),
    CaseRecord::new(0x118B2, &[0x118D2]),
    CaseRecord::new(0x118B3, &[0x118D3]),
    CaseRecord::new(0x118B4, &[0x118D4]),
    CaseRecord::new(0x118B5, &[0x118D5]),
    CaseRecord::new(0x118B6, &[0x118D6]),
    CaseRecord::new(0x118B7, &[0x118D7]),
    CaseRecord::new(0x118B8, &[0x118D8]),
    CaseRecord::new(0x118B9, &[0x118D9]),
    CaseRecord::new(0x118BA, &[0x118DA]),
    CaseRecord::new(0x118BB, &[0x118DB]),
    CaseRecord::new(0x118BC, &[0x118DC]),
    CaseRecord::new(0x118BD, &[0x118DD]),
    CaseRecord::new(0x118BE, &[0x118DE]),
    CaseRecord::new(0x118BF, &[0x118DF]),
    CaseRecord::new(0x16E40, &[0x16E60]),
    CaseRecord::new(0x16E41, &[0x16E61]),
    CaseRecord::new(0x16E42, &[0x16E62]),
    CaseRecord::new(0x16E43, &[0x16E63]),
    CaseRecord::new(0x16E44, &[0x16E64]),
    CaseRecord::new(0x16E45, &[0x16E65]),
    CaseRecord::new(0x16E46, &[0x16E66]),
    CaseRecord::new(0x16E47, &[0x16E67]),
    CaseRecord::new(0x16E48, &[0x16E68]),
    CaseRecord::new(0x16E49, &[0x16E69]),
    CaseRecord::new(0x16E4A, &[0x16E6A]),
    CaseRecord::new(0x16E4B, &[0x16E6B]),
    CaseRecord::new(0x16E4C, &[0x16E6C]),
    CaseRecord::new(0x16E4D, &[0x16E6D]),
    CaseRecord::new(0x16E4E, &[0x16E6E]),
    CaseRecord::new(0x16E4F, &[0x16E6F]),
    CaseRecord::new(0x16E50, &[0x16E70]),
    CaseRecord::new(0x16E51, &[0x16E71]),
    CaseRecord::new(0x16E52, &[0x16E72]),
    CaseRecord::new(0x16E53, &[0x16E73]),
    CaseRecord::new(0x16E54, &[0x16E74]),
    CaseRecord::new(0x16E55, &[0x16E75]),
    CaseRecord::new(0x16E56, &[0x16E76]),
    CaseRecord::new(0x16E57, &[0x16E77]),
    CaseRecord::new(0x16E58, &[0x16E78]),
    CaseRecord::new(0x16E59, &[0x16E79]),
    CaseRecord::new(0x16E5A, &[0x16E7A]),
    CaseRecord::new(0x16E5B, &[0x16E7B]),
    CaseRecord::new(0x16E5C, &[0x16E7C]),
    CaseRecord::new(0x16E5D, &[0x16E7D]),
    CaseRecord::new(0x16E5E, &[0x16E7E]),
    CaseRecord::new(0x16E5F, &[0x16E7F]),
    CaseRecord::new(0x1E900, &[0x1E922]),
    CaseRecord::new(0x1E901, &[0x1E923]),
    CaseRecord::new(0x1E902, &[0x1E924]),
    CaseRecord::new(0x1E903, &[0x1E925]),
    CaseRecord::new(0x1E904, &[0x1E926]),
    CaseRecord::new(0x1E905, &[0x1E927]),
    CaseRecord::new(0x1E906, &[0x1E928]),
    CaseRecord::new(0x1E907, &[0x1E929]),
    CaseRecord::new(0x1E908, &[0x1E92A]),
    CaseRecord::new(0x1E909, &[0x1E92B]),
    CaseRecord::new(0x1E90A, &[0x1E92C]),
    CaseRecord::new(0x1E90B, &[0x1E92D]),
    CaseRecord::new(0x1E90C, &[0x1E92E]),
    CaseRecord::new(0x1E90D, &[0x1E92F]),
    CaseRecord::new(0x1E90E, &[0x1E930]),
    CaseRecord::new(0x1E90F, &[0x1E931]),
    CaseRecord::new(0x1E910, &[0x1E932]),
    CaseRecord::new(0x1E911, &[0x1E933]),
    CaseRecord::new(0x1E912, &[0x1E934]),
    CaseRecord::new(0x1E913, &[0x1E935]),
    CaseRecord::new(0x1E914, &[0x1E936]),
    CaseRecord::new(0x1E915, &[0x1E937]),
    CaseRecord::new(0x1E916, &[0x1E938]),
    CaseRecord::new(0x1E917, &[0x1E939]),
    CaseRecord::new(0x1E918, &[0x1E93A]),
    CaseRecord::new(0x1E919, &[0x1E93B]),
    CaseRecord::new(0x1E91A, &[0x1E93C]),
    CaseRecord::new(0x1E91B, &[0x1E93D]),
    CaseRecord::new(0x1E91C, &[0x1E93E]),
    CaseRecord::new(0x1E91D, &[0x1E93F]),
    CaseRecord::new(0x1E91E, &[0x1E940]),
    CaseRecord::new(0x1E91F, &[0x1E941]),
    CaseRecord::new(0x1E920, &[0x1E942]),
    CaseRecord::new(0x1E921, &[0x1E943]),
];

pub const TITLECASE: &[CaseRecord<'static>] = &[
    CaseRecord::new(0x0061, &[0x0041]),
    CaseRecord::new(0x0062, &[0x0042]),
    CaseRecord::new(0x0063, &[0x0043]),
    CaseRecord::new(0x0064, &[0x0044]),
    CaseRecord::new(0x0065, &[0x0045]),
    CaseRecord::new(0x0066, &[0x0046]),
    CaseRecord::new(0x0067, &[0x0047]),
    CaseRecord::new(0x0068, &[0x0048]),
    CaseRecord::new(0x0069, &[0x0049]),
    CaseRecord::new(0x006A, &[0x004A]),
    CaseRecord::new(0x006B, &[0x004B]),
    CaseRecord::new(0x006C, &[0x004C]),
    CaseRecord::new(0x006D, &[0x004D]),
    CaseRecord::new(0x006E, &[0x004E]),
    CaseRecord::new(0x006F, &[0x004F]),
    CaseRecord::new(0x0070, &[0x0050]),
    CaseRecord::new(0x0071, &[0x0051]),
    CaseRecord::new(0x0072, &[0x0052]),
    CaseRecord::new(0x0073, &[0x0053]),
    CaseRecord::new(0x0074, &[0x0054]),
    CaseRecord::new(0x0075, &[0x0055]),
    CaseRecord::new(0x0076, &[0x0056]),
    CaseRecord::new(0x0077, &[0x0057]),
    CaseRecord::new(0x0078, &[0x0058]),
    CaseRecord::new(0x0079, &[0x0059]),
    CaseRecord::new(0x007A, &[0x005A]),
    CaseRecord::new(0x00B5, &[0x039C]),
    CaseRecord::new(0x00DF, &[0x0053, 0x0073]),
    CaseRecord::new(0x00E0, &[0x00C0]),
    CaseRecord::new(0x00E1, &[0x00C1]),
    CaseRecord::new(0x00E2, &[0x00C2]),
    CaseRecord::new(0x00E3, &[0x00C3]),
    CaseRecord::new(0x00E4, &[0x00C4]),
    CaseRecord::new(0x00E5, &[0x00C5]),
    CaseRecord::new(0x00E6, &[0x00C6]),
    CaseRecord::new(0x00E7, &[0x00C7]),
    CaseRecord::new(0x00E8, &[0x00C8]),
    CaseRecord::new(0x00E9, &[0x00C9]),
    CaseRecord::new(0x00EA, &[0x00CA]),
    CaseRecord::new(0x00EB, &[0x00CB]),
    CaseRecord::new(0x00EC, &[0x00CC]),
    CaseRecord::new(0x00ED, &[0x00CD]),
    CaseRecord::new(0x00EE, &[0x00CE]),
    CaseRecord::new(0x00EF, &[0x00CF]),
    CaseRecord::new(0x00F0, &[0x00D0]),
    CaseRecord::new(0x00F1, &[0x00D1]),
    CaseRecord::new(0x00F2, &[0x00D2]),
    CaseRecord::new(0x00F3, &[0x00D3]),
    CaseRecord::new(0x00F4, &[0x00D4]),
    CaseRecord::new(0x00F5, &[0x00D5]),
    CaseRecord::new(0x00F6, &[0x00D6]),
    CaseRecord::new(0x00F8, &[0x00D8]),
    CaseRecord::new(0x00F9, &[0x00D9]),
    CaseRecord::new(0x00FA, &[0x00DA]),
    CaseRecord::new(0x00FB, &[0x00DB]),
    CaseRecord::new(0x00FC, &[0x00DC]),
    CaseRecord::new(0x00FD, &[0x00DD]),
    CaseRecord::new(0x00FE, &[0x00DE]),
    CaseRecord::new(0x00FF, &[0x0178]),
    CaseRecord::new(0x0101, &[0x0100]),
    CaseRecord::new(0x0103, &[0x0102]),
    CaseRecord::new(0x0105, &[0x0104]),
    CaseRecord::new(0x0107, &[0x0106]),
    CaseRecord::new(0x0109, &[0x0108]),
    CaseRecord::new(0x010B, &[0x010A]),
    CaseRecord::new(0x010D, &[0x010C]),
    CaseRecord::new(0x010F, &[0x010E]),
    CaseRecord::new(0x0111, &[0x0110]),
    CaseRecord::new(0x0113, &[0x0112]),
    CaseRecord::new(0x0115, &[0x0114]),
    CaseRecord::new(0x0117, &[0x0116]),
    CaseRecord::new(0x0119, &[0x0118]),
    CaseRecord::new(0x011B, &[0x011A]),
    CaseRecord::new(0x011D, &[0x011C]),
    CaseRecord::new(0x011F, &[0x011E]),
    CaseRecord::new(0x0121, &[0x0120]),
    CaseRecord::new(0x0123, &[0x0122]),
    CaseRecord::new(0x0125, &[0x0124]),
    CaseRecord::new(0x0127, &[0x0126]),
    CaseRecord::new(0x0129, &[0x0128]),
    CaseRecord::new(0x012B, &[0x012A]),
    CaseRecord::new(0x012D, &[0x012C]),
    CaseRecord::new(0x012F, &[0x012E]),
    CaseRecord::new(0x0131, &[0x0049]),
    CaseRecord::new(0x0133, &[0x0132]),
    CaseRecord::new(0x0135, &[0x0134]),
    CaseRecord::new(0x0137, &[0x0136]),
    CaseRecord::new(0x013A, &[0x0139]),
    CaseRecord::new(0x013C, &[0x013B]),
    CaseRecord::new(0x013E, &[0x013D]),
    CaseRecord::new(0x0140, &[0x013F]),
    CaseRecord::new(0x0142, &[0x0141]),
    CaseRecord::new(0x0144, &[0x0143]),
    CaseRecord::new(0x0146, &[0x0145]),
    CaseRecord::new(0x0148, &[0x0147]),
    CaseRecord::new(0x0149, &[0x02BC, 0x004E]),
    CaseRecord::new(0x014B, &[0x014A]),
    CaseRecord::new(0x014D, &[0x014C]),
    CaseRecord::new(0x014F, &[0x014E]),
    CaseRecord::new(0x0151, &[0x0150]),
    CaseRecord::new(0x0153, &[0x0152]),
    CaseRecord::new(0x0155, &[0x0154]),
    CaseRecord::new(0x0157, &[0x0156]),
    CaseRecord::new(0x0159, &[0x0158]),
    CaseRecord::new(0x015B, &[0x015A]),
    CaseRecord::new(0x015D, &[0x015C]),
    CaseRecord::new(0x015F, &[0x015E]),
    CaseRecord::new(0x0161, &[0x0160]),
    CaseRecord::new(0x0163, &[0x0162]),
    CaseRecord::new(0x0165, &[0x0164]),
    CaseRecord::new(0x0167, &[0x0166]),
    CaseRecord::new(0x0169, &[0x0168]),
    CaseRecord::new(0x016B, &[0x016A]),
    CaseRecord::new(0x016D, &[0x016C]),
    CaseRecord::new(0x016F, &[0x016E]),
    CaseRecord::new(0x0171, &[0x0170]),
    CaseRecord::new(0x0173, &[0x0172]),
    CaseRecord::new(0x0175, &[0x0174]),
    CaseRecord::new(0x0177, &[0x0176]),
    CaseRecord::new(0x017A, &[0x0179]),
    CaseRecord::new(0x017C, &[0x017B]),
    CaseRecord::new(0x017E, &[0x017D]),
    CaseRecord::new(0x017F, &[0x0053]),
    CaseRecord::new(0x0180, &[0x0243]),
    CaseRecord::new(0x0183, &[0x0182]),
    CaseRecord::new(0x0185, &[0x0184]),
    CaseRecord::new(0x0188, &[0x0187]),
    CaseRecord::new(0x018C, &[0x018B]),
    CaseRecord::new(0x0192, &[0x0191]),
    CaseRecord::new(0x0195, &[0x01F6]),
    CaseRecord::new(0x0199, &[0x0198]),
    CaseRecord::new(0x019A, &[0x023D]),
    CaseRecord::new(0x019E, &[0x0220]),
    CaseRecord::new(0x01A1, &[0x01A0]),
    CaseRecord::new(0x01A3, &[0x01A2]),
    CaseRecord::new(0x01A5, &[0x01A4]),
    CaseRecord::new(0x01A8, &[0x01A7]),
    CaseRecord::new(0x01AD, &[0x01AC]),
    CaseRecord::new(0x01B0, &[0x01AF]),
    CaseRecord::new(0x01B4, &[0x01B3]),
    CaseRecord::new(0x01B6, &[0x01B5]),
    CaseRecord::new(0x01B9, &[0x01B8]),
    CaseRecord::new(0x01BD, &[0x01BC]),
    CaseRecord::new(0x01BF, &[0x01F7]),
    CaseRecord::new(0x01C4, &[0x01C5]),
    CaseRecord::new(0x01C6, &[0x01C5]),
    CaseRecord::new(0x01C7, &[0x01C8]),
    CaseRecord::new(0x01C9, &[0x01C8]),
    CaseRecord::new(0x01CA, &[0x01CB]),
    CaseRecord::new(0x01CC, &[0x01CB]),
    CaseRecord::new(0x01CE, &[0x01CD]),
    CaseRecord::new(0x01D0, &[0x01CF]),
    CaseRecord::new(0x01D2, &[0x01D1]),
    CaseRecord::new(0x01D4, &[0x01D3]),
    CaseRecord::new(0x01D6, &[0x01D5]),
    CaseRecord::new(0x01D8, &[0x01D7]),
    CaseRecord::new(0x01DA, &[0x01D9]),
    CaseRecord::new(0x01DC, &[0x01DB]),
    CaseRecord::new(0x01DD, &[0x018E]),
    CaseRecord::new(0x01DF, &[0x01DE]),
    CaseRecord::new(0x01E1, &[0x01E0]),
    CaseRecord::new(0x01E3, &[0x01E2]),
    CaseRecord::new(0x01E5, &[0x01E4]),
    CaseRecord::new(0x01E7, &[0x01E6]),
    CaseRecord::new(0x01E9, &[0x01E8]),
    CaseRecord::new(0x01EB, &[0x01EA]),
    CaseRecord::new(0x01ED, &[0x01EC]),
    CaseRecord::new(0x01EF, &[0x01EE]),
    CaseRecord::new(0x01F0, &[0x004A, 0x030C]),
    CaseRecord::new(0x01F1, &[0x01F2]),
    CaseRecord::new(0x01F3, &[0x01F2]),
    CaseRecord::new(0x01F5, &[0x01F4]),
    CaseRecord::new(0x01F9, &[0x01F8]),
    CaseRecord::new(0x01FB, &[0x01FA]),
    CaseRecord::new(0x01FD, &[0x01FC]),
    CaseRecord::new(0x01FF, &[0x01FE]),
    CaseRecord::new(0x0201, &[0x0200]),
    CaseRecord::new(0x0203, &[0x0202]),
    CaseRecord::new(0x0205, &[0x0204]),
    CaseRecord::new(0x0207, &[0x0206]),
    CaseRecord::new(0x0209, &[0x0208]),
    CaseRecord::new(0x020B, &[0x020A]),
    CaseRecord::new(0x020D, &[0x020C]),
    CaseRecord::new(0x020F, &[0x020E]),
    CaseRecord::new(0x0211, &[0x0210]),
    CaseRecord::new(0x0213, &[0x0212]),
    CaseRecord::new(0x0215, &[0x0214]),
    CaseRecord::new(0x0217, &[0x0216]),
    CaseRecord::new(0x0219, &[0x0218]),
    CaseRecord::new(0x021B, &[0x021A]),
    CaseRecord::new(0x021D, &[0x021C]),
    CaseRecord::new(0x021F, &[0x021E]),
    CaseRecord::new(0x0223, &[0x0222]),
    CaseRecord::new(0x0225, &[0x0224]),
    CaseRecord::new(0x0227, &[0x0226]),
    CaseRecord::new(0x0229, &[0x0228]),
    CaseRecord::new(0x022B, &[0x022A]),
    CaseRecord::new(0x022D, &[0x022C]),
    CaseRecord::new(0x022F, &[0x022E]),
    CaseRecord::new(0x0231, &[0x0230]),
    CaseRecord::new(0x0233, &[0x0232]),
    CaseRecord::new(0x023C, &[0x023B]),
    CaseRecord::new(0x023F, &[0x2C7E]),
    CaseRecord::new(0x0240, &[0x2C7F]),
    CaseRecord::new(0x0242, &[0x0241]),
    CaseRecord::new(0x0247, &[0x0246]),
    CaseRecord::new(0x0249, &[0x0248]),
    CaseRecord::new(0x024B, &[0x024A]),
    CaseRecord::new(0x024D, &[0x024C]),
    CaseRecord::new(0x024F, &[0x024E]),
    CaseRecord::new(0x0250, &[0x2C6F]),
    CaseRecord::new(0x0251, &[0x2C6D]),
    CaseRecord::new(0x0252, &[0x2C70]),
    CaseRecord::new(0x0253, &[0x0181]),
    CaseRecord::new(0x0254, &[0x0186]),
    CaseRecord::new(0x0256, &[0x0189]),
    CaseRecord::new(0x0257, &[0x018A]),
    CaseRecord::new(0x0259, &[0x018F]),
    CaseRecord::new(0x025B, &[0x0190]),
    CaseRecord::new(0x025C, &[0xA7AB]),
    CaseRecord::new(0x0260, &[0x0193]),
    CaseRecord::new(0x0261, &[0xA7AC]),
    CaseRecord::new(0x0263, &[0x0194]),
    CaseRecord::new(0x0265, &[0xA78D]),
    CaseRecord::new(0x0266, &[0xA7AA]),
    CaseRecord::new(0x0268, &[0x0197]),
    CaseRecord::new(0x0269, &[0x0196]),
    CaseRecord::new(0x026A, &[0xA7AE]),
    CaseRecord::new(0x026B, &[0x2C62]),
    CaseRecord::new(0x026C, &[0xA7AD]),
    CaseRecord::new(0x026F, &[0x019C]),
    CaseRecord::new(0x0271, &[0x2C6E]),
    CaseRecord::new(0x0272, &[0x019D]),
    CaseRecord::new(0x0275, &[0x019F]),
    CaseRecord::new(0x027D, &[0x2C64]),
    CaseRecord::new(0x0280, &[0x01A6]),
    CaseRecord::new(0x0282, &[0xA7C5]),
    CaseRecord::new(0x0283, &[0x01A9]),
    CaseRecord::new(0x0287, &[0xA7B1]),
    CaseRecord::new(0x0288, &[0x01AE]),
    CaseRecord::new(0x0289, &[0x0244]),
    CaseRecord::new(0x028A, &[0x01B1]),
    CaseRecord::new(0x028B, &[0x01B2]),
    CaseRecord::new(0x028C, &[0x0245]),
    CaseRecord::new(0x0292, &[0x01B7]),
    CaseRecord::new(0x029D, &[0xA7B2]),
    CaseRecord::new(0x029E, &[0xA7B0]),
    CaseRecord::new(0x0345, &[0x0399]),
    CaseRecord::new(0x0371, &[0x0370]),
    CaseRecord::new(0x0373, &[0x0372]),
    CaseRecord::new(0x0377, &[0x0376]),
    CaseRecord::new(0x037B, &[0x03FD]),
    CaseRecord::new(0x037C, &[0x03FE]),
    CaseRecord::new(0x037D, &[0x03FF]),
    CaseRecord::new(0x0390, &[0x0399, 0x0308, 0x0301]),
    CaseRecord::new(0x03AC, &[0x0386]),
    CaseRecord::new(0x03AD, &[0x0388]),
    CaseRecord::new(0x03AE, &[0x0389]),
    CaseRecord::new(0x03AF, &[0x038A]),
    CaseRecord::new(0x03B0, &[0x03A5, 0x0308, 0x0301]),
    CaseRecord::new(0x03B1, &[0x0391]),
    CaseRecord::new(0x03B2, &[0x0392]),
    CaseRecord::new(0x03B3, &[0x0393]),
    CaseRecord::new(0x03B4, &[0x0394]),
    CaseRecord::new(0x03B5, &[0x0395]),
    CaseRecord::new(0x03B6, &[0x0396]),
    CaseRecord::new(0x03B7, &[0x0397]),
    CaseRecord::new(0x03B8, &[0x0398]),
    CaseRecord::new(0x03B9, &[0x0399]),
    CaseRecord::new(0x03BA, &[0x039A]),
    CaseRecord::new(0x03BB, &[0x039B]),
    CaseRecord::new(0x03BC, &[0x039C]),
    CaseRecord::new(0x03BD, &[0x039D]),
    CaseRecord::new(0x03BE, &[0x039E]),
    CaseRecord::new(0x03BF, &[0x039F]),
    CaseRecord::new(0x03C0, &[0x03A0]),
    CaseRecord::new(0x03C1, &[0x03A1]),
    CaseRecord::new(0x03C2, &[0x03A3]),
    CaseRecord::new(0x03C3, &[0x03A3]),
    CaseRecord::new(0x03C4, &[0x03A4]),
    CaseRecord::new(0x03C5, &[0x03A5]),
    CaseRecord::new(0x03C6, &[0x03A6]),
    CaseRecord::new(0x03C7, &[0x03A7]),
    CaseRecord::new(0x03C8, &[0x03A8]),
    CaseRecord::new(0x03C9, &[0x03A9]),
    CaseRecord::new(0x03CA, &[0x03AA]),
    CaseRecord::new(0x03CB, &[0x03AB]),
    CaseRecord::new(0x03CC, &[0x038C]),
    CaseRecord::new(0x03CD, &[0x038E]),
    CaseRecord::new(0x03CE, &[0x038F]),
    CaseRecord::new(0x03D0, &[0x0392]),
    CaseRecord::new(0x03D1, &[0x0398]),
    CaseRecord::new(0x03D5, &[0x03A6]),
    CaseRecord::new(0x03D6, &[0x03A0]),
    CaseRecord::new(0x03D7, &[0x03CF]),
    CaseRecord::new(0x03D9, &[0x03D8]),
    CaseRecord::new(0x03DB, &[0x03DA]),
    CaseRecord::new(0x03DD, &[0x03DC]),
    CaseRecord::new(0x03DF, &[0x03DE]),
    CaseRecord::new(0x03E1, &[0x03E0]),
    CaseRecord::new(0x03E3, &[0x03E2]),
    CaseRecord::new(0x03E5, &[0x03E4]),
    CaseRecord::new(0x03E7, &[0x03E6]),
    CaseRecord::new(0x03E9, &[0x03E8]),
    CaseRecord::new(0x03EB, &[0x03EA]),
    CaseRecord::new(0x03ED, &[0x03EC]),
    CaseRecord::new(0x03EF, &[0x03EE]),
    CaseRecord::new(0x03F0, &[0x039A]),
    CaseRecord::new(0x03F1, &[0x03A1]),
    CaseRecord::new(0x03F2, &[0x03F9]),
    CaseRecord::new(0x03F3, &[0x037F]),
    CaseRecord::new(0x03F5, &[0x0395]),
    CaseRecord::new(0x03F8, &[0x03F7]),
    CaseRecord::new(0x03FB, &[0x03FA]),
    CaseRecord::new(0x0430, &[0x0410]),
    CaseRecord::new(0x0431, &[0x0411]),
    CaseRecord::new(0x0432, &[0x0412]),
    CaseRecord::new(0x0433, &[0x0413]),
    CaseRecord::new(0x0434, &[0x0414]),
    CaseRecord::new(0x0435, &[0x0415]),
    CaseRecord::new(0x0436, &[0x0416]),
    CaseRecord::new(0x0437, &[0x0417]),
    CaseRecord::new(0x0438, &[0x0418]),
    CaseRecord::new(0x0439, &[0x0419]),
    CaseRecord::new(0x043A, &[0x041A]),
    CaseRecord::new(0x043B, &[0x041B]),
    CaseRecord::new(0x043C, &[0x041C]),
    CaseRecord::new(0x043D, &[0x041D]),
    CaseRecord::new(0x043E, &[0x041E]),
    CaseRecord::new(0x043F, &[0x041F]),
    CaseRecord::new(0x0440, &[0x0420]),
    CaseRecord::new(0x0441, &[0x0421]),
    CaseRecord::new(0x0442, &[0x0422]),
    CaseRecord::new(0x0443, &[0x0423]),
    CaseRecord::new(0x0444, &[0x0424]),
    CaseRecord::new(0x0445, &[0x0425]),
    CaseRecord::new(0x0446, &[0x0426]),
    CaseRecord::new(0x0447, &[0x0427]),
    CaseRecord::new(0x0448, &[0x0428]),
    CaseRecord::new(0x0449, &[0x0429]),
    CaseRecord::new(0x044A, &[0x042A]),
    CaseRecord::new(0x044B, &[0x042B]),
    CaseRecord::new(0x044C, &[0x042C]),
    CaseRecord::new(0x044D, &[0x042D]),
    CaseRecord::new(0x044E, &[0x042E]),
    CaseRecord::new(0x044F, &[0x042F]),
    CaseRecord::new(0x0450, &[0x0400]),
    CaseRecord::new(0x0451, &[0x0401]),
    CaseRecord::new(0x0452, &[0x0402]),
    CaseRecord::new(0x0453, &[0x0403]),
    CaseRecord::new(0x0454, &[0x0404]),
    CaseRecord::new(0x0455, &[0x0405]),
    CaseRecord::new(0x0456, &[0x0406]),
    CaseRecord::new(0x0457, &[0x0407]),
    CaseRecord::new(0x0458, &[0x0408]),
    CaseRecord::new(0x0459, &[0x0409]),
    CaseRecord::new(0x045A, &[0x040A]),
    CaseRecord::new(0x045B, &[0x040B]),
    CaseRecord::new(0x045C, &[0x040C]),
    CaseRecord::new(0x045D, &[0x040D]),
    CaseRecord::new(0x045E, &[0x040E]),
    CaseRecord::new(0x045F, &[0x040F]),
    CaseRecord::new(0x0461, &[0x0460]),
    CaseRecord::new(0x0463, &[0x0462]),
    CaseRecord::new(0x0465, &[0x0464]),
    CaseRecord::new(0x0467, &[0x0466]),
    CaseRecord::new(0x0469, &[0x0468]),
    CaseRecord::new(0x046B, &[0x046A]),
    CaseRecord::new(0x046D, &[0x046C]),
    CaseRecord::new(0x046F, &[0x046E]),
    CaseRecord::new(0x0471, &[0x0470]),
    CaseRecord::new(0x0473, &[0x0472]),
    CaseRecord::new(0x0475, &[0x0474]),
    CaseRecord::new(0x0477, &[0x0476]),
    CaseRecord::new(0x0479, &[0x0478]),
    CaseRecord::new(0x047B, &[0x047A]),
    CaseRecord::new(0x047D, &[0x047C]),
    CaseRecord::new(0x047F, &[0x047E]),
    CaseRecord::new(0x0481, &[0x0480]),
    CaseRecord::new(0x048B, &[0x048A]),
    CaseRecord::new(0x048D, &[0x048C]),
    CaseRecord::new(0x048F, &[0x048E]),
    CaseRecord::new(0x0491, &[0x0490]),
    CaseRecord::new(0x0493, &[0x0492]),
    CaseRecord::new(0x0495, &[0x0494]),
    CaseRecord::new(0x0497, &[0x0496]),
    CaseRecord::new(0x0499, &[0x0498]),
    CaseRecord::new(0x049B, &[0x049A]),
    CaseRecord::new(0x049D, &[0x049C]),
    CaseRecord::new(0x049F, &[0x049E]),
    CaseRecord::new(0x04A1, &[0x04A0]),
    CaseRecord::new(0x04A3, &[0x04A2]),
    CaseRecord::new(0x04A5, &[0x04A4]),
    CaseRecord::new(0x04A7, &[0x04A6]),
    CaseRecord::new(0x04A9, &[0x04A8]),
    CaseRecord::new(0x04AB, &[0x04AA]),
    CaseRecord::new(0x04AD, &[0x04AC]),
    CaseRecord::new(0x04AF, &[0x04AE]),
    CaseRecord::new(0x04B1, &[0x04B0]),
    CaseRecord::new(0x04B3, &[0x04B2]),
    CaseRecord::new(0x04B5, &[0x04B4]),
    CaseRecord::new(0x04B7, &[0x04B6]),
    CaseRecord::new(0x04B9, &[0x04B8]),
    CaseRecord::new(0x04BB, &[0x04BA]),
    CaseRecord::new(0x04BD, &[0x04BC]),
    CaseRecord::new(0x04BF, &[0x04BE]),
    CaseRecord::new(0x04C2, &[0x04C1]),
    CaseRecord::new(0x04C4, &[0x04C3]),
    CaseRecord::new(0x04C6, &[0x04C5]),
    CaseRecord::new(0x04C8, &[0x04C7]),
    CaseRecord::new(0x04CA, &[0x04C9]),
    CaseRecord::new(0x04CC, &[0x04CB]),
    CaseRecord::new(0x04CE, &[0x04CD]),
    CaseRecord::new(0x04CF, &[0x04C0]),
    CaseRecord::new(0x04D1, &[0x04D0]),
    CaseRecord::new(0x04D3, &[0x04D2]),
    CaseRecord::new(0x04D5, &[0x04D4]),
    CaseRecord::new(0x04D7, &[0x04D6]),
    CaseRecord::new(0x04D9, &[0x04D8]),
    CaseRecord::new(0x04DB, &[0x04DA]),
    CaseRecord::new(0x04DD, &[0x04DC]),
    CaseRecord::new(0x04DF, &[0x04DE]),
    CaseRecord::new(0x04E1, &[0x04E0]),
    CaseRecord::new(0x04E3, &[0x04E2]),
    CaseRecord::new(0x04E5, &[0x04E4]),
    CaseRecord::new(0x04E7, &[0x04E6]),
    CaseRecord::new(0x04E9, &[0x04E8]),
    CaseRecord::new(0x04EB, &[0x04EA]),
    CaseRecord::new(0x04ED, &[0x04EC]),
    CaseRecord::new(0x04EF, &[0x04EE]),
    CaseRecord::new(0x04F1, &[0x04F0]),
    CaseRecord::new(0x04F3, &[0x04F2]),
    CaseRecord::new(0x04F5, &[0x04F4]),
    CaseRecord::new(0x04F7, &[0x04F6]),
    CaseRecord::new(0x04F9, &[0x04F8]),
    CaseRecord::new(0x04FB, &[0x04FA]),
    CaseRecord::new(0x04FD, &[0x04FC]),
    CaseRecord::new(0x04FF, &[0x04FE]),
    CaseRecord::new(0x0501, &[0x0500]),
    CaseRecord::new(0x0503, &[0x0502]),
    CaseRecord::new(0x0505, &[0x0504]),
    CaseRecord::new(0x0507, &[0x0506]),
    CaseRecord::new(0x0509, &[0x0508]),
    CaseRecord::new(0x050B, &[0x050A]),
    CaseRecord::new(0x050D, &[0x050C]),
    CaseRecord::new(0x050F, &[0x050E]),
    CaseRecord::new(0x0511, &[0x0510]),
    CaseRecord::new(0x0513, &[0x0512]),
    CaseRecord::new(0x0515, &[0x0514]),
    CaseRecord::new(0x0517, &[0x0516]),
    CaseRecord::new(0x0519, &[0x0518]),
    CaseRecord::new(0x051B, &[0x051A]),
    CaseRecord::new(0x051D, &[0x051C]),
    CaseRecord::new(0x051F, &[0x051E]),
    CaseRecord::new(0x0521, &[0x0520]),
    CaseRecord::new(0x0523, &[0x0522]),
    CaseRecord::new(0x0525, &[0x0524]),
    CaseRecord::new(0x0527, &[0x0526]),
    CaseRecord::new(0x0529, &[0x0528]),
    CaseRecord::new(0x052B, &[0x052A]),
    CaseRecord::new(0x052D, &[0x052C]),
    CaseRecord::new(0x052F, &[0x052E]),
    CaseRecord::new(0x0561, &[0x0531]),
    CaseRecord::new(0x0562, &[0x0532]),
    CaseRecord::new(0x0563, &[0x0533]),
    CaseRecord::new(0x0564, &[0x0534]),
    CaseRecord::new(0x0565, &[0x0535]),
    CaseRecord::new(0x0566, &[0x0536]),
    CaseRecord::new(0x0567, &[0x0537]),
    CaseRecord::new(0x0568, &[0x0538]),
    CaseRecord::new(0x0569, &[0x0539]),
    CaseRecord::new(0x056A, &[0x053A]),
    CaseRecord::new(0x056B, &[0x053B]),
    CaseRecord::new(0x056C, &[0x053C]),
    CaseRecord::new(0x056D, &[0x053D]),
    CaseRecord::new(0x056E, &[0x053E]),
    CaseRecord::new(0x056F, &[0x053F]),
    CaseRecord::new(0x0570, &[0x0540]),
    CaseRecord::new(0x0571, &[0x0541]),
    CaseRecord::new(0x0572, &[0x0542]),
    CaseRecord::new(0x0573, &[0x0543]),
    CaseRecord::new(0x0574, &[0x0544]),
    CaseRecord::new(0x0575, &[0x0545]),
    CaseRecord::new(0x0576, &[0x0546]),
    CaseRecord::new(0x0577, &[0x0547]),
    CaseRecord::new(0x0578, &[0x0548]),
    CaseRecord::new(0x0579, &[0x0549]),
    CaseRecord::new(0x057A, &[0x054A]),
    CaseRecord::new(0x057B, &[0x054B]),
    CaseRecord::new(0x057C, &[0x054C]),
    CaseRecord::new(0x057D, &[0x054D]),
    CaseRecord::new(0x057E, &[0x054E]),
    CaseRecord::new(0x057F, &[0x054F]),
    CaseRecord::new(0x0580, &[0x0550]),
    CaseRecord::new(0x0581, &[0x0551]),
    CaseRecord::new(0x0582, &[0x0552]),
    CaseRecord::new(0x0583, &[0x0553]),
    CaseRecord::new(0x0584, &[0x0554]),
    CaseRecord::new(0x0585, &[0x0555]),
    CaseRecord::new(0x0586, &[0x0556]),
    CaseRecord::new(0x0587, &[0x0535, 0x0582]),
    CaseRecord::new(0x13F8, &[0x13F0]),
    CaseRecord::new(0x13F9, &[0x13F1]),
    CaseRecord::new(0x13FA, &[0x13F2]),
    CaseRecord::new(0x13FB, &[0x13F3]),
    CaseRecord::new(0x13FC, &[0x13F4]),
    CaseRecord::new(0x13FD, &[0x13F5]),
    CaseRecord::new(0x1C80, &[0x0412]),
    CaseRecord::new(0x1C81, &[0x0414]),
    CaseRecord::new(0x1C82, &[0x041E]),
    CaseRecord::new(0x1C83, &[0x0421]),
    CaseRecord::new(0x1C84, &[0x0422]),
    CaseRecord::new(0x1C85, &[0x0422]),
    CaseRecord::new(0x1C86, &[0x042A]),
    CaseRecord::new(0x1C87, &[0x0462]),
    CaseRecord::new(0x1C88, &[0xA64A]),
    CaseRecord::new(0x1D79, &[0xA77D]),
    CaseRecord::new(0x1D7D, &[0x2C63]),
    CaseRecord::new(0x1D8E, &[0xA7C6]),
    CaseRecord::new(0x1E01, &[0x1E00]),
    CaseRecord::new(0x1E03, &[0x1E02]),
    CaseRecord::new(0x1E05, &[0x1E04]),
    CaseRecord::new(0x1E07, &[0x1E06]),
    CaseRecord::new(0x1E09, &[0x1E08]),
    CaseRecord::new(0x1E0B, &[0x1E0A]),
    CaseRecord::new(0x1E0D, &[0x1E0C]),
    CaseRecord::new(0x1E0F, &[0x1E0E]),
    CaseRecord::new(0x1E11, &[0x1E10]),
    CaseRecord::new(0x1E13, &[0x1E12]),
    CaseRecord::new(0x1E15, &[0x1E14]),
    CaseRecord::new(0x1E17, &[0x1E16]),
    CaseRecord::new(0x1E19, &[0x1E18]),
    CaseRecord::new(0x1E1B, &[0x1E1A]),
    CaseRecord::new(0x1E1D, &[0x1E1C]),
    CaseRecord::new(0x1E1F, &[0x1E1E]),
    CaseRecord::new(0x1E21, &[0x1E20]),
    CaseRecord::new(0x1E23, &[0x1E22]),
    CaseRecord::new(0x1E25, &[0x1E24]),
    CaseRecord::new(0x1E27, &[0x1E26]),
    CaseRecord::new(0x1E29, &[0x1E28]),
    CaseRecord::new(0x1E2B, &[0x1E2A]),
    CaseRecord::new(0x1E2D, &[0x1E2C]),
    CaseRecord::new(0x1E2F, &[0x1E2E]),
    CaseRecord::new(0x1E31, &[0x1E30]),
    CaseRecord::new(0x1E33, &[0x1E32]),
    CaseRecord::new(0x1E35, &[0x1E34]),
    CaseRecord::new(0x1E37, &[0x1E36]),
    CaseRecord::new(0x1E39, &[0x1E38]),
    CaseRecord::new(0x1E3B, &[0x1E3A]),
    CaseRecord::new(0x1E3D, &[0x1E3C]),
    CaseRecord::new(0x1E3F, &[0x1E3E]),
    CaseRecord::new(0x1E41, &[0x1E40]),
    CaseRecord::new(0x1E43, &[0x1E42]),
    CaseRecord::new(0x1E45, &[0x1E44]),
    CaseRecord::new(0x1E47, &[0x1E46]),
    CaseRecord::new(0x1E49, &[0x1E48]),
    CaseRecord::new(0x1E4B, &[0x1E4A]),
    CaseRecord::new(0x1E4D, &[0x1E4C]),
    CaseRecord::new(0x1E4F, &[0x1E4E]),
    CaseRecord::new(0x1E51, &[0x1E50]),
    CaseRecord::new(0x1E53, &[0x1E52]),
    CaseRecord::new(0x1E55, &[0x1E54]),
    CaseRecord::new(0x1E57, &[0x1E56]),
    CaseRecord::new(0x1E59, &[0x1E58]),
    CaseRecord::new(0x1E5B, &[0x1E5A]),
    CaseRecord::new(0x1E5D, &[0x1E5C]),
    CaseRecord::new(0x1E5F, &[0x1E5E]),
    CaseRecord::new(0x1E61, &[0x1E60]),
    CaseRecord::new(0x1E63, &[0x1E62]),
    CaseRecord::new(0x1E65, &[0x1E64]),
    CaseRecord::new(0x1E67, &[0x1E66]),
    CaseRecord::new(0x1E69, &[0x1E68]),
    CaseRecord::new(0x1E6B, &[0x1E6A]),
    CaseRecord::new(0x1E6D, &[0x1E6C]),
    CaseRecord::new(0x1E6F, &[0x1E6E]),
    CaseRecord::new(0x1E71, &[0x1E70]),
    CaseRecord::new(0x1E73, &[0x1E72]),
    CaseRecord::new(0x1E75, &[0x1E74]),
    CaseRecord::new(0x1E77, &[0x1E76]),
    CaseRecord::new(0x1E79, &[0x1E78]),
    CaseRecord::new(0x1E7B, &[0x1E7A]),
    CaseRecord::new(0x1E7D, &[0x1E7C]),
    CaseRecord::new(0x1E7F, &[0x1E7E]),
    CaseRecord::new(0x1E81, &[0x1E80]),
    CaseRecord::new(0x1E83, &[0x1E82]),
    CaseRecord::new(0x1E85, &[0x1E84]),
    CaseRecord::new(0x1E87, &[0x1E86]),
    CaseRecord::new(0x1E89, &[0x1E88]),
    CaseRecord::new(0x1E8B, &[0x1E8A]),
    CaseRecord::new(0x1E8D, &[0x1E8C]),
    CaseRecord::new(0x1E8F, &[0x1E8E]),
    CaseRecord::new(0x1E91, &[0x1E90]),
    CaseRecord::new(0x1E93, &[0x1E92]),
    CaseRecord::new(0x1E95, &[0x1E94]),
    CaseRecord::new(0x1E96, &[0x0048, 0x0331]),
    CaseRecord::new(0x1E97, &[0x0054, 0x0308]),
    CaseRecord::new(0x1E98, &[0x0057, 0x030A]),
    CaseRecord::new(0x1E99, &[0x0059, 0x030A]),
    CaseRecord::new(0x1E9A, &[0x0041, 0x02BE]),
    CaseRecord::new(0x1E9B, &[0x1E60]),
    CaseRecord::new(0x1EA1, &[0x1EA0]),
    CaseRecord::new(0x1EA3, &[0x1EA2]),
    CaseRecord::new(0x1EA5, &[0x1EA4]),
    CaseRecord::new(0x1EA7, &[0x1EA6]),
    CaseRecord::new(0x1EA9, &[0x1EA8]),
    CaseRecord::new(0x1EAB, &[0x1EAA]),
    CaseRecord::new(0x1EAD, &[0x1EAC]),
    CaseRecord::new(0x1EAF, &[0x1EAE]),
    CaseRecord::new(0x1EB1, &[0x1EB0]),
    CaseRecord::new(0x1EB3, &[0x1EB2]),
    CaseRecord::new(0x1EB5, &[0x1EB4]),
    CaseRecord::new(0x1EB7, &[0x1EB6]),
    CaseRecord::new(0x1EB9, &[0x1EB8]),
    CaseRecord::new(0x1EBB, &[0x1EBA]),
    CaseRecord::new(0x1EBD, &[0x1EBC]),
    CaseRecord::new(0x1EBF, &[0x1EBE]),
    CaseRecord::new(0x1EC1, &[0x1EC0]),
    CaseRecord::new(0x1EC3, &[0x1EC2]),
    CaseRecord::new(0x1EC5, &[0x1EC4]),
    CaseRecord::new(0x1EC7, &[0x1EC6]),
    CaseRecord::new(0x1EC9, &[0x1EC8]),
    CaseRecord::new(0x1ECB, &[0x1ECA]),
    CaseRecord::new(0x1ECD, &[0x1ECC]),
    CaseRecord::new(0x1ECF, &[0x1ECE]),
    CaseRecord::new(0x1ED1, &[0x1ED0]),
    CaseRecord::new(0x1ED3, &[0x1ED2]),
    CaseRecord::new(0x1ED5, &[0x1ED4]),
    CaseRecord::new(0x1ED7, &[0x1ED6]),
    CaseRecord::new(0x1ED9, &[0x1ED8]),
    CaseRecord::new(0x1EDB, &[0x1EDA]),
    CaseRecord::new(0x1EDD, &[0x1EDC]),
    CaseRecord::new(0x1EDF, &[0x1EDE]),
    CaseRecord::new(0x1EE1, &[0x1EE0]),
    CaseRecord::new(0x1EE3, &[0x1EE2]),
    CaseRecord::new(0x1EE5, &[0x1EE4]),
    CaseRecord::new(0x1EE7, &[0x1EE6]),
    CaseRecord::new(0x1EE9, &[0x1EE8]),
    CaseRecord::new(0x1EEB, &[0x1EEA]),
    CaseRecord::new(0x1EED, &[0x1EEC]),
    CaseRecord::new(0x1EEF, &[0x1EEE]),
    CaseRecord::new(0x1EF1, &[0x1EF0]),
    CaseRecord::new(0x1EF3, &[0x1EF2]),
    CaseRecord::new(0x1EF5, &[0x1EF4]),
    CaseRecord::new(0x1EF7, &[0x1EF6]),
    CaseRecord::new(0x1EF9, &[0x1EF8]),
    CaseRecord::new(0x1EFB, &[0x1EFA]),
    CaseRecord::new(0x1EFD, &[0x1EFC]),
    CaseRecord::new(0x1EFF, &[0x1EFE]),
    CaseRecord::new(0x1F00, &[0x1F08]),
    CaseRecord::new(0x1F01, &[0x1F09]),
    CaseRecord::new(0x1F02, &[0x1F0A]),
    CaseRecord::new(0x1F03, &[0x1F0B]),
    CaseRecord::new(0x1F04, &[0x1F0C]),
    CaseRecord::new(0x1F05, &[0x1F0D]),
    CaseRecord::new(0x1F06, &[0x1F0E]),
    CaseRecord::new(0x1F07, &[0x1F0F]),
    CaseRecord::new(0x1F10, &[0x1F18]),
    CaseRecord::new(0x1F11, &[0x1F19]),
    CaseRecord::new(0x1F12, &[0x1F1A]),
    CaseRecord::new(0x1F13, &[0x1F1B]),
    CaseRecord::new(0x1F14, &[0x1F1C]),
    CaseRecord::new(0x1F15, &[0x1F1D]),
    CaseRecord::new(0x1F20, &[0x1F28]),
    CaseRecord::new(0x1F21, &[0x1F29]),
    CaseRecord::new(0x1F22, &[0x1F2A]),
    CaseRecord::new(0x1F23, &[0x1F2B]),
    CaseRecord::new(0x1F24, &[0x1F2C]),
    CaseRecord::new(0x1F25, &[0x1F2D]),
    CaseRecord::new(0x1F26, &[0x1F2E]),
    CaseRecord::new(0x1F27, &[0x1F2F]),
    CaseRecord::new(0x1F30, &[0x1F38]),
    CaseRecord::new(0x1F31, &[0x1F39]),
    CaseRecord::new(0x1F32, &[0x1F3A]),
    CaseRecord::new(0x1F33, &[0x1F3B]),
    CaseRecord::new(0x1F34, &[0x1F3C]),
    CaseRecord::new(0x1F35, &[0x1F3D]),
    CaseRecord::new(0x1F36, &[0x1F3E]),
    CaseRecord::new(0x1F37, &[0x1F3F]),
    CaseRecord::new(0x1F40, &[0x1F48]),
    CaseRecord::new(0x1F41, &[0x1F49]),
    CaseRecord::new(0x1F42, &[0x1F4A]),
    CaseRecord::new(0x1F43, &[0x1F4B]),
    CaseRecord::new(0x1F44, &[0x1F4C]),
    CaseRecord::new(0x1F45, &[0x1F4D]),
    CaseRecord::new(0x1F50, &[0x03A5, 0x0313]),
    CaseRecord::new(0x1F51, &[0x1F59]),
    CaseRecord::new(0x1F52, &[0x03A5, 0x0313, 0x0300]),
    CaseRecord::new(0x1F53, &[0x1F5B]),
    CaseRecord::new(0x1F54, &[0x03A5, 0x0313, 0x0301]),
    CaseRecord::new(0x1F55, &[0x1F5D]),
    CaseRecord::new(0x1F56, &[0x03A5, 0x0313, 0x0342]),
    CaseRecord::new(0x1F57, &[0x1F5F]),
    CaseRecord::new(0x1F60, &[0x1F68]),
    CaseRecord::new(0x1F61, &[0x1F69]),
    CaseRecord::new(0x1F62, &[0x1F6A]),
    CaseRecord::new(0x1F63, &[0x1F6B]),
    CaseRecord::new(0x1F64, &[0x1F6C]),
    CaseRecord::new(0x1F65, &[0x1F6D]),
    CaseRecord::new(0x1F66, &[0x1F6E]),
    CaseRecord::new(0x1F67, &[0x1F6F]),
    CaseRecord::new(0x1F70, &[0x1FBA]),
    CaseRecord::new(0x1F71, &[0x1FBB]),
    CaseRecord::new(0x1F72, &[0x1FC8]),
    CaseRecord::new(0x1F73, &[0x1FC9]),
    CaseRecord::new(0x1F74, &[0x1FCA]),
    CaseRecord::new(0x1F75, &[0x1FCB]),
    CaseRecord::new(0x1F76, &[0x1FDA]),
    CaseRecord::new(0x1F77, &[0x1FDB]),
    CaseRecord::new(0x1F78, &[0x1FF8]),
    CaseRecord::new(0x1F79, &[0x1FF9]),
    CaseRecord::new(0x1F7A, &[0x1FEA]),
    CaseRecord::new(0x1F7B, &[0x1FEB]),
    CaseRecord::new(0x1F7C, &[0x1FFA]),
    CaseRecord::new(0x1F7D, &[0x1FFB]),
    CaseRecord::new(0x1F80, &[0x1F88]),
    CaseRecord::new(0x1F81, &[0x1F89]),
    CaseRecord::new(0x1F82, &[0x1F8A]),
    CaseRecord::new(0x1F83, &[0x1F8B]),
    CaseRecord::new(0x1F84, &[0x1F8C]),
    CaseRecord::new(0x1F85, &[0x1F8D]),
    CaseRecord::new(0x1F86, &[0x1F8E]),
    CaseRecord::new(0x1F87, &[0x1F8F]),
    CaseRecord::new(0x1F90, &[0x1F98]),
    CaseRecord::new(0x1F91, &[0x1F99]),
    CaseRecord::new(0x1F92, &[0x1F9A]),
    CaseRecord::new(0x1F93, &[0x1F9B]),
    CaseRecord::new(0x1F94, &[0x1F9C]),
    CaseRecord::new(0x1F95, &[0x1F9D]),
    CaseRecord::new(0x1F96, &[0x1F9E]),
    CaseRecord::new(0x1F97, &[0x1F9F]),
    CaseRecord::new(0x1FA0, &[0x1FA8]),
    CaseRecord::new(0x1FA1, &[0x1FA9]),
    CaseRecord::new(0x1FA2, &[0x1FAA]),
    CaseRecord::new(0x1FA3, &[0x1FAB]),
    CaseRecord::new(0x1FA4, &[0x1FAC]),
    CaseRecord::new(0x1FA5, &[0x1FAD]),
    CaseRecord::new(0x1FA6, &[0x1FAE]),
    CaseRecord::new(0x1FA7, &[0x1FAF]),
    CaseRecord::new(0x1FB0, &[0x1FB8]),
    CaseRecord::new(0x1FB1, &[0x1FB9]),
    CaseRecord::new(0x1FB2, &[0x1FBA, 0x0345]),
    CaseRecord::new(0x1FB3, &[0x1FBC]),
    CaseRecord::new(0x1FB4, &[0x0386, 0x0345]),
    CaseRecord::new(0x1FB6, &[0x0391, 0x0342]),
    CaseRecord::new(0x1FB7, &[0x0391, 0x0342, 0x0345]),
    CaseRecord::new(0x1FBE, &[0x0399]),
    CaseRecord::new(0x1FC2, &[0x1FCA, 0x0345]),
    CaseRecord::new(0x1FC3, &[0x1FCC]),
    CaseRecord::new(0x1FC4, &[0x0389, 0x0345]),
    CaseRecord::new(0x1FC6, &[0x0397, 0x0342]),
    CaseRecord::new(0x1FC7, &[0x0397, 0x0342, 0x0345]),
    CaseRecord::new(0x1FD0, &[0x1FD8]),
    CaseRecord::new(0x1FD1, &[0x1FD9]),
    CaseRecord::new(0x1FD2, &[0x0399, 0x0308, 0x0300]),
    CaseRecord::new(0x1FD3, &[0x0399, 0x0308, 0x0301]),
    CaseRecord::new(0x1FD6, &[0x0399, 0x0342]),
    CaseRecord::new(0x1FD7, &[0x0399, 0x0308, 0x0342]),
    CaseRecord::new(0x1FE0, &[0x1FE8]),
    CaseRecord::new(0x1FE1, &[0x1FE9]),
    CaseRecord::new(0x1FE2, &[0x03A5, 0x0308, 0x0300]),
    CaseRecord::new(0x1FE3, &[0x03A5, 0x0308, 0x0301]),
    CaseRecord::new(0x1FE4, &[0x03A1, 0x0313]),
    CaseRecord::new(0x1FE5, &[0x1FEC]),
    CaseRecord::new(0x1FE6, &[0x03A5, 0x0342]),
    CaseRecord::new(0x1FE7, &[0x03A5, 0x0308, 0x0342]),
    CaseRecord::new(0x1FF2, &[0x1FFA, 0x0345]),
    CaseRecord::new(0x1FF3, &[0x1FFC]),
    CaseRecord::new(0x1FF4, &[0x038F, 0x0345]),
    CaseRecord::new(0x1FF6, &[0x03A9, 0x0342]),
    CaseRecord::new(0x1FF7, &[0x03A9, 0x0342, 0x0345]),
    CaseRecord::new(0x214E, &[0x2132]),
    CaseRecord::new(0x2170, &[0x2160]),
    CaseRecord::new(0x2171, &[0x2161]),
    CaseRecord::new(0x2172, &[0x2162]),
    CaseRecord::new(0x2173, &[0x2163]),
    CaseRecord::new(0x2174, &[0x2164]),
    CaseRecord::new(0x2175, &[0x2165]),
    CaseRecord::new(0x2176, &[0x2166]),
    CaseRecord::new(0x2177, &[0x2167]),
    CaseRecord::new(0x2178, &[0x2168]),
    CaseRecord::new(0x2179, &[0x2169]),
    CaseRecord::new(0x217A, &[0x216A]),
    CaseRecord::new(0x217B, &[0x216B]),
    CaseRecord::new(0x217C, &[0x216C]),
    CaseRecord::new(0x217D, &[0x216D]),
    CaseRecord::new(0x217E, &[0x216E]),
    CaseRecord::new(0x217F, &[0x216F]),
    CaseRecord::new(0x2184, &[0x2183]),
    CaseRecord::new(0x24D0, &[0x24B6]),
    CaseRecord::new(0x24D1, &[0x24B7]),
    CaseRecord::new(0x24D2, &[0x24B8]),
    CaseRecord::new(0x24D3, &[0x24B9]),
    CaseRecord::new(0x24D4, &[0x24BA]),
    CaseRecord::new(0x24D5, &[0x24BB]),
    CaseRecord::new(0x24D6, &[0x24BC]),
    CaseRecord::new(0x24D7, &[0x24BD]),
    CaseRecord::new(0x24D8, &[0x24BE]),
    CaseRecord::new(0x24D9, &[0x24BF]),
    CaseRecord::new(0x24DA, &[0x24C0]),
    CaseRecord::new(0x24DB, &[0x24C1]),
    CaseRecord::new(0x24DC, &[0x24C2]),
    CaseRecord::new(0x24DD, &[0x24C3]),
    CaseRecord::new(0x24DE, &[0x24C4]),
    CaseRecord::new(0x24DF, &[0x24C5]),
    CaseRecord::new(0x24E0, &[0x24C6]),
    CaseRecord::new(0x24E1, &[0x24C7]),
    CaseRecord::new(0x24E2, &[0x24C8]),
    CaseRecord::new(0x24E3, &[0x24C9]),
    CaseRecord::new(0x24E4, &[0x24CA]),
    CaseRecord::new(0x24E5, &[0x24CB]),
    CaseRecord::new(0x24E6, &[0x24CC]),
    CaseRecord::new(0x24E7, &[0x24CD]),
    CaseRecord::new(0x24E8, &[0x24CE]),
    CaseRecord::new(0x24E9, &[0x24CF]),
    CaseRecord::new(0x2C30, &[0x2C00]),
    CaseRecord::new(0x2C31, &[0x2C01]),
    CaseRecord::new(0x2C32, &[0x2C02]),
    CaseRecord::new(0x2C33, &[0x2C03]),
    CaseRecord::new(0x2C34, &[0x2C04]),
    CaseRecord::new(0x2C35, &[0x2C05]),
    CaseRecord::new(0x2C36, &[0x2C06]),
    CaseRecord::new(0x2C37, &[0x2C07]),
    CaseRecord::new(0x2C38, &[0x2C08]),
    CaseRecord::new(0x2C39, &[0x2C09]),
    CaseRecord::new(0x2C3A, &[0x2C0A]),
    CaseRecord::new(0x2C3B, &[0x2C0B]),
    CaseRecord::new(0x2C3C, &[0x2C0C]),
    CaseRecord::new(0x2C3D, &[0x2C0D]),
    CaseRecord::new(0x2C3E, &[0x2C0E]),
    CaseRecord::new(0x2C3F, &[0x2C0F]),
    CaseRecord::new(0x2C40, &[0x2C10]),
    CaseRecord::new(0x2C41, &[0x2C11]),
    CaseRecord::new(0x2C42, &[0x2C12]),
    CaseRecord::new(0x2C43, &[0x2C13]),
    CaseRecord::new(0x2C44, &[0x2C14]),
    CaseRecord::new(0x2C45, &[0x2C15]),
    CaseRecord::new(0x2C46, &[0x2C16]),
    CaseRecord::new(0x2C47, &[0x2C17]),
    CaseRecord::new(0x2C48, &[0x2C18]),
    CaseRecord::new(0x2C49, &[0x2C19]),
    CaseRecord::new(0x2C4A, &[0x2C1A]),
    CaseRecord::new(0x2C4B, &[0x2C1B]),
    CaseRecord::new(0x2C4C, &[0x2C1C]),
    CaseRecord::new(0x2C4D, &[0x2C1D]),
    CaseRecord::new(0x2C4E, &[0x2C1E]),
    CaseRecord::new(0x2C4F, &[0x2C1F]),
    CaseRecord::new(0x2C50, &[0x2C20]),
    CaseRecord::new(0x2C51, &[0x2C21]),
    CaseRecord::new(0x2C52, &[0x2C22]),
    CaseRecord::new(0x2C53, &[0x2C23]),
    CaseRecord::new(0x2C54, &[0x2C24]),
    CaseRecord::new(0x2C55, &[0x2C25]),
    CaseRecord::new(0x2C56, &[0x2C26]),
    CaseRecord::new(0x2C57, &[0x2C27]),
    CaseRecord::new(0x2C58, &[0x2C28]),
    CaseRecord::new(0x2C59, &[0x2C29]),
    CaseRecord::new(0x2C5A, &[0x2C2A]),
    CaseRecord::new(0x2C5B, &[0x2C2B]),
    CaseRecord::new(0x2C5C, &[0x2C2C]),
    CaseRecord::new(0x2C5D, &[0x2C2D]),
    CaseRecord::new(0x2C5E, &[0x2C2E]),
    CaseRecord::new(0x2C5F, &[0x2C2F]),
    CaseRecord::new(0x2C61, &[0x2C60]),
    CaseRecord::new(0x2C65, &[0x023A]),
    CaseRecord::new(0x2C66, &[0x023E]),
    CaseRecord::new(0x2C68, &[0x2C67]),
    CaseRecord::new(0x2C6A, &[0x2C69]),
    CaseRecord::new(0x2C6C, &[0x2C6B]),
    CaseRecord::new(0x2C73, &[0x2C72]),
    CaseRecord::new(0x2C76, &[0x2C75]),
    CaseRecord::new(0x2C81, &[0x2C80]),
    CaseRecord::new(0x2C83, &[0x2C82]),
    CaseRecord::new(0x2C85, &[0x2C84]),
    CaseRecord::new(0x2C87, &[0x2C86]),
    CaseRecord::new(0x2C89, &[0x2C88]),
    CaseRecord::new(0x2C8B, &[0x2C8A]),
    CaseRecord::new(0x2C8D, &[0x2C8C]),
    CaseRecord::new(0x2C8F, &[0x2C8E]),
    CaseRecord::new(0x2C91, &[0x2C90]),
    CaseRecord::new(0x2C93, &[0x2C92]),
    CaseRecord::new(0x2C95, &[0x2C94]),
    CaseRecord::new(0x2C97, &[0x2C96]),
    CaseRecord::new(0x2C99, &[0x2C98]),
    CaseRecord::new(0x2C9B, &[0x2C9A]),
    CaseRecord::new(0x2C9D, &[0x2C9C]),
    CaseRecord::new(0x2C9F, &[0x2C9E]),
    CaseRecord::new(0x2CA1, &[0x2CA0]),
    CaseRecord::new(0x2CA3, &[0x2CA2]),
    CaseRecord::new(0x2CA5, &[0x2CA4]),
    CaseRecord::new(0x2CA7, &[0x2CA6]),
    CaseRecord::new(0x2CA9, &[0x2CA8]),
    CaseRecord::new(0x2CAB, &[0x2CAA]),
    CaseRecord::new(0x2CAD, &[0x2CAC]),
    CaseRecord::new(0x2CAF, &[0x2CAE]),
    CaseRecord::new(0x2CB1, &[0x2CB0]),
    CaseRecord::new(0x2CB3, &[0x2CB2]),
    CaseRecord::new(0x2CB5, &[0x2CB4]),
    CaseRecord::new(0x2CB7, &[0x2CB6]),
    CaseRecord::new(0x2CB9, &[0x2CB8]),
    CaseRecord::new(0x2CBB, &[0x2CBA]),
    CaseRecord::new(0x2CBD, &[0x2CBC]),
    CaseRecord::new(0x2CBF, &[0x2CBE]),
    CaseRecord::new(0x2CC1, &[0x2CC0]),
    CaseRecord::new(0x2CC3, &[0x2CC2]),
    CaseRecord::new(0x2CC5, &[0x2CC4]),
    CaseRecord::new(0x2CC7, &[0x2CC6]),
    CaseRecord::new(0x2CC9, &[0x2CC8]),
    CaseRecord::new(0x2CCB, &[0x2CCA]),
    CaseRecord::new(0x2CCD, &[0x2CCC]),
    CaseRecord::new(0x2CCF, &[0x2CCE]),
    CaseRecord::new(0x2CD1, &[0x2CD0]),
    CaseRecord::new(0x2CD3, &[0x2CD2]),
    CaseRecord::new(0x2CD5, &[0x2CD4]),
    CaseRecord::new(0x2CD7, &[0x2CD6]),
    CaseRecord::new(0x2CD9, &[0x2CD8]),
    CaseRecord::new(0x2CDB, &[0x2CDA]),
    CaseRecord::new(0x2CDD, &[0x2CDC]),
    CaseRecord::new(0x2CDF, &[0x2CDE]),
    CaseRecord::new(0x2CE1, &[0x2CE0]),
    CaseRecord::new(0x2CE3, &[0x2CE2]),
    CaseRecord::new(0x2CEC, &[0x2CEB]),
    CaseRecord::new(0x2CEE, &[0x2CED]),
    CaseRecord::new(0x2CF3, &[0x2CF2]),
    CaseRecord::new(0x2D00, &[0x10A0]),
    CaseRecord::new(0x2D01, &[0x10A1]),
    CaseRecord::new(0x2D02, &[0x10A2]),
    CaseRecord::new(0x2D03, &[0x10A3]),
    CaseRecord::new(0x2D04, &[0x10A4]),
    CaseRecord::new(0x2D05, &[0x10A5]),
    CaseRecord::new(0x2D06, &[0x10A6]),
    CaseRecord::new(0x2D07, &[0x10A7]),
    CaseRecord::new(0x2D08, &[0x10A8]),
    CaseRecord::new(0x2D09, &[0x10A9]),
    CaseRecord::new(0x2D0A, &[0x10AA]),
    CaseRecord::new(0x2D0B, &[0x10AB]),
    CaseRecord::new(0x2D0C, &[0x10AC]),
    CaseRecord::new(0x2D0D, &[0x10AD]),
    CaseRecord::new(0x2D0E, &[0x10AE]),
    CaseRecord::new(0x2D0F, &[0x10AF]),
    CaseRecord::new(0x2D10, &[0x10B0]),
    CaseRecord::new(0x2D11, &[0x10B1]),
    CaseRecord::new(0x2D12, &[0x10B2]),
    CaseRecord::new(0x2D13, &[0x10B3]),
    CaseRecord::new(0x2D14, &[0x10B4]),
    CaseRecord::new(0x2D15, &[0x10B5]),
    CaseRecord::new(0x2D16, &[0x10B6]),
    CaseRecord::new(0x2D17, &[0x10B7]),
    CaseRecord::new(0x2D18, &[0x10B8]),
    CaseRecord::new(0x2D19, &[0x10B9]),
    CaseRecord::new(0x2D1A, &[0x10BA]),
    CaseRecord::new(0x2D1B, &[0x10BB]),
    CaseRecord::new(0x2D1C, &[0x10BC]),
    CaseRecord::new(0x2D1D, &[0x10BD]),
    CaseRecord::new(0x2D1E, &[0x10BE]),
    CaseRecord::new(0x2D1F, &[0x10BF]),
    CaseRecord::new(0x2D20, &[0x10C0]),
    CaseRecord::new(0x2D21, &[0x10C1]),
    CaseRecord::new(0x2D22, &[0x10C2]),
    CaseRecord::new(0x2D23, &[0x10C3]),
    CaseRecord::new(0x2D24, &[0x10C4]),
    CaseRecord::new(0x2D25, &[0x10C5]),
    CaseRecord::new(0x2D27, &[0x10C7]),
    CaseRecord::new(0x2D2D, &[0x10CD]),
    CaseRecord::new(0xA641, &[0xA640]),
    CaseRecord::new(0xA643, &[0xA642]),
    CaseRecord::new(0xA645, &[0xA644]),
    CaseRecord::new(0xA647, &[0xA646]),
    CaseRecord::new(0xA649, &[0xA648]),
    CaseRecord::new(0xA64B, &[0xA64A]),
    CaseRecord::new(0xA64D, &[0xA64C]),
    CaseRecord::new(0xA64F, &[0xA64E]),
    CaseRecord::new(0xA651, &[0xA650]),
    CaseRecord::new(0xA653, &[0xA652]),
    CaseRecord::new(0xA655, &[0xA654]),
    CaseRecord::new(0xA657, &[0xA656]),
    CaseRecord::new(0xA659, &[0xA658]),
    CaseRecord::new(0xA65B, &[0xA65A]),
    CaseRecord::new(0xA65D, &[0xA65C]),
    CaseRecord::new(0xA65F, &[0xA65E]),
    CaseRecord::new(0xA661, &[0xA660]),
    CaseRecord::new(0xA663, &[0xA662]),
    CaseRecord::new(0xA665, &[0xA664]),
    CaseRecord::new(0xA667, &[0xA666]),
    CaseRecord::new(0xA669, &[0xA668]),
    CaseRecord::new(0xA66B, &[0xA66A]),
    CaseRecord::new(0xA66D, &[0xA66C]),
    CaseRecord::new(0xA681, &[0xA680]),
    CaseRecord::new(0xA683, &[0xA682]),
    CaseRecord::new(0xA685, &[0xA684]),
    CaseRecord::new(0xA687, &[0xA686]),
    CaseRecord::new(0xA689, &[0xA688]),
    CaseRecord::new(0xA68B, &[0xA68A]),
    CaseRecord::new(0xA68D, &[0xA68C]),
    CaseRecord::new(0xA68F, &[0xA68E]),
    CaseRecord::new(0xA691, &[0xA690]),
    CaseRecord::new(0xA693, &[0xA692]),
    CaseRecord::new(0xA695, &[0xA694]),
    CaseRecord::new(0xA697, &[0xA696]),
    CaseRecord::new(0xA699, &[0xA698]),
    CaseRecord::new(0xA69B, &[0xA69A]),
    CaseRecord::new(0xA723, &[0xA722]),
    CaseRecord::new(0xA725, &[0xA724]),
    CaseRecord::new(0xA727, &[0xA726]),
    CaseRecord::new(0xA729, &[0xA728]),
    CaseRecord::new(0xA72B, &[0xA72A]),
    CaseRecord::new(0xA72D, &[0xA72C]),
    CaseRecord::new(0xA72F, &[0xA72E]),
    CaseRecord::new(0xA733, &[0xA732]),
    CaseRecord::new(0xA735, &[0xA734]),
    CaseRecord::new(0xA737, &[0xA736]),
    CaseRecord::new(0xA739, &[0xA738]),
    CaseRecord::new(0xA73B, &[0xA73A]),
    CaseRecord::new(0xA73D, &[0xA73C]),
    CaseRecord::new(0xA73F, &[0xA73E]),
    CaseRecord::new(0xA741, &[0xA740]),
    CaseRecord::new(0xA743, &[0xA742]),
    CaseRecord::new(0xA745, &[0xA744]),
    CaseRecord::new(0xA747, &[0xA746]),
    CaseRecord::new(0xA749, &[0xA748]),
    CaseRecord::new(0xA74B, &[0xA74A]),
    CaseRecord::new(0xA74D, &[0xA74C]),
    CaseRecord::new(0xA74F, &[0xA74E]),
    CaseRecord::new(0xA751, &[0xA750]),
    CaseRecord::new(0xA753, &[0xA752]),
    CaseRecord::new(0xA755, &[0xA754]),
    CaseRecord::new(0xA757, &[0xA756]),
    CaseRecord::new(0xA759, &[0xA758]),
    CaseRecord::new(0xA75B, &[0xA75A]),
    CaseRecord::new(0xA75D, &[0xA75C]),
    CaseRecord::new(0xA75F, &[0xA75E]),
    CaseRecord::new(0xA761, &[0xA760]),
    CaseRecord::new(0xA763, &[0xA762]),
    CaseRecord::new(0xA765, &[0xA764]),
    CaseRecord::new(0xA767, &[0xA766]),
    CaseRecord::new(0xA769, &[0xA768]),
    CaseRecord::new(0xA76B, &[0xA76A]),
    CaseRecord::new(0xA76D, &[0xA76C]),
    CaseRecord::new(0xA76F, &[0xA76E]),
    CaseRecord::new(0xA77A, &[0xA779]),
    CaseRecord::new(0xA77C, &[0xA77B]),
    CaseRecord::new(0xA77F, &[0xA77E]),
    CaseRecord::new(0xA781, &[0xA780]),
    CaseRecord::new(0xA783, &[0xA782]),
    CaseRecord::new(0xA785, &[0xA784]),
    CaseRecord::new(0xA787, &[0xA786]),
    CaseRecord::new(0xA78C, &[0xA78B]),
    CaseRecord::new(0xA791, &[0xA790]),
    CaseRecord::new(0xA793, &[0xA792]),
    CaseRecord::new(0xA794, &[0xA7C4]),
    CaseRecord::new(0xA797, &[0xA796]),
    CaseRecord::new(0xA799, &[0xA798]),
    CaseRecord::new(0xA79B, &[0xA79A]),
    CaseRecord::new(0xA79D, &[0xA79C]),
    CaseRecord::new(0xA79F, &[0xA79E]),
    CaseRecord::new(0xA7A1, &[0xA7A0]),
    CaseRecord::new(0xA7A3, &[0xA7A2]),
    CaseRecord::new(0xA7A5, &[0xA7A4]),
    CaseRecord::new(0xA7A7, &[0xA7A6]),
    CaseRecord::new(0xA7A9, &[0xA7A8]),
    CaseRecord::new(0xA7B5, &[0xA7B4]),
    CaseRecord::new(0xA7B7, &[0xA7B6]),
    CaseRecord::new(0xA7B9, &[0xA7B8]),
    CaseRecord::new(0xA7BB, &[0xA7BA]),
    CaseRecord::new(0xA7BD, &[0xA7BC]),
    CaseRecord::new(0xA7BF, &[0xA7BE]),
    CaseRecord::new(0xA7C1, &[0xA7C0]),
    CaseRecord::new(0xA7C3, &[0xA7C2]),
    CaseRecord::new(0xA7C8, &[0xA7C7]),
    CaseRecord::new(0xA7CA, &[0xA7C9]),
    CaseRecord::new(0xA7D1, &[0xA7D0]),
    CaseRecord::new(0xA7D7, &[0xA7D6]),
    CaseRecord::new(0xA7D9, &[0xA7D8]),
    CaseRecord::new(0xA7F6, &[0xA7F5]),
    CaseRecord::new(0xAB53, &[0xA7B3]),
    CaseRecord::new(0xAB70, &[0x13A0]),
    CaseRecord::new(0xAB71, &[0x13A1]),
    CaseRecord::new(0xAB72, &[0x13A2]),
    CaseRecord::new(0xAB73, &[0x13A3]),
    CaseRecord::new(0xAB74, &[0x13A4]),
    CaseRecord::new(0xAB75, &[0x13A5]),
    CaseRecord::new(0xAB76, &[0x13A6]),
    CaseRecord::new(0xAB77, &[0x13A7]),
    CaseRecord::new(0xAB78, &[0x13A8]),
    CaseRecord::new(0xAB79, &[0x13A9]),
    CaseRecord::new(0xAB7A, &[0x13AA]),
    CaseRecord::new(0xAB7B, &[0x13AB]),
    CaseRecord::new(0xAB7C, &[0x13AC]),
    CaseRecord::new(0xAB7D, &[0x13AD]),
    CaseRecord::new(0xAB7E, &[0x13AE]),
    CaseRecord::new(0xAB7F, &[0x13AF]),
    CaseRecord::new(0xAB80, &[0x13B0]),
    CaseRecord::new(0xAB81, &[0x13B1]),
    CaseRecord::new(0xAB82, &[0x13B2]),
    CaseRecord::new(0xAB83, &[0x13B3]),
    CaseRecord::new(0xAB84, &[0x13B4]),
    CaseRecord::new(0xAB85, &[0x13B5]),
    CaseRecord::new(0xAB86, &[0x13B6]),
    CaseRecord::new(0xAB87, &[0x13B7]),
    CaseRecord::new(0xAB88, &[0x13B8]),
    CaseRecord::new(0xAB89, &[0x13B9]),
    CaseRecord::new(0xAB8A, &[0x13BA]),
    CaseRecord::new(0xAB8B, &[0x13BB]),
    CaseRecord::new(0xAB8C, &[0x13BC]),
    CaseRecord::new(0xAB8D, &[0x13BD]),
    CaseRecord::new(0xAB8E, &[0x13BE]),
    CaseRecord::new(0xAB8F, &[0x13BF]),
    CaseRecord::new(0xAB90, &[0x13C0]),
    CaseRecord::new(0xAB91, &[0x13C1]),
    CaseRecord::new(0xAB92, &[0x13C2]),
    CaseRecord::new(0xAB93, &[0x13C3]),
    CaseRecord::new(0xAB94, &[0x13C4]),
    CaseRecord::new(0xAB95, &[0x13C5]),
    CaseRecord::new(0xAB96, &[0x13C6]),
    CaseRecord::new(0xAB97, &[0x13C7]),
    CaseRecord::new(0xAB98, &[0x13C8]),
    CaseRecord::new(0xAB99, &[0x13C9]),
    CaseRecord::new(0xAB9A, &[0x13CA]),
    CaseRecord::new(0xAB9B, &[0x13CB]),
    CaseRecord::new(0xAB9C, &[0x13CC]),
    CaseRecord::new(0xAB9D, &[0x13CD]),
    CaseRecord::new(0xAB9E, &[0x13CE]),
    CaseRecord::new(0xAB9F, &[0x13CF]),
    CaseRecord::new(0xABA0, &[0x13D0]),
    CaseRecord::new(0xABA1, &[0x13D1]),
    CaseRecord::new(0xABA2, &[0x13D2]),
    CaseRecord::new(0xABA3, &[0x13D3]),
    CaseRecord::new(0xABA4, &[0x13D4]),
    CaseRecord::new(0xABA5, &[0x13D5]),
    CaseRecord::new(0xABA6, &[0x13D6]),
    CaseRecord::new(0xABA7, &[0x13D7]),
    CaseRecord::new(0xABA8, &[0x13D8]),
    CaseRecord::new(0xABA9, &[0x13D9]),
    CaseRecord::new(0xABAA, &[0x13DA]),
    CaseRecord::new(0xABAB, &[0x13DB]),
    CaseRecord::new(0xABAC, &[0x13DC]),
    CaseRecord::new(0xABAD, &[0x13DD]),
    CaseRecord::new(0xABAE, &[0x13DE]),
    CaseRecord::new(0xABAF, &[0x13DF]),
    CaseRecord::new(0xABB0, &[0x13E0]),
    CaseRecord::new(0xABB1, &[0x13E1]),
    CaseRecord::new(0xABB2, &[0x13E2]),
    CaseRecord::new(0xABB3, &[0x13E3]),
    CaseRecord::new(0xABB4, &[0x13E4]),
    CaseRecord::new(0xABB5, &[0x13E5]),
    CaseRecord::new(0xABB6, &[0x13E6]),
    CaseRecord::new(0xABB7, &[0x13E7]),
    CaseRecord::new(0xABB8, &[0x13E8]),
    CaseRecord::new(0xABB9, &[0x13E9]),
    CaseRecord::new(0xABBA, &[0x13EA]),
    CaseRecord::new(0xABBB, &[0x13EB]),
    CaseRecord::new(0xABBC, &[0x13EC]),
    CaseRecord::new(0xABBD, &[0x13ED]),
    CaseRecord::new(0xABBE, &[0x13EE]),
    CaseRecord::new(0xABBF, &[0x13EF]),
    CaseRecord::new(0xFB00, &[0x0046, 0x0066]),
    CaseRecord::new(0xFB01, &[0x0046, 0x0069]),
    CaseRecord::new(0xFB02, &[0x0046, 0x006C]),
    CaseRecord::new(0xFB03, &[0x0046, 0x0066, 0x0069]),
    CaseRecord::new(0xFB04, &[0x0046, 0x0066, 0x006C]),
    CaseRecord::new(0xFB05, &[0x0053, 0x0074]),
    CaseRecord::new(0xFB06, &[0x0053, 0x0074]),
    CaseRecord::new(0xFB13, &[0x0544, 0x0576]),
    CaseRecord::new(0xFB14, &[0x0544, 0x0565]),
    CaseRecord::new(0xFB15, &[0x0544, 0x056B]),
    CaseRecord::new(0xFB16, &[0x054E, 0x0576]),
    CaseRecord::new(0xFB17, &[0x0544, 0x056D]),
    CaseRecord::new(0xFF41, &[0xFF21]),
    CaseRecord::new(0xFF42, &[0xFF22]),
    CaseRecord::new(0xFF43, &[0xFF23]),
    CaseRecord::new(0xFF44, &[0xFF24]),
    CaseRecord::new(0xFF45, &[0xFF25]),
    CaseRecord::new(0xFF46, &[0xFF26]),
    CaseRecord::new(0xFF47, &[0xFF27]),
    CaseRecord::new(0xFF48, &[0xFF28]),
    CaseRecord::new(0xFF49, &[0xFF29]),
    CaseRecord::new(0xFF4A, &[0xFF2A]),
    CaseRecord::new(0xFF4B, &[0xFF2B]),
    CaseRecord::new(0xFF4C, &[0xFF2C]),
    CaseRecord::new(0xFF4D, &[0xFF2D]),
    CaseRecord::new(0xFF4E, &[0xFF2E]),
    CaseRecord::new(0xFF4F, &[0xFF2F]),
    CaseRecord::new(0xFF50, &[0xFF30]),
    CaseRecord::new(0xFF51, &[0xFF31]),
    CaseRecord::new(0xFF52, &[0xFF32]),
    CaseRecord::new(0xFF53, &[0xFF33]),
    CaseRecord::new(0xFF54, &[0xFF34]),
    CaseRecord::new(0xFF55, &[0xFF35]),
    CaseRecord::new(0xFF56, &[0xFF36]),
    CaseRecord::new(0xFF57, &[0xFF37]),
    CaseRecord::new(0xFF58, &[0xFF38]),
    CaseRecord::new(0xFF59, &[0xFF39]),
    CaseRecord::new(0xFF5A, &[0xFF3A]),
    CaseRecord::new(0x10428, &[0x10400]),
    CaseRecord::new(0x10429, &[0x10401]),
    CaseRecord::new(0x1042A, &[0x10402]),
    CaseRecord::new(0x1042B, &[0x10403]),
    CaseRecord::new(0x1042C, &[0x10404]),
    CaseRecord::new(0x1042D, &[0x10405]),
    CaseRecord::new(0x1042E, &[0x10406]),
    CaseRecord::new(0x1042F, &[0x10407]),
    CaseRecord::new(0x10430, &[0x10408]),
    CaseRecord::new(0x10431, &[0x10409]),
    CaseRecord::new(0x10432, &[0x1040A]),
    CaseRecord::new(0x10433, &[0x1040B]),
    CaseRecord::new(0x10434, &[0x1040C]),
    CaseRecord::new(0x10435, &[0x1040D]),
    CaseRecord::new(0x10436, &[0x1040E]),
    CaseRecord::new(0x10437, &[0x1040F]),
    CaseRecord::new(0x10438, &[0x10410]),
    CaseRecord::new(0x10439, &[0x10411]),
    CaseRecord::new(0x1043A, &[0x10412]),
    CaseRecord::new(0x1043B, &[0x10413]),
    CaseRecord::new(0x1043C, &[0x10414]),
    CaseRecord::new(0x1043D, &[0x10415]),
    CaseRecord::new(0x1043E, &[0x10416]),
    CaseRecord::new(0x1043F, &[0x10417]),
    CaseRecord::new(0x10440, &[0x10418]),
    CaseRecord::new(0x10441, &[0x10419]),
    CaseRecord::new(0x10442, &[0x1041A]),
    CaseRecord::new(0x10443, &[0x1041B]),
    CaseRecord::new(0x10444, &[0x1041C]),
    CaseRecord::new(0x10445, &[0x1041D]),
    CaseRecord::new(0x10446, &[0x1041E]),
    CaseRecord::new(0x10447, &[0x1041F]),
    CaseRecord::new(0x10448, &[0x10420]),
    CaseRecord::new(0x10449, &[0x10421]),
    CaseRecord::new(0x1044A, &[0x10422]),
    CaseRecord::new(0x1044B, &[0x10423]),
    CaseRecord::new(0x1044C, &[0x10424]),
    CaseRecord::new(0x1044D, &[0x10425]),
    CaseRecord::new(0x1044E, &[0x10426]),
    CaseRecord::new(0x1044F, &[0x10427]),
    CaseRecord::new(0x104D8, &[0x104B0]),
    CaseRecord::new(0x104D9, &[0x104B1]),
    CaseRecord::new(0x104DA, &[0x104B2]),
    CaseRecord::new(0x104DB, &[0x104B3]),
    CaseRecord::new(0x104DC, &[0x104B4]),
    CaseRecord::new(0x104DD, &[0x104B5]),
    CaseRecord::new(0x104DE, &[0x104B6]),
    CaseRecord::new(0x104DF, &[0x104B7]),
    CaseRecord::new(0x104E0, &[0x104B8]),
    CaseRecord::new(0x104E1, &[0x104B9]),
    CaseRecord::new(0x104E2, &[0x104BA]),
    CaseRecord::new(0x104E3, &[0x104BB]),
    CaseRecord::new(0x104E4, &[0x104BC]),
    CaseRecord::new(0x104E5, &[0x104BD]),
    CaseRecord::new(0x104E6, &[0x104BE]),
    CaseRecord::new(0x104E7, &[0x104BF]),
    CaseRecord::new(0x104E8, &[0x104C0]),
    CaseRecord::new(0x104E9, &[0x104C1]),
    CaseRecord::new(0x104EA, &[0x104C2]),
    CaseRecord::new(0x104EB, &[0x104C3]),
    CaseRecord::new(0x104EC, &[0x104C4]),
    CaseRecord::new(0x104ED, &[0x104C5]),
    CaseRecord::new(0x104EE, &[0x104C6]),
    CaseRecord::new(0x104EF, &[0x104C7]),
    CaseRecord::new(0x104F0, &[0x104C8]),
    CaseRecord::new(0x104F1, &[0x104C9]),
    CaseRecord::new(0x104F2, &[0x104CA]),
    CaseRecord::new(0x104F3, &[0x104CB]),
    CaseRecord::new(0x104F4, &[0x104CC]),
    CaseRecord::new(0x104F5, &[0x104CD]),
    CaseRecord::new(0x104F6, &[0x104CE]),
    CaseRecord::new(0x104F7, &[0x104CF]),
    CaseRecord::new(0x104F8, &[0x104D0]),
    CaseRecord::new(0x104F9, &[0x104D1]),
    CaseRecord::new(0x104FA, &[0x104D2]),
    CaseRecord::new(0x104FB, &[0x104D3]),
    CaseRecord::new(0x10597, &[0x10570]),
    CaseRecord::new(0x10598, &[0x10571]),
    CaseRecord::new(0x10599, &[0x10572]),
    CaseRecord::new(0x1059A, &[0x10573]),
    CaseRecord::new(0x1059B, &[0x10574]),
    CaseRecord::new(0x1059C, &[0x10575]),
    CaseRecord::new(0x1059D, &[0x10576]),
    CaseRecord::new(0x1059E, &[0x10577]),
    CaseRecord::new(0x1059F, &[0x10578]),
    CaseRecord::new(0x105A0, &[0x10579]),
    CaseRecord::new(0x105A1, &[0x1057A]),
    CaseRecord::new(0x105A3, &[0x1057C]),
    CaseRecord::new(0x105A4, &[0x1057D]),
    CaseRecord::new(0x105A5, &[0x1057E]),
    CaseRecord::new(0x105A6, &[0x1057F]),
    CaseRecord::new(0x105A7, &[0x10580]),
    CaseRecord::new(0x105A8, &[0x10581]),
    CaseRecord::new(0x105A9, &[0x10582]),
    CaseRecord::new(0x105AA, &[0x10583]),
    CaseRecord::new(0x105AB, &[0x10584]),
    CaseRecord::new(0x105AC, &[0x10585]),
    CaseRecord::new(0x105AD, &[0x10586]),
    CaseRecord::new(0x105AE, &[0x10587]),
    CaseRecord::new(0x105AF, &[0x10588]),
    CaseRecord::new(0x105B0, &[0x10589]),
    CaseRecord::new(0x105B1, &[0x1058A]),
    CaseRecord::new(0x105B3, &[0x1058C]),
    CaseRecord::new(0x105B4, &[0x1058D]),
    CaseRecord::new(0x105B5, &[0x1058E]),
    CaseRecord::new(0x105B6, &[0x1058F]),
    CaseRecord::new(0x105B7, &[0x10590]),
    CaseRecord::new(0x105B8, &[0x10591]),
    CaseRecord::new(0x105B9, &[0x10592]),
    CaseRecord::new(0x105BB, &[0x10594]),
    CaseRecord::new(0x105BC, &[0x10595]),
    CaseRecord::new(0x10CC0, &[0x10C80]),
    CaseRecord::new(0x10CC1, &[0x10C81]),
    CaseRecord::new(0x10CC2, &[0x10C82]),
    CaseRecord::new(0x10CC3, &[0x10C83]),
    CaseRecord::new(0x10CC4, &[0x10C84]),
    CaseRecord::new(0x10CC5, &[0x10C85]),
    CaseRecord::new(0x10CC6, &[0x10C86]),
    CaseRecord::new(0x10CC7, &[0x10C87]),
    CaseRecord::new(0x10CC8, &[0x10C88]),
    CaseRecord::new(0x10CC9, &[0x10C89]),
    CaseRecord::new(0x10CCA, &[0x10C8A]),
    CaseRecord::new(0x10CCB, &[0x10C8B]),
    CaseRecord::new(0x10CCC, &[0x10C8C]),
    CaseRecord::new(0x10CCD, &[0x10C8D]),
    CaseRecord::new(0x10CCE, &[0x10C8E]),
    CaseRecord::new(0x10CCF, &[0x10C8F]),
    CaseRecord::new(0x10CD0, &[0x10C90]),
    CaseRecord::new(0x10CD1, &[0x10C91]),
    CaseRecord::new(0x10CD2, &[0x10C92]),
    CaseRecord::new(0x10CD3, &[0x10C93]),
    CaseRecord::new(0x10CD4, &[0x10C94]),
    CaseRecord::new(0x10CD5, &[0x10C95]),
    CaseRecord::new(0x10CD6, &[0x10C96]),
    CaseRecord::new(0x10CD7, &[0x10C97]),
    CaseRecord::new(0x10CD8, &[0x10C98]),
    CaseRecord::new(0x10CD9, &[0x10C99]),
    CaseRecord::new(0x10CDA, &[0x10C9A]),
    CaseRecord::new(0x10CDB, &[0x10C9B]),
    CaseRecord::new(0x10CDC, &[0x10C9C]),
    CaseRecord::new(0x10CDD, &[0x10C9D]),
    CaseRecord::new(0x10CDE, &[0x10C9E]),
    CaseRecord::new(0x10CDF, &[0x10C9F]),
    CaseRecord::new(0x10CE0, &[0x10CA0]),
    CaseRecord::new(0x10CE1, &[0x10CA1]),
    CaseRecord::new(0x10CE2, &[0x10CA2]),
    CaseRecord::new(0x10CE3, &[0x10CA3]),
    CaseRecord::new(0x10CE4, &[0x10CA4]),
    CaseRecord::new(0x10CE5, &[0x10CA5]),
    CaseRecord::new(0x10CE6, &[0x10CA6]),
    CaseRecord::new(0x10CE7, &[0x10CA7]),
    CaseRecord::new(0x10CE8, &[0x10CA8]),
    CaseRecord::new(0x10CE9, &[0x10CA9]),
    CaseRecord::new(0x10CEA, &[0x10CAA]),
    CaseRecord::new(0x10CEB, &[0x10CAB]),
    CaseRecord::new(0x10CEC, &[0x10CAC]),
    CaseRecord::new(0x10CED, &[0x10CAD]),
    CaseRecord::new(0x10CEE, &[0x10CAE]),
    CaseRecord::new(0x10CEF, &[0x10CAF]),
    CaseRecord::new(0x10CF0, &[0x10CB0]),
    CaseRecord::new(0x10CF1, &[0x10CB1]),
    CaseRecord::new(0x10CF2, &[0x10CB2]),
    CaseRecord::new(0x118C0, &[0x118A0]),
    CaseRecord::new(0x118C1, &[0x118A1]),
    CaseRecord::new(0x118C2, &[0x118A2]),
    CaseRecord::new(0x118C3, &[0x118A3]),
    CaseRecord::new(0x118C4, &[0x118A4]),
    CaseRecord::new(0x118C5, &[0x118A5]),
    CaseRecord::new(0x118C6, &[0x118A6]),
    CaseRecord::new(0x118C7, &[0x118A7]),
    CaseRecord::new(0x118C8, &[0x118A8]),
    CaseRecord::new(0x118C9, &[0x118A9]),
    CaseRecord::new(0x118CA, &[0x118AA]),
    CaseRecord::new(0x118CB, &[0x118AB]),
    CaseRecord::new(0x118CC, &[0x118AC]),
    CaseRecord::new(0x118CD, &[0x118AD]),
    CaseRecord::new(0x118CE, &[0x118AE]),
    CaseRecord::new(0x118CF, &[0x118AF]),
    CaseRecord::new(0x118D0, &[0x118B0]),
    CaseRecord::new(0x118D1, &[0x118B1]),
    CaseRecord::new(0x118D2, &[0x118B2]),
    CaseRecord::new(0x118D3, &[0x118B3]),
    CaseRecord::new(0x118D4, &[0x118B4]),
    CaseRecord::new(0x118D5, &[0x118B5]),
    CaseRecord::new(0x118D6, &[0x118B6]),
    CaseRecord::new(0x118D7, &[0x118B7]),
    CaseRecord::new(0x118D8, &[0x118B8]),
    CaseRecord::new(0x118D9, &[0x118B9]),
    CaseRecord::new(0x118DA, &[0x118BA]),
    CaseRecord::new(0x118DB, &[0x118BB]),
    CaseRecord::new(0x118DC, &[0x118BC]),
    CaseRecord::new(0x118DD, &[0x118BD]),
    CaseRecord::new(0x118DE, &[0x118BE]),
    CaseRecord::new(0x118DF, &[0x118BF]),
    CaseRecord::new(0x16E60, &[0x16E40]),
    CaseRecord::new(0x16E61, &[0x16E41]),
    CaseRecord::new(0x16E62, &[0x16E42]),
    CaseRecord::new(0x16E63, &[0x16E43]),
    CaseRecord::new(0x16E64, &[0x16E44]),
    CaseRecord::new(0x16E65, &[0x16E45]),
    CaseRecord::new(0x16E66, &[0x16E46]),
    CaseRecord::new(0x16E67, &[0x16E47]),
    CaseRecord::new(0x16E68, &[0x16E48]),
    CaseRecord::new(0x16E69, &[0x16E49]),
    CaseRecord::new(0x16E6A, &[0x16E4A]),
    CaseRecord::new(0x16E6B, &[0x16E4B]),
    CaseRecord::new(0x16E6C, &[0x16E4C]),
    CaseRecord::new(0x16E6D, &[0x16E4D]),
    CaseRecord::new(0x16E6E, &[0x16E4E]),
    CaseRecord::new(0x16E6F, &[0x16E4F]),
    CaseRecord::new(0x16E70, &[0x16E50]),
    CaseRecord::new(0x16E71, &[0x16E51]),
    CaseRecord::new(0x16E72, &[0x16E52]),
    CaseRecord::new(0x16E73, &[0x16E53]),
    CaseRecord::new(0x16E74, &[0x16E54]),
    CaseRecord::new(0x16E75, &[0x16E55]),
    CaseRecord::new(0x16E76, &[0x16E56]),
    CaseRecord::new(0x16E77, &[0x16E57]),
    CaseRecord::new(0x16E78, &[0x16E58]),
    CaseRecord::new(0x16E79, &[0x16E59]),
    CaseRecord::new(0x16E7A, &[0x16E5A]),
    CaseRecord::new(0x16E7B, &[0x16E5B]),
    CaseRecord::new(0x16E7C, &[0x16E5C]),
    CaseRecord::new(0x16E7D, &[0x16E5D]),
    CaseRecord::new(0x16E7E, &[0x16E5E]),
    CaseRecord::new(0x16E7F, &[0x16E5F]),
    CaseRecord::new(0x1E922, &[0x1E900]),
    CaseRecord::new(0x1E923, &[0x1E901]),
    CaseRecord::new(0x1E924, &[0x1E902]),
    CaseRecord::new(0x1E925, &[0x1E903]),
    CaseRecord::new(0x1E926, &[0x1E904]),
    CaseRecord::new(0x1E927, &[0x1E905]),
    CaseRecord::new(0x1E928, &[0x1E906]),
    CaseRecord::new(0x1E929, &[0x1E907]),
    CaseRecord::new(0x1E92A, &[0x1E908]),
    CaseRecord::new(0x1E92B, &[0x1E909]),
    CaseRecord::new(0x1E92C, &[0x1E90A]),
    CaseRecord::new(0x1E92D, &[0x1E90B]),
    CaseRecord::new(0x1E92E, &[0x1E90C]),
    CaseRecord::new(0x1E92F, &[0x1E90D]),
    CaseRecord::new(0x1E930, &[0x1E90E]),
    CaseRecord::new(0x1E931, &[0x1E90F]),
    CaseRecord::new(0x1E932, &[0x1E910]),
    CaseRecord::new(0x1E933, &[0x1E911]),
    CaseRecord::new(0x1E934, &[0x1E912]),
    CaseRecord::new(0x1E935, &[0x1E913]),
    CaseRecord::new(0x1E936, &[0x1E914]),
    CaseRecord::new(0x1E937, &[0x1E915]),
    CaseRecord::new(0x1E938, &[0x1E916]),
    CaseRecord::new(0x1E939, &[0x1E917]),
    CaseRecord::new(0x1E93A, &[0x1E918]),
    CaseRecord::new(0x1E93B, &[0x1E919]),
    CaseRecord::new(0x1E93C, &[0x1E91A]),
    CaseRecord::new(0x1E93D, &[0x1E91B]),
    CaseRecord::new(0x1E93E, &[0x1E91C]),
    CaseRecord::new(0x1E93F, &[0x1E91D]),
    CaseRecord::new(0x1E940, &[0x1E91E]),
    CaseRecord::new(0x1E941, &[0x1E91F]),
    CaseRecord::new(0x1E942, &[0x1E920]),
    CaseRecord::new(0x1E943, &[0x1E921]),
];

pub const CASE_FOLDING: &[CaseRecord<'static>] = &[
    CaseRecord::new(0x0041, &[0x0061]),
    CaseRecord::new(0x0042, &[0x0062]),
    CaseRecord::new(0x0043, &[0x0063]),
    CaseRecord::new(0x0044, &[0x0064]),
    CaseRecord::new(0x0045, &[0x0065]),
    CaseRecord::new(0x0046, &[0x0066]),
    CaseRecord::new(0x0047, &[0x0067]),
    CaseRecord::new(0x0048, &[0x0068]),
    CaseRecord::new(0x0049, &[0x0069]),
    CaseRecord::new(0x004A, &[0x006A]),
    CaseRecord::new(0x004B, &[0x006B]),
    CaseRecord::new(0x004C, &[0x006C]),
    CaseRecord::new(0x004D, &[0x006D]),
    CaseRecord::new(0x004E, &[0x006E]),
    CaseRecord::new(0x004F, &[0x006F]),
    CaseRecord::new(0x0050, &[0x0070]),
    CaseRecord::new(0x0051, &[0x0071]),
    CaseRecord::new(0x0052, &[0x0072]),
    CaseRecord::new(0x0053, &[0x0073]),
    CaseRecord::new(0x0054, &[0x0074]),
    CaseRecord::new(0x0055, &[0x0075]),
    CaseRecord::new(0x0056, &[0x0076]),
    CaseRecord::new(0x0057, &[0x0077]),
    CaseRecord::new(0x0058, &[0x0078]),
    CaseRecord::new(0x0059, &[0x0079]),
    CaseRecord::new(0x005A, &[0x007A]),
    CaseRecord::new(0x00B5, &[0x03BC]),
    CaseRecord::new(0x00C0, &[0x00E0]),
    CaseRecord::new(0x00C1, &[0x00E1]),
    CaseRecord::new(0x00C2, &[0x00E2]),
    CaseRecord::new(0x00C3, &[0x00E3]),
    CaseRecord::new(0x00C4, &[0x00E4]),
    CaseRecord::new(0x00C5, &[0x00E5]),
    CaseRecord::new(0x00C6, &[0x00E6]),
    CaseRecord::new(0x00C7, &[0x00E7]),
    CaseRecord::new(0x00C8, &[0x00E8]),
    CaseRecord::new(0x00C9, &[0x00E9]),
    CaseRecord::new(0x00CA, &[0x00EA]),
    CaseRecord::new(0x00CB, &[0x00EB]),
    CaseRecord::new(0x00CC, &[0x00EC]),
    CaseRecord::new(0x00CD, &[0x00ED]),
    CaseRecord::new(0x00CE, &[0x00EE]),
    CaseRecord::new(0x00CF, &[0x00EF]),
    CaseRecord::new(0x00D0, &[0x00F0]),
    CaseRecord::new(0x00D1, &[0x00F1]),
    CaseRecord::new(0x00D2, &[0x00F2]),
    CaseRecord::new(0x00D3, &[0x00F3]),
    CaseRecord::new(0x00D4, &[0x00F4]),
    CaseRecord::new(0x00D5, &[0x00F5]),
    CaseRecord::new(0x00D6, &[0x00F6]),
    CaseRecord::new(0x00D8, &[0x00F8]),
    CaseRecord::new(0x00D9, &[0x00F9]),
    CaseRecord::new(0x00DA, &[0x00FA]),
    CaseRecord::new(0x00DB, &[0x00FB]),
    CaseRecord::new(0x00DC, &[0x00FC]),
    CaseRecord::new(0x00DD, &[0x00FD]),
    CaseRecord::new(0x00DE, &[0x00FE]),
    CaseRecord::new(0x00DF, &[0x0073, 0x0073]),
    CaseRecord::new(0x0100, &[0x0101]),
    CaseRecord::new(0x0102, &[0x0103]),
    CaseRecord::new(0x0104, &[0x0105]),
    CaseRecord::new(0x0106, &[0x0107]),
    CaseRecord::new(0x0108, &[0x0109]),
    CaseRecord::new(0x010A, &[0x010B]),
    CaseRecord::new(0x010C, &[0x010D]),
    CaseRecord::new(0x010E, &[0x010F]),
    CaseRecord::new(0x0110, &[0x0111]),
    CaseRecord::new(0x0112, &[0x0113]),
    CaseRecord::new(0x0114, &[0x0115]),
    CaseRecord::new(0x0116, &[0x0117]),
    CaseRecord::new(0x0118, &[0x0119]),
    CaseRecord::new(0x011A, &[0x011B]),
    CaseRecord::new(0x011C, &[0x011D]),
    CaseRecord::new(0x011E, &[0x011F]),
    CaseRecord::new(0x0120, &[0x0121]),
    CaseRecord::new(0x0122, &[0x0123]),
    CaseRecord::new(0x0124, &[0x0125]),
    CaseRecord::new(0x0126, &[0x0127]),
    CaseRecord::new(0x0128, &[0x0129]),
    CaseRecord::new(0x012A, &[0x012B]),
    CaseRecord::new(0x012C, &[0x012D]),
    CaseRecord::new(0x012E, &[0x012F]),
    CaseRecord::new(0x0130, &[0x0069, 0x0307]),
    CaseRecord::new(0x0132, &[0x0133]),
    CaseRecord::new(0x0134, &[0x0135]),
    CaseRecord::new(0x0136, &[0x0137]),
    CaseRecord::new(0x0139, &[0x013A]),
    CaseRecord::new(0x013B, &[0x013C]),
    CaseRecord::new(0x013D, &[0x013E]),
    CaseRecord::new(0x013F, &[0x0140]),
    CaseRecord::new(0x0141, &[0x0142]),
    CaseRecord::new(0x0143, &[0x0144]),
    CaseRecord::new(0x0145, &[0x0146]),
    CaseRecord::new(0x0147, &[0x0148]),
    CaseRecord::new(0x0149, &[0x02BC, 0x006E]),
    CaseRecord::new(0x014A, &[0x014B]),
    CaseRecord::new(0x014C, &[0x014D]),
    CaseRecord::new(0x014E, &[0x014F]),
    CaseRecord::new(0x0150, &[0x0151]),
    CaseRecord::new(0x0152, &[0x0153]),
    CaseRecord::new(0x0154, &[0x0155]),
    CaseRecord::new(0x0156, &[0x0157]),
    CaseRecord::new(0x0158, &[0x0159]),
    CaseRecord::new(0x015A, &[0x015B]),
    CaseRecord::new(0x015C, &[0x015D]),
    CaseRecord::new(0x015E, &[0x015F]),
    CaseRecord::new(0x0160, &[0x0161]),
    CaseRecord::new(0x0162, &[0x0163]),
    CaseRecord::new(0x0164, &[0x0165]),
    CaseRecord::new(0x0166, &[0x0167]),
    CaseRecord::new(0x0168, &[0x0169]),
    CaseRecord::new(0x016A, &[0x016B]),
    CaseRecord::new(0x016C, &[0x016D]),
    CaseRecord::new(0x016E, &[0x016F]),
    CaseRecord::new(0x0170, &[0x0171]),
    CaseRecord::new(0x0172, &[0x0173]),
    CaseRecord::new(0x0174, &[0x0175]),
    CaseRecord::new(0x0176, &[0x0177]),
    CaseRecord::new(0x0178, &[0x00FF]),
    CaseRecord::new(0x0179, &[0x017A]),
    CaseRecord::new(0x017B, &[0x017C]),
    CaseRecord::new(0x017D, &[0x017E]),
    CaseRecord::new(0x017F, &[0x0073]),
    CaseRecord::new(0x0181, &[0x0253]),
    CaseRecord::new(0x0182, &[0x0183]),
    CaseRecord::new(0x0184, &[0x0185]),
    CaseRecord::new(0x0186, &[0x0254]),
    CaseRecord::new(0x0187, &[0x0188]),
    CaseRecord::new(0x0189, &[0x0256]),
    CaseRecord::new(0x018A, &[0x0257]),
    CaseRecord::new(0x018B, &[0x018C]),
    CaseRecord::new(0x018E, &[0x01DD]),
    CaseRecord::new(0x018F, &[0x0259]),
    CaseRecord::new(0x0190, &[0x025B]),
    CaseRecord::new(0x0191, &[0x0192]),
    CaseRecord::new(0x0193, &[0x0260]),
    CaseRecord::new(0x0194, &[0x0263]),
    CaseRecord::new(0x0196, &[0x0269]),
    CaseRecord::new(0x0197, &[0x0268]),
    CaseRecord::new(0x0198, &[0x0199]),
    CaseRecord::new(0x019C, &[0x026F]),
    CaseRecord::new(0x019D, &[0x0272]),
    CaseRecord::new(0x019F, &[0x0275]),
    CaseRecord::new(0x01A0, &[0x01A1]),
    CaseRecord::new(0x01A2, &[0x01A3]),
    CaseRecord::new(0x01A4, &[0x01A5]),
    CaseRecord::new(0x01A6, &[0x0280]),
    CaseRecord::new(0x01A7, &[0x01A8]),
    CaseRecord::new(0x01A9, &[0x0283]),
    CaseRecord::new(0x01AC, &[0x01AD]),
    CaseRecord::new(0x01AE, &[0x0288]),
    CaseRecord::new(0x01AF, &[0x01B0]),
    CaseRecord::new(0x01B1, &[0x028A]),
    CaseRecord::new(0x01B2, &[0x028B]),
    CaseRecord::new(0x01B3, &[0x01B4]),
    CaseRecord::new(0x01B5, &[0x01B6]),
    CaseRecord::new(0x01B7, &[0x0292]),
    CaseRecord::new(0x01B8, &[0x01B9]),
    CaseRecord::new(0x01BC, &[0x01BD]),
    CaseRecord::new(0x01C4, &[0x01C6]),
    CaseRecord::new(0x01C5, &[0x01C6]),
    CaseRecord::new(0x01C7, &[0x01C9]),
    CaseRecord::new(0x01C8, &[0x01C9]),
    CaseRecord::new(0x01CA, &[0x01CC]),
    CaseRecord::new(0x01CB, &[0x01CC]),
    CaseRecord::new(0x01CD, &[0x01CE]),
    CaseRecord::new(0x01CF, &[0x01D0]),
    CaseRecord::new(0x01D1, &[0x01D2]),
    CaseRecord::new(0x01D3, &[0x01D4]),
    CaseRecord::new(0x01D5, &[0x01D6]),
    CaseRecord::new(0x01D7, &[0x01D8]),
    CaseRecord::new(0x01D9, &[0x01DA]),
    CaseRecord::new(0x01DB, &[0x01DC]),
    CaseRecord::new(0x01DE, &[0x01DF]),
    CaseRecord::new(0x01E0, &[0x01E1]),
    CaseRecord::new(0x01E2, &[0x01E3]),
    CaseRecord::new(0x01E4, &[0x01E5]),
    CaseRecord::new(0x01E6, &[0x01E7]),
    CaseRecord::new(0x01E8, &[0x01E9]),
    CaseRecord::new(0x01EA, &[0x01EB]),
    CaseRecord::new(0x01EC, &[0x01ED]),
    CaseRecord::new(0x01EE, &[0x01EF]),
    CaseRecord::new(0x01F0, &[0x006A, 0x030C]),
    CaseRecord::new(0x01F1, &[0x01F3]),
    CaseRecord::new(0x01F2, &[0x01F3]),
    CaseRecord::new(0x01F4, &[0x01F5]),
    CaseRecord::new(0x01F6, &[0x0195]),
    CaseRecord::new(0x01F7, &[0x01BF]),
    CaseRecord::new(0x01F8, &[0x01F9]),
    CaseRecord::new(0x01FA, &[0x01FB]),
    CaseRecord::new(0x01FC, &[0x01FD]),
    CaseRecord::new(0x01FE, &[0x01FF]),
    CaseRecord::new(0x0200, &[0x0201]),
    CaseRecord::new(0x0202, &[0x0203]),
    CaseRecord::new(0x0204, &[0x0205]),
    CaseRecord::new(0x0206, &[0x0207]),
    CaseRecord::new(0x0208, &[0x0209]),
    CaseRecord::new(0x020A, &[0x020B]),
    CaseRecord::new(0x020C, &[0x020D]),
    CaseRecord::new(0x020E, &[0x020F]),
    CaseRecord::new(0x0210, &[0x0211]),
    CaseRecord::new(0x0212, &[0x0213]),
    CaseRecord::new(0x0214, &[0x0215]),
    CaseRecord::new(0x0216, &[0x0217]),
    CaseRecord::new(0x0218, &[0x0219]),
    CaseRecord::new(0x021A, &[0x021B]),
    CaseRecord::new(0x021C, &[0x021D]),
    CaseRecord::new(0x021E, &[0x021F]),
    CaseRecord::new(0x0220, &[0x019E]),
    CaseRecord::new(0x0222, &[0x0223]),
    CaseRecord::new(0x0224, &[0x0225]),
    CaseRecord::new(0x0226, &[0x0227]),
    CaseRecord::new(0x0228, &[0x0229]),
    CaseRecord::new(0x022A, &[0x022B]),
    CaseRecord::new(0x022C, &[0x022D]),
    CaseRecord::new(0x022E, &[0x022F]),
    CaseRecord::new(0x0230, &[0x0231]),
    CaseRecord::new(0x0232, &[0x0233]),
    CaseRecord::new(0x023A, &[0x2C65]),
    CaseRecord::new(0x023B, &[0x023C]),
    CaseRecord::new(0x023D, &[0x019A]),
    CaseRecord::new(0x023E, &[0x2C66]),
    CaseRecord::new(0x0241, &[0x0242]),
    CaseRecord::new(0x0243, &[0x0180]),
    CaseRecord::new(0x0244, &[0x0289]),
    CaseRecord::new(0x0245, &[0x028C]),
    CaseRecord::new(0x0246, &[0x0247]),
    CaseRecord::new(0x0248, &[0x0249]),
    CaseRecord::new(0x024A, &[0x024B]),
    CaseRecord::new(0x024C, &[0x024D]),
    CaseRecord::new(0x024E, &[0x024F]),
    CaseRecord::new(0x0345, &[0x03B9]),
    CaseRecord::new(0x0370, &[0x0371]),
    CaseRecord::new(0x0372, &[0x0373]),
    CaseRecord::new(0x0376, &[0x0377]),
    CaseRecord::new(0x037F, &[0x03F3]),
    CaseRecord::new(0x0386, &[0x03AC]),
    CaseRecord::new(0x0388, &[0x03AD]),
    CaseRecord::new(0x0389, &[0x03AE]),
    CaseRecord::new(0x038A, &[0x03AF]),
    CaseRecord::new(0x038C, &[0x03CC]),
    CaseRecord::new(0x038E, &[0x03CD]),
    CaseRecord::new(0x038F, &[0x03CE]),
    CaseRecord::new(0x0390, &[0x03B9, 0x0308, 0x0301]),
    CaseRecord::new(0x0391, &[0x03B1]),
    CaseRecord::new(0x0392, &[0x03B2]),
    CaseRecord::new(0x0393, &[0x03B3]),
    CaseRecord::new(0x0394, &[0x03B4]),
    CaseRecord::new(0x0395, &[0x03B5]),
    CaseRecord::new(0x0396, &[0x03B6]),
    CaseRecord::new(0x0397, &[0x03B7]),
    CaseRecord::new(0x0398, &[0x03B8]),
    CaseRecord::new(0x0399, &[0x03B9]),
    CaseRecord::new(0x039A, &[0x03BA]),
    CaseRecord::new(0x039B, &[0x03BB]),
    CaseRecord::new(0x039C, &[0x03BC]),
    CaseRecord::new(0x039D, &[0x03BD]),
    CaseRecord::new(0x039E, &[0x03BE]),
    CaseRecord::new(0x039F, &[0x03BF]),
    CaseRecord::new(0x03A0, &[0x03C0]),
    CaseRecord::new(0x03A1, &[0x03C1]),
    CaseRecord::new(0x03A3, &[0x03C3]),
    CaseRecord::new(0x03A4, &[0x03C4]),
    CaseRecord::new(0x03A5, &[0x03C5]),
    CaseRecord::new(0x03A6, &[0x03C6]),
    CaseRecord::new(0x03A7, &[0x03C7]),
    CaseRecord::new(0x03A8, &[0x03C8]),
    CaseRecord::new(0x03A9, &[0x03C9]),
    CaseRecord::new(0x03AA, &[0x03CA]),
    CaseRecord::new(0x03AB, &[0x03CB]),
    CaseRecord::new(0x03B0, &[0x03C5, 0x0308, 0x0301]),
    CaseRecord::new(0x03C2, &[0x03C3]),
    CaseRecord::new(0x03CF, &[0x03D7]),
    CaseRecord::new(0x03D0, &[0x03B2]),
    CaseRecord::new(0x03D1, &[0x03B8]),
    CaseRecord::new(0x03D5, &[0x03C6]),
    CaseRecord::new(0x03D6, &[0x03C0]),
    CaseRecord::new(0x03D8, &[0x03D9]),
    CaseRecord::new(0x03DA, &[0x03DB]),
    CaseRecord::new(0x03DC, &[0x03DD]),
    CaseRecord::new(0x03DE, &[0x03DF]),
    CaseRecord::new(0x03E0, &[0x03E1]),
    CaseRecord::new(0x03E2, &[0x03E3]),
    CaseRecord::new(0x03E4, &[0x03E5]),
    CaseRecord::new(0x03E6, &[0x03E7]),
    CaseRecord::new(0x03E8, &[0x03E9]),
    CaseRecord::new(0x03EA, &[0x03EB]),
    CaseRecord::new(0x03EC, &[0x03ED]),
    CaseRecord::new(0x03EE, &[0x03EF]),
    CaseRecord::new(0x03F0, &[0x03BA]),
    CaseRecord::new(0x03F1, &[0x03C1]),
    CaseRecord::new(0x03F4, &[0x03B8]),
    CaseRecord::new(0x03F5, &[0x03B5]),
    CaseRecord::new(0x03F7, &[0x03F8]),
    CaseRecord::new(0x03F9, &[0x03F2]),
    CaseRecord::new(0x03FA, &[0x03FB]),
    CaseRecord::new(0x03FD, &[0x037B]),
    CaseRecord::new(0x03FE, &[0x037C]),
    CaseRecord::new(0x03FF, &[0x037D]),
    CaseRecord::new(0x0400, &[0x0450]),
    CaseRecord::new(0x0401, &[0x0451]),
    CaseRecord::new(0x0402, &[0x0452]),
    CaseRecord::new(0x0403, &[0x0453]),
    CaseRecord::new(0x0404, &[0x0454]),
    CaseRecord::new(0x0405, &[0x0455]),
    CaseRecord::new(0x0406, &[0x0456]),
    CaseRecord::new(0x0407, &[0x0457]),
    CaseRecord::new(0x0408, &[0x0458]),
    CaseRecord::new(0x0409, &[0x0459]),
    CaseRecord::new(0x040A, &[0x045A]),
    CaseRecord::new(0x040B, &[0x045B]),
    CaseRecord::new(0x040C, &[0x045C]),
    CaseRecord::new(0x040D, &[0x045D]),
    CaseRecord::new(0x040E, &[0x045E]),
    CaseRecord::new(0x040F, &[0x045F]),
    CaseRecord::new(0x0410, &[0x0430]),
    CaseRecord::new(0x0411, &[0x0431]),
    CaseRecord::new(0x0412, &[0x0432]),
    CaseRecord::new(0x0413, &[0x0433]),
    CaseRecord::new(0x0414, &[0x0434]),
    CaseRecord::new(0x0415, &[0x0435]),
    CaseRecord::new(0x0416, &[0x0436]),
    CaseRecord::new(0x0417, &[0x0437]),
    CaseRecord::new(0x0418, &[0x0438]),
    CaseRecord::new(0x0419, &[0x0439]),
    CaseRecord::new(0x041A, &[0x043A]),
    CaseRecord::new(0x041B, &[0x043B]),
    CaseRecord::new(0x041C, &[0x043C]),
    CaseRecord::new(0x041D, &[0x043D]),
    CaseRecord::new(0x041E, &[0x043E]),
    CaseRecord::new(0x041F, &[0x043F]),
    CaseRecord::new(0x0420, &[0x0440]),
    CaseRecord::new(0x0421, &[0x0441]),
    CaseRecord::new(0x0422, &[0x0442]),
    CaseRecord::new(0x0423, &[0x0443]),
    CaseRecord::new(0x0424, &[0x0444]),
    CaseRecord::new(0x0425, &[0x0445]),
    CaseRecord::new(0x0426, &[0x0446]),
    CaseRecord::new(0x0427, &[0x0447]),
    CaseRecord::new(0x0428, &[0x0448]),
    CaseRecord::new(0x0429, &[0x0449]),
    CaseRecord::new(0x042A, &[0x044A]),
    CaseRecord::new(0x042B, &[0x044B]),
    CaseRecord::new(0x042C, &[0x044C]),
    CaseRecord::new(0x042D, &[0x044D]),
    CaseRecord::new(0x042E, &[0x044E]),
    CaseRecord::new(0x042F, &[0x044F]),
    CaseRecord::new(0x0460, &[0x0461]),
    CaseRecord::new(0x0462, &[0x0463]),
    CaseRecord::new(0x0464, &[0x0465]),
    CaseRecord::new(0x0466, &[0x0467]),
    CaseRecord::new(0x0468, &[0x0469]),
    CaseRecord::new(0x046A, &[0x046B]),
    CaseRecord::new(0x046C, &[0x046D]),
    CaseRecord::new(0x046E, &[0x046F]),
    CaseRecord::new(0x0470, &[0x0471]),
    CaseRecord::new(0x0472, &[0x0473]),
    CaseRecord::new(0x0474, &[0x0475]),
    CaseRecord::new(0x0476, &[0x0477]),
    CaseRecord::new(0x0478, &[0x0479]),
    CaseRecord::new(0x047A, &[0x047B]),
    CaseRecord::new(0x047C, &[0x047D]),
    CaseRecord::new(0x047E, &[0x047F]),
    CaseRecord::new(0x0480, &[0x0481]),
    CaseRecord::new(0x048A, &[0x048B]),
    CaseRecord::new(0x048C, &[0x048D]),
    CaseRecord::new(0x048E, &[0x048F]),
    CaseRecord::new(0x0490, &[0x0491]),
    CaseRecord::new(0x0492, &[0x0493]),
    CaseRecord::new(0x0494, &[0x0495]),
    CaseRecord::new(0x0496, &[0x0497]),
    CaseRecord::new(0x0498, &[0x0499]),
    CaseRecord::new(0x049A, &[0x049B]),
    CaseRecord::new(0x049C, &[0x049D]),
    CaseRecord::new(0x049E, &[0x049F]),
    CaseRecord::new(0x04A0, &[0x04A1]),
    CaseRecord::new(0x04A2, &[0x04A3]),
    CaseRecord::new(0x04A4, &[0x04A5]),
    CaseRecord::new(0x04A6, &[0x04A7]),
    CaseRecord::new(0x04A8, &[0x04A9]),
    CaseRecord::new(0x04AA, &[0x04AB]),
    CaseRecord::new(0x04AC, &[0x04AD]),
    CaseRecord::new(0x04AE, &[0x04AF]),
    CaseRecord::new(0x04B0, &[0x04B1]),
    CaseRecord::new(0x04B2, &[0x04B3]),
    CaseRecord::new(0x04B4, &[0x04B5]),
    CaseRecord::new(0x04B6, &[0x04B7]),
    CaseRecord::new(0x04B8, &[0x04B9]),
    CaseRecord::new(0x04BA, &[0x04BB]),
    CaseRecord::new(0x04BC, &[0x04BD]),
    CaseRecord::new(0x04BE, &[0x04BF]),
    CaseRecord::new(0x04C0, &[0x04CF]),
    CaseRecord::new(0x04C1, &[0x04C2]),
    CaseRecord::new(0x04C3, &[0x04C4]),
    CaseRecord::new(0x04C5, &[0x04C6]),
    CaseRecord::new(0x04C7, &[0x04C8]),
    CaseRecord::new(0x04C9, &[0x04CA]),
    CaseRecord::new(0x04CB, &[0x04CC]),
    CaseRecord::new(0x04CD, &[0x04CE]),
    CaseRecord::new(0x04D0, &[0x04D1]),
    CaseRecord::new(0x04D2, &[0x04D3]),
    CaseRecord::new(0x04D4, &[0x04D5]),
    CaseRecord::new(0x04D6, &[0x04D7]),
    CaseRecord::new(0x04D8, &[0x04D9]),
    CaseRecord::new(0x04DA, &[0x04DB]),
    CaseRecord::new(0x04DC, &[0x04DD]),
    CaseRecord::new(0x04DE, &[0x04DF]),
    CaseRecord::new(0x04E0, &[0x04E1]),
    CaseRecord::new(0x04E2, &[0x04E3]),
    CaseRecord::new(0x04E4, &[0x04E5]),
    CaseRecord::new(0x04E6, &[0x04E7]),
    CaseRecord::new(0x04E8, &[0x04E9]),
    CaseRecord::new(0x04EA, &[0x04EB]),
    CaseRecord::new(0x04EC, &[0x04ED]),
    CaseRecord::new(0x04EE, &[0x04EF]),
    CaseRecord::new(0x04F0, &[0x04F1]),
    CaseRecord::new(0x04F2, &[0x04F3]),
    CaseRecord::new(0x04F4, &[0x04F5]),
    CaseRecord::new(0x04F6, &[0x04F7]),
    CaseRecord::new(0x04F8, &[0x04F9]),
    CaseRecord::new(0x04FA, &[0x04FB]),
    CaseRecord::new(0x04FC, &[0x04FD]),
    CaseRecord::new(0x04FE, &[0x04FF]),
    CaseRecord::new(0x0500, &[0x0501]),
    CaseRecord::new(0x0502, &[0x0503]),
    CaseRecord::new(0x0504, &[0x0505]),
    CaseRecord::new(0x0506, &[0x0507]),
    CaseRecord::new(0x0508, &[0x0509]),
    CaseRecord::new(0x050A, &[0x050B]),
    CaseRecord::new(0x050C, &[0x050D]),
    CaseRecord::new(0x050E, &[0x050F]),
    CaseRecord::new(0x0510, &[0x0511]),
    CaseRecord::new(0x0512, &[0x0513]),
    CaseRecord::new(0x0514, &[0x0515]),
    CaseRecord::new(0x0516, &[0x0517]),
    CaseRecord::new(0x0518, &[0x0519]),
    CaseRecord::new(0x051A, &[0x051B]),
    CaseRecord::new(0x051C, &[0x051D]),
    CaseRecord::new(0x051E, &[0x051F]),
    CaseRecord::new(0x0520, &[0x0521]),
    CaseRecord::new(0x0522, &[0x0523]),
    CaseRecord::new(0x0524, &[0x0525]),
    CaseRecord::new(0x0526, &[0x0527]),
    CaseRecord::new(0x0528, &[0x0529]),
    CaseRecord::new(0x052A, &[0x052B]),
    CaseRecord::new(0x052C, &[0x052D]),
    CaseRecord::new(0x052E, &[0x052F]),
    CaseRecord::new(0x0531, &[0x0561]),
    CaseRecord::new(0x0532, &[0x0562]),
    CaseRecord::new(0x0533, &[0x0563]),
    CaseRecord::new(0x0534, &[0x0564]),
    CaseRecord::new(0x0535, &[0x0565]),
    CaseRecord::new(0x0536, &[0x0566]),
    CaseRecord::new(0x0537, &[0x0567]),
    CaseRecord::new(0x0538, &[0x0568]),
    CaseRecord::new(0x0539, &[0x0569]),
    CaseRecord::new(0x053A, &[0x056A]),
    CaseRecord::new(0x053B, &[0x056B]),
    CaseRecord::new(0x053C, &[0x056C]),
    CaseRecord::new(0x053D, &[0x056D]),
    CaseRecord::new(0x053E, &[0x056E]),
    CaseRecord::new(0x053F, &[0x056F]),
    CaseRecord::new(0x0540, &[0x0570]),
    CaseRecord::new(0x0541, &[0x0571]),
    CaseRecord::new(0x0542, &[0x0572]),
    CaseRecord::new(0x0543, &[0x0573]),
    CaseRecord::new(0x0544, &[0x0574]),
    CaseRecord::new(0x0545, &[0x0575]),
    CaseRecord::new(0x0546, &[0x0576]),
    CaseRecord::new(0x0547, &[0x0577]),
    CaseRecord::new(0x0548, &[0x0578]),
    CaseRecord::new(0x0549, &[0x0579]),
    CaseRecord::new(0x054A, &[0x057A]),
    CaseRecord::new(0x054B, &[0x057B]),
    CaseRecord::new(0x054C, &[0x057C]),
    CaseRecord::new(0x054D, &[0x057D]),
    CaseRecord::new(0x054E, &[0x057E]),
    CaseRecord::new(0x054F, &[0x057F]),
    CaseRecord::new(0x0550, &[0x0580]),
    CaseRecord::new(0x0551, &[0x0581]),
    CaseRecord::new(0x0552, &[0x0582]),
    CaseRecord::new(0x0553, &[0x0583]),
    CaseRecord::new(0x0554, &[0x0584]),
    CaseRecord::new(0x0555, &[0x0585]),
    CaseRecord::new(0x0556, &[0x0586]),
    CaseRecord::new(0x0587, &[0x0565, 0x0582]),
    CaseRecord::new(0x10A0, &[0x2D00]),
    CaseRecord::new(0x10A1, &[0x2D01]),
    CaseRecord::new(0x10A2, &[0x2D02]),
    CaseRecord::new(0x10A3, &[0x2D03]),
    CaseRecord::new(0x10A4, &[0x2D04]),
    CaseRecord::new(0x10A5, &[0x2D05]),
    CaseRecord::new(0x10A6, &[0x2D06]),
    CaseRecord::new(0x10A7, &[0x2D07]),
    CaseRecord::new(0x10A8, &[0x2D08]),
    CaseRecord::new(0x10A9, &[0x2D09]),
    CaseRecord::new(0x10AA, &[0x2D0A]),
    CaseRecord::new(0x10AB, &[0x2D0B]),
    CaseRecord::new(0x10AC, &[0x2D0C]),
    CaseRecord::new(0x10AD, &[0x2D0D]),
    CaseRecord::new(0x10AE, &[0x2D0E]),
    CaseRecord::new(0x10AF, &[0x2D0F]),
    CaseRecord::new(0x10B0, &[0x2D10]),
    CaseRecord::new(0x10B1, &[0x2D11]),
    CaseRecord::new(0x10B2, &[0x2D12]),
    CaseRecord::new(0x10B3, &[0x2D13]),
    CaseRecord::new(0x10B4, &[0x2D14]),
    CaseRecord::new(0x10B5, &[0x2D15]),
    CaseRecord::new(0x10B6, &[0x2D16]),
    CaseRecord::new(0x10B7, &[0x2D17]),
    CaseRecord::new(0x10B8, &[0x2D18]),
    CaseRecord::new(0x10B9, &[0x2D19]),
    CaseRecord::new(0x10BA, &[0x2D1A]),
    CaseRecord::new(0x10BB, &[0x2D1B]),
    CaseRecord::new(0x10BC, &[0x2D1C]),
    CaseRecord::new(0x10BD, &[0x2D1D]),
    CaseRecord::new(0x10BE, &[0x2D1E]),
    CaseRecord::new(0x10BF, &[0x2D1F]),
    CaseRecord::new(0x10C0, &[0x2D20]),
    CaseRecord::new(0x10C1, &[0x2D21]),
    CaseRecord::new(0x10C2, &[0x2D22]),
    CaseRecord::new(0x10C3, &[0x2D23]),
    CaseRecord::new(0x10C4, &[0x2D24]),
    CaseRecord::new(0x10C5, &[0x2D25]),
    CaseRecord::new(0x10C7, &[0x2D27]),
    CaseRecord::new(0x10CD, &[0x2D2D]),
    CaseRecord::new(0x13F8, &[0x13F0]),
    CaseRecord::new(0x13F9, &[0x13F1]),
    CaseRecord::new(0x13FA, &[0x13F2]),
    CaseRecord::new(0x13FB, &[0x13F3]),
    CaseRecord::new(0x13FC, &[0x13F4]),
    CaseRecord::new(0x13FD, &[0x13F5]),
    CaseRecord::new(0x1C80, &[0x0432]),
    CaseRecord::new(0x1C81, &[0x0434]),
    CaseRecord::new(0x1C82, &[0x043E]),
    CaseRecord::new(0x1C83, &[0x0441]),
    CaseRecord::new(0x1C84, &[0x0442]),
    CaseRecord::new(0x1C85, &[0x0442]),
    CaseRecord::new(0x1C86, &[0x044A]),
    CaseRecord::new(0x1C87, &[0x0463]),
    CaseRecord::new(0x1C88, &[0xA64B]),
    CaseRecord::new(0x1C90, &[0x10D0]),
    CaseRecord::new(0x1C91, &[0x10D1]),
    CaseRecord::new(0x1C92, &[0x10D2]),
    CaseRecord::new(0x1C93, &[0x10D3]),
    CaseRecord::new(0x1C94, &[0x10D4]),
    CaseRecord::new(0x1C95, &[0x10D5]),
    CaseRecord::new(0x1C96, &[0x10D6]),
    CaseRecord::new(0x1C97, &[0x10D7]),
    CaseRecord::new(0x1C98, &[0x10D8]),
    CaseRecord::new(0x1C99, &[0x10D9]),
    CaseRecord::new(0x1C9A, &[0x10DA]),
    CaseRecord::new(0x1C9B, &[0x10DB]),
    CaseRecord::new(0x1C9C, &[0x10DC]),
    CaseRecord::new(0x1C9D, &[0x10DD]),
    CaseRecord::new(0x1C9E, &[0x10DE]),
    CaseRecord::new(0x1C9F, &[0x10DF]),
    CaseRecord::new(0x1CA0, &[0x10E0]),
    CaseRecord::new(0x1CA1, &[0x10E1]),
    CaseRecord::new(0x1CA2, &[0x10E2]),
    CaseRecord::new(0x1CA3, &[0x10E3]),
    CaseRecord::new(0x1CA4, &[0x10E4]),
    CaseRecord::new(0x1CA5, &[0x10E5]),
    CaseRecord::new(0x1CA6, &[0x10E6]),
    CaseRecord::new(0x1CA7, &[0x10E7]),
    CaseRecord::new(0x1CA8, &[0x10E8]),
    CaseRecord::new(0x1CA9, &[0x10E9]),
    CaseRecord::new(0x1CAA, &[0x10EA]),
    CaseRecord::new(0x1CAB, &[0x10EB]),
    CaseRecord::new(0x1CAC, &[0x10EC]),
    CaseRecord::new(0x1CAD, &[0x10ED]),
    CaseRecord::new(0x1CAE, &[0x10EE]),
    CaseRecord::new(0x1CAF, &[0x10EF]),
    CaseRecord::new(0x1CB0, &[0x10F0]),
    CaseRecord::new(0x1CB1, &[0x10F1]),
    CaseRecord::new(0x1CB2, &[0x10F2]),
    CaseRecord::new(0x1CB3, &[0x10F3]),
    CaseRecord::new(0x1CB4, &[0x10F4]),
    CaseRecord::new(0x1CB5, &[0x10F5]),
    CaseRecord::new(0x1CB6, &[0x10F6]),
    CaseRecord::new(0x1CB7, &[0x10F7]),
    CaseRecord::new(0x1CB8, &[0x10F8]),
    CaseRecord::new(0x1CB9, &[0x10F9]),
    CaseRecord::new(0x1CBA, &[0x10FA]),
    CaseRecord::new(0x1CBD, &[0x10FD]),
    CaseRecord::new(0x1CBE, &[0x10FE]),
    CaseRecord::new(0x1CBF, &[0x10FF]),
    CaseRecord::new(0x1E00, &[0x1E01]),
    CaseRecord::new(0x1E02, &[0x1E03]),
    CaseRecord::new(0x1E04, &[0x1E05]),
    CaseRecord::new(0x1E06, &[0x1E07]),
    CaseRecord::new(0x1E08, &[0x1E09]),
    CaseRecord::new(0x1E0A, &[0x1E0B]),
    CaseRecord::new(0x1E0C, &[0x1E0D]),
    CaseRecord::new(0x1E0E, &[0x1E0F]),
    CaseRecord::new(0x1E10, &[0x1E11]),
    CaseRecord::new(0x1E12, &[0x1E13]),
    CaseRecord::new(0x1E14, &[0x1E15]),
    CaseRecord::new(0x1E16, &[0x1E17]),
    CaseRecord::new(0x1E18, &[0x1E19]),
    CaseRecord::new(0x1E1A, &[0x1E1B]),
    CaseRecord::new(0x1E1C, &[0x1E1D]),
    CaseRecord::new(0x1E1E, &[0x1E1F]),
    CaseRecord::new(0x1E20, &[0x1E21]),
    CaseRecord::new(0x1E22, &[0x1E23]),
    CaseRecord::new(0x1E24, &[0x1E25]),
    CaseRecord::new(0x1E26, &[0x1E27]),
    CaseRecord::new(0x1E28, &[0x1E29]),
    CaseRecord::new(0x1E2A, &[0x1E2B]),
    CaseRecord::new(0x1E2C, &[0x1E2D]),
    CaseRecord::new(0x1E2E, &[0x1E2F]),
    CaseRecord::new(0x1E30, &[0x1E31]),
    CaseRecord::new(0x1E32, &[0x1E33]),
    CaseRecord::new(0x1E34, &[0x1E35]),
    CaseRecord::new(0x1E36, &[0x1E37]),
    CaseRecord::new(0x1E38, &[0x1E39]),
    CaseRecord::new(0x1E3A, &[0x1E3B]),
    CaseRecord::new(0x1E3C, &[0x1E3D]),
    CaseRecord::new(0x1E3E, &[0x1E3F]),
    CaseRecord::new(0x1E40, &[0x1E41]),
    CaseRecord::new(0x1E42, &[0x1E43]),
    CaseRecord::new(0x1E44, &[0x1E45]),
    CaseRecord::new(0x1E46, &[0x1E47]),
    CaseRecord::new(0x1E48, &[0x1E49]),
    CaseRecord::new(0x1E4A, &[0x1E4B]),
    CaseRecord::new(0x1E4C, &[0x1E4D]),
    CaseRecord::new(0x1E4E, &[0x1E4F]),
    CaseRecord::new(0x1E50, &[0x1E51]),
    CaseRecord::new(0x1E52, &[0x1E53]),
    CaseRecord::new(0x1E54, &[0x1E55]),
    CaseRecord::new(0x1E56, &[0x1E57]),
    CaseRecord::new(0x1E58, &[0x1E59]),
    CaseRecord::new(0x1E5A, &[0x1E5B]),
    CaseRecord::new(0x1E5C, &[0x1E5D]),
    CaseRecord::new(0x1E5E, &[0x1E5F]),
    CaseRecord::new(0x1E60, &[0x1E61]),
    CaseRecord::new(0x1E62, &[0x1E63]),
    CaseRecord::new(0x1E64, &[0x1E65]),
    CaseRecord::new(0x1E66, &[0x1E67]),
    CaseRecord::new(0x1E68, &[0x1E69]),
    CaseRecord::new(0x1E6A, &[0x1E6B]),
    CaseRecord::new(0x1E6C, &[0x1E6D]),
    CaseRecord::new(0x1E6E, &[0x1E6F]),
    CaseRecord::new(0x1E70, &[0x1E71]),
    CaseRecord::new(0x1E72, &[0x1E73]),
    CaseRecord::new(0x1E74, &[0x1E75]),
    CaseRecord::new(0x1E76, &[0x1E77]),
    CaseRecord::new(0x1E78, &[0x1E79]),
    CaseRecord::new(0x1E7A, &[0x1E7B]),
    CaseRecord::new(0x1E7C, &[0x1E7D]),
    CaseRecord::new(0x1E7E, &[0x1E7F]),
    CaseRecord::new(0x1E80, &[0x1E81]),
    CaseRecord::new(0x1E82, &[0x1E83]),
    CaseRecord::new(0x1E84, &[0x1E85]),
    CaseRecord::new(0x1E86, &[0x1E87]),
    CaseRecord::new(0x1E88, &[0x1E89]),
    CaseRecord::new(0x1E8A, &[0x1E8B]),
    CaseRecord::new(0x1E8C, &[0x1E8D]),
    CaseRecord::new(0x1E8E, &[0x1E8F]),
    CaseRecord::new(0x1E90, &[0x1E91]),
    CaseRecord::new(0x1E92, &[0x1E93]),
    CaseRecord::new(0x1E94, &[0x1E95]),
    CaseRecord::new(0x1E96, &[0x0068, 0x0331]),
    CaseRecord::new(0x1E97, &[0x0074, 0x0308]),
    CaseRecord::new(0x1E98, &[0x0077, 0x030A]),
    CaseRecord::new(0x1E99, &[0x0079, 0x030A]),
    CaseRecord::new(0x1E9A, &[0x0061, 0x02BE]),
    CaseRecord::new(0x1E9B, &[0x1E61]),
    CaseRecord::new(0x1E9E, &[0x0073, 0x0073]),
    CaseRecord::new(0x1EA0, &[0x1EA1]),
    CaseRecord::new(0x1EA2, &[0x1EA3]),
    CaseRecord::new(0x1EA4, &[0x1EA5]),
    CaseRecord::new(0x1EA6, &[0x1EA7]),
    CaseRecord::new(0x1EA8, &[0x1EA9]),
    CaseRecord::new(0x1EAA, &[0x1EAB]),
    CaseRecord::new(0x1EAC, &[0x1EAD]),
    CaseRecord::new(0x1EAE, &[0x1EAF]),
    CaseRecord::new(0x1EB0, &[0x1EB1]),
    CaseRecord::new(0x1EB2, &[0x1EB3]),
    CaseRecord::new(0x1EB4, &[0x1EB5]),
    CaseRecord::new(0x1EB6, &[0x1EB7]),
    CaseRecord::new(0x1EB8, &[0x1EB9]),
    CaseRecord::new(0x1EBA, &[0x1EBB]),
    CaseRecord::new(0x1EBC, &[0x1EBD]),
    CaseRecord::new(0x1EBE, &[0x1EBF]),
    CaseRecord::new(0x1EC0, &[0x1EC1]),
    CaseRecord::new(0x1EC2, &[0x1EC3]),
    CaseRecord::new(0x1EC4, &[0x1EC5]),
    CaseRecord::new(0x1EC6, &[0x1EC7]),
    CaseRecord::new(0x1EC8, &[0x1EC9]),
    CaseRecord::new(0x1ECA, &[0x1ECB]),
    CaseRecord::new(0x1ECC, &[0x1ECD]),
    CaseRecord::new(0x1ECE, &[0x1ECF]),
    CaseRecord::new(0x1ED0, &[0x1ED1]),
    CaseRecord::new(0x1ED2, &[0x1ED3]),
    CaseRecord::new(0x1ED4, &[0x1ED5]),
    CaseRecord::new(0x1ED6, &[0x1ED7]),
    CaseRecord::new(0x1ED8, &[0x1ED9]),
    CaseRecord::new(0x1EDA, &[0x1EDB]),
    CaseRecord::new(0x1EDC, &[0x1EDD]),
    CaseRecord::new(0x1EDE, &[0x1EDF]),
    CaseRecord::new(0x1EE0, &[0x1EE1]),
    CaseRecord::new(0x1EE2, &[0x1EE3]),
    CaseRecord::new(0x1EE4, &[0x1EE5]),
    CaseRecord::new(0x1EE6, &[0x1EE7]),
    CaseRecord::new(0x1EE8, &[0x1EE9]),
    CaseRecord::new(0x1EEA, &[0x1EEB]),
    CaseRecord::new(0x1EEC, &[0x1EED]),
    CaseRecord::new(0x1EEE, &[0x1EEF]),
    CaseRecord::new(0x1EF0, &[0x1EF1]),
    CaseRecord::new(0x1EF2, &[0x1EF3]),
    CaseRecord::new(0x1EF4, &[0x1EF5]),
    CaseRecord::new(0x1EF6, &[0x1EF7]),
    CaseRecord::new(0x1EF8, &[0x1EF9]),
    CaseRecord::new(0x1EFA, &[0x1EFB]),
    CaseRecord::new(0x1EFC, &[0x1EFD]),
    CaseRecord::new(0x1EFE, &[0x1EFF]),
    CaseRecord::new(0x1F08, &[0x1F00]),
    CaseRecord::new(0x1F09, &[0x1F01]),
    CaseRecord::new(0x1F0A, &[0x1F02]),
    CaseRecord::new(0x1F0B, &[0x1F03]),
    CaseRecord::new(0x1F0C, &[0x1F04]),
    CaseRecord::new(0x1F0D, &[0x1F05]),
    CaseRecord::new(0x1F0E, &[0x1F06]),
    CaseRecord::new(0x1F0F, &[0x1F07]),
    CaseRecord::new(0x1F18, &[0x1F10]),
    CaseRecord::new(0x1F19, &[0x1F11]),
    CaseRecord::new(0x1F1A, &[0x1F12]),
    CaseRecord::new(0x1F1B, &[0x1F13]),
    CaseRecord::new(0x1F1C, &[0x1F14]),
    CaseRecord::new(0x1F1D, &[0x1F15]),
    CaseRecord::new(0x1F28, &[0x1F20]),
    CaseRecord::new(0x1F29, &[0x1F21]),
    CaseRecord::new(0x1F2A, &[0x1F22]),
    CaseRecord::new(0x1F2B, &[0x1F23]),
    CaseRecord::new(0x1F2C, &[0x1F24]),
    CaseRecord::new(0x1F2D, &[0x1F25]),
    CaseRecord::new(0x1F2E, &[0x1F26]),
    CaseRecord::new(0x1F2F, &[0x1F27]),
    CaseRecord::new(0x1F38, &[0x1F30]),
    CaseRecord::new(0x1F39, &[0x1F31]),
    CaseRecord::new(0x1F3A, &[0x1F32]),
    CaseRecord::new(0x1F3B, &[0x1F33]),
    CaseRecord::new(0x1F3C, &[0x1F34]),
    CaseRecord::new(0x1F3D, &[0x1F35]),
    CaseRecord::new(0x1F3E, &[0x1F36]),
    CaseRecord::new(0x1F3F, &[0x1F37]),
    CaseRecord::new(0x1F48, &[0x1F40]),
    CaseRecord::new(0x1F49, &[0x1F41]),
    CaseRecord::new(0x1F4A, &[0x1F42]),
    CaseRecord::new(0x1F4B, &[0x1F43]),
    CaseRecord::new(0x1F4C, &[0x1F44]),
    CaseRecord::new(0x1F4D, &[0x1F45]),
    CaseRecord::new(0x1F50, &[0x03C5, 0x0313]),
    CaseRecord::new(0x1F52, &[0x03C5, 0x0313, 0x0300]),
    CaseRecord::new(0x1F54, &[0x03C5, 0x0313, 0x0301]),
    CaseRecord::new(0x1F56, &[0x03C5, 0x0313, 0x0342]),
    CaseRecord::new(0x1F59, &[0x1F51]),
    CaseRecord::new(0x1F5B, &[0x1F53]),
    CaseRecord::new(0x1F5D, &[0x1F55]),
    CaseRecord::new(0x1F5F, &[0x1F57]),
    CaseRecord::new(0x1F68, &[0x1F60]),
    CaseRecord::new(0x1F69, &[0x1F61]),
    CaseRecord::new(0x1F6A, &[0x1F62]),
    CaseRecord::new(0x1F6B, &[0x1F63]),
    CaseRecord::new(0x1F6C, &[0x1F64]),
    CaseRecord::new(0x1F6D, &[0x1F65]),
    CaseRecord::new(0x1F6E, &[0x1F66]),
    CaseRecord::new(0x1F6F, &[0x1F67]),
    CaseRecord::new(0x1F80, &[0x1F00, 0x03B9]),
    CaseRecord::new(0x1F81, &[0x1F01, 0x03B9]),
    CaseRecord::new(0x1F82, &[0x1F02, 0x03B9]),
    CaseRecord::new(0x1F83, &[0x1F03, 0x03B9]),
    CaseRecord::new(0x1F84, &[0x1F04, 0x03B9]),
    CaseRecord::new(0x1F85, &[0x1F05, 0x03B9]),
    CaseRecord::new(0x1F86, &[0x1F06, 0x03B9]),
    CaseRecord::new(0x1F87, &[0x1F07, 0x03B9]),
    CaseRecord::new(0x1F88, &[0x1F00, 0x03B9]),
    CaseRecord::new(0x1F89, &[0x1F01, 0x03B9]),
    CaseRecord::new(0x1F8A, &[0x1F02, 0x03B9]),
    CaseRecord::new(0x1F8B, &[0x1F03, 0x03B9]),
    CaseRecord::new(0x1F8C, &[0x1F04, 0x03B9]),
    CaseRecord::new(0x1F8D, &[0x1F05, 0x03B9]),
    CaseRecord::new(0x1F8E, &[0x1F06, 0x03B9]),
    CaseRecord::new(0x1F8F, &[0x1F07, 0x03B9]),
    CaseRecord::new(0x1F90, &[0x1F20, 0x03B9]),
    CaseRecord::new(0x1F91, &[0x1F21, 0x03B9]),
    CaseRecord::new(0x1F92, &[0x1F22, 0x03B9]),
    CaseRecord::new(0x1F93, &[0x1F23, 0x03B9]),
    CaseRecord::new(0x1F94, &[0x1F24, 0x03B9]),
    CaseRecord::new(0x1F95, &[0x1F25, 0x03B9]),
    CaseRecord::new(0x1F96, &[0x1F26, 0x03B9]),
    CaseRecord::new(0x1F97, &[0x1F27, 0x03B9]),
    CaseRecord::new(0x1F98, &[0x1F20, 0x03B9]),
    CaseRecord::new(0x1F99, &[0x1F21, 0x03B9]),
    CaseRecord::new(0x1F9A, &[0x1F22, 0x03B9]),
    CaseRecord::new(0x1F9B, &[0x1F23, 0x03B9]),
    CaseRecord::new(0x1F9C, &[0x1F24, 0x03B9]),
    CaseRecord::new(0x1F9D, &[0x1F25, 0x03B9]),
    CaseRecord::new(0x1F9E, &[0x1F26, 0x03B9]),
    CaseRecord::new(0x1F9F, &[0x1F27, 0x03B9]),
    CaseRecord::new(0x1FA0, &[0x1F60, 0x03B9]),
    CaseRecord::new(0x1FA1, &[0x1F61, 0x03B9]),
    CaseRecord::new(0x1FA2, &[0x1F62, 0x03B9]),
    CaseRecord::new(0x1FA3, &[0x1F63, 0x03B9]),
    CaseRecord::new(0x1FA4, &[0x1F64, 0x03B9]),
    CaseRecord::new(0x1FA5, &[0x1F65, 0x03B9]),
    CaseRecord::new(0x1FA6, &[0x1F66, 0x03B9]),
    CaseRecord::new(0x1FA7, &[0x1F67, 0x03B9]),
    CaseRecord::new(0x1FA8, &[0x1F60, 0x03B9]),
    CaseRecord::new(0x1FA9, &[0x1F61, 0x03B9]),
    CaseRecord::new(0x1FAA, &[0x1F62, 0x03B9]),
    CaseRecord::new(0x1FAB, &[0x1F63, 0x03B9]),
    CaseRecord::new(0x1FAC, &[0x1F64, 0x03B9]),
    CaseRecord::new(0x1FAD, &[0x1F65, 0x03B9]),
    CaseRecord::new(0x1FAE, &[0x1F66, 0x03B9]),
    CaseRecord::new(0x1FAF, &[0x1F67, 0x03B9]),
    CaseRecord::new(0x1FB2, &[0x1F70, 0x03B9]),
    CaseRecord::new(0x1FB3, &[0x03B1, 0x03B9]),
    CaseRecord::new(0x1FB4, &[0x03AC, 0x03B9]),
    CaseRecord::new(0x1FB6, &[0x03B1, 0x0342]),
    CaseRecord::new(0x1FB7, &[0x03B1, 0x0342, 0x03B9]),
    CaseRecord::new(0x1FB8, &[0x1FB0]),
    CaseRecord::new(0x1FB9, &[0x1FB1]),
    CaseRecord::new(0x1FBA, &[0x1F70]),
    CaseRecord::new(0x1FBB, &[0x1F71]),
    CaseRecord::new(0x1FBC, &[0x03B1, 0x03B9]),
    CaseRecord::new(0x1FBE, &[0x03B9]),
    CaseRecord::new(0x1FC2, &[0x1F74, 0x03B9]),
    CaseRecord::new(0x1FC3, &[0x03B7, 0x03B9]),
    CaseRecord::new(0x1FC4, &[0x03AE, 0x03B9]),
    CaseRecord::new(0x1FC6, &[0x03B7, 0x0342]),
    CaseRecord::new(0x1FC7, &[0x03B7, 0x0342, 0x03B9]),
    CaseRecord::new(0x1FC8, &[0x1F72]),
    CaseRecord::new(0x1FC9, &[0x1F73]),
    CaseRecord::new(0x1FCA, &[0x1F74]),
    CaseRecord::new(0x1FCB, &[0x1F75]),
    CaseRecord::new(0x1FCC, &[0x03B7, 0x03B9]),
    CaseRecord::new(0x1FD2, &[0x03B9, 0x0308, 0x0300]),
    CaseRecord::new(0x1FD3, &[0x03B9, 0x0308, 0x0301]),
    CaseRecord::new(0x1FD6, &[0x03B9, 0x0342]),
    CaseRecord::new(0x1FD7, &[0x03B9, 0x0308, 0x0342]),
    CaseRecord::new(0x1FD8, &[0x1FD0]),
    CaseRecord::new(0x1FD9, &[0x1FD1]),
    CaseRecord::new(0x1FDA, &[0x1F76]),
    CaseRecord::new(0x1FDB, &[0x1F77]),
    CaseRecord::new(0x1FE2, &[0x03C5, 0x0308, 0x0300]),
    CaseRecord::new(0x1FE3, &[0x03C5, 0x0308, 0x0301]),
    CaseRecord::new(0x1FE4, &[0x03C1, 0x0313]),
    CaseRecord::new(0x1FE6, &[0x03C5, 0x0342]),
    CaseRecord::new(0x1FE7, &[0x03C5, 0x0308, 0x0342]),
    CaseRecord::new(0x1FE8, &[0x1FE0]),
    CaseRecord::new(0x1FE9, &[0x1FE1]),
    CaseRecord::new(0x1FEA, &[0x1F7A]),
    CaseRecord::new(0x1FEB, &[0x1F7B]),
    CaseRecord::new(0x1FEC, &[0x1FE5]),
    CaseRecord::new(0x1FF2, &[0x1F7C, 0x03B9]),
    CaseRecord::new(0x1FF3, &[0x03C9, 0x03B9]),
    CaseRecord::new(0x1FF4, &[0x03CE, 0x03B9]),
    CaseRecord::new(0x1FF6, &[0x03C9, 0x0342]),
    CaseRecord::new(0x1FF7, &[0x03C9, 0x0342, 0x03B9]),
    CaseRecord::new(0x1FF8, &[0x1F78]),
    CaseRecord::new(0x1FF9, &[0x1F79]),
    CaseRecord::new(0x1FFA, &[0x1F7C]),
    CaseRecord::new(0x1FFB, &[0x1F7D]),
    CaseRecord::new(0x1FFC, &[0x03C9, 0x03B9]),
    CaseRecord::new(0x2126, &[0x03C9]),
    CaseRecord::new(0x212A, &[0x006B]),
    CaseRecord::new(0x212B, &[0x00E5]),
    CaseRecord::new(0x2132, &[0x214E]),
    CaseRecord::new(0x2160, &[0x2170]),
    CaseRecord::new(0x2161, &[0x2171]),
    CaseRecord::new(0x2162, &[0x2172]),
    CaseRecord::new(0x2163, &[0x2173]),
    CaseRecord::new(0x2164, &[0x2174]),
    CaseRecord::new(0x2165, &[0x2175]),
    CaseRecord::new(0x2166, &[0x2176]),
    CaseRecord::new(0x2167, &[0x2177]),
    CaseRecord::new(0x2168, &[0x2178]),
    CaseRecord::new(0x2169, &[0x2179]),
    CaseRecord::new(0x216A, &[0x217A]),
    CaseRecord::new(0x216B, &[0x217B]),
    CaseRecord::new(0x216C, &[0x217C]),
    CaseRecord::new(0x216D, &[0x217D]),
    CaseRecord::new(0x216E, &[0x217E]),
    CaseRecord::new(0x216F, &[0x217F]),
    CaseRecord::new(0x2183, &[0x2184]),
    CaseRecord::new(0x24B6, &[0x24D0]),
    CaseRecord::new(0x24B7, &[0x24D1]),
    CaseRecord::new(0x24B8, &[0x24D2]),
    CaseRecord::new(0x24B9, &[0x24D3]),
    CaseRecord::new(0x24BA, &[0x24D4]),
    CaseRecord::new(0x24BB, &[0x24D5]),
    CaseRecord::new(0x24BC, &[0x24D6]),
    CaseRecord::new(0x24BD, &[0x24D7]),
    CaseRecord::new(0x24BE, &[0x24D8]),
    CaseRecord::new(0x24BF, &[0x24D9]),
    CaseRecord::new(0x24C0, &[0x24DA]),
    CaseRecord::new(0x24C1, &[0x24DB]),
    CaseRecord::new(0x24C2, &[0x24DC]),
    CaseRecord::new(0x24C3, &[0x24DD]),
    CaseRecord::new(0x24C4, &[0x24DE]),
    CaseRecord::new(0x24C5, &[0x24DF]),
    CaseRecord::new(0x24C6, &[0x24E0]),
    CaseRecord::new(0x24C7, &[0x24E1]),
    CaseRecord::new(0x24C8, &[0x24E2]),
    CaseRecord::new(0x24C9, &[0x24E3]),
    CaseRecord::new(0x24CA, &[0x24E4]),
    CaseRecord::new(0x24CB, &[0x24E5]),
    CaseRecord::new(0x24CC, &[0x24E6]),
    CaseRecord::new(0x24CD, &[0x24E7]),
    CaseRecord::new(0x24CE, &[0x24E8]),
    CaseRecord::new(0x24CF, &[0x24E9]),
    CaseRecord::new(0x2C00, &[0x2C30]),
    CaseRecord::new(0x2C01, &[0x2C31]),
    CaseRecord::new(0x2C02, &[0x2C32]),
    CaseRecord::new(0x2C03, &[0x2C33]),
    CaseRecord::new(0x2C04, &[0x2C34]),
    CaseRecord::new(0x2C05, &[0x2C35]),
    CaseRecord::new(0x2C06, &[0x2C36]),
    CaseRecord::new(0x2C07, &[0x2C37]),
    CaseRecord::new(0x2C08, &[0x2C38]),
    CaseRecord::new(0x2C09, &[0x2C39]),
    CaseRecord::new(0x2C0A, &[0x2C3A]),
    CaseRecord::new(0x2C0B, &[0x2C3B]),
    CaseRecord::new(0x2C0C, &[0x2C3C]),
    CaseRecord::new(0x2C0D, &[0x2C3D]),
    CaseRecord::new(0x2C0E, &[0x2C3E]),
    CaseRecord::new(0x2C0F, &[0x2C3F]),
    CaseRecord::new(0x2C10, &[0x2C40]),
    CaseRecord::new(0x2C11, &[0x2C41]),
    CaseRecord::new(0x2C12, &[0x2C42]),
    CaseRecord::new(0x2C13, &[0x2C43]),
    CaseRecord::new(0x2C14, &[0x2C44]),
    CaseRecord::new(0x2C15, &[0x2C45]),
    CaseRecord::new(0x2C16, &[0x2C46]),
    CaseRecord::new(0x2C17, &[0x2C47]),
    CaseRecord::new(0x2C18, &[0x2C48]),
    CaseRecord::new(0x2C19, &[0x2C49]),
    CaseRecord::new(0x2C1A, &[0x2C4A]),
    CaseRecord::new(0x2C1B, &[0x2C4B]),
    CaseRecord::new(0x2C1C, &[0x2C4C]),
    CaseRecord::new(0x2C1D, &[0x2C4D]),
    CaseRecord::new(0x2C1E, &[0x2C4E]),
    CaseRecord::new(0x2C1F, &[0x2C4F]),
    CaseRecord::new(0x2C20, &[0x2C50]),
    CaseRecord::new(0x2C21, &[0x2C51]),
    CaseRecord::new(0x2C22, &[0x2C52]),
    CaseRecord::new(0x2C23, &[0x2C53]),
    CaseRecord::new(0x2C24, &[0x2C54]),
    CaseRecord::new(0x2C25, &[0x2C55]),
    CaseRecord::new(0x2C26, &[0x2C56]),
    CaseRecord::new(0x2C27, &[0x2C57]),
    CaseRecord::new(0x2C28, &[0x2C58]),
    CaseRecord::new(0x2C29, &[0x2C59]),
    CaseRecord::new(0x2C2A, &[0x2C5A]),
    CaseRecord::new(0x2C2B, &[0x2C5B]),
    CaseRecord::new(0x2C2C, &[0x2C5C]),
    CaseRecord::new(0x2C2D, &[0x2C5D]),
    CaseRecord::new(0x2C2E, &[0x2C5E]),
    CaseRecord::new(0x2C2F, &[0x2C5F]),
    CaseRecord::new(0x2C60, &[0x2C61]),
    CaseRecord::new(0x2C62, &[0x026B]),
    CaseRecord::new(0x2C63, &[0x1D7D]),
    CaseRecord::new(0x2C64, &[0x027D]),
    CaseRecord::new(0x2C67, &[0x2C68]),
    CaseRecord::new(0x2C69, &[0x2C6A]),
    CaseRecord::new(0x2C6B, &[0x2C6C]),
    CaseRecord::new(0x2C6D, &[0x0251]),
    CaseRecord::new(0x2C6E, &[0x0271]),
    CaseRecord::new(0x2C6F, &[0x0250]),
    CaseRecord::new(0x2C70, &[0x0252]),
    CaseRecord::new(0x2C72, &[0x2C73]),
    CaseRecord::new(0x2C75, &[0x2C76]),
    CaseRecord::new(0x2C7E, &[0x023F]),
    CaseRecord::new(0x2C7F, &[0x0240]),
    CaseRecord::new(0x2C80, &[0x2C81]),
    CaseRecord::new(0x2C82, &[0x2C83]),
    CaseRecord::new(0x2C84, &[0x2C85]),
    CaseRecord::new(0x2C86, &[0x2C87]),
    CaseRecord::new(0x2C88, &[0x2C89]),
    CaseRecord::new(0x2C8A, &[0x2C8B]),
    CaseRecord::new(0x2C8C, &[0x2C8D]),
    CaseRecord::new(0x2C8E, &[0x2C8F]),
    CaseRecord::new(0x2C90, &[0x2C91]),
    CaseRecord::new(0x2C92, &[0x2C93]),
    CaseRecord::new(0x2C94, &[0x2C95]),
    CaseRecord::new(0x2C96, &[0x2C97]),
    CaseRecord::new(0x2C98, &[0x2C99]),
    CaseRecord::new(0x2C9A, &[0x2C9B]),
    CaseRecord::new(0x2C9C, &[0x2C9D]),
    CaseRecord::new(0x2C9E, &[0x2C9F]),
    CaseRecord::new(0x2CA0, &[0x2CA1]),
    CaseRecord::new(0x2CA2, &[0x2CA3]),
    CaseRecord::new(0x2CA4, &[0x2CA5]),
    CaseRecord::new(0x2CA6, &[0x2CA7]),
    CaseRecord::new(0x2CA8, &[0x2CA9]),
    CaseRecord::new(0x2CAA, &[0x2CAB]),
    CaseRecord::new(0x2CAC, &[0x2CAD]),
    CaseRecord::new(0x2CAE, &[0x2CAF]),
    CaseRecord::new(0x2CB0, &[0x2CB1]),
    CaseRecord::new(0x2CB2, &[0x2CB3]),
    CaseRecord::new(0x2CB4, &[0x2CB5]),
    CaseRecord::new(0x2CB6, &[0x2CB7]),
    CaseRecord::new(0x2CB8, &[0x2CB9]),
    CaseRecord::new(0x2CBA, &[0x2CBB]),
    CaseRecord::new(0x2CBC, &[0x2CBD]),
    CaseRecord::new(0x2CBE, &[0x2CBF]),
    CaseRecord::new(0x2CC0, &[0x2CC1]),
    CaseRecord::new(0x2CC2, &[0x2CC3]),
    CaseRecord::new(0x2CC4, &[0x2CC5]),
    CaseRecord::new(0x2CC6, &[0x2CC7]),
    CaseRecord::new(0x2CC8, &[0x2CC9]),
    CaseRecord::new(0x2CCA, &[0x2CCB]),
    CaseRecord::new(0x2CCC, &[0x2CCD]),
    CaseRecord::new(0x2CCE, &[0x2CCF]),
    CaseRecord::new(0x2CD0, &[0x2CD1]),
    CaseRecord::new(0x2CD2, &[0x2CD3]),
    CaseRecord::new(0x2CD4, &[0x2CD5]),
    CaseRecord::new(0x2CD6, &[0x2CD7]),
    CaseRecord::new(0x2CD8, &[0x2CD9]),
    CaseRecord::new(0x2CDA, &[0x2CDB]),
    CaseRecord::new(0x2CDC, &[0x2CDD]),
    CaseRecord::new(0x2CDE, &[0x2CDF]),
    CaseRecord::new(0x2CE0, &[0x2CE1]),
    CaseRecord::new(0x2CE2, &[0x2CE3]),
    CaseRecord::new(0x2CEB, &[0x2CEC]),
    CaseRecord::new(0x2CED, &[0x2CEE]),
    CaseRecord::new(0x2CF2, &[0x2CF3]),
    CaseRecord::new(0xA640, &[0xA641]),
    CaseRecord::new(0xA642, &[0xA643]),
    CaseRecord::new(0xA644, &[0xA645]),
    CaseRecord::new(0xA646, &[0xA647]),
    CaseRecord::new(0xA648, &[0xA649]),
    CaseRecord::new(0xA64A, &[0xA64B]),
    CaseRecord::new(0xA64C, &[0xA64D]),
    CaseRecord::new(0xA64E, &[0xA64F]),
    CaseRecord::new(0xA650, &[0xA651]),
    CaseRecord::new(0xA652, &[0xA653]),
    CaseRecord::new(0xA654, &[0xA655]),
    CaseRecord::new(0xA656, &[0xA657]),
    CaseRecord::new(0xA658, &[0xA659]),
    CaseRecord::new(0xA65A, &[0xA65B]),
    CaseRecord::new(0xA65C, &[0xA65D]),
    CaseRecord::new(0xA65E, &[0xA65F]),
    CaseRecord::new(0xA660, &[0xA661]),
    CaseRecord::new(0xA662, &[0xA663]),
    CaseRecord::new(0xA664, &[0xA665]),
    CaseRecord::new(0xA666, &[0xA667]),
    CaseRecord::new(0xA668, &[0xA669]),
    CaseRecord::new(0xA66A, &[0xA66B]),
    CaseRecord::new(0xA66C, &[0xA66D]),
    CaseRecord::new(0xA680, &[0xA681]),
    CaseRecord::new(0xA682, &[0xA683]),
    CaseRecord::new(0xA684, &[0xA685]),
    CaseRecord::new(0xA686, &[0xA687]),
    CaseRecord::new(0xA688, &[0xA689]),
    CaseRecord::new(0xA68A, &[0xA68B]),
    CaseRecord::new(0xA68C, &[0xA68D]),
    CaseRecord::new(0xA68E, &[0xA68F]),
    CaseRecord::new(0xA690, &[0xA691]),
    CaseRecord::new(0xA692, &[0xA693]),
    CaseRecord::new(0xA694, &[0xA695]),
    CaseRecord::new(0xA696, &[0xA697]),
    CaseRecord::new(0xA698, &[0xA699]),
    CaseRecord::new(0xA69A, &[0xA69B]),
    CaseRecord::new(0xA722, &[0xA723]),
    CaseRecord::new(0xA724, &[0xA725]),
    CaseRecord::new(0xA726, &[0xA727]),
    CaseRecord::new(0xA728, &[0xA729]),
    CaseRecord::new(0xA72A, &[0xA72B]),
    CaseRecord::new(0xA72C, &[0xA72D]),
    CaseRecord::new(0xA72E, &[0xA72F]),
    CaseRecord::new(0xA732, &[0xA733]),
    CaseRecord::new(0xA734, &[0xA735]),
    CaseRecord::new(0xA736, &[0xA737]),
    CaseRecord::new(0xA738, &[0xA739]),
    CaseRecord::new(0xA73A, &[0xA73B]),
    CaseRecord::new(0xA73C, &[0xA73D]),
    CaseRecord::new(0xA73E, &[0xA73F]),
    CaseRecord::new(0xA740, &[0xA741]),
    CaseRecord::new(0xA742, &[0xA743]),
    CaseRecord::new(0xA744, &[0xA745]),
    CaseRecord::new(0xA746, &[0xA747]),
    CaseRecord::new(0xA748, &[0xA749]),
    CaseRecord::new(0xA74A, &[0xA74B]),
    CaseRecord::new(0xA74C, &[0xA74D]),
    CaseRecord::new(0xA74E, &[0xA74F]),
    CaseRecord::new(0xA750, &[0xA751]),
    CaseRecord::new(0xA752, &[0xA753]),
    CaseRecord::new(0xA754, &[0xA755]),
    CaseRecord::new(0xA756, &[0xA757]),
    CaseRecord::new(0xA758, &[0xA759]),
    CaseRecord::new(0xA75A, &[0xA75B]),
    CaseRecord::new(0xA75C, &[0xA75D]),
    CaseRecord::new(0xA75E, &[0xA75F]),
    CaseRecord::new(0xA760, &[0xA761]),
    CaseRecord::new(0xA762, &[0xA763]),
    CaseRecord::new(0xA764, &[0xA765]),
    CaseRecord::new(0xA766, &[0xA767]),
    CaseRecord::new(0xA768, &[0xA769]),
    CaseRecord::new(0xA76A, &[0xA76B]),
    CaseRecord::new(0xA76C, &[0xA76D]),
    CaseRecord::new(0xA76E, &[0xA76F]),
    CaseRecord::new(0xA779, &[0xA77A]),
    CaseRecord::new(0xA77B, &[0xA77C]),
    CaseRecord::new(0xA77D, &[0x1D79]),
    CaseRecord::new(0xA77E, &[0xA77F]),
    CaseRecord::new(0xA780, &[0xA781]),
    CaseRecord::new(0xA782, &[0xA783]),
    CaseRecord::new(0xA784, &[0xA785]),
    CaseRecord::new(0xA786, &[0xA787]),
    CaseRecord::new(0xA78B, &[0xA78C]),
    CaseRecord::new(0xA78D, &[0x0265]),
    CaseRecord::new(0xA790, &[0xA791]),
    CaseRecord::new(0xA792, &[0xA793]),
    CaseRecord::new(0xA796, &[0xA797]),
    CaseRecord::new(0xA798, &[0xA799]),
    CaseRecord::new(0xA79A, &[0xA79B]),
    CaseRecord::new(0xA79C, &[0xA79D]),
    CaseRecord::new(0xA79E, &[0xA79F]),
    CaseRecord::new(0xA7A0, &[0xA7A1]),
    CaseRecord::new(0xA7A2, &[0xA7A3]),
    CaseRecord::new(0xA7A4, &[0xA7A5]),
    CaseRecord::new(0xA7A6, &[0xA7A7]),
    CaseRecord::new(0xA7A8, &[0xA7A9]),
    CaseRecord::new(0xA7AA, &[0x0266]),
    CaseRecord::new(0xA7AB, &[0x025C]),
    CaseRecord::new(0xA7AC, &[0x0261]),
    CaseRecord::new(0xA7AD, &[0x026C]),
    CaseRecord::new(0xA7AE, &[0x026A]),
    CaseRecord::new(0xA7B0, &[0x029E]),
    CaseRecord::new(0xA7B1, &[0x0287]),
    CaseRecord::new(0xA7B2, &[0x029D]),
    CaseRecord::new(0xA7B3, &[0xAB53]),
    CaseRecord::new(0xA7B4, &[0xA7B5]),
    CaseRecord::new(0xA7B6, &[0xA7B7]),
    CaseRecord::new(0xA7B8, &[0xA7B9]),
    CaseRecord::new(0xA7BA, &[0xA7BB]),
    CaseRecord::new(0xA7BC, &[0xA7BD]),
    CaseRecord::new(0xA7BE, &[0xA7BF]),
    CaseRecord::new(0xA7C0, &[0xA7C1]),
    CaseRecord::new(0xA7C2, &[0xA7C3]),
    CaseRecord::new(0xA7C4, &[0xA794]),
    CaseRecord::new(0xA7C5, &[0x0282]),
    CaseRecord::new(0xA7C6, &[0x1D8E]),
    CaseRecord::new(0xA7C7, &[0xA7C8]),
    CaseRecord::new(0xA7C9, &[0xA7CA]),
    CaseRecord::new(0xA7D0, &[0xA7D1]),
    CaseRecord::new(0xA7D6, &[0xA7D7]),
    CaseRecord::new(0xA7D8, &[0xA7D9]),
    CaseRecord::new(0xA7F5, &[0xA7F6]),
    CaseRecord::new(0xAB70, &[0x13A0]),
    CaseRecord::new(0xAB71, &[0x13A1]),
    CaseRecord::new(0xAB72, &[0x13A2]),
    CaseRecord::new(0xAB73, &[0x13A3]),
    CaseRecord::new(0xAB74, &[0x13A4]),
    CaseRecord::new(0xAB75, &[0x13A5]),
    CaseRecord::new(0xAB76, &[0x13A6]),
    CaseRecord::new(0xAB77, &[0x13A7]),
    CaseRecord::new(0xAB78, &[0x13A8]),
    CaseRecord::new(0xAB79, &[0x13A9]),
    CaseRecord::new(0xAB7A, &[0x13AA]),
    CaseRecord::new(0xAB7B, &[0x13AB]),
    CaseRecord::new(0xAB7C, &[0x13AC]),
    CaseRecord::new(0xAB7D, &[0x13AD]),
    CaseRecord::new(0xAB7E, &[0x13AE]),
    CaseRecord::new(0xAB7F, &[0x13AF]),
    CaseRecord::new(0xAB80, &[0x13B0]),
    CaseRecord::new(0xAB81, &[0x13B1]),
    CaseRecord::new(0xAB82, &[0x13B2]),
    CaseRecord::new(0xAB83, &[0x13B3]),
    CaseRecord::new(0xAB84, &[0x13B4]),
    CaseRecord::new(0xAB85, &[0x13B5]),
    CaseRecord::new(0xAB86, &[0x13B6]),
    CaseRecord::new(0xAB87, &[0x13B7]),
    CaseRecord::new(0xAB88, &[0x13B8]),
    CaseRecord::new(0xAB89, &[0x13B9]),
    CaseRecord::new(0xAB8A, &[0x13BA]),
    CaseRecord::new(0xAB8B, &[0x13BB]),
    CaseRecord::new(0xAB8C, &[0x13BC]),
    CaseRecord::new(0xAB8D, &[0x13BD]),
    CaseRecord::new(0xAB8E, &[0x13BE]),
    CaseRecord::new(0xAB8F, &[0x13BF]),
    CaseRecord::new(0xAB90, &[0x13C0]),
    CaseRecord::new(0xAB91, &[0x13C1]),
    CaseRecord::new(0xAB92, &[0x13C2]),
    CaseRecord::new(0xAB93, &[0x13C3]),
    CaseRecord::new(0xAB94, &[0x13C4]),
    CaseRecord::new(0xAB95, &[0x13C5]),
    CaseRecord::new(0xAB96, &[0x13C6]),
    CaseRecord::new(0xAB97, &[0x13C7]),
    CaseRecord::new(0xAB98, &[0x13C8]),
    CaseRecord::new(0xAB99, &[0x13C9]),
    CaseRecord::new(0xAB9A, &[0x13CA]),
    CaseRecord::new(0xAB9B, &[0x13CB]),
    CaseRecord::new(0xAB9C, &[0x13CC]),
    CaseRecord::new(0xAB9D, &[0x13CD]),
    CaseRecord::new(0xAB9E, &[0x13CE]),
    CaseRecord::new(0xAB9F, &[0x13CF]),
    CaseRecord::new(0xABA0, &[0x13D0]),
    CaseRecord::new(0xABA1, &[0x13D1]),
    CaseRecord::new(0xABA2, &[0x13D2]),
    CaseRecord::new(0xABA3, &[0x13D3]),
    CaseRecord::new(0xABA4, &[0x13D4]),
    CaseRecord::new(0xABA5, &[0x13D5]),
    CaseRecord::new(0xABA6, &[0x13D6]),
    CaseRecord::new(0xABA7, &[0x13D7]),
    CaseRecord::new(0xABA8, &[0x13D8]),
    CaseRecord::new(0xABA9, &[0x13D9]),
    CaseRecord::new(0xABAA, &[0x13DA]),
    CaseRecord::new(0xABAB, &[0x13DB]),
    CaseRecord::new(0xABAC, &[0x13DC]),
    CaseRecord::new(0xABAD, &[0x13DD]),
    CaseRecord::new(0xABAE, &[0x13DE]),
    CaseRecord::new(0xABAF, &[0x13DF]),
    CaseRecord::new(0xABB0, &[0x13E0]),
    CaseRecord::new(0xABB1, &[0x13E1]),
    CaseRecord::new(0xABB2, &[0x13E2]),
    CaseRecord::new(0xABB3, &[0x13E3]),
    CaseRecord::new(0xABB4, &[0x13E4]),
    CaseRecord::new(0xABB5, &[0x13E5]),
    CaseRecord::new(0xABB6, &[0x13E6]),
    CaseRecord::new(0xABB7, &[0x13E7]),
    CaseRecord::new(0xABB8, &[0x13E8]),
    CaseRecord::new(0xABB9, &[0x13E9]),
    CaseRecord::new(0xABBA, &[0x13EA]),
    CaseRecord::new(0xABBB, &[0x13EB]),
    CaseRecord::new(0xABBC, &[0x13EC]),
    CaseRecord::new(0xABBD, &[0x13ED]),
    CaseRecord::new(0xABBE, &[0x13EE]),
    CaseRecord::new(0xABBF, &[0x13EF]),
    CaseRecord::new(0xFB00, &[0x0066, 0x0066]),
    CaseRecord::new(0xFB01, &[0x0066, 0x0069]),
    CaseRecord::new(0xFB02, &[0x0066, 0x006C]),
    CaseRecord::new(0xFB03, &[0x0066, 0x0066, 0x0069]),
    CaseRecord::new(0xFB04, &[0x0066, 0x0066, 0x006C]),
    CaseRecord::new(0xFB05, &[0x0073, 0x0074]),
    CaseRecord::new(0xFB06, &[0x0073, 0x0074]),
    CaseRecord::new(0xFB13, &[0x0574, 0x0576]),
    CaseRecord::new(0xFB14, &[0x0574, 0x0565]),
    CaseRecord::new(0xFB15, &[0x0574, 0x056B]),
    CaseRecord::new(0xFB16, &[0x057E, 0x0576]),
    CaseRecord::new(0xFB17, &[0x0574, 0x056D]),
    CaseRecord::new(0xFF21, &[0xFF41]),
    CaseRecord::new(0xFF22, &[0xFF42]),
    CaseRecord::new(0xFF23, &[0xFF43]),
    CaseRecord::new(0xFF24, &[0xFF44]),
    CaseRecord::new(0xFF25, &[0xFF45]),
    CaseRecord::new(0xFF26, &[0xFF46]),
    CaseRecord::new(0xFF27, &[0xFF47]),
    CaseRecord::new(0xFF28, &[0xFF48]),
    CaseRecord::new(0xFF29, &[0xFF49]),
    CaseRecord::new(0xFF2A, &[0xFF4A]),
    CaseRecord::new(0xFF2B, &[0xFF4B]),
    CaseRecord::new(0xFF2C, &[0xFF4C]),
    CaseRecord::new(0xFF2D, &[0xFF4D]),
    CaseRecord::new(0xFF2E, &[0xFF4E]),
    CaseRecord::new(0xFF2F, &[0xFF4F]),
    CaseRecord::new(0xFF30, &[0xFF50]),
    CaseRecord::new(0xFF31, &[0xFF51]),
    CaseRecord::new(0xFF32, &[0xFF52]),
    CaseRecord::new(0xFF33, &[0xFF53]),
    CaseRecord::new(0xFF34, &[0xFF54]),
    CaseRecord::new(0xFF35, &[0xFF55]),
    CaseRecord::new(0xFF36, &[0xFF56]),
    CaseRecord::new(0xFF37, &[0xFF57]),
    CaseRecord::new(0xFF38, &[0xFF58]),
    CaseRecord::new(0xFF39, &[0xFF59]),
    CaseRecord::new(0xFF3A, &[0xFF5A]),
    CaseRecord::new(0x10400, &[0x10428]),
    CaseRecord::new(0x10401, &[0x10429]),
    CaseRecord::new(0x10402, &[0x1042A]),
    CaseRecord::new(0x10403, &[0x1042B]),
    CaseRecord::new(0x10404, &[0x1042C]),
    CaseRecord::new(0x10405, &[0x1042D]),
    CaseRecord::new(0x10406, &[0x1042E]),
    CaseRecord::new(0x10407, &[0x1042F]),
    CaseRecord::new(0x10408, &[0x10430]),
    CaseRecord::new(0x10409, &[0x10431]),
    CaseRecord::new(0x1040A, &[0x10432]),
    CaseRecord::new(0x1040B, &[0x10433]),
    CaseRecord::new(0x1040C, &[0x10434]),
    CaseRecord::new(0x1040D, &[0x10435]),
    CaseRecord::new(0x1040E, &[0x10436]),
    CaseRecord::new(0x1040F, &[0x10437]),
    CaseRecord::new(0x10410, &[0x10438]),
    CaseRecord::new(0x10411, &[0x10439]),
    CaseRecord::new(0x10412, &[0x1043A]),
    CaseRecord::new(0x10413, &[0x1043B]),
    CaseRecord::new(0x10414, &[0x1043C]),
    CaseRecord::new(0x10415, &[0x1043D]),
    CaseRecord::new(0x10416, &[0x1043E]),
    CaseRecord::new(0x10417, &[0x1043F]),
    CaseRecord::new(0x10418, &[0x10440]),
    CaseRecord::new(0x10419, &[0x10441]),
    CaseRecord::new(0x1041A, &[0x10442]),
    CaseRecord::new(0x1041B, &[0x10443]),
    CaseRecord::new(0x1041C, &[0x10444]),
    CaseRecord::new(0x1041D, &[0x10445]),
    CaseRecord::new(0x1041E, &[0x10446]),
    CaseRecord::new(0x1041F, &[0x10447]),
    CaseRecord::new(0x10420, &[0x10448]),
    CaseRecord::new(0x10421, &[0x10449]),
    CaseRecord::new(0x10422, &[0x1044A]),
    CaseRecord::new(0x10423, &[0x1044B]),
    CaseRecord::new(0x10424, &[0x1044C]),
    CaseRecord::new(0x10425, &[0x1044D]),
    CaseRecord::new(0x10426, &[0x1044E]),
    CaseRecord::new(0x10427, &[0x1044F]),
    CaseRecord::new(0x104B0, &[0x104D8]),
    CaseRecord::new(0x104B1, &[0x104D9]),
    CaseRecord::new(0x104B2, &[0x104DA]),
    CaseRecord::new(0x104B3, &[0x104DB]),
    CaseRecord::new(0x104B4, &[0x104DC]),
    CaseRecord::new(0x104B5, &[0x104DD]),
    CaseRecord::new(0x104B6, &[0x104DE]),
    CaseRecord::new(0x104B7, &[0x104DF]),
    CaseRecord::new(0x104B8, &[0x104E0]),
    CaseRecord::new(0x104B9, &[0x104E1]),
    CaseRecord::new(0x104BA, &[0x104E2]),
    CaseRecord::new(0x104BB, &[0x104E3]),
    CaseRecord::new(0x104BC, &[0x104E4]),
    CaseRecord::new(0x104BD, &[0x104E5]),
    CaseRecord::new(0x104BE, &[0x104E6]),
    CaseRecord::new(0x104BF, &[0x104E7]),
    CaseRecord::new(0x104C0, &[0x104E8]),
    CaseRecord::new(0x104C1, &[0x104E9]),
    CaseRecord::new(0x104C2, &[0x104EA]),
    CaseRecord::new(0x104C3, &[0x104EB]),
    CaseRecord::new(0x104C4, &[0x104EC]),
    CaseRecord::new(0x104C5, &[0x104ED]),
    CaseRecord::new(0x104C6, &[0x104EE]),
    CaseRecord::new(0x104C7, &[0x104EF]),
    CaseRecord::new(0x104C8, &[0x104F0]),
    CaseRecord::new(0x104C9, &[0x104F1]),
    CaseRecord::new(0x104CA, &[0x104F2]),
    CaseRecord::new(0x104CB, &[0x104F3]),
    CaseRecord::new(0x104CC, &[0x104F4]),
    CaseRecord::new(0x104CD, &[0x104F5]),
    CaseRecord::new(0x104CE, &[0x104F6]),
    CaseRecord::new(0x104CF, &[0x104F7]),
    CaseRecord::new(0x104D0, &[0x104F8]),
    CaseRecord::new(0x104D1, &[0x104F9]),
    CaseRecord::new(0x104D2, &[0x104FA]),
    CaseRecord::new(0x104D3, &[0x104FB]),
    CaseRecord::new(0x10570, &[0x10597]),
    CaseRecord::new(0x10571, &[0x10598]),
    CaseRecord::new(0x10572, &[0x10599]),
    CaseRecord::new(0x10573, &[0x1059A]),
    CaseRecord::new(0x10574, &[0x1059B]),
    CaseRecord::new(0x10575, &[0x1059C]),
    CaseRecord::new(0x10576, &[0x1059D]),
    CaseRecord::new(0x10577, &[0x1059E]),
    CaseRecord::new(0x10578, &[0x1059F]),
    CaseRecord::new(0x10579, &[0x105A0]),
    CaseRecord::new(0x1057A, &[0x105A1]),
    CaseRecord::new(0x1057C, &[0x105A3]),
    CaseRecord::new(0x1057D, &[0x105A4]),
    CaseRecord::new(0x1057E, &[0x105A5]),
    CaseRecord::new(0x1057F, &[0x105A6]),
    CaseRecord::new(0x10580, &[0x105A7]),
    CaseRecord::new(0x10581, &[0x105A8]),
    CaseRecord::new(0x10582, &[0x105A9]),
    CaseRecord::new(0x10583, &[0x105AA]),
    CaseRecord::new(0x10584, &[0x105AB]),
    CaseRecord::new(0x10585, &[0x105AC]),
    CaseRecord::new(0x10586, &[0x105AD]),
    CaseRecord::new(0x10587, &[0x105AE]),
    CaseRecord::new(0x10588, &[0x105AF]),
    CaseRecord::new(0x10589, &[0x105B0]),
    CaseRecord::new(0x1058A, &[0x105B1]),
    CaseRecord::new(0x1058C, &[0x105B3]),
    CaseRecord::new(0x1058D, &[0x105B4]),
    CaseRecord::new(0x1058E, &[0x105B5]),
    CaseRecord::new(0x1058F, &[0x105B6]),
    CaseRecord::new(0x10590, &[0x105B7]),
    CaseRecord::new(0x10591, &[0x105B8]),
    CaseRecord::new(0x10592, &[0x105B9]),
    CaseRecord::new(0x10594, &[0x105BB]),
    CaseRecord::new(0x10595, &[0x105BC]),
    CaseRecord::new(0x10C80, &[0x10CC0]),
    CaseRecord::new(0x10C81, &[0x10CC1]),
    CaseRecord::new(0x10C82, &[0x10CC2]),
    CaseRecord::new(0x10C83, &[0x10CC3]),
    CaseRecord::new(0x10C84, &[0x10CC4]),
    CaseRecord::new(0x10C85, &[0x10CC5]),
    CaseRecord::new(0x10C86, &[0x10CC6]),
    CaseRecord::new(0x10C87, &[0x10CC7]),
    CaseRecord::new(0x10C88, &[0x10CC8]),
    CaseRecord::new(0x10C89, &[0x10CC9]),
    CaseRecord::new(0x10C8A, &[0x10CCA]),
    CaseRecord::new(0x10C8B, &[0x10CCB]),
    CaseRecord::new(0x10C8C, &[0x10CCC]),
    CaseRecord::new(0x10C8D, &[0x10CCD]),
    CaseRecord::new(0x10C8E, &[0x10CCE]),
    CaseRecord::new(0x10C8F, &[0x10CCF]),
    CaseRecord::new(0x10C90, &[0x10CD0]),
    CaseRecord::new(0x10C91, &[0x10CD1]),
    CaseRecord::new(0x10C92, &[0x10CD2]),
    CaseRecord::new(0x10C93, &[0x10CD3]),
    CaseRecord::new(0x10C94, &[0x10CD4]),
    CaseRecord::new(0x10C95, &[0x10CD5]),
    CaseRecord::new(0x10C96, &[0x10CD6]),
    CaseRecord::new(0x10C97, &[0x10CD7]),
    CaseRecord::new(0x10C98, &[0x10CD8]),
    CaseRecord::new(0x10C99, &[0x10CD9]),
    CaseRecord::new(0x10C9A, &[0x10CDA]),
    CaseRecord::new(0x10C9B, &[0x10CDB]),
    CaseRecord::new(0x10C9C, &[0x10CDC]),
    CaseRecord::new(0x10C9D, &[0x10CDD]),
    CaseRecord::new(0x10C9E, &[0x10CDE]),
    CaseRecord::new(0x10C9F, &[0x10CDF]),
    CaseRecord::new(0x10CA0, &[0x10CE0]),
    CaseRecord::new(0x10CA1, &[0x10CE1]),
    CaseRecord::new(0x10CA2, &[0x10CE2]),
    CaseRecord::new(0x10CA3, &[0x10CE3]),
    CaseRecord::new(0x10CA4, &[0x10CE4]),
    CaseRecord::new(0x10CA5, &[0x10CE5]),
    CaseRecord::new(0x10CA6, &[0x10CE6]),
    CaseRecord::new(0x10CA7, &[0x10CE7]),
    CaseRecord::new(0x10CA8, &[0x10CE8]),
    CaseRecord::new(0x10CA9, &[0x10CE9]),
    CaseRecord::new(0x10CAA, &[0x10CEA]),
    CaseRecord::new(0x10CAB, &[0x10CEB]),
    CaseRecord::new(0x10CAC, &[0x10CEC]),
    CaseRecord::new(0x10CAD, &[0x10CED]),
    CaseRecord::new(0x10CAE, &[0x10CEE]),
    CaseRecord::new(0x10CAF, &[0x10CEF]),
    CaseRecord::new(0x10CB0, &[0x10CF0]),
    CaseRecord::new(0x10CB1, &[0x10CF1]),
    CaseRecord::new(0x10CB2, &[0x10CF2]),
    CaseRecord::new(0x118A0, &[0x118C0]),
    CaseRecord::new(0x118A1, &[0x118C1]),
    CaseRecord::new(0x118A2, &[0x118C2]),
    CaseRecord::new(0x118A3, &[0x118C3]),
    CaseRecord::new(0x118A4, &[0x118C4]),
    CaseRecord::new(0x118A5, &[0x118C5]),
    CaseRecord::new(0x118A6, &[0x118C6]),
    CaseRecord::new(0x118A7, &[0x118C7]),
    CaseRecord::new(0x118A8, &[0x118C8]),
    CaseRecord::new(0x118A9, &[0x118C9]),
    CaseRecord::new(0x118AA, &[0x118CA]),
    CaseRecord::new(0x118AB, &[0x118CB]),
    CaseRecord::new(0x118AC, &[0x118CC]),
    CaseRecord::new(0x118AD, &[0x118CD]),
    CaseRecord::new(0x118AE, &[0x118CE]),
    CaseRecord::new(0x118AF, &[0x118CF]),
    CaseRecord::new(0x118B0, &[0x118D0]),
    CaseRecord::new(0x118B1, &[0x118D1]),
    CaseRecord::new(0x118B2, &[0x118D2]),
    CaseRecord::new(0x118B3, &[0x118D3]),
    CaseRecord::new(0x118B4, &[0x118D4]),
    CaseRecord::new(0x118B5, &[0x118D5]),
    CaseRecord::new(0x118B6, &[0x118D6]),
    CaseRecord::new(0x118B7, &[0x118D7]),
    CaseRecord::new(0x118B8, &[0x118D8]),
    CaseRecord::new(0x118B9, &[0x118D9]),
    CaseRecord::new(0x118BA, &[0x118DA]),
    CaseRecord::new(0x118BB, &[0x118DB]),
    CaseRecord::new(0x118BC, &[0x118DC]),
    CaseRecord::new(0x118BD, &[0x118DD]),
    CaseRecord::new(0x118BE, &[0x118DE]),
    CaseRecord::new(0x118BF, &[0x118DF]),
    CaseRecord::new(0x16E40, &[0x16E60]),
    CaseRecord::new(0x16E41, &[0x16E61]),
    CaseRecord::new(0x16E42, &[0x16E62]),
    CaseRecord::new(0x16E43, &[0x16E63]),
    CaseRecord::new(0x16E44, &[0x16E64]),
    CaseRecord::new(0x16E45, &[0x16E65]),
    CaseRecord::new(0x16E46, &[0x16E66]),
    CaseRecord::new(0x16E47, &[0x16E67]),
    CaseRecord::new(0x16E48, &[0x16E68]),
    CaseRecord::new(0x16E49, &[0x16E69]),
    CaseRecord::new(0x16E4A, &[0x16E6A]),
    CaseRecord::new(0x16E4B, &[0x16E6B]),
    CaseRecord::new(0x16E4C, &[0x16E6C]),
    CaseRecord::new(0x16E4D, &[0x16E6D]),
    CaseRecord::new(0x16E4E, &[0x16E6E]),
    CaseRecord::new(0x16E4F, &[0x16E6F]),
    CaseRecord::new(0x16E50, &[0x16E70]),
    CaseRecord::new(0x16E51, &[0x16E71]),
    CaseRecord::new(0x16E52, &[0x16E72]),
    CaseRecord::new(0x16E53, &[0x16E73]),
    CaseRecord::new(0x16E54, &[0x16E74]),
    CaseRecord::new(0x16E55, &[0x16E75]),
    CaseRecord::new(0x16E56, &[0x16E76]),
    CaseRecord::new(0x16E57, &[0x16E77]),
    CaseRecord::new(0x16E58, &[0x16E78]),
    CaseRecord::new(0x16E59, &[0x16E79]),
    CaseRecord::new(0x16E5A, &[0x16E7A]),
    CaseRecord::new(0x16E5B, &[0x16E7B]),
    CaseRecord::new(0x16E5C, &[0x16E7C]),
    CaseRecord::new(0x16E5D, &[0x16E7D]),
    CaseRecord::new(0x16E5E, &[0x16E7E]),
    CaseRecord::new(0x16E5F, &[0x16E7F]),
    CaseRecord::new(0x1E900, &[0x1E922]),
    CaseRecord::new(0x1E901, &[0x1E923]),
    CaseRecord::new(0x1E902, &[0x1E924]),
    CaseRecord::new(0x1E903, &[0x1E925]),
    CaseRecord::new(0x1E904, &[0x1E926]),
    CaseRecord::new(0x1E905, &[0x1E927]),
    CaseRecord::new(0x1E906, &[0x1E928]),
    CaseRecord::new(0x1E907, &[0x1E929]),
    CaseRecord::new(0x1E908, &[0x1E92A]),
    CaseRecord::new(0x1E909, &[0x1E92B]),
    CaseRecord::new(0x1E90A, &[0x1E92C]),
    CaseRecord::new(0x1E90B, &[0x1E92D]),
    CaseRecord::new(0x1E90C, &[0x1E92E]),
    CaseRecord::new(0x1E90D, &[0x1E92F]),
    CaseRecord::new(0x1E90E, &[0x1E930]),
    CaseRecord::new(0x1E90F, &[0x1E931]),
    CaseRecord::new(0x1E910, &[0x1E932]),
    CaseRecord::new(0x1E911, &[0x1E933]),
    CaseRecord::new(0x1E912, &[0x1E934]),
    CaseRecord::new(0x1E913, &[0x1E935]),
    CaseRecord::new(0x1E914, &[0x1E936]),
    CaseRecord::new(0x1E915, &[0x1E937]),
    CaseRecord::new(0x1E916, &[0x1E938]),
    CaseRecord::new(0x1E917, &[0x1E939]),
    CaseRecord::new(0x1E918, &[0x1E93A]),
    CaseRecord::new(0x1E919, &[0x1E93B]),
    CaseRecord::new(0x1E91A, &[0x1E93C]),
    CaseRecord::new(0x1E91B, &[0x1E93D]),
    CaseRecord::new(0x1E91C, &[0x1E93E]),
    CaseRecord::new(0x1E91D, &[0x1E93F]),
    CaseRecord::new(0x1E91E, &[0x1E940]),
    CaseRecord::new(0x1E91F, &[0x1E941]),
    CaseRecord::new(0x1E920, &[0x1E942]),
    CaseRecord::new(0x1E921, &[0x1E943]),
];

pub const CASE_PROPERTIES: &[RangeRecord<CaseFlags>] = &[
    RangeRecord::new(0x0027, 0x0027, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x002E, 0x002E, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x003A, 0x003A, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0041, 0x005A, CaseFlags::CASED),
    RangeRecord::new(0x005E, 0x005E, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0060, 0x0060, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0061, 0x007A, CaseFlags::CASED),
    RangeRecord::new(0x00A8, 0x00A8, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x00AA, 0x00AA, CaseFlags::CASED),
    RangeRecord::new(0x00AD, 0x00AD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x00AF, 0x00AF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x00B4, 0x00B4, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x00B5, 0x00B5, CaseFlags::CASED),
    RangeRecord::new(0x00B7, 0x00B8, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x00BA, 0x00BA, CaseFlags::CASED),
    RangeRecord::new(0x00C0, 0x00D6, CaseFlags::CASED),
    RangeRecord::new(0x00D8, 0x00F6, CaseFlags::CASED),
    RangeRecord::new(0x00F8, 0x01BA, CaseFlags::CASED),
    RangeRecord::new(0x01BC, 0x01BF, CaseFlags::CASED),
    RangeRecord::new(0x01C4, 0x0293, CaseFlags::CASED),
    RangeRecord::new(0x0295, 0x02AF, CaseFlags::CASED),
    RangeRecord::new(0x02B0, 0x02B8, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0x02B9, 0x02BF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x02C0, 0x02C1, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0x02C2, 0x02DF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x02E0, 0x02E4, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0x02E5, 0x0344, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0345, 0x0345, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0x0346, 0x036F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0370, 0x0373, CaseFlags::CASED),
    RangeRecord::new(0x0374, 0x0375, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0376, 0x0377, CaseFlags::CASED),
    RangeRecord::new(0x037A, 0x037A, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0x037B, 0x037D, CaseFlags::CASED),
    RangeRecord::new(0x037F, 0x037F, CaseFlags::CASED),
    RangeRecord::new(0x0384, 0x0385, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0386, 0x0386, CaseFlags::CASED),
    RangeRecord::new(0x0387, 0x0387, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0388, 0x038A, CaseFlags::CASED),
    RangeRecord::new(0x038C, 0x038C, CaseFlags::CASED),
    RangeRecord::new(0x038E, 0x03A1, CaseFlags::CASED),
    RangeRecord::new(0x03A3, 0x03F5, CaseFlags::CASED),
    RangeRecord::new(0x03F7, 0x0481, CaseFlags::CASED),
    RangeRecord::new(0x0483, 0x0489, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x048A, 0x052F, CaseFlags::CASED),
    RangeRecord::new(0x0531, 0x0556, CaseFlags::CASED),
    RangeRecord::new(0x0559, 0x0559, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x055F, 0x055F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0560, 0x0588, CaseFlags::CASED),
    RangeRecord::new(0x0591, 0x05BD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x05BF, 0x05BF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x05C1, 0x05C2, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x05C4, 0x05C5, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x05C7, 0x05C7, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x05F4, 0x05F4, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0600, 0x0605, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0610, 0x061A, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x061C, 0x061C, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0640, 0x0640, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x064B, 0x065F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0670, 0x0670, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x06D6, 0x06DD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x06DF, 0x06E8, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x06EA, 0x06ED, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x070F, 0x070F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0711, 0x0711, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0730, 0x074A, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x07A6, 0x07B0, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x07EB, 0x07F5, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x07FA, 0x07FA, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x07FD, 0x07FD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0816, 0x082D, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0859, 0x085B, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0888, 0x0888, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0890, 0x0891, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0898, 0x089F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x08C9, 0x0902, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x093A, 0x093A, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x093C, 0x093C, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0941, 0x0948, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x094D, 0x094D, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0951, 0x0957, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0962, 0x0963, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0971, 0x0971, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0981, 0x0981, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x09BC, 0x09BC, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x09C1, 0x09C4, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x09CD, 0x09CD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x09E2, 0x09E3, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x09FE, 0x09FE, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0A01, 0x0A02, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0A3C, 0x0A3C, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0A41, 0x0A42, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0A47, 0x0A48, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0A4B, 0x0A4D, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0A51, 0x0A51, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0A70, 0x0A71, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0A75, 0x0A75, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0A81, 0x0A82, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0ABC, 0x0ABC, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0AC1, 0x0AC5, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0AC7, 0x0AC8, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0ACD, 0x0ACD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0AE2, 0x0AE3, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0AFA, 0x0AFF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0B01, 0x0B01, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0B3C, 0x0B3C, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0B3F, 0x0B3F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0B41, 0x0B44, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0B4D, 0x0B4D, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0B55, 0x0B56, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0B62, 0x0B63, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0B82, 0x0B82, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0BC0, 0x0BC0, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0BCD, 0x0BCD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0C00, 0x0C00, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0C04, 0x0C04, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0C3C, 0x0C3C, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0C3E, 0x0C40, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0C46, 0x0C48, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0C4A, 0x0C4D, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0C55, 0x0C56, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0C62, 0x0C63, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0C81, 0x0C81, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0CBC, 0x0CBC, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0CBF, 0x0CBF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0CC6, 0x0CC6, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0CCC, 0x0CCD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0CE2, 0x0CE3, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0D00, 0x0D01, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0D3B, 0x0D3C, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0D41, 0x0D44, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0D4D, 0x0D4D, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0D62, 0x0D63, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0D81, 0x0D81, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0DCA, 0x0DCA, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0DD2, 0x0DD4, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0DD6, 0x0DD6, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0E31, 0x0E31, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0E34, 0x0E3A, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0E46, 0x0E4E, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0EB1, 0x0EB1, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0EB4, 0x0EBC, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0EC6, 0x0EC6, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0EC8, 0x0ECE, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0F18, 0x0F19, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0F35, 0x0F35, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0F37, 0x0F37, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0F39, 0x0F39, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0F71, 0x0F7E, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0F80, 0x0F84, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0F86, 0x0F87, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0F8D, 0x0F97, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0F99, 0x0FBC, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x0FC6, 0x0FC6, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x102D, 0x1030, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1032, 0x1037, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1039, 0x103A, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x103D, 0x103E, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1058, 0x1059, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x105E, 0x1060, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1071, 0x1074, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1082, 0x1082, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1085, 0x1086, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x108D, 0x108D, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x109D, 0x109D, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x10A0, 0x10C5, CaseFlags::CASED),
    RangeRecord::new(0x10C7, 0x10C7, CaseFlags::CASED),
    RangeRecord::new(0x10CD, 0x10CD, CaseFlags::CASED),
    RangeRecord::new(0x10D0, 0x10FA, CaseFlags::CASED),
    RangeRecord::new(0x10FC, 0x10FC, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0x10FD, 0x10FF, CaseFlags::CASED),
    RangeRecord::new(0x135D, 0x135F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x13A0, 0x13F5, CaseFlags::CASED),
    RangeRecord::new(0x13F8, 0x13FD, CaseFlags::CASED),
    RangeRecord::new(0x1712, 0x1714, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1732, 0x1733, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1752, 0x1753, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1772, 0x1773, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x17B4, 0x17B5, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x17B7, 0x17BD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x17C6, 0x17C6, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x17C9, 0x17D3, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x17D7, 0x17D7, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x17DD, 0x17DD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x180B, 0x180F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1843, 0x1843, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1885, 0x1886, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x18A9, 0x18A9, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1920, 0x1922, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1927, 0x1928, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1932, 0x1932, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1939, 0x193B, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1A17, 0x1A18, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1A1B, 0x1A1B, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1A56, 0x1A56, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1A58, 0x1A5E, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1A60, 0x1A60, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1A62, 0x1A62, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1A65, 0x1A6C, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1A73, 0x1A7C, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1A7F, 0x1A7F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1AA7, 0x1AA7, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1AB0, 0x1ACE, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1B00, 0x1B03, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1B34, 0x1B34, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1B36, 0x1B3A, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1B3C, 0x1B3C, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1B42, 0x1B42, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1B6B, 0x1B73, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1B80, 0x1B81, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1BA2, 0x1BA5, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1BA8, 0x1BA9, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1BAB, 0x1BAD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1BE6, 0x1BE6, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1BE8, 0x1BE9, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1BED, 0x1BED, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1BEF, 0x1BF1, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1C2C, 0x1C33, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1C36, 0x1C37, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1C78, 0x1C7D, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1C80, 0x1C88, CaseFlags::CASED),
    RangeRecord::new(0x1C90, 0x1CBA, CaseFlags::CASED),
    RangeRecord::new(0x1CBD, 0x1CBF, CaseFlags::CASED),
    RangeRecord::new(0x1CD0, 0x1CD2, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1CD4, 0x1CE0, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1CE2, 0x1CE8, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1CED, 0x1CED, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1CF4, 0x1CF4, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1CF8, 0x1CF9, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1D00, 0x1D2B, CaseFlags::CASED),
    RangeRecord::new(0x1D2C, 0x1D6A, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0x1D6B, 0x1D77, CaseFlags::CASED),
    RangeRecord::new(0x1D78, 0x1D78, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0x1D79, 0x1D9A, CaseFlags::CASED),
    RangeRecord::new(0x1D9B, 0x1DBF, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0x1DC0, 0x1DFF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1E00, 0x1F15, CaseFlags::CASED),
    RangeRecord::new(0x1F18, 0x1F1D, CaseFlags::CASED),
    RangeRecord::new(0x1F20, 0x1F45, CaseFlags::CASED),
    RangeRecord::new(0x1F48, 0x1F4D, CaseFlags::CASED),
    RangeRecord::new(0x1F50, 0x1F57, CaseFlags::CASED),
    RangeRecord::new(0x1F59, 0x1F59, CaseFlags::CASED),
    RangeRecord::new(0x1F5B, 0x1F5B, CaseFlags::CASED),
    RangeRecord::new(0x1F5D, 0x1F5D, CaseFlags::CASED),
    RangeRecord::new(0x1F5F, 0x1F7D, CaseFlags::CASED),
    RangeRecord::new(0x1F80, 0x1FB4, CaseFlags::CASED),
    RangeRecord::new(0x1FB6, 0x1FBC, CaseFlags::CASED),
    RangeRecord::new(0x1FBD, 0x1FBD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1FBE, 0x1FBE, CaseFlags::CASED),
    RangeRecord::new(0x1FBF, 0x1FC1, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1FC2, 0x1FC4, CaseFlags::CASED),
    RangeRecord::new(0x1FC6, 0x1FCC, CaseFlags::CASED),
    RangeRecord::new(0x1FCD, 0x1FCF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1FD0, 0x1FD3, CaseFlags::CASED),
    RangeRecord::new(0x1FD6, 0x1FDB, CaseFlags::CASED),
    RangeRecord::new(0x1FDD, 0x1FDF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1FE0, 0x1FEC, CaseFlags::CASED),
    RangeRecord::new(0x1FED, 0x1FEF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1FF2, 0x1FF4, CaseFlags::CASED),
    RangeRecord::new(0x1FF6, 0x1FFC, CaseFlags::CASED),
    RangeRecord::new(0x1FFD, 0x1FFE, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x200B, 0x200F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x2018, 0x2019, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x2024, 0x2024, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x2027, 0x2027, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x202A, 0x202E, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x2060, 0x2064, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x2066, 0x206F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x2071, 0x2071, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0x207F, 0x207F, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0x2090, 0x209C, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0x20D0, 0x20F0, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x2102, 0x2102, CaseFlags::CASED),
    RangeRecord::new(0x2107, 0x2107, CaseFlags::CASED),
    RangeRecord::new(0x210A, 0x2113, CaseFlags::CASED),
    RangeRecord::new(0x2115, 0x2115, CaseFlags::CASED),
    RangeRecord::new(0x2119, 0x211D, CaseFlags::CASED),
    RangeRecord::new(0x2124, 0x2124, CaseFlags::CASED),
    RangeRecord::new(0x2126, 0x2126, CaseFlags::CASED),
    RangeRecord::new(0x2128, 0x2128, CaseFlags::CASED),
    RangeRecord::new(0x212A, 0x212D, CaseFlags::CASED),
    RangeRecord::new(0x212F, 0x2134, CaseFlags::CASED),
    RangeRecord::new(0x2139, 0x2139, CaseFlags::CASED),
    RangeRecord::new(0x213C, 0x213F, CaseFlags::CASED),
    RangeRecord::new(0x2145, 0x2149, CaseFlags::CASED),
    RangeRecord::new(0x214E, 0x214E, CaseFlags::CASED),
    RangeRecord::new(0x2160, 0x217F, CaseFlags::CASED),
    RangeRecord::new(0x2183, 0x2184, CaseFlags::CASED),
    RangeRecord::new(0x24B6, 0x24E9, CaseFlags::CASED),
    RangeRecord::new(0x2C00, 0x2C7B, CaseFlags::CASED),
    RangeRecord::new(0x2C7C, 0x2C7D, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0x2C7E, 0x2CE4, CaseFlags::CASED),
    RangeRecord::new(0x2CEB, 0x2CEE, CaseFlags::CASED),
    RangeRecord::new(0x2CEF, 0x2CF1, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x2CF2, 0x2CF3, CaseFlags::CASED),
    RangeRecord::new(0x2D00, 0x2D25, CaseFlags::CASED),
    RangeRecord::new(0x2D27, 0x2D27, CaseFlags::CASED),
    RangeRecord::new(0x2D2D, 0x2D2D, CaseFlags::CASED),
    RangeRecord::new(0x2D6F, 0x2D6F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x2D7F, 0x2D7F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x2DE0, 0x2DFF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x2E2F, 0x2E2F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x3005, 0x3005, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x302A, 0x302D, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x3031, 0x3035, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x303B, 0x303B, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x3099, 0x309E, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x30FC, 0x30FE, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA015, 0xA015, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA4F8, 0xA4FD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA60C, 0xA60C, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA640, 0xA66D, CaseFlags::CASED),
    RangeRecord::new(0xA66F, 0xA672, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA674, 0xA67D, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA67F, 0xA67F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA680, 0xA69B, CaseFlags::CASED),
    RangeRecord::new(0xA69C, 0xA69D, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0xA69E, 0xA69F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA6F0, 0xA6F1, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA700, 0xA721, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA722, 0xA76F, CaseFlags::CASED),
    RangeRecord::new(0xA770, 0xA770, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0xA771, 0xA787, CaseFlags::CASED),
    RangeRecord::new(0xA788, 0xA78A, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA78B, 0xA78E, CaseFlags::CASED),
    RangeRecord::new(0xA790, 0xA7CA, CaseFlags::CASED),
    RangeRecord::new(0xA7D0, 0xA7D1, CaseFlags::CASED),
    RangeRecord::new(0xA7D3, 0xA7D3, CaseFlags::CASED),
    RangeRecord::new(0xA7D5, 0xA7D9, CaseFlags::CASED),
    RangeRecord::new(0xA7F2, 0xA7F4, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0xA7F5, 0xA7F6, CaseFlags::CASED),
    RangeRecord::new(0xA7F8, 0xA7F9, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0xA7FA, 0xA7FA, CaseFlags::CASED),
    RangeRecord::new(0xA802, 0xA802, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA806, 0xA806, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA80B, 0xA80B, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA825, 0xA826, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA82C, 0xA82C, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA8C4, 0xA8C5, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA8E0, 0xA8F1, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA8FF, 0xA8FF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA926, 0xA92D, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA947, 0xA951, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA980, 0xA982, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA9B3, 0xA9B3, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA9B6, 0xA9B9, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA9BC, 0xA9BD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA9CF, 0xA9CF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xA9E5, 0xA9E6, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xAA29, 0xAA2E, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xAA31, 0xAA32, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xAA35, 0xAA36, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xAA43, 0xAA43, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xAA4C, 0xAA4C, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xAA70, 0xAA70, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xAA7C, 0xAA7C, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xAAB0, 0xAAB0, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xAAB2, 0xAAB4, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xAAB7, 0xAAB8, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xAABE, 0xAABF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xAAC1, 0xAAC1, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xAADD, 0xAADD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xAAEC, 0xAAED, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xAAF3, 0xAAF4, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xAAF6, 0xAAF6, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xAB30, 0xAB5A, CaseFlags::CASED),
    RangeRecord::new(0xAB5B, 0xAB5B, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xAB5C, 0xAB5F, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0xAB60, 0xAB68, CaseFlags::CASED),
    RangeRecord::new(0xAB69, 0xAB69, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0xAB6A, 0xAB6B, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xAB70, 0xABBF, CaseFlags::CASED),
    RangeRecord::new(0xABE5, 0xABE5, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xABE8, 0xABE8, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xABED, 0xABED, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xFB00, 0xFB06, CaseFlags::CASED),
    RangeRecord::new(0xFB13, 0xFB17, CaseFlags::CASED),
    RangeRecord::new(0xFB1E, 0xFB1E, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xFBB2, 0xFBC2, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xFE00, 0xFE0F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xFE13, 0xFE13, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xFE20, 0xFE2F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xFE52, 0xFE52, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xFE55, 0xFE55, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xFEFF, 0xFEFF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xFF07, 0xFF07, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xFF0E, 0xFF0E, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xFF1A, 0xFF1A, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xFF21, 0xFF3A, CaseFlags::CASED),
    RangeRecord::new(0xFF3E, 0xFF3E, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xFF40, 0xFF40, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xFF41, 0xFF5A, CaseFlags::CASED),
    RangeRecord::new(0xFF70, 0xFF70, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xFF9E, 0xFF9F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xFFE3, 0xFFE3, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xFFF9, 0xFFFB, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x101FD, 0x101FD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x102E0, 0x102E0, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x10376, 0x1037A, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x10400, 0x1044F, CaseFlags::CASED),
    RangeRecord::new(0x104B0, 0x104D3, CaseFlags::CASED),
    RangeRecord::new(0x104D8, 0x104FB, CaseFlags::CASED),
    RangeRecord::new(0x10570, 0x1057A, CaseFlags::CASED),
    RangeRecord::new(0x1057C, 0x1058A, CaseFlags::CASED),
    RangeRecord::new(0x1058C, 0x10592, CaseFlags::CASED),
    RangeRecord::new(0x10594, 0x10595, CaseFlags::CASED),
    RangeRecord::new(0x10597, 0x105A1, CaseFlags::CASED),
    RangeRecord::new(0x105A3, 0x105B1, CaseFlags::CASED),
    RangeRecord::new(0x105B3, 0x105B9, CaseFlags::CASED),
    RangeRecord::new(0x105BB, 0x105BC, CaseFlags::CASED),
    RangeRecord::new(0x10780, 0x10780, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0x10781, 0x10782, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x10783, 0x10785, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0x10787, 0x107B0, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0x107B2, 0x107BA, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0x10A01, 0x10A03, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x10A05, 0x10A06, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x10A0C, 0x10A0F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x10A38, 0x10A3A, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x10A3F, 0x10A3F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x10AE5, 0x10AE6, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x10C80, 0x10CB2, CaseFlags::CASED),
    RangeRecord::new(0x10CC0, 0x10CF2, CaseFlags::CASED),
    RangeRecord::new(0x10D24, 0x10D27, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x10EAB, 0x10EAC, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x10EFD, 0x10EFF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x10F46, 0x10F50, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x10F82, 0x10F85, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11001, 0x11001, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11038, 0x11046, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11070, 0x11070, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11073, 0x11074, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1107F, 0x11081, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x110B3, 0x110B6, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x110B9, 0x110BA, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x110BD, 0x110BD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x110C2, 0x110C2, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x110CD, 0x110CD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11100, 0x11102, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11127, 0x1112B, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1112D, 0x11134, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11173, 0x11173, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11180, 0x11181, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x111B6, 0x111BE, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x111C9, 0x111CC, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x111CF, 0x111CF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1122F, 0x11231, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11234, 0x11234, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11236, 0x11237, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1123E, 0x1123E, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11241, 0x11241, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x112DF, 0x112DF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x112E3, 0x112EA, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11300, 0x11301, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1133B, 0x1133C, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11340, 0x11340, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11366, 0x1136C, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11370, 0x11374, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11438, 0x1143F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11442, 0x11444, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11446, 0x11446, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1145E, 0x1145E, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x114B3, 0x114B8, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x114BA, 0x114BA, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x114BF, 0x114C0, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x114C2, 0x114C3, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x115B2, 0x115B5, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x115BC, 0x115BD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x115BF, 0x115C0, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x115DC, 0x115DD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11633, 0x1163A, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1163D, 0x1163D, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1163F, 0x11640, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x116AB, 0x116AB, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x116AD, 0x116AD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x116B0, 0x116B5, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x116B7, 0x116B7, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1171D, 0x1171F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11722, 0x11725, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11727, 0x1172B, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1182F, 0x11837, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11839, 0x1183A, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x118A0, 0x118DF, CaseFlags::CASED),
    RangeRecord::new(0x1193B, 0x1193C, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1193E, 0x1193E, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11943, 0x11943, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x119D4, 0x119D7, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x119DA, 0x119DB, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x119E0, 0x119E0, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11A01, 0x11A0A, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11A33, 0x11A38, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11A3B, 0x11A3E, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11A47, 0x11A47, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11A51, 0x11A56, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11A59, 0x11A5B, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11A8A, 0x11A96, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11A98, 0x11A99, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11C30, 0x11C36, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11C38, 0x11C3D, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11C3F, 0x11C3F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11C92, 0x11CA7, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11CAA, 0x11CB0, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11CB2, 0x11CB3, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11CB5, 0x11CB6, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11D31, 0x11D36, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11D3A, 0x11D3A, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11D3C, 0x11D3D, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11D3F, 0x11D45, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11D47, 0x11D47, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11D90, 0x11D91, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11D95, 0x11D95, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11D97, 0x11D97, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11EF3, 0x11EF4, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11F00, 0x11F01, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11F36, 0x11F3A, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11F40, 0x11F40, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x11F42, 0x11F42, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x13430, 0x13440, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x13447, 0x13455, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x16AF0, 0x16AF4, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x16B30, 0x16B36, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x16B40, 0x16B43, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x16E40, 0x16E7F, CaseFlags::CASED),
    RangeRecord::new(0x16F4F, 0x16F4F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x16F8F, 0x16F9F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x16FE0, 0x16FE1, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x16FE3, 0x16FE4, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1AFF0, 0x1AFF3, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1AFF5, 0x1AFFB, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1AFFD, 0x1AFFE, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1BC9D, 0x1BC9E, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1BCA0, 0x1BCA3, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1CF00, 0x1CF2D, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1CF30, 0x1CF46, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1D167, 0x1D169, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1D173, 0x1D182, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1D185, 0x1D18B, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1D1AA, 0x1D1AD, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1D242, 0x1D244, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1D400, 0x1D454, CaseFlags::CASED),
    RangeRecord::new(0x1D456, 0x1D49C, CaseFlags::CASED),
    RangeRecord::new(0x1D49E, 0x1D49F, CaseFlags::CASED),
    RangeRecord::new(0x1D4A2, 0x1D4A2, CaseFlags::CASED),
    RangeRecord::new(0x1D4A5, 0x1D4A6, CaseFlags::CASED),
    RangeRecord::new(0x1D4A9, 0x1D4AC, CaseFlags::CASED),
    RangeRecord::new(0x1D4AE, 0x1D4B9, CaseFlags::CASED),
    RangeRecord::new(0x1D4BB, 0x1D4BB, CaseFlags::CASED),
    RangeRecord::new(0x1D4BD, 0x1D4C3, CaseFlags::CASED),
    RangeRecord::new(0x1D4C5, 0x1D505, CaseFlags::CASED),
    RangeRecord::new(0x1D507, 0x1D50A, CaseFlags::CASED),
    RangeRecord::new(0x1D50D, 0x1D514, CaseFlags::CASED),
    RangeRecord::new(0x1D516, 0x1D51C, CaseFlags::CASED),
    RangeRecord::new(0x1D51E, 0x1D539, CaseFlags::CASED),
    RangeRecord::new(0x1D53B, 0x1D53E, CaseFlags::CASED),
    RangeRecord::new(0x1D540, 0x1D544, CaseFlags::CASED),
    RangeRecord::new(0x1D546, 0x1D546, CaseFlags::CASED),
    RangeRecord::new(0x1D54A, 0x1D550, CaseFlags::CASED),
    RangeRecord::new(0x1D552, 0x1D6A5, CaseFlags::CASED),
    RangeRecord::new(0x1D6A8, 0x1D6C0, CaseFlags::CASED),
    RangeRecord::new(0x1D6C2, 0x1D6DA, CaseFlags::CASED),
    RangeRecord::new(0x1D6DC, 0x1D6FA, CaseFlags::CASED),
    RangeRecord::new(0x1D6FC, 0x1D714, CaseFlags::CASED),
    RangeRecord::new(0x1D716, 0x1D734, CaseFlags::CASED),
    RangeRecord::new(0x1D736, 0x1D74E, CaseFlags::CASED),
    RangeRecord::new(0x1D750, 0x1D76E, CaseFlags::CASED),
    RangeRecord::new(0x1D770, 0x1D788, CaseFlags::CASED),
    RangeRecord::new(0x1D78A, 0x1D7A8, CaseFlags::CASED),
    RangeRecord::new(0x1D7AA, 0x1D7C2, CaseFlags::CASED),
    RangeRecord::new(0x1D7C4, 0x1D7CB, CaseFlags::CASED),
    RangeRecord::new(0x1DA00, 0x1DA36, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1DA3B, 0x1DA6C, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1DA75, 0x1DA75, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1DA84, 0x1DA84, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1DA9B, 0x1DA9F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1DAA1, 0x1DAAF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1DF00, 0x1DF09, CaseFlags::CASED),
    RangeRecord::new(0x1DF0B, 0x1DF1E, CaseFlags::CASED),
    RangeRecord::new(0x1DF25, 0x1DF2A, CaseFlags::CASED),
    RangeRecord::new(0x1E000, 0x1E006, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1E008, 0x1E018, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1E01B, 0x1E021, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1E023, 0x1E024, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1E026, 0x1E02A, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1E030, 0x1E06D, CaseFlags::CASED.union(CaseFlags::CASE_IGNORABLE)),
    RangeRecord::new(0x1E08F, 0x1E08F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1E130, 0x1E13D, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1E2AE, 0x1E2AE, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1E2EC, 0x1E2EF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1E4EB, 0x1E4EF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1E8D0, 0x1E8D6, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1E900, 0x1E943, CaseFlags::CASED),
    RangeRecord::new(0x1E944, 0x1E94B, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0x1F130, 0x1F149, CaseFlags::CASED),
    RangeRecord::new(0x1F150, 0x1F169, CaseFlags::CASED),
    RangeRecord::new(0x1F170, 0x1F189, CaseFlags::CASED),
    RangeRecord::new(0x1F3FB, 0x1F3FF, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xE0001, 0xE0001, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xE0020, 0xE007F, CaseFlags::CASE_IGNORABLE),
    RangeRecord::new(0xE0100, 0xE01EF, CaseFlags::CASE_IGNORABLE),
];

pub const SOFT_DOTTED: &[RangeRecord<()>] = &[
    RangeRecord::new(0x0069, 0x006A, ()),
    RangeRecord::new(0x012F, 0x012F, ()),
    RangeRecord::new(0x0249, 0x0249, ()),
    RangeRecord::new(0x0268, 0x0268, ()),
    RangeRecord::new(0x029D, 0x029D, ()),
    RangeRecord::new(0x02B2, 0x02B2, ()),
    RangeRecord::new(0x03F3, 0x03F3, ()),
    RangeRecord::new(0x0456, 0x0456, ()),
    RangeRecord::new(0x0458, 0x0458, ()),
    RangeRecord::new(0x1D62, 0x1D62, ()),
    RangeRecord::new(0x1D96, 0x1D96, ()),
    RangeRecord::new(0x1DA4, 0x1DA4, ()),
    RangeRecord::new(0x1DA8, 0x1DA8, ()),
    RangeRecord::new(0x1E2D, 0x1E2D, ()),
    RangeRecord::new(0x1ECB, 0x1ECB, ()),
    RangeRecord::new(0x2071, 0x2071, ()),
    RangeRecord::new(0x2148, 0x2149, ()),
    RangeRecord::new(0x2C7C, 0x2C7C, ()),
    RangeRecord::new(0x1D422, 0x1D423, ()),
    RangeRecord::new(0x1D456, 0x1D457, ()),
    RangeRecord::new(0x1D48A, 0x1D48B, ()),
    RangeRecord::new(0x1D4BE, 0x1D4BF, ()),
    RangeRecord::new(0x1D4F2, 0x1D4F3, ()),
    RangeRecord::new(0x1D526, 0x1D527, ()),
    RangeRecord::new(0x1D55A, 0x1D55B, ()),
    RangeRecord::new(0x1D58E, 0x1D58F, ()),
    RangeRecord::new(0x1D5C2, 0x1D5C3, ()),
    RangeRecord::new(0x1D5F6, 0x1D5F7, ()),
    RangeRecord::new(0x1D62A, 0x1D62B, ()),
    RangeRecord::new(0x1D65E, 0x1D65F, ()),
    RangeRecord::new(0x1D692, 0x1D693, ()),
    RangeRecord::new(0x1DF1A, 0x1DF1A, ()),
    RangeRecord::new(0x1E04C, 0x1E04D, ()),
    RangeRecord::new(0x1E068, 0x1E068, ()),
];

pub const GENERAL_CATEGORY: &[RangeRecord<Category>] = &[
    RangeRecord::new(0x0000, 0x001F, Category::CONTROL),
    RangeRecord::new(0x0020, 0x0020, Category::SEPARATOR_SPACE),
    RangeRecord::new(0x0021, 0x0023, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0024, 0x0024, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0x0025, 0x0027, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0028, 0x0028, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x0029, 0x0029, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x002A, 0x002A, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x002B, 0x002B, Category::SYMBOL_MATH),
    RangeRecord::new(0x002C, 0x002C, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x002D, 0x002D, Category::PUNCTUATION_DASH),
    RangeRecord::new(0x002E, 0x002F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0030, 0x0039, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x003A, 0x003B, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x003C, 0x003E, Category::SYMBOL_MATH),
    RangeRecord::new(0x003F, 0x0040, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0041, 0x005A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x005B, 0x005B, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x005C, 0x005C, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x005D, 0x005D, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x005E, 0x005E, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x005F, 0x005F, Category::PUNCTUATION_CONNECTOR),
    RangeRecord::new(0x0060, 0x0060, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x0061, 0x007A, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x007B, 0x007B, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x007C, 0x007C, Category::SYMBOL_MATH),
    RangeRecord::new(0x007D, 0x007D, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x007E, 0x007E, Category::SYMBOL_MATH),
    RangeRecord::new(0x007F, 0x009F, Category::CONTROL),
    RangeRecord::new(0x00A0, 0x00A0, Category::SEPARATOR_SPACE),
    RangeRecord::new(0x00A1, 0x00A1, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x00A2, 0x00A5, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0x00A6, 0x00A6, Category::SYMBOL_OTHER),
    RangeRecord::new(0x00A7, 0x00A7, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x00A8, 0x00A8, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x00A9, 0x00A9, Category::SYMBOL_OTHER),
    RangeRecord::new(0x00AA, 0x00AA, Category::LETTER_OTHER),
    RangeRecord::new(0x00AB, 0x00AB, Category::PUNCTUATION_INITIAL),
    RangeRecord::new(0x00AC, 0x00AC, Category::SYMBOL_MATH),
    RangeRecord::new(0x00AD, 0x00AD, Category::FORMAT),
    RangeRecord::new(0x00AE, 0x00AE, Category::SYMBOL_OTHER),
    RangeRecord::new(0x00AF, 0x00AF, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x00B0, 0x00B0, Category::SYMBOL_OTHER),
    RangeRecord::new(0x00B1, 0x00B1, Category::SYMBOL_MATH),
    RangeRecord::new(0x00B2, 0x00B3, Category::NUMBER_OTHER),
    RangeRecord::new(0x00B4, 0x00B4, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x00B5, 0x00B5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x00B6, 0x00B7, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x00B8, 0x00B8, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x00B9, 0x00B9, Category::NUMBER_OTHER),
    RangeRecord::new(0x00BA, 0x00BA, Category::LETTER_OTHER),
    RangeRecord::new(0x00BB, 0x00BB, Category::PUNCTUATION_FINAL),
    RangeRecord::new(0x00BC, 0x00BE, Category::NUMBER_OTHER),
    RangeRecord::new(0x00BF, 0x00BF, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x00C0, 0x00D6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x00D7, 0x00D7, Category::SYMBOL_MATH),
    RangeRecord::new(0x00D8, 0x00DE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x00DF, 0x00F6, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x00F7, 0x00F7, Category::SYMBOL_MATH),
    RangeRecord::new(0x00F8, 0x00FF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0100, 0x0100, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0101, 0x0101, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0102, 0x0102, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0103, 0x0103, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0104, 0x0104, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0105, 0x0105, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0106, 0x0106, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0107, 0x0107, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0108, 0x0108, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0109, 0x0109, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x010A, 0x010A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x010B, 0x010B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x010C, 0x010C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x010D, 0x010D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x010E, 0x010E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x010F, 0x010F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0110, 0x0110, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0111, 0x0111, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0112, 0x0112, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0113, 0x0113, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0114, 0x0114, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0115, 0x0115, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0116, 0x0116, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0117, 0x0117, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0118, 0x0118, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0119, 0x0119, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x011A, 0x011A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x011B, 0x011B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x011C, 0x011C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x011D, 0x011D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x011E, 0x011E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x011F, 0x011F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0120, 0x0120, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0121, 0x0121, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0122, 0x0122, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0123, 0x0123, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0124, 0x0124, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0125, 0x0125, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0126, 0x0126, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0127, 0x0127, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0128, 0x0128, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0129, 0x0129, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x012A, 0x012A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x012B, 0x012B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x012C, 0x012C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x012D, 0x012D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x012E, 0x012E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x012F, 0x012F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0130, 0x0130, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0131, 0x0131, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0132, 0x0132, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0133, 0x0133, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0134, 0x0134, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0135, 0x0135, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0136, 0x0136, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0137, 0x0138, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0139, 0x0139, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x013A, 0x013A, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x013B, 0x013B, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x013C, 0x013C, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x013D, 0x013D, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x013E, 0x013E, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x013F, 0x013F, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0140, 0x0140, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0141, 0x0141, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0142, 0x0142, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0143, 0x0143, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0144, 0x0144, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0145, 0x0145, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0146, 0x0146, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0147, 0x0147, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0148, 0x0149, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x014A, 0x014A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x014B, 0x014B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x014C, 0x014C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x014D, 0x014D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x014E, 0x014E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x014F, 0x014F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0150, 0x0150, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0151, 0x0151, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0152, 0x0152, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0153, 0x0153, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0154, 0x0154, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0155, 0x0155, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0156, 0x0156, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0157, 0x0157, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0158, 0x0158, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0159, 0x0159, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x015A, 0x015A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x015B, 0x015B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x015C, 0x015C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x015D, 0x015D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x015E, 0x015E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x015F, 0x015F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0160, 0x0160, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0161, 0x0161, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0162, 0x0162, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0163, 0x0163, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0164, 0x0164, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0165, 0x0165, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0166, 0x0166, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0167, 0x0167, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0168, 0x0168, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0169, 0x0169, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x016A, 0x016A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x016B, 0x016B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x016C, 0x016C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x016D, 0x016D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x016E, 0x016E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x016F, 0x016F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0170, 0x0170, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0171, 0x0171, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0172, 0x0172, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0173, 0x0173, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0174, 0x0174, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0175, 0x0175, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0176, 0x0176, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0177, 0x0177, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0178, 0x0179, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x017A, 0x017A, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x017B, 0x017B, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x017C, 0x017C, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x017D, 0x017D, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x017E, 0x0180, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0181, 0x0182, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0183, 0x0183, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0184, 0x0184, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0185, 0x0185, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0186, 0x0187, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0188, 0x0188, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0189, 0x018B, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x018C, 0x018D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x018E, 0x0191, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0192, 0x0192, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0193, 0x0194, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0195, 0x0195, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0196, 0x0198, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0199, 0x019B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x019C, 0x019D, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x019E, 0x019E, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x019F, 0x01A0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01A1, 0x01A1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01A2, 0x01A2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01A3, 0x01A3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01A4, 0x01A4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01A5, 0x01A5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01A6, 0x01A7, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01A8, 0x01A8, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01A9, 0x01A9, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01AA, 0x01AB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01AC, 0x01AC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01AD, 0x01AD, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01AE, 0x01AF, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01B0, 0x01B0, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01B1, 0x01B3, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01B4, 0x01B4, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01B5, 0x01B5, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01B6, 0x01B6, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01B7, 0x01B8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01B9, 0x01BA, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01BB, 0x01BB, Category::LETTER_OTHER),
    RangeRecord::new(0x01BC, 0x01BC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01BD, 0x01BF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01C0, 0x01C3, Category::LETTER_OTHER),
    RangeRecord::new(0x01C4, 0x01C4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01C5, 0x01C5, Category::LETTER_TITLECASE),
    RangeRecord::new(0x01C6, 0x01C6, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01C7, 0x01C7, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01C8, 0x01C8, Category::LETTER_TITLECASE),
    RangeRecord::new(0x01C9, 0x01C9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01CA, 0x01CA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01CB, 0x01CB, Category::LETTER_TITLECASE),
    RangeRecord::new(0x01CC, 0x01CC, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01CD, 0x01CD, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01CE, 0x01CE, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01CF, 0x01CF, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01D0, 0x01D0, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01D1, 0x01D1, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01D2, 0x01D2, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01D3, 0x01D3, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01D4, 0x01D4, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01D5, 0x01D5, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01D6, 0x01D6, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01D7, 0x01D7, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01D8, 0x01D8, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01D9, 0x01D9, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01DA, 0x01DA, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01DB, 0x01DB, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01DC, 0x01DD, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01DE, 0x01DE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01DF, 0x01DF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01E0, 0x01E0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01E1, 0x01E1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01E2, 0x01E2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01E3, 0x01E3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01E4, 0x01E4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01E5, 0x01E5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01E6, 0x01E6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01E7, 0x01E7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01E8, 0x01E8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01E9, 0x01E9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01EA, 0x01EA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01EB, 0x01EB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01EC, 0x01EC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01ED, 0x01ED, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01EE, 0x01EE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01EF, 0x01F0, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01F1, 0x01F1, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01F2, 0x01F2, Category::LETTER_TITLECASE),
    RangeRecord::new(0x01F3, 0x01F3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01F4, 0x01F4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01F5, 0x01F5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01F6, 0x01F8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01F9, 0x01F9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01FA, 0x01FA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01FB, 0x01FB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01FC, 0x01FC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01FD, 0x01FD, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x01FE, 0x01FE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x01FF, 0x01FF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0200, 0x0200, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0201, 0x0201, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0202, 0x0202, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0203, 0x0203, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0204, 0x0204, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0205, 0x0205, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0206, 0x0206, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0207, 0x0207, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0208, 0x0208, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0209, 0x0209, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x020A, 0x020A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x020B, 0x020B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x020C, 0x020C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x020D, 0x020D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x020E, 0x020E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x020F, 0x020F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0210, 0x0210, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0211, 0x0211, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0212, 0x0212, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0213, 0x0213, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0214, 0x0214, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0215, 0x0215, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0216, 0x0216, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0217, 0x0217, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0218, 0x0218, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0219, 0x0219, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x021A, 0x021A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x021B, 0x021B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x021C, 0x021C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x021D, 0x021D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x021E, 0x021E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x021F, 0x021F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0220, 0x0220, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0221, 0x0221, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0222, 0x0222, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0223, 0x0223, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0224, 0x0224, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0225, 0x0225, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0226, 0x0226, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0227, 0x0227, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0228, 0x0228, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0229, 0x0229, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x022A, 0x022A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x022B, 0x022B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x022C, 0x022C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x022D, 0x022D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x022E, 0x022E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x022F, 0x022F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0230, 0x0230, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0231, 0x0231, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0232, 0x0232, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0233, 0x0239, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x023A, 0x023B, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x023C, 0x023C, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x023D, 0x023E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x023F, 0x0240, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0241, 0x0241, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0242, 0x0242, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0243, 0x0246, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0247, 0x0247, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0248, 0x0248, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0249, 0x0249, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x024A, 0x024A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x024B, 0x024B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x024C, 0x024C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x024D, 0x024D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x024E, 0x024E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x024F, 0x0293, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0294, 0x0294, Category::LETTER_OTHER),
    RangeRecord::new(0x0295, 0x02AF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x02B0, 0x02C1, Category::LETTER_MODIFIER),
    RangeRecord::new(0x02C2, 0x02C5, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x02C6, 0x02D1, Category::LETTER_MODIFIER),
    RangeRecord::new(0x02D2, 0x02DF, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x02E0, 0x02E4, Category::LETTER_MODIFIER),
    RangeRecord::new(0x02E5, 0x02EB, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x02EC, 0x02EC, Category::LETTER_MODIFIER),
    RangeRecord::new(0x02ED, 0x02ED, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x02EE, 0x02EE, Category::LETTER_MODIFIER),
    RangeRecord::new(0x02EF, 0x02FF, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x0300, 0x036F, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0370, 0x0370, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0371, 0x0371, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0372, 0x0372, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0373, 0x0373, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0374, 0x0374, Category::LETTER_MODIFIER),
    RangeRecord::new(0x0375, 0x0375, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x0376, 0x0376, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0377, 0x0377, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x037A, 0x037A, Category::LETTER_MODIFIER),
    RangeRecord::new(0x037B, 0x037D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x037E, 0x037E, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x037F, 0x037F, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0384, 0x0385, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x0386, 0x0386, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0387, 0x0387, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0388, 0x038A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x038C, 0x038C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x038E, 0x038F, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0390, 0x0390, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0391, 0x03A1, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x03A3, 0x03AB, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x03AC, 0x03CE, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x03CF, 0x03CF, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x03D0, 0x03D1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x03D2, 0x03D4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x03D5, 0x03D7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x03D8, 0x03D8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x03D9, 0x03D9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x03DA, 0x03DA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x03DB, 0x03DB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x03DC, 0x03DC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x03DD, 0x03DD, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x03DE, 0x03DE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x03DF, 0x03DF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x03E0, 0x03E0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x03E1, 0x03E1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x03E2, 0x03E2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x03E3, 0x03E3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x03E4, 0x03E4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x03E5, 0x03E5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x03E6, 0x03E6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x03E7, 0x03E7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x03E8, 0x03E8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x03E9, 0x03E9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x03EA, 0x03EA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x03EB, 0x03EB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x03EC, 0x03EC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x03ED, 0x03ED, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x03EE, 0x03EE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x03EF, 0x03F3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x03F4, 0x03F4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x03F5, 0x03F5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x03F6, 0x03F6, Category::SYMBOL_MATH),
    RangeRecord::new(0x03F7, 0x03F7, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x03F8, 0x03F8, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x03F9, 0x03FA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x03FB, 0x03FC, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x03FD, 0x042F, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0430, 0x045F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0460, 0x0460, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0461, 0x0461, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0462, 0x0462, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0463, 0x0463, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0464, 0x0464, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0465, 0x0465, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0466, 0x0466, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0467, 0x0467, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0468, 0x0468, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0469, 0x0469, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x046A, 0x046A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x046B, 0x046B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x046C, 0x046C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x046D, 0x046D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x046E, 0x046E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x046F, 0x046F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0470, 0x0470, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0471, 0x0471, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0472, 0x0472, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0473, 0x0473, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0474, 0x0474, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0475, 0x0475, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0476, 0x0476, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0477, 0x0477, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0478, 0x0478, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0479, 0x0479, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x047A, 0x047A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x047B, 0x047B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x047C, 0x047C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x047D, 0x047D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x047E, 0x047E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x047F, 0x047F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0480, 0x0480, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0481, 0x0481, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0482, 0x0482, Category::SYMBOL_OTHER),
    RangeRecord::new(0x0483, 0x0487, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0488, 0x0489, Category::MARK_ENCLOSING),
    RangeRecord::new(0x048A, 0x048A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x048B, 0x048B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x048C, 0x048C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x048D, 0x048D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x048E, 0x048E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x048F, 0x048F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0490, 0x0490, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0491, 0x0491, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0492, 0x0492, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0493, 0x0493, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0494, 0x0494, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0495, 0x0495, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0496, 0x0496, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0497, 0x0497, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0498, 0x0498, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0499, 0x0499, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x049A, 0x049A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x049B, 0x049B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x049C, 0x049C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x049D, 0x049D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x049E, 0x049E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x049F, 0x049F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04A0, 0x04A0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04A1, 0x04A1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04A2, 0x04A2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04A3, 0x04A3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04A4, 0x04A4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04A5, 0x04A5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04A6, 0x04A6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04A7, 0x04A7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04A8, 0x04A8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04A9, 0x04A9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04AA, 0x04AA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04AB, 0x04AB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04AC, 0x04AC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04AD, 0x04AD, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04AE, 0x04AE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04AF, 0x04AF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04B0, 0x04B0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04B1, 0x04B1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04B2, 0x04B2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04B3, 0x04B3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04B4, 0x04B4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04B5, 0x04B5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04B6, 0x04B6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04B7, 0x04B7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04B8, 0x04B8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04B9, 0x04B9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04BA, 0x04BA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04BB, 0x04BB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04BC, 0x04BC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04BD, 0x04BD, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04BE, 0x04BE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04BF, 0x04BF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04C0, 0x04C1, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04C2, 0x04C2, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04C3, 0x04C3, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04C4, 0x04C4, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04C5, 0x04C5, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04C6, 0x04C6, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04C7, 0x04C7, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04C8, 0x04C8, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04C9, 0x04C9, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04CA, 0x04CA, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04CB, 0x04CB, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04CC, 0x04CC, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04CD, 0x04CD, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04CE, 0x04CF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04D0, 0x04D0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04D1, 0x04D1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04D2, 0x04D2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04D3, 0x04D3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04D4, 0x04D4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04D5, 0x04D5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04D6, 0x04D6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04D7, 0x04D7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04D8, 0x04D8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04D9, 0x04D9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04DA, 0x04DA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04DB, 0x04DB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04DC, 0x04DC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04DD, 0x04DD, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04DE, 0x04DE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04DF, 0x04DF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04E0, 0x04E0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04E1, 0x04E1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04E2, 0x04E2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04E3, 0x04E3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04E4, 0x04E4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04E5, 0x04E5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04E6, 0x04E6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04E7, 0x04E7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04E8, 0x04E8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04E9, 0x04E9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04EA, 0x04EA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04EB, 0x04EB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04EC, 0x04EC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04ED, 0x04ED, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04EE, 0x04EE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04EF, 0x04EF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04F0, 0x04F0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04F1, 0x04F1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04F2, 0x04F2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04F3, 0x04F3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04F4, 0x04F4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04F5, 0x04F5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04F6, 0x04F6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04F7, 0x04F7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04F8, 0x04F8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04F9, 0x04F9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04FA, 0x04FA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04FB, 0x04FB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04FC, 0x04FC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04FD, 0x04FD, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x04FE, 0x04FE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x04FF, 0x04FF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0500, 0x0500, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0501, 0x0501, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0502, 0x0502, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0503, 0x0503, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0504, 0x0504, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0505, 0x0505, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0506, 0x0506, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0507, 0x0507, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0508, 0x0508, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0509, 0x0509, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x050A, 0x050A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x050B, 0x050B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x050C, 0x050C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x050D, 0x050D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x050E, 0x050E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x050F, 0x050F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0510, 0x0510, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0511, 0x0511, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0512, 0x0512, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0513, 0x0513, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0514, 0x0514, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0515, 0x0515, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0516, 0x0516, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0517, 0x0517, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0518, 0x0518, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0519, 0x0519, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x051A, 0x051A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x051B, 0x051B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x051C, 0x051C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x051D, 0x051D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x051E, 0x051E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x051F, 0x051F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0520, 0x0520, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0521, 0x0521, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0522, 0x0522, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0523, 0x0523, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0524, 0x0524, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0525, 0x0525, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0526, 0x0526, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0527, 0x0527, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0528, 0x0528, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0529, 0x0529, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x052A, 0x052A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x052B, 0x052B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x052C, 0x052C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x052D, 0x052D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x052E, 0x052E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x052F, 0x052F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0531, 0x0556, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x0559, 0x0559, Category::LETTER_MODIFIER),
    RangeRecord::new(0x055A, 0x055F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0560, 0x0588, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x0589, 0x0589, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x058A, 0x058A, Category::PUNCTUATION_DASH),
    RangeRecord::new(0x058D, 0x058E, Category::SYMBOL_OTHER),
    RangeRecord::new(0x058F, 0x058F, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0x0591, 0x05BD, Category::MARK_NON_SPACING),
    RangeRecord::new(0x05BE, 0x05BE, Category::PUNCTUATION_DASH),
    RangeRecord::new(0x05BF, 0x05BF, Category::MARK_NON_SPACING),
    RangeRecord::new(0x05C0, 0x05C0, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x05C1, 0x05C2, Category::MARK_NON_SPACING),
    RangeRecord::new(0x05C3, 0x05C3, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x05C4, 0x05C5, Category::MARK_NON_SPACING),
    RangeRecord::new(0x05C6, 0x05C6, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x05C7, 0x05C7, Category::MARK_NON_SPACING),
    RangeRecord::new(0x05D0, 0x05EA, Category::LETTER_OTHER),
    RangeRecord::new(0x05EF, 0x05F2, Category::LETTER_OTHER),
    RangeRecord::new(0x05F3, 0x05F4, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0600, 0x0605, Category::FORMAT),
    RangeRecord::new(0x0606, 0x0608, Category::SYMBOL_MATH),
    RangeRecord::new(0x0609, 0x060A, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x060B, 0x060B, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0x060C, 0x060D, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x060E, 0x060F, Category::SYMBOL_OTHER),
    RangeRecord::new(0x0610, 0x061A, Category::MARK_NON_SPACING),
    RangeRecord::new(0x061B, 0x061B, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x061C, 0x061C, Category::FORMAT),
    RangeRecord::new(0x061D, 0x061F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0620, 0x063F, Category::LETTER_OTHER),
    RangeRecord::new(0x0640, 0x0640, Category::LETTER_MODIFIER),
    RangeRecord::new(0x0641, 0x064A, Category::LETTER_OTHER),
    RangeRecord::new(0x064B, 0x065F, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0660, 0x0669, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x066A, 0x066D, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x066E, 0x066F, Category::LETTER_OTHER),
    RangeRecord::new(0x0670, 0x0670, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0671, 0x06D3, Category::LETTER_OTHER),
    RangeRecord::new(0x06D4, 0x06D4, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x06D5, 0x06D5, Category::LETTER_OTHER),
    RangeRecord::new(0x06D6, 0x06DC, Category::MARK_NON_SPACING),
    RangeRecord::new(0x06DD, 0x06DD, Category::FORMAT),
    RangeRecord::new(0x06DE, 0x06DE, Category::SYMBOL_OTHER),
    RangeRecord::new(0x06DF, 0x06E4, Category::MARK_NON_SPACING),
    RangeRecord::new(0x06E5, 0x06E6, Category::LETTER_MODIFIER),
    RangeRecord::new(0x06E7, 0x06E8, Category::MARK_NON_SPACING),
    RangeRecord::new(0x06E9, 0x06E9, Category::SYMBOL_OTHER),
    RangeRecord::new(0x06EA, 0x06ED, Category::MARK_NON_SPACING),
    RangeRecord::new(0x06EE, 0x06EF, Category::LETTER_OTHER),
    RangeRecord::new(0x06F0, 0x06F9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x06FA, 0x06FC, Category::LETTER_OTHER),
    RangeRecord::new(0x06FD, 0x06FE, Category::SYMBOL_OTHER),
    RangeRecord::new(0x06FF, 0x06FF, Category::LETTER_OTHER),
    RangeRecord::new(0x0700, 0x070D, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x070F, 0x070F, Category::FORMAT),
    RangeRecord::new(0x0710, 0x0710, Category::LETTER_OTHER),
    RangeRecord::new(0x0711, 0x0711, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0712, 0x072F, Category::LETTER_OTHER),
    RangeRecord::new(0x0730, 0x074A, Category::MARK_NON_SPACING),
    RangeRecord::new(0x074D, 0x07A5, Category::LETTER_OTHER),
    RangeRecord::new(0x07A6, 0x07B0, Category::MARK_NON_SPACING),
    RangeRecord::new(0x07B1, 0x07B1, Category::LETTER_OTHER),
    RangeRecord::new(0x07C0, 0x07C9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x07CA, 0x07EA, Category::LETTER_OTHER),
    RangeRecord::new(0x07EB, 0x07F3, Category::MARK_NON_SPACING),
    RangeRecord::new(0x07F4, 0x07F5, Category::LETTER_MODIFIER),
    RangeRecord::new(0x07F6, 0x07F6, Category::SYMBOL_OTHER),
    RangeRecord::new(0x07F7, 0x07F9, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x07FA, 0x07FA, Category::LETTER_MODIFIER),
    RangeRecord::new(0x07FD, 0x07FD, Category::MARK_NON_SPACING),
    RangeRecord::new(0x07FE, 0x07FF, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0x0800, 0x0815, Category::LETTER_OTHER),
    RangeRecord::new(0x0816, 0x0819, Category::MARK_NON_SPACING),
    RangeRecord::new(0x081A, 0x081A, Category::LETTER_MODIFIER),
    RangeRecord::new(0x081B, 0x0823, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0824, 0x0824, Category::LETTER_MODIFIER),
    RangeRecord::new(0x0825, 0x0827, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0828, 0x0828, Category::LETTER_MODIFIER),
    RangeRecord::new(0x0829, 0x082D, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0830, 0x083E, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0840, 0x0858, Category::LETTER_OTHER),
    RangeRecord::new(0x0859, 0x085B, Category::MARK_NON_SPACING),
    RangeRecord::new(0x085E, 0x085E, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0860, 0x086A, Category::LETTER_OTHER),
    RangeRecord::new(0x0870, 0x0887, Category::LETTER_OTHER),
    RangeRecord::new(0x0888, 0x0888, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x0889, 0x088E, Category::LETTER_OTHER),
    RangeRecord::new(0x0890, 0x0891, Category::FORMAT),
    RangeRecord::new(0x0898, 0x089F, Category::MARK_NON_SPACING),
    RangeRecord::new(0x08A0, 0x08C8, Category::LETTER_OTHER),
    RangeRecord::new(0x08C9, 0x08C9, Category::LETTER_MODIFIER),
    RangeRecord::new(0x08CA, 0x08E1, Category::MARK_NON_SPACING),
    RangeRecord::new(0x08E2, 0x08E2, Category::FORMAT),
    RangeRecord::new(0x08E3, 0x0902, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0903, 0x0903, Category::MARK_SPACING),
    RangeRecord::new(0x0904, 0x0939, Category::LETTER_OTHER),
    RangeRecord::new(0x093A, 0x093A, Category::MARK_NON_SPACING),
    RangeRecord::new(0x093B, 0x093B, Category::MARK_SPACING),
    RangeRecord::new(0x093C, 0x093C, Category::MARK_NON_SPACING),
    RangeRecord::new(0x093D, 0x093D, Category::LETTER_OTHER),
    RangeRecord::new(0x093E, 0x0940, Category::MARK_SPACING),
    RangeRecord::new(0x0941, 0x0948, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0949, 0x094C, Category::MARK_SPACING),
    RangeRecord::new(0x094D, 0x094D, Category::MARK_NON_SPACING),
    RangeRecord::new(0x094E, 0x094F, Category::MARK_SPACING),
    RangeRecord::new(0x0950, 0x0950, Category::LETTER_OTHER),
    RangeRecord::new(0x0951, 0x0957, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0958, 0x0961, Category::LETTER_OTHER),
    RangeRecord::new(0x0962, 0x0963, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0964, 0x0965, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0966, 0x096F, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x0970, 0x0970, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0971, 0x0971, Category::LETTER_MODIFIER),
    RangeRecord::new(0x0972, 0x0980, Category::LETTER_OTHER),
    RangeRecord::new(0x0981, 0x0981, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0982, 0x0983, Category::MARK_SPACING),
    RangeRecord::new(0x0985, 0x098C, Category::LETTER_OTHER),
    RangeRecord::new(0x098F, 0x0990, Category::LETTER_OTHER),
    RangeRecord::new(0x0993, 0x09A8, Category::LETTER_OTHER),
    RangeRecord::new(0x09AA, 0x09B0, Category::LETTER_OTHER),
    RangeRecord::new(0x09B2, 0x09B2, Category::LETTER_OTHER),
    RangeRecord::new(0x09B6, 0x09B9, Category::LETTER_OTHER),
    RangeRecord::new(0x09BC, 0x09BC, Category::MARK_NON_SPACING),
    RangeRecord::new(0x09BD, 0x09BD, Category::LETTER_OTHER),
    RangeRecord::new(0x09BE, 0x09C0, Category::MARK_SPACING),
    RangeRecord::new(0x09C1, 0x09C4, Category::MARK_NON_SPACING),
    RangeRecord::new(0x09C7, 0x09C8, Category::MARK_SPACING),
    RangeRecord::new(0x09CB, 0x09CC, Category::MARK_SPACING),
    RangeRecord::new(0x09CD, 0x09CD, Category::MARK_NON_SPACING),
    RangeRecord::new(0x09CE, 0x09CE, Category::LETTER_OTHER),
    RangeRecord::new(0x09D7, 0x09D7, Category::MARK_SPACING),
    RangeRecord::new(0x09DC, 0x09DD, Category::LETTER_OTHER),
    RangeRecord::new(0x09DF, 0x09E1, Category::LETTER_OTHER),
    RangeRecord::new(0x09E2, 0x09E3, Category::MARK_NON_SPACING),
    RangeRecord::new(0x09E6, 0x09EF, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x09F0, 0x09F1, Category::LETTER_OTHER),
    RangeRecord::new(0x09F2, 0x09F3, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0x09F4, 0x09F9, Category::NUMBER_OTHER),
    RangeRecord::new(0x09FA, 0x09FA, Category::SYMBOL_OTHER),
    RangeRecord::new(0x09FB, 0x09FB, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0x09FC, 0x09FC, Category::LETTER_OTHER),
    RangeRecord::new(0x09FD, 0x09FD, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x09FE, 0x09FE, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0A01, 0x0A02, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0A03, 0x0A03, Category::MARK_SPACING),
    RangeRecord::new(0x0A05, 0x0A0A, Category::LETTER_OTHER),
    RangeRecord::new(0x0A0F, 0x0A10, Category::LETTER_OTHER),
    RangeRecord::new(0x0A13, 0x0A28, Category::LETTER_OTHER),
    RangeRecord::new(0x0A2A, 0x0A30, Category::LETTER_OTHER),
    RangeRecord::new(0x0A32, 0x0A33, Category::LETTER_OTHER),
    RangeRecord::new(0x0A35, 0x0A36, Category::LETTER_OTHER),
    RangeRecord::new(0x0A38, 0x0A39, Category::LETTER_OTHER),
    RangeRecord::new(0x0A3C, 0x0A3C, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0A3E, 0x0A40, Category::MARK_SPACING),
    RangeRecord::new(0x0A41, 0x0A42, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0A47, 0x0A48, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0A4B, 0x0A4D, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0A51, 0x0A51, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0A59, 0x0A5C, Category::LETTER_OTHER),
    RangeRecord::new(0x0A5E, 0x0A5E, Category::LETTER_OTHER),
    RangeRecord::new(0x0A66, 0x0A6F, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x0A70, 0x0A71, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0A72, 0x0A74, Category::LETTER_OTHER),
    RangeRecord::new(0x0A75, 0x0A75, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0A76, 0x0A76, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0A81, 0x0A82, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0A83, 0x0A83, Category::MARK_SPACING),
    RangeRecord::new(0x0A85, 0x0A8D, Category::LETTER_OTHER),
    RangeRecord::new(0x0A8F, 0x0A91, Category::LETTER_OTHER),
    RangeRecord::new(0x0A93, 0x0AA8, Category::LETTER_OTHER),
    RangeRecord::new(0x0AAA, 0x0AB0, Category::LETTER_OTHER),
    RangeRecord::new(0x0AB2, 0x0AB3, Category::LETTER_OTHER),
    RangeRecord::new(0x0AB5, 0x0AB9, Category::LETTER_OTHER),
    RangeRecord::new(0x0ABC, 0x0ABC, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0ABD, 0x0ABD, Category::LETTER_OTHER),
    RangeRecord::new(0x0ABE, 0x0AC0, Category::MARK_SPACING),
    RangeRecord::new(0x0AC1, 0x0AC5, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0AC7, 0x0AC8, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0AC9, 0x0AC9, Category::MARK_SPACING),
    RangeRecord::new(0x0ACB, 0x0ACC, Category::MARK_SPACING),
    RangeRecord::new(0x0ACD, 0x0ACD, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0AD0, 0x0AD0, Category::LETTER_OTHER),
    RangeRecord::new(0x0AE0, 0x0AE1, Category::LETTER_OTHER),
    RangeRecord::new(0x0AE2, 0x0AE3, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0AE6, 0x0AEF, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x0AF0, 0x0AF0, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0AF1, 0x0AF1, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0x0AF9, 0x0AF9, Category::LETTER_OTHER),
    RangeRecord::new(0x0AFA, 0x0AFF, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0B01, 0x0B01, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0B02, 0x0B03, Category::MARK_SPACING),
    RangeRecord::new(0x0B05, 0x0B0C, Category::LETTER_OTHER),
    RangeRecord::new(0x0B0F, 0x0B10, Category::LETTER_OTHER),
    RangeRecord::new(0x0B13, 0x0B28, Category::LETTER_OTHER),
    RangeRecord::new(0x0B2A, 0x0B30, Category::LETTER_OTHER),
    RangeRecord::new(0x0B32, 0x0B33, Category::LETTER_OTHER),
    RangeRecord::new(0x0B35, 0x0B39, Category::LETTER_OTHER),
    RangeRecord::new(0x0B3C, 0x0B3C, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0B3D, 0x0B3D, Category::LETTER_OTHER),
    RangeRecord::new(0x0B3E, 0x0B3E, Category::MARK_SPACING),
    RangeRecord::new(0x0B3F, 0x0B3F, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0B40, 0x0B40, Category::MARK_SPACING),
    RangeRecord::new(0x0B41, 0x0B44, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0B47, 0x0B48, Category::MARK_SPACING),
    RangeRecord::new(0x0B4B, 0x0B4C, Category::MARK_SPACING),
    RangeRecord::new(0x0B4D, 0x0B4D, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0B55, 0x0B56, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0B57, 0x0B57, Category::MARK_SPACING),
    RangeRecord::new(0x0B5C, 0x0B5D, Category::LETTER_OTHER),
    RangeRecord::new(0x0B5F, 0x0B61, Category::LETTER_OTHER),
    RangeRecord::new(0x0B62, 0x0B63, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0B66, 0x0B6F, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x0B70, 0x0B70, Category::SYMBOL_OTHER),
    RangeRecord::new(0x0B71, 0x0B71, Category::LETTER_OTHER),
    RangeRecord::new(0x0B72, 0x0B77, Category::NUMBER_OTHER),
    RangeRecord::new(0x0B82, 0x0B82, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0B83, 0x0B83, Category::LETTER_OTHER),
    RangeRecord::new(0x0B85, 0x0B8A, Category::LETTER_OTHER),
    RangeRecord::new(0x0B8E, 0x0B90, Category::LETTER_OTHER),
    RangeRecord::new(0x0B92, 0x0B95, Category::LETTER_OTHER),
    RangeRecord::new(0x0B99, 0x0B9A, Category::LETTER_OTHER),
    RangeRecord::new(0x0B9C, 0x0B9C, Category::LETTER_OTHER),
    RangeRecord::new(0x0B9E, 0x0B9F, Category::LETTER_OTHER),
    RangeRecord::new(0x0BA3, 0x0BA4, Category::LETTER_OTHER),
    RangeRecord::new(0x0BA8, 0x0BAA, Category::LETTER_OTHER),
    RangeRecord::new(0x0BAE, 0x0BB9, Category::LETTER_OTHER),
    RangeRecord::new(0x0BBE, 0x0BBF, Category::MARK_SPACING),
    RangeRecord::new(0x0BC0, 0x0BC0, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0BC1, 0x0BC2, Category::MARK_SPACING),
    RangeRecord::new(0x0BC6, 0x0BC8, Category::MARK_SPACING),
    RangeRecord::new(0x0BCA, 0x0BCC, Category::MARK_SPACING),
    RangeRecord::new(0x0BCD, 0x0BCD, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0BD0, 0x0BD0, Category::LETTER_OTHER),
    RangeRecord::new(0x0BD7, 0x0BD7, Category::MARK_SPACING),
    RangeRecord::new(0x0BE6, 0x0BEF, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x0BF0, 0x0BF2, Category::NUMBER_OTHER),
    RangeRecord::new(0x0BF3, 0x0BF8, Category::SYMBOL_OTHER),
    RangeRecord::new(0x0BF9, 0x0BF9, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0x0BFA, 0x0BFA, Category::SYMBOL_OTHER),
    RangeRecord::new(0x0C00, 0x0C00, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0C01, 0x0C03, Category::MARK_SPACING),
    RangeRecord::new(0x0C04, 0x0C04, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0C05, 0x0C0C, Category::LETTER_OTHER),
    RangeRecord::new(0x0C0E, 0x0C10, Category::LETTER_OTHER),
    RangeRecord::new(0x0C12, 0x0C28, Category::LETTER_OTHER),
    RangeRecord::new(0x0C2A, 0x0C39, Category::LETTER_OTHER),
    RangeRecord::new(0x0C3C, 0x0C3C, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0C3D, 0x0C3D, Category::LETTER_OTHER),
    RangeRecord::new(0x0C3E, 0x0C40, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0C41, 0x0C44, Category::MARK_SPACING),
    RangeRecord::new(0x0C46, 0x0C48, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0C4A, 0x0C4D, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0C55, 0x0C56, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0C58, 0x0C5A, Category::LETTER_OTHER),
    RangeRecord::new(0x0C5D, 0x0C5D, Category::LETTER_OTHER),
    RangeRecord::new(0x0C60, 0x0C61, Category::LETTER_OTHER),
    RangeRecord::new(0x0C62, 0x0C63, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0C66, 0x0C6F, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x0C77, 0x0C77, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0C78, 0x0C7E, Category::NUMBER_OTHER),
    RangeRecord::new(0x0C7F, 0x0C7F, Category::SYMBOL_OTHER),
    RangeRecord::new(0x0C80, 0x0C80, Category::LETTER_OTHER),
    RangeRecord::new(0x0C81, 0x0C81, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0C82, 0x0C83, Category::MARK_SPACING),
    RangeRecord::new(0x0C84, 0x0C84, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0C85, 0x0C8C, Category::LETTER_OTHER),
    RangeRecord::new(0x0C8E, 0x0C90, Category::LETTER_OTHER),
    RangeRecord::new(0x0C92, 0x0CA8, Category::LETTER_OTHER),
    RangeRecord::new(0x0CAA, 0x0CB3, Category::LETTER_OTHER),
    RangeRecord::new(0x0CB5, 0x0CB9, Category::LETTER_OTHER),
    RangeRecord::new(0x0CBC, 0x0CBC, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0CBD, 0x0CBD, Category::LETTER_OTHER),
    RangeRecord::new(0x0CBE, 0x0CBE, Category::MARK_SPACING),
    RangeRecord::new(0x0CBF, 0x0CBF, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0CC0, 0x0CC4, Category::MARK_SPACING),
    RangeRecord::new(0x0CC6, 0x0CC6, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0CC7, 0x0CC8, Category::MARK_SPACING),
    RangeRecord::new(0x0CCA, 0x0CCB, Category::MARK_SPACING),
    RangeRecord::new(0x0CCC, 0x0CCD, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0CD5, 0x0CD6, Category::MARK_SPACING),
    RangeRecord::new(0x0CDD, 0x0CDE, Category::LETTER_OTHER),
    RangeRecord::new(0x0CE0, 0x0CE1, Category::LETTER_OTHER),
    RangeRecord::new(0x0CE2, 0x0CE3, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0CE6, 0x0CEF, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x0CF1, 0x0CF2, Category::LETTER_OTHER),
    RangeRecord::new(0x0CF3, 0x0CF3, Category::MARK_SPACING),
    RangeRecord::new(0x0D00, 0x0D01, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0D02, 0x0D03, Category::MARK_SPACING),
    RangeRecord::new(0x0D04, 0x0D0C, Category::LETTER_OTHER),
    RangeRecord::new(0x0D0E, 0x0D10, Category::LETTER_OTHER),
    RangeRecord::new(0x0D12, 0x0D3A, Category::LETTER_OTHER),
    RangeRecord::new(0x0D3B, 0x0D3C, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0D3D, 0x0D3D, Category::LETTER_OTHER),
    RangeRecord::new(0x0D3E, 0x0D40, Category::MARK_SPACING),
    RangeRecord::new(0x0D41, 0x0D44, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0D46, 0x0D48, Category::MARK_SPACING),
    RangeRecord::new(0x0D4A, 0x0D4C, Category::MARK_SPACING),
    RangeRecord::new(0x0D4D, 0x0D4D, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0D4E, 0x0D4E, Category::LETTER_OTHER),
    RangeRecord::new(0x0D4F, 0x0D4F, Category::SYMBOL_OTHER),
    RangeRecord::new(0x0D54, 0x0D56, Category::LETTER_OTHER),
    RangeRecord::new(0x0D57, 0x0D57, Category::MARK_SPACING),
    RangeRecord::new(0x0D58, 0x0D5E, Category::NUMBER_OTHER),
    RangeRecord::new(0x0D5F, 0x0D61, Category::LETTER_OTHER),
    RangeRecord::new(0x0D62, 0x0D63, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0D66, 0x0D6F, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x0D70, 0x0D78, Category::NUMBER_OTHER),
    RangeRecord::new(0x0D79, 0x0D79, Category::SYMBOL_OTHER),
    RangeRecord::new(0x0D7A, 0x0D7F, Category::LETTER_OTHER),
    RangeRecord::new(0x0D81, 0x0D81, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0D82, 0x0D83, Category::MARK_SPACING),
    RangeRecord::new(0x0D85, 0x0D96, Category::LETTER_OTHER),
    RangeRecord::new(0x0D9A, 0x0DB1, Category::LETTER_OTHER),
    RangeRecord::new(0x0DB3, 0x0DBB, Category::LETTER_OTHER),
    RangeRecord::new(0x0DBD, 0x0DBD, Category::LETTER_OTHER),
    RangeRecord::new(0x0DC0, 0x0DC6, Category::LETTER_OTHER),
    RangeRecord::new(0x0DCA, 0x0DCA, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0DCF, 0x0DD1, Category::MARK_SPACING),
    RangeRecord::new(0x0DD2, 0x0DD4, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0DD6, 0x0DD6, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0DD8, 0x0DDF, Category::MARK_SPACING),
    RangeRecord::new(0x0DE6, 0x0DEF, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x0DF2, 0x0DF3, Category::MARK_SPACING),
    RangeRecord::new(0x0DF4, 0x0DF4, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0E01, 0x0E30, Category::LETTER_OTHER),
    RangeRecord::new(0x0E31, 0x0E31, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0E32, 0x0E33, Category::LETTER_OTHER),
    RangeRecord::new(0x0E34, 0x0E3A, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0E3F, 0x0E3F, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0x0E40, 0x0E45, Category::LETTER_OTHER),
    RangeRecord::new(0x0E46, 0x0E46, Category::LETTER_MODIFIER),
    RangeRecord::new(0x0E47, 0x0E4E, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0E4F, 0x0E4F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0E50, 0x0E59, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x0E5A, 0x0E5B, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0E81, 0x0E82, Category::LETTER_OTHER),
    RangeRecord::new(0x0E84, 0x0E84, Category::LETTER_OTHER),
    RangeRecord::new(0x0E86, 0x0E8A, Category::LETTER_OTHER),
    RangeRecord::new(0x0E8C, 0x0EA3, Category::LETTER_OTHER),
    RangeRecord::new(0x0EA5, 0x0EA5, Category::LETTER_OTHER),
    RangeRecord::new(0x0EA7, 0x0EB0, Category::LETTER_OTHER),
    RangeRecord::new(0x0EB1, 0x0EB1, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0EB2, 0x0EB3, Category::LETTER_OTHER),
    RangeRecord::new(0x0EB4, 0x0EBC, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0EBD, 0x0EBD, Category::LETTER_OTHER),
    RangeRecord::new(0x0EC0, 0x0EC4, Category::LETTER_OTHER),
    RangeRecord::new(0x0EC6, 0x0EC6, Category::LETTER_MODIFIER),
    RangeRecord::new(0x0EC8, 0x0ECE, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0ED0, 0x0ED9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x0EDC, 0x0EDF, Category::LETTER_OTHER),
    RangeRecord::new(0x0F00, 0x0F00, Category::LETTER_OTHER),
    RangeRecord::new(0x0F01, 0x0F03, Category::SYMBOL_OTHER),
    RangeRecord::new(0x0F04, 0x0F12, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0F13, 0x0F13, Category::SYMBOL_OTHER),
    RangeRecord::new(0x0F14, 0x0F14, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0F15, 0x0F17, Category::SYMBOL_OTHER),
    RangeRecord::new(0x0F18, 0x0F19, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0F1A, 0x0F1F, Category::SYMBOL_OTHER),
    RangeRecord::new(0x0F20, 0x0F29, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x0F2A, 0x0F33, Category::NUMBER_OTHER),
    RangeRecord::new(0x0F34, 0x0F34, Category::SYMBOL_OTHER),
    RangeRecord::new(0x0F35, 0x0F35, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0F36, 0x0F36, Category::SYMBOL_OTHER),
    RangeRecord::new(0x0F37, 0x0F37, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0F38, 0x0F38, Category::SYMBOL_OTHER),
    RangeRecord::new(0x0F39, 0x0F39, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0F3A, 0x0F3A, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x0F3B, 0x0F3B, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x0F3C, 0x0F3C, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x0F3D, 0x0F3D, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x0F3E, 0x0F3F, Category::MARK_SPACING),
    RangeRecord::new(0x0F40, 0x0F47, Category::LETTER_OTHER),
    RangeRecord::new(0x0F49, 0x0F6C, Category::LETTER_OTHER),
    RangeRecord::new(0x0F71, 0x0F7E, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0F7F, 0x0F7F, Category::MARK_SPACING),
    RangeRecord::new(0x0F80, 0x0F84, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0F85, 0x0F85, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0F86, 0x0F87, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0F88, 0x0F8C, Category::LETTER_OTHER),
    RangeRecord::new(0x0F8D, 0x0F97, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0F99, 0x0FBC, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0FBE, 0x0FC5, Category::SYMBOL_OTHER),
    RangeRecord::new(0x0FC6, 0x0FC6, Category::MARK_NON_SPACING),
    RangeRecord::new(0x0FC7, 0x0FCC, Category::SYMBOL_OTHER),
    RangeRecord::new(0x0FCE, 0x0FCF, Category::SYMBOL_OTHER),
    RangeRecord::new(0x0FD0, 0x0FD4, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x0FD5, 0x0FD8, Category::SYMBOL_OTHER),
    RangeRecord::new(0x0FD9, 0x0FDA, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1000, 0x102A, Category::LETTER_OTHER),
    RangeRecord::new(0x102B, 0x102C, Category::MARK_SPACING),
    RangeRecord::new(0x102D, 0x1030, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1031, 0x1031, Category::MARK_SPACING),
    RangeRecord::new(0x1032, 0x1037, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1038, 0x1038, Category::MARK_SPACING),
    RangeRecord::new(0x1039, 0x103A, Category::MARK_NON_SPACING),
    RangeRecord::new(0x103B, 0x103C, Category::MARK_SPACING),
    RangeRecord::new(0x103D, 0x103E, Category::MARK_NON_SPACING),
    RangeRecord::new(0x103F, 0x103F, Category::LETTER_OTHER),
    RangeRecord::new(0x1040, 0x1049, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x104A, 0x104F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1050, 0x1055, Category::LETTER_OTHER),
    RangeRecord::new(0x1056, 0x1057, Category::MARK_SPACING),
    RangeRecord::new(0x1058, 0x1059, Category::MARK_NON_SPACING),
    RangeRecord::new(0x105A, 0x105D, Category::LETTER_OTHER),
    RangeRecord::new(0x105E, 0x1060, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1061, 0x1061, Category::LETTER_OTHER),
    RangeRecord::new(0x1062, 0x1064, Category::MARK_SPACING),
    RangeRecord::new(0x1065, 0x1066, Category::LETTER_OTHER),
    RangeRecord::new(0x1067, 0x106D, Category::MARK_SPACING),
    RangeRecord::new(0x106E, 0x1070, Category::LETTER_OTHER),
    RangeRecord::new(0x1071, 0x1074, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1075, 0x1081, Category::LETTER_OTHER),
    RangeRecord::new(0x1082, 0x1082, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1083, 0x1084, Category::MARK_SPACING),
    RangeRecord::new(0x1085, 0x1086, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1087, 0x108C, Category::MARK_SPACING),
    RangeRecord::new(0x108D, 0x108D, Category::MARK_NON_SPACING),
    RangeRecord::new(0x108E, 0x108E, Category::LETTER_OTHER),
    RangeRecord::new(0x108F, 0x108F, Category::MARK_SPACING),
    RangeRecord::new(0x1090, 0x1099, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x109A, 0x109C, Category::MARK_SPACING),
    RangeRecord::new(0x109D, 0x109D, Category::MARK_NON_SPACING),
    RangeRecord::new(0x109E, 0x109F, Category::SYMBOL_OTHER),
    RangeRecord::new(0x10A0, 0x10C5, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x10C7, 0x10C7, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x10CD, 0x10CD, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x10D0, 0x10FA, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x10FB, 0x10FB, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x10FC, 0x10FC, Category::LETTER_MODIFIER),
    RangeRecord::new(0x10FD, 0x10FF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1100, 0x1248, Category::LETTER_OTHER),
    RangeRecord::new(0x124A, 0x124D, Category::LETTER_OTHER),
    RangeRecord::new(0x1250, 0x1256, Category::LETTER_OTHER),
    RangeRecord::new(0x1258, 0x1258, Category::LETTER_OTHER),
    RangeRecord::new(0x125A, 0x125D, Category::LETTER_OTHER),
    RangeRecord::new(0x1260, 0x1288, Category::LETTER_OTHER),
    RangeRecord::new(0x128A, 0x128D, Category::LETTER_OTHER),
    RangeRecord::new(0x1290, 0x12B0, Category::LETTER_OTHER),
    RangeRecord::new(0x12B2, 0x12B5, Category::LETTER_OTHER),
    RangeRecord::new(0x12B8, 0x12BE, Category::LETTER_OTHER),
    RangeRecord::new(0x12C0, 0x12C0, Category::LETTER_OTHER),
    RangeRecord::new(0x12C2, 0x12C5, Category::LETTER_OTHER),
    RangeRecord::new(0x12C8, 0x12D6, Category::LETTER_OTHER),
    RangeRecord::new(0x12D8, 0x1310, Category::LETTER_OTHER),
    RangeRecord::new(0x1312, 0x1315, Category::LETTER_OTHER),
    RangeRecord::new(0x1318, 0x135A, Category::LETTER_OTHER),
    RangeRecord::new(0x135D, 0x135F, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1360, 0x1368, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1369, 0x137C, Category::NUMBER_OTHER),
    RangeRecord::new(0x1380, 0x138F, Category::LETTER_OTHER),
    RangeRecord::new(0x1390, 0x1399, Category::SYMBOL_OTHER),
    RangeRecord::new(0x13A0, 0x13F5, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x13F8, 0x13FD, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1400, 0x1400, Category::PUNCTUATION_DASH),
    RangeRecord::new(0x1401, 0x166C, Category::LETTER_OTHER),
    RangeRecord::new(0x166D, 0x166D, Category::SYMBOL_OTHER),
    RangeRecord::new(0x166E, 0x166E, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x166F, 0x167F, Category::LETTER_OTHER),
    RangeRecord::new(0x1680, 0x1680, Category::SEPARATOR_SPACE),
    RangeRecord::new(0x1681, 0x169A, Category::LETTER_OTHER),
    RangeRecord::new(0x169B, 0x169B, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x169C, 0x169C, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x16A0, 0x16EA, Category::LETTER_OTHER),
    RangeRecord::new(0x16EB, 0x16ED, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x16EE, 0x16F0, Category::NUMBER_LETTER),
    RangeRecord::new(0x16F1, 0x16F8, Category::LETTER_OTHER),
    RangeRecord::new(0x1700, 0x1711, Category::LETTER_OTHER),
    RangeRecord::new(0x1712, 0x1714, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1715, 0x1715, Category::MARK_SPACING),
    RangeRecord::new(0x171F, 0x1731, Category::LETTER_OTHER),
    RangeRecord::new(0x1732, 0x1733, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1734, 0x1734, Category::MARK_SPACING),
    RangeRecord::new(0x1735, 0x1736, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1740, 0x1751, Category::LETTER_OTHER),
    RangeRecord::new(0x1752, 0x1753, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1760, 0x176C, Category::LETTER_OTHER),
    RangeRecord::new(0x176E, 0x1770, Category::LETTER_OTHER),
    RangeRecord::new(0x1772, 0x1773, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1780, 0x17B3, Category::LETTER_OTHER),
    RangeRecord::new(0x17B4, 0x17B5, Category::MARK_NON_SPACING),
    RangeRecord::new(0x17B6, 0x17B6, Category::MARK_SPACING),
    RangeRecord::new(0x17B7, 0x17BD, Category::MARK_NON_SPACING),
    RangeRecord::new(0x17BE, 0x17C5, Category::MARK_SPACING),
    RangeRecord::new(0x17C6, 0x17C6, Category::MARK_NON_SPACING),
    RangeRecord::new(0x17C7, 0x17C8, Category::MARK_SPACING),
    RangeRecord::new(0x17C9, 0x17D3, Category::MARK_NON_SPACING),
    RangeRecord::new(0x17D4, 0x17D6, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x17D7, 0x17D7, Category::LETTER_MODIFIER),
    RangeRecord::new(0x17D8, 0x17DA, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x17DB, 0x17DB, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0x17DC, 0x17DC, Category::LETTER_OTHER),
    RangeRecord::new(0x17DD, 0x17DD, Category::MARK_NON_SPACING),
    RangeRecord::new(0x17E0, 0x17E9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x17F0, 0x17F9, Category::NUMBER_OTHER),
    RangeRecord::new(0x1800, 0x1805, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1806, 0x1806, Category::PUNCTUATION_DASH),
    RangeRecord::new(0x1807, 0x180A, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x180B, 0x180D, Category::MARK_NON_SPACING),
    RangeRecord::new(0x180E, 0x180E, Category::FORMAT),
    RangeRecord::new(0x180F, 0x180F, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1810, 0x1819, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x1820, 0x1842, Category::LETTER_OTHER),
    RangeRecord::new(0x1843, 0x1843, Category::LETTER_MODIFIER),
    RangeRecord::new(0x1844, 0x1878, Category::LETTER_OTHER),
    RangeRecord::new(0x1880, 0x1884, Category::LETTER_OTHER),
    RangeRecord::new(0x1885, 0x1886, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1887, 0x18A8, Category::LETTER_OTHER),
    RangeRecord::new(0x18A9, 0x18A9, Category::MARK_NON_SPACING),
    RangeRecord::new(0x18AA, 0x18AA, Category::LETTER_OTHER),
    RangeRecord::new(0x18B0, 0x18F5, Category::LETTER_OTHER),
    RangeRecord::new(0x1900, 0x191E, Category::LETTER_OTHER),
    RangeRecord::new(0x1920, 0x1922, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1923, 0x1926, Category::MARK_SPACING),
    RangeRecord::new(0x1927, 0x1928, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1929, 0x192B, Category::MARK_SPACING),
    RangeRecord::new(0x1930, 0x1931, Category::MARK_SPACING),
    RangeRecord::new(0x1932, 0x1932, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1933, 0x1938, Category::MARK_SPACING),
    RangeRecord::new(0x1939, 0x193B, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1940, 0x1940, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1944, 0x1945, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1946, 0x194F, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x1950, 0x196D, Category::LETTER_OTHER),
    RangeRecord::new(0x1970, 0x1974, Category::LETTER_OTHER),
    RangeRecord::new(0x1980, 0x19AB, Category::LETTER_OTHER),
    RangeRecord::new(0x19B0, 0x19C9, Category::LETTER_OTHER),
    RangeRecord::new(0x19D0, 0x19D9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x19DA, 0x19DA, Category::NUMBER_OTHER),
    RangeRecord::new(0x19DE, 0x19FF, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1A00, 0x1A16, Category::LETTER_OTHER),
    RangeRecord::new(0x1A17, 0x1A18, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1A19, 0x1A1A, Category::MARK_SPACING),
    RangeRecord::new(0x1A1B, 0x1A1B, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1A1E, 0x1A1F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1A20, 0x1A54, Category::LETTER_OTHER),
    RangeRecord::new(0x1A55, 0x1A55, Category::MARK_SPACING),
    RangeRecord::new(0x1A56, 0x1A56, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1A57, 0x1A57, Category::MARK_SPACING),
    RangeRecord::new(0x1A58, 0x1A5E, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1A60, 0x1A60, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1A61, 0x1A61, Category::MARK_SPACING),
    RangeRecord::new(0x1A62, 0x1A62, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1A63, 0x1A64, Category::MARK_SPACING),
    RangeRecord::new(0x1A65, 0x1A6C, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1A6D, 0x1A72, Category::MARK_SPACING),
    RangeRecord::new(0x1A73, 0x1A7C, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1A7F, 0x1A7F, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1A80, 0x1A89, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x1A90, 0x1A99, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x1AA0, 0x1AA6, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1AA7, 0x1AA7, Category::LETTER_MODIFIER),
    RangeRecord::new(0x1AA8, 0x1AAD, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1AB0, 0x1ABD, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1ABE, 0x1ABE, Category::MARK_ENCLOSING),
    RangeRecord::new(0x1ABF, 0x1ACE, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1B00, 0x1B03, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1B04, 0x1B04, Category::MARK_SPACING),
    RangeRecord::new(0x1B05, 0x1B33, Category::LETTER_OTHER),
    RangeRecord::new(0x1B34, 0x1B34, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1B35, 0x1B35, Category::MARK_SPACING),
    RangeRecord::new(0x1B36, 0x1B3A, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1B3B, 0x1B3B, Category::MARK_SPACING),
    RangeRecord::new(0x1B3C, 0x1B3C, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1B3D, 0x1B41, Category::MARK_SPACING),
    RangeRecord::new(0x1B42, 0x1B42, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1B43, 0x1B44, Category::MARK_SPACING),
    RangeRecord::new(0x1B45, 0x1B4C, Category::LETTER_OTHER),
    RangeRecord::new(0x1B50, 0x1B59, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x1B5A, 0x1B60, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1B61, 0x1B6A, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1B6B, 0x1B73, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1B74, 0x1B7C, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1B7D, 0x1B7E, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1B80, 0x1B81, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1B82, 0x1B82, Category::MARK_SPACING),
    RangeRecord::new(0x1B83, 0x1BA0, Category::LETTER_OTHER),
    RangeRecord::new(0x1BA1, 0x1BA1, Category::MARK_SPACING),
    RangeRecord::new(0x1BA2, 0x1BA5, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1BA6, 0x1BA7, Category::MARK_SPACING),
    RangeRecord::new(0x1BA8, 0x1BA9, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1BAA, 0x1BAA, Category::MARK_SPACING),
    RangeRecord::new(0x1BAB, 0x1BAD, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1BAE, 0x1BAF, Category::LETTER_OTHER),
    RangeRecord::new(0x1BB0, 0x1BB9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x1BBA, 0x1BE5, Category::LETTER_OTHER),
    RangeRecord::new(0x1BE6, 0x1BE6, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1BE7, 0x1BE7, Category::MARK_SPACING),
    RangeRecord::new(0x1BE8, 0x1BE9, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1BEA, 0x1BEC, Category::MARK_SPACING),
    RangeRecord::new(0x1BED, 0x1BED, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1BEE, 0x1BEE, Category::MARK_SPACING),
    RangeRecord::new(0x1BEF, 0x1BF1, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1BF2, 0x1BF3, Category::MARK_SPACING),
    RangeRecord::new(0x1BFC, 0x1BFF, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1C00, 0x1C23, Category::LETTER_OTHER),
    RangeRecord::new(0x1C24, 0x1C2B, Category::MARK_SPACING),
    RangeRecord::new(0x1C2C, 0x1C33, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1C34, 0x1C35, Category::MARK_SPACING),
    RangeRecord::new(0x1C36, 0x1C37, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1C3B, 0x1C3F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1C40, 0x1C49, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x1C4D, 0x1C4F, Category::LETTER_OTHER),
    RangeRecord::new(0x1C50, 0x1C59, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x1C5A, 0x1C77, Category::LETTER_OTHER),
    RangeRecord::new(0x1C78, 0x1C7D, Category::LETTER_MODIFIER),
    RangeRecord::new(0x1C7E, 0x1C7F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1C80, 0x1C88, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1C90, 0x1CBA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1CBD, 0x1CBF, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1CC0, 0x1CC7, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1CD0, 0x1CD2, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1CD3, 0x1CD3, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1CD4, 0x1CE0, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1CE1, 0x1CE1, Category::MARK_SPACING),
    RangeRecord::new(0x1CE2, 0x1CE8, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1CE9, 0x1CEC, Category::LETTER_OTHER),
    RangeRecord::new(0x1CED, 0x1CED, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1CEE, 0x1CF3, Category::LETTER_OTHER),
    RangeRecord::new(0x1CF4, 0x1CF4, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1CF5, 0x1CF6, Category::LETTER_OTHER),
    RangeRecord::new(0x1CF7, 0x1CF7, Category::MARK_SPACING),
    RangeRecord::new(0x1CF8, 0x1CF9, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1CFA, 0x1CFA, Category::LETTER_OTHER),
    RangeRecord::new(0x1D00, 0x1D2B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D2C, 0x1D6A, Category::LETTER_MODIFIER),
    RangeRecord::new(0x1D6B, 0x1D77, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D78, 0x1D78, Category::LETTER_MODIFIER),
    RangeRecord::new(0x1D79, 0x1D9A, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D9B, 0x1DBF, Category::LETTER_MODIFIER),
    RangeRecord::new(0x1DC0, 0x1DFF, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1E00, 0x1E00, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E01, 0x1E01, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E02, 0x1E02, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E03, 0x1E03, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E04, 0x1E04, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E05, 0x1E05, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E06, 0x1E06, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E07, 0x1E07, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E08, 0x1E08, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E09, 0x1E09, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E0A, 0x1E0A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E0B, 0x1E0B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E0C, 0x1E0C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E0D, 0x1E0D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E0E, 0x1E0E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E0F, 0x1E0F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E10, 0x1E10, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E11, 0x1E11, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E12, 0x1E12, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E13, 0x1E13, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E14, 0x1E14, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E15, 0x1E15, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E16, 0x1E16, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E17, 0x1E17, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E18, 0x1E18, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E19, 0x1E19, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E1A, 0x1E1A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E1B, 0x1E1B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E1C, 0x1E1C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E1D, 0x1E1D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E1E, 0x1E1E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E1F, 0x1E1F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E20, 0x1E20, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E21, 0x1E21, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E22, 0x1E22, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E23, 0x1E23, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E24, 0x1E24, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E25, 0x1E25, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E26, 0x1E26, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E27, 0x1E27, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E28, 0x1E28, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E29, 0x1E29, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E2A, 0x1E2A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E2B, 0x1E2B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E2C, 0x1E2C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E2D, 0x1E2D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E2E, 0x1E2E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E2F, 0x1E2F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E30, 0x1E30, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E31, 0x1E31, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E32, 0x1E32, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E33, 0x1E33, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E34, 0x1E34, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E35, 0x1E35, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E36, 0x1E36, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E37, 0x1E37, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E38, 0x1E38, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E39, 0x1E39, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E3A, 0x1E3A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E3B, 0x1E3B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E3C, 0x1E3C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E3D, 0x1E3D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E3E, 0x1E3E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E3F, 0x1E3F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E40, 0x1E40, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E41, 0x1E41, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E42, 0x1E42, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E43, 0x1E43, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E44, 0x1E44, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E45, 0x1E45, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E46, 0x1E46, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E47, 0x1E47, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E48, 0x1E48, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E49, 0x1E49, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E4A, 0x1E4A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E4B, 0x1E4B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E4C, 0x1E4C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E4D, 0x1E4D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E4E, 0x1E4E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E4F, 0x1E4F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E50, 0x1E50, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E51, 0x1E51, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E52, 0x1E52, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E53, 0x1E53, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E54, 0x1E54, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E55, 0x1E55, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E56, 0x1E56, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E57, 0x1E57, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E58, 0x1E58, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E59, 0x1E59, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E5A, 0x1E5A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E5B, 0x1E5B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E5C, 0x1E5C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E5D, 0x1E5D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E5E, 0x1E5E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E5F, 0x1E5F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E60, 0x1E60, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E61, 0x1E61, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E62, 0x1E62, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E63, 0x1E63, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E64, 0x1E64, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E65, 0x1E65, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E66, 0x1E66, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E67, 0x1E67, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E68, 0x1E68, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E69, 0x1E69, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E6A, 0x1E6A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E6B, 0x1E6B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E6C, 0x1E6C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E6D, 0x1E6D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E6E, 0x1E6E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E6F, 0x1E6F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E70, 0x1E70, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E71, 0x1E71, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E72, 0x1E72, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E73, 0x1E73, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E74, 0x1E74, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E75, 0x1E75, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E76, 0x1E76, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E77, 0x1E77, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E78, 0x1E78, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E79, 0x1E79, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E7A, 0x1E7A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E7B, 0x1E7B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E7C, 0x1E7C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E7D, 0x1E7D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E7E, 0x1E7E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E7F, 0x1E7F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E80, 0x1E80, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E81, 0x1E81, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E82, 0x1E82, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E83, 0x1E83, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E84, 0x1E84, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E85, 0x1E85, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E86, 0x1E86, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E87, 0x1E87, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E88, 0x1E88, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E89, 0x1E89, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E8A, 0x1E8A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E8B, 0x1E8B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E8C, 0x1E8C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E8D, 0x1E8D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E8E, 0x1E8E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E8F, 0x1E8F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E90, 0x1E90, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E91, 0x1E91, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E92, 0x1E92, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E93, 0x1E93, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E94, 0x1E94, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E95, 0x1E9D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E9E, 0x1E9E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E9F, 0x1E9F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EA0, 0x1EA0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EA1, 0x1EA1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EA2, 0x1EA2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EA3, 0x1EA3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EA4, 0x1EA4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EA5, 0x1EA5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EA6, 0x1EA6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EA7, 0x1EA7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EA8, 0x1EA8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EA9, 0x1EA9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EAA, 0x1EAA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EAB, 0x1EAB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EAC, 0x1EAC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EAD, 0x1EAD, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EAE, 0x1EAE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EAF, 0x1EAF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EB0, 0x1EB0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EB1, 0x1EB1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EB2, 0x1EB2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EB3, 0x1EB3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EB4, 0x1EB4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EB5, 0x1EB5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EB6, 0x1EB6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EB7, 0x1EB7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EB8, 0x1EB8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EB9, 0x1EB9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EBA, 0x1EBA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EBB, 0x1EBB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EBC, 0x1EBC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EBD, 0x1EBD, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EBE, 0x1EBE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EBF, 0x1EBF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EC0, 0x1EC0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EC1, 0x1EC1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EC2, 0x1EC2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EC3, 0x1EC3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EC4, 0x1EC4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EC5, 0x1EC5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EC6, 0x1EC6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EC7, 0x1EC7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EC8, 0x1EC8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EC9, 0x1EC9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1ECA, 0x1ECA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1ECB, 0x1ECB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1ECC, 0x1ECC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1ECD, 0x1ECD, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1ECE, 0x1ECE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1ECF, 0x1ECF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1ED0, 0x1ED0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1ED1, 0x1ED1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1ED2, 0x1ED2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1ED3, 0x1ED3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1ED4, 0x1ED4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1ED5, 0x1ED5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1ED6, 0x1ED6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1ED7, 0x1ED7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1ED8, 0x1ED8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1ED9, 0x1ED9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EDA, 0x1EDA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EDB, 0x1EDB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EDC, 0x1EDC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EDD, 0x1EDD, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EDE, 0x1EDE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EDF, 0x1EDF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EE0, 0x1EE0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EE1, 0x1EE1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EE2, 0x1EE2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EE3, 0x1EE3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EE4, 0x1EE4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EE5, 0x1EE5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EE6, 0x1EE6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EE7, 0x1EE7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EE8, 0x1EE8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EE9, 0x1EE9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EEA, 0x1EEA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EEB, 0x1EEB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EEC, 0x1EEC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EED, 0x1EED, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EEE, 0x1EEE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EEF, 0x1EEF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EF0, 0x1EF0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EF1, 0x1EF1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EF2, 0x1EF2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EF3, 0x1EF3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EF4, 0x1EF4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EF5, 0x1EF5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EF6, 0x1EF6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EF7, 0x1EF7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EF8, 0x1EF8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EF9, 0x1EF9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EFA, 0x1EFA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EFB, 0x1EFB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EFC, 0x1EFC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EFD, 0x1EFD, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1EFE, 0x1EFE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1EFF, 0x1F07, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1F08, 0x1F0F, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1F10, 0x1F15, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1F18, 0x1F1D, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1F20, 0x1F27, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1F28, 0x1F2F, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1F30, 0x1F37, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1F38, 0x1F3F, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1F40, 0x1F45, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1F48, 0x1F4D, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1F50, 0x1F57, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1F59, 0x1F59, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1F5B, 0x1F5B, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1F5D, 0x1F5D, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1F5F, 0x1F5F, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1F60, 0x1F67, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1F68, 0x1F6F, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1F70, 0x1F7D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1F80, 0x1F87, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1F88, 0x1F8F, Category::LETTER_TITLECASE),
    RangeRecord::new(0x1F90, 0x1F97, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1F98, 0x1F9F, Category::LETTER_TITLECASE),
    RangeRecord::new(0x1FA0, 0x1FA7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1FA8, 0x1FAF, Category::LETTER_TITLECASE),
    RangeRecord::new(0x1FB0, 0x1FB4, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1FB6, 0x1FB7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1FB8, 0x1FBB, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1FBC, 0x1FBC, Category::LETTER_TITLECASE),
    RangeRecord::new(0x1FBD, 0x1FBD, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x1FBE, 0x1FBE, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1FBF, 0x1FC1, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x1FC2, 0x1FC4, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1FC6, 0x1FC7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1FC8, 0x1FCB, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1FCC, 0x1FCC, Category::LETTER_TITLECASE),
    RangeRecord::new(0x1FCD, 0x1FCF, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x1FD0, 0x1FD3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1FD6, 0x1FD7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1FD8, 0x1FDB, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1FDD, 0x1FDF, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x1FE0, 0x1FE7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1FE8, 0x1FEC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1FED, 0x1FEF, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x1FF2, 0x1FF4, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1FF6, 0x1FF7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1FF8, 0x1FFB, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1FFC, 0x1FFC, Category::LETTER_TITLECASE),
    RangeRecord::new(0x1FFD, 0x1FFE, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x2000, 0x200A, Category::SEPARATOR_SPACE),
    RangeRecord::new(0x200B, 0x200F, Category::FORMAT),
    RangeRecord::new(0x2010, 0x2015, Category::PUNCTUATION_DASH),
    RangeRecord::new(0x2016, 0x2017, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2018, 0x2018, Category::PUNCTUATION_INITIAL),
    RangeRecord::new(0x2019, 0x2019, Category::PUNCTUATION_FINAL),
    RangeRecord::new(0x201A, 0x201A, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x201B, 0x201C, Category::PUNCTUATION_INITIAL),
    RangeRecord::new(0x201D, 0x201D, Category::PUNCTUATION_FINAL),
    RangeRecord::new(0x201E, 0x201E, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x201F, 0x201F, Category::PUNCTUATION_INITIAL),
    RangeRecord::new(0x2020, 0x2027, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2028, 0x2028, Category::SEPARATOR_LINE),
    RangeRecord::new(0x2029, 0x2029, Category::SEPARATOR_PARAGRAPH),
    RangeRecord::new(0x202A, 0x202E, Category::FORMAT),
    RangeRecord::new(0x202F, 0x202F, Category::SEPARATOR_SPACE),
    RangeRecord::new(0x2030, 0x2038, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2039, 0x2039, Category::PUNCTUATION_INITIAL),
    RangeRecord::new(0x203A, 0x203A, Category::PUNCTUATION_FINAL),
    RangeRecord::new(0x203B, 0x203E, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x203F, 0x2040, Category::PUNCTUATION_CONNECTOR),
    RangeRecord::new(0x2041, 0x2043, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2044, 0x2044, Category::SYMBOL_MATH),
    RangeRecord::new(0x2045, 0x2045, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2046, 0x2046, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2047, 0x2051, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2052, 0x2052, Category::SYMBOL_MATH),
    RangeRecord::new(0x2053, 0x2053, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2054, 0x2054, Category::PUNCTUATION_CONNECTOR),
    RangeRecord::new(0x2055, 0x205E, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x205F, 0x205F, Category::SEPARATOR_SPACE),
    RangeRecord::new(0x2060, 0x2064, Category::FORMAT),
    RangeRecord::new(0x2066, 0x206F, Category::FORMAT),
    RangeRecord::new(0x2070, 0x2070, Category::NUMBER_OTHER),
    RangeRecord::new(0x2071, 0x2071, Category::LETTER_MODIFIER),
    RangeRecord::new(0x2074, 0x2079, Category::NUMBER_OTHER),
    RangeRecord::new(0x207A, 0x207C, Category::SYMBOL_MATH),
    RangeRecord::new(0x207D, 0x207D, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x207E, 0x207E, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x207F, 0x207F, Category::LETTER_MODIFIER),
    RangeRecord::new(0x2080, 0x2089, Category::NUMBER_OTHER),
    RangeRecord::new(0x208A, 0x208C, Category::SYMBOL_MATH),
    RangeRecord::new(0x208D, 0x208D, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x208E, 0x208E, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2090, 0x209C, Category::LETTER_MODIFIER),
    RangeRecord::new(0x20A0, 0x20C0, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0x20D0, 0x20DC, Category::MARK_NON_SPACING),
    RangeRecord::new(0x20DD, 0x20E0, Category::MARK_ENCLOSING),
    RangeRecord::new(0x20E1, 0x20E1, Category::MARK_NON_SPACING),
    RangeRecord::new(0x20E2, 0x20E4, Category::MARK_ENCLOSING),
    RangeRecord::new(0x20E5, 0x20F0, Category::MARK_NON_SPACING),
    RangeRecord::new(0x2100, 0x2101, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2102, 0x2102, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2103, 0x2106, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2107, 0x2107, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2108, 0x2109, Category::SYMBOL_OTHER),
    RangeRecord::new(0x210A, 0x210A, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x210B, 0x210D, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x210E, 0x210F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2110, 0x2112, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2113, 0x2113, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2114, 0x2114, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2115, 0x2115, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2116, 0x2117, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2118, 0x2118, Category::SYMBOL_MATH),
    RangeRecord::new(0x2119, 0x211D, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x211E, 0x2123, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2124, 0x2124, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2125, 0x2125, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2126, 0x2126, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2127, 0x2127, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2128, 0x2128, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2129, 0x2129, Category::SYMBOL_OTHER),
    RangeRecord::new(0x212A, 0x212D, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x212E, 0x212E, Category::SYMBOL_OTHER),
    RangeRecord::new(0x212F, 0x212F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2130, 0x2133, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2134, 0x2134, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2135, 0x2138, Category::LETTER_OTHER),
    RangeRecord::new(0x2139, 0x2139, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x213A, 0x213B, Category::SYMBOL_OTHER),
    RangeRecord::new(0x213C, 0x213D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x213E, 0x213F, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2140, 0x2144, Category::SYMBOL_MATH),
    RangeRecord::new(0x2145, 0x2145, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2146, 0x2149, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x214A, 0x214A, Category::SYMBOL_OTHER),
    RangeRecord::new(0x214B, 0x214B, Category::SYMBOL_MATH),
    RangeRecord::new(0x214C, 0x214D, Category::SYMBOL_OTHER),
    RangeRecord::new(0x214E, 0x214E, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x214F, 0x214F, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2150, 0x215F, Category::NUMBER_OTHER),
    RangeRecord::new(0x2160, 0x2182, Category::NUMBER_LETTER),
    RangeRecord::new(0x2183, 0x2183, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2184, 0x2184, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2185, 0x2188, Category::NUMBER_LETTER),
    RangeRecord::new(0x2189, 0x2189, Category::NUMBER_OTHER),
    RangeRecord::new(0x218A, 0x218B, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2190, 0x2194, Category::SYMBOL_MATH),
    RangeRecord::new(0x2195, 0x2199, Category::SYMBOL_OTHER),
    RangeRecord::new(0x219A, 0x219B, Category::SYMBOL_MATH),
    RangeRecord::new(0x219C, 0x219F, Category::SYMBOL_OTHER),
    RangeRecord::new(0x21A0, 0x21A0, Category::SYMBOL_MATH),
    RangeRecord::new(0x21A1, 0x21A2, Category::SYMBOL_OTHER),
    RangeRecord::new(0x21A3, 0x21A3, Category::SYMBOL_MATH),
    RangeRecord::new(0x21A4, 0x21A5, Category::SYMBOL_OTHER),
    RangeRecord::new(0x21A6, 0x21A6, Category::SYMBOL_MATH),
    RangeRecord::new(0x21A7, 0x21AD, Category::SYMBOL_OTHER),
    RangeRecord::new(0x21AE, 0x21AE, Category::SYMBOL_MATH),
    RangeRecord::new(0x21AF, 0x21CD, Category::SYMBOL_OTHER),
    RangeRecord::new(0x21CE, 0x21CF, Category::SYMBOL_MATH),
    RangeRecord::new(0x21D0, 0x21D1, Category::SYMBOL_OTHER),
    RangeRecord::new(0x21D2, 0x21D2, Category::SYMBOL_MATH),
    RangeRecord::new(0x21D3, 0x21D3, Category::SYMBOL_OTHER),
    RangeRecord::new(0x21D4, 0x21D4, Category::SYMBOL_MATH),
    RangeRecord::new(0x21D5, 0x21F3, Category::SYMBOL_OTHER),
    RangeRecord::new(0x21F4, 0x22FF, Category::SYMBOL_MATH),
    RangeRecord::new(0x2300, 0x2307, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2308, 0x2308, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2309, 0x2309, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x230A, 0x230A, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x230B, 0x230B, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x230C, 0x231F, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2320, 0x2321, Category::SYMBOL_MATH),
    RangeRecord::new(0x2322, 0x2328, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2329, 0x2329, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x232A, 0x232A, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x232B, 0x237B, Category::SYMBOL_OTHER),
    RangeRecord::new(0x237C, 0x237C, Category::SYMBOL_MATH),
    RangeRecord::new(0x237D, 0x239A, Category::SYMBOL_OTHER),
    RangeRecord::new(0x239B, 0x23B3, Category::SYMBOL_MATH),
    RangeRecord::new(0x23B4, 0x23DB, Category::SYMBOL_OTHER),
    RangeRecord::new(0x23DC, 0x23E1, Category::SYMBOL_MATH),
    RangeRecord::new(0x23E2, 0x2426, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2440, 0x244A, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2460, 0x249B, Category::NUMBER_OTHER),
    RangeRecord::new(0x249C, 0x24E9, Category::SYMBOL_OTHER),
    RangeRecord::new(0x24EA, 0x24FF, Category::NUMBER_OTHER),
    RangeRecord::new(0x2500, 0x25B6, Category::SYMBOL_OTHER),
    RangeRecord::new(0x25B7, 0x25B7, Category::SYMBOL_MATH),
    RangeRecord::new(0x25B8, 0x25C0, Category::SYMBOL_OTHER),
    RangeRecord::new(0x25C1, 0x25C1, Category::SYMBOL_MATH),
    RangeRecord::new(0x25C2, 0x25F7, Category::SYMBOL_OTHER),
    RangeRecord::new(0x25F8, 0x25FF, Category::SYMBOL_MATH),
    RangeRecord::new(0x2600, 0x266E, Category::SYMBOL_OTHER),
    RangeRecord::new(0x266F, 0x266F, Category::SYMBOL_MATH),
    RangeRecord::new(0x2670, 0x2767, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2768, 0x2768, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2769, 0x2769, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x276A, 0x276A, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x276B, 0x276B, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x276C, 0x276C, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x276D, 0x276D, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x276E, 0x276E, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x276F, 0x276F, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2770, 0x2770, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2771, 0x2771, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2772, 0x2772, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2773, 0x2773, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2774, 0x2774, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2775, 0x2775, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2776, 0x2793, Category::NUMBER_OTHER),
    RangeRecord::new(0x2794, 0x27BF, Category::SYMBOL_OTHER),
    RangeRecord::new(0x27C0, 0x27C4, Category::SYMBOL_MATH),
    RangeRecord::new(0x27C5, 0x27C5, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x27C6, 0x27C6, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x27C7, 0x27E5, Category::SYMBOL_MATH),
    RangeRecord::new(0x27E6, 0x27E6, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x27E7, 0x27E7, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x27E8, 0x27E8, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x27E9, 0x27E9, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x27EA, 0x27EA, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x27EB, 0x27EB, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x27EC, 0x27EC, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x27ED, 0x27ED, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x27EE, 0x27EE, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x27EF, 0x27EF, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x27F0, 0x27FF, Category::SYMBOL_MATH),
    RangeRecord::new(0x2800, 0x28FF, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2900, 0x2982, Category::SYMBOL_MATH),
    RangeRecord::new(0x2983, 0x2983, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2984, 0x2984, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2985, 0x2985, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2986, 0x2986, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2987, 0x2987, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2988, 0x2988, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2989, 0x2989, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x298A, 0x298A, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x298B, 0x298B, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x298C, 0x298C, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x298D, 0x298D, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x298E, 0x298E, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x298F, 0x298F, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2990, 0x2990, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2991, 0x2991, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2992, 0x2992, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2993, 0x2993, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2994, 0x2994, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2995, 0x2995, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2996, 0x2996, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2997, 0x2997, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2998, 0x2998, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2999, 0x29D7, Category::SYMBOL_MATH),
    RangeRecord::new(0x29D8, 0x29D8, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x29D9, 0x29D9, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x29DA, 0x29DA, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x29DB, 0x29DB, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x29DC, 0x29FB, Category::SYMBOL_MATH),
    RangeRecord::new(0x29FC, 0x29FC, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x29FD, 0x29FD, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x29FE, 0x2AFF, Category::SYMBOL_MATH),
    RangeRecord::new(0x2B00, 0x2B2F, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2B30, 0x2B44, Category::SYMBOL_MATH),
    RangeRecord::new(0x2B45, 0x2B46, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2B47, 0x2B4C, Category::SYMBOL_MATH),
    RangeRecord::new(0x2B4D, 0x2B73, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2B76, 0x2B95, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2B97, 0x2BFF, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2C00, 0x2C2F, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C30, 0x2C5F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C60, 0x2C60, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C61, 0x2C61, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C62, 0x2C64, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C65, 0x2C66, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C67, 0x2C67, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C68, 0x2C68, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C69, 0x2C69, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C6A, 0x2C6A, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C6B, 0x2C6B, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C6C, 0x2C6C, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C6D, 0x2C70, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C71, 0x2C71, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C72, 0x2C72, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C73, 0x2C74, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C75, 0x2C75, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C76, 0x2C7B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C7C, 0x2C7D, Category::LETTER_MODIFIER),
    RangeRecord::new(0x2C7E, 0x2C80, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C81, 0x2C81, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C82, 0x2C82, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C83, 0x2C83, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C84, 0x2C84, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C85, 0x2C85, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C86, 0x2C86, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C87, 0x2C87, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C88, 0x2C88, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C89, 0x2C89, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C8A, 0x2C8A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C8B, 0x2C8B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C8C, 0x2C8C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C8D, 0x2C8D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C8E, 0x2C8E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C8F, 0x2C8F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C90, 0x2C90, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C91, 0x2C91, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C92, 0x2C92, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C93, 0x2C93, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C94, 0x2C94, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C95, 0x2C95, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C96, 0x2C96, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C97, 0x2C97, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C98, 0x2C98, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C99, 0x2C99, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C9A, 0x2C9A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C9B, 0x2C9B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C9C, 0x2C9C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C9D, 0x2C9D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2C9E, 0x2C9E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2C9F, 0x2C9F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CA0, 0x2CA0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CA1, 0x2CA1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CA2, 0x2CA2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CA3, 0x2CA3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CA4, 0x2CA4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CA5, 0x2CA5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CA6, 0x2CA6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CA7, 0x2CA7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CA8, 0x2CA8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CA9, 0x2CA9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CAA, 0x2CAA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CAB, 0x2CAB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CAC, 0x2CAC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CAD, 0x2CAD, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CAE, 0x2CAE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CAF, 0x2CAF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CB0, 0x2CB0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CB1, 0x2CB1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CB2, 0x2CB2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CB3, 0x2CB3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CB4, 0x2CB4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CB5, 0x2CB5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CB6, 0x2CB6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CB7, 0x2CB7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CB8, 0x2CB8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CB9, 0x2CB9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CBA, 0x2CBA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CBB, 0x2CBB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CBC, 0x2CBC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CBD, 0x2CBD, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CBE, 0x2CBE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CBF, 0x2CBF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CC0, 0x2CC0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CC1, 0x2CC1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CC2, 0x2CC2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CC3, 0x2CC3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CC4, 0x2CC4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CC5, 0x2CC5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CC6, 0x2CC6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CC7, 0x2CC7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CC8, 0x2CC8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CC9, 0x2CC9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CCA, 0x2CCA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CCB, 0x2CCB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CCC, 0x2CCC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CCD, 0x2CCD, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CCE, 0x2CCE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CCF, 0x2CCF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CD0, 0x2CD0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CD1, 0x2CD1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CD2, 0x2CD2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CD3, 0x2CD3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CD4, 0x2CD4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CD5, 0x2CD5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CD6, 0x2CD6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CD7, 0x2CD7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CD8, 0x2CD8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CD9, 0x2CD9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CDA, 0x2CDA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CDB, 0x2CDB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CDC, 0x2CDC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CDD, 0x2CDD, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CDE, 0x2CDE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CDF, 0x2CDF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CE0, 0x2CE0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CE1, 0x2CE1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CE2, 0x2CE2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CE3, 0x2CE4, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CE5, 0x2CEA, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2CEB, 0x2CEB, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CEC, 0x2CEC, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CED, 0x2CED, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CEE, 0x2CEE, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CEF, 0x2CF1, Category::MARK_NON_SPACING),
    RangeRecord::new(0x2CF2, 0x2CF2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x2CF3, 0x2CF3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2CF9, 0x2CFC, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2CFD, 0x2CFD, Category::NUMBER_OTHER),
    RangeRecord::new(0x2CFE, 0x2CFF, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2D00, 0x2D25, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2D27, 0x2D27, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2D2D, 0x2D2D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x2D30, 0x2D67, Category::LETTER_OTHER),
    RangeRecord::new(0x2D6F, 0x2D6F, Category::LETTER_MODIFIER),
    RangeRecord::new(0x2D70, 0x2D70, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2D7F, 0x2D7F, Category::MARK_NON_SPACING),
    RangeRecord::new(0x2D80, 0x2D96, Category::LETTER_OTHER),
    RangeRecord::new(0x2DA0, 0x2DA6, Category::LETTER_OTHER),
    RangeRecord::new(0x2DA8, 0x2DAE, Category::LETTER_OTHER),
    RangeRecord::new(0x2DB0, 0x2DB6, Category::LETTER_OTHER),
    RangeRecord::new(0x2DB8, 0x2DBE, Category::LETTER_OTHER),
    RangeRecord::new(0x2DC0, 0x2DC6, Category::LETTER_OTHER),
    RangeRecord::new(0x2DC8, 0x2DCE, Category::LETTER_OTHER),
    RangeRecord::new(0x2DD0, 0x2DD6, Category::LETTER_OTHER),
    RangeRecord::new(0x2DD8, 0x2DDE, Category::LETTER_OTHER),
    RangeRecord::new(0x2DE0, 0x2DFF, Category::MARK_NON_SPACING),
    RangeRecord::new(0x2E00, 0x2E01, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2E02, 0x2E02, Category::PUNCTUATION_INITIAL),
    RangeRecord::new(0x2E03, 0x2E03, Category::PUNCTUATION_FINAL),
    RangeRecord::new(0x2E04, 0x2E04, Category::PUNCTUATION_INITIAL),
    RangeRecord::new(0x2E05, 0x2E05, Category::PUNCTUATION_FINAL),
    RangeRecord::new(0x2E06, 0x2E08, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2E09, 0x2E09, Category::PUNCTUATION_INITIAL),
    RangeRecord::new(0x2E0A, 0x2E0A, Category::PUNCTUATION_FINAL),
    RangeRecord::new(0x2E0B, 0x2E0B, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2E0C, 0x2E0C, Category::PUNCTUATION_INITIAL),
    RangeRecord::new(0x2E0D, 0x2E0D, Category::PUNCTUATION_FINAL),
    RangeRecord::new(0x2E0E, 0x2E16, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2E17, 0x2E17, Category::PUNCTUATION_DASH),
    RangeRecord::new(0x2E18, 0x2E19, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2E1A, 0x2E1A, Category::PUNCTUATION_DASH),
    RangeRecord::new(0x2E1B, 0x2E1B, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2E1C, 0x2E1C, Category::PUNCTUATION_INITIAL),
    RangeRecord::new(0x2E1D, 0x2E1D, Category::PUNCTUATION_FINAL),
    RangeRecord::new(0x2E1E, 0x2E1F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2E20, 0x2E20, Category::PUNCTUATION_INITIAL),
    RangeRecord::new(0x2E21, 0x2E21, Category::PUNCTUATION_FINAL),
    RangeRecord::new(0x2E22, 0x2E22, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2E23, 0x2E23, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2E24, 0x2E24, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2E25, 0x2E25, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2E26, 0x2E26, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2E27, 0x2E27, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2E28, 0x2E28, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2E29, 0x2E29, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2E2A, 0x2E2E, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2E2F, 0x2E2F, Category::LETTER_MODIFIER),
    RangeRecord::new(0x2E30, 0x2E39, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2E3A, 0x2E3B, Category::PUNCTUATION_DASH),
    RangeRecord::new(0x2E3C, 0x2E3F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2E40, 0x2E40, Category::PUNCTUATION_DASH),
    RangeRecord::new(0x2E41, 0x2E41, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2E42, 0x2E42, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2E43, 0x2E4F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2E50, 0x2E51, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2E52, 0x2E54, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x2E55, 0x2E55, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2E56, 0x2E56, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2E57, 0x2E57, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2E58, 0x2E58, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2E59, 0x2E59, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2E5A, 0x2E5A, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2E5B, 0x2E5B, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x2E5C, 0x2E5C, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x2E5D, 0x2E5D, Category::PUNCTUATION_DASH),
    RangeRecord::new(0x2E80, 0x2E99, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2E9B, 0x2EF3, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2F00, 0x2FD5, Category::SYMBOL_OTHER),
    RangeRecord::new(0x2FF0, 0x2FFF, Category::SYMBOL_OTHER),
    RangeRecord::new(0x3000, 0x3000, Category::SEPARATOR_SPACE),
    RangeRecord::new(0x3001, 0x3003, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x3004, 0x3004, Category::SYMBOL_OTHER),
    RangeRecord::new(0x3005, 0x3005, Category::LETTER_MODIFIER),
    RangeRecord::new(0x3006, 0x3006, Category::LETTER_OTHER),
    RangeRecord::new(0x3007, 0x3007, Category::NUMBER_LETTER),
    RangeRecord::new(0x3008, 0x3008, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x3009, 0x3009, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x300A, 0x300A, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x300B, 0x300B, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x300C, 0x300C, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x300D, 0x300D, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x300E, 0x300E, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x300F, 0x300F, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x3010, 0x3010, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x3011, 0x3011, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x3012, 0x3013, Category::SYMBOL_OTHER),
    RangeRecord::new(0x3014, 0x3014, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x3015, 0x3015, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x3016, 0x3016, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x3017, 0x3017, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x3018, 0x3018, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x3019, 0x3019, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x301A, 0x301A, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x301B, 0x301B, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x301C, 0x301C, Category::PUNCTUATION_DASH),
    RangeRecord::new(0x301D, 0x301D, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0x301E, 0x301F, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0x3020, 0x3020, Category::SYMBOL_OTHER),
    RangeRecord::new(0x3021, 0x3029, Category::NUMBER_LETTER),
    RangeRecord::new(0x302A, 0x302D, Category::MARK_NON_SPACING),
    RangeRecord::new(0x302E, 0x302F, Category::MARK_SPACING),
    RangeRecord::new(0x3030, 0x3030, Category::PUNCTUATION_DASH),
    RangeRecord::new(0x3031, 0x3035, Category::LETTER_MODIFIER),
    RangeRecord::new(0x3036, 0x3037, Category::SYMBOL_OTHER),
    RangeRecord::new(0x3038, 0x303A, Category::NUMBER_LETTER),
    RangeRecord::new(0x303B, 0x303B, Category::LETTER_MODIFIER),
    RangeRecord::new(0x303C, 0x303C, Category::LETTER_OTHER),
    RangeRecord::new(0x303D, 0x303D, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x303E, 0x303F, Category::SYMBOL_OTHER),
    RangeRecord::new(0x3041, 0x3096, Category::LETTER_OTHER),
    RangeRecord::new(0x3099, 0x309A, Category::MARK_NON_SPACING),
    RangeRecord::new(0x309B, 0x309C, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x309D, 0x309E, Category::LETTER_MODIFIER),
    RangeRecord::new(0x309F, 0x309F, Category::LETTER_OTHER),
    RangeRecord::new(0x30A0, 0x30A0, Category::PUNCTUATION_DASH),
    RangeRecord::new(0x30A1, 0x30FA, Category::LETTER_OTHER),
    RangeRecord::new(0x30FB, 0x30FB, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x30FC, 0x30FE, Category::LETTER_MODIFIER),
    RangeRecord::new(0x30FF, 0x30FF, Category::LETTER_OTHER),
    RangeRecord::new(0x3105, 0x312F, Category::LETTER_OTHER),
    RangeRecord::new(0x3131, 0x318E, Category::LETTER_OTHER),
    RangeRecord::new(0x3190, 0x3191, Category::SYMBOL_OTHER),
    RangeRecord::new(0x3192, 0x3195, Category::NUMBER_OTHER),
    RangeRecord::new(0x3196, 0x319F, Category::SYMBOL_OTHER),
    RangeRecord::new(0x31A0, 0x31BF, Category::LETTER_OTHER),
    RangeRecord::new(0x31C0, 0x31E3, Category::SYMBOL_OTHER),
    RangeRecord::new(0x31EF, 0x31EF, Category::SYMBOL_OTHER),
    RangeRecord::new(0x31F0, 0x31FF, Category::LETTER_OTHER),
    RangeRecord::new(0x3200, 0x321E, Category::SYMBOL_OTHER),
    RangeRecord::new(0x3220, 0x3229, Category::NUMBER_OTHER),
    RangeRecord::new(0x322A, 0x3247, Category::SYMBOL_OTHER),
    RangeRecord::new(0x3248, 0x324F, Category::NUMBER_OTHER),
    RangeRecord::new(0x3250, 0x3250, Category::SYMBOL_OTHER),
    RangeRecord::new(0x3251, 0x325F, Category::NUMBER_OTHER),
    RangeRecord::new(0x3260, 0x327F, Category::SYMBOL_OTHER),
    RangeRecord::new(0x3280, 0x3289, Category::NUMBER_OTHER),
    RangeRecord::new(0x328A, 0x32B0, Category::SYMBOL_OTHER),
    RangeRecord::new(0x32B1, 0x32BF, Category::NUMBER_OTHER),
    RangeRecord::new(0x32C0, 0x33FF, Category::SYMBOL_OTHER),
    RangeRecord::new(0x3400, 0x4DBF, Category::LETTER_OTHER),
    RangeRecord::new(0x4DC0, 0x4DFF, Category::SYMBOL_OTHER),
    RangeRecord::new(0x4E00, 0xA014, Category::LETTER_OTHER),
    RangeRecord::new(0xA015, 0xA015, Category::LETTER_MODIFIER),
    RangeRecord::new(0xA016, 0xA48C, Category::LETTER_OTHER),
    RangeRecord::new(0xA490, 0xA4C6, Category::SYMBOL_OTHER),
    RangeRecord::new(0xA4D0, 0xA4F7, Category::LETTER_OTHER),
    RangeRecord::new(0xA4F8, 0xA4FD, Category::LETTER_MODIFIER),
    RangeRecord::new(0xA4FE, 0xA4FF, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xA500, 0xA60B, Category::LETTER_OTHER),
    RangeRecord::new(0xA60C, 0xA60C, Category::LETTER_MODIFIER),
    RangeRecord::new(0xA60D, 0xA60F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xA610, 0xA61F, Category::LETTER_OTHER),
    RangeRecord::new(0xA620, 0xA629, Category::NUMBER_DECIMAL),
    RangeRecord::new(0xA62A, 0xA62B, Category::LETTER_OTHER),
    RangeRecord::new(0xA640, 0xA640, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA641, 0xA641, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA642, 0xA642, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA643, 0xA643, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA644, 0xA644, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA645, 0xA645, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA646, 0xA646, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA647, 0xA647, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA648, 0xA648, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA649, 0xA649, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA64A, 0xA64A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA64B, 0xA64B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA64C, 0xA64C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA64D, 0xA64D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA64E, 0xA64E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA64F, 0xA64F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA650, 0xA650, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA651, 0xA651, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA652, 0xA652, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA653, 0xA653, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA654, 0xA654, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA655, 0xA655, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA656, 0xA656, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA657, 0xA657, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA658, 0xA658, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA659, 0xA659, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA65A, 0xA65A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA65B, 0xA65B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA65C, 0xA65C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA65D, 0xA65D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA65E, 0xA65E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA65F, 0xA65F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA660, 0xA660, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA661, 0xA661, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA662, 0xA662, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA663, 0xA663, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA664, 0xA664, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA665, 0xA665, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA666, 0xA666, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA667, 0xA667, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA668, 0xA668, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA669, 0xA669, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA66A, 0xA66A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA66B, 0xA66B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA66C, 0xA66C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA66D, 0xA66D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA66E, 0xA66E, Category::LETTER_OTHER),
    RangeRecord::new(0xA66F, 0xA66F, Category::MARK_NON_SPACING),
    RangeRecord::new(0xA670, 0xA672, Category::MARK_ENCLOSING),
    RangeRecord::new(0xA673, 0xA673, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xA674, 0xA67D, Category::MARK_NON_SPACING),
    RangeRecord::new(0xA67E, 0xA67E, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xA67F, 0xA67F, Category::LETTER_MODIFIER),
    RangeRecord::new(0xA680, 0xA680, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA681, 0xA681, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA682, 0xA682, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA683, 0xA683, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA684, 0xA684, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA685, 0xA685, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA686, 0xA686, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA687, 0xA687, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA688, 0xA688, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA689, 0xA689, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA68A, 0xA68A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA68B, 0xA68B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA68C, 0xA68C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA68D, 0xA68D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA68E, 0xA68E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA68F, 0xA68F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA690, 0xA690, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA691, 0xA691, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA692, 0xA692, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA693, 0xA693, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA694, 0xA694, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA695, 0xA695, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA696, 0xA696, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA697, 0xA697, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA698, 0xA698, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA699, 0xA699, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA69A, 0xA69A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA69B, 0xA69B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA69C, 0xA69D, Category::LETTER_MODIFIER),
    RangeRecord::new(0xA69E, 0xA69F, Category::MARK_NON_SPACING),
    RangeRecord::new(0xA6A0, 0xA6E5, Category::LETTER_OTHER),
    RangeRecord::new(0xA6E6, 0xA6EF, Category::NUMBER_LETTER),
    RangeRecord::new(0xA6F0, 0xA6F1, Category::MARK_NON_SPACING),
    RangeRecord::new(0xA6F2, 0xA6F7, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xA700, 0xA716, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0xA717, 0xA71F, Category::LETTER_MODIFIER),
    RangeRecord::new(0xA720, 0xA721, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0xA722, 0xA722, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA723, 0xA723, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA724, 0xA724, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA725, 0xA725, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA726, 0xA726, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA727, 0xA727, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA728, 0xA728, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA729, 0xA729, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA72A, 0xA72A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA72B, 0xA72B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA72C, 0xA72C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA72D, 0xA72D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA72E, 0xA72E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA72F, 0xA731, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA732, 0xA732, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA733, 0xA733, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA734, 0xA734, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA735, 0xA735, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA736, 0xA736, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA737, 0xA737, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA738, 0xA738, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA739, 0xA739, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA73A, 0xA73A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA73B, 0xA73B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA73C, 0xA73C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA73D, 0xA73D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA73E, 0xA73E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA73F, 0xA73F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA740, 0xA740, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA741, 0xA741, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA742, 0xA742, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA743, 0xA743, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA744, 0xA744, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA745, 0xA745, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA746, 0xA746, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA747, 0xA747, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA748, 0xA748, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA749, 0xA749, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA74A, 0xA74A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA74B, 0xA74B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA74C, 0xA74C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA74D, 0xA74D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA74E, 0xA74E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA74F, 0xA74F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA750, 0xA750, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA751, 0xA751, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA752, 0xA752, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA753, 0xA753, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA754, 0xA754, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA755, 0xA755, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA756, 0xA756, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA757, 0xA757, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA758, 0xA758, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA759, 0xA759, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA75A, 0xA75A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA75B, 0xA75B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA75C, 0xA75C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA75D, 0xA75D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA75E, 0xA75E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA75F, 0xA75F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA760, 0xA760, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA761, 0xA761, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA762, 0xA762, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA763, 0xA763, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA764, 0xA764, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA765, 0xA765, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA766, 0xA766, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA767, 0xA767, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA768, 0xA768, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA769, 0xA769, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA76A, 0xA76A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA76B, 0xA76B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA76C, 0xA76C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA76D, 0xA76D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA76E, 0xA76E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA76F, 0xA76F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA770, 0xA770, Category::LETTER_MODIFIER),
    RangeRecord::new(0xA771, 0xA778, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA779, 0xA779, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA77A, 0xA77A, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA77B, 0xA77B, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA77C, 0xA77C, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA77D, 0xA77E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA77F, 0xA77F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA780, 0xA780, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA781, 0xA781, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA782, 0xA782, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA783, 0xA783, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA784, 0xA784, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA785, 0xA785, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA786, 0xA786, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA787, 0xA787, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA788, 0xA788, Category::LETTER_MODIFIER),
    RangeRecord::new(0xA789, 0xA78A, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0xA78B, 0xA78B, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA78C, 0xA78C, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA78D, 0xA78D, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA78E, 0xA78E, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA78F, 0xA78F, Category::LETTER_OTHER),
    RangeRecord::new(0xA790, 0xA790, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA791, 0xA791, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA792, 0xA792, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA793, 0xA795, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA796, 0xA796, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA797, 0xA797, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA798, 0xA798, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA799, 0xA799, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA79A, 0xA79A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA79B, 0xA79B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA79C, 0xA79C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA79D, 0xA79D, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA79E, 0xA79E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA79F, 0xA79F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7A0, 0xA7A0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7A1, 0xA7A1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7A2, 0xA7A2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7A3, 0xA7A3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7A4, 0xA7A4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7A5, 0xA7A5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7A6, 0xA7A6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7A7, 0xA7A7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7A8, 0xA7A8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7A9, 0xA7A9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7AA, 0xA7AE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7AF, 0xA7AF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7B0, 0xA7B4, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7B5, 0xA7B5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7B6, 0xA7B6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7B7, 0xA7B7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7B8, 0xA7B8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7B9, 0xA7B9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7BA, 0xA7BA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7BB, 0xA7BB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7BC, 0xA7BC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7BD, 0xA7BD, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7BE, 0xA7BE, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7BF, 0xA7BF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7C0, 0xA7C0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7C1, 0xA7C1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7C2, 0xA7C2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7C3, 0xA7C3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7C4, 0xA7C7, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7C8, 0xA7C8, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7C9, 0xA7C9, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7CA, 0xA7CA, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7D0, 0xA7D0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7D1, 0xA7D1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7D3, 0xA7D3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7D5, 0xA7D5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7D6, 0xA7D6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7D7, 0xA7D7, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7D8, 0xA7D8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7D9, 0xA7D9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7F2, 0xA7F4, Category::LETTER_MODIFIER),
    RangeRecord::new(0xA7F5, 0xA7F5, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xA7F6, 0xA7F6, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7F7, 0xA7F7, Category::LETTER_OTHER),
    RangeRecord::new(0xA7F8, 0xA7F9, Category::LETTER_MODIFIER),
    RangeRecord::new(0xA7FA, 0xA7FA, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xA7FB, 0xA801, Category::LETTER_OTHER),
    RangeRecord::new(0xA802, 0xA802, Category::MARK_NON_SPACING),
    RangeRecord::new(0xA803, 0xA805, Category::LETTER_OTHER),
    RangeRecord::new(0xA806, 0xA806, Category::MARK_NON_SPACING),
    RangeRecord::new(0xA807, 0xA80A, Category::LETTER_OTHER),
    RangeRecord::new(0xA80B, 0xA80B, Category::MARK_NON_SPACING),
    RangeRecord::new(0xA80C, 0xA822, Category::LETTER_OTHER),
    RangeRecord::new(0xA823, 0xA824, Category::MARK_SPACING),
    RangeRecord::new(0xA825, 0xA826, Category::MARK_NON_SPACING),
    RangeRecord::new(0xA827, 0xA827, Category::MARK_SPACING),
    RangeRecord::new(0xA828, 0xA82B, Category::SYMBOL_OTHER),
    RangeRecord::new(0xA82C, 0xA82C, Category::MARK_NON_SPACING),
    RangeRecord::new(0xA830, 0xA835, Category::NUMBER_OTHER),
    RangeRecord::new(0xA836, 0xA837, Category::SYMBOL_OTHER),
    RangeRecord::new(0xA838, 0xA838, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0xA839, 0xA839, Category::SYMBOL_OTHER),
    RangeRecord::new(0xA840, 0xA873, Category::LETTER_OTHER),
    RangeRecord::new(0xA874, 0xA877, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xA880, 0xA881, Category::MARK_SPACING),
    RangeRecord::new(0xA882, 0xA8B3, Category::LETTER_OTHER),
    RangeRecord::new(0xA8B4, 0xA8C3, Category::MARK_SPACING),
    RangeRecord::new(0xA8C4, 0xA8C5, Category::MARK_NON_SPACING),
    RangeRecord::new(0xA8CE, 0xA8CF, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xA8D0, 0xA8D9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0xA8E0, 0xA8F1, Category::MARK_NON_SPACING),
    RangeRecord::new(0xA8F2, 0xA8F7, Category::LETTER_OTHER),
    RangeRecord::new(0xA8F8, 0xA8FA, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xA8FB, 0xA8FB, Category::LETTER_OTHER),
    RangeRecord::new(0xA8FC, 0xA8FC, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xA8FD, 0xA8FE, Category::LETTER_OTHER),
    RangeRecord::new(0xA8FF, 0xA8FF, Category::MARK_NON_SPACING),
    RangeRecord::new(0xA900, 0xA909, Category::NUMBER_DECIMAL),
    RangeRecord::new(0xA90A, 0xA925, Category::LETTER_OTHER),
    RangeRecord::new(0xA926, 0xA92D, Category::MARK_NON_SPACING),
    RangeRecord::new(0xA92E, 0xA92F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xA930, 0xA946, Category::LETTER_OTHER),
    RangeRecord::new(0xA947, 0xA951, Category::MARK_NON_SPACING),
    RangeRecord::new(0xA952, 0xA953, Category::MARK_SPACING),
    RangeRecord::new(0xA95F, 0xA95F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xA960, 0xA97C, Category::LETTER_OTHER),
    RangeRecord::new(0xA980, 0xA982, Category::MARK_NON_SPACING),
    RangeRecord::new(0xA983, 0xA983, Category::MARK_SPACING),
    RangeRecord::new(0xA984, 0xA9B2, Category::LETTER_OTHER),
    RangeRecord::new(0xA9B3, 0xA9B3, Category::MARK_NON_SPACING),
    RangeRecord::new(0xA9B4, 0xA9B5, Category::MARK_SPACING),
    RangeRecord::new(0xA9B6, 0xA9B9, Category::MARK_NON_SPACING),
    RangeRecord::new(0xA9BA, 0xA9BB, Category::MARK_SPACING),
    RangeRecord::new(0xA9BC, 0xA9BD, Category::MARK_NON_SPACING),
    RangeRecord::new(0xA9BE, 0xA9C0, Category::MARK_SPACING),
    RangeRecord::new(0xA9C1, 0xA9CD, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xA9CF, 0xA9CF, Category::LETTER_MODIFIER),
    RangeRecord::new(0xA9D0, 0xA9D9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0xA9DE, 0xA9DF, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xA9E0, 0xA9E4, Category::LETTER_OTHER),
    RangeRecord::new(0xA9E5, 0xA9E5, Category::MARK_NON_SPACING),
    RangeRecord::new(0xA9E6, 0xA9E6, Category::LETTER_MODIFIER),
    RangeRecord::new(0xA9E7, 0xA9EF, Category::LETTER_OTHER),
    RangeRecord::new(0xA9F0, 0xA9F9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0xA9FA, 0xA9FE, Category::LETTER_OTHER),
    RangeRecord::new(0xAA00, 0xAA28, Category::LETTER_OTHER),
    RangeRecord::new(0xAA29, 0xAA2E, Category::MARK_NON_SPACING),
    RangeRecord::new(0xAA2F, 0xAA30, Category::MARK_SPACING),
    RangeRecord::new(0xAA31, 0xAA32, Category::MARK_NON_SPACING),
    RangeRecord::new(0xAA33, 0xAA34, Category::MARK_SPACING),
    RangeRecord::new(0xAA35, 0xAA36, Category::MARK_NON_SPACING),
    RangeRecord::new(0xAA40, 0xAA42, Category::LETTER_OTHER),
    RangeRecord::new(0xAA43, 0xAA43, Category::MARK_NON_SPACING),
    RangeRecord::new(0xAA44, 0xAA4B, Category::LETTER_OTHER),
    RangeRecord::new(0xAA4C, 0xAA4C, Category::MARK_NON_SPACING),
    RangeRecord::new(0xAA4D, 0xAA4D, Category::MARK_SPACING),
    RangeRecord::new(0xAA50, 0xAA59, Category::NUMBER_DECIMAL),
    RangeRecord::new(0xAA5C, 0xAA5F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xAA60, 0xAA6F, Category::LETTER_OTHER),
    RangeRecord::new(0xAA70, 0xAA70, Category::LETTER_MODIFIER),
    RangeRecord::new(0xAA71, 0xAA76, Category::LETTER_OTHER),
    RangeRecord::new(0xAA77, 0xAA79, Category::SYMBOL_OTHER),
    RangeRecord::new(0xAA7A, 0xAA7A, Category::LETTER_OTHER),
    RangeRecord::new(0xAA7B, 0xAA7B, Category::MARK_SPACING),
    RangeRecord::new(0xAA7C, 0xAA7C, Category::MARK_NON_SPACING),
    RangeRecord::new(0xAA7D, 0xAA7D, Category::MARK_SPACING),
    RangeRecord::new(0xAA7E, 0xAAAF, Category::LETTER_OTHER),
    RangeRecord::new(0xAAB0, 0xAAB0, Category::MARK_NON_SPACING),
    RangeRecord::new(0xAAB1, 0xAAB1, Category::LETTER_OTHER),
    RangeRecord::new(0xAAB2, 0xAAB4, Category::MARK_NON_SPACING),
    RangeRecord::new(0xAAB5, 0xAAB6, Category::LETTER_OTHER),
    RangeRecord::new(0xAAB7, 0xAAB8, Category::MARK_NON_SPACING),
    RangeRecord::new(0xAAB9, 0xAABD, Category::LETTER_OTHER),
    RangeRecord::new(0xAABE, 0xAABF, Category::MARK_NON_SPACING),
    RangeRecord::new(0xAAC0, 0xAAC0, Category::LETTER_OTHER),
    RangeRecord::new(0xAAC1, 0xAAC1, Category::MARK_NON_SPACING),
    RangeRecord::new(0xAAC2, 0xAAC2, Category::LETTER_OTHER),
    RangeRecord::new(0xAADB, 0xAADC, Category::LETTER_OTHER),
    RangeRecord::new(0xAADD, 0xAADD, Category::LETTER_MODIFIER),
    RangeRecord::new(0xAADE, 0xAADF, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xAAE0, 0xAAEA, Category::LETTER_OTHER),
    RangeRecord::new(0xAAEB, 0xAAEB, Category::MARK_SPACING),
    RangeRecord::new(0xAAEC, 0xAAED, Category::MARK_NON_SPACING),
    RangeRecord::new(0xAAEE, 0xAAEF, Category::MARK_SPACING),
    RangeRecord::new(0xAAF0, 0xAAF1, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xAAF2, 0xAAF2, Category::LETTER_OTHER),
    RangeRecord::new(0xAAF3, 0xAAF4, Category::LETTER_MODIFIER),
    RangeRecord::new(0xAAF5, 0xAAF5, Category::MARK_SPACING),
    RangeRecord::new(0xAAF6, 0xAAF6, Category::MARK_NON_SPACING),
    RangeRecord::new(0xAB01, 0xAB06, Category::LETTER_OTHER),
    RangeRecord::new(0xAB09, 0xAB0E, Category::LETTER_OTHER),
    RangeRecord::new(0xAB11, 0xAB16, Category::LETTER_OTHER),
    RangeRecord::new(0xAB20, 0xAB26, Category::LETTER_OTHER),
    RangeRecord::new(0xAB28, 0xAB2E, Category::LETTER_OTHER),
    RangeRecord::new(0xAB30, 0xAB5A, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xAB5B, 0xAB5B, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0xAB5C, 0xAB5F, Category::LETTER_MODIFIER),
    RangeRecord::new(0xAB60, 0xAB68, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xAB69, 0xAB69, Category::LETTER_MODIFIER),
    RangeRecord::new(0xAB6A, 0xAB6B, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0xAB70, 0xABBF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xABC0, 0xABE2, Category::LETTER_OTHER),
    RangeRecord::new(0xABE3, 0xABE4, Category::MARK_SPACING),
    RangeRecord::new(0xABE5, 0xABE5, Category::MARK_NON_SPACING),
    RangeRecord::new(0xABE6, 0xABE7, Category::MARK_SPACING),
    RangeRecord::new(0xABE8, 0xABE8, Category::MARK_NON_SPACING),
    RangeRecord::new(0xABE9, 0xABEA, Category::MARK_SPACING),
    RangeRecord::new(0xABEB, 0xABEB, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xABEC, 0xABEC, Category::MARK_SPACING),
    RangeRecord::new(0xABED, 0xABED, Category::MARK_NON_SPACING),
    RangeRecord::new(0xABF0, 0xABF9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0xAC00, 0xD7A3, Category::LETTER_OTHER),
    RangeRecord::new(0xD7B0, 0xD7C6, Category::LETTER_OTHER),
    RangeRecord::new(0xD7CB, 0xD7FB, Category::LETTER_OTHER),
    RangeRecord::new(0xD800, 0xDFFF, Category::SURROGATE),
    RangeRecord::new(0xE000, 0xF8FF, Category::PRIVATE_USE),
    RangeRecord::new(0xF900, 0xFA6D, Category::LETTER_OTHER),
    RangeRecord::new(0xFA70, 0xFAD9, Category::LETTER_OTHER),
    RangeRecord::new(0xFB00, 0xFB06, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xFB13, 0xFB17, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xFB1D, 0xFB1D, Category::LETTER_OTHER),
    RangeRecord::new(0xFB1E, 0xFB1E, Category::MARK_NON_SPACING),
    RangeRecord::new(0xFB1F, 0xFB28, Category::LETTER_OTHER),
    RangeRecord::new(0xFB29, 0xFB29, Category::SYMBOL_MATH),
    RangeRecord::new(0xFB2A, 0xFB36, Category::LETTER_OTHER),
    RangeRecord::new(0xFB38, 0xFB3C, Category::LETTER_OTHER),
    RangeRecord::new(0xFB3E, 0xFB3E, Category::LETTER_OTHER),
    RangeRecord::new(0xFB40, 0xFB41, Category::LETTER_OTHER),
    RangeRecord::new(0xFB43, 0xFB44, Category::LETTER_OTHER),
    RangeRecord::new(0xFB46, 0xFBB1, Category::LETTER_OTHER),
    RangeRecord::new(0xFBB2, 0xFBC2, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0xFBD3, 0xFD3D, Category::LETTER_OTHER),
    RangeRecord::new(0xFD3E, 0xFD3E, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0xFD3F, 0xFD3F, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0xFD40, 0xFD4F, Category::SYMBOL_OTHER),
    RangeRecord::new(0xFD50, 0xFD8F, Category::LETTER_OTHER),
    RangeRecord::new(0xFD92, 0xFDC7, Category::LETTER_OTHER),
    RangeRecord::new(0xFDCF, 0xFDCF, Category::SYMBOL_OTHER),
    RangeRecord::new(0xFDF0, 0xFDFB, Category::LETTER_OTHER),
    RangeRecord::new(0xFDFC, 0xFDFC, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0xFDFD, 0xFDFF, Category::SYMBOL_OTHER),
    RangeRecord::new(0xFE00, 0xFE0F, Category::MARK_NON_SPACING),
    RangeRecord::new(0xFE10, 0xFE16, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFE17, 0xFE17, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0xFE18, 0xFE18, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0xFE19, 0xFE19, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFE20, 0xFE2F, Category::MARK_NON_SPACING),
    RangeRecord::new(0xFE30, 0xFE30, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFE31, 0xFE32, Category::PUNCTUATION_DASH),
    RangeRecord::new(0xFE33, 0xFE34, Category::PUNCTUATION_CONNECTOR),
    RangeRecord::new(0xFE35, 0xFE35, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0xFE36, 0xFE36, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0xFE37, 0xFE37, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0xFE38, 0xFE38, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0xFE39, 0xFE39, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0xFE3A, 0xFE3A, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0xFE3B, 0xFE3B, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0xFE3C, 0xFE3C, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0xFE3D, 0xFE3D, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0xFE3E, 0xFE3E, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0xFE3F, 0xFE3F, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0xFE40, 0xFE40, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0xFE41, 0xFE41, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0xFE42, 0xFE42, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0xFE43, 0xFE43, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0xFE44, 0xFE44, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0xFE45, 0xFE46, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFE47, 0xFE47, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0xFE48, 0xFE48, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0xFE49, 0xFE4C, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFE4D, 0xFE4F, Category::PUNCTUATION_CONNECTOR),
    RangeRecord::new(0xFE50, 0xFE52, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFE54, 0xFE57, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFE58, 0xFE58, Category::PUNCTUATION_DASH),
    RangeRecord::new(0xFE59, 0xFE59, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0xFE5A, 0xFE5A, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0xFE5B, 0xFE5B, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0xFE5C, 0xFE5C, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0xFE5D, 0xFE5D, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0xFE5E, 0xFE5E, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0xFE5F, 0xFE61, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFE62, 0xFE62, Category::SYMBOL_MATH),
    RangeRecord::new(0xFE63, 0xFE63, Category::PUNCTUATION_DASH),
    RangeRecord::new(0xFE64, 0xFE66, Category::SYMBOL_MATH),
    RangeRecord::new(0xFE68, 0xFE68, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFE69, 0xFE69, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0xFE6A, 0xFE6B, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFE70, 0xFE74, Category::LETTER_OTHER),
    RangeRecord::new(0xFE76, 0xFEFC, Category::LETTER_OTHER),
    RangeRecord::new(0xFEFF, 0xFEFF, Category::FORMAT),
    RangeRecord::new(0xFF01, 0xFF03, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFF04, 0xFF04, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0xFF05, 0xFF07, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFF08, 0xFF08, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0xFF09, 0xFF09, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0xFF0A, 0xFF0A, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFF0B, 0xFF0B, Category::SYMBOL_MATH),
    RangeRecord::new(0xFF0C, 0xFF0C, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFF0D, 0xFF0D, Category::PUNCTUATION_DASH),
    RangeRecord::new(0xFF0E, 0xFF0F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFF10, 0xFF19, Category::NUMBER_DECIMAL),
    RangeRecord::new(0xFF1A, 0xFF1B, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFF1C, 0xFF1E, Category::SYMBOL_MATH),
    RangeRecord::new(0xFF1F, 0xFF20, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFF21, 0xFF3A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0xFF3B, 0xFF3B, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0xFF3C, 0xFF3C, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFF3D, 0xFF3D, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0xFF3E, 0xFF3E, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0xFF3F, 0xFF3F, Category::PUNCTUATION_CONNECTOR),
    RangeRecord::new(0xFF40, 0xFF40, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0xFF41, 0xFF5A, Category::LETTER_LOWERCASE),
    RangeRecord::new(0xFF5B, 0xFF5B, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0xFF5C, 0xFF5C, Category::SYMBOL_MATH),
    RangeRecord::new(0xFF5D, 0xFF5D, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0xFF5E, 0xFF5E, Category::SYMBOL_MATH),
    RangeRecord::new(0xFF5F, 0xFF5F, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0xFF60, 0xFF60, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0xFF61, 0xFF61, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFF62, 0xFF62, Category::PUNCTUATION_OPEN),
    RangeRecord::new(0xFF63, 0xFF63, Category::PUNCTUATION_CLOSE),
    RangeRecord::new(0xFF64, 0xFF65, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0xFF66, 0xFF6F, Category::LETTER_OTHER),
    RangeRecord::new(0xFF70, 0xFF70, Category::LETTER_MODIFIER),
    RangeRecord::new(0xFF71, 0xFF9D, Category::LETTER_OTHER),
    RangeRecord::new(0xFF9E, 0xFF9F, Category::LETTER_MODIFIER),
    RangeRecord::new(0xFFA0, 0xFFBE, Category::LETTER_OTHER),
    RangeRecord::new(0xFFC2, 0xFFC7, Category::LETTER_OTHER),
    RangeRecord::new(0xFFCA, 0xFFCF, Category::LETTER_OTHER),
    RangeRecord::new(0xFFD2, 0xFFD7, Category::LETTER_OTHER),
    RangeRecord::new(0xFFDA, 0xFFDC, Category::LETTER_OTHER),
    RangeRecord::new(0xFFE0, 0xFFE1, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0xFFE2, 0xFFE2, Category::SYMBOL_MATH),
    RangeRecord::new(0xFFE3, 0xFFE3, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0xFFE4, 0xFFE4, Category::SYMBOL_OTHER),
    RangeRecord::new(0xFFE5, 0xFFE6, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0xFFE8, 0xFFE8, Category::SYMBOL_OTHER),
    RangeRecord::new(0xFFE9, 0xFFEC, Category::SYMBOL_MATH),
    RangeRecord::new(0xFFED, 0xFFEE, Category::SYMBOL_OTHER),
    RangeRecord::new(0xFFF9, 0xFFFB, Category::FORMAT),
    RangeRecord::new(0xFFFC, 0xFFFD, Category::SYMBOL_OTHER),
    RangeRecord::new(0x10000, 0x1000B, Category::LETTER_OTHER),
    RangeRecord::new(0x1000D, 0x10026, Category::LETTER_OTHER),
    RangeRecord::new(0x10028, 0x1003A, Category::LETTER_OTHER),
    RangeRecord::new(0x1003C, 0x1003D, Category::LETTER_OTHER),
    RangeRecord::new(0x1003F, 0x1004D, Category::LETTER_OTHER),
    RangeRecord::new(0x10050, 0x1005D, Category::LETTER_OTHER),
    RangeRecord::new(0x10080, 0x100FA, Category::LETTER_OTHER),
    RangeRecord::new(0x10100, 0x10102, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x10107, 0x10133, Category::NUMBER_OTHER),
    RangeRecord::new(0x10137, 0x1013F, Category::SYMBOL_OTHER),
    RangeRecord::new(0x10140, 0x10174, Category::NUMBER_LETTER),
    RangeRecord::new(0x10175, 0x10178, Category::NUMBER_OTHER),
    RangeRecord::new(0x10179, 0x10189, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1018A, 0x1018B, Category::NUMBER_OTHER),
    RangeRecord::new(0x1018C, 0x1018E, Category::SYMBOL_OTHER),
    RangeRecord::new(0x10190, 0x1019C, Category::SYMBOL_OTHER),
    RangeRecord::new(0x101A0, 0x101A0, Category::SYMBOL_OTHER),
    RangeRecord::new(0x101D0, 0x101FC, Category::SYMBOL_OTHER),
    RangeRecord::new(0x101FD, 0x101FD, Category::MARK_NON_SPACING),
    RangeRecord::new(0x10280, 0x1029C, Category::LETTER_OTHER),
    RangeRecord::new(0x102A0, 0x102D0, Category::LETTER_OTHER),
    RangeRecord::new(0x102E0, 0x102E0, Category::MARK_NON_SPACING),
    RangeRecord::new(0x102E1, 0x102FB, Category::NUMBER_OTHER),
    RangeRecord::new(0x10300, 0x1031F, Category::LETTER_OTHER),
    RangeRecord::new(0x10320, 0x10323, Category::NUMBER_OTHER),
    RangeRecord::new(0x1032D, 0x10340, Category::LETTER_OTHER),
    RangeRecord::new(0x10341, 0x10341, Category::NUMBER_LETTER),
    RangeRecord::new(0x10342, 0x10349, Category::LETTER_OTHER),
    RangeRecord::new(0x1034A, 0x1034A, Category::NUMBER_LETTER),
    RangeRecord::new(0x10350, 0x10375, Category::LETTER_OTHER),
    RangeRecord::new(0x10376, 0x1037A, Category::MARK_NON_SPACING),
    RangeRecord::new(0x10380, 0x1039D, Category::LETTER_OTHER),
    RangeRecord::new(0x1039F, 0x1039F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x103A0, 0x103C3, Category::LETTER_OTHER),
    RangeRecord::new(0x103C8, 0x103CF, Category::LETTER_OTHER),
    RangeRecord::new(0x103D0, 0x103D0, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x103D1, 0x103D5, Category::NUMBER_LETTER),
    RangeRecord::new(0x10400, 0x10427, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x10428, 0x1044F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x10450, 0x1049D, Category::LETTER_OTHER),
    RangeRecord::new(0x104A0, 0x104A9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x104B0, 0x104D3, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x104D8, 0x104FB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x10500, 0x10527, Category::LETTER_OTHER),
    RangeRecord::new(0x10530, 0x10563, Category::LETTER_OTHER),
    RangeRecord::new(0x1056F, 0x1056F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x10570, 0x1057A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1057C, 0x1058A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1058C, 0x10592, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x10594, 0x10595, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x10597, 0x105A1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x105A3, 0x105B1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x105B3, 0x105B9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x105BB, 0x105BC, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x10600, 0x10736, Category::LETTER_OTHER),
    RangeRecord::new(0x10740, 0x10755, Category::LETTER_OTHER),
    RangeRecord::new(0x10760, 0x10767, Category::LETTER_OTHER),
    RangeRecord::new(0x10780, 0x10785, Category::LETTER_MODIFIER),
    RangeRecord::new(0x10787, 0x107B0, Category::LETTER_MODIFIER),
    RangeRecord::new(0x107B2, 0x107BA, Category::LETTER_MODIFIER),
    RangeRecord::new(0x10800, 0x10805, Category::LETTER_OTHER),
    RangeRecord::new(0x10808, 0x10808, Category::LETTER_OTHER),
    RangeRecord::new(0x1080A, 0x10835, Category::LETTER_OTHER),
    RangeRecord::new(0x10837, 0x10838, Category::LETTER_OTHER),
    RangeRecord::new(0x1083C, 0x1083C, Category::LETTER_OTHER),
    RangeRecord::new(0x1083F, 0x10855, Category::LETTER_OTHER),
    RangeRecord::new(0x10857, 0x10857, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x10858, 0x1085F, Category::NUMBER_OTHER),
    RangeRecord::new(0x10860, 0x10876, Category::LETTER_OTHER),
    RangeRecord::new(0x10877, 0x10878, Category::SYMBOL_OTHER),
    RangeRecord::new(0x10879, 0x1087F, Category::NUMBER_OTHER),
    RangeRecord::new(0x10880, 0x1089E, Category::LETTER_OTHER),
    RangeRecord::new(0x108A7, 0x108AF, Category::NUMBER_OTHER),
    RangeRecord::new(0x108E0, 0x108F2, Category::LETTER_OTHER),
    RangeRecord::new(0x108F4, 0x108F5, Category::LETTER_OTHER),
    RangeRecord::new(0x108FB, 0x108FF, Category::NUMBER_OTHER),
    RangeRecord::new(0x10900, 0x10915, Category::LETTER_OTHER),
    RangeRecord::new(0x10916, 0x1091B, Category::NUMBER_OTHER),
    RangeRecord::new(0x1091F, 0x1091F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x10920, 0x10939, Category::LETTER_OTHER),
    RangeRecord::new(0x1093F, 0x1093F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x10980, 0x109B7, Category::LETTER_OTHER),
    RangeRecord::new(0x109BC, 0x109BD, Category::NUMBER_OTHER),
    RangeRecord::new(0x109BE, 0x109BF, Category::LETTER_OTHER),
    RangeRecord::new(0x109C0, 0x109CF, Category::NUMBER_OTHER),
    RangeRecord::new(0x109D2, 0x109FF, Category::NUMBER_OTHER),
    RangeRecord::new(0x10A00, 0x10A00, Category::LETTER_OTHER),
    RangeRecord::new(0x10A01, 0x10A03, Category::MARK_NON_SPACING),
    RangeRecord::new(0x10A05, 0x10A06, Category::MARK_NON_SPACING),
    RangeRecord::new(0x10A0C, 0x10A0F, Category::MARK_NON_SPACING),
    RangeRecord::new(0x10A10, 0x10A13, Category::LETTER_OTHER),
    RangeRecord::new(0x10A15, 0x10A17, Category::LETTER_OTHER),
    RangeRecord::new(0x10A19, 0x10A35, Category::LETTER_OTHER),
    RangeRecord::new(0x10A38, 0x10A3A, Category::MARK_NON_SPACING),
    RangeRecord::new(0x10A3F, 0x10A3F, Category::MARK_NON_SPACING),
    RangeRecord::new(0x10A40, 0x10A48, Category::NUMBER_OTHER),
    RangeRecord::new(0x10A50, 0x10A58, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x10A60, 0x10A7C, Category::LETTER_OTHER),
    RangeRecord::new(0x10A7D, 0x10A7E, Category::NUMBER_OTHER),
    RangeRecord::new(0x10A7F, 0x10A7F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x10A80, 0x10A9C, Category::LETTER_OTHER),
    RangeRecord::new(0x10A9D, 0x10A9F, Category::NUMBER_OTHER),
    RangeRecord::new(0x10AC0, 0x10AC7, Category::LETTER_OTHER),
    RangeRecord::new(0x10AC8, 0x10AC8, Category::SYMBOL_OTHER),
    RangeRecord::new(0x10AC9, 0x10AE4, Category::LETTER_OTHER),
    RangeRecord::new(0x10AE5, 0x10AE6, Category::MARK_NON_SPACING),
    RangeRecord::new(0x10AEB, 0x10AEF, Category::NUMBER_OTHER),
    RangeRecord::new(0x10AF0, 0x10AF6, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x10B00, 0x10B35, Category::LETTER_OTHER),
    RangeRecord::new(0x10B39, 0x10B3F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x10B40, 0x10B55, Category::LETTER_OTHER),
    RangeRecord::new(0x10B58, 0x10B5F, Category::NUMBER_OTHER),
    RangeRecord::new(0x10B60, 0x10B72, Category::LETTER_OTHER),
    RangeRecord::new(0x10B78, 0x10B7F, Category::NUMBER_OTHER),
    RangeRecord::new(0x10B80, 0x10B91, Category::LETTER_OTHER),
    RangeRecord::new(0x10B99, 0x10B9C, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x10BA9, 0x10BAF, Category::NUMBER_OTHER),
    RangeRecord::new(0x10C00, 0x10C48, Category::LETTER_OTHER),
    RangeRecord::new(0x10C80, 0x10CB2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x10CC0, 0x10CF2, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x10CFA, 0x10CFF, Category::NUMBER_OTHER),
    RangeRecord::new(0x10D00, 0x10D23, Category::LETTER_OTHER),
    RangeRecord::new(0x10D24, 0x10D27, Category::MARK_NON_SPACING),
    RangeRecord::new(0x10D30, 0x10D39, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x10E60, 0x10E7E, Category::NUMBER_OTHER),
    RangeRecord::new(0x10E80, 0x10EA9, Category::LETTER_OTHER),
    RangeRecord::new(0x10EAB, 0x10EAC, Category::MARK_NON_SPACING),
    RangeRecord::new(0x10EAD, 0x10EAD, Category::PUNCTUATION_DASH),
    RangeRecord::new(0x10EB0, 0x10EB1, Category::LETTER_OTHER),
    RangeRecord::new(0x10EFD, 0x10EFF, Category::MARK_NON_SPACING),
    RangeRecord::new(0x10F00, 0x10F1C, Category::LETTER_OTHER),
    RangeRecord::new(0x10F1D, 0x10F26, Category::NUMBER_OTHER),
    RangeRecord::new(0x10F27, 0x10F27, Category::LETTER_OTHER),
    RangeRecord::new(0x10F30, 0x10F45, Category::LETTER_OTHER),
    RangeRecord::new(0x10F46, 0x10F50, Category::MARK_NON_SPACING),
    RangeRecord::new(0x10F51, 0x10F54, Category::NUMBER_OTHER),
    RangeRecord::new(0x10F55, 0x10F59, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x10F70, 0x10F81, Category::LETTER_OTHER),
    RangeRecord::new(0x10F82, 0x10F85, Category::MARK_NON_SPACING),
    RangeRecord::new(0x10F86, 0x10F89, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x10FB0, 0x10FC4, Category::LETTER_OTHER),
    RangeRecord::new(0x10FC5, 0x10FCB, Category::NUMBER_OTHER),
    RangeRecord::new(0x10FE0, 0x10FF6, Category::LETTER_OTHER),
    RangeRecord::new(0x11000, 0x11000, Category::MARK_SPACING),
    RangeRecord::new(0x11001, 0x11001, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11002, 0x11002, Category::MARK_SPACING),
    RangeRecord::new(0x11003, 0x11037, Category::LETTER_OTHER),
    RangeRecord::new(0x11038, 0x11046, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11047, 0x1104D, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x11052, 0x11065, Category::NUMBER_OTHER),
    RangeRecord::new(0x11066, 0x1106F, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x11070, 0x11070, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11071, 0x11072, Category::LETTER_OTHER),
    RangeRecord::new(0x11073, 0x11074, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11075, 0x11075, Category::LETTER_OTHER),
    RangeRecord::new(0x1107F, 0x11081, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11082, 0x11082, Category::MARK_SPACING),
    RangeRecord::new(0x11083, 0x110AF, Category::LETTER_OTHER),
    RangeRecord::new(0x110B0, 0x110B2, Category::MARK_SPACING),
    RangeRecord::new(0x110B3, 0x110B6, Category::MARK_NON_SPACING),
    RangeRecord::new(0x110B7, 0x110B8, Category::MARK_SPACING),
    RangeRecord::new(0x110B9, 0x110BA, Category::MARK_NON_SPACING),
    RangeRecord::new(0x110BB, 0x110BC, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x110BD, 0x110BD, Category::FORMAT),
    RangeRecord::new(0x110BE, 0x110C1, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x110C2, 0x110C2, Category::MARK_NON_SPACING),
    RangeRecord::new(0x110CD, 0x110CD, Category::FORMAT),
    RangeRecord::new(0x110D0, 0x110E8, Category::LETTER_OTHER),
    RangeRecord::new(0x110F0, 0x110F9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x11100, 0x11102, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11103, 0x11126, Category::LETTER_OTHER),
    RangeRecord::new(0x11127, 0x1112B, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1112C, 0x1112C, Category::MARK_SPACING),
    RangeRecord::new(0x1112D, 0x11134, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11136, 0x1113F, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x11140, 0x11143, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x11144, 0x11144, Category::LETTER_OTHER),
    RangeRecord::new(0x11145, 0x11146, Category::MARK_SPACING),
    RangeRecord::new(0x11147, 0x11147, Category::LETTER_OTHER),
    RangeRecord::new(0x11150, 0x11172, Category::LETTER_OTHER),
    RangeRecord::new(0x11173, 0x11173, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11174, 0x11175, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x11176, 0x11176, Category::LETTER_OTHER),
    RangeRecord::new(0x11180, 0x11181, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11182, 0x11182, Category::MARK_SPACING),
    RangeRecord::new(0x11183, 0x111B2, Category::LETTER_OTHER),
    RangeRecord::new(0x111B3, 0x111B5, Category::MARK_SPACING),
    RangeRecord::new(0x111B6, 0x111BE, Category::MARK_NON_SPACING),
    RangeRecord::new(0x111BF, 0x111C0, Category::MARK_SPACING),
    RangeRecord::new(0x111C1, 0x111C4, Category::LETTER_OTHER),
    RangeRecord::new(0x111C5, 0x111C8, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x111C9, 0x111CC, Category::MARK_NON_SPACING),
    RangeRecord::new(0x111CD, 0x111CD, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x111CE, 0x111CE, Category::MARK_SPACING),
    RangeRecord::new(0x111CF, 0x111CF, Category::MARK_NON_SPACING),
    RangeRecord::new(0x111D0, 0x111D9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x111DA, 0x111DA, Category::LETTER_OTHER),
    RangeRecord::new(0x111DB, 0x111DB, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x111DC, 0x111DC, Category::LETTER_OTHER),
    RangeRecord::new(0x111DD, 0x111DF, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x111E1, 0x111F4, Category::NUMBER_OTHER),
    RangeRecord::new(0x11200, 0x11211, Category::LETTER_OTHER),
    RangeRecord::new(0x11213, 0x1122B, Category::LETTER_OTHER),
    RangeRecord::new(0x1122C, 0x1122E, Category::MARK_SPACING),
    RangeRecord::new(0x1122F, 0x11231, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11232, 0x11233, Category::MARK_SPACING),
    RangeRecord::new(0x11234, 0x11234, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11235, 0x11235, Category::MARK_SPACING),
    RangeRecord::new(0x11236, 0x11237, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11238, 0x1123D, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1123E, 0x1123E, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1123F, 0x11240, Category::LETTER_OTHER),
    RangeRecord::new(0x11241, 0x11241, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11280, 0x11286, Category::LETTER_OTHER),
    RangeRecord::new(0x11288, 0x11288, Category::LETTER_OTHER),
    RangeRecord::new(0x1128A, 0x1128D, Category::LETTER_OTHER),
    RangeRecord::new(0x1128F, 0x1129D, Category::LETTER_OTHER),
    RangeRecord::new(0x1129F, 0x112A8, Category::LETTER_OTHER),
    RangeRecord::new(0x112A9, 0x112A9, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x112B0, 0x112DE, Category::LETTER_OTHER),
    RangeRecord::new(0x112DF, 0x112DF, Category::MARK_NON_SPACING),
    RangeRecord::new(0x112E0, 0x112E2, Category::MARK_SPACING),
    RangeRecord::new(0x112E3, 0x112EA, Category::MARK_NON_SPACING),
    RangeRecord::new(0x112F0, 0x112F9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x11300, 0x11301, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11302, 0x11303, Category::MARK_SPACING),
    RangeRecord::new(0x11305, 0x1130C, Category::LETTER_OTHER),
    RangeRecord::new(0x1130F, 0x11310, Category::LETTER_OTHER),
    RangeRecord::new(0x11313, 0x11328, Category::LETTER_OTHER),
    RangeRecord::new(0x1132A, 0x11330, Category::LETTER_OTHER),
    RangeRecord::new(0x11332, 0x11333, Category::LETTER_OTHER),
    RangeRecord::new(0x11335, 0x11339, Category::LETTER_OTHER),
    RangeRecord::new(0x1133B, 0x1133C, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1133D, 0x1133D, Category::LETTER_OTHER),
    RangeRecord::new(0x1133E, 0x1133F, Category::MARK_SPACING),
    RangeRecord::new(0x11340, 0x11340, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11341, 0x11344, Category::MARK_SPACING),
    RangeRecord::new(0x11347, 0x11348, Category::MARK_SPACING),
    RangeRecord::new(0x1134B, 0x1134D, Category::MARK_SPACING),
    RangeRecord::new(0x11350, 0x11350, Category::LETTER_OTHER),
    RangeRecord::new(0x11357, 0x11357, Category::MARK_SPACING),
    RangeRecord::new(0x1135D, 0x11361, Category::LETTER_OTHER),
    RangeRecord::new(0x11362, 0x11363, Category::MARK_SPACING),
    RangeRecord::new(0x11366, 0x1136C, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11370, 0x11374, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11400, 0x11434, Category::LETTER_OTHER),
    RangeRecord::new(0x11435, 0x11437, Category::MARK_SPACING),
    RangeRecord::new(0x11438, 0x1143F, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11440, 0x11441, Category::MARK_SPACING),
    RangeRecord::new(0x11442, 0x11444, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11445, 0x11445, Category::MARK_SPACING),
    RangeRecord::new(0x11446, 0x11446, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11447, 0x1144A, Category::LETTER_OTHER),
    RangeRecord::new(0x1144B, 0x1144F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x11450, 0x11459, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x1145A, 0x1145B, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1145D, 0x1145D, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1145E, 0x1145E, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1145F, 0x11461, Category::LETTER_OTHER),
    RangeRecord::new(0x11480, 0x114AF, Category::LETTER_OTHER),
    RangeRecord::new(0x114B0, 0x114B2, Category::MARK_SPACING),
    RangeRecord::new(0x114B3, 0x114B8, Category::MARK_NON_SPACING),
    RangeRecord::new(0x114B9, 0x114B9, Category::MARK_SPACING),
    RangeRecord::new(0x114BA, 0x114BA, Category::MARK_NON_SPACING),
    RangeRecord::new(0x114BB, 0x114BE, Category::MARK_SPACING),
    RangeRecord::new(0x114BF, 0x114C0, Category::MARK_NON_SPACING),
    RangeRecord::new(0x114C1, 0x114C1, Category::MARK_SPACING),
    RangeRecord::new(0x114C2, 0x114C3, Category::MARK_NON_SPACING),
    RangeRecord::new(0x114C4, 0x114C5, Category::LETTER_OTHER),
    RangeRecord::new(0x114C6, 0x114C6, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x114C7, 0x114C7, Category::LETTER_OTHER),
    RangeRecord::new(0x114D0, 0x114D9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x11580, 0x115AE, Category::LETTER_OTHER),
    RangeRecord::new(0x115AF, 0x115B1, Category::MARK_SPACING),
    RangeRecord::new(0x115B2, 0x115B5, Category::MARK_NON_SPACING),
    RangeRecord::new(0x115B8, 0x115BB, Category::MARK_SPACING),
    RangeRecord::new(0x115BC, 0x115BD, Category::MARK_NON_SPACING),
    RangeRecord::new(0x115BE, 0x115BE, Category::MARK_SPACING),
    RangeRecord::new(0x115BF, 0x115C0, Category::MARK_NON_SPACING),
    RangeRecord::new(0x115C1, 0x115D7, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x115D8, 0x115DB, Category::LETTER_OTHER),
    RangeRecord::new(0x115DC, 0x115DD, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11600, 0x1162F, Category::LETTER_OTHER),
    RangeRecord::new(0x11630, 0x11632, Category::MARK_SPACING),
    RangeRecord::new(0x11633, 0x1163A, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1163B, 0x1163C, Category::MARK_SPACING),
    RangeRecord::new(0x1163D, 0x1163D, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1163E, 0x1163E, Category::MARK_SPACING),
    RangeRecord::new(0x1163F, 0x11640, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11641, 0x11643, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x11644, 0x11644, Category::LETTER_OTHER),
    RangeRecord::new(0x11650, 0x11659, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x11660, 0x1166C, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x11680, 0x116AA, Category::LETTER_OTHER),
    RangeRecord::new(0x116AB, 0x116AB, Category::MARK_NON_SPACING),
    RangeRecord::new(0x116AC, 0x116AC, Category::MARK_SPACING),
    RangeRecord::new(0x116AD, 0x116AD, Category::MARK_NON_SPACING),
    RangeRecord::new(0x116AE, 0x116AF, Category::MARK_SPACING),
    RangeRecord::new(0x116B0, 0x116B5, Category::MARK_NON_SPACING),
    RangeRecord::new(0x116B6, 0x116B6, Category::MARK_SPACING),
    RangeRecord::new(0x116B7, 0x116B7, Category::MARK_NON_SPACING),
    RangeRecord::new(0x116B8, 0x116B8, Category::LETTER_OTHER),
    RangeRecord::new(0x116B9, 0x116B9, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x116C0, 0x116C9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x11700, 0x1171A, Category::LETTER_OTHER),
    RangeRecord::new(0x1171D, 0x1171F, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11720, 0x11721, Category::MARK_SPACING),
    RangeRecord::new(0x11722, 0x11725, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11726, 0x11726, Category::MARK_SPACING),
    RangeRecord::new(0x11727, 0x1172B, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11730, 0x11739, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x1173A, 0x1173B, Category::NUMBER_OTHER),
    RangeRecord::new(0x1173C, 0x1173E, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1173F, 0x1173F, Category::SYMBOL_OTHER),
    RangeRecord::new(0x11740, 0x11746, Category::LETTER_OTHER),
    RangeRecord::new(0x11800, 0x1182B, Category::LETTER_OTHER),
    RangeRecord::new(0x1182C, 0x1182E, Category::MARK_SPACING),
    RangeRecord::new(0x1182F, 0x11837, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11838, 0x11838, Category::MARK_SPACING),
    RangeRecord::new(0x11839, 0x1183A, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1183B, 0x1183B, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x118A0, 0x118BF, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x118C0, 0x118DF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x118E0, 0x118E9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x118EA, 0x118F2, Category::NUMBER_OTHER),
    RangeRecord::new(0x118FF, 0x11906, Category::LETTER_OTHER),
    RangeRecord::new(0x11909, 0x11909, Category::LETTER_OTHER),
    RangeRecord::new(0x1190C, 0x11913, Category::LETTER_OTHER),
    RangeRecord::new(0x11915, 0x11916, Category::LETTER_OTHER),
    RangeRecord::new(0x11918, 0x1192F, Category::LETTER_OTHER),
    RangeRecord::new(0x11930, 0x11935, Category::MARK_SPACING),
    RangeRecord::new(0x11937, 0x11938, Category::MARK_SPACING),
    RangeRecord::new(0x1193B, 0x1193C, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1193D, 0x1193D, Category::MARK_SPACING),
    RangeRecord::new(0x1193E, 0x1193E, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1193F, 0x1193F, Category::LETTER_OTHER),
    RangeRecord::new(0x11940, 0x11940, Category::MARK_SPACING),
    RangeRecord::new(0x11941, 0x11941, Category::LETTER_OTHER),
    RangeRecord::new(0x11942, 0x11942, Category::MARK_SPACING),
    RangeRecord::new(0x11943, 0x11943, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11944, 0x11946, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x11950, 0x11959, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x119A0, 0x119A7, Category::LETTER_OTHER),
    RangeRecord::new(0x119AA, 0x119D0, Category::LETTER_OTHER),
    RangeRecord::new(0x119D1, 0x119D3, Category::MARK_SPACING),
    RangeRecord::new(0x119D4, 0x119D7, Category::MARK_NON_SPACING),
    RangeRecord::new(0x119DA, 0x119DB, Category::MARK_NON_SPACING),
    RangeRecord::new(0x119DC, 0x119DF, Category::MARK_SPACING),
    RangeRecord::new(0x119E0, 0x119E0, Category::MARK_NON_SPACING),
    RangeRecord::new(0x119E1, 0x119E1, Category::LETTER_OTHER),
    RangeRecord::new(0x119E2, 0x119E2, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x119E3, 0x119E3, Category::LETTER_OTHER),
    RangeRecord::new(0x119E4, 0x119E4, Category::MARK_SPACING),
    RangeRecord::new(0x11A00, 0x11A00, Category::LETTER_OTHER),
    RangeRecord::new(0x11A01, 0x11A0A, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11A0B, 0x11A32, Category::LETTER_OTHER),
    RangeRecord::new(0x11A33, 0x11A38, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11A39, 0x11A39, Category::MARK_SPACING),
    RangeRecord::new(0x11A3A, 0x11A3A, Category::LETTER_OTHER),
    RangeRecord::new(0x11A3B, 0x11A3E, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11A3F, 0x11A46, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x11A47, 0x11A47, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11A50, 0x11A50, Category::LETTER_OTHER),
    RangeRecord::new(0x11A51, 0x11A56, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11A57, 0x11A58, Category::MARK_SPACING),
    RangeRecord::new(0x11A59, 0x11A5B, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11A5C, 0x11A89, Category::LETTER_OTHER),
    RangeRecord::new(0x11A8A, 0x11A96, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11A97, 0x11A97, Category::MARK_SPACING),
    RangeRecord::new(0x11A98, 0x11A99, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11A9A, 0x11A9C, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x11A9D, 0x11A9D, Category::LETTER_OTHER),
    RangeRecord::new(0x11A9E, 0x11AA2, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x11AB0, 0x11AF8, Category::LETTER_OTHER),
    RangeRecord::new(0x11B00, 0x11B09, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x11C00, 0x11C08, Category::LETTER_OTHER),
    RangeRecord::new(0x11C0A, 0x11C2E, Category::LETTER_OTHER),
    RangeRecord::new(0x11C2F, 0x11C2F, Category::MARK_SPACING),
    RangeRecord::new(0x11C30, 0x11C36, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11C38, 0x11C3D, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11C3E, 0x11C3E, Category::MARK_SPACING),
    RangeRecord::new(0x11C3F, 0x11C3F, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11C40, 0x11C40, Category::LETTER_OTHER),
    RangeRecord::new(0x11C41, 0x11C45, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x11C50, 0x11C59, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x11C5A, 0x11C6C, Category::NUMBER_OTHER),
    RangeRecord::new(0x11C70, 0x11C71, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x11C72, 0x11C8F, Category::LETTER_OTHER),
    RangeRecord::new(0x11C92, 0x11CA7, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11CA9, 0x11CA9, Category::MARK_SPACING),
    RangeRecord::new(0x11CAA, 0x11CB0, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11CB1, 0x11CB1, Category::MARK_SPACING),
    RangeRecord::new(0x11CB2, 0x11CB3, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11CB4, 0x11CB4, Category::MARK_SPACING),
    RangeRecord::new(0x11CB5, 0x11CB6, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11D00, 0x11D06, Category::LETTER_OTHER),
    RangeRecord::new(0x11D08, 0x11D09, Category::LETTER_OTHER),
    RangeRecord::new(0x11D0B, 0x11D30, Category::LETTER_OTHER),
    RangeRecord::new(0x11D31, 0x11D36, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11D3A, 0x11D3A, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11D3C, 0x11D3D, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11D3F, 0x11D45, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11D46, 0x11D46, Category::LETTER_OTHER),
    RangeRecord::new(0x11D47, 0x11D47, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11D50, 0x11D59, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x11D60, 0x11D65, Category::LETTER_OTHER),
    RangeRecord::new(0x11D67, 0x11D68, Category::LETTER_OTHER),
    RangeRecord::new(0x11D6A, 0x11D89, Category::LETTER_OTHER),
    RangeRecord::new(0x11D8A, 0x11D8E, Category::MARK_SPACING),
    RangeRecord::new(0x11D90, 0x11D91, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11D93, 0x11D94, Category::MARK_SPACING),
    RangeRecord::new(0x11D95, 0x11D95, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11D96, 0x11D96, Category::MARK_SPACING),
    RangeRecord::new(0x11D97, 0x11D97, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11D98, 0x11D98, Category::LETTER_OTHER),
    RangeRecord::new(0x11DA0, 0x11DA9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x11EE0, 0x11EF2, Category::LETTER_OTHER),
    RangeRecord::new(0x11EF3, 0x11EF4, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11EF5, 0x11EF6, Category::MARK_SPACING),
    RangeRecord::new(0x11EF7, 0x11EF8, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x11F00, 0x11F01, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11F02, 0x11F02, Category::LETTER_OTHER),
    RangeRecord::new(0x11F03, 0x11F03, Category::MARK_SPACING),
    RangeRecord::new(0x11F04, 0x11F10, Category::LETTER_OTHER),
    RangeRecord::new(0x11F12, 0x11F33, Category::LETTER_OTHER),
    RangeRecord::new(0x11F34, 0x11F35, Category::MARK_SPACING),
    RangeRecord::new(0x11F36, 0x11F3A, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11F3E, 0x11F3F, Category::MARK_SPACING),
    RangeRecord::new(0x11F40, 0x11F40, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11F41, 0x11F41, Category::MARK_SPACING),
    RangeRecord::new(0x11F42, 0x11F42, Category::MARK_NON_SPACING),
    RangeRecord::new(0x11F43, 0x11F4F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x11F50, 0x11F59, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x11FB0, 0x11FB0, Category::LETTER_OTHER),
    RangeRecord::new(0x11FC0, 0x11FD4, Category::NUMBER_OTHER),
    RangeRecord::new(0x11FD5, 0x11FDC, Category::SYMBOL_OTHER),
    RangeRecord::new(0x11FDD, 0x11FE0, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0x11FE1, 0x11FF1, Category::SYMBOL_OTHER),
    RangeRecord::new(0x11FFF, 0x11FFF, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x12000, 0x12399, Category::LETTER_OTHER),
    RangeRecord::new(0x12400, 0x1246E, Category::NUMBER_LETTER),
    RangeRecord::new(0x12470, 0x12474, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x12480, 0x12543, Category::LETTER_OTHER),
    RangeRecord::new(0x12F90, 0x12FF0, Category::LETTER_OTHER),
    RangeRecord::new(0x12FF1, 0x12FF2, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x13000, 0x1342F, Category::LETTER_OTHER),
    RangeRecord::new(0x13430, 0x1343F, Category::FORMAT),
    RangeRecord::new(0x13440, 0x13440, Category::MARK_NON_SPACING),
    RangeRecord::new(0x13441, 0x13446, Category::LETTER_OTHER),
    RangeRecord::new(0x13447, 0x13455, Category::MARK_NON_SPACING),
    RangeRecord::new(0x14400, 0x14646, Category::LETTER_OTHER),
    RangeRecord::new(0x16800, 0x16A38, Category::LETTER_OTHER),
    RangeRecord::new(0x16A40, 0x16A5E, Category::LETTER_OTHER),
    RangeRecord::new(0x16A60, 0x16A69, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x16A6E, 0x16A6F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x16A70, 0x16ABE, Category::LETTER_OTHER),
    RangeRecord::new(0x16AC0, 0x16AC9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x16AD0, 0x16AED, Category::LETTER_OTHER),
    RangeRecord::new(0x16AF0, 0x16AF4, Category::MARK_NON_SPACING),
    RangeRecord::new(0x16AF5, 0x16AF5, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x16B00, 0x16B2F, Category::LETTER_OTHER),
    RangeRecord::new(0x16B30, 0x16B36, Category::MARK_NON_SPACING),
    RangeRecord::new(0x16B37, 0x16B3B, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x16B3C, 0x16B3F, Category::SYMBOL_OTHER),
    RangeRecord::new(0x16B40, 0x16B43, Category::LETTER_MODIFIER),
    RangeRecord::new(0x16B44, 0x16B44, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x16B45, 0x16B45, Category::SYMBOL_OTHER),
    RangeRecord::new(0x16B50, 0x16B59, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x16B5B, 0x16B61, Category::NUMBER_OTHER),
    RangeRecord::new(0x16B63, 0x16B77, Category::LETTER_OTHER),
    RangeRecord::new(0x16B7D, 0x16B8F, Category::LETTER_OTHER),
    RangeRecord::new(0x16E40, 0x16E5F, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x16E60, 0x16E7F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x16E80, 0x16E96, Category::NUMBER_OTHER),
    RangeRecord::new(0x16E97, 0x16E9A, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x16F00, 0x16F4A, Category::LETTER_OTHER),
    RangeRecord::new(0x16F4F, 0x16F4F, Category::MARK_NON_SPACING),
    RangeRecord::new(0x16F50, 0x16F50, Category::LETTER_OTHER),
    RangeRecord::new(0x16F51, 0x16F87, Category::MARK_SPACING),
    RangeRecord::new(0x16F8F, 0x16F92, Category::MARK_NON_SPACING),
    RangeRecord::new(0x16F93, 0x16F9F, Category::LETTER_MODIFIER),
    RangeRecord::new(0x16FE0, 0x16FE1, Category::LETTER_MODIFIER),
    RangeRecord::new(0x16FE2, 0x16FE2, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x16FE3, 0x16FE3, Category::LETTER_MODIFIER),
    RangeRecord::new(0x16FE4, 0x16FE4, Category::MARK_NON_SPACING),
    RangeRecord::new(0x16FF0, 0x16FF1, Category::MARK_SPACING),
    RangeRecord::new(0x17000, 0x187F7, Category::LETTER_OTHER),
    RangeRecord::new(0x18800, 0x18CD5, Category::LETTER_OTHER),
    RangeRecord::new(0x18D00, 0x18D08, Category::LETTER_OTHER),
    RangeRecord::new(0x1AFF0, 0x1AFF3, Category::LETTER_MODIFIER),
    RangeRecord::new(0x1AFF5, 0x1AFFB, Category::LETTER_MODIFIER),
    RangeRecord::new(0x1AFFD, 0x1AFFE, Category::LETTER_MODIFIER),
    RangeRecord::new(0x1B000, 0x1B122, Category::LETTER_OTHER),
    RangeRecord::new(0x1B132, 0x1B132, Category::LETTER_OTHER),
    RangeRecord::new(0x1B150, 0x1B152, Category::LETTER_OTHER),
    RangeRecord::new(0x1B155, 0x1B155, Category::LETTER_OTHER),
    RangeRecord::new(0x1B164, 0x1B167, Category::LETTER_OTHER),
    RangeRecord::new(0x1B170, 0x1B2FB, Category::LETTER_OTHER),
    RangeRecord::new(0x1BC00, 0x1BC6A, Category::LETTER_OTHER),
    RangeRecord::new(0x1BC70, 0x1BC7C, Category::LETTER_OTHER),
    RangeRecord::new(0x1BC80, 0x1BC88, Category::LETTER_OTHER),
    RangeRecord::new(0x1BC90, 0x1BC99, Category::LETTER_OTHER),
    RangeRecord::new(0x1BC9C, 0x1BC9C, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1BC9D, 0x1BC9E, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1BC9F, 0x1BC9F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1BCA0, 0x1BCA3, Category::FORMAT),
    RangeRecord::new(0x1CF00, 0x1CF2D, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1CF30, 0x1CF46, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1CF50, 0x1CFC3, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1D000, 0x1D0F5, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1D100, 0x1D126, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1D129, 0x1D164, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1D165, 0x1D166, Category::MARK_SPACING),
    RangeRecord::new(0x1D167, 0x1D169, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1D16A, 0x1D16C, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1D16D, 0x1D172, Category::MARK_SPACING),
    RangeRecord::new(0x1D173, 0x1D17A, Category::FORMAT),
    RangeRecord::new(0x1D17B, 0x1D182, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1D183, 0x1D184, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1D185, 0x1D18B, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1D18C, 0x1D1A9, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1D1AA, 0x1D1AD, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1D1AE, 0x1D1EA, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1D200, 0x1D241, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1D242, 0x1D244, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1D245, 0x1D245, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1D2C0, 0x1D2D3, Category::NUMBER_OTHER),
    RangeRecord::new(0x1D2E0, 0x1D2F3, Category::NUMBER_OTHER),
    RangeRecord::new(0x1D300, 0x1D356, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1D360, 0x1D378, Category::NUMBER_OTHER),
    RangeRecord::new(0x1D400, 0x1D419, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D41A, 0x1D433, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D434, 0x1D44D, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D44E, 0x1D454, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D456, 0x1D467, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D468, 0x1D481, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D482, 0x1D49B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D49C, 0x1D49C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D49E, 0x1D49F, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D4A2, 0x1D4A2, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D4A5, 0x1D4A6, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D4A9, 0x1D4AC, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D4AE, 0x1D4B5, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D4B6, 0x1D4B9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D4BB, 0x1D4BB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D4BD, 0x1D4C3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D4C5, 0x1D4CF, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D4D0, 0x1D4E9, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D4EA, 0x1D503, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D504, 0x1D505, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D507, 0x1D50A, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D50D, 0x1D514, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D516, 0x1D51C, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D51E, 0x1D537, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D538, 0x1D539, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D53B, 0x1D53E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D540, 0x1D544, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D546, 0x1D546, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D54A, 0x1D550, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D552, 0x1D56B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D56C, 0x1D585, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D586, 0x1D59F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D5A0, 0x1D5B9, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D5BA, 0x1D5D3, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D5D4, 0x1D5ED, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D5EE, 0x1D607, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D608, 0x1D621, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D622, 0x1D63B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D63C, 0x1D655, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D656, 0x1D66F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D670, 0x1D689, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D68A, 0x1D6A5, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D6A8, 0x1D6C0, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D6C1, 0x1D6C1, Category::SYMBOL_MATH),
    RangeRecord::new(0x1D6C2, 0x1D6DA, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D6DB, 0x1D6DB, Category::SYMBOL_MATH),
    RangeRecord::new(0x1D6DC, 0x1D6E1, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D6E2, 0x1D6FA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D6FB, 0x1D6FB, Category::SYMBOL_MATH),
    RangeRecord::new(0x1D6FC, 0x1D714, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D715, 0x1D715, Category::SYMBOL_MATH),
    RangeRecord::new(0x1D716, 0x1D71B, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D71C, 0x1D734, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D735, 0x1D735, Category::SYMBOL_MATH),
    RangeRecord::new(0x1D736, 0x1D74E, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D74F, 0x1D74F, Category::SYMBOL_MATH),
    RangeRecord::new(0x1D750, 0x1D755, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D756, 0x1D76E, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D76F, 0x1D76F, Category::SYMBOL_MATH),
    RangeRecord::new(0x1D770, 0x1D788, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D789, 0x1D789, Category::SYMBOL_MATH),
    RangeRecord::new(0x1D78A, 0x1D78F, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D790, 0x1D7A8, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D7A9, 0x1D7A9, Category::SYMBOL_MATH),
    RangeRecord::new(0x1D7AA, 0x1D7C2, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D7C3, 0x1D7C3, Category::SYMBOL_MATH),
    RangeRecord::new(0x1D7C4, 0x1D7C9, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D7CA, 0x1D7CA, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1D7CB, 0x1D7CB, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1D7CE, 0x1D7FF, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x1D800, 0x1D9FF, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1DA00, 0x1DA36, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1DA37, 0x1DA3A, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1DA3B, 0x1DA6C, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1DA6D, 0x1DA74, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1DA75, 0x1DA75, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1DA76, 0x1DA83, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1DA84, 0x1DA84, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1DA85, 0x1DA86, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1DA87, 0x1DA8B, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1DA9B, 0x1DA9F, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1DAA1, 0x1DAAF, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1DF00, 0x1DF09, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1DF0A, 0x1DF0A, Category::LETTER_OTHER),
    RangeRecord::new(0x1DF0B, 0x1DF1E, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1DF25, 0x1DF2A, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E000, 0x1E006, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1E008, 0x1E018, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1E01B, 0x1E021, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1E023, 0x1E024, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1E026, 0x1E02A, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1E030, 0x1E06D, Category::LETTER_MODIFIER),
    RangeRecord::new(0x1E08F, 0x1E08F, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1E100, 0x1E12C, Category::LETTER_OTHER),
    RangeRecord::new(0x1E130, 0x1E136, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1E137, 0x1E13D, Category::LETTER_MODIFIER),
    RangeRecord::new(0x1E140, 0x1E149, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x1E14E, 0x1E14E, Category::LETTER_OTHER),
    RangeRecord::new(0x1E14F, 0x1E14F, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1E290, 0x1E2AD, Category::LETTER_OTHER),
    RangeRecord::new(0x1E2AE, 0x1E2AE, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1E2C0, 0x1E2EB, Category::LETTER_OTHER),
    RangeRecord::new(0x1E2EC, 0x1E2EF, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1E2F0, 0x1E2F9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x1E2FF, 0x1E2FF, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0x1E4D0, 0x1E4EA, Category::LETTER_OTHER),
    RangeRecord::new(0x1E4EB, 0x1E4EB, Category::LETTER_MODIFIER),
    RangeRecord::new(0x1E4EC, 0x1E4EF, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1E4F0, 0x1E4F9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x1E7E0, 0x1E7E6, Category::LETTER_OTHER),
    RangeRecord::new(0x1E7E8, 0x1E7EB, Category::LETTER_OTHER),
    RangeRecord::new(0x1E7ED, 0x1E7EE, Category::LETTER_OTHER),
    RangeRecord::new(0x1E7F0, 0x1E7FE, Category::LETTER_OTHER),
    RangeRecord::new(0x1E800, 0x1E8C4, Category::LETTER_OTHER),
    RangeRecord::new(0x1E8C7, 0x1E8CF, Category::NUMBER_OTHER),
    RangeRecord::new(0x1E8D0, 0x1E8D6, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1E900, 0x1E921, Category::LETTER_UPPERCASE),
    RangeRecord::new(0x1E922, 0x1E943, Category::LETTER_LOWERCASE),
    RangeRecord::new(0x1E944, 0x1E94A, Category::MARK_NON_SPACING),
    RangeRecord::new(0x1E94B, 0x1E94B, Category::LETTER_MODIFIER),
    RangeRecord::new(0x1E950, 0x1E959, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x1E95E, 0x1E95F, Category::PUNCTUATION_OTHER),
    RangeRecord::new(0x1EC71, 0x1ECAB, Category::NUMBER_OTHER),
    RangeRecord::new(0x1ECAC, 0x1ECAC, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1ECAD, 0x1ECAF, Category::NUMBER_OTHER),
    RangeRecord::new(0x1ECB0, 0x1ECB0, Category::SYMBOL_CURRENCY),
    RangeRecord::new(0x1ECB1, 0x1ECB4, Category::NUMBER_OTHER),
    RangeRecord::new(0x1ED01, 0x1ED2D, Category::NUMBER_OTHER),
    RangeRecord::new(0x1ED2E, 0x1ED2E, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1ED2F, 0x1ED3D, Category::NUMBER_OTHER),
    RangeRecord::new(0x1EE00, 0x1EE03, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE05, 0x1EE1F, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE21, 0x1EE22, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE24, 0x1EE24, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE27, 0x1EE27, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE29, 0x1EE32, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE34, 0x1EE37, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE39, 0x1EE39, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE3B, 0x1EE3B, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE42, 0x1EE42, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE47, 0x1EE47, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE49, 0x1EE49, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE4B, 0x1EE4B, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE4D, 0x1EE4F, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE51, 0x1EE52, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE54, 0x1EE54, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE57, 0x1EE57, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE59, 0x1EE59, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE5B, 0x1EE5B, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE5D, 0x1EE5D, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE5F, 0x1EE5F, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE61, 0x1EE62, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE64, 0x1EE64, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE67, 0x1EE6A, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE6C, 0x1EE72, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE74, 0x1EE77, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE79, 0x1EE7C, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE7E, 0x1EE7E, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE80, 0x1EE89, Category::LETTER_OTHER),
    RangeRecord::new(0x1EE8B, 0x1EE9B, Category::LETTER_OTHER),
    RangeRecord::new(0x1EEA1, 0x1EEA3, Category::LETTER_OTHER),
    RangeRecord::new(0x1EEA5, 0x1EEA9, Category::LETTER_OTHER),
    RangeRecord::new(0x1EEAB, 0x1EEBB, Category::LETTER_OTHER),
    RangeRecord::new(0x1EEF0, 0x1EEF1, Category::SYMBOL_MATH),
    RangeRecord::new(0x1F000, 0x1F02B, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F030, 0x1F093, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F0A0, 0x1F0AE, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F0B1, 0x1F0BF, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F0C1, 0x1F0CF, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F0D1, 0x1F0F5, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F100, 0x1F10C, Category::NUMBER_OTHER),
    RangeRecord::new(0x1F10D, 0x1F1AD, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F1E6, 0x1F202, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F210, 0x1F23B, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F240, 0x1F248, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F250, 0x1F251, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F260, 0x1F265, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F300, 0x1F3FA, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F3FB, 0x1F3FF, Category::SYMBOL_MODIFIER),
    RangeRecord::new(0x1F400, 0x1F6D7, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F6DC, 0x1F6EC, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F6F0, 0x1F6FC, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F700, 0x1F776, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F77B, 0x1F7D9, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F7E0, 0x1F7EB, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F7F0, 0x1F7F0, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F800, 0x1F80B, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F810, 0x1F847, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F850, 0x1F859, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F860, 0x1F887, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F890, 0x1F8AD, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F8B0, 0x1F8B1, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1F900, 0x1FA53, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1FA60, 0x1FA6D, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1FA70, 0x1FA7C, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1FA80, 0x1FA88, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1FA90, 0x1FABD, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1FABF, 0x1FAC5, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1FACE, 0x1FADB, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1FAE0, 0x1FAE8, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1FAF0, 0x1FAF8, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1FB00, 0x1FB92, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1FB94, 0x1FBCA, Category::SYMBOL_OTHER),
    RangeRecord::new(0x1FBF0, 0x1FBF9, Category::NUMBER_DECIMAL),
    RangeRecord::new(0x20000, 0x2A6DF, Category::LETTER_OTHER),
    RangeRecord::new(0x2A700, 0x2B739, Category::LETTER_OTHER),
    RangeRecord::new(0x2B740, 0x2B81D, Category::LETTER_OTHER),
    RangeRecord::new(0x2B820, 0x2CEA1, Category::LETTER_OTHER),
    RangeRecord::new(0x2CEB0, 0x2EBE0, Category::LETTER_OTHER),
    RangeRecord::new(0x2EBF0, 0x2EE5D, Category::LETTER_OTHER),
    RangeRecord::new(0x2F800, 0x2FA1D, Category::LETTER_OTHER),
    RangeRecord::new(0x30000, 0x3134A, Category::LETTER_OTHER),
    RangeRecord::new(0x31350, 0x323AF, Category::LETTER_OTHER),
    RangeRecord::new(0xE0001, 0xE0001, Category::FORMAT),
    RangeRecord::new(0xE0020, 0xE007F, Category::FORMAT),
    RangeRecord::new(0xE0100, 0xE01EF, Category::MARK_NON_SPACING),
    RangeRecord::new(0xF0000, 0xFFFFD, Category::PRIVATE_USE),
    RangeRecord::new(0x100000, 0x10FFFD, Category::PRIVATE_USE),
];
