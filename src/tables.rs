//! Process-wide constant tables for deflate decoding.
//!
//! Everything here is immutable after first use: the numeric base and
//! extra-bit tables are statics, and the fixed Huffman trees are built
//! once behind a `OnceLock` and shared by every decode.

use std::sync::OnceLock;

use crate::huffman::HuffmanTable;

/// Base match length for length symbols 257..=285. Index 28 is the exact
/// length 258 and carries no extra bits.
pub(crate) static LENGTH_BASE: [u16; 29] = [
    3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 15, 17, 19, 23, 27, 31, 35, 43, 51, 59, 67, 83, 99, 115, 131,
    163, 195, 227, 258,
];

/// Extra bits read after each length symbol.
pub(crate) static LENGTH_EXTRA_BITS: [u8; 29] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 0,
];

/// Base distance for distance symbols 0..=29.
pub(crate) static DIST_BASE: [u16; 30] = [
    1, 2, 3, 4, 5, 7, 9, 13, 17, 25, 33, 49, 65, 97, 129, 193, 257, 385, 513, 769, 1025, 1537,
    2049, 3073, 4097, 6145, 8193, 12289, 16385, 24577,
];

/// Extra bits read after each distance symbol.
pub(crate) static DIST_EXTRA_BITS: [u8; 30] = [
    0, 0, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 12, 12, 13,
    13,
];

/// Order in which a dynamic block header stores the code-length
/// alphabet's own code lengths (RFC 1951 section 3.2.7).
pub(crate) static CODELEN_ORDER: [usize; 19] = [
    16, 17, 18, 0, 8, 7, 9, 6, 10, 5, 11, 4, 12, 3, 13, 2, 14, 1, 15,
];

/// Fixed literal/length and distance trees (RFC 1951 section 3.2.6),
/// built on first use and shared read-only by every decode.
pub(crate) fn fixed_trees() -> (&'static HuffmanTable, &'static HuffmanTable) {
    static FIXED_LITLEN: OnceLock<HuffmanTable> = OnceLock::new();
    static FIXED_DIST: OnceLock<HuffmanTable> = OnceLock::new();

    let litlen = FIXED_LITLEN.get_or_init(|| {
        let mut lengths = [0u8; 288];
        lengths[0..144].fill(8);
        lengths[144..256].fill(9);
        lengths[256..280].fill(7);
        lengths[280..288].fill(8);
        HuffmanTable::from_lengths(&lengths)
    });

    let dist = FIXED_DIST.get_or_init(|| HuffmanTable::from_lengths(&[5u8; 32]));

    (litlen, dist)
}
