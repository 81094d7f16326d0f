//! Block-level deflate decoding: header parsing, dynamic tree
//! descriptors, and LZ77 expansion into the caller's buffer.

use crate::bits::BitReader;
use crate::error::{DataError, InflateResult};
use crate::huffman::HuffmanTable;
use crate::tables::{
    fixed_trees, CODELEN_ORDER, DIST_BASE, DIST_EXTRA_BITS, LENGTH_BASE, LENGTH_EXTRA_BITS,
};

/// Largest dynamic-block descriptor: 288 literal/length plus 32 distance
/// code lengths.
const MAX_CODE_LENGTHS: usize = 288 + 32;

/// End of block symbol in the literal/length alphabet.
const END_OF_BLOCK: u16 = 256;

/// Decompress a raw deflate stream into a preallocated output slice.
///
/// Returns the number of bytes written. `dest` must be at least as long
/// as the decompressed data. Trailing bits in the last consumed byte and
/// any input bytes past the final block are left unread.
pub fn inflate_into(source: &[u8], dest: &mut [u8]) -> InflateResult<usize> {
    let mut bits = BitReader::new(source);
    let mut out_pos = 0;

    loop {
        let bfinal = bits.read_bit()?;
        let btype = bits.read_bits(2, 0)?;

        match btype {
            0 => out_pos = stored_block(&mut bits, dest, out_pos)?,
            1 => {
                let (litlen_tree, dist_tree) = fixed_trees();
                out_pos = huffman_block(&mut bits, dest, out_pos, litlen_tree, dist_tree)?;
            }
            2 => out_pos = dynamic_block(&mut bits, dest, out_pos)?,
            _ => return Err(DataError("reserved block type")),
        }

        if bfinal == 1 {
            break;
        }
    }

    Ok(out_pos)
}

/// Stored block (BTYPE=0): byte-aligned verbatim copy.
fn stored_block(bits: &mut BitReader, dest: &mut [u8], out_pos: usize) -> InflateResult<usize> {
    bits.align_to_byte();

    let len = bits.read_u16_le()? as usize;
    let nlen = bits.read_u16_le()?;
    if len != (!nlen) as usize {
        return Err(DataError("stored block length mismatch"));
    }

    if dest.len() - out_pos < len {
        return Err(DataError("output buffer too small"));
    }
    let run = bits.take_bytes(len)?;
    dest[out_pos..out_pos + len].copy_from_slice(run);

    Ok(out_pos + len)
}

/// Dynamic block (BTYPE=2): decode the code-length alphabet, then the
/// literal/length and distance trees it describes.
fn dynamic_block(bits: &mut BitReader, dest: &mut [u8], out_pos: usize) -> InflateResult<usize> {
    let hlit = bits.read_bits(5, 257)? as usize;
    let hdist = bits.read_bits(5, 1)? as usize;
    let hclen = bits.read_bits(4, 4)? as usize;

    // The code-length alphabet's own lengths arrive permuted; positions
    // past HCLEN stay zero.
    let mut codelen_lengths = [0u8; 19];
    for &index in CODELEN_ORDER.iter().take(hclen) {
        codelen_lengths[index] = bits.read_bits(3, 0)? as u8;
    }
    let codelen_tree = HuffmanTable::from_lengths(&codelen_lengths);

    let total = hlit + hdist;
    let mut lengths = [0u8; MAX_CODE_LENGTHS];
    let mut filled = 0;

    while filled < total {
        let symbol = codelen_tree.decode(bits)?;
        match symbol {
            0..=15 => {
                lengths[filled] = symbol as u8;
                filled += 1;
            }
            16 => {
                // Repeat the previous length 3..=6 times.
                if filled == 0 {
                    return Err(DataError("repeat with no previous code length"));
                }
                let repeat = bits.read_bits(2, 3)? as usize;
                if repeat > total - filled {
                    return Err(DataError("code length repeat overflows header"));
                }
                let prev = lengths[filled - 1];
                lengths[filled..filled + repeat].fill(prev);
                filled += repeat;
            }
            17 => {
                // Repeat zero 3..=10 times; the entries are already zero.
                let repeat = bits.read_bits(3, 3)? as usize;
                if repeat > total - filled {
                    return Err(DataError("code length repeat overflows header"));
                }
                filled += repeat;
            }
            18 => {
                // Repeat zero 11..=138 times.
                let repeat = bits.read_bits(7, 11)? as usize;
                if repeat > total - filled {
                    return Err(DataError("code length repeat overflows header"));
                }
                filled += repeat;
            }
            _ => return Err(DataError("invalid code length symbol")),
        }
    }

    let litlen_tree = HuffmanTable::from_lengths(&lengths[..hlit]);
    let dist_tree = HuffmanTable::from_lengths(&lengths[hlit..total]);

    huffman_block(bits, dest, out_pos, &litlen_tree, &dist_tree)
}

/// Expand one Huffman-coded block (fixed or dynamic trees) until its end
/// of block symbol.
fn huffman_block(
    bits: &mut BitReader,
    dest: &mut [u8],
    mut out_pos: usize,
    litlen_tree: &HuffmanTable,
    dist_tree: &HuffmanTable,
) -> InflateResult<usize> {
    loop {
        let symbol = litlen_tree.decode(bits)?;

        if symbol < END_OF_BLOCK {
            if out_pos >= dest.len() {
                return Err(DataError("output buffer too small"));
            }
            dest[out_pos] = symbol as u8;
            out_pos += 1;
        } else if symbol == END_OF_BLOCK {
            return Ok(out_pos);
        } else {
            let length_code = (symbol - 257) as usize;
            if length_code >= LENGTH_BASE.len() {
                return Err(DataError("reserved length symbol"));
            }
            let length = bits.read_bits(
                LENGTH_EXTRA_BITS[length_code] as u32,
                LENGTH_BASE[length_code] as u32,
            )? as usize;

            let dist_code = dist_tree.decode(bits)? as usize;
            if dist_code >= DIST_BASE.len() {
                return Err(DataError("reserved distance symbol"));
            }
            let distance = bits.read_bits(
                DIST_EXTRA_BITS[dist_code] as u32,
                DIST_BASE[dist_code] as u32,
            )? as usize;

            if distance > out_pos {
                return Err(DataError("distance exceeds bytes written"));
            }
            if dest.len() - out_pos < length {
                return Err(DataError("output buffer too small"));
            }

            // Byte at a time: an overlapping copy (distance < length) must
            // re-read bytes written earlier in the same match.
            let mut src = out_pos - distance;
            for _ in 0..length {
                dest[out_pos] = dest[src];
                out_pos += 1;
                src += 1;
            }
        }
    }
}
