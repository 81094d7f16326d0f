//! Raw DEFLATE (RFC 1951) decompression into caller-owned buffers.
//!
//! A one-shot decoder for the bare deflate bitstream: no zlib or gzip
//! framing, no checksums, no streaming. The caller supplies the
//! compressed input and an output buffer at least as large as the
//! decompressed data; [`inflate`] hands back the written prefix of that
//! buffer, and [`inflate_into`] returns the byte count instead.
//!
//! ```
//! // BFINAL=1, BTYPE=0 stored block carrying "Hello".
//! let compressed = [0x01, 0x05, 0x00, 0xFA, 0xFF, b'H', b'e', b'l', b'l', b'o'];
//! let mut buf = [0u8; 16];
//! let out = rawinflate::inflate(&compressed, &mut buf).unwrap();
//! assert_eq!(out, b"Hello");
//! ```

#[cfg(test)]
#[macro_use]
mod test_utils;

mod bits;
mod decode;
mod error;
mod huffman;
mod tables;


pub use decode::inflate_into;
pub use error::{DataError, InflateResult};

/// Decompress a raw deflate stream, returning the written prefix of
/// `dest`.
///
/// `dest` may be longer than the decompressed data; bytes past the
/// returned slice are left as they were. On error, the contents of `dest`
/// are unspecified.
pub fn inflate<'a>(source: &[u8], dest: &'a mut [u8]) -> InflateResult<&'a [u8]> {
    let written = inflate_into(source, dest)?;
    Ok(&dest[..written])
}
