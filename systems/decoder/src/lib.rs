#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Decoder for the fixed-layout encounter tables bundled with the engine.
//!
//! Tables are little-endian records of a fixed width with no delimiters. A
//! [`BinLinker`] container packs several variable-length entries (one per
//! area) behind an offset table. Decoding is pure; the only failures are
//! buffers whose length does not fit the layout and code bytes outside their
//! enumerated range.

mod gen9;
mod linker;

use pidlab_core::DecodeError;
use tracing::trace;

pub use gen9::{decode_area9, decode_areas9, decode_tera9, SlotRecord, AREA_HEADER_LEN};
pub use linker::BinLinker;

/// A record type with a fixed byte width.
pub trait RecordLayout: Sized {
    /// Width of one record in bytes.
    const WIDTH: usize;

    /// Decodes one record; `record` is exactly [`RecordLayout::WIDTH`] bytes.
    fn read(record: &[u8]) -> Result<Self, DecodeError>;
}

/// Decodes exactly `count` records from `bytes`.
pub fn decode_table<R: RecordLayout>(bytes: &[u8], count: usize) -> Result<Vec<R>, DecodeError> {
    if bytes.len() != R::WIDTH * count {
        return Err(DecodeError::MalformedRecord {
            width: R::WIDTH,
            len: bytes.len(),
        });
    }
    read_records(bytes)
}

/// Decodes every record of a buffer whose length is a multiple of the record width.
pub fn decode_all<R: RecordLayout>(bytes: &[u8]) -> Result<Vec<R>, DecodeError> {
    if R::WIDTH == 0 || bytes.len() % R::WIDTH != 0 {
        return Err(DecodeError::MalformedRecord {
            width: R::WIDTH,
            len: bytes.len(),
        });
    }
    read_records(bytes)
}

fn read_records<R: RecordLayout>(bytes: &[u8]) -> Result<Vec<R>, DecodeError> {
    let records = bytes
        .chunks_exact(R::WIDTH)
        .map(R::read)
        .collect::<Result<Vec<_>, _>>()?;
    trace!(width = R::WIDTH, count = records.len(), "decoded record table");
    Ok(records)
}

pub(crate) fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

pub(crate) fn read_i16(bytes: &[u8], offset: usize) -> i16 {
    i16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

pub(crate) fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Pair(u16);

    impl RecordLayout for Pair {
        const WIDTH: usize = 2;

        fn read(record: &[u8]) -> Result<Self, DecodeError> {
            Ok(Self(read_u16(record, 0)))
        }
    }

    #[test]
    fn table_length_must_match_count() {
        let bytes = [1, 0, 2, 0];
        assert_eq!(
            decode_table::<Pair>(&bytes, 2).expect("two records"),
            vec![Pair(1), Pair(2)]
        );
        assert_eq!(
            decode_table::<Pair>(&bytes, 3),
            Err(DecodeError::MalformedRecord { width: 2, len: 4 })
        );
    }

    #[test]
    fn partial_trailing_record_is_rejected() {
        assert_eq!(
            decode_all::<Pair>(&[1, 0, 2]),
            Err(DecodeError::MalformedRecord { width: 2, len: 3 })
        );
        assert!(decode_all::<Pair>(&[]).expect("empty").is_empty());
    }

    #[test]
    fn signed_reads_are_little_endian() {
        assert_eq!(read_i16(&[0xFF, 0xFF], 0), -1);
        assert_eq!(read_u32(&[0x78, 0x56, 0x34, 0x12], 0), 0x1234_5678);
    }
}
