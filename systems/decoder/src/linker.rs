use pidlab_core::DecodeError;

use crate::{read_u16, read_u32};

const PREFIX_LEN: usize = 4;

/// Container of variable-length entries behind an offset table.
///
/// Layout: a two-byte identifier, a `u16` entry count, then `count + 1`
/// absolute `u32` offsets. Entry `i` spans `offsets[i]..offsets[i + 1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinLinker<'a> {
    identifier: [u8; 2],
    offsets: Vec<u32>,
    data: &'a [u8],
}

impl<'a> BinLinker<'a> {
    /// Parses the container header and validates every offset.
    pub fn parse(data: &'a [u8]) -> Result<Self, DecodeError> {
        if data.len() < PREFIX_LEN {
            return Err(DecodeError::Truncated {
                needed: PREFIX_LEN,
                len: data.len(),
            });
        }
        let count = usize::from(read_u16(data, 2));
        let header_len = PREFIX_LEN + (count + 1) * 4;
        if data.len() < header_len {
            return Err(DecodeError::Truncated {
                needed: header_len,
                len: data.len(),
            });
        }

        let offsets: Vec<u32> = (0..=count)
            .map(|index| read_u32(data, PREFIX_LEN + index * 4))
            .collect();
        let mut previous = header_len as u32;
        for offset in &offsets {
            if *offset < previous || *offset as usize > data.len() {
                return Err(DecodeError::InvalidField {
                    field: "offset",
                    value: *offset as i32,
                });
            }
            previous = *offset;
        }

        Ok(Self {
            identifier: [data[0], data[1]],
            offsets,
            data,
        })
    }

    /// Two-byte container identifier.
    #[must_use]
    pub const fn identifier(&self) -> [u8; 2] {
        self.identifier
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Whether the container holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes of entry `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a [u8]> {
        let start = *self.offsets.get(index)? as usize;
        let end = *self.offsets.get(index + 1)? as usize;
        self.data.get(start..end)
    }

    /// Entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        (0..self.len()).filter_map(move |index| self.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container(entries: &[&[u8]]) -> Vec<u8> {
        let mut bytes = b"sv".to_vec();
        bytes.extend_from_slice(&(entries.len() as u16).to_le_bytes());
        let mut offset = (4 + (entries.len() + 1) * 4) as u32;
        for entry in entries {
            bytes.extend_from_slice(&offset.to_le_bytes());
            offset += entry.len() as u32;
        }
        bytes.extend_from_slice(&offset.to_le_bytes());
        for entry in entries {
            bytes.extend_from_slice(entry);
        }
        bytes
    }

    #[test]
    fn entries_span_consecutive_offsets() {
        let bytes = container(&[&[1, 2, 3], &[], &[4]]);
        let linker = BinLinker::parse(&bytes).expect("valid container");
        assert_eq!(linker.identifier(), *b"sv");
        assert_eq!(linker.len(), 3);
        assert_eq!(linker.get(0), Some(&[1u8, 2, 3][..]));
        assert_eq!(linker.get(1), Some(&[][..]));
        assert_eq!(linker.get(2), Some(&[4u8][..]));
        assert_eq!(linker.get(3), None);
        assert_eq!(linker.iter().count(), 3);
    }

    #[test]
    fn short_offset_table_is_truncated() {
        let bytes = [b's', b'v', 2, 0, 12, 0, 0, 0];
        assert_eq!(
            BinLinker::parse(&bytes),
            Err(DecodeError::Truncated { needed: 16, len: 8 })
        );
    }

    #[test]
    fn offsets_past_the_end_are_rejected() {
        let mut bytes = container(&[&[9, 9]]);
        let last = bytes.len();
        bytes[8..12].copy_from_slice(&(last as u32 + 1).to_le_bytes());
        assert!(matches!(
            BinLinker::parse(&bytes),
            Err(DecodeError::InvalidField { field: "offset", .. })
        ));
    }
}
