use super::storage::Storage;
use crate::geo::edition::{SegmentLayout, COUNTRY_BEGIN, STANDARD_RECORD_LENGTH};
use crate::geo::{Charset, DatabaseEdition, OpenError, RawString};

pub(crate) const STRUCTURE_INFO_DELIMITER: [u8; 3] = [0xFF; 3];
pub(crate) const DATABASE_INFO_DELIMITER: [u8; 3] = [0; 3];
const STRUCTURE_INFO_MAX_SIZE: u64 = 20;
pub(crate) const DATABASE_INFO_MAX_SIZE: u64 = 100;
/// Newer files store the edition byte shifted by this value
const EDITION_SHIFT: u8 = 105;

/// Trailer of a database file: which edition it is and where its search tree ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StructureInfo {
    pub(crate) edition: DatabaseEdition,
    pub(crate) segment: u32,
    pub(crate) record_length: usize,
    /// Offset of the structure info delimiter, file length if there is none
    pub(crate) offset: u64,
}

pub(crate) fn read_u24(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .take(3)
        .rev()
        .fold(0, |acc, &byte| (acc << 8) | u32::from(byte))
}

impl StructureInfo {
    pub(crate) fn read(storage: &mut Storage) -> Result<Self, OpenError> {
        let len = storage.len();
        let last = match len.checked_sub(3) {
            Some(last) => last,
            None => return Err(OpenError::Truncated),
        };
        for offset in (0..=last).rev().take(STRUCTURE_INFO_MAX_SIZE as usize) {
            let mut delimiter = [0; 3];
            storage.read_at(offset, &mut delimiter)?;
            if delimiter != STRUCTURE_INFO_DELIMITER {
                continue;
            }

            let mut byte = [0; 1];
            if storage.read_at(offset + 3, &mut byte)? != 1 {
                return Err(OpenError::Truncated);
            }
            let mut edition_byte = byte[0];
            if edition_byte > EDITION_SHIFT {
                edition_byte -= EDITION_SHIFT;
            }
            let edition = DatabaseEdition::try_from(edition_byte)?;
            let record_length = edition.record_length();
            let segment = match edition.segment_layout() {
                SegmentLayout::Fixed(segment) => segment,
                SegmentLayout::Stored => {
                    let mut segment = [0; 3];
                    if storage.read_at(offset + 4, &mut segment)? != 3 {
                        return Err(OpenError::Truncated);
                    }
                    let segment = read_u24(&segment);
                    if u64::from(segment) * 2 * record_length as u64 > len {
                        return Err(OpenError::TreeOutOfBounds);
                    }
                    segment
                }
            };
            return Ok(Self {
                edition,
                segment,
                record_length,
                offset,
            });
        }

        Ok(Self {
            edition: DatabaseEdition::Country,
            segment: COUNTRY_BEGIN,
            record_length: STANDARD_RECORD_LENGTH,
            offset: len,
        })
    }

    /// Number of leading bytes holding the search tree
    pub(crate) fn tree_size(&self, file_len: u64) -> u64 {
        match self.edition.segment_layout() {
            SegmentLayout::Stored => u64::from(self.segment) * 2 * self.record_length as u64,
            SegmentLayout::Fixed(_) => file_len,
        }
    }

    /// Pointer into the data section for a tree leaf
    pub(crate) fn record_offset(&self, leaf: u32) -> u64 {
        u64::from(leaf) + (2 * self.record_length as u64 - 1) * u64::from(self.segment)
    }

    /// Free-form text stored in front of the structure info
    pub(crate) fn database_info(&self, storage: &mut Storage) -> std::io::Result<RawString> {
        let last = match self.offset.checked_sub(3) {
            Some(last) => last,
            None => return Ok(RawString::default()),
        };
        for offset in (0..=last).rev().take(DATABASE_INFO_MAX_SIZE as usize) {
            let mut delimiter = [0; 3];
            storage.read_at(offset, &mut delimiter)?;
            if delimiter != DATABASE_INFO_DELIMITER {
                continue;
            }
            let start = offset + 3;
            let size = (self.offset - start).min(DATABASE_INFO_MAX_SIZE);
            let mut info = vec![0; size as usize];
            let read = storage.read_at(start, &mut info)?;
            info.truncate(read);
            if let Some(end) = info.iter().position(|&byte| byte == 0) {
                info.truncate(end);
            }
            return Ok(RawString::new(info, Charset::Iso8859_1));
        }
        Ok(RawString::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trailer(edition_byte: u8, segment: Option<u32>) -> Vec<u8> {
        let mut data = vec![0; 64];
        data.extend_from_slice(&DATABASE_INFO_DELIMITER);
        data.extend_from_slice(b"TEST 20240101 Build 1");
        data.extend_from_slice(&STRUCTURE_INFO_DELIMITER);
        data.push(edition_byte);
        if let Some(segment) = segment {
            data.extend_from_slice(&segment.to_le_bytes()[..3]);
        }
        data
    }

    #[test]
    fn no_structure_info_is_country() {
        let mut storage = Storage::Memory(vec![0; 32]);
        let info = StructureInfo::read(&mut storage).unwrap();
        assert_eq!(info.edition, DatabaseEdition::Country);
        assert_eq!(info.segment, COUNTRY_BEGIN);
        assert_eq!(info.offset, 32);
        assert_eq!(info.tree_size(32), 32);
    }

    #[test]
    fn stored_segment() {
        let mut storage = Storage::Memory(trailer(2, Some(5)));
        let info = StructureInfo::read(&mut storage).unwrap();
        assert_eq!(info.edition, DatabaseEdition::CityRev1);
        assert_eq!(info.segment, 5);
        assert_eq!(info.record_length, 3);
        assert_eq!(info.tree_size(0), 30);
        assert_eq!(info.record_offset(7), 7 + 5 * 5);
    }

    #[test]
    fn shifted_edition_byte() {
        let mut storage = Storage::Memory(trailer(105 + 5, Some(2)));
        let info = StructureInfo::read(&mut storage).unwrap();
        assert_eq!(info.edition, DatabaseEdition::Org);
        assert_eq!(info.record_length, 4);
    }

    #[test]
    fn fixed_segment_ignores_trailing_bytes() {
        let mut storage = Storage::Memory(trailer(7, None));
        let info = StructureInfo::read(&mut storage).unwrap();
        assert_eq!(info.edition, DatabaseEdition::RegionRev0);
        assert_eq!(info.segment, 16700000);
    }

    #[test]
    fn unsupported_and_oversized() {
        let mut storage = Storage::Memory(trailer(99, None));
        assert!(matches!(
            StructureInfo::read(&mut storage),
            Err(OpenError::UnsupportedEdition(99))
        ));
        let mut storage = Storage::Memory(trailer(2, Some(1000)));
        assert!(matches!(
            StructureInfo::read(&mut storage),
            Err(OpenError::TreeOutOfBounds)
        ));
        let mut storage = Storage::Memory(vec![1, 2]);
        assert!(matches!(
            StructureInfo::read(&mut storage),
            Err(OpenError::Truncated)
        ));
    }

    #[test]
    fn info_string() {
        let mut storage = Storage::Memory(trailer(2, Some(5)));
        let info = StructureInfo::read(&mut storage).unwrap();
        assert_eq!(
            info.database_info(&mut storage).unwrap().decode().as_deref(),
            Some("TEST 20240101 Build 1")
        );

        let mut storage = Storage::Memory(vec![1; 32]);
        let info = StructureInfo::read(&mut storage).unwrap();
        assert_eq!(info.database_info(&mut storage).unwrap().decode(), None);
    }
}
