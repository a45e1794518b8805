//! Pack entry header parsing: type tag, size, and (for deltas) the extra
//! base reference that immediately follows it.

use crate::varint;
use crate::{PackEntryType, PackError};
use git_hash::{HashAlgorithm, ObjectId};

/// A raw entry header read from a packfile, before any decompression.
#[derive(Debug, Clone)]
pub struct PackEntry {
    pub entry_type: PackEntryType,
    pub uncompressed_size: u64,
    /// Absolute offset of the start of compressed data in the pack.
    pub data_offset: u64,
    /// Number of bytes consumed by the header (type+size varint, plus the
    /// OFS_DELTA offset or REF_DELTA name when present).
    pub header_size: usize,
}

/// Parse a pack entry header starting at the given position in `data`.
///
/// `entry_offset` is the absolute offset of this entry in the pack file
/// (needed to resolve an OFS_DELTA's relative base offset).
pub fn parse_entry_header(data: &[u8], entry_offset: u64) -> Result<PackEntry, PackError> {
    if data.is_empty() {
        return Err(PackError::CorruptEntry(entry_offset));
    }

    let (type_tag, size, mut pos) =
        varint::decode_type_and_size(data).map_err(|_| PackError::CorruptEntry(entry_offset))?;

    let entry_type = match type_tag {
        1 => PackEntryType::Commit,
        2 => PackEntryType::Tree,
        3 => PackEntryType::Blob,
        4 => PackEntryType::Tag,
        6 => {
            let rest = data.get(pos..).ok_or(PackError::CorruptEntry(entry_offset))?;
            let (negative_offset, consumed) = varint::decode_ofs_delta_offset(rest)
                .map_err(|_| PackError::CorruptDeltaOffset(entry_offset))?;
            pos += consumed;
            let base_offset = entry_offset
                .checked_sub(negative_offset)
                .ok_or(PackError::CorruptDeltaOffset(entry_offset))?;
            PackEntryType::OfsDelta { base_offset }
        }
        7 => {
            let hash_len = HashAlgorithm::Sha1.digest_len();
            let end = pos + hash_len;
            let bytes = data.get(pos..end).ok_or(PackError::CorruptEntry(entry_offset))?;
            let base_oid = ObjectId::from_bytes(bytes, HashAlgorithm::Sha1)
                .map_err(|_| PackError::CorruptEntry(entry_offset))?;
            pos = end;
            PackEntryType::RefDelta { base_oid }
        }
        // Tags 0 and 5 are reserved by the pack format and never written,
        // but a reader classifies rather than rejects them.
        tag => PackEntryType::Invalid(tag),
    };

    Ok(PackEntry {
        entry_type,
        uncompressed_size: size,
        data_offset: entry_offset + pos as u64,
        header_size: pos,
    })
}

/// Encode a pack entry header's type tag and size (test/fixture use only —
/// this crate never writes packs).
pub fn encode_entry_header(type_num: u8, size: u64) -> Vec<u8> {
    varint::encode_type_and_size(type_num, size)
}

/// Encode an OFS_DELTA negative base offset (test/fixture use only).
pub fn encode_ofs_delta_offset(offset: u64) -> Vec<u8> {
    varint::encode_ofs_delta_offset(offset)
}
