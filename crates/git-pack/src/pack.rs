//! PackFile: reading `.pack` files.
//!
//! A pack file contains a header, a sequence of compressed entries
//! (possibly deltified), and a trailing checksum. Resolving an entry means
//! classifying it and, for deltas, threading the chain of offsets/names
//! back to a base — never decompressing and patching the chain into the
//! reconstructed object.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use git_hash::{HashAlgorithm, ObjectId};

use crate::descriptor::{DescriptorCore, ExtraHeader, ObjectDescriptor};
use crate::entry::{parse_entry_header, PackEntry};
use crate::index::PackIndex;
use crate::source::{ByteSource, MmapSource};
use crate::{
    PackEntryType, PackError, MAX_DELTA_CHAIN_DEPTH, PACK_HEADER_SIZE, PACK_SIGNATURE,
    PACK_VERSION,
};

/// A packfile and its index, with a lazily-populated descriptor cache.
pub struct PackFile {
    source: Arc<dyn ByteSource>,
    index: PackIndex,
    pack_path: PathBuf,
    num_objects: u32,
    hash_algo: HashAlgorithm,
    cache: RwLock<HashMap<ObjectId, Arc<ObjectDescriptor>>>,
}

impl PackFile {
    /// Open a pack file and its associated index.
    ///
    /// Given a `.pack` file path, opens both the pack and its `.idx` file.
    pub fn open(pack_path: impl AsRef<Path>) -> Result<Self, PackError> {
        let pack_path = pack_path.as_ref().to_path_buf();
        let idx_path = pack_path.with_extension("idx");

        let source = Arc::new(MmapSource::open(&pack_path)?);
        let index = PackIndex::open(&idx_path)?;

        let pack = Self::open_with_source(source, index, pack_path)?;
        Ok(pack)
    }

    /// Open a pack from an arbitrary byte source and a pre-opened index
    /// (used directly by tests building synthetic fixtures).
    pub fn open_with_source(
        source: Arc<dyn ByteSource>,
        index: PackIndex,
        pack_path: PathBuf,
    ) -> Result<Self, PackError> {
        let size = source.size();
        if size < PACK_HEADER_SIZE as u64 {
            return Err(PackError::InvalidHeader("file too small".into()));
        }
        let header = source.read_at(0, PACK_HEADER_SIZE)?;
        if header[0..4] != *PACK_SIGNATURE {
            return Err(PackError::InvalidHeader("bad PACK signature".into()));
        }
        let version = u32::from_be_bytes([header[4], header[5], header[6], header[7]]);
        if version != PACK_VERSION {
            return Err(PackError::UnsupportedVersion(version));
        }
        let num_objects = u32::from_be_bytes([header[8], header[9], header[10], header[11]]);

        if index.num_objects() != num_objects {
            return Err(PackError::InvalidHeader(format!(
                "pack has {} objects but index has {}",
                num_objects,
                index.num_objects()
            )));
        }

        tracing::debug!(
            pack = %pack_path.display(),
            num_objects,
            "opened pack"
        );

        Ok(Self {
            source,
            index,
            pack_path,
            num_objects,
            hash_algo: HashAlgorithm::Sha1,
            cache: RwLock::new(HashMap::new()),
        })
    }

    /// Look up an object's descriptor by name.
    ///
    /// Returns `None` if the OID is not in this pack. Building a
    /// descriptor for a delta threads the whole chain down to its base
    /// (or up to `MAX_DELTA_CHAIN_DEPTH`), publishing every descriptor it
    /// touches into the cache along the way.
    pub fn get(&self, oid: &ObjectId) -> Result<Option<Arc<ObjectDescriptor>>, PackError> {
        match self.index.lookup(oid) {
            Some(offset) => self.descriptor_at_offset(offset).map(Some),
            None => Ok(None),
        }
    }

    /// Resolve the descriptor for the entry at `offset`, consulting and
    /// populating the cache as it walks the chain.
    fn descriptor_at_offset(&self, offset: u64) -> Result<Arc<ObjectDescriptor>, PackError> {
        if let Some(cached) = self.cached_at(offset) {
            return Ok(cached);
        }
        tracing::trace!(offset, "descriptor cache miss, walking delta chain");

        // Walk from `offset` towards the base, collecting (offset, entry)
        // pairs, stopping at either a base entry or an offset already in
        // the cache.
        let mut chain: Vec<(u64, PackEntry)> = Vec::new();
        let mut current_offset = offset;
        let mut cached_tail: Option<Arc<ObjectDescriptor>> = None;

        loop {
            if chain.len() >= MAX_DELTA_CHAIN_DEPTH {
                return Err(PackError::DeltaChainTooDeep {
                    offset,
                    max_depth: MAX_DELTA_CHAIN_DEPTH,
                });
            }

            if let Some(cached) = self.cached_at(current_offset) {
                cached_tail = Some(cached);
                break;
            }

            let entry = self.read_entry_header(current_offset)?;
            let next_offset = match entry.entry_type {
                PackEntryType::OfsDelta { base_offset } => Some(base_offset),
                PackEntryType::RefDelta { base_oid } => {
                    let Some(base_offset) = self.index.lookup(&base_oid) else {
                        return Err(PackError::DanglingDeltaParent(base_oid));
                    };
                    Some(base_offset)
                }
                _ => None,
            };

            let this_offset = current_offset;
            chain.push((this_offset, entry.clone()));

            match entry.entry_type {
                PackEntryType::Commit | PackEntryType::Tree | PackEntryType::Blob
                | PackEntryType::Tag | PackEntryType::Invalid(_) => break,
                PackEntryType::OfsDelta { .. } => {
                    current_offset = next_offset.expect("ofs delta always has a base offset");
                }
                PackEntryType::RefDelta { .. } => {
                    current_offset = next_offset.expect("ref delta always resolves via index.lookup above");
                }
            }
        }

        // Unwind the chain bottom-up, building descriptors and publishing
        // each one into the cache as we go.
        let mut built: Option<Arc<ObjectDescriptor>> = cached_tail;

        for (entry_offset, entry) in chain.into_iter().rev() {
            let descriptor = match (&built, entry.entry_type) {
                (
                    None,
                    PackEntryType::Commit
                    | PackEntryType::Tree
                    | PackEntryType::Blob
                    | PackEntryType::Tag
                    | PackEntryType::Invalid(_),
                ) => {
                    let object_type = entry.entry_type.to_entry_kind().expect("non-delta type");
                    let core = self.build_core(entry_offset, &entry)?;
                    Arc::new(ObjectDescriptor::Base { core, object_type })
                }
                (Some(parent), PackEntryType::OfsDelta { base_offset }) => {
                    let core = self.build_core(entry_offset, &entry)?;
                    let pack_depth = parent.get_pack_depth().unwrap_or(0) + 1;
                    let external_type = parent.get_type();
                    Arc::new(ObjectDescriptor::Delta {
                        core,
                        parent: parent.clone(),
                        extra_header: ExtraHeader::OfsDelta(base_offset),
                        pack_depth,
                        external_type,
                    })
                }
                (Some(parent), PackEntryType::RefDelta { base_oid }) => {
                    let core = self.build_core(entry_offset, &entry)?;
                    let pack_depth = parent.get_pack_depth().unwrap_or(0) + 1;
                    let external_type = parent.get_type();
                    Arc::new(ObjectDescriptor::Delta {
                        core,
                        parent: parent.clone(),
                        extra_header: ExtraHeader::RefDelta(base_oid),
                        pack_depth,
                        external_type,
                    })
                }
                _ => unreachable!("chain entries alternate delta-then-base correctly by construction"),
            };

            self.publish(descriptor.clone());
            built = Some(descriptor);
        }

        Ok(built.expect("chain always resolves to at least one descriptor"))
    }

    fn build_core(&self, entry_offset: u64, entry: &PackEntry) -> Result<DescriptorCore, PackError> {
        let name = self
            .index
            .oid_at_offset(entry_offset)
            .ok_or(PackError::CorruptEntry(entry_offset))?;
        let crc = self.index.crc_at_offset(entry_offset).unwrap_or(0);
        let pack_size = self.packed_size_at(entry_offset)?;

        Ok(DescriptorCore {
            name,
            pack_offset: entry_offset,
            header_size: entry.header_size,
            logical_size: entry.uncompressed_size,
            pack_size,
            crc,
            source: self.source.clone(),
        })
    }

    fn cached_at(&self, offset: u64) -> Option<Arc<ObjectDescriptor>> {
        let oid = self.index.oid_at_offset(offset)?;
        self.cached(&oid)
    }

    fn cached(&self, oid: &ObjectId) -> Option<Arc<ObjectDescriptor>> {
        self.cache.read().expect("descriptor cache poisoned").get(oid).cloned()
    }

    fn publish(&self, descriptor: Arc<ObjectDescriptor>) {
        let oid = descriptor.get_name();
        self.cache
            .write()
            .expect("descriptor cache poisoned")
            .entry(oid)
            .or_insert(descriptor);
    }

    /// Read and parse the entry header starting at `offset`. Probes a
    /// generous window since a header's length isn't known up front.
    fn read_entry_header(&self, offset: u64) -> Result<PackEntry, PackError> {
        const PROBE: u64 = 32;
        let remaining = self.source.size().saturating_sub(offset);
        let probe_len = remaining.min(PROBE) as usize;
        let probe = self.source.read_at(offset, probe_len)?;
        parse_entry_header(&probe, offset)
    }

    /// The on-disk size of the entry at `offset` (header + compressed
    /// payload), derived from the next entry's start or the pack trailer.
    fn packed_size_at(&self, offset: u64) -> Result<u64, PackError> {
        let end = self.index.next_offset(offset).unwrap_or_else(|| self.trailer_offset());
        end.checked_sub(offset).ok_or(PackError::CorruptEntry(offset))
    }

    fn trailer_offset(&self) -> u64 {
        self.source.size() - self.hash_algo.digest_len() as u64
    }

    /// Absolute offset of the trailing pack checksum. Used by
    /// [`crate::verify`] to know where the checksummed content ends.
    pub(crate) fn pack_checksum_offset(&self) -> u64 {
        self.trailer_offset()
    }

    /// Read `len` bytes at `offset` from the underlying source.
    pub(crate) fn read_range(&self, offset: u64, len: usize) -> Result<Vec<u8>, PackError> {
        Ok(self.source.read_at(offset, len)?)
    }

    /// Check if this pack contains the given OID.
    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.index.lookup(oid).is_some()
    }

    /// Get the number of objects in this pack.
    pub fn num_objects(&self) -> u32 {
        self.num_objects
    }

    /// Get the pack index.
    pub fn index(&self) -> &PackIndex {
        &self.index
    }

    /// Get the path to the .pack file.
    pub fn path(&self) -> &Path {
        &self.pack_path
    }

    /// Get the hash algorithm used by this pack.
    pub fn hash_algo(&self) -> HashAlgorithm {
        self.hash_algo
    }

    /// The trailing pack checksum.
    pub fn pack_checksum(&self) -> Result<ObjectId, PackError> {
        let start = self.trailer_offset();
        let bytes = self.source.read_at(start, self.hash_algo.digest_len())?;
        Ok(ObjectId::from_bytes(&bytes, self.hash_algo)?)
    }

    /// Iterate over every object in the pack, in ordinal (name-sorted)
    /// order — the same order the index itself iterates in, not the order
    /// entries happen to sit in the pack file.
    pub fn iter(&self) -> PackIter<'_> {
        PackIter { pack: self, index_pos: 0 }
    }
}

/// Iterator over all entries in a pack file, yielding resolved descriptors
/// in ordinal (name-sorted) order.
pub struct PackIter<'a> {
    pack: &'a PackFile,
    index_pos: u32,
}

impl<'a> Iterator for PackIter<'a> {
    type Item = Result<Arc<ObjectDescriptor>, PackError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index_pos >= self.pack.num_objects() {
            return None;
        }
        let offset = self.pack.index().offset_at_index(self.index_pos);
        self.index_pos += 1;
        Some(self.pack.descriptor_at_offset(offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.pack.num_objects() - self.index_pos) as usize;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for PackIter<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{encode_entry_header, encode_ofs_delta_offset};
    use crate::source::SliceSource;
    use flate2::write::ZlibEncoder;
    use flate2::Compression;
    use git_hash::hasher::Hasher;
    use git_object::ObjectType;
    use std::io::{Read, Write};

    fn zlib_compress(data: &[u8]) -> Vec<u8> {
        let mut compressed = Vec::new();
        let mut enc = ZlibEncoder::new(&mut compressed, Compression::default());
        enc.write_all(data).unwrap();
        enc.finish().unwrap();
        compressed
    }

    fn build_idx(entries: &[(ObjectId, u64, u32)], pack_checksum: &[u8]) -> Vec<u8> {
        use crate::{IDX_SIGNATURE, IDX_VERSION};
        let mut sorted: Vec<_> = entries.to_vec();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));

        let mut buf = Vec::new();
        buf.extend_from_slice(&IDX_SIGNATURE);
        buf.extend_from_slice(&IDX_VERSION.to_be_bytes());

        let mut fanout = [0u32; 256];
        for (oid, _, _) in &sorted {
            fanout[oid.first_byte() as usize] += 1;
        }
        for i in 1..256 {
            fanout[i] += fanout[i - 1];
        }
        for count in fanout {
            buf.extend_from_slice(&count.to_be_bytes());
        }
        for (oid, _, _) in &sorted {
            buf.extend_from_slice(oid.as_bytes());
        }
        for (_, _, crc) in &sorted {
            buf.extend_from_slice(&crc.to_be_bytes());
        }
        for (_, offset, _) in &sorted {
            buf.extend_from_slice(&(*offset as u32).to_be_bytes());
        }
        buf.extend_from_slice(pack_checksum);
        let idx_checksum = {
            let mut h = Hasher::new(HashAlgorithm::Sha1);
            h.update(&buf);
            h.finalize().unwrap()
        };
        buf.extend_from_slice(idx_checksum.as_bytes());
        buf
    }

    /// Build a synthetic pack + index pair backed entirely by `SliceSource`,
    /// for objects that are all base types (no deltas).
    fn build_simple_pack(objects: &[(ObjectType, &[u8])]) -> (PackFile, Vec<ObjectId>) {
        let mut pack_data = Vec::new();
        pack_data.extend_from_slice(PACK_SIGNATURE);
        pack_data.extend_from_slice(&PACK_VERSION.to_be_bytes());
        pack_data.extend_from_slice(&(objects.len() as u32).to_be_bytes());

        let mut entries = Vec::new();
        for (obj_type, content) in objects {
            let offset = pack_data.len() as u64;
            let type_num = match obj_type {
                ObjectType::Commit => 1,
                ObjectType::Tree => 2,
                ObjectType::Blob => 3,
                ObjectType::Tag => 4,
            };
            let header = encode_entry_header(type_num, content.len() as u64);
            let compressed = zlib_compress(content);

            let mut crc_hasher = crc32fast::Hasher::new();
            crc_hasher.update(&header);
            crc_hasher.update(&compressed);
            let crc = crc_hasher.finalize();

            let type_name: String = obj_type.as_bytes().iter().map(|&b| b as char).collect();
            let oid = Hasher::hash_object(HashAlgorithm::Sha1, &type_name, content).unwrap();

            pack_data.extend_from_slice(&header);
            pack_data.extend_from_slice(&compressed);
            entries.push((oid, offset, crc));
        }

        let pack_checksum = {
            let mut h = Hasher::new(HashAlgorithm::Sha1);
            h.update(&pack_data);
            h.finalize().unwrap()
        };
        pack_data.extend_from_slice(pack_checksum.as_bytes());

        let idx_data = build_idx(&entries, pack_checksum.as_bytes());
        let oids: Vec<ObjectId> = entries.iter().map(|(oid, _, _)| *oid).collect();

        let source: Arc<dyn ByteSource> = Arc::new(SliceSource::new(pack_data));
        let index = PackIndex::open_with_source(Arc::new(SliceSource::new(idx_data))).unwrap();
        let pack = PackFile::open_with_source(source, index, PathBuf::from("test.pack")).unwrap();

        (pack, oids)
    }

    #[test]
    fn get_single_blob_descriptor() {
        let content = b"Hello, packfile world!";
        let (pack, oids) = build_simple_pack(&[(ObjectType::Blob, content)]);
        assert_eq!(pack.num_objects(), 1);

        let descriptor = pack.get(&oids[0]).unwrap().unwrap();
        assert_eq!(descriptor.get_type(), ObjectType::Blob);
        assert_eq!(descriptor.get_size(), content.len() as u64);
        assert!(descriptor.get_pack_depth().is_none());

        let mut out = Vec::new();
        descriptor.get_stream().read_to_end(&mut out).unwrap();
        assert_eq!(out, content);
    }

    #[test]
    fn get_multiple_objects() {
        let objects = vec![
            (ObjectType::Blob, b"blob content".as_slice()),
            (ObjectType::Blob, b"another blob".as_slice()),
            (ObjectType::Commit, b"tree 0000000000000000000000000000000000000000\nauthor Test <test@test.com> 0 +0000\ncommitter Test <test@test.com> 0 +0000\n\ntest commit\n".as_slice()),
        ];
        let (pack, oids) = build_simple_pack(&objects);
        assert_eq!(pack.num_objects(), 3);

        for (i, (obj_type, content)) in objects.iter().enumerate() {
            let descriptor = pack.get(&oids[i]).unwrap().unwrap();
            assert_eq!(descriptor.get_type(), *obj_type);
            let mut out = Vec::new();
            descriptor.get_stream().read_to_end(&mut out).unwrap();
            assert_eq!(out, *content);
        }
    }

    #[test]
    fn contains_and_missing() {
        let (pack, oids) = build_simple_pack(&[(ObjectType::Blob, b"test")]);
        assert!(pack.contains(&oids[0]));

        let missing = ObjectId::from_hex("0000000000000000000000000000000000000001").unwrap();
        assert!(!pack.contains(&missing));
        assert_eq!(pack.get(&missing).unwrap(), None);
    }

    #[test]
    fn ofs_delta_descriptor_classifies_without_resolving() {
        let base_content = b"Hello, this is the base object content for delta testing!";
        let base_header = encode_entry_header(3, base_content.len() as u64);
        let base_compressed = zlib_compress(base_content);

        // Arbitrary bytes standing in for a real delta instruction stream —
        // this crate never applies deltas, so the content doesn't matter.
        let delta_payload = b"\x3b\x3fsome delta instructions";
        let delta_compressed = zlib_compress(delta_payload);

        let base_offset_in_pack = PACK_HEADER_SIZE as u64;
        let delta_offset_in_pack =
            base_offset_in_pack + base_header.len() as u64 + base_compressed.len() as u64;
        let negative_offset = delta_offset_in_pack - base_offset_in_pack;

        let delta_header = encode_entry_header(6, delta_payload.len() as u64);
        let ofs_encoded = encode_ofs_delta_offset(negative_offset);

        let mut pack_data = Vec::new();
        pack_data.extend_from_slice(PACK_SIGNATURE);
        pack_data.extend_from_slice(&PACK_VERSION.to_be_bytes());
        pack_data.extend_from_slice(&2u32.to_be_bytes());

        pack_data.extend_from_slice(&base_header);
        pack_data.extend_from_slice(&base_compressed);

        pack_data.extend_from_slice(&delta_header);
        pack_data.extend_from_slice(&ofs_encoded);
        pack_data.extend_from_slice(&delta_compressed);

        let pack_checksum = {
            let mut h = Hasher::new(HashAlgorithm::Sha1);
            h.update(&pack_data);
            h.finalize().unwrap()
        };
        pack_data.extend_from_slice(pack_checksum.as_bytes());

        let base_oid = Hasher::hash_object(HashAlgorithm::Sha1, "blob", base_content).unwrap();
        let delta_oid = Hasher::hash_object(HashAlgorithm::Sha1, "blob", delta_payload).unwrap();

        let base_crc = {
            let mut h = crc32fast::Hasher::new();
            h.update(&base_header);
            h.update(&base_compressed);
            h.finalize()
        };
        let delta_crc = {
            let mut h = crc32fast::Hasher::new();
            h.update(&delta_header);
            h.update(&ofs_encoded);
            h.update(&delta_compressed);
            h.finalize()
        };

        let idx_data = build_idx(
            &[
                (base_oid, base_offset_in_pack, base_crc),
                (delta_oid, delta_offset_in_pack, delta_crc),
            ],
            pack_checksum.as_bytes(),
        );

        let source: Arc<dyn ByteSource> = Arc::new(SliceSource::new(pack_data));
        let index = PackIndex::open_with_source(Arc::new(SliceSource::new(idx_data))).unwrap();
        let pack = PackFile::open_with_source(source, index, PathBuf::from("test.pack")).unwrap();

        let base_descriptor = pack.get(&base_oid).unwrap().unwrap();
        assert_eq!(base_descriptor.get_type(), ObjectType::Blob);
        assert!(base_descriptor.get_pack_depth().is_none());

        let delta_descriptor = pack.get(&delta_oid).unwrap().unwrap();
        assert_eq!(delta_descriptor.get_pack_depth(), Some(1));
        assert_eq!(delta_descriptor.get_type(), ObjectType::Blob);

        let mut raw_delta_stream = Vec::new();
        delta_descriptor.get_stream().read_to_end(&mut raw_delta_stream).unwrap();
        assert_eq!(raw_delta_stream, delta_payload);

        let parent = delta_descriptor.get_delta_parent().unwrap();
        assert_eq!(parent.get_name(), base_oid);
    }

    #[test]
    fn object_count_mismatch_between_pack_and_index_is_rejected() {
        let mut pack_data = Vec::new();
        pack_data.extend_from_slice(PACK_SIGNATURE);
        pack_data.extend_from_slice(&PACK_VERSION.to_be_bytes());
        pack_data.extend_from_slice(&2u32.to_be_bytes()); // header claims 2 objects

        let content = b"only one object here";
        let header = encode_entry_header(3, content.len() as u64);
        let compressed = zlib_compress(content);
        pack_data.extend_from_slice(&header);
        pack_data.extend_from_slice(&compressed);

        let pack_checksum = {
            let mut h = Hasher::new(HashAlgorithm::Sha1);
            h.update(&pack_data);
            h.finalize().unwrap()
        };
        pack_data.extend_from_slice(pack_checksum.as_bytes());

        let oid = Hasher::hash_object(HashAlgorithm::Sha1, "blob", content).unwrap();
        let crc = {
            let mut h = crc32fast::Hasher::new();
            h.update(&header);
            h.update(&compressed);
            h.finalize()
        };
        // Index only lists the one object actually present.
        let idx_data = build_idx(&[(oid, PACK_HEADER_SIZE as u64, crc)], pack_checksum.as_bytes());

        let source: Arc<dyn ByteSource> = Arc::new(SliceSource::new(pack_data));
        let index = PackIndex::open_with_source(Arc::new(SliceSource::new(idx_data))).unwrap();
        let result = PackFile::open_with_source(source, index, PathBuf::from("test.pack"));
        assert!(matches!(result, Err(PackError::InvalidHeader(_))));
    }

    #[test]
    fn reserved_type_tag_is_classified_not_rejected() {
        use crate::EntryKind;

        let content = b"nobody writes this, but a reader must cope";
        // Type tag 0 is reserved; nothing in a valid pack writes it, but
        // the reader classifies it instead of failing.
        let header = encode_entry_header(0, content.len() as u64);
        let compressed = zlib_compress(content);

        let mut pack_data = Vec::new();
        pack_data.extend_from_slice(PACK_SIGNATURE);
        pack_data.extend_from_slice(&PACK_VERSION.to_be_bytes());
        pack_data.extend_from_slice(&1u32.to_be_bytes());
        pack_data.extend_from_slice(&header);
        pack_data.extend_from_slice(&compressed);

        let pack_checksum = {
            let mut h = Hasher::new(HashAlgorithm::Sha1);
            h.update(&pack_data);
            h.finalize().unwrap()
        };
        pack_data.extend_from_slice(pack_checksum.as_bytes());

        let oid = Hasher::hash_object(HashAlgorithm::Sha1, "blob", content).unwrap();
        let crc = {
            let mut h = crc32fast::Hasher::new();
            h.update(&header);
            h.update(&compressed);
            h.finalize()
        };
        let idx_data = build_idx(&[(oid, PACK_HEADER_SIZE as u64, crc)], pack_checksum.as_bytes());

        let source: Arc<dyn ByteSource> = Arc::new(SliceSource::new(pack_data));
        let index = PackIndex::open_with_source(Arc::new(SliceSource::new(idx_data))).unwrap();
        let pack = PackFile::open_with_source(source, index, PathBuf::from("test.pack")).unwrap();

        let descriptor = pack.get(&oid).unwrap().unwrap();
        assert_eq!(descriptor.get_type(), EntryKind::Invalid(0));
        assert!(descriptor.get_pack_depth().is_none());
    }
}
