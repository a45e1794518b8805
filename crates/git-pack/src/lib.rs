//! Read-only packfile and pack index support.
//!
//! This crate opens `.pack`/`.idx` pairs, classifies each entry's type and
//! delta-chain position, and streams an entry's own compressed bytes back
//! to the caller. It never applies a delta against its base and never
//! writes a pack — those are out of scope here.

pub mod descriptor;
pub mod entry;
pub mod index;
pub mod pack;
pub mod source;
pub mod varint;
pub mod verify;

use git_hash::ObjectId;
use git_object::ObjectType;

/// Errors that can occur during pack operations.
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error("invalid pack header: {0}")]
    InvalidHeader(String),

    #[error("invalid pack index: {0}")]
    InvalidIndex(String),

    #[error("delta chain too deep (>{max_depth} levels) at offset {offset}")]
    DeltaChainTooDeep { offset: u64, max_depth: usize },

    #[error("pack checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: ObjectId, actual: ObjectId },

    #[error("corrupt pack entry at offset {0}")]
    CorruptEntry(u64),

    #[error("corrupt delta base offset at pack entry {0}")]
    CorruptDeltaOffset(u64),

    #[error("delta base object {0} not present in this pack or its descriptor cache")]
    DanglingDeltaParent(ObjectId),

    #[error("truncated varint")]
    TruncatedVarint,

    #[error("varint value overflows u64")]
    Overflow,

    #[error("unsupported pack version: {0}")]
    UnsupportedVersion(u32),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Object(#[from] git_object::ObjectError),

    #[error(transparent)]
    Hash(#[from] git_hash::HashError),
}

/// Type of a packed object entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackEntryType {
    Commit,
    Tree,
    Blob,
    Tag,
    /// Delta with offset to base in same pack.
    OfsDelta { base_offset: u64 },
    /// Delta referencing base by OID.
    RefDelta { base_oid: ObjectId },
    /// Type tags 0 and 5 are reserved and never produced by a writer, but a
    /// reader must still classify them rather than fail: they behave like
    /// any other non-delta, terminal entry, just with no logical object
    /// type to report.
    Invalid(u8),
}

impl PackEntryType {
    /// Convert a non-delta pack entry type to an ObjectType. `None` both for
    /// delta tags and for the reserved `Invalid` tags, which have no
    /// logical object type.
    pub fn to_object_type(self) -> Option<ObjectType> {
        match self {
            Self::Commit => Some(ObjectType::Commit),
            Self::Tree => Some(ObjectType::Tree),
            Self::Blob => Some(ObjectType::Blob),
            Self::Tag => Some(ObjectType::Tag),
            Self::OfsDelta { .. } | Self::RefDelta { .. } | Self::Invalid(_) => None,
        }
    }

    /// Convert a non-delta pack entry type to the kind reported by a
    /// descriptor: either a logical object type, or a reserved `Invalid`
    /// tag carried through unchanged. `None` for delta tags, which only
    /// resolve to a kind once their parent chain is walked.
    pub fn to_entry_kind(self) -> Option<EntryKind> {
        match self {
            Self::Commit => Some(EntryKind::Object(ObjectType::Commit)),
            Self::Tree => Some(EntryKind::Object(ObjectType::Tree)),
            Self::Blob => Some(EntryKind::Object(ObjectType::Blob)),
            Self::Tag => Some(EntryKind::Object(ObjectType::Tag)),
            Self::Invalid(tag) => Some(EntryKind::Invalid(tag)),
            Self::OfsDelta { .. } | Self::RefDelta { .. } => None,
        }
    }

    /// Type number as used in pack entry headers.
    pub fn type_number(&self) -> u8 {
        match self {
            Self::Commit => 1,
            Self::Tree => 2,
            Self::Blob => 3,
            Self::Tag => 4,
            Self::OfsDelta { .. } => 6,
            Self::RefDelta { .. } => 7,
            Self::Invalid(tag) => *tag,
        }
    }
}

/// What a descriptor's type resolves to: a logical object type, or one of
/// the two reserved tags (`0`, `5`) that a pack header may carry without
/// being a writer bug — the loader classifies rather than rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Object(ObjectType),
    Invalid(u8),
}

impl PartialEq<ObjectType> for EntryKind {
    fn eq(&self, other: &ObjectType) -> bool {
        matches!(self, EntryKind::Object(t) if t == other)
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Object(t) => write!(f, "{t}"),
            Self::Invalid(tag) => write!(f, "invalid({tag})"),
        }
    }
}

/// Pack format constants.
pub const PACK_SIGNATURE: &[u8; 4] = b"PACK";
pub const PACK_VERSION: u32 = 2;
pub const PACK_HEADER_SIZE: usize = 12;

/// Pack index v2 constants.
pub const IDX_SIGNATURE: [u8; 4] = [0xff, 0x74, 0x4f, 0x63]; // "\377tOc"
pub const IDX_VERSION: u32 = 2;

/// Maximum delta chain depth before we bail out.
pub const MAX_DELTA_CHAIN_DEPTH: usize = 512;
