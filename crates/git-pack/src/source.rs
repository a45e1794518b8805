//! Byte-source abstraction backing the index reader and pack loader.
//!
//! Neither [`crate::index::PackIndex`] nor [`crate::pack::PackFile`] touch
//! `memmap2` directly. They read through this trait instead, so a plain
//! file, an in-memory buffer, or (for something bigger than this crate
//! needs today) a remote range-read could stand in for the default
//! mmap-backed source without either of them noticing.

use std::io::Read;
use std::sync::Arc;

/// Random-access, read-only access to a fixed range of bytes.
pub trait ByteSource: Send + Sync {
    /// Total length of the source, in bytes.
    fn size(&self) -> u64;

    /// Read `len` bytes starting at `offset`. Errors if the range runs
    /// past the end of the source.
    fn read_at(&self, offset: u64, len: usize) -> std::io::Result<Vec<u8>>;

    /// A view restricted to `[offset, offset + len)` of this source.
    fn sub_source(&self, offset: u64, len: u64) -> Arc<dyn ByteSource>;

    /// A forward-only stream over `[offset, offset + len)`. The stream
    /// must never yield bytes past `len`, since callers (in particular
    /// the zlib decoder) rely on the range boundary, not an end-of-stream
    /// marker in the underlying file, to know where to stop.
    fn open_stream(&self, offset: u64, len: u64) -> Box<dyn Read + Send>;
}

/// Memory-mapped byte source; the default backing for `.idx`/`.pack` files.
pub struct MmapSource {
    data: memmap2::Mmap,
}

impl MmapSource {
    pub fn open(path: &std::path::Path) -> std::io::Result<Self> {
        let file = std::fs::File::open(path)?;
        let data = unsafe { memmap2::Mmap::map(&file)? };
        Ok(Self { data })
    }
}

impl ByteSource for MmapSource {
    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    fn read_at(&self, offset: u64, len: usize) -> std::io::Result<Vec<u8>> {
        read_range(&self.data, offset, len)
    }

    fn sub_source(&self, offset: u64, len: u64) -> Arc<dyn ByteSource> {
        Arc::new(SliceSource::new(
            self.data[offset as usize..(offset + len) as usize].to_vec(),
        ))
    }

    fn open_stream(&self, offset: u64, len: u64) -> Box<dyn Read + Send> {
        let end = (offset + len) as usize;
        Box::new(std::io::Cursor::new(self.data[offset as usize..end].to_vec()))
    }
}

/// In-memory byte source. Used by every unit test that builds a synthetic
/// index/pack, and returned by `sub_source` once a range has been sliced
/// out of a larger source.
pub struct SliceSource {
    data: Vec<u8>,
}

impl SliceSource {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl ByteSource for SliceSource {
    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    fn read_at(&self, offset: u64, len: usize) -> std::io::Result<Vec<u8>> {
        read_range(&self.data, offset, len)
    }

    fn sub_source(&self, offset: u64, len: u64) -> Arc<dyn ByteSource> {
        Arc::new(SliceSource::new(
            self.data[offset as usize..(offset + len) as usize].to_vec(),
        ))
    }

    fn open_stream(&self, offset: u64, len: u64) -> Box<dyn Read + Send> {
        let end = (offset + len) as usize;
        Box::new(std::io::Cursor::new(self.data[offset as usize..end].to_vec()))
    }
}

fn read_range(data: &[u8], offset: u64, len: usize) -> std::io::Result<Vec<u8>> {
    let start = offset as usize;
    let end = start.checked_add(len).ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "range overflows usize")
    })?;
    data.get(start..end)
        .map(|s| s.to_vec())
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "read past end of source"))
}
