//! Pack checksum verification.
//!
//! This is an explicit, separately-invoked operation. Nothing else in this
//! crate calls it implicitly — opening and reading a pack never validates
//! its trailing SHA-1.

use git_hash::hasher::Hasher;
use git_hash::ObjectId;

use crate::pack::PackFile;
use crate::PackError;

impl PackFile {
    /// Verify the pack file checksum.
    ///
    /// Computes SHA-1 over all pack content (excluding the trailing
    /// checksum) and compares it with the stored checksum.
    pub fn verify_checksum(&self) -> Result<(), PackError> {
        let trailer_offset = self.pack_checksum_offset();
        let content = self.read_range(0, trailer_offset as usize)?;
        let stored = self.pack_checksum()?;

        let mut hasher = Hasher::new(self.hash_algo());
        hasher.update(&content);
        let computed = hasher.finalize().map_err(PackError::Hash)?;

        if computed != stored {
            return Err(PackError::ChecksumMismatch {
                expected: stored,
                actual: computed,
            });
        }

        Ok(())
    }
}
