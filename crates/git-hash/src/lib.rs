//! Hash computation and object identity for the packfile loader.
//!
//! Provides the core `ObjectId` type, hash computation, hex encoding and
//! decoding, and the fan-out table shared by the pack index reader.

mod error;
pub mod hex;
mod algorithm;
mod oid;
pub mod hasher;
pub mod fanout;

pub use algorithm::HashAlgorithm;
pub use error::HashError;
pub use oid::ObjectId;
