//! Thin wrappers over host filesystem, codec, digest and OS-info primitives.
//!
//! Everything here speaks `std::io::Result`; mapping failures onto command
//! error kinds happens in the command layer.

pub mod codec;
pub mod digest;
pub mod host;
pub mod listing;
pub mod stream;

pub use codec::{compress_file, decompress_file, CompressionParams, COMPRESSED_EXTENSION};
pub use digest::sha256_file;
pub use listing::{list_directory, render_table, DirEntryInfo, EntryKind};
pub use stream::{copy_file, create_new, stream_file};
