use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use super::stream::pipe_into_new;

/// Extension appended by `compress` and stripped by `decompress`.
pub const COMPRESSED_EXTENSION: &str = "br";

const BUFFER_SIZE: usize = 4096;

/// Brotli encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionParams {
    /// 0..=11
    pub quality: u32,
    /// log2 of the sliding window, 10..=24
    pub window: u32,
}

impl Default for CompressionParams {
    fn default() -> Self {
        Self {
            quality: 11,
            window: 22,
        }
    }
}

pub fn compress_file(src: &Path, dest: &Path, params: CompressionParams) -> io::Result<u64> {
    let reader = BufReader::new(File::open(src)?);
    let mut encoder = brotli::CompressorReader::new(reader, BUFFER_SIZE, params.quality, params.window);
    pipe_into_new(&mut encoder, dest)
}

pub fn decompress_file(src: &Path, dest: &Path) -> io::Result<u64> {
    let reader = BufReader::new(File::open(src)?);
    let mut decoder = brotli::Decompressor::new(reader, BUFFER_SIZE);
    pipe_into_new(&mut decoder, dest)
}
