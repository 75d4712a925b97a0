// File entry points: read the whole file, then decode the image

use super::engine::decode_with;
use super::error::{DecodeError, Result};
use super::options::DecodeOptions;
use crate::core::Dataset;
use std::io;
use std::path::Path;
use tracing::debug;

/// Read and decode a file from disk
pub fn decode_file<P: AsRef<Path>>(path: P, options: &DecodeOptions) -> Result<Dataset> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    debug!("Read {} bytes from {}", data.len(), path.display());
    decode_with(&data, options)
}

/// Read a file with tokio and decode it on the blocking pool
pub async fn decode_file_async<P: AsRef<Path>>(
    path: P,
    options: DecodeOptions,
) -> Result<Dataset> {
    let path = path.as_ref();
    let data = tokio::fs::read(path).await?;
    debug!("Read {} bytes from {}", data.len(), path.display());

    tokio::task::spawn_blocking(move || decode_with(&data, &options))
        .await
        .map_err(|e| DecodeError::Io {
            source: io::Error::other(e),
            offset: 0,
        })?
}
