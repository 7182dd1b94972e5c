//! Compression format detection and transparent decompression of word lists.
//!
//! Published full-form lists are often shipped compressed. Detection uses magic
//! numbers first and falls back to the file extension.

use crate::error::{LookupError, Result};
use async_compression::tokio::bufread::{BzDecoder, GzipDecoder, XzDecoder, ZstdDecoder};
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, BufReader};

/// Supported compression formats for word list files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionType {
    /// No compression - plain text file
    None,
    /// Gzip compression (.gz files)
    Gzip,
    /// Bzip2 compression (.bz2 files)
    Bzip2,
    /// XZ compression (.xz files)
    Xz,
    /// Zstandard compression (.zst, .zstd files)
    Zstd,
}

impl CompressionType {
    /// Get human-readable name for the compression type
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gzip => "gzip",
            Self::Bzip2 => "bzip2",
            Self::Xz => "xz",
            Self::Zstd => "zstd",
        }
    }

    /// Check if this type represents a compressed format
    pub fn is_compressed(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Detect compression type from magic numbers, then from the file extension
///
/// # Magic Numbers Used
/// - Gzip: `1f 8b` (RFC 1952)
/// - Bzip2: `42 5a 68` ("BZh" with block size)
/// - XZ: `fd 37 7a 58 5a 00`
/// - Zstd: `28 b5 2f fd`
pub async fn detect_compression(path: &Path) -> Result<CompressionType> {
    let mut file = File::open(path)
        .await
        .map_err(|e| LookupError::file_error("Failed to open word list", e))?;

    let mut buffer = [0u8; 8];
    let bytes_read = file
        .read(&mut buffer)
        .await
        .map_err(|e| LookupError::file_error("Failed to read word list header", e))?;

    if let Some(format) = detect_by_magic(&buffer[..bytes_read]) {
        return Ok(format);
    }

    Ok(detect_by_extension(path).unwrap_or(CompressionType::None))
}

/// Detect compression format from magic bytes
fn detect_by_magic(magic: &[u8]) -> Option<CompressionType> {
    if magic.starts_with(&[0x1f, 0x8b]) {
        Some(CompressionType::Gzip)
    } else if magic.starts_with(&[0x42, 0x5a, 0x68]) {
        Some(CompressionType::Bzip2)
    } else if magic.starts_with(&[0x28, 0xb5, 0x2f, 0xfd]) {
        Some(CompressionType::Zstd)
    } else if magic.starts_with(&[0xfd, 0x37, 0x7a, 0x58, 0x5a, 0x00]) {
        Some(CompressionType::Xz)
    } else {
        None
    }
}

/// Detect compression format from file extension
fn detect_by_extension(path: &Path) -> Option<CompressionType> {
    let ext = path.extension()?.to_str()?;
    match ext.to_lowercase().as_str() {
        "gz" => Some(CompressionType::Gzip),
        "bz2" => Some(CompressionType::Bzip2),
        "xz" => Some(CompressionType::Xz),
        "zst" | "zstd" => Some(CompressionType::Zstd),
        _ => None,
    }
}

/// Read the whole file into memory, decompressing when needed
pub async fn read_decompressed(path: &Path, compression: CompressionType) -> Result<Vec<u8>> {
    let file = File::open(path)
        .await
        .map_err(|e| LookupError::file_error("Failed to open word list", e))?;
    let file = BufReader::new(file);

    let mut decoder: Box<dyn AsyncRead + Unpin + Send> = match compression {
        CompressionType::None => Box::new(file),
        CompressionType::Gzip => Box::new(GzipDecoder::new(file)),
        CompressionType::Bzip2 => Box::new(BzDecoder::new(file)),
        CompressionType::Xz => Box::new(XzDecoder::new(file)),
        CompressionType::Zstd => Box::new(ZstdDecoder::new(file)),
    };

    let mut data = Vec::new();
    decoder.read_to_end(&mut data).await.map_err(|e| {
        if compression.is_compressed() {
            LookupError::compression(format!(
                "Failed to decompress {} word list {}: {}",
                compression.name(),
                path.display(),
                e
            ))
        } else {
            LookupError::file_error("Failed to read word list", e)
        }
    })?;

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    #[test]
    fn test_detect_magic_numbers() {
        assert_eq!(detect_by_magic(&[0x1f, 0x8b, 0x08]), Some(CompressionType::Gzip));
        assert_eq!(detect_by_magic(&[0x42, 0x5a, 0x68, 0x39]), Some(CompressionType::Bzip2));
        assert_eq!(
            detect_by_magic(&[0xfd, 0x37, 0x7a, 0x58, 0x5a, 0x00]),
            Some(CompressionType::Xz)
        );
        assert_eq!(detect_by_magic(&[0x28, 0xb5, 0x2f, 0xfd]), Some(CompressionType::Zstd));
        assert_eq!(detect_by_magic(b"abe\tabe"), None);
        assert_eq!(detect_by_magic(&[0x1f]), None);
    }

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(
            detect_by_extension(Path::new("ddo_fullforms.csv.gz")),
            Some(CompressionType::Gzip)
        );
        assert_eq!(
            detect_by_extension(Path::new("words.ZST")),
            Some(CompressionType::Zstd)
        );
        assert_eq!(detect_by_extension(Path::new("words.csv")), None);
        assert_eq!(detect_by_extension(Path::new("words")), None);
    }

    #[test]
    fn test_compression_type_methods() {
        assert!(!CompressionType::None.is_compressed());
        assert!(CompressionType::Xz.is_compressed());
        assert_eq!(CompressionType::Gzip.name(), "gzip");
    }

    #[tokio::test]
    async fn test_plain_file_reads_verbatim() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), b"kat\tkat\t\tsb.\t1\n").unwrap();

        let compression = detect_compression(temp_file.path()).await.unwrap();
        assert_eq!(compression, CompressionType::None);

        let data = read_decompressed(temp_file.path(), compression).await.unwrap();
        assert_eq!(data, b"kat\tkat\t\tsb.\t1\n");
    }

    #[tokio::test]
    async fn test_gzip_round_trip_through_detection() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        {
            let file = std::fs::File::create(temp_file.path()).unwrap();
            let mut encoder = GzEncoder::new(file, Compression::default());
            encoder.write_all(b"abe\tabe\t\tsb.\t1\n").unwrap();
            encoder.finish().unwrap();
        }

        let compression = detect_compression(temp_file.path()).await.unwrap();
        assert_eq!(compression, CompressionType::Gzip);

        let data = read_decompressed(temp_file.path(), compression).await.unwrap();
        assert_eq!(data, b"abe\tabe\t\tsb.\t1\n");
    }

    #[tokio::test]
    async fn test_corrupt_gzip_reports_compression_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("words.gz");
        tokio::fs::write(&file_path, b"not compressed").await.unwrap();

        let compression = detect_compression(&file_path).await.unwrap();
        assert_eq!(compression, CompressionType::Gzip);

        let result = read_decompressed(&file_path, compression).await;
        assert!(matches!(result, Err(LookupError::CompressionError { .. })));
    }
}
