//! Reading avatar files from disk.

use crate::utils::errors::PortalError;
use edupro_config::AvatarConfig;
use edupro_models::{AvatarError, AvatarUpload};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Read `path` into an [`AvatarUpload`], reading at most one byte past
/// `config.max_bytes`. The type check happens later, when the upload is
/// turned into an avatar reference.
pub async fn read_avatar_file(
    path: impl AsRef<Path>,
    config: &AvatarConfig,
) -> Result<AvatarUpload, PortalError> {
    let path = path.as_ref();
    let read_error = |e: std::io::Error| {
        PortalError::bad_request(anyhow::anyhow!("failed to read {}: {e}", path.display()))
    };

    let metadata = tokio::fs::metadata(path).await.map_err(read_error)?;
    if !metadata.is_file() {
        return Err(PortalError::bad_request(anyhow::anyhow!(
            "{} is not a regular file",
            path.display()
        )));
    }
    let max = config.max_bytes;
    if metadata.len() > max as u64 {
        return Err(AvatarError::TooLarge {
            size: usize::try_from(metadata.len()).unwrap_or(usize::MAX),
            max,
        }
        .into());
    }

    // the file can grow between the metadata check and the read
    let file = tokio::fs::File::open(path).await.map_err(read_error)?;
    let mut bytes = Vec::with_capacity(metadata.len() as usize);
    file.take(max as u64 + 1)
        .read_to_end(&mut bytes)
        .await
        .map_err(read_error)?;
    if bytes.len() > max {
        return Err(AvatarError::TooLarge {
            size: bytes.len(),
            max,
        }
        .into());
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(AvatarUpload::new(file_name, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::ErrorKind;
    use std::path::PathBuf;

    async fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("edupro-upload-{}", uuid::Uuid::new_v4()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        dir
    }

    #[tokio::test]
    async fn test_reads_file_name_and_bytes() {
        let dir = scratch_dir().await;
        let path = dir.join("me.gif");
        tokio::fs::write(&path, b"GIF89a\x01\x00").await.unwrap();

        let upload = read_avatar_file(&path, &AvatarConfig::default()).await.unwrap();
        assert_eq!(upload.file_name, "me.gif");
        assert_eq!(upload.sniff_mime(), Some("image/gif"));

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_file_is_bad_request() {
        let err = read_avatar_file("/definitely/not/here.png", &AvatarConfig::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::BadRequest);
        assert!(err.to_string().contains("/definitely/not/here.png"));
    }

    #[tokio::test]
    async fn test_oversized_file_is_rejected_before_reading() {
        let dir = scratch_dir().await;
        let config = AvatarConfig {
            max_bytes: 64,
            ..AvatarConfig::default()
        };
        let path = dir.join("huge.png");
        let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
        bytes.resize(config.max_bytes * 2, 0);
        tokio::fs::write(&path, &bytes).await.unwrap();

        let err = read_avatar_file(&path, &config).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::BadRequest);
        assert_eq!(
            err.error.downcast_ref::<AvatarError>(),
            Some(&AvatarError::TooLarge { size: 128, max: 64 })
        );

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_file_at_limit_is_read() {
        let dir = scratch_dir().await;
        let config = AvatarConfig {
            max_bytes: 16,
            ..AvatarConfig::default()
        };
        let path = dir.join("exact.gif");
        let mut bytes = b"GIF89a".to_vec();
        bytes.resize(config.max_bytes, 0);
        tokio::fs::write(&path, &bytes).await.unwrap();

        let upload = read_avatar_file(&path, &config).await.unwrap();
        assert_eq!(upload.bytes.len(), 16);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_directory_is_bad_request() {
        let dir = scratch_dir().await;

        let err = read_avatar_file(&dir, &AvatarConfig::default()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::BadRequest);
        assert!(err.to_string().contains("not a regular file"));

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
