use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use bytes::Bytes;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 入力ファイルを読み込む
pub fn read_input(path: &Path) -> Result<Bytes, StorageError> {
    let data = fs::read(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), size = data.len(), "read input image");
    Ok(Bytes::from(data))
}

/// 出力ファイルを書き込む
///
/// 同じディレクトリの一時ファイルに書いてからリネームするため、
/// 失敗時に途中までのファイルが残らない
pub fn write_output(path: &Path, data: &[u8]) -> Result<(), StorageError> {
    let tmp = temp_path_for(path);
    let write_err = |source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Err(e) = fs::write(&tmp, data) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }

    tracing::debug!(path = %path.display(), size = data.len(), "wrote output image");
    Ok(())
}

/// `<dir>/.<name>.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("expand-cli-storage-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        assert_eq!(
            temp_path_for(Path::new("out/banner.png")),
            PathBuf::from("out/.banner.png.tmp")
        );
    }

    #[test]
    fn test_write_then_read() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("data.bin");

        write_output(&path, b"pixels").unwrap();
        assert_eq!(read_input(&path).unwrap(), Bytes::from_static(b"pixels"));
        assert!(!temp_path_for(&path).exists());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_write_into_missing_directory_leaves_nothing() {
        let dir = scratch_dir("missing");
        let path = dir.join("no-such-dir").join("out.png");

        assert!(matches!(
            write_output(&path, b"pixels"),
            Err(StorageError::Write { .. })
        ));
        assert!(!path.exists());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_input(Path::new("/definitely/not/here.png"));
        assert!(matches!(result, Err(StorageError::Read { .. })));
    }
}
