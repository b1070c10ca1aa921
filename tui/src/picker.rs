//! The file-selection surface.
//!
//! The engine only ever sees descriptors; this is the one place that
//! touches the filesystem to build them from a user-typed path.

use std::io;
use std::path::Path;

use maquette_types::FileDescriptor;

/// Build a descriptor from a path. Fails when the path does not exist or
/// is not a regular file; the caller surfaces the error as a notice.
pub fn descriptor_from_path(raw: &str) -> io::Result<FileDescriptor> {
    let path = Path::new(raw.trim());
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a regular file", path.display()),
        ));
    }
    let name = path
        .file_name()
        .map_or_else(|| raw.trim().to_string(), |n| n.to_string_lossy().into_owned());
    Ok(FileDescriptor::new(name, metadata.len()))
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::descriptor_from_path;

    #[test]
    fn descriptor_carries_name_and_size() {
        let dir = std::env::temp_dir().join("maquette-picker-test");
        std::fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("sample.txt");
        let mut file = std::fs::File::create(&path).expect("create file");
        file.write_all(b"hello maquette").expect("write file");

        let descriptor =
            descriptor_from_path(path.to_str().expect("utf8 path")).expect("descriptor");
        assert_eq!(descriptor.name, "sample.txt");
        assert_eq!(descriptor.size_bytes, 14);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_path_is_an_error() {
        assert!(descriptor_from_path("/definitely/not/here.bin").is_err());
    }
}
