//! Capability-based file helpers for reading requests and writing routes.
//!
//! Paths are UTF-8 (`camino`) and every operation goes through an ambient
//! `cap-std` directory handle opened on the path's parent.
#![forbid(unsafe_code)]

use std::io;
use std::path::Component;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open an existing file for reading.
///
/// # Errors
///
/// Returns the underlying IO error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create (or truncate) a file for writing, creating missing parent
/// directories first.
///
/// # Errors
///
/// Returns an IO error when a parent directory or the file cannot be created.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_parent_and_name(path)?;
    dir.create(name)
}

/// Whether `path` names an existing regular file.
///
/// # Errors
///
/// Returns an IO error when the parent directory cannot be opened or the
/// metadata lookup fails; a missing file reports [`io::ErrorKind::NotFound`].
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_parent_and_name(path)?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Create every missing directory above `path`.
///
/// # Errors
///
/// Returns an IO error when the nearest existing ancestor cannot be opened
/// or a directory cannot be created.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let parent = parent_of(path);
    if parent == Utf8Path::new(".") || parent == Utf8Path::new("/") {
        return Ok(());
    }

    let (base, relative) = split_at_root(parent)?;
    if relative.as_os_str().is_empty() {
        return Ok(());
    }
    base.create_dir_all(&relative)
}

/// Parent directory of `path`, with bare file names resolving to `.`.
fn parent_of(path: &Utf8Path) -> &Utf8Path {
    match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    }
}

fn open_parent_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &str)> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("path {path} does not name a file"),
        )
    })?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent_of(path), ambient_authority())?;
    Ok((dir, name))
}

/// Split `dir` into an ambient base directory (root, drive prefix or the
/// current directory) and the remaining relative path.
fn split_at_root(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_dir = dir.as_std_path();
    let base = match std_dir.components().next() {
        Some(Component::Prefix(prefix)) => {
            let prefix = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            Utf8PathBuf::from(prefix).join(std::path::MAIN_SEPARATOR_STR)
        }
        Some(Component::RootDir) => Utf8PathBuf::from(std::path::MAIN_SEPARATOR_STR),
        _ => Utf8PathBuf::from("."),
    };

    let relative = if base == Utf8Path::new(".") {
        dir.to_path_buf()
    } else {
        dir.strip_prefix(&base)
            .map_err(|_| io::Error::other(format!("failed to strip {base} from {dir}")))?
            .to_path_buf()
    };
    let base_dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    Ok((base_dir, relative))
}
