//! Filesystem access used by the tree renderer
//!
//! The renderer never touches `std::fs` directly. It goes through the
//! `FileSystem` trait so that tests can drive it with an in-memory tree
//! whose enumeration order is known.

use std::ffi::OsString;
use std::io;
use std::path::Path;

/// The filesystem operations the renderer needs.
pub trait FileSystem {
    /// Bare names of the entries directly inside `path`, in enumeration order.
    fn list_entries(&self, path: &Path) -> io::Result<Vec<OsString>>;

    /// Whether `path` is a directory, following symlinks. Errors count as `false`.
    fn is_directory(&self, path: &Path) -> bool;

    /// Size in bytes of `path`, following symlinks.
    fn file_size(&self, path: &Path) -> io::Result<u64>;

    /// `ls -l` style mode string of `path`, following symlinks.
    fn permission_string(&self, path: &Path) -> io::Result<String>;
}

/// The host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<OsString>> {
        std::fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect()
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        Ok(std::fs::metadata(path)?.len())
    }

    fn permission_string(&self, path: &Path) -> io::Result<String> {
        let meta = std::fs::metadata(path)?;
        Ok(format_mode(mode_bits(&meta)))
    }
}

#[cfg(unix)]
fn mode_bits(meta: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;
    meta.mode()
}

#[cfg(not(unix))]
fn mode_bits(meta: &std::fs::Metadata) -> u32 {
    synthesized_mode(meta.is_dir(), meta.permissions().readonly())
}

/// Mode bits for platforms without them: only directories get execute bits.
#[cfg(any(not(unix), test))]
fn synthesized_mode(is_dir: bool, readonly: bool) -> u32 {
    match (is_dir, readonly) {
        (true, false) => S_IFDIR | 0o777,
        (true, true) => S_IFDIR | 0o555,
        (false, false) => S_IFREG | 0o666,
        (false, true) => S_IFREG | 0o444,
    }
}

const S_IFMT: u32 = 0o170000;
const S_IFSOCK: u32 = 0o140000;
const S_IFLNK: u32 = 0o120000;
const S_IFREG: u32 = 0o100000;
const S_IFBLK: u32 = 0o060000;
const S_IFDIR: u32 = 0o040000;
const S_IFCHR: u32 = 0o020000;
const S_IFIFO: u32 = 0o010000;

const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

/// Format raw mode bits the way `ls -l` does, e.g. `drwxr-xr-x`.
pub fn format_mode(mode: u32) -> String {
    let mut out = String::with_capacity(10);

    out.push(match mode & S_IFMT {
        S_IFDIR => 'd',
        S_IFLNK => 'l',
        S_IFREG => '-',
        S_IFCHR => 'c',
        S_IFBLK => 'b',
        S_IFIFO => 'p',
        S_IFSOCK => 's',
        _ => '?',
    });

    // (read, write, execute, special bit, special char)
    let triplets = [
        (0o400, 0o200, 0o100, S_ISUID, 's'),
        (0o040, 0o020, 0o010, S_ISGID, 's'),
        (0o004, 0o002, 0o001, S_ISVTX, 't'),
    ];

    for (r, w, x, special, special_char) in triplets {
        out.push(if mode & r != 0 { 'r' } else { '-' });
        out.push(if mode & w != 0 { 'w' } else { '-' });
        out.push(match (mode & x != 0, mode & special != 0) {
            (true, true) => special_char,
            (false, true) => special_char.to_ascii_uppercase(),
            (true, false) => 'x',
            (false, false) => '-',
        });
    }

    out
}
