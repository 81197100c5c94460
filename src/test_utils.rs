//! Test utilities: an in-memory filesystem and temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::fs::{FileSystem, format_mode};

#[derive(Debug, Clone)]
enum Node {
    Dir { children: Vec<OsString>, denied: bool },
    File { size: u64 },
    /// A directory whose listing fails with an I/O error.
    BrokenDir,
    /// Listed by its parent but gone by the time it is stat'ed.
    Vanished,
}

/// An in-memory `FileSystem` whose directories enumerate their entries in
/// insertion order.
///
/// Paths given to the builder methods are relative to the root; parent
/// directories are created as needed.
#[derive(Debug, Clone)]
pub struct MemoryFs {
    root: PathBuf,
    nodes: HashMap<PathBuf, Node>,
}

impl MemoryFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut nodes = HashMap::new();
        nodes.insert(
            root.clone(),
            Node::Dir {
                children: Vec::new(),
                denied: false,
            },
        );
        Self { root, nodes }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Add an empty directory (no-op if it already exists).
    pub fn dir(mut self, path: &str) -> Self {
        let full = self.resolve(path);
        if !self.nodes.contains_key(&full) {
            self.insert(
                full,
                Node::Dir {
                    children: Vec::new(),
                    denied: false,
                },
            );
        }
        self
    }

    /// Add a file of `size` bytes.
    pub fn file(mut self, path: &str, size: u64) -> Self {
        let full = self.resolve(path);
        self.insert(full, Node::File { size });
        self
    }

    /// Add a directory whose listing fails with permission denied, or mark an
    /// existing one (`""` is the root).
    pub fn denied_dir(mut self, path: &str) -> Self {
        let full = self.resolve(path);
        match self.nodes.get_mut(&full) {
            Some(Node::Dir { denied, .. }) => *denied = true,
            _ => self.insert(
                full,
                Node::Dir {
                    children: Vec::new(),
                    denied: true,
                },
            ),
        }
        self
    }

    /// Add a directory whose listing fails with a generic I/O error.
    pub fn broken_dir(mut self, path: &str) -> Self {
        let full = self.resolve(path);
        self.insert(full, Node::BrokenDir);
        self
    }

    /// Add an entry that is listed but cannot be stat'ed.
    pub fn vanished(mut self, path: &str) -> Self {
        let full = self.resolve(path);
        self.insert(full, Node::Vanished);
        self
    }

    fn resolve(&self, path: &str) -> PathBuf {
        if path.is_empty() {
            self.root.clone()
        } else {
            self.root.join(path)
        }
    }

    fn insert(&mut self, path: PathBuf, node: Node) {
        if path != self.root {
            if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
                let parent = parent.to_path_buf();
                if !self.nodes.contains_key(&parent) {
                    self.insert(
                        parent.clone(),
                        Node::Dir {
                            children: Vec::new(),
                            denied: false,
                        },
                    );
                }
                if let Some(Node::Dir { children, .. }) = self.nodes.get_mut(&parent) {
                    if !children.iter().any(|c| c == name) {
                        children.push(name.to_os_string());
                    }
                }
            }
        }
        self.nodes.insert(path, node);
    }

    fn not_found(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{}: No such file or directory", path.display()),
        )
    }
}

impl FileSystem for MemoryFs {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<OsString>> {
        match self.nodes.get(path) {
            Some(Node::Dir { denied: true, .. }) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "Permission denied",
            )),
            Some(Node::Dir { children, .. }) => Ok(children.clone()),
            Some(Node::BrokenDir) => Err(io::Error::other("Input/output error")),
            Some(_) => Err(io::Error::other("Not a directory")),
            None => Err(Self::not_found(path)),
        }
    }

    fn is_directory(&self, path: &Path) -> bool {
        matches!(self.nodes.get(path), Some(Node::Dir { .. } | Node::BrokenDir))
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        match self.nodes.get(path) {
            Some(Node::File { size }) => Ok(*size),
            Some(Node::Dir { .. } | Node::BrokenDir) => Ok(4096),
            _ => Err(Self::not_found(path)),
        }
    }

    fn permission_string(&self, path: &Path) -> io::Result<String> {
        match self.nodes.get(path) {
            Some(Node::Dir { .. } | Node::BrokenDir) => Ok(format_mode(0o040755)),
            Some(Node::File { .. }) => Ok(format_mode(0o100644)),
            _ => Err(Self::not_found(path)),
        }
    }
}

/// A temporary directory tree on the real filesystem.
///
/// The tree root is a named subdirectory of a fresh temp dir, so rendered
/// output has a predictable header line. Everything is removed on drop,
/// including directories made unreadable with `deny`.
pub struct TestTree {
    _dir: TempDir,
    root: PathBuf,
    denied: RefCell<Vec<PathBuf>>,
}

impl TestTree {
    /// Create a tree rooted at a directory called `proj`.
    pub fn new() -> Self {
        Self::named("proj")
    }

    /// Create a tree rooted at a directory called `name`.
    pub fn named(name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join(name);
        fs::create_dir(&root).expect("Failed to create tree root");
        Self {
            _dir: dir,
            root,
            denied: RefCell::new(Vec::new()),
        }
    }

    /// Get the path to the tree root.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Add a file with the given content, creating parent directories.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        self.add_bytes(path, content.as_bytes())
    }

    /// Add a file of exactly `len` zero bytes, creating parent directories.
    pub fn add_sized(&self, path: &str, len: usize) -> PathBuf {
        self.add_bytes(path, &vec![0u8; len])
    }

    /// Add an empty directory, creating parent directories.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Make a directory unreadable.
    ///
    /// Returns `false` if the current process can still list it (e.g. when
    /// running as root), in which case permission tests should be skipped.
    #[cfg(unix)]
    pub fn deny(&self, path: &str) -> bool {
        use std::os::unix::fs::PermissionsExt;

        let full_path = self.root.join(path);
        fs::set_permissions(&full_path, fs::Permissions::from_mode(0o000))
            .expect("Failed to change permissions");
        self.denied.borrow_mut().push(full_path.clone());
        fs::read_dir(&full_path).is_err()
    }

    fn add_bytes(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestTree {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            for path in self.denied.borrow().iter() {
                let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o755));
            }
        }
    }
}
