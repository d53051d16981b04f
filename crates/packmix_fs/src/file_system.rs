use std::{
  io,
  path::{Path, PathBuf},
};

/// The filesystem surface the pipeline runs against. Stages only ever touch
/// their declared inputs and outputs through this trait, which keeps runs
/// reproducible in tests via [`crate::MemoryFileSystem`].
pub trait FileSystem: Send + Sync {
  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  /// Writes `content`, creating missing parent directories.
  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

  fn exists(&self, path: &Path) -> bool;

  fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

  /// Removes `path` and everything below it. Missing `path` is not an error.
  fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

  /// Every file below `dir`, in stable (sorted) order.
  fn walk(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}
