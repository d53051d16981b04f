use std::{
  collections::BTreeMap,
  io,
  path::{Path, PathBuf},
  sync::{Arc, Mutex},
};

use crate::FileSystem;

/// In-memory [`FileSystem`] backed by a path-sorted map. Cloning shares the
/// underlying storage, so a test can hold one handle while the pipeline
/// writes through another.
#[derive(Debug, Default, Clone)]
pub struct MemoryFileSystem {
  files: Arc<Mutex<BTreeMap<PathBuf, Vec<u8>>>>,
}

impl MemoryFileSystem {
  pub fn new(seed: impl IntoIterator<Item = (PathBuf, Vec<u8>)>) -> Self {
    Self { files: Arc::new(Mutex::new(seed.into_iter().collect())) }
  }

  pub fn file_names(&self) -> Vec<PathBuf> {
    self.files.lock().expect("memory fs poisoned").keys().cloned().collect()
  }

  fn lock(&self) -> std::sync::MutexGuard<BTreeMap<PathBuf, Vec<u8>>> {
    self.files.lock().expect("memory fs poisoned")
  }
}

fn not_found(path: &Path) -> io::Error {
  io::Error::new(io::ErrorKind::NotFound, format!("No such file: {}", path.display()))
}

impl FileSystem for MemoryFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    let files = self.lock();
    let content = files.get(path).ok_or_else(|| not_found(path))?;
    String::from_utf8(content.clone())
      .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "not valid utf8"))
  }

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
    self.lock().insert(path.to_path_buf(), content.to_vec());
    Ok(())
  }

  fn exists(&self, path: &Path) -> bool {
    let files = self.lock();
    files.contains_key(path) || files.keys().any(|file| file.starts_with(path))
  }

  fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
    let mut files = self.lock();
    let content = files.remove(from).ok_or_else(|| not_found(from))?;
    files.insert(to.to_path_buf(), content);
    Ok(())
  }

  fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
    self.lock().retain(|file, _| !file.starts_with(path));
    Ok(())
  }

  fn walk(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
    // BTreeMap keys are already sorted.
    Ok(self.lock().keys().filter(|file| file.starts_with(dir)).cloned().collect())
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;

  fn seeded() -> MemoryFileSystem {
    MemoryFileSystem::new([
      (PathBuf::from("/public/js/app.js"), b"app".to_vec()),
      (PathBuf::from("/public/css/app.css"), b"css".to_vec()),
      (PathBuf::from("/resources/index.hbs"), b"<html>".to_vec()),
    ])
  }

  #[test]
  fn walk_is_scoped_and_sorted() {
    let fs = seeded();
    let files = fs.walk(Path::new("/public")).unwrap();
    assert_eq!(
      files,
      vec![PathBuf::from("/public/css/app.css"), PathBuf::from("/public/js/app.js")]
    );
  }

  #[test]
  fn remove_dir_all_only_touches_the_subtree() {
    let fs = seeded();
    fs.remove_dir_all(Path::new("/public")).unwrap();
    assert!(!fs.exists(Path::new("/public/js/app.js")));
    assert!(fs.exists(Path::new("/resources/index.hbs")));
  }

  #[test]
  fn exists_sees_directories() {
    let fs = seeded();
    assert!(fs.exists(Path::new("/public/js")));
    assert!(!fs.exists(Path::new("/public/img")));
  }
}
