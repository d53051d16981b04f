use std::{
  fs, io,
  path::{Path, PathBuf},
};

use crate::FileSystem;

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
  }

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
  }

  fn exists(&self, path: &Path) -> bool {
    path.exists()
  }

  fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
    fs::rename(from, to)
  }

  fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
    match fs::remove_dir_all(path) {
      Err(error) if error.kind() != io::ErrorKind::NotFound => Err(error),
      _ => Ok(()),
    }
  }

  fn walk(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = vec![];
    walk_into(dir, &mut files)?;
    files.sort();
    Ok(files)
  }
}

fn walk_into(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
  for entry in fs::read_dir(dir)? {
    let path = entry?.path();
    if path.is_dir() {
      walk_into(&path, files)?;
    } else {
      files.push(path);
    }
  }
  Ok(())
}
