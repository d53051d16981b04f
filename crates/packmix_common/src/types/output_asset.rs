use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
  /// Script output produced by bundling.
  Chunk,
  /// Everything else the pipeline emits.
  Asset,
}

impl Display for AssetKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Chunk => write!(f, "chunk"),
      Self::Asset => write!(f, "asset"),
    }
  }
}

/// One emitted build artifact, tracked by its path relative to the output
/// directory.
#[derive(Debug, Clone)]
pub struct OutputAsset {
  pub filename: String,
  pub content: String,
  pub kind: AssetKind,
}

impl OutputAsset {
  pub fn chunk(filename: impl Into<String>, content: impl Into<String>) -> Self {
    Self { filename: filename.into(), content: content.into(), kind: AssetKind::Chunk }
  }

  pub fn asset(filename: impl Into<String>, content: impl Into<String>) -> Self {
    Self { filename: filename.into(), content: content.into(), kind: AssetKind::Asset }
  }

  pub fn content_as_bytes(&self) -> &[u8] {
    self.content.as_bytes()
  }
}
