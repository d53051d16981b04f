use std::path::Path;

use packmix_common::{NormalizedPipelineOptions, OutputAsset};
use packmix_error::BuildResult;
use packmix_fs::FileSystem;

use crate::types::build_context::BuildContext;

/// Compiles the stylesheet entry: inlines relative `@import` directives one
/// level deep, strips block comments and emits the result under the
/// configured output name.
pub struct CompileStyleStage<'a, F: FileSystem> {
  fs: &'a F,
  options: &'a NormalizedPipelineOptions,
}

impl<'a, F: FileSystem> CompileStyleStage<'a, F> {
  pub fn new(fs: &'a F, options: &'a NormalizedPipelineOptions) -> Self {
    Self { fs, options }
  }

  pub async fn run(&self, ctx: &mut BuildContext) -> BuildResult<()> {
    let entry = &self.options.style_entry;
    let source = self.fs.read_to_string(entry).map_err(|error| {
      anyhow::anyhow!("Failed to read style entry {}: {error}", entry.display())
    })?;

    let base_dir = entry.parent().unwrap_or_else(|| Path::new("."));
    let mut compiled = String::with_capacity(source.len());
    for line in source.lines() {
      match parse_import(line.trim()) {
        Some(import) => match self.resolve_import(base_dir, import) {
          Some(content) => {
            compiled.push_str(&content);
            compiled.push('\n');
          }
          None => ctx.warnings.push(anyhow::anyhow!(
            "Could not resolve @import \"{import}\" in {}",
            entry.display()
          )),
        },
        None => {
          compiled.push_str(line);
          compiled.push('\n');
        }
      }
    }

    let compiled = strip_block_comments(&compiled);
    let filename = self.options.style_output.clone();

    self
      .fs
      .write(&self.options.out_dir.join(&filename), compiled.as_bytes())
      .map_err(|error| anyhow::anyhow!("Failed to emit stylesheet {filename}: {error}"))?;

    ctx.styles.push(filename.clone());
    ctx.assets.push(OutputAsset::asset(filename, compiled));

    Ok(())
  }

  /// Partials may be referenced bare (`@import "colors";`), with their
  /// extension, or by their underscore-prefixed filename.
  fn resolve_import(&self, base_dir: &Path, import: &str) -> Option<String> {
    let candidates =
      [import.to_string(), format!("{import}.scss"), format!("_{import}.scss")];
    for candidate in candidates {
      let path = base_dir.join(&candidate);
      if self.fs.exists(&path) {
        return self.fs.read_to_string(&path).ok();
      }
    }
    None
  }
}

fn parse_import(line: &str) -> Option<&str> {
  let rest = line.strip_prefix("@import")?.trim();
  let rest = rest.strip_suffix(';')?.trim();
  rest
    .strip_prefix('"')
    .and_then(|inner| inner.strip_suffix('"'))
    .or_else(|| rest.strip_prefix('\'').and_then(|inner| inner.strip_suffix('\'')))
}

fn strip_block_comments(source: &str) -> String {
  let mut out = String::with_capacity(source.len());
  let mut rest = source;
  while let Some(start) = rest.find("/*") {
    out.push_str(&rest[..start]);
    match rest[start + 2..].find("*/") {
      Some(end) => rest = &rest[start + 2 + end + 2..],
      // An unterminated comment swallows the tail, matching scss behavior.
      None => return out,
    }
  }
  out.push_str(rest);
  out
}
