use packmix_common::{NormalizedPipelineOptions, OutputAsset};
use packmix_error::BuildResult;
use packmix_fs::FileSystem;
use packmix_utils::{content_hash::content_hash, path_ext::PathExt};

use crate::types::build_context::BuildContext;

/// Bundles the script entry: applies the constant-replacement table, names
/// the chunk from the filename template and emits it (plus its source map)
/// into the output directory.
pub struct BundleScriptStage<'a, F: FileSystem> {
  fs: &'a F,
  options: &'a NormalizedPipelineOptions,
}

impl<'a, F: FileSystem> BundleScriptStage<'a, F> {
  pub fn new(fs: &'a F, options: &'a NormalizedPipelineOptions) -> Self {
    Self { fs, options }
  }

  pub async fn run(&self, ctx: &mut BuildContext) -> BuildResult<()> {
    let entry = &self.options.script_entry;
    let mut source = self.fs.read_to_string(entry).map_err(|error| {
      anyhow::anyhow!("Failed to read script entry {}: {error}", entry.display())
    })?;

    // Compile-time substitution: bundled code never looks these up at
    // runtime.
    for (sentinel, literal) in &ctx.replacements {
      source = source.replace(sentinel.as_str(), literal.as_str());
    }

    let name = entry.representative_file_name().into_owned();
    let hash =
      self.options.chunk_filenames.has_hash().then(|| content_hash(source.as_bytes()));
    let filename = self.options.chunk_filenames.render(&name, hash.as_deref());
    let logical = self.options.chunk_filenames.render(&name, None);

    if self.options.source_maps {
      let map_filename = format!("{filename}.map");
      let entry_source =
        entry.strip_prefix(&self.options.cwd).unwrap_or(entry).expect_to_slash();
      let map = serde_json::json!({
        "version": 3,
        "file": file_name(&filename),
        "sources": [entry_source],
        "mappings": "",
      })
      .to_string();

      source.push_str("\n//# sourceMappingURL=");
      source.push_str(file_name(&map_filename));
      source.push('\n');

      self.fs.write(&self.options.out_dir.join(&map_filename), map.as_bytes()).map_err(
        |error| anyhow::anyhow!("Failed to emit source map {map_filename}: {error}"),
      )?;
      ctx.assets.push(OutputAsset::asset(map_filename, map));
    }

    self
      .fs
      .write(&self.options.out_dir.join(&filename), source.as_bytes())
      .map_err(|error| anyhow::anyhow!("Failed to emit chunk {filename}: {error}"))?;

    ctx.manifest.insert(format!("/{logical}"), format!("/{filename}"));
    ctx.scripts.push(filename.clone());
    ctx.assets.push(OutputAsset::chunk(filename, source));

    Ok(())
  }
}

fn file_name(path: &str) -> &str {
  path.rsplit('/').next().unwrap_or(path)
}

#[test]
fn test_file_name() {
  assert_eq!(file_name("js/app.1234.js"), "app.1234.js");
  assert_eq!(file_name("app.js"), "app.js");
}
