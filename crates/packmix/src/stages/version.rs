use packmix_common::{NormalizedPipelineOptions, OutputAsset};
use packmix_error::BuildResult;
use packmix_fs::FileSystem;
use packmix_utils::content_hash::content_hash;

use crate::types::build_context::BuildContext;

pub const MANIFEST_FILENAME: &str = "mix-manifest.json";

/// Cache-busting stage, production only. Renames emitted js/css assets that
/// do not yet carry a content hash, rewrites references to them inside the
/// html shell and records every logical path in `mix-manifest.json`.
pub struct VersionStage<'a, F: FileSystem> {
  fs: &'a F,
  options: &'a NormalizedPipelineOptions,
}

impl<'a, F: FileSystem> VersionStage<'a, F> {
  pub fn new(fs: &'a F, options: &'a NormalizedPipelineOptions) -> Self {
    Self { fs, options }
  }

  pub async fn run(&self, ctx: &mut BuildContext) -> BuildResult<()> {
    let BuildContext { assets, manifest, .. } = ctx;
    let out_dir = &self.options.out_dir;

    let mut renames: Vec<(String, String)> = vec![];
    for asset in assets.iter_mut() {
      let Some((stem, ext)) = asset.filename.rsplit_once('.') else { continue };
      if ext != "js" && ext != "css" {
        continue;
      }

      // Chunks hashed at bundle time already sit in the manifest under
      // their logical name; skip them.
      let emitted = format!("/{}", asset.filename);
      if manifest.iter().any(|(_, path)| path == emitted) {
        continue;
      }

      let hash = content_hash(asset.content_as_bytes());
      let versioned = format!("{stem}.{hash}.{ext}");
      self.fs.rename(&out_dir.join(&asset.filename), &out_dir.join(&versioned)).map_err(
        |error| anyhow::anyhow!("Failed to version {}: {error}", asset.filename),
      )?;

      manifest.insert(emitted, format!("/{versioned}"));
      renames.push((asset.filename.clone(), versioned.clone()));
      asset.filename = versioned;
    }

    if !renames.is_empty() {
      self.rewrite_shell_references(assets, &renames)?;
    }

    let manifest_json = manifest.to_json();
    self.fs.write(&out_dir.join(MANIFEST_FILENAME), manifest_json.as_bytes()).map_err(
      |error| anyhow::anyhow!("Failed to write {MANIFEST_FILENAME}: {error}"),
    )?;
    assets.push(OutputAsset::asset(MANIFEST_FILENAME, manifest_json));

    Ok(())
  }

  fn rewrite_shell_references(
    &self,
    assets: &mut [OutputAsset],
    renames: &[(String, String)],
  ) -> BuildResult<()> {
    let Some(shell) =
      assets.iter_mut().find(|asset| asset.filename == self.options.html_output)
    else {
      return Ok(());
    };

    let mut content = std::mem::take(&mut shell.content);
    for (old, new) in renames {
      content = content.replace(old.as_str(), new.as_str());
    }

    self
      .fs
      .write(&self.options.out_dir.join(&shell.filename), content.as_bytes())
      .map_err(|error| anyhow::anyhow!("Failed to rewrite {}: {error}", shell.filename))?;
    shell.content = content;

    Ok(())
  }
}
