use std::borrow::Cow;

use packmix_common::NormalizedPipelineOptions;
use packmix_error::BuildResult;
use packmix_fs::FileSystem;

use crate::types::build_context::BuildContext;

/// Applies the configured [`packmix_common::PostProcessRule`] to its target
/// artifact. Scheduled strictly after the producing stage; an absent target
/// means that ordering contract was violated and the build must fail
/// visibly.
pub struct PostProcessStage<'a, F: FileSystem> {
  fs: &'a F,
  options: &'a NormalizedPipelineOptions,
}

impl<'a, F: FileSystem> PostProcessStage<'a, F> {
  pub fn new(fs: &'a F, options: &'a NormalizedPipelineOptions) -> Self {
    Self { fs, options }
  }

  pub async fn run(&self, ctx: &mut BuildContext) -> BuildResult<()> {
    let rule = &self.options.post_process;

    if !self.fs.exists(&rule.file) {
      Err(anyhow::anyhow!(
        "Post-process target {} does not exist; the producing stage did not emit it",
        rule.file.display()
      ))?;
    }

    let content = self.fs.read_to_string(&rule.file).map_err(|error| {
      anyhow::anyhow!("Failed to read post-process target {}: {error}", rule.file.display())
    })?;

    // A clean file stays untouched on disk. Matches are replaced globally
    // and written back in place.
    if let Cow::Owned(patched) = rule.apply(&content) {
      self.fs.write(&rule.file, patched.as_bytes()).map_err(|error| {
        anyhow::anyhow!("Failed to rewrite {}: {error}", rule.file.display())
      })?;

      // Keep the tracked asset in sync with what is on disk.
      if let Some(asset) =
        ctx.assets.iter_mut().find(|asset| rule.file.ends_with(asset.filename.as_str()))
      {
        asset.content = patched;
      }
    }

    Ok(())
  }
}
