use packmix_common::NormalizedPipelineOptions;
use packmix_error::BuildResult;
use packmix_fs::FileSystem;

use crate::types::build_context::BuildContext;

/// Empties the output directory so stale artifacts from earlier runs never
/// survive into the current one.
pub struct CleanStage<'a, F: FileSystem> {
  fs: &'a F,
  options: &'a NormalizedPipelineOptions,
}

impl<'a, F: FileSystem> CleanStage<'a, F> {
  pub fn new(fs: &'a F, options: &'a NormalizedPipelineOptions) -> Self {
    Self { fs, options }
  }

  pub async fn run(&self, _ctx: &mut BuildContext) -> BuildResult<()> {
    let out_dir = &self.options.out_dir;
    self.fs.remove_dir_all(out_dir).map_err(|error| {
      anyhow::anyhow!("Failed to clean output directory {}: {error}", out_dir.display())
    })?;
    Ok(())
  }
}
