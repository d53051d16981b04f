use std::path::PathBuf;

use crate::{AnalyzerOptions, BuildMode, FilenameTemplate, PostProcessRule, PrecacheOptions};

/// Fully resolved configuration. Every value here is determined before any
/// stage executes; nothing mutates it afterwards.
#[allow(clippy::struct_excessive_bools)] // Using raw booleans is more clear in this case
#[derive(Debug)]
pub struct NormalizedPipelineOptions {
  pub cwd: PathBuf,
  pub mode: BuildMode,
  pub name: String,

  // --- Input
  pub script_entry: PathBuf,
  pub style_entry: PathBuf,
  pub html_template: PathBuf,
  /// The mode-selected service-worker bootstrap snippet.
  pub sw_snippet: PathBuf,
  pub secrets_path: PathBuf,

  // --- Output
  pub out_dir: PathBuf,
  pub public_path: String,
  pub chunk_filenames: FilenameTemplate,
  pub style_output: String,
  pub html_output: String,
  pub source_maps: bool,
  pub clean: bool,
  pub version: bool,
  pub notifications: bool,
  pub post_process: PostProcessRule,
  pub precache: Option<PrecacheOptions>,
  pub analyze: Option<AnalyzerOptions>,
}

impl NormalizedPipelineOptions {
  /// Public URL for an asset emitted relative to the output directory.
  ///
  /// Deliberately a raw join: with a root public path this produces the
  /// doubled leading slash that [`crate::PostProcessRule::double_slash_js`]
  /// corrects after the shell is emitted.
  pub fn public_url(&self, filename: &str) -> String {
    format!("{}/{filename}", self.public_path)
  }

  /// Like [`Self::public_url`], but collapses a doubled slash at the join
  /// boundary. Used for stylesheet hrefs, which never had the defect.
  pub fn public_href(&self, filename: &str) -> String {
    format!("{}/{filename}", self.public_path.trim_end_matches('/'))
  }
}
