use packmix_common::{AssetManifest, OutputAsset};
use rustc_hash::FxHashMap;

/// Mutable state threaded through the stages of a single run. Each stage
/// reads what earlier stages recorded and appends its own results; nothing
/// here outlives the invocation.
#[derive(Default)]
pub struct BuildContext {
  /// Constant-replacement table applied to bundled sources.
  pub replacements: FxHashMap<String, String>,
  /// Script files emitted so far, relative to the output directory.
  pub scripts: Vec<String>,
  /// Stylesheet files emitted so far, relative to the output directory.
  pub styles: Vec<String>,
  /// Logical path to emitted path, written out by the versioning stage.
  pub manifest: AssetManifest,
  pub assets: Vec<OutputAsset>,
  pub warnings: Vec<anyhow::Error>,
}
