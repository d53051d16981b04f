pub mod build_mode;
pub mod filename_template;
pub mod normalized_pipeline_options;
pub mod stage_options;

use std::path::PathBuf;

use crate::BuildMode;

/// Raw, user-facing pipeline configuration. Every field is optional; the
/// defaults applied during normalization mirror the conventional project
/// layout (`resources/` in, `public/` out).
#[derive(Default, Debug, Clone)]
pub struct PipelineOptions {
  pub cwd: Option<PathBuf>,
  pub mode: Option<BuildMode>,
  pub name: Option<String>,

  // --- Input
  pub script_entry: Option<String>,
  pub style_entry: Option<String>,
  pub html_template: Option<String>,
  pub sw_snippet_prod: Option<String>,
  pub sw_snippet_dev: Option<String>,
  pub secrets: Option<String>,

  // --- Output
  pub out_dir: Option<String>,
  pub public_path: Option<String>,
  pub chunk_filenames: Option<String>,
  pub style_output: Option<String>,
  pub source_maps: Option<bool>,
  pub clean: Option<bool>,
  pub precache: Option<bool>,
  pub analyze: Option<bool>,
  pub stats_file: Option<bool>,
}

impl PipelineOptions {
  /// Field-wise merge. Values present in `self` win over `fallback`, which
  /// is how CLI flags layer over the project file.
  pub fn or(self, fallback: Self) -> Self {
    Self {
      cwd: self.cwd.or(fallback.cwd),
      mode: self.mode.or(fallback.mode),
      name: self.name.or(fallback.name),
      script_entry: self.script_entry.or(fallback.script_entry),
      style_entry: self.style_entry.or(fallback.style_entry),
      html_template: self.html_template.or(fallback.html_template),
      sw_snippet_prod: self.sw_snippet_prod.or(fallback.sw_snippet_prod),
      sw_snippet_dev: self.sw_snippet_dev.or(fallback.sw_snippet_dev),
      secrets: self.secrets.or(fallback.secrets),
      out_dir: self.out_dir.or(fallback.out_dir),
      public_path: self.public_path.or(fallback.public_path),
      chunk_filenames: self.chunk_filenames.or(fallback.chunk_filenames),
      style_output: self.style_output.or(fallback.style_output),
      source_maps: self.source_maps.or(fallback.source_maps),
      clean: self.clean.or(fallback.clean),
      precache: self.precache.or(fallback.precache),
      analyze: self.analyze.or(fallback.analyze),
      stats_file: self.stats_file.or(fallback.stats_file),
    }
  }
}

#[test]
fn test_overlay_prefers_explicit_values() {
  let flags =
    PipelineOptions { out_dir: Some("dist".to_string()), ..PipelineOptions::default() };
  let file = PipelineOptions {
    out_dir: Some("public".to_string()),
    public_path: Some("/assets".to_string()),
    ..PipelineOptions::default()
  };

  let merged = flags.or(file);
  assert_eq!(merged.out_dir.as_deref(), Some("dist"));
  assert_eq!(merged.public_path.as_deref(), Some("/assets"));
}
