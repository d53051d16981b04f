/// Option bag for the precache-manifest stage.
#[derive(Debug, Clone)]
pub struct PrecacheOptions {
  pub cache_id: String,
  pub filename: String,
  pub static_file_globs: Vec<String>,
  pub minify: bool,
}

impl Default for PrecacheOptions {
  fn default() -> Self {
    Self {
      cache_id: "packmix".to_string(),
      filename: "service-worker.js".to_string(),
      static_file_globs: vec![
        "**/*.js".to_string(),
        "**/*.html".to_string(),
        "**/*.css".to_string(),
      ],
      minify: true,
    }
  }
}

/// Option bag for the bundle-analysis stage.
#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
  pub report_filename: String,
  pub generate_stats_file: bool,
  pub stats_filename: String,
}

impl Default for AnalyzerOptions {
  fn default() -> Self {
    Self {
      report_filename: "report.html".to_string(),
      generate_stats_file: false,
      stats_filename: "stats.json".to_string(),
    }
  }
}
