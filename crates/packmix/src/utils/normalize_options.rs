use packmix_common::{
  AnalyzerOptions, BuildMode, FilenameTemplate, NormalizedPipelineOptions, PipelineOptions,
  PostProcessRule, PrecacheOptions,
};

/// Resolves raw options into the final configuration of a run. This is the
/// only place the build mode is consulted: the versioning toggle, the
/// notification toggle and the snippet selection are all fixed here, before
/// any stage executes.
pub fn normalize_options(raw: PipelineOptions) -> NormalizedPipelineOptions {
  let mode = raw.mode.unwrap_or_else(BuildMode::from_env);
  let cwd =
    raw.cwd.unwrap_or_else(|| std::env::current_dir().expect("Failed to get current dir"));
  let name = raw.name.unwrap_or_else(|| "packmix".to_string());

  let sw_snippet = if mode.is_production() {
    raw.sw_snippet_prod.unwrap_or_else(|| "resources/js/service-worker-prod.js".to_string())
  } else {
    raw.sw_snippet_dev.unwrap_or_else(|| "resources/js/service-worker-dev.js".to_string())
  };

  let out_dir = cwd.join(raw.out_dir.as_deref().unwrap_or("public"));
  let html_output = "index.html".to_string();
  let post_process = PostProcessRule::double_slash_js(out_dir.join(&html_output));

  let precache = raw.precache.unwrap_or(true).then(|| PrecacheOptions {
    cache_id: name.clone(),
    ..PrecacheOptions::default()
  });
  let analyze = raw.analyze.unwrap_or(true).then(|| AnalyzerOptions {
    generate_stats_file: raw.stats_file.unwrap_or(false),
    ..AnalyzerOptions::default()
  });

  NormalizedPipelineOptions {
    script_entry: cwd.join(raw.script_entry.as_deref().unwrap_or("resources/js/app.js")),
    style_entry: cwd.join(raw.style_entry.as_deref().unwrap_or("resources/sass/app.scss")),
    html_template: cwd.join(raw.html_template.as_deref().unwrap_or("resources/index.hbs")),
    sw_snippet: cwd.join(sw_snippet),
    secrets_path: cwd.join(raw.secrets.as_deref().unwrap_or("conf.json")),
    out_dir,
    public_path: raw.public_path.unwrap_or_else(|| "/".to_string()),
    chunk_filenames: FilenameTemplate::new(
      raw.chunk_filenames.unwrap_or_else(|| "js/[name].[hash].js".to_string()),
    ),
    style_output: raw.style_output.unwrap_or_else(|| "css/app.css".to_string()),
    html_output,
    source_maps: raw.source_maps.unwrap_or(true),
    clean: raw.clean.unwrap_or(true),
    version: mode.is_production(),
    notifications: !mode.is_production(),
    post_process,
    precache,
    analyze,
    cwd,
    mode,
    name,
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use packmix_common::{BuildMode, PipelineOptions};

  use super::normalize_options;

  fn raw(mode: BuildMode) -> PipelineOptions {
    PipelineOptions {
      cwd: Some(PathBuf::from("/project")),
      mode: Some(mode),
      ..PipelineOptions::default()
    }
  }

  #[test]
  fn production_enables_versioning_and_mutes_notifications() {
    let options = normalize_options(raw(BuildMode::Production));
    assert!(options.version);
    assert!(!options.notifications);
    assert!(options.sw_snippet.ends_with("service-worker-prod.js"));
  }

  #[test]
  fn development_is_the_exact_opposite() {
    let options = normalize_options(raw(BuildMode::Development));
    assert!(!options.version);
    assert!(options.notifications);
    assert!(options.sw_snippet.ends_with("service-worker-dev.js"));
  }

  #[test]
  fn defaults_mirror_the_conventional_layout() {
    let options = normalize_options(raw(BuildMode::Development));
    assert_eq!(options.script_entry, PathBuf::from("/project/resources/js/app.js"));
    assert_eq!(options.secrets_path, PathBuf::from("/project/conf.json"));
    assert_eq!(options.out_dir, PathBuf::from("/project/public"));
    assert_eq!(options.public_path, "/");
    assert!(options.source_maps);
  }
}
