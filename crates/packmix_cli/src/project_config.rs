use std::path::Path;

use serde::Deserialize;

use packmix::PipelineOptions;

/// `packmix.toml`, the optional per-project configuration file. CLI flags
/// layer over it; its values layer over the built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
  pub name: Option<String>,
  pub mode: Option<String>,
  #[serde(default)]
  pub input: InputSection,
  #[serde(default)]
  pub output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputSection {
  pub script: Option<String>,
  pub style: Option<String>,
  pub html: Option<String>,
  pub sw_snippet_prod: Option<String>,
  pub sw_snippet_dev: Option<String>,
  pub secrets: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
  pub dir: Option<String>,
  pub public_path: Option<String>,
  pub chunk_filenames: Option<String>,
  pub style: Option<String>,
  pub source_maps: Option<bool>,
  pub clean: Option<bool>,
  pub precache: Option<bool>,
  pub analyze: Option<bool>,
  pub stats_file: Option<bool>,
}

impl ProjectConfig {
  /// An absent file is not an error; a present but invalid one is.
  pub fn load(path: &Path) -> anyhow::Result<PipelineOptions> {
    if !path.exists() {
      return Ok(PipelineOptions::default());
    }
    let source = std::fs::read_to_string(path)
      .map_err(|error| anyhow::anyhow!("Failed to read {}: {error}", path.display()))?;
    let config: Self = toml::from_str(&source)
      .map_err(|error| anyhow::anyhow!("Invalid project file {}: {error}", path.display()))?;
    config.into_options()
  }

  fn into_options(self) -> anyhow::Result<PipelineOptions> {
    let mode = self.mode.as_deref().map(str::parse).transpose()?;

    Ok(PipelineOptions {
      cwd: None,
      mode,
      name: self.name,
      script_entry: self.input.script,
      style_entry: self.input.style,
      html_template: self.input.html,
      sw_snippet_prod: self.input.sw_snippet_prod,
      sw_snippet_dev: self.input.sw_snippet_dev,
      secrets: self.input.secrets,
      out_dir: self.output.dir,
      public_path: self.output.public_path,
      chunk_filenames: self.output.chunk_filenames,
      style_output: self.output.style,
      source_maps: self.output.source_maps,
      clean: self.output.clean,
      precache: self.output.precache,
      analyze: self.output.analyze,
      stats_file: self.output.stats_file,
    })
  }
}

#[cfg(test)]
mod tests {
  use packmix::BuildMode;

  use super::ProjectConfig;

  #[test]
  fn full_project_file_maps_onto_options() {
    let config: ProjectConfig = toml::from_str(
      r#"
        name = "tanibox"
        mode = "production"

        [input]
        script = "resources/js/app.js"
        secrets = "conf.json"

        [output]
        dir = "public"
        public_path = "/"
        stats_file = true
      "#,
    )
    .unwrap();

    let options = config.into_options().unwrap();
    assert_eq!(options.name.as_deref(), Some("tanibox"));
    assert_eq!(options.mode, Some(BuildMode::Production));
    assert_eq!(options.out_dir.as_deref(), Some("public"));
    assert_eq!(options.stats_file, Some(true));
  }

  #[test]
  fn unknown_keys_are_rejected() {
    assert!(toml::from_str::<ProjectConfig>("unknown = 1").is_err());
  }

  #[test]
  fn invalid_mode_is_rejected() {
    let config: ProjectConfig = toml::from_str(r#"mode = "staging""#).unwrap();
    assert!(config.into_options().is_err());
  }
}
