use std::{sync::Arc, time::Instant};

use packmix_common::{
  NormalizedPipelineOptions, PipelineOptions, SecretConfig, StageKind, StageSpec,
};
use packmix_error::{BuildError, BuildResult};
use packmix_fs::{FileSystem, OsFileSystem};

use crate::{
  stages::{
    analyze::AnalyzeStage, bundle_script::BundleScriptStage, clean::CleanStage,
    compile_style::CompileStyleStage, post_process::PostProcessStage, precache::PrecacheStage,
    render_html::RenderHtmlStage, version::VersionStage,
  },
  types::{SharedOptions, build_context::BuildContext, pipeline_output::PipelineOutput},
  utils::{assemble_stages::assemble_stages, normalize_options::normalize_options},
};

/// Orchestrates one build invocation: normalize options once, assemble the
/// stage plan once, then execute the stages in declared order. There is no
/// retry and no partial result; the first fatal error aborts the run.
pub struct Pipeline<F: FileSystem> {
  fs: F,
  options: SharedOptions,
  stages: Vec<StageSpec>,
}

impl Pipeline<OsFileSystem> {
  pub fn new(options: PipelineOptions) -> Self {
    Self::with_fs(options, OsFileSystem)
  }
}

impl<F: FileSystem> Pipeline<F> {
  pub fn with_fs(options: PipelineOptions, fs: F) -> Self {
    let options: SharedOptions = Arc::new(normalize_options(options));
    let stages = assemble_stages(&options);
    Pipeline { fs, options, stages }
  }

  pub fn options(&self) -> &NormalizedPipelineOptions {
    &self.options
  }

  pub fn stages(&self) -> &[StageSpec] {
    &self.stages
  }

  pub async fn run(&mut self) -> BuildResult<PipelineOutput> {
    // Secret loading and input validation both abort before any stage
    // touches the output directory.
    let replacements = self.load_secrets()?.replacements();
    self.validate_inputs()?;

    let mut ctx = BuildContext { replacements, ..BuildContext::default() };

    let mut completed: Vec<StageKind> = Vec::with_capacity(self.stages.len());
    for spec in &self.stages {
      if let Some(dependency) = spec.after {
        if !completed.contains(&dependency) {
          return Err(BuildError::msg(format!(
            "Stage `{}` is scheduled before its dependency `{dependency}`",
            spec.kind
          )));
        }
      }

      let start = Instant::now();
      tracing::debug!(stage = %spec.kind, "stage started");
      self.run_stage(spec, &mut ctx).await?;
      tracing::debug!(stage = %spec.kind, elapsed = ?start.elapsed(), "stage finished");

      completed.push(spec.kind);
    }

    Ok(PipelineOutput { assets: ctx.assets, warnings: ctx.warnings })
  }

  async fn run_stage(&self, spec: &StageSpec, ctx: &mut BuildContext) -> BuildResult<()> {
    let fs = &self.fs;
    let options = &*self.options;
    match spec.kind {
      StageKind::Clean => CleanStage::new(fs, options).run(ctx).await,
      StageKind::BundleScript => BundleScriptStage::new(fs, options).run(ctx).await,
      StageKind::CompileStyle => CompileStyleStage::new(fs, options).run(ctx).await,
      StageKind::RenderHtml => RenderHtmlStage::new(fs, options).run(ctx).await,
      StageKind::PostProcess => PostProcessStage::new(fs, options).run(ctx).await,
      StageKind::Version => VersionStage::new(fs, options).run(ctx).await,
      StageKind::Precache => PrecacheStage::new(fs, options).run(ctx).await,
      StageKind::Analyze => AnalyzeStage::new(fs, options).run(ctx).await,
    }
  }

  fn load_secrets(&self) -> BuildResult<SecretConfig> {
    let path = &self.options.secrets_path;
    let source = self.fs.read_to_string(path).map_err(|error| {
      anyhow::anyhow!("Failed to read secrets file {}: {error}", path.display())
    })?;
    Ok(SecretConfig::from_json(&source)?)
  }

  /// Fail-fast check that every declared source file exists. Collects all
  /// missing files so one run reports them together.
  fn validate_inputs(&self) -> BuildResult<()> {
    let declared = [
      &self.options.script_entry,
      &self.options.style_entry,
      &self.options.html_template,
      &self.options.sw_snippet,
    ];

    let mut errors = vec![];
    for path in declared {
      if !self.fs.exists(path) {
        errors.push(anyhow::anyhow!("Missing source file: {}", path.display()));
      }
    }

    if !errors.is_empty() {
      Err(errors)?;
    }

    Ok(())
  }
}
