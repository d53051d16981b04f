use packmix_common::{NormalizedPipelineOptions, StageKind, StageSpec};

/// Assembles the immutable stage plan for a run. Pure function of the
/// normalized options; execution never alters it.
///
/// The post-process step declares an explicit dependency on the html shell
/// emission instead of being chained onto it, so the scheduler can verify
/// the ordering contract before running it.
pub fn assemble_stages(options: &NormalizedPipelineOptions) -> Vec<StageSpec> {
  let mut stages = vec![];

  if options.clean {
    stages.push(StageSpec::new(StageKind::Clean).with_output(&options.out_dir));
  }

  stages.push(StageSpec::new(StageKind::BundleScript).with_input(&options.script_entry));
  stages.push(
    StageSpec::new(StageKind::CompileStyle)
      .with_input(&options.style_entry)
      .with_output(options.out_dir.join(&options.style_output)),
  );
  stages.push(
    StageSpec::new(StageKind::RenderHtml)
      .with_input(&options.html_template)
      .with_output(options.out_dir.join(&options.html_output))
      .after(StageKind::BundleScript),
  );
  stages.push(
    StageSpec::new(StageKind::PostProcess)
      .with_input(&options.post_process.file)
      .with_output(&options.post_process.file)
      .after(StageKind::RenderHtml),
  );

  if options.version {
    stages.push(
      StageSpec::new(StageKind::Version)
        .with_output(options.out_dir.join("mix-manifest.json"))
        .after(StageKind::PostProcess),
    );
  }

  if let Some(precache) = &options.precache {
    stages.push(
      StageSpec::new(StageKind::Precache).with_output(options.out_dir.join(&precache.filename)),
    );
  }

  if let Some(analyze) = &options.analyze {
    stages.push(
      StageSpec::new(StageKind::Analyze)
        .with_output(options.out_dir.join(&analyze.report_filename)),
    );
  }

  stages
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use packmix_common::{BuildMode, PipelineOptions, StageKind};

  use super::assemble_stages;
  use crate::utils::normalize_options::normalize_options;

  fn stage_kinds(mode: BuildMode) -> Vec<StageKind> {
    let options = normalize_options(PipelineOptions {
      cwd: Some(PathBuf::from("/project")),
      mode: Some(mode),
      ..PipelineOptions::default()
    });
    assemble_stages(&options).iter().map(|spec| spec.kind).collect()
  }

  #[test]
  fn development_plan_has_no_versioning_stage() {
    let kinds = stage_kinds(BuildMode::Development);
    assert!(!kinds.contains(&StageKind::Version));
    assert!(kinds.contains(&StageKind::PostProcess));
  }

  #[test]
  fn production_plan_appends_the_versioning_stage() {
    let kinds = stage_kinds(BuildMode::Production);
    assert!(kinds.contains(&StageKind::Version));
  }

  #[test]
  fn post_process_depends_on_the_html_shell() {
    let options = normalize_options(PipelineOptions {
      cwd: Some(PathBuf::from("/project")),
      mode: Some(BuildMode::Development),
      ..PipelineOptions::default()
    });
    let stages = assemble_stages(&options);

    let render = stages.iter().position(|s| s.kind == StageKind::RenderHtml).unwrap();
    let fixup = stages.iter().position(|s| s.kind == StageKind::PostProcess).unwrap();
    assert!(render < fixup);
    assert_eq!(stages[fixup].after, Some(StageKind::RenderHtml));
  }
}
