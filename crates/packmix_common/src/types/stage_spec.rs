use std::{fmt::Display, path::PathBuf};

/// Every named transformation the pipeline can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
  Clean,
  BundleScript,
  CompileStyle,
  RenderHtml,
  PostProcess,
  Version,
  Precache,
  Analyze,
}

impl StageKind {
  pub fn name(self) -> &'static str {
    match self {
      Self::Clean => "clean",
      Self::BundleScript => "bundle-script",
      Self::CompileStyle => "compile-style",
      Self::RenderHtml => "render-html",
      Self::PostProcess => "post-process",
      Self::Version => "version",
      Self::Precache => "precache",
      Self::Analyze => "analyze",
    }
  }
}

impl Display for StageKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.name())
  }
}

/// One scheduled transformation: its declared input, declared output, and
/// the stage it must not start before. Specs are assembled once, up front,
/// and never mutated.
#[derive(Debug, Clone)]
pub struct StageSpec {
  pub kind: StageKind,
  pub input: Option<PathBuf>,
  pub output: Option<PathBuf>,
  pub after: Option<StageKind>,
}

impl StageSpec {
  pub fn new(kind: StageKind) -> Self {
    Self { kind, input: None, output: None, after: None }
  }

  pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
    self.input = Some(input.into());
    self
  }

  pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
    self.output = Some(output.into());
    self
  }

  pub fn after(mut self, kind: StageKind) -> Self {
    self.after = Some(kind);
    self
  }
}
