use clap::ValueEnum;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BuildMode {
  Development,
  Production,
}

impl From<BuildMode> for packmix::BuildMode {
  fn from(value: BuildMode) -> Self {
    match value {
      BuildMode::Development => Self::Development,
      BuildMode::Production => Self::Production,
    }
  }
}
