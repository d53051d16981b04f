use std::{fmt::Display, str::FromStr};

/// The single external toggle selecting the production or development
/// behavior set. Read once per invocation; it never changes during a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
  #[default]
  Development,
  Production,
}

impl BuildMode {
  pub const ENV_VAR: &'static str = "PACKMIX_ENV";

  /// An absent or unrecognized variable falls back to `Development`.
  pub fn from_env() -> Self {
    std::env::var(Self::ENV_VAR).ok().and_then(|value| value.parse().ok()).unwrap_or_default()
  }

  #[inline]
  pub fn is_production(self) -> bool {
    matches!(self, Self::Production)
  }
}

impl FromStr for BuildMode {
  type Err = anyhow::Error;

  fn from_str(value: &str) -> Result<Self, Self::Err> {
    match value {
      "development" | "dev" => Ok(Self::Development),
      "production" | "prod" => Ok(Self::Production),
      _ => Err(anyhow::anyhow!("Unknown build mode `{value}`")),
    }
  }
}

impl Display for BuildMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Development => write!(f, "development"),
      Self::Production => write!(f, "production"),
    }
  }
}

#[test]
fn test_build_mode_parsing() {
  assert_eq!("production".parse::<BuildMode>().unwrap(), BuildMode::Production);
  assert_eq!("dev".parse::<BuildMode>().unwrap(), BuildMode::Development);
  assert!("staging".parse::<BuildMode>().is_err());
}
