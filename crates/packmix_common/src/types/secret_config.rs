use rustc_hash::FxHashMap;
use serde::Deserialize;

/// The sentinel expression bundled sources use to reference the injected
/// client identifier. Replaced at build time, never looked up at runtime.
pub const CLIENT_ID_SENTINEL: &str = "process.env.CLIENT_ID";

/// Credential-like values loaded from the project's JSON secrets file.
/// Extra fields in the file are ignored; a missing `client_id` is a fatal
/// configuration error surfaced during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct SecretConfig {
  pub client_id: String,
}

impl SecretConfig {
  pub fn from_json(source: &str) -> anyhow::Result<Self> {
    serde_json::from_str(source).map_err(|error| anyhow::anyhow!("Invalid secrets file: {error}"))
  }

  /// The constant-replacement table: sentinel expression to JSON-encoded
  /// literal, so the substituted text is a valid string expression.
  pub fn replacements(&self) -> FxHashMap<String, String> {
    let literal = serde_json::Value::String(self.client_id.clone()).to_string();
    FxHashMap::from_iter([(CLIENT_ID_SENTINEL.to_string(), literal)])
  }
}

#[cfg(test)]
mod tests {
  use super::{CLIENT_ID_SENTINEL, SecretConfig};

  #[test]
  fn parses_and_quotes_client_id() {
    let config = SecretConfig::from_json(r#"{"client_id":"abc123","other":1}"#).unwrap();
    let replacements = config.replacements();
    assert_eq!(replacements[CLIENT_ID_SENTINEL], r#""abc123""#);
  }

  #[test]
  fn missing_client_id_is_an_error() {
    let error = SecretConfig::from_json(r#"{"api_key":"x"}"#).unwrap_err();
    assert!(error.to_string().contains("client_id"));
  }

  #[test]
  fn malformed_json_is_an_error() {
    assert!(SecretConfig::from_json("{not json").is_err());
  }

  #[test]
  fn quoting_escapes_special_characters() {
    let config = SecretConfig::from_json(r#"{"client_id":"a\"b"}"#).unwrap();
    assert_eq!(config.replacements()[CLIENT_ID_SENTINEL], r#""a\"b""#);
  }
}
