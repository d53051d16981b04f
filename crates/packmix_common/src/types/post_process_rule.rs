use std::{borrow::Cow, path::PathBuf, sync::LazyLock};

use regex::Regex;

// Upstream tooling used to emit script includes with a doubled leading slash
// (laravel-mix#1717). On bundlers without the defect the pattern simply never
// matches.
static DOUBLE_SLASH_JS: LazyLock<Regex> = LazyLock::new(|| Regex::new("//js").unwrap());

/// A deterministic edit applied to one emitted artifact after its producing
/// stage has completed. The replacement must not re-introduce text the
/// pattern matches, so re-applying the rule is always a no-op.
#[derive(Debug, Clone)]
pub struct PostProcessRule {
  pub file: PathBuf,
  pub pattern: Regex,
  pub replacement: String,
}

impl PostProcessRule {
  /// The built-in rule correcting `//js` prefixes in the generated shell.
  pub fn double_slash_js(file: PathBuf) -> Self {
    Self { file, pattern: DOUBLE_SLASH_JS.clone(), replacement: "/js".to_string() }
  }

  /// Replaces every match in `content`. Borrows the input unchanged when
  /// nothing matches.
  pub fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
    self.pattern.replace_all(content, self.replacement.as_str())
  }
}
