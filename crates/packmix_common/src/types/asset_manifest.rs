use indexmap::IndexMap;

/// Maps logical asset paths to their emitted (possibly content-hashed)
/// counterparts, e.g. `/js/app.js` to `/js/app.1234abcd.js`. Serialized as
/// `mix-manifest.json` by the versioning stage. Insertion order is kept so
/// the manifest is stable across runs.
#[derive(Debug, Default, Clone)]
pub struct AssetManifest {
  entries: IndexMap<String, String>,
}

impl AssetManifest {
  pub fn insert(&mut self, logical: impl Into<String>, emitted: impl Into<String>) {
    self.entries.insert(logical.into(), emitted.into());
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.entries.iter().map(|(logical, emitted)| (logical.as_str(), emitted.as_str()))
  }

  pub fn to_json(&self) -> String {
    // IndexMap serializes in insertion order.
    serde_json::to_string_pretty(&self.entries).unwrap_or_else(|_| "{}".to_string())
  }
}

#[test]
fn test_manifest_serializes_in_insertion_order() {
  let mut manifest = AssetManifest::default();
  manifest.insert("/js/app.js", "/js/app.1234abcd.js");
  manifest.insert("/css/app.css", "/css/app.deadbeef.css");

  let json = manifest.to_json();
  let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
  assert_eq!(parsed["/js/app.js"], "/js/app.1234abcd.js");
  assert_eq!(parsed["/css/app.css"], "/css/app.deadbeef.css");
  assert!(json.find("/js/app.js").unwrap() < json.find("/css/app.css").unwrap());
}
