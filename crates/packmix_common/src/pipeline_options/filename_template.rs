/// Output filename pattern with `[name]` and `[hash]` placeholders, e.g.
/// `js/[name].[hash].js`.
#[derive(Debug, Clone)]
pub struct FilenameTemplate {
  template: String,
}

impl FilenameTemplate {
  pub fn new(template: impl Into<String>) -> Self {
    Self { template: template.into() }
  }

  pub fn has_hash(&self) -> bool {
    self.template.contains("[hash]")
  }

  pub fn render(&self, name: &str, hash: Option<&str>) -> String {
    let rendered = self.template.replace("[name]", name);
    match hash {
      Some(hash) => rendered.replace("[hash]", hash),
      None => {
        // Drop the placeholder together with its separator.
        rendered.replace(".[hash]", "").replace("-[hash]", "").replace("[hash]", "")
      }
    }
  }
}

#[test]
fn test_render() {
  let template = FilenameTemplate::new("js/[name].[hash].js");
  assert_eq!(template.render("app", Some("1234abcd")), "js/app.1234abcd.js");
  assert_eq!(template.render("app", None), "js/app.js");
  assert!(template.has_hash());
}
