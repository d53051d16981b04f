use itertools::Itertools;
use packmix_common::{NormalizedPipelineOptions, OutputAsset};
use packmix_error::BuildResult;
use packmix_fs::FileSystem;

use crate::types::build_context::BuildContext;

/// Placeholder the template may use to position the inlined service-worker
/// bootstrap. Without it the snippet lands just before `</body>`.
pub const SW_PLACEHOLDER: &str = "<!-- packmix:service-worker -->";

/// Renders the html shell: inlines the mode-selected service-worker snippet
/// and injects the emitted stylesheet and script references.
pub struct RenderHtmlStage<'a, F: FileSystem> {
  fs: &'a F,
  options: &'a NormalizedPipelineOptions,
}

impl<'a, F: FileSystem> RenderHtmlStage<'a, F> {
  pub fn new(fs: &'a F, options: &'a NormalizedPipelineOptions) -> Self {
    Self { fs, options }
  }

  pub async fn run(&self, ctx: &mut BuildContext) -> BuildResult<()> {
    let template_path = &self.options.html_template;
    let template = self.fs.read_to_string(template_path).map_err(|error| {
      anyhow::anyhow!("Failed to read html template {}: {error}", template_path.display())
    })?;

    let snippet_path = &self.options.sw_snippet;
    let snippet = self.fs.read_to_string(snippet_path).map_err(|error| {
      anyhow::anyhow!(
        "Failed to read service-worker snippet {}: {error}",
        snippet_path.display()
      )
    })?;
    let loader = format!("<script type=\"text/javascript\">{snippet}</script>");

    let mut html = if template.contains(SW_PLACEHOLDER) {
      template.replace(SW_PLACEHOLDER, &loader)
    } else {
      insert_before(template, "</body>", &loader)
    };

    let links = ctx
      .styles
      .iter()
      .map(|style| {
        format!("<link href=\"{}\" rel=\"stylesheet\">", self.options.public_href(style))
      })
      .join("\n");
    html = insert_before(html, "</head>", &links);

    // Scripts keep the raw public-path join; a doubled leading slash here is
    // corrected by the post-process rule after emission.
    let scripts = ctx
      .scripts
      .iter()
      .map(|script| {
        format!(
          "<script type=\"text/javascript\" src=\"{}\"></script>",
          self.options.public_url(script)
        )
      })
      .join("\n");
    html = insert_before(html, "</body>", &scripts);

    let filename = self.options.html_output.clone();
    self
      .fs
      .write(&self.options.out_dir.join(&filename), html.as_bytes())
      .map_err(|error| anyhow::anyhow!("Failed to emit html shell {filename}: {error}"))?;

    ctx.assets.push(OutputAsset::asset(filename, html));

    Ok(())
  }
}

fn insert_before(html: String, marker: &str, fragment: &str) -> String {
  if fragment.is_empty() {
    return html;
  }
  match html.find(marker) {
    Some(pos) => {
      let mut out = String::with_capacity(html.len() + fragment.len() + 1);
      out.push_str(&html[..pos]);
      out.push_str(fragment);
      out.push('\n');
      out.push_str(&html[pos..]);
      out
    }
    None => {
      let mut out = html;
      out.push('\n');
      out.push_str(fragment);
      out
    }
  }
}

#[cfg(test)]
mod tests {
  use super::insert_before;

  #[test]
  fn inserts_fragment_before_marker() {
    let html = "<html><head></head><body></body></html>".to_string();
    let out = insert_before(html, "</head>", "<link>");
    assert_eq!(out, "<html><head><link>\n</head><body></body></html>");
  }

  #[test]
  fn appends_when_marker_is_absent() {
    let out = insert_before("<div>".to_string(), "</body>", "<script></script>");
    assert_eq!(out, "<div>\n<script></script>");
  }

  #[test]
  fn empty_fragment_is_a_no_op() {
    let html = "<html></html>".to_string();
    assert_eq!(insert_before(html.clone(), "</html>", ""), html);
  }
}
