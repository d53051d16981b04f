use itertools::Itertools;
use packmix_common::{NormalizedPipelineOptions, OutputAsset};
use packmix_error::BuildResult;
use packmix_fs::FileSystem;

use crate::types::build_context::BuildContext;

/// Renders a static size report over everything the run emitted, and
/// optionally a machine-readable stats file.
pub struct AnalyzeStage<'a, F: FileSystem> {
  fs: &'a F,
  options: &'a NormalizedPipelineOptions,
}

impl<'a, F: FileSystem> AnalyzeStage<'a, F> {
  pub fn new(fs: &'a F, options: &'a NormalizedPipelineOptions) -> Self {
    Self { fs, options }
  }

  pub async fn run(&self, ctx: &mut BuildContext) -> BuildResult<()> {
    let Some(analyze) = &self.options.analyze else { return Ok(()) };
    let out_dir = &self.options.out_dir;

    let report = render_report(&self.options.name, &ctx.assets);
    self
      .fs
      .write(&out_dir.join(&analyze.report_filename), report.as_bytes())
      .map_err(|error| anyhow::anyhow!("Failed to emit {}: {error}", analyze.report_filename))?;

    if analyze.generate_stats_file {
      let stats = serde_json::Value::Array(
        ctx
          .assets
          .iter()
          .map(|asset| {
            serde_json::json!({
              "filename": asset.filename,
              "kind": asset.kind.to_string(),
              "bytes": asset.content.len(),
            })
          })
          .collect(),
      )
      .to_string();

      self
        .fs
        .write(&out_dir.join(&analyze.stats_filename), stats.as_bytes())
        .map_err(|error| {
          anyhow::anyhow!("Failed to emit {}: {error}", analyze.stats_filename)
        })?;
      ctx.assets.push(OutputAsset::asset(analyze.stats_filename.clone(), stats));
    }

    ctx.assets.push(OutputAsset::asset(analyze.report_filename.clone(), report));

    Ok(())
  }
}

fn render_report(name: &str, assets: &[OutputAsset]) -> String {
  let rows = assets
    .iter()
    .map(|asset| {
      format!(
        "      <tr><td>{}</td><td>{}</td><td>{:.2} kB</td></tr>",
        asset.filename,
        asset.kind,
        asset.content.len() as f64 / 1024.0
      )
    })
    .join("\n");

  format!(
    "<!doctype html>
<html>
  <head>
    <meta charset=\"utf-8\">
    <title>{name} bundle report</title>
  </head>
  <body>
    <h1>{name} bundle report</h1>
    <table>
      <tr><th>asset</th><th>kind</th><th>size</th></tr>
{rows}
    </table>
  </body>
</html>
"
  )
}

#[test]
fn test_report_lists_every_asset() {
  let assets = vec![
    OutputAsset::chunk("js/app.1234abcd.js", "console.log(1);"),
    OutputAsset::asset("index.html", "<html></html>"),
  ];
  let report = render_report("packmix", &assets);

  assert!(report.contains("js/app.1234abcd.js"));
  assert!(report.contains("index.html"));
  assert!(report.contains("<th>asset</th>"));
}
