use packmix_common::OutputAsset;

#[derive(Debug, Default)]
pub struct PipelineOutput {
  pub assets: Vec<OutputAsset>,
  pub warnings: Vec<anyhow::Error>,
}
