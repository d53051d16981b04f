mod pipeline_options;
mod types;

pub use crate::{
  pipeline_options::{
    PipelineOptions, build_mode::BuildMode, filename_template::FilenameTemplate,
    normalized_pipeline_options::NormalizedPipelineOptions,
    stage_options::{AnalyzerOptions, PrecacheOptions},
  },
  types::{
    asset_manifest::AssetManifest,
    output_asset::{AssetKind, OutputAsset},
    post_process_rule::PostProcessRule,
    secret_config::{CLIENT_ID_SENTINEL, SecretConfig},
    stage_spec::{StageKind, StageSpec},
  },
};
