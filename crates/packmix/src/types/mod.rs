pub mod build_context;
pub mod pipeline_output;

use std::sync::Arc;

use packmix_common::NormalizedPipelineOptions;

pub type SharedOptions = Arc<NormalizedPipelineOptions>;
