mod pipeline;
mod stages;
mod types;
mod utils;

pub use crate::{pipeline::Pipeline, types::pipeline_output::PipelineOutput};
pub use packmix_common::*;
pub use packmix_fs::{FileSystem, MemoryFileSystem, OsFileSystem};
