use std::path::PathBuf;

use clap::Args;

use crate::types::build_mode::BuildMode;

#[derive(Args)]
pub struct ProjectArgs {
  #[clap(long)]
  pub cwd: Option<PathBuf>,

  /// Project file, relative to the working directory.
  #[clap(long, short = 'c', default_value = "packmix.toml")]
  pub config: String,

  #[clap(long, short = 'm')]
  pub mode: Option<BuildMode>,

  #[clap(long)]
  pub name: Option<String>,

  #[clap(long)]
  pub secrets: Option<String>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'd')]
  pub out_dir: Option<String>,

  #[clap(long)]
  pub public_path: Option<String>,

  #[clap(long)]
  pub chunk_filenames: Option<String>,

  #[clap(long)]
  pub source_maps: Option<bool>,

  #[clap(long)]
  pub clean: Option<bool>,

  #[clap(long)]
  pub precache: Option<bool>,

  #[clap(long)]
  pub analyze: Option<bool>,

  #[clap(long)]
  pub stats_file: Option<bool>,
}

#[derive(Args)]
pub struct ReportArgs {
  #[clap(long)]
  pub silent: bool,

  #[clap(long, short = 'v')]
  pub verbose: bool,
}
