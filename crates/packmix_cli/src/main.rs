mod args;
mod project_config;
mod types;

use std::{process::ExitCode, time::Instant};

use ansi_term::Colour;
use args::{OutputArgs, ProjectArgs, ReportArgs};
use clap::Parser;

use packmix::{OutputAsset, Pipeline, PipelineOptions};

use crate::project_config::ProjectConfig;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  project: ProjectArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  report: ReportArgs,
}

impl Commands {
  fn to_options(&self) -> PipelineOptions {
    PipelineOptions {
      cwd: self.project.cwd.clone(),
      mode: self.project.mode.map(Into::into),
      name: self.project.name.clone(),
      secrets: self.project.secrets.clone(),
      out_dir: self.output.out_dir.clone(),
      public_path: self.output.public_path.clone(),
      chunk_filenames: self.output.chunk_filenames.clone(),
      source_maps: self.output.source_maps,
      clean: self.output.clean,
      precache: self.output.precache,
      analyze: self.output.analyze,
      stats_file: self.output.stats_file,
      ..PipelineOptions::default()
    }
  }
}

fn init_tracing(verbose: bool) {
  let default = if verbose { "packmix=debug" } else { "warn" };
  let filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn print_output_assets(outputs: Vec<OutputAsset>) {
  let mut left = 0;
  let mut right = 0;

  let mut assets = Vec::with_capacity(outputs.len());

  for output in outputs {
    let size = format!("{:.2}", output.content.len() as f64 / 1024.0);

    if size.len() > right {
      right = size.len();
    }

    if output.filename.len() > left {
      left = output.filename.len()
    }

    assets.push((output.filename, size, output.kind));
  }

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for (filename, size, kind) in assets {
    let filename_len = filename.len();

    println!(
      "{}{}{:left$} {}{}{:right$}{} kB",
      dim.paint("<DIR>/"),
      color.paint(filename),
      "",
      dim.paint(kind.to_string()),
      dim.paint(" │ size: "),
      "",
      size,
      left = left - filename_len,
      right = right - size.len()
    )
  }
}

#[tokio::main]
async fn main() -> ExitCode {
  let args = Commands::parse();
  init_tracing(args.report.verbose);

  let cwd = args
    .project
    .cwd
    .clone()
    .unwrap_or_else(|| std::env::current_dir().expect("Failed to get current dir"));

  let file_options = match ProjectConfig::load(&cwd.join(&args.project.config)) {
    Ok(options) => options,
    Err(error) => {
      println!("{} {error}", Colour::Red.paint("Error:"));
      return ExitCode::FAILURE;
    }
  };

  // CLI flags win over the project file.
  let mut pipeline = Pipeline::new(args.to_options().or(file_options));
  let notifications = pipeline.options().notifications;

  let start = Instant::now();
  match pipeline.run().await {
    Ok(output) => {
      if !args.report.silent {
        // Print warnings
        for warning in output.warnings {
          println!("{} {warning}", Colour::Yellow.paint("Warning:"));
        }

        // Print output assets
        if !output.assets.is_empty() {
          print_output_assets(output.assets);
        }
      }

      if notifications {
        let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
        println!(
          "\n{} Finished in {}",
          Colour::Green.paint("✔"),
          Colour::White.bold().paint(elapsed)
        )
      }

      ExitCode::SUCCESS
    }
    Err(errors) => {
      for error in &*errors {
        println!("{} {error}", Colour::Red.paint("Error:"));
      }
      ExitCode::FAILURE
    }
  }
}
