use std::{
  io,
  path::{Path, PathBuf},
  time::Duration,
};

use packmix::{
  AssetKind, BuildMode, FileSystem, MemoryFileSystem, Pipeline, PipelineOptions, StageKind,
};

fn p(path: &str) -> PathBuf {
  PathBuf::from(path)
}

fn project_fs() -> MemoryFileSystem {
  MemoryFileSystem::new([
    (p("/project/conf.json"), br#"{"client_id":"abc123"}"#.to_vec()),
    (
      p("/project/resources/js/app.js"),
      b"const id = process.env.CLIENT_ID;\nconsole.log(id);\n".to_vec(),
    ),
    (
      p("/project/resources/sass/app.scss"),
      b"@import \"colors\";\n/* base */\nbody { color: $ink; }\n".to_vec(),
    ),
    (p("/project/resources/sass/_colors.scss"), b"$ink: #222;\n".to_vec()),
    (
      p("/project/resources/index.hbs"),
      b"<html><head></head><body><!-- packmix:service-worker --></body></html>".to_vec(),
    ),
    (p("/project/resources/js/service-worker-prod.js"), b"registerWorker();".to_vec()),
    (p("/project/resources/js/service-worker-dev.js"), b"noWorkerInDev();".to_vec()),
  ])
}

fn options(mode: BuildMode) -> PipelineOptions {
  PipelineOptions { cwd: Some(p("/project")), mode: Some(mode), ..PipelineOptions::default() }
}

fn read(fs: &MemoryFileSystem, path: &str) -> String {
  fs.read_to_string(Path::new(path)).unwrap_or_else(|_| panic!("missing {path}"))
}

#[tokio::test]
async fn development_build_injects_and_patches_the_shell() {
  let fs = project_fs();
  let mut pipeline = Pipeline::with_fs(options(BuildMode::Development), fs.clone());

  let kinds: Vec<StageKind> = pipeline.stages().iter().map(|spec| spec.kind).collect();
  assert!(!kinds.contains(&StageKind::Version));

  let output = pipeline.run().await.expect("development build failed");
  assert!(output.warnings.is_empty());

  let html = read(&fs, "/project/public/index.html");
  assert!(!html.contains("//js"), "post-process left a doubled slash: {html}");
  assert!(html.contains("src=\"/js/app."));
  assert!(html.contains("href=\"/css/app.css\""));
  assert!(html.contains("noWorkerInDev();"));
  assert!(!html.contains("registerWorker();"));

  // Development builds never emit the version manifest.
  assert!(!fs.exists(Path::new("/project/public/mix-manifest.json")));
}

#[tokio::test]
async fn client_id_is_baked_into_the_bundle() {
  let fs = project_fs();
  let mut pipeline = Pipeline::with_fs(options(BuildMode::Development), fs.clone());
  let output = pipeline.run().await.unwrap();

  // Selecting by kind: the chunk's source map also starts with `js/app.`.
  let chunk = output
    .assets
    .iter()
    .find(|asset| asset.kind == AssetKind::Chunk)
    .expect("no script chunk emitted");
  assert!(chunk.filename.starts_with("js/app.") && chunk.filename.ends_with(".js"));
  assert!(chunk.content.contains(r#"const id = "abc123";"#));
  assert!(!chunk.content.contains("process.env.CLIENT_ID"));
}

#[tokio::test]
async fn hashless_chunk_template_emits_logical_filename() {
  let fs = project_fs();
  let mut opts = options(BuildMode::Development);
  opts.chunk_filenames = Some("js/[name].js".to_string());

  Pipeline::with_fs(opts, fs.clone()).run().await.unwrap();

  assert!(fs.exists(Path::new("/project/public/js/app.js")));
  assert!(fs.exists(Path::new("/project/public/js/app.js.map")));
}

#[tokio::test]
async fn clean_removes_stale_artifacts() {
  let fs = project_fs();
  fs.write(Path::new("/project/public/js/stale.js"), b"leftOver();").unwrap();

  Pipeline::with_fs(options(BuildMode::Development), fs.clone()).run().await.unwrap();

  assert!(!fs.exists(Path::new("/project/public/js/stale.js")));
  assert!(fs.exists(Path::new("/project/public/index.html")));
}

#[tokio::test]
async fn stylesheet_imports_are_inlined_and_comments_stripped() {
  let fs = project_fs();
  Pipeline::with_fs(options(BuildMode::Development), fs.clone()).run().await.unwrap();

  let css = read(&fs, "/project/public/css/app.css");
  assert!(css.contains("$ink: #222;"));
  assert!(!css.contains("@import"));
  assert!(!css.contains("/* base */"));
}

#[tokio::test]
async fn source_map_is_emitted_and_referenced() {
  let fs = project_fs();
  Pipeline::with_fs(options(BuildMode::Development), fs.clone()).run().await.unwrap();

  let map = fs
    .file_names()
    .into_iter()
    .find(|file| file.to_string_lossy().ends_with(".js.map"))
    .expect("no source map emitted");
  let map_path = map.to_string_lossy();
  let chunk = read(&fs, map_path.trim_end_matches(".map"));
  assert!(chunk.contains("//# sourceMappingURL=app."));
}

#[tokio::test]
async fn production_build_versions_unhashed_assets() {
  let fs = project_fs();
  let mut pipeline = Pipeline::with_fs(options(BuildMode::Production), fs.clone());

  let kinds: Vec<StageKind> = pipeline.stages().iter().map(|spec| spec.kind).collect();
  assert!(kinds.contains(&StageKind::Version));
  assert!(!pipeline.options().notifications);

  pipeline.run().await.expect("production build failed");

  let html = read(&fs, "/project/public/index.html");
  assert!(html.contains("registerWorker();"));
  assert!(!html.contains("noWorkerInDev();"));

  let manifest: serde_json::Value =
    serde_json::from_str(&read(&fs, "/project/public/mix-manifest.json")).unwrap();
  let versioned_css = manifest["/css/app.css"].as_str().unwrap();
  assert_ne!(versioned_css, "/css/app.css");
  assert!(versioned_css.starts_with("/css/app.") && versioned_css.ends_with(".css"));
  assert!(manifest["/js/app.js"].as_str().unwrap().starts_with("/js/app."));

  // The shell references the renamed stylesheet, and the renamed file exists.
  assert!(html.contains(versioned_css));
  assert!(fs.exists(&p(&format!("/project/public{versioned_css}"))));
  assert!(!fs.exists(Path::new("/project/public/css/app.css")));
}

#[tokio::test]
async fn precache_manifest_covers_emitted_files() {
  let fs = project_fs();
  Pipeline::with_fs(options(BuildMode::Development), fs.clone()).run().await.unwrap();

  let worker = read(&fs, "/project/public/service-worker.js");
  assert!(worker.contains(r#"const CACHE_ID = "packmix";"#));
  assert!(worker.contains("/index.html"));
  assert!(worker.contains("/js/app."));
  assert!(worker.contains("/css/app.css"));
  // The worker never precaches itself.
  assert!(!worker.contains("/service-worker.js"));
}

#[tokio::test]
async fn missing_client_id_aborts_before_any_output() {
  let fs = project_fs();
  fs.write(Path::new("/project/conf.json"), br#"{"api_key":"x"}"#).unwrap();

  let error = Pipeline::with_fs(options(BuildMode::Production), fs.clone())
    .run()
    .await
    .expect_err("build should abort");
  assert!(error[0].to_string().contains("client_id"));

  // No partial artifacts: the output directory was never written to.
  assert!(!fs.exists(Path::new("/project/public")));
}

#[tokio::test]
async fn missing_sources_are_reported_together() {
  let fs = project_fs();
  fs.remove_dir_all(Path::new("/project/resources/js/app.js")).unwrap();
  fs.remove_dir_all(Path::new("/project/resources/sass/app.scss")).unwrap();

  let error = Pipeline::with_fs(options(BuildMode::Development), fs.clone())
    .run()
    .await
    .expect_err("build should abort");

  assert_eq!(error.len(), 2);
  assert!(error.iter().all(|e| e.to_string().contains("Missing source file")));
  assert!(!fs.exists(Path::new("/project/public")));
}

/// Filesystem that stalls script emission, exercising the ordering
/// guarantee: post-processing must still observe the final shell.
#[derive(Clone)]
struct DelayedFs {
  inner: MemoryFileSystem,
}

impl FileSystem for DelayedFs {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    self.inner.read_to_string(path)
  }

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
    if path.extension().is_some_and(|ext| ext == "js") {
      std::thread::sleep(Duration::from_millis(25));
    }
    self.inner.write(path, content)
  }

  fn exists(&self, path: &Path) -> bool {
    self.inner.exists(path)
  }

  fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
    self.inner.rename(from, to)
  }

  fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
    self.inner.remove_dir_all(path)
  }

  fn walk(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
    self.inner.walk(dir)
  }
}

#[tokio::test]
async fn delayed_bundling_still_produces_a_patched_shell() {
  let inner = project_fs();
  let fs = DelayedFs { inner: inner.clone() };

  Pipeline::with_fs(options(BuildMode::Development), fs).run().await.unwrap();

  let html = read(&inner, "/project/public/index.html");
  assert!(!html.contains("//js"));
  assert!(html.contains("src=\"/js/app."));
}
