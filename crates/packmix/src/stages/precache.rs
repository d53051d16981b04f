use itertools::Itertools;
use packmix_common::{NormalizedPipelineOptions, OutputAsset, PrecacheOptions};
use packmix_error::BuildResult;
use packmix_fs::FileSystem;
use packmix_utils::{content_hash::content_hash, path_ext::PathExt};

use crate::types::build_context::BuildContext;

/// Emits `service-worker.js` with a precache manifest covering every emitted
/// file that matches the configured globs, keyed by content revision so
/// clients only refetch what actually changed.
pub struct PrecacheStage<'a, F: FileSystem> {
  fs: &'a F,
  options: &'a NormalizedPipelineOptions,
}

impl<'a, F: FileSystem> PrecacheStage<'a, F> {
  pub fn new(fs: &'a F, options: &'a NormalizedPipelineOptions) -> Self {
    Self { fs, options }
  }

  pub async fn run(&self, ctx: &mut BuildContext) -> BuildResult<()> {
    let Some(precache) = &self.options.precache else { return Ok(()) };

    let out_dir = &self.options.out_dir;
    let files = self.fs.walk(out_dir).map_err(|error| {
      anyhow::anyhow!("Failed to list output directory {}: {error}", out_dir.display())
    })?;

    let mut entries = vec![];
    for file in files {
      // Urls are relative to the output directory, prefix stripped.
      let relative = file.strip_prefix(out_dir).unwrap_or(&file).expect_to_slash();
      if relative == precache.filename {
        continue;
      }
      if !precache
        .static_file_globs
        .iter()
        .any(|glob| fast_glob::glob_match(glob.as_str(), relative.as_str()))
      {
        continue;
      }

      let content = self.fs.read_to_string(&file).map_err(|error| {
        anyhow::anyhow!("Failed to read {} for precaching: {error}", file.display())
      })?;
      entries.push(serde_json::json!({
        "url": format!("/{relative}"),
        "revision": content_hash(content.as_bytes()),
      }));
    }

    let manifest = serde_json::Value::Array(entries);
    let manifest = if precache.minify {
      manifest.to_string()
    } else {
      serde_json::to_string_pretty(&manifest).unwrap_or_else(|_| manifest.to_string())
    };

    let worker = render_worker(precache, &manifest);
    self
      .fs
      .write(&out_dir.join(&precache.filename), worker.as_bytes())
      .map_err(|error| anyhow::anyhow!("Failed to emit {}: {error}", precache.filename))?;

    ctx.assets.push(OutputAsset::asset(precache.filename.clone(), worker));

    Ok(())
  }
}

fn render_worker(options: &PrecacheOptions, manifest: &str) -> String {
  let cache_id = serde_json::Value::String(options.cache_id.clone()).to_string();
  let body = format!(
    "const CACHE_ID = {cache_id};
const PRECACHE_MANIFEST = {manifest};

self.addEventListener('install', (event) => {{
  event.waitUntil(
    caches.open(CACHE_ID).then((cache) =>
      cache.addAll(PRECACHE_MANIFEST.map((entry) => entry.url))
    )
  );
}});

self.addEventListener('activate', (event) => {{
  event.waitUntil(
    caches.keys().then((keys) =>
      Promise.all(keys.filter((key) => key !== CACHE_ID).map((key) => caches.delete(key)))
    )
  );
}});

self.addEventListener('fetch', (event) => {{
  event.respondWith(
    caches.match(event.request).then((cached) => cached || fetch(event.request))
  );
}});
"
  );

  if options.minify {
    body.lines().map(str::trim).filter(|line| !line.is_empty()).join("\n")
  } else {
    body
  }
}
