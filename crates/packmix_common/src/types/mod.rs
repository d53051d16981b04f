pub mod asset_manifest;
pub mod output_asset;
pub mod post_process_rule;
pub mod secret_config;
pub mod stage_spec;
