pub mod assemble_stages;
pub mod normalize_options;
