pub mod content_hash;
pub mod path_ext;
