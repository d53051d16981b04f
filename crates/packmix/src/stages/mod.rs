pub mod analyze;
pub mod bundle_script;
pub mod clean;
pub mod compile_style;
pub mod post_process;
pub mod precache;
pub mod render_html;
pub mod version;
