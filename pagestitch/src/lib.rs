pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{active_link_for_path, assemble_page, loader_options, parse_page_location};
