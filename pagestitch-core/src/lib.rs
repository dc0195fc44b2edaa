pub mod dom;
pub mod fallback;
pub mod highlight;
pub mod loader;
pub mod navigation;
pub mod page;
pub mod report;

use colored::Colorize;

pub use dom::{Document, NodeId};
pub use fallback::Component;
pub use loader::{ComponentLoader, LoadReport, LoaderOptions};
pub use page::Page;

pub fn print_banner() {
    eprintln!(
        "{} {}",
        "pagestitch".bright_cyan().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).bright_black()
    );
}
