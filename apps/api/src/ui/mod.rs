// Server-rendered interface: navbar, upload widget, results panel, and the pages
// composing them. Components are dioxus `rsx!` trees rendered to HTML strings.

pub mod document;
pub mod file_upload;
pub mod handlers;
pub mod navbar;
pub mod pages;
pub mod results_display;

pub use file_upload::FileUpload;
pub use navbar::Navbar;
pub use results_display::ResultsDisplay;
