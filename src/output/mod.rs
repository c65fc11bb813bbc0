//! Text output for reports, ideal-contrast results and catalog listings.

mod terminal;

pub use terminal::TextRenderer;
