// UI and formatting module

pub mod telemetry_formatters;

// Re-export commonly used items for cleaner imports
pub use telemetry_formatters::{print_snapshot, render_snapshot, DisplayFilter};
