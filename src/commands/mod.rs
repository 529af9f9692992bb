// Command handlers module
pub mod telemetry;

// Re-exports for cleaner imports
pub use telemetry::execute as telemetry;
