// Platform-specific code module

pub mod command;
pub mod power;
pub mod sensors;

// Re-exports for cleaner imports
pub use command::{command_exists, CommandRunner, SystemCommandRunner};
pub use power::{detect_platform, GenericPowerPlatform, MacPowerPlatform, SysfsPowerPlatform};
pub use sensors::SysinfoSensorSource;
