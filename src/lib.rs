// Domain layer - grid, patterns, generation transition
pub mod domain;

// Application layer - simulation driver and render settings
pub mod application;

// Startup configuration
pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Grid, GridError, Pattern, presets};
pub use application::{Driver, RenderStyle};
pub use config::{ConfigError, LifeConfig};
