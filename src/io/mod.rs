/// Plate catalog loading
pub mod catalog;
/// Command-line interface and run orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Mosaic image rendering
pub mod image;
/// Progress display
pub mod progress;
/// Wi-Fi payload and QR encoding
pub mod qr;
/// Parts list and build instructions
pub mod summary;
/// Terminal preview
pub mod terminal;
