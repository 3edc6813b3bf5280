//! Command-line interface: Wi-Fi credentials in, brick mosaic plan out

use crate::algorithm::executor::{ColorCheck, TilingConfig, TilingEngine};
use crate::algorithm::verification::CoverageReport;
use crate::io::catalog::resolve_catalog;
use crate::io::configuration::{SUMMARY_SUFFIX, VALID_IMAGE_EXTENSIONS};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::image::export_mosaic;
use crate::io::progress::ProgressManager;
use crate::io::qr::{Security, WifiCredentials, encode_modules};
use crate::io::summary::{ShoppingList, build_instructions};
use crate::io::terminal::render_preview;
use crate::spatial::grid::WorkingGrid;
use crate::spatial::tiles::{Placement, TileShape};
use clap::Parser;
use log::{info, warn};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "brickqr")]
#[command(author, version, about = "Plan a brick-plate mosaic of a WiFi QR code")]
/// Command-line arguments for the mosaic planner
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// The SSID of the Wi-Fi network
    #[arg(short, long)]
    pub ssid: String,

    /// The Wi-Fi password
    #[arg(short, long)]
    pub password: String,

    /// The security type of the Wi-Fi network
    #[arg(short = 'S', long, value_enum, default_value_t = Security::Wpa)]
    pub security: Security,

    /// Flag the network as hidden
    #[arg(short = 'H', long)]
    pub hidden: bool,

    /// Output image (.jpg, .jpeg, .png, .gif or .bmp)
    #[arg(short, long, value_name = "IMAGE")]
    pub output: PathBuf,

    /// Plate catalog JSON (defaults to plates.json, then the built-in catalog)
    #[arg(short, long, value_name = "JSON")]
    pub catalog: Option<PathBuf>,

    /// Check both colors before placing either, as older releases did
    #[arg(long)]
    pub legacy_colors: bool,

    /// Print the QR code to the terminal before tiling
    #[arg(long)]
    pub preview: bool,

    /// Also write the placements as JSON
    #[arg(long, value_name = "JSON")]
    pub placements: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log progress details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter for this invocation
    pub const fn log_filter(&self) -> &'static str {
        if self.verbose { "info" } else { "warn" }
    }

    /// Network details taken from the arguments
    pub fn credentials(&self) -> WifiCredentials {
        WifiCredentials {
            ssid: self.ssid.clone(),
            password: self.password.clone(),
            security: self.security,
            hidden: self.hidden,
        }
    }

    /// Engine configuration selected by the flags
    pub const fn tiling_config(&self) -> TilingConfig {
        TilingConfig {
            color_check: if self.legacy_colors {
                ColorCheck::Snapshot
            } else {
                ColorCheck::Live
            },
        }
    }
}

/// What a finished run produced
#[derive(Debug)]
pub struct MosaicReport {
    /// QR side length in modules
    pub side: usize,
    /// Placements in discovery order
    pub placements: Vec<Placement>,
    /// Coverage derived from the placements
    pub coverage: CoverageReport,
    /// Build instructions and parts list
    pub instructions: String,
    /// Where the image was written
    pub image_path: PathBuf,
    /// Where the parts list was written
    pub summary_path: PathBuf,
}

/// Runs one invocation: encode, tile, verify, export
pub struct MosaicBuilder {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MosaicBuilder {
    /// Create a builder with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Build the mosaic plan described by the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the output path is not a supported image, the
    /// catalog cannot be loaded, the payload cannot be encoded, or any
    /// output file cannot be written
    // Allow print for the terminal preview and the parts list
    #[allow(clippy::print_stdout)]
    pub fn process(&mut self) -> Result<MosaicReport> {
        let image_path = validate_output(&self.cli.output)?;
        let payload = self.cli.credentials().payload();
        let modules = encode_modules(&payload)?;
        let side = modules.len();
        info!("QR code is {side} cells in size");

        if self.cli.preview {
            println!("{}", render_preview(&modules));
        }

        let catalog = resolve_catalog(self.cli.catalog.as_deref())?;
        let mut grid = WorkingGrid::from_modules(&modules)?;
        let placements = self.run_engine(&mut grid, &catalog);

        let coverage = CoverageReport::from_placements(&placements, side);
        let uncovered = coverage.uncovered.len();
        if uncovered > 0 {
            warn!("{uncovered} cells left uncovered; add a 1x1 plate to the catalog");
        }
        let overlapping = coverage.overlapping.len();
        if overlapping > 0 {
            warn!("{overlapping} cells covered more than once");
        }

        let instructions = build_instructions(side, &ShoppingList::from_placements(&placements));
        export_mosaic(&placements, side, &instructions, &image_path)?;
        info!("Image saved as '{}'", image_path.display());

        let summary_path = summary_path(&image_path);
        write_file(&summary_path, &instructions, "write parts list")?;

        if let Some(json_path) = &self.cli.placements {
            let json = serde_json::to_string_pretty(&placements).map_err(|e| {
                MosaicError::Serialization {
                    path: json_path.clone(),
                    source: e,
                }
            })?;
            write_file(json_path, &json, "write placements")?;
        }

        println!("{instructions}");

        Ok(MosaicReport {
            side,
            placements,
            coverage,
            instructions,
            image_path,
            summary_path,
        })
    }

    fn run_engine(&mut self, grid: &mut WorkingGrid, catalog: &[TileShape]) -> Vec<Placement> {
        let mut engine = TilingEngine::new(grid, catalog, self.cli.tiling_config());

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(engine.shape_count());
        }

        while let Some(shape) = engine.current_shape() {
            if let Some(ref pm) = self.progress_manager {
                pm.start_shape(shape);
            }

            let should_continue = engine.execute_iteration();

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_shape(engine.placements().len());
            }
            if !should_continue {
                break;
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        engine.into_placements()
    }
}

/// Check the output path has a supported image extension
///
/// # Errors
///
/// Returns [`MosaicError::InvalidParameter`] for any other extension
pub fn validate_output(path: &Path) -> Result<PathBuf> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if VALID_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Ok(path.to_path_buf())
    } else {
        Err(invalid_parameter(
            "output",
            &path.display(),
            &format!(
                "must be an image file ({})",
                VALID_IMAGE_EXTENSIONS.join(", ")
            ),
        ))
    }
}

/// Parts list path written next to an image
pub fn summary_path(image_path: &Path) -> PathBuf {
    let stem = image_path.file_stem().unwrap_or_default();
    let summary_name = format!("{}{SUMMARY_SUFFIX}", stem.to_string_lossy());

    if let Some(parent) = image_path.parent() {
        parent.join(summary_name)
    } else {
        PathBuf::from(summary_name)
    }
}

fn write_file(path: &Path, contents: &str, operation: &'static str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source: e,
    })
}
