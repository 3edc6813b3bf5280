//! Tests for command-line parsing and the end-to-end mosaic run

#[cfg(test)]
mod tests {
    use brickqr::algorithm::executor::ColorCheck;
    use brickqr::io::cli::{Cli, MosaicBuilder, summary_path, validate_output};
    use brickqr::io::image::{canvas_side_px, poster_height_px};
    use brickqr::io::qr::Security;
    use brickqr::{MosaicError, Placement};
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn create_test_cli(output: &str, extra: &[&str]) -> Cli {
        let mut args = vec!["program", "-s", "home", "-p", "secret", "-o", output];
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    // Tests CLI parsing with only the required arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = create_test_cli("out.png", &[]);

        assert_eq!(cli.ssid, "home");
        assert_eq!(cli.password, "secret");
        assert_eq!(cli.output, PathBuf::from("out.png"));
        assert_eq!(cli.security, Security::Wpa);
        assert!(!cli.hidden);
        assert!(cli.catalog.is_none());
        assert!(cli.should_show_progress());
        assert_eq!(cli.log_filter(), "warn");
        assert_eq!(cli.tiling_config().color_check, ColorCheck::Live);
    }

    // Tests short flags and security names
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = create_test_cli(
            "out.png",
            &["-S", "nopass", "-H", "-c", "mine.json", "-q", "-v"],
        );

        assert_eq!(cli.security, Security::NoPass);
        assert!(cli.hidden);
        assert_eq!(cli.catalog, Some(PathBuf::from("mine.json")));
        assert!(!cli.should_show_progress());
        assert_eq!(cli.log_filter(), "info");
    }

    // Tests the legacy flag selects the snapshot color check
    // Verified by ignoring the flag
    #[test]
    fn test_cli_legacy_colors() {
        let cli = create_test_cli("out.png", &["--legacy-colors"]);

        assert_eq!(cli.tiling_config().color_check, ColorCheck::Snapshot);
    }

    // Tests missing required arguments and unknown security types are rejected
    // Verified by making the ssid optional
    #[test]
    fn test_cli_rejects_bad_args() {
        assert!(Cli::try_parse_from(["program", "-p", "x", "-o", "a.png"]).is_err());
        assert!(
            Cli::try_parse_from(["program", "-s", "a", "-p", "x", "-o", "a.png", "-S", "WPA3"])
                .is_err()
        );
    }

    // Tests output extension validation
    // Verified by accepting any extension
    #[test]
    fn test_validate_output() {
        assert!(validate_output(Path::new("qr.png")).is_ok());
        assert!(validate_output(Path::new("qr.JPEG")).is_ok());
        assert!(matches!(
            validate_output(Path::new("qr.txt")),
            Err(MosaicError::InvalidParameter {
                parameter: "output",
                ..
            })
        ));
        assert!(validate_output(Path::new("qr")).is_err());
    }

    // Tests the parts list lands next to the image
    // Verified by changing the summary suffix
    #[test]
    fn test_summary_path() {
        assert_eq!(
            summary_path(Path::new("out/wifi.png")),
            PathBuf::from("out/wifi_parts.txt")
        );
    }

    // Tests a full run writes every output and covers the code completely
    // Verified by skipping the white color check
    #[test]
    fn test_process_writes_outputs() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = temp_dir.path().join("plates.json");
        fs::write(
            &catalog,
            r#"[{ "id": "3024", "width": 1, "length": 1 }, { "id": "3020", "width": 2, "length": 4 }]"#,
        )
        .unwrap();
        let image_path = temp_dir.path().join("wifi.png");
        let json_path = temp_dir.path().join("placements.json");

        let cli = create_test_cli(
            image_path.to_str().unwrap(),
            &[
                "-c",
                catalog.to_str().unwrap(),
                "--placements",
                json_path.to_str().unwrap(),
                "-q",
            ],
        );
        let report = MosaicBuilder::new(cli).process().unwrap();

        assert_eq!(report.side % 4, 1);
        assert!(report.coverage.is_complete());
        assert_eq!(report.image_path, image_path);
        let saved = image::open(&image_path).unwrap();
        let text_lines = report.instructions.lines().count();
        assert_eq!(saved.height(), poster_height_px(report.side, text_lines));
        assert!(saved.height() > canvas_side_px(report.side));

        let summary = fs::read_to_string(&report.summary_path).unwrap();
        assert_eq!(summary, report.instructions);
        assert!(summary.contains("Part Number: 3024"));

        let exported: Vec<Placement> =
            serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(exported, report.placements);
    }

    // Tests an invalid output extension fails before anything is written
    // Verified by validating the output after export
    #[test]
    fn test_process_rejects_bad_output() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("wifi.txt");

        let cli = create_test_cli(output.to_str().unwrap(), &["-q"]);
        let result = MosaicBuilder::new(cli).process();

        assert!(result.is_err());
        assert!(!output.exists());
        assert!(!temp_dir.path().join("wifi_parts.txt").exists());
    }

    // Tests a missing catalog file is an error rather than a silent fallback
    // Verified by falling back to the built-in catalog
    #[test]
    fn test_process_missing_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("wifi.png");
        let catalog = temp_dir.path().join("missing.json");

        let cli = create_test_cli(
            output.to_str().unwrap(),
            &["-c", catalog.to_str().unwrap(), "-q"],
        );
        let result = MosaicBuilder::new(cli).process();

        assert!(matches!(result, Err(MosaicError::FileSystem { .. })));
    }
}
