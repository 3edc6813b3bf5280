//! Keeps `tests/unit` in step with `src` and every test file non-empty

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    // Entry points and module roots carry no logic of their own
    fn is_exempt(relative: &str) -> bool {
        let name = Path::new(relative).file_name().unwrap_or_default();
        name == "lib.rs" || name == "main.rs" || name == "mod.rs"
    }

    fn rust_files(root: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    files.push(path);
                }
            }
        }
        Ok(files)
    }

    fn mirrored(root: &Path) -> BTreeSet<String> {
        assert!(root.is_dir(), "{} is not a directory", root.display());
        rust_files(root)
            .unwrap_or_default()
            .iter()
            .filter_map(|path| path.strip_prefix(root).ok())
            .map(|relative| relative.to_string_lossy().replace('\\', "/"))
            .filter(|relative| !is_exempt(relative))
            .collect()
    }

    // Tests each source file has a unit test file at the same relative path
    // Verified by deleting tests/unit/io/terminal.rs
    #[test]
    fn test_every_source_file_has_unit_tests() {
        let tests = mirrored(Path::new("tests/unit"));

        let missing: Vec<String> = mirrored(Path::new("src"))
            .difference(&tests)
            .map(|relative| format!("  - src/{relative} -> tests/unit/{relative}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives its source file
    // Verified by adding tests/unit/io/stale.rs
    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let sources = mirrored(Path::new("src"));

        let orphaned: Vec<String> = mirrored(Path::new("tests/unit"))
            .difference(&sources)
            .map(|relative| format!("  - tests/unit/{relative}"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source file:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests every non-root test file declares at least one test
    // Verified by emptying tests/unit/io/summary.rs
    #[test]
    fn test_test_files_contain_tests() {
        let root = Path::new("tests");
        let mut empty = Vec::new();

        for path in rust_files(root).unwrap_or_default() {
            let relative = path.strip_prefix(root).unwrap_or(path.as_path()).to_string_lossy();
            if is_exempt(&relative) {
                continue;
            }
            let content = fs::read_to_string(&path).unwrap_or_default();
            if !content.contains("#[test]") {
                empty.push(format!("  - {}", path.display()));
            }
        }

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }

    // Tests the library keeps forbidding unsafe code, macros included
    // Verified by relaxing the attribute to deny
    #[test]
    fn test_library_forbids_unsafe_code() {
        let lib = fs::read_to_string("src/lib.rs").unwrap();

        assert!(lib.contains("#![forbid(unsafe_code)]"));
    }
}
