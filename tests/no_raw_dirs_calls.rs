//! Lint test: platform directories are looked up in one place only.
//!
//! `dirs::data_dir()` and `dirs::home_dir()` ignore `FLOCKBOOK_DATA_PATH`
//! and `XDG_CONFIG_HOME`, which the integration tests rely on for isolation.
//! Everything else goes through `infrastructure::fs`.

use std::fs;
use std::path::Path;

const ALLOWED_FILES: &[&str] = &["src/infrastructure/fs/locations.rs"];

fn visit_dirs(dir: &Path, violations: &mut Vec<String>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_dir() {
                visit_dirs(&path, violations);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                check_file(&path, violations);
            }
        }
    }
}

fn check_file(path: &Path, violations: &mut Vec<String>) {
    let relative = path
        .strip_prefix(env!("CARGO_MANIFEST_DIR"))
        .unwrap_or(path);
    let relative_str = relative.to_string_lossy().replace('\\', "/");

    if ALLOWED_FILES.iter().any(|f| relative_str.ends_with(f)) {
        return;
    }

    let Ok(content) = fs::read_to_string(path) else {
        return;
    };

    for (line_num, line) in content.lines().enumerate() {
        if line.contains("dirs::") && !line.trim_start().starts_with("//") {
            violations.push(format!(
                "{}:{}: direct use of the dirs crate - use infrastructure::fs instead",
                relative_str,
                line_num + 1
            ));
        }
    }
}

#[test]
fn no_raw_dirs_calls_outside_locations() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut violations = Vec::new();
    visit_dirs(&src_dir, &mut violations);

    assert!(
        violations.is_empty(),
        "\n\nFound {} direct dirs:: call(s):\n\n{}\n",
        violations.len(),
        violations.join("\n")
    );
}
