use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Файлы, которые кладутся рядом с исполняемым файлом: (источник, назначение)
const RUNTIME_FILES: &[(&str, &str)] = &[
    ("config.toml", "config.toml"),
    ("crates/backend/seed/demo_centers.json", "seed/centers.json"),
];

fn main() {
    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let Some(target_dir) = target_profile_dir() else {
        println!("cargo:warning=target profile directory not found, runtime files not copied");
        return;
    };

    for (source, dest) in RUNTIME_FILES {
        let source_path = workspace_root.join(source);
        println!("cargo:rerun-if-changed={}", source_path.display());

        if !source_path.exists() {
            println!("cargo:warning={} not found, using embedded default", source);
            continue;
        }

        let dest_path = target_dir.join(dest);
        if let Some(parent) = dest_path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Err(e) = fs::copy(&source_path, &dest_path) {
            println!("cargo:warning=Failed to copy {}: {}", source, e);
        }
    }
}

// OUT_DIR: target/<profile>/build/backend-xxx/out
fn target_profile_dir() -> Option<PathBuf> {
    let out_dir = env::var("OUT_DIR").ok()?;
    let profile = env::var("PROFILE").ok()?;
    Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}
