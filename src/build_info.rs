//! Version string pieces baked in by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `<version> (<date> <commit>)`, as printed by `--version`.
pub fn version_string() -> String {
    format!("{} ({} {})", PKG_VERSION, BUILD_DATE, BUILD_COMMIT)
}
