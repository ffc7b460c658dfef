// File: crates/chart-render-skia/build.rs
// Summary: Links the Windows system libraries skia-safe's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW / RegQueryInfoKeyW are pulled in by Skia's DirectWrite font lookup
        println!("cargo:rustc-link-lib=advapi32");
    }
}
