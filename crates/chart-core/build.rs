// File: crates/chart-core/build.rs
// Summary: Link the Windows system libraries Skia's font manager pulls in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW & co. are referenced by Skia's font lookup.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
