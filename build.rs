/// Expose the compilation target triple to the crate at build time.
///
/// `menucalc version` reports it via `env!("TARGET")`.
fn main() {
    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=TARGET={target}");
}
