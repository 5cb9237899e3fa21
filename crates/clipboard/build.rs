use std::env;

fn main() {
    println!("cargo::rustc-check-cfg=cfg(linux_selection)");
    let family = env::var("CARGO_CFG_TARGET_FAMILY").unwrap_or_default();
    let os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let unix = family.split(',').any(|f| f == "unix");
    if unix
        && !matches!(
            os.as_str(),
            "macos" | "ios" | "android" | "emscripten"
        )
    {
        println!("cargo:rustc-cfg=linux_selection");
    }
}
