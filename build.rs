// Copies the host page in `static/` to `dist/`.
//
// The page loads `pkg/neon_wasm.js`, which wasm-pack produces; build it first:
//
//     wasm-pack build --release --target web --out-dir static/pkg
//
// and the next cargo build copies it to `dist/pkg` together with the page.
use fs_extra::dir::{copy, CopyOptions};
use std::{fs, path::Path};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        println!("cargo:warning=no static/ directory – nothing to copy");
        return;
    }
    if !static_dir.join("pkg").exists() {
        println!(
            "cargo:warning=static/pkg missing – run `wasm-pack build --target web --out-dir static/pkg`"
        );
    }

    // Overwrite in place so earlier artifacts in dist/ survive.
    let out_dir = Path::new("dist");
    fs::create_dir_all(out_dir).ok();

    let mut options = CopyOptions::new();
    options.overwrite = true;
    options.content_only = true;
    if let Err(e) = copy(static_dir, out_dir, &options) {
        println!("cargo:warning=copying static assets failed: {e}");
    }
}
