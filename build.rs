//! Build script generating the C header consumed by the Python cffi bindings.

use std::env;
use std::path::PathBuf;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let output_dir = PathBuf::from(&crate_dir).join("include");

    std::fs::create_dir_all(&output_dir).unwrap();

    let config = cbindgen::Config::from_file("cbindgen.toml").unwrap_or_default();

    cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .with_language(cbindgen::Language::C)
        .generate()
        .expect("Unable to generate rusty_python.h")
        .write_to_file(output_dir.join("rusty_python.h"));

    println!("cargo:rerun-if-changed=src/ffi/");
    println!("cargo:rerun-if-changed=cbindgen.toml");
}
