use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const ENTRY: &str = "assets/css/main.css";
const OUTPUT_DIR: &str = "assets/dist";

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    fs::create_dir_all(OUTPUT_DIR).expect("Failed to create assets/dist directory");

    // main.css pulls sidebar.css in through @import; the App root links the
    // single bundled file, so every sheet must be reachable from the entry.
    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());
    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY))
        .expect("Failed to bundle dashboard CSS");

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify dashboard CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to print dashboard CSS");

    fs::write(Path::new(OUTPUT_DIR).join("bundle.css"), css.code)
        .expect("Failed to write bundle.css");
}
