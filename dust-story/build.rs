//! Build script for dust-story.
//!
//! Copies the observation CSV into OUT_DIR and gzips the boundary topology
//! so both can be embedded via `include_str!`/`include_bytes!` at compile
//! time. The topology is compressed because the raw arc file dwarfs the
//! observation data.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let csv_src = Path::new("../fixtures/preprocessed_data.csv");
    let csv_dest = Path::new(&out_dir).join("preprocessed_data.csv");
    if csv_src.exists() {
        fs::copy(csv_src, &csv_dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", csv_src.display(), csv_dest.display(), e);
        });
    } else {
        fs::write(&csv_dest, "").unwrap();
        println!("cargo:warning=Fixture file {} not found, using empty placeholder", csv_src.display());
    }
    println!("cargo:rerun-if-changed=../fixtures/preprocessed_data.csv");

    let topo_src = Path::new("../fixtures/korea-sigungu-topo.json");
    let topo_dest = Path::new(&out_dir).join("korea-sigungu-topo.json.gz");
    let topo_bytes = if topo_src.exists() {
        fs::read(topo_src).unwrap()
    } else {
        println!("cargo:warning=Fixture file {} not found, using empty placeholder", topo_src.display());
        Vec::new()
    };
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&topo_bytes).unwrap();
    let compressed = encoder.finish().unwrap();
    fs::write(&topo_dest, compressed).unwrap();
    println!("cargo:rerun-if-changed=../fixtures/korea-sigungu-topo.json");

    println!("cargo:rerun-if-changed=build.rs");
}
