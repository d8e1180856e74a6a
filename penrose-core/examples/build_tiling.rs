/// Example: Build a tiling and report the buffers a renderer would upload
///
/// Usage: cargo run --example build_tiling -- [loops] [fan-degree] [edge-length]
///
/// Set `RUST_LOG=debug` to see every deflation pass.
use std::env;
use std::process::ExitCode;

use penrose_core::{LitVertex, Penrose, TilingConfig};
use tracing_subscriber::EnvFilter;

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> Result<T, String> {
    match args.get(index) {
        Some(raw) => raw
            .parse()
            .map_err(|_| format!("could not parse argument {}: {:?}", index, raw)),
        None => Ok(default),
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let defaults = TilingConfig::default();
    let config = defaults
        .with_loops(parse_arg(args, 1, defaults.loops)?)
        .with_fan_degree(parse_arg(args, 2, defaults.fan_degree)?)
        .with_edge_length(parse_arg(args, 3, defaults.edge_length)?);

    let mut tiling = Penrose::new(config).map_err(|e| e.to_string())?;
    tiling.subdivide().map_err(|e| e.to_string())?;
    let flat = tiling.census();
    tiling.extrude().map_err(|e| e.to_string())?;

    let vertices = tiling.emit::<LitVertex>().map_err(|e| e.to_string())?;
    let indices = tiling.indices();

    println!("Flat tiles: {} ({:?})", flat.total(), flat);
    println!("Triangles after extrusion: {}", tiling.triangle_count());
    println!(
        "Vertex buffer: {} vertices, {} floats, {} bytes",
        vertices.vertex_count(),
        vertices.as_floats().len(),
        vertices.as_bytes().len()
    );
    println!("Index buffer: {} indices", indices.len());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Usage: {} [loops] [fan-degree] [edge-length]", args[0]);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
