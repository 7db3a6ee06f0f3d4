/*

    Report the slice range of a volume seen through a camera,
    both read from a scene JSON file.

    @date: Oct, 2025
    @author: Bartu

*/

use std::env;
use tracing::{info, warn, error};

use slice_range::json_parser::parse_scene_json;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    // Logging on console
    tracing_subscriber::fmt::init();

    // Parse args
    let args: Vec<String> = env::args().collect();
    let json_path: String = if args.len() == 1 {
        warn!("No arguments were provided, setting default scene path...");
        String::from("./inputs/unit_cube.json")
    } else if args.len() == 2 {
        args[1].clone()
    } else {
        error!("Usage: {} <filename>.json", args[0]);
        std::process::exit(1);
    };

    // Parse JSON
    info!("Loading scene from {}...", json_path);
    let scene = parse_scene_json(&json_path).map_err(|e| {
        error!("Failed to load scene: {}", e);
        e
    })?;

    let range = scene.slice_range()?;
    info!(
        "Slice range along {}: min {}, max {}, current {}",
        range.view_plane_normal, range.min, range.max, range.current
    );
    let extent = range.extent();
    if extent.is_degenerate() {
        warn!("Volume has no extent along the view direction");
    }
    if !range.contains_current() {
        warn!("Focal point is outside of the volume, nearest slice is {}", extent.clamp(range.current));
    }

    info!("Finished execution.");
    Ok(())
}
