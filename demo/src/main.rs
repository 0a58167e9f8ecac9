//! Run one search over the editor's files and print the result.
//!
//! Run: cargo run --bin gridstar-demo [-- config.json]

use std::path::Path;

use gridstar_demo::{DemoConfig, LoadError, drive, load_grid};

fn run() -> Result<(), LoadError> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => DemoConfig::load(Path::new(&path))?,
        None => DemoConfig::default(),
    };
    let grid = load_grid(&config)?;
    println!(
        "{} grid, start {}, end {}, {} obstacles",
        grid.dims(),
        grid.start(),
        grid.end(),
        grid.blocked_count()
    );
    let report = drive(&grid, config.max_steps)?;
    println!("{report}");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
