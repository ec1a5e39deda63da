//! Sample height grid generator.
//!
//! Writes `example_<pattern>.fdf` files that the viewer can load directly.

use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing::info;

use fdf_viewer::cli;
use fdf_viewer::core::grid;
use fdf_viewer::logging;

fn main() -> Result<()> {
    let args = cli::parse_gen_args(std::env::args_os()).unwrap_or_else(|e| cli::exit_on_error(e));
    logging::init()?;

    let seed = args.seed.unwrap_or_else(time_seed);
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    for pattern in args.pattern.patterns() {
        let grid = pattern.generate(seed);
        let path = args.out_dir.join(pattern.file_name());
        fs::write(&path, grid::to_text(&grid))
            .with_context(|| format!("writing {}", path.display()))?;
        info!(
            "wrote {} ({}x{})",
            path.display(),
            grid.row_count(),
            grid.max_columns()
        );
    }

    if args.seed.is_none() {
        info!("random pattern seed: {}", seed);
    }
    Ok(())
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(12345)
}
