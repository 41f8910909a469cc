//! # Design Point
//!
//! Runs the afterburning turbojet and the mixed-exhaust turbofan against one
//! parameter set and prints both station tables side by side.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example design_point
//! cargo run --example design_point -- path/to/parameters.toml --verbose
//! ```
//!
//! Without a path the bundled `configs/design_point.toml` is used. `--verbose`
//! logs every station as it is computed; `RUST_LOG` overrides the level.

use std::{env, path::PathBuf};

use anyhow::Context;
use jetcycle_cycles::{CycleEngine, EngineKind, Turbofan, Turbojet};
use jetcycle_examples::{
    TracingObserver,
    config::{design_point_path, load_parameters},
    init_tracing,
    report::Report,
    verbose_requested,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing(verbose_requested());

    let path = env::args()
        .skip(1)
        .find(|arg| !arg.starts_with('-'))
        .map_or_else(design_point_path, PathBuf::from);
    info!(path = %path.display(), "loading parameters");

    let params = load_parameters(&path)
        .with_context(|| format!("cannot run the design point from `{}`", path.display()))?;

    let turbojet = Turbojet.run(&params, TracingObserver::new(EngineKind::Turbojet));
    let turbofan = Turbofan.run(&params, TracingObserver::new(EngineKind::Turbofan));

    println!("{}\n", Report(&turbojet));
    println!("{}", Report(&turbofan));

    Ok(())
}
