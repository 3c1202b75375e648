//! Coalesce a stream of damage rectangles and print the result.
//!
//! Run with `cargo run --example dirty_regions --features tracing` and set
//! `RUST_LOG=tkgeom=trace` to watch every merge decision.

use tkgeom::{DirtyRegion, Rect};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let damage = [
        Rect::new(0.0, 0.0, 2.0, 2.0),
        Rect::new(2.5, 2.5, 1.0, 1.0),
        Rect::new(10.0, 0.0, 4.0, 1.0),
        Rect::new(1.0, 1.0, 2.0, 2.0),
        Rect::new(0.5, 0.5, 0.5, 0.5),
    ];

    let mut region = DirtyRegion::new();
    for rect in damage {
        region.add(rect);
        tracing::info!(%rect, dirty = region.len(), "added damage");
    }

    for rect in region.rects() {
        println!("{}", rect);
    }
    if let Some(bounds) = region.bounds() {
        println!("bounds: {}", bounds);
    }
}
