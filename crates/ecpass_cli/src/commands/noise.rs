//! Noise command implementation
//!
//! Writes the `x,y` noise CSV fed to the symbolic-regression tool that
//! evolved the recurrence: `x = i / count`, `y` uniform in `[0, 1)`.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use crate::{CliError, Result};

/// One CSV row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NoiseRow {
    pub x: f64,
    pub y: f64,
}

/// Draw `count` noise rows from `rng`.
pub fn noise_rows<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<NoiseRow> {
    (0..count)
        .map(|i| NoiseRow {
            x: i as f64 / count as f64,
            y: rng.gen::<f64>(),
        })
        .collect()
}

/// Run the noise command
///
/// Uses `StdRng::seed_from_u64` when `rng_seed` is given so the file is
/// reproducible, otherwise an entropy-seeded generator.
pub fn run(count: usize, path: &Path, rng_seed: Option<u64>) -> Result<Vec<NoiseRow>> {
    if count == 0 {
        return Err(CliError::invalid_argument("Noise count must be at least 1"));
    }

    let mut rng = match rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let rows = noise_rows(count, &mut rng);

    let mut writer = csv::Writer::from_path(path)?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!(path = %path.display(), count, "noise CSV written");
    Ok(rows)
}
