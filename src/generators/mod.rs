use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

mod row_scan;

pub use row_scan::row_scan;

use crate::maze::{ConfigError, Maze, MazeConfig, Position};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Picks one of the candidate entry cells, unless the config already pinned one.
fn pick_entry<R: Rng + ?Sized>(
    pinned: Option<Position>,
    candidates: &[Position],
    rng: &mut R,
) -> Position {
    match pinned {
        Some(pos) => pos,
        // Validation guarantees at least one non-corner border cell on each side
        None => candidates.choose(rng).copied().unwrap_or_default(),
    }
}

/// Builds a maze with randomly biased walls and entries on the border.
///
/// Start is chosen among the non-corner cells of the left and top borders, end
/// among those of the bottom and right borders. Neither is guaranteed to have
/// an opening, and the two are not guaranteed to be connected.
pub fn generate_maze<R: Rng + ?Sized>(
    config: &MazeConfig,
    rng: &mut R,
) -> Result<Maze, ConfigError> {
    config.validate()?;

    let start = pick_entry(config.start, &config.start_candidates(), rng);
    let end = pick_entry(config.end, &config.end_candidates(), rng);
    let walls = row_scan(config.rows, config.cols, config.opening_probability, rng);

    tracing::debug!(
        "[generator] {}x{} maze, start {:?}, end {:?}",
        config.rows,
        config.cols,
        start,
        end
    );

    Ok(Maze::from_walls(&walls, config, start, end))
}
