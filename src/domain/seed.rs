use super::{Grid, Pattern, presets};
use rand::Rng;

/// Fraction of cells seeded alive by the default random seed
pub const DEFAULT_SEED_DENSITY: f32 = 0.2;

/// Strategy for populating a freshly created grid
pub enum Seed {
    /// Each cell independently alive with probability `p`
    UniformRandom { p: f32 },
    /// A preset pattern stamped with its anchor at (row, col)
    Pattern {
        pattern: Pattern,
        row: usize,
        col: usize,
    },
}

impl Seed {
    /// Random fill at the default density
    pub fn uniform_random() -> Self {
        Seed::UniformRandom {
            p: DEFAULT_SEED_DENSITY,
        }
    }

    /// A single lightweight spaceship near the top-left corner
    pub fn lightweight_spaceship() -> Self {
        Seed::Pattern {
            pattern: presets::lwss(),
            row: 10,
            col: 8,
        }
    }

    /// Populate an all-dead grid according to the strategy
    pub fn apply(&self, grid: &mut Grid, rng: &mut impl Rng) {
        match self {
            Seed::UniformRandom { p } => grid.randomize(*p, rng),
            Seed::Pattern { pattern, row, col } => pattern.stamp(grid, *row, *col),
        }
    }

    /// Short label for logs
    pub fn label(&self) -> &'static str {
        match self {
            Seed::UniformRandom { .. } => "random",
            Seed::Pattern { pattern, .. } => pattern.name,
        }
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self::uniform_random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_seed_places_exactly_the_pattern() {
        let mut grid = Grid::new(30, 30).unwrap();
        let mut rng = rand::rng();
        Seed::lightweight_spaceship().apply(&mut grid, &mut rng);
        assert_eq!(grid.population(), 8);
        // Anchored at (10, 8), the ship's nose sits at (10, 11).
        assert!(grid.get(10, 11).unwrap().is_alive());
        assert!(grid.get(14, 11).unwrap().is_alive());
    }

    #[test]
    fn test_random_seed_density_bounds() {
        let mut grid = Grid::new(20, 20).unwrap();
        let mut rng = rand::rng();
        Seed::UniformRandom { p: 1.0 }.apply(&mut grid, &mut rng);
        assert_eq!(grid.population(), 400);

        let mut grid = Grid::new(20, 20).unwrap();
        Seed::UniformRandom { p: 0.0 }.apply(&mut grid, &mut rng);
        assert_eq!(grid.population(), 0);
    }
}
