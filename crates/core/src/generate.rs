//! Sample height grids.
//!
//! Four synthetic patterns used to try the viewer without real data. All of
//! them are square and deterministic (the random pattern takes a seed).

use crate::grid::HeightGrid;
use crate::rng::SimpleRng;

/// A sample terrain pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Radial peak decaying exponentially from the center
    Mountain,
    /// Product of a row sine and a column cosine
    Wave,
    /// Uniform noise smoothed with the upper and left neighbors
    Random,
    /// Square-based stepped pyramid
    Pyramid,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::Mountain,
        Pattern::Wave,
        Pattern::Random,
        Pattern::Pyramid,
    ];

    /// Parse pattern from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use fdf_core::Pattern;
    ///
    /// assert_eq!(Pattern::from_str("Wave"), Some(Pattern::Wave));
    /// assert_eq!(Pattern::from_str("volcano"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mountain" => Some(Pattern::Mountain),
            "wave" => Some(Pattern::Wave),
            "random" => Some(Pattern::Random),
            "pyramid" => Some(Pattern::Pyramid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Mountain => "mountain",
            Pattern::Wave => "wave",
            Pattern::Random => "random",
            Pattern::Pyramid => "pyramid",
        }
    }

    /// Side length of the generated square grid.
    pub fn size(&self) -> usize {
        match self {
            Pattern::Mountain => 20,
            Pattern::Wave => 25,
            Pattern::Random => 30,
            Pattern::Pyramid => 15,
        }
    }

    /// File name the generator writes this pattern to.
    pub fn file_name(&self) -> String {
        format!("example_{}.fdf", self.as_str())
    }

    /// Generate the pattern. `seed` only affects [`Pattern::Random`].
    pub fn generate(&self, seed: u32) -> HeightGrid {
        match self {
            Pattern::Mountain => mountain(self.size()),
            Pattern::Wave => wave(self.size()),
            Pattern::Random => random(self.size(), seed),
            Pattern::Pyramid => pyramid(self.size()),
        }
    }
}

fn mountain(size: usize) -> HeightGrid {
    let center = (size / 2) as f64;
    build(size, |row, col| {
        let dx = col as f64 - center;
        let dy = row as f64 - center;
        let distance = (dx * dx + dy * dy).sqrt();
        (30.0 * (-distance / 5.0).exp()) as i32
    })
}

fn wave(size: usize) -> HeightGrid {
    build(size, |row, col| {
        (10.0 + 15.0 * (row as f64 * 0.3).sin() * (col as f64 * 0.3).cos()) as i32
    })
}

fn random(size: usize, seed: u32) -> HeightGrid {
    let mut rng = SimpleRng::new(seed);
    let mut rows: Vec<Vec<i32>> = Vec::with_capacity(size);
    for row in 0..size {
        let mut current = Vec::with_capacity(size);
        for col in 0..size {
            let mut h = rng.next_inclusive(0, 20);
            if row > 0 && col > 0 {
                // All terms are non-negative, so `/` is floor division.
                h = (h + rows[row - 1][col] + current[col - 1]) / 3;
            }
            current.push(h);
        }
        rows.push(current);
    }
    HeightGrid::from_rows(rows)
}

fn pyramid(size: usize) -> HeightGrid {
    const PEAK: i32 = 25;
    let center = (size / 2) as i32;
    build(size, |row, col| {
        let distance = (col as i32 - center).abs().max((row as i32 - center).abs());
        (PEAK - distance * 2).max(0)
    })
}

fn build(size: usize, mut height: impl FnMut(usize, usize) -> i32) -> HeightGrid {
    let rows = (0..size)
        .map(|row| (0..size).map(|col| height(row, col)).collect())
        .collect();
    HeightGrid::from_rows(rows)
}
