//! Height grid storage, parser and loader.
//!
//! Grid files are plain text: one row per non-blank line, whitespace separated
//! integer tokens. The parser is tolerant: commas inside tokens are stripped,
//! tokens that still fail to parse are dropped, and lines without any valid
//! token produce no row. Rows may have different lengths.

use std::fmt::Write as _;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error returned when a grid file cannot be read.
///
/// Once the file contents are available parsing cannot fail, so there is no
/// partial-grid variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// The path does not resolve to a readable file.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Any other read failure (permissions, invalid UTF-8, ...).
    #[error("failed to read grid: {0}")]
    Io(String),
}

/// A 2D grid of integer elevations.
///
/// Stored as a list of variable-length rows: there is no rectangularity
/// invariant, so neighbor lookups must bounds-check per row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeightGrid {
    rows: Vec<Vec<i32>>,
}

impl HeightGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Vec<i32>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row (0 for an empty grid).
    pub fn max_columns(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Total number of cells across all rows.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Minimum and maximum height over every cell of every row.
    ///
    /// Returns `None` when the grid holds no cells.
    pub fn height_range(&self) -> Option<(i32, i32)> {
        let mut cells = self.rows.iter().flatten().copied();
        let first = cells.next()?;
        Some(cells.fold((first, first), |(lo, hi), h| (lo.min(h), hi.max(h))))
    }
}

/// Parse grid text into a [`HeightGrid`].
///
/// # Examples
///
/// ```
/// use fdf_core::grid::parse;
///
/// let grid = parse("1 2,3 x 4\n\n5 6\n");
/// assert_eq!(grid.rows(), &[vec![1, 23, 4], vec![5, 6]]);
/// ```
pub fn parse(text: &str) -> HeightGrid {
    let rows = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_row)
        .filter(|row| !row.is_empty())
        .collect();
    HeightGrid { rows }
}

fn parse_row(line: &str) -> Vec<i32> {
    line.split_whitespace().filter_map(parse_token).collect()
}

fn parse_token(token: &str) -> Option<i32> {
    if token.contains(',') {
        token.replace(',', "").parse().ok()
    } else {
        token.parse().ok()
    }
}

/// Read and parse a grid file.
pub fn load(path: impl AsRef<Path>) -> Result<HeightGrid, ParseFailure> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ParseFailure::NotFound(path.to_path_buf()),
        _ => ParseFailure::Io(format!("{}: {}", path.display(), e)),
    })?;
    Ok(parse(&text))
}

/// Serialize a grid back into the text format (single spaces, one line per row).
pub fn to_text(grid: &HeightGrid) -> String {
    let mut out = String::with_capacity(grid.cell_count() * 4);
    for row in grid.rows() {
        for (i, h) in row.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{}", h);
        }
        out.push('\n');
    }
    out
}
