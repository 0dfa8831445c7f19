use crate::consts::ROW_COUNT;
use crate::core_types::{Finger, KeyMetrics, Row};
use crate::error::{KeyFitError, KfResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

// Row-staggered ANSI board: 13 / 13 / 12 / 10 positions.
// The 12th home position is Enter.
const STANDARD_FINGERS: &str = r"
l-pinky l-pinky l-ring l-middle l-index l-index r-index r-index r-middle r-ring r-pinky r-pinky r-pinky
  l-pinky l-ring l-middle l-index l-index r-index r-index r-middle r-ring r-pinky r-pinky r-pinky r-pinky
    l-pinky l-ring l-middle l-index l-index r-index r-index r-middle r-ring r-pinky r-pinky r-pinky
      l-pinky l-ring l-middle l-index l-index r-index r-index r-middle r-ring r-pinky
";

const STANDARD_EFFORTS: &str = r"
6.5 5.5 4.5 4.5 4.5 5.5 6.5 4.5 4.5 4.5 5.5 6.5 7.5
  3.5 2.5 2.0 2.0 3.0 3.5 2.0 2.0 2.5 3.5 4.5 5.5 6.5
    1.5 1.0 0.5 0.5 2.0 2.0 0.5 0.5 1.0 1.5 3.0 4.5
      4.0 3.0 2.5 2.0 3.5 2.5 2.0 2.5 3.0 4.0
";

const STANDARD_DISTANCES: &str = r"
2.5 2.0 2.0 2.0 2.0 2.5 3.0 2.0 2.0 2.0 2.0 2.5 3.0
  1.0 1.0 1.0 1.0 1.5 1.5 1.0 1.0 1.0 1.0 1.5 2.0 2.5
    0.0 0.0 0.0 0.0 1.0 1.0 0.0 0.0 0.0 0.0 1.0 2.0
      1.0 1.0 1.0 1.0 1.5 1.0 1.0 1.0 1.0 1.0
";

/// Physical cost model of a board: which finger presses each grid position,
/// what it costs to press, and how far it is from the finger's home key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardGeometry {
    pub name: String,
    pub fingers: Vec<Vec<Finger>>,
    pub efforts: Vec<Vec<f64>>,
    pub distances: Vec<Vec<f64>>,

    /// Extra effort for the shifted variant of a key.
    #[serde(default = "default_shift_effort")]
    pub shift_effort: f64,
    #[serde(default = "default_space_effort")]
    pub space_effort: f64,
    #[serde(default)]
    pub space_distance: f64,
}

fn default_shift_effort() -> f64 {
    1.0
}

fn default_space_effort() -> f64 {
    0.5
}

impl Default for KeyboardGeometry {
    fn default() -> Self {
        Self::standard()
    }
}

impl KeyboardGeometry {
    /// The built-in row-staggered ANSI geometry.
    pub fn standard() -> Self {
        // The embedded grids are constants checked by the unit tests below.
        let fingers = grid_rows(STANDARD_FINGERS)
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .filter_map(|t| Finger::from_str(t).ok())
                    .collect()
            })
            .collect();
        let efforts = parse_numeric_grid(STANDARD_EFFORTS).unwrap_or_default();
        let distances = parse_numeric_grid(STANDARD_DISTANCES).unwrap_or_default();

        Self {
            name: "ansi_row_stagger".to_string(),
            fingers,
            efforts,
            distances,
            shift_effort: default_shift_effort(),
            space_effort: default_space_effort(),
            space_distance: 0.0,
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KfResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            KeyFitError::Config(format!(
                "Failed to read geometry file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let geometry: Self = serde_json::from_str(&content)?;
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn row_count(&self) -> usize {
        self.fingers.len()
    }

    pub fn row_width(&self, row: usize) -> usize {
        self.fingers.get(row).map_or(0, Vec::len)
    }

    /// Metrics of the unshifted key at grid position (`row`, `col`).
    pub fn key_at(&self, row: usize, col: usize) -> Option<KeyMetrics> {
        let finger = *self.fingers.get(row)?.get(col)?;
        let effort = *self.efforts.get(row)?.get(col)?;
        let distance = *self.distances.get(row)?.get(col)?;
        let row = Row::from_index(row)?;
        Some(KeyMetrics::new(finger, row, effort, distance))
    }

    pub fn space_key(&self) -> KeyMetrics {
        KeyMetrics::new(
            Finger::Thumb,
            Row::Bottom,
            self.space_effort,
            self.space_distance,
        )
    }

    pub fn validate(&self) -> KfResult<()> {
        let rows = self.fingers.len();
        if rows == 0 || rows > ROW_COUNT {
            return Err(KeyFitError::Validation(format!(
                "Geometry '{}' must define 1..={} rows, found {}",
                self.name, ROW_COUNT, rows
            )));
        }
        if self.efforts.len() != rows || self.distances.len() != rows {
            return Err(KeyFitError::Validation(format!(
                "Geometry '{}' has {} finger rows but {} effort rows and {} distance rows",
                self.name,
                rows,
                self.efforts.len(),
                self.distances.len()
            )));
        }

        for r in 0..rows {
            let width = self.fingers[r].len();
            if self.efforts[r].len() != width || self.distances[r].len() != width {
                return Err(KeyFitError::Validation(format!(
                    "Geometry '{}' row {} has mismatched widths (fingers {}, efforts {}, distances {})",
                    self.name,
                    r,
                    width,
                    self.efforts[r].len(),
                    self.distances[r].len()
                )));
            }
            for c in 0..width {
                if let Some(key) = self.key_at(r, c) {
                    key.validate().map_err(|e| {
                        KeyFitError::Validation(format!("Geometry key ({}, {}): {}", r, c, e))
                    })?;
                }
            }
        }

        if !self.shift_effort.is_finite() || self.shift_effort < 0.0 {
            return Err(KeyFitError::Validation(format!(
                "shift_effort must be non-negative, got {}",
                self.shift_effort
            )));
        }
        self.space_key().validate()
    }
}

/// Splits a textual grid into rows of whitespace separated tokens.
/// Blank lines are ignored; leading indentation is cosmetic.
pub fn grid_rows(text: &str) -> Vec<Vec<&str>> {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .filter(|tokens| !tokens.is_empty())
        .collect()
}

pub fn parse_numeric_grid(text: &str) -> KfResult<Vec<Vec<f64>>> {
    grid_rows(text)
        .into_iter()
        .enumerate()
        .map(|(r, row)| {
            row.into_iter()
                .map(|t| {
                    t.parse::<f64>().map_err(|_| {
                        KeyFitError::Layout(format!("Invalid number '{}' in grid row {}", t, r))
                    })
                })
                .collect()
        })
        .collect()
}
