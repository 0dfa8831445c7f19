/// Number of non-thumb fingers tracked in a tally.
pub const FINGER_COUNT: usize = 8;

/// Number of key rows (number, top, home, bottom).
pub const ROW_COUNT: usize = 4;

/// Grid token that stands for the Enter key.
pub const ENTER_TOKEN: &str = "\\n";

/// Overhead added when two consecutive keystrokes use the same non-thumb finger.
pub const DEFAULT_SAME_FINGER_PENALTY: f64 = 1.0;

/// Overhead added when two consecutive keystrokes stay on the same hand.
pub const DEFAULT_SAME_HAND_PENALTY: f64 = 0.5;

/// Overhead added per row crossed between consecutive keystrokes.
pub const DEFAULT_ROW_CHANGE_PENALTY: f64 = 0.5;

/// Default typing budget for whole-corpus layout comparisons.
pub const DEFAULT_EFFORT_LIMIT: f64 = 40_000_000.0;

/// Symmetry of a sample typed entirely on one hand.
pub const SYMMETRY_FLOOR: f64 = 63.0;

/// Evenness of a sample typed entirely on one finger.
pub const EVENNESS_FLOOR: f64 = 44.0;

/// Maximum coefficient of variation for 8 non-negative values: sqrt(8 - 1).
pub const MAX_FINGER_CV: f64 = 2.645_751_311_064_590_7;
