use crate::consts::ENTER_TOKEN;
use crate::core_types::KeyMetrics;
use crate::error::{KeyFitError, KfResult};
use crate::geometry::{grid_rows, KeyboardGeometry};
use fnv::FnvHashMap;

/// Character -> key metrics lookup for one layout. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyMetricsTable {
    entries: FnvHashMap<char, KeyMetrics>,
}

impl KeyMetricsTable {
    /// Builds a table from validated entries. Duplicates keep the first entry.
    pub fn from_entries<I>(entries: I) -> KfResult<Self>
    where
        I: IntoIterator<Item = (char, KeyMetrics)>,
    {
        let mut map = FnvHashMap::default();
        for (c, metrics) in entries {
            metrics
                .validate()
                .map_err(|e| KeyFitError::Validation(format!("key {:?}: {}", c, e)))?;
            map.entry(c).or_insert(metrics);
        }
        Ok(Self { entries: map })
    }

    /// Parses a layout grid against a geometry.
    ///
    /// Non-blank lines come in pairs: the unshifted row, then its shifted
    /// variant. The token `\n` is the Enter key. The space bar is always
    /// mapped to the geometry's thumb key.
    pub fn from_grid(grid: &str, geometry: &KeyboardGeometry) -> KfResult<Self> {
        let rows = grid_rows(grid);
        if rows.len() % 2 != 0 {
            return Err(KeyFitError::Layout(format!(
                "Grid has {} rows; expected unshifted/shifted pairs",
                rows.len()
            )));
        }
        let pair_count = rows.len() / 2;
        if pair_count > geometry.row_count() {
            return Err(KeyFitError::Layout(format!(
                "Grid has {} key rows but geometry '{}' only has {}",
                pair_count,
                geometry.name,
                geometry.row_count()
            )));
        }

        let mut entries = Vec::new();
        for (r, pair) in rows.chunks(2).enumerate() {
            let (plain, shifted) = (&pair[0], &pair[1]);
            if plain.len() != shifted.len() {
                return Err(KeyFitError::Layout(format!(
                    "Row {} has {} unshifted keys but {} shifted keys",
                    r,
                    plain.len(),
                    shifted.len()
                )));
            }
            if plain.len() > geometry.row_width(r) {
                return Err(KeyFitError::Layout(format!(
                    "Row {} has {} keys but geometry row is {} wide",
                    r,
                    plain.len(),
                    geometry.row_width(r)
                )));
            }

            for (col, token) in plain.iter().enumerate() {
                if let Some(key) = geometry.key_at(r, col) {
                    entries.push((parse_token(token)?, key));
                }
            }
            for (col, token) in shifted.iter().enumerate() {
                if let Some(mut key) = geometry.key_at(r, col) {
                    key.effort += geometry.shift_effort;
                    entries.push((parse_token(token)?, key));
                }
            }
        }
        entries.push((' ', geometry.space_key()));

        Self::from_entries(entries)
    }

    /// O(1) lookup. `None` means "skip this character".
    #[inline(always)]
    pub fn get(&self, c: char) -> Option<&KeyMetrics> {
        self.entries.get(&c)
    }

    pub fn contains(&self, c: char) -> bool {
        self.entries.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mapped characters in sorted order.
    pub fn chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = self.entries.keys().copied().collect();
        chars.sort_unstable();
        chars
    }
}

fn parse_token(token: &str) -> KfResult<char> {
    if token == ENTER_TOKEN {
        return Ok('\n');
    }
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(KeyFitError::Layout(format!(
            "Grid token '{}' is not a single character",
            token
        ))),
    }
}
