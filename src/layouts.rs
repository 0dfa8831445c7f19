use crate::error::{KeyFitError, KfResult};
use crate::geometry::KeyboardGeometry;
use crate::scorer::table::KeyMetricsTable;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLayout {
    Qwerty,
    Qwertz,
    Dvorak,
    Colemak,
    Workman,
    Halmak,
    // Halmak candidates from the comparison runs
    Halmak1,
    Halmak2,
    Halmak21,
    Halmak22,
}

impl KnownLayout {
    /// Unshifted/shifted row pairs: number, top, home, bottom.
    pub fn get_str(&self) -> &'static str {
        match self {
            Self::Qwerty => {
                r#"
                ` 1 2 3 4 5 6 7 8 9 0 - =
                ~ ! @ # $ % ^ & * ( ) _ +
                  q w e r t y u i o p [ ] \
                  Q W E R T Y U I O P { } |
                  a s d f g h j k l ; ' \n
                  A S D F G H J K L : " \n
                  z x c v b n m , . /
                  Z X C V B N M < > ?
                "#
            }
            Self::Qwertz => {
                r#"
                ^ 1 2 3 4 5 6 7 8 9 0 ß ´
                ° ! " § $ % & / ( ) = ? `
                  q w e r t z u i o p ü + #
                  Q W E R T Z U I O P Ü * '
                  a s d f g h j k l ö ä \n
                  A S D F G H J K L Ö Ä \n
                  y x c v b n m , . -
                  Y X C V B N M ; : _
                "#
            }
            Self::Dvorak => {
                r#"
                ` 1 2 3 4 5 6 7 8 9 0 [ ]
                ~ ! @ # $ % ^ & * ( ) { }
                  ' , . p y f g c r l / = \
                  " < > P Y F G C R L ? + |
                  a o e u i d h t n s - \n
                  A O E U I D H T N S _ \n
                  ; q j k x b m w v z
                  : Q J K X B M W V Z
                "#
            }
            Self::Colemak => {
                r#"
                ` 1 2 3 4 5 6 7 8 9 0 - =
                ~ ! @ # $ % ^ & * ( ) _ +
                  q w f p g j l u y ; [ ] \
                  Q W F P G J L U Y : { } |
                  a r s t d h n e i o ' \n
                  A R S T D H N E I O " \n
                  z x c v b k m , . /
                  Z X C V B K M < > ?
                "#
            }
            Self::Workman => {
                r#"
                ` 1 2 3 4 5 6 7 8 9 0 - =
                ~ ! @ # $ % ^ & * ( ) _ +
                  q d r w b j f u p ; [ ] \
                  Q D R W B J F U P : { } |
                  a s h t g y n e o i ' \n
                  A S H T G Y N E O I " \n
                  z x m c v k l , . /
                  Z X M C V K L < > ?
                "#
            }
            Self::Halmak => {
                r#"
                ` 1 2 3 4 5 6 7 8 9 0 - =
                ~ ! @ # $ % ^ & * ( ) _ +
                  w l r b z ; q u d j [ ] \
                  W L R B Z : Q U D J { } |
                  s h n t , . a e o i ' \n
                  S H N T < > A E O I " \n
                  f m v c / g p x k y
                  F M V C ? G P X K Y
                "#
            }
            Self::Halmak1 => {
                r#"
                ` 1 2 3 4 5 6 7 8 9 0 - =
                ~ ! @ # $ % ^ & * ( ) _ +
                  f l r w k q p u d ; [ ] \
                  F L R W K Q P U D : { } |
                  h s n t m y a e o i ' \n
                  H S N T M Y A E O I " \n
                  z x c v j g b , . /
                  Z X C V J G B < > ?
                "#
            }
            Self::Halmak2 => {
                r#"
                ` 1 2 3 4 5 6 7 8 9 0 - =
                ~ ! @ # $ % ^ & * < > _ +
                  v l r p z ; g u d q [ ] \
                  V L R P Z : G U D Q { } |
                  h s n t , . a e o i ' \n
                  H S N T ( ) A E O I " \n
                  m f c w ? k y x b j
                  M F C W / K Y X B J
                "#
            }
            Self::Halmak21 => {
                r#"
                ` 1 2 3 4 5 6 7 8 9 0 - =
                ~ ! @ # $ % ^ & * < > _ +
                  c l r b z ; q u d j [ ] \
                  C L R B Z : Q U D J { } |
                  s h n t , . a e o i ' \n
                  S H N T ( ) A E O I " \n
                  f m v w ? y g x k p
                  F M V W / Y G X K P
                "#
            }
            Self::Halmak22 => {
                r#"
                ` 1 2 3 4 5 6 7 8 9 0 - =
                ~ ! @ # $ % ^ & * < > _ +
                  w l r b z ; q u d j [ ] \
                  W L R B Z : Q U D J { } |
                  s h n t , . a e o i ' \n
                  S H N T ( ) A E O I " \n
                  f m v c ? g p x k y
                  F M V C / G P X K Y
                "#
            }
        }
    }

    pub fn build(&self, geometry: &KeyboardGeometry) -> KfResult<Layout> {
        Layout::from_grid(self.to_string(), self.get_str(), geometry)
    }
}

/// A named layout and its per-character cost table.
#[derive(Debug, Clone)]
pub struct Layout {
    pub name: String,
    pub grid: String,
    pub table: KeyMetricsTable,
}

impl Layout {
    pub fn from_grid(
        name: impl Into<String>,
        grid: &str,
        geometry: &KeyboardGeometry,
    ) -> KfResult<Self> {
        let name = name.into();
        let table = KeyMetricsTable::from_grid(grid, geometry)
            .map_err(|e| KeyFitError::Layout(format!("{}: {}", name, e)))?;
        Ok(Self {
            name,
            grid: grid.to_string(),
            table,
        })
    }

    /// Loads a custom grid; the layout is named after the file stem.
    pub fn load_from_file<P: AsRef<Path>>(path: P, geometry: &KeyboardGeometry) -> KfResult<Self> {
        let path = path.as_ref();
        let grid = fs::read_to_string(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());
        Self::from_grid(name, &grid, geometry)
    }

    /// Resolves a preset name (e.g. `colemak`) or, failing that, a grid file path.
    pub fn resolve(name_or_path: &str, geometry: &KeyboardGeometry) -> KfResult<Self> {
        if let Ok(known) = KnownLayout::from_str(&name_or_path.to_lowercase()) {
            return known.build(geometry);
        }
        if Path::new(name_or_path).is_file() {
            return Self::load_from_file(name_or_path, geometry);
        }
        Err(KeyFitError::UnknownLayout(name_or_path.to_string()))
    }
}

pub fn get_all_layouts(geometry: &KeyboardGeometry) -> KfResult<Vec<Layout>> {
    KnownLayout::iter().map(|l| l.build(geometry)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{Finger, Row};

    #[test]
    fn test_all_presets_parse() {
        let geom = KeyboardGeometry::standard();
        let layouts = get_all_layouts(&geom).unwrap();
        assert_eq!(layouts.len(), KnownLayout::iter().count());
        for layout in &layouts {
            for c in 'a'..='z' {
                assert!(layout.table.contains(c), "{} is missing '{}'", layout.name, c);
            }
            assert!(layout.table.contains('\n'));
            assert!(layout.table.contains(' '));
        }
    }

    #[test]
    fn test_qwerty_positions() {
        let geom = KeyboardGeometry::standard();
        let qwerty = KnownLayout::Qwerty.build(&geom).unwrap();
        let f = qwerty.table.get('f').unwrap();
        assert_eq!(f.finger, Finger::LeftIndex);
        assert_eq!(f.row, Row::Home);
        let p = qwerty.table.get('p').unwrap();
        assert_eq!(p.finger, Finger::RightPinky);
        assert_eq!(p.row, Row::Top);
    }

    #[test]
    fn test_resolve_unknown() {
        let geom = KeyboardGeometry::standard();
        assert!(matches!(
            Layout::resolve("no_such_layout", &geom),
            Err(KeyFitError::UnknownLayout(_))
        ));
        assert_eq!(Layout::resolve("Dvorak", &geom).unwrap().name, "dvorak");
    }
}
