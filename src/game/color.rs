/// The two piece colors. Yellow moves first in the front-ends by convention.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    Red,
    Yellow,
}

impl PieceColor {
    /// Get the opposing color
    pub fn other(self) -> PieceColor {
        match self {
            PieceColor::Red => PieceColor::Yellow,
            PieceColor::Yellow => PieceColor::Red,
        }
    }

    /// Get color name for display
    pub fn name(self) -> &'static str {
        match self {
            PieceColor::Red => "Red",
            PieceColor::Yellow => "Yellow",
        }
    }

    /// Single-character glyph used by the plain-text board dump.
    pub fn glyph(self) -> char {
        match self {
            PieceColor::Red => 'R',
            PieceColor::Yellow => 'Y',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_color() {
        assert_eq!(PieceColor::Red.other(), PieceColor::Yellow);
        assert_eq!(PieceColor::Yellow.other(), PieceColor::Red);
    }

    #[test]
    fn test_color_name() {
        assert_eq!(PieceColor::Red.name(), "Red");
        assert_eq!(PieceColor::Yellow.name(), "Yellow");
    }

    #[test]
    fn test_color_deserializes_lowercase() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            first: PieceColor,
        }
        let w: Wrapper = toml::from_str(r#"first = "red""#).unwrap();
        assert_eq!(w.first, PieceColor::Red);
    }
}
