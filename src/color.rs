use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Red,
    Green,
    Blue,
    Orange,
    Yellow,
}

impl Color {
    pub fn all() -> impl Iterator<Item = Color> {
        enum_iterator::all()
    }

    pub fn letter(self) -> char {
        match self {
            Color::White => 'w',
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Blue => 'b',
            Color::Orange => 'o',
            Color::Yellow => 'y',
        }
    }

    pub fn from_letter(c: char) -> Option<Color> {
        Color::all().find(|color| color.letter() == c.to_ascii_lowercase())
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
        }
    }

    /// Display value used when rendering a net to an image.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Color::White => [245, 245, 245],
            Color::Red => [200, 20, 30],
            Color::Green => [20, 160, 60],
            Color::Blue => [20, 70, 200],
            Color::Orange => [250, 130, 10],
            Color::Yellow => [250, 220, 20],
        }
    }
}

impl From<Face> for Color {
    fn from(face: Face) -> Color {
        match face {
            Face::Up => Color::White,
            Face::Right => Color::Red,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
            Face::Left => Color::Orange,
            Face::Down => Color::Yellow,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Color> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Color::from_letter(c).ok_or_else(|| anyhow::anyhow!("Unrecognized color {}", c));
        }

        Color::all()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Unrecognized color {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_convention_is_a_bijection() {
        let mut colors = Face::all().map(Color::from).collect::<Vec<_>>();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), 6);
    }

    #[test]
    fn parses_letters_and_names() {
        assert_eq!("w".parse::<Color>().unwrap(), Color::White);
        assert_eq!("O".parse::<Color>().unwrap(), Color::Orange);
        assert_eq!("Blue".parse::<Color>().unwrap(), Color::Blue);
        assert!("x".parse::<Color>().is_err());
        assert!("purple".parse::<Color>().is_err());
    }

    #[test]
    fn letters_round_trip() {
        for color in Color::all() {
            assert_eq!(Color::from_letter(color.letter()), Some(color));
        }
    }
}
