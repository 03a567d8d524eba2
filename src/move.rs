use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Sequence)]
pub enum Direction {
    Single,
    Double,
    Reverse,
}

impl Direction {
    pub fn all() -> impl Iterator<Item = Direction> {
        enum_iterator::all()
    }

    fn suffix(self) -> &'static str {
        match self {
            Direction::Single => "",
            Direction::Double => "2",
            Direction::Reverse => "'",
        }
    }
}

impl Move {
    pub fn new(face: Face, direction: Direction) -> Move {
        Move { face, direction }
    }

    /// All 18 face turns.
    pub fn all() -> impl Iterator<Item = Move> {
        Face::all().flat_map(|face| Direction::all().map(move |direction| Move { face, direction }))
    }

    /// Strict parse, every token must be one of the 18 face turns.
    pub fn parse_sequence(s: &str) -> anyhow::Result<Vec<Move>> {
        s.split_whitespace().map(|s| s.parse()).collect()
    }

    /// Parse a free-text token the way the visualizer reads it: the first
    /// character picks the face, a `2` anywhere makes it a half turn, a `'`
    /// anywhere makes it counterclockwise. Unknown faces give `None`.
    pub fn parse_lenient(token: &str) -> Option<Move> {
        let face = Face::from_letter(token.chars().next()?)?;
        let direction = if token.contains('2') {
            Direction::Double
        } else if token.contains('\'') {
            Direction::Reverse
        } else {
            Direction::Single
        };
        Some(Move { face, direction })
    }

    /// Lenient sequence parse. Tokens with an unrecognized face are skipped.
    pub fn parse_lenient_sequence(s: &str) -> Vec<Move> {
        s.split_whitespace()
            .filter_map(|token| {
                let parsed = Move::parse_lenient(token);
                if parsed.is_none() {
                    log::debug!("Skipping unrecognized move token {:?}", token);
                }
                parsed
            })
            .collect()
    }

    pub fn reverse(self) -> Move {
        let direction = match self.direction {
            Direction::Single => Direction::Reverse,
            Direction::Reverse => Direction::Single,
            Direction::Double => Direction::Double,
        };
        Move { direction, ..self }
    }

}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.direction.suffix())
    }
}

impl core::str::FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Move> {
        let mut chars = s.chars();
        let face_char = match chars.next() {
            Some(c) => c,
            None => return Err(anyhow::anyhow!("No face for move")),
        };

        let face = match Face::from_letter(face_char) {
            Some(face) => face,
            None => return Err(anyhow::anyhow!("Unrecognized face {}", face_char)),
        };

        let direction = match chars.next() {
            None => Direction::Single,
            Some('\'') => Direction::Reverse,
            Some('2') => Direction::Double,
            Some(c) => return Err(anyhow::anyhow!("Unrecognized direction {}", c)),
        };

        if let Some(c) = chars.next() {
            return Err(anyhow::anyhow!("Trailing {} after move {}", c, s));
        }

        Ok(Move { face, direction })
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Move {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Move {
        use rand::Rng;
        let face = Face::all().nth(g.gen_range(0, 6)).unwrap();
        let direction = Direction::all().nth(g.gen_range(0, 3)).unwrap();
        Move { face, direction }
    }
}
