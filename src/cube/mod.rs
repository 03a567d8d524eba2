use crate::prelude::*;

mod render;
mod surface;

pub use render::render_net;
pub use surface::{Cube, Surface};

pub trait CubeLike: Sized + core::fmt::Debug + Eq {
    fn solved() -> Self;
    fn apply(self, move_: Move) -> Self;

    fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> Self {
        moves.into_iter().fold(self, |cube, m| cube.apply(m))
    }

    /// Applies a free-text scramble. Tokens naming no face are skipped, an
    /// empty scramble leaves the cube unchanged.
    fn apply_scramble(self, scramble: &str) -> Self {
        self.apply_all(Move::parse_lenient_sequence(scramble))
    }
}

/// Faces in scanning and color-state order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Sequence)]
pub enum Face {
    Up,
    Right,
    Front,
    Back,
    Left,
    Down,
}

impl Face {
    pub fn all() -> impl Iterator<Item = Face> {
        enum_iterator::all()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Down => 'D',
        }
    }

    /// Uppercase only. Lowercase letters are wide turns, which are not face turns.
    pub fn from_letter(c: char) -> Option<Face> {
        Face::all().find(|face| face.letter() == c)
    }

    pub fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
        }
    }

    pub fn same_axis(a: Face, b: Face) -> bool {
        a == b || a.opposite() == b
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
