use crate::prelude::*;

/// Sticker cube, one 3x3 surface per face in `Face` order.
///
/// Every surface is read row-major as seen from outside the cube, with Up
/// drawn above Front, Right and Back, Left and Right drawn beside Front, and
/// Down drawn below Front.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    surfaces: [Surface; 6],
}

/// A 3-sticker strip on a neighboring face: which face, and which indices in
/// the order they travel.
type Strip = (Face, [usize; 3]);

/// For each face, the strips bordering it. A clockwise turn moves the
/// contents of strip `k` into strip `k + 1`.
const STRIPS: [[Strip; 4]; 6] = {
    use Face::*;
    [
        // Up
        [
            (Front, [0, 1, 2]),
            (Left, [0, 1, 2]),
            (Back, [0, 1, 2]),
            (Right, [0, 1, 2]),
        ],
        // Right
        [
            (Front, [2, 5, 8]),
            (Up, [2, 5, 8]),
            (Back, [6, 3, 0]),
            (Down, [2, 5, 8]),
        ],
        // Front
        [
            (Up, [6, 7, 8]),
            (Right, [0, 3, 6]),
            (Down, [2, 1, 0]),
            (Left, [8, 5, 2]),
        ],
        // Back
        [
            (Up, [2, 1, 0]),
            (Left, [0, 3, 6]),
            (Down, [6, 7, 8]),
            (Right, [8, 5, 2]),
        ],
        // Left
        [
            (Up, [0, 3, 6]),
            (Front, [0, 3, 6]),
            (Down, [0, 3, 6]),
            (Back, [8, 5, 2]),
        ],
        // Down
        [
            (Front, [6, 7, 8]),
            (Right, [6, 7, 8]),
            (Back, [6, 7, 8]),
            (Left, [6, 7, 8]),
        ],
    ]
};

impl super::CubeLike for Cube {
    fn solved() -> Cube {
        Cube {
            surfaces: [
                Face::Up,
                Face::Right,
                Face::Front,
                Face::Back,
                Face::Left,
                Face::Down,
            ]
            .map(|face| Surface::from(Color::from(face))),
        }
    }

    fn apply(mut self, move_: Move) -> Self {
        self.rotate(move_);
        self
    }
}

impl Cube {
    pub fn from_colors(colors: ColorState) -> Cube {
        Cube {
            surfaces: colors.map(Surface),
        }
    }

    pub fn colors(&self) -> ColorState {
        self.surfaces.map(|surface| surface.0)
    }

    pub fn surface(&self, face: Face) -> &Surface {
        &self.surfaces[face.index()]
    }

    pub fn rotate(&mut self, move_: impl Into<Move>) {
        let move_ = move_.into();
        match move_.direction {
            Direction::Single => self.quarter_turn(move_.face, true),
            Direction::Reverse => self.quarter_turn(move_.face, false),
            Direction::Double => {
                self.quarter_turn(move_.face, true);
                self.quarter_turn(move_.face, true);
            }
        }
    }

    fn quarter_turn(&mut self, face: Face, clockwise: bool) {
        let surface = &mut self.surfaces[face.index()];
        *surface = surface.rotated(clockwise);

        let strips = STRIPS[face.index()];
        let slices = strips.map(|(neighbor, indices)| self.surfaces[neighbor.index()].slice(indices));

        for (k, slice) in slices.iter().enumerate() {
            let to = if clockwise { (k + 1) % 4 } else { (k + 3) % 4 };
            let (neighbor, indices) = strips[to];
            self.surfaces[neighbor.index()].set(indices, *slice);
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Surface(pub [Color; 9]);

impl Surface {
    /// Turns the face's own stickers a quarter turn. The center stays put.
    pub fn rotated(self, clockwise: bool) -> Surface {
        const CLOCKWISE: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];
        const COUNTER: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

        let from = if clockwise { CLOCKWISE } else { COUNTER };
        Surface(from.map(|i| self.0[i]))
    }

    pub fn center(&self) -> Color {
        self.0[4]
    }

    pub fn row(&self, row: usize) -> [Color; 3] {
        [self.0[row * 3], self.0[row * 3 + 1], self.0[row * 3 + 2]]
    }

    fn slice(&self, indices: [usize; 3]) -> Slice {
        Slice(indices.map(|i| self.0[i]))
    }

    fn set(&mut self, indices: [usize; 3], owned: Slice) {
        for (i, color) in indices.into_iter().zip(owned.0) {
            self.0[i] = color;
        }
    }
}

impl From<Color> for Surface {
    fn from(color: Color) -> Surface {
        Surface([color; 9])
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
struct Slice([Color; 3]);
