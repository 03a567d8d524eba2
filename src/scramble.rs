use crate::prelude::*;

use rand::Rng;

pub const DEFAULT_LENGTH: usize = 20;

/// An ordered sequence of face turns, displayed space-separated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scramble(pub Vec<Move>);

impl Scramble {
    /// Random scramble of `length` moves. A face is never turned twice in a
    /// row; opposite faces may follow each other.
    pub fn generate(length: usize, rng: &mut impl Rng) -> Scramble {
        let faces = Face::all().collect::<Vec<_>>();
        let directions = Direction::all().collect::<Vec<_>>();

        let mut moves: Vec<Move> = Vec::with_capacity(length);
        while moves.len() < length {
            let face = faces[rng.gen_range(0, faces.len())];
            if moves.last().map(|last| last.face) == Some(face) {
                continue;
            }

            let direction = directions[rng.gen_range(0, directions.len())];
            moves.push(Move::new(face, direction));
        }

        Scramble(moves)
    }

    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Random scramble from the thread-local generator.
pub fn generate(length: usize) -> String {
    Scramble::generate(length, &mut rand::thread_rng()).to_string()
}

impl From<Vec<Move>> for Scramble {
    fn from(moves: Vec<Move>) -> Scramble {
        Scramble(moves)
    }
}

impl std::fmt::Display for Scramble {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, m) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", m)?;
        }
        Ok(())
    }
}

impl core::str::FromStr for Scramble {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Scramble> {
        Move::parse_sequence(s).map(Scramble)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[quickcheck]
    fn has_requested_length_and_no_repeats(length: u8, seed: u64) -> bool {
        let length = length as usize + 1;
        let scramble = Scramble::generate(length, &mut StdRng::seed_from_u64(seed)).to_string();
        let moves = Move::parse_sequence(&scramble).unwrap();

        scramble.split(' ').count() == length
            && moves.len() == length
            && moves.windows(2).all(|pair| pair[0].face != pair[1].face)
    }

    #[test]
    fn single_move_is_a_token() {
        let scramble = generate(1);
        assert!(scramble.parse::<Move>().is_ok(), "{}", scramble);
    }

    #[test]
    fn default_length_is_twenty() {
        assert_eq!(generate(DEFAULT_LENGTH).split_whitespace().count(), 20);
    }

    #[test]
    fn same_seed_same_scramble() {
        let a = Scramble::generate(25, &mut StdRng::seed_from_u64(7));
        let b = Scramble::generate(25, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_length_is_empty() {
        assert_eq!(generate(0), "");
    }

    #[test]
    fn uses_every_face_and_modifier() {
        let scramble = Scramble::generate(500, &mut StdRng::seed_from_u64(1));
        for m in Move::all() {
            assert!(scramble.moves().contains(&m), "missing {}", m);
        }
    }

    #[test]
    fn parses_back() {
        let scramble: Scramble = "R U' F2".parse().unwrap();
        assert_eq!(scramble.to_string(), "R U' F2");
        assert!("R X".parse::<Scramble>().is_err());
    }
}
