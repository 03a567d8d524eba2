use crate::prelude::*;

/// Colors of all 54 stickers, faces in `Face` order, stickers row-major.
pub type ColorState = [[Color; 9]; 6];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidState {
    #[error("invalid cube state: expected 6 faces, found {0}")]
    FaceCount(usize),
    #[error("invalid cube state: face {face} has {count} stickers, expected 9")]
    StickerCount { face: usize, count: usize },
    #[error("invalid cube state: {color} appears {count} times, expected 9")]
    ColorCount { color: Color, count: usize },
    #[error("invalid cube state: center {0} appears on more than one face")]
    DuplicateCenter(Color),
}

/// Checks the structure of a scanned state: 6 faces of 9 stickers, 9 of each
/// color, 6 distinct centers.
pub fn validate<F: AsRef<[Color]>>(faces: &[F]) -> Result<(), InvalidState> {
    if faces.len() != 6 {
        return Err(InvalidState::FaceCount(faces.len()));
    }

    for (face, stickers) in faces.iter().enumerate() {
        let count = stickers.as_ref().len();
        if count != 9 {
            return Err(InvalidState::StickerCount { face, count });
        }
    }

    for color in Color::all() {
        let count = faces
            .iter()
            .flat_map(|stickers| stickers.as_ref())
            .filter(|c| **c == color)
            .count();
        if count != 9 {
            return Err(InvalidState::ColorCount { color, count });
        }
    }

    let mut centers = faces.iter().map(|stickers| stickers.as_ref()[4]).collect::<Vec<_>>();
    centers.sort();
    if let Some(pair) = centers.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(InvalidState::DuplicateCenter(pair[0]));
    }

    Ok(())
}

pub fn is_valid<F: AsRef<[Color]>>(faces: &[F]) -> bool {
    validate(faces).is_ok()
}

/// Reads six 9-letter color strings (`wwwwwwwww`), one per face.
pub fn parse_color_state<S: AsRef<str>>(faces: &[S]) -> anyhow::Result<Vec<Vec<Color>>> {
    faces
        .iter()
        .map(|face| {
            face.as_ref()
                .chars()
                .map(|c| {
                    Color::from_letter(c).ok_or_else(|| anyhow::anyhow!("Unrecognized color {}", c))
                })
                .collect()
        })
        .collect()
}

/// Converts a validated state into a fixed-size one.
pub fn to_color_state<F: AsRef<[Color]>>(faces: &[F]) -> Result<ColorState, InvalidState> {
    validate(faces)?;

    let mut state = Cube::solved().colors();
    for (to, from) in state.iter_mut().zip(faces) {
        to.copy_from_slice(from.as_ref());
    }
    Ok(state)
}
