use crate::prelude::*;

/// Returned when a scanned state has no foreign stickers.
pub const NO_SCRAMBLE: &str = "Scramble not detected";

/// Builds a plausible scramble from a scanned color state.
///
/// Every sticker that differs from its own face's center contributes one
/// counterclockwise turn of the face whose center carries that sticker's
/// color. This is a heuristic: replaying the result does not in general
/// reproduce the scanned state.
pub fn derive_moves<F: AsRef<[Color]>>(faces: &[F]) -> Result<Vec<Move>, InvalidState> {
    validate(faces)?;

    let centers = faces.iter().map(|stickers| stickers.as_ref()[4]).collect::<Vec<_>>();
    let home = |color: Color| {
        let index = centers.iter().position(|center| *center == color)?;
        Face::all().nth(index)
    };

    let moves = faces
        .iter()
        .flat_map(|stickers| {
            let stickers = stickers.as_ref();
            let center = stickers[4];
            stickers
                .iter()
                .enumerate()
                .filter(move |(i, color)| *i != 4 && **color != center)
                .map(|(_, color)| *color)
        })
        .filter_map(home)
        .map(|face| Move::new(face, Direction::Reverse))
        .collect::<Vec<_>>();

    log::debug!("Derived {} moves from scanned state", moves.len());
    Ok(moves)
}

/// String form of [`derive_moves`], [`NO_SCRAMBLE`] when nothing was foreign.
pub fn derive<F: AsRef<[Color]>>(faces: &[F]) -> Result<String, InvalidState> {
    let moves = derive_moves(faces)?;
    if moves.is_empty() {
        return Ok(NO_SCRAMBLE.to_string());
    }
    Ok(Scramble::from(moves).to_string())
}
