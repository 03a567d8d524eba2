use crate::prelude::*;

use image::{Rgb, RgbImage};

/// Net layout as (face, column, row) in units of one face.
const NET: [(Face, u32, u32); 6] = [
    (Face::Up, 1, 0),
    (Face::Left, 0, 1),
    (Face::Front, 1, 1),
    (Face::Right, 2, 1),
    (Face::Back, 3, 1),
    (Face::Down, 1, 2),
];

const BACKGROUND: Rgb<u8> = Rgb([32, 32, 32]);

/// Draws the cube as an unfolded net, `cell` pixels per sticker with a one
/// pixel gutter.
pub fn render_net(cube: &Cube, cell: u32) -> RgbImage {
    let face_px = cell * 3;
    let mut image = RgbImage::from_pixel(face_px * 4, face_px * 3, BACKGROUND);

    for (face, col, row) in NET {
        let surface = cube.surface(face);
        for (i, color) in surface.0.iter().enumerate() {
            let x0 = col * face_px + (i as u32 % 3) * cell;
            let y0 = row * face_px + (i as u32 / 3) * cell;
            for y in y0..y0 + cell.saturating_sub(1) {
                for x in x0..x0 + cell.saturating_sub(1) {
                    image.put_pixel(x, y, Rgb(color.rgb()));
                }
            }
        }
    }

    image
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let row = |face: Face, index: usize| -> String {
            self.surface(face)
                .row(index)
                .iter()
                .map(|color| color.letter())
                .collect()
        };

        for index in 0..3 {
            writeln!(f, "    {}", row(Face::Up, index))?;
        }

        for index in 0..3 {
            let middle = [Face::Left, Face::Front, Face::Right, Face::Back]
                .iter()
                .map(|face| row(*face, index))
                .collect::<Vec<_>>();
            writeln!(f, "{}", middle.join(" "))?;
        }

        for index in 0..3 {
            writeln!(f, "    {}", row(Face::Down, index))?;
        }

        Ok(())
    }
}
