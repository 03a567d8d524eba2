use crate::prelude::*;

use image::RgbImage;

/// Averaged channel values, 0..=255.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Hue in degrees `[0, 360)`, saturation and value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Sample {
    pub fn new(r: u8, g: u8, b: u8) -> Sample {
        Sample {
            r: r as f32,
            g: g as f32,
            b: b as f32,
        }
    }

    /// Mean color of the pixels in `[x0, x1) x [y0, y1)`. `None` for an empty
    /// region.
    pub fn average(image: &RgbImage, (x0, y0): (u32, u32), (x1, y1): (u32, u32)) -> Option<Sample> {
        let (x1, y1) = (x1.min(image.width()), y1.min(image.height()));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }

        let mut sum = [0u64; 3];
        for y in y0..y1 {
            for x in x0..x1 {
                let pixel = image.get_pixel(x, y);
                for (total, channel) in sum.iter_mut().zip(pixel.0) {
                    *total += channel as u64;
                }
            }
        }

        let count = ((x1 - x0) * (y1 - y0)) as f32;
        Some(Sample {
            r: sum[0] as f32 / count,
            g: sum[1] as f32 / count,
            b: sum[2] as f32 / count,
        })
    }

    /// Brightens every channel by `gain`, clamped to 255.
    pub fn brightened(self, gain: f32) -> Sample {
        let scale = |c: f32| (c * gain).clamp(0.0, 255.0);
        Sample {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }

    pub fn hsv(self) -> Hsv {
        let (r, g, b) = (self.r / 255.0, self.g / 255.0, self.b / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        let s = if max == 0.0 { 0.0 } else { delta / max };

        Hsv { h, s, v: max }
    }
}

pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Classifier {
        Classifier { config }
    }

    /// Classifies a raw averaged sample, gain applied first. `None` means
    /// no band matched.
    pub fn classify(&self, sample: Sample) -> Option<Color> {
        self.classify_hsv(sample.brightened(self.config.gain).hsv())
    }

    pub fn classify_rgb(&self, rgb: [u8; 3]) -> Option<Color> {
        self.classify(Sample::new(rgb[0], rgb[1], rgb[2]))
    }

    pub fn classify_hsv(&self, hsv: Hsv) -> Option<Color> {
        self.config
            .bands
            .iter()
            .find(|band| {
                band.hue.contains(hsv.h) && band.saturation.contains(hsv.s) && band.value.contains(hsv.v)
            })
            .map(|band| band.color)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::new(ClassifierConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(r: u8, g: u8, b: u8) -> Option<Color> {
        Classifier::default().classify_rgb([r, g, b])
    }

    #[test]
    fn white_and_black() {
        assert_eq!(classify(255, 255, 255), Some(Color::White));
        assert_eq!(classify(0, 0, 0), None);
    }

    #[test]
    fn sticker_colors() {
        assert_eq!(classify(200, 20, 30), Some(Color::Red));
        assert_eq!(classify(255, 140, 0), Some(Color::Orange));
        assert_eq!(classify(230, 210, 20), Some(Color::Yellow));
        assert_eq!(classify(0, 155, 72), Some(Color::Green));
        assert_eq!(classify(0, 70, 173), Some(Color::Blue));
    }

    #[test]
    fn gain_lifts_dim_white() {
        // v = 0.5 on its own, 0.6 after gain.
        assert_eq!(classify(128, 128, 128), Some(Color::White));
        let no_gain = Classifier::new(ClassifierConfig {
            gain: 1.0,
            ..ClassifierConfig::default()
        });
        assert_eq!(no_gain.classify_rgb([128, 128, 128]), None);
    }

    #[test]
    fn dull_colors_are_unknown() {
        assert_eq!(classify(60, 40, 40), None);
        assert_eq!(classify(10, 10, 40), None);
    }

    #[test]
    fn red_wraps_around_zero() {
        assert_eq!(classify(220, 0, 40), Some(Color::Red));
        assert_eq!(classify(220, 40, 0), Some(Color::Red));
    }

    #[test]
    fn hsv_conversion() {
        let hsv = Sample::new(0, 0, 255).hsv();
        assert_eq!((hsv.h, hsv.s, hsv.v), (240.0, 1.0, 1.0));
        let hsv = Sample::new(255, 0, 255).hsv();
        assert_eq!(hsv.h, 300.0);
        let hsv = Sample::new(100, 100, 100).hsv();
        assert_eq!(hsv.s, 0.0);
    }

    #[test]
    fn brightening_clamps() {
        let bright = Sample::new(250, 100, 0).brightened(2.0);
        assert_eq!(bright.r, 255.0);
        assert_eq!(bright.g, 200.0);
        assert_eq!(bright.b, 0.0);
    }

    #[test]
    fn averages_a_region() {
        let image = RgbImage::from_fn(4, 2, |x, _| {
            if x < 2 {
                image::Rgb([0, 0, 0])
            } else {
                image::Rgb([200, 100, 50])
            }
        });
        let average = Sample::average(&image, (0, 0), (4, 2)).unwrap();
        assert_eq!(average, Sample { r: 100.0, g: 50.0, b: 25.0 });
        assert_eq!(Sample::average(&image, (2, 0), (2, 2)), None);
        // Out of bounds is clipped.
        assert_eq!(
            Sample::average(&image, (2, 0), (9, 9)).unwrap(),
            Sample::new(200, 100, 50)
        );
    }
}
