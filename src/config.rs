use crate::prelude::*;

use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Reading config {}: {}", path.display(), e))?;
        let config = serde_json::from_str(&text)
            .map_err(|e| anyhow::anyhow!("Parsing config {}: {}", path.display(), e))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Side of the sampled square as a fraction of a grid cell, centered in
    /// the cell.
    pub sample_fraction: f32,
    /// Reject a face whose center color shows up on another of its stickers.
    pub reject_center_repeats: bool,
    pub classifier: ClassifierConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            sample_fraction: 0.5,
            reject_center_repeats: true,
            classifier: ClassifierConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Multiplier applied to each averaged channel before classification.
    pub gain: f32,
    /// Checked in order, first full match wins.
    pub bands: Vec<ColorBand>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        let band = |color, hue: (f32, f32), saturation: (f32, f32), value: (f32, f32)| ColorBand {
            color,
            hue: HueRange { from: hue.0, to: hue.1 },
            saturation: Range { min: saturation.0, max: saturation.1 },
            value: Range { min: value.0, max: value.1 },
        };

        ClassifierConfig {
            gain: 1.2,
            bands: vec![
                band(Color::White, (0.0, 360.0), (0.0, 0.25), (0.55, 1.0)),
                band(Color::Red, (345.0, 15.0), (0.5, 1.0), (0.25, 1.0)),
                band(Color::Orange, (15.0, 45.0), (0.5, 1.0), (0.4, 1.0)),
                band(Color::Yellow, (45.0, 75.0), (0.4, 1.0), (0.4, 1.0)),
                band(Color::Green, (75.0, 170.0), (0.35, 1.0), (0.25, 1.0)),
                band(Color::Blue, (170.0, 265.0), (0.4, 1.0), (0.2, 1.0)),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorBand {
    pub color: Color,
    pub hue: HueRange,
    pub saturation: Range,
    pub value: Range,
}

/// Hue interval in degrees. `from > to` wraps through 0, `0..360` is any hue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HueRange {
    pub from: f32,
    pub to: f32,
}

impl HueRange {
    pub fn contains(&self, hue: f32) -> bool {
        if self.from <= self.to {
            self.from <= hue && hue <= self.to
        } else {
            hue >= self.from || hue <= self.to
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub fn contains(&self, v: f32) -> bool {
        self.min <= v && v <= self.max
    }
}
