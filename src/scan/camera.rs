use image::RgbImage;
use std::collections::VecDeque;
use std::path::PathBuf;

/// Something that can hand out a live video stream.
pub trait Camera {
    type Stream: Stream;

    /// Acquires a stream. Fails when the device is missing or access is denied.
    fn open(&mut self) -> anyhow::Result<Self::Stream>;
}

/// A live stream. Dropping it releases the device.
pub trait Stream {
    /// The current frame, `None` when the stream has nothing to show.
    fn frame(&mut self) -> anyhow::Result<Option<RgbImage>>;
}

/// A camera backed by still images on disk, one frame per sample.
pub struct StillCamera {
    paths: Vec<PathBuf>,
}

impl StillCamera {
    pub fn new(paths: Vec<PathBuf>) -> StillCamera {
        StillCamera { paths }
    }
}

impl Camera for StillCamera {
    type Stream = StillStream;

    fn open(&mut self) -> anyhow::Result<StillStream> {
        if self.paths.is_empty() {
            return Err(anyhow::anyhow!("No images to scan"));
        }
        Ok(StillStream {
            remaining: self.paths.iter().cloned().collect(),
        })
    }
}

pub struct StillStream {
    remaining: VecDeque<PathBuf>,
}

impl Stream for StillStream {
    fn frame(&mut self) -> anyhow::Result<Option<RgbImage>> {
        let path = match self.remaining.pop_front() {
            Some(path) => path,
            None => return Ok(None),
        };

        log::debug!("Reading frame {}", path.display());
        let frame = image::open(&path)
            .map_err(|e| anyhow::anyhow!("Reading {}: {}", path.display(), e))?
            .to_rgb8();
        Ok(Some(frame))
    }
}

impl Drop for StillStream {
    fn drop(&mut self) {
        log::debug!("Released still stream, {} frames unused", self.remaining.len());
    }
}
