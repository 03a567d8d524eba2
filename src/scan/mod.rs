use crate::prelude::*;

use image::RgbImage;

pub mod camera;
pub mod classify;

pub use camera::{Camera, StillCamera, Stream};
pub use classify::{Classifier, Hsv, Sample};

/// Why a sampled face was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("sticker {index} matched no color")]
    Unknown { index: usize },
    #[error("center color {color} repeats at sticker {index}")]
    CenterRepeated { index: usize, color: Color },
}

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("camera error: {0}")]
    Camera(String),
    #[error("scanner is not capturing")]
    NotCapturing,
    #[error("no frame available")]
    NoFrame,
    #[error("scan invalid for face {face}: {reason}")]
    Rejected { face: Face, reason: Rejection },
}

pub enum ScanState<S> {
    Idle,
    Capturing { stream: S, faces: Vec<[Color; 9]> },
    Complete(ColorState),
}

/// Result of an accepted face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    Next(Face),
    Complete(ColorState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanCommand {
    Start,
    Sample,
    Stop,
}

#[derive(Debug)]
pub enum ScanEvent {
    Started { next: Face },
    Accepted { face: Face, next: Face },
    Completed(ColorState),
    Rejected { face: Face, reason: Rejection },
    Stopped,
    Failed(ScanError),
}

/// Walks a camera through the six faces in `Face` order.
pub struct Scanner<C: Camera> {
    camera: C,
    classifier: Classifier,
    sample_fraction: f32,
    reject_center_repeats: bool,
    state: ScanState<C::Stream>,
}

impl<C: Camera> Scanner<C> {
    pub fn new(camera: C, config: ScanConfig) -> Scanner<C> {
        Scanner {
            camera,
            classifier: Classifier::new(config.classifier),
            sample_fraction: config.sample_fraction.clamp(0.05, 1.0),
            reject_center_repeats: config.reject_center_repeats,
            state: ScanState::Idle,
        }
    }

    pub fn state(&self) -> &ScanState<C::Stream> {
        &self.state
    }

    /// The face the next sample will be stored as, while capturing.
    pub fn expected_face(&self) -> Option<Face> {
        match &self.state {
            ScanState::Capturing { faces, .. } => Face::all().nth(faces.len()),
            _ => None,
        }
    }

    /// Opens a fresh stream, dropping any previous one first.
    pub fn start(&mut self) -> Result<Face, ScanError> {
        self.stop();

        let stream = self.camera.open().map_err(|e| {
            log::warn!("Camera unavailable: {:#}", e);
            ScanError::Camera(format!("{:#}", e))
        })?;

        log::info!("Scanner capturing, show face {}", Face::Up);
        self.state = ScanState::Capturing {
            stream,
            faces: Vec::with_capacity(6),
        };
        Ok(Face::Up)
    }

    /// Releases the stream and forgets any partial scan.
    pub fn stop(&mut self) {
        if !matches!(self.state, ScanState::Idle) {
            log::info!("Scanner stopped");
        }
        self.state = ScanState::Idle;
    }

    /// Samples the current frame as the expected face.
    pub fn sample_face(&mut self) -> Result<Progress, ScanError> {
        let (stream, faces) = match &mut self.state {
            ScanState::Capturing { stream, faces } => (stream, faces),
            _ => return Err(ScanError::NotCapturing),
        };
        let face = Face::all().nth(faces.len()).ok_or(ScanError::NotCapturing)?;

        let frame = stream
            .frame()
            .map_err(|e| ScanError::Camera(format!("{:#}", e)))?
            .ok_or(ScanError::NoFrame)?;

        let samples = sample_grid(&frame, self.sample_fraction, &self.classifier);
        let colors = check_face(samples, self.reject_center_repeats).map_err(|reason| {
            log::warn!("Rejected face {}: {}", face, reason);
            ScanError::Rejected { face, reason }
        })?;

        faces.push(colors);
        log::info!("Accepted face {}", face);

        if let Some(next) = Face::all().nth(faces.len()) {
            return Ok(Progress::Next(next));
        }

        let mut state = Cube::solved().colors();
        state.copy_from_slice(&faces[..]);
        log::info!("Scan complete");
        self.state = ScanState::Complete(state);
        Ok(Progress::Complete(state))
    }

    pub fn handle(&mut self, command: ScanCommand) -> ScanEvent {
        match command {
            ScanCommand::Start => match self.start() {
                Ok(next) => ScanEvent::Started { next },
                Err(e) => ScanEvent::Failed(e),
            },
            ScanCommand::Sample => {
                let face = self.expected_face().unwrap_or(Face::Up);
                match self.sample_face() {
                    Ok(Progress::Next(next)) => ScanEvent::Accepted { face, next },
                    Ok(Progress::Complete(state)) => ScanEvent::Completed(state),
                    Err(ScanError::Rejected { face, reason }) => ScanEvent::Rejected { face, reason },
                    Err(e) => ScanEvent::Failed(e),
                }
            }
            ScanCommand::Stop => {
                self.stop();
                ScanEvent::Stopped
            }
        }
    }
}

/// Classifies the 9 cells of a frame split into a 3x3 grid. Each cell is
/// sampled over a centered square `fraction` of its size to stay clear of
/// neighboring stickers.
pub fn sample_grid(frame: &RgbImage, fraction: f32, classifier: &Classifier) -> [Option<Color>; 9] {
    let (cell_w, cell_h) = (frame.width() / 3, frame.height() / 3);
    let inset = |cell: u32| ((cell as f32) * (1.0 - fraction) / 2.0).round() as u32;
    let (inset_w, inset_h) = (inset(cell_w), inset(cell_h));

    let mut colors = [None; 9];
    for (i, color) in colors.iter_mut().enumerate() {
        let (col, row) = (i as u32 % 3, i as u32 / 3);
        let from = (col * cell_w + inset_w, row * cell_h + inset_h);
        let to = ((col + 1) * cell_w - inset_w, (row + 1) * cell_h - inset_h);
        *color = Sample::average(frame, from, to).and_then(|sample| classifier.classify(sample));
    }
    colors
}

/// Accepts a face only when every sticker was recognized and, if asked, no
/// sticker shares the center's color.
pub fn check_face(samples: [Option<Color>; 9], reject_center_repeats: bool) -> Result<[Color; 9], Rejection> {
    let mut colors = [Color::White; 9];
    for (index, (sample, color)) in samples.iter().zip(colors.iter_mut()).enumerate() {
        *color = sample.ok_or(Rejection::Unknown { index })?;
    }

    if reject_center_repeats {
        let center = colors[4];
        if let Some(index) = (0..9).find(|i| *i != 4 && colors[*i] == center) {
            return Err(Rejection::CenterRepeated { index, color: center });
        }
    }

    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct FakeCamera {
        frames: Vec<RgbImage>,
        deny: bool,
        opened: usize,
    }

    struct FakeStream(VecDeque<RgbImage>);

    impl Camera for FakeCamera {
        type Stream = FakeStream;

        fn open(&mut self) -> anyhow::Result<FakeStream> {
            if self.deny {
                anyhow::bail!("Permission denied");
            }
            self.opened += 1;
            Ok(FakeStream(self.frames.iter().cloned().collect()))
        }
    }

    impl Stream for FakeStream {
        fn frame(&mut self) -> anyhow::Result<Option<RgbImage>> {
            Ok(self.0.pop_front())
        }
    }

    fn frame(colors: [Color; 9]) -> RgbImage {
        grid_frame(colors.map(Color::rgb), 30)
    }

    fn scanner(frames: Vec<RgbImage>) -> Scanner<FakeCamera> {
        let camera = FakeCamera {
            frames,
            deny: false,
            opened: 0,
        };
        Scanner::new(camera, ScanConfig::default())
    }

    #[test]
    fn accepting_top_face_expects_right() {
        let state = patterned_state();
        let mut scanner = scanner(vec![frame(state[0])]);

        assert_eq!(scanner.start().unwrap(), Face::Up);
        assert_eq!(scanner.expected_face(), Some(Face::Up));
        assert_eq!(scanner.sample_face().unwrap(), Progress::Next(Face::Right));
        assert_eq!(scanner.expected_face(), Some(Face::Right));
    }

    #[test]
    fn six_faces_complete_the_scan() {
        let state = patterned_state();
        let mut scanner = scanner(state.iter().map(|face| frame(*face)).collect());

        scanner.start().unwrap();
        for _ in 0..5 {
            assert!(matches!(scanner.sample_face(), Ok(Progress::Next(_))));
        }
        assert_eq!(scanner.sample_face().unwrap(), Progress::Complete(state));
        assert!(matches!(scanner.state(), ScanState::Complete(s) if *s == state));
        assert!(is_valid(&state));
        assert!(matches!(scanner.sample_face(), Err(ScanError::NotCapturing)));
    }

    #[test]
    fn unknown_sticker_rejects_and_stays() {
        let state = patterned_state();
        let mut dark = frame(state[0]);
        for y in 30..60 {
            for x in 60..90 {
                dark.put_pixel(x, y, image::Rgb([0, 0, 0]));
            }
        }
        let mut scanner = scanner(vec![dark, frame(state[0])]);

        scanner.start().unwrap();
        match scanner.sample_face() {
            Err(ScanError::Rejected { face, reason }) => {
                assert_eq!(face, Face::Up);
                assert_eq!(reason, Rejection::Unknown { index: 5 });
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(scanner.expected_face(), Some(Face::Up));
        assert_eq!(scanner.sample_face().unwrap(), Progress::Next(Face::Right));
    }

    #[test]
    fn center_repeat_rejects() {
        let mut scanner = scanner(vec![frame([Color::Blue; 9])]);
        scanner.start().unwrap();
        assert!(matches!(
            scanner.sample_face(),
            Err(ScanError::Rejected {
                reason: Rejection::CenterRepeated { index: 0, color: Color::Blue },
                ..
            })
        ));
    }

    #[test]
    fn center_repeat_can_be_allowed() {
        let camera = FakeCamera {
            frames: vec![frame([Color::Blue; 9])],
            deny: false,
            opened: 0,
        };
        let config = ScanConfig {
            reject_center_repeats: false,
            ..ScanConfig::default()
        };
        let mut scanner = Scanner::new(camera, config);
        scanner.start().unwrap();
        assert_eq!(scanner.sample_face().unwrap(), Progress::Next(Face::Right));
    }

    #[test]
    fn denied_camera_stays_idle() {
        let camera = FakeCamera {
            frames: Vec::new(),
            deny: true,
            opened: 0,
        };
        let mut scanner = Scanner::new(camera, ScanConfig::default());
        assert!(matches!(scanner.start(), Err(ScanError::Camera(_))));
        assert!(matches!(scanner.state(), ScanState::Idle));
        assert!(matches!(scanner.sample_face(), Err(ScanError::NotCapturing)));
    }

    #[test]
    fn stop_clears_partial_scan() {
        let state = patterned_state();
        let mut scanner = scanner(state.iter().map(|face| frame(*face)).collect());
        scanner.start().unwrap();
        scanner.sample_face().unwrap();

        scanner.stop();
        assert!(matches!(scanner.state(), ScanState::Idle));
        assert_eq!(scanner.expected_face(), None);
        assert!(matches!(scanner.sample_face(), Err(ScanError::NotCapturing)));

        scanner.start().unwrap();
        assert_eq!(scanner.expected_face(), Some(Face::Up));
        assert_eq!(scanner.camera.opened, 2);
    }

    #[test]
    fn empty_stream_reports_no_frame() {
        let mut scanner = scanner(Vec::new());
        scanner.start().unwrap();
        assert!(matches!(scanner.sample_face(), Err(ScanError::NoFrame)));
    }

    #[test]
    fn commands_drive_events() {
        let state = patterned_state();
        let mut scanner = scanner(vec![frame(state[0]), frame([Color::Red; 9])]);

        assert!(matches!(
            scanner.handle(ScanCommand::Start),
            ScanEvent::Started { next: Face::Up }
        ));
        assert!(matches!(
            scanner.handle(ScanCommand::Sample),
            ScanEvent::Accepted {
                face: Face::Up,
                next: Face::Right
            }
        ));
        assert!(matches!(
            scanner.handle(ScanCommand::Sample),
            ScanEvent::Rejected { face: Face::Right, .. }
        ));
        assert!(matches!(scanner.handle(ScanCommand::Stop), ScanEvent::Stopped));
        assert!(matches!(
            scanner.handle(ScanCommand::Sample),
            ScanEvent::Failed(ScanError::NotCapturing)
        ));
    }

    #[test]
    fn samples_skip_cell_borders() {
        let state = patterned_state();
        let mut bordered = frame(state[1]);
        // Paint grid lines black; the centered samples never touch them.
        for i in 0..90 {
            for line in [0, 29, 30, 59, 60, 89] {
                bordered.put_pixel(i, line, image::Rgb([0, 0, 0]));
                bordered.put_pixel(line, i, image::Rgb([0, 0, 0]));
            }
        }
        let samples = sample_grid(&bordered, 0.5, &Classifier::default());
        assert_eq!(samples, state[1].map(Some));
    }

    #[test]
    fn rendered_net_faces_classify_back() {
        let cube = cube_with_moves("R U F");
        let net = crate::cube::render_net(&cube, 20);
        let front = image::imageops::crop_imm(&net, 60, 60, 60, 60).to_image();
        let samples = sample_grid(&front, 0.5, &Classifier::default());
        assert_eq!(samples, cube.surface(Face::Front).0.map(Some));
    }
}
