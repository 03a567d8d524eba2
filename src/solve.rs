use crate::prelude::*;

use rand::Rng;

pub const MAX_SECONDS: f64 = 3600.0;

/// A stored solve as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solve {
    pub id: u64,
    pub time_taken: f64,
    #[serde(default)]
    pub scramble: Option<String>,
    pub created_at: String,
}

/// A solve about to be submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSolve {
    pub time_taken: f64,
    pub scramble: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolveError {
    #[error("time taken must be positive, got {0}")]
    NotPositive(f64),
    #[error("time taken cannot exceed one hour, got {0}")]
    TooLong(f64),
    #[error("invalid scramble notation: {0}")]
    Notation(String),
}

impl NewSolve {
    pub fn new(time_taken: f64, scramble: Option<String>) -> Result<NewSolve, SolveError> {
        if !(time_taken > 0.0) {
            return Err(SolveError::NotPositive(time_taken));
        }
        if time_taken > MAX_SECONDS {
            return Err(SolveError::TooLong(time_taken));
        }

        let scramble = scramble.filter(|s| !s.trim().is_empty());
        if let Some(s) = &scramble {
            Move::parse_sequence(s).map_err(|e| SolveError::Notation(e.to_string()))?;
        }

        Ok(NewSolve { time_taken, scramble })
    }
}

/// The remote solve store. Implementations should give up on a call after
/// `timeout` and must not retry on their own.
pub trait SolveBackend {
    fn create(&mut self, solve: &NewSolve, timeout: Duration) -> anyhow::Result<Solve>;
    /// Stored solves in any order.
    fn list(&mut self, timeout: Duration) -> anyhow::Result<Vec<Solve>>;
    fn delete(&mut self, id: u64, timeout: Duration) -> anyhow::Result<()>;
}

/// One timing session: the scramble currently shown and the solves seen so far.
pub struct Session<B: SolveBackend, R: Rng> {
    backend: B,
    rng: R,
    length: usize,
    scramble: Scramble,
    solves: Vec<Solve>,
}

impl<B: SolveBackend, R: Rng> Session<B, R> {
    pub const TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(backend: B, mut rng: R, length: usize) -> Session<B, R> {
        let scramble = Scramble::generate(length, &mut rng);
        Session {
            backend,
            rng,
            length,
            scramble,
            solves: Vec::new(),
        }
    }

    pub fn scramble(&self) -> &Scramble {
        &self.scramble
    }

    pub fn solves(&self) -> &[Solve] {
        &self.solves
    }

    pub fn next_scramble(&mut self) -> &Scramble {
        self.scramble = Scramble::generate(self.length, &mut self.rng);
        &self.scramble
    }

    /// Uses a scramble from elsewhere, such as one derived from a scan.
    pub fn set_scramble(&mut self, scramble: Scramble) {
        self.scramble = scramble;
    }

    /// Records a solve of the current scramble. A fresh scramble follows a
    /// successful submit; on failure the current one is kept.
    pub fn submit(&mut self, seconds: f64) -> anyhow::Result<&Solve> {
        let scramble = Some(self.scramble.to_string());
        let new = NewSolve::new(seconds, scramble)?;

        let solve = self.backend.create(&new, Self::TIMEOUT).map_err(|e| {
            log::warn!("Submitting solve failed: {:#}", e);
            e
        })?;
        log::info!("Recorded solve {} in {}", solve.id, format_time(solve.time_taken));

        self.solves.push(solve);
        self.next_scramble();
        Ok(&self.solves[self.solves.len() - 1])
    }

    pub fn refresh(&mut self) -> anyhow::Result<&[Solve]> {
        let mut solves = self.backend.list(Self::TIMEOUT)?;
        // Oldest first, so the averages see the latest solves at the end.
        solves.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        self.solves = solves;
        Ok(&self.solves)
    }

    pub fn delete(&mut self, id: u64) -> anyhow::Result<()> {
        self.backend.delete(id, Self::TIMEOUT)?;
        self.solves.retain(|solve| solve.id != id);
        Ok(())
    }

    pub fn stats(&self) -> Stats {
        Stats::of(&self.solves)
    }
}
