use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stats {
    pub count: usize,
    pub best: Option<f64>,
    pub ao5: Option<f64>,
    pub ao12: Option<f64>,
}

impl Stats {
    /// Solves are expected oldest first.
    pub fn of(solves: &[Solve]) -> Stats {
        let times = solves.iter().map(|solve| solve.time_taken).collect::<Vec<_>>();
        Stats {
            count: times.len(),
            best: best(&times),
            ao5: average_of(&times, 5),
            ao12: average_of(&times, 12),
        }
    }
}

pub fn best(times: &[f64]) -> Option<f64> {
    times.iter().copied().reduce(f64::min)
}

/// Mean of the latest `n` times without the single best and worst. `None`
/// until there are `n` times.
pub fn average_of(times: &[f64], n: usize) -> Option<f64> {
    if n < 3 || times.len() < n {
        return None;
    }

    let mut recent = times[times.len() - n..].to_vec();
    recent.sort_by(f64::total_cmp);
    let counted = &recent[1..n - 1];
    Some(counted.iter().sum::<f64>() / counted.len() as f64)
}

/// `m:ss.cc` from a minute up, `s.cc` below.
pub fn format_time(seconds: f64) -> String {
    let minutes = (seconds / 60.0).floor();
    let rest = seconds - minutes * 60.0;
    if minutes > 0.0 {
        format!("{}:{:05.2}", minutes as u64, rest)
    } else {
        format!("{:.2}", rest)
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let show = |v: Option<f64>| v.map(format_time).unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "solves: {}  best: {}  ao5: {}  ao12: {}",
            self.count,
            show(self.best),
            show(self.ao5),
            show(self.ao12)
        )
    }
}
