use std::time::{Duration, Instant};

////////////////////////////////////////////////////////////////////////////////

/// Measures consecutive phases of a run.
pub struct Stopwatch {
    last: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Time since the previous lap (or start), then starts the next lap.
    pub fn lap(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed
    }
}

////////////////////////////////////////////////////////////////////////////////
