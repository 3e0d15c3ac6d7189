//! Drop clock - automatic descent scheduling
//!
//! The clock never reads wall time. A driver (the terminal session, a test)
//! reports elapsed milliseconds through [`DropClock::advance`], and the clock
//! answers whether an automatic descent is due. Pausing only stops future
//! descents; it never touches the board or the piece.

/// Running flag, drop interval and time since the last automatic descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropClock {
    interval_ms: u32,
    running: bool,
    since_last_ms: u32,
}

impl DropClock {
    /// A stopped clock with the given interval.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            running: false,
            since_last_ms: 0,
        }
    }

    /// Begin automatic descents. Returns false if the clock was already
    /// running, in which case nothing changes.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.since_last_ms = 0;
        true
    }

    /// Stop automatic descents.
    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Milliseconds accumulated since the last automatic descent.
    pub fn since_last_ms(&self) -> u32 {
        self.since_last_ms
    }

    /// Account for `elapsed_ms` of wall time.
    ///
    /// Returns true when the accumulated time strictly exceeds the interval;
    /// the accumulator then restarts from zero. At most one descent is
    /// reported per call.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if !self.running {
            return false;
        }
        self.since_last_ms = self.since_last_ms.saturating_add(elapsed_ms);
        if self.since_last_ms > self.interval_ms {
            self.since_last_ms = 0;
            return true;
        }
        false
    }
}
