//! Instruction accounting for the emulated vector unit.
//!
//! Every ISA instruction reports its execution mask here. The counters are
//! purely arithmetic: a masked-off lane still occupies the unit, so lane
//! utilization = active lanes / (instructions * width).

use std::fmt;
use std::ops::AddAssign;

use crate::config::IsaConfig;

/// Aggregate vector-unit statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsaStats {
    pub vector_instructions: u64,
    /// Lanes whose mask bit was set.
    pub utilized_lanes: u64,
    /// `width` per instruction, active or not.
    pub total_lanes: u64,
}

impl IsaStats {
    /// Fraction of lanes doing useful work, in `[0, 1]`. Zero when nothing ran.
    pub fn utilization(&self) -> f64 {
        if self.total_lanes == 0 {
            0.0
        } else {
            self.utilized_lanes as f64 / self.total_lanes as f64
        }
    }

    /// Format a summary table as a string.
    pub fn summary_string(&self, width: usize) -> String {
        let mut s = String::with_capacity(512);
        s.push_str(&format!("{:=<52}\n vector unit statistics\n{:=<52}\n", "", ""));
        s.push_str(&format!(" {:<30} {:>18}\n", "Vector width", width));
        s.push_str(&format!(" {:<30} {:>18}\n", "Vector instructions", self.vector_instructions));
        s.push_str(&format!(" {:<30} {:>17.1}%\n", "Lane utilization", self.utilization() * 100.0));
        s.push_str(&format!(" {:<30} {:>18}\n", "Utilized lanes", self.utilized_lanes));
        s.push_str(&format!(" {:<30} {:>18}\n", "Total lanes", self.total_lanes));
        s.push_str(&format!("{:=<52}\n", ""));
        s
    }
}

impl AddAssign for IsaStats {
    fn add_assign(&mut self, other: Self) {
        self.vector_instructions += other.vector_instructions;
        self.utilized_lanes += other.utilized_lanes;
        self.total_lanes += other.total_lanes;
    }
}

/// One traced instruction: its name and the lane pattern it executed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    pub instruction: &'static str,
    /// `*` active, `_` inactive, lane 0 first.
    pub lanes: String,
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.lanes, self.instruction)
    }
}

#[derive(Debug, Clone)]
pub struct IsaLogger {
    config: IsaConfig,
    width: usize,
    stats: IsaStats,
    trace: Vec<TraceEntry>,
    dropped: u64,
}

impl IsaLogger {
    pub fn new(width: usize, config: IsaConfig) -> Self {
        Self {
            config,
            width,
            stats: IsaStats::default(),
            trace: Vec::new(),
            dropped: 0,
        }
    }

    pub fn config(&self) -> &IsaConfig {
        &self.config
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Account one instruction executed under `lanes`.
    #[inline]
    pub fn record(&mut self, instruction: &'static str, lanes: &[bool]) {
        debug_assert_eq!(lanes.len(), self.width);
        let active = lanes.iter().filter(|&&b| b).count();
        self.stats.vector_instructions += 1;
        self.stats.utilized_lanes += active as u64;
        self.stats.total_lanes += self.width as u64;

        if !self.config.trace {
            return;
        }
        if self.trace.len() >= self.config.trace_limit {
            self.dropped += 1;
            return;
        }
        let pattern = lanes.iter().map(|&b| if b { '*' } else { '_' }).collect();
        self.trace.push(TraceEntry { instruction, lanes: pattern });
    }

    pub fn stats(&self) -> IsaStats {
        self.stats
    }

    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    /// Trace entries discarded after `trace_limit` was reached.
    pub fn dropped_entries(&self) -> u64 {
        self.dropped
    }

    /// Return the statistics collected so far and start over.
    pub fn take_stats(&mut self) -> IsaStats {
        let stats = self.stats;
        self.reset();
        stats
    }

    pub fn reset(&mut self) {
        self.stats = IsaStats::default();
        self.trace.clear();
        self.dropped = 0;
    }

    /// One trace entry per line.
    pub fn trace_string(&self) -> String {
        let mut s = String::new();
        for entry in &self.trace {
            s.push_str(&entry.to_string());
            s.push('\n');
        }
        if self.dropped > 0 {
            s.push_str(&format!("... {} entries dropped\n", self.dropped));
        }
        s
    }

    pub fn log_summary(&self) {
        log::info!("\n{}", self.stats.summary_string(self.width));
    }
}
