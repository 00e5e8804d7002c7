//! ISA logger configuration: defaults plus environment overrides.

/// Enables per-instruction tracing (`1`, `true`, `on`).
pub const TRACE_ENV: &str = "VECINTRIN_TRACE";
/// Caps the number of trace entries kept per logger.
pub const TRACE_LIMIT_ENV: &str = "VECINTRIN_TRACE_LIMIT";

const DEFAULT_TRACE_LIMIT: usize = 4096;

/// Configuration for a [`VectorIsa`](crate::isa::VectorIsa) logger.
///
/// Statistics (instruction and lane counts) are always collected; tracing
/// additionally records one entry per instruction and is off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsaConfig {
    pub trace: bool,
    pub trace_limit: usize,
}

impl Default for IsaConfig {
    fn default() -> Self {
        Self {
            trace: false,
            trace_limit: DEFAULT_TRACE_LIMIT,
        }
    }
}

impl IsaConfig {
    /// Defaults overlaid with [`TRACE_ENV`] and [`TRACE_LIMIT_ENV`].
    pub fn from_env() -> Self {
        Self::default().apply_overrides(
            std::env::var(TRACE_ENV).ok().as_deref(),
            std::env::var(TRACE_LIMIT_ENV).ok().as_deref(),
        )
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn with_trace_limit(mut self, trace_limit: usize) -> Self {
        self.trace_limit = trace_limit;
        self
    }

    fn apply_overrides(mut self, trace: Option<&str>, trace_limit: Option<&str>) -> Self {
        if let Some(raw) = trace {
            match parse_flag(raw) {
                Some(on) => self.trace = on,
                None => log::warn!("ignoring {TRACE_ENV}={raw:?}: expected a boolean flag"),
            }
        }
        if let Some(raw) = trace_limit {
            match raw.trim().parse::<usize>() {
                Ok(limit) => self.trace_limit = limit,
                Err(err) => log::warn!("ignoring {TRACE_LIMIT_ENV}={raw:?}: {err}"),
            }
        }
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" | "" => Some(false),
        _ => None,
    }
}
