//! Status-line formatting and emission.

use std::io::{self, Write};

use crate::config::{Gain, ReportConfig, Target};
use crate::time::{Clock, MonotonicClock};

/// Emits one-line progress reports for an iterative optimization run.
///
/// Each call to [`report`](Self::report) appends exactly one
/// newline-terminated line to the sink describing the candidate's cost,
/// optionally its constraint-violation penalty and percentage gap to the
/// configured target, and the wall-clock time elapsed since a caller-held
/// entry timestamp. The reporter holds no state between calls beyond its
/// configuration, clock, and sink.
///
/// Line shapes (fields in brackets appear only when the target is known
/// and nonzero):
///
/// ```text
/// Cost = <penalty>_<cost>[, Gap = <pct>%], Time = <secs> sec. <suffix>    (penalized)
/// Cost = <cost>[, Gap = <pct>%], Time = <secs> sec.<suffix><marker>       (unpenalized)
/// ```
///
/// The unpenalized marker is `<` when the cost is strictly below the
/// target, ` =` when it equals the target, and empty otherwise.
///
/// # Examples
///
/// ```
/// use solver_status::{Clock, ReportConfig, StatusReporter, Target};
///
/// let config = ReportConfig::default().with_target(Target::Known(90));
/// let mut reporter = StatusReporter::new(config, std::io::stdout());
///
/// let entry_time = reporter.clock().now();
/// // ... improve the solution ...
/// reporter.report(100, 0, entry_time, "").unwrap();
/// ```
pub struct StatusReporter<W, C = MonotonicClock> {
    config: ReportConfig,
    clock: C,
    sink: W,
}

impl<W: Write> StatusReporter<W> {
    /// Creates a reporter over the given sink with a fresh monotonic clock.
    pub fn new(config: ReportConfig, sink: W) -> Self {
        Self::with_clock(config, sink, MonotonicClock::new())
    }
}

impl<W: Write, C: Clock> StatusReporter<W, C> {
    /// Creates a reporter with an explicit clock.
    ///
    /// Entry times passed to [`report`](Self::report) must come from this
    /// clock's time domain.
    pub fn with_clock(config: ReportConfig, sink: W, clock: C) -> Self {
        Self {
            config,
            clock,
            sink,
        }
    }

    /// The clock used to compute elapsed times.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The reporting configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// A reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Consumes the reporter, returning the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Writes one status line for the given candidate.
    ///
    /// `current_penalty` is only meaningful in penalized mode and is
    /// ignored otherwise. `suffix` is appended verbatim. The elapsed time
    /// is `|now - entry_time|`, so clock skew never prints a negative
    /// duration.
    ///
    /// Formatting never fails; the only error source is the sink write.
    /// The sink is flushed after each line so progress is visible on
    /// buffered sinks.
    pub fn report(
        &mut self,
        cost: Gain,
        current_penalty: Gain,
        entry_time: f64,
        suffix: &str,
    ) -> io::Result<()> {
        let elapsed = (self.clock.now() - entry_time).abs();
        let line = self.format_line(cost, current_penalty, elapsed, suffix);
        self.sink.write_all(line.as_bytes())?;
        self.sink.flush()
    }

    fn format_line(&self, cost: Gain, current_penalty: Gain, elapsed: f64, suffix: &str) -> String {
        let config = &self.config;

        let mut line = if config.penalized {
            format!("Cost = {current_penalty}_{cost}")
        } else {
            format!("Cost = {cost}")
        };

        if let Some(base) = config.target.gap_base() {
            let gap = if config.penalized && config.optimize_penalty {
                config.penalty_convention.gap_sign() * 100.0 * (current_penalty - base) as f64
                    / base as f64
            } else {
                100.0 * (cost - base) as f64 / base as f64
            };
            line.push_str(&format!(", Gap = {gap:.4}%"));
        }

        if config.penalized {
            line.push_str(&format!(", Time = {elapsed:.2} sec. {suffix}"));
        } else {
            // The marker compares against the raw target, independent of
            // gap eligibility: a zero target still markers, an unknown
            // target lies below every cost.
            let marker = match config.target {
                Target::Known(value) if cost < value => "<",
                Target::Known(value) if cost == value => " =",
                _ => "",
            };
            line.push_str(&format!(", Time = {elapsed:.2} sec.{suffix}{marker}"));
        }

        line.push('\n');
        line
    }
}
