//! Status-line progress reporting for iterative optimization solvers.
//!
//! A long-running search (local search, branch-and-bound, metaheuristics)
//! periodically wants to print one human-readable line summarizing where
//! it stands: the current solution cost, optionally the constraint
//! penalty, the percentage gap to a best-known target, and the wall-clock
//! time since the run or phase began. This crate is that line and nothing
//! more. It does not run the search, track history, or decide when to
//! report; the hosting solver calls [`StatusReporter::report`] whenever
//! it has something to say.
//!
//! # Architecture
//!
//! Three small pieces:
//!
//! - [`ReportConfig`]: the comparison [`Target`], penalty mode, and gap
//!   conventions, fixed per reporter instead of read from ambient state.
//! - [`Clock`] / [`MonotonicClock`]: the time source elapsed durations
//!   are measured against.
//! - [`StatusReporter`]: formats and appends one line per call to any
//!   `io::Write` sink.
//!
//! # Examples
//!
//! ```
//! use solver_status::{Clock, ReportConfig, StatusReporter, Target};
//!
//! let config = ReportConfig::default().with_target(Target::Known(6110));
//! let mut reporter = StatusReporter::new(config, std::io::stderr());
//!
//! let entry_time = reporter.clock().now();
//! // ... the solver improves its tour ...
//! reporter.report(6120, 0, entry_time, "").unwrap();
//! // prints e.g.: Cost = 6120, Gap = 0.1637%, Time = 0.73 sec.
//! ```

mod config;
mod reporter;
mod time;

pub use config::{Gain, PenaltyConvention, ReportConfig, Target};
pub use reporter::StatusReporter;
pub use time::{Clock, MonotonicClock};
