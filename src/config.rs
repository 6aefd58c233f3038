//! Reporting configuration: target value, penalty mode, gap conventions.

/// Native cost domain of the solver.
///
/// Costs and penalties are integer gains; gap percentages are computed
/// in `f64` but the reported values themselves print in plain integer form.
pub type Gain = i64;

/// Best known or proven-optimal objective value used as a comparison
/// baseline for gap and marker computation.
///
/// A target of `Known(0)` suppresses the gap field (the percentage would
/// divide by zero) but still participates in the below/at/above marker
/// comparison. `Unknown` suppresses the gap field and, being an
/// unboundedly low bound, never places any cost below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Target {
    /// No best-known value is available.
    #[default]
    Unknown,

    /// Best known or proven-optimal objective value.
    Known(Gain),
}

impl Target {
    /// Returns the target value as a gap denominator, or `None` when the
    /// gap field must be suppressed (unknown target, or a target of zero).
    pub fn gap_base(self) -> Option<Gain> {
        match self {
            Target::Known(value) if value != 0 => Some(value),
            _ => None,
        }
    }
}

/// Sign convention of the penalty term relative to the cost term.
///
/// One problem formulation states its penalty with the opposite sign of
/// its cost, so its penalty gap flips sign to stay comparable. The
/// convention is carried over from the source formulation as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PenaltyConvention {
    /// Penalty and cost share the same sign convention.
    #[default]
    Standard,

    /// Penalty is stated with the inverted sign; penalty gaps negate.
    Inverted,
}

impl PenaltyConvention {
    /// Multiplier applied to a penalty-based gap percentage.
    pub fn gap_sign(self) -> f64 {
        match self {
            PenaltyConvention::Standard => 1.0,
            PenaltyConvention::Inverted => -1.0,
        }
    }
}

/// Configuration for a [`StatusReporter`](crate::StatusReporter).
///
/// Fixed for the lifetime of the reporter; every status line it emits is
/// interpreted against these settings.
///
/// # Examples
///
/// ```
/// use solver_status::{ReportConfig, Target};
///
/// let config = ReportConfig::default()
///     .with_target(Target::Known(6110))
///     .with_penalized(true)
///     .with_optimize_penalty(true);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportConfig {
    /// Comparison baseline for gap and marker computation.
    pub target: Target,

    /// Whether the objective carries a constraint-violation penalty term
    /// that is reported alongside the base cost.
    pub penalized: bool,

    /// In penalized mode, compute the gap against the penalty value
    /// instead of the cost. Ignored when `penalized` is false.
    pub optimize_penalty: bool,

    /// Sign convention applied to penalty-based gaps.
    pub penalty_convention: PenaltyConvention,
}

impl ReportConfig {
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn with_penalized(mut self, penalized: bool) -> Self {
        self.penalized = penalized;
        self
    }

    pub fn with_optimize_penalty(mut self, optimize_penalty: bool) -> Self {
        self.optimize_penalty = optimize_penalty;
        self
    }

    pub fn with_penalty_convention(mut self, convention: PenaltyConvention) -> Self {
        self.penalty_convention = convention;
        self
    }
}
