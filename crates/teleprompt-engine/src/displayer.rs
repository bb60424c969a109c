//! Timed line-by-line display.
//!
//! This module implements the core display loop: write one line, pause
//! for the rest interval, and stop early once the optional time budget
//! is spent.

use crate::source::LineSource;
use std::io::Write;
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Default pause between consecutive lines, in seconds.
pub const DEFAULT_REST_INTERVAL: f64 = 1.0;

/// Displays an ordered sequence of lines with timing control.
///
/// The line set is fixed at construction. Each [`run`](Self::run) call
/// starts from the first line with a fresh clock.
#[derive(Debug, Clone)]
pub struct LineDisplayer {
    /// Canonical ordered line sequence.
    lines: Vec<String>,

    /// Pause inserted between consecutive lines.
    rest_interval: Duration,

    /// Optional ceiling on total elapsed wall-clock time.
    stop_time: Option<Duration>,

    /// Current lifecycle status.
    status: DisplayStatus,
}

/// Display lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayStatus {
    /// Constructed, not yet run.
    #[default]
    Idle,
    /// Inside the display loop.
    Running,
    /// All lines shown or stop time reached.
    Finished,
}

impl std::fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Running => write!(f, "running"),
            Self::Finished => write!(f, "finished"),
        }
    }
}

impl LineDisplayer {
    /// Create a displayer with validated timing parameters.
    ///
    /// `rest_interval` and `stop_time` are in seconds. Both must be
    /// non-negative, finite, and representable as a [`Duration`];
    /// `stop_time` of `None` means unbounded.
    pub fn new(
        source: impl Into<LineSource>,
        rest_interval: f64,
        stop_time: Option<f64>,
    ) -> Result<Self, DisplayError> {
        let rest_interval_duration = Duration::try_from_secs_f64(rest_interval)
            .map_err(|_| DisplayError::InvalidRestInterval(rest_interval))?;
        let stop_time_duration = match stop_time {
            Some(secs) => Some(
                Duration::try_from_secs_f64(secs)
                    .map_err(|_| DisplayError::InvalidStopTime(secs))?,
            ),
            None => None,
        };

        Ok(Self {
            lines: source.into().into_lines(),
            rest_interval: rest_interval_duration,
            stop_time: stop_time_duration,
            status: DisplayStatus::Idle,
        })
    }

    /// Create a displayer with the default one-second interval and no
    /// stop time.
    pub fn with_defaults(source: impl Into<LineSource>) -> Self {
        Self {
            lines: source.into().into_lines(),
            rest_interval: Duration::from_secs_f64(DEFAULT_REST_INTERVAL),
            stop_time: None,
            status: DisplayStatus::Idle,
        }
    }

    /// The canonical line sequence.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Pause between consecutive lines.
    pub fn rest_interval(&self) -> Duration {
        self.rest_interval
    }

    /// Optional elapsed-time ceiling.
    pub fn stop_time(&self) -> Option<Duration> {
        self.stop_time
    }

    /// Current lifecycle status.
    pub fn status(&self) -> DisplayStatus {
        self.status
    }

    /// Display the lines with the configured timing.
    ///
    /// Writes one line at a time to `out`, pausing `rest_interval`
    /// between consecutive lines (no pause after the final line). If a
    /// stop time is configured, elapsed time is checked before each
    /// line; once reached, a stop note is written and the remaining
    /// lines are skipped. The stop-time check only happens at the top
    /// of each iteration, so an in-progress pause always completes.
    ///
    /// Returns the number of lines actually displayed.
    pub async fn run<W: Write>(&mut self, out: &mut W) -> Result<usize, DisplayError> {
        let start = Instant::now();
        let mut lines_displayed = 0;
        self.status = DisplayStatus::Running;

        tracing::debug!(
            lines = self.lines.len(),
            rest_interval_secs = self.rest_interval.as_secs_f64(),
            "starting display"
        );

        for line in &self.lines {
            if let Some(stop_time) = self.stop_time {
                let elapsed = start.elapsed();
                if elapsed >= stop_time {
                    // The leading newline is emitted even when nothing
                    // has been displayed yet.
                    writeln!(out, "\n[Stopped after {:.2} seconds]", elapsed.as_secs_f64())?;
                    tracing::info!(
                        lines_displayed,
                        elapsed_secs = elapsed.as_secs_f64(),
                        "stop time reached"
                    );
                    break;
                }
            }

            writeln!(out, "{line}")?;
            lines_displayed += 1;

            // No pause after the final line.
            if lines_displayed < self.lines.len() {
                sleep(self.rest_interval).await;
            }
        }

        self.status = DisplayStatus::Finished;
        Ok(lines_displayed)
    }
}

/// Errors from constructing or running a displayer.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    /// Rest interval was negative, non-finite, or too large to
    /// represent as a duration.
    #[error("rest_interval must be a representable non-negative number of seconds (got {0})")]
    InvalidRestInterval(f64),

    /// Stop time was negative, non-finite, or too large to represent
    /// as a duration.
    #[error("stop_time must be a representable non-negative number of seconds (got {0})")]
    InvalidStopTime(f64),

    /// I/O error writing to the output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(buf: &[u8]) -> &str {
        std::str::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_negative_rest_interval_rejected() {
        let err = LineDisplayer::new("A\nB", -1.0, None).unwrap_err();
        assert!(matches!(err, DisplayError::InvalidRestInterval(_)));

        let err = LineDisplayer::new("A\nB", f64::NAN, None).unwrap_err();
        assert!(matches!(err, DisplayError::InvalidRestInterval(_)));
    }

    #[test]
    fn test_negative_stop_time_rejected() {
        let err = LineDisplayer::new("A\nB", 1.0, Some(-5.0)).unwrap_err();
        assert!(matches!(err, DisplayError::InvalidStopTime(_)));
    }

    #[test]
    fn test_unrepresentable_durations_rejected() {
        // Values beyond Duration's range must error, not panic.
        let err = LineDisplayer::new("A\nB", 1e300, None).unwrap_err();
        assert!(matches!(err, DisplayError::InvalidRestInterval(_)));

        let err = LineDisplayer::new("A\nB", 1.0, Some(1e300)).unwrap_err();
        assert!(matches!(err, DisplayError::InvalidStopTime(_)));

        let err = LineDisplayer::new("A\nB", f64::INFINITY, None).unwrap_err();
        assert!(matches!(err, DisplayError::InvalidRestInterval(_)));
    }

    #[test]
    fn test_defaults() {
        let displayer = LineDisplayer::with_defaults("A\nB");
        assert_eq!(displayer.rest_interval(), Duration::from_secs(1));
        assert_eq!(displayer.stop_time(), None);
        assert_eq!(displayer.status(), DisplayStatus::Idle);
    }

    #[tokio::test]
    async fn test_displays_all_lines_without_stop_time() {
        let mut displayer = LineDisplayer::new("A\nB\nC", 0.0, None).unwrap();
        let mut buf = Vec::new();

        let count = displayer.run(&mut buf).await.unwrap();

        assert_eq!(count, 3);
        assert_eq!(output(&buf), "A\nB\nC\n");
        assert_eq!(displayer.status(), DisplayStatus::Finished);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_stop_time_displays_nothing() {
        let lines = vec!["A", "B", "C", "D"];
        let mut displayer = LineDisplayer::new(lines, 0.0, Some(0.0)).unwrap();
        let mut buf = Vec::new();

        let count = displayer.run(&mut buf).await.unwrap();

        assert_eq!(count, 0);
        assert_eq!(output(&buf), "\n[Stopped after 0.00 seconds]\n");
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_time_is_interval_times_gaps() {
        let mut displayer = LineDisplayer::new("A\nB\nC\nD", 2.0, None).unwrap();
        let mut buf = Vec::new();

        let start = Instant::now();
        let count = displayer.run(&mut buf).await.unwrap();

        // Three inter-line pauses, none after the final line.
        assert_eq!(count, 4);
        assert_eq!(start.elapsed(), Duration::from_secs(6));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_time_cuts_display_short() {
        let mut displayer = LineDisplayer::new("A\nB\nC\nD", 2.0, Some(3.0)).unwrap();
        let mut buf = Vec::new();

        let count = displayer.run(&mut buf).await.unwrap();

        // A at t=0, B at t=2; the check at t=4 trips the 3s budget.
        assert_eq!(count, 2);
        let out = output(&buf);
        assert!(out.starts_with("A\nB\n\n[Stopped after "));
        assert!(out.ends_with(" seconds]\n"));
    }

    #[tokio::test]
    async fn test_rerun_starts_fresh() {
        let mut displayer = LineDisplayer::new("A\nB", 0.0, None).unwrap();
        let mut buf = Vec::new();

        assert_eq!(displayer.run(&mut buf).await.unwrap(), 2);
        assert_eq!(displayer.run(&mut buf).await.unwrap(), 2);
        assert_eq!(output(&buf), "A\nB\nA\nB\n");
    }

    #[tokio::test]
    async fn test_single_line_has_no_pause() {
        let mut displayer = LineDisplayer::new("only line", 30.0, None).unwrap();
        let mut buf = Vec::new();

        // Completes immediately despite the long interval.
        let count = displayer.run(&mut buf).await.unwrap();
        assert_eq!(count, 1);
        assert_eq!(output(&buf), "only line\n");
    }
}
