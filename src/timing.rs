use std::borrow::Cow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

static TIMING_ENABLED: AtomicBool = AtomicBool::new(false);

/// Any value turns on stage timings on stderr.
pub const TIMING_ENV: &str = "DEEPCODE_TIMING";

pub fn init() {
    if std::env::var_os(TIMING_ENV).is_some() {
        TIMING_ENABLED.store(true, Ordering::Relaxed);
    }
}

fn timing_line(label: &str, duration: Duration) -> String {
    format!("[TIMING] {label}: {:.3}ms", duration.as_secs_f64() * 1000.0)
}

/// Times one stage of the run and reports it on stderr when dropped.
///
/// Labels are either fixed stage names (`total`, `main_code`) or built per call,
/// e.g. `deep_code call 2`.
pub struct TimingGuard {
    label: Cow<'static, str>,
    start: Instant,
}

impl TimingGuard {
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
        }
    }

    pub fn for_call(stage: &str, call: usize) -> Self {
        Self::new(format!("{stage} call {call}"))
    }
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        if TIMING_ENABLED.load(Ordering::Relaxed) {
            eprintln!("{}", timing_line(&self.label, self.start.elapsed()));
        }
    }
}
