// Render metrics module
//
// Lightweight counters for how often the directory re-renders and dispatches

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Render and dispatch counters
///
/// Atomics so a clone of the `Arc` can be read from the event loop owner while
/// the controller records into it.
#[derive(Debug)]
pub struct RenderMetrics {
    /// Category region replacements
    chip_renders: AtomicU64,

    /// Resource region replacements
    resource_renders: AtomicU64,

    /// Resource renders that showed the no-results notice
    empty_results: AtomicU64,

    /// Total cards written across all resource renders
    cards_rendered: AtomicU64,

    /// Commands dispatched (including ignored ones)
    commands: AtomicU64,

    /// UI events dropped because the event queue was full or closed
    dropped_events: AtomicU64,

    start_time: Instant,
}

/// Point-in-time copy of the counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub chip_renders: u64,
    pub resource_renders: u64,
    pub empty_results: u64,
    pub cards_rendered: u64,
    pub commands: u64,
    pub dropped_events: u64,
}

impl RenderMetrics {
    pub fn new() -> Self {
        Self {
            chip_renders: AtomicU64::new(0),
            resource_renders: AtomicU64::new(0),
            empty_results: AtomicU64::new(0),
            cards_rendered: AtomicU64::new(0),
            commands: AtomicU64::new(0),
            dropped_events: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_chip_render(&self) {
        self.chip_renders.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a resource render that produced `cards` cards
    pub fn record_resource_render(&self, cards: usize) {
        self.resource_renders.fetch_add(1, Ordering::Relaxed);
        self.cards_rendered.fetch_add(cards as u64, Ordering::Relaxed);
        if cards == 0 {
            self.empty_results.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_command(&self) {
        self.commands.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dropped_event(&self) {
        self.dropped_events.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            chip_renders: self.chip_renders.load(Ordering::Relaxed),
            resource_renders: self.resource_renders.load(Ordering::Relaxed),
            empty_results: self.empty_results.load(Ordering::Relaxed),
            cards_rendered: self.cards_rendered.load(Ordering::Relaxed),
            commands: self.commands.load(Ordering::Relaxed),
            dropped_events: self.dropped_events.load(Ordering::Relaxed),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Average cards per resource render
    pub fn avg_cards_per_render(&self) -> f64 {
        let renders = self.resource_renders.load(Ordering::Relaxed);
        if renders > 0 {
            self.cards_rendered.load(Ordering::Relaxed) as f64 / renders as f64
        } else {
            0.0
        }
    }

    /// Log metrics summary
    pub fn log_summary(&self) {
        let snapshot = self.snapshot();
        tracing::info!("=== Render Metrics Summary ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!(
            "Renders: {} chip, {} resource ({} empty, avg {:.1} cards)",
            snapshot.chip_renders,
            snapshot.resource_renders,
            snapshot.empty_results,
            self.avg_cards_per_render()
        );
        tracing::info!(
            "Commands: {}, dropped events: {}",
            snapshot.commands,
            snapshot.dropped_events
        );
    }
}

impl Default for RenderMetrics {
    fn default() -> Self {
        Self::new()
    }
}
