use serde::Serialize;

use crate::api::{LoadPhase, RedrawSummary};

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartContext {
    pub load_phase: LoadPhase,
    pub dataset_len: usize,
    pub selected_len: usize,
}

/// Event stream published by the chart screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartEvent {
    DatasetLoaded { records_len: usize, excluded_len: usize },
    DatasetLoadFailed,
    FilterReplaced { selected_len: usize },
    Redrawn(RedrawSummary),
    RedrawSkipped,
}

/// Subscriber to chart screen changes.
///
/// Observers see events and a context snapshot; they cannot reach into the
/// screen's state.
pub trait ChartObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ChartEvent, context: ChartContext);
}
