//! Hooks for code that wants to follow the chart screen without owning it.

pub mod observers;

pub use observers::{ChartContext, ChartEvent, ChartObserver};
