use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ChartScales, FilterState, FilteredView, ListingRecord};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::{ChartConfig, DatasetStore, LoadPhase, render_bars, render_scatter};

/// Both chart frames for one filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrames {
    pub view: FilteredView,
    pub bar: RenderFrame,
    pub scatter: RenderFrame,
}

/// Runs the pure pipeline: filter, truncate, scale, then build both frames.
pub fn build_chart_frames(
    dataset: &[ListingRecord],
    filter: &FilterState,
    config: &ChartConfig,
) -> ChartResult<ChartFrames> {
    let plot = config.plot_area()?;
    let view = FilteredView::build_with_limit(dataset, filter, config.view_limit);
    let scales = ChartScales::compute(&view, plot.width, plot.height, config.band_padding)?;
    let bar = render_bars(&view, &scales, config)?;
    let scatter = render_scatter(&view, &scales, config)?;
    Ok(ChartFrames { view, bar, scatter })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedrawSummary {
    pub view_len: usize,
    pub bar_marks: usize,
    pub scatter_marks: usize,
    pub bar_data_marks: usize,
    pub scatter_data_marks: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedrawOutcome {
    /// The dataset has not finished loading; surfaces were left alone.
    Skipped,
    Rendered(RedrawSummary),
}

/// Owns both chart surfaces and replaces their content on every state change.
///
/// A redraw computes both frames first and only then clears and repaints
/// the surfaces, so a failing pipeline leaves the previous charts intact.
/// Redraws take `&mut self` and therefore never interleave.
pub struct RedrawController<B: Renderer, S: Renderer> {
    config: ChartConfig,
    bar_surface: B,
    scatter_surface: S,
    last_frames: Option<ChartFrames>,
}

impl<B: Renderer, S: Renderer> RedrawController<B, S> {
    pub fn new(config: ChartConfig, bar_surface: B, scatter_surface: S) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            bar_surface,
            scatter_surface,
            last_frames: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Re-runs the whole pipeline against the current dataset and filter.
    ///
    /// Nothing is drawn while the dataset is still pending. A failed load
    /// counts as complete and draws against the (empty) dataset.
    pub fn on_state_change(
        &mut self,
        dataset: &DatasetStore,
        filter: &FilterState,
    ) -> ChartResult<RedrawOutcome> {
        if dataset.phase() == LoadPhase::Pending {
            debug!("skipping redraw until the listing dataset has loaded");
            return Ok(RedrawOutcome::Skipped);
        }

        let frames = build_chart_frames(dataset.records(), filter, &self.config)?;

        self.bar_surface.clear()?;
        self.bar_surface.render(&frames.bar)?;
        self.scatter_surface.clear()?;
        self.scatter_surface.render(&frames.scatter)?;

        let summary = RedrawSummary {
            view_len: frames.view.len(),
            bar_marks: frames.bar.mark_count(),
            scatter_marks: frames.scatter.mark_count(),
            bar_data_marks: frames.bar.data_mark_count(),
            scatter_data_marks: frames.scatter.data_mark_count(),
        };
        debug!(
            view_len = summary.view_len,
            bar_marks = summary.bar_marks,
            scatter_marks = summary.scatter_marks,
            "redrew listing charts"
        );
        self.last_frames = Some(frames);
        Ok(RedrawOutcome::Rendered(summary))
    }

    /// Frames painted by the latest successful redraw.
    #[must_use]
    pub fn last_frames(&self) -> Option<&ChartFrames> {
        self.last_frames.as_ref()
    }

    #[must_use]
    pub fn bar_surface(&self) -> &B {
        &self.bar_surface
    }

    #[must_use]
    pub fn scatter_surface(&self) -> &S {
        &self.scatter_surface
    }

    #[must_use]
    pub fn into_surfaces(self) -> (B, S) {
        (self.bar_surface, self.scatter_surface)
    }
}
