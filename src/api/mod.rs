//! Chart assembly: configuration, frame builders, the redraw controller and
//! the top-level screen tying dataset, filter and surfaces together.

mod axis_builder;
mod bar_chart;
mod chart_config;
mod chart_screen;
mod dataset;
mod redraw;
mod render_style;
mod scatter_chart;

pub use bar_chart::render_bars;
pub use chart_config::ChartConfig;
pub use chart_screen::ChartScreen;
#[cfg(feature = "http-source")]
pub use dataset::HttpSource;
pub use dataset::{
    DEFAULT_LISTINGS_URL, DatasetSource, DatasetStore, JsonFileSource, JsonTextSource, LoadPhase,
    LoadStatus, RecordsSource, parse_listings_json,
};
pub use redraw::{ChartFrames, RedrawController, RedrawOutcome, RedrawSummary, build_chart_frames};
pub use render_style::RenderStyle;
pub use scatter_chart::render_scatter;
