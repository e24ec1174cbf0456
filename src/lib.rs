//! listing-charts: manufacturer-filtered price charts for vehicle listings.
//!
//! A flat list of listings and a manufacturer selection go in; two
//! coordinated frames come out: a bar chart and a connected scatter plot
//! sharing one category scale and one price scale. Geometry is computed as
//! plain data (`render::RenderFrame`) and handed to a `render::Renderer`,
//! so every scale and mark can be checked without a display.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartScreen};
pub use error::{ChartError, ChartResult};
