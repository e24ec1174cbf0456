pub mod band_scale;
pub mod chart_scales;
pub mod filter;
pub mod listing;
pub mod primitives;
pub mod scale;
pub mod ticks;
pub mod types;

pub use band_scale::BandScale;
pub use chart_scales::ChartScales;
pub use filter::{DEFAULT_VIEW_LIMIT, FilterState, FilteredView, manufacturer_options};
pub use listing::{ListingRecord, PricePolicy, RawListing, SanitizedListings, sanitize_listings};
pub use primitives::format_price_literal;
pub use scale::LinearScale;
pub use ticks::{format_tick_label, nice_tick_step, nice_ticks, precision_for_step};
pub use types::{Margins, PlotArea, Viewport};
