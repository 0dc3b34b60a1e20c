//! Dioxus RSX components for the Weather Explorer page.

mod error_display;
mod loading_spinner;
mod location_select;
mod pagination_controls;
mod results_info;
mod results_table;
mod search_panel;
mod section_header;
mod stats_panel;
mod visualization_panel;

pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use location_select::LocationSelect;
pub use pagination_controls::PaginationControls;
pub use results_info::ResultsInfo;
pub use results_table::ResultsTable;
pub use search_panel::SearchPanel;
pub use section_header::SectionHeader;
pub use stats_panel::StatsPanel;
pub use visualization_panel::VisualizationPanel;
