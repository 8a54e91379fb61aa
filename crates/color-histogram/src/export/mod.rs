//! Presentation views over a ranked histogram
//!
//! [`ExportView`] is what table and chart consumers read. It either carries
//! rows and bars, or says explicitly that no color qualified. Derived strings
//! (hex, `"(r, g, b)"`, bar labels) are computed here once so consumers never
//! re-derive them.

mod view;

pub use view::{ChartBar, ExportView, TableRow, CHART_CAP};
