pub mod report;

pub use report::{group_thousands, render_chart, render_table};
