//! Derived statistics views: category breakdowns and month summaries.

mod breakdown;
mod summary;

pub use breakdown::{
    CategorySlice, UNCATEGORIZED_COLOR, UNCATEGORIZED_LABEL, category_breakdown,
};
pub use summary::{MonthSummary, month_summary};
