pub mod d400_rep_summary;

pub use d400_rep_summary::ui::RepSummaryDashboard;
