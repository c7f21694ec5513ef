pub mod d100_drilldown;

pub use d100_drilldown::ui::DrilldownDashboard;
