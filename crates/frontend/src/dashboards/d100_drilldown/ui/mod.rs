pub mod branch_level;
pub mod company_level;
pub mod dashboard;
pub mod product_level;

pub use dashboard::DrilldownDashboard;
