pub mod d100_drilldown;
pub mod session;
