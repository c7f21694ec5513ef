pub mod d100_drilldown;
