pub mod branches;
pub mod companies;
pub mod products;
pub mod sale_lines;
