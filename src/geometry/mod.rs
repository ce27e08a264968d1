pub mod object;
pub mod points;
pub mod shapes;
