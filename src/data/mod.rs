pub mod input;
pub mod pad;
pub mod point;
pub mod points;
