pub mod currency;
pub mod math;
