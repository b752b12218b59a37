#![deny(unused_imports)]

pub mod fractal;
pub mod math;
pub mod presets;
pub mod utils;
