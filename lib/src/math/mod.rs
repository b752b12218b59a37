mod complex;
mod point;
mod rect;
mod size;
mod traits;

pub use complex::*;
pub use point::*;
pub use rect::*;
pub use size::*;
pub use traits::*;
