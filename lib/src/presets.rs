use crate::{
    fractal::{FractalConfig, FractalKind},
    math::Rect,
};

/// Whole Mandelbrot set
pub fn mandelbrot() -> FractalConfig {
    FractalConfig {
        kind: FractalKind::Mandelbrot,
        plane: Rect::from_lrtb(-2.5, 1., -1.25, 1.25),
        size: (700, 500).into(),
        max_iterations: 256,
        escape_radius: 2.,
    }
}

/// Seahorse valley, between the main cardioid and the period-2 bulb
pub fn seahorse_valley() -> FractalConfig {
    FractalConfig {
        kind: FractalKind::Mandelbrot,
        plane: Rect::from_center((-0.75, 0.1).into(), (0.1, 0.1).into()),
        size: (600, 600).into(),
        max_iterations: 1024,
        escape_radius: 2.,
    }
}

/// Iterates `(conj(z) + c)^2`
pub fn conjugate_square() -> FractalConfig {
    FractalConfig {
        kind: FractalKind::ConjugateSquare,
        plane: Rect::from_lrtb(-2., 2., -2., 2.),
        size: (600, 600).into(),
        max_iterations: 256,
        escape_radius: 2.,
    }
}
