use std::{error::Error, fmt::Display};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    math::{Complex, Point, Rect, Size, Sqr as _, Zero as _},
    presets,
    utils::Float,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FractalKind {
    /// `z * z + c`
    Mandelbrot,
    /// `(conj(z) + c)^2`
    ConjugateSquare,
}

impl FractalKind {
    pub fn step(self, z: Complex<Float>, c: Complex<Float>) -> Complex<Float> {
        match self {
            FractalKind::Mandelbrot => z * z + c,
            FractalKind::ConjugateSquare => {
                let sum = z.conjugate() + c;
                sum * sum
            }
        }
    }
}

/// Iterates `kind` from `z = 0` and returns the 1-based iteration on which `|z|`
/// exceeded `escape_radius`, or `None` if it stayed inside for `max_iterations` steps.
pub fn escape_time(
    kind: FractalKind,
    c: Complex<Float>,
    max_iterations: u32,
    escape_radius: Float,
) -> Option<u32> {
    let threshold = escape_radius.sqr();
    let mut z = Complex::zero();
    for i in 1..=max_iterations {
        z = kind.step(z, c);
        if z.length_sq() > threshold {
            return Some(i);
        }
    }
    None
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractalConfig {
    pub kind: FractalKind,
    /// Region of the complex plane, `top` is the smallest imaginary part
    pub plane: Rect<Float>,
    /// Output grid size in pixels
    pub size: Size<usize>,
    pub max_iterations: u32,
    pub escape_radius: Float,
}

impl Default for FractalConfig {
    fn default() -> Self {
        presets::mandelbrot()
    }
}

#[derive(Debug)]
pub struct EmptyViewportError {
    plane: Rect<Float>,
    size: Size<usize>,
}

impl Display for EmptyViewportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.size.area().is_none() {
            return write!(
                f,
                "viewport of {}x{} pixels is too large",
                self.size.w(),
                self.size.h()
            );
        }
        write!(
            f,
            "viewport is empty: {}x{} pixels over {}x{} plane area",
            self.size.w(),
            self.size.h(),
            self.plane.w(),
            self.plane.h()
        )
    }
}

impl Error for EmptyViewportError {}

/// Maps pixels of a grid onto a region of the complex plane.
/// Pixel row 0 is the largest imaginary part.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    plane: Rect<Float>,
    size: Size<usize>,
    area: usize,
}

impl Viewport {
    pub fn new(plane: Rect<Float>, size: Size<usize>) -> Result<Self, EmptyViewportError> {
        let has_area = *plane.w() > 0. && *plane.h() > 0.;
        match size.area() {
            Some(area) if area > 0 && has_area => Ok(Self { plane, size, area }),
            _ => Err(EmptyViewportError { plane, size }),
        }
    }

    pub fn size(&self) -> Size<usize> {
        self.size
    }

    pub fn area(&self) -> usize {
        self.area
    }

    /// Center of the pixel in plane coordinates
    pub fn map(&self, pixel: Point<usize>) -> Complex<Float> {
        let pixel_w = self.plane.w() / *self.size.w() as Float;
        let pixel_h = self.plane.h() / *self.size.h() as Float;
        Point::from((
            self.plane.left() + (pixel.x() as Float + 0.5) * pixel_w,
            self.plane.bottom() - (pixel.y() as Float + 0.5) * pixel_h,
        ))
        .into()
    }
}

/// Row-major escape times of a rendered grid. `None` marks points that never escaped.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeGrid {
    size: Size<usize>,
    values: Vec<Option<u32>>,
}

impl EscapeGrid {
    pub fn size(&self) -> Size<usize> {
        self.size
    }

    /// Outer `None` if `pixel` is out of the grid
    pub fn get(&self, pixel: Point<usize>) -> Option<Option<u32>> {
        let (x, y) = (pixel.x(), pixel.y());
        if x >= *self.size.w() || y >= *self.size.h() {
            return None;
        }
        self.values.get(y * self.size.w() + x).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<u32>]> {
        self.values.chunks(*self.size.w())
    }

    pub fn escaped_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

/// Evaluates every pixel of `config`, one rayon task per row.
pub fn render(config: &FractalConfig) -> Result<EscapeGrid, EmptyViewportError> {
    let viewport = Viewport::new(config.plane, config.size)?;
    let width = *config.size.w();

    debug!(
        kind = ?config.kind,
        width = width,
        height = *config.size.h(),
        max_iterations = config.max_iterations,
        "Rendering fractal"
    );

    let mut values = vec![None; viewport.area()];
    values
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, value) in row.iter_mut().enumerate() {
                *value = escape_time(
                    config.kind,
                    viewport.map((x, y).into()),
                    config.max_iterations,
                    config.escape_radius,
                );
            }
        });

    let grid = EscapeGrid {
        size: config.size,
        values,
    };

    debug!(escaped = grid.escaped_count(), "Fractal rendered");

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{escape_time, render, FractalConfig, FractalKind, Viewport};
    use crate::{
        math::{Complex, Rect},
        utils::Float,
    };

    const DELTA: Float = 1e-10;

    #[test]
    fn conjugate_square_step() {
        let z = Complex::new(1., 1.);
        let c = Complex::new(0.5, 0.5);
        let result = FractalKind::ConjugateSquare.step(z, c);
        assert_abs_diff_eq!(result.re(), 2., epsilon = DELTA);
        assert_abs_diff_eq!(result.im(), -1.5, epsilon = DELTA);
    }

    #[test]
    fn mandelbrot_step() {
        let result = FractalKind::Mandelbrot.step(Complex::new(1., 1.), Complex::new(0.5, 0.5));
        assert_abs_diff_eq!(result.re(), 0.5, epsilon = DELTA);
        assert_abs_diff_eq!(result.im(), 2.5, epsilon = DELTA);
    }

    #[test]
    fn escape_time_mandelbrot() {
        let kind = FractalKind::Mandelbrot;
        assert_eq!(escape_time(kind, Complex::new(0., 0.), 100, 2.), None);
        assert_eq!(escape_time(kind, Complex::new(-1., 0.), 100, 2.), None);
        assert_eq!(escape_time(kind, Complex::new(3., 0.), 100, 2.), Some(1));
        assert_eq!(escape_time(kind, Complex::new(2., 0.), 100, 2.), Some(2));
        assert_eq!(escape_time(kind, Complex::new(1., 0.), 100, 2.), Some(3));
        assert_eq!(escape_time(kind, Complex::new(1., 0.), 2, 2.), None);
    }

    #[test]
    fn escape_time_conjugate_square() {
        let kind = FractalKind::ConjugateSquare;
        assert_eq!(escape_time(kind, Complex::new(0., 0.), 100, 2.), None);
        assert_eq!(escape_time(kind, Complex::new(2., 0.), 100, 2.), Some(1));
        assert_eq!(escape_time(kind, Complex::new(1., 0.), 100, 2.), Some(2));
    }

    #[test]
    fn viewport_map() {
        let viewport = Viewport::new(Rect::from_lrtb(-2., 2., -1., 1.), (4, 2).into()).unwrap();
        let top_left = viewport.map((0, 0).into());
        assert_abs_diff_eq!(top_left.re(), -1.5, epsilon = DELTA);
        assert_abs_diff_eq!(top_left.im(), 0.5, epsilon = DELTA);
        let bottom_right = viewport.map((3, 1).into());
        assert_abs_diff_eq!(bottom_right.re(), 1.5, epsilon = DELTA);
        assert_abs_diff_eq!(bottom_right.im(), -0.5, epsilon = DELTA);
    }

    #[test]
    fn empty_viewport() {
        assert!(Viewport::new(Rect::from_lrtb(-2., 2., -1., 1.), (0, 2).into()).is_err());
        let err = Viewport::new(Rect::from_lrtb(1., 1., -1., 1.), (4, 2).into()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "viewport is empty: 4x2 pixels over 0x2 plane area"
        );
    }

    #[test]
    fn render_matches_escape_time() {
        let config = FractalConfig {
            kind: FractalKind::Mandelbrot,
            plane: Rect::from_lrtb(-2.5, 1.5, -1.5, 1.5),
            size: (40, 30).into(),
            max_iterations: 64,
            escape_radius: 2.,
        };
        let grid = render(&config).unwrap();
        let viewport = Viewport::new(config.plane, config.size).unwrap();

        assert_eq!(grid.size(), config.size);
        assert_eq!(grid.rows().count(), 30);
        assert!(grid.rows().all(|row| row.len() == 40));
        for y in 0..30 {
            for x in 0..40 {
                assert_eq!(
                    grid.get((x, y).into()),
                    Some(escape_time(
                        config.kind,
                        viewport.map((x, y).into()),
                        config.max_iterations,
                        config.escape_radius
                    ))
                );
            }
        }
        assert_eq!(grid.get((40, 0).into()), None);
        assert!(grid.escaped_count() > 0);
        assert!(grid.escaped_count() < 40 * 30);
    }

    #[test]
    fn oversized_viewport() {
        let plane = Rect::from_lrtb(-2., 2., -1., 1.);
        let err = Viewport::new(plane, (usize::MAX, 2).into()).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("viewport of {}x2 pixels is too large", usize::MAX)
        );

        let json = format!(
            r#"{{"kind":"Mandelbrot","plane":{{"x":-2.0,"y":-1.0,"w":4.0,"h":2.0}},"size":{{"w":{},"h":2}},"max_iterations":16,"escape_radius":2.0}}"#,
            usize::MAX
        );
        let config: FractalConfig = serde_json::from_str(&json).unwrap();
        assert!(render(&config).is_err());
    }

    #[test]
    fn render_rejects_empty_size() {
        let config = FractalConfig {
            size: (10, 0).into(),
            ..Default::default()
        };
        assert!(render(&config).is_err());
    }
}
