use super::Complex;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T> {
    x: T,
    y: T,
}

impl<T> From<(T, T)> for Point<T> {
    fn from(value: (T, T)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

impl<T> From<Point<T>> for Complex<T> {
    fn from(value: Point<T>) -> Self {
        Complex::new(value.x, value.y)
    }
}

impl<T> Point<T> {
    pub fn x(self) -> T {
        self.x
    }
    pub fn y(self) -> T {
        self.y
    }
}
