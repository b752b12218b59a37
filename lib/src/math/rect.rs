use std::ops::{Add, Div, Sub};

use serde::{Deserialize, Serialize};

use super::{Point, Size, Two};

/// Axis aligned rectangle. `top` is the smaller `y` edge and `bottom` the larger one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect<T> {
    x: T,
    y: T,
    w: T,
    h: T,
}

impl<T> Rect<T> {
    pub fn left(&self) -> T
    where
        T: Clone,
    {
        self.x.clone()
    }

    pub fn right(&self) -> T
    where
        T: Add<Output = T> + Clone,
    {
        self.x.clone() + self.w.clone()
    }

    pub fn top(&self) -> T
    where
        T: Clone,
    {
        self.y.clone()
    }

    pub fn bottom(&self) -> T
    where
        T: Add<Output = T> + Clone,
    {
        self.y.clone() + self.h.clone()
    }

    pub fn w(&self) -> &T {
        &self.w
    }

    pub fn h(&self) -> &T {
        &self.h
    }

    pub fn from_lrtb(left: T, right: T, top: T, bottom: T) -> Self
    where
        T: Sub<Output = T> + Clone,
    {
        Self {
            x: left.clone(),
            y: top.clone(),
            w: right - left,
            h: bottom - top,
        }
    }

    pub fn from_center(center: Point<T>, size: Size<T>) -> Self
    where
        T: Clone + Two + Sub<Output = T> + Div<Output = T>,
    {
        Self {
            x: center.clone().x() - size.w().clone() / T::two(),
            y: center.y() - size.h().clone() / T::two(),
            w: size.w().clone(),
            h: size.h().clone(),
        }
    }

    pub fn center(&self) -> Point<T>
    where
        T: Clone + Two + Add<Output = T> + Div<Output = T>,
    {
        (
            self.x.clone() + self.w.clone() / T::two(),
            self.y.clone() + self.h.clone() / T::two(),
        )
            .into()
    }

    pub fn contains_point(&self, point: Point<T>) -> bool
    where
        T: PartialOrd + Add<Output = T> + Clone,
    {
        let (x, y) = (point.clone().x(), point.y());
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }
}

impl<T> From<(T, T, T, T)> for Rect<T> {
    fn from(value: (T, T, T, T)) -> Self {
        Self {
            x: value.0,
            y: value.1,
            w: value.2,
            h: value.3,
        }
    }
}
