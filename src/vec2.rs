use std::ops::{Add, Sub};

use crossterm::cursor::MoveTo;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Vec2<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub const fn splat(v: T) -> Self {
        Self::new(v, v)
    }

    pub fn join<U: Copy, O: Copy>(self, other: Vec2<U>, mut f: impl FnMut(T, U) -> O) -> Vec2<O> {
        Vec2 {
            x: f(self.x, other.x),
            y: f(self.y, other.y),
        }
    }
}

impl Vec2<u16> {
    #[must_use]
    pub fn move_to(self) -> MoveTo {
        MoveTo(self.x, self.y)
    }
}

impl<T: Copy> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self {
        Vec2 { x, y }
    }
}

impl<T: Copy + Add<Output = T>> Add for Vec2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.join(rhs, |s, o| s + o)
    }
}

impl<T: Copy + Sub<Output = T>> Sub for Vec2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.join(rhs, |s, o| s - o)
    }
}

/// An area of the terminal
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    pub pos: Vec2<u16>,
    pub size: Vec2<u16>,
}

impl Rect {
    /// A rect of `size` centered horizontally in `width`, starting at row `y`
    pub fn centered_h(width: u16, y: u16, size: Vec2<u16>) -> Self {
        Self {
            pos: Vec2::new(width.saturating_sub(size.x) / 2, y),
            size,
        }
    }

    pub fn bottom(self) -> u16 {
        self.pos.y + self.size.y
    }
}
