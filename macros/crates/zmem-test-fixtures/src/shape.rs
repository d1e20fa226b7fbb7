//! Fieldless enums (stored as their underlying integer) and fixed tagged unions, where unused
//! variant bytes must be zero.

use zmem::ZmemLayout;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, ZmemLayout)]
pub enum Color {
    Red = 0,
    Green = 1,
    Blue = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, ZmemLayout)]
pub struct Circle {
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, ZmemLayout)]
pub struct Rect {
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, ZmemLayout)]
pub enum Shape {
    Circle(Circle),
    Rect(Rect),
}
