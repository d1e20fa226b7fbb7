//! Plain fixed aggregates, e.g. `Point{x=1.0, y=2.0}` encodes as `00 00 80 3F 00 00 00 40`.

use zmem::ZmemLayout;

#[derive(Clone, Copy, Debug, PartialEq, ZmemLayout)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, ZmemLayout)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
