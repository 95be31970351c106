use serde::{Deserialize, Serialize};

pub mod response;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn dist(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A pickup request. Identity is the id; the location is where a robot has
/// to go.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Load {
    pub id: u64,
    pub loc: Point,
}

/// One fleet unit as reported by the registry. Battery level is in
/// [0, 100] for records that came through validation.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Robot {
    pub id: u64,
    pub battery_level: f32,
    pub loc: Point,
}
