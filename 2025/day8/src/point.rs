use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
}

impl TryFrom<&str> for Point {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        const COORD: &str = r"([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)";
        static POINT_PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(&format!(r"^\s*{0}\s*,\s*{0}\s*,\s*{0}\s*$", COORD)).unwrap()
        });

        let caps = POINT_PATTERN
            .captures(value)
            .ok_or_else(|| Error::InvalidPointText(value.to_string()))?;
        let coord = |ind: usize| {
            caps[ind]
                .parse::<f64>()
                .map_err(|_| Error::InvalidPointText(value.to_string()))
        };

        Ok(Point::new(coord(1)?, coord(2)?, coord(3)?))
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1}, {:.1})", self.x, self.y, self.z)
    }
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}
