use rand::prelude::*;

use crate::*;

/// CSS pixels, as reported by the layout engine.
pub type Px = f64;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: Px,
    pub height: Px,
}

impl Size {
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

/// Offset of a tile's top-left corner from the container's top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub left: Px,
    pub top: Px,
}

impl Position {
    pub const fn new(left: Px, top: Px) -> Self {
        Self { left, top }
    }
}

/// Bounding box in viewport coordinates.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: Px,
    pub top: Px,
    pub width: Px,
    pub height: Px,
}

impl Rect {
    pub const fn new(left: Px, top: Px, width: Px, height: Px) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn offset_from(&self, container: &Rect) -> Position {
        Position::new(self.left - container.left, self.top - container.top)
    }

    /// Whether a box of `size` placed at `pos` lies fully inside a container of this size.
    pub fn contains_box(&self, pos: Position, size: Size) -> bool {
        pos.left >= 0.0
            && pos.top >= 0.0
            && pos.left + size.width <= self.width
            && pos.top + size.height <= self.height
    }
}

/// How the container arranges its tiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutMode {
    /// Tiles flow in a row, positioned by the host.
    Flow,
    /// Tiles sit at explicit offsets.
    Free,
}

impl Default for LayoutMode {
    fn default() -> Self {
        Self::Flow
    }
}

/// Uniformly random placement that keeps the tile inside the container.
#[derive(Clone, Debug)]
pub struct RandomPlacer {
    rng: SmallRng,
}

impl RandomPlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Largest whole-pixel offset that keeps `inner` inside `outer`, 0 when it does not fit.
    fn max_offset(inner: Px, outer: Px) -> u32 {
        let slack = outer - inner;
        if slack.is_finite() && slack > 0.0 {
            // truncation is floor for positive values
            slack as u32
        } else {
            0
        }
    }

    pub fn place(&mut self, tile: Size, container: Size) -> Position {
        let max_left = Self::max_offset(tile.width, container.width);
        let max_top = Self::max_offset(tile.height, container.height);
        let left = self.rng.random_range(0..=max_left);
        let top = self.rng.random_range(0..=max_top);
        log::trace!(
            "placed {}x{} at ({}, {}) in {}x{}",
            tile.width,
            tile.height,
            left,
            top,
            container.width,
            container.height
        );
        Position::new(left.into(), top.into())
    }
}
