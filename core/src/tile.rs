use bitflags::bitflags;

use crate::*;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TileFlags: u8 {
        const LABEL_VISIBLE = 1;
        const CLICK_ENABLED = 1 << 1;
    }
}

/// One clickable button of a round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    index: TileIndex,
    color: Hsl,
    position: Option<Position>,
    flags: TileFlags,
}

impl Tile {
    /// Fresh tile showing its number, not yet clickable, laid out by the container.
    pub fn new(index: TileIndex, color: Hsl) -> Self {
        Self {
            index,
            color,
            position: None,
            flags: TileFlags::LABEL_VISIBLE,
        }
    }

    pub const fn index(&self) -> TileIndex {
        self.index
    }

    /// 1-based number printed on the tile.
    pub const fn number(&self) -> u8 {
        self.index + 1
    }

    pub fn label(&self) -> Option<u8> {
        self.label_visible().then(|| self.number())
    }

    pub const fn label_visible(&self) -> bool {
        self.flags.contains(TileFlags::LABEL_VISIBLE)
    }

    pub const fn click_enabled(&self) -> bool {
        self.flags.contains(TileFlags::CLICK_ENABLED)
    }

    pub const fn flags(&self) -> TileFlags {
        self.flags
    }

    pub const fn color(&self) -> Hsl {
        self.color
    }

    pub const fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn set_label_visible(&mut self, visible: bool) {
        self.flags.set(TileFlags::LABEL_VISIBLE, visible);
    }

    pub fn set_click_enabled(&mut self, enabled: bool) {
        self.flags.set(TileFlags::CLICK_ENABLED, enabled);
    }

    pub fn set_color(&mut self, color: Hsl) {
        self.color = color;
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = Some(position);
    }

    /// Shows the number and stops accepting clicks.
    pub fn lock_revealed(&mut self) {
        self.set_label_visible(true);
        self.set_click_enabled(false);
    }
}
