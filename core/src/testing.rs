//! Recording fake of the rendering surface.

use alloc::vec::Vec;

use crate::*;

const FLOW_GAP: Px = 10.0;

#[derive(Clone, Debug, PartialEq)]
struct FakeTile {
    label: Option<u8>,
    clickable: bool,
    positions: Vec<Position>,
}

/// Keeps the last state pushed for every tile and lays tiles out in a single row while in flow mode.
#[derive(Clone, Debug)]
pub(crate) struct RecordingSurface {
    container: Rect,
    tile_size: Size,
    layout: LayoutMode,
    tiles: Vec<FakeTile>,
    status: Option<Status>,
    submit_enabled: bool,
}

impl RecordingSurface {
    pub(crate) fn new(container: Rect, tile_size: Size) -> Self {
        Self {
            container,
            tile_size,
            layout: LayoutMode::Flow,
            tiles: Vec::new(),
            status: None,
            submit_enabled: false,
        }
    }

    pub(crate) fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub(crate) fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub(crate) fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub(crate) fn created(&self) -> usize {
        self.tiles.len()
    }

    pub(crate) fn rendered_labels(&self) -> Vec<Option<u8>> {
        self.tiles.iter().map(|tile| tile.label).collect()
    }

    pub(crate) fn clickable_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.clickable).count()
    }

    /// First explicit position each tile received.
    pub(crate) fn first_positions(&self) -> Vec<Position> {
        self.tiles
            .iter()
            .filter_map(|tile| tile.positions.first().copied())
            .collect()
    }

    pub(crate) fn flow_rect(&self, index: TileIndex) -> Rect {
        let step = self.tile_size.width + FLOW_GAP;
        Rect::new(
            self.container.left + FLOW_GAP + step * Px::from(index),
            self.container.top + FLOW_GAP,
            self.tile_size.width,
            self.tile_size.height,
        )
    }

    pub(crate) fn resize_container(&mut self, size: Size) {
        self.container.width = size.width;
        self.container.height = size.height;
    }
}

impl Surface for RecordingSurface {
    fn clear_tiles(&mut self) {
        self.tiles.clear();
    }

    fn create_tile(&mut self, tile: &Tile) {
        assert_eq!(usize::from(tile.index()), self.tiles.len());
        self.tiles.push(FakeTile {
            label: tile.label(),
            clickable: tile.click_enabled(),
            positions: Vec::new(),
        });
    }

    fn update_tile(&mut self, tile: &Tile) {
        let fake = &mut self.tiles[usize::from(tile.index())];
        fake.label = tile.label();
        fake.clickable = tile.click_enabled();
        if let Some(pos) = tile.position() {
            if fake.positions.last() != Some(&pos) {
                fake.positions.push(pos);
            }
        }
    }

    fn set_layout(&mut self, mode: LayoutMode) {
        self.layout = mode;
    }

    fn measure_tile(&self, index: TileIndex) -> Rect {
        let fake = &self.tiles[usize::from(index)];
        match (self.layout, fake.positions.last()) {
            (LayoutMode::Free, Some(pos)) => Rect::new(
                self.container.left + pos.left,
                self.container.top + pos.top,
                self.tile_size.width,
                self.tile_size.height,
            ),
            _ => self.flow_rect(index),
        }
    }

    fn measure_container(&self) -> Rect {
        self.container
    }

    fn set_status(&mut self, status: &Status) {
        self.status = Some(status.clone());
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }
}
