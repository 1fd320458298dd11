use crate::*;

/// Rendering capabilities the game drives. Implemented by the host on top of its UI toolkit.
pub trait Surface {
    /// Removes every tile from the container.
    fn clear_tiles(&mut self);

    /// Appends a tile; tiles are created in index order.
    fn create_tile(&mut self, tile: &Tile);

    /// Pushes the tile's label, color, position and click enablement.
    fn update_tile(&mut self, tile: &Tile);

    fn set_layout(&mut self, mode: LayoutMode);

    /// Current bounding box of a tile, in the same coordinates as [`Surface::measure_container`].
    fn measure_tile(&self, index: TileIndex) -> Rect;

    fn measure_container(&self) -> Rect;

    fn set_status(&mut self, status: &Status);

    fn set_submit_enabled(&mut self, enabled: bool);
}
