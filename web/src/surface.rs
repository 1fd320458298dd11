use recollect_core::*;
use web_sys::Element;
use yew::NodeRef;

/// Render state of one tile, plus the node it ends up in once yew has rendered it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TileView {
    pub index: TileIndex,
    pub label: Option<u8>,
    pub color: Hsl,
    pub position: Option<Position>,
    pub clickable: bool,
    pub node: NodeRef,
}

impl TileView {
    fn sync(&mut self, tile: &Tile) {
        self.label = tile.label();
        self.color = tile.color();
        self.position = tile.position();
        self.clickable = tile.click_enabled();
    }
}

/// The game's view of the page: what `MemoryView` renders and where measurements come from.
#[derive(Debug, Default)]
pub(crate) struct DomSurface {
    container: NodeRef,
    tiles: Vec<TileView>,
    layout: LayoutMode,
    status: Option<Status>,
    submit_enabled: bool,
}

impl DomSurface {
    pub(crate) fn container_ref(&self) -> NodeRef {
        self.container.clone()
    }

    pub(crate) fn tiles(&self) -> &[TileView] {
        &self.tiles
    }

    pub(crate) fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub(crate) fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub(crate) fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    fn measure(node: &NodeRef, what: &str) -> Rect {
        match node.cast::<Element>() {
            Some(element) => {
                let rect = element.get_bounding_client_rect();
                Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
            }
            None => {
                log::warn!("{} is not mounted, measuring as empty", what);
                Rect::default()
            }
        }
    }
}

impl Surface for DomSurface {
    fn clear_tiles(&mut self) {
        self.tiles.clear();
    }

    fn create_tile(&mut self, tile: &Tile) {
        self.tiles.push(TileView {
            index: tile.index(),
            label: tile.label(),
            color: tile.color(),
            position: tile.position(),
            clickable: tile.click_enabled(),
            node: NodeRef::default(),
        });
    }

    fn update_tile(&mut self, tile: &Tile) {
        match self.tiles.get_mut(usize::from(tile.index())) {
            Some(view) => view.sync(tile),
            None => log::error!("update for unknown tile {}", tile.index()),
        }
    }

    fn set_layout(&mut self, mode: LayoutMode) {
        self.layout = mode;
    }

    fn measure_tile(&self, index: TileIndex) -> Rect {
        match self.tiles.get(usize::from(index)) {
            Some(view) => Self::measure(&view.node, "tile"),
            None => {
                log::error!("measure of unknown tile {}", index);
                Rect::default()
            }
        }
    }

    fn measure_container(&self) -> Rect {
        Self::measure(&self.container, "play area")
    }

    fn set_status(&mut self, status: &Status) {
        log::debug!("status: {:?}", status);
        self.status = Some(status.clone());
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }
}
