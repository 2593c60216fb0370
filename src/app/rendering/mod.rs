use ggez::graphics::Rect;
use tile_snake::basic::{GridDim, GridPoint};

mod food_mesh;
mod grid_mesh;
mod snake_mesh;

pub use food_mesh::food_mesh;
pub use grid_mesh::grid_mesh;
pub use snake_mesh::snake_mesh;

/// Square tiles of whole pixels, the board centered in the window
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TileLayout {
    pub tile: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl TileLayout {
    pub fn fit(window_width: f32, window_height: f32, dim: GridDim) -> Self {
        let tile = (window_width / dim.width as f32)
            .min(window_height / dim.height as f32)
            .floor()
            .max(1.);
        let used_w = tile * dim.width as f32;
        let used_h = tile * dim.height as f32;
        Self {
            tile,
            offset_x: ((window_width - used_w) / 2.).max(0.).floor(),
            offset_y: ((window_height - used_h) / 2.).max(0.).floor(),
        }
    }

    pub fn cell_rect(&self, pos: GridPoint) -> Rect {
        Rect::new(
            self.offset_x + pos.col as f32 * self.tile,
            self.offset_y + pos.row as f32 * self.tile,
            self.tile,
            self.tile,
        )
    }

    pub fn board_rect(&self, dim: GridDim) -> Rect {
        Rect::new(
            self.offset_x,
            self.offset_y,
            self.tile * dim.width as f32,
            self.tile * dim.height as f32,
        )
    }
}

/// `rect` shrunk by `margin` on every side
pub fn inset(rect: Rect, margin: f32) -> Rect {
    let margin = margin.min(rect.w / 2.).min(rect.h / 2.);
    Rect::new(rect.x + margin, rect.y + margin, rect.w - 2. * margin, rect.h - 2. * margin)
}
