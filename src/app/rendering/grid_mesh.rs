use ggez::graphics::{DrawMode, Mesh, MeshBuilder};
use ggez::{Context, GameResult};
use tile_snake::grid::Grid;

use super::TileLayout;
use crate::app::palette::Palette;

/// Floor, walls and optionally the lines between tiles
pub fn grid_mesh(
    grid: &Grid,
    layout: TileLayout,
    draw_lines: bool,
    palette: &Palette,
    ctx: &Context,
) -> GameResult<Mesh> {
    let mut builder = MeshBuilder::new();

    let board = layout.board_rect(grid.dim());
    builder.rectangle(DrawMode::fill(), board, palette.floor_color)?;

    for pos in grid.cells().filter(|&pos| grid.is_wall(pos)) {
        builder.rectangle(DrawMode::fill(), layout.cell_rect(pos), palette.wall_color)?;
    }

    if draw_lines {
        let thickness = palette.line_thickness;
        let color = palette.grid_line_color;
        for col in 0..=grid.width() {
            let x = board.x + col as f32 * layout.tile;
            builder.line(&[[x, board.y], [x, board.y + board.h]], thickness, color)?;
        }
        for row in 0..=grid.height() {
            let y = board.y + row as f32 * layout.tile;
            builder.line(&[[board.x, y], [board.x + board.w, y]], thickness, color)?;
        }
    }

    Ok(Mesh::from_data(ctx, builder.build()))
}
