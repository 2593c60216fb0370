use ggez::graphics::{DrawMode, Mesh, MeshBuilder};
use ggez::{Context, GameResult};
use tile_snake::basic::GridPoint;

use super::TileLayout;
use crate::app::palette::Palette;

pub fn food_mesh(food: GridPoint, layout: TileLayout, palette: &Palette, ctx: &Context) -> GameResult<Mesh> {
    let rect = layout.cell_rect(food);
    let center = [rect.x + rect.w / 2., rect.y + rect.h / 2.];
    let radius = (layout.tile / 2.5).max(0.5);

    let mut builder = MeshBuilder::new();
    builder.circle(DrawMode::fill(), center, radius, 0.1, palette.food_color)?;
    Ok(Mesh::from_data(ctx, builder.build()))
}
