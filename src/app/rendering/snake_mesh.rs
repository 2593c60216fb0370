use ggez::graphics::{DrawMode, Mesh, MeshBuilder, Rect};
use ggez::{Context, GameResult};
use itertools::Itertools;
use tile_snake::snake::Body;

use super::{inset, TileLayout};
use crate::app::palette::Palette;

/// Fraction of a tile left empty around each segment
const SEGMENT_MARGIN: f32 = 0.1;

pub fn snake_mesh(
    body: &Body,
    crashed: bool,
    layout: TileLayout,
    palette: &Palette,
    ctx: &Context,
) -> GameResult<Mesh> {
    let mut builder = MeshBuilder::new();
    let margin = layout.tile * SEGMENT_MARGIN;
    let len = body.len();

    let rects = body
        .iter()
        .map(|pos| inset(layout.cell_rect(pos), margin))
        .collect_vec();

    // tail first so that the head ends up on top
    for (seg, rect) in rects.iter().enumerate().rev() {
        let color = if seg == 0 && crashed {
            palette.snake.crashed_color
        } else {
            (palette.snake.segment_color)(seg, len)
        };
        builder.rectangle(DrawMode::fill(), *rect, color)?;

        // bridge the margin towards the segment closer to the head
        if let Some(next) = seg.checked_sub(1).map(|i| rects[i]) {
            builder.rectangle(DrawMode::fill(), bridge(*rect, next), color)?;
        }
    }

    Ok(Mesh::from_data(ctx, builder.build()))
}

// the gap between two inset neighbouring rects, spanning their shared side
fn bridge(a: Rect, b: Rect) -> Rect {
    let left = a.x.min(b.x);
    let top = a.y.min(b.y);
    let right = (a.x + a.w).max(b.x + b.w);
    let bottom = (a.y + a.h).max(b.y + b.h);
    if (a.y - b.y).abs() < f32::EPSILON {
        // side by side
        Rect::new(left + a.w, top, right - left - 2. * a.w, a.h)
    } else {
        Rect::new(left, top + a.h, a.w, bottom - top - 2. * a.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_horizontal() {
        let a = Rect::new(1., 1., 8., 8.);
        let b = Rect::new(11., 1., 8., 8.);
        let gap = bridge(a, b);
        assert_eq!((gap.x, gap.y, gap.w, gap.h), (9., 1., 2., 8.));
        assert_eq!(bridge(b, a), gap);
    }

    #[test]
    fn test_bridge_vertical() {
        let a = Rect::new(1., 11., 8., 8.);
        let b = Rect::new(1., 1., 8., 8.);
        let gap = bridge(a, b);
        assert_eq!((gap.x, gap.y, gap.w, gap.h), (1., 9., 8., 2.));
    }
}
