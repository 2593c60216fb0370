use ggez::graphics::Color;

macro_rules! gray {
    ($lightness:expr) => {
        Color {
            r: $lightness,
            g: $lightness,
            b: $lightness,
            a: 1.,
        }
    };
}

lazy_static! {
    static ref DEFAULT_CRASHED_COLOR: Color = Color::from_rgb(255, 0, 128);
    static ref DEFAULT_FOOD_COLOR: Color = Color::from_rgb(255, 165, 0);
    static ref DEFAULT_WALL_COLOR: Color = Color::from_rgb(102, 102, 170);
}

type SegmentColor = dyn Fn(usize, usize) -> Color;

pub struct SnakePalette {
    /// Called with (segment index from the head, body length)
    pub segment_color: Box<SegmentColor>,
    pub crashed_color: Color,
}

impl SnakePalette {
    pub fn gradient(head: Color, tail: Color) -> Self {
        Self {
            segment_color: Box::new(move |seg, len| {
                if len <= 1 {
                    return head;
                }
                let head_ratio = 1. - seg as f32 / (len - 1) as f32;
                let tail_ratio = 1. - head_ratio;
                Color {
                    r: head_ratio * head.r + tail_ratio * tail.r,
                    g: head_ratio * head.g + tail_ratio * tail.g,
                    b: head_ratio * head.b + tail_ratio * tail.b,
                    a: 1.,
                }
            }),
            crashed_color: *DEFAULT_CRASHED_COLOR,
        }
    }
}

pub struct Palette {
    pub line_thickness: f32,

    pub background_color: Color, // letterbox
    pub floor_color: Color,
    pub wall_color: Color,
    pub grid_line_color: Color,
    pub food_color: Color,
    pub text_color: Color,
    pub shadow_color: Color,

    pub snake: SnakePalette,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            line_thickness: 1.,

            background_color: gray!(0.125),
            floor_color: gray!(0.19),
            wall_color: *DEFAULT_WALL_COLOR,
            grid_line_color: gray!(0.25),
            food_color: *DEFAULT_FOOD_COLOR,
            text_color: Color::WHITE,
            shadow_color: Color::BLACK,

            snake: SnakePalette::gradient(Color::from_rgb(0, 170, 0), Color::from_rgb(0, 96, 0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_ends() {
        let head = Color::from_rgb(0, 200, 0);
        let tail = Color::from_rgb(0, 100, 0);
        let palette = SnakePalette::gradient(head, tail);
        assert_eq!((palette.segment_color)(0, 5), head);
        assert!(((palette.segment_color)(4, 5).g - tail.g).abs() < 1e-6);
        // lone head doesn't divide by zero
        assert_eq!((palette.segment_color)(0, 1), head);
    }
}
