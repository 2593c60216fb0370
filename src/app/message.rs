use ggez::graphics::{Canvas, Color, DrawParam, PxScale, Text, TextLayout};
use ggez::Context;
use std::time::{Duration, Instant};

/// Finite number of possible messages
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum MessageID {
    /// Persistent length readout
    Length,
    /// Temporary info when switching level or toggling the grid
    Notification,
    /// GAME OVER or PAUSED across the board
    Overlay,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Position {
    TopLeft,
    Center,
}

pub struct Message {
    pub text: String,

    pub position: Position,
    pub margin: f32,
    pub font_size: f32,
    pub color: Color,
    /// Drawn one pixel down and right under the text
    pub shadow: Option<Color>,
    // None means unlimited duration
    pub disappear: Option<Instant>,
}

impl Message {
    pub const DEFAULT_MARGIN: f32 = 12.;
    pub const DEFAULT_FONT_SIZE: f32 = 24.;
    pub const OVERLAY_FONT_SIZE: f32 = 64.;

    const FADE_OUT: Duration = Duration::from_millis(200);

    pub fn default(text: String, position: Position, color: Color, duration: Option<Duration>) -> Self {
        Self {
            text,
            position,
            margin: Self::DEFAULT_MARGIN,
            font_size: Self::DEFAULT_FONT_SIZE,
            color,
            shadow: None,
            disappear: duration.map(|d| Instant::now() + d),
        }
    }

    pub fn overlay(text: &str, color: Color, shadow: Color) -> Self {
        Self {
            font_size: Self::OVERLAY_FONT_SIZE,
            shadow: Some(shadow),
            ..Self::default(text.to_owned(), Position::Center, color, None)
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.disappear.map_or(false, |deadline| deadline <= now)
    }

    /// Opacity at `now`, fading out linearly just before disappearing
    pub fn alpha(&self, now: Instant) -> f32 {
        match self.disappear.map(|deadline| deadline.saturating_duration_since(now)) {
            None => 1.,
            Some(left) if left >= Self::FADE_OUT => 1.,
            Some(left) => left.as_secs_f32() / Self::FADE_OUT.as_secs_f32(),
        }
    }

    pub fn draw(&self, canvas: &mut Canvas, ctx: &Context) {
        let now = Instant::now();
        if self.is_expired(now) {
            return;
        }

        let (width, height) = ctx.gfx.drawable_size();
        let (dest, layout) = match self.position {
            Position::TopLeft => ([self.margin, self.margin], TextLayout::top_left()),
            Position::Center => ([width / 2., height / 2.], TextLayout::center()),
        };

        let mut text = Text::new(self.text.as_str());
        text.set_scale(PxScale::from(self.font_size)).set_layout(layout);

        let alpha = self.alpha(now);
        if let Some(mut shadow) = self.shadow {
            shadow.a *= alpha;
            let offset = [dest[0] + 1., dest[1] + 1.];
            canvas.draw(&text, DrawParam::default().dest(offset).color(shadow));
        }
        let mut color = self.color;
        color.a *= alpha;
        canvas.draw(&text, DrawParam::default().dest(dest).color(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistent_message_never_expires() {
        let msg = Message::default("length 1".to_owned(), Position::TopLeft, Color::WHITE, None);
        let later = Instant::now() + Duration::from_secs(3600);
        assert!(!msg.is_expired(later));
        assert_eq!(msg.alpha(later), 1.);
    }

    #[test]
    fn test_notification_fades_then_expires() {
        let msg = Message::default(
            "grid lines off".to_owned(),
            Position::TopLeft,
            Color::WHITE,
            Some(Duration::from_secs(1)),
        );
        let deadline = msg.disappear.unwrap();
        assert_eq!(msg.alpha(deadline - Duration::from_millis(500)), 1.);
        let half = msg.alpha(deadline - Duration::from_millis(100));
        assert!((half - 0.5).abs() < 1e-3, "{}", half);
        assert!(msg.is_expired(deadline));
    }

    #[test]
    fn test_overlay_has_shadow() {
        let msg = Message::overlay("GAME OVER", Color::WHITE, Color::BLACK);
        assert_eq!(msg.position, Position::Center);
        assert_eq!(msg.shadow, Some(Color::BLACK));
    }
}
