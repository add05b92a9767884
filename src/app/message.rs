use crate::basic::Point;
use ggez::graphics::{Canvas, Color, DrawParam, PxScale, Text, TextAlign, TextLayout};
use std::time::{Duration, Instant};

/// Layouts ggez doesn't provide
pub trait TextLayoutExtension {
    fn top_right() -> Self;
}

impl TextLayoutExtension for TextLayout {
    fn top_right() -> Self {
        TextLayout {
            h_align: TextAlign::End,
            v_align: TextAlign::Begin,
        }
    }
}

/// Finite number of possible messages
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum MessageID {
    /// Current snake length, always shown
    Length,
    /// Temporary info when toggling the grid or
    /// starting and stopping
    Notification,
    /// Final length, shown over the board
    GameOver,
}

#[derive(Copy, Clone, Debug)]
pub enum Anchor {
    TopLeft(Point),
    TopRight(Point),
    Center(Point),
}

impl Anchor {
    /// Position and alignment of the text
    pub fn placement(self) -> (Point, TextLayout) {
        match self {
            Anchor::TopLeft(p) => (p, TextLayout::top_left()),
            Anchor::TopRight(p) => (p, TextLayout::top_right()),
            Anchor::Center(p) => (p, TextLayout::center()),
        }
    }
}

pub struct Message {
    pub text: String,
    pub anchor: Anchor,
    pub font_size: f32,
    pub color: Color,
    // None means unlimited duration
    pub disappear: Option<Instant>,
}

impl Message {
    pub const DEFAULT_FONT_SIZE: f32 = 24.;
    pub const FADE_MILLIS: u128 = 200;

    pub fn new(text: String, anchor: Anchor, color: Color, duration: Option<Duration>) -> Self {
        Self {
            text,
            anchor,
            font_size: Self::DEFAULT_FONT_SIZE,
            color,
            disappear: duration.map(|d| Instant::now() + d),
        }
    }

    #[must_use]
    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Color at `now`, None once the message has reached its end of life
    pub fn color_at(&self, now: Instant) -> Option<Color> {
        let mut color = self.color;
        if let Some(deadline) = self.disappear {
            let time_left = deadline.checked_duration_since(now)?;
            let millis = time_left.as_millis();
            if millis < Self::FADE_MILLIS {
                // linear fade out
                color.a *= millis as f32 / Self::FADE_MILLIS as f32;
            }
        }
        Some(color)
    }

    /// Returns false if the message has expired and should be removed
    pub fn draw(&self, canvas: &mut Canvas) -> bool {
        let color = match self.color_at(Instant::now()) {
            Some(color) => color,
            None => return false,
        };

        let (dest, layout) = self.anchor.placement();

        let mut text = Text::new(self.text.as_str());
        text.set_scale(PxScale::from(self.font_size)).set_layout(layout);

        canvas.draw(&text, DrawParam::default().dest(dest).color(color));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_and_expiry() {
        let message = Message::new(
            "Grid on".to_string(),
            Anchor::TopRight(Point::zero()),
            Color::WHITE,
            Some(Duration::from_secs(2)),
        );
        let deadline = message.disappear.expect("has a deadline");

        let early = message.color_at(deadline - Duration::from_secs(1)).expect("visible");
        assert_eq!(early.a, 1.);

        let fading = message.color_at(deadline - Duration::from_millis(100)).expect("visible");
        assert!(fading.a > 0. && fading.a < 1., "{}", fading.a);

        assert!(message.color_at(deadline + Duration::from_millis(1)).is_none());
    }

    #[test]
    fn test_top_right_anchor_aligns_end() {
        let pos = Point { x: 300., y: 20. };
        let (dest, layout) = Anchor::TopRight(pos).placement();
        assert_eq!(dest, pos);
        assert!(matches!(layout.h_align, TextAlign::End));
        assert!(matches!(layout.v_align, TextAlign::Begin));

        let (_, layout) = Anchor::TopLeft(pos).placement();
        assert!(matches!(layout.h_align, TextAlign::Begin));
    }

    #[test]
    fn test_persistent_message_never_expires() {
        let message = Message::new("Length: 3".to_string(), Anchor::TopLeft(Point::zero()), Color::WHITE, None);
        let far = Instant::now() + Duration::from_secs(3600);
        assert_eq!(message.color_at(far).map(|c| c.a), Some(1.));
    }
}
