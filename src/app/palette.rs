use ggez::graphics::Color;
use hsl::HSL;
use lazy_static::lazy_static;

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
    static ref DEFAULT_BOARD_COLOR: Color = Color::from_rgb(249, 168, 212);
    static ref DEFAULT_FOOD_COLOR: Color = Color::from_rgb(220, 38, 38);
    static ref DEFAULT_CRASHED_COLOR: Color = Color::from_rgb(255, 0, 128);
}

pub struct Palette {
    pub background_color: Color,
    pub board_color: Color,
    pub grid_color: Color,
    pub grid_thickness: f32,
    pub food_color: Color,
    pub crashed_color: Color,
    pub text_color: Color,
    pub overlay_color: Color,
    pub button_color: Color,
    pub button_disabled_color: Color,

    /// Hue of the head and of the tail, the body
    /// fades between the two
    pub snake_hues: (f64, f64),
    pub snake_lightness: f64,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background_color: gray!(0.1),
            board_color: *DEFAULT_BOARD_COLOR,
            grid_color: Color::new(0., 0., 0., 0.08),
            grid_thickness: 1.,
            food_color: *DEFAULT_FOOD_COLOR,
            crashed_color: *DEFAULT_CRASHED_COLOR,
            text_color: Color::WHITE,
            overlay_color: Color::new(0., 0., 0., 0.6),
            button_color: gray!(0.85),
            button_disabled_color: gray!(0.4),

            snake_hues: (260., 300.),
            snake_lightness: 0.15,
        }
    }

    /// Color of segment `seg` of a snake of length `len`, head is 0
    pub fn segment_color(&self, seg: usize, len: usize) -> Color {
        let (head_hue, tail_hue) = self.snake_hues;
        let ratio = if len > 1 { seg as f64 / (len - 1) as f64 } else { 0. };
        let hsl = HSL {
            h: head_hue + (tail_hue - head_hue) * ratio,
            s: 0.6,
            l: self.snake_lightness + 0.2 * ratio,
        };
        let (r, g, b) = hsl.to_rgb();
        Color::from_rgb(r, g, b)
    }
}

#[test]
fn test_segment_gradient() {
    let palette = Palette::dark();
    let head = palette.segment_color(0, 10);
    let tail = palette.segment_color(9, 10);
    assert_ne!(head, tail);
    // single segment snakes use the head color
    assert_eq!(palette.segment_color(0, 1), head);
    // the tail is lighter than the head
    assert!(tail.r + tail.g + tail.b > head.r + head.g + head.b);
}
