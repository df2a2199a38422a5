mod hsv;
mod utils;

use smart_leds::RGB8;

pub use hsv::{color_hsv, color_hue};
pub use utils::{color, rgb_from_u32, rgb_to_u32};

pub type Rgb = RGB8;
