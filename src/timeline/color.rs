//! HSV to CSS color conversion used for the timeline bars.

/// Convert HSV to 0-255 channels.
///
/// Uses the six-sector table without adding the `V - C` offset, and truncates
/// channels instead of rounding. Hue outside `[0, 360)` maps to black.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (u8, u8, u8) {
    let chroma = value * saturation;
    let sector = (hue / 60.0).floor();
    let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());

    let (r, g, b) = if !(0.0..6.0).contains(&sector) {
        (0.0, 0.0, 0.0)
    } else {
        match sector as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        }
    };

    (channel(r), channel(g), channel(b))
}

/// `RGB(r,g,b)`, the form the bar styles embed.
pub fn to_color(hue: f64, saturation: f64, value: f64) -> String {
    let (r, g, b) = hsv_to_rgb(hue, saturation, value);
    format!("RGB({},{},{})", r, g, b)
}

fn channel(level: f64) -> u8 {
    // `as` truncates toward zero and saturates at the u8 bounds
    (level * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(to_color(0.0, 1.0, 1.0), "RGB(255,0,0)");
        assert_eq!(to_color(120.0, 1.0, 1.0), "RGB(0,255,0)");
        assert_eq!(to_color(240.0, 1.0, 1.0), "RGB(0,0,255)");
    }

    #[test]
    fn test_each_sector() {
        assert_eq!(hsv_to_rgb(30.0, 1.0, 1.0), (255, 127, 0));
        assert_eq!(hsv_to_rgb(90.0, 1.0, 1.0), (127, 255, 0));
        assert_eq!(hsv_to_rgb(150.0, 1.0, 1.0), (0, 255, 127));
        assert_eq!(hsv_to_rgb(210.0, 1.0, 1.0), (0, 127, 255));
        assert_eq!(hsv_to_rgb(270.0, 1.0, 1.0), (127, 0, 255));
        assert_eq!(hsv_to_rgb(330.0, 1.0, 1.0), (255, 0, 127));
    }

    #[test]
    fn test_bar_colors() {
        // 0.95 * 0.95 * 255 = 230.1375
        assert_eq!(to_color(120.0, 0.95, 0.95), "RGB(0,230,0)");
        assert_eq!(to_color(60.0, 0.95, 0.95), "RGB(230,230,0)");
        assert_eq!(to_color(0.0, 0.95, 0.95), "RGB(230,0,0)");
        // 0.9 * 0.9 * 255 = 206.55
        assert_eq!(to_color(120.0, 0.9, 0.9), "RGB(0,206,0)");
    }

    #[test]
    fn test_no_value_offset() {
        // Standard HSV would lift every channel by V - C.
        assert_eq!(to_color(0.0, 0.5, 1.0), "RGB(127,0,0)");
        assert_eq!(to_color(0.0, 0.0, 1.0), "RGB(0,0,0)");
    }

    #[test]
    fn test_out_of_range_hue_is_black() {
        assert_eq!(to_color(360.0, 1.0, 1.0), "RGB(0,0,0)");
        assert_eq!(to_color(-1.0, 1.0, 1.0), "RGB(0,0,0)");
        assert_eq!(to_color(f64::NAN, 1.0, 1.0), "RGB(0,0,0)");
    }

    #[test]
    fn test_channels_stay_in_range() {
        let mut hue = 0.0;
        while hue < 360.0 {
            for s in [0.0, 0.25, 0.5, 0.9, 1.0] {
                for v in [0.0, 0.3, 0.95, 1.0] {
                    let (r, g, b) = hsv_to_rgb(hue, s, v);
                    let max = (s * v * 255.0) as u8;
                    assert!(r <= max && g <= max && b <= max, "hue {hue} s {s} v {v}");
                }
            }
            hue += 7.5;
        }
    }
}
