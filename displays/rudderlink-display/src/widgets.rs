//! Reusable drawing primitives

use crate::surface::{DisplayError, Surface};

/// Level indicator style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indication {
    /// 3-pixel marker at the level
    Line,
    /// Filled from the origin up to the level
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Grows left to right
    Horizontal,
    /// Grows bottom to top
    Vertical,
}

/// Draw a level indicator for `perc` in `[0, 1]`
///
/// `(x, y)` is the top-left corner; `length` runs along the orientation and
/// `width` across it. Values outside `[0, 1]` are clamped.
#[allow(clippy::too_many_arguments)]
pub fn level_indicator<S: Surface + ?Sized>(
    surface: &mut S,
    perc: f64,
    x: i32,
    y: i32,
    length: u32,
    width: u32,
    indication: Indication,
    orientation: Orientation,
) -> Result<(), DisplayError> {
    let perc = if perc.is_nan() { 0.0 } else { perc.clamp(0.0, 1.0) };
    let level = (perc * f64::from(length)) as u32;
    let len = length as i32;
    let lvl = level as i32;

    match orientation {
        Orientation::Horizontal => {
            surface.rect(x, y, length, width)?;
            match indication {
                Indication::Bar => surface.fill_rect(x, y, level, width)?,
                Indication::Line => {
                    surface.vline(x + lvl, y, width)?;
                    if level != 0 {
                        surface.vline(x + lvl - 1, y, width)?;
                    }
                    if level != length {
                        surface.vline(x + lvl + 1, y, width)?;
                    }
                }
            }
        }
        Orientation::Vertical => {
            surface.rect(x, y, width, length)?;
            let top = y + len - lvl;
            match indication {
                Indication::Bar => surface.fill_rect(x, top, width, level)?,
                Indication::Line => {
                    surface.hline(x, top, width)?;
                    if level != 0 {
                        surface.hline(x, top - 1, width)?;
                    }
                    if level != length {
                        surface.hline(x, top + 1, width)?;
                    }
                }
            }
        }
    }
    Ok(())
}

/// End point of a vector of `length` pixels from `(x, y)`
///
/// The angle is in degrees, counter-clockwise from the +x axis. Screen y
/// grows downward, so positive angles move up.
pub fn vector_endpoint(x: i32, y: i32, length: u32, angle_deg: f64) -> (i32, i32) {
    let rad = angle_deg.to_radians();
    let len = f64::from(length);
    let dx = (libm::cos(rad) * len) as i32;
    let dy = (-libm::sin(rad) * len) as i32;
    (x + dx, y + dy)
}

pub fn draw_vector<S: Surface + ?Sized>(
    surface: &mut S,
    x: i32,
    y: i32,
    length: u32,
    angle_deg: f64,
) -> Result<(), DisplayError> {
    let (x2, y2) = vector_endpoint(x, y, length, angle_deg);
    surface.line(x, y, x2, y2)
}

/// Left edge that centers `text` on a surface `screen_width` pixels wide
pub fn centered_text_x(text: &str, char_width: u32, screen_width: u32) -> i32 {
    let text_width = text.chars().count() as i32 * char_width as i32;
    (screen_width as i32 - text_width) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{Op, RecordingSurface};

    #[test]
    fn test_horizontal_line_indicator_mid() {
        let mut s = RecordingSurface::new();
        level_indicator(&mut s, 0.5, 32, 16, 64, 8, Indication::Line, Orientation::Horizontal).unwrap();
        assert_eq!(
            s.ops,
            vec![
                Op::Rect(32, 16, 64, 8),
                Op::VLine(64, 16, 8),
                Op::VLine(63, 16, 8),
                Op::VLine(65, 16, 8),
            ]
        );
    }

    #[test]
    fn test_horizontal_line_indicator_ends() {
        let mut s = RecordingSurface::new();
        level_indicator(&mut s, 0.0, 32, 16, 64, 8, Indication::Line, Orientation::Horizontal).unwrap();
        assert_eq!(s.ops, vec![Op::Rect(32, 16, 64, 8), Op::VLine(32, 16, 8), Op::VLine(33, 16, 8)]);

        let mut s = RecordingSurface::new();
        level_indicator(&mut s, 1.0, 32, 16, 64, 8, Indication::Line, Orientation::Horizontal).unwrap();
        assert_eq!(s.ops, vec![Op::Rect(32, 16, 64, 8), Op::VLine(96, 16, 8), Op::VLine(95, 16, 8)]);
    }

    #[test]
    fn test_horizontal_bar() {
        let mut s = RecordingSurface::new();
        level_indicator(&mut s, 0.25, 0, 0, 100, 10, Indication::Bar, Orientation::Horizontal).unwrap();
        assert_eq!(s.ops, vec![Op::Rect(0, 0, 100, 10), Op::FillRect(0, 0, 25, 10)]);
    }

    #[test]
    fn test_vertical_bar_grows_up() {
        let mut s = RecordingSurface::new();
        level_indicator(&mut s, 0.25, 10, 0, 40, 6, Indication::Bar, Orientation::Vertical).unwrap();
        assert_eq!(s.ops, vec![Op::Rect(10, 0, 6, 40), Op::FillRect(10, 30, 6, 10)]);
    }

    #[test]
    fn test_vertical_line() {
        let mut s = RecordingSurface::new();
        level_indicator(&mut s, 0.5, 0, 0, 40, 6, Indication::Line, Orientation::Vertical).unwrap();
        assert_eq!(
            s.ops,
            vec![Op::Rect(0, 0, 6, 40), Op::HLine(0, 20, 6), Op::HLine(0, 19, 6), Op::HLine(0, 21, 6)]
        );
    }

    #[test]
    fn test_indicator_clamps() {
        let mut s = RecordingSurface::new();
        level_indicator(&mut s, 3.0, 0, 0, 10, 2, Indication::Bar, Orientation::Horizontal).unwrap();
        assert_eq!(s.ops[1], Op::FillRect(0, 0, 10, 2));
    }

    #[test]
    fn test_vector_directions() {
        assert_eq!(vector_endpoint(64, 32, 32, 0.0), (96, 32));
        assert_eq!(vector_endpoint(64, 32, 32, 90.0), (64, 0));
        assert_eq!(vector_endpoint(64, 32, 32, -90.0), (64, 64));
        assert_eq!(vector_endpoint(64, 32, 32, 180.0), (32, 32));
    }

    #[test]
    fn test_draw_vector() {
        let mut s = RecordingSurface::new();
        draw_vector(&mut s, 64, 32, 32, -90.0).unwrap();
        assert_eq!(s.ops, vec![Op::Line(64, 32, 64, 64)]);
    }

    #[test]
    fn test_centered_text() {
        assert_eq!(centered_text_x("Null", 8, 128), 48);
        assert_eq!(centered_text_x("-27.7", 8, 128), 44);
        assert_eq!(centered_text_x("", 8, 128), 64);
    }
}
