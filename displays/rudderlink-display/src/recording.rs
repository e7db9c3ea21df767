//! Host-side surface that records draw calls

use crate::surface::{DisplayError, Surface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Clear,
    Rect(i32, i32, u32, u32),
    FillRect(i32, i32, u32, u32),
    HLine(i32, i32, u32),
    VLine(i32, i32, u32),
    Line(i32, i32, i32, i32),
    Text(String, i32, i32),
    Flush,
}

/// 128 px wide surface with 8 px characters
pub struct RecordingSurface {
    pub ops: Vec<Op>,
    pub fail_flush: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            fail_flush: false,
        }
    }

    pub fn texts(&self) -> Vec<(&str, i32, i32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(t, x, y) => Some((t.as_str(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<&Op> {
        self.ops.iter().filter(|op| matches!(op, Op::Line(..))).collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.ops.push(Op::Clear);
        Ok(())
    }

    fn rect(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), DisplayError> {
        self.ops.push(Op::Rect(x, y, width, height));
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32) -> Result<(), DisplayError> {
        self.ops.push(Op::FillRect(x, y, width, height));
        Ok(())
    }

    fn hline(&mut self, x: i32, y: i32, length: u32) -> Result<(), DisplayError> {
        self.ops.push(Op::HLine(x, y, length));
        Ok(())
    }

    fn vline(&mut self, x: i32, y: i32, length: u32) -> Result<(), DisplayError> {
        self.ops.push(Op::VLine(x, y, length));
        Ok(())
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<(), DisplayError> {
        self.ops.push(Op::Line(x1, y1, x2, y2));
        Ok(())
    }

    fn text(&mut self, text: &str, x: i32, y: i32) -> Result<(), DisplayError> {
        self.ops.push(Op::Text(text.to_string(), x, y));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if self.fail_flush {
            return Err(DisplayError::Communication);
        }
        self.ops.push(Op::Flush);
        Ok(())
    }

    fn char_width(&self) -> u32 {
        8
    }

    fn width(&self) -> u32 {
        128
    }
}
