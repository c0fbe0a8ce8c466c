//! Capability traits for the display and touch-input collaborators.
//!
//! The engine draws in absolute screen pixels and erases (a draw in the
//! background color) before every redraw of anything that moved — there
//! is no double buffering on the target hardware this models.

use barrage_core::types::{Color, Vec2};

/// Display primitives the simulation issues each tick.
pub trait Display {
    fn fill_screen(&mut self, color: Color);
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color);
    fn fill_circle(&mut self, x: i32, y: i32, radius: i32, color: Color);
    #[allow(clippy::too_many_arguments)]
    fn fill_triangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32, color: Color);
    fn set_text_size(&mut self, size: u8);
    fn set_text_color(&mut self, color: Color);
    fn set_cursor(&mut self, x: i32, y: i32);
    fn print(&mut self, text: &str);
}

/// Touch panel reporting completed press/release events.
///
/// The engine calls `acknowledge` exactly once per consumed release;
/// `released` must report false afterwards until the next release.
pub trait TouchPanel {
    fn released(&self) -> bool;
    fn location(&self) -> Vec2;
    fn acknowledge(&mut self);
}

/// No-op display for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullDisplay;

impl Display for NullDisplay {
    fn fill_screen(&mut self, _color: Color) {}
    fn draw_line(&mut self, _x0: i32, _y0: i32, _x1: i32, _y1: i32, _color: Color) {}
    fn fill_circle(&mut self, _x: i32, _y: i32, _radius: i32, _color: Color) {}
    fn fill_triangle(
        &mut self,
        _x0: i32,
        _y0: i32,
        _x1: i32,
        _y1: i32,
        _x2: i32,
        _y2: i32,
        _color: Color,
    ) {
    }
    fn set_text_size(&mut self, _size: u8) {}
    fn set_text_color(&mut self, _color: Color) {}
    fn set_cursor(&mut self, _x: i32, _y: i32) {}
    fn print(&mut self, _text: &str) {}
}

/// Touch panel that never reports a release.
#[derive(Debug, Default)]
pub struct NullTouch;

impl TouchPanel for NullTouch {
    fn released(&self) -> bool {
        false
    }

    fn location(&self) -> Vec2 {
        Vec2::ZERO
    }

    fn acknowledge(&mut self) {}
}
