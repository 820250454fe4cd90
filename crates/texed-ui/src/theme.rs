//! Colours, font metrics and cursor shapes.
//!
//! The core only knows the current [`EditorMode`]; which shape that mode is
//! drawn with is decided here.

use iced::Color;
use texed_buffer::CellSize;
use texed_core::config::{ColorConfig, Rgb};
use texed_core::EditorMode;

/// Colours resolved from the config, ready for iced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub cursor: Color,
    pub alt_foreground: Color,
    pub border: Color,
    /// Alpha of the filled block cursor
    pub block_alpha: f32,
}

impl Palette {
    pub fn from_config(colors: &ColorConfig) -> Self {
        Self {
            background: to_iced(colors.background),
            foreground: to_iced(colors.foreground),
            cursor: to_iced(colors.cursor),
            alt_foreground: to_iced(colors.alt_foreground),
            border: to_iced(colors.border),
            block_alpha: colors.block_alpha(),
        }
    }

    /// Cursor colour for a shape; only the block is translucent.
    pub fn cursor_fill(&self, shape: CursorShape) -> Color {
        match shape {
            CursorShape::Block => Color {
                a: self.block_alpha,
                ..self.cursor
            },
            CursorShape::Beam => self.cursor,
            CursorShape::Hollow => Color::TRANSPARENT,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_config(&ColorConfig::default())
    }
}

fn to_iced(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

/// How the cursor is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorShape {
    /// Outlined cell
    Hollow,
    /// Thin vertical bar before the cell
    Beam,
    /// Filled translucent cell
    Block,
}

impl CursorShape {
    pub fn for_mode(mode: EditorMode) -> Self {
        match mode {
            EditorMode::Normal | EditorMode::Visual => CursorShape::Hollow,
            EditorMode::Insert => CursorShape::Beam,
            EditorMode::Command => CursorShape::Block,
        }
    }
}

/// Monospace cell metrics derived from the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub font_size: f32,
    pub cell: CellSize,
}

impl Metrics {
    /// Advance width of a monospace glyph, relative to the font size
    const ADVANCE: f32 = 0.6;
    /// Line height, relative to the font size
    const LINE_HEIGHT: f32 = 1.3;

    pub fn new(font_size: f32) -> Self {
        let font_size = font_size.max(1.0);
        Self {
            font_size,
            cell: CellSize::new(font_size * Self::ADVANCE, font_size * Self::LINE_HEIGHT),
        }
    }

    /// Number of whole lines that fit in `height` pixels (at least one).
    pub fn rows_for_height(&self, height: f32) -> usize {
        ((height / self.cell.height).floor() as usize).max(1)
    }
}
