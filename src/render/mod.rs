// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Calgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text rendering for month layouts.
//!
//! The engine itself never draws; this is the reference renderer the CLI prints. It lays the
//! month out on a [`Canvas`] of character cells, with box-drawing rules for the grid and one
//! text line per lane.

use std::fmt;

use thiserror::Error;

pub mod month;
mod text;

pub use month::{render_month_text, RenderError, RenderOptions, MIN_CELL_WIDTH};

pub const RULE_HORIZONTAL: char = '─';
pub const RULE_VERTICAL: char = '│';

/// Which neighbours a rule cell connects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Joins(u8);

impl Joins {
    const LEFT: u8 = 1;
    const RIGHT: u8 = 2;
    const UP: u8 = 4;
    const DOWN: u8 = 8;

    fn has(self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    fn glyph(self) -> char {
        const GLYPHS: [char; 16] = [
            ' ', '─', '─', '─', '│', '┘', '└', '┴', '│', '┐', '┌', '┬', '│', '┤', '├', '┼',
        ];
        GLYPHS[usize::from(self.0 & 0x0f)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Char(char),
    Rule(Joins),
}

/// A fixed-size grid of characters.
///
/// Plain characters overwrite whatever is underneath. Rules drawn with [`Canvas::hrule`] and
/// [`Canvas::vrule`] accumulate instead, and each rule cell is rendered as the junction of the
/// neighbouring rule cells it actually touches (`┌`, `┬`, `┼`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let len = width.checked_mul(height).ok_or(CanvasError::AreaOverflow { width, height })?;
        Ok(Self { width, height, cells: vec![Cell::Char(' '); len] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.glyph_at(x, y, idx))
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        self.cells[idx] = Cell::Char(ch);
        Ok(())
    }

    /// Writes `text` left to right from `(x, y)`, clipped at the right edge.
    pub fn write_str(&mut self, x: usize, y: usize, text: &str) -> Result<(), CanvasError> {
        self.index_of(x.min(self.width.saturating_sub(1)), y)?;
        for (offset, ch) in text.chars().enumerate() {
            let Some(cx) = x.checked_add(offset).filter(|cx| *cx < self.width) else {
                break;
            };
            self.set(cx, y, ch)?;
        }
        Ok(())
    }

    /// Horizontal rule over `x0..=x1` on row `y`.
    pub fn hrule(&mut self, x0: usize, x1: usize, y: usize) -> Result<(), CanvasError> {
        let (from, to) = (x0.min(x1), x0.max(x1));
        self.index_of(from, y)?;
        self.index_of(to, y)?;
        for x in from..=to {
            self.add_joins(x, y, Joins::LEFT | Joins::RIGHT);
        }
        Ok(())
    }

    /// Vertical rule over `y0..=y1` in column `x`.
    pub fn vrule(&mut self, x: usize, y0: usize, y1: usize) -> Result<(), CanvasError> {
        let (from, to) = (y0.min(y1), y0.max(y1));
        self.index_of(x, from)?;
        self.index_of(x, to)?;
        for y in from..=to {
            self.add_joins(x, y, Joins::UP | Joins::DOWN);
        }
        Ok(())
    }

    fn add_joins(&mut self, x: usize, y: usize, bits: u8) {
        let idx = y * self.width + x;
        self.cells[idx] = match self.cells[idx] {
            Cell::Rule(joins) => Cell::Rule(Joins(joins.0 | bits)),
            Cell::Char(_) => Cell::Rule(Joins(bits)),
        };
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if x >= self.width || y >= self.height {
            return Err(CanvasError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        Ok(y * self.width + x)
    }

    fn joins_at(&self, x: usize, y: usize) -> Joins {
        match self.cells[y * self.width + x] {
            Cell::Rule(joins) => joins,
            Cell::Char(_) => Joins::default(),
        }
    }

    fn glyph_at(&self, x: usize, y: usize, idx: usize) -> char {
        let joins = match self.cells[idx] {
            Cell::Char(ch) => return ch,
            Cell::Rule(joins) => joins,
        };

        let mut touching = 0;
        if joins.has(Joins::LEFT) && x > 0 && self.joins_at(x - 1, y).has(Joins::RIGHT) {
            touching |= Joins::LEFT;
        }
        if joins.has(Joins::RIGHT) && x + 1 < self.width && self.joins_at(x + 1, y).has(Joins::LEFT)
        {
            touching |= Joins::RIGHT;
        }
        if joins.has(Joins::UP) && y > 0 && self.joins_at(x, y - 1).has(Joins::DOWN) {
            touching |= Joins::UP;
        }
        if joins.has(Joins::DOWN) && y + 1 < self.height && self.joins_at(x, y + 1).has(Joins::UP)
        {
            touching |= Joins::DOWN;
        }

        if touching == 0 {
            joins.glyph()
        } else {
            Joins(touching).glyph()
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..self.width {
                f.write_char(self.glyph_at(x, y, y * self.width + x))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("canvas area overflow: {width}*{height}")]
    AreaOverflow { width: usize, height: usize },
    #[error("out of bounds: ({x},{y}) for {width}x{height} canvas")]
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
}
