#![no_std]

//! `blocklet-core` provides the glyph primitives and the rendering engine
//! shared by the `blocklet` font crates.
//!
//! A font is a fixed-cell bitmap: every glyph occupies the same number of
//! rows and columns, so rows of adjacent glyphs always line up. Rendering
//! is a pure function of the glyph table and the input text.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

extern crate alloc;

/// The display character for a filled bitmap cell.
pub const FULL_BLOCK: char = '█';

/// The display character for a drop-shadow cell.
pub const LIGHT_SHADE: char = '░';

/// A single glyph (character) contained within a font.
///
/// Each entry in `rows` is the bitmask for one bitmap row; for a font with
/// cell width `W`, bit `W - 1 - c` set means column `c` is filled.
#[derive(Debug, Copy, Clone)]
pub struct Glyph {
    /// Row bitmasks, top row first.
    pub rows: &'static [u16],
}

impl Glyph {
    /// Is the cell at the given row and column filled?
    /// Out-of-range coordinates are empty.
    pub fn filled(&self, row: usize, col: usize, width: usize) -> bool {
        match self.rows.get(row) {
            Some(bits) if col < width => bits >> (width - 1 - col) & 1 == 1,
            _ => false,
        }
    }
}

/// A fixed-cell bitmap font.
///
/// Lookup is total: every character maps to some glyph, with characters
/// outside the font's alphabet mapping to a designated fallback glyph.
/// Implementors back this with `'static` tables, so a table can be shared
/// freely across threads without locking.
pub trait GlyphTable {
    /// Cell height, in bitmap rows.
    fn height(&self) -> usize;

    /// Cell width, in bitmap columns.
    fn width(&self) -> usize;

    /// The glyph for `ch`, or the fallback glyph if the font has no entry.
    fn glyph(&self, ch: char) -> Glyph;
}

/// How the document renderer breaks a line that exceeds the maximum width.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WrapMode {
    /// Split into fixed-size character chunks.
    Characters,
    /// Greedy word wrap on whitespace. A word too long for one chunk
    /// falls back to character chunks.
    Words,
}

/// Options controlling a render.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Maximum rendered width in output columns, or `None` for no limit.
    pub max_width: Option<usize>,
    /// Number of blank columns between adjacent glyphs.
    pub spacing: usize,
    /// Add a drop shadow below and to the right of filled cells.
    pub shadow: bool,
    /// Line-breaking policy when `max_width` is set.
    pub wrap: WrapMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_width: None,
            spacing: 1,
            shadow: false,
            wrap: WrapMode::Characters,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Cell {
    Empty,
    Solid,
    Shade,
}

/// One input line rendered to a block of output rows.
///
/// Every row has the same character length, so rendered lines can be
/// stacked or concatenated without re-measuring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    rows: Vec<String>,
}

impl RenderedLine {
    /// The output rows, top to bottom.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Rendered width in output columns.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.chars().count())
    }
}

/// A full input rendered to an ordered sequence of [RenderedLine]s.
///
/// Displaying a document joins each line's rows with newlines and places
/// one blank row between consecutive lines, with no trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    lines: Vec<RenderedLine>,
}

impl RenderedDocument {
    /// The rendered lines, in input order.
    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    /// Does this document contain no lines at all?
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl core::fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            for (j, row) in line.rows.iter().enumerate() {
                if j > 0 {
                    f.write_str("\n")?;
                }
                f.write_str(row)?;
            }
        }
        Ok(())
    }
}

/// Render one line of text into a block of output rows.
///
/// Glyphs are laid out left to right with `options.spacing` blank columns
/// between them. An empty line yields `height` empty rows.
pub fn render_line<F: GlyphTable + ?Sized>(
    line: &str,
    font: &F,
    options: &RenderOptions,
) -> RenderedLine {
    let height = font.height();
    let width = font.width();

    let chars: Vec<char> = line.chars().collect();
    if chars.is_empty() {
        return RenderedLine {
            rows: vec![String::new(); height],
        };
    }

    let cols = chars.len() * width + (chars.len() - 1) * options.spacing;
    let mut grid = vec![vec![Cell::Empty; cols]; height];

    for (i, &ch) in chars.iter().enumerate() {
        let glyph = font.glyph(ch);
        let origin = i * (width + options.spacing);

        for (row, cells) in grid.iter_mut().enumerate() {
            for col in 0..width {
                if glyph.filled(row, col, width) {
                    cells[origin + col] = Cell::Solid;
                }
            }
        }
    }

    if options.shadow {
        drop_shadow(&mut grid);
    }

    RenderedLine { rows: paint(&grid) }
}

/// Extend the grid by one row and one column, shading every empty cell
/// whose upper-left neighbor is solid.
fn drop_shadow(grid: &mut Vec<Vec<Cell>>) {
    for row in grid.iter_mut() {
        row.push(Cell::Empty);
    }
    let cols = grid.first().map_or(0, Vec::len);
    grid.push(vec![Cell::Empty; cols]);

    // Only solid cells cast shadows, so writing shades in place is safe.
    for row in 1..grid.len() {
        for col in 1..cols {
            if grid[row][col] == Cell::Empty && grid[row - 1][col - 1] == Cell::Solid {
                grid[row][col] = Cell::Shade;
            }
        }
    }
}

fn paint(grid: &[Vec<Cell>]) -> Vec<String> {
    grid.iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Cell::Empty => ' ',
                    Cell::Solid => FULL_BLOCK,
                    Cell::Shade => LIGHT_SHADE,
                })
                .collect()
        })
        .collect()
}

/// Render a whole input string into a document.
///
/// The input is split on line breaks first; if `options.max_width` is set,
/// each line is split further (per `options.wrap`) so that no rendered line
/// exceeds the limit. Rendering is total: empty input yields an empty
/// document and unsupported characters render via the fallback glyph.
pub fn render_document<F: GlyphTable + ?Sized>(
    text: &str,
    font: &F,
    options: &RenderOptions,
) -> RenderedDocument {
    if text.is_empty() {
        return RenderedDocument { lines: Vec::new() };
    }

    let mut lines = Vec::new();

    for raw in text.split('\n') {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        for chunk in split_line(raw, font, options) {
            lines.push(render_line(&chunk, font, options));
        }
    }

    RenderedDocument { lines }
}

/// How many input characters fit within `max_width` output columns.
/// Always at least one, so a tiny limit degrades rather than fails.
fn chars_per_chunk(max_width: usize, width: usize, spacing: usize) -> usize {
    core::cmp::max(1, (max_width + spacing) / (width + spacing))
}

fn split_line<F: GlyphTable + ?Sized>(
    line: &str,
    font: &F,
    options: &RenderOptions,
) -> Vec<String> {
    let Some(max_width) = options.max_width else {
        return vec![String::from(line)];
    };

    let per = chars_per_chunk(max_width, font.width(), options.spacing);

    match options.wrap {
        WrapMode::Characters => char_chunks(line, per),
        WrapMode::Words => word_wrap(line, per),
    }
}

fn char_chunks(line: &str, per: usize) -> Vec<String> {
    if line.is_empty() {
        return vec![String::new()];
    }

    let chars: Vec<char> = line.chars().collect();
    chars
        .chunks(per)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

fn word_wrap(line: &str, per: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in line.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > per {
            if !current.is_empty() {
                out.push(core::mem::take(&mut current));
                current_len = 0;
            }
            out.extend(char_chunks(word, per));
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= per {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            out.push(core::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
    if out.is_empty() {
        out.push(String::new());
    }

    out
}
