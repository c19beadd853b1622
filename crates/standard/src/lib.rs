#![no_std]

//! `blocklet-standard` is the standard font for the `blocklet` crate:
//! solid block glyphs in a 7x5 cell.
//!
//! The alphabet covers `A`-`Z`, `0`-`9`, space, and basic punctuation
//! (`!`, `?`, `.`, `,`). Lookup is case-insensitive, and characters outside
//! the alphabet render as the `?` glyph.

extern crate alloc;

use blocklet_core::{Glyph, GlyphTable};

include!(concat!(env!("OUT_DIR"), "/standard_font.rs"));

/// The standard blocklet font.
pub struct StandardFont;

impl GlyphTable for StandardFont {
    fn height(&self) -> usize {
        HEIGHT
    }

    fn width(&self) -> usize {
        WIDTH
    }

    fn glyph(&self, ch: char) -> Glyph {
        let idx = ch.to_ascii_uppercase() as usize;
        match GLYPHS.get(idx) {
            Some(Some(glyph)) => *glyph,
            _ => FALLBACK,
        }
    }
}
