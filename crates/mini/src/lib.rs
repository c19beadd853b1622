#![no_std]

//! `blocklet-mini` is a compact font for the `blocklet` crate: block
//! glyphs in a 3x3 cell, for banners that have to fit somewhere small.
//!
//! The alphabet matches `blocklet-standard`; lookup is case-insensitive
//! with the `?` glyph as the fallback.

extern crate alloc;

use blocklet_core::{Glyph, GlyphTable};

include!(concat!(env!("OUT_DIR"), "/mini_font.rs"));

/// The compact blocklet font.
pub struct MiniFont;

impl GlyphTable for MiniFont {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_dimensions() {
        assert_eq!(MiniFont.height(), 3);
        assert_eq!(MiniFont.width(), 3);
    }

    #[test]
    fn every_glyph_fits_the_cell() {
        for entry in GLYPHS.iter().flatten() {
            assert_eq!(entry.rows.len(), HEIGHT);
            for &row in entry.rows {
                assert!(row < (1 << WIDTH) as u16);
            }
        }
    }

    #[test]
    fn alphabet_matches_the_standard_font() {
        for ch in ('A'..='Z').chain('0'..='9').chain(" !?.,".chars()) {
            assert!(GLYPHS[ch as usize].is_some(), "missing glyph for {ch:?}");
        }
    }

    #[test]
    fn unsupported_characters_fall_back_to_question_mark() {
        assert_eq!(MiniFont.glyph('%').rows, MiniFont.glyph('?').rows);
    }
}
