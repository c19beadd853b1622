#![no_std]

//! `blocklet` is a library for rendering text as ASCII art built from
//! Unicode block characters.
//!
//! Glyphs come from fixed-cell bitmap fonts, so every output row of a
//! rendered line has the same length and rows of adjacent characters
//! always align. Rendering is total: characters outside a font's alphabet
//! render as its fallback glyph, and empty input produces empty output.
//!
//! The library supports `no_std` environments but requires an allocator.
//!
//! Supported fonts:
//! - `standard`, solid blocks in a 7x5 cell, via [blocklet_standard]
//! - `mini`, a compact 3x3 cell, via [blocklet_mini]
//!
//! This library provides the render_text function which you can use to
//! render text, e.g.:
//!
//! ```
//! use blocklet::{render_text, BlockFont, RenderOptions};
//!
//! let art = render_text("HELLO", BlockFont::Standard, &RenderOptions::default());
//! ```

pub use blocklet_core::{
    FULL_BLOCK, Glyph, GlyphTable, LIGHT_SHADE, RenderOptions, RenderedDocument, RenderedLine,
    WrapMode, render_document, render_line,
};
pub use blocklet_mini::MiniFont;
pub use blocklet_standard::StandardFont;

extern crate alloc;

/// A font using any of the supported block-art cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BlockFont {
    Standard,
    Mini,
}

impl BlockFont {
    /// The glyph table backing this font.
    pub fn table(self) -> &'static dyn GlyphTable {
        match self {
            BlockFont::Standard => &StandardFont,
            BlockFont::Mini => &MiniFont,
        }
    }
}

/// Render the given text string to block art using the specified font.
pub fn render_text(text: &str, font: BlockFont, options: &RenderOptions) -> RenderedDocument {
    render_document(text, font.table(), options)
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn test_render_single_character() {
        let line = render_line("T", &StandardFont, &RenderOptions::default());
        assert_eq!(
            line.rows(),
            &[" █████ ", "   █   ", "   █   ", "   █   ", "   █   "]
        );
    }

    #[test]
    fn test_render_simple_word() {
        let output = render_text("HI", BlockFont::Standard, &RenderOptions::default());
        assert!(output.to_string().contains('█'));
    }

    #[test]
    fn test_render_hello_contains_blocks() {
        // The behavior the packaging smoke test asserts.
        let output = render_text("HELLO", BlockFont::Standard, &RenderOptions::default());
        assert!(output.to_string().contains('█'));
    }

    #[test]
    fn test_render_with_numbers() {
        let output = render_text("TEST123", BlockFont::Standard, &RenderOptions::default());
        assert!(output.to_string().contains('█'));
    }

    #[test]
    fn test_empty_text() {
        let output = render_text("", BlockFont::Standard, &RenderOptions::default());
        assert!(output.is_empty());
        assert_eq!(output.to_string(), "");
    }

    #[test]
    fn test_single_line_height() {
        let output = render_text("HI", BlockFont::Standard, &RenderOptions::default());
        assert_eq!(output.lines().len(), 1);
        assert_eq!(output.lines()[0].rows().len(), 5);
    }

    #[test]
    fn test_pair_width_is_two_cells_plus_gap() {
        let output = render_text("AB", BlockFont::Standard, &RenderOptions::default());
        assert_eq!(output.lines()[0].width(), 2 * 7 + 1);
    }

    #[test]
    fn test_word_wrapping() {
        let options = RenderOptions {
            max_width: Some(20),
            wrap: WrapMode::Words,
            ..RenderOptions::default()
        };
        let output = render_text("HELLO WORLD", BlockFont::Standard, &options);

        assert!(output.lines().len() > 1);
        for line in output.lines() {
            assert!(line.width() <= 20);
        }
    }

    #[test]
    fn test_unsupported_characters_never_fail() {
        let output = render_text("@@@", BlockFont::Standard, &RenderOptions::default());
        assert_eq!(output.lines().len(), 1);
        // Fallback glyph for each position, so the row length is unchanged.
        assert_eq!(output.lines()[0].width(), 3 * 7 + 2);
    }

    #[test]
    fn test_render_with_shadow() {
        let options = RenderOptions {
            shadow: true,
            ..RenderOptions::default()
        };
        let output = render_text("HI", BlockFont::Standard, &options);
        let text = output.to_string();

        assert!(text.contains('█'));
        assert!(text.contains('░'));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_render_without_shadow() {
        let output = render_text("HI", BlockFont::Standard, &RenderOptions::default());
        let text = output.to_string();

        assert!(text.contains('█'));
        assert!(!text.contains('░'));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_mini_font_renders() {
        let output = render_text("HELLO", BlockFont::Mini, &RenderOptions::default());
        assert_eq!(output.lines()[0].rows().len(), 3);
        assert!(output.to_string().contains('█'));
    }

    #[test]
    fn test_determinism() {
        let options = RenderOptions {
            max_width: Some(25),
            shadow: true,
            wrap: WrapMode::Words,
            ..RenderOptions::default()
        };
        let first = render_text("HELLO WORLD!", BlockFont::Standard, &options);
        let second = render_text("HELLO WORLD!", BlockFont::Standard, &options);
        assert_eq!(first, second);
    }
}
