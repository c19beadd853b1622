use std::{fs, path::PathBuf};

/// A glyph as authored in the data file: rows of `#` (filled) and `.`.
#[derive(Debug, Clone)]
struct Glyph {
    ch: char,
    art: Vec<String>,
}

/// A parsed font data file.
#[derive(Debug)]
struct FontFile {
    height: usize,
    width: usize,
    glyphs: Vec<Glyph>,
}

/// Parse a `.blf` font definition.
///
/// The format is line-oriented: `height N` and `width N` directives,
/// `char X` record headers (`char SP` for the space character), and rows
/// of `#`/`.` art. Lines starting with `//` are comments.
fn parse(file: &str) -> FontFile {
    let mut height = 0;
    let mut width = 0;
    let mut glyphs: Vec<Glyph> = Vec::new();

    for line in file.lines() {
        let line = line.trim_end();

        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        if let Some(value) = line.strip_prefix("height ") {
            height = value.trim().parse().expect("invalid height directive");
        } else if let Some(value) = line.strip_prefix("width ") {
            width = value.trim().parse().expect("invalid width directive");
        } else if let Some(name) = line.strip_prefix("char ") {
            let ch = match name.trim() {
                "SP" => ' ',
                other => {
                    let mut chars = other.chars();
                    let ch = chars.next().expect("empty char directive");
                    assert!(chars.next().is_none(), "char directive must name one character");
                    ch
                }
            };
            glyphs.push(Glyph {
                ch,
                art: Vec::new(),
            });
        } else {
            glyphs
                .last_mut()
                .expect("row line before any char directive")
                .art
                .push(line.to_owned());
        }
    }

    assert!(height > 0 && width > 0, "missing height or width directive");
    FontFile {
        height,
        width,
        glyphs,
    }
}

/// Pack one glyph's art into row bitmasks, centered in the font cell.
fn pack(glyph: &Glyph, height: usize, width: usize) -> Vec<u16> {
    if glyph.art.is_empty() {
        // A record with no rows is a blank glyph (e.g. the space).
        return vec![0; height];
    }

    assert_eq!(
        glyph.art.len(),
        height,
        "glyph '{}' must have exactly {} rows",
        glyph.ch,
        height
    );

    let art_width = glyph.art.iter().map(|row| row.chars().count()).max().unwrap();
    assert!(
        art_width <= width,
        "glyph '{}' is wider than the {}-column cell",
        glyph.ch,
        width
    );
    let pad = (width - art_width) / 2;

    glyph
        .art
        .iter()
        .map(|row| {
            let mut bits = 0u16;
            for (col, cell) in row.chars().enumerate() {
                if cell == '#' {
                    bits |= 1 << (width - 1 - (pad + col));
                }
            }
            bits
        })
        .collect()
}

/// Generate the glyph table Rust code that will be included in the crate.
fn generate_rust(font: &FontFile) -> String {
    let mut tables: Vec<Option<Vec<u16>>> = vec![None; 128];

    for glyph in &font.glyphs {
        let idx = glyph.ch as usize;
        assert!(idx < 128, "glyph '{}' is outside the ASCII range", glyph.ch);
        assert!(tables[idx].is_none(), "duplicate glyph '{}'", glyph.ch);
        tables[idx] = Some(pack(glyph, font.height, font.width));
    }

    let fallback = tables['?' as usize]
        .clone()
        .expect("font must define a '?' glyph for fallback");

    let mut out = String::new();

    out.push_str(&format!("pub const HEIGHT: usize = {};\n", font.height));
    out.push_str(&format!("pub const WIDTH: usize = {};\n\n", font.width));

    out.push_str("static GLYPHS: [Option<Glyph>; 128] = [\n");
    for rows in &tables {
        match rows {
            None => out.push_str("    None,\n"),
            Some(rows) => out.push_str(&format!(
                "    Some(Glyph {{ rows: &[{}] }}),\n",
                masks(rows, font.width)
            )),
        }
    }
    out.push_str("];\n\n");

    out.push_str(&format!(
        "static FALLBACK: Glyph = Glyph {{ rows: &[{}] }};\n",
        masks(&fallback, font.width)
    ));

    out
}

fn masks(rows: &[u16], width: usize) -> String {
    rows.iter()
        .map(|row| format!("0b{:0width$b}", row))
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() {
    let data = fs::read_to_string("data/standard.blf").unwrap();
    let font = parse(&data);

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let out_file = out_dir.join("standard_font.rs");

    fs::write(out_file, generate_rust(&font)).unwrap();

    println!("cargo:rerun-if-changed=data/standard.blf");
}
