use std::{fs, path::PathBuf};

/// One `char` record from the data file: the character and its rows of
/// `#`/`.` art (empty for a blank glyph such as the space).
type Record = (char, Vec<String>);

/// Parse the line-oriented `.blf` format: `height`/`width` directives,
/// `char X` headers (`char SP` for space), rows of art, `//` comments.
fn parse(file: &str) -> (usize, usize, Vec<Record>) {
    let mut height = 0;
    let mut width = 0;
    let mut records: Vec<Record> = Vec::new();

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
            records.push((ch, Vec::new()));
        } else {
            records
                .last_mut()
                .expect("row line before any char directive")
                .1
                .push(line.to_owned());
        }
    }

    assert!(height > 0 && width > 0, "missing height or width directive");
    (height, width, records)
}

/// Pack a record's art into row bitmasks, centered in the font cell.
fn pack(ch: char, art: &[String], height: usize, width: usize) -> Vec<u16> {
    if art.is_empty() {
        return vec![0; height];
    }

    assert_eq!(art.len(), height, "glyph '{ch}' must have exactly {height} rows");

    let art_width = art.iter().map(|row| row.chars().count()).max().unwrap();
    assert!(art_width <= width, "glyph '{ch}' is wider than the {width}-column cell");
    let pad = (width - art_width) / 2;

    art.iter()
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
fn generate_rust(height: usize, width: usize, records: &[Record]) -> String {
    let mut tables: Vec<Option<Vec<u16>>> = vec![None; 128];

    for (ch, art) in records {
        let idx = *ch as usize;
        assert!(idx < 128, "glyph '{ch}' is outside the ASCII range");
        assert!(tables[idx].is_none(), "duplicate glyph '{ch}'");
        tables[idx] = Some(pack(*ch, art, height, width));
    }

    let fallback = tables['?' as usize]
        .clone()
        .expect("font must define a '?' glyph for fallback");

    let mut out = String::new();

    out.push_str(&format!("pub const HEIGHT: usize = {height};\n"));
    out.push_str(&format!("pub const WIDTH: usize = {width};\n\n"));

    out.push_str("static GLYPHS: [Option<Glyph>; 128] = [\n");
    for rows in &tables {
        match rows {
            None => out.push_str("    None,\n"),
            Some(rows) => out.push_str(&format!(
                "    Some(Glyph {{ rows: &[{}] }}),\n",
                masks(rows, width)
            )),
        }
    }
    out.push_str("];\n\n");

    out.push_str(&format!(
        "static FALLBACK: Glyph = Glyph {{ rows: &[{}] }};\n",
        masks(&fallback, width)
    ));

    out
}

fn masks(rows: &[u16], width: usize) -> String {
    rows.iter()
        .map(|row| format!("0b{row:0width$b}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() {
    let data = fs::read_to_string("data/mini.blf").unwrap();
    let (height, width, records) = parse(&data);

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let out_file = out_dir.join("mini_font.rs");

    fs::write(out_file, generate_rust(height, width, &records)).unwrap();

    println!("cargo:rerun-if-changed=data/mini.blf");
}
