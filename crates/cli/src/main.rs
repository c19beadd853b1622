//! Command-line front end for the `blocklet` renderer.

use std::io::Write;

use anyhow::{Context, Result};
use blocklet::{BlockFont, RenderOptions, WrapMode, render_text};
use clap::{Arg, ArgAction, Command, value_parser};

fn cli() -> Command {
    Command::new("blocklet")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates ASCII art using Unicode block characters")
        .arg(
            Arg::new("text")
                .help("The text to render")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("width")
                .short('w')
                .long("width")
                .value_name("WIDTH")
                .help("Maximum output width in columns (0 = no limit)")
                .value_parser(value_parser!(u32))
                .default_value("0"),
        )
        .arg(
            Arg::new("font")
                .short('f')
                .long("font")
                .value_name("FONT")
                .help("Font to render with")
                .value_parser(["standard", "mini"])
                .default_value("standard"),
        )
        .arg(
            Arg::new("no-shadow")
                .short('n')
                .long("no-shadow")
                .help("Disable the drop-shadow effect")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let text = matches
        .get_one::<String>("text")
        .context("missing text argument")?;
    let width = *matches
        .get_one::<u32>("width")
        .context("missing width argument")?;
    let font = match matches.get_one::<String>("font").map(String::as_str) {
        Some("mini") => BlockFont::Mini,
        _ => BlockFont::Standard,
    };

    let options = RenderOptions {
        max_width: (width > 0).then_some(width as usize),
        shadow: !matches.get_flag("no-shadow"),
        wrap: WrapMode::Words,
        ..RenderOptions::default()
    };

    let art = render_text(text, font, &options);

    let stdout = std::io::stdout();
    writeln!(stdout.lock(), "{art}").context("failed to write output")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_text() {
        assert!(cli().try_get_matches_from(["blocklet"]).is_err());
    }

    #[test]
    fn parses_flags() {
        let matches = cli()
            .try_get_matches_from(["blocklet", "-w", "40", "-f", "mini", "-n", "HELLO"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("text").unwrap(), "HELLO");
        assert_eq!(*matches.get_one::<u32>("width").unwrap(), 40);
        assert_eq!(matches.get_one::<String>("font").unwrap(), "mini");
        assert!(matches.get_flag("no-shadow"));
    }

    #[test]
    fn rejects_unknown_font() {
        assert!(
            cli()
                .try_get_matches_from(["blocklet", "-f", "fancy", "HELLO"])
                .is_err()
        );
    }
}
