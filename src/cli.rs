// src/cli.rs
use std::path::PathBuf;

use clap::Parser;

use crate::config::{parse_padding, ConfigFile, PaddingFile};

#[derive(Parser, Debug, Default)]
#[command(
    name = "fontgen",
    about = "Pack font glyphs into a PNG atlas and write a BMFont descriptor",
    after_help = concat!(
        "Example: fontgen --glyphs 'abc' font.ttf\n",
        "  generate bitmap font for abc and store it to font.png and font.fnt",
    )
)]
pub struct Cli {
    /// Font file to read
    #[arg(value_name = "path_to_font")]
    pub font: Option<PathBuf>,

    /// Print the merged configuration as JSON and exit
    #[arg(long)]
    pub dump: bool,

    #[arg(short = 'g', long)]
    pub glyphs: Option<String>,

    #[arg(short = 's', long)]
    pub size: Option<u32>,

    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Face name written to the descriptor
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    #[arg(short = 'f', long)]
    pub fill: Option<String>,

    /// JSON configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    #[arg(long = "out-fnt", value_name = "fnt")]
    pub out_fnt: Option<PathBuf>,

    #[arg(long = "out-png", value_name = "png")]
    pub out_png: Option<PathBuf>,

    #[arg(long, allow_hyphen_values = true)]
    pub letter_spacing: Option<i32>,

    #[arg(long, allow_hyphen_values = true)]
    pub line_spacing: Option<i32>,

    /// Padding as T,R,B,L or a single value
    #[arg(long, value_parser = parse_padding)]
    pub padding: Option<PaddingFile>,

    /// Shift glyph origins by the top padding instead of the right one
    #[arg(long)]
    pub corrected_padding: bool,

    /// Let the glyph that wraps onto a new shelf count toward its height
    #[arg(long)]
    pub corrected_shelves: bool,
}

impl Cli {
    /// The settings given on the command line, as the topmost config layer
    pub fn overrides(&self) -> ConfigFile {
        ConfigFile {
            font: self.font.clone(),
            glyphs: self.glyphs.clone(),
            png: self.out_png.clone(),
            fnt: self.out_fnt.clone(),
            name: self.name.clone(),
            size: self.size,
            width: self.width,
            height: self.height,
            padding: self.padding,
            corrected_padding: self.corrected_padding.then_some(true),
            corrected_shelves: self.corrected_shelves.then_some(true),
            letter_spacing: self.letter_spacing,
            line_spacing: self.line_spacing,
            fill: self.fill.clone(),
            ..ConfigFile::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_aliases() {
        let cli = Cli::try_parse_from([
            "fontgen", "-g", "abc", "-s", "24", "-W", "128", "-H", "64", "-n", "face", "font.ttf",
        ])
        .unwrap();
        let layer = cli.overrides();
        assert_eq!(layer.glyphs.as_deref(), Some("abc"));
        assert_eq!(layer.size, Some(24));
        assert_eq!((layer.width, layer.height), (Some(128), Some(64)));
        assert_eq!(layer.name.as_deref(), Some("face"));
        assert_eq!(layer.font, Some(PathBuf::from("font.ttf")));
        assert_eq!(layer.corrected_padding, None);
        assert_eq!(layer.corrected_shelves, None);
    }

    #[test]
    fn test_output_and_spacing_flags() {
        let cli = Cli::try_parse_from([
            "fontgen",
            "--out-png",
            "a.png",
            "--out-fnt",
            "a.fnt",
            "--letter-spacing",
            "-2",
            "--padding",
            "1,2,3,4",
            "--corrected-padding",
            "--corrected-shelves",
            "--dump",
        ])
        .unwrap();
        assert!(cli.dump);
        let layer = cli.overrides();
        assert_eq!(layer.png, Some(PathBuf::from("a.png")));
        assert_eq!(layer.fnt, Some(PathBuf::from("a.fnt")));
        assert_eq!(layer.letter_spacing, Some(-2));
        assert_eq!(layer.padding, Some(PaddingFile { top: 1, right: 2, bottom: 3, left: 4 }));
        assert_eq!(layer.corrected_padding, Some(true));
        assert_eq!(layer.corrected_shelves, Some(true));
    }

    #[test]
    fn test_rejects_bad_padding() {
        assert!(Cli::try_parse_from(["fontgen", "--padding", "1,2"]).is_err());
    }
}
