use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use minecount_core::{Board, Coord2, EMPTY_MARKER, MINE_MARKER, Markers};

use crate::format::Format;

mod format;

/// Replace every empty cell of a mine grid with its number of adjacent mines
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Grid to scan, stdin is read when omitted or `-`
    input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    input_format: Format,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    output_format: Format,

    /// Marker that denotes a mine, on input and output
    #[arg(long, default_value_t = MINE_MARKER)]
    mine_marker: char,

    /// Marker that denotes an empty cell on input
    #[arg(long, default_value_t = EMPTY_MARKER)]
    empty_marker: char,

    /// Highlight a single cell, given as `ROW,COL`
    #[arg(long, value_parser = parse_coords)]
    select: Option<Coord2>,
}

fn parse_coords(value: &str) -> std::result::Result<Coord2, String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL but got {:?}", value))?;
    let row = row.trim().parse().map_err(|err| format!("invalid row: {}", err))?;
    let col = col.trim().parse().map_err(|err| format!("invalid col: {}", err))?;
    Ok((row, col))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Could not read stdin")?;
            Ok(text)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let markers = Markers::new(args.mine_marker, args.empty_marker)
        .context("Invalid marker configuration")?;

    let text = read_input(args.input.as_deref())?;
    let grid = format::parse_input(&text, args.input_format, &markers)
        .context("Could not parse input grid")?;
    log::info!("Scanning {} x {} grid", grid.rows(), grid.cols());

    let mut board = Board::new(&grid);
    if let Some(coords) = args.select {
        board
            .select(coords)
            .with_context(|| format!("Cannot select {:?}", coords))?;
    }

    print!("{}", format::render_output(&board, args.output_format, &markers)?);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("{:?}", args);

    run(&args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinates() {
        assert_eq!(parse_coords("2,5"), Ok((2, 5)));
        assert_eq!(parse_coords(" 0 , 7 "), Ok((0, 7)));
        assert!(parse_coords("2").is_err());
        assert!(parse_coords("a,1").is_err());
        assert!(parse_coords("-1,1").is_err());
    }

    #[test]
    fn args_defaults() {
        let args = Args::try_parse_from(["minecount"]).unwrap();

        assert_eq!(args.input, None);
        assert_eq!(args.input_format, Format::Text);
        assert_eq!(args.mine_marker, 'X');
        assert_eq!(args.empty_marker, '.');
        assert_eq!(args.select, None);
    }

    #[test]
    fn args_overrides() {
        let args = Args::try_parse_from([
            "minecount",
            "grid.json",
            "--input-format",
            "json",
            "--output-format",
            "json",
            "--mine-marker",
            "*",
            "--select",
            "1,2",
        ])
        .unwrap();

        assert_eq!(args.input, Some(PathBuf::from("grid.json")));
        assert_eq!(args.input_format, Format::Json);
        assert_eq!(args.output_format, Format::Json);
        assert_eq!(args.mine_marker, '*');
        assert_eq!(args.select, Some((1, 2)));
    }
}
