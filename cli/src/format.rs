use anyhow::{Context, Result};
use clap::ValueEnum;
use minecount_core::{Board, CellInput, CellOutput, Grid, Markers};
use serde_json::{Value, json};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One row per line, one marker per cell
    Text,
    /// Array of rows, each an array of marker strings (or counts on output)
    Json,
}

pub fn parse_input(text: &str, format: Format, markers: &Markers) -> Result<Grid<CellInput>> {
    let grid = match format {
        Format::Text => markers.parse_grid(text)?,
        Format::Json => {
            let rows: Vec<Vec<String>> = serde_json::from_str(text)
                .context("Expected a JSON array of rows of marker strings")?;
            markers.classify_rows(&rows)?
        }
    };
    Ok(grid)
}

pub fn render_output(board: &Board, format: Format, markers: &Markers) -> Result<String> {
    match format {
        Format::Text => Ok(render_text(board, markers)),
        Format::Json => {
            let grid = json_grid(board.scanned(), markers);
            let value = match board.selected() {
                Some((row, col)) => json!({ "grid": grid, "selected": [row, col] }),
                None => grid,
            };
            let mut out = serde_json::to_string(&value)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// Highlighted cell, if any, is wrapped in brackets.
fn render_text(board: &Board, markers: &Markers) -> String {
    markers.render_with(board.scanned(), |coords, marker| {
        if board.is_highlighted(coords) {
            format!("[{}]", marker)
        } else {
            marker
        }
    })
}

fn json_grid(grid: &Grid<CellOutput>, markers: &Markers) -> Value {
    grid.iter_rows()
        .map(|row| {
            row.iter()
                .map(|&cell| match cell {
                    CellOutput::Mine => Value::String(markers.mine().to_string()),
                    CellOutput::Count(count) => Value::from(count),
                })
                .collect::<Value>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        let grid = parse_input(text, Format::Text, &Markers::default()).unwrap();
        Board::new(&grid)
    }

    #[test]
    fn text_round_trip() {
        let out = render_output(&board("X..\n..X\n..."), Format::Text, &Markers::default()).unwrap();
        assert_eq!(out, "X 2 1\n1 2 X\n0 1 1\n");
    }

    #[test]
    fn json_input_and_output() {
        let markers = Markers::default();
        let grid = parse_input(
            r#"[["X",".","X"],[".",".","."],["X",".","X"]]"#,
            Format::Json,
            &markers,
        )
        .unwrap();

        let out = render_output(&Board::new(&grid), Format::Json, &markers).unwrap();
        assert_eq!(out, "[[\"X\",2,\"X\"],[2,4,2],[\"X\",2,\"X\"]]\n");
    }

    #[test]
    fn json_input_rejects_non_string_cells() {
        let err = parse_input("[[1, 2]]", Format::Json, &Markers::default()).unwrap_err();
        assert!(err.to_string().contains("JSON array"));
    }

    #[test]
    fn json_input_rejects_ragged_rows() {
        let err = parse_input(r#"[["X"],[".","."]]"#, Format::Json, &Markers::default()).unwrap_err();
        assert!(err.to_string().contains("Row 1 has 2 cells, expected 1"));
    }

    #[test]
    fn selection_is_bracketed_in_text() {
        let mut board = board("X.\n..");
        board.select((1, 0)).unwrap();

        let out = render_output(&board, Format::Text, &Markers::default()).unwrap();
        assert_eq!(out, "X 1\n[1] 1\n");
    }

    #[test]
    fn selection_is_reported_in_json() {
        let mut board = board("X.\n..");
        board.select((0, 1)).unwrap();

        let out = render_output(&board, Format::Json, &Markers::default()).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["selected"], json!([0, 1]));
        assert_eq!(value["grid"], json!([["X", 1], [1, 1]]));
    }

    #[test]
    fn custom_mine_marker_is_echoed() {
        let markers = Markers::new('*', 'o').unwrap();
        let grid = parse_input("*o\noo", Format::Text, &markers).unwrap();

        let out = render_output(&Board::new(&grid), Format::Json, &markers).unwrap();
        assert_eq!(out, "[[\"*\",1],[1,1]]\n");
    }
}
