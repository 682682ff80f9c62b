/*
[INPUT]:  SessionState snapshot and display settings
[OUTPUT]: Terminal text for grids, pairs and the session header
[POS]:    View layer - terminal rendering (no state mutation)
[UPDATE]: When changing the on-screen layout or palette mapping
*/

use arc_task_adapter::Grid;
use console::{Alignment, Style, measure_text_width, pad_str, style};

use crate::config::DisplayConfig;
use crate::grid::{PaletteColor, calculate_cell_size, color_for_symbol};
use crate::store::SessionState;

const GUTTER: &str = "   ";

/// Nearest xterm-256 color cube index
pub fn ansi256(color: PaletteColor) -> u8 {
    let (r, g, b) = color.rgb;
    if r == g && g == b {
        // grey ramp 232..=255, black/white at the ends of the cube
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            v => 232 + ((v as u16 - 8) * 24 / 241) as u8,
        };
    }
    let level = |v: u8| ((v as u16 * 5 + 127) / 255) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

/// One string per grid row; colored cells are two blanks on the symbol's color
pub fn render_grid(grid: &Grid, colored: bool) -> Vec<String> {
    grid.rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&symbol| {
                    if colored {
                        let bg = ansi256(color_for_symbol(symbol as usize));
                        Style::new()
                            .on_color256(bg)
                            .force_styling(true)
                            .apply_to("  ")
                            .to_string()
                    } else {
                        format!("{symbol} ")
                    }
                })
                .collect::<String>()
        })
        .collect()
}

/// Labelled grids laid out left to right
pub fn side_by_side(panels: &[(&str, Vec<String>)]) -> Vec<String> {
    let widths: Vec<usize> = panels
        .iter()
        .map(|(label, lines)| {
            lines
                .iter()
                .map(|line| measure_text_width(line))
                .chain(std::iter::once(measure_text_width(label)))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let height = panels.iter().map(|(_, lines)| lines.len()).max().unwrap_or(0);

    let mut out = Vec::with_capacity(height + 1);
    let header = panels
        .iter()
        .zip(&widths)
        .map(|((label, _), width)| pad_str(label, *width, Alignment::Left, None).into_owned())
        .collect::<Vec<_>>()
        .join(GUTTER);
    out.push(header.trim_end().to_string());

    for i in 0..height {
        let line = panels
            .iter()
            .zip(&widths)
            .map(|((_, lines), width)| {
                let cell = lines.get(i).map(String::as_str).unwrap_or("");
                pad_str(cell, *width, Alignment::Left, None).into_owned()
            })
            .collect::<Vec<_>>()
            .join(GUTTER);
        out.push(line.trim_end().to_string());
    }
    out
}

fn dims(grid: &Grid) -> String {
    let (h, w) = grid.dimensions();
    format!("{h}x{w}")
}

/// Header line: dataset, subset, position and task name
pub fn render_header(state: &SessionState) -> String {
    let position = if state.total_count() > 0 {
        format!("{}/{}", state.task_index() + 1, state.total_count())
    } else {
        "-".to_string()
    };
    let name = if state.task_name().is_empty() {
        "(no task)"
    } else {
        state.task_name()
    };
    format!(
        "{} | {} | task {} | {}",
        state.dataset_name(),
        state.subset(),
        position,
        style(name).bold()
    )
}

/// Full session view: training pairs, active test pair and the editable output
pub fn render_session(state: &SessionState, display: &DisplayConfig, colored: bool) -> String {
    let mut lines = vec![render_header(state)];

    for (i, pair) in state.train_pairs().iter().enumerate() {
        lines.push(String::new());
        let input_label = format!("train {} input ({})", i + 1, dims(&pair.input));
        let output_label = pair
            .output
            .as_ref()
            .map(|output| format!("train {} output ({})", i + 1, dims(output)));
        let mut panels = vec![(input_label.as_str(), render_grid(&pair.input, colored))];
        if let (Some(label), Some(output)) = (&output_label, &pair.output) {
            panels.push((label.as_str(), render_grid(output, colored)));
        }
        lines.extend(side_by_side(&panels));
    }

    if let (Some(input), Some(output)) = (state.current_input(), state.current_output()) {
        lines.push(String::new());
        let input_label = format!(
            "test {}/{} input ({})",
            state.test_index() + 1,
            state.test_count(),
            dims(input)
        );
        let output_label = format!("your output ({})", dims(output));
        lines.extend(side_by_side(&[
            (input_label.as_str(), render_grid(input, colored)),
            (output_label.as_str(), render_grid(output, colored)),
        ]));

        let (h, w) = output.dimensions();
        let cell = calculate_cell_size(
            h as u32,
            w as u32,
            display.container_height,
            display.container_width,
        );
        let symbol = state.selected_symbol();
        lines.push(String::new());
        lines.push(format!(
            "symbol {} ({}) | cell size {}px",
            symbol,
            color_for_symbol(symbol as usize).name,
            cell
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TaskUpdate;
    use arc_task_adapter::TaskPair;

    #[test]
    fn test_render_grid_plain() {
        let grid = Grid::from_values(2, 2, &[vec![0, 1], vec![2, 3]]);
        assert_eq!(render_grid(&grid, false), vec!["0 1 ", "2 3 "]);
    }

    #[test]
    fn test_ansi256_palette() {
        assert_eq!(ansi256(color_for_symbol(0)), 16);
        assert_eq!(ansi256(color_for_symbol(2)), 16 + 36 * 5 + 6 + 1);
        assert!(ansi256(color_for_symbol(5)) >= 232);
    }

    #[test]
    fn test_side_by_side_pads_columns() {
        let lines = side_by_side(&[
            ("a", vec!["1 1 1 ".to_string()]),
            ("b", vec!["2 ".to_string(), "2 ".to_string()]),
        ]);
        assert_eq!(lines[0], "a        b");
        assert_eq!(lines[1], "1 1 1    2");
        assert_eq!(lines[2], "         2");
    }

    #[test]
    fn test_render_session_shows_active_pair() {
        let mut state = SessionState::default();
        state.set_task(TaskUpdate {
            test: vec![TaskPair {
                input: Grid::from_values(1, 2, &[vec![4, 4]]),
                output: None,
            }],
            name: "abc.json".to_string(),
            ..TaskUpdate::default()
        });

        let text = render_session(&state, &DisplayConfig::default(), false);
        assert!(text.contains("abc.json"));
        assert!(text.contains("test 1/1 input (1x2)"));
        assert!(text.contains("your output (1x2)"));
        assert!(text.contains("4 4"));
        assert!(text.contains("cell size 50px"));
    }
}
