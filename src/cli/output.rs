//! Output formatting and progress bars for CLI

use std::io::{self, Write};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    ai::AgentStats,
    rules::{BOARD_SIZE, Board, Perspective},
};

/// Create a progress bar for training
pub fn create_training_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-");
    pb.set_style(style);
    pb
}

/// Render `board` as seen from `perspective`, with rank and file labels.
///
/// ```text
///   3  D D D
///   2  . . .
///   1  L L L
///      a b c
/// ```
pub fn render_board(board: &Board, perspective: Perspective) -> String {
    let mut out = String::new();
    for visual_row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|visual_col| {
                let (row, col) = perspective.to_canonical(visual_row, visual_col);
                board.get(row, col).to_char().to_string()
            })
            .collect();
        out.push_str(&format!("  {}  {}\n", BOARD_SIZE - visual_row, cells.join(" ")));
    }
    out.push_str("     a b c");
    out
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Write the running score of a play session
pub fn write_session_stats<W: Write>(out: &mut W, stats: &AgentStats) -> io::Result<()> {
    writeln!(out, "  {:20} {}", "Computer wins:", stats.wins)?;
    writeln!(out, "  {:20} {}", "Computer losses:", stats.losses)?;
    writeln!(out, "  {:20} {}", "Positions learned:", stats.states_seen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_view_has_light_at_bottom() {
        let rendered = render_board(&Board::new(), Perspective::Light);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "  3  D D D");
        assert_eq!(lines[2], "  1  L L L");
        assert_eq!(lines[3], "     a b c");
    }

    #[test]
    fn dark_view_is_rotated() {
        let board = Board::from_string("D..|...|..L").unwrap();
        let rendered = render_board(&board, Perspective::Dark);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "  3  L . .");
        assert_eq!(lines[2], "  1  . . D");
    }
}
