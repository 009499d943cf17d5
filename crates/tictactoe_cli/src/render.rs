//! Text rendering of the board.

use tictactoe_core::Board;

/// Draws the board as a framed grid with 1-based row and column headers.
pub fn render_board(board: &Board) -> String {
    let cells = board.squares();
    let mut out = String::new();
    out.push_str("      1     2     3\n");
    out.push_str("   ╔═════╦═════╦═════╗\n");
    for row in 0..3 {
        let [a, b, c] = [0, 1, 2].map(|col| cells[row * 3 + col].symbol());
        out.push_str(&format!(" {} ║  {a}  ║  {b}  ║  {c}  ║\n", row + 1));
        if row < 2 {
            out.push_str("   ╠═════╬═════╬═════╣\n");
        }
    }
    out.push_str("   ╚═════╩═════╩═════╝");
    out
}
