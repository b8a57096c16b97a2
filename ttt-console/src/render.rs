//! 棋盘文本渲染

use ttt_rules::{Board, BOARD_SIZE, BOARD_WIDTH};

/// 行分隔线
pub const ROW_RULE: &str = "-----------";

/// 渲染棋盘：3 行，格子之间用竖线分隔，行之间用横线分隔，末尾空一行
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in (0..BOARD_SIZE).step_by(BOARD_WIDTH) {
        let cells: Vec<String> = (row..row + BOARD_WIDTH)
            .map(|i| board.get(i).map(|m| m.to_char()).unwrap_or(' ').to_string())
            .collect();
        out.push_str(&format!(" {} \n", cells.join(" | ")));
        if row + BOARD_WIDTH < BOARD_SIZE {
            out.push_str(ROW_RULE);
            out.push('\n');
        }
    }
    out.push('\n');
    out
}
