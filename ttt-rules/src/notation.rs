//! 棋盘记谱格式
//!
//! 一行文本表示整个棋盘，按行优先顺序共 9 个字符：
//! `X`/`O`（不区分大小写）表示标记，`.`、`_`、`-` 或空格表示空格。
//! 行之间可以用 `/` 分隔，解析时忽略。
//!
//! 示例：
//! `XX.OO....` 或 `XX./OO./...`

use crate::board::Board;
use crate::constants::{BOARD_SIZE, BOARD_WIDTH};
use crate::error::{GameError, Result};
use crate::mark::Mark;

/// 记谱处理
pub struct Notation;

impl Notation {
    /// 解析记谱字符串为棋盘
    pub fn parse(text: &str) -> Result<Board> {
        let mut board = Board::empty();
        let mut index = 0usize;

        for c in text.chars().filter(|&c| c != '/') {
            if index >= BOARD_SIZE {
                return Err(GameError::InvalidNotation {
                    reason: format!("Too many cells, expected {}", BOARD_SIZE),
                });
            }

            match c {
                '.' | '_' | '-' | ' ' => {}
                _ => match Mark::from_char(c) {
                    Some(mark) => board.set(index, Some(mark)),
                    None => {
                        return Err(GameError::InvalidNotation {
                            reason: format!("Invalid cell character: {}", c),
                        })
                    }
                },
            }
            index += 1;
        }

        if index != BOARD_SIZE {
            return Err(GameError::InvalidNotation {
                reason: format!("Expected {} cells, got {}", BOARD_SIZE, index),
            });
        }

        Ok(board)
    }

    /// 将棋盘转换为记谱字符串
    pub fn to_string(board: &Board) -> String {
        let mut result = String::with_capacity(BOARD_SIZE + BOARD_WIDTH - 1);
        for (i, cell) in board.cells().iter().enumerate() {
            if i > 0 && i % BOARD_WIDTH == 0 {
                result.push('/');
            }
            result.push(cell.map(|m| m.to_char()).unwrap_or('.'));
        }
        result
    }
}
