//! 一步战术：立即取胜与封堵

use ttt_rules::{Board, Mark, Rules};

/// 战术扫描
pub struct Tactics;

impl Tactics {
    /// 最小的立即取胜格
    pub fn winning_move(board: &Board, mark: Mark) -> Option<usize> {
        Rules::winning_cells(board, mark).first().copied()
    }

    /// 最小的封堵格（对方下一步可取胜的格子）
    pub fn blocking_move(board: &Board, mark: Mark) -> Option<usize> {
        Self::winning_move(board, mark.opponent())
    }

    /// 先取胜，再封堵
    pub fn win_or_block(board: &Board, mark: Mark) -> Option<usize> {
        Self::winning_move(board, mark).or_else(|| Self::blocking_move(board, mark))
    }
}
