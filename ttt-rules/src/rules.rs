//! 胜负判定

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::{BOARD_SIZE, WIN_LINES};
use crate::mark::Mark;

/// 对局结果（由棋盘推导，不单独存储）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// 进行中
    InProgress,
    /// 某方获胜
    Win(Mark),
    /// 和棋
    Draw,
}

impl Outcome {
    /// 是否已结束
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// 胜方
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "{} wins!", mark),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// 规则引擎
pub struct Rules;

impl Rules {
    /// 检查是否有一方连成一线
    ///
    /// 双方同时连线的局面在正常对局中不可达；此时按检查顺序返回 X。
    pub fn check_win(board: &Board) -> Option<Mark> {
        Mark::ALL.into_iter().find(|&mark| Self::has_line(board, mark))
    }

    /// 指定标记是否占满任意一条线
    pub fn has_line(board: &Board, mark: Mark) -> bool {
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&i| board.get(i) == Some(mark)))
    }

    /// 棋盘是否已满
    pub fn is_full(board: &Board) -> bool {
        board.is_full()
    }

    /// 是否为终局（有胜方或棋盘已满）
    pub fn is_terminal(board: &Board) -> bool {
        Self::check_win(board).is_some() || board.is_full()
    }

    /// 计算对局结果
    pub fn outcome(board: &Board) -> Outcome {
        match Self::check_win(board) {
            Some(mark) => Outcome::Win(mark),
            None if board.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// 所有合法走法（升序）
    pub fn legal_moves(board: &Board) -> Vec<usize> {
        board.empty_cells()
    }

    /// 落下 `mark` 即可连成一线的空格（升序）
    pub fn winning_cells(board: &Board, mark: Mark) -> Vec<usize> {
        (0..BOARD_SIZE)
            .filter(|&i| {
                board
                    .with_move(i, mark)
                    .map(|next| Self::has_line(&next, mark))
                    .unwrap_or(false)
            })
            .collect()
    }
}
