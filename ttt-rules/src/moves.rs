//! 走法

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::Result;
use crate::mark::Mark;

/// 走法：在某个格子放下某个标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 格子索引 (0-8)
    pub index: usize,
    /// 落下的标记
    pub mark: Mark,
}

impl Move {
    /// 创建新走法
    pub fn new(index: usize, mark: Mark) -> Self {
        Self { index, mark }
    }

    /// 是否可在棋盘上执行
    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_valid_move(self.index)
    }

    /// 在棋盘上执行走法
    pub fn apply(&self, board: &mut Board) -> Result<()> {
        board.apply_move(self.index, self.mark)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}
