//! 错误类型定义

use thiserror::Error;

/// 井字棋规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 格子索引越界
    #[error("Invalid move: index {index} is out of range (0-8)")]
    OutOfRange { index: usize },

    /// 格子已被占用
    #[error("Invalid move: cell {index} is already occupied")]
    Occupied { index: usize },

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,

    /// 无效的记谱字符串
    #[error("Invalid board notation: {reason}")]
    InvalidNotation { reason: String },
}

impl GameError {
    /// 是否属于非法走法（越界或占用）
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, GameError::OutOfRange { .. } | GameError::Occupied { .. })
    }
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
