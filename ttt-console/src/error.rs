//! 错误类型定义

use thiserror::Error;
use ttt_rules::{GameError, Mark};

/// 控制台对局错误
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 序列化错误
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// 规则错误
    #[error("Game error: {0}")]
    Game(#[from] GameError),

    /// 输入已关闭
    #[error("Input closed before a move was entered")]
    InputClosed,

    /// 没有可走的格子
    #[error("No legal move left for {0}")]
    NoLegalMove(Mark),

    /// 双方使用了同一标记
    #[error("Both agents play {0}")]
    DuplicateMark(Mark),
}

/// 控制台操作结果类型
pub type Result<T> = std::result::Result<T, ConsoleError>;
