//! 井字棋规则库
//!
//! 包含:
//! - 棋子标记、棋盘等核心数据结构
//! - 胜负与和棋判定
//! - 走法校验与落子
//! - 对局状态（走子方、步数）
//! - 棋盘记谱格式

mod board;
mod constants;
mod error;
mod mark;
mod moves;
mod notation;
mod rules;

pub use board::{Board, GameState};
pub use constants::*;
pub use error::{GameError, Result};
pub use mark::Mark;
pub use moves::Move;
pub use notation::Notation;
pub use rules::{Outcome, Rules};
