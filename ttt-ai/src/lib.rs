//! 井字棋 AI 引擎
//!
//! 包含:
//! - 策略抽象 (Strategy trait)
//! - 穷举 Minimax 搜索（可选 Alpha-Beta 剪枝）
//! - 基线策略：首个空格、随机、中心优先随机、分级启发式
//! - 策略配置

mod baseline;
mod config;
mod search;
mod strategy;
mod tactics;

pub use baseline::{CenterRandom, FirstOpen, Heuristic, UniformRandom};
pub use config::{AiConfig, StrategyKind};
pub use search::{Minimax, SearchConfig, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
pub use strategy::Strategy;
pub use tactics::Tactics;
