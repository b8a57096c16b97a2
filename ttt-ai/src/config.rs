//! AI 配置

use serde::{Deserialize, Serialize};

use crate::baseline::{CenterRandom, FirstOpen, Heuristic, UniformRandom};
use crate::search::{Minimax, SearchConfig};
use crate::strategy::Strategy;

/// 策略种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// 穷举搜索
    #[default]
    Minimax,
    /// 首个空格（带一步取胜/封堵）
    FirstOpen,
    /// 均匀随机
    Random,
    /// 中心优先随机
    CenterRandom,
    /// 分级启发式
    Heuristic,
}

impl StrategyKind {
    /// 所有选项
    pub fn all() -> &'static [StrategyKind] {
        &[
            StrategyKind::Minimax,
            StrategyKind::FirstOpen,
            StrategyKind::Random,
            StrategyKind::CenterRandom,
            StrategyKind::Heuristic,
        ]
    }

    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            StrategyKind::Minimax => "Minimax",
            StrategyKind::FirstOpen => "First open",
            StrategyKind::Random => "Random",
            StrategyKind::CenterRandom => "Center random",
            StrategyKind::Heuristic => "Heuristic",
        }
    }
}

/// AI 配置
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub strategy: StrategyKind,
    /// 随机策略的种子，`None` 表示每次不同
    pub seed: Option<u64>,
    /// Minimax 是否启用剪枝
    pub pruning: bool,
}

impl AiConfig {
    pub fn from_strategy(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// 构建策略实例
    pub fn build(&self) -> Box<dyn Strategy> {
        match self.strategy {
            StrategyKind::Minimax => Box::new(Minimax::new(SearchConfig {
                pruning: self.pruning,
            })),
            StrategyKind::FirstOpen => Box::new(FirstOpen::default()),
            StrategyKind::Random => Box::new(UniformRandom::with_seed(self.seed)),
            StrategyKind::CenterRandom => Box::new(CenterRandom::with_seed(self.seed)),
            StrategyKind::Heuristic => Box::new(Heuristic::with_seed(self.seed)),
        }
    }
}
