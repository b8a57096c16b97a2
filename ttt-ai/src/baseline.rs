//! 基线策略
//!
//! 用于与搜索策略对比的简单 AI，都是棋盘到走法的函数（随机策略额外持有随机数生成器）。

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ttt_rules::{Board, Mark, CENTER, CORNERS};

use crate::strategy::Strategy;
use crate::tactics::Tactics;

fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

fn random_empty(board: &Board, rng: &mut ChaCha8Rng) -> Option<usize> {
    board.empty_cells().choose(rng).copied()
}

/// 首个空格策略
///
/// 始终以固定标记判断：先找该标记一步取胜的格子，再找对方一步取胜的格子，
/// 最后取第一个空格。
#[derive(Debug, Clone)]
pub struct FirstOpen {
    mark: Mark,
}

impl FirstOpen {
    /// 以指定标记判断胜负
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }

    /// 判断所用的固定标记
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

impl Default for FirstOpen {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}

impl Strategy for FirstOpen {
    fn name(&self) -> &'static str {
        "first-open"
    }

    fn determine_move(&mut self, board: &Board, _mark: Mark) -> Option<usize> {
        Tactics::win_or_block(board, self.mark).or_else(|| board.first_empty())
    }
}

/// 均匀随机策略
#[derive(Debug, Clone)]
pub struct UniformRandom {
    rng: ChaCha8Rng,
}

impl UniformRandom {
    /// 随机种子
    pub fn new() -> Self {
        Self::with_seed(None)
    }

    /// 固定种子（可复现）
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed),
        }
    }
}

impl Default for UniformRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for UniformRandom {
    fn name(&self) -> &'static str {
        "random"
    }

    fn determine_move(&mut self, board: &Board, _mark: Mark) -> Option<usize> {
        random_empty(board, &mut self.rng)
    }
}

/// 中心优先随机策略
#[derive(Debug, Clone)]
pub struct CenterRandom {
    rng: ChaCha8Rng,
}

impl CenterRandom {
    /// 随机种子
    pub fn new() -> Self {
        Self::with_seed(None)
    }

    /// 固定种子（可复现）
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed),
        }
    }
}

impl Default for CenterRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for CenterRandom {
    fn name(&self) -> &'static str {
        "center-random"
    }

    fn determine_move(&mut self, board: &Board, _mark: Mark) -> Option<usize> {
        if board.is_valid_move(CENTER) {
            return Some(CENTER);
        }
        random_empty(board, &mut self.rng)
    }
}

/// 分级启发式策略
///
/// 优先级：取胜 > 封堵 > 中心 > 角（0、2、6、8）> 随机空格
#[derive(Debug, Clone)]
pub struct Heuristic {
    rng: ChaCha8Rng,
}

impl Heuristic {
    /// 随机种子
    pub fn new() -> Self {
        Self::with_seed(None)
    }

    /// 固定种子（可复现）
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed),
        }
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Heuristic {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn determine_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        if let Some(index) = Tactics::win_or_block(board, mark) {
            return Some(index);
        }
        if board.is_valid_move(CENTER) {
            return Some(CENTER);
        }
        if let Some(&corner) = CORNERS.iter().find(|&&c| board.is_valid_move(c)) {
            return Some(corner);
        }
        random_empty(board, &mut self.rng)
    }
}
