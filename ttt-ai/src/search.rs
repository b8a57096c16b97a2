//! 搜索引擎
//!
//! 穷举 Minimax（Negamax 形式）+ 可选 Alpha-Beta 剪枝
//!
//! 井字棋的完整博弈树不超过 9 层，无需深度限制和评估函数：
//! 每条路线都走到终局，按走子方视角计分（胜 +1、负 -1、和 0）。

use serde::{Deserialize, Serialize};
use tracing::debug;
use ttt_rules::{Board, Mark, Rules, BOARD_SIZE};

use crate::strategy::Strategy;

/// 走子方获胜
pub const WIN_SCORE: i32 = 1;
/// 和棋
pub const DRAW_SCORE: i32 = 0;
/// 走子方落败
pub const LOSS_SCORE: i32 = -1;

/// 窗口边界，严格大于任何真实分值
const INFINITY: i32 = WIN_SCORE + 1;

/// 搜索配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// 启用 Alpha-Beta 剪枝（不改变选出的走法）
    pub pruning: bool,
}

impl SearchConfig {
    /// 启用剪枝的配置
    pub fn pruned() -> Self {
        Self { pruning: true }
    }
}

/// Minimax 搜索引擎
#[derive(Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
    nodes_searched: u64,
}

impl Minimax {
    /// 创建新的搜索引擎
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            nodes_searched: 0,
        }
    }

    /// 搜索配置
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// 搜索最佳走法
    ///
    /// 多个走法同分时取索引最小者。终局或无空格时返回 `None`。
    pub fn search(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        self.nodes_searched = 0;

        if Rules::is_terminal(board) {
            return None;
        }

        let mut best_move = None;
        let mut best_score = -INFINITY;

        for index in 0..BOARD_SIZE {
            let Ok(child) = board.with_move(index, mark) else {
                continue;
            };

            let score = if self.config.pruning {
                // 以当前最佳为下界；不优于它的走法只会返回边界值，不会被选中
                -self.alpha_beta(child, mark.opponent(), -INFINITY, -best_score)
            } else {
                -self.negamax(child, mark.opponent())
            };

            if score > best_score {
                best_score = score;
                best_move = Some(index);
            }

            if self.config.pruning && best_score == WIN_SCORE {
                break;
            }
        }

        debug!(
            "Minimax for {}: move={:?} score={} nodes={}",
            mark, best_move, best_score, self.nodes_searched
        );

        best_move
    }

    /// 计算每个合法走法的精确分值（走子方视角）
    pub fn score_moves(&mut self, board: &Board, mark: Mark) -> Vec<(usize, i32)> {
        self.nodes_searched = 0;

        if Rules::is_terminal(board) {
            return Vec::new();
        }

        (0..BOARD_SIZE)
            .filter_map(|index| {
                let child = board.with_move(index, mark).ok()?;
                Some((index, -self.negamax(child, mark.opponent())))
            })
            .collect()
    }

    /// 完整搜索，返回 `to_move` 视角的分值
    fn negamax(&mut self, board: Board, to_move: Mark) -> i32 {
        self.nodes_searched += 1;

        if let Some(score) = Self::terminal_score(&board, to_move) {
            return score;
        }

        let mut best = -INFINITY;
        for index in 0..BOARD_SIZE {
            if let Ok(child) = board.with_move(index, to_move) {
                let score = -self.negamax(child, to_move.opponent());
                if score > best {
                    best = score;
                }
            }
        }
        best
    }

    /// Alpha-Beta 搜索（fail-hard）
    fn alpha_beta(&mut self, board: Board, to_move: Mark, mut alpha: i32, beta: i32) -> i32 {
        self.nodes_searched += 1;

        if let Some(score) = Self::terminal_score(&board, to_move) {
            return score;
        }

        for index in 0..BOARD_SIZE {
            if let Ok(child) = board.with_move(index, to_move) {
                let score = -self.alpha_beta(child, to_move.opponent(), -beta, -alpha);

                if score >= beta {
                    return beta;
                }
                if score > alpha {
                    alpha = score;
                }
            }
        }

        alpha
    }

    /// 终局分值（`to_move` 视角），非终局返回 `None`
    fn terminal_score(board: &Board, to_move: Mark) -> Option<i32> {
        match Rules::check_win(board) {
            Some(winner) if winner == to_move => Some(WIN_SCORE),
            Some(_) => Some(LOSS_SCORE),
            None if board.is_full() => Some(DRAW_SCORE),
            None => None,
        }
    }

    /// 上次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

impl Strategy for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn determine_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        self.search(board, mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttt_rules::{GameState, Notation, Outcome};

    fn parse(notation: &str) -> Board {
        Notation::parse(notation).unwrap()
    }

    /// 枚举所有可达的非终局局面及其走子方
    fn reachable_positions() -> Vec<(Board, Mark)> {
        fn walk(
            board: Board,
            to_move: Mark,
            seen: &mut std::collections::HashSet<Board>,
            out: &mut Vec<(Board, Mark)>,
        ) {
            if !seen.insert(board) || Rules::is_terminal(&board) {
                return;
            }
            out.push((board, to_move));
            for index in board.empty_cells() {
                let child = board.with_move(index, to_move).unwrap();
                walk(child, to_move.opponent(), seen, out);
            }
        }

        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        walk(Board::empty(), Mark::X, &mut seen, &mut out);
        out
    }

    #[test]
    fn test_opening_move_is_zero() {
        let board = Board::empty();
        for _ in 0..3 {
            let mut engine = Minimax::default();
            assert_eq!(engine.search(&board, Mark::X), Some(0));
        }
        // 所有开局走法都是和棋
        let mut engine = Minimax::default();
        let scores = engine.score_moves(&board, Mark::X);
        assert_eq!(scores.len(), 9);
        assert!(scores.iter().all(|&(_, s)| s == DRAW_SCORE));
    }

    #[test]
    fn test_forced_win_lowest_index() {
        // O 在 5 直接取胜；在 2 则形成 3-4-5 与 2-4-6 双杀，同为必胜，取较小索引
        let board = parse("XX.OO....");
        let mut engine = Minimax::default();
        assert_eq!(engine.search(&board, Mark::O), Some(2));
        assert_eq!(
            engine.score_moves(&board, Mark::O),
            vec![(2, 1), (5, 1), (6, -1), (7, -1), (8, -1)]
        );
    }

    #[test]
    fn test_immediate_win_column() {
        // X 在 6 完成 0-3-6；下在 5 会让 O 完成 1-4-7
        let board = parse("XOXXO....");
        let mut engine = Minimax::default();
        assert_eq!(engine.search(&board, Mark::X), Some(6));

        let scores = engine.score_moves(&board, Mark::X);
        assert_eq!(scores[0], (5, LOSS_SCORE));
        assert_eq!(scores[1], (6, WIN_SCORE));
    }

    #[test]
    fn test_reply_to_corner_is_center() {
        let board = parse("X........");
        let mut engine = Minimax::default();
        assert_eq!(engine.search(&board, Mark::O), Some(4));
    }

    #[test]
    fn test_must_block() {
        let board = parse("XX..O....");
        let mut engine = Minimax::default();
        assert_eq!(engine.search(&board, Mark::O), Some(2));
    }

    #[test]
    fn test_first_of_several_wins() {
        let board = parse("XO.......");
        let mut engine = Minimax::default();
        assert_eq!(engine.search(&board, Mark::X), Some(3));
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let mut engine = Minimax::default();
        assert_eq!(engine.search(&parse("XXXOO...."), Mark::O), None);
        assert_eq!(engine.search(&parse("XOXXOOOXX"), Mark::O), None);
        assert!(engine.score_moves(&parse("XOXXOOOXX"), Mark::O).is_empty());
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = parse("X...O....");
        let before = board;
        let mut engine = Minimax::default();
        engine.search(&board, Mark::X);
        assert_eq!(board, before);
        assert!(engine.nodes_searched() > 0);
    }

    #[test]
    fn test_pruning_searches_fewer_nodes() {
        let board = Board::empty();

        let mut plain = Minimax::default();
        assert_eq!(plain.search(&board, Mark::X), Some(0));

        let mut pruned = Minimax::new(SearchConfig::pruned());
        assert!(pruned.config().pruning);
        assert_eq!(pruned.search(&board, Mark::X), Some(0));

        assert!(pruned.nodes_searched() < plain.nodes_searched());
    }

    #[test]
    fn test_pruning_matches_plain_everywhere() {
        let positions = reachable_positions();
        assert_eq!(positions.len(), 4520);

        let mut plain = Minimax::default();
        let mut pruned = Minimax::new(SearchConfig::pruned());
        for (board, mark) in positions {
            let expected = plain.search(&board, mark);
            assert!(expected.is_some());
            assert_eq!(
                pruned.search(&board, mark),
                expected,
                "{} to move on {}",
                mark,
                Notation::to_string(&board)
            );
        }
    }

    #[test]
    fn test_self_play_is_draw() {
        for config in [SearchConfig::default(), SearchConfig::pruned()] {
            let mut engine = Minimax::new(config);
            let mut state = GameState::new();
            while !state.is_over() {
                let index = engine.search(&state.board, state.current_turn).unwrap();
                state.play(index).unwrap();
            }
            assert_eq!(state.outcome(), Outcome::Draw);
        }
    }
}
