//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;
use crate::error::{GameError, Result};
use crate::mark::Mark;
use crate::moves::Move;
use crate::rules::{Outcome, Rules};

/// 棋盘
///
/// 3x3 棋盘，索引为 row * 3 + col。棋盘是 `Copy` 的值类型，
/// 搜索时按值复制，不会影响真实对局。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; BOARD_SIZE],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self::default()
    }

    /// 获取指定格子的标记（越界返回 None）
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// 所有格子
    pub fn cells(&self) -> &[Option<Mark>; BOARD_SIZE] {
        &self.cells
    }

    /// 设置格子（不检查规则，仅供记谱解析使用）
    pub(crate) fn set(&mut self, index: usize, mark: Option<Mark>) {
        if index < BOARD_SIZE {
            self.cells[index] = mark;
        }
    }

    /// 检查走法是否合法：索引在 0..=8 且格子为空
    pub fn is_valid_move(&self, index: usize) -> bool {
        index < BOARD_SIZE && self.cells[index].is_none()
    }

    /// 落子
    ///
    /// 非法走法返回错误，棋盘保持不变。
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<()> {
        if index >= BOARD_SIZE {
            return Err(GameError::OutOfRange { index });
        }
        if self.cells[index].is_some() {
            return Err(GameError::Occupied { index });
        }
        self.cells[index] = Some(mark);
        Ok(())
    }

    /// 在副本上落子，返回新棋盘
    pub fn with_move(&self, index: usize, mark: Mark) -> Result<Board> {
        let mut next = *self;
        next.apply_move(index, mark)?;
        Ok(next)
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// 所有空格索引（升序）
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..BOARD_SIZE).filter(|&i| self.cells[i].is_none()).collect()
    }

    /// 第一个空格
    pub fn first_empty(&self) -> Option<usize> {
        (0..BOARD_SIZE).find(|&i| self.cells[i].is_none())
    }

    /// 已落子数
    pub fn placed(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

/// 对局状态（棋盘 + 走子方）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// 棋盘
    pub board: Board,
    /// 当前走子方
    pub current_turn: Mark,
    /// 已走步数
    pub ply: u32,
}

impl GameState {
    /// 创建初始状态（X 先手）
    pub fn new() -> Self {
        Self::from_board(Board::empty(), Mark::X)
    }

    /// 从棋盘创建状态
    pub fn from_board(board: Board, current_turn: Mark) -> Self {
        Self {
            board,
            current_turn,
            ply: board.placed() as u32,
        }
    }

    /// 当前结果
    pub fn outcome(&self) -> Outcome {
        Rules::outcome(&self.board)
    }

    /// 是否已结束
    pub fn is_over(&self) -> bool {
        Rules::is_terminal(&self.board)
    }

    /// 当前走子方在指定格子落子，并切换走子方
    pub fn play(&mut self, index: usize) -> Result<Outcome> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let mv = Move::new(index, self.current_turn);
        mv.apply(&mut self.board)?;
        self.ply += 1;
        tracing::debug!("{}, ply {}", mv, self.ply);
        self.switch_turn();
        Ok(self.outcome())
    }

    /// 切换走子方
    pub fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::Notation;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert_eq!(board.placed(), 0);
        assert_eq!(board.get(9), None);
    }

    #[test]
    fn test_valid_move_on_partial_boards() {
        for notation in ["X........", "XO..X....", "XOX.O.O..", "XOXOXO..."] {
            let board = Notation::parse(notation).unwrap();
            for index in 0..9 {
                assert_eq!(board.is_valid_move(index), board.get(index).is_none());
            }
            assert!(!board.is_valid_move(9));
            assert!(!board.is_valid_move(usize::MAX));
        }
    }

    #[test]
    fn test_apply_move_then_invalid() {
        let mut board = Board::empty();
        for index in 0..9 {
            let mark = if index % 2 == 0 { Mark::X } else { Mark::O };
            assert!(board.is_valid_move(index));
            board.apply_move(index, mark).unwrap();
            assert!(!board.is_valid_move(index));
            assert_eq!(board.get(index), Some(mark));
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_apply_invalid_move_leaves_board() {
        let mut board = Notation::parse("X........").unwrap();
        let before = board;

        assert_eq!(
            board.apply_move(0, Mark::O),
            Err(GameError::Occupied { index: 0 })
        );
        assert_eq!(
            board.apply_move(9, Mark::O),
            Err(GameError::OutOfRange { index: 9 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_with_move_copies() {
        let board = Board::empty();
        let next = board.with_move(4, Mark::X).unwrap();
        assert_eq!(board.get(4), None);
        assert_eq!(next.get(4), Some(Mark::X));
    }

    #[test]
    fn test_game_state_play() {
        let mut state = GameState::new();
        assert_eq!(state.current_turn, Mark::X);

        assert_eq!(state.play(4), Ok(Outcome::InProgress));
        assert_eq!(state.current_turn, Mark::O);
        assert_eq!(state.ply, 1);

        // 非法走法不切换走子方
        assert_eq!(state.play(4), Err(GameError::Occupied { index: 4 }));
        assert_eq!(state.current_turn, Mark::O);
        assert_eq!(state.ply, 1);
    }

    #[test]
    fn test_game_state_win_then_game_over() {
        let mut state = GameState::new();
        // X: 0 1 2, O: 3 4
        for index in [0, 3, 1, 4] {
            state.play(index).unwrap();
        }
        assert_eq!(state.play(2), Ok(Outcome::Win(Mark::X)));
        assert!(state.is_over());
        assert_eq!(state.play(8), Err(GameError::GameOver));
    }

    #[test]
    fn test_full_board_draw_rejects_moves() {
        let board = Notation::parse("XOXXOOOXX").unwrap();
        let mut state = GameState::from_board(board, Mark::O);
        assert_eq!(state.outcome(), Outcome::Draw);
        assert_eq!(state.ply, 9);
        assert!(board.empty_cells().is_empty());
        assert_eq!(state.play(0), Err(GameError::GameOver));
    }

    #[test]
    fn test_board_serde() {
        let board = Notation::parse("X...O....").unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let parsed: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, board);
    }
}
