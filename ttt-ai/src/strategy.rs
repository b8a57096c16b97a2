//! 策略抽象

use ttt_rules::{Board, Mark};

/// 走法策略：给定棋盘和走子方，返回格子索引
///
/// 只有在棋盘没有空格时才返回 `None`。返回的索引由调用方校验，
/// 策略实现有缺陷时可能给出非法走法。
pub trait Strategy {
    /// 策略名称（用于日志）
    fn name(&self) -> &'static str;

    /// 选择走法
    fn determine_move(&mut self, board: &Board, mark: Mark) -> Option<usize>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn determine_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        (**self).determine_move(board, mark)
    }
}
