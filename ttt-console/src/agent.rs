//! 玩家（走法来源）
//!
//! 两种玩家：
//! - 人类玩家：从输入流读取格子编号，非法输入就地重新提示
//! - 策略玩家：委托给 [`Strategy`]，给出的走法由对局驱动校验

use std::io::{BufRead, Write};

use ttt_ai::Strategy;
use ttt_rules::{Board, Mark};

use crate::error::{ConsoleError, Result};

/// 玩家抽象
pub trait Agent {
    /// 执子标记
    fn mark(&self) -> Mark;

    /// 显示名称
    fn name(&self) -> &str;

    /// 是否为人类交互玩家
    fn is_interactive(&self) -> bool;

    /// 给出走法；策略玩家可能给出非法走法或 `None`
    fn propose_move(&mut self, board: &Board) -> Result<Option<usize>>;
}

/// 人类玩家
pub struct HumanAgent<R, W> {
    mark: Mark,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    pub fn new(mark: Mark, input: R, output: W) -> Self {
        Self {
            mark,
            input,
            output,
        }
    }

    /// 取回输出流（测试用）
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Agent for HumanAgent<R, W> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        "human"
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn propose_move(&mut self, board: &Board) -> Result<Option<usize>> {
        loop {
            write!(self.output, "Enter your move for '{}' (0-8): ", self.mark)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ConsoleError::InputClosed);
            }

            match line.trim().parse::<i64>() {
                Ok(value) if value >= 0 && board.is_valid_move(value as usize) => {
                    return Ok(Some(value as usize));
                }
                Ok(value) => {
                    tracing::debug!("Rejected move {} from {}", value, self.mark);
                    writeln!(self.output, "Invalid move. Try again.")?;
                }
                Err(_) => {
                    writeln!(self.output, "Please enter a number.")?;
                }
            }
        }
    }
}

/// 策略玩家
pub struct StrategyAgent {
    mark: Mark,
    strategy: Box<dyn Strategy>,
}

impl StrategyAgent {
    pub fn new(mark: Mark, strategy: Box<dyn Strategy>) -> Self {
        Self { mark, strategy }
    }
}

impl Agent for StrategyAgent {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &str {
        self.strategy.name()
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn propose_move(&mut self, board: &Board) -> Result<Option<usize>> {
        Ok(self.strategy.determine_move(board, self.mark))
    }
}
