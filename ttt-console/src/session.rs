//! 对局驱动
//!
//! 循环：判断终局 → 请求走法 → 校验并落子。策略玩家给出非法走法时，
//! 改走索引最小的空格并记录一次回退。

use std::io::Write;

use tracing::{info, warn};
use ttt_rules::{GameError, GameState, Mark, Outcome};

use crate::agent::Agent;
use crate::error::{ConsoleError, Result};
use crate::render::render_board;

/// 单步结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// 走子方
    pub mark: Mark,
    /// 实际落子的格子
    pub index: usize,
    /// 是否使用了回退走法
    pub fallback: bool,
    /// 落子后的结果
    pub outcome: Outcome,
}

/// 一局对局
pub struct Session<W: Write> {
    state: GameState,
    /// 按标记存放：[X, O]
    agents: [Box<dyn Agent>; 2],
    output: W,
    fallbacks: u32,
}

fn slot(mark: Mark) -> usize {
    match mark {
        Mark::X => 0,
        Mark::O => 1,
    }
}

impl<W: Write> Session<W> {
    /// 创建对局，两位玩家必须执不同标记
    pub fn new(first: Box<dyn Agent>, second: Box<dyn Agent>, output: W) -> Result<Self> {
        if first.mark() == second.mark() {
            return Err(ConsoleError::DuplicateMark(first.mark()));
        }
        let agents = if first.mark() == Mark::X {
            [first, second]
        } else {
            [second, first]
        };

        Ok(Self {
            state: GameState::new(),
            agents,
            output,
            fallbacks: 0,
        })
    }

    /// 从指定局面开始
    pub fn with_state(mut self, state: GameState) -> Self {
        self.state = state;
        self
    }

    /// 当前对局状态
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// 回退走法次数
    pub fn fallbacks(&self) -> u32 {
        self.fallbacks
    }

    /// 取回输出流
    pub fn into_output(self) -> W {
        self.output
    }

    /// 执行一步
    pub fn play_turn(&mut self) -> Result<TurnReport> {
        if self.state.is_over() {
            return Err(GameError::GameOver.into());
        }

        let mark = self.state.current_turn;
        let agent = &mut self.agents[slot(mark)];

        if !agent.is_interactive() {
            writeln!(self.output, "{}'s AI is thinking...", mark)?;
        }

        let proposal = agent.propose_move(&self.state.board)?;

        let (index, fallback) = match proposal {
            Some(index) if self.state.board.is_valid_move(index) => (index, false),
            // 人类玩家已在输入端校验，这里直接交给规则报错
            Some(index) if agent.is_interactive() => (index, false),
            _ if agent.is_interactive() => return Err(ConsoleError::NoLegalMove(mark)),
            _ => {
                let index = self
                    .state
                    .board
                    .first_empty()
                    .ok_or(ConsoleError::NoLegalMove(mark))?;
                warn!(
                    "{} ({}) proposed invalid move {:?}, falling back to {}",
                    mark,
                    agent.name(),
                    proposal,
                    index
                );
                writeln!(
                    self.output,
                    "Error: Invalid move suggested by {}'s AI. Defaulting to first open cell.",
                    mark
                )?;
                self.fallbacks += 1;
                (index, true)
            }
        };

        let outcome = self.state.play(index)?;
        info!("{} played {} -> {:?}", mark, index, outcome);

        Ok(TurnReport {
            mark,
            index,
            fallback,
            outcome,
        })
    }

    /// 下完整局，返回结果
    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            write!(self.output, "{}", render_board(&self.state.board))?;
            let report = self.play_turn()?;

            if report.outcome.is_over() {
                write!(self.output, "{}", render_board(&self.state.board))?;
                writeln!(self.output, "{}", report.outcome)?;
                info!("Game over: {:?}", report.outcome);
                return Ok(report.outcome);
            }
        }
    }
}
