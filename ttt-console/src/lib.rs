//! 井字棋控制台
//!
//! 包含:
//! - 玩家抽象（人类 / 策略）
//! - 对局驱动与非法走法回退
//! - 棋盘文本渲染
//! - 设置加载

pub mod agent;
pub mod error;
pub mod render;
pub mod session;
pub mod settings;

pub use agent::{Agent, HumanAgent, StrategyAgent};
pub use error::{ConsoleError, Result};
pub use render::render_board;
pub use session::{Session, TurnReport};
pub use settings::{GameSettings, LogLevel, PlayerKind};

use std::io::{self, BufReader};

use ttt_rules::Mark;

/// 按设置创建控制台玩家（人类玩家读标准输入）
pub fn build_agent(settings: &GameSettings, mark: Mark) -> Box<dyn Agent> {
    match settings.player(mark) {
        PlayerKind::Human => Box::new(HumanAgent::new(
            mark,
            BufReader::new(io::stdin()),
            io::stdout(),
        )),
        PlayerKind::Ai(kind) => Box::new(StrategyAgent::new(
            mark,
            settings.ai_config(kind).build(),
        )),
    }
}
