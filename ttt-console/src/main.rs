use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ttt_console::{build_agent, GameSettings, Session};
use ttt_rules::Mark;

fn main() -> Result<()> {
    // 设置决定默认日志级别，需在初始化日志之前加载
    let settings = GameSettings::load();

    // 初始化日志（输出到 stderr，不干扰棋盘显示）
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_directive()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    info!(
        "Starting game: X = {}, O = {}",
        settings.player_x.display_name(),
        settings.player_o.display_name()
    );

    let mut session = Session::new(
        build_agent(&settings, Mark::X),
        build_agent(&settings, Mark::O),
        std::io::stdout(),
    )?;
    let outcome = session.run()?;

    info!("Finished: {:?}, fallbacks: {}", outcome, session.fallbacks());
    Ok(())
}
