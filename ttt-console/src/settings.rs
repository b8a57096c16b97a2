//! 游戏设置模块
//!
//! 提供设置数据结构和加载。设置文件不存在时使用默认设置（人类执 X，Minimax 执 O）。

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use ttt_ai::{AiConfig, StrategyKind};
use ttt_rules::Mark;

use crate::error::Result;

/// 玩家类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerKind {
    /// 控制台输入
    Human,
    /// AI 策略
    Ai(StrategyKind),
}

impl PlayerKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            PlayerKind::Human => "Human",
            PlayerKind::Ai(kind) => kind.display_name(),
        }
    }
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// 对应的过滤指令
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// 游戏设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// X 方（先手）
    pub player_x: PlayerKind,
    /// O 方（后手）
    pub player_o: PlayerKind,
    /// 随机策略种子
    pub seed: Option<u64>,
    /// Minimax 剪枝
    pub pruning: bool,
    /// 日志级别
    pub log_level: LogLevel,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            player_x: PlayerKind::Human,
            player_o: PlayerKind::Ai(StrategyKind::Minimax),
            seed: None,
            pruning: false,
            log_level: LogLevel::default(),
        }
    }
}

impl GameSettings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("tictactoe");
            path.push("settings.json");
            path
        })
    }

    /// 从默认位置加载设置，失败时使用默认设置
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            tracing::warn!("No config directory, using default settings");
            return Self::default();
        };

        if !path.exists() {
            tracing::info!("Settings file not found, using default settings");
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings: {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Invalid settings file: {}, using default settings", e);
                Self::default()
            }
        }
    }

    /// 从指定文件加载设置
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// 保存设置到指定文件
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!("Saved settings: {:?}", path);
        Ok(())
    }

    /// 指定方的玩家类型
    pub fn player(&self, mark: Mark) -> PlayerKind {
        match mark {
            Mark::X => self.player_x,
            Mark::O => self.player_o,
        }
    }

    /// 指定策略的 AI 配置
    pub fn ai_config(&self, strategy: StrategyKind) -> AiConfig {
        AiConfig {
            strategy,
            seed: self.seed,
            pruning: self.pruning,
        }
    }
}
