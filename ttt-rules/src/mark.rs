//! 棋子标记定义

use serde::{Deserialize, Serialize};

/// 标记（双方各执一种）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// 先手
    X,
    /// 后手
    O,
}

impl Mark {
    /// 双方标记，按胜负判定的检查顺序
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// 获取对方标记
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// 获取显示字符
    pub fn to_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// 从字符解析（不区分大小写）
    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'x' | 'X' => Some(Mark::X),
            'o' | 'O' => Some(Mark::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_mark_char() {
        assert_eq!(Mark::X.to_char(), 'X');
        assert_eq!(Mark::from_char('o'), Some(Mark::O));
        assert_eq!(Mark::from_char('X'), Some(Mark::X));
        assert_eq!(Mark::from_char('.'), None);
        assert_eq!(Mark::O.to_string(), "O");
    }
}
