use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// カンバンのカラムに対応するタスク状態。
///
/// 状態遷移は自由形式で、3状態間の6方向すべてを許可する。終端状態はなく、
/// `Done` からでも戻せる。同一状態への遷移は有効な no-op として扱う。
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    ToDo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToDo => "TO_DO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "TO_DO" => Ok(Self::ToDo),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            other => Err(format!("Unknown task status: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_to_do() {
        assert_eq!(TaskStatus::default(), TaskStatus::ToDo);
    }

    #[test]
    fn wire_names_round_trip() {
        for status in TaskStatus::ALL {
            let parsed: TaskStatus = status.as_str().parse().expect("parse back");
            assert_eq!(parsed, status);
        }
        assert!("BLOCKED".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).expect("serialize");
        assert_eq!(json, "\"IN_PROGRESS\"");
        let back: TaskStatus = serde_json::from_str("\"DONE\"").expect("deserialize");
        assert_eq!(back, TaskStatus::Done);
    }
}
