use serde::Serialize;

/// Session lifecycle.
///
/// `Intro -> Running -> {Paused} -> Over -> (reset) -> Intro | Running`.
/// A paused session leaves only through a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionStatus {
    Intro,
    Running,
    Paused,
    Over,
}

impl SessionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionStatus::Intro => "intro",
            SessionStatus::Running => "running",
            SessionStatus::Paused => "paused",
            SessionStatus::Over => "over",
        }
    }
}

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameOverReason {
    /// The dropped layer did not overlap the one below
    Missed,
    /// The countdown reached zero
    TimeUp,
}

/// Score, timer and flags of one session.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub score: u32,
    pub timer: u32,
    /// Last drop landed with no measurable overhang
    pub perfect: bool,
    pub perfect_streak: u32,
}

impl SessionState {
    pub fn new(timer: u32) -> Self {
        Self {
            status: SessionStatus::Intro,
            score: 0,
            timer,
            perfect: false,
            perfect_streak: 0,
        }
    }
}
