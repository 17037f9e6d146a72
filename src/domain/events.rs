//! Presentation collaborator.
//!
//! The core never touches DOM, overlay or audio. It reports what happened through
//! [`Presenter`] and the host decides how to show it.

use serde::Serialize;

use super::state::GameOverReason;

/// Notifications sent from the core to the presentation layer.
pub trait Presenter {
    fn started(&mut self) {}
    fn score_changed(&mut self, _score: u32) {}
    fn perfect(&mut self, _streak: u32) {}
    fn timer_tick(&mut self, _remaining: u32) {}
    fn game_over(&mut self, _score: u32, _reason: GameOverReason) {}
    fn paused(&mut self) {}
    fn reset(&mut self) {}
}

/// Presenter that ignores everything.
#[derive(Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    Started,
    ScoreChanged { score: u32 },
    Perfect { streak: u32 },
    TimerTick { remaining: u32 },
    GameOver { score: u32, reason: GameOverReason },
    Paused,
    Reset,
}

/// Presenter that queues events for the host to drain once per frame.
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drain as a JSON array.
    pub fn drain_json(&mut self) -> String {
        let events = self.drain();
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Presenter for EventQueue {
    fn started(&mut self) {
        self.events.push(GameEvent::Started);
    }

    fn score_changed(&mut self, score: u32) {
        self.events.push(GameEvent::ScoreChanged { score });
    }

    fn perfect(&mut self, streak: u32) {
        self.events.push(GameEvent::Perfect { streak });
    }

    fn timer_tick(&mut self, remaining: u32) {
        self.events.push(GameEvent::TimerTick { remaining });
    }

    fn game_over(&mut self, score: u32, reason: GameOverReason) {
        self.events.push(GameEvent::GameOver { score, reason });
    }

    fn paused(&mut self) {
        self.events.push(GameEvent::Paused);
    }

    fn reset(&mut self) {
        self.events.push(GameEvent::Reset);
    }
}
