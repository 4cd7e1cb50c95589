//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{BattleEvent, GachaEvent, ProgressionEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Summons and their rejections
    Gacha,
    /// Stage battles
    Battle,
    /// Missions, idle claims, level ups
    Progression,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Gacha(GachaEvent),
    Battle(BattleEvent),
    Progression(ProgressionEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Gacha(_) => Topic::Gacha,
            Event::Battle(_) => Topic::Battle,
            Event::Progression(_) => Topic::Progression,
        }
    }
}

impl From<GachaEvent> for Event {
    fn from(event: GachaEvent) -> Self {
        Event::Gacha(event)
    }
}

impl From<BattleEvent> for Event {
    fn from(event: BattleEvent) -> Self {
        Event::Battle(event)
    }
}

impl From<ProgressionEvent> for Event {
    fn from(event: ProgressionEvent) -> Self {
        Event::Progression(event)
    }
}

/// Topic-based event bus
///
/// Consumers subscribe to the topics they care about. Publishing never
/// blocks and never fails; events sent with no subscriber are dropped.
#[derive(Clone)]
pub struct EventBus {
    gacha: broadcast::Sender<Event>,
    battle: broadcast::Sender<Event>,
    progression: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            gacha: broadcast::channel(capacity).0,
            battle: broadcast::channel(capacity).0,
            progression: broadcast::channel(capacity).0,
        }
    }

    fn channel(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Gacha => &self.gacha,
            Topic::Battle => &self.battle,
            Topic::Progression => &self.progression,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: impl Into<Event>) {
        let event = event.into();
        let topic = event.topic();
        if self.channel(topic).send(event).is_err() {
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channel(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
