use game_core::{EventSink, Player};

/// Terminal bell standing in for the impact and score sounds
#[derive(Debug, Default)]
pub struct Bell {
    enabled: bool,
    pending: bool,
}

impl Bell {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            pending: false,
        }
    }

    /// Whether the bell should ring this frame; clears the request
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending) && self.enabled
    }
}

impl EventSink for Bell {
    fn on_wall_impact(&mut self) {
        self.pending = true;
    }

    fn on_paddle_impact(&mut self) {
        self.pending = true;
    }

    fn on_score(&mut self, player: Player) {
        tracing::debug!(?player, "score cue");
        self.pending = true;
    }
}
