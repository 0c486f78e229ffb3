use crate::{FLASH_SECS, TRANSIENT_MESSAGE_SECS};

// UiState holds presentation-only state. Times are egui input seconds.
#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) guess_input: String,
    pub(crate) transient_message: Option<TransientMessage>,
    pub(crate) flash: Option<Flash>,
    pub(crate) now: f64,
}

impl UiState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Shows `text` on the status line for a few seconds and flashes an error.
    pub(crate) fn show_transient(&mut self, text: String) {
        self.transient_message = Some(TransientMessage {
            text,
            expires_at: self.now + TRANSIENT_MESSAGE_SECS,
        });
        self.start_flash(FlashKind::Error);
    }

    pub(crate) fn start_flash(&mut self, kind: FlashKind) {
        self.flash = Some(Flash {
            kind,
            expires_at: self.now + FLASH_SECS,
        });
    }

    /// Clears everything tied to the previous round.
    pub(crate) fn reset_round(&mut self) {
        self.guess_input.clear();
        self.transient_message = None;
        self.flash = None;
    }

    /// Advances the clock and drops expired effects.
    ///
    /// A transient message is only reverted while the game is still running.
    pub(crate) fn tick(&mut self, now: f64, game_over: bool) {
        self.now = now;
        if self.flash.as_ref().is_some_and(|flash| flash.expires_at <= now) {
            self.flash = None;
        }
        if !game_over
            && self
                .transient_message
                .as_ref()
                .is_some_and(|message| message.expires_at <= now)
        {
            self.transient_message = None;
        }
    }

    /// Earliest time at which [`UiState::tick`] would change something.
    #[must_use]
    pub(crate) fn next_deadline(&self) -> Option<f64> {
        let flash = self.flash.as_ref().map(|flash| flash.expires_at);
        let message = self
            .transient_message
            .as_ref()
            .map(|message| message.expires_at);
        match (flash, message) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    #[must_use]
    pub(crate) fn active_flash(&self) -> Option<FlashKind> {
        self.flash.as_ref().map(|flash| flash.kind)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TransientMessage {
    pub(crate) text: String,
    pub(crate) expires_at: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Flash {
    pub(crate) kind: FlashKind,
    pub(crate) expires_at: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum FlashKind {
    Success,
    Error,
}
