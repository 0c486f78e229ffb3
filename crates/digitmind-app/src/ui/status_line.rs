use digitmind_game::{AttemptLimit, RemainingAttempts};
use eframe::egui::{Align, Color32, Layout, RichText, Ui, Visuals};

use crate::ui::{SUCCESS_COLOR, icon};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GameStatus {
    NotStarted,
    InProgress { remaining: RemainingAttempts },
    Message(String),
    Won { attempts: usize },
    Lost { secret: String },
}

#[derive(Debug, Clone)]
pub(crate) struct StatusLineViewModel {
    status: GameStatus,
    attempt_count: usize,
    attempt_limit: AttemptLimit,
}

impl StatusLineViewModel {
    #[must_use]
    pub(crate) fn new(status: GameStatus, attempt_count: usize, attempt_limit: AttemptLimit) -> Self {
        Self {
            status,
            attempt_count,
            attempt_limit,
        }
    }

    #[must_use]
    pub(crate) fn status(&self) -> &GameStatus {
        &self.status
    }

    #[must_use]
    pub(crate) fn status_text(&self) -> String {
        match &self.status {
            GameStatus::NotStarted => "Choose your settings and press Start Game!".to_owned(),
            GameStatus::InProgress {
                remaining: RemainingAttempts::Unbounded,
            } => format!("{} Enter your guess! (Infinite attempts)", icon::HOURGLASS),
            GameStatus::InProgress {
                remaining: RemainingAttempts::Remaining(n),
            } => format!(
                "{} {n} attempt{} remaining. Enter your guess!",
                icon::HOURGLASS,
                plural(*n)
            ),
            GameStatus::Message(text) => format!("{} {text}", icon::WARNING),
            GameStatus::Won { attempts } => format!(
                "{} Congratulations! You guessed it in {attempts} attempt{}!",
                icon::PARTY,
                plural(*attempts)
            ),
            GameStatus::Lost { secret } => {
                format!("{} Game Over! The number was {secret}", icon::SAD)
            }
        }
    }

    /// Attempt counter such as `3/10` or `3/∞`.
    #[must_use]
    pub(crate) fn counter_text(&self) -> String {
        match self.attempt_limit {
            AttemptLimit::Unbounded => format!("{}/{}", self.attempt_count, icon::INFINITY),
            AttemptLimit::Limited(limit) => format!("{}/{limit}", self.attempt_count),
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

fn status_color(status: &GameStatus, visuals: &Visuals) -> Color32 {
    match status {
        GameStatus::Won { .. } => SUCCESS_COLOR,
        GameStatus::Lost { .. } | GameStatus::Message(_) => visuals.error_fg_color,
        GameStatus::NotStarted | GameStatus::InProgress { .. } => visuals.text_color(),
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel) {
    ui.horizontal(|ui| {
        let color = status_color(vm.status(), ui.visuals());
        ui.label(RichText::new(vm.status_text()).color(color).size(18.0));
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(RichText::new(vm.counter_text()).monospace().size(18.0));
            ui.label("Attempts:");
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(status: GameStatus) -> String {
        StatusLineViewModel::new(status, 0, AttemptLimit::Unbounded).status_text()
    }

    #[test]
    fn status_texts() {
        assert_eq!(
            text(GameStatus::InProgress {
                remaining: RemainingAttempts::Remaining(1)
            }),
            "⏳ 1 attempt remaining. Enter your guess!"
        );
        assert_eq!(
            text(GameStatus::InProgress {
                remaining: RemainingAttempts::Unbounded
            }),
            "⏳ Enter your guess! (Infinite attempts)"
        );
        assert_eq!(
            text(GameStatus::Won { attempts: 3 }),
            "🎉 Congratulations! You guessed it in 3 attempts!"
        );
        assert_eq!(
            text(GameStatus::Lost {
                secret: "0427".to_owned()
            }),
            "😔 Game Over! The number was 0427"
        );
    }

    #[test]
    fn win_is_shown_in_green() {
        for visuals in [Visuals::dark(), Visuals::light()] {
            assert_eq!(
                status_color(&GameStatus::Won { attempts: 2 }, &visuals),
                SUCCESS_COLOR
            );
            assert_eq!(
                status_color(&GameStatus::Lost { secret: "12".to_owned() }, &visuals),
                visuals.error_fg_color
            );
            assert_ne!(
                status_color(&GameStatus::Won { attempts: 2 }, &visuals),
                visuals.warn_fg_color
            );
        }
    }

    #[test]
    fn counter_shows_limit_or_infinity() {
        let vm = StatusLineViewModel::new(GameStatus::NotStarted, 3, AttemptLimit::limited(10));
        assert_eq!(vm.counter_text(), "3/10");
        let vm = StatusLineViewModel::new(GameStatus::NotStarted, 0, AttemptLimit::Unbounded);
        assert_eq!(vm.counter_text(), "0/∞");
    }
}
