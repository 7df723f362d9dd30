//! HUD and end-of-session overlay
//!
//! The game only pushes text; where it ends up (DOM, log, test buffer) is
//! up to the `DisplaySink` implementation.

/// Receiver for counters and the end-of-session overlay
pub trait DisplaySink {
    fn set_items_text(&mut self, text: &str);
    fn set_lives_text(&mut self, text: &str);
    /// Show the overlay with a message
    fn show_overlay(&mut self, message: &str);
    fn hide_overlay(&mut self);
}

pub fn items_text(items_collected: u32) -> String {
    format!("Items Collected: {}", items_collected)
}

pub fn lives_text(lives: u32) -> String {
    format!("Lives: {}", lives)
}

pub fn game_over_message(items_collected: u32) -> String {
    format!("Game Over. You collected {} items.", items_collected)
}

pub const VICTORY_MESSAGE: &str = "You win! You are a great pilot!";

/// In-memory HUD used by the headless runner and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HudText {
    pub items: String,
    pub lives: String,
    /// Overlay message while visible
    pub overlay: Option<String>,
}

impl HudText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay.is_some()
    }
}

impl DisplaySink for HudText {
    fn set_items_text(&mut self, text: &str) {
        self.items = text.to_string();
    }

    fn set_lives_text(&mut self, text: &str) {
        self.lives = text.to_string();
    }

    fn show_overlay(&mut self, message: &str) {
        log::info!("{}", message);
        self.overlay = Some(message.to_string());
    }

    fn hide_overlay(&mut self) {
        self.overlay = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_formats() {
        assert_eq!(items_text(3), "Items Collected: 3");
        assert_eq!(lives_text(0), "Lives: 0");
        assert_eq!(game_over_message(0), "Game Over. You collected 0 items.");
        assert_eq!(VICTORY_MESSAGE, "You win! You are a great pilot!");
    }

    #[test]
    fn test_hud_overlay_toggle() {
        let mut hud = HudText::new();
        assert!(!hud.overlay_visible());

        hud.show_overlay("hello");
        assert_eq!(hud.overlay.as_deref(), Some("hello"));

        hud.hide_overlay();
        assert!(!hud.overlay_visible());
    }
}
