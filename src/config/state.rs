// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Text fields mirrored into `FetchOptions` on refresh
    pub standings_text: String,
    pub order_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 980,
            window_h: 720,
            standings_text: s!(),
            order_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let gui = GuiState {
            standings_text: options.fetch.standings.as_ref().map(|l| l.describe()).unwrap_or_default(),
            order_text: options.fetch.order.as_ref().map(|l| l.describe()).unwrap_or_default(),
            ..GuiState::default()
        };
        Self { options, gui }
    }
}
