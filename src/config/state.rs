// src/config/state.rs

use std::path::PathBuf;

use super::consts::DEFAULT_OUT_DIR;
use super::options::{SearchForm, SearchMode};

/// Which of the two screens is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Search,
    Results,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub view: View,
    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self { view: View::Search, window_w: 1100, window_h: 700 }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub form: SearchForm,
    pub mode: SearchMode,
    pub export_dir: PathBuf,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: SearchForm::default(),
            mode: SearchMode::default(),
            export_dir: PathBuf::from(DEFAULT_OUT_DIR),
            gui: GuiState::default(),
        }
    }
}
