// src/gui/app.rs
use std::error::Error;
use std::sync::mpsc;

use eframe::egui;

use crate::{
    config::state::{AppState, View},
    error::FetchError,
    net::SearchClient,
    store::{FilePersistence, Record, ResultStore},
    table::{self, SortState},
};

use super::components::{self, toast::Toast};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Lead Finder",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// A finished fetch, tagged with the request sequence number that started
/// it so stale responses can be dropped.
pub type FetchOutcome = (u64, Result<Vec<Record>, FetchError>);

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub store: ResultStore,

    // transient table UI state
    pub sort: SortState,
    pub view_rows: Vec<Record>,
    pub columns: Vec<String>,

    // transient export/search notification
    pub toast: Option<Toast>,

    // fetch plumbing (worker threads send, update() drains)
    pub client: Option<SearchClient>,
    pub tx: mpsc::Sender<FetchOutcome>,
    pub rx: mpsc::Receiver<FetchOutcome>,
    pub req_seq: u64,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut store = ResultStore::new(Box::new(FilePersistence::default()));
        store.rehydrate();

        let client = match SearchClient::new() {
            Ok(c) => Some(c),
            Err(e) => {
                loge!("Init: HTTP client unavailable: {}", e);
                None
            }
        };

        let (tx, rx) = mpsc::channel();

        logf!("Init: {} cached record(s)", store.snapshot().len());

        let mut app = Self {
            state,
            store,
            sort: SortState::default(),
            view_rows: Vec::new(),
            columns: Vec::new(),
            toast: None,
            client,
            tx,
            rx,
            req_seq: 0,
        };
        app.rebuild_view();
        app
    }

    /// True while a request is outstanding; the form disables re-submission.
    pub fn is_loading(&self) -> bool {
        self.store.snapshot().status == crate::store::FetchStatus::Loading
    }

    /// Recompute the derived table view (columns + sorted rows) from the
    /// store snapshot and the current sort state.
    pub fn rebuild_view(&mut self) {
        let set = self.store.snapshot();
        self.columns = table::derive_columns(&set.records);
        self.view_rows = table::sort_records(&set.records, &self.sort);
    }

    /// Header click: advance the sort state machine and re-sort.
    pub fn sort_by(&mut self, column: &str) {
        self.sort.click(column);
        logd!("UI: Sort → {:?} {:?}", self.sort.key, self.sort.direction);
        self.rebuild_view();
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain finished fetches before drawing anything.
        while let Ok((seq, outcome)) = self.rx.try_recv() {
            if seq != self.req_seq {
                logd!("Net: Dropping stale response (seq {})", seq);
                continue;
            }
            match outcome {
                Ok(records) => {
                    self.store.on_fetch_success(records);
                    self.sort = SortState::default();
                    self.rebuild_view();
                    self.state.gui.view = View::Results;
                }
                Err(e) => {
                    // Form stays up with the error under the button.
                    self.store.on_fetch_failure(e.to_string());
                }
            }
        }

        if self.toast.as_ref().is_some_and(|t| t.expired()) {
            self.toast = None;
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.state.gui.view {
            View::Search => components::search_form::draw(ui, self),
            View::Results => components::results_table::draw(ui, self),
        });

        if let Some(toast) = &self.toast {
            components::toast::draw(ctx, toast);
            // Wake up again to clear it even with no input events.
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
