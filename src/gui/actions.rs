// src/gui/actions.rs
//
// User-triggered operations: submit a search, reset the cache, export CSV.
// Kept out of the components so the draw code stays declarative.

use eframe::egui;

use crate::config::state::View;
use crate::error::FetchError;
use crate::export;
use crate::table::SortState;

use super::app::App;
use super::components::toast::Toast;

/// Kick off a search on a worker thread. The store flips to Loading
/// immediately; the outcome lands in the app's channel tagged with a
/// sequence number so a late response from an abandoned request is ignored.
pub fn search(app: &mut App, ui_ctx: &egui::Context) {
    if app.is_loading() {
        return;
    }

    let Some(client) = app.client.clone() else {
        app.store.on_fetch_failure("HTTP client unavailable");
        return;
    };

    let pairs = app.state.form.query_pairs(app.state.mode);
    if pairs.is_empty() {
        logd!("Search: Refused, query is empty");
        app.show_toast(Toast::error(FetchError::EmptyQuery.to_string()));
        return;
    }

    app.store.on_fetch_start();
    app.req_seq += 1;

    let seq = app.req_seq;
    let tx = app.tx.clone();
    let form = app.state.form.clone();
    let mode = app.state.mode;
    let repaint = ui_ctx.clone();

    logf!("Search: Begin seq={} mode={:?}", seq, mode);
    std::thread::spawn(move || {
        let outcome = client.search(&form, mode);
        let _ = tx.send((seq, outcome));
        repaint.request_repaint();
    });
}

/// Clear the cached record set and the durable copy, back to the form.
pub fn reset(app: &mut App) {
    logf!("Reset: Clearing results");
    app.store.reset();
    app.sort = SortState::default();
    app.rebuild_view();
    app.state.gui.view = View::Search;
}

/// Export the full, unsorted record set as a dated CSV file.
pub fn export(app: &mut App) {
    let set = app.store.snapshot();
    match export::export_csv(&set.records, &app.columns, &app.state.export_dir) {
        Ok(path) => {
            app.show_toast(Toast::success(format!("Exported {}", path.display())));
        }
        Err(e) => {
            loge!("Export: {}", e);
            app.show_toast(Toast::error(e.to_string()));
        }
    }
}
