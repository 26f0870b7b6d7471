// src/gui/components/search_form.rs
//
// The search screen: mode selector, the seven criteria inputs, submit.
// Submission is disabled while a request is in flight.

use eframe::egui::{self, Color32, RichText};

use crate::config::options::{SearchMode, ALL_FIELDS};
use crate::gui::{actions, app::App};
use crate::store::FetchStatus;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.heading("Search Information");
    });
    ui.add_space(8.0);

    // --- Search mode ---
    ui.horizontal(|ui| {
        ui.label("Search type:");
        let mode = &mut app.state.mode;
        egui::ComboBox::from_id_salt("search_mode")
            .selected_text(mode.label())
            .show_ui(ui, |ui| {
                for m in SearchMode::ALL {
                    ui.selectable_value(mode, *m, m.label());
                }
            });
    });

    ui.add_space(8.0);

    // --- Criteria inputs ---
    // Fields outside the current mode stay visible but inert; the query
    // builder ignores them.
    let active = app.state.mode.fields();
    egui::Grid::new("search_fields").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
        for field in ALL_FIELDS {
            let enabled = active.contains(field);
            ui.label(field.label());
            ui.add_enabled(
                enabled,
                egui::TextEdit::singleline(app.state.form.get_mut(*field))
                    .hint_text(format!("Enter {}", field.label())),
            );
            ui.end_row();
        }
    });

    ui.add_space(12.0);

    // --- Submit ---
    let loading = app.is_loading();
    ui.horizontal(|ui| {
        let label = if loading { "Searching…" } else { "Search" };
        if ui.add_enabled(!loading, egui::Button::new(label)).clicked() {
            actions::search(app, ui.ctx());
        }
        if loading {
            ui.spinner();
        }
        let has_cache = !app.store.snapshot().is_empty();
        if has_cache && ui.button("View results").clicked() {
            app.state.gui.view = crate::config::state::View::Results;
        }
    });

    // Failed fetches keep the user on the form with the message in view.
    let set = app.store.snapshot();
    if set.status == FetchStatus::Failed {
        if let Some(err) = &set.error {
            ui.add_space(8.0);
            ui.label(RichText::new(format!("Error: {err}")).color(Color32::from_rgb(0xDC, 0x26, 0x26)));
        }
    }
}
