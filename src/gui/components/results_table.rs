// src/gui/components/results_table.rs
//
// The results screen: action bar, then the record table. Headers are
// clickable sort targets; cells render by their classified kind.

use eframe::egui::{self, Align, Color32, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::{actions, app::App};
use crate::store::FetchStatus;
use crate::table::{self, CellKind, SortDirection};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // Copy out what the buttons need; actions take &mut App.
    let (status, empty, error) = {
        let set = app.store.snapshot();
        (set.status, set.is_empty(), set.error.clone())
    };

    // --- Action bar ---
    let mut do_reset = false;
    let mut do_export = false;
    ui.horizontal(|ui| {
        ui.heading("Search Results");
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let exportable = status == FetchStatus::Succeeded && !empty;

            if ui.button("New Search").clicked() {
                app.state.gui.view = crate::config::state::View::Search;
            }
            if !empty && ui.button("Clear results").clicked() {
                do_reset = true;
            }
            if ui
                .add_enabled(exportable, egui::Button::new("Export"))
                .on_hover_text("Export data as CSV")
                .clicked()
            {
                do_export = true;
            }
        });
    });
    if do_reset {
        actions::reset(app);
        return;
    }
    if do_export {
        actions::export(app);
    }

    ui.separator();

    match status {
        FetchStatus::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading…");
            });
        }
        FetchStatus::Failed => {
            let msg = error.as_deref().unwrap_or("unknown error");
            ui.label(
                RichText::new(format!("Error: {msg}")).color(Color32::from_rgb(0xDC, 0x26, 0x26)),
            );
        }
        FetchStatus::Idle | FetchStatus::Succeeded if empty => {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(RichText::new("No results found").strong());
                ui.label("Try adjusting your search criteria and try again.");
                ui.add_space(8.0);
                if ui.button("Start New Search").clicked() {
                    app.state.gui.view = crate::config::state::View::Search;
                }
            });
        }
        _ => inner_table(ui, app),
    }
}

fn inner_table(ui: &mut egui::Ui, app: &mut App) {
    let columns = app.columns.clone();
    let mut clicked_col: Option<String> = None;

    let mut table = TableBuilder::new(ui).striped(true).min_scrolled_height(0.0);
    for _ in &columns {
        table = table.column(Column::auto().resizable(true).clip(true).at_least(60.0));
    }

    table
        .header(24.0, |mut header| {
            for col in &columns {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);

                    let marker = if app.sort.key.as_deref() == Some(col.as_str()) {
                        match app.sort.direction {
                            SortDirection::Asc => "▲",
                            SortDirection::Desc => "▼",
                        }
                    } else {
                        "↕"
                    };
                    let text = format!("{} {}", table::capitalize_header(col), marker);

                    let resp = ui
                        .add(egui::Label::new(RichText::new(text).strong()).selectable(false))
                        .interact(Sense::click());
                    if resp.clicked() {
                        clicked_col = Some(col.clone());
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.view_rows.len(), |mut row| {
                let row_idx = row.index();
                for col in &columns {
                    let cell = app.view_rows.get(row_idx).and_then(|r| r.get(col));
                    let view = table::classify(cell);
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        match (&view.href, view.kind) {
                            (Some(href), _) => {
                                ui.hyperlink_to(&view.text, href);
                            }
                            (None, CellKind::Empty) => {
                                ui.weak(&view.text);
                            }
                            (None, _) => {
                                ui.label(&view.text);
                            }
                        }
                    });
                }
            });
        });

    if let Some(col) = clicked_col {
        app.sort_by(&col);
    }
}
