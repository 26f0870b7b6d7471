// src/gui/components/toast.rs
//
// Transient bottom-right notification, green for success, red for error.
// Lives for a few seconds; app.update() drops it once expired.

use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Color32};

use crate::config::consts::TOAST_SECS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    created: Instant,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into(), created: Instant::now() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, message: message.into(), created: Instant::now() }
    }

    pub fn expired(&self) -> bool {
        self.created.elapsed() >= Duration::from_secs(TOAST_SECS)
    }
}

pub fn draw(ctx: &egui::Context, toast: &Toast) {
    let fill = match toast.kind {
        ToastKind::Success => Color32::from_rgb(0x22, 0xC5, 0x5E),
        ToastKind::Error => Color32::from_rgb(0xEF, 0x44, 0x44),
    };

    egui::Area::new(egui::Id::new("toast"))
        .anchor(Align2::RIGHT_BOTTOM, [-16.0, -16.0])
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).fill(fill).show(ui, |ui| {
                ui.colored_label(Color32::WHITE, &toast.message);
            });
        });
}
