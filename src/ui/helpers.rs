// src/ui/helpers.rs
use crate::view_models::OptionRow;
use egui::{Button, RadioButton, Ui, Vec2};

pub fn big_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

/// Grupo de radios de una pregunta (una sola opción marcada).
/// Devuelve el índice pulsado en este frame, si lo hay.
pub fn radio_group(ui: &mut Ui, rows: &[OptionRow]) -> Option<usize> {
    let mut clicked = None;
    ui.vertical(|ui| {
        for row in rows {
            let radio = RadioButton::new(row.checked, row.label.as_str());
            if ui.add_enabled(row.enabled, radio).clicked() {
                clicked = Some(row.idx);
            }
        }
    });
    clicked
}
