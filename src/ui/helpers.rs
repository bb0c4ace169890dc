// src/ui/helpers.rs
use egui::{Button, Color32, Response, RichText, Ui, Vec2};

/// Fila de la barra lateral: deshabilitada si está bloqueada, resaltada si está seleccionada.
pub fn content_row(ui: &mut Ui, label: String, width: f32, enabled: bool, selected: bool) -> Response {
    let text = if selected {
        RichText::new(label).strong()
    } else {
        RichText::new(label)
    };
    let mut button = Button::new(text).min_size(Vec2::new(width, 24.0));
    if selected {
        button = button.fill(ui.visuals().selection.bg_fill);
    }
    ui.add_enabled(enabled, button)
}

/// Estrella de marcador. Devuelve `true` si se pulsó.
pub fn bookmark_toggle(ui: &mut Ui, bookmarked: bool) -> bool {
    let (icon, color) = if bookmarked {
        ("★", Color32::GOLD)
    } else {
        ("☆", ui.visuals().weak_text_color())
    };
    ui.add(Button::new(RichText::new(icon).color(color)).frame(false))
        .on_hover_text(if bookmarked { "Quitar de guardados" } else { "Guardar lección" })
        .clicked()
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        // espacio para centrar la fila en su panel
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}
