use egui::{CentralPanel, Color32, Context, RichText};
use crate::app::CoursePlayerApp;
use crate::ui::helpers::two_button_row;

pub fn ui_player(app: &mut CoursePlayerApp, ctx: &Context, now_ms: u64) {
    // Datos copiados antes de pintar; las acciones se aplican al final
    let lesson_id = app.player.lesson_id.clone();
    let video_url = app.player.video_url.clone();
    let title = lesson_id
        .as_ref()
        .and_then(|id| app.session.index().lesson_title(id))
        .map(str::to_owned);
    let completed = lesson_id
        .as_ref()
        .map(|id| app.session.is_completed(id))
        .unwrap_or(false);
    let remaining = app.session.advance_remaining_ms(now_ms);

    let mut clicked_prev = false;
    let mut clicked_next = false;
    let mut clicked_complete = false;
    let mut clicked_open_video = false;
    let mut close_quiz = false;

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 640.0;
        let content_width = ui.available_width().min(max_width);

        ui.vertical_centered(|ui| {
            ui.set_width(content_width);
            ui.add_space(24.0);

            let (Some(title), Some(url)) = (&title, &video_url) else {
                ui.heading("Elige una lección para empezar");
                return;
            };

            ui.heading(title);
            ui.add_space(8.0);
            ui.label(RichText::new(url).monospace().weak());
            if ui.link("▶ Abrir vídeo").clicked() {
                clicked_open_video = true;
            }
            ui.add_space(16.0);

            if completed {
                ui.label(RichText::new("✅ Lección completada").color(Color32::LIGHT_GREEN));
            } else if ui
                .add_sized([content_width, 36.0], egui::Button::new("✔ Marcar como completada"))
                .clicked()
            {
                clicked_complete = true;
            }

            if app.player.loading_next {
                ui.horizontal(|ui| {
                    ui.spinner();
                    let secs = remaining.unwrap_or(0) as f32 / 1000.0;
                    ui.label(format!("Cargando la siguiente lección en {secs:.1} s..."));
                });
            }

            ui.add_space(16.0);
            (clicked_prev, clicked_next) =
                two_button_row(ui, content_width, "⏮ Anterior", "⏭ Siguiente");

            if !app.player.message.is_empty() {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(&app.player.message)
                        .color(Color32::YELLOW)
                        .strong(),
                );
            }

            if let Some(quiz) = &app.player.open_quiz {
                ui.add_space(16.0);
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.label(RichText::new(format!("📝 Quiz {}", quiz.quiz_id)).strong());
                    ui.label(format!("Lección {}", quiz.lesson_id));
                    if ui.button("Cerrar").clicked() {
                        close_quiz = true;
                    }
                });
            }
        });
    });

    if clicked_open_video {
        app.player.pending_url = video_url;
    }
    if clicked_complete {
        app.complete_current_lesson(now_ms);
    }
    if clicked_prev {
        app.previous_video();
    }
    if clicked_next {
        app.next_video();
    }
    if close_quiz {
        app.player.open_quiz = None;
    }
}
