use egui::{Context, ProgressBar, RichText, Visuals};
use crate::app::CoursePlayerApp;

pub fn top_panel(app: &CoursePlayerApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let title = app
                .session
                .course()
                .map(|c| c.title.as_str())
                .unwrap_or("Cargando curso...");
            ui.heading(title);

            let progress = app.session.progress();
            ui.add(
                ProgressBar::new(progress.fraction())
                    .desired_width(220.0)
                    .text(format!(
                        "{}/{} vídeos · {}%",
                        progress.completed_videos,
                        progress.total_videos,
                        progress.percent()
                    )),
            );
            ui.label(
                RichText::new(format!("{} lecciones", app.player.total_lessons)).weak(),
            );
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Modo oscuro").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀Modo claro").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            }
        );
    });
}
