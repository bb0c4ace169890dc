mod helpers;
pub mod layout;
pub mod views;

use crate::app::CoursePlayerApp;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::{Context, OpenUrl};
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for CoursePlayerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now_ms = (ctx.input(|i| i.time) * 1000.0) as u64;
        self.pump(now_ms);

        // Despertar la interfaz cuando venza el avance o mientras carga el curso
        if let Some(remaining) = self.session.advance_remaining_ms(now_ms) {
            ctx.request_repaint_after(Duration::from_millis(remaining.max(16)));
        } else if self.session.is_loading_course() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        top_panel(self, ctx);
        bottom_panel(ctx);
        views::sidebar::ui_sidebar(self, ctx);
        views::player::ui_player(self, ctx, now_ms);

        if let Some(url) = self.player.pending_url.take() {
            ctx.open_url(OpenUrl::new_tab(url));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.saved_progress());
    }
}
