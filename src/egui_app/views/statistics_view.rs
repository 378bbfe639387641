use eframe::egui;

use crate::egui_app::controllers::{Access, Statistics};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::models::StatEntry;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    styles::heading(ui, "Statistics");

    let Access::Authenticated(stats) = &state.controllers.statistics else {
        super::render_login_prompt(ui, state, "your statistics");
        return;
    };

    render_chart(ui, "Favourites by category", &stats.by_category);
    ui.add_space(12.0);
    render_chart(ui, "Favourites by municipality", &stats.by_municipality);
}

fn render_chart(ui: &mut egui::Ui, title: &str, entries: &[StatEntry]) {
    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(title).size(17.0).strong());
        ui.add_space(6.0);

        if entries.is_empty() {
            ui.colored_label(colors::TEXT_SECONDARY, "No data");
            return;
        }

        let scale = Statistics::scale(entries) as f32;
        for entry in entries {
            let bar = egui::ProgressBar::new(entry.count as f32 / scale)
                .fill(colors::BAR)
                .text(format!("{} ({})", entry.name, entry.count));
            ui.add(bar);
        }
    });
}
