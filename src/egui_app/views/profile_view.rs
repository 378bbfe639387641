use eframe::egui;

use crate::egui_app::controllers::{Access, Event, ProfileEvent};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    styles::heading(ui, "Profile");

    let Access::Authenticated(profile) = &state.controllers.profile else {
        super::render_login_prompt(ui, state, "your profile");
        return;
    };
    let mut events = Vec::new();

    if !profile.email.is_empty() {
        ui.colored_label(colors::TEXT_SECONDARY, &profile.email);
        ui.add_space(8.0);
    }

    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("Your categories").strong());
        if profile.categories.is_empty() {
            ui.colored_label(colors::TEXT_SECONDARY, "None yet");
        }
        super::chips(ui, &profile.categories);
    });
    ui.add_space(8.0);

    styles::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.colored_label(colors::TEXT_SECONDARY, "Add categories:");
            if let Some(category) = super::picker(ui, "profile_categories", "Choose a category", &profile.all_categories) {
                events.push(Event::Profile(ProfileEvent::CategoryPicked(category)));
            }
        });
        super::chips(ui, &profile.new_categories);
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            let can_save = !profile.saving && !profile.new_categories.is_empty();
            if ui
                .add_enabled(can_save, egui::Button::new("Save").fill(colors::ACCENT))
                .clicked()
            {
                events.push(Event::Profile(ProfileEvent::SaveRequested));
            }
            if ui.button("Clear").clicked() {
                events.push(Event::Profile(ProfileEvent::Cleared));
            }
            if profile.saving {
                ui.spinner();
            }
        });
    });

    super::flush(state, events);
}
