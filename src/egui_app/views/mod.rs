use eframe::egui;

use crate::egui_app::controllers::Event;
use crate::egui_app::navigation::Screen;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub mod add_view;
pub mod favourites_view;
pub mod home_view;
pub mod login_view;
pub mod profile_view;
pub mod route_card;
pub mod search_view;
pub mod statistics_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            let mut target = None;

            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("🧭 Rutafy").size(18.0).strong());
                ui.add_space(16.0);

                for screen in Screen::MENU {
                    if ui.selectable_label(state.screen == screen, screen.label()).clicked() {
                        target = Some(screen);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if state.is_logged_in() {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                        if let Some(email) = state.user_email() {
                            ui.colored_label(colors::TEXT_SECONDARY, email);
                        }
                    }
                });
            });

            if let Some(screen) = target {
                state.navigate(screen);
            }
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(styles::page_frame())
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match state.screen {
                    Screen::Home => home_view::render(ui, state),
                    Screen::Search => search_view::render(ui, state),
                    Screen::Add => add_view::render(ui, state),
                    Screen::Favourites => favourites_view::render(ui, state),
                    Screen::Profile => profile_view::render(ui, state),
                    Screen::Statistics => statistics_view::render(ui, state),
                    Screen::Login => login_view::render(ui, state),
                });
        });
}

/// Shown instead of authenticated content when there is no session.
fn render_login_prompt(ui: &mut egui::Ui, state: &mut AppState, what: &str) {
    ui.add_space(40.0);
    ui.vertical_centered(|ui| {
        ui.colored_label(
            colors::TEXT_SECONDARY,
            format!("You need to log in to see {}.", what),
        );
        ui.add_space(12.0);
        if ui
            .add(egui::Button::new("Go to login").fill(colors::ACCENT))
            .clicked()
        {
            state.navigate(Screen::Login);
        }
    });
}

/// Dispatch the events a view collected while rendering.
fn flush(state: &mut AppState, events: Vec<Event>) {
    for event in events {
        state.dispatch(event);
    }
}

/// A combo box listing `options`; returns the one clicked, if any.
fn picker(ui: &mut egui::Ui, id: &str, prompt: &str, options: &[String]) -> Option<String> {
    let mut picked = None;
    egui::ComboBox::from_id_salt(id)
        .selected_text(prompt)
        .width(260.0)
        .show_ui(ui, |ui| {
            for option in options {
                if ui.selectable_label(false, option.as_str()).clicked() {
                    picked = Some(option.clone());
                }
            }
        });
    picked
}

fn chips(ui: &mut egui::Ui, items: &[String]) {
    ui.horizontal_wrapped(|ui| {
        for item in items {
            styles::chip(ui, item);
        }
    });
}
