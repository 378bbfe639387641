use eframe::egui;

use crate::egui_app::controllers::{Event, LoginEvent};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.controllers.login.is_logged_in() {
        render_logged_in(ui, state);
        return;
    }

    let login = &state.controllers.login;
    let mut events = Vec::new();
    let mut username = login.username.clone();
    let mut password = login.password.clone();

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(egui::RichText::new("Welcome").size(28.0).color(colors::TEXT_LIGHT));
        ui.colored_label(colors::TEXT_SECONDARY, "Log in, or create an account with the same details");
        ui.add_space(20.0);

        if login.invalid_credentials() {
            ui.label(egui::RichText::new("Invalid credentials").color(colors::ERROR));
            ui.add_space(10.0);
        }

        egui::Grid::new("login_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.colored_label(colors::TEXT_SECONDARY, "Email:");
                if ui
                    .add_sized([280.0, 28.0], egui::TextEdit::singleline(&mut username))
                    .changed()
                {
                    events.push(Event::Login(LoginEvent::UsernameChanged(username.clone())));
                }
                ui.end_row();

                ui.colored_label(colors::TEXT_SECONDARY, "Password:");
                if ui
                    .add_sized(
                        [280.0, 28.0],
                        egui::TextEdit::singleline(&mut password).password(true),
                    )
                    .changed()
                {
                    events.push(Event::Login(LoginEvent::PasswordChanged(password.clone())));
                }
                ui.end_row();
            });

        ui.add_space(20.0);

        ui.add_enabled_ui(!login.is_busy(), |ui| {
            ui.horizontal(|ui| {
                let login_btn = egui::Button::new(egui::RichText::new("Login").color(colors::TEXT_LIGHT))
                    .min_size(egui::vec2(120.0, 32.0))
                    .fill(colors::ACCENT);
                if ui.add(login_btn).clicked() {
                    events.push(Event::Login(LoginEvent::LoginRequested));
                }

                ui.add_space(10.0);

                let signup_btn = egui::Button::new(egui::RichText::new("Sign up").color(colors::TEXT_SECONDARY))
                    .min_size(egui::vec2(120.0, 32.0));
                if ui.add(signup_btn).clicked() {
                    events.push(Event::Login(LoginEvent::SignupRequested));
                }
            });
        });

        if login.is_busy() {
            ui.add_space(15.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Loading...").color(colors::TEXT_LIGHT));
                ui.spinner();
            });
        }
    });

    super::flush(state, events);
}

fn render_logged_in(ui: &mut egui::Ui, state: &mut AppState) {
    let email = state
        .controllers
        .login
        .user
        .as_ref()
        .map(|u| u.email.clone())
        .or_else(|| state.user_email().map(str::to_string));

    let mut logout = false;
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        match email {
            Some(email) => ui.label(
                egui::RichText::new(format!("You are logged in as {}", email))
                    .size(20.0)
                    .color(colors::SUCCESS),
            ),
            None => ui.label(egui::RichText::new("You are logged in").size(20.0).color(colors::SUCCESS)),
        };
        ui.add_space(16.0);
        if ui
            .add(egui::Button::new("Logout").min_size(egui::vec2(120.0, 32.0)).fill(colors::ACCENT))
            .clicked()
        {
            logout = true;
        }
    });

    if logout {
        state.logout();
    }
}
