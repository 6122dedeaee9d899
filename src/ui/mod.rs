pub mod helpers;
pub mod layout;
pub mod views;

use crate::app::ExamApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for ExamApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Reloj del examen: solo corre con la vista de examen activa
        if self.state == AppState::Exam {
            let now = ctx.input(|i| i.time);
            self.advance_clock(now);
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }

        // BOTONES SUPERIORES DE APUNTES Y SIMULACIÓN (solo examen y resultados)
        if matches!(self.state, AppState::Exam | AppState::Results) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las vistas
        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::Exam => views::exam::ui_exam(self, ctx),
            AppState::Results => views::results::ui_results(self, ctx),
            AppState::Notes => views::notes::ui_notes(self, ctx),
            AppState::Simulation => views::simulation::ui_simulation(self, ctx),
        }

        if self.confirm_clear {
            self.confirm_clear_dialog(ctx);
        }
    }
}
