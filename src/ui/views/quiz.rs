use egui::{Context, Image, RichText, Ui};
use crate::app::{QuizAction, QuizFooter};
use crate::model::Diagram;
use crate::QuizApp;
use crate::ui::helpers::{big_button, radio_group};
use crate::ui::layout::{card, scroll_panel};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let view = app.quiz_view();
    let mut actions: Vec<QuizAction> = Vec::new();

    let max_width = 860.0;
    let bank = app.bank();

    scroll_panel(ctx, max_width, egui::Margin::symmetric(24, 24), |ui| {
        ui.heading(RichText::new(&bank.title).size(28.0).strong());
        ui.add_space(12.0);
        if !bank.intro.is_empty() {
            ui.label(RichText::new(&bank.intro).size(16.0));
            ui.add_space(18.0);
        }

        if let Some(diagram) = &bank.diagram {
            ui_diagram(ui, diagram);
            ui.add_space(18.0);
        }

        for block in &view.blocks {
            card(ui, |ui| {
                ui.label(RichText::new(block.heading()).strong().size(17.0));
                ui.add_space(8.0);
                if let Some(option) = radio_group(ui, &block.options) {
                    actions.push(QuizAction::Select {
                        question: block.idx,
                        option,
                    });
                }
            });
            ui.add_space(12.0);
        }

        ui.add_space(4.0);
        match &view.footer {
            QuizFooter::Submit => {
                if big_button(ui, view.footer.label(), 160.0, 36.0, true) {
                    actions.push(QuizAction::Submit);
                }
            }
            QuizFooter::Score { .. } => {
                ui.label(RichText::new(view.footer.label()).size(20.0).strong());
            }
        }
    });

    if !actions.is_empty() {
        for action in actions {
            app.apply(action);
        }
        ctx.request_repaint();
    }
}

/// Imagen del diagrama con su pie. Si no carga, egui pinta su propio aviso.
fn ui_diagram(ui: &mut Ui, diagram: &Diagram) {
    ui.vertical_centered(|ui| {
        let size = egui::vec2(diagram.width, diagram.height);
        ui.add(
            Image::new(diagram.url.as_str())
                .max_size(size)
                .corner_radius(egui::CornerRadius::same(12)),
        )
        .on_hover_text(diagram.alt.as_str());
        if let Some(caption) = &diagram.caption {
            ui.add_space(6.0);
            ui.label(RichText::new(caption).small().weak());
        }
    });
}
