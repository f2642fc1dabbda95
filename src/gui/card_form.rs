use eframe::egui;

use super::theme::Theme;
use crate::core::{
    CardForm,
    DeckOption,
    ScreenState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Submit,
    ReloadDecks,
}

pub fn card_form(ui: &mut egui::Ui, screen: &mut ScreenState, theme: &Theme) -> Option<FormAction> {
    let mut action = None;

    let deck_options = screen.deck_options().to_vec();
    let submit_enabled = screen.submit_enabled();
    let loading_decks = screen.is_loading_decks();

    // Consume before the text fields see the key.
    if ui.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Enter)) {
        action = Some(FormAction::Submit);
    }

    ui.heading(theme.heading(ui, "New Card"));
    ui.add_space(8.0);

    egui::Grid::new("card_form_grid").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
        ui.label("Deck:");
        ui.horizontal(|ui| {
            ui_deck_picker(ui, &mut screen.form, &deck_options);

            if ui
                .add_enabled(!loading_decks, egui::Button::new("🔄"))
                .on_hover_text("Reload decks")
                .clicked()
            {
                action = Some(FormAction::ReloadDecks);
            }
        });
        ui.end_row();

        ui.label("Front:");
        ui.add(
            egui::TextEdit::multiline(&mut screen.form.front)
                .desired_rows(3)
                .desired_width(f32::INFINITY)
                .hint_text("Question"),
        );
        ui.end_row();

        ui.label("Back:");
        ui.add(
            egui::TextEdit::multiline(&mut screen.form.back)
                .desired_rows(3)
                .desired_width(f32::INFINITY)
                .hint_text("Answer"),
        );
        ui.end_row();

        ui.label("Tags:");
        ui.add(
            egui::TextEdit::singleline(&mut screen.form.tags)
                .desired_width(f32::INFINITY)
                .hint_text("comma, separated, tags"),
        );
        ui.end_row();
    });

    ui.add_space(10.0);

    ui.horizontal(|ui| {
        let label = if submit_enabled { "Add Card" } else { "Adding..." };
        if ui
            .add_enabled(submit_enabled, egui::Button::new(label))
            .on_hover_text("Ctrl+Enter")
            .clicked()
        {
            action = Some(FormAction::Submit);
        }
    });

    action
}

fn ui_deck_picker(ui: &mut egui::Ui, form: &mut CardForm, options: &[DeckOption]) {
    let selected_text = match &form.deck {
        Some(deck) => deck.to_string(),
        None => options.first().map(|option| option.label.clone()).unwrap_or_default(),
    };

    egui::ComboBox::from_id_salt("deck_combo").selected_text(selected_text).width(240.0).show_ui(
        ui,
        |ui| {
            for option in options {
                ui.add_enabled_ui(option.is_selectable(), |ui| {
                    ui.selectable_value(&mut form.deck, option.deck.clone(), &option.label);
                });
            }
        },
    );
}
