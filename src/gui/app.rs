use eframe::egui;
use tracing::debug;

use super::{
    card_form::{
        card_form,
        FormAction,
    },
    status_line::status_line,
    theme::{
        set_theme,
        Theme,
    },
};
use crate::{
    anki::AnkiConnect,
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        CardError,
        ClientConfig,
        ScreenState,
    },
};

pub struct CardApp {
    screen: ScreenState,
    theme: Theme,
    task_manager: TaskManager,
}

impl CardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ClientConfig) -> Result<Self, CardError> {
        let service = AnkiConnect::new(&config)?;
        let task_manager = TaskManager::new(service)?;

        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        let mut app = Self { screen: ScreenState::new(config.model_name), theme, task_manager };
        app.activate(&cc.egui_ctx);

        Ok(app)
    }

    fn activate(&mut self, ctx: &egui::Context) {
        self.screen.begin_activation();
        self.task_manager.load_decks(ctx);
    }

    fn submit(&mut self, ctx: &egui::Context) {
        if let Some(note) = self.screen.begin_submit() {
            self.task_manager.add_note(note, ctx);
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        debug!(task = result.task_type(), "Task finished");

        match result {
            TaskResult::DecksLoaded(result) => self.screen.finish_activation(result),
            TaskResult::NoteAdded(result) => self.screen.finish_submit(result),
        }
    }
}

impl eframe::App for CardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            status_line(ui, &self.screen, &self.theme);
            ui.add_space(4.0);
        });

        let mut action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                action = card_form(ui, &mut self.screen, &self.theme);
            });
        });

        match action {
            Some(FormAction::Submit) => self.submit(ctx),
            Some(FormAction::ReloadDecks) => self.activate(ctx),
            None => {}
        }
    }
}
