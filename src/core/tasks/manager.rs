use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use eframe::egui;
use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    anki::{
        load_decks,
        AnkiConnect,
        NewNote,
        NoteService,
    },
    core::CardError,
};

/// Runs AnkiConnect calls off the UI thread and queues their results for `poll_results`.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    service: AnkiConnect,
}

impl TaskManager {
    pub fn new(service: AnkiConnect) -> Result<Self, CardError> {
        let runtime = Arc::new(Runtime::new()?);

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, receiver, sender, service })
    }

    pub fn poll_results(&self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>, AnkiConnect) {
        (self.sender.clone(), self.runtime.clone(), self.service.clone())
    }

    pub fn load_decks(&self, ctx: &egui::Context) {
        let (sender, runtime, service) = self.task_context();
        let ctx = ctx.clone();

        thread::spawn(move || {
            let result = runtime.block_on(load_decks(&service));

            let _ = sender.send(TaskResult::DecksLoaded(result));
            ctx.request_repaint();
        });
    }

    pub fn add_note(&self, note: NewNote, ctx: &egui::Context) {
        let (sender, runtime, service) = self.task_context();
        let ctx = ctx.clone();

        thread::spawn(move || {
            let result = runtime.block_on(service.add_note(&note));

            let _ = sender.send(TaskResult::NoteAdded(result));
            ctx.request_repaint();
        });
    }
}
