use std::cell::{Cell, RefCell};

use blogthread_client::Prompt;

/// Remembers every dialog shown, answering confirmations with a preset value
pub struct RecordingPrompt {
    alerts: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
    answer: Cell<bool>,
}

impl RecordingPrompt {
    pub fn new(answer: bool) -> RecordingPrompt {
        RecordingPrompt {
            alerts: RefCell::new(Vec::new()),
            confirms: RefCell::new(Vec::new()),
            answer: Cell::new(answer),
        }
    }

    pub fn set_answer(&self, answer: bool) {
        self.answer.set(answer);
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }
}

impl Prompt for RecordingPrompt {
    fn alert(&self, msg: &str) {
        self.alerts.borrow_mut().push(String::from(msg));
    }

    fn confirm(&self, msg: &str) -> bool {
        self.confirms.borrow_mut().push(String::from(msg));
        self.answer.get()
    }
}
