// Pattern 8: Mediator
// Users never talk to a delivery channel directly. Each user is bound to a
// messenger at construction and hands every outgoing message to it.

use std::rc::Rc;

use crate::error::Result;
use crate::transcript::Transcript;

// ============================================================================
// Channels
// ============================================================================

pub trait Messenger {
    fn send_message(&self, message: &str, out: &mut Transcript);
}

pub struct SmsMessenger;

impl Messenger for SmsMessenger {
    fn send_message(&self, message: &str, out: &mut Transcript) {
        out.line(format!("Відправлено SMS: {}", message));
    }
}

pub struct EmailMessenger;

impl Messenger for EmailMessenger {
    fn send_message(&self, message: &str, out: &mut Transcript) {
        out.line(format!("Відправлено Email: {}", message));
    }
}

// ============================================================================
// Colleagues
// ============================================================================

pub struct User {
    name: String,
    messenger: Rc<dyn Messenger>,
}

impl User {
    pub fn new(name: impl Into<String>, messenger: Rc<dyn Messenger>) -> Self {
        Self {
            name: name.into(),
            messenger,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn send_message(&self, message: &str, out: &mut Transcript) {
        out.line(format!("{} відправив повідомлення {}", self.name, message));
        self.messenger.send_message(message, out);
    }

    pub fn receive_message(&self, from: &User, message: &str, out: &mut Transcript) {
        out.line(format!(
            "{} отримав повідомлення від {}: {}",
            self.name, from.name, message
        ));
    }
}

// ============================================================================
// Demo
// ============================================================================

pub fn run(out: &mut Transcript) -> Result<()> {
    let john = User::new("John", Rc::new(SmsMessenger));
    let jane = User::new("Jane", Rc::new(EmailMessenger));

    john.send_message("Привіт!", out);
    jane.send_message("Привіт!", out);
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
