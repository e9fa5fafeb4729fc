//! Command queue from the UI to the chat manager.
//!
//! Panels push typed commands while rendering; the app drains and applies
//! them after the frame, so no panel ever holds a borrow of the manager.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use chat_types::command::ChatCommand;

#[derive(Clone, Default)]
pub struct CommandQueue {
    inner: Rc<RefCell<VecDeque<ChatCommand>>>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&self, command: ChatCommand) {
        log::debug!("Command queued: {:?}", command);
        self.inner.borrow_mut().push_back(command);
    }

    /// Take every queued command in submission order.
    pub fn drain(&self) -> Vec<ChatCommand> {
        self.inner.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}
