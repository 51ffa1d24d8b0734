use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use super::{InputEvent, InputProvider};

type SharedQueue = Rc<RefCell<VecDeque<InputEvent>>>;

/// FIFO input fed by event listeners through [`InputSender`] handles.
#[derive(Debug, Default)]
pub struct QueuedInput {
    queue: SharedQueue,
}

/// Cloneable producer side of a [`QueuedInput`].
#[derive(Debug, Clone)]
pub struct InputSender {
    queue: SharedQueue,
}

impl QueuedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sender(&self) -> InputSender {
        InputSender {
            queue: Rc::clone(&self.queue),
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl InputSender {
    pub fn send(&self, event: InputEvent) {
        self.queue.borrow_mut().push_back(event);
    }
}

impl InputProvider for QueuedInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.queue.borrow_mut().pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionId;

    #[test]
    fn events_come_out_in_send_order() {
        let mut input = QueuedInput::new();
        let sender = input.sender();
        let other = sender.clone();

        sender.send(InputEvent::MenuToggleClicked);
        other.send(InputEvent::NavLinkClicked(SectionId::About));
        assert_eq!(input.pending(), 2);

        assert_eq!(input.poll_event(), Ok(Some(InputEvent::MenuToggleClicked)));
        assert_eq!(
            input.poll_event(),
            Ok(Some(InputEvent::NavLinkClicked(SectionId::About)))
        );
        assert_eq!(input.poll_event(), Ok(None));
    }
}
