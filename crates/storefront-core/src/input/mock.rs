use core::convert::Infallible;

use super::{InputEvent, InputProvider};

/// Stands in for the browser listeners when the controller is driven through
/// its public operations only.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MockInput;

impl InputProvider for MockInput {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Infallible> {
        Ok(None)
    }
}
