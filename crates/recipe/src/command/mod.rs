mod create;
mod delete;
mod update;

pub use create::*;

use std::ops::Deref;

#[derive(Clone)]
pub struct Command {
    state: mealdeck_shared::State,
}

impl Deref for Command {
    type Target = mealdeck_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: mealdeck_shared::State) -> Self {
        Self { state }
    }
}
