//! Text commands and how they map onto screen buttons.

use std::str::FromStr;

use lunchtray_core::Menu;
use lunchtray_session::UiEvent;
use thiserror::Error;

use crate::model::{Button, ScreenBody, ScreenView};

/// A line typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Next,
    Submit,
    Cancel,
    Back,
    /// Pick the option with this 1-based number.
    Choose(usize),
    Quit,
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim().to_lowercase();
        match word.as_str() {
            "" => Err(InputError::Empty),
            "start" => Ok(Command::Start),
            "next" => Ok(Command::Next),
            "submit" => Ok(Command::Submit),
            "cancel" => Ok(Command::Cancel),
            "back" | "up" => Ok(Command::Back),
            "quit" | "q" => Ok(Command::Quit),
            other => other
                .parse::<usize>()
                .map(Command::Choose)
                .map_err(|_| InputError::Unknown(other.to_string())),
        }
    }
}

/// Input that cannot be applied to the current screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Type a command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("No option {0} on this screen")]
    NoSuchOption(usize),

    #[error("'{0}' is not available on this screen")]
    Unavailable(&'static str),

    #[error("Choose an option before pressing Next")]
    NextDisabled,

    #[error("Already at the start screen")]
    AtRoot,
}

/// Turn a command into the event its button would fire.
///
/// `Quit` has no event and yields `Ok(None)`.
pub fn resolve(
    command: Command,
    view: &ScreenView,
    menu: &Menu,
) -> Result<Option<UiEvent>, InputError> {
    let event = match command {
        Command::Quit => return Ok(None),
        Command::Start => {
            require(view, Button::StartOrder, "start")?;
            UiEvent::StartOrder
        }
        Command::Next => {
            require(view, Button::Next, "next")?;
            UiEvent::Next
        }
        Command::Submit => {
            require(view, Button::Submit, "submit")?;
            UiEvent::Submit
        }
        Command::Cancel => {
            require(view, Button::Cancel, "cancel")?;
            UiEvent::Cancel
        }
        Command::Back => {
            if !view.app_bar.can_navigate_back {
                return Err(InputError::AtRoot);
            }
            UiEvent::NavigateUp
        }
        Command::Choose(number) => {
            let ScreenBody::Menu { category, .. } = &view.body else {
                return Err(InputError::Unavailable("select"));
            };
            let item = number
                .checked_sub(1)
                .and_then(|index| menu.get(*category, index))
                .ok_or(InputError::NoSuchOption(number))?;
            UiEvent::Select(item.clone())
        }
    };
    Ok(Some(event))
}

fn require(view: &ScreenView, button: Button, name: &'static str) -> Result<(), InputError> {
    match view.button(button) {
        Some(state) if state.enabled => Ok(()),
        Some(_) if button == Button::Next => Err(InputError::NextDisabled),
        _ => Err(InputError::Unavailable(name)),
    }
}
