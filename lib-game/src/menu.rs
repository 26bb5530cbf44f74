use crate::InputModel;

/// The highlighted option of the start menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuSelection {
    #[default]
    Exit = 0,
    Play = 1,
}

impl MenuSelection {
    pub fn toggle(self) -> Self {
        match self {
            MenuSelection::Exit => MenuSelection::Play,
            MenuSelection::Play => MenuSelection::Exit,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Playing,
    /// Terminal. The app loop stops once it sees this state.
    Exit,
}

impl AppState {
    /// Computes the next state from the input of this frame.
    /// Only the menu reacts to input; playing lasts until the
    /// window is closed.
    pub fn next(self, selection: &mut MenuSelection, input: &InputModel) -> AppState {
        let AppState::Menu = self else {
            return self;
        };

        if input.menu_toggle_requested {
            *selection = selection.toggle();
        }

        if !input.confirmation_detected {
            return AppState::Menu;
        }

        match selection {
            MenuSelection::Play => AppState::Playing,
            MenuSelection::Exit => AppState::Exit,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, AppState::Playing)
    }
}
