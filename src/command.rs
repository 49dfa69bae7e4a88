/// A page navigation command triggered from the keyboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    PreviousPage,
    NextPage,
    FirstPage,
    LastPage,
    ShuffleColors,
}

impl Command {
    /// Returns all commands, in the order shown in the help line
    pub fn all() -> &'static [Command] {
        &[
            Command::PreviousPage,
            Command::NextPage,
            Command::FirstPage,
            Command::LastPage,
            Command::ShuffleColors,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::PreviousPage => "Previous",
            Command::NextPage => "Next",
            Command::FirstPage => "First",
            Command::LastPage => "Last",
            Command::ShuffleColors => "Shuffle",
        }
    }

    pub fn keybinding(&self) -> &'static str {
        match self {
            Command::PreviousPage => "←",
            Command::NextPage => "→",
            Command::FirstPage => "Home",
            Command::LastPage => "End",
            Command::ShuffleColors => "R",
        }
    }

    /// Page this command navigates to, or `None` for commands that don't
    /// move the carousel or would leave the valid range.
    pub fn target_page(&self, current: usize, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        match self {
            Command::PreviousPage => current.checked_sub(1),
            Command::NextPage => Some(current + 1).filter(|&page| page < count),
            Command::FirstPage => Some(0),
            Command::LastPage => Some(count - 1),
            Command::ShuffleColors => None,
        }
    }
}
