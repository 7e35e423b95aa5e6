//! Menu choices understood by the interactive session.

/// A parsed top-level menu selection (1-9).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    ChangeDir,
    CreateDir,
    Delete,
    Rename,
    Search,
    Properties,
    Copy,
    Exit,
}

impl MenuChoice {
    /// Menu lines in display order, numbered from 1.
    pub const LABELS: [&'static str; 9] = [
        "List files and directories",
        "Change directory",
        "Create a directory",
        "Delete file/directory",
        "Rename file/directory",
        "Search files",
        "View file properties",
        "Copy file",
        "Exit",
    ];

    /// Parse a line of user input. Surrounding whitespace is ignored; anything
    /// other than an integer in 1..=9 yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim().parse::<u8>().ok()? {
            1 => Self::List,
            2 => Self::ChangeDir,
            3 => Self::CreateDir,
            4 => Self::Delete,
            5 => Self::Rename,
            6 => Self::Search,
            7 => Self::Properties,
            8 => Self::Copy,
            9 => Self::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// True when a delete confirmation answer starts with `y` or `Y`.
pub fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim_start().chars().next(), Some('y' | 'Y'))
}
