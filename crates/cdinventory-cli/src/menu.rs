use std::fmt;
use std::str::FromStr;

/// One of the operations offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `l`: reload the inventory from the snapshot file.
    Load,
    /// `a`: add a CD.
    Add,
    /// `i`: display the current inventory.
    Display,
    /// `d`: delete a CD.
    Delete,
    /// `s`: save the inventory to the snapshot file.
    Save,
    /// `x`: leave the program.
    Exit,
}

impl MenuChoice {
    pub const ALL: [Self; 6] = [
        Self::Load,
        Self::Add,
        Self::Display,
        Self::Delete,
        Self::Save,
        Self::Exit,
    ];

    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Load => 'l',
            Self::Add => 'a',
            Self::Display => 'i',
            Self::Delete => 'd',
            Self::Save => 's',
            Self::Exit => 'x',
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Load => "Load Inventory from File",
            Self::Add => "Add CD",
            Self::Display => "Display Current Inventory",
            Self::Delete => "Delete CD from Inventory",
            Self::Save => "Save Inventory to File",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.key(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    /// Accepts a single menu key, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|choice| key.len() == 1 && key.starts_with(choice.key()))
            .ok_or_else(|| format!("not a menu option: {:?}", s))
    }
}
