use std::io::{self, BufRead, ErrorKind, Write};

use anyhow::{Context, Result};
use cdinventory_core::{Inventory, Snapshot, SnapshotFile};

use crate::console::Console;
use crate::menu::MenuChoice;

/// State of one interactive run: the inventory being edited, where it is
/// saved, and the console it is edited through.
#[derive(Debug)]
pub struct Session<R, W> {
    inventory: Inventory,
    snapshot: SnapshotFile,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty inventory. Call [`Session::run`] to
    /// load the snapshot and start the menu.
    pub const fn new(snapshot: SnapshotFile, console: Console<R, W>) -> Self {
        Self {
            inventory: Inventory::new(),
            snapshot,
            console,
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (Inventory, Console<R, W>) {
        (self.inventory, self.console)
    }

    /// Load the saved inventory, then serve the menu until exit.
    ///
    /// Closing the input while the menu waits for a key ends the session
    /// like `x` does.
    pub fn run(&mut self) -> Result<()> {
        self.reload()?;

        loop {
            self.console.print_menu()?;
            let choice = match self.console.menu_choice() {
                Ok(choice) => choice,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    log::info!("Input closed, leaving the menu");
                    break;
                }
                Err(e) => return Err(e.into()),
            };

            log::debug!("Menu choice: {:?}", choice);
            if !self.dispatch(choice)? {
                break;
            }
        }

        Ok(())
    }

    /// Perform one menu operation. Returns `false` once the user chose exit.
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<bool> {
        match choice {
            MenuChoice::Exit => return Ok(false),
            MenuChoice::Load => self.confirm_reload()?,
            MenuChoice::Add => self.add()?,
            MenuChoice::Display => self.show()?,
            MenuChoice::Delete => self.delete()?,
            MenuChoice::Save => self.confirm_save()?,
        }
        Ok(true)
    }

    /// Replace the inventory with the snapshot file's contents.
    fn reload(&mut self) -> Result<()> {
        let snapshot = self.snapshot.load().with_context(|| {
            format!(
                "Failed to load inventory from {}",
                self.snapshot.path().display()
            )
        })?;

        match snapshot {
            Snapshot::Loaded(inventory) => {
                self.inventory = inventory;
                self.console.say("Inventory successfully loaded.\n")?;
            }
            Snapshot::Missing => {
                self.inventory = Inventory::new();
                self.console.say("Existing inventory file not found.\n")?;
            }
        }
        Ok(())
    }

    fn confirm_reload(&mut self) -> Result<()> {
        self.console.say(
            "WARNING: If you continue, all unsaved data will be lost and the Inventory re-loaded from file.",
        )?;
        let confirmed = self.console.confirm(
            "Type 'yes' to continue and reload from file. Otherwise reload will be canceled\n",
        )?;

        if confirmed {
            self.console.say("reloading...")?;
            self.reload()?;
        } else {
            self.console.pause(
                "canceling... Inventory data NOT reloaded. Press [ENTER] to continue to the menu.",
            )?;
        }
        self.show()
    }

    fn add(&mut self) -> Result<()> {
        let id = self.console.ask_id("Enter ID: ")?;
        let title = self.console.ask("What is the CD's title? ")?;
        let artist = self.console.ask("What is the Artist's name? ")?;

        self.inventory.add(id, title.trim(), artist.trim());
        self.show()
    }

    fn delete(&mut self) -> Result<()> {
        self.show()?;
        let id = self.console.ask_id("Which ID would you like to delete? ")?;

        if self.inventory.delete(id) > 0 {
            self.console.say("The CD was removed\n")?;
        } else {
            self.console.say("Could not find this CD!\n")?;
        }
        self.show()
    }

    fn confirm_save(&mut self) -> Result<()> {
        self.show()?;
        if self.console.confirm("Save this inventory to file? [y/n] ")? {
            self.snapshot.save(&self.inventory).with_context(|| {
                format!(
                    "Failed to save inventory to {}",
                    self.snapshot.path().display()
                )
            })?;
            self.console.say(&format!(
                "Inventory saved to {}.\n",
                self.snapshot.path().display()
            ))?;
        } else {
            self.console.pause(
                "The inventory was NOT saved to file. Press [ENTER] to return to the menu.",
            )?;
        }
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        self.console.show_inventory(&self.inventory)?;
        Ok(())
    }
}

/// Run the interactive menu on the process's stdin and stdout.
pub fn run_interactive(snapshot: SnapshotFile) -> Result<()> {
    log::info!("Using inventory file {}", snapshot.path().display());

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    Session::new(snapshot, console).run()
}
