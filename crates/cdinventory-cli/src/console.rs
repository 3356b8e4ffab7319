//! Line-oriented console I/O for the interactive menu.

use std::io::{self, BufRead, ErrorKind, Write};

use cdinventory_core::{CdId, Inventory};

use crate::menu::MenuChoice;

const MENU_PROMPT: &str = "Which operation would you like to perform? [l, a, i, d, s or x]: ";

/// Render the inventory table.
pub fn write_inventory(out: &mut impl Write, inventory: &Inventory) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "======= The Current Inventory: =======")?;
    writeln!(out, "ID\tCD Title (by: Artist)")?;
    writeln!(out)?;
    for record in inventory {
        writeln!(out, "{}\t{} (by:{})", record.id, record.title, record.artist)?;
    }
    writeln!(out, "======================================")?;
    writeln!(out)
}

/// Prompts and messages over a pair of input/output streams.
///
/// Every read fails with [`ErrorKind::UnexpectedEof`] once the input is
/// exhausted.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a line of text.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Show `prompt` and return the next input line, without the line ending.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so such a line is simply an
    /// answer no parser accepts.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "input closed"));
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Show `prompt` until the answer parses as an identifier.
    pub fn ask_id(&mut self, prompt: &str) -> io::Result<CdId> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<CdId>() {
                Ok(id) => return Ok(id),
                Err(e) => {
                    log::debug!("Rejected identifier: {}", e);
                    self.say("Please enter an integer\n")?;
                }
            }
        }
    }

    /// Ask a yes/no question; only `yes` or `y` (any case) count as yes.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.ask(prompt)?.trim().to_lowercase();
        Ok(matches!(answer.as_str(), "yes" | "y"))
    }

    /// Show `message` and wait for the user to press ENTER.
    pub fn pause(&mut self, message: &str) -> io::Result<()> {
        self.ask(message).map(|_| ())
    }

    pub fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Menu")?;
        writeln!(self.output)?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}", choice)?;
        }
        writeln!(self.output)
    }

    /// Read menu keys until a valid one is entered.
    pub fn menu_choice(&mut self) -> io::Result<MenuChoice> {
        loop {
            let answer = self.ask(MENU_PROMPT)?;
            if let Ok(choice) = answer.parse() {
                writeln!(self.output)?;
                return Ok(choice);
            }
            self.say("Please select a valid option.\n")?;
        }
    }

    pub fn show_inventory(&mut self, inventory: &Inventory) -> io::Result<()> {
        write_inventory(&mut self.output, inventory)
    }
}
