//! Interactive menu loop.
//!
//! Reads one choice per iteration, runs exactly one operation, reports the
//! outcome, and records successes in the operation log. Operation failures are
//! printed and the loop continues; only terminal I/O errors end it early.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::core::menu::{MenuChoice, is_confirmation};
use crate::core::types::{FileProperties, WorkingDir};
use crate::exit_codes;
use crate::io::console::{Console, Tone};
use crate::io::lister::list_dir;
use crate::io::op_log::OpLog;
use crate::io::ops;
use crate::io::search::search;

const PROPERTIES_TIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Allow delete to remove non-empty directories.
    pub delete_recursive: bool,
}

/// Whether the loop keeps going after a menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Input ended in the middle of an action.
    Exit,
}

pub struct Session<R, W> {
    console: Console<R, W>,
    cwd: WorkingDir,
    log: OpLog,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(
        console: Console<R, W>,
        cwd: WorkingDir,
        log: OpLog,
        options: SessionOptions,
    ) -> Self {
        Self {
            console,
            cwd,
            log,
            options,
        }
    }

    pub fn cwd(&self) -> &WorkingDir {
        &self.cwd
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Print the startup banner with a random quote.
    pub fn welcome(&mut self) -> Result<()> {
        self.console.welcome(&mut rand::thread_rng())
    }

    /// Run until the user picks Exit or input ends. Returns the process exit code.
    pub fn run(&mut self) -> Result<i32> {
        loop {
            self.show_menu()?;
            let Some(input) = self.console.prompt("Enter your choice: ")? else {
                break;
            };
            let Some(choice) = MenuChoice::parse(&input) else {
                self.console
                    .line(Tone::Error, "Invalid choice! Please try again.")?;
                continue;
            };
            debug!(?choice, cwd = %self.cwd, "menu choice");
            if choice == MenuChoice::Exit || self.dispatch(choice)? == Flow::Exit {
                break;
            }
        }
        self.console
            .line(Tone::Warning, "Exiting the File Explorer. Goodbye!")?;
        info!("session ended");
        Ok(exit_codes::OK)
    }

    fn show_menu(&mut self) -> Result<()> {
        self.console.line(Tone::Plain, "")?;
        self.console
            .line(Tone::Plain, &format!("Current Directory: {}", self.cwd))?;
        self.console.line(Tone::Plain, "Menu:")?;
        for (index, label) in MenuChoice::LABELS.iter().enumerate() {
            self.console
                .line(Tone::Plain, &format!("{}. {}", index + 1, label))?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::List => self.list().map(|()| Flow::Continue),
            MenuChoice::ChangeDir => self.change_dir(),
            MenuChoice::CreateDir => self.create_dir(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Rename => self.rename(),
            MenuChoice::Search => self.search(),
            MenuChoice::Properties => self.properties(),
            MenuChoice::Copy => self.copy(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    /// Log a success both to the operation log and to tracing.
    fn succeeded(&self, description: &str) {
        info!(operation = description, cwd = %self.cwd, "operation succeeded");
        self.log.record(description);
    }

    fn list(&mut self) -> Result<()> {
        let entries = match list_dir(self.cwd.as_path()) {
            Ok(entries) => entries,
            Err(err) => {
                return self
                    .console
                    .line(Tone::Error, &format!("Failed to list directory: {err}"));
            }
        };
        self.console.line(Tone::Plain, "")?;
        self.console
            .line(Tone::Heading, &format!("Contents of {}:", self.cwd))?;
        for entry in &entries {
            if entry.is_directory {
                self.console
                    .line(Tone::Directory, &format!("[DIR]  {}", entry.name))?;
            } else {
                self.console
                    .line(Tone::Plain, &format!("      {}", entry.name))?;
            }
        }
        self.succeeded("Listed files");
        Ok(())
    }

    fn change_dir(&mut self) -> Result<Flow> {
        let Some(fragment) = self.console.prompt("Enter directory to change: ")? else {
            return Ok(Flow::Exit);
        };
        match ops::change_dir(&self.cwd, &fragment) {
            Ok(next) => {
                self.cwd = next;
                self.console
                    .line(Tone::Success, "Directory changed successfully.")?;
                self.succeeded("Changed directory");
            }
            Err(err) => self
                .console
                .line(Tone::Error, &format!("Failed to change directory: {err}"))?,
        }
        Ok(Flow::Continue)
    }

    fn create_dir(&mut self) -> Result<Flow> {
        let Some(fragment) = self.console.prompt("Enter directory name to create: ")? else {
            return Ok(Flow::Exit);
        };
        match ops::create_dir(&self.cwd, &fragment) {
            Ok(_) => {
                self.console
                    .line(Tone::Success, "Directory created successfully.")?;
                self.succeeded("Created directory");
            }
            Err(err) => self
                .console
                .line(Tone::Error, &format!("Failed to create directory: {err}"))?,
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        let Some(fragment) = self.console.prompt("Enter file/directory name to delete: ")? else {
            return Ok(Flow::Exit);
        };
        let question = format!("Are you sure you want to delete '{fragment}'? (y/n): ");
        let Some(answer) = self.console.prompt(&question)? else {
            return Ok(Flow::Exit);
        };
        if !is_confirmation(&answer) {
            self.console
                .line(Tone::Warning, "Delete operation cancelled.")?;
            return Ok(Flow::Continue);
        }
        self.console.pace("Deleting")?;
        match ops::delete(&self.cwd, &fragment, self.options.delete_recursive) {
            Ok(_) => {
                self.console.line(Tone::Success, "Deleted successfully.")?;
                self.succeeded("Deleted file/directory");
            }
            Err(err) => self
                .console
                .line(Tone::Error, &format!("Failed to delete: {err}"))?,
        }
        Ok(Flow::Continue)
    }

    fn rename(&mut self) -> Result<Flow> {
        let Some(from) = self.console.prompt("Enter current file/directory name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(to) = self.console.prompt("Enter new name: ")? else {
            return Ok(Flow::Exit);
        };
        self.console.pace("Renaming")?;
        match ops::rename(&self.cwd, &from, &to) {
            Ok(_) => {
                self.console.line(Tone::Success, "Renamed successfully.")?;
                self.succeeded("Renamed file/directory");
            }
            Err(err) => self
                .console
                .line(Tone::Error, &format!("Failed to rename: {err}"))?,
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(pattern) = self.console.prompt("Enter search pattern: ")? else {
            return Ok(Flow::Exit);
        };
        self.console.line(Tone::Plain, "")?;
        self.console.line(
            Tone::Heading,
            &format!("Searching for '{}' in {}:", pattern, self.cwd),
        )?;
        let matches = match search(self.cwd.as_path(), &pattern) {
            Ok(matches) => matches,
            Err(err) => {
                self.console
                    .line(Tone::Error, &format!("Error searching directory: {err}"))?;
                return Ok(Flow::Continue);
            }
        };
        let mut found = 0usize;
        for path in matches {
            found += 1;
            self.console.line(Tone::Success, &format!("Found: {path}"))?;
        }
        self.console
            .line(Tone::Plain, &format!("{found} match(es) found."))?;
        self.succeeded("Searched files");
        Ok(Flow::Continue)
    }

    fn properties(&mut self) -> Result<Flow> {
        let Some(fragment) = self
            .console
            .prompt("Enter file name to view properties: ")?
        else {
            return Ok(Flow::Exit);
        };
        match ops::properties(&self.cwd, &fragment) {
            Ok(props) => {
                self.show_properties(&props)?;
                self.succeeded("Viewed file properties");
            }
            Err(err) => {
                debug!(error = %err, "properties failed");
                self.console
                    .line(Tone::Error, "Unable to fetch file properties")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn show_properties(&mut self, props: &FileProperties) -> Result<()> {
        let modified = props
            .last_modified
            .map(|time| time.format(PROPERTIES_TIME_FORMAT).to_string())
            .unwrap_or_else(|| "unknown".to_string());
        self.console.line(Tone::Plain, "")?;
        self.console
            .line(Tone::Heading, &format!("File: {}", props.path))?;
        self.console
            .line(Tone::Heading, &format!("Size: {} bytes", props.size))?;
        self.console
            .line(Tone::Heading, &format!("Last Modified: {modified}"))
    }

    fn copy(&mut self) -> Result<Flow> {
        let Some(source) = self.console.prompt("Enter source file: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(destination) = self.console.prompt("Enter destination file: ")? else {
            return Ok(Flow::Exit);
        };
        self.console.pace("Copying")?;
        match ops::copy_file(&self.cwd, &source, &destination) {
            Ok(bytes) => {
                debug!(bytes, "copied");
                self.console.line(Tone::Success, "File copied successfully.")?;
                self.succeeded("Copied file");
            }
            Err(err) => self
                .console
                .line(Tone::Error, &format!("Failed to copy file: {err}"))?,
        }
        Ok(Flow::Continue)
    }
}
