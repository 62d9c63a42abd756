//! Line-based prompts and listings

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::order::{display_names, OrderedFileList};

/// Line reader and writer for the non-interactive parts of a run
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line of text
    pub fn say(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Read one line without its terminator
    ///
    /// End of input is an error; the run cannot continue without answers.
    pub fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask for a folder until an existing directory is entered
    ///
    /// A `suggested` folder that exists is accepted without prompting.
    pub fn prompt_folder(&mut self, suggested: Option<&Path>) -> Result<PathBuf> {
        if let Some(folder) = suggested {
            if folder.is_dir() {
                return Ok(folder.to_path_buf());
            }
            self.reject_folder(&folder.display().to_string())?;
        }
        loop {
            write!(self.output, "Please enter a valid path to a folder: ")?;
            let location = self.read_line()?;
            let candidate = PathBuf::from(&location);
            if !location.is_empty() && candidate.is_dir() {
                return Ok(candidate);
            }
            self.reject_folder(&location)?;
        }
    }

    fn reject_folder(&mut self, location: &str) -> Result<()> {
        self.say(format!(
            "The entered location '{}' is not a valid path to a folder. Please try again.",
            location
        ))
    }

    /// Ask whether the current order is final
    pub fn confirm_order(&mut self) -> Result<bool> {
        self.say(" Happy with order? (y/n)")?;
        let answer = self.read_line()?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    /// Print the file names in list order, framed by blank lines
    pub fn print_order(&mut self, list: &OrderedFileList) -> Result<()> {
        self.say("")?;
        for name in display_names(list) {
            self.say(name)?;
        }
        self.say("")
    }
}
