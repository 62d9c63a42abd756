//! End-to-end run: pick a folder, settle the order, merge, open
//!
//! Errors before the order is confirmed are reported and the run carries on
//! (bad folder, unreadable directory). Errors after confirmation abort.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::config::Config;
use crate::console::Console;
use crate::discover::DiscoverFn;
use crate::error::{Error, Result};
use crate::input::KeySource;
use crate::order::{parent_dir, OrderedFileList};
use crate::output::output_path;
use crate::pdf::{merge_pdfs, MergeOptions};
use crate::render::Renderer;
use crate::session::run_session;
use crate::viewer::Viewer;

/// Everything a run talks to
pub struct App<'a, R, W, K: ?Sized, D: ?Sized, V: ?Sized> {
    pub config: &'a Config,
    /// Folder listing, normally [`crate::discover::discover_files`]
    pub discover: DiscoverFn,
    pub console: Console<R, W>,
    pub keys: &'a mut K,
    pub renderer: &'a mut D,
    pub viewer: &'a mut V,
}

impl<'a, R, W, K, D, V> App<'a, R, W, K, D, V>
where
    R: BufRead,
    W: Write,
    K: KeySource + ?Sized,
    D: Renderer + ?Sized,
    V: Viewer + ?Sized,
{
    /// Run one session and return the path of the merged file
    pub fn run(&mut self, now: DateTime<Utc>) -> Result<PathBuf> {
        self.console.say("Welcome to the PDF Merger console app!")?;

        let folder = self.console.prompt_folder(self.config.folder.as_deref())?;
        self.console
            .say(format!("You entered a valid location: {}", folder.display()))?;

        let files = match (self.discover)(&folder, &self.config.extensions) {
            Ok(files) => files,
            Err(e) => {
                warn!(folder = %folder.display(), error = %e, "listing folder failed");
                self.console.say(format!("Error: {}", e))?;
                Vec::new()
            }
        };
        if files.is_empty() {
            self.console.say(format!(
                "No files with extension {} found in {}",
                self.config.extensions.join(", "),
                folder.display()
            ))?;
            return Err(Error::NoFilesFound(folder));
        }
        info!(count = files.len(), "files discovered");

        let mut list = OrderedFileList::from_paths(files);
        self.console.say("Files in current order:")?;
        self.console.print_order(&list)?;

        while !self.console.confirm_order()? {
            run_session(&mut list, &mut *self.keys, &mut *self.renderer)?;
            self.console.print_order(&list)?;
        }

        self.console.say(" Merging files in the specified order:")?;
        self.console.print_order(&list)?;

        let inputs = list.paths();
        let first = inputs.first().ok_or(Error::NoInputFiles)?;
        let output = output_path(first, now);
        self.console
            .say(format!("Output folder: {}", parent_dir(first).display()))?;

        let pages = merge_pdfs(&MergeOptions {
            input_paths: inputs.clone(),
            output_path: output.clone(),
        })?;
        self.console.say(format!(
            "Merged {} pages from {} files into {}",
            pages,
            inputs.len(),
            output.display()
        ))?;

        if self.config.open_output {
            self.viewer.open(&output)?;
        }

        Ok(output)
    }
}
