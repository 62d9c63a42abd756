//! Handing the merged file to the system viewer

use std::path::Path;
use std::process::Command;

use crate::error::Result;

/// Opens a finished output file
pub trait Viewer {
    fn open(&mut self, path: &Path) -> Result<()>;
}

/// Opens files with the system default application
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemViewer;

impl Viewer for SystemViewer {
    fn open(&mut self, path: &Path) -> Result<()> {
        #[cfg(target_os = "macos")]
        {
            Command::new("open").arg(path).spawn()?;
        }
        #[cfg(target_os = "windows")]
        {
            Command::new("cmd")
                .args(["/C", "start", "", &path.display().to_string()])
                .spawn()?;
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            Command::new("xdg-open").arg(path).spawn()?;
        }
        Ok(())
    }
}
