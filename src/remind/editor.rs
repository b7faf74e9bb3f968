//! Launching the user's editor on the reminder file.

use std::path::Path;
use std::process::Command;

use log::info;

use super::provider::CollaboratorError;

pub const DEFAULT_EDITOR: &str = "vim";

/// Editors known to accept `+<line>` to open at a line.
const LINE_AWARE_EDITORS: &[&str] = &["vi", "vim", "nvim", "nano", "emacs"];

pub trait Editor {
    /// Opens `path` (at `line`, if the editor supports it) and blocks until
    /// the editor exits. The caller hands over the terminal beforehand.
    fn open(&self, path: &Path, line: Option<u32>) -> Result<(), CollaboratorError>;
}

/// Runs an external program attached to the current stdin/stdout.
pub struct ExternalEditor {
    command: String,
}

impl ExternalEditor {
    /// `command` may carry arguments, e.g. `"code --wait"`.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Program and arguments for opening `path`.
    pub fn command_line(&self, path: &Path, line: Option<u32>) -> (String, Vec<String>) {
        let mut words = self.command.split_whitespace();
        let program = words.next().unwrap_or(DEFAULT_EDITOR).to_string();
        let mut args: Vec<String> = words.map(str::to_string).collect();

        let base = Path::new(&program)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        if let Some(line) = line
            && LINE_AWARE_EDITORS.contains(&base)
        {
            args.push(format!("+{line}"));
        }
        args.push(path.display().to_string());
        (program, args)
    }
}

impl Editor for ExternalEditor {
    fn open(&self, path: &Path, line: Option<u32>) -> Result<(), CollaboratorError> {
        let (program, args) = self.command_line(path, line);
        info!("Opening editor: {} {:?}", program, args);
        let status = Command::new(&program)
            .args(&args)
            .status()
            .map_err(|source| CollaboratorError::Spawn {
                program: program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(CollaboratorError::Exit {
                program,
                status: status.code(),
                stderr: String::new(),
            });
        }
        Ok(())
    }
}
