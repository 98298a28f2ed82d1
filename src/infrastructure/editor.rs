//! Editor integration for composing entry text

use crate::error::{MoodiaryError, Result};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Session for composing text in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Create a session from EDITOR/VISUAL, with a per-platform fallback
    pub fn from_env() -> Self {
        let command = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        EditorSession::new(command)
    }

    /// Seed a scratch file, open it in the editor, block until the editor
    /// exits, and return the edited text.
    pub fn compose(&self, seed: &str) -> Result<String> {
        let scratch = std::env::temp_dir().join(format!(
            "moodiary-entry-{}.txt",
            std::process::id()
        ));

        fs::write(&scratch, seed)?;
        let edit_result = self.edit(&scratch);
        let content = fs::read_to_string(&scratch);
        let _ = fs::remove_file(&scratch);

        edit_result?;
        Ok(content?)
    }

    /// Open a file in the editor and wait for it to close
    pub fn edit(&self, file_path: &Path) -> Result<()> {
        let (program, args) = self.parse_command();

        let mut all_args = args;
        all_args.push(file_path.to_string_lossy().to_string());

        // On Windows, use cmd /C to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let status = Command::new("cmd")
            .arg("/C")
            .arg(&program)
            .args(&all_args)
            .status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&all_args).status();

        let status = status.map_err(|e| {
            MoodiaryError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(MoodiaryError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            // Fallback to notepad if command is empty
            return ("notepad".to_string(), vec![]);
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}
