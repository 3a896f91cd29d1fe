use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, TodoError};
use crate::git::Branch;
use crate::model::Task;

/// File name holding the tasks of `branch`.
///
/// Path separators in the branch name become `-` so the file always lives
/// directly in the working directory.
pub fn file_name_for(branch: &Branch) -> String {
    let name: String = branch
        .name()
        .chars()
        .map(|c| if c == '/' || c == '\\' { '-' } else { c })
        .collect();
    format!("todo-list-{name}.json")
}

/// The JSON file backing one branch's todo list.
///
/// There is no locking: two concurrent invocations against the same file can
/// lose an update.
#[derive(Debug, Clone)]
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn for_branch(dir: &Path, branch: &Branch) -> Self {
        Self::new(dir.join(file_name_for(branch)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the task list. A missing file is `NotFound`; an empty file or a
    /// JSON `null` is an empty list.
    pub fn load(&self) -> Result<Vec<Task>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(TodoError::NotFound(self.path.clone()));
            }
            Err(err) => return Err(TodoError::ReadFailure(self.path.clone(), err)),
        };
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        let tasks: Vec<Task> = serde_json::from_str::<Option<Vec<Task>>>(&data)
            .map_err(|err| TodoError::ParseFailure(self.path.clone(), err))?
            .unwrap_or_default();
        tracing::debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Create the empty branch file.
    pub fn create(&self) -> Result<()> {
        fs::File::create(&self.path)
            .map_err(|err| TodoError::CreateFailure(self.path.clone(), err))?;
        tracing::debug!(path = %self.path.display(), "created todo file");
        Ok(())
    }

    /// Overwrite the file with `tasks` as two-space indented JSON.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks).map_err(TodoError::EncodeFailure)?;
        fs::write(&self.path, json)
            .map_err(|err| TodoError::WriteFailure(self.path.clone(), err))?;
        tracing::debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}
