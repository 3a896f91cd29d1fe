use crate::error::{Result, TodoError};
use crate::model::{self, Task};
use crate::output;
use crate::store::files::TodoStore;

/// Append a task with the next free id, creating the branch file on first use.
pub fn run(store: &TodoStore, content: String) -> Result<Task> {
    let mut tasks = match store.load() {
        Ok(tasks) => tasks,
        Err(TodoError::NotFound(path)) => {
            eprintln!("creating todo file {}", path.display());
            store.create()?;
            Vec::new()
        }
        Err(err) => return Err(err),
    };

    let id = model::next_id(&tasks)
        .ok_or_else(|| TodoError::IdOverflow(store.path().to_path_buf()))?;
    let task = Task::new(id, content);
    tasks.push(task.clone());
    store.save(&tasks)?;

    output::status(&format!("added task {}: {}", task.id, task.content));
    Ok(task)
}
