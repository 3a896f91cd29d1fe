use crate::error::Result;
use crate::store::files::TodoStore;

/// Mark the first task with `id` as done. The file is rewritten even when no
/// task matches.
pub fn run(store: &TodoStore, id: u64) -> Result<()> {
    let mut tasks = store.load()?;
    if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
        task.done = true;
    } else {
        tracing::debug!(id, "no task with this id");
    }
    store.save(&tasks)
}
