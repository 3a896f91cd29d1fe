use crate::error::Result;
use crate::model;
use crate::output;
use crate::store::files::TodoStore;

/// Remove the first task with `id` and renumber the rest to 1..=N.
pub fn run(store: &TodoStore, id: u64) -> Result<()> {
    let mut tasks = store.load()?;
    if let Some(pos) = tasks.iter().position(|t| t.id == id) {
        tasks.remove(pos);
    } else {
        tracing::debug!(id, "no task with this id");
    }
    model::renumber(&mut tasks);
    store.save(&tasks)?;

    output::status(&format!("deleted task {id}"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodoError;
    use crate::model::Task;
    use tempfile::tempdir;

    fn store_with(dir: &std::path::Path, tasks: &[Task]) -> TodoStore {
        let store = TodoStore::new(dir.join("todo-list-main.json"));
        store.save(tasks).unwrap();
        store
    }

    #[test]
    fn delete_first_renumbers_remaining() {
        let dir = tempdir().unwrap();
        let store = store_with(dir.path(), &[Task::new(1, "a"), Task::new(2, "b")]);

        run(&store, 1).unwrap();

        assert_eq!(store.load().unwrap(), vec![Task::new(1, "b")]);
    }

    #[test]
    fn delete_middle_keeps_order_and_done_flags() {
        let dir = tempdir().unwrap();
        let mut c = Task::new(3, "c");
        c.done = true;
        let store = store_with(dir.path(), &[Task::new(1, "a"), Task::new(2, "b"), c]);

        run(&store, 2).unwrap();

        assert_eq!(
            store.load().unwrap(),
            vec![
                Task::new(1, "a"),
                Task {
                    id: 2,
                    content: "c".into(),
                    done: true,
                },
            ]
        );
    }

    #[test]
    fn unknown_id_leaves_list_unchanged() {
        let dir = tempdir().unwrap();
        let tasks = vec![Task::new(1, "a"), Task::new(2, "b")];
        let store = store_with(dir.path(), &tasks);

        run(&store, 0).unwrap();
        run(&store, 42).unwrap();

        assert_eq!(store.load().unwrap(), tasks);
    }

    #[test]
    fn delete_last_leaves_empty_array() {
        let dir = tempdir().unwrap();
        let store = store_with(dir.path(), &[Task::new(1, "a")]);

        run(&store, 1).unwrap();

        assert!(store.load().unwrap().is_empty());
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "[]");
    }

    #[test]
    fn missing_file_is_not_created() {
        let dir = tempdir().unwrap();
        let store = TodoStore::new(dir.path().join("todo-list-main.json"));

        assert!(matches!(run(&store, 1), Err(TodoError::NotFound(_))));
        assert!(!store.path().exists());
    }
}
