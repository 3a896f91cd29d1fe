use crate::error::Result;
use crate::output::{self, Format};
use crate::store::files::TodoStore;

pub fn run(store: &TodoStore, format: Format) -> Result<()> {
    let tasks = store.load()?;
    output::print_tasks(&tasks, format)
}
