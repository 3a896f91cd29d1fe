use serde::{Deserialize, Serialize};

/// One entry of a branch todo list.
///
/// The aliases accept files written by the earlier tool, which keyed the
/// fields in Chinese; files are always written back with the English keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    #[serde(alias = "序号")]
    pub id: u64,
    #[serde(alias = "内容")]
    pub content: String,
    #[serde(default, alias = "是否完成")]
    pub done: bool,
}

impl Task {
    pub fn new(id: u64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            done: false,
        }
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} done:{}", self.id, self.content, self.done)
    }
}

/// Id for the next appended task: one past the largest id in use, or 1.
///
/// `None` when the largest id in use is already `u64::MAX`.
pub fn next_id(tasks: &[Task]) -> Option<u64> {
    tasks.iter().map(|t| t.id).max().unwrap_or(0).checked_add(1)
}

/// Reassign ids 1..=N in list order.
pub fn renumber(tasks: &mut [Task]) {
    for (task, id) in tasks.iter_mut().zip(1..) {
        task.id = id;
    }
}
