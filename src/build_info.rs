/// Version string shown by `--version`: the crate version, followed by the
/// short commit SHA when build.rs could read one.
pub const VERSION: &str = env!("GIT_TODO_VERSION");
