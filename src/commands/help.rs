/// Usage lines printed by `git todo help`.
pub const USAGE: &[&str] = &[
    "git todo list - list all tasks on this branch",
    "git todo add <content> - add a task",
    "git todo done [1] - mark task 1 as done",
    "git todo delete [1] - delete task 1",
];

/// Hint printed when no command, or an unrecognized one, is given.
pub const HINT: &str = "run `git todo help` for usage";

pub fn run() {
    for line in USAGE {
        println!("{line}");
    }
}

pub fn hint() {
    println!("{HINT}");
}
