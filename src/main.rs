fn main() {
    std::process::exit(git_todo::cli::run_cli());
}
