fn main() {
    std::process::exit(snippets_run::cli::run());
}
