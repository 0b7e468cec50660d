fn main() {
    composegen::app::cli::run();
}
