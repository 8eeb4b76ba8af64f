fn main() {
    devsync::app::cli::run();
}
