fn main() {
    jks2bks::app::cli::run();
}
