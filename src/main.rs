fn main() {
    if let Err(err) = chart_inference::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
