mod cli;

fn main() {
    if let Err(e) = cli::run() {
        if e.downcast_ref::<alignpick_tui::Cancelled>().is_some() {
            std::process::exit(1);
        }
        eprintln!("{e:#}"); // pretty anyhow chain
        std::process::exit(1);
    }
}
