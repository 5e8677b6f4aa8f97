use testownik::QuizApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Testownik",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::new()))),
    )
}
