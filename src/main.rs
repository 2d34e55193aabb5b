fn main() -> eframe::Result {
    cme::run_gui()
}
