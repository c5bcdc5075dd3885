use eframe::egui;
use tansu::app::Tansu;
use tansu::config::Config;
use tansu::logging;

fn main() -> eframe::Result<()> {
    let config = Config::load();
    logging::init(&config.log.level);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Tansu"),
        ..Default::default()
    };

    eframe::run_native(
        "Tansu",
        options,
        Box::new(move |cc| {
            let app = Tansu::new(&config);
            cc.egui_ctx.set_visuals(app.ui.theme.visuals());
            Ok(Box::new(app))
        }),
    )
}
