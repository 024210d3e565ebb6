use anyhow::anyhow;
use dragboard::app::DragBoard;
use dragboard::settings::Settings;
use gpui::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "dragboard=info";

fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let settings = Settings::load();
    info!("Starting Dragboard");

    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        let bounds = Bounds::centered(
            None,
            size(px(settings.window_width), px(settings.window_height)),
            cx,
        );
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some("Dragboard".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(options, |_window, cx| cx.new(|_cx| DragBoard::new(settings))) {
            error!(error = %e, "Failed to open window");
            cx.quit();
            return;
        }
        cx.activate(true);
    });

    Ok(())
}
