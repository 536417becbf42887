use life_canvas::{
    Driver, LifeConfig, input, presets,
    rendering::{self, BoardCanvas},
    ui::ControlPanel,
};
use macroquad::prelude::*;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("life_canvas=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_config() -> LifeConfig {
    let path = LifeConfig::path();
    match LifeConfig::load(&path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "falling back to default config");
            LifeConfig::default()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    let config = load_config();

    let mut driver = Driver::from_config(&config.board, &config.simulation);
    let mut style = config.render.clone();
    let mut panel = ControlPanel::new();
    panel.sync(&style, driver.grid().dimensions(), driver.is_evolving());
    let mut canvas = BoardCanvas::new();
    let mut rng = ::rand::rng();

    tracing::info!(
        width = driver.width(),
        height = driver.height(),
        interval_ms = driver.interval(),
        evolving = driver.is_evolving(),
        algorithm = driver.algorithm().name(),
        "simulation ready"
    );
    for pattern in presets::all_patterns() {
        tracing::debug!(
            name = pattern.name,
            shortcut = %pattern.shortcut,
            description = pattern.description,
            "pattern available"
        );
    }

    loop {
        let mouse_pos = mouse_position();

        // Panel clicks first, then keyboard shortcuts
        let commands = panel.update(mouse_pos);
        for command in commands.into_iter().chain(input::pressed_commands()) {
            input::apply(command, &mut driver, &mut style, &mut rng);
        }

        // Steps only when the interval has elapsed; drawing happens every frame
        driver.drive((get_time() * 1000.0) as u64);
        panel.sync(&style, driver.grid().dimensions(), driver.is_evolving());

        clear_background(BLACK);
        let snapshot = driver.snapshot();
        rendering::draw_board(&mut canvas, &snapshot, &style);
        rendering::draw_controls(&driver, &panel, mouse_pos);

        next_frame().await;
    }
}
