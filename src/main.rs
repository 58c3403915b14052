use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use life_universe::{
    Config, GameState, Seed, input, presets, rendering,
    ui::{self, DEAD_COLOR, MARGIN, PANEL_WIDTH, Viewport},
};

/// Largest window the driver opens; bigger surfaces are scaled down to fit
const MAX_WINDOW: (f32, f32) = (1400.0, 900.0);
const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Conway's Game of Life on a toroidal grid
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 64)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 64)]
    height: usize,

    /// Cell size in pixels, excluding the separator line
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..=64))]
    cell_size: u32,

    /// Generations per second while playing
    #[arg(long = "tps", default_value_t = 60.0)]
    ticks_per_second: f32,

    /// Fill with a seeded random pattern instead of the modulus pattern
    #[arg(long)]
    seed: Option<u64>,

    /// Start with an empty grid
    #[arg(long, conflicts_with = "seed")]
    empty: bool,

    /// Start paused
    #[arg(long)]
    paused: bool,
}

impl Args {
    fn into_config(self) -> Config {
        let seed = match (self.seed, self.empty) {
            (_, true) => Seed::Empty,
            (Some(value), false) => Seed::Random(value),
            (None, false) => Seed::Modulus,
        };
        Config {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
            ticks_per_second: self.ticks_per_second,
            seed,
            start_paused: self.paused,
        }
    }
}

fn window_conf(state: &GameState) -> Conf {
    let (surface_w, surface_h) = state.layout.surface_size();
    let width = (surface_w + 2.0 * MARGIN + PANEL_WIDTH).min(MAX_WINDOW.0);
    let height = (surface_h + 2.0 * MARGIN).clamp(MIN_WINDOW_HEIGHT, MAX_WINDOW.1);
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Args::parse().into_config();
    let state = match GameState::new(&config) {
        Ok(state) => state,
        Err(err) => {
            error!(%err, "cannot start");
            std::process::exit(2);
        }
    };

    info!(
        width = config.width,
        height = config.height,
        seed = config.seed.name(),
        "universe created"
    );
    macroquad::Window::from_config(window_conf(&state), run(state));
}

async fn run(mut state: GameState) {
    let patterns = presets::all_patterns();

    loop {
        let mouse_pos = mouse_position();
        let viewport = Viewport::fit(&state.layout);
        let buttons = ui::create_buttons();

        // Process input
        state = input::process_button_clicks(state, &buttons, mouse_pos);
        input::handle_pointer(&mut state, &patterns, &viewport, mouse_pos);
        state = input::process_keyboard_input(state);

        // Update game state
        state = state.tick(get_frame_time());

        // Render
        clear_background(DEAD_COLOR);
        rendering::draw_grid_lines(&state.layout, &viewport);
        rendering::draw_cells(&state.universe, &state.layout, &viewport);

        let stamp = state.pending_pattern.and_then(|idx| patterns.get(idx));
        if let Some(pattern) = stamp {
            rendering::draw_pattern_preview(pattern, &state, &viewport, mouse_pos);
        }
        rendering::draw_controls(&state, &buttons, mouse_pos, stamp);

        next_frame().await;
    }
}
