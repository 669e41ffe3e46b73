// main.rs - Windowed Conway's Game of Life
// Board logic lives in the `conway` crate; this file wires it to the window.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use conway::{Board, BoardSource, Simulation, TracingObserver, patterns};
use eframe::egui;
use egui::Color32;
use tracing::{error, info};

mod config;
mod ui;

use config::{AppConfig, Cli};

fn main() -> Result<()> {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help, version and bad arguments all end here with exit code 0.
            let _ = err.print();
            if err.use_stderr() {
                eprintln!("Verify your program arguments!");
            }
            return Ok(());
        }
    };

    let config = cli.config();
    let source = cli.source(rand::random());
    info!(?source, "building starting board");
    let board = source.build().context("could not build the starting board")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(GameOfLife::new(config, board))),
    )
    .map_err(|err| anyhow::anyhow!("window failed: {err}"))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

pub struct GameOfLife {
    simulation: Simulation,
    config: AppConfig,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub status: Option<String>,
}

impl GameOfLife {
    pub fn new(config: AppConfig, board: Board) -> Self {
        info!(
            width = board.width(),
            height = board.height(),
            live = board.live_cells(),
            "starting simulation"
        );
        Self {
            simulation: Simulation::new(board).with_observer(TracingObserver),
            is_running: true,
            last_update: Instant::now(),
            update_interval: config.step_interval,
            live_color: config.live_color,
            dead_color: config.dead_color,
            selected_pattern: 0,
            status: None,
            config,
        }
    }

    pub fn board(&self) -> &Board {
        self.simulation.board()
    }

    pub fn generation(&self) -> u64 {
        self.simulation.generation()
    }

    pub fn live_cells(&self) -> usize {
        self.simulation.live_cells()
    }

    pub fn dead_cells(&self) -> usize {
        self.simulation.dead_cells()
    }

    pub fn update_generation(&mut self) {
        if self.simulation.advance() {
            info!(generation = self.generation(), "board repeats, pausing");
            self.is_running = false;
            self.status = Some(format!("Cycle detected at generation {}", self.generation()));
        }
    }

    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
        if self.is_running {
            self.last_update = Instant::now();
        }
        info!(running = self.is_running, "pause toggled");
    }

    pub fn clear_grid(&mut self) {
        self.is_running = false;
        if let Err(err) = self.simulation.clear() {
            error!(%err, "could not clear board");
        }
    }

    pub fn apply_random_pattern(&mut self) {
        self.is_running = false;
        let (width, height) = (self.board().width(), self.board().height());
        let seed = rand::random();
        match (BoardSource::Random { seed, width, height }).build() {
            Ok(board) => self.simulation.replace(board),
            Err(err) => error!(%err, "could not build random board"),
        }
    }

    pub fn apply_selected_pattern(&mut self) {
        let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) else {
            return;
        };
        self.is_running = false;
        match pattern.centered_on(self.board().width(), self.board().height()) {
            Ok(board) => self.simulation.replace(board),
            Err(err) => {
                self.status = Some(format!("{} does not fit: {err}", pattern.name));
            }
        }
    }

    /// Toggles the cell at a display position (row 0 is the top of the board).
    pub fn toggle_cell(&mut self, display_row: usize, col: usize) {
        let (width, height) = (self.board().width(), self.board().height());
        if display_row >= height || col >= width {
            return;
        }
        if let Err(err) = self.simulation.toggle(col, height - 1 - display_row) {
            error!(%err, "toggle outside the board");
        }
    }

    /// Writes the board to the configured save file.
    pub fn save(&mut self) -> Result<()> {
        let path = &self.config.save_path;
        let result = conway::save(self.simulation.board(), path)
            .with_context(|| format!("saving to {}", path.display()));
        match &result {
            Ok(()) => info!(path = %path.display(), generation = self.generation(), "board saved"),
            Err(err) => {
                error!("{err:#}");
                self.status = Some(format!("Save failed: {err:#}"));
            }
        }
        result
    }
}
