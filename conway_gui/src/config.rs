// config.rs - Command line and runtime settings

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use conway::{BoardSource, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use egui::Color32;

#[derive(Parser, Debug)]
#[command(name = "conway_gui", version, about = "Conway's Game of Life on a bounded board")]
pub struct Cli {
    /// Seed for the random starting board. A fresh one is drawn when omitted.
    #[arg(allow_negative_numbers = true, conflicts_with = "load")]
    pub seed: Option<i64>,

    /// Load the starting board from a save file instead.
    #[arg(short = 'l', long = "load", value_name = "PATH")]
    pub load: Option<PathBuf>,

    /// Board width for random boards.
    #[arg(long, default_value_t = DEFAULT_WIDTH as u16, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,

    /// Board height for random boards.
    #[arg(long, default_value_t = DEFAULT_HEIGHT as u16, value_parser = clap::value_parser!(u16).range(1..))]
    pub height: u16,

    /// Milliseconds between generations.
    #[arg(long, default_value_t = 250)]
    pub step_ms: u64,

    /// File written when `S` is pressed. It must already exist.
    #[arg(long, env = "CONWAY_SAVE_PATH", default_value = "save.txt")]
    pub save_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub step_interval: Duration,
    pub save_path: PathBuf,
    pub live_color: Color32,
    pub dead_color: Color32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            step_interval: Duration::from_millis(250),
            save_path: PathBuf::from("save.txt"),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
        }
    }
}

impl Cli {
    pub fn config(&self) -> AppConfig {
        AppConfig {
            step_interval: Duration::from_millis(self.step_ms.max(1)),
            save_path: self.save_path.clone(),
            ..AppConfig::default()
        }
    }

    /// Where the first board comes from. `fallback_seed` is used when no seed was given.
    pub fn source(&self, fallback_seed: u64) -> BoardSource {
        match (&self.load, self.seed) {
            (Some(path), _) => BoardSource::File(path.clone()),
            (None, seed) => BoardSource::Random {
                seed: seed.map_or(fallback_seed, |seed| seed as u64),
                width: usize::from(self.width),
                height: usize::from(self.height),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("conway_gui").chain(args.iter().copied()))
    }

    #[test]
    fn no_arguments_uses_fallback_seed() {
        let cli = parse(&[]).unwrap();
        assert_eq!(
            cli.source(17),
            BoardSource::Random { seed: 17, width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT }
        );
        let config = cli.config();
        assert_eq!(config.step_interval, Duration::from_millis(250));
    }

    #[test]
    fn positional_seed_is_used() {
        let cli = parse(&["1234"]).unwrap();
        assert!(matches!(cli.source(0), BoardSource::Random { seed: 1234, .. }));
    }

    #[test]
    fn negative_seed_is_accepted() {
        let cli = parse(&["-5"]).unwrap();
        assert!(matches!(cli.source(0), BoardSource::Random { seed, .. } if seed == (-5i64) as u64));
    }

    #[test]
    fn load_flag_selects_file() {
        let cli = parse(&["-l", "boards/glider.txt"]).unwrap();
        assert_eq!(cli.source(0), BoardSource::File(PathBuf::from("boards/glider.txt")));
    }

    #[test]
    fn seed_and_load_together_are_rejected() {
        assert!(parse(&["42", "-l", "save.txt"]).is_err());
    }

    #[test]
    fn non_numeric_seed_is_rejected() {
        assert!(parse(&["forty-two"]).is_err());
    }

    #[test]
    fn sizes_and_timing_flow_into_config() {
        let cli = parse(&["--width", "80", "--height", "30", "--step-ms", "100"]).unwrap();
        assert!(matches!(cli.source(0), BoardSource::Random { width: 80, height: 30, .. }));
        assert_eq!(cli.config().step_interval, Duration::from_millis(100));
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(parse(&["--width", "0"]).is_err());
        assert!(parse(&["--height", "0"]).is_err());
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        assert!(parse(&["--width", "8589934592"]).is_err());
        assert!(parse(&["--height", "70000"]).is_err());
    }
}
