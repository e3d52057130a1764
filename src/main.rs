//! Ping Pong entry point
//!
//! Native builds run the game headless: the tick thread drives the engine
//! while the main thread plays the input source, feeding autopilot targets
//! through the shared lock. The browser build starts from
//! `platform::WebGame` instead.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::sync::{Arc, PoisonError};
    use std::time::Duration;

    use anyhow::{Context, Result};
    use clap::{Parser, Subcommand};

    use ping_pong::sim::Snapshot;
    use ping_pong::{Autopilot, Engine, FixedStepScheduler, JsonFileStore, Scores, Settings};

    #[derive(Parser)]
    #[command(name = "ping-pong", about = "Single-player Pong, headless")]
    struct Cli {
        /// Settings file (JSON); defaults are used when it does not exist
        #[arg(long, default_value = "ping_pong_settings.json")]
        settings: PathBuf,

        /// Override the score file from the settings
        #[arg(long)]
        scores: Option<PathBuf>,

        #[command(subcommand)]
        command: Commands,
    }

    #[derive(Subcommand)]
    enum Commands {
        /// Play one round in real time with the autopilot on the player paddle
        Play {
            /// Autopilot aim offset from the ball (pixels)
            #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
            offset: f32,

            /// Autopilot speed limit per input update (pixels); 0 disables it
            #[arg(long, default_value_t = 3.0)]
            max_step: f32,

            /// Give up after this many ticks
            #[arg(long)]
            max_ticks: Option<u64>,

            /// Number of rounds to play back to back
            #[arg(long, default_value_t = 1)]
            rounds: u32,
        },

        /// Tick as fast as possible and print the final snapshot as JSON
        Simulate {
            /// Fixed player paddle position
            #[arg(long)]
            player_x: Option<f32>,

            /// Stop after this many ticks even if the round is still going
            #[arg(long, default_value_t = 100_000)]
            max_ticks: u64,
        },

        /// Print the stored scores
        Scores,

        /// Write the current (or default) settings to the settings file
        InitSettings,
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        log::info!("Ping Pong (native) starting...");

        let cli = Cli::parse();
        let mut settings = Settings::load(&cli.settings)?;
        if let Some(scores) = cli.scores {
            settings.scores_path = scores;
        }

        match cli.command {
            Commands::Play {
                offset,
                max_step,
                max_ticks,
                rounds,
            } => {
                let pilot = Autopilot::new(offset, (max_step > 0.0).then_some(max_step));
                play(&settings, &pilot, max_ticks, rounds)
            }
            Commands::Simulate {
                player_x,
                max_ticks,
            } => simulate(&settings, player_x, max_ticks),
            Commands::Scores => {
                let store = JsonFileStore::open(&settings.scores_path)?;
                let scores = Scores::load(&store);
                println!("Player: {}  AI: {}", scores.player, scores.ai);
                Ok(())
            }
            Commands::InitSettings => settings.save(&cli.settings),
        }
    }

    fn play(settings: &Settings, pilot: &Autopilot, max_ticks: Option<u64>, rounds: u32) -> Result<()> {
        let store = JsonFileStore::open(&settings.scores_path)?;
        let shared = Engine::new(settings.arena, store).into_shared();
        let interval = settings.tick_interval();

        for round in 1..=rounds {
            if round > 1 {
                shared.lock().unwrap_or_else(PoisonError::into_inner).reset();
            }

            let scheduler = FixedStepScheduler::spawn(Arc::clone(&shared), interval)?;
            let last = loop {
                std::thread::sleep(interval);
                let mut engine = shared.lock().unwrap_or_else(PoisonError::into_inner);
                let snap = engine.snapshot();
                let out_of_time = max_ticks.is_some_and(|limit| engine.state().time_ticks >= limit);
                if snap.game_over || out_of_time {
                    break snap;
                }
                engine.set_player_target(pilot.target(&snap));
            };
            let ticks = scheduler.stop();

            print_round(round, &last, ticks, interval);
        }
        Ok(())
    }

    fn simulate(settings: &Settings, player_x: Option<f32>, max_ticks: u64) -> Result<()> {
        let store = JsonFileStore::open(&settings.scores_path)?;
        let mut engine = Engine::new(settings.arena, store);
        if let Some(x) = player_x {
            engine.set_player_target(x);
        }

        while !engine.is_game_over() && engine.state().time_ticks < max_ticks {
            engine.tick();
        }

        let json = serde_json::to_string_pretty(&engine.snapshot()).context("encoding snapshot")?;
        println!("{}", json);
        Ok(())
    }

    fn print_round(round: u32, snap: &Snapshot, ticks: u64, interval: Duration) {
        let verdict = if snap.game_over { "Game Over" } else { "Stopped" };
        println!(
            "Round {}: {} after {} ticks ({:.1}s) - Player: {} - AI: {}",
            round,
            verdict,
            ticks,
            interval.as_secs_f32() * ticks as f32,
            snap.score_player,
            snap.score_ai
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::WebGame, this is just to satisfy the compiler
}
