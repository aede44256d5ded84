//! `matepong`: two-player Pong on a Matelight

mod cli;
mod controller;
mod display;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{
    autopilot_events, Config, Game, GameMap, GameRng, GameStateMachine, InputSource, PlayerId,
};
use proto::ControllerHub;
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Args;
use display::MatelightDisplay;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    run(args).await
}

/// Controller ids start after the demo players so they never collide
fn first_controller_id(demo_players: &[PlayerId]) -> u32 {
    demo_players.iter().map(|id| id.0 + 1).max().unwrap_or(1)
}

async fn run(args: Args) -> Result<()> {
    let config = Config {
        tick_rate: args.tick_rate,
        ..Config::default()
    };
    let map = GameMap::new(args.width, args.height, config.paddle_height)
        .context("invalid screen size")?;
    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let tick = Duration::from_secs_f32(config.tick_interval()).max(Duration::from_millis(1));

    let mut display =
        MatelightDisplay::connect(&args.host, args.port, map.width, map.height).await?;
    let mut fsm = GameStateMachine::new(Game::new(map, config, rng));

    let demo_players: Vec<PlayerId> = if args.demo {
        fsm.start_demo()
    } else {
        Vec::new()
    };
    let first_id = first_controller_id(&demo_players);

    let socket = controller::bind(args.controller_port).await?;
    let (listener, mut input) = controller::spawn_listener(socket, ControllerHub::new(first_id));

    info!(
        host = %args.host,
        port = args.port,
        width = map.width,
        height = map.height,
        tick_rate = args.tick_rate,
        demo = args.demo,
        "matepong running"
    );

    let mut ticker = interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);
    let mut last = Instant::now();

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut shutdown => {
                info!("shutting down");
                break;
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        let mut events = input.poll_events();
        events.extend(autopilot_events(&fsm.game, &demo_players));

        fsm.tick(dt, events, display.surface_mut());
        display.flush().await?;
    }

    listener.abort();
    Ok(())
}
