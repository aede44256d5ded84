use clap::Parser;
use game_core::Params;

/// Two-player Pong on a Matelight
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "matepong", version, about)]
pub struct Args {
    /// Matelight host
    pub host: String,

    /// Matelight UDP port
    #[arg(short, long, default_value_t = Params::DISPLAY_PORT)]
    pub port: u16,

    #[arg(long, default_value_t = Params::SCREEN_WIDTH)]
    pub width: u32,

    #[arg(long, default_value_t = Params::SCREEN_HEIGHT)]
    pub height: u32,

    /// Let two computer players play each other
    #[arg(long)]
    pub demo: bool,

    /// UDP port controllers send to
    #[arg(long, default_value_t = Params::CONTROLLER_PORT)]
    pub controller_port: u16,

    /// Ticks per second
    #[arg(long, default_value_t = Params::TICK_RATE)]
    pub tick_rate: u32,

    /// Fixed seed for the ball direction
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["matepong", "matelight.local"]).unwrap();
        assert_eq!(args.host, "matelight.local");
        assert_eq!(args.port, 1337);
        assert_eq!((args.width, args.height), (15, 16));
        assert!(!args.demo);
        assert_eq!(args.controller_port, 1338);
        assert_eq!(args.tick_rate, 15);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "matepong", "10.0.0.2", "-p", "4000", "--width", "40", "--height", "16", "--demo",
            "--seed", "9",
        ])
        .unwrap();
        assert_eq!(args.port, 4000);
        assert_eq!(args.width, 40);
        assert!(args.demo);
        assert_eq!(args.seed, Some(9));
    }

    #[test]
    fn test_host_is_required() {
        assert!(Args::try_parse_from(["matepong"]).is_err());
    }
}
