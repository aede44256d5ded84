use tracing::{debug, error, info, warn};

use crate::canvas::Canvas;
use crate::components::PlayerId;
use crate::error::GameError;
use crate::game::Game;
use crate::input::InputEvent;
use crate::params::Params;
use crate::states::{GameState, StateBehavior, StateKind};

/// Owns the game context and the current state, and drives both once per
/// tick
pub struct GameStateMachine {
    pub game: Game,
    state: GameState,
}

impl GameStateMachine {
    /// Start in the lobby
    pub fn new(game: Game) -> Self {
        Self {
            game,
            state: GameState::waiting(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn kind(&self) -> StateKind {
        self.state.kind()
    }

    /// Install `next`, logging the change
    pub fn transition(&mut self, next: GameState) {
        info!(from = %self.state.kind(), to = %next.kind(), "state change");
        self.state = next;
    }

    /// Seat the demo players and skip the lobby
    pub fn start_demo(&mut self) -> Vec<PlayerId> {
        let ids: Vec<PlayerId> = Params::DEMO_PLAYERS.iter().copied().map(PlayerId).collect();
        for &id in &ids {
            self.game.construct_player(id);
        }
        let starting = GameState::starting(&self.game);
        self.transition(starting);
        ids
    }

    /// Apply controller events. Bad events are dropped; losing a player
    /// mid-match sends everyone back to the lobby.
    pub fn handle_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            match self.game.handle_event(event) {
                Ok(()) => {}
                // Unseated controllers keep streaming button states
                Err(err @ GameError::UnknownPlayer(_)) if event.is_key() => {
                    debug!(%err, ?event, "key from unseated controller");
                }
                Err(err) => warn!(%err, ?event, "dropping input event"),
            }
        }

        if self.kind() != StateKind::Waiting && !self.game.players.is_full() {
            info!(players = self.game.players.len(), "player left, back to the lobby");
            self.game.reset_ball();
            self.game.reset_paddles();
            self.game.reset_scores();
            self.transition(GameState::waiting());
        }
    }

    /// Run the current state's update and install any state it hands back
    pub fn update(&mut self) -> Result<(), GameError> {
        if let Some(next) = self.state.update(&mut self.game)? {
            self.transition(next);
        }
        Ok(())
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        self.state.render(&self.game, canvas);
    }

    /// One full tick: advance the clock, apply input, update, then draw
    /// onto a cleared canvas. A failed update skips this tick's drawing.
    pub fn tick(
        &mut self,
        dt: f32,
        events: impl IntoIterator<Item = InputEvent>,
        canvas: &mut dyn Canvas,
    ) -> StateKind {
        self.game.time.advance(dt);
        self.handle_events(events);

        canvas.reset();
        match self.update() {
            Ok(()) => self.render(canvas),
            Err(err) => error!(%err, state = %self.kind(), "update failed, frame skipped"),
        }
        self.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Surface;
    use crate::states::Pause;
    use crate::{Config, GameMap, GameRng, Score};

    fn machine() -> GameStateMachine {
        GameStateMachine::new(Game::new(
            GameMap::default(),
            Config::default(),
            GameRng::new(42),
        ))
    }

    const NO_EVENTS: [InputEvent; 0] = [];

    fn join(id: u32) -> InputEvent {
        InputEvent::PlayerJoined { id: PlayerId(id) }
    }

    #[test]
    fn test_two_joins_start_the_game() {
        let mut fsm = machine();
        let mut surface = Surface::new(15, 16);

        assert_eq!(fsm.tick(0.1, [join(1)], &mut surface), StateKind::Waiting);
        assert_eq!(fsm.tick(0.1, [join(2)], &mut surface), StateKind::Starting);
    }

    #[test]
    fn test_countdown_then_running() {
        let mut fsm = machine();
        let mut surface = Surface::new(15, 16);
        fsm.tick(0.1, [join(1), join(2)], &mut surface);

        assert_eq!(fsm.tick(1.0, NO_EVENTS, &mut surface), StateKind::Starting);
        assert_eq!(fsm.tick(1.5, NO_EVENTS, &mut surface), StateKind::Starting);
        assert_eq!(fsm.tick(1.0, NO_EVENTS, &mut surface), StateKind::Running);
    }

    #[test]
    fn test_start_demo() {
        let mut fsm = machine();
        let ids = fsm.start_demo();

        assert_eq!(ids, vec![PlayerId(1), PlayerId(2)]);
        assert_eq!(fsm.kind(), StateKind::Starting);
        assert!(fsm.game.players.is_full());
    }

    #[test]
    fn test_disconnect_returns_to_lobby() {
        let mut fsm = machine();
        let mut surface = Surface::new(15, 16);
        fsm.start_demo();
        fsm.transition(GameState::running());
        fsm.game.score = Score { left: 1, right: 2 };

        let kind = fsm.tick(
            0.1,
            [InputEvent::Disconnected { id: PlayerId(2) }],
            &mut surface,
        );

        assert_eq!(kind, StateKind::Waiting);
        assert_eq!(fsm.game.score, Score::new(), "Scores are cleared");
        assert_eq!(fsm.game.players.len(), 1);
    }

    #[test]
    fn test_bad_events_do_not_stop_the_tick() {
        let mut fsm = machine();
        let mut surface = Surface::new(15, 16);
        let events = [
            InputEvent::KeyDown {
                id: PlayerId(9),
                button: crate::Button::Up,
            },
            join(1),
        ];

        fsm.tick(0.1, events, &mut surface);
        assert!(fsm.game.players.contains(PlayerId(1)));
    }

    #[test]
    fn test_unseated_keys_leave_the_match_alone() {
        let mut fsm = machine();
        let mut surface = Surface::new(15, 16);
        fsm.start_demo();
        let before = fsm.game.players.clone();

        let kind = fsm.tick(
            0.1,
            [InputEvent::KeyPressed {
                id: PlayerId(3),
                button: crate::Button::Down,
            }],
            &mut surface,
        );

        assert_eq!(kind, StateKind::Starting);
        assert_eq!(
            fsm.game.players.iter().collect::<Vec<_>>(),
            before.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_countdown_ends_after_long_uptime() {
        let mut fsm = machine();
        let mut surface = Surface::new(15, 16);
        fsm.game.time.now = 4_200_000.0;
        fsm.start_demo();

        for _ in 0..48 {
            fsm.tick(1.0 / 15.0, NO_EVENTS, &mut surface);
        }

        assert_eq!(fsm.kind(), StateKind::Running, "3.2 s clears a 3 s countdown");
    }

    #[test]
    fn test_unreachable_state_skips_render() {
        let mut fsm = machine();
        let mut surface = Surface::new(15, 16);
        fsm.start_demo();
        let broken = Pause {
            next: StateKind::Starting,
            ..Pause::starting(fsm.game.time.now, 0.0)
        };
        fsm.transition(GameState::Paused(broken));

        let kind = fsm.tick(0.1, NO_EVENTS, &mut surface);

        assert_eq!(kind, StateKind::Starting, "State is kept");
        assert_eq!(surface.lit_pixels().count(), 0, "Nothing drawn");
    }
}
