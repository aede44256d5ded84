use std::fmt;

use crate::components::{Paddle, PlayerId, Side};
use crate::map::GameMap;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time of the last tick
    pub now: f64, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f64) -> Self {
        Self { dt, now }
    }

    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
        self.now += f64::from(dt);
    }

    /// Seconds since `since`
    pub fn elapsed_since(&self, since: f64) -> f32 {
        (self.now - since) as f32
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.0, now: 0.0 }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // First player
    pub right: u32, // Second player
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn max(&self) -> u32 {
        self.left.max(self.right)
    }

    /// Side whose score is strictly above `threshold`
    pub fn has_winner(&self, threshold: u32) -> Option<Side> {
        if self.left > threshold {
            Some(Side::Left)
        } else if self.right > threshold {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.left, self.right)
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy, for real games
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Two-slot player table. Slot 0 is the first (left) player, slot 1 the
/// second (right) player.
#[derive(Debug, Clone, Default)]
pub struct Players {
    slots: [Option<Paddle>; 2],
}

impl Players {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == self.slots.len()
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.get(id).is_some()
    }

    /// Seat a player in the first free slot. Returns `None` when the table is
    /// full or the id is already seated.
    pub fn join(&mut self, id: PlayerId, paddle_height: u32, map: &GameMap) -> Option<&Paddle> {
        if self.contains(id) {
            return None;
        }
        let side = if self.slots[0].is_none() {
            Side::Left
        } else if self.slots[1].is_none() {
            Side::Right
        } else {
            return None;
        };

        let slot = &mut self.slots[side.index()];
        *slot = Some(Paddle::new(id, side, paddle_height, map));
        slot.as_ref()
    }

    pub fn remove(&mut self, id: PlayerId) -> Option<Paddle> {
        self.slots
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|p| p.player_id == id))
            .and_then(Option::take)
    }

    pub fn get(&self, id: PlayerId) -> Option<&Paddle> {
        self.iter().find(|p| p.player_id == id)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Paddle> {
        self.iter_mut().find(|p| p.player_id == id)
    }

    pub fn by_side(&self, side: Side) -> Option<&Paddle> {
        self.slots[side.index()].as_ref()
    }

    pub fn is_seated(&self, side: Side) -> bool {
        self.by_side(side).is_some()
    }

    /// Paddles in slot order
    pub fn iter(&self) -> impl Iterator<Item = &Paddle> {
        self.slots.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Paddle> {
        self.slots.iter_mut().flatten()
    }

    pub fn reset_all(&mut self, map: &GameMap) {
        for paddle in self.iter_mut() {
            paddle.reset(map);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Left);
        score.increment(Side::Left);
        score.increment(Side::Right);
        assert_eq!(score.left, 2);
        assert_eq!(score.right, 1);
        assert_eq!(score.max(), 2);
        assert_eq!(score.to_string(), "2:1");
    }

    #[test]
    fn test_score_has_winner_is_strict() {
        let mut score = Score::new();
        score.increment(Side::Right);
        score.increment(Side::Right);
        assert_eq!(score.has_winner(2), None, "Equal to threshold is no win");
        score.increment(Side::Right);
        assert_eq!(score.has_winner(2), Some(Side::Right));
    }

    #[test]
    fn test_score_reset() {
        let mut score = Score { left: 4, right: 1 };
        score.reset();
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_time_advance() {
        let mut time = Time::default();
        time.advance(0.5);
        time.advance(0.25);
        assert_eq!(time.dt, 0.25);
        assert_eq!(time.now, 0.75);
        assert_eq!(time.elapsed_since(0.5), 0.25);
    }

    #[test]
    fn test_time_keeps_advancing_after_long_uptime() {
        let start = 4_200_000.0; // about 48 days in seconds
        let mut time = Time::new(0.0, start);
        for _ in 0..15 {
            time.advance(1.0 / 15.0);
        }
        let elapsed = time.elapsed_since(start);
        assert!((elapsed - 1.0).abs() < 1e-3, "One second of ticks, got {elapsed}");
    }

    #[test]
    fn test_players_fill_slots_in_order() {
        let map = GameMap::default();
        let mut players = Players::new();

        let first = players.join(PlayerId(10), 3, &map).copied();
        assert_eq!(first.map(|p| p.side), Some(Side::Left));
        let second = players.join(PlayerId(20), 3, &map).copied();
        assert_eq!(second.map(|p| p.side), Some(Side::Right));

        assert!(players.is_full());
        assert!(players.join(PlayerId(30), 3, &map).is_none(), "Third join is ignored");
        assert_eq!(players.len(), 2);
    }

    #[test]
    fn test_players_duplicate_join_is_ignored() {
        let map = GameMap::default();
        let mut players = Players::new();
        players.join(PlayerId(10), 3, &map);
        assert!(players.join(PlayerId(10), 3, &map).is_none());
        assert_eq!(players.len(), 1);
    }

    #[test]
    fn test_players_rejoin_takes_free_slot() {
        let map = GameMap::default();
        let mut players = Players::new();
        players.join(PlayerId(10), 3, &map);
        players.join(PlayerId(20), 3, &map);

        let removed = players.remove(PlayerId(10));
        assert_eq!(removed.map(|p| p.side), Some(Side::Left));
        assert!(!players.is_seated(Side::Left));

        let back = players.join(PlayerId(30), 3, &map).copied();
        assert_eq!(back.map(|p| p.side), Some(Side::Left));
        assert_eq!(
            players.iter().map(|p| p.player_id).collect::<Vec<_>>(),
            vec![PlayerId(30), PlayerId(20)]
        );
    }

    #[test]
    fn test_players_reset_all() {
        let map = GameMap::default();
        let mut players = Players::new();
        players.join(PlayerId(1), 3, &map);
        players.join(PlayerId(2), 3, &map);
        for paddle in players.iter_mut() {
            paddle.pos.y = 0.0;
        }
        players.reset_all(&map);
        for paddle in players.iter() {
            assert_eq!(paddle.pos, map.paddle_home(paddle.side));
        }
    }
}
