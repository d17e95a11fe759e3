//! The marble game: players take turns adding marbles to a circle, and every
//! 23rd marble scores instead.

use itertools::Itertools;
use ring::{NodeId, Ring};
use std::fmt;
use IteratorExt;

/// Every marble whose number is a multiple of this scores instead of being
/// placed.
pub const SCORING_INTERVAL: u64 = 23;

/// How far right of the current marble the scored marble sits.
pub const SCORING_REACH: usize = 7;

#[derive(Clone, Debug, Eq, Fail, PartialEq)]
pub enum GameError {
    #[fail(display = "invalid configuration: a game needs at least one player, not {}", players)]
    InvalidConfiguration { players: usize },
}

pub struct Game {
    ring: Ring<u64>,
    current: NodeId,
    /// The last marble removed, waiting to hold the next one placed.
    spare: Option<NodeId>,
    scores: Vec<u64>,
    turn: u64,
    next_player: usize,
}

impl Game {
    pub fn new(players: usize) -> Result<Game, GameError> {
        Game::with_capacity(players, 0)
    }

    /// Like `new`, but reserve room for a game of `marbles` turns.
    pub fn with_capacity(players: usize, marbles: u64) -> Result<Game, GameError> {
        if players == 0 {
            return Err(GameError::InvalidConfiguration { players });
        }

        let ring = Ring::with_capacity(0, peak_slots(marbles) as usize);
        let current = ring.root();
        Ok(Game {
            ring,
            current,
            spare: None,
            scores: vec![0; players],
            turn: 0,
            next_player: 0,
        })
    }

    /// The number of turns played so far, which is also the highest marble
    /// played.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn players(&self) -> usize {
        self.scores.len()
    }

    pub fn scores(&self) -> &[u64] {
        &self.scores
    }

    pub fn ring(&self) -> &Ring<u64> {
        &self.ring
    }

    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn spare(&self) -> Option<NodeId> {
        self.spare
    }

    /// Play the next marble. Return the points scored, if this was a scoring
    /// turn.
    pub fn play_turn(&mut self) -> Option<u64> {
        self.turn += 1;
        let marble = self.turn;
        let player = self.next_player;
        self.next_player = (self.next_player + 1) % self.scores.len();

        if marble % SCORING_INTERVAL != 0 {
            let node = match self.spare.take() {
                Some(node) => {
                    self.ring.replace(node, marble);
                    node
                }
                None => self.ring.alloc(marble),
            };
            let anchor = self.ring.step_left(self.current, 1);
            self.ring.insert_after(anchor, node);
            self.current = node;
            None
        } else {
            let scored = self.ring.step_right(self.current, SCORING_REACH);
            self.current = self.ring.step_left(scored, 1);
            self.ring.remove(scored);

            let points = marble + *self.ring.get(scored);
            self.scores[player] += points;
            self.spare = Some(scored);
            Some(points)
        }
    }

    /// Play turns until marble `last_marble` has been played.
    pub fn play_until(&mut self, last_marble: u64) {
        while self.turn < last_marble {
            self.play_turn();
        }
    }

    pub fn high_score(&self) -> u64 {
        self.scores.iter().cloned().max().unwrap_or(0)
    }

    /// Return the player with the highest score, or `None` if the lead is
    /// tied. Before anyone scores, everyone is tied.
    pub fn winner(&self) -> Option<usize> {
        self.scores
            .iter()
            .enumerate()
            .unique_max_by_key(|&(_, &score)| score)
            .map(|(player, _)| player)
    }
}

/// The most arena slots a game of `marbles` turns ever uses. Each scoring turn
/// frees a slot that the next turn reuses; a game ending on a scoring turn
/// keeps its last freed slot unused.
fn peak_slots(marbles: u64) -> u64 {
    let scoring = marbles / SCORING_INTERVAL;
    let unused_spare = if scoring > 0 && marbles % SCORING_INTERVAL == 0 { 1 } else { 0 };
    marbles - 2 * scoring + 1 + unused_spare
}

/// Show the circle starting at marble 0, with the current marble in
/// parentheses, after the number of the player who just moved:
///
/// ```text
/// [3] 0 2 1 (3)
/// ```
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.turn == 0 {
            write!(f, "[-] ")?;
        } else {
            let player = (self.turn - 1) % self.scores.len() as u64;
            write!(f, "[{}] ", player + 1)?;
        }

        let current = self.current;
        let marbles = self
            .ring
            .iter_from(self.ring.root())
            .map(|(id, marble)| {
                if id == current {
                    format!("({})", marble)
                } else {
                    marble.to_string()
                }
            })
            .join(" ");
        write!(f, "{}", marbles)
    }
}

/// Return the highest score reached by any of `players` players in a game
/// whose last marble is `marbles`.
pub fn high_score(players: usize, marbles: u64) -> Result<u64, GameError> {
    let mut game = Game::with_capacity(players, marbles)?;
    game.play_until(marbles);
    Ok(game.high_score())
}
