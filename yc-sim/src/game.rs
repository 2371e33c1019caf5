//! Whole-game orchestration around the bot policy: fresh scoreboards, one
//! `decide_bot_turn` per turn, commitments recorded until every board is
//! complete.

use yc_bot::{decide_bot_turn, BotTurn};
use yc_core::{
    Category, ChanceKind, EventKeyedRoller, RngRoller, RollKey, RollSource, Scoreboard,
    NUM_CATEGORIES,
};

use crate::SimError;

/// A turn together with whose turn it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedTurn {
    pub player: u8,
    pub turn_idx: u8,
    pub turn: BotTurn,
}

/// One single-bot game of 12 turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub seed: u64,
    pub board: Scoreboard,
    pub turns: Vec<PlayedTurn>,
}

impl GameRecord {
    pub fn total(&self) -> u32 {
        self.board.total()
    }

    pub fn scored_yacht(&self) -> bool {
        self.board.get(Category::Yacht).unwrap_or(0) > 0
    }

    pub fn result(&self) -> GameResult {
        GameResult {
            seed: self.seed,
            total: self.total(),
            scored_yacht: self.scored_yacht(),
        }
    }
}

/// What a batch run keeps of each game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub seed: u64,
    pub total: u32,
    pub scored_yacht: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelOutcome {
    Win(u8),
    Draw,
}

/// A 1:1 game between two bots sharing one dice source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuelRecord {
    pub seed: u64,
    pub boards: [Scoreboard; 2],
    pub turns: Vec<PlayedTurn>,
}

impl DuelRecord {
    pub fn totals(&self) -> [u32; 2] {
        [self.boards[0].total(), self.boards[1].total()]
    }

    pub fn outcome(&self) -> DuelOutcome {
        let [a, b] = self.totals();
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => DuelOutcome::Win(0),
            std::cmp::Ordering::Less => DuelOutcome::Win(1),
            std::cmp::Ordering::Equal => DuelOutcome::Draw,
        }
    }
}

/// Dice source for a game seeded with `seed`.
pub fn roller_for(chance: ChanceKind, seed: u64) -> Box<dyn RollSource + Send> {
    match chance {
        ChanceKind::EventKeyed => Box::new(EventKeyedRoller),
        ChanceKind::Rng => Box::new(RngRoller::new(seed)),
    }
}

fn play_turn(
    board: &mut Scoreboard,
    source: &mut (dyn RollSource + Send),
    seed: u64,
    player: u8,
    turn_idx: u8,
) -> Result<PlayedTurn, SimError> {
    let key = RollKey {
        game_seed: seed,
        player,
        turn_idx,
        roll_idx: 0,
    };
    let turn = decide_bot_turn(board, source, key)?;
    turn.apply(board)?;
    Ok(PlayedTurn {
        player,
        turn_idx,
        turn,
    })
}

/// Play a full single-bot game.
pub fn play_solo_game(seed: u64, chance: ChanceKind) -> Result<GameRecord, SimError> {
    let mut source = roller_for(chance, seed);
    let mut board = Scoreboard::new();
    let mut turns = Vec::with_capacity(NUM_CATEGORIES);

    for turn_idx in 0..NUM_CATEGORIES as u8 {
        turns.push(play_turn(&mut board, source.as_mut(), seed, 0, turn_idx)?);
    }
    debug_assert!(board.is_complete());

    Ok(GameRecord { seed, board, turns })
}

/// Play a 1:1 bot game; player 0 moves first every round.
pub fn play_duel(seed: u64, chance: ChanceKind) -> Result<DuelRecord, SimError> {
    let mut source = roller_for(chance, seed);
    let mut boards = [Scoreboard::new(), Scoreboard::new()];
    let mut turns = Vec::with_capacity(2 * NUM_CATEGORIES);

    for turn_idx in 0..NUM_CATEGORIES as u8 {
        for (player, board) in boards.iter_mut().enumerate() {
            turns.push(play_turn(board, source.as_mut(), seed, player as u8, turn_idx)?);
        }
    }

    Ok(DuelRecord {
        seed,
        boards,
        turns,
    })
}
