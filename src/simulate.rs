//! Headless computer-vs-computer games.

use noughts_engine::{ComputerPlayer, Engine, GameMode, Outcome, Player, Reason};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

/// Tally of simulated games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
    /// How often each rule chose a move, keyed by rule name.
    pub reasons: BTreeMap<String, u32>,
}

impl SimulationReport {
    fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        if !outcome.is_terminal() {
            warn!("Game stopped before a result");
            return;
        }
        match outcome.winner() {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }

    fn record_reason(&mut self, reason: Reason) {
        *self.reasons.entry(reason.to_string()).or_default() += 1;
    }
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "games: {}", self.games)?;
        writeln!(f, "X wins: {}", self.x_wins)?;
        writeln!(f, "O wins: {}", self.o_wins)?;
        write!(f, "draws: {}", self.draws)?;
        for (reason, count) in &self.reasons {
            write!(f, "\n  {}: {}", reason, count)?;
        }
        Ok(())
    }
}

/// Plays `games` games with the heuristic on both seats.
///
/// The same seed always yields the same report.
#[instrument]
pub fn run(games: u32, seed: u64) -> SimulationReport {
    let mut x = ComputerPlayer::seeded(Player::X, seed);
    let mut o = ComputerPlayer::seeded(Player::O, seed.wrapping_add(1));
    let mut engine = Engine::new(GameMode::PlayerVsPlayer);
    let mut report = SimulationReport::default();

    for game in 0..games {
        engine.reset(GameMode::PlayerVsPlayer);
        let mut outcome = Outcome::Continue;
        while engine.is_active() {
            let seat = match engine.current_player() {
                Player::X => &mut x,
                Player::O => &mut o,
            };
            let Some(choice) = seat.select_move(engine.board()) else {
                break;
            };
            report.record_reason(choice.reason);
            match engine.play(choice.index) {
                Ok(next) => outcome = next,
                Err(e) => {
                    warn!(game, index = choice.index, error = %e, "Simulated move rejected");
                    break;
                }
            }
        }
        debug!(game, %outcome, board = %engine.board().display(), "Game finished");
        report.record(outcome);
    }

    info!(
        games = report.games,
        x_wins = report.x_wins,
        o_wins = report.o_wins,
        draws = report.draws,
        "Simulation complete"
    );
    report
}
