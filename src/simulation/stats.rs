use crate::game::PieceColor;

/// Result of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub winner: Option<PieceColor>,
    pub moves: usize,
}

/// Running tally over many games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationStats {
    pub games: usize,
    pub red_wins: usize,
    pub yellow_wins: usize,
    pub draws: usize,
    pub total_moves: usize,
}

impl SimulationStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: GameRecord) {
        self.games += 1;
        self.total_moves += record.moves;
        match record.winner {
            Some(PieceColor::Red) => self.red_wins += 1,
            Some(PieceColor::Yellow) => self.yellow_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Fold another tally (e.g. from a worker thread) into this one.
    pub fn merge(&mut self, other: &SimulationStats) {
        self.games += other.games;
        self.red_wins += other.red_wins;
        self.yellow_wins += other.yellow_wins;
        self.draws += other.draws;
        self.total_moves += other.total_moves;
    }

    pub fn wins(&self, color: PieceColor) -> usize {
        match color {
            PieceColor::Red => self.red_wins,
            PieceColor::Yellow => self.yellow_wins,
        }
    }

    /// Fraction of games won by `color`.
    pub fn win_rate(&self, color: PieceColor) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins(color) as f32 / self.games as f32
    }

    pub fn draw_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.draws as f32 / self.games as f32
    }

    pub fn average_game_length(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.games as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(winner: Option<PieceColor>, moves: usize) -> GameRecord {
        GameRecord { winner, moves }
    }

    fn stats_from(records: &[GameRecord]) -> SimulationStats {
        let mut stats = SimulationStats::new();
        for &r in records {
            stats.record(r);
        }
        stats
    }

    #[test]
    fn test_empty_stats() {
        let stats = SimulationStats::new();
        assert_eq!(stats.win_rate(PieceColor::Red), 0.0);
        assert_eq!(stats.draw_rate(), 0.0);
        assert_eq!(stats.average_game_length(), 0.0);
    }

    #[test]
    fn test_rates() {
        let stats = stats_from(&[
            game(Some(PieceColor::Red), 10),
            game(Some(PieceColor::Red), 20),
            game(Some(PieceColor::Yellow), 7),
            game(None, 42),
        ]);
        assert_eq!(stats.games, 4);
        assert_eq!(stats.wins(PieceColor::Red), 2);
        assert!((stats.win_rate(PieceColor::Red) - 0.5).abs() < 1e-6);
        assert!((stats.win_rate(PieceColor::Yellow) - 0.25).abs() < 1e-6);
        assert!((stats.draw_rate() - 0.25).abs() < 1e-6);
        assert!((stats.average_game_length() - 19.75).abs() < 1e-6);
    }

    #[test]
    fn test_merge() {
        let mut a = stats_from(&[game(Some(PieceColor::Red), 9)]);
        let b = stats_from(&[game(None, 42), game(Some(PieceColor::Yellow), 11)]);
        a.merge(&b);
        assert_eq!(
            a,
            SimulationStats {
                games: 3,
                red_wins: 1,
                yellow_wins: 1,
                draws: 1,
                total_moves: 62,
            }
        );
    }
}
