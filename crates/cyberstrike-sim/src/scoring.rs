//! Running score state tracked by the engine.

use cyberstrike_core::enums::Team;
use cyberstrike_core::state::{ScoreView, TeamScore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub red: TeamScore,
    pub blue: TeamScore,
}

impl ScoreBoard {
    pub fn team(&self, team: Team) -> TeamScore {
        match team {
            Team::Red => self.red,
            Team::Blue => self.blue,
            Team::Neutral => TeamScore::default(),
        }
    }

    /// Neutral has no counters; awards to it are dropped.
    fn team_mut(&mut self, team: Team) -> Option<&mut TeamScore> {
        match team {
            Team::Red => Some(&mut self.red),
            Team::Blue => Some(&mut self.blue),
            Team::Neutral => None,
        }
    }

    pub fn award_kill(&mut self, team: Team, points: u32) {
        if let Some(counters) = self.team_mut(team) {
            counters.kills += 1;
            counters.score += points;
        }
    }

    pub fn award_capture(&mut self, team: Team, points: u32) {
        if let Some(counters) = self.team_mut(team) {
            counters.score += points;
        }
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            red: self.red,
            blue: self.blue,
        }
    }
}
