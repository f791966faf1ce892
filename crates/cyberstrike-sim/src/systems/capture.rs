//! Capture point progress and ownership.

use hecs::World;
use tracing::debug;

use cyberstrike_core::components::CapturePoint;
use cyberstrike_core::constants::CAPTURE_COMPLETE;
use cyberstrike_core::enums::Team;
use cyberstrike_core::events::GameEvent;
use cyberstrike_core::types::Position;

use crate::scoring::ScoreBoard;
use crate::tuning::CombatTuning;
use crate::world_setup;

/// Team credited when the player completes a capture.
const CAPTURING_TEAM: Team = Team::Blue;

/// Advance progress on every point within the capture radius of the player.
/// Points outside the radius keep their progress.
pub fn run(
    world: &mut World,
    tuning: &CombatTuning,
    score: &mut ScoreBoard,
    events: &mut Vec<GameEvent>,
) {
    let Some(player_pos) = world_setup::player_position(world) else {
        return;
    };

    for (_entity, (point, pos)) in world.query_mut::<(&mut CapturePoint, &Position)>() {
        if pos.range_to(&player_pos) > tuning.capture_radius {
            continue;
        }

        point.progress = (point.progress + tuning.capture_rate).min(CAPTURE_COMPLETE);
        if point.progress >= CAPTURE_COMPLETE && point.owner != CAPTURING_TEAM {
            point.owner = CAPTURING_TEAM;
            score.award_capture(CAPTURING_TEAM, tuning.capture_score);
            debug!(point_id = %point.id, "capture point taken");
            events.push(GameEvent::PointCaptured {
                point_id: point.id,
                team: CAPTURING_TEAM,
                score_delta: tuning.capture_score,
            });
        }
    }
}
