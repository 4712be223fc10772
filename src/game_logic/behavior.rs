use crate::components::{Behavior, Distance, Npc};
use crate::game_logic::movement::{follow_path, steer_toward};
use crate::map::WorldBounds;
use crate::pathfinding::{find_path, CollisionGrid};
use crate::resources::GameSettings;
use bevy::prelude::*;
use rand::Rng;

/// Read-only world snapshot an agent consults while deciding its move.
pub struct BehaviorContext<'a> {
    pub player_position: Vec2,
    pub grid: &'a CollisionGrid,
    pub bounds: WorldBounds,
    pub settings: &'a GameSettings,
}

/// Advances one agent by a single tick. Mutates only the agent's own
/// fields and returns its new position; the caller owns writing that
/// position back to the entity.
///
/// The shared re-plan cooldown ticks down once per call regardless of
/// mode, so a mode that replans immediately after becoming active does
/// so on an expired cooldown.
pub fn update_agent(
    npc: &mut Npc,
    position: Vec2,
    ctx: &BehaviorContext,
    rng: &mut impl Rng,
) -> Vec2 {
    npc.replan_cooldown = npc.replan_cooldown.saturating_sub(1);

    match &mut npc.behavior {
        Behavior::Static => position,

        Behavior::Chase { detection_range } => {
            let distance = Distance::new(position.distance(ctx.player_position));
            if distance >= *detection_range {
                // Out of range: no movement, no planning, no memory of
                // the player's last position.
                return position;
            }

            if npc.replan_cooldown == 0 {
                npc.path.set(find_path(
                    ctx.grid,
                    position,
                    ctx.player_position,
                    ctx.settings.goal_search_radius.get(),
                ));
                npc.replan_cooldown = ctx.settings.chase_replan_cooldown.get();
            }

            follow_path(
                position,
                &mut npc.path,
                npc.speed.0,
                ctx.settings.waypoint_tolerance.get(),
            )
        }

        Behavior::Patrol { points, current } => {
            if points.is_empty() {
                return position;
            }

            let target = points[*current];
            let distance = Distance::new(position.distance(target));
            if distance < ctx.settings.target_tolerance.get() {
                // Reached the patrol point; the route is a closed loop.
                *current = (*current + 1) % points.len();
                return position;
            }

            if npc.replan_cooldown == 0 {
                npc.path.set(find_path(
                    ctx.grid,
                    position,
                    target,
                    ctx.settings.goal_search_radius.get(),
                ));
                npc.replan_cooldown = ctx.settings.patrol_replan_cooldown.get();
            }

            follow_path(
                position,
                &mut npc.path,
                npc.speed.0,
                ctx.settings.waypoint_tolerance.get(),
            )
        }

        Behavior::Wander { target, countdown } => {
            *countdown = countdown.saturating_sub(1);

            if *countdown == 0 {
                *target = sample_wander_target(ctx.bounds, ctx.settings.wander_margin.get(), rng);
                let min = ctx.settings.wander_pause_min.get();
                let max = ctx.settings.wander_pause_max.get().max(min);
                *countdown = rng.gen_range(min..=max);
            }

            // Straight-line drift at reduced speed, no pathfinding. An
            // agent that reaches its target waits out the countdown.
            let step = npc.speed * ctx.settings.wander_speed_factor.get();
            steer_toward(
                position,
                *target,
                step.0,
                ctx.settings.target_tolerance.get(),
            )
            .position
        }
    }
}

/// Uniform point inside the world, inset from every edge by `margin`.
/// Worlds narrower than twice the margin collapse to the margin line.
fn sample_wander_target(bounds: WorldBounds, margin: f32, rng: &mut impl Rng) -> Vec2 {
    let max_x = (bounds.width - margin).max(margin);
    let max_y = (bounds.height - margin).max(margin);
    Vec2::new(
        rng.gen_range(margin..=max_x),
        rng.gen_range(margin..=max_y),
    )
}

/// Strict proximity test for the hostile catch condition.
pub fn capture_check(npc_position: Vec2, player_position: Vec2, catch_radius: f32) -> bool {
    npc_position.distance(player_position) < catch_radius
}
