use crate::components::{Container, Player, Prop};
use crate::game_logic::collision::Obstacle;
use crate::game_logic::player::resolve_move;
use crate::map::WorldBounds;
use crate::plugins::simulation::TickSet;
use crate::plugins::world::prop_obstacle;
use crate::resources::{GameConfig, GridDirty, PlayerIntent};
use bevy::prelude::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerIntent>()
            .add_systems(Update, move_player.in_set(TickSet::PlayerMove));
    }
}

/// Applies the current [`PlayerIntent`] to the player transform, shoving
/// pushable blocks out of the way when the move calls for it.
fn move_player(
    intent: Res<PlayerIntent>,
    config: Res<GameConfig>,
    bounds: Res<WorldBounds>,
    mut dirty: ResMut<GridDirty>,
    mut player_query: Query<(&mut Transform, &Player), Without<Prop>>,
    mut prop_query: Query<(Entity, &mut Transform, &Prop, Option<&Container>), Without<Player>>,
) {
    let Ok((mut transform, player)) = player_query.single_mut() else {
        return;
    };

    let mut handles = Vec::new();
    let mut obstacles: Vec<Obstacle> = Vec::new();
    for (entity, prop_transform, prop, container) in prop_query.iter() {
        let open = container.is_some_and(|c| c.open);
        let position = prop_transform.translation.truncate();
        let Some(obstacle) = prop_obstacle(prop.kind, position, open) else {
            continue;
        };
        handles.push(entity);
        obstacles.push(obstacle);
    }

    let step = resolve_move(
        transform.translation.truncate(),
        intent.direction,
        player.speed,
        config.settings.push_strength.get(),
        &obstacles,
        &bounds,
    );

    if let Some(push) = step.push {
        if let Ok((_, mut block_transform, _, _)) = prop_query.get_mut(handles[push.obstacle]) {
            block_transform.translation.x = push.to.x;
            block_transform.translation.y = push.to.y;
            dirty.pending = true;
        }
    }

    transform.translation.x = step.position.x;
    transform.translation.y = step.position.y;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::PropKind;
    use crate::pathfinding::{CollisionGrid, GridCell};
    use crate::plugins::{SimulationPlugin, WorldPlugin};
    use bevy::state::app::StatesPlugin;

    fn village_app() -> App {
        let mut app = App::new();
        let mut config = GameConfig::default();
        config.settings.rng_seed = Some(11);
        app.add_plugins(MinimalPlugins)
            .add_plugins(StatesPlugin)
            .insert_resource(config)
            .add_plugins((SimulationPlugin, WorldPlugin, PlayerPlugin));
        app
    }

    fn player_position(app: &mut App) -> Vec2 {
        let mut players = app.world_mut().query_filtered::<&Transform, With<Player>>();
        players
            .single(app.world())
            .unwrap()
            .translation
            .truncate()
    }

    #[test]
    fn test_intent_moves_player() {
        let mut app = village_app();
        app.update();
        app.world_mut().resource_mut::<PlayerIntent>().direction = Vec2::new(0.0, -1.0);
        for _ in 0..3 {
            app.update();
        }

        assert_eq!(player_position(&mut app), Vec2::new(400.0, 294.0));
    }

    #[test]
    fn test_player_pushes_block_and_grid_follows() {
        let mut app = village_app();
        app.update();
        assert!(!app
            .world()
            .resource::<CollisionGrid>()
            .is_free(GridCell::new(11, 8)));

        // Walking north from the spawn runs into the west pushable block.
        app.world_mut().resource_mut::<PlayerIntent>().direction = Vec2::new(0.0, -1.0);
        for _ in 0..40 {
            app.update();
        }

        let mut props = app.world_mut().query::<(&Transform, &Prop)>();
        let block = props
            .iter(app.world())
            .find(|(t, p)| p.kind == PropKind::Block && t.translation.x == 400.0)
            .map(|(t, _)| t.translation.truncate())
            .unwrap();
        assert_eq!(block, Vec2::new(400.0, 184.0));
        assert_eq!(player_position(&mut app), Vec2::new(400.0, 220.0));

        // The shove marked the grid dirty, so the freed cells reopened on
        // the next tick instead of waiting for the scheduled rebuild.
        assert!(app
            .world()
            .resource::<CollisionGrid>()
            .is_free(GridCell::new(11, 8)));
    }

    #[test]
    fn test_player_clamped_at_world_edge() {
        let mut app = village_app();
        app.update();
        {
            let mut players = app
                .world_mut()
                .query_filtered::<&mut Transform, With<Player>>();
            players.single_mut(app.world_mut()).unwrap().translation = Vec3::new(2.0, 300.0, 0.0);
        }
        app.world_mut().resource_mut::<PlayerIntent>().direction = Vec2::new(-1.0, 0.0);
        for _ in 0..3 {
            app.update();
        }

        assert_eq!(player_position(&mut app), Vec2::new(0.0, 300.0));
    }
}
