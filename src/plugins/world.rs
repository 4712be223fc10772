use crate::components::{Container, Npc, Player, Prop, PropKind, Speed};
use crate::game_logic::collision::Obstacle;
use crate::map::WorldLayout;
use crate::pathfinding::CollisionGrid;
use crate::resources::{GameConfig, GameState, GridDirty, SimRng};
use bevy::prelude::*;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<OpenContainer>()
            .add_systems(OnEnter(GameState::Playing), setup_world)
            .add_systems(
                Update,
                open_containers.run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnExit(GameState::Playing), cleanup_world);
    }
}

/// Request to open a container entity, e.g. the village chest. Opening is
/// one-way; opened containers stop blocking movement and pathfinding.
#[derive(Event, Debug, Clone, Copy)]
pub struct OpenContainer {
    pub entity: Entity,
}

fn setup_world(mut commands: Commands, config: Res<GameConfig>) {
    let layout = match WorldLayout::load_from_file(&config.settings.layout_file_path) {
        Ok(layout) => {
            info!("Loaded world layout: {}", layout.name);
            layout
        }
        Err(err) => {
            warn!("Failed to load world layout: {err}");
            info!("Falling back to the built-in starter village");
            WorldLayout::starter_village()
        }
    };

    let bounds = layout.bounds();
    let obstacles: Vec<Obstacle> = layout
        .props
        .iter()
        .filter_map(|placement| prop_obstacle(placement.kind, placement.position, false))
        .collect();
    let grid = CollisionGrid::build(&obstacles, bounds.width, bounds.height);
    info!(
        "Collision grid ready: {width}x{height} cells, {blocked} blocked",
        width = grid.width,
        height = grid.height,
        blocked = grid.blocked_count()
    );

    commands.insert_resource(SimRng::from_settings(&config.settings));
    commands.insert_resource(bounds);
    commands.insert_resource(grid);

    commands.spawn((
        Player {
            speed: Speed::new(config.settings.player_movement_speed.get()),
        },
        Transform::from_xyz(layout.player_spawn.x, layout.player_spawn.y, 0.0),
    ));

    for placement in &layout.props {
        let mut prop = commands.spawn((
            Prop {
                kind: placement.kind,
            },
            Transform::from_xyz(placement.position.x, placement.position.y, 0.0),
        ));
        if placement.kind.is_container() {
            prop.insert(Container::default());
        }
    }

    for spawn in &layout.npcs {
        commands.spawn((
            spawn.to_npc(&config.settings),
            Transform::from_xyz(spawn.position.x, spawn.position.y, 0.0),
        ));
    }

    info!(
        "Spawned {props} props and {npcs} agents",
        props = layout.props.len(),
        npcs = layout.npcs.len()
    );
    commands.insert_resource(layout);
}

fn open_containers(
    mut events: EventReader<OpenContainer>,
    mut containers: Query<(&mut Container, &Prop)>,
    mut dirty: ResMut<GridDirty>,
) {
    for event in events.read() {
        let Ok((mut container, prop)) = containers.get_mut(event.entity) else {
            warn!("Open request for an entity that is not a container");
            continue;
        };
        if container.open {
            continue;
        }
        container.open = true;
        dirty.pending = true;
        info!("Opened the {}", prop.kind.label());
    }
}

fn cleanup_world(
    mut commands: Commands,
    entities: Query<Entity, Or<(With<Player>, With<Npc>, With<Prop>)>>,
) {
    for entity in entities.iter() {
        commands.entity(entity).despawn();
    }
}

/// Collision snapshot entry for one prop, or `None` for props that never
/// block (signs) and containers that have been opened.
pub(crate) fn prop_obstacle(kind: PropKind, position: Vec2, open: bool) -> Option<Obstacle> {
    if !kind.is_solid() || (kind.is_container() && open) {
        return None;
    }

    Some(Obstacle {
        position,
        size: kind.footprint(),
        solid: true,
        pushable: kind.is_pushable(),
    })
}
