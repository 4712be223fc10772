use bevy::app::{AppExit, ScheduleRunnerPlugin};
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use coinquest::config;
use coinquest::plugins::*;
use coinquest::resources::GameState;
use std::time::Duration;

fn main() {
    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(bevy::log::LogPlugin::default())
        .add_plugins(StatesPlugin)
        .insert_resource(config::load_config())
        .add_plugins((SimulationPlugin, WorldPlugin, PlayerPlugin))
        .add_systems(OnEnter(GameState::Defeat), exit_on_defeat)
        .run();
}

fn exit_on_defeat(mut exit: EventWriter<AppExit>) {
    info!("The run is over, shutting down");
    exit.write(AppExit::Success);
}
