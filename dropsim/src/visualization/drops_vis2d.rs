use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::{Circle, Rectangle};

use crate::simulation::pacing::FramePacer;
use crate::simulation::params::{FRAME_RATE, R};
use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct DropIndex(pub usize);

/// World units to screen pixels
const SCALE: f32 = 150.0;

pub fn run_2d(scenario: Scenario) {
    App::new()
        .insert_resource(scenario)
        .insert_resource(FramePacer::new(FRAME_RATE))
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_scene_system)
        .add_systems(Update, (physics_step_system, sync_transforms_system).chain())
        .run();
}

fn setup_scene_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // LogPlugin is up by now, earlier events would be dropped
    scenario.log_summary();
    info!("run_2d: starting Bevy 2D viewer");

    // 2D camera
    commands.spawn(Camera2dBundle::default());

    // walls never move, spawn and forget
    let wall_material = materials.add(ColorMaterial::from(Color::srgb(0.5, 0.6, 0.3)));
    for wall in scenario.world.walls() {
        let side = 2.0 * wall.r as f32 * SCALE;
        commands.spawn(MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(Rectangle::new(side, side))),
            material: wall_material.clone(),
            transform: Transform::from_xyz(wall.x.x as f32 * SCALE, wall.x.y as f32 * SCALE, 0.0),
            ..Default::default()
        });
    }

    // one shared mesh for every drop
    let drop_mesh = Mesh2dHandle(meshes.add(Circle::new(R as f32 * SCALE)));
    let drop_material = materials.add(ColorMaterial::from(Color::srgb(0.2, 0.3, 1.0)));
    for (i, drop) in scenario.world.drops().iter().enumerate() {
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: drop_mesh.clone(),
                material: drop_material.clone(),
                transform: Transform::from_xyz(drop.x.x as f32 * SCALE, drop.x.y as f32 * SCALE, 1.0),
                ..Default::default()
            },
            DropIndex(i),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>, mut pacer: ResMut<FramePacer>) {
    pacer.wait();
    let energy = scenario.step();
    info!("System energy: {:.2}", energy);
}

fn sync_transforms_system(scenario: Res<Scenario>, mut query: Query<(&DropIndex, &mut Transform)>) {
    for (DropIndex(i), mut transform) in &mut query {
        if let Some(d) = scenario.world.drops().get(*i) {
            transform.translation.x = (d.x.x as f32) * SCALE;
            transform.translation.y = (d.x.y as f32) * SCALE;
        }
    }
}
