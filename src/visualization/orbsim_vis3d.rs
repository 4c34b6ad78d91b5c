use bevy::prelude::*;
use bevy::math::primitives::{Sphere, Cuboid};
use bevy::log::LogPlugin;

use log::{info, warn};

use crate::configuration::config::{spin_angle, ViewConfig};
use crate::simulation::controller::SimulationController;
use crate::simulation::scenario::Scenario;

/// Bevy resource wrapping the controller; the physics core itself never sees
/// a Bevy type
#[derive(Resource)]
struct SimState {
    controller: SimulationController,
    view: ViewConfig,
}

/// Component tagging each sphere with its body index into the controller
#[derive(Component)]
struct BodyIndex(pub usize);

/// Distance of the camera from the origin
const CAMERA_DISTANCE: f32 = 420.0;

/// Colors cycled over the non-fixed bodies
const PALETTE: [(f32, f32, f32); 6] = [
    (0.55, 0.75, 1.0),
    (1.0, 0.6, 0.4),
    (0.5, 1.0, 0.6),
    (1.0, 0.85, 0.5),
    (0.8, 0.6, 1.0),
    (0.6, 0.95, 0.95),
];

pub fn run_3d(scenario: Scenario) {
    info!("run_3d: starting Bevy 3D viewer with {} bodies", scenario.controller.len());

    App::new()
        .insert_resource(SimState {
            controller: scenario.controller,
            view: scenario.view,
        })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "orbsim".into(),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                // env_logger already owns the `log` facade
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_3d)
        .add_systems(Update, (handle_input, physics_step, sync_transforms, draw_trails).chain())
        .run();
}

/// Startup system: spawn camera and one sphere per body
fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    state: Res<SimState>,
) {
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)),
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, CAMERA_DISTANCE * 0.6, CAMERA_DISTANCE * 0.8)
            .looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    spawn_axes(&mut commands, &mut meshes, &mut materials);

    let mut palette = PALETTE.iter().cycle();
    for (i, b) in state.controller.bodies().iter().enumerate() {
        let color = if b.is_fixed() {
            Color::srgb(1.0, 0.9, 0.3)
        } else {
            palette
                .next()
                .map(|&(r, g, bl)| Color::srgb(r, g, bl))
                .unwrap_or(Color::WHITE)
        };

        let [x, y, z] = state.view.render_position(&b.position());

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(state.view.render_radius(b.radius())).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: color,
                    unlit: true,
                    ..Default::default()
                }),
                transform: Transform::from_xyz(x, y, z),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// Space pauses, Up/Down double or halve the speed
fn handle_input(keys: Res<ButtonInput<KeyCode>>, mut state: ResMut<SimState>) {
    if keys.just_pressed(KeyCode::Space) {
        state.controller.toggle_paused();
    }

    let speed = state.controller.speed();
    let next = if keys.just_pressed(KeyCode::ArrowUp) {
        Some(speed * 2.0)
    } else if keys.just_pressed(KeyCode::ArrowDown) {
        Some(speed * 0.5)
    } else {
        None
    };

    if let Some(next) = next {
        match state.controller.set_speed(next) {
            Ok(()) => info!("speed x{next}"),
            Err(e) => warn!("{e}"),
        }
    }
}

/// One controller tick per rendered frame
fn physics_step(mut state: ResMut<SimState>) {
    state.controller.tick();
}

fn sync_transforms(state: Res<SimState>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    let elapsed = state.controller.elapsed();

    for (BodyIndex(i), mut transform) in &mut query {
        if let Some(b) = state.controller.body(*i) {
            transform.translation = Vec3::from_array(state.view.render_position(&b.position()));
            transform.rotation = Quat::from_rotation_y(spin_angle(b.rotation_period(), elapsed));
        }
    }
}

fn draw_trails(state: Res<SimState>, mut gizmos: Gizmos) {
    for path in state.controller.paths() {
        if path.len() < 2 {
            continue;
        }
        gizmos.linestrip(
            path.iter().map(|p| Vec3::from_array(state.view.render_position(p))),
            Color::srgba(0.5, 0.8, 1.0, 0.4),
        );
    }
}

// =========================================================================================
// Draw 3D axes for visual reference
// =========================================================================================

fn spawn_axes(commands: &mut Commands, meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) {
    let axis_len = CAMERA_DISTANCE;
    let axis_thickness = 0.05;

    let axes = [
        (Vec3::new(axis_len, axis_thickness, axis_thickness), Color::srgb(0.4, 0.0, 0.0)),
        (Vec3::new(axis_thickness, axis_len, axis_thickness), Color::srgb(0.0, 0.4, 0.0)),
        (Vec3::new(axis_thickness, axis_thickness, axis_len), Color::srgb(0.0, 0.0, 0.4)),
    ];

    for (size, color) in axes {
        commands.spawn(PbrBundle {
            mesh: meshes.add(Cuboid::new(size.x, size.y, size.z).mesh()),
            material: materials.add(StandardMaterial {
                base_color: color,
                unlit: true,
                ..Default::default()
            }),
            transform: Transform::from_xyz(0.0, 0.0, 0.0),
            ..Default::default()
        });
    }
}
