//! Movement domain: dev-only test room.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Ground
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(24.0, 1.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -5.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(24.0, 1.0),
        ground_layers,
    ));

    // Left wall
    commands.spawn((
        Wall,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(1.0, 14.0)),
            ..default()
        },
        Transform::from_xyz(-12.0, 2.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(1.0, 14.0),
        wall_layers,
    ));

    // Right wall
    commands.spawn((
        Wall,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(1.0, 14.0)),
            ..default()
        },
        Transform::from_xyz(12.0, 2.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(1.0, 14.0),
        wall_layers,
    ));

    // Platform - left side
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(4.0, 0.5)),
            ..default()
        },
        Transform::from_xyz(-7.0, -2.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(4.0, 0.5),
        ground_layers,
    ));

    // Platform - right side, higher
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(4.0, 0.5)),
            ..default()
        },
        Transform::from_xyz(7.0, 0.5, 0.0),
        RigidBody::Static,
        Collider::rectangle(4.0, 0.5),
        ground_layers,
    ));

    // Pillar for wall jumping practice
    commands.spawn((
        Wall,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(0.8, 5.0)),
            ..default()
        },
        Transform::from_xyz(-2.5, -2.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(0.8, 5.0),
        wall_layers,
    ));
}
