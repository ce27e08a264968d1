//! Tutorial scenes built on the public API.
//!
//! Each scene is a plain function over a [`Scene`]; [`SCENES`] maps the names accepted by
//! the `kinema` binary to them.

use std::f64::consts::PI;

use crate::{
    Animation, KinemaResult, PlayConfig, Scene, animate,
    color::{BLUE, GREEN, PINK},
    direction::{LEFT, RIGHT},
    shapes,
};

/// Body of a tutorial scene.
pub type SceneFn = fn(&mut Scene<'_>) -> KinemaResult<()>;

/// Every tutorial scene, by name.
pub const SCENES: &[(&str, SceneFn)] = &[
    ("CreateCircle", create_circle),
    ("SquareToCircle", square_to_circle),
    ("SquareAndCircle", square_and_circle),
    ("AnimatedSquareToCircle", animated_square_to_circle),
    ("DifferentRotations", different_rotations),
    ("TwoTransforms", two_transforms),
    ("FadeSequence", fade_sequence),
];

/// Look a scene up by name.
pub fn find(name: &str) -> Option<SceneFn> {
    SCENES.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
}

/// A pink, half-transparent circle drawn on screen.
pub fn create_circle(scene: &mut Scene<'_>) -> KinemaResult<()> {
    let mut circle = shapes::circle(1.0)?;
    circle.set_fill(PINK, 0.5);
    scene.play_one(Animation::create(circle))?;
    Ok(())
}

/// A tilted square drawn, morphed into a circle, then faded out.
pub fn square_to_circle(scene: &mut Scene<'_>) -> KinemaResult<()> {
    let mut circle = shapes::circle(1.0)?;
    circle.set_fill(PINK, 0.5);
    let mut square = shapes::square(2.0)?;
    square.rotate(PI / 4.0);

    scene.play_one(Animation::create(square.clone()))?;
    scene.play_one(Animation::transform(&square, circle))?;
    scene.play_one(Animation::fade_out(&square))?;
    Ok(())
}

/// A circle and a square placed next to it, drawn together.
pub fn square_and_circle(scene: &mut Scene<'_>) -> KinemaResult<()> {
    let mut circle = shapes::circle(1.0)?;
    circle.set_fill(PINK, 0.5);
    let mut square = shapes::square(2.0)?;
    square.set_fill(BLUE, 0.5);
    square.place_relative_to(&circle, RIGHT, 0.5)?;

    scene.play(
        vec![Animation::create(circle), Animation::create(square)],
        PlayConfig::default(),
    )?;
    Ok(())
}

/// Property animations chained around a replacement morph.
pub fn animated_square_to_circle(scene: &mut Scene<'_>) -> KinemaResult<()> {
    let circle = shapes::circle(1.0)?;
    let square = shapes::square(2.0)?;

    scene.play_one(Animation::create(square.clone()))?;
    scene.play_one(animate(&square).rotate(PI / 4.0))?;
    scene.play_one(Animation::replacement_transform(&square, circle.clone()))?;
    scene.play_one(animate(&circle).set_fill(PINK, 0.5))?;
    Ok(())
}

/// Two squares spun half a turn in parallel over two seconds.
pub fn different_rotations(scene: &mut Scene<'_>) -> KinemaResult<()> {
    let mut left = shapes::square(2.0)?;
    left.set_fill(BLUE, 0.7).shift(LEFT * 2.0);
    let mut right = shapes::square(2.0)?;
    right.set_fill(GREEN, 0.7).shift(RIGHT * 2.0);
    scene.add([left.clone(), right.clone()]);

    scene.play(
        vec![
            animate(&left).rotate(PI).build(),
            animate(&right).rotate_about(PI, right.center()).build(),
        ],
        PlayConfig::new().run_time(2.0),
    )?;
    scene.wait_default()?;
    Ok(())
}

/// One object morphed twice in a row, then removed.
pub fn two_transforms(scene: &mut Scene<'_>) -> KinemaResult<()> {
    let circle = shapes::circle(1.0)?;
    let square = shapes::square(2.0)?;
    let triangle = shapes::triangle(1.0)?;

    scene.add([circle.clone()]);
    scene.play_one(Animation::transform(&circle, square))?;
    scene.play_one(Animation::transform(&circle, triangle))?;
    scene.play_one(Animation::fade_out(&circle))?;
    Ok(())
}

/// Staggered fade-in of three shapes, a pause, and a staggered fade-out.
pub fn fade_sequence(scene: &mut Scene<'_>) -> KinemaResult<()> {
    let mut shapes_in_row = Vec::new();
    for (i, color) in [PINK, BLUE, GREEN].into_iter().enumerate() {
        let mut obj = shapes::regular_polygon(3 + i as u32, 0.8)?;
        obj.set_fill(color, 0.8).shift(RIGHT * (2.5 * i as f64 - 2.5));
        shapes_in_row.push(obj);
    }

    scene.play(
        shapes_in_row.iter().cloned().map(Animation::fade_in).collect(),
        PlayConfig::new().lag_ratio(0.5),
    )?;
    scene.wait(0.5)?;
    scene.play(
        shapes_in_row.iter().map(Animation::fade_out).collect(),
        PlayConfig::new().lag_ratio(0.5),
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/tutorial.rs"]
mod tests;
