//! # Decorative Plant Model
//!
//! A stylised plant assembled from a handful of primitives: a tapered stem,
//! three leaf planes, and optional accents chosen by looking at the plant's
//! name. It is not a botanical reconstruction and carries no asset pipeline.
//!
//! Coordinates are right-handed with `y` up. Rotations are Euler angles in
//! radians applied in X, Y, Z order (the innermost rotation is Z).

use std::f32::consts::PI;

use herbarium_common::models::PlantRecord;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    fn rotate_x(self, angle: f32) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(self.x, self.y * cos - self.z * sin, self.y * sin + self.z * cos)
    }

    fn rotate_y(self, angle: f32) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(self.x * cos + self.z * sin, self.y, -self.x * sin + self.z * cos)
    }

    fn rotate_z(self, angle: f32) -> Vec3 {
        let (sin, cos) = angle.sin_cos();
        Vec3::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos, self.z)
    }

    fn rotate_euler(self, euler: Vec3) -> Vec3 {
        self.rotate_z(euler.z).rotate_y(euler.y).rotate_x(euler.x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Stem,
    Leaf,
    Accent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
    },
    Plane {
        width: f32,
        height: f32,
    },
    Sphere {
        radius: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub part: Part,
    pub shape: Shape,
    pub position: Vec3,
    pub rotation: Vec3,
    pub color: Rgb,
}

impl Primitive {
    const fn new(part: Part, shape: Shape, position: Vec3, rotation: Vec3, color: Rgb) -> Self {
        Self {
            part,
            shape,
            position,
            rotation,
            color,
        }
    }

    /// Samples the surface in world space. `steps` controls density along each axis.
    pub fn surface_points(&self, steps: usize) -> Vec<Vec3> {
        let steps = steps.max(2);
        let last = (steps - 1) as f32;
        let mut local = Vec::with_capacity(steps * steps);

        match self.shape {
            Shape::Cylinder {
                radius_top,
                radius_bottom,
                height,
            } => {
                for i in 0..steps {
                    let t = i as f32 / last;
                    let y = -height / 2.0 + t * height;
                    let radius = radius_bottom + (radius_top - radius_bottom) * t;
                    for j in 0..steps {
                        let theta = 2.0 * PI * j as f32 / steps as f32;
                        local.push(Vec3::new(radius * theta.cos(), y, radius * theta.sin()));
                    }
                }
            }
            Shape::Plane { width, height } => {
                for i in 0..steps {
                    for j in 0..steps {
                        let u = i as f32 / last - 0.5;
                        let v = j as f32 / last - 0.5;
                        local.push(Vec3::new(u * width, v * height, 0.0));
                    }
                }
            }
            Shape::Sphere { radius } => {
                for i in 0..steps {
                    let phi = PI * i as f32 / last;
                    for j in 0..steps {
                        let theta = 2.0 * PI * j as f32 / steps as f32;
                        local.push(Vec3::new(
                            radius * phi.sin() * theta.cos(),
                            radius * phi.cos(),
                            radius * phi.sin() * theta.sin(),
                        ));
                    }
                }
            }
        }

        local
            .into_iter()
            .map(|p| p.rotate_euler(self.rotation).add(self.position))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Vec3,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlantModel {
    pub primitives: Vec<Primitive>,
    pub label: Label,
}

const STEM_GREEN: Rgb = Rgb(0x2d, 0x50, 0x16);
const LEAF_DARK: Rgb = Rgb(0x4a, 0x7c, 0x23);
const LEAF_MID: Rgb = Rgb(0x5a, 0x8b, 0x2a);
const LEAF_LIGHT: Rgb = Rgb(0x6a, 0xa8, 0x32);
const TURMERIC_ORANGE: Rgb = Rgb(0xff, 0x6b, 0x35);
const TULSI_PURPLE: Rgb = Rgb(0x9b, 0x4d, 0xca);

const NO_ROTATION: Vec3 = Vec3::new(0.0, 0.0, 0.0);

impl PlantModel {
    pub fn for_plant(plant: &PlantRecord) -> Self {
        let mut primitives = vec![
            Primitive::new(
                Part::Stem,
                Shape::Cylinder {
                    radius_top: 0.05,
                    radius_bottom: 0.1,
                    height: 2.0,
                },
                Vec3::new(0.0, -1.0, 0.0),
                NO_ROTATION,
                STEM_GREEN,
            ),
            Primitive::new(
                Part::Leaf,
                Shape::Plane {
                    width: 0.8,
                    height: 1.2,
                },
                Vec3::new(0.3, 0.5, 0.0),
                Vec3::new(0.0, 0.0, PI / 6.0),
                LEAF_DARK,
            ),
            Primitive::new(
                Part::Leaf,
                Shape::Plane {
                    width: 0.6,
                    height: 1.0,
                },
                Vec3::new(-0.3, 0.8, 0.0),
                Vec3::new(0.0, 0.0, -PI / 6.0),
                LEAF_MID,
            ),
            Primitive::new(
                Part::Leaf,
                Shape::Plane {
                    width: 0.7,
                    height: 0.9,
                },
                Vec3::new(0.2, 1.2, -0.3),
                Vec3::new(PI / 6.0, PI / 4.0, 0.0),
                LEAF_LIGHT,
            ),
        ];

        if mentions(plant, &["turmeric", "curcuma"]) {
            primitives.push(accent(Vec3::new(0.0, 1.5, 0.0), 0.2, TURMERIC_ORANGE));
        }
        if mentions(plant, &["tulsi", "ocimum"]) {
            primitives.push(accent(Vec3::new(0.1, 1.3, 0.1), 0.05, TULSI_PURPLE));
            primitives.push(accent(Vec3::new(-0.1, 1.4, -0.1), 0.05, TULSI_PURPLE));
        }

        Self {
            primitives,
            label: Label {
                text: plant.name.clone(),
                position: Vec3::new(0.0, 2.0, 0.0),
                color: LEAF_DARK,
            },
        }
    }

    pub fn accents(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| p.part == Part::Accent)
    }
}

fn accent(position: Vec3, radius: f32, color: Rgb) -> Primitive {
    Primitive::new(Part::Accent, Shape::Sphere { radius }, position, NO_ROTATION, color)
}

fn mentions(plant: &PlantRecord, needles: &[&str]) -> bool {
    let name = plant.name.to_lowercase();
    let botanical = plant.botanical_name.to_lowercase();
    needles
        .iter()
        .any(|needle| name.contains(needle) || botanical.contains(needle))
}

/// Orbit camera around the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pub yaw_degrees: f32,
}

impl Camera {
    pub fn new(yaw_degrees: f32) -> Self {
        Self { yaw_degrees }
    }

    pub fn reset(&mut self) {
        self.yaw_degrees = 0.0;
    }

    pub fn orbit(&mut self, delta_degrees: f32) {
        self.yaw_degrees = (self.yaw_degrees + delta_degrees).rem_euclid(360.0);
    }

    /// Rotates `point` into view space. `x`/`y` are screen axes, `z` is depth
    /// (larger is closer to the viewer).
    pub fn project(&self, point: Vec3) -> Vec3 {
        point.rotate_y(-self.yaw_degrees.to_radians())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herbarium_common::models::AyushSystem;

    fn named(name: &str, botanical: &str) -> PlantRecord {
        PlantRecord {
            id: "x".into(),
            name: name.into(),
            botanical_name: botanical.into(),
            image: String::new(),
            uses: vec!["Calming".into()],
            system: AyushSystem::Ayurveda,
            region: String::new(),
            description: String::new(),
            cultivation_method: String::new(),
        }
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_base_model_has_stem_and_three_leaves() {
        let model = PlantModel::for_plant(&named("Neem", "Azadirachta indica"));
        assert_eq!(model.primitives.len(), 4);
        assert_eq!(model.primitives[0].part, Part::Stem);
        assert_eq!(
            model.primitives.iter().filter(|p| p.part == Part::Leaf).count(),
            3
        );
        assert_eq!(model.accents().count(), 0);
        assert_eq!(model.label.text, "Neem");
    }

    #[test]
    fn test_turmeric_gets_orange_sphere() {
        let model = PlantModel::for_plant(&named("Turmeric (Haldi)", "Curcuma longa"));
        let accents: Vec<_> = model.accents().collect();
        assert_eq!(accents.len(), 1);
        assert_eq!(accents[0].color, TURMERIC_ORANGE);
    }

    #[test]
    fn test_accent_keyed_off_botanical_name() {
        let model = PlantModel::for_plant(&named("Holy Basil", "Ocimum sanctum"));
        assert_eq!(model.accents().count(), 2);
        assert!(model.accents().all(|p| p.color == TULSI_PURPLE));
    }

    #[test]
    fn test_surface_points_are_translated() {
        let model = PlantModel::for_plant(&named("Neem", ""));
        let stem = model.primitives[0].surface_points(6);
        assert_eq!(stem.len(), 36);
        let lowest = stem.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let highest = stem.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
        assert!(close(lowest, -2.0));
        assert!(close(highest, 0.0));
    }

    #[test]
    fn test_sphere_points_within_radius() {
        let sphere = accent(Vec3::new(1.0, 1.0, 1.0), 0.5, TULSI_PURPLE);
        for p in sphere.surface_points(5) {
            let d = ((p.x - 1.0).powi(2) + (p.y - 1.0).powi(2) + (p.z - 1.0).powi(2)).sqrt();
            assert!(close(d, 0.5));
        }
    }

    #[test]
    fn test_camera_orbit_wraps_and_resets() {
        let mut camera = Camera::default();
        camera.orbit(300.0);
        camera.orbit(90.0);
        assert!(close(camera.yaw_degrees, 30.0));
        camera.reset();
        assert_eq!(camera, Camera::default());
    }

    #[test]
    fn test_camera_project_quarter_turn() {
        let camera = Camera::new(90.0);
        let p = camera.project(Vec3::new(1.0, 0.5, 0.0));
        assert!(close(p.x, 0.0));
        assert!(close(p.y, 0.5));
        assert!(close(p.z.abs(), 1.0));
    }
}
