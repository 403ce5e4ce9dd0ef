//! The simulated snow field.
//!
//! A [`SnowField`] owns the flakes and moves them. Each flake keeps only its
//! position plus a handful of normalized random seeds; size, opacity, speed
//! and heading are derived from the current [`FieldSettings`] every frame.
//! That way a new configuration takes effect immediately without respawning
//! the flakes already on screen.
//!
//! # Motion
//!
//! Steps are measured in frames at 60 FPS (`factor = dt * 60`), the unit the
//! `speed` options are expressed in.
//!
//! | Behavior | Per frame |
//! |----------|-----------|
//! | Drift | `heading * speed * factor` |
//! | Wobble | `speed / 10 * distance * factor / 16.67 * (cos a, abs(sin a))`, `a += speed / 360 * factor` |
//! | Out mode | fully outside an edge → re-enter past the opposite edge |

use crate::color::Rgba;
use crate::error::EngineError;
use crate::options::{
    DensityOptions, DepthOptions, EngineConfig, MoveOptions, OutMode, ValueRange, WobbleOptions,
};
use crate::spawn::SpawnContext;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_4, TAU};

/// Hard ceiling on live flakes regardless of density scaling.
pub const MAX_PARTICLES: usize = 20_000;

/// Largest step accepted; longer gaps (window dragged, app suspended) are
/// treated as this long.
pub const MAX_STEP_SECS: f32 = 0.1;

/// Widest deviation from `direction` when movement is not straight.
const HEADING_SPREAD: f32 = FRAC_PI_4;

/// Milliseconds per frame at 60 FPS.
const FRAME_MS: f32 = 1000.0 / 60.0;

/// Options the field needs, with colors already parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSettings {
    pub count: u32,
    pub density: DensityOptions,
    pub color: Rgba,
    pub opacity: ValueRange,
    pub size: ValueRange,
    pub movement: MoveOptions,
    pub wobble: WobbleOptions,
    pub depth: Option<DepthOptions>,
}

impl FieldSettings {
    /// Extract field settings from an already preset-resolved config.
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        let p = &config.particles;
        let color = Rgba::parse(&p.color.value).map_err(|source| EngineError::InvalidColor {
            field: "particles.color",
            source,
        })?;
        Ok(Self {
            count: p.number.value,
            density: p.number.density,
            color,
            opacity: p.opacity.value,
            size: p.size.value,
            movement: p.movement,
            wobble: p.wobble,
            depth: p.z_index,
        })
    }

    /// Live flake count for a `width` x `height` surface.
    pub fn target_count(&self, width: f32, height: f32) -> usize {
        if self.count == 0 {
            return 0;
        }
        let count = if self.density.enable && self.density.area > 0 {
            let factor = (width * height) / (self.density.area as f32 * 1000.0);
            ((self.count as f32 * factor).round() as usize).max(1)
        } else {
            self.count as usize
        };
        count.min(MAX_PARTICLES)
    }
}

#[derive(Clone, Debug)]
struct Flake {
    position: Vec2,
    size_seed: f32,
    opacity_seed: f32,
    speed_seed: f32,
    depth_seed: f32,
    /// Own heading, used when the direction is `none`.
    heading: f32,
    /// Deviation from the shared heading in `-1..1`.
    spread: f32,
    wobble_angle: f32,
}

impl Flake {
    fn spawn(ctx: &mut SpawnContext, position: Vec2) -> Self {
        Self {
            position,
            size_seed: ctx.random(),
            opacity_seed: ctx.random(),
            speed_seed: ctx.random(),
            depth_seed: ctx.random(),
            heading: ctx.random_angle(),
            spread: ctx.random_range(-1.0, 1.0),
            wobble_angle: ctx.random_angle(),
        }
    }

    fn depth(&self, depth: &DepthOptions) -> f32 {
        depth.min + (depth.max - depth.min) * self.depth_seed
    }

    fn depth_factor(&self, settings: &FieldSettings, rate: impl Fn(&DepthOptions) -> f32) -> f32 {
        settings
            .depth
            .as_ref()
            .map(|d| DepthOptions::factor(self.depth(d), rate(d)))
            .unwrap_or(1.0)
    }

    fn radius(&self, settings: &FieldSettings) -> f32 {
        let base = settings.size.lerp(self.size_seed).max(0.0);
        base * self.depth_factor(settings, |d| d.size_rate)
    }

    fn alpha(&self, settings: &FieldSettings) -> f32 {
        let base = settings.opacity.lerp(self.opacity_seed).clamp(0.0, 1.0);
        base * self.depth_factor(settings, |d| d.opacity_rate)
    }

    fn velocity(&self, settings: &FieldSettings) -> Vec2 {
        let m = &settings.movement;
        if !m.enable {
            return Vec2::ZERO;
        }
        let mut angle = m.direction.angle().unwrap_or(self.heading);
        if !m.straight {
            angle += self.spread * HEADING_SPREAD;
        }
        let mut speed = m.speed;
        if m.random {
            speed *= 0.5 + 0.5 * self.speed_seed;
        }
        speed *= self.depth_factor(settings, |d| d.velocity_rate);
        Vec2::from_angle(angle) * speed
    }
}

/// A flake as it should be drawn this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedFlake {
    pub position: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

pub struct SnowField {
    settings: FieldSettings,
    flakes: Vec<Flake>,
    width: f32,
    height: f32,
    ctx: SpawnContext,
}

impl SnowField {
    pub fn new(settings: FieldSettings, width: f32, height: f32, ctx: SpawnContext) -> Self {
        let mut field = Self {
            settings,
            flakes: Vec::new(),
            width: width.max(0.0),
            height: height.max(0.0),
            ctx,
        };
        field.sync_population();
        field
    }

    pub fn len(&self) -> usize {
        self.flakes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flakes.is_empty()
    }

    /// Swap in new settings; existing flakes keep their positions and seeds.
    pub fn configure(&mut self, settings: FieldSettings) {
        self.settings = settings;
        self.sync_population();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        let (width, height) = (width.max(0.0), height.max(0.0));
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.sync_population();
    }

    fn sync_population(&mut self) {
        let target = self.settings.target_count(self.width, self.height);
        let current = self.flakes.len();
        if target > current {
            for _ in current..target {
                let position = self.ctx.random_point_in(self.width, self.height);
                self.flakes.push(Flake::spawn(&mut self.ctx, position));
            }
        } else {
            self.flakes.truncate(target);
        }
        if target != current {
            log::debug!("Snow field population {} -> {}", current, target);
        }
    }

    /// Advance the field by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        let factor = dt.clamp(0.0, MAX_STEP_SECS) * 60.0;
        if factor == 0.0 {
            return;
        }

        let settings = &self.settings;
        let wobble = settings.wobble;
        let angle_speed = wobble.speed / 360.0 * factor;
        let wobble_step = (wobble.speed / 10.0) * factor * wobble.distance / FRAME_MS;
        let (width, height) = (self.width, self.height);

        for flake in &mut self.flakes {
            flake.position += flake.velocity(settings) * factor;

            if wobble.enable && wobble.distance > 0.0 {
                flake.wobble_angle = (flake.wobble_angle + angle_speed) % TAU;
                flake.position += Vec2::new(
                    wobble_step * flake.wobble_angle.cos(),
                    wobble_step * flake.wobble_angle.sin().abs(),
                );
            }

            match settings.movement.out_modes {
                OutMode::Out => {
                    let r = flake.radius(settings);
                    wrap_out(flake, r, width, height, &mut self.ctx);
                }
            }
        }
    }

    /// Flakes to draw this frame.
    pub fn flakes(&self) -> impl Iterator<Item = RenderedFlake> + '_ {
        self.flakes.iter().map(move |f| RenderedFlake {
            position: f.position,
            radius: f.radius(&self.settings),
            color: self.settings.color.with_alpha(f.alpha(&self.settings)),
        })
    }
}

/// Re-enter a flake that is fully past an edge from the opposite edge.
fn wrap_out(flake: &mut Flake, radius: f32, width: f32, height: f32, ctx: &mut SpawnContext) {
    let p = &mut flake.position;
    if p.y - radius > height {
        *p = Vec2::new(ctx.random_range(0.0, width), -radius);
    } else if p.y + radius < 0.0 {
        *p = Vec2::new(ctx.random_range(0.0, width), height + radius);
    } else if p.x - radius > width {
        *p = Vec2::new(-radius, ctx.random_range(0.0, height));
    } else if p.x + radius < 0.0 {
        *p = Vec2::new(width + radius, ctx.random_range(0.0, height));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::MoveDirection;
    use std::f32::consts::FRAC_PI_2;

    fn settings() -> FieldSettings {
        FieldSettings {
            count: 50,
            density: DensityOptions {
                enable: false,
                area: 800,
            },
            color: Rgba::WHITE,
            opacity: ValueRange::new(0.3, 0.8),
            size: ValueRange::new(1.0, 10.0),
            movement: MoveOptions {
                enable: true,
                speed: 3.0,
                direction: MoveDirection::Bottom,
                random: false,
                straight: true,
                out_modes: OutMode::Out,
            },
            wobble: WobbleOptions {
                enable: false,
                distance: 0.0,
                speed: 0.0,
            },
            depth: None,
        }
    }

    fn field(settings: FieldSettings) -> SnowField {
        SnowField::new(settings, 800.0, 600.0, SpawnContext::from_seed(11))
    }

    #[test]
    fn test_density_scales_with_area() {
        let mut s = settings();
        s.density = DensityOptions {
            enable: true,
            area: 800,
        };
        // 1600 * 1000 / (800 * 1000) = 2x
        assert_eq!(s.target_count(1600.0, 1000.0), 100);
        // Tiny surface still shows one flake.
        assert_eq!(s.target_count(1.0, 1.0), 1);
        s.count = 0;
        assert_eq!(s.target_count(1600.0, 1000.0), 0);
    }

    #[test]
    fn test_population_follows_configuration() {
        let mut f = field(settings());
        assert_eq!(f.len(), 50);

        let mut s = settings();
        s.count = 20;
        f.configure(s.clone());
        assert_eq!(f.len(), 20);

        s.count = 200;
        f.configure(s);
        assert_eq!(f.len(), 200);
    }

    #[test]
    fn test_straight_bottom_moves_down_only() {
        let mut f = field(settings());
        let before: Vec<Vec2> = f.flakes().map(|r| r.position).collect();
        f.step(1.0 / 60.0);
        for (b, a) in before.iter().zip(f.flakes()) {
            if a.position.y > b.y {
                assert!((a.position.y - b.y - 3.0).abs() < 1e-3);
                assert!((a.position.x - b.x).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_disabled_movement_keeps_positions() {
        let mut s = settings();
        s.movement.enable = false;
        let mut f = field(s);
        let before: Vec<Vec2> = f.flakes().map(|r| r.position).collect();
        f.step(0.05);
        let after: Vec<Vec2> = f.flakes().map(|r| r.position).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_out_mode_reenters_from_top() {
        let mut s = settings();
        s.count = 1;
        let mut f = field(s);
        f.flakes[0].position = Vec2::new(400.0, 700.0);
        f.step(1.0 / 60.0);
        let p = f.flakes[0].position;
        assert!(p.y < 0.0);
        assert!((0.0..800.0).contains(&p.x));
    }

    #[test]
    fn test_radius_and_alpha_follow_ranges() {
        let f = field(settings());
        for flake in f.flakes() {
            assert!((1.0..=10.0).contains(&flake.radius));
            assert!((0.3..=0.8 + 1e-6).contains(&flake.color.a));
        }
    }

    #[test]
    fn test_inverted_opacity_range_is_sampled_between_bounds() {
        let mut s = settings();
        s.opacity = ValueRange::new(0.9, 0.2);
        let f = field(s);
        for flake in f.flakes() {
            assert!((0.2 - 1e-6..=0.9 + 1e-6).contains(&flake.color.a));
        }
    }

    #[test]
    fn test_depth_shrinks_far_flakes() {
        let mut s = settings();
        s.size = ValueRange::fixed(10.0);
        s.depth = Some(DepthOptions {
            min: 50.0,
            max: 50.0,
            opacity_rate: 1.0,
            size_rate: 1.0,
            velocity_rate: 1.0,
        });
        let f = field(s);
        for flake in f.flakes() {
            assert!((flake.radius - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_oversized_step_is_capped() {
        let mut s = settings();
        s.count = 1;
        let mut f = field(s);
        f.flakes[0].position = Vec2::new(400.0, 100.0);
        f.step(10.0);
        // 0.1s at 60 FPS = 6 frames * 3px
        assert!((f.flakes[0].position.y - 118.0).abs() < 1e-3);
    }

    fn lone_flake(s: FieldSettings, position: Vec2) -> SnowField {
        let mut f = field(FieldSettings { count: 1, ..s });
        let flake = &mut f.flakes[0];
        flake.position = position;
        flake.heading = 0.0;
        flake.spread = 0.0;
        flake.speed_seed = 1.0;
        flake.wobble_angle = 0.0;
        f
    }

    fn assert_close(actual: Vec2, expected: Vec2) {
        assert!(
            (actual - expected).length() < 1e-3,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_wobble_displacement_and_phase() {
        let mut s = settings();
        s.movement.enable = false;
        s.wobble = WobbleOptions {
            enable: true,
            distance: 10.0,
            speed: 10.0,
        };
        let mut f = lone_flake(s, Vec2::new(400.0, 300.0));
        f.flakes[0].wobble_angle = 1.0;
        f.step(1.0 / 60.0);

        // phase: 1 + 10/360; step: (10/10) * 10 / (1000/60) = 0.6
        let phase = 1.0 + 10.0 / 360.0;
        assert!((f.flakes[0].wobble_angle - phase).abs() < 1e-5);
        let expected = Vec2::new(400.0 + 0.6 * phase.cos(), 300.0 + 0.6 * phase.sin().abs());
        assert_close(f.flakes[0].position, expected);
    }

    #[test]
    fn test_wobble_never_pushes_upwards() {
        let mut s = settings();
        s.movement.enable = false;
        s.wobble = WobbleOptions {
            enable: true,
            distance: 20.0,
            speed: 20.0,
        };
        let mut f = lone_flake(s, Vec2::new(400.0, 300.0));
        // sin is negative here; the vertical part must still be downwards.
        f.flakes[0].wobble_angle = 4.0;
        f.step(1.0 / 60.0);
        assert!(f.flakes[0].position.y > 300.0);
    }

    #[test]
    fn test_heading_spread_when_not_straight() {
        let mut s = settings();
        s.movement.straight = false;
        let mut f = lone_flake(s.clone(), Vec2::ZERO);

        f.flakes[0].spread = 1.0;
        let v = f.flakes[0].velocity(&s);
        assert_close(v, Vec2::from_angle(FRAC_PI_2 + FRAC_PI_4) * 3.0);

        f.flakes[0].spread = -1.0;
        let v = f.flakes[0].velocity(&s);
        assert_close(v, Vec2::from_angle(FRAC_PI_4) * 3.0);

        s.movement.straight = true;
        let v = f.flakes[0].velocity(&s);
        assert_close(v, Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_random_speed_scales_by_seed() {
        let mut s = settings();
        s.movement.random = true;
        let mut f = lone_flake(s.clone(), Vec2::ZERO);

        f.flakes[0].speed_seed = 0.0;
        assert_close(f.flakes[0].velocity(&s), Vec2::new(0.0, 1.5));
        f.flakes[0].speed_seed = 0.5;
        assert_close(f.flakes[0].velocity(&s), Vec2::new(0.0, 2.25));
        f.flakes[0].speed_seed = 1.0;
        assert_close(f.flakes[0].velocity(&s), Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_direction_none_uses_own_heading() {
        let mut s = settings();
        s.movement.direction = MoveDirection::None;
        let mut f = lone_flake(s.clone(), Vec2::ZERO);

        f.flakes[0].heading = 2.0;
        assert_close(f.flakes[0].velocity(&s), Vec2::from_angle(2.0) * 3.0);
        f.flakes[0].heading = -0.5;
        assert_close(f.flakes[0].velocity(&s), Vec2::from_angle(-0.5) * 3.0);
    }

    #[test]
    fn test_out_mode_wraps_every_edge() {
        let mut s = settings();
        s.size = ValueRange::fixed(4.0);
        let mut f = lone_flake(s, Vec2::ZERO);
        let mut ctx = SpawnContext::from_seed(3);

        let flake = &mut f.flakes[0];

        // Past the top: back in below the bottom edge.
        flake.position = Vec2::new(400.0, -5.0);
        wrap_out(flake, 4.0, 800.0, 600.0, &mut ctx);
        assert_eq!(flake.position.y, 604.0);
        assert!((0.0..800.0).contains(&flake.position.x));

        // Past the left: back in beyond the right edge.
        flake.position = Vec2::new(-5.0, 300.0);
        wrap_out(flake, 4.0, 800.0, 600.0, &mut ctx);
        assert_eq!(flake.position.x, 804.0);
        assert!((0.0..600.0).contains(&flake.position.y));

        // Past the right: back in before the left edge.
        flake.position = Vec2::new(805.0, 300.0);
        wrap_out(flake, 4.0, 800.0, 600.0, &mut ctx);
        assert_eq!(flake.position.x, -4.0);
        assert!((0.0..600.0).contains(&flake.position.y));

        // Touching an edge is not past it.
        flake.position = Vec2::new(802.0, 300.0);
        wrap_out(flake, 4.0, 800.0, 600.0, &mut ctx);
        assert_eq!(flake.position, Vec2::new(802.0, 300.0));
    }
}
