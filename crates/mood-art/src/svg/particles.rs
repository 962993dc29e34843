//! Floating particle layer

use crate::seed::GenerationSeed;

pub const PARTICLE_COUNT: usize = 12;

const Y_OFFSET: f64 = 100.0;
const SIZE_OFFSET: f64 = 200.0;
const DURATION_OFFSET: f64 = 300.0;

/// Placement and timing of one particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub duration: f64,
}

impl Particle {
    fn derive(seed: GenerationSeed, index: usize) -> Self {
        let i = index as f64;
        Self {
            x: 50.0 + seed.sample(i) * 300.0,
            y: 50.0 + seed.sample(i + Y_OFFSET) * 300.0,
            radius: 1.0 + seed.sample(i + SIZE_OFFSET) * 3.0,
            duration: 2.0 + seed.sample(i + DURATION_OFFSET) * 4.0,
        }
    }

    /// One `<circle>` drifting up 50px and back
    fn render(&self, color: &str) -> String {
        format!(
            r#"
      <circle cx="{x}" cy="{y}" r="{r}" fill="{color}" opacity="0.4">
        <animate attributeName="cy" values="{y};{rise};{y}" dur="{d}s" repeatCount="indefinite"/>
        <animate attributeName="opacity" values="0.4;0.8;0.4" dur="{d}s" repeatCount="indefinite"/>
      </circle>
    "#,
            x = self.x,
            y = self.y,
            r = self.radius,
            rise = self.y - 50.0,
            d = self.duration,
        )
    }
}

pub fn particles(seed: GenerationSeed) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|i| Particle::derive(seed, i))
        .collect()
}

/// All particles as one `<g>` group
pub fn particle_fragment(seed: GenerationSeed, color: &str) -> String {
    let body: String = particles(seed)
        .iter()
        .map(|p| p.render(color))
        .collect();

    format!("<g>{body}</g>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_count_and_bounds() {
        let list = particles(GenerationSeed::from_raw(56_666_668.0));
        assert_eq!(list.len(), PARTICLE_COUNT);

        for p in list {
            assert!((50.0..350.0).contains(&p.x));
            assert!((50.0..350.0).contains(&p.y));
            assert!((1.0..4.0).contains(&p.radius));
            assert!((2.0..6.0).contains(&p.duration));
        }
    }

    #[test]
    fn test_first_particle_uses_seed_directly() {
        // seed 0: x from prf(0), y from prf(100)
        let first = particles(GenerationSeed::from_raw(0.0))[0];
        assert_eq!(first.x, 50.0 + crate::seed::prf(0.0) * 300.0);
        assert_eq!(first.y, 50.0 + crate::seed::prf(100.0) * 300.0);
    }

    #[test]
    fn test_fragment_is_circles_in_order() {
        let seed = GenerationSeed::from_raw(3.0);
        let circles: Vec<String> = particles(seed).iter().map(|p| p.render("#ff4444")).collect();

        assert_eq!(particle_fragment(seed, "#ff4444"), format!("<g>{}</g>", circles.concat()));
        for circle in &circles {
            assert!(circle.starts_with("\n      <circle cx=\""));
            assert!(circle.ends_with("</circle>\n    "));
        }
    }

    #[test]
    fn test_fragment_shape() {
        let fragment = particle_fragment(GenerationSeed::from_raw(3.0), "#ff4444");
        assert!(fragment.starts_with("<g>"));
        assert!(fragment.ends_with("</g>"));
        assert_eq!(fragment.matches("<circle").count(), PARTICLE_COUNT);
        assert_eq!(fragment.matches("</circle>").count(), PARTICLE_COUNT);
    }
}
