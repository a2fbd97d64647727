//! Surface materials.

use lumen_math::Color;

/// Shading parameters of a surface point.
///
/// `reflective + refractive_index` is expected to stay within 1; the
/// renderer does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base surface color
    pub color: Color,

    /// Phong exponent, `None` disables the specular highlight
    pub specular: Option<i32>,

    /// Weight of the specular highlight
    pub specular_index: f32,

    /// Mirror fraction in [0, 1]
    pub reflective: f32,

    /// Transmitted fraction in [0, 1]. Also the share of light an occluder
    /// lets through to the surfaces it shadows.
    pub refractive_index: f32,

    /// Index of refraction used for Snell's law
    pub refractive: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            specular: None,
            specular_index: 0.0,
            reflective: 0.0,
            refractive_index: 0.0,
            refractive: 1.0,
        }
    }
}

impl Material {
    /// Create a material from all of its parameters.
    pub fn new(
        color: Color,
        specular: Option<i32>,
        specular_index: f32,
        reflective: f32,
        refractive_index: f32,
        refractive: f32,
    ) -> Self {
        Self {
            color,
            specular,
            specular_index,
            reflective,
            refractive_index,
            refractive,
        }
    }

    /// A purely diffuse material of the given color.
    pub fn matte(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Split the energy of a hit between local shading, reflection and
    /// refraction. Refraction is served first; reflection takes what is left
    /// up to `reflective`.
    pub fn energy_split(&self) -> EnergySplit {
        let refractive = self.refractive_index;
        let reflective = (1.0 - refractive).min(self.reflective);
        EnergySplit {
            local: 1.0 - refractive - reflective,
            reflective,
            refractive,
        }
    }
}

/// Weights of the three contributions to a traced color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergySplit {
    pub local: f32,
    pub reflective: f32,
    pub refractive: f32,
}

impl EnergySplit {
    /// Sum of all weights.
    pub fn total(&self) -> f32 {
        self.local + self.reflective + self.refractive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_split_sums_to_one() {
        let materials = [
            Material::new(Color::new(200, 200, 200), Some(200), 0.8, 0.2, 0.8, 3.0),
            Material::new(Color::new(100, 100, 100), Some(800), 2.0, 0.8, 0.0, 1.0),
            Material::new(Color::new(240, 40, 10), Some(600), 0.6, 0.05, 0.75, 1.05),
            Material::matte(Color::new(170, 125, 80)),
        ];

        for material in materials {
            let split = material.energy_split();
            assert!(
                (split.total() - 1.0).abs() < 1e-6,
                "split {:?} sums to {}",
                split,
                split.total()
            );
        }
    }

    #[test]
    fn test_energy_split_refraction_first() {
        // Reflection is capped by what refraction leaves over.
        let split = Material::new(Color::WHITE, None, 0.0, 0.9, 0.6, 1.5).energy_split();
        assert_eq!(split.refractive, 0.6);
        assert!((split.reflective - 0.4).abs() < 1e-6);
        assert!(split.local.abs() < 1e-6);
    }

    #[test]
    fn test_default_is_opaque_matte() {
        let split = Material::default().energy_split();
        assert_eq!(split.local, 1.0);
        assert_eq!(split.reflective, 0.0);
        assert_eq!(split.refractive, 0.0);
        assert!(Material::default().specular.is_none());
    }
}
