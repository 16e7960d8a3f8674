//! Per-platform density/scale factor tables.
//!
//! The enumerations and factors are fixed by each platform's design-resource
//! convention. Iteration order is smallest factor to largest.

/// Android density buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AndroidDensity {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl AndroidDensity {
    pub const fn values() -> [AndroidDensity; 5] {
        [
            AndroidDensity::Mdpi,
            AndroidDensity::Hdpi,
            AndroidDensity::Xhdpi,
            AndroidDensity::Xxhdpi,
            AndroidDensity::Xxxhdpi,
        ]
    }

    pub fn factor(self) -> f32 {
        match self {
            AndroidDensity::Mdpi => 1.0,
            AndroidDensity::Hdpi => 1.5,
            AndroidDensity::Xhdpi => 2.0,
            AndroidDensity::Xxhdpi => 3.0,
            AndroidDensity::Xxxhdpi => 4.0,
        }
    }

    pub fn identifier(self) -> &'static str {
        match self {
            AndroidDensity::Mdpi => "mdpi",
            AndroidDensity::Hdpi => "hdpi",
            AndroidDensity::Xhdpi => "xhdpi",
            AndroidDensity::Xxhdpi => "xxhdpi",
            AndroidDensity::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Density-bucket directory for plain drawables, e.g. `drawable-mdpi`.
    pub fn drawable_dir(self) -> String {
        format!("drawable-{}", self.identifier())
    }

    /// Density-bucket directory for launcher icons, e.g. `mipmap-mdpi`.
    pub fn mipmap_dir(self) -> String {
        format!("mipmap-{}", self.identifier())
    }
}

/// iOS scale variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IosScale {
    One,
    Two,
    Three,
}

impl IosScale {
    pub const fn values() -> [IosScale; 3] {
        [IosScale::One, IosScale::Two, IosScale::Three]
    }

    pub fn factor(self) -> f32 {
        self.multiplier() as f32
    }

    pub fn multiplier(self) -> u32 {
        match self {
            IosScale::One => 1,
            IosScale::Two => 2,
            IosScale::Three => 3,
        }
    }

    /// Filename suffix, e.g. `@2x`.
    pub fn suffix(self) -> &'static str {
        match self {
            IosScale::One => "@1x",
            IosScale::Two => "@2x",
            IosScale::Three => "@3x",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn android_factors_match_platform_convention() {
        let factors: Vec<f32> = AndroidDensity::values()
            .iter()
            .map(|d| d.factor())
            .collect();
        assert_eq!(factors, vec![1.0, 1.5, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn android_directories() {
        assert_eq!(AndroidDensity::Mdpi.drawable_dir(), "drawable-mdpi");
        assert_eq!(AndroidDensity::Xxxhdpi.mipmap_dir(), "mipmap-xxxhdpi");
    }

    #[test]
    fn ios_factors_and_suffixes() {
        let scales = IosScale::values();
        assert_eq!(scales[0].factor(), 1.0);
        assert_eq!(scales[1].factor(), 2.0);
        assert_eq!(scales[2].factor(), 3.0);
        assert_eq!(scales[1].suffix(), "@2x");
    }

    #[test]
    fn iteration_order_is_smallest_factor_first() {
        let mut last = 0.0;
        for density in AndroidDensity::values() {
            assert!(density.factor() > last);
            last = density.factor();
        }
    }
}
