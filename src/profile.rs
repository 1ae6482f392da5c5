//! Size tiers, shape styles, and their rendering profiles.

/// Named size tier for a rendered QR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    Small,
    Medium,
    Large,
}

/// Rendering configuration for one size tier.
///
/// One profile per tier, statically defined. `min_version` is the
/// smallest QR symbol version the encoder starts from (it grows as
/// needed to fit the payload), `box_size` is the rendered pixel width
/// of one module, `border` the quiet-zone width in modules, and
/// `logo_width` the pixel width the overlaid logo is scaled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeProfile {
    pub min_version: i16,
    pub box_size: u32,
    pub border: u32,
    pub logo_width: u32,
}

const SMALL: SizeProfile = SizeProfile { min_version: 1, box_size: 8, border: 3, logo_width: 40 };
const MEDIUM: SizeProfile = SizeProfile { min_version: 1, box_size: 10, border: 4, logo_width: 60 };
const LARGE: SizeProfile = SizeProfile { min_version: 1, box_size: 12, border: 5, logo_width: 80 };

impl SizeTier {
    /// Resolves a tier name. Anything other than the exact names
    /// `"small"`, `"medium"`, `"large"` resolves to `Medium`; this is
    /// the defined default, not an error.
    pub fn resolve(spec: &str) -> SizeTier {
        match spec {
            "small" => SizeTier::Small,
            "medium" => SizeTier::Medium,
            "large" => SizeTier::Large,
            _ => SizeTier::Medium,
        }
    }

    /// Returns the rendering profile for this tier.
    pub fn profile(self) -> SizeProfile {
        match self {
            SizeTier::Small => SMALL,
            SizeTier::Medium => MEDIUM,
            SizeTier::Large => LARGE,
        }
    }
}

/// Outer shape applied to the composed image.
///
/// `Rounded` and `Circle` both produce the same fully circular result;
/// no distinct rounded-rectangle geometry exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeStyle {
    Square,
    Rounded,
    Circle,
}

impl ShapeStyle {
    /// Resolves a style name, defaulting unknown names to `Square`.
    pub fn resolve(spec: &str) -> ShapeStyle {
        match spec {
            "rounded" => ShapeStyle::Rounded,
            "circle" => ShapeStyle::Circle,
            _ => ShapeStyle::Square,
        }
    }
}
