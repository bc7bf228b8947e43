//! Age-driven typography and spacing.
//!
//! Age falls into one of three disjoint buckets:
//!
//! | age        | base size               | spacing | contrast baseline |
//! |------------|-------------------------|---------|-------------------|
//! | < 25       | 14                      | 0.875   | Normal            |
//! | 25 ..= 50  | 16                      | 1.0     | Normal            |
//! | > 50       | 18 + (age - 50) / 10    | 1.25    | High              |
//!
//! The base size is then capped at [`MAX_FONT_SIZE`]. Dyslexia accommodation
//! raises it to at least [`DYSLEXIA_MIN_FONT_SIZE`] after the cap and never
//! lowers a larger size.

use crate::contrast::ContrastLevel;

/// Upper bound for the age-derived base font size, in px.
pub const MAX_FONT_SIZE: f64 = 24.0;

/// Minimum base font size while dyslexia accommodation is active, in px.
pub const DYSLEXIA_MIN_FONT_SIZE: f64 = 18.0;

/// Font stack that replaces the theme font while dyslexia mode is active.
pub const DYSLEXIA_FONT_FAMILY: &str = "'OpenDyslexic', 'Comic Sans MS', sans-serif";

/// Resolved typography for one input set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    /// Base font size in px. Unrounded.
    pub font_size_base: f64,
    /// Spacing unit in rem.
    pub spacing_unit: f64,
    /// Contrast classification implied by age alone.
    pub baseline: ContrastLevel,
    /// Whether dyslexia-friendly rendering is active.
    pub dyslexic: bool,
}

impl Typography {
    /// Applies the age buckets, the size cap and the dyslexia floor.
    pub fn for_age(age: i64, dyslexic: bool) -> Self {
        let (size, spacing_unit, baseline) = if age < 25 {
            (14.0, 0.875, ContrastLevel::Normal)
        } else if age > 50 {
            // age > 50, so the subtraction cannot overflow.
            let over = (age - 50) as f64;
            (18.0 + over / 10.0, 1.25, ContrastLevel::High)
        } else {
            (16.0, 1.0, ContrastLevel::Normal)
        };

        let mut font_size_base = size.min(MAX_FONT_SIZE);
        if dyslexic {
            font_size_base = font_size_base.max(DYSLEXIA_MIN_FONT_SIZE);
        }

        Self {
            font_size_base,
            spacing_unit,
            baseline,
            dyslexic,
        }
    }
}
