//! Property-based tests for token resolution using proptest.

use attune_tokens::catalog;
use attune_tokens::environment::DARK_PALETTE;
use attune_tokens::{
    resolve_tokens, ColorMode, ContrastLevel, Inputs, Profile, RawInputs, Resolver,
    ResolverConfig, Rgb, Stage, Taste,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn taste_strategy() -> impl Strategy<Value = Taste> {
    prop_oneof![
        Just(Taste::Minimal),
        Just(Taste::Bold),
        Just(Taste::Playful),
        Just(Taste::Corporate),
    ]
}

fn inputs_strategy() -> impl Strategy<Value = Inputs> {
    (
        prop::option::of(any::<i64>()),
        taste_strategy(),
        prop::option::of(any::<bool>()),
        prop::option::of(-50i64..150),
        prop::option::of(-100i64..5000),
    )
        .prop_map(|(age, taste, dyslexic, battery_percent, ambient_lux)| Inputs {
            age,
            taste,
            dyslexic,
            battery_percent,
            ambient_lux,
        })
}

// ============================================================================
// Typography
// ============================================================================

proptest! {
    #[test]
    fn young_ages_are_compact(age in 0i64..=24, taste in taste_strategy()) {
        let tokens = resolve_tokens(&Inputs::new(age, taste));
        prop_assert_eq!(tokens.font_size_base, 14.0);
        prop_assert_eq!(tokens.spacing_unit, 0.875);
    }

    #[test]
    fn middle_ages_are_standard(age in 25i64..=50, taste in taste_strategy()) {
        let tokens = resolve_tokens(&Inputs::new(age, taste));
        prop_assert_eq!(tokens.font_size_base, 16.0);
        prop_assert_eq!(tokens.spacing_unit, 1.0);
        prop_assert_eq!(tokens.contrast, ContrastLevel::Normal);
    }

    #[test]
    fn older_ages_grow_and_cap(age in 51i64..=100_000, taste in taste_strategy()) {
        let tokens = resolve_tokens(&Inputs::new(age, taste));
        let expected = (18.0 + (age - 50) as f64 / 10.0).min(24.0);
        prop_assert_eq!(tokens.font_size_base, expected);
        prop_assert_eq!(tokens.spacing_unit, 1.25);
        prop_assert_eq!(tokens.contrast, ContrastLevel::High);
    }

    #[test]
    fn dyslexia_floor_holds_for_any_age(age in any::<i64>(), taste in taste_strategy()) {
        let with = resolve_tokens(&Inputs::new(age, taste).with_dyslexic(true));
        let without = resolve_tokens(&Inputs::new(age, taste).with_dyslexic(false));
        prop_assert!(with.font_size_base >= 18.0);
        prop_assert!(with.font_size_base >= without.font_size_base);
        prop_assert!(with.font_size_base <= 24.0);
    }
}

// ============================================================================
// Theme catalog
// ============================================================================

proptest! {
    #[test]
    fn unknown_taste_strings_are_corporate(name in "[A-Za-z ]{0,12}") {
        prop_assume!(!["minimal", "bold", "playful"].contains(&name.as_str()));
        prop_assert!(std::ptr::eq(catalog::preset_named(&name), &catalog::CORPORATE));
    }
}

// ============================================================================
// Environment and contrast
// ============================================================================

proptest! {
    #[test]
    fn dark_iff_dim_or_low_battery(inputs in inputs_strategy()) {
        let tokens = resolve_tokens(&inputs);
        let expected_dark = inputs.ambient_lux.is_some_and(|l| l < 300)
            || inputs.battery_percent.is_some_and(|b| b < 20);
        prop_assert_eq!(tokens.color_mode == ColorMode::Dark, expected_dark);

        if expected_dark {
            prop_assert_eq!(tokens.background, DARK_PALETTE.background);
            prop_assert_eq!(tokens.surface, DARK_PALETTE.surface);
            prop_assert_eq!(tokens.shadow, DARK_PALETTE.shadow);
        }
    }

    #[test]
    fn high_contrast_iff_aged_or_bright(inputs in inputs_strategy()) {
        let tokens = resolve_tokens(&inputs);
        let age = inputs.age.unwrap_or(30);
        let expected_high = age > 50 || inputs.ambient_lux.is_some_and(|l| l > 800);
        prop_assert_eq!(tokens.contrast.is_high(), expected_high);

        if expected_high {
            let ink = if tokens.color_mode == ColorMode::Dark { Rgb::WHITE } else { Rgb::BLACK };
            prop_assert_eq!(tokens.text, ink);
            prop_assert_eq!(tokens.border, ink);
        }
    }

    #[test]
    fn accents_always_follow_taste(inputs in inputs_strategy()) {
        let tokens = resolve_tokens(&inputs);
        let theme = catalog::preset(inputs.taste);
        prop_assert_eq!(tokens.primary, theme.primary);
        prop_assert_eq!(tokens.secondary, theme.secondary);
        prop_assert_eq!(tokens.border_radius, theme.border_radius);
        prop_assert_eq!(tokens.border_width, theme.border_width);
        prop_assert_eq!(tokens.theme_font_family, theme.font_family);
    }
}

// ============================================================================
// Purity
// ============================================================================

proptest! {
    #[test]
    fn resolution_is_deterministic(inputs in inputs_strategy()) {
        prop_assert_eq!(resolve_tokens(&inputs), resolve_tokens(&inputs));
    }

    #[test]
    fn trace_ends_at_resolve(inputs in inputs_strategy()) {
        let resolver = Resolver::default();
        let trace = resolver.trace(&inputs);
        prop_assert_eq!(trace.len(), Stage::ORDER.len());
        prop_assert_eq!(&trace[trace.len() - 1].tokens, &resolver.resolve(&inputs));
    }

    #[test]
    fn simple_profile_never_goes_dark(inputs in inputs_strategy()) {
        let simple = Resolver::new(ResolverConfig::for_profile(Profile::Simple));
        let tokens = simple.resolve(&inputs);
        prop_assert_eq!(tokens.color_mode, ColorMode::Light);
        prop_assert!(!tokens.modes.power_saving);
        prop_assert!(!tokens.modes.dyslexic);
    }

    #[test]
    fn normalize_never_panics(
        age in ".{0,8}",
        taste in ".{0,8}",
        dyslexic in ".{0,8}",
        battery in ".{0,8}",
        lux in ".{0,8}",
    ) {
        let raw = RawInputs {
            age: Some(age),
            taste: Some(taste),
            dyslexic: Some(dyslexic),
            battery: Some(battery),
            lux: Some(lux),
        };
        let tokens = resolve_tokens(&raw.normalize());
        prop_assert!(tokens.font_size_base.is_finite());
    }
}
