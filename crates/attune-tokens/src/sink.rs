//! Token sinks: where resolved tokens go.
//!
//! The resolver never writes into a presentation context itself. A binding
//! layer owns a [`TokenSink`] and passes it to
//! [`Resolver::resolve_into`](crate::Resolver::resolve_into), or calls
//! [`TokenSink::apply`] with a token set it already has.
//!
//! Two sinks ship with the crate:
//!
//! - [`StyleMap`]: an in-memory custom-property map plus mode classes, the
//!   shape of a live style registry.
//! - [`CssVariables`]: renders a `:root { ... }` block.

use std::collections::{BTreeMap, BTreeSet};

use crate::tokens::TokenSet;

/// Receives a freshly resolved token set.
///
/// `apply` is called once per resolution with the complete set. Sinks must
/// not assume anything about the previous call.
pub trait TokenSink {
    fn apply(&mut self, tokens: &TokenSet);
}

impl<S: TokenSink + ?Sized> TokenSink for &mut S {
    fn apply(&mut self, tokens: &TokenSet) {
        (**self).apply(tokens);
    }
}

impl<S: TokenSink + ?Sized> TokenSink for Box<S> {
    fn apply(&mut self, tokens: &TokenSet) {
        (**self).apply(tokens);
    }
}

/// In-memory presentation context: custom properties and active classes.
///
/// ```rust
/// use attune_tokens::{Inputs, Resolver, StyleMap, Taste};
///
/// let mut styles = StyleMap::new();
/// Resolver::default().resolve_into(&Inputs::new(20, Taste::Corporate).with_dyslexic(true), &mut styles);
///
/// assert_eq!(styles.get("--font-size-base"), Some("18px"));
/// assert!(styles.has_class("dyslexic-mode"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    properties: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    applied: usize,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a custom property, e.g. `--bg-color`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// How many token sets have been applied.
    pub fn applied_count(&self) -> usize {
        self.applied
    }
}

impl TokenSink for StyleMap {
    fn apply(&mut self, tokens: &TokenSet) {
        for (name, value) in tokens.entries() {
            self.properties.insert(name.custom_property(), value);
        }
        self.classes = tokens.mode_classes().map(str::to_string).collect();
        self.applied += 1;
    }
}

/// Renders tokens as a CSS custom-property block.
///
/// Each `apply` replaces the previous output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssVariables {
    selector: Option<String>,
    css: String,
}

impl CssVariables {
    /// Targets `:root`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets a custom selector instead of `:root`.
    pub fn with_selector(selector: impl Into<String>) -> Self {
        Self {
            selector: Some(selector.into()),
            css: String::new(),
        }
    }

    /// The most recently rendered CSS. Empty before the first `apply`.
    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn into_css(self) -> String {
        self.css
    }

    /// Renders a token set without keeping it.
    pub fn render(&self, tokens: &TokenSet) -> String {
        let selector = self.selector.as_deref().unwrap_or(":root");
        let mut out = String::new();
        out.push_str(&format!("{} {{\n", selector));
        for (name, value) in tokens.entries() {
            out.push_str(&format!("  {}: {};\n", name.custom_property(), value));
        }
        out.push('}');
        out.push('\n');

        let classes: Vec<_> = tokens.mode_classes().collect();
        if !classes.is_empty() {
            out.push_str(&format!("/* modes: {} */\n", classes.join(" ")));
        }
        out
    }
}

impl TokenSink for CssVariables {
    fn apply(&mut self, tokens: &TokenSet) {
        self.css = self.render(tokens);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{resolve_tokens, Inputs, Resolver, Taste};

    #[test]
    fn test_style_map_sets_all_twelve_properties() {
        let mut styles = StyleMap::new();
        styles.apply(&resolve_tokens(&Inputs::new(30, Taste::Minimal)));
        assert_eq!(styles.properties().len(), 12);
        assert_eq!(styles.get("--primary-color"), Some("#171717"));
        assert_eq!(styles.get("--border-radius"), Some("4px"));
        assert_eq!(styles.get("--shadow"), Some("none"));
    }

    #[test]
    fn test_style_map_drops_inactive_classes() {
        let mut styles = StyleMap::new();
        let resolver = Resolver::default();

        resolver.resolve_into(
            &Inputs::new(30, Taste::Bold).with_battery(5).with_dyslexic(true),
            &mut styles,
        );
        assert!(styles.has_class("power-saving-mode"));
        assert!(styles.has_class("dyslexic-mode"));

        resolver.resolve_into(&Inputs::new(30, Taste::Bold).with_battery(80), &mut styles);
        assert!(!styles.has_class("power-saving-mode"));
        assert!(!styles.has_class("dyslexic-mode"));
        assert_eq!(styles.applied_count(), 2);
    }

    #[test]
    fn test_css_variables_render() {
        let mut css = CssVariables::new();
        assert_eq!(css.css(), "");

        css.apply(&resolve_tokens(&Inputs::new(30, Taste::Minimal)));
        let out = css.css();
        assert!(out.starts_with(":root {\n"));
        assert!(out.contains("  --font-size-base: 16px;\n"));
        assert!(out.contains("  --font-family: 'Inter', sans-serif;\n"));
        assert!(out.ends_with("}\n"));
        assert!(!out.contains("modes:"));
    }

    #[test]
    fn test_css_variables_custom_selector_and_modes() {
        let css = CssVariables::with_selector("body.app");
        let out = css.render(&resolve_tokens(&Inputs::new(30, Taste::Bold).with_battery(3)));
        assert!(out.starts_with("body.app {\n"));
        assert!(out.ends_with("/* modes: power-saving-mode */\n"));
    }

    #[test]
    fn test_boxed_sinks_forward_to_inner() {
        fn feed<S: TokenSink + ?Sized>(sink: &mut S, tokens: &TokenSet) {
            sink.apply(tokens);
        }
        let tokens = resolve_tokens(&Inputs::new(30, Taste::Bold));

        let mut boxed = Box::new(StyleMap::new());
        feed(&mut boxed, &tokens);
        assert_eq!(boxed.get("--primary-color"), Some("#ff4d00"));
        assert_eq!(boxed.applied_count(), 1);

        let mut styles = StyleMap::new();
        {
            let mut sink: Box<dyn TokenSink + '_> = Box::new(&mut styles);
            sink.apply(&tokens);
        }
        assert_eq!(styles.get("--border-width"), Some("3px"));
    }
}
