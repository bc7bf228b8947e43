//! Human-readable renderings for the text output mode.

use attune_tokens::{catalog, Readout, Rgb, StageSnapshot, Theme};
use console::Style;
use serde::Serialize;

fn label_style() -> Style {
    Style::new().bold()
}

fn muted_style() -> Style {
    Style::new().dim()
}

/// A two-cell block painted in the given color.
fn swatch(color: Rgb) -> String {
    Style::new()
        .color256(color.ansi256())
        .apply_to("\u{2588}\u{2588}")
        .to_string()
}

/// The readout as aligned label/value rows, with swatches for colors.
pub fn readout(readout: &Readout, primary: Rgb, background: Rgb) -> String {
    let mut out = String::new();
    for (label, value) in readout.rows() {
        let value = match label {
            "Primary" => format!("{} {}", swatch(primary), value),
            "Background" => format!("{} {}", swatch(background), value),
            _ if value.is_empty() => muted_style().apply_to("none").to_string(),
            _ => value.to_string(),
        };
        out.push_str(&format!(
            "  {} {}\n",
            label_style().apply_to(format!("{:<11}", label)),
            value
        ));
    }
    out
}

/// A token value written by a stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenChange {
    pub token: &'static str,
    pub value: String,
}

/// One stage of an explanation, in serializable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainStep {
    pub stage: &'static str,
    /// Tokens the stage wrote, in token order, with their value after it.
    pub changed: Vec<TokenChange>,
}

impl ExplainStep {
    pub fn from_snapshot(snapshot: &StageSnapshot) -> Self {
        Self {
            stage: snapshot.stage.name(),
            changed: snapshot
                .written
                .iter()
                .map(|&name| TokenChange {
                    token: name.as_str(),
                    value: snapshot.tokens.value(name),
                })
                .collect(),
        }
    }
}

/// Stage-by-stage listing of what each override layer changed.
pub fn explain(steps: &[ExplainStep]) -> String {
    let mut out = String::new();
    for (i, step) in steps.iter().enumerate() {
        out.push_str(&format!(
            "{} {}\n",
            muted_style().apply_to(format!("{}.", i + 1)),
            label_style().apply_to(step.stage)
        ));
        if step.changed.is_empty() {
            out.push_str(&format!("   {}\n", muted_style().apply_to("(no change)")));
        }
        for change in &step.changed {
            out.push_str(&format!("   --{}: {}\n", change.token, change.value));
        }
    }
    out
}

/// One line per preset: swatch, name, accent, font and shape.
pub fn presets(themes: &[&Theme]) -> String {
    let mut out = String::new();
    for theme in themes {
        out.push_str(&format!(
            "{} {} {}  {}  radius {}px  border {}px\n",
            swatch(theme.primary),
            label_style().apply_to(format!("{:<10}", theme.taste.name())),
            theme.primary,
            theme.font_family,
            theme.border_radius,
            theme.border_width,
        ));
    }
    if themes.iter().any(|t| std::ptr::eq(*t, &catalog::CORPORATE)) {
        out.push_str(&format!(
            "{}\n",
            muted_style().apply_to("Unrecognized tastes resolve to corporate.")
        ));
    }
    out
}
