use std::fs;

use attune::run_to_string;
use insta::assert_snapshot;
use serde_json::Value;

fn run(args: &[&str]) -> String {
    let mut argv = vec!["attune"];
    argv.extend_from_slice(args);
    run_to_string(argv).unwrap()
}

fn json(args: &[&str]) -> Value {
    let mut argv = vec!["-o", "json"];
    argv.extend_from_slice(args);
    serde_json::from_str(&run(&argv)).unwrap()
}

#[test]
fn test_resolve_css_defaults_for_bold() {
    let out = run(&["-o", "css", "resolve", "--age", "30", "--taste", "bold"]);
    assert_snapshot!(out, @r###"
    :root {
      --font-size-base: 16px;
      --spacing-unit: 1rem;
      --primary-color: #ff4d00;
      --secondary-color: #000000;
      --bg-color: #f3f4f6;
      --surface-color: #ffffff;
      --text-color: #000000;
      --border-color: #000000;
      --font-family: 'Space Grotesk', sans-serif;
      --border-radius: 0px;
      --border-width: 3px;
      --shadow: 6px 6px 0px #000000;
    }
    "###);
}

#[test]
fn test_resolve_css_dark_high_contrast_power_saving() {
    let out = run(&[
        "-o", "css", "resolve", "--age", "70", "--taste", "minimal", "--battery", "10", "--lux",
        "900",
    ]);
    assert_snapshot!(out, @r###"
    :root {
      --font-size-base: 20px;
      --spacing-unit: 1.25rem;
      --primary-color: #171717;
      --secondary-color: #737373;
      --bg-color: #0f172a;
      --surface-color: #1e293b;
      --text-color: #ffffff;
      --border-color: #ffffff;
      --font-family: 'Inter', sans-serif;
      --border-radius: 4px;
      --border-width: 1px;
      --shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.5);
    }
    /* modes: power-saving-mode */
    "###);
}

#[test]
fn test_malformed_numbers_are_ignored() {
    let v = json(&["resolve", "--age", "abc", "--battery", "low", "--lux", "??"]);
    assert_eq!(v["inputs"]["age"], Value::Null);
    assert_eq!(v["tokens"]["font_size_base"], 16.0);
    assert_eq!(v["tokens"]["color_mode"], "light");
    assert_eq!(v["readout"]["battery"], "-");
}

#[test]
fn test_leading_integer_inputs() {
    let v = json(&["resolve", "--age", "62years", "--lux", "120 lux"]);
    assert_eq!(v["inputs"]["age"], 62);
    assert_eq!(v["inputs"]["ambient_lux"], 120);
    assert_eq!(v["tokens"]["contrast"], "High");
    assert_eq!(v["tokens"]["color_mode"], "dark");
    assert_eq!(v["readout"]["font_size"], "19px");
}

#[test]
fn test_dyslexic_flag() {
    let v = json(&["resolve", "--age", "20", "--dyslexic"]);
    assert_eq!(v["tokens"]["font_size_base"], 18.0);
    assert_eq!(v["tokens"]["modes"]["dyslexic"], true);
    assert_eq!(v["readout"]["font"], "OpenDyslexic");
    assert_eq!(v["readout"]["modes"], "dyslexic-mode");

    let v = json(&["resolve", "--age", "20", "--dyslexic=false"]);
    assert_eq!(v["tokens"]["font_size_base"], 14.0);
    assert_eq!(v["tokens"]["modes"]["dyslexic"], false);
}

#[test]
fn test_simple_profile_ignores_environment() {
    let v = json(&[
        "--profile", "simple", "resolve", "--age", "30", "--battery", "5", "--lux", "10",
        "--dyslexic",
    ]);
    assert_eq!(v["tokens"]["color_mode"], "light");
    assert_eq!(v["tokens"]["modes"]["power_saving"], false);
    assert_eq!(v["tokens"]["modes"]["dyslexic"], false);
}

#[test]
fn test_simple_profile_widens_minimal_border_for_age() {
    let v = json(&["--profile", "simple", "resolve", "--age", "70", "--taste", "minimal"]);
    assert_eq!(v["tokens"]["border_width"], 2);

    let v = json(&["resolve", "--age", "70", "--taste", "minimal"]);
    assert_eq!(v["tokens"]["border_width"], 1);
}

#[test]
fn test_config_file_sets_fallback_age() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("attune.yaml");
    fs::write(&config, "fallback_age: 60\n").unwrap();

    let v = json(&["--config", config.to_str().unwrap(), "resolve"]);
    assert_eq!(v["tokens"]["font_size_base"], 19.0);
    assert_eq!(v["tokens"]["contrast"], "High");
}

#[test]
fn test_config_file_errors_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("attune.yaml");
    fs::write(&config, "colour: blue\n").unwrap();

    let err = run_to_string(["attune", "--config", config.to_str().unwrap(), "presets"])
        .unwrap_err();
    assert!(format!("{:#}", err).contains("attune.yaml"));
}

#[test]
fn test_inputs_file_yaml_with_flag_override() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = dir.path().join("me.yaml");
    fs::write(&inputs, "age: 62\ntaste: playful\nbattery: 15\n").unwrap();
    let path = inputs.to_str().unwrap();

    let v = json(&["resolve", "--inputs", path]);
    assert_eq!(v["tokens"]["taste"], "playful");
    assert_eq!(v["tokens"]["modes"]["power_saving"], true);

    let v = json(&["resolve", "--inputs", path, "--battery", "90"]);
    assert_eq!(v["tokens"]["taste"], "playful");
    assert_eq!(v["tokens"]["modes"]["power_saving"], false);
}

#[test]
fn test_inputs_file_json() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = dir.path().join("me.json");
    fs::write(&inputs, r#"{"age": "40", "taste": "bold", "lux": 100}"#).unwrap();

    let v = json(&["resolve", "--inputs", inputs.to_str().unwrap()]);
    assert_eq!(v["inputs"]["age"], 40);
    assert_eq!(v["tokens"]["color_mode"], "dark");
}

#[test]
fn test_inputs_file_rejects_unknown_fields() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = dir.path().join("me.yaml");
    fs::write(&inputs, "height: 180\n").unwrap();

    let err =
        run_to_string(["attune", "resolve", "--inputs", inputs.to_str().unwrap()]).unwrap_err();
    assert!(format!("{:#}", err).contains("failed to parse inputs"));
}

#[test]
fn test_explain_json_lists_every_stage() {
    let v = json(&["explain", "--age", "40", "--taste", "playful", "--lux", "100"]);
    let stages: Vec<&str> = v
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["stage"].as_str().unwrap())
        .collect();
    assert_eq!(stages, ["typography", "theme", "environment", "contrast"]);

    let env_changes: Vec<&str> = v[2]["changed"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["token"].as_str().unwrap())
        .collect();
    assert_eq!(
        env_changes,
        ["bg-color", "surface-color", "text-color", "border-color", "shadow"]
    );
    assert_eq!(v[3]["changed"], Value::Array(vec![]));
}

#[test]
fn test_presets_css_blocks_per_taste() {
    let out = run(&["-o", "css", "presets"]);
    for taste in ["minimal", "bold", "playful", "corporate"] {
        assert!(out.contains(&format!("[data-taste=\"{}\"] {{\n", taste)));
    }
    assert_eq!(out.matches("--primary-color").count(), 4);
}

#[test]
fn test_presets_yaml() {
    let out = run(&["-o", "yaml", "presets"]);
    assert!(out.contains("taste: playful"));
    assert!(out.contains("border_radius: 24"));
    assert!(out.contains("#0f766e"));
}

#[test]
fn test_text_readout() {
    let out = run(&["-o", "text", "resolve", "--age", "62", "--taste", "bold"]);
    let plain = console::strip_ansi_codes(&out);
    assert!(plain.contains("Font size   19px"));
    assert!(plain.contains("Font        Space Grotesk"));
    assert!(plain.contains("Age         62"));
    assert!(plain.contains("Battery     -"));
}

#[test]
fn test_explain_reports_writes_that_match_defaults() {
    let out = run(&["-o", "text", "explain", "--age", "30", "--taste", "corporate"]);
    let plain = console::strip_ansi_codes(&out).into_owned();
    assert_snapshot!(plain, @r###"
    1. typography
       --font-size-base: 16px
       --spacing-unit: 1rem
    2. theme
       --primary-color: #0f766e
       --secondary-color: #64748b
       --bg-color: #f8fafc
       --surface-color: #ffffff
       --text-color: #0f172a
       --border-color: #cbd5e1
       --font-family: 'Merriweather', serif
       --border-radius: 6px
       --border-width: 1px
       --shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1)
    3. environment
       (no change)
    4. contrast
       (no change)
    "###);
}
