//! End-to-end resolution of the example theme.

use themeweave::{
    resolve_component, ComponentSelection, Diagnostics, ResolvedComponent, Stylesheet, Theme,
    ThemeManager, ThemingConfig, Warning,
};

// ============================================================================
// Test helpers
// ============================================================================

fn example_config() -> ThemingConfig {
    ThemingConfig::from_file(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/example.yaml"
    ))
    .unwrap()
}

fn example() -> Theme {
    Theme::from_config(&example_config()).unwrap()
}

fn resolve(theme: &Theme, component: &str, sheet: &mut Stylesheet) -> ResolvedComponent {
    let mut diagnostics = Diagnostics::new();
    let resolved = resolve_component(component, theme, sheet, &mut diagnostics).unwrap();
    assert!(diagnostics.is_empty(), "{:?}", diagnostics.warnings());
    resolved
}

/// The rules of the default variant's class, with the class written as `.c`.
fn default_rule(component: &ResolvedComponent, sheet: &Stylesheet) -> String {
    let class = &component.variant("default").unwrap().class_name;
    sheet
        .rule(class)
        .unwrap()
        .replace(&format!(".{class}"), ".c")
}

fn assert_in_order(css: &str, pieces: &[&str]) {
    let mut from = 0;
    for piece in pieces {
        match css[from..].find(piece) {
            Some(at) => from += at + piece.len(),
            None => panic!("{piece:?} not found after offset {from} in\n{css}"),
        }
    }
}

// ============================================================================
// Example theme
// ============================================================================

#[test]
fn example_theming_definition_resolves() {
    let theme = example();
    let mut sheet = Stylesheet::new();
    let test = resolve(&theme, "Test", &mut sheet);
    let css = default_rule(&test, &sheet);

    assert!(sheet.extract().contains(&test.variants[0].class_name));
    assert!(css.starts_with(
        ".c{backdrop-filter:blur(5px);\
         background:linear-gradient(#e66465, #9198e5);\
         border-color:red;color:#e66465;font-family:sans-serif;}"
    ));
    assert_in_order(
        &css,
        &[
            ".c:hover{color:red;}",
            ".c:hover::before{content:\"hi7\";position:absolute;}",
            ".c:hover::after{content:\"bye7\";position:absolute;}",
            ".c:focus,.c:focus-within{color:yellow;}",
            ".c:focus::before,.c:focus-within::before{content:\"hi5\";position:absolute;}",
            ".c:focus-visible{color:orange;}",
            ".c:active{color:blue;}",
            ".c:active::after{content:\"bye1\";position:absolute;}",
            ".c:disabled,.c[aria-disabled=true]{color:grey;pointer-events:none;}",
            ".c:disabled::before,.c[aria-disabled=true]::before{content:\"hi4\";position:absolute;}",
            ".c:checked,.c[aria-checked=true],.c[aria-checked=mixed]{color:violet;}",
            ".c:invalid,.c[aria-invalid=true],.c[aria-invalid=grammar],.c[aria-invalid=spelling]{color:cyan;}",
            ".c[aria-current=true],.c[aria-current=page],.c[aria-current=step],\
             .c[aria-current=location],.c[aria-current=date],.c[aria-current=time]{color:green;}",
            ".c[aria-pressed=true],.c[aria-pressed=mixed]{color:brown;}",
            ".c[aria-pressed=true]::after,.c[aria-pressed=mixed]::after{content:\"bye9\";position:absolute;}",
            ".c::selection{color:aqua;background:white;}",
            "@supports not (backdrop-filter: blur(1px)){.c{background:linear-gradient(#e66465, #9198e5);}}",
            ".c::before{content:\"hi\";position:absolute;}",
            ".c::after{content:\"bye\";position:absolute;}",
        ],
    );
}

#[test]
fn mixed_and_concatenated_variables() {
    let theme = example();
    let mut sheet = Stylesheet::new();
    let mixed = resolve(&theme, "MixedVar", &mut sheet);
    let css = sheet.extract();

    assert!(css.contains(&mixed.variants[0].class_name));
    assert!(css.contains("color:#cc6655aa"));
    assert!(css.contains("background:#cc6655aa"));
    assert!(css.contains("0 0 1rem #cc6655aa"));
}

#[test]
fn equal_styles_from_different_components_share_a_class() {
    let theme = example();
    let mut sheet = Stylesheet::new();
    let a = resolve(&theme, "CompA", &mut sheet);
    let b = resolve(&theme, "CompB", &mut sheet);

    let class = &a.variant("default").unwrap().class_name;
    assert_eq!(class, &b.variant("default").unwrap().class_name);
    assert_eq!(sheet.len(), 1);
    assert!(sheet.extract().contains(class.as_str()));
}

#[test]
fn box_set_fragments_follow_box_order() {
    let theme = example();
    let mut sheet = Stylesheet::new();
    let a = resolve(&theme, "CompA", &mut sheet);

    assert_eq!(
        default_rule(&a, &sheet),
        ".c{border-radius:1rem;border-width:0.25rem;background:black;color:white;\
         padding:1rem;font-family:\"Open Sans\", sans-serif;}"
    );
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn pseudo_state_order_ignores_declaration_order() {
    let states = [
        ("__disabled", "grey"),
        ("__active", "blue"),
        ("__focus", "yellow"),
        ("__hover", "red"),
    ];
    let forward = ordering_theme(states.iter().copied());
    let backward = ordering_theme(states.iter().rev().copied());

    let mut sheet = Stylesheet::new();
    let a = resolve(&forward, "Box", &mut sheet);
    let b = resolve(&backward, "Box", &mut sheet);
    assert_eq!(a.variants[0].class_name, b.variants[0].class_name);

    assert_in_order(
        &default_rule(&a, &sheet),
        &[":hover{", ":focus,", ":active{", ":disabled,"],
    );
}

fn ordering_theme<'a>(states: impl Iterator<Item = (&'a str, &'a str)>) -> Theme {
    let mut set = serde_json::Map::new();
    set.insert("background".into(), "white".into());
    for (state, color) in states {
        set.insert(state.into(), serde_json::json!({ "foreground": color }));
    }
    Theme::from_value(serde_json::json!({
        "name": "ordering",
        "version": "1",
        "globals": {},
        "sets": { "colorSets": { "s": set } },
        "components": { "Box": { "default": { "theming": { "colorSet": "s" } } } }
    }))
    .unwrap()
}

// ============================================================================
// Degradation
// ============================================================================

#[test]
fn missing_variables_degrade_without_failing() {
    let theme = Theme::from_value(serde_json::json!({
        "name": "sparse",
        "version": "1",
        "globals": { "colors": { "fg": "white" } },
        "sets": {},
        "components": {
            "Label": {
                "default": {
                    "theming": {
                        "colorSet": { "foreground": "$$colors.fg", "background": "$$colors.bg" }
                    }
                }
            }
        }
    }))
    .unwrap();

    let mut sheet = Stylesheet::new();
    let mut diagnostics = Diagnostics::new();
    let label = resolve_component("Label", &theme, &mut sheet, &mut diagnostics).unwrap();
    let class = &label.variants[0].class_name;

    assert_eq!(sheet.rule(class), Some(format!(".{class}{{color:white;}}").as_str()));
    assert!(matches!(
        diagnostics.warnings(),
        [Warning::UnresolvedReference { path, .. }] if path == "colors.bg"
    ));
}

// ============================================================================
// Manager over the example theme
// ============================================================================

#[test]
fn manager_loads_selected_components() {
    let config = example_config();
    let mut manager = ThemeManager::new();
    let selection = ComponentSelection::from_value(&serde_json::json!(["CompA", "MixedVar"])).unwrap();
    let active = manager.load_components(&selection, &config, &[]).unwrap();

    let names: Vec<_> = active.components.iter().map(|c| c.component.as_str()).collect();
    assert_eq!(names, vec!["CompA", "MixedVar"]);
    assert_eq!(active.global_styles.theme, "Example");
    assert!(active.warnings.is_empty());
}
