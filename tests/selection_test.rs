//! Integration tests for automatic colormap selection.
//!
//! These tests exercise the crate end-to-end: classification of realistic
//! variables, palette resolution, and the override scope lifecycle including
//! abnormal exits.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

use ndarray::arr1;
use pretty_assertions::assert_eq;

use ekman::{
    init_tracing, palettes, AttributeValue, Category, DataArray, EkmanError, Overrides, Registry,
};

fn setup() -> Registry {
    init_tracing("debug");
    Registry::with_defaults()
}

/// Everything observable about a registry's three tables.
fn snapshot(registry: &Registry) -> Vec<(String, Option<String>, Option<String>, Option<String>)> {
    registry
        .categories()
        .into_iter()
        .map(|category| {
            (
                category.as_str().to_string(),
                registry.pattern(&category),
                registry
                    .sequential_entry(&category)
                    .map(|p| p.name().to_string()),
                registry
                    .diverging_entry(&category)
                    .map(|p| p.name().to_string()),
            )
        })
        .collect()
}

#[test]
fn classifies_realistic_ocean_variables() {
    let registry = setup();

    let cases = [
        ("sea_water_temperature", "temp"),
        ("SALT", "salt"),
        ("u-velocity", "vel"),
        ("relative_vorticity", "freq"),
        ("zeta", "zeta"),
        ("potential_density", "rho"),
        ("eddy_kinetic_energy", "energy"),
        ("bathymetry", "depths"),
        ("dudt", "accel"),
        ("dye_03_concentration", "dye"),
    ];

    for (name, expected) in cases {
        let got = registry.classify(Some(name), &HashMap::new());
        assert_eq!(got, Some(Category::new(expected)), "name: {}", name);
    }
}

#[test]
fn classification_falls_through_name_to_attributes() {
    let registry = setup();

    // The name matches nothing; the standard_name attribute carries the cue.
    let mut attrs = HashMap::new();
    attrs.insert(
        "standard_name".to_string(),
        AttributeValue::Text("sea_surface_salinity".to_string()),
    );
    attrs.insert("missing_value".to_string(), AttributeValue::Number(-9999.0));

    let got = registry.classify(Some("tracer07"), &attrs);
    assert_eq!(got, Some(Category::new("salt")));
}

#[test]
fn palette_resolution_scenarios() {
    let registry = setup();

    // temp -> thermal / balance
    let temp = registry.classify(Some("sea_water_temperature"), &HashMap::new());
    assert_eq!(registry.sequential(temp.as_ref()).name(), "thermal");
    assert_eq!(registry.diverging(temp.as_ref()).name(), "balance");

    // attributes-only salinity -> haline
    let mut attrs = HashMap::new();
    attrs.insert("units".to_string(), AttributeValue::Text("psu".to_string()));
    let salt = registry.classify(None, &attrs);
    assert_eq!(salt, Some(Category::new("salt")));
    assert_eq!(registry.sequential(salt.as_ref()).name(), "haline");

    // unmatched -> defaults
    let unmatched = registry.classify(Some("foo"), &HashMap::new());
    assert_eq!(unmatched, None);
    assert_eq!(registry.sequential(unmatched.as_ref()).name(), "viridis");
    assert_eq!(registry.diverging(unmatched.as_ref()).name(), "balance");
}

#[test]
fn accessor_reads_the_process_wide_registry() {
    init_tracing("debug");

    let da = DataArray::new("sea_water_temperature", arr1(&[14.2f32]).into_dyn());
    assert_eq!(da.cmo().category(), Some(Category::new("temp")));
    assert_eq!(da.cmo().sequential().name(), "thermal");
}

#[test]
fn override_scope_roundtrip_with_new_category() {
    let registry = setup();
    let before = snapshot(&registry);

    {
        let _guard = registry
            .set_options(
                Overrides::new()
                    .pattern("dye_01", "dye_01")
                    .sequential("dye_01", palettes::tempo()),
            )
            .unwrap();

        // Inside the scope the new category is live end-to-end.
        let category = registry.classify(Some("dye_01_concentration"), &HashMap::new());
        assert_eq!(category, Some(Category::new("dye_01")));
        assert_eq!(registry.sequential(category.as_ref()).name(), "tempo");
        // No diverging entry was registered; lookup falls back.
        assert_eq!(registry.diverging(category.as_ref()).name(), "balance");
    }

    // After exit the tables are value-equal to their prior state and the
    // introduced entries are gone, not reset to a sentinel.
    assert_eq!(snapshot(&registry), before);
    assert_eq!(registry.pattern(&Category::new("dye_01")), None);
    assert_eq!(registry.sequential_entry(&Category::new("dye_01")), None);

    // Without the override, "dye_01_concentration" resolves to the built-in
    // dye category again.
    let category = registry.classify(Some("dye_01_concentration"), &HashMap::new());
    assert_eq!(category, Some(Category::new("dye")));
    assert_eq!(registry.sequential(category.as_ref()).name(), "matter");
}

#[test]
fn override_scope_restores_on_panic() {
    let registry = setup();
    let before = snapshot(&registry);

    let result = catch_unwind(AssertUnwindSafe(|| {
        let _guard = registry
            .set_options(
                Overrides::new()
                    .pattern("temp", "thermo")
                    .diverging("temp", palettes::curl()),
            )
            .unwrap();
        panic!("scope body failed");
    }));

    assert!(result.is_err());
    assert_eq!(snapshot(&registry), before);
    assert_eq!(registry.diverging(Some(&Category::new("temp"))).name(), "balance");
}

#[test]
fn rejected_override_leaves_no_trace() {
    let registry = setup();
    let before = snapshot(&registry);

    // Orphan palette tag: no pre-existing pattern and none in the batch.
    let err = registry
        .set_options(Overrides::new().sequential("newtag", palettes::matter()))
        .unwrap_err();
    assert!(matches!(err, EkmanError::Config { .. }));
    assert_eq!(snapshot(&registry), before);

    // Invalid regex rejects the whole batch, palette entries included.
    let err = registry
        .set_options(
            Overrides::new()
                .pattern("temp", "([unclosed")
                .sequential("temp", palettes::matter()),
        )
        .unwrap_err();
    assert!(matches!(err, EkmanError::Pattern { .. }));
    assert_eq!(snapshot(&registry), before);
}

#[test]
fn overridden_pattern_changes_priority_outcome() {
    let registry = setup();

    // "speed_of_sound" normally classifies as vel via the "speed" branch.
    let category = registry.classify(Some("speed_of_sound"), &HashMap::new());
    assert_eq!(category, Some(Category::new("vel")));

    {
        // Re-pointing the earlier temp entry at "sound" wins on order.
        let _guard = registry
            .set_options(Overrides::new().pattern("temp", "sound"))
            .unwrap();
        let category = registry.classify(Some("speed_of_sound"), &HashMap::new());
        assert_eq!(category, Some(Category::new("temp")));
    }

    let category = registry.classify(Some("speed_of_sound"), &HashMap::new());
    assert_eq!(category, Some(Category::new("vel")));
}
