//! Tests for the LISA catalogue and the build-time generator

use integration_tests::OutputDir;
use lc_header::{HeaderGenerator, Language};
use lisa_headers::{generate, Config};

#[test]
fn test_every_name_is_declared() {
    let registry = lisa_constants::registry().unwrap();
    let header = HeaderGenerator::new(&registry).render(Language::Cpp);

    for name in registry.names() {
        let declaration = format!("static constexpr double {name} = ");
        assert!(header.contains(&declaration), "missing declaration for {name}");
    }
    assert_eq!(header.matches("static constexpr double").count(), registry.len());
}

#[test]
fn test_aliases_declare_same_value() {
    let registry = lisa_constants::registry().unwrap();
    let header = HeaderGenerator::new(&registry).render(Language::C);

    assert!(header.contains("static const double LISA_SPEED_OF_LIGHT = 299792458.0;"));
    assert!(header.contains("static const double LISA_c = 299792458.0;"));
    assert!(header.contains("static const double LISA_ASTRONOMICAL_UNIT = 149597870700.0;"));
    assert!(header.contains("static const double LISA_au = 149597870700.0;"));
}

#[test]
fn test_large_and_small_values_stay_float_literals() {
    let registry = lisa_constants::registry().unwrap();
    let header = HeaderGenerator::new(&registry).render(Language::Cpp);

    assert!(header.contains("static constexpr double GM_SUN = 1.327124400419394e20;"));
    assert!(header.contains("static constexpr double NEWTON_CONSTANT = 6.67408e-11;"));
    assert!(header.contains("static constexpr double SUN_MASS = 1.98848e30;"));
}

#[test]
fn test_units_and_references_are_documented() {
    let registry = lisa_constants::registry().unwrap();
    let header = HeaderGenerator::new(&registry).render(Language::C);

    assert!(header.contains(" Unit: m^3/s^2.\n"));
    assert!(header.contains(" - Table 8 from http://ipnpr.jpl.nasa.gov/progress_report/42-196/196C.pdf\n"));
}

#[test]
fn test_build_step_writes_both_headers() {
    let registry = lisa_constants::registry().unwrap();
    let out = OutputDir::new().unwrap();
    let config = Config {
        out_dir: out.path().to_path_buf(),
        ..Config::default()
    };

    generate::generate(&registry, &config).unwrap();

    let cpp = out.read("lisaconstants.hpp").unwrap();
    let c = out.read("lisaconstants.h").unwrap();
    assert!(cpp.contains("namespace LisaConstants {"));
    assert!(cpp.ends_with("};\n}\n"));
    assert!(c.contains("#define LISACONSTANTS_H"));
    assert!(c.contains("LISA_SUN_SCHWARZSCHILD_RADIUS"));
}

#[test]
fn test_config_file_drives_generation() {
    let registry = lisa_constants::registry().unwrap();
    let out = OutputDir::new().unwrap();
    std::fs::write(
        out.file("lisaconstants.toml"),
        "stem = \"mission\"\nlanguages = [\"c\"]\n\n[banner]\ntitle = \"Mission constants.\"\nsummary = []\nauthors = []\n",
    )
    .unwrap();

    let mut config = Config::load(None, out.path()).unwrap();
    config.out_dir = out.path().to_path_buf();
    generate::generate(&registry, &config).unwrap();

    let header = out.read("mission.h").unwrap();
    assert!(header.starts_with("//\n// Mission constants.\n//\n\n#ifndef LISACONSTANTS_H\n"));
    assert!(!out.file("mission.hpp").exists());
}
