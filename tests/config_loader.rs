mod common;

use common::{temp_config, SAMPLE_TOML};
use folio::config::{ConfigError, Icon, Portfolio, RevealSettings};
use tempfile::TempDir;

/// The built-in portfolio carries the sample page content.
#[test]
fn test_default_portfolio_values() {
    let portfolio = Portfolio::default();

    assert_eq!(portfolio.name, "Chaimae Mardi");
    assert_eq!(portfolio.role, "Junior Full-Stack Engineer");
    assert_eq!(portfolio.socials.len(), 3);
    assert_eq!(portfolio.socials[0].icon, Icon::Github);
    assert_eq!(portfolio.skills.len(), 8);
    assert_eq!(portfolio.projects.len(), 5);
    assert_eq!(portfolio.experience.len(), 1);

    // Duplicated title is preserved as given.
    let ecommerce = portfolio
        .projects
        .iter()
        .filter(|p| p.title == "Ecommerce Website")
        .count();
    assert_eq!(ecommerce, 2);

    assert_eq!(portfolio.reveal, RevealSettings::default());
    assert_eq!(portfolio.reveal.margin_px, -50);
    assert_eq!(portfolio.reveal.duration_ms, 600);
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Portfolio::config_path();
    assert!(path.ends_with("folio/portfolio.toml"));
}

#[test]
fn test_load_from_file() {
    let (_dir, path) = temp_config(SAMPLE_TOML);
    let portfolio = Portfolio::load_from(&path).unwrap();

    assert_eq!(portfolio.name, "Ada Lovelace");
    assert_eq!(portfolio.skills, vec!["Rust", "Maud"]);
    assert_eq!(portfolio.socials[1].icon, Icon::Mail);
    assert_eq!(portfolio.projects.len(), 2);
    assert_eq!(portfolio.experience[0].period, "1843");
    assert_eq!(portfolio.copyright_year, Some(2025));
}

#[test]
fn test_missing_explicit_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let result = Portfolio::resolve(Some(&path));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("name = [unterminated");
    let err = Portfolio::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_unknown_icon_is_parse_error() {
    let (_dir, path) = temp_config(
        r#"[[socials]]
icon = "myspace"
href = "https://myspace.com"
label = "MySpace"
"#,
    );
    assert!(matches!(
        Portfolio::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_positive_margin_fails_validation() {
    let (_dir, path) = temp_config("[reveal]\nmargin_px = 20\n");
    let err = Portfolio::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("margin_px"));
}

#[test]
fn test_zero_duration_fails_validation() {
    let (_dir, path) = temp_config("[reveal]\nduration_ms = 0\n");
    assert!(matches!(
        Portfolio::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_partial_reveal_section_keeps_defaults() {
    let (_dir, path) = temp_config("[reveal]\ndelay_ms = 200\n");
    let portfolio = Portfolio::load_from(&path).unwrap();

    assert_eq!(portfolio.reveal.delay_ms, 200);
    assert_eq!(portfolio.reveal.margin_px, -50);
    assert_eq!(portfolio.reveal.offset_px, 30);
}

#[test]
fn test_save_then_load_round_trips_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("portfolio.toml");

    Portfolio::default().save_to(&path, false).unwrap();
    let loaded = Portfolio::load_from(&path).unwrap();

    assert_eq!(loaded, Portfolio::default());
}

#[test]
fn test_save_refuses_to_overwrite_without_force() {
    let (_dir, path) = temp_config(SAMPLE_TOML);

    let err = Portfolio::default().save_to(&path, false).unwrap_err();
    assert!(matches!(err, ConfigError::AlreadyExists { .. }));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), SAMPLE_TOML);

    Portfolio::default().save_to(&path, true).unwrap();
    assert_eq!(Portfolio::load_from(&path).unwrap().name, "Chaimae Mardi");
}
