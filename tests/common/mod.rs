//! Shared test utilities.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Minimal portfolio with two identically titled projects.
pub const SAMPLE_TOML: &str = r##"name = "Ada Lovelace"
role = "Engineer"
bio = "Notes on the analytical engine."
copyright_year = 2025
skills = ["Rust", "Maud"]

[[socials]]
icon = "github"
href = "https://github.com/ada"
label = "GitHub"

[[socials]]
icon = "mail"
href = "mailto:ada@example.com"
label = "Email"

[[projects]]
title = "Ecommerce Website"
desc = "First shop."
tags = [".Net", "SqlServer"]
link = "#"

[[projects]]
title = "Ecommerce Website"
desc = "Second shop."
tags = ["Php", "MySql"]
link = "#"

[[experience]]
company = "Analytical Engines"
role = "Programmer"
period = "1843"
desc = "Wrote the first program."
"##;

/// Writes `content` to `portfolio.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("portfolio.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
