mod loader;
mod sample;
mod types;

pub use loader::ConfigError;
pub use types::{Contact, Experience, Icon, Portfolio, Project, RevealSettings, SocialLink};
