use serde::{Deserialize, Serialize};

/// Root configuration record for the portfolio page.
///
/// Every field falls back to an empty value when missing from the file,
/// so a partial config renders fewer elements instead of failing.
/// Plain values come before the table arrays so the record serializes
/// as valid TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub bio: String,
    /// Year printed in the footer copyright line (default: current year).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright_year: Option<i32>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub reveal: RevealSettings,
}

/// Icon shown for a social link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Github,
    Linkedin,
    Mail,
    /// Generic outbound link.
    Link,
}

/// A social profile link (icon, destination, accessible label).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: Icon,
    pub href: String,
    pub label: String,
}

/// A project card in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_project_link")]
    pub link: String,
}

/// An entry in the experience timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub desc: String,
}

/// Copy for the closing "get in touch" section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default = "default_contact_heading")]
    pub heading: String,
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_cta_label")]
    pub cta_label: String,
    /// Address for the call-to-action link. Falls back to the first
    /// `mailto:` social link when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Reveal-on-scroll animation settings, in CSS pixels and milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealSettings {
    /// Trigger margin around the viewport. Must be zero or negative.
    #[serde(default = "default_margin_px")]
    pub margin_px: i32,
    /// Distance below the resting position a hidden block starts from.
    #[serde(default = "default_offset_px")]
    pub offset_px: u32,
    /// Transition duration (default: 600).
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Delay before the transition starts (default: 0).
    #[serde(default)]
    pub delay_ms: u64,
}

fn default_project_link() -> String {
    "#".to_string()
}

fn default_contact_heading() -> String {
    "Get In Touch".to_string()
}

fn default_cta_label() -> String {
    "Say Hello".to_string()
}

fn default_margin_px() -> i32 {
    -50
}

fn default_offset_px() -> u32 {
    30
}

fn default_duration_ms() -> u64 {
    600
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            margin_px: default_margin_px(),
            offset_px: default_offset_px(),
            duration_ms: default_duration_ms(),
            delay_ms: 0,
        }
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            heading: default_contact_heading(),
            message: String::new(),
            cta_label: default_cta_label(),
            email: None,
        }
    }
}

impl Portfolio {
    /// Address the contact call-to-action points at, as a `mailto:` href.
    pub fn contact_href(&self) -> Option<String> {
        if let Some(email) = &self.contact.email {
            return Some(if email.starts_with("mailto:") {
                email.clone()
            } else {
                format!("mailto:{email}")
            });
        }
        self.socials
            .iter()
            .find(|social| social.href.starts_with("mailto:"))
            .map(|social| social.href.clone())
    }

    /// Footer copyright year, defaulting to the current local year.
    pub fn copyright_year(&self) -> i32 {
        use chrono::Datelike;
        self.copyright_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_empty() {
        let portfolio: Portfolio = toml::from_str("name = \"Ada\"").unwrap();
        assert_eq!(portfolio.name, "Ada");
        assert!(portfolio.socials.is_empty());
        assert!(portfolio.projects.is_empty());
        assert_eq!(portfolio.contact.heading, "Get In Touch");
        assert_eq!(portfolio.reveal, RevealSettings::default());
    }

    #[test]
    fn contact_href_prefers_explicit_email() {
        let mut portfolio: Portfolio = toml::from_str("").unwrap();
        portfolio.socials.push(SocialLink {
            icon: Icon::Mail,
            href: "mailto:social@example.com".to_string(),
            label: "Email".to_string(),
        });
        assert_eq!(
            portfolio.contact_href().as_deref(),
            Some("mailto:social@example.com")
        );

        portfolio.contact.email = Some("me@example.com".to_string());
        assert_eq!(
            portfolio.contact_href().as_deref(),
            Some("mailto:me@example.com")
        );
    }

    #[test]
    fn contact_href_is_none_without_mail() {
        let portfolio: Portfolio = toml::from_str("").unwrap();
        assert!(portfolio.contact_href().is_none());
    }

    #[test]
    fn icon_names_are_lowercase() {
        let link: SocialLink =
            toml::from_str("icon = \"linkedin\"\nhref = \"https://x\"\nlabel = \"LinkedIn\"")
                .unwrap();
        assert_eq!(link.icon, Icon::Linkedin);
    }
}
