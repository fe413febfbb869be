//! Presentation model of the portfolio page.
//!
//! [`Page::build`] turns an immutable [`Portfolio`] into an ordered list
//! of blocks. Hosts (the HTML renderer, the terminal viewer) only read
//! this tree. Every list item is keyed by its position, so duplicated
//! content never collides.

pub mod html;

use std::time::Duration;

use crate::config::{Experience, Portfolio, Project, SocialLink};
use crate::reveal::{BlockId, Easing, Transition};

/// In-page navigation targets, in navbar order.
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "About",
        anchor: "about",
    },
    NavLink {
        label: "Projects",
        anchor: "projects",
    },
    NavLink {
        label: "Contact",
        anchor: "contact",
    },
];

/// Fade-in of the hero's scroll hint, started at mount rather than on
/// intersection.
pub const SCROLL_HINT_TRANSITION: Transition = Transition {
    delay: Duration::from_secs(1),
    duration: Duration::from_secs(1),
    easing: Easing::EaseOut,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavBar {
    pub brand: String,
    pub links: Vec<NavLink>,
}

/// A labelled link.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// Numbered section title, e.g. `02. Featured Projects`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionHeading {
    pub number: String,
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hero {
    pub greeting: &'static str,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactBlock {
    pub heading: String,
    pub message: String,
    pub cta: Option<Link>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    Hero(Hero),
    Experience {
        heading: SectionHeading,
        entries: Vec<Experience>,
    },
    Projects {
        heading: SectionHeading,
        projects: Vec<Project>,
    },
    Skills {
        heading: SectionHeading,
        skills: Vec<String>,
    },
    Contact(ContactBlock),
}

/// A revealable unit of content.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: BlockId,
    /// Section id used by in-page links.
    pub anchor: Option<&'static str>,
    pub content: BlockContent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Footer {
    pub name: String,
    pub role: String,
    pub socials: Vec<SocialLink>,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    pub nav: NavBar,
    pub blocks: Vec<Block>,
    pub footer: Footer,
}

impl Page {
    pub fn build(portfolio: &Portfolio) -> Self {
        let contents = [
            (
                None,
                BlockContent::Hero(Hero {
                    greeting: "Hi, my name is",
                    name: portfolio.name.clone(),
                    role: portfolio.role.clone(),
                    bio: portfolio.bio.clone(),
                    socials: portfolio.socials.clone(),
                }),
            ),
            (
                Some("about"),
                BlockContent::Experience {
                    heading: heading(1, "Experience"),
                    entries: portfolio.experience.clone(),
                },
            ),
            (
                Some("projects"),
                BlockContent::Projects {
                    heading: heading(2, "Featured Projects"),
                    projects: portfolio.projects.clone(),
                },
            ),
            (
                Some("skills"),
                BlockContent::Skills {
                    heading: heading(3, "Technical Skills"),
                    skills: portfolio.skills.clone(),
                },
            ),
            (
                Some("contact"),
                BlockContent::Contact(ContactBlock {
                    heading: portfolio.contact.heading.clone(),
                    message: portfolio.contact.message.clone(),
                    cta: portfolio.contact_href().map(|href| Link {
                        label: portfolio.contact.cta_label.clone(),
                        href,
                    }),
                }),
            ),
        ];

        let blocks = contents
            .into_iter()
            .enumerate()
            .map(|(index, (anchor, content))| Block {
                id: BlockId(index),
                anchor,
                content,
            })
            .collect();

        Self {
            title: portfolio.name.clone(),
            nav: NavBar {
                brand: portfolio.name.clone(),
                links: NAV_LINKS.to_vec(),
            },
            blocks,
            footer: Footer {
                name: portfolio.name.clone(),
                role: portfolio.role.clone(),
                socials: portfolio.socials.clone(),
                copyright: format!("© {} All rights reserved.", portfolio.copyright_year()),
            },
        }
    }

    /// The block an in-page link points at.
    pub fn block_for_anchor(&self, anchor: &str) -> Option<BlockId> {
        self.blocks
            .iter()
            .find(|block| block.anchor == Some(anchor))
            .map(|block| block.id)
    }
}

fn heading(number: usize, title: &'static str) -> SectionHeading {
    SectionHeading {
        number: format!("{number:02}."),
        title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_are_keyed_by_position() {
        let page = Page::build(&Portfolio::default());
        let ids: Vec<usize> = page.blocks.iter().map(|block| block.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert!(matches!(page.blocks[0].content, BlockContent::Hero(_)));
    }

    #[test]
    fn nav_anchors_resolve_to_blocks() {
        let page = Page::build(&Portfolio::default());
        for link in &page.nav.links {
            assert!(page.block_for_anchor(link.anchor).is_some(), "{}", link.anchor);
        }
        assert_eq!(page.block_for_anchor("projects"), Some(BlockId(2)));
        assert_eq!(page.block_for_anchor("nowhere"), None);
    }

    #[test]
    fn headings_are_numbered() {
        assert_eq!(heading(2, "Featured Projects").number, "02.");
    }

    #[test]
    fn contact_without_mail_has_no_cta() {
        let portfolio = Portfolio {
            socials: Vec::new(),
            ..Portfolio::default()
        };
        let page = Page::build(&portfolio);
        let contact = page.blocks.iter().find_map(|block| match &block.content {
            BlockContent::Contact(contact) => Some(contact),
            _ => None,
        });
        assert!(contact.is_some_and(|contact| contact.cta.is_none()));
    }

    #[test]
    fn footer_uses_configured_year() {
        let portfolio = Portfolio {
            copyright_year: Some(2025),
            ..Portfolio::default()
        };
        let page = Page::build(&portfolio);
        assert_eq!(page.footer.copyright, "© 2025 All rights reserved.");
    }
}
