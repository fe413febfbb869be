//! Static HTML rendering with Maud.
//!
//! The document is self-contained: an inline stylesheet holds the hidden
//! and visible reveal styles, and an inline script drives them with a
//! one-shot browser `IntersectionObserver` using the configured margin.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::config::{Icon, RevealSettings, SocialLink};
use crate::page::{Block, BlockContent, Footer, Hero, NavBar, Page, SectionHeading};

const STYLESHEET: &str = r#"
:root { color-scheme: dark; }
* { box-sizing: border-box; }
body { margin: 0; background: #020617; color: #cbd5e1; font-family: system-ui, sans-serif; line-height: 1.6; }
a { color: inherit; text-decoration: none; }
a:hover { color: #22d3ee; }
nav { position: fixed; inset: 0 0 auto 0; z-index: 50; background: rgba(2, 6, 23, 0.8); backdrop-filter: blur(12px); border-bottom: 1px solid #1e293b; }
nav .inner { max-width: 64rem; margin: 0 auto; padding: 0 1.5rem; height: 4rem; display: flex; align-items: center; justify-content: space-between; }
.brand { font-size: 1.25rem; font-weight: 700; color: #f1f5f9; }
.dot, .accent { color: #22d3ee; }
.nav-links { display: flex; gap: 1.5rem; font-size: 0.875rem; }
section { max-width: 64rem; margin: 0 auto; padding: 5rem 1.5rem; }
.hero { min-height: 100vh; display: flex; flex-direction: column; justify-content: center; position: relative; padding-top: 4rem; }
.greeting, .mono { font-family: ui-monospace, monospace; color: #22d3ee; }
h1 { font-size: 3.5rem; color: #f1f5f9; margin: 0 0 1rem; }
h2 { font-size: 2.5rem; color: #94a3b8; margin: 0 0 1.5rem; }
.bio { max-width: 36rem; font-size: 1.125rem; color: #94a3b8; }
.socials { display: flex; gap: 1rem; }
.social { padding: 0.5rem; border-radius: 0.5rem; color: #94a3b8; }
.heading { display: flex; align-items: center; gap: 1rem; margin-bottom: 3rem; }
.heading h3 { font-size: 1.875rem; color: #f1f5f9; margin: 0; }
.heading .rule { height: 1px; background: #1e293b; flex-grow: 1; max-width: 20rem; }
.timeline { border-left: 1px solid #1e293b; }
.job { padding-left: 2rem; margin-bottom: 3rem; }
.job h4 { font-size: 1.25rem; color: #f1f5f9; margin: 0; }
.projects { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1.5rem; }
.project { background: #0f172a; border: 1px solid #1e293b; border-radius: 0.75rem; padding: 1.5rem; transition: transform 0.3s; }
.project:hover { transform: translateY(-5px); }
.project h4 { font-size: 1.25rem; color: #f1f5f9; }
.tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.tag { font-size: 0.75rem; font-family: ui-monospace, monospace; color: #22d3ee; background: rgba(34, 211, 238, 0.05); padding: 0.25rem 0.5rem; border-radius: 0.25rem; }
.skills { display: flex; flex-wrap: wrap; gap: 0.75rem; }
.skill { padding: 0.75rem 1.25rem; background: #0f172a; border: 1px solid #1e293b; border-radius: 0.5rem; }
.contact { text-align: center; }
.cta { display: inline-block; padding: 1rem 2rem; border: 1px solid #22d3ee; color: #22d3ee; font-family: ui-monospace, monospace; border-radius: 0.25rem; }
footer { border-top: 1px solid #1e293b; max-width: 64rem; margin: 0 auto; padding: 3rem 1.5rem; display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 1.5rem; }
.muted { color: #64748b; font-size: 0.875rem; }
.scroll-hint { position: absolute; bottom: 2.5rem; left: 50%; color: #64748b; opacity: 0; animation: hint-in 1s ease-out 1s forwards; }
@keyframes hint-in { to { opacity: 1; } }
.reveal { opacity: 0; transform: translateY(var(--reveal-offset, 30px)); transition-property: opacity, transform; transition-timing-function: ease-out; }
.reveal.is-visible { opacity: 1; transform: none; }
"#;

const REVEAL_SCRIPT: &str = r#"
(function () {
  var blocks = document.querySelectorAll('.reveal');
  if (!('IntersectionObserver' in window)) {
    blocks.forEach(function (el) { el.classList.add('is-visible'); });
    return;
  }
  var observer = new IntersectionObserver(function (entries) {
    entries.forEach(function (entry) {
      if (!entry.isIntersecting) { return; }
      entry.target.classList.add('is-visible');
      observer.unobserve(entry.target);
    });
  }, { rootMargin: 'ROOT_MARGIN' });
  blocks.forEach(function (el) { observer.observe(el); });
})();
"#;

/// Renders `page` as a complete HTML document.
pub fn render(page: &Page, reveal: &RevealSettings) -> String {
    let script = REVEAL_SCRIPT.replace("ROOT_MARGIN", &format!("{}px", reveal.margin_px));
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page.title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                (nav(&page.nav))
                main {
                    @for block in &page.blocks {
                        (block_section(block, reveal))
                    }
                }
                (footer(&page.footer))
                script { (PreEscaped(script)) }
            }
        }
    };
    let html = markup.into_string();
    tracing::debug!(bytes = html.len(), blocks = page.blocks.len(), "rendered html");
    html
}

fn nav(nav: &NavBar) -> Markup {
    html! {
        nav {
            div class="inner" {
                span class="brand" { (nav.brand) span class="dot" { "." } }
                div class="nav-links" {
                    @for link in &nav.links {
                        a href=(format!("#{}", link.anchor)) { (link.label) }
                    }
                }
            }
        }
    }
}

fn reveal_style(reveal: &RevealSettings) -> String {
    format!(
        "transition-duration: {}ms; transition-delay: {}ms; --reveal-offset: {}px",
        reveal.duration_ms, reveal.delay_ms, reveal.offset_px
    )
}

fn block_section(block: &Block, reveal: &RevealSettings) -> Markup {
    let class = match block.content {
        BlockContent::Hero(_) => "hero",
        BlockContent::Contact(_) => "contact",
        _ => "section",
    };
    html! {
        section id=[block.anchor] class=(class) {
            div class="reveal" data-block=(block.id.0) style=(reveal_style(reveal)) {
                (block_content(&block.content))
            }
            @if let BlockContent::Hero(_) = block.content {
                div class="scroll-hint" aria-hidden="true" { "⌄" }
            }
        }
    }
}

fn block_content(content: &BlockContent) -> Markup {
    match content {
        BlockContent::Hero(hero) => hero_content(hero),
        BlockContent::Experience { heading, entries } => html! {
            (section_heading(heading))
            div class="timeline" {
                @for (index, job) in entries.iter().enumerate() {
                    div class="job" data-key=(index) {
                        h4 { (job.role) }
                        p class="mono" { (job.company) " • " (job.period) }
                        p { (job.desc) }
                    }
                }
            }
        },
        BlockContent::Projects { heading, projects } => html! {
            (section_heading(heading))
            div class="projects" {
                @for (index, project) in projects.iter().enumerate() {
                    article class="project" data-key=(index) {
                        div class="project-top" {
                            span class="accent" aria-hidden="true" { "</>" }
                            a href=(project.link) aria-label=(format!("Open {}", project.title)) { "↗" }
                        }
                        h4 { (project.title) }
                        p class="muted" { (project.desc) }
                        div class="tags" {
                            @for tag in &project.tags {
                                span class="tag" { (tag) }
                            }
                        }
                    }
                }
            }
        },
        BlockContent::Skills { heading, skills } => html! {
            (section_heading(heading))
            div class="skills" {
                @for skill in skills {
                    div class="skill" { span class="accent" aria-hidden="true" { ">_ " } (skill) }
                }
            }
        },
        BlockContent::Contact(contact) => html! {
            h2 { (contact.heading) }
            p class="muted" { (contact.message) }
            @if let Some(cta) = &contact.cta {
                a class="cta" href=(cta.href) { (cta.label) }
            }
        },
    }
}

fn hero_content(hero: &Hero) -> Markup {
    html! {
        p class="greeting" { (hero.greeting) }
        h1 { (hero.name) "." }
        h2 { (hero.role) "." }
        p class="bio" { (hero.bio) }
        div class="socials" {
            @for (index, social) in hero.socials.iter().enumerate() {
                (social_link(index, social, false))
            }
        }
    }
}

fn section_heading(heading: &SectionHeading) -> Markup {
    html! {
        div class="heading" {
            span class="mono" { (heading.number) }
            h3 { (heading.title) }
            div class="rule" {}
        }
    }
}

fn social_link(index: usize, social: &SocialLink, new_tab: bool) -> Markup {
    html! {
        @if new_tab {
            a class="social" data-key=(index) href=(social.href) aria-label=(social.label)
                target="_blank" rel="noopener noreferrer" {
                span aria-hidden="true" { (icon_glyph(social.icon)) }
            }
        } @else {
            a class="social" data-key=(index) href=(social.href) aria-label=(social.label) {
                span aria-hidden="true" { (icon_glyph(social.icon)) }
            }
        }
    }
}

fn footer(footer: &Footer) -> Markup {
    html! {
        footer {
            div {
                p class="brand" { (footer.name) span class="dot" { "." } }
                p class="muted" { (footer.role) }
            }
            div class="socials" {
                @for (index, social) in footer.socials.iter().enumerate() {
                    (social_link(index, social, true))
                }
            }
            p class="muted mono" { (footer.copyright) }
        }
    }
}

/// Short text stand-in for each icon.
pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Github => "GH",
        Icon::Linkedin => "in",
        Icon::Mail => "@",
        Icon::Link => "↗",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Portfolio;

    fn render_default() -> String {
        let portfolio = Portfolio {
            copyright_year: Some(2025),
            ..Portfolio::default()
        };
        render(&Page::build(&portfolio), &portfolio.reveal)
    }

    #[test]
    fn document_has_sections_and_anchors() {
        let html = render_default();
        assert!(html.starts_with("<!DOCTYPE html>"));
        for anchor in ["about", "projects", "skills", "contact"] {
            assert!(html.contains(&format!("id=\"{anchor}\"")), "missing {anchor}");
        }
        assert!(html.contains("href=\"#about\""));
        assert!(html.contains("© 2025 All rights reserved."));
    }

    #[test]
    fn every_block_is_revealable() {
        let html = render_default();
        assert_eq!(html.matches("<div class=\"reveal\"").count(), 5);
        assert!(html.contains("rootMargin: '-50px'"));
        assert!(html.contains("transition-duration: 600ms"));
    }

    #[test]
    fn footer_links_open_in_new_tab() {
        let html = render_default();
        assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 3);
        assert!(html.contains("aria-label=\"LinkedIn\""));
    }

    #[test]
    fn text_is_escaped() {
        let portfolio = Portfolio {
            name: "<script>alert(1)</script>".to_string(),
            ..Portfolio::default()
        };
        let html = render(&Page::build(&portfolio), &portfolio.reveal);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
