//! Built-in portfolio used when no config file exists.

use crate::config::types::{
    Contact, Experience, Icon, Portfolio, Project, RevealSettings, SocialLink,
};

const RECIPE_DESC: &str =
    "SaaS platform leveraging OpenAI API to help writers generate blog posts 10x faster.";
const COMPONENT_DESC: &str =
    "A lightweight, accessible component library published on NPM for internal team use.";

fn project(title: &str, desc: &str, tags: &[&str]) -> Project {
    Project {
        title: title.to_string(),
        desc: desc.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        link: "#".to_string(),
    }
}

fn social(icon: Icon, href: &str, label: &str) -> SocialLink {
    SocialLink {
        icon,
        href: href.to_string(),
        label: label.to_string(),
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            name: "Chaimae Mardi".to_string(),
            role: "Junior Full-Stack Engineer".to_string(),
            bio: "I build accessible, pixel-perfect, and performant web experiences. \
                  Focused on scalable architecture and intuitive UX."
                .to_string(),
            copyright_year: None,
            skills: [
                "React",
                ".Net",
                "Node.js",
                "JavaFX",
                "ReactNative",
                "Django",
                "MongoDb",
                "Mysql",
            ]
            .iter()
            .map(|skill| skill.to_string())
            .collect(),
            socials: vec![
                social(Icon::Github, "https://github.com/chaimaa13534/", "GitHub"),
                social(
                    Icon::Linkedin,
                    "https://www.linkedin.com/in/chaimae-mardi/",
                    "LinkedIn",
                ),
                social(Icon::Mail, "mailto:chaimaamrd13@gmail.com", "Email"),
            ],
            // The two "Ecommerce Website" entries are distinct projects.
            projects: vec![
                project(
                    "Ecommerce Website",
                    "Real-time financial data visualization with WebSocket integration and complex filtering.",
                    &[".Net", "SqlServer"],
                ),
                project(
                    "Food Recipe App",
                    RECIPE_DESC,
                    &["Node.js", "ReactNative", "PostreSql"],
                ),
                project("Ecommerce Website", COMPONENT_DESC, &["Php", "MySql"]),
                project("Travel App", RECIPE_DESC, &["Node.js", "ReactJs", "MySql"]),
                project(
                    "Online Learning Platform",
                    COMPONENT_DESC,
                    &["Python", "Django", "Mysql"],
                ),
            ],
            experience: vec![Experience {
                company: "Master Oceans".to_string(),
                role: "Full Stack Web Development Internship".to_string(),
                period: "2025".to_string(),
                desc: "Architected the core design system and reduced build times by 50%."
                    .to_string(),
            }],
            contact: Contact {
                message: "I'm currently looking for new opportunities. Whether you have a \
                          question or just want to say hi, my inbox is always open."
                    .to_string(),
                ..Contact::default()
            },
            reveal: RevealSettings::default(),
        }
    }
}
