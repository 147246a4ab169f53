use std::collections::HashMap;

use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

use super::dom;
use crate::motion::scroll::BACKDROPS;

/// Every page element the engines animate, by what it does on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Navbar,
    HeroLayer,
    FloatingLogo,
    HeroContent,
    HeroCta,
    FeaturedSection,
    FeaturedBackground,
    FloatingCard,
    AboutSection,
    NavLink,
    Section,
    AnchoredSection,
    ContactItem,
    HoverCard,
    Button,
}

impl Role {
    pub const ALL: [Role; 15] = [
        Role::Navbar,
        Role::HeroLayer,
        Role::FloatingLogo,
        Role::HeroContent,
        Role::HeroCta,
        Role::FeaturedSection,
        Role::FeaturedBackground,
        Role::FloatingCard,
        Role::AboutSection,
        Role::NavLink,
        Role::Section,
        Role::AnchoredSection,
        Role::ContactItem,
        Role::HoverCard,
        Role::Button,
    ];

    pub fn selector(self) -> &'static str {
        match self {
            Role::Navbar => "#navbar",
            Role::HeroLayer => ".parallax-layer",
            Role::FloatingLogo => ".floating-logo",
            Role::HeroContent => ".hero-content",
            Role::HeroCta => ".hero-cta",
            Role::FeaturedSection => ".featured-waffle",
            Role::FeaturedBackground => ".waffle-background",
            Role::FloatingCard => ".floating-card",
            Role::AboutSection => ".about-section",
            Role::NavLink => ".nav-link",
            Role::Section => "section",
            Role::AnchoredSection => "section[id]",
            Role::ContactItem => ".contact-item",
            Role::HoverCard => ".menu-category, .signature-card, .handcrafted-card",
            Role::Button => ".btn",
        }
    }

    /// Roles bound to every matching element rather than the first one.
    pub fn is_group(self) -> bool {
        matches!(
            self,
            Role::HeroLayer
                | Role::FloatingCard
                | Role::NavLink
                | Role::Section
                | Role::AnchoredSection
                | Role::ContactItem
                | Role::HoverCard
                | Role::Button
        )
    }
}

/// Elements looked up once after the page has rendered. A role with nothing bound is
/// simply skipped by every effect that uses it.
pub struct ElementRoster {
    bound: HashMap<Role, Vec<HtmlElement>>,
    backdrops: Vec<(HtmlElement, f64)>,
}

impl ElementRoster {
    pub fn bind(document: &Document) -> Result<Self, JsValue> {
        let mut bound = HashMap::with_capacity(Role::ALL.len());
        for role in Role::ALL {
            let elements = if role.is_group() {
                dom::select_all(document, role.selector())?
            } else {
                dom::select_one(document, role.selector()).into_iter().collect()
            };
            if elements.is_empty() {
                debug!("{:?} ({}) not on this page", role, role.selector());
            }
            bound.insert(role, elements);
        }

        let backdrops = BACKDROPS
            .iter()
            .filter_map(|backdrop| {
                dom::select_one(document, backdrop.selector).map(|element| (element, backdrop.speed))
            })
            .collect();

        Ok(Self { bound, backdrops })
    }

    pub fn one(&self, role: Role) -> Option<&HtmlElement> {
        self.all(role).first()
    }

    pub fn all(&self, role: Role) -> &[HtmlElement] {
        self.bound.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sections with a scrolling background and their speed.
    pub fn backdrops(&self) -> &[(HtmlElement, f64)] {
        &self.backdrops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_a_selector() {
        for role in Role::ALL {
            assert!(!role.selector().is_empty(), "{:?}", role);
        }
    }

    #[test]
    fn single_roles_are_not_groups() {
        for role in [Role::Navbar, Role::FloatingLogo, Role::HeroContent, Role::HeroCta] {
            assert!(!role.is_group());
        }
        assert!(Role::FloatingCard.is_group());
    }
}
