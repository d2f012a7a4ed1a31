//! Prompt synthesis: free text to an ordered batch of new elements.
//!
//! Dispatch is an ordered rule table. The prompt is lower-cased and checked
//! against each intent's keywords in turn; the first intent with any
//! keyword contained in the prompt wins. English and Romanian keywords are
//! both recognized.
//!
//! | Intent          | Keywords                                   |
//! |-----------------|--------------------------------------------|
//! | `Dashboard`     | saas, dashboard, panou, panel              |
//! | `Storefront`    | magazin, shop, ecommerce, store            |
//! | `SocialProfile` | social, network, profil, profile           |
//! | `Portfolio`     | portfolio, portofoliu, creativ             |
//! | `Login`         | login, conexiune, sign in                  |
//! | `Registration`  | register, signup, înregistr                |
//! | `Contact`       | contact, mesaj                             |
//! | `Landing`       | landing, homepage, acasa                   |
//! | `Form`          | form, formular, survey                     |
//!
//! Unmatched prompts produce a generic hero echoing the prompt, a button
//! and a caption. Synthesis is pure apart from advancing the id counter.

use crate::ids::{IdAllocator, IdScope};
use crate::templates::{instantiate_all, Blueprint};
use crate::ElementKind as K;
use crate::{Align, Animation, Element, FontSize, Shadow, WidthMode};

/// Page intents recognized in a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// SaaS product dashboard.
    Dashboard,
    /// Online shop.
    Storefront,
    /// Social network profile.
    SocialProfile,
    /// Creative portfolio.
    Portfolio,
    /// Sign-in form.
    Login,
    /// Account registration form.
    Registration,
    /// Contact form.
    Contact,
    /// Marketing landing page.
    Landing,
    /// Generic form or survey.
    Form,
}

/// Intents in match priority order with their keywords.
const RULES: &[(Intent, &[&str])] = &[
    (Intent::Dashboard, &["saas", "dashboard", "panou", "panel"]),
    (Intent::Storefront, &["magazin", "shop", "ecommerce", "store"]),
    (Intent::SocialProfile, &["social", "network", "profil", "profile"]),
    (Intent::Portfolio, &["portfolio", "portofoliu", "creativ"]),
    (Intent::Login, &["login", "conexiune", "sign in"]),
    (Intent::Registration, &["register", "signup", "înregistr"]),
    (Intent::Contact, &["contact", "mesaj"]),
    (Intent::Landing, &["landing", "homepage", "acasa"]),
    (Intent::Form, &["form", "formular", "survey"]),
];

/// Caption appended by the generic fallback.
pub const FALLBACK_CAPTION: &str = "Contextual components synthesized based on your prompt.";

/// First intent whose keywords appear in the prompt.
#[must_use]
pub fn classify(prompt: &str) -> Option<Intent> {
    let lowered = prompt.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(intent, _)| *intent)
}

impl Intent {
    /// The fixed page section this intent produces.
    #[must_use]
    pub fn blueprints(self) -> Vec<Blueprint> {
        match self {
            Self::Dashboard => vec![
                Blueprint::new(K::Navbar, "Neural SaaS Platform")
                    .blur(15)
                    .shadow(Shadow::Glow),
                Blueprint::new(K::Hero, "Accelerate Your Protocol")
                    .align(Align::Center)
                    .animation(Animation::SlideUp)
                    .gradient("linear-gradient(to right, #a855f7, #6366f1)"),
                Blueprint::new(K::Badge, "Live Performance: 99.9%")
                    .align(Align::Center)
                    .bg("rgba(168,85,247,0.1)"),
                Blueprint::new(K::Divider, ""),
                Blueprint::new(K::Card, "Total Revenue")
                    .bg("rgba(255,255,255,0.03)")
                    .shadow(Shadow::Soft),
                Blueprint::new(K::Card, "Active Nodes")
                    .bg("rgba(255,255,255,0.03)")
                    .shadow(Shadow::Soft),
                Blueprint::new(K::Text, "Neural Sync Progress")
                    .font_size(FontSize::Sm)
                    .align(Align::Center),
                Blueprint::new(K::Button, "Enter Console")
                    .radius(30)
                    .shadow(Shadow::Glow),
            ],
            Self::Storefront => vec![
                Blueprint::new(K::Navbar, "GLITCH STORE").shadow(Shadow::Soft),
                Blueprint::new(K::Hero, "Future Wear 2026")
                    .align(Align::Center)
                    .animation(Animation::ScalePop),
                Blueprint::new(
                    K::Image,
                    "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=800",
                )
                .radius(24)
                .shadow(Shadow::Medium),
                Blueprint::new(K::Card, "Quantum Watch - $299")
                    .align(Align::Center)
                    .blur(5),
                Blueprint::new(K::Button, "Add to Cart")
                    .bg("#6366f1")
                    .radius(12),
                Blueprint::new(K::Card, "Neural Glasses - $550")
                    .align(Align::Center)
                    .blur(5),
                Blueprint::new(K::Button, "Buy Now").bg("#a855f7").radius(12),
                Blueprint::new(K::Divider, ""),
                Blueprint::new(K::Text, "Free shipping across the Metaverse")
                    .align(Align::Center)
                    .font_size(FontSize::Xs),
            ],
            Self::SocialProfile => vec![
                Blueprint::new(K::Navbar, "Connect.AI").blur(10),
                Blueprint::new(
                    K::Image,
                    "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=200",
                )
                .radius(100)
                .width(WidthMode::Auto)
                .align(Align::Center)
                .shadow(Shadow::Glow),
                Blueprint::new(K::Text, "Agent Anderson")
                    .align(Align::Center)
                    .font_size(FontSize::Xl)
                    .color("#fff"),
                Blueprint::new(K::Badge, "Verified AI")
                    .align(Align::Center)
                    .bg("rgba(6,182,212,0.2)"),
                Blueprint::new(K::Divider, ""),
                Blueprint::new(K::Text, "Interests: Neural Webs, 4D Art, Byte-shifting")
                    .align(Align::Center)
                    .font_size(FontSize::Sm),
                Blueprint::new(K::Button, "Follow Protocol")
                    .radius(24)
                    .gradient("linear-gradient(to right, #0ea5e9, #22d3ee)"),
                Blueprint::new(K::Card, "Recent Broadcast").bg("rgba(255,255,255,0.02)"),
                Blueprint::new(K::Text, "Synthesizing new dimensions today. Stay tuned.")
                    .font_size(FontSize::Sm)
                    .padding(4),
            ],
            Self::Portfolio => vec![
                Blueprint::new(K::Navbar, "STUDIO.ARCH").shadow(Shadow::Glow),
                Blueprint::new(K::Hero, "Creative Synthesis")
                    .animation(Animation::FadeIn)
                    .align(Align::Left),
                Blueprint::new(K::Divider, ""),
                Blueprint::new(
                    K::Image,
                    "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800",
                )
                .radius(32),
                Blueprint::new(K::Text, "PROJECT ALPHA")
                    .font_size(FontSize::Lg)
                    .align(Align::Left),
                Blueprint::new(
                    K::Image,
                    "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?w=800",
                )
                .radius(32),
                Blueprint::new(K::Text, "PROJECT BETA")
                    .font_size(FontSize::Lg)
                    .align(Align::Left),
                Blueprint::new(K::Button, "Collaborate")
                    .radius(0)
                    .border("#fff")
                    .bg("transparent"),
            ],
            Self::Login => vec![
                Blueprint::new(K::Hero, "Welcome Back").animation(Animation::ScalePop),
                Blueprint::new(K::Text, "Access the Neural Hub")
                    .align(Align::Center)
                    .font_size(FontSize::Sm)
                    .opacity(60),
                Blueprint::new(K::Input, "Email address"),
                Blueprint::new(K::Input, "Password"),
                Blueprint::new(K::Toggle, "Remember my Signature"),
                Blueprint::new(K::Button, "Enter Protocol").shadow(Shadow::Glow),
                Blueprint::new(K::Text, "Forgot sequence?")
                    .align(Align::Center)
                    .font_size(FontSize::Xs)
                    .opacity(50),
            ],
            Self::Registration => vec![
                Blueprint::new(K::Hero, "Create Identity")
                    .gradient("linear-gradient(to right, #f97316, #facc15)"),
                Blueprint::new(K::Input, "Full Name"),
                Blueprint::new(K::Input, "Email"),
                Blueprint::new(K::Input, "Password"),
                Blueprint::new(K::Toggle, "Agree to Meta-Terms"),
                Blueprint::new(K::Button, "Manifest Account").radius(12),
            ],
            Self::Contact => vec![
                Blueprint::new(K::Hero, "Open Frequencies").align(Align::Center),
                Blueprint::new(K::Input, "Your name"),
                Blueprint::new(K::Input, "Email"),
                Blueprint::new(K::Textarea, "Your message..."),
                Blueprint::new(K::Button, "Transmit").shadow(Shadow::Soft),
            ],
            Self::Landing => vec![
                Blueprint::new(K::Navbar, "Aether UI").blur(15),
                Blueprint::new(K::Hero, "Design the Future")
                    .animation(Animation::SlideUp)
                    .gradient("linear-gradient(to right, #06b6d4, #3b82f6)"),
                Blueprint::new(K::Badge, "v2.0 Beta Live").align(Align::Center),
                Blueprint::new(K::Card, "Quantum Speed").blur(5),
                Blueprint::new(K::Card, "Neural Security").blur(5),
                Blueprint::new(K::Button, "Get Started")
                    .radius(32)
                    .shadow(Shadow::Glow),
            ],
            Self::Form => vec![
                Blueprint::new(K::Text, "Survey Protocol")
                    .font_size(FontSize::Xl)
                    .align(Align::Center),
                Blueprint::new(K::Input, "Your Name"),
                Blueprint::new(K::Select, "Experience Level"),
                Blueprint::new(K::Textarea, "Feedback / Notes"),
                Blueprint::new(K::Toggle, "Receive Updates"),
                Blueprint::new(K::Button, "Submit Data").radius(8),
            ],
        }
    }
}

/// Generic section for prompts no intent matches.
#[must_use]
pub fn fallback_blueprints(prompt: &str) -> Vec<Blueprint> {
    vec![
        Blueprint::new(K::Hero, prompt).animation(Animation::FadeIn),
        Blueprint::new(K::Button, "Initialize").shadow(Shadow::Soft),
        Blueprint::new(K::Text, FALLBACK_CAPTION)
            .align(Align::Center)
            .opacity(50),
    ]
}

/// Produce the elements for a prompt, drawing ids from `ids`.
pub fn synthesize(prompt: &str, ids: &mut IdAllocator) -> Vec<Element> {
    let intent = classify(prompt);
    tracing::debug!("Synthesis intent for {prompt:?}: {intent:?}");
    let blueprints = intent.map_or_else(|| fallback_blueprints(prompt), Intent::blueprints);
    instantiate_all(&blueprints, ids, IdScope::Synthesis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementKind;

    fn kinds(elements: &[Element]) -> Vec<ElementKind> {
        elements.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_dashboard_prompt() {
        let mut ids = IdAllocator::with_session("s");
        let out = synthesize("build me a dashboard", &mut ids);
        assert_eq!(
            kinds(&out),
            vec![
                K::Navbar,
                K::Hero,
                K::Badge,
                K::Divider,
                K::Card,
                K::Card,
                K::Text,
                K::Button
            ]
        );
    }

    #[test]
    fn test_unmatched_prompt_falls_back() {
        let mut ids = IdAllocator::with_session("s");
        let out = synthesize("xyzzy", &mut ids);
        assert_eq!(kinds(&out), vec![K::Hero, K::Button, K::Text]);
        assert_eq!(out[0].label, "xyzzy");
        assert_eq!(out[0].props.animation, Some(Animation::FadeIn));
        assert_eq!(out[1].label, "Initialize");
        assert_eq!(out[2].label, FALLBACK_CAPTION);
        assert_eq!(out[2].props.opacity, Some(50));
    }

    #[test]
    fn test_first_match_wins() {
        // "shop" and "contact" both match; storefront comes first
        assert_eq!(classify("shop with a contact page"), Some(Intent::Storefront));
        assert_eq!(classify("SaaS Panel"), Some(Intent::Dashboard));
        assert_eq!(classify("formular de contact"), Some(Intent::Contact));
    }

    #[test]
    fn test_romanian_keywords() {
        assert_eq!(classify("un magazin online"), Some(Intent::Storefront));
        assert_eq!(classify("pagina de ÎNREGISTRARE"), Some(Intent::Registration));
        assert_eq!(classify("pagina acasa"), Some(Intent::Landing));
    }

    #[test]
    fn test_ids_are_unique_and_advance_counter() {
        let mut ids = IdAllocator::with_session("s");
        let first = synthesize("login", &mut ids);
        let second = synthesize("login", &mut ids);
        assert_eq!(ids.issued(), 14);
        let mut all: Vec<_> = first.iter().chain(&second).map(|e| e.id.clone()).collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 14);
        assert!(first[0].id.as_str().starts_with("ai-s-"));
    }

    #[test]
    fn test_every_intent_is_reachable() {
        for (intent, keywords) in RULES {
            assert_eq!(classify(keywords[0]), Some(*intent));
            assert!(!intent.blueprints().is_empty());
        }
    }
}
