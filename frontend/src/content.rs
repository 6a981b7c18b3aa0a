//! Static copy for the landing page. Tables are rendered in declaration order.

/// Every icon the page can draw. Resolved to SVG in `components::icon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Video,
    Palette,
    Smartphone,
    Zap,
    Users,
    TrendingUp,
    Instagram,
    Mail,
    Phone,
    Menu,
    Close,
    ArrowRight,
    Play,
    Aperture,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub features: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReasonItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
}

impl NavLink {
    /// Section id the link scrolls to: lowercased, first space replaced by `-`.
    pub fn anchor(&self) -> String {
        self.label.to_lowercase().replacen(' ', "-", 1)
    }
}

pub const SERVICES: &[ServiceItem] = &[
    ServiceItem {
        id: "video",
        title: "Video Production",
        description: "Cinematic storytelling that captures attention.",
        icon: Icon::Video,
        features: &["Promotional Videos", "Product & Service Shoots", "Corporate Videos", "Reels & Shorts"],
    },
    ServiceItem {
        id: "content",
        title: "Creative Content",
        description: "Scroll-stopping visuals for the modern feed.",
        icon: Icon::Zap,
        features: &["Ad Creatives", "Short & Long-form", "Branded Storytelling", "Visual Effects"],
    },
    ServiceItem {
        id: "brand",
        title: "Brand Identity",
        description: "Defining who you are with visual strategy.",
        icon: Icon::Palette,
        features: &["Brand Storytelling", "Moodboards", "Visual Identity", "Creative Direction"],
    },
    ServiceItem {
        id: "social",
        title: "Digital & Social",
        description: "Strategic planning for maximum engagement.",
        icon: Icon::Smartphone,
        features: &["Content Strategy", "Content Planning", "Digital Assets", "Trend Analysis"],
    },
];

pub const REASONS: &[ReasonItem] = &[
    ReasonItem {
        id: "quality",
        title: "High-Quality Output",
        description: "Every video, photo, or design is crafted with precision and cinematic quality.",
        icon: Icon::Video,
    },
    ReasonItem {
        id: "strategy",
        title: "Strategy + Creativity",
        description: "We build visuals that connect, convert, and communicate effectively.",
        icon: Icon::TrendingUp,
    },
    ReasonItem {
        id: "client",
        title: "Client-Focused",
        description: "Your brand vision becomes our mission. We deliver what aligns with your goals.",
        icon: Icon::Users,
    },
    ReasonItem {
        id: "modern",
        title: "Trend-Driven",
        description: "Everything is built to fit today\u{2019}s fast-moving digital world.",
        icon: Icon::Zap,
    },
];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Services" },
    NavLink { label: "Why Us" },
    NavLink { label: "Contact" },
];

pub const TICKER_WORDS: &[&str] = &[
    "Creative",
    "Bold",
    "Detail-Oriented",
    "Story-Driven",
    "Reliable",
    "Admox Media",
];

pub const HERO_SUBTITLE: &str = "Admox Media helps businesses communicate with clarity, style, and purpose. \
    We don't just make pretty visuals \u{2014} we build stories that convert.";

pub const VISION_QUOTE: &str =
    "Your vision, our creativity \u{2014} together, we create content that leaves an impact.";

/// One pass of the ticker strip, with a trailing separator so two copies
/// can be laid end to end.
pub fn ticker_line() -> String {
    let mut line = TICKER_WORDS.join(" \u{2022} ");
    line.push_str(" \u{2022} ");
    line
}

/// Words of a heading paired with whether they get the accent color.
/// Every third word starting from the second is highlighted.
pub fn heading_words(title: &str) -> Vec<(&str, bool)> {
    title
        .split(' ')
        .enumerate()
        .map(|(i, word)| (word, i % 3 == 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_keep_declaration_order() {
        let ids: Vec<_> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(ids, ["video", "content", "brand", "social"]);
        assert!(SERVICES.iter().all(|s| s.features.len() == 4));
        assert_eq!(SERVICES[0].features[3], "Reels & Shorts");
    }

    #[test]
    fn reasons_keep_declaration_order() {
        let ids: Vec<_> = REASONS.iter().map(|r| r.id).collect();
        assert_eq!(ids, ["quality", "strategy", "client", "modern"]);
        assert_eq!(REASONS[1].icon, Icon::TrendingUp);
    }

    #[test]
    fn nav_anchors_match_section_ids() {
        let anchors: Vec<_> = NAV_LINKS.iter().map(NavLink::anchor).collect();
        assert_eq!(anchors, ["services", "why-us", "contact"]);
    }

    #[test]
    fn hero_and_quote_copy_keep_their_dashes() {
        assert!(HERO_SUBTITLE.ends_with("pretty visuals \u{2014} we build stories that convert."));
        assert!(HERO_SUBTITLE.contains("purpose. We don't"));
        assert_eq!(
            VISION_QUOTE,
            "Your vision, our creativity \u{2014} together, we create content that leaves an impact."
        );
    }

    #[test]
    fn ticker_line_joins_words() {
        assert_eq!(
            ticker_line(),
            "Creative \u{2022} Bold \u{2022} Detail-Oriented \u{2022} Story-Driven \u{2022} Reliable \u{2022} Admox Media \u{2022} "
        );
    }

    #[test]
    fn heading_highlights_every_third_word_from_second() {
        let words = heading_words("Why Brands Choose Admox");
        assert_eq!(
            words,
            vec![("Why", false), ("Brands", true), ("Choose", false), ("Admox", false)]
        );
        let words = heading_words("one two three four five");
        let highlighted: Vec<_> = words.iter().filter(|(_, h)| *h).map(|(w, _)| *w).collect();
        assert_eq!(highlighted, ["two", "five"]);
    }
}
