//! Static content for the page: who this is, where the nav goes, and what
//! gets linked.

pub const OWNER_NAME: &str = "Mahbub Rahman";
pub const OWNER_INITIALS: &str = "MR";
pub const OWNER_TITLE: &str = "Video Editor & Graphics Designer";
pub const CONTACT_EMAIL: &str = "mahbub@example.com";

/// Scroll offset past which the navbar gets its solid background.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::About,
        Section::Portfolio,
        Section::Contact,
    ];

    /// The element id the section is rendered with.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Portfolio => "portfolio",
            Section::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Contact",
        }
    }

    /// Fraction of the section that must be on screen before it fades in.
    pub fn reveal_threshold(self) -> f64 {
        match self {
            Section::Portfolio => 0.2,
            _ => 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ResumeLink {
    pub href: &'static str,
    pub file_name: &'static str,
}

pub const RESUME: ResumeLink = ResumeLink {
    href: "/resume.pdf",
    file_name: "Mahbub_Rahman_Resume.pdf",
};

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Percent, 0 to 100.
    pub level: u8,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "Adobe After Effects",
        level: 95,
    },
    Skill {
        name: "Premiere Pro",
        level: 90,
    },
    Skill {
        name: "Photoshop",
        level: 85,
    },
    Skill {
        name: "Adobe Illustrator",
        level: 80,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "Facebook",
        url: "https://facebook.com/mahbubrahman",
        description: "Connect on Facebook",
        accent: "hover:text-cyber-blue",
    },
    SocialLink {
        name: "Instagram",
        url: "https://instagram.com/mahbubrahman",
        description: "Visual content & updates",
        accent: "hover:text-cyber-pink",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://linkedin.com/in/mahbubrahman",
        description: "Professional network",
        accent: "hover:text-cyber-purple",
    },
    SocialLink {
        name: "Behance",
        url: "https://behance.net/mahbubrahman",
        description: "Creative portfolio",
        accent: "hover:text-cyber-yellow",
    },
    SocialLink {
        name: "YouTube",
        url: "https://youtube.com/@mahbubrahman",
        description: "Video content & tutorials",
        accent: "hover:text-cyber-blue",
    },
    SocialLink {
        name: "X (Twitter)",
        url: "https://x.com/mahbubrahman",
        description: "Latest updates & thoughts",
        accent: "hover:text-cyber-purple",
    },
];

pub const QUICK_INFO: &[(&str, &str)] = &[
    ("Response Time", "Within 24 hours"),
    ("Availability", "Open for projects"),
    ("Location", "Worldwide (Remote)"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(51.0));
    }

    #[test]
    fn test_section_ids_are_unique() {
        let mut ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
        assert_eq!(Section::Hero.nav_label(), "Home");
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        assert!(!SKILLS.is_empty());
        for skill in SKILLS {
            assert!(skill.level <= 100, "{} out of range", skill.name);
        }
    }

    #[test]
    fn test_social_links_are_https() {
        for link in SOCIAL_LINKS {
            assert!(link.url.starts_with("https://"), "{} is not https", link.name);
        }
    }

    #[test]
    fn test_resume_link() {
        assert!(RESUME.href.ends_with(".pdf"));
        assert!(RESUME.file_name.ends_with(".pdf"));
        assert!(!RESUME.file_name.contains(' '));
    }
}
