use std::fmt;

/// Logical page region, one per anchored block of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Experience,
    Projects,
    Services,
    Contact,
}

impl SectionId {
    /// Fixed page order, top to bottom
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Services,
        SectionId::Contact,
    ];

    /// Anchor name the page markup uses for this section
    pub const fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Services => "services",
            SectionId::Contact => "contact",
        }
    }

    /// Position within `ALL`
    pub const fn index(self) -> usize {
        match self {
            SectionId::Hero => 0,
            SectionId::About => 1,
            SectionId::Experience => 2,
            SectionId::Projects => 3,
            SectionId::Services => 4,
            SectionId::Contact => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<SectionId> {
        Self::ALL.get(index).copied()
    }

    /// Resolve an anchor name; unknown names yield `None`
    pub fn from_anchor(name: &str) -> Option<SectionId> {
        Self::ALL.iter().copied().find(|s| s.anchor() == name)
    }

    /// Human label used by the navbar and footer
    pub const fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Services => "Services",
            SectionId::Contact => "Contact",
        }
    }
}

impl Default for SectionId {
    fn default() -> Self {
        SectionId::Hero
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_order() {
        for (i, section) in SectionId::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(SectionId::from_index(i), Some(*section));
        }
        assert_eq!(SectionId::from_index(6), None);
    }

    #[test]
    fn test_anchor_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
        }
    }

    #[test]
    fn test_unknown_anchor() {
        assert_eq!(SectionId::from_anchor("blog"), None);
        assert_eq!(SectionId::from_anchor(""), None);
        assert_eq!(SectionId::from_anchor("Hero"), None);
    }

    #[test]
    fn test_default_is_hero() {
        assert_eq!(SectionId::default(), SectionId::Hero);
        assert_eq!(format!("{}", SectionId::Projects), "projects");
    }
}
