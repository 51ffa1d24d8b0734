//! Top-level page sections and their fragment identifiers.

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum SectionId {
    #[default]
    Home,
    Projects,
    Services,
    About,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        Self::Home,
        Self::Projects,
        Self::Services,
        Self::About,
        Self::Contact,
    ];

    /// Element id and URL fragment for the section.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::Services => "services",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "الرئيسية",
            Self::Projects => "المشاريع",
            Self::Services => "الخدمات",
            Self::About => "من نحن",
            Self::Contact => "تواصل معنا",
        }
    }

    pub const fn nav_icon(self) -> &'static str {
        match self {
            Self::Home => "fas fa-home",
            Self::Projects => "fas fa-briefcase",
            Self::Services => "fas fa-cogs",
            Self::About => "fas fa-users",
            Self::Contact => "fas fa-envelope",
        }
    }

    /// Parses a fragment with or without its leading `#`. Matching is exact.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        Self::ALL.into_iter().find(|section| section.as_str() == id)
    }

    /// Alt+digit shortcut, `'1'` being the first section.
    pub fn from_shortcut(key: char) -> Option<Self> {
        let digit = key.to_digit(10)? as usize;
        digit
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn shortcut(self) -> char {
        let position = Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or(0);
        char::from(b'1' + position as u8)
    }
}

impl core::fmt::Display for SectionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
