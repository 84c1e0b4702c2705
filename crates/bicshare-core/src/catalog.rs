//! Upload metadata vocabulary
//!
//! Servers, exposure and expiration choices, and the per-server tag catalog.
//! Every choice has a wire value (sent in the form) and a display label.
//! `as_str` is the only wire table; `from_wire` searches `ALL` through it.

/// Game server a character belongs to.
///
/// The first variant is the default selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Server {
    #[default]
    Nwn,
    Sinfar,
}

impl Server {
    pub const ALL: [Server; 2] = [Server::Nwn, Server::Sinfar];

    pub fn as_str(&self) -> &'static str {
        match self {
            Server::Nwn => "nwn",
            Server::Sinfar => "sinfar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Server::Nwn => "NWN Diamond",
            Server::Sinfar => "Sinfar",
        }
    }

    /// Parse a wire value (as produced by a `<select>` change).
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Visibility of an uploaded character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Exposure {
    #[default]
    Public,
    Unlisted,
}

impl Exposure {
    pub const ALL: [Exposure; 2] = [Exposure::Public, Exposure::Unlisted];

    pub fn as_str(&self) -> &'static str {
        match self {
            Exposure::Public => "public",
            Exposure::Unlisted => "unlisted",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Exposure::Public => "Public",
            Exposure::Unlisted => "Unlisted",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == value)
    }
}

/// How long the server keeps an uploaded character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Expiration {
    #[default]
    Never,
    TenMinutes,
    OneHour,
    OneDay,
    OneWeek,
    OneMonth,
    SixMonths,
    OneYear,
}

impl Expiration {
    pub const ALL: [Expiration; 8] = [
        Expiration::Never,
        Expiration::TenMinutes,
        Expiration::OneHour,
        Expiration::OneDay,
        Expiration::OneWeek,
        Expiration::OneMonth,
        Expiration::SixMonths,
        Expiration::OneYear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Expiration::Never => "never",
            Expiration::TenMinutes => "10-minutes",
            Expiration::OneHour => "1-hours",
            Expiration::OneDay => "1-days",
            Expiration::OneWeek => "1-weeks",
            Expiration::OneMonth => "1-months",
            Expiration::SixMonths => "6-months",
            Expiration::OneYear => "1-years",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Expiration::Never => "Never",
            Expiration::TenMinutes => "10 Minutes",
            Expiration::OneHour => "1 Hour",
            Expiration::OneDay => "1 Day",
            Expiration::OneWeek => "1 Week",
            Expiration::OneMonth => "1 Month",
            Expiration::SixMonths => "6 Months",
            Expiration::OneYear => "1 Year",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == value)
    }
}

/// One of the three independent tag groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagCategory {
    Type,
    Features,
    Purpose,
}

impl TagCategory {
    pub const ALL: [TagCategory; 3] = [TagCategory::Type, TagCategory::Features, TagCategory::Purpose];

    pub fn as_str(&self) -> &'static str {
        match self {
            TagCategory::Type => "type",
            TagCategory::Features => "features",
            TagCategory::Purpose => "purpose",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }

    /// Multipart field name carrying this category's comma-joined tags
    pub fn field_name(&self) -> &'static str {
        match self {
            TagCategory::Type => "tags-type",
            TagCategory::Features => "tags-features",
            TagCategory::Purpose => "tags-purpose",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            TagCategory::Type => "(Optional) Build Type:",
            TagCategory::Features => "(Optional) Build Features:",
            TagCategory::Purpose => "(Optional) Build Purpose:",
        }
    }
}

const BUILD_TYPES: &[&str] = &[
    "Offensive Melee",
    "Defensive Melee",
    "Offensive Ranged",
    "Defensive Ranged",
    "Stealth",
    "Tank",
    "Nuke Caster",
    "Control Caster",
    "Support Caster",
    "Healer",
    "Arcane Spellsword",
    "Divine Spellsword",
    "Shapeshifter",
];

const BUILD_FEATURES: &[&str] = &["Stunning Fist", "Terrifying Rage", "Bard Song", "Stun Resistant"];

const NWN_PURPOSES: &[&str] = &["PvP", "PvE", "Roleplaying"];

const SINFAR_PURPOSES: &[&str] = &[
    "PvP",
    "PvP: Open World",
    "PvP: CTF",
    "PvP: Duel",
    "PvE",
    "PvE: Farming",
    "PvE: Shard Run",
    "Roleplaying",
];

/// Static server → category → ordered tag names mapping.
pub struct TagCatalog;

impl TagCatalog {
    /// Valid tags for a server and category, in display order.
    pub fn tags(server: Server, category: TagCategory) -> &'static [&'static str] {
        match (server, category) {
            (_, TagCategory::Type) => BUILD_TYPES,
            (_, TagCategory::Features) => BUILD_FEATURES,
            (Server::Nwn, TagCategory::Purpose) => NWN_PURPOSES,
            (Server::Sinfar, TagCategory::Purpose) => SINFAR_PURPOSES,
        }
    }

    pub fn contains(server: Server, category: TagCategory, name: &str) -> bool {
        Self::tags(server, category).contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_first_options() {
        assert_eq!(Server::default(), Server::ALL[0]);
        assert_eq!(Exposure::default(), Exposure::ALL[0]);
        assert_eq!(Expiration::default(), Expiration::ALL[0]);
    }

    fn assert_wire_table<T: Copy + PartialEq + std::fmt::Debug>(
        all: &[T],
        as_str: impl Fn(&T) -> &'static str,
        from_wire: impl Fn(&str) -> Option<T>,
    ) {
        for (i, value) in all.iter().enumerate() {
            assert_eq!(from_wire(as_str(value)), Some(*value));
            assert!(
                all[..i].iter().all(|earlier| as_str(earlier) != as_str(value)),
                "duplicate wire value {}",
                as_str(value)
            );
        }
        assert_eq!(from_wire("unknown"), None);
    }

    #[test]
    fn wire_values_parse_back() {
        assert_wire_table(&Server::ALL, |s| s.as_str(), Server::from_wire);
        assert_wire_table(&Exposure::ALL, |e| e.as_str(), Exposure::from_wire);
        assert_wire_table(&Expiration::ALL, |e| e.as_str(), Expiration::from_wire);
        assert_wire_table(&TagCategory::ALL, |c| c.as_str(), TagCategory::from_wire);
    }

    #[test]
    fn wire_values_match_form_contract() {
        assert_eq!(Server::Sinfar.as_str(), "sinfar");
        assert_eq!(Exposure::Unlisted.as_str(), "unlisted");
        assert_eq!(Expiration::SixMonths.as_str(), "6-months");
        assert_eq!(Expiration::OneHour.as_str(), "1-hours");
    }

    #[test]
    fn purpose_tags_differ_by_server() {
        assert_eq!(TagCatalog::tags(Server::Nwn, TagCategory::Purpose).len(), 3);
        assert_eq!(TagCatalog::tags(Server::Sinfar, TagCategory::Purpose).len(), 8);
        assert!(TagCatalog::contains(Server::Sinfar, TagCategory::Purpose, "PvP: CTF"));
        assert!(!TagCatalog::contains(Server::Nwn, TagCategory::Purpose, "PvP: CTF"));
    }

    #[test]
    fn field_names_match_form_contract() {
        let names: Vec<_> = TagCategory::ALL.iter().map(|c| c.field_name()).collect();
        assert_eq!(names, vec!["tags-type", "tags-features", "tags-purpose"]);
    }
}
