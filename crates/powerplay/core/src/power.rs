//! The powers contesting control of star systems.
//!
//! Powers are parsed from and serialized as their in-game display names
//! ("Li Yong-Rui"), which is how the fact source, the catalog data and the
//! configuration files spell them.

use core::str::FromStr;

/// A faction contesting control of star systems.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Power {
    #[strum(serialize = "Aisling Duval")]
    AislingDuval,
    #[strum(serialize = "Archon Delaine")]
    ArchonDelaine,
    #[strum(serialize = "Arissa Lavigny-Duval")]
    ArissaLavignyDuval,
    #[strum(serialize = "Denton Patreus")]
    DentonPatreus,
    #[strum(serialize = "Edmund Mahon")]
    EdmundMahon,
    #[strum(serialize = "Felicia Winters")]
    FeliciaWinters,
    #[strum(serialize = "Jerome Archer")]
    JeromeArcher,
    #[strum(serialize = "Li Yong-Rui")]
    LiYongRui,
    #[strum(serialize = "Nakato Kaine")]
    NakatoKaine,
    #[strum(serialize = "Pranav Antal")]
    PranavAntal,
    #[strum(serialize = "Yuri Grom")]
    YuriGrom,
    #[strum(serialize = "Zemina Torval")]
    ZeminaTorval,
}

impl Power {
    /// Short code used in badges ("★ LYR Bonus").
    pub const fn short_code(&self) -> &'static str {
        match self {
            Self::AislingDuval => "AD",
            Self::ArchonDelaine => "DEL",
            Self::ArissaLavignyDuval => "ALD",
            Self::DentonPatreus => "DP",
            Self::EdmundMahon => "EM",
            Self::FeliciaWinters => "FW",
            Self::JeromeArcher => "JA",
            Self::LiYongRui => "LYR",
            Self::NakatoKaine => "NK",
            Self::PranavAntal => "PA",
            Self::YuriGrom => "YG",
            Self::ZeminaTorval => "ZT",
        }
    }

    /// Parses a display name, also accepting a short code.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::from_str(name).ok().or_else(|| {
            <Self as strum::IntoEnumIterator>::iter()
                .find(|power| power.short_code().eq_ignore_ascii_case(name))
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Power {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_ref())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Power {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        Power::parse(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown power '{}'", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_in_game_name() {
        assert_eq!(Power::LiYongRui.to_string(), "Li Yong-Rui");
        assert_eq!(Power::ArissaLavignyDuval.as_ref(), "Arissa Lavigny-Duval");
    }

    #[test]
    fn parse_accepts_names_and_codes() {
        assert_eq!(Power::parse("Archon Delaine"), Some(Power::ArchonDelaine));
        assert_eq!(Power::parse("li yong-rui"), Some(Power::LiYongRui));
        assert_eq!(Power::parse(" LYR "), Some(Power::LiYongRui));
        assert_eq!(Power::parse("zt"), Some(Power::ZeminaTorval));
        assert_eq!(Power::parse("Emperor Hengist"), None);
        assert_eq!(Power::parse(""), None);
    }

    #[test]
    fn short_codes_are_unique() {
        use strum::IntoEnumIterator;
        let mut codes: Vec<_> = Power::iter().map(|p| p.short_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Power::iter().count());
    }
}
