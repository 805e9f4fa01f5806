use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::groups::Group;

/// The supported RFC 3526 strength classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum StrengthClass {
    Modp2048,
    Modp3072,
    Modp4096,
}

// Every spelling a config file or peer might use for a class.
static ALIASES: Lazy<HashMap<String, StrengthClass>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for class in StrengthClass::ALL {
        let bits = class.bits();
        let id = class.ike_group_id();
        m.insert(format!("{}", bits), class);
        m.insert(format!("modp{}", bits), class);
        m.insert(format!("modp-{}", bits), class);
        m.insert(format!("rfc3526-{}", bits), class);
        m.insert(format!("group{}", id), class);
        m.insert(format!("ike{}", id), class);
    }
    m
});

impl StrengthClass {
    pub const ALL: [StrengthClass; 3] = [Self::Modp2048, Self::Modp3072, Self::Modp4096];

    pub fn bits(self) -> u64 {
        match self {
            Self::Modp2048 => 2048,
            Self::Modp3072 => 3072,
            Self::Modp4096 => 4096,
        }
    }

    /// Diffie-Hellman group number assigned to this class for IKE.
    pub fn ike_group_id(self) -> u16 {
        match self {
            Self::Modp2048 => 14,
            Self::Modp3072 => 15,
            Self::Modp4096 => 16,
        }
    }

    /// Section of RFC 3526 defining this group.
    pub fn rfc_section(self) -> u8 {
        match self {
            Self::Modp2048 => 3,
            Self::Modp3072 => 4,
            Self::Modp4096 => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Modp2048 => "modp2048",
            Self::Modp3072 => "modp3072",
            Self::Modp4096 => "modp4096",
        }
    }

    pub fn from_bits(bits: u64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|class| class.bits() == bits)
            .ok_or(Error::UnsupportedBits(bits))
    }

    /// Fresh copy of this class's canonical group.
    pub fn group(self) -> Group {
        Group::from_strength(self)
    }
}

impl fmt::Display for StrengthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrengthClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ALIASES
            .get(&s.trim().to_ascii_lowercase())
            .copied()
            .ok_or_else(|| Error::UnknownStrength(s.to_string()))
    }
}

impl TryFrom<String> for StrengthClass {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<StrengthClass> for String {
    fn from(class: StrengthClass) -> Self {
        class.name().to_string()
    }
}
