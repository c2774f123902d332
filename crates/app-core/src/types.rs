//! Domain vocabulary shared by the core and the web frontend.
//!
//! Every enumeration is a closed set that also exists as a short string
//! token. Tokens name silhouette assets (`m_std`), DOM `data-*` attributes
//! and control element ids; parsing a token back is the only fallible
//! conversion in the crate.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A token that matched no variant of the target enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} token {token:?}")]
pub struct ParseTokenError {
    pub kind: &'static str,
    pub token: String,
}

impl ParseTokenError {
    fn new(kind: &'static str, token: &str) -> Self {
        Self {
            kind,
            token: token.to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    M,
    F,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::M, Gender::F];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::M => "m",
            Gender::F => "f",
        }
    }
}

impl FromStr for Gender {
    type Err = ParseTokenError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" => Ok(Gender::M),
            "f" => Ok(Gender::F),
            _ => Err(ParseTokenError::new("gender", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyType {
    Slim,
    Std,
    Bulk,
}

impl BodyType {
    pub const ALL: [BodyType; 3] = [BodyType::Slim, BodyType::Std, BodyType::Bulk];

    pub fn as_str(self) -> &'static str {
        match self {
            BodyType::Slim => "slim",
            BodyType::Std => "std",
            BodyType::Bulk => "bulk",
        }
    }
}

impl FromStr for BodyType {
    type Err = ParseTokenError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slim" => Ok(BodyType::Slim),
            "std" => Ok(BodyType::Std),
            "bulk" => Ok(BodyType::Bulk),
            _ => Err(ParseTokenError::new("body type", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyView {
    Front,
    Back,
}

impl BodyView {
    pub const ALL: [BodyView; 2] = [BodyView::Front, BodyView::Back];

    pub fn as_str(self) -> &'static str {
        match self {
            BodyView::Front => "front",
            BodyView::Back => "back",
        }
    }
}

impl FromStr for BodyView {
    type Err = ParseTokenError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front" => Ok(BodyView::Front),
            "back" => Ok(BodyView::Back),
            _ => Err(ParseTokenError::new("view", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TattooSize {
    S,
    M,
    L,
}

impl TattooSize {
    pub const ALL: [TattooSize; 3] = [TattooSize::S, TattooSize::M, TattooSize::L];

    pub fn as_str(self) -> &'static str {
        match self {
            TattooSize::S => "s",
            TattooSize::M => "m",
            TattooSize::L => "l",
        }
    }
}

impl FromStr for TattooSize {
    type Err = ParseTokenError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" => Ok(TattooSize::S),
            "m" => Ok(TattooSize::M),
            "l" => Ok(TattooSize::L),
            _ => Err(ParseTokenError::new("size", s)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TattooStyle {
    Linework,
    Blackwork,
    Minimal,
    Japan,
}

impl TattooStyle {
    pub const ALL: [TattooStyle; 4] = [
        TattooStyle::Linework,
        TattooStyle::Blackwork,
        TattooStyle::Minimal,
        TattooStyle::Japan,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TattooStyle::Linework => "linework",
            TattooStyle::Blackwork => "blackwork",
            TattooStyle::Minimal => "minimal",
            TattooStyle::Japan => "japan",
        }
    }
}

impl FromStr for TattooStyle {
    type Err = ParseTokenError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linework" => Ok(TattooStyle::Linework),
            "blackwork" => Ok(TattooStyle::Blackwork),
            "minimal" => Ok(TattooStyle::Minimal),
            "japan" => Ok(TattooStyle::Japan),
            _ => Err(ParseTokenError::new("style", s)),
        }
    }
}

impl fmt::Display for TattooStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Arm,
    Leg,
    Back,
    Chest,
    Neck,
    Other,
}

impl BodyPart {
    pub const ALL: [BodyPart; 6] = [
        BodyPart::Arm,
        BodyPart::Leg,
        BodyPart::Back,
        BodyPart::Chest,
        BodyPart::Neck,
        BodyPart::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BodyPart::Arm => "arm",
            BodyPart::Leg => "leg",
            BodyPart::Back => "back",
            BodyPart::Chest => "chest",
            BodyPart::Neck => "neck",
            BodyPart::Other => "other",
        }
    }
}

impl FromStr for BodyPart {
    type Err = ParseTokenError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "arm" => Ok(BodyPart::Arm),
            "leg" => Ok(BodyPart::Leg),
            "back" => Ok(BodyPart::Back),
            "chest" => Ok(BodyPart::Chest),
            "neck" => Ok(BodyPart::Neck),
            "other" => Ok(BodyPart::Other),
            _ => Err(ParseTokenError::new("body part", s)),
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry. Defined once at startup, never mutated.
#[derive(Clone, Copy, Debug)]
pub struct TattooDesign {
    pub id: &'static str,
    pub name: &'static str,
    pub style: TattooStyle,
    pub tags: &'static [&'static str],
}
