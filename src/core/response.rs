//! Responses returned by the version resource for a path prefix.
//!
//! The server does not send a discriminant: an intermediate level is an object
//! with an `options` list, a terminal level is any other object. That probing
//! happens exactly once, in [`LevelResponse::decode`], and everything past the
//! network boundary matches on [`LevelResponse`].
//!
//! # Public API
//! - [`LevelResponse`]: `Options` or `Resolved`
//! - [`OptionsLevel`]: prompt message plus the legal next values
//! - [`ResolvedSelection`]: the terminal object, with typed [`Game`] access

use crate::core::error::{Result, SelectorError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsLevel {
    #[serde(default)]
    pub message: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedSelection {
    fields: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LevelResponse {
    Options(OptionsLevel),
    Resolved(ResolvedSelection),
}

impl LevelResponse {
    /// Decode a response body fetched from `route`.
    pub fn decode(route: &str, body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| SelectorError::malformed(route, format!("invalid JSON: {e}")))?;
        Self::from_value(route, value)
    }

    pub fn from_value(route: &str, value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) if fields.contains_key("options") => {
                let level: OptionsLevel = serde_json::from_value(Value::Object(fields))
                    .map_err(|e| SelectorError::malformed(route, e.to_string()))?;
                Ok(Self::Options(level))
            }
            Value::Object(fields) => Ok(Self::Resolved(ResolvedSelection::new(fields))),
            // The top of the hierarchy may be served as a bare list of names.
            Value::Array(items) => {
                let options = items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => Ok(s),
                        other => Err(SelectorError::malformed(
                            route,
                            format!("expected a string option, got {other}"),
                        )),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Self::Options(OptionsLevel {
                    message: String::new(),
                    options,
                }))
            }
            other => Err(SelectorError::malformed(
                route,
                format!("expected an object or a list, got {other}"),
            )),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn as_options(&self) -> Option<&OptionsLevel> {
        match self {
            Self::Options(level) => Some(level),
            Self::Resolved(_) => None,
        }
    }

    pub fn as_resolved(&self) -> Option<&ResolvedSelection> {
        match self {
            Self::Resolved(resolved) => Some(resolved),
            Self::Options(_) => None,
        }
    }
}

impl ResolvedSelection {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Typed game description, when the payload carries one.
    pub fn game(&self) -> Option<Game> {
        let game = self.fields.get("game")?;
        match serde_json::from_value(game.clone()) {
            Ok(game) => Some(game),
            Err(e) => {
                log::debug!("Resolved payload has an unrecognized game: {e}");
                None
            }
        }
    }

    /// One-line rendering for terminal output.
    pub fn summary(&self) -> String {
        if let Some(game) = self.game() {
            return format!("{} {}", game.identifier(), game.version_identifier());
        }

        let mut out = String::new();
        for (i, (key, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            match value {
                Value::String(s) => {
                    let _ = write!(out, "{key}={s}");
                }
                other => {
                    let _ = write!(out, "{key}={other}");
                }
            }
        }
        out
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.fields)?)
    }
}

/// A runnable game build, as produced by the version API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Game {
    MinecraftJava(MinecraftJava),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinecraftJava {
    pub version: String,
    pub loader: JavaRuntime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JavaRuntime {
    Vanilla,
    Fabric { loader: String, launcher: String },
    Paper { build: u16 },
}

impl Game {
    pub fn identifier(&self) -> &str {
        match self {
            Game::MinecraftJava(_) => "minecraft-java",
        }
    }

    pub fn version_identifier(&self) -> String {
        match self {
            Game::MinecraftJava(java) => match &java.loader {
                JavaRuntime::Vanilla => format!("{}-vanilla", java.version),
                JavaRuntime::Fabric { loader, launcher } => {
                    format!("{}-fabric-{loader}-{launcher}", java.version)
                }
                JavaRuntime::Paper { build } => format!("{}-paper-{build}", java.version),
            },
        }
    }
}
