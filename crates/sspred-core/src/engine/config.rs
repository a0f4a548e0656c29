use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("At least one prediction method must be selected")]
    NoMethods,
    #[error("Unknown prediction method '{0}' (expected 'chou-fasman' or 'gor')")]
    UnknownMethod(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Propensity-table sliding windows with overlap resolution.
    ChouFasman,
    /// Simplified context-window scoring.
    Gor,
}

impl Method {
    pub const fn label(self) -> &'static str {
        match self {
            Method::ChouFasman => "Chou-Fasman",
            Method::Gor => "GOR",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Method::ChouFasman => "chou-fasman",
            Method::Gor => "gor",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Method {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chou-fasman" => Ok(Method::ChouFasman),
            "gor" => Ok(Method::Gor),
            _ => Err(ConfigError::UnknownMethod(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionConfig {
    pub methods: Vec<Method>,
    pub propensity_table_path: Option<PathBuf>,
    pub context_table_path: Option<PathBuf>,
}

#[derive(Default)]
pub struct PredictionConfigBuilder {
    methods: Vec<Method>,
    propensity_table_path: Option<PathBuf>,
    context_table_path: Option<PathBuf>,
}

impl PredictionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }
    pub fn methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods.extend(methods);
        self
    }
    pub fn propensity_table_path(mut self, path: Option<PathBuf>) -> Self {
        self.propensity_table_path = path;
        self
    }
    pub fn context_table_path(mut self, path: Option<PathBuf>) -> Self {
        self.context_table_path = path;
        self
    }

    /// Repeated methods are kept once, in first-seen order.
    pub fn build(self) -> Result<PredictionConfig, ConfigError> {
        let mut methods = Vec::with_capacity(self.methods.len());
        for method in self.methods {
            if !methods.contains(&method) {
                methods.push(method);
            }
        }
        if methods.is_empty() {
            return Err(ConfigError::NoMethods);
        }
        Ok(PredictionConfig {
            methods,
            propensity_table_path: self.propensity_table_path,
            context_table_path: self.context_table_path,
        })
    }
}
