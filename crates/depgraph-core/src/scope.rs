use serde::{Deserialize, Serialize};

use depgraph_util::errors::DepgraphError;

/// Maven-compatible dependency scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Compile,
    Provided,
    Runtime,
    System,
    Test,
}

impl Scope {
    pub const ALL: [Scope; 5] = [
        Scope::Compile,
        Scope::Provided,
        Scope::Runtime,
        Scope::System,
        Scope::Test,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Compile => "compile",
            Scope::Provided => "provided",
            Scope::Runtime => "runtime",
            Scope::System => "system",
            Scope::Test => "test",
        }
    }

    /// Whether a resolution in this scope pulls in a dependency declared
    /// with `other`.
    ///
    /// This is the classpath view Maven uses, not the literal pom scope:
    /// `compile` covers compile, provided and system; `runtime` covers
    /// compile and runtime; `test` covers everything.
    pub fn includes(&self, other: Scope) -> bool {
        match self {
            Scope::Compile => matches!(other, Scope::Compile | Scope::Provided | Scope::System),
            Scope::Runtime => matches!(other, Scope::Compile | Scope::Runtime),
            Scope::Provided => other == Scope::Provided,
            Scope::System => other == Scope::System,
            Scope::Test => true,
        }
    }
}

impl std::str::FromStr for Scope {
    type Err = DepgraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scope::ALL
            .into_iter()
            .find(|scope| scope.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                DepgraphError::config(format!(
                    "Unknown scope '{s}'. Expected one of: compile, provided, runtime, system, test"
                ))
            })
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
