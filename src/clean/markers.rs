//! Text marker matching used by the boundary heuristics.

/// How a [`MarkerSet`] compares markers against element text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchMode {
    /// Text starts with a marker, ignoring case
    PrefixIgnoreCase,
    /// Text contains a marker verbatim
    Contains,
}

/// A set of literal markers matched against element text.
#[derive(Debug, Clone)]
pub struct MarkerSet {
    markers: Vec<String>,
    mode: MatchMode,
}

impl MarkerSet {
    /// Match text that starts with any marker, case-insensitively.
    pub fn prefix_ignore_case<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            markers: markers
                .into_iter()
                .map(|m| m.as_ref().to_lowercase())
                .collect(),
            mode: MatchMode::PrefixIgnoreCase,
        }
    }

    /// Match text that contains any marker, case-sensitively.
    pub fn contains<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            markers: markers.into_iter().map(|m| m.as_ref().to_string()).collect(),
            mode: MatchMode::Contains,
        }
    }

    /// Check whether `text` matches any marker. An empty set matches nothing.
    pub fn matches(&self, text: &str) -> bool {
        if self.markers.is_empty() {
            return false;
        }
        match self.mode {
            MatchMode::PrefixIgnoreCase => {
                let lower = text.to_lowercase();
                self.markers.iter().any(|m| lower.starts_with(m.as_str()))
            }
            MatchMode::Contains => self.markers.iter().any(|m| text.contains(m.as_str())),
        }
    }

    /// Check if the set has no markers.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
