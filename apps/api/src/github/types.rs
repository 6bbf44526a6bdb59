//! GitHub wire types and the normalized profile snapshot built from them.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Identity fields of a GitHub account. Only `login` is guaranteed.
///
/// Deserialized straight from `GET /users/{handle}`; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: Option<u32>,
    #[serde(default)]
    pub followers: Option<u32>,
    #[serde(default)]
    pub following: Option<u32>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

/// A repository as returned by `GET /users/{handle}/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    /// Only present when the request carries the `mercy-preview` media type.
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub html_url: String,
    pub languages_url: String,
}

/// Normalized repository entry inside a [`ProfileSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub forks: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: BTreeSet<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub html_url: String,
}

impl From<&GithubRepo> for Repository {
    fn from(repo: &GithubRepo) -> Self {
        Self {
            name: repo.name.clone(),
            description: repo.description.clone(),
            language: repo.language.clone(),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            topics: repo.topics.iter().flatten().cloned().collect(),
            updated_at: repo.updated_at,
            html_url: repo.html_url.clone(),
        }
    }
}

/// The deduplicated view of one developer's public activity.
///
/// Built fresh per request and never mutated afterwards. `repositories` keeps
/// the order GitHub returned; `languages` and `topics` are sets so the
/// rendered prompt is stable for identical inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub profile: Profile,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repositories: Vec<Repository>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: BTreeSet<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: BTreeSet<String>,
}

/// Snapshots posted back by clients may carry `null` where GitHub had no data.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
