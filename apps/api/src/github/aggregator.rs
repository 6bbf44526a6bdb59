//! Profile aggregation: merges the profile, repository list and per-repository
//! language breakdowns into one [`ProfileSnapshot`].
//!
//! Flow: fetch_profile (fatal) → list_repositories (fatal) →
//!       fan out fetch_languages (non-fatal per repository) → fold into sets.

use std::collections::BTreeSet;

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::github::types::{ProfileSnapshot, Repository};
use crate::github::{GithubClient, GithubError};

/// Aggregates a developer's public GitHub activity.
///
/// Language fetches run concurrently, at most `concurrency` in flight. Their
/// results are folded by this task alone, so the sets need no locking. A
/// repository whose language endpoint fails contributes nothing.
pub async fn aggregate_profile(
    client: &GithubClient,
    handle: &str,
    concurrency: usize,
) -> Result<ProfileSnapshot, GithubError> {
    let profile = client.fetch_profile(handle).await?;
    let raw_repos = client.list_repositories(handle).await?;

    // Fetch futures must not borrow `raw_repos`; handler futures are `Send`.
    let targets: Vec<(String, String)> = raw_repos
        .iter()
        .map(|repo| (repo.name.clone(), repo.languages_url.clone()))
        .collect();

    let breakdowns = stream::iter(targets)
        .map(|(name, url)| async move {
            let result = client.fetch_languages(&url).await;
            (name, result)
        })
        .buffer_unordered(concurrency.max(1))
        .collect::<Vec<_>>()
        .await;

    let mut languages = BTreeSet::new();
    for (name, result) in breakdowns {
        match result {
            Ok(breakdown) => languages.extend(breakdown.into_keys()),
            Err(e) => warn!(handle, repo = %name, error = %e, "skipping language breakdown"),
        }
    }

    let repositories: Vec<Repository> = raw_repos.iter().map(Repository::from).collect();
    let topics: BTreeSet<String> = repositories
        .iter()
        .flat_map(|repo| repo.topics.iter().cloned())
        .collect();

    info!(
        handle,
        repositories = repositories.len(),
        languages = languages.len(),
        topics = topics.len(),
        "aggregated GitHub profile"
    );

    Ok(ProfileSnapshot {
        profile,
        repositories,
        languages,
        topics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::path;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repo_json(server: &MockServer, name: &str, topics: &[&str]) -> serde_json::Value {
        serde_json::json!({
            "name": name,
            "description": format!("{name} description"),
            "language": "Rust",
            "stargazers_count": 1,
            "forks_count": 0,
            "topics": topics,
            "updated_at": "2024-05-01T12:00:00Z",
            "html_url": format!("https://github.com/octocat/{name}"),
            "languages_url": format!("{}/repos/octocat/{name}/languages", server.uri()),
        })
    }

    async fn mount_profile(server: &MockServer) {
        Mock::given(path("/users/octocat"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"login": "octocat"})),
            )
            .mount(server)
            .await;
    }

    async fn mount_languages(server: &MockServer, repo: &str, body: serde_json::Value) {
        Mock::given(path(format!("/repos/octocat/{repo}/languages")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_one_inaccessible_language_endpoint_is_skipped() {
        let server = MockServer::start().await;
        mount_profile(&server).await;

        let repos: Vec<_> = ["alpha", "beta", "gamma", "delta", "broken"]
            .iter()
            .map(|name| repo_json(&server, name, &["cli"]))
            .collect();
        Mock::given(path("/users/octocat/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(repos))
            .mount(&server)
            .await;

        mount_languages(&server, "alpha", serde_json::json!({"Rust": 1200})).await;
        mount_languages(&server, "beta", serde_json::json!({"Go": 400, "Rust": 10})).await;
        mount_languages(&server, "gamma", serde_json::json!({"TypeScript": 999})).await;
        mount_languages(&server, "delta", serde_json::json!({})).await;
        Mock::given(path("/repos/octocat/broken/languages"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = GithubClient::new(&server.uri(), None).unwrap();
        let snapshot = aggregate_profile(&client, "octocat", 4).await.unwrap();

        assert_eq!(snapshot.repositories.len(), 5);
        let languages: Vec<_> = snapshot.languages.iter().map(String::as_str).collect();
        assert_eq!(languages, vec!["Go", "Rust", "TypeScript"]);
    }

    #[tokio::test]
    async fn test_repository_order_is_preserved_and_topics_deduplicated() {
        let server = MockServer::start().await;
        mount_profile(&server).await;

        let repos = vec![
            repo_json(&server, "newest", &["web", "rust"]),
            repo_json(&server, "older", &["rust", "cli"]),
        ];
        Mock::given(path("/users/octocat/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(repos))
            .mount(&server)
            .await;
        mount_languages(&server, "newest", serde_json::json!({"Rust": 1})).await;
        mount_languages(&server, "older", serde_json::json!({"Rust": 1})).await;

        let client = GithubClient::new(&server.uri(), None).unwrap();
        let snapshot = aggregate_profile(&client, "octocat", 1).await.unwrap();

        assert_eq!(snapshot.repositories[0].name, "newest");
        assert_eq!(snapshot.repositories[1].name, "older");
        assert_eq!(snapshot.topics.len(), 3);
        assert_eq!(snapshot.languages.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_handle_fails_before_listing_repositories() {
        let server = MockServer::start().await;
        Mock::given(path("/users/ghost-user-does-not-exist"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(path("/users/ghost-user-does-not-exist/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let client = GithubClient::new(&server.uri(), None).unwrap();
        let result = aggregate_profile(&client, "ghost-user-does-not-exist", 4).await;
        assert!(matches!(result, Err(GithubError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_repository_list_failure_aborts_aggregation() {
        let server = MockServer::start().await;
        mount_profile(&server).await;
        Mock::given(path("/users/octocat/repos"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = GithubClient::new(&server.uri(), None).unwrap();
        let result = aggregate_profile(&client, "octocat", 4).await;
        assert!(matches!(result, Err(GithubError::Upstream { status: 500 })));
    }
}
