//! Author familiarity from local git history.
//!
//! Fills `domain_familiarity_score` / `past_success_rate` on a raw payload when the
//! caller didn't supply them. Values the caller did supply are never overwritten.

use std::path::{Path, PathBuf};

use chrono::{Duration, Utc};
use git2::{Commit, DiffOptions, Repository, Sort};

use crate::types::AssessmentPayload;

/// Scores for an anonymous author.
pub const ANONYMOUS_AUTHOR_SCORES: (f64, f64) = (0.2, 0.3);

/// Commits needed for full familiarity.
const FULL_FAMILIARITY_COMMITS: f64 = 20.0;

/// Subject keywords marking a commit as a failed change.
const FAILURE_KEYWORDS: &[&str] = &["revert", "rollback"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthorHistory {
  pub commits: usize,
  pub successful: usize,
}

impl AuthorHistory {
  /// (familiarity, success rate). No commits means an even success prior.
  pub fn scores(self) -> (f64, f64) {
    let familiarity = (self.commits as f64 / FULL_FAMILIARITY_COMMITS).min(1.0);
    let success = if self.commits > 0 {
      (self.successful as f64 / self.commits as f64).min(1.0)
    } else {
      0.5
    };
    (familiarity, success)
  }
}

#[derive(Debug, Clone)]
pub struct ContextEnricher {
  repo_path: PathBuf,
  history_days: i64,
}

impl Default for ContextEnricher {
  fn default() -> Self {
    Self::new(".")
  }
}

impl ContextEnricher {
  pub fn new(repo_path: impl Into<PathBuf>) -> Self {
    Self {
      repo_path: repo_path.into(),
      history_days: 90,
    }
  }

  pub fn with_history_days(mut self, days: i64) -> Self {
    self.history_days = days;
    self
  }

  pub fn repo_path(&self) -> &Path {
    &self.repo_path
  }

  /// Fill missing author scores in place.
  pub fn enrich(&self, payload: &mut AssessmentPayload) {
    let files = payload
      .request
      .change_metadata
      .as_ref()
      .and_then(|c| c.files_modified.clone())
      .unwrap_or_default();
    let author = payload.request.author.get_or_insert_with(Default::default);
    if author.domain_familiarity_score.is_some() && author.past_success_rate.is_some() {
      return;
    }

    let (familiarity, success) = self.derive_author_scores(author.id.as_deref(), &files);
    author.domain_familiarity_score.get_or_insert(familiarity);
    author.past_success_rate.get_or_insert(success);
  }

  /// Familiarity and success rate for `author_id` over the files being changed.
  pub fn derive_author_scores(&self, author_id: Option<&str>, files: &[String]) -> (f64, f64) {
    let author_id = match author_id {
      Some(id) if !id.is_empty() => id,
      _ => return ANONYMOUS_AUTHOR_SCORES,
    };

    let history = match self.author_history(author_id, files) {
      Ok(h) => h,
      Err(e) => {
        tracing::warn!(
          repo = %self.repo_path.display(),
          author = author_id,
          error = %e,
          "git history unavailable; treating author as new"
        );
        AuthorHistory::default()
      }
    };
    let scores = history.scores();
    tracing::debug!(
      author = author_id,
      commits = history.commits,
      successful = history.successful,
      familiarity = scores.0,
      success = scores.1,
      "derived author scores"
    );
    scores
  }

  /// Walk HEAD's history inside the window, counting the author's commits that touch `files`.
  pub fn author_history(&self, author_id: &str, files: &[String]) -> Result<AuthorHistory, git2::Error> {
    let repo = Repository::discover(&self.repo_path)?;
    let since = (Utc::now() - Duration::days(self.history_days)).timestamp();
    let files: Vec<&str> = files.iter().map(String::as_str).filter(|f| !f.is_empty()).collect();

    let mut revwalk = repo.revwalk()?;
    revwalk.push_head()?;
    revwalk.set_sorting(Sort::TIME)?;

    let mut history = AuthorHistory::default();
    for oid in revwalk {
      let commit = repo.find_commit(oid?)?;
      // Newest first, so everything after this is outside the window too.
      if commit.time().seconds() < since {
        break;
      }
      if !authored_by(&commit, author_id) {
        continue;
      }
      if !files.is_empty() && !touches_any(&repo, &commit, &files)? {
        continue;
      }
      history.commits += 1;
      if !is_failure(commit.summary().unwrap_or_default()) {
        history.successful += 1;
      }
    }
    Ok(history)
  }
}

/// Substring match against "Name <email>", like `git log --author`.
fn authored_by(commit: &Commit, author_id: &str) -> bool {
  let sig = commit.author();
  let ident = format!(
    "{} <{}>",
    sig.name().unwrap_or_default(),
    sig.email().unwrap_or_default()
  );
  ident.contains(author_id)
}

fn touches_any(repo: &Repository, commit: &Commit, files: &[&str]) -> Result<bool, git2::Error> {
  let tree = commit.tree()?;
  let parent_tree = match commit.parents().next() {
    Some(parent) => Some(parent.tree()?),
    None => None,
  };

  let mut opts = DiffOptions::new();
  for file in files {
    opts.pathspec(*file);
  }
  let diff = repo.diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut opts))?;
  Ok(diff.deltas().len() > 0)
}

fn is_failure(summary: &str) -> bool {
  let s = summary.to_lowercase();
  FAILURE_KEYWORDS.iter().any(|k| s.contains(k))
}
