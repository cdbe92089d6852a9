//! Exports the [`paginate_by_author`] function, the heart of the crate: it
//! turns a flat set of posts into the ordered sequence of per-author,
//! per-page records described in [`crate::paginate`].
//!
//! The pipeline is a single linear pass: drop non-live posts, sort the rest
//! by date (most recent first), scan the sorted list once to build an
//! insertion-ordered mapping from author id to that author's posts, then
//! validate each author id against the contributor directory and paginate
//! each group. A post crediting several authors lands in each of their
//! groups; a post crediting none lands in no group.

use crate::contributor::Contributors;
use crate::paginate::{paginate, AuthorPage};
use crate::post::Post;
use indexmap::IndexMap;
use std::fmt;
use std::path::PathBuf;

/// Groups the live posts by author id and paginates each author's group into
/// pages of at most `page_size` posts.
///
/// Author order in the output is the order in which authors are first
/// encountered while scanning the date-sorted post list, so the author of
/// the most recent post comes first; all of one author's pages appear before
/// the next author's. Within an author, pages run from the most recent post
/// to the oldest, since the group is built from the pre-sorted list.
///
/// Every author id named by a live post must exist in `contributors`;
/// otherwise the whole computation fails with
/// [`Error::UnknownContributor`]. No other input is rejected: an empty post
/// list produces an empty output.
pub fn paginate_by_author<'a>(
    posts: &[&'a Post],
    contributors: &Contributors,
    page_size: usize,
) -> Result<Vec<AuthorPage<'a>>> {
    let mut live: Vec<&Post> = posts.iter().copied().filter(|p| p.is_live()).collect();
    // sort_by is stable, so posts sharing a date keep their input order
    live.sort_by(|a, b| b.date.cmp(&a.date));

    let mut groups: IndexMap<&str, Vec<&'a Post>> = IndexMap::new();
    for post in live {
        for author in &post.authors {
            groups.entry(author.as_str()).or_default().push(post);
        }
    }

    let mut pages = Vec::new();
    for (author, group) in &groups {
        match contributors.get(author) {
            Some(contributor) => pages.extend(paginate(group, contributor, page_size)),
            None => {
                return Err(Error::UnknownContributor {
                    id: (*author).to_owned(),
                    paths: group.iter().map(|p| p.input_path.clone()).collect(),
                });
            }
        }
    }
    Ok(pages)
}

/// The result of grouping and paginating posts by author.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents a failure to group and paginate posts by author.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// An author id referenced by one or more posts has no entry in the
    /// contributor directory. Carries the id and the source path of every
    /// post crediting it.
    UnknownContributor { id: String, paths: Vec<PathBuf> },
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnknownContributor { id, paths } => {
                let paths = paths
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "unknown contributor {} [{}], are they in the contributors file?",
                    id, paths,
                )
            }
        }
    }
}

impl std::error::Error for Error {}
