//! Chunks an author's posts into fixed-size pages. This is the paginator
//! half of the grouper/paginator pipeline; [`crate::authors`] decides which
//! posts belong to which author, this module only slices one author's
//! already-ordered list into [`AuthorPage`] records.

use crate::contributor::Contributor;
use crate::post::Post;
use url::Url;

/// One page's worth of a given author's posts plus pagination metadata.
/// Freshly constructed on every invocation; the rendering layer consumes
/// these and nothing persists them.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthorPage<'a> {
    /// The author's display name.
    pub title: String,

    /// The URL for the author's listing pages.
    pub href: Url,

    /// The author's bio.
    pub description: String,

    /// The posts on this page, in the order they were given.
    pub elements: Vec<&'a Post>,

    /// The zero-based index of this page.
    pub index: usize,

    /// The total number of pages for this author.
    pub pages: usize,
}

/// Chunks `posts` into pages of at most `page_size` posts each, stamping
/// every page with the contributor's metadata, its own index, and the total
/// page count. `page_size` must be at least 1. An empty `posts` produces no
/// pages.
pub fn paginate<'a>(
    posts: &[&'a Post],
    contributor: &Contributor,
    page_size: usize,
) -> Vec<AuthorPage<'a>> {
    let pages = match posts.len() % page_size {
        0 => posts.len() / page_size,
        _ => posts.len() / page_size + 1,
    };

    posts
        .chunks(page_size)
        .enumerate()
        .map(|(index, chunk)| AuthorPage {
            title: contributor.title.clone(),
            href: contributor.href.clone(),
            description: contributor.description.clone(),
            elements: chunk.to_vec(),
            index,
            pages,
        })
        .collect()
}
