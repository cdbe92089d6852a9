//! The library code for the `bylines` author-listing builder. The
//! architecture can be generally broken down into three distinct steps:
//!
//! 1. Parsing posts from source files on disk ([`crate::post`],
//!    [`crate::collection`])
//! 2. Loading the contributor directory ([`crate::contributor`])
//! 3. Grouping the live posts by author and paginating each author's group
//!    ([`crate::authors`], [`crate::paginate`])
//!
//! Of the three, the third step is the heart of the crate. The live posts are
//! sorted by date (most recent first) and scanned once; each post is appended
//! to the group of every author it names, and the order in which authors are
//! first encountered during that scan fixes the order of their pages in the
//! output. Each group is then validated against the contributor directory and
//! chunked into fixed-size pages. The resulting [`crate::paginate::AuthorPage`]
//! records are what a template-rendering layer consumes; rendering itself is
//! out of scope for this crate.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod authors;
pub mod collection;
pub mod contributor;
pub mod paginate;
pub mod post;
