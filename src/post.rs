//! Defines the [`Post`] type, the frontmatter parser that produces it, and
//! the liveness predicate that decides whether a post may appear in public
//! listings.

use anyhow::{anyhow, Result};
use chrono::{NaiveDate, Utc};
use pulldown_cmark::{html, Parser};
use serde::Deserialize;
use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};

/// A single blog post. The grouping logic only looks at `date`, `authors`,
/// `draft`, and `input_path`; everything else is carried through for the
/// rendering layer.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Post {
    #[serde(rename = "Title")]
    pub title: String,

    /// The publish date from the frontmatter, `YYYY-MM-DD`.
    #[serde(rename = "Date")]
    pub date: NaiveDate,

    /// The author ids credited for the post. A missing `Authors` key is the
    /// same as an empty list: the post belongs to no author's listing.
    #[serde(default, rename = "Authors")]
    pub authors: Vec<String>,

    #[serde(default, rename = "Draft")]
    pub draft: bool,

    /// The source file the post was parsed from. Diagnostics point here so a
    /// human can fix the offending frontmatter.
    #[serde(default)]
    pub input_path: PathBuf,

    /// The post body rendered to HTML.
    #[serde(default)]
    pub body: String,
}

impl Post {
    /// Parses a post from the contents of a source file. `input_path` is
    /// recorded on the post for diagnostics. The input must begin with a
    /// `---`-fenced YAML frontmatter block; the remainder is treated as
    /// markdown and rendered into [`Post::body`].
    pub fn from_str(input_path: &Path, input: &str) -> Result<Post> {
        fn frontmatter_indices(input: &str) -> Result<(usize, usize, usize)> {
            const FENCE: &str = "---";
            if !input.starts_with(FENCE) {
                return Err(anyhow!("Post must begin with `---`"));
            }
            match input[FENCE.len()..].find(FENCE) {
                None => Err(anyhow!("Missing closing `---`")),
                Some(offset) => Ok((
                    FENCE.len(),                        // yaml_start
                    FENCE.len() + offset,               // yaml_stop
                    FENCE.len() + offset + FENCE.len(), // body_start
                )),
            }
        }

        let (yaml_start, yaml_stop, body_start) = frontmatter_indices(input)?;
        let mut post: Post = serde_yaml::from_str(&input[yaml_start..yaml_stop])?;
        post.input_path = input_path.to_owned();
        html::push_html(&mut post.body, Parser::new(&input[body_start..]));
        Ok(post)
    }

    /// Reads and parses the post at `path`.
    pub fn from_file(path: &Path) -> Result<Post> {
        let mut contents = String::new();
        File::open(path)
            .map_err(|e| anyhow!("Opening post file `{}`: {}", path.display(), e))?
            .read_to_string(&mut contents)?;
        Post::from_str(path, &contents)
            .map_err(|e| anyhow!("Parsing post file `{}`: {}", path.display(), e))
    }

    /// The liveness predicate as of a given date: a post is live iff it isn't
    /// a draft and its publish date is not in the future.
    pub fn is_live_on(&self, date: NaiveDate) -> bool {
        !self.draft && self.date <= date
    }

    /// The liveness predicate as of today (UTC).
    pub fn is_live(&self) -> bool {
        self.is_live_on(Utc::now().naive_utc().date())
    }
}
