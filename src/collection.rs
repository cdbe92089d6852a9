//! Defines the [`Collection`] type, which owns every post parsed for a site
//! and hands out glob-filtered views of them. This is the input surface of
//! the crate: callers build a collection once and then pull the subset they
//! want to group and paginate.

use crate::post::Post;
use anyhow::Result;
use glob::Pattern;
use std::path::Path;
use walkdir::WalkDir;

/// All of the posts parsed for a site.
#[derive(Debug, Default)]
pub struct Collection {
    posts: Vec<Post>,
}

impl Collection {
    /// Walks `dir` and parses every `.md` file into a [`Post`]. The order of
    /// the resulting posts follows the directory walk; callers that care
    /// about order sort downstream.
    pub fn from_directory(dir: &Path) -> Result<Collection> {
        let mut posts = Vec::new();
        for result in WalkDir::new(dir) {
            let entry = result?;
            if entry.file_type().is_file()
                && entry.path().extension().map_or(false, |ext| ext == "md")
            {
                posts.push(Post::from_file(entry.path())?);
            }
        }
        Ok(Collection { posts })
    }

    /// Returns the posts whose `input_path` matches the glob `pattern` (e.g.
    /// `**/*.md`), in collection order.
    pub fn get_filtered_by_glob(&self, pattern: &str) -> Result<Vec<&Post>> {
        let pattern = Pattern::new(pattern)?;
        Ok(self
            .posts
            .iter()
            .filter(|post| pattern.matches_path(&post.input_path))
            .collect())
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }
}

impl From<Vec<Post>> for Collection {
    /// Builds a collection from already-parsed posts.
    fn from(posts: Vec<Post>) -> Collection {
        Collection { posts }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    #[test]
    fn test_glob_matches_all_markdown() -> Result<()> {
        let collection = fixture();
        let posts = collection.get_filtered_by_glob("**/*.md")?;
        assert_eq!(paths(&posts), vec!["en/blog/a.md", "en/blog/b.md"]);
        Ok(())
    }

    #[test]
    fn test_glob_matches_exact_path() -> Result<()> {
        let collection = fixture();
        let posts = collection.get_filtered_by_glob("en/blog/a.md")?;
        assert_eq!(paths(&posts), vec!["en/blog/a.md"]);
        Ok(())
    }

    #[test]
    fn test_glob_no_matches() -> Result<()> {
        let collection = fixture();
        assert!(collection.get_filtered_by_glob("de/**/*.md")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(fixture().get_filtered_by_glob("[").is_err());
    }

    fn fixture() -> Collection {
        Collection::from(vec![
            post("en/blog/a.md"),
            post("en/blog/b.md"),
            post("en/images/c.jpg"),
        ])
    }

    fn post(path: &str) -> Post {
        Post {
            title: path.to_owned(),
            date: NaiveDate::from_ymd(2021, 3, 4),
            authors: Vec::new(),
            draft: false,
            input_path: PathBuf::from(path),
            body: String::new(),
        }
    }

    fn paths(posts: &[&Post]) -> Vec<String> {
        posts
            .iter()
            .map(|p| p.input_path.display().to_string())
            .collect()
    }
}
