//! Defines the [`Contributor`] profile type and the [`Contributors`]
//! directory, the authoritative registry mapping author ids to public
//! profile metadata. The directory is always passed explicitly into the
//! grouping logic; nothing in this crate reads it from ambient state.

use anyhow::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use url::Url;

/// Public profile metadata for one author id.
#[derive(Clone, Debug, PartialEq)]
pub struct Contributor {
    /// The author's display name.
    pub title: String,

    /// The URL for the author's listing pages, derived from the slugified
    /// author id under the authors base URL (e.g.
    /// `{base_url}/{slugified_id}/`).
    pub href: Url,

    /// The author's bio, possibly empty.
    pub description: String,
}

/// A contributor record as it appears in the directory file. The `href`
/// field of [`Contributor`] is derived at load time rather than stored.
#[derive(Deserialize)]
struct Record {
    title: String,

    #[serde(default)]
    description: String,
}

/// The read-only directory of contributors, keyed by author id.
#[derive(Debug, Default)]
pub struct Contributors {
    entries: HashMap<String, Contributor>,
}

impl Contributors {
    pub fn new() -> Contributors {
        Contributors::default()
    }

    /// Loads the directory from a YAML document mapping author ids to
    /// records. `base_url` is the base URL for author listing pages; it
    /// should end in a trailing slash so [`Url::join`] appends rather than
    /// replaces.
    pub fn from_reader<R: Read>(base_url: &Url, reader: R) -> Result<Contributors> {
        let records: HashMap<String, Record> = serde_yaml::from_reader(reader)?;
        let mut contributors = Contributors::new();
        for (id, record) in records {
            let href = base_url.join(&format!("{}/", slug::slugify(&id)))?;
            contributors.insert(
                id,
                Contributor {
                    title: record.title,
                    href,
                    description: record.description,
                },
            );
        }
        Ok(contributors)
    }

    pub fn insert(&mut self, id: impl Into<String>, contributor: Contributor) {
        self.entries.insert(id.into(), contributor);
    }

    /// Looks up the contributor for an author id.
    pub fn get(&self, id: &str) -> Option<&Contributor> {
        self.entries.get(id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_reader() -> Result<()> {
        let base_url = Url::parse("https://example.org/authors/")?;
        let contributors = Contributors::from_reader(
            &base_url,
            "alice:\n\
             \x20 title: Alice Example\n\
             \x20 description: Writes about everything.\n\
             BobO'Brien:\n\
             \x20 title: Bob O'Brien\n"
                .as_bytes(),
        )?;

        let alice = contributors.get("alice").unwrap();
        assert_eq!(alice.title, "Alice Example");
        assert_eq!(alice.description, "Writes about everything.");
        assert_eq!(alice.href.as_str(), "https://example.org/authors/alice/");

        // The id is slugified for the href but left intact as the key.
        let bob = contributors.get("BobO'Brien").unwrap();
        assert_eq!(bob.description, "");
        assert_eq!(bob.href.as_str(), "https://example.org/authors/bobo-brien/");
        Ok(())
    }

    #[test]
    fn test_get_unknown_id() {
        assert_eq!(Contributors::new().get("nobody"), None);
    }
}
