use crate::services::{SlugError, Toolkit};

impl Toolkit {
    /// Lower-cases `text` and collapses every run of characters outside
    /// `[a-z0-9]` into a single `-`, trimming hyphens at both ends.
    pub fn slugify(&self, text: &str) -> Result<String, SlugError> {
        slugify(text)
    }
}

pub(crate) fn slugify(text: &str) -> Result<String, SlugError> {
    if text.is_empty() {
        return Err(SlugError::EmptyInput);
    }

    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        return Err(SlugError::EmptySlug);
    }

    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_text() {
        assert_eq!(slugify("Hello World!").unwrap(), "hello-world");
    }

    #[test]
    fn empty_input() {
        assert_eq!(slugify(""), Err(SlugError::EmptyInput));
    }

    #[test]
    fn no_latin_characters() {
        assert_eq!(slugify("こんにちは世界"), Err(SlugError::EmptySlug));
        assert_eq!(slugify("!!! ---"), Err(SlugError::EmptySlug));
    }

    #[test]
    fn mixed_scripts() {
        assert_eq!(slugify("こんにちは世界 Hello World!").unwrap(), "hello-world");
    }

    #[test]
    fn collapses_runs_and_trims() {
        assert_eq!(
            slugify("  --Now is the   time: 4 ALL--  ").unwrap(),
            "now-is-the-time-4-all"
        );
        assert_eq!(slugify("Crème brûlée").unwrap(), "cr-me-br-l-e");
    }
}
