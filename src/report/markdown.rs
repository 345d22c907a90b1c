//! Markdown rendering of the contributor list.
//!
//! Contributors are sorted by display name with English collation, so
//! `ana`, `Émile` and `Zoë` sort the way a reader expects rather than by code
//! point. Each entry becomes a Markdown link and the links are joined into a
//! single sentence fragment: `[A](..), [B](..), and [C](..)`.

use std::cmp::Ordering;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use icu_locale_core::locale;

use crate::contributors::Contributor;
use crate::error::KudosError;

/// Renders contributors as an English list of Markdown links, sorted by
/// display name.
///
/// Contributors sharing a display name keep a stable order by login.
///
/// # Example
///
/// ```
/// use kudos::contributors::Contributor;
/// use kudos::report::format_contributors;
///
/// let contributors = [
///     Contributor {
///         login: "zoe".to_owned(),
///         display_name: "Zoe".to_owned(),
///         profile_link: "z.example/zoe".to_owned(),
///     },
///     Contributor {
///         login: "amy".to_owned(),
///         display_name: "Amy".to_owned(),
///         profile_link: "a.example/amy".to_owned(),
///     },
/// ];
/// assert_eq!(
///     format_contributors(&contributors),
///     "[Amy](a.example/amy) and [Zoe](z.example/zoe)"
/// );
/// ```
#[must_use]
pub fn format_contributors<'a, I>(contributors: I) -> String
where
    I: IntoIterator<Item = &'a Contributor>,
{
    let mut sorted: Vec<&Contributor> = contributors.into_iter().collect();
    let order = DisplayOrder::english();
    sorted.sort_by(|left, right| order.compare(left, right));

    let links: Vec<String> = sorted
        .into_iter()
        .map(|contributor| {
            format!(
                "[{name}]({link})",
                name = contributor.display_name,
                link = contributor.profile_link
            )
        })
        .collect();
    join_conjunction(&links)
}

/// Joins items as an English conjunction list with a serial comma.
///
/// ```
/// use kudos::report::join_conjunction;
///
/// assert_eq!(join_conjunction(&[] as &[&str]), "");
/// assert_eq!(join_conjunction(&["A"]), "A");
/// assert_eq!(join_conjunction(&["A", "B"]), "A and B");
/// assert_eq!(join_conjunction(&["A", "B", "C"]), "A, B, and C");
/// ```
#[must_use]
pub fn join_conjunction<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_owned(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Writes the rendered report to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`KudosError::Io`] when the parent directory cannot be opened or
/// the file cannot be written.
pub fn write_report(path: &Utf8Path, content: &str) -> Result<(), KudosError> {
    let file_name = path.file_name().ok_or_else(|| KudosError::Io {
        message: format!("output path has no file name: {path}"),
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
        KudosError::Io {
            message: format!("failed to open output directory {parent}: {error}"),
        }
    })?;
    dir.write(file_name, content).map_err(|error| KudosError::Io {
        message: format!("failed to write {path}: {error}"),
    })
}

enum DisplayOrder {
    Collated(CollatorBorrowed<'static>),
    CodePoint,
}

impl DisplayOrder {
    fn english() -> Self {
        match Collator::try_new(locale!("en").into(), CollatorOptions::default()) {
            Ok(collator) => Self::Collated(collator),
            Err(error) => {
                tracing::warn!("English collation unavailable, sorting by code point: {error}");
                Self::CodePoint
            }
        }
    }

    fn compare(&self, left: &Contributor, right: &Contributor) -> Ordering {
        let by_name = match self {
            Self::Collated(collator) => collator.compare(&left.display_name, &right.display_name),
            Self::CodePoint => left.display_name.cmp(&right.display_name),
        };
        by_name.then_with(|| left.login.cmp(&right.login))
    }
}
