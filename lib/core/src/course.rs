use serde::{Deserialize, Serialize};

/// A single course in the catalog.
///
/// `index` is the course's position in the [`Catalog`](crate::Catalog) and,
/// by the load-time alignment contract, its row and column in the
/// similarity matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub index: usize,
    pub name: String,
    pub url: String,
}

impl Course {
    #[inline]
    #[must_use]
    pub fn new(index: usize, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            url: url.into(),
        }
    }

    /// First whitespace-delimited word of the course name, if any.
    #[inline]
    pub fn first_word(&self) -> Option<&str> {
        self.name.split_whitespace().next()
    }
}

/// A recommendation produced for display. Ephemeral, derived per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub url: String,
    pub description: String,
}

impl Recommendation {
    /// Build the display record for a course. The description is a fixed
    /// template around the first word of the name, with a generic token
    /// when the name has no words.
    #[must_use]
    pub fn for_course(course: &Course) -> Self {
        let word = course.first_word().unwrap_or("key");
        Self {
            name: course.name.clone(),
            url: course.url.clone(),
            description: format!(
                "Comprehensive course covering {} concepts and practical applications.",
                word
            ),
        }
    }
}
