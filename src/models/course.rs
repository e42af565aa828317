//! Course and the built-in course catalog.

use serde::{Deserialize, Serialize};

/// Colour overrides for a course's pages. Not used by scoring.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_soft: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
}

/// A course players can start a round on.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub slug: String,
    pub name: String,
    pub holes: usize,
    /// Par per hole. May be shorter than `holes`; missing entries are "par not tracked".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub par: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl Course {
    pub fn new(slug: impl Into<String>, name: impl Into<String>, holes: usize) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            holes,
            par: None,
            theme: None,
        }
    }

    pub fn with_par(mut self, par: Vec<u32>) -> Self {
        self.par = Some(par);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }
}

/// Read-only lookup of courses by slug.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// The courses shipped with the app.
    pub fn builtin() -> Self {
        let gold = |bg: Option<&str>, surface: Option<&str>| Theme {
            primary: Some("#fbbf24".to_string()),
            primary_soft: Some("#fef3c7".to_string()),
            accent: Some("#facc15".to_string()),
            bg: bg.map(str::to_string),
            surface: surface.map(str::to_string),
        };
        Self::new(vec![
            Course::new("porirua-fun-putt", "Porirua Fun Putt", 18)
                .with_par(vec![2, 3, 2, 4, 3, 3, 2, 4, 3, 3, 2, 4, 3, 3, 2, 4, 3, 3])
                .with_theme(gold(None, None)),
            Course::new("harbor-lights", "Harbor Lights Mini Golf", 12)
                .with_par(vec![3, 3, 2, 4, 2, 3, 3, 4, 2, 3, 3, 2])
                .with_theme(gold(Some("#0a1a2f"), Some("#0f243e"))),
            Course::new("desert-dunes", "Desert Dunes", 9)
                .with_par(vec![2, 3, 2, 3, 3, 4, 2, 3, 4])
                .with_theme(gold(Some("#1a1308"), Some("#241409"))),
        ])
    }

    pub fn all(&self) -> &[Course] {
        &self.courses
    }

    /// `None` for an unknown slug.
    pub fn find(&self, slug: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.slug == slug)
    }
}
