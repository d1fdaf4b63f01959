//! Core domain types for the catalog browser.

use chrono::{DateTime, Datelike as _, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 36;
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreId(pub String);

macro_rules! id_impls {
    ($($ty:ident),*) => {
        $(
            impl $ty {
                pub fn new(value: impl Into<String>) -> Self {
                    Self(value.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl From<&str> for $ty {
                fn from(value: &str) -> Self {
                    Self(value.to_string())
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )*
    };
}

id_impls!(BookId, AuthorId, GenreId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: AuthorId,
    pub image: String,
    #[serde(default)]
    pub description: String,
    pub published: DateTime<Utc>,
    #[serde(default)]
    pub genres: Vec<GenreId>,
}

impl Book {
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }

    pub fn has_genre(&self, genre: &GenreId) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

/// The full, immutable set of books plus the id → name lookups.
///
/// The lookups keep the order the catalog file lists them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub books: Vec<Book>,
    pub authors: IndexMap<AuthorId, String>,
    pub genres: IndexMap<GenreId, String>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn author_name(&self, id: &AuthorId) -> &str {
        self.authors
            .get(id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_AUTHOR)
    }

    pub fn genre_name(&self, id: &GenreId) -> Option<&str> {
        self.genres.get(id).map(String::as_str)
    }

    pub fn find(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|book| &book.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Day,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Theme::Day),
            "night" => Ok(Theme::Night),
            _ => Err("unknown theme"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

pub const INK: Rgb = Rgb(10, 10, 20);
pub const PAPER: Rgb = Rgb(255, 255, 255);

/// The two colour tokens every surface is painted with.
///
/// `dark` is the foreground and `light` the background, so swapping them
/// inverts the whole palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub dark: Rgb,
    pub light: Rgb,
}

impl ThemeTokens {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Day => Self {
                dark: INK,
                light: PAPER,
            },
            Theme::Night => Self {
                dark: PAPER,
                light: INK,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub page_size: usize,
    pub theme: Option<Theme>,
    pub catalog_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            theme: None,
            catalog_path: None,
        }
    }
}

impl Settings {
    pub fn normalize(&mut self) {
        self.page_size = self.page_size.clamp(1, 500);
        self.catalog_path = self
            .catalog_path
            .take()
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty());
    }
}
