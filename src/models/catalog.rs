use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Label of the sentinel category that disables category filtering.
pub const ALL_CATEGORY: &str = "All";

/// A category label drawn from the catalog's fixed, ordered category set.
///
/// `"All"` is a sentinel meaning "no category filter"; see [`Category::all`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The "no category filter" sentinel.
    pub fn all() -> Self {
        Self(ALL_CATEGORY.to_string())
    }

    pub fn is_all(&self) -> bool {
        self.0 == ALL_CATEGORY
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl PartialEq<str> for Category {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Category {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A single community resource entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// URL or placeholder (`#`); rendered escaped but otherwise unchecked.
    pub link: String,
}

impl Resource {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<Category>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            category: category.into(),
            link: link.into(),
        }
    }
}

/// Reasons a catalog fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("category set does not contain the \"All\" sentinel")]
    MissingAllCategory,

    #[error("category \"{0}\" is listed more than once")]
    DuplicateCategory(String),

    #[error("resource id {0} is used more than once")]
    DuplicateResourceId(u32),

    #[error("resource {id} uses unknown category \"{category}\"")]
    UnknownCategory { id: u32, category: String },

    #[error("resource {0} cannot be filed under the \"All\" sentinel")]
    SentinelCategory(u32),
}

/// On-disk shape of a catalog (`Rehbar Catalog.yaml`).
///
/// Deserialized as-is and turned into a validated [`Catalog`] with
/// [`Catalog::try_from`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogFile {
    pub categories: Vec<Category>,
    pub resources: Vec<Resource>,
}

/// The fixed, ordered set of categories and resources.
///
/// Built once at startup and never mutated afterwards. Construction checks that
/// every resource is filed under a known, non-sentinel category and that ids
/// are unique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    categories: IndexSet<Category>,
    resources: Vec<Resource>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, resources: Vec<Resource>) -> Result<Self, CatalogError> {
        let mut set = IndexSet::with_capacity(categories.len());
        for category in categories {
            if set.contains(&category) {
                return Err(CatalogError::DuplicateCategory(category.to_string()));
            }
            set.insert(category);
        }

        if !set.contains(&Category::all()) {
            return Err(CatalogError::MissingAllCategory);
        }

        let mut seen_ids = HashSet::with_capacity(resources.len());
        for resource in &resources {
            if !seen_ids.insert(resource.id) {
                return Err(CatalogError::DuplicateResourceId(resource.id));
            }
            if resource.category.is_all() {
                return Err(CatalogError::SentinelCategory(resource.id));
            }
            if !set.contains(&resource.category) {
                return Err(CatalogError::UnknownCategory {
                    id: resource.id,
                    category: resource.category.to_string(),
                });
            }
        }

        Ok(Self {
            categories: set,
            resources,
        })
    }

    /// The directory shipped with the application.
    pub fn builtin() -> Self {
        let categories = ["All", "Health", "Education", "Legal", "Finance", "Community"]
            .into_iter()
            .map(Category::from)
            .collect();

        let resources = vec![
            Resource::new(
                1,
                "Community Health Centers",
                "Find free and low-cost health services near you, including primary care and mental health support.",
                "Health",
                "#",
            ),
            Resource::new(
                2,
                "Adult Education Programs",
                "Access ESL classes, GED preparation, and vocational training programs in your area.",
                "Education",
                "#",
            ),
            Resource::new(
                3,
                "Free Legal Aid",
                "Connect with nonprofit legal clinics offering advice on immigration, housing, and family law.",
                "Legal",
                "#",
            ),
            Resource::new(
                4,
                "Financial Literacy Resources",
                "Learn budgeting, saving, and how to access affordable banking and microloan programs.",
                "Finance",
                "#",
            ),
            Resource::new(
                5,
                "Food Assistance Programs",
                "Locate food banks, meal programs, and SNAP enrollment help in your community.",
                "Community",
                "#",
            ),
            Resource::new(
                6,
                "Mental Health Support",
                "Culturally sensitive counseling and peer support groups available in multiple languages.",
                "Health",
                "#",
            ),
        ];

        Self {
            categories,
            resources,
        }
    }

    /// Categories in display order, including the "All" sentinel.
    pub fn categories(&self) -> impl ExactSizeIterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn contains_category(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }

    pub fn resource(&self, id: u32) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            categories: self.categories.iter().cloned().collect(),
            resources: self.resources.clone(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<CatalogFile> for Catalog {
    type Error = CatalogError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        Self::new(file.categories, file.resources)
    }
}
