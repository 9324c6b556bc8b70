// Renderable view - the surface the controller writes markup into
//
// The controller never touches a concrete page. It talks to a `View`, which can
// replace the full content of a named region and report the search field value.
// `HtmlPage` is the in-memory implementation used by the binary and the tests.

use crate::services::escape_html;
use indexmap::IndexMap;
use std::fmt;
use thiserror::Error;

/// The two regions the directory renders into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Categories,
    Resources,
}

impl Region {
    /// Element identifier of the region on the page
    pub fn id(self) -> &'static str {
        match self {
            Region::Categories => "categories",
            Region::Resources => "resources",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("page has no region with id \"{0}\"")]
    MissingRegion(String),
}

/// Rendering and input-capture surface.
///
/// `replace_region` swaps the entire content of a region; there is no partial
/// update. `search_value` returns the search field's raw text.
#[cfg_attr(test, mockall::automock)]
pub trait View {
    fn replace_region(&mut self, id: &str, markup: &str) -> Result<(), ViewError>;

    fn search_value(&self) -> String;
}

/// In-memory page holding the two regions and the search field.
///
/// Can serialize itself to a complete HTML document with [`HtmlPage::to_document`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlPage {
    title: String,
    regions: IndexMap<String, String>,
    search_input: String,
}

impl HtmlPage {
    /// Create a page with empty `categories` and `resources` regions.
    pub fn new(title: impl Into<String>) -> Self {
        let regions = [Region::Categories, Region::Resources]
            .into_iter()
            .map(|r| (r.id().to_string(), String::new()))
            .collect();

        Self {
            title: title.into(),
            regions,
            search_input: String::new(),
        }
    }

    /// Current markup of a region, if it exists.
    pub fn region(&self, id: &str) -> Option<&str> {
        self.regions.get(id).map(String::as_str)
    }

    /// Simulate the user typing into the search field.
    pub fn set_search_input(&mut self, value: impl Into<String>) {
        self.search_input = value.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Render the whole page, regions included.
    pub fn to_document(&self) -> String {
        let title = escape_html(&self.title);
        let mut body = String::new();

        for (id, markup) in &self.regions {
            body.push_str(&format!(
                "    <section id=\"{}\">{}</section>\n",
                escape_html(id),
                markup
            ));
        }

        format!(
            "<!DOCTYPE html>\n\
             <html lang=\"en\">\n\
             <head>\n  <meta charset=\"utf-8\">\n  <title>{title}</title>\n</head>\n\
             <body>\n\
             \x20 <header><h1>{title}</h1></header>\n\
             \x20 <main>\n\
             \x20   <div class=\"search\">\n\
             \x20     <input id=\"search-input\" type=\"search\" value=\"{search}\">\n\
             \x20     <button id=\"search-btn\">Search</button>\n\
             \x20   </div>\n\
             {body}\
             \x20 </main>\n\
             </body>\n\
             </html>\n",
            search = escape_html(&self.search_input),
        )
    }
}

impl View for HtmlPage {
    fn replace_region(&mut self, id: &str, markup: &str) -> Result<(), ViewError> {
        match self.regions.get_mut(id) {
            Some(content) => {
                content.clear();
                content.push_str(markup);
                Ok(())
            }
            None => Err(ViewError::MissingRegion(id.to_string())),
        }
    }

    fn search_value(&self) -> String {
        self.search_input.clone()
    }
}
