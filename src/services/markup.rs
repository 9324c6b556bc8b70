// Markup templating for the two page regions
//
// Every piece of catalog or user text that lands in markup goes through
// `escape_html`. Links are escaped the same way and not otherwise validated.

use crate::models::{Category, Resource};

/// Markup shown in the resource region when the filter returns nothing.
pub const NO_RESULTS_NOTICE: &str =
    r#"<p class="no-results">No resources found. Try a different search or category.</p>"#;

/// Escape `&`, `<`, `>`, `"` and `'` as named/numeric character references.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render one chip.
pub fn render_category_chip(category: &Category, active: bool) -> String {
    let label = escape_html(category.as_str());
    format!(
        r#"<button class="category-tag{}" data-category="{}">{}</button>"#,
        if active { " active" } else { "" },
        label,
        label
    )
}

/// Render one chip per category, in order, marking the one equal to `active`.
pub fn render_category_chips<'a>(
    categories: impl IntoIterator<Item = &'a Category>,
    active: &Category,
) -> String {
    categories
        .into_iter()
        .map(|category| render_category_chip(category, category == active))
        .collect()
}

pub fn render_resource_card(resource: &Resource) -> String {
    format!(
        r#"
    <div class="resource-card">
      <span class="tag">{category}</span>
      <h3>{title}</h3>
      <p>{description}</p>
      <a class="card-link" href="{link}">Learn more &rarr;</a>
    </div>
  "#,
        category = escape_html(resource.category.as_str()),
        title = escape_html(&resource.title),
        description = escape_html(&resource.description),
        link = escape_html(&resource.link),
    )
}

/// Render the resource region: one card per match, or the no-results notice.
pub fn render_resource_cards(resources: &[&Resource]) -> String {
    if resources.is_empty() {
        return NO_RESULTS_NOTICE.to_string();
    }

    resources.iter().map(|r| render_resource_card(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Catalog;

    #[test]
    fn test_escape_html_all_five_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_leaves_plain_text_alone() {
        assert_eq!(escape_html("Free Legal Aid"), "Free Legal Aid");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_html_escapes_existing_entities() {
        // A literal entity is escaped once, as text.
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_chips_mark_exactly_one_active() {
        let catalog = Catalog::builtin();
        let markup = render_category_chips(catalog.categories(), &Category::from("Legal"));

        assert_eq!(markup.matches("<button").count(), 6);
        assert_eq!(markup.matches("category-tag active").count(), 1);
        assert!(markup.contains(
            r#"<button class="category-tag active" data-category="Legal">Legal</button>"#
        ));
        assert!(markup.starts_with(
            r#"<button class="category-tag" data-category="All">All</button><button"#
        ));
    }

    #[test]
    fn test_chip_labels_are_escaped() {
        let chip = render_category_chip(&Category::from("Food & Housing"), false);
        assert_eq!(
            chip,
            r#"<button class="category-tag" data-category="Food &amp; Housing">Food &amp; Housing</button>"#
        );
    }

    #[test]
    fn test_card_layout() {
        let resource = Resource::new(9, "Title", "Desc", "Health", "https://example.org");
        let card = render_resource_card(&resource);
        let expected = "\n    <div class=\"resource-card\">\n      <span class=\"tag\">Health</span>\n      <h3>Title</h3>\n      <p>Desc</p>\n      <a class=\"card-link\" href=\"https://example.org\">Learn more &rarr;</a>\n    </div>\n  ";
        assert_eq!(card, expected);
    }

    #[test]
    fn test_card_escapes_every_field() {
        let resource = Resource::new(
            1,
            "<script>alert(1)</script>",
            "Fish & \"chips\"",
            "Health",
            "javascript:alert('x')",
        );
        let card = render_resource_card(&resource);

        assert!(card.contains("<h3>&lt;script&gt;alert(1)&lt;/script&gt;</h3>"));
        assert!(!card.contains("<script>"));
        assert!(card.contains("<p>Fish &amp; &quot;chips&quot;</p>"));
        // No scheme validation, only escaping.
        assert!(card.contains(r#"href="javascript:alert(&#39;x&#39;)""#));
    }

    #[test]
    fn test_empty_results_render_notice() {
        assert_eq!(render_resource_cards(&[]), NO_RESULTS_NOTICE);
    }

    #[test]
    fn test_cards_follow_input_order() {
        let catalog = Catalog::builtin();
        let picked = vec![
            catalog.resource(6).unwrap(),
            catalog.resource(1).unwrap(),
        ];
        let markup = render_resource_cards(&picked);

        assert_eq!(markup.matches("resource-card").count(), 2);
        let mental = markup.find("Mental Health Support").unwrap();
        let centers = markup.find("Community Health Centers").unwrap();
        assert!(mental < centers);
        assert!(!markup.contains("no-results"));
    }
}
