//! [The Hacker News](https://thehackernews.com/) front page.
//!
//! Each story is a `.body-post` card with the headline in `.home-title`, the
//! teaser in `.home-desc` and the date in `.h-datetime`.

use super::{DATE_NOT_FOUND, DESCRIPTION_NOT_FOUND, Site, TITLE_NOT_FOUND};
use crate::schema::{ExtractionSchema, FieldSpec};

pub const ID: u8 = 1;
pub const URL: &str = "https://thehackernews.com/";

pub fn site() -> Site {
    Site {
        id: ID,
        name: "The Hacker News".to_string(),
        url: URL.to_string(),
        schema: ExtractionSchema {
            container: ".body-post".to_string(),
            title: FieldSpec::new(".home-title", TITLE_NOT_FOUND),
            description: FieldSpec::new(".home-desc", DESCRIPTION_NOT_FOUND),
            date: FieldSpec::new(".h-datetime", DATE_NOT_FOUND),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::extractor::extract;

    #[test]
    fn test_extracts_story_cards() {
        let html = r#"
            <div class="blog-posts">
              <div class="body-post clear">
                <a class="story-link" href="https://thehackernews.com/2026/10/a.html">
                  <div class="clear home-post-box">
                    <div class="home-right">
                      <h2 class="home-title">Hackers Exploit Router Flaw</h2>
                      <div class="item-label">
                        <span class="h-datetime"><i class="icon-font icon-calendar"></i>Oct 19, 2026</span>
                        <span class="h-tags">Vulnerability</span>
                      </div>
                      <div class="home-desc"> Attackers are abusing a
                        critical bug. </div>
                    </div>
                  </div>
                </a>
              </div>
              <div class="body-post clear">
                <h2 class="home-title">Second Story</h2>
              </div>
            </div>"#;

        let schema = site().schema.compile().unwrap();
        let records = extract(&Document::from_html(html), &schema);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Hackers Exploit Router Flaw");
        assert_eq!(records[0].description, "Attackers are abusing a critical bug.");
        assert_eq!(records[0].date, "Oct 19, 2026");
        assert_eq!(records[1].title, "Second Story");
        assert_eq!(records[1].description, DESCRIPTION_NOT_FOUND);
        assert_eq!(records[1].date, DATE_NOT_FOUND);
    }
}
