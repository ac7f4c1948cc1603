use crate::models::content::{AboutDocument, InfoItem, Stat};
use crate::sections::escape;

pub fn render(doc: &AboutDocument) -> String {
    let info: String = doc.info.iter().map(info_item).collect();
    let stats: String = doc.stats.iter().map(stat_card).collect();

    format!(
        r#"<div class="about-text"><h3>{}</h3><p>{}</p><div class="about-info">{info}</div></div><div class="about-stats">{stats}</div>"#,
        escape(&doc.summary.title),
        escape(&doc.summary.text),
    )
}

fn info_item(item: &InfoItem) -> String {
    format!(
        r#"<div class="info-item"><i class="{}"></i><span>{}</span></div>"#,
        escape(&item.icon),
        escape(&item.text)
    )
}

fn stat_card(stat: &Stat) -> String {
    format!(
        r#"<div class="stat-card"><h4>{}</h4><p>{}</p></div>"#,
        escape(&stat.value.to_string()),
        escape(&stat.label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;
    use crate::sections::{RenderOutcome, SectionKind};
    use serde_json::json;

    #[test]
    fn test_about_end_to_end() {
        let page = Page::parse(r#"<div id="about-content"></div>"#, &["about-content"]).unwrap();
        let doc = json!({
            "summary": { "title": "T", "text": "X" },
            "info": [{ "icon": "a", "text": "i1" }],
            "stats": [{ "value": "5", "label": "Years" }]
        });

        let outcome = SectionKind::About
            .render(Some(&doc), &page, "about-content")
            .unwrap();
        assert_eq!(outcome, RenderOutcome::Rendered);

        let markup = page.mount("about-content").unwrap().content();
        assert_eq!(markup.matches('T').count(), 1);
        assert_eq!(markup.matches("<h3>T</h3>").count(), 1);
        assert_eq!(markup.matches(r#"class="info-item""#).count(), 1);
        assert_eq!(markup.matches("<span>i1</span>").count(), 1);
        assert_eq!(markup.matches(r#"class="stat-card""#).count(), 1);
        assert_eq!(markup.matches("<p>Years</p>").count(), 1);
    }

    #[test]
    fn test_numeric_stat_value() {
        let doc: AboutDocument = serde_json::from_value(json!({
            "summary": { "title": "t", "text": "x" },
            "info": [],
            "stats": [{ "value": 12, "label": "Projects" }]
        }))
        .unwrap();
        assert!(render(&doc).contains("<h4>12</h4>"));
    }

    #[test]
    fn test_info_items_keep_input_order() {
        let doc: AboutDocument = serde_json::from_value(json!({
            "summary": { "title": "t", "text": "x" },
            "info": [{ "icon": "a", "text": "first" }, { "icon": "b", "text": "second" }],
            "stats": []
        }))
        .unwrap();
        let html = render(&doc);
        assert!(html.find("first").unwrap() < html.find("second").unwrap());
    }

    #[test]
    fn test_text_is_escaped() {
        let doc: AboutDocument = serde_json::from_value(json!({
            "summary": { "title": "R&D <lead>", "text": "x" },
            "info": [],
            "stats": []
        }))
        .unwrap();
        assert!(render(&doc).contains("<h3>R&amp;D &lt;lead&gt;</h3>"));
    }
}
