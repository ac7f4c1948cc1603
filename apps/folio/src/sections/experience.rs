use crate::models::content::{Experience, ExperienceDocument};
use crate::sections::escape;

pub fn render(doc: &ExperienceDocument) -> String {
    doc.experiences.iter().map(timeline_item).collect()
}

fn timeline_item(exp: &Experience) -> String {
    let responsibilities: String = exp
        .responsibilities
        .iter()
        .map(|r| format!("<li>{}</li>", escape(r)))
        .collect();

    format!(
        r#"<div class="timeline-item"><div class="timeline-dot"></div><div class="timeline-content"><span class="timeline-date">{}</span><h3>{}</h3><h4>{} | {}</h4><ul>{responsibilities}</ul></div></div>"#,
        escape(&exp.date),
        escape(&exp.title),
        escape(&exp.company),
        escape(&exp.location),
    )
}
