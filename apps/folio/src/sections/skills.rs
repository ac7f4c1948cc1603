use crate::models::content::{Skill, SkillCategory, SkillsDocument};
use crate::sections::escape;

pub fn render(doc: &SkillsDocument) -> String {
    doc.categories.iter().map(category).collect()
}

fn category(category: &SkillCategory) -> String {
    let skills: String = category.skills.iter().map(skill_item).collect();
    format!(
        r#"<div class="skill-category"><div class="category-header"><i class="{}"></i><h3>{}</h3></div><div class="skill-grid">{skills}</div></div>"#,
        escape(&category.icon),
        escape(&category.name),
    )
}

fn skill_item(skill: &Skill) -> String {
    format!(
        r#"<div class="skill-item">{}<span>{}</span></div>"#,
        skill_visual(skill),
        escape(&skill.name)
    )
}

/// A logo image when the skill has one, the icon glyph otherwise.
fn skill_visual(skill: &Skill) -> String {
    match skill.logo() {
        Some(logo) => format!(
            r#"<img src="{}" alt="{}">"#,
            escape(logo),
            escape(&skill.name)
        ),
        None => format!(
            r#"<div class="skill-icon-placeholder"><i class="{}"></i></div>"#,
            escape(skill.icon.as_deref().unwrap_or_default())
        ),
    }
}
