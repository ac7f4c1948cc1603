use crate::models::content::{Project, ProjectStat, ProjectsDocument};
use crate::sections::escape;

pub fn render(doc: &ProjectsDocument) -> String {
    doc.projects.iter().map(project_card).collect()
}

fn project_card(project: &Project) -> String {
    let tags: String = project
        .tags
        .iter()
        .map(|tag| format!("<span>{}</span>", escape(tag)))
        .collect();
    let stats: String = project.stats.iter().map(project_stat).collect();

    format!(
        r#"<div class="project-card"><div class="project-icon"><i class="{}"></i></div><h3>{}</h3><p>{}</p><div class="project-tags">{tags}</div><div class="project-stats">{stats}</div></div>"#,
        escape(&project.icon),
        escape(&project.title),
        escape(&project.description),
    )
}

fn project_stat(stat: &ProjectStat) -> String {
    format!(
        r#"<span><i class="{}"></i> {}</span>"#,
        escape(&stat.icon),
        escape(&stat.text)
    )
}
