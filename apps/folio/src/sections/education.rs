use crate::models::content::{Certification, EducationDocument};
use crate::sections::escape;

pub fn render(doc: &EducationDocument) -> String {
    let degree = &doc.degree;
    let certifications: String = doc.certifications.iter().map(cert_item).collect();

    format!(
        r#"<div class="education-card"><div class="education-icon"><i class="fas fa-graduation-cap"></i></div><h3>{}</h3><h4>{}</h4><p class="education-date">{}</p><p class="cgpa">CGPA: {}</p><p>{}</p></div><div class="certificates"><h3>Certifications</h3>{certifications}</div>"#,
        escape(&degree.title),
        escape(&degree.institution),
        escape(&degree.date),
        escape(&degree.cgpa.to_string()),
        escape(&degree.coursework),
    )
}

fn cert_item(cert: &Certification) -> String {
    format!(
        r#"<div class="cert-item"><i class="fas fa-certificate"></i><div><h4>{}</h4><p>{}, {}</p></div></div>"#,
        escape(&cert.title),
        escape(&cert.issuer),
        escape(&cert.year.to_string())
    )
}
