use serde::Serialize;
use tera::{Context, Tera};

use crate::compose::CombinedDocument;
use crate::error::ExportError;

pub const PRESCRIPTION_TEMPLATE_NAME: &str = "prescription.md";

/// Built-in layout of the combined prescription, in the Markdown subset
/// [`crate::docx::generate_docx`] understands.
pub const PRESCRIPTION_TEMPLATE: &str = r#"# {{ clinic_name }}
Holistic Wellness & Behavioral Medicine

**Patient Name:** {{ patient_name }}
**Prescribing Clinician:** {{ clinician }}
**Prescription Date:** {{ date }}
**Reference:** {{ reference }}

## Rx
{% for section in sections %}
### {{ section.numeral }}. {{ section.heading }}
{{ section.body }}
{% endfor %}
**NOTE:** {{ disclaimer }}
"#;

/// Render a Tera template against any serializable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// Top-level fields of `data` become the template variables.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    data: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(data)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    Ok(tera.render(template_name, &context)?)
}

/// Render the combined prescription with the built-in layout.
pub fn render_prescription(document: &CombinedDocument) -> Result<String, ExportError> {
    render_template(PRESCRIPTION_TEMPLATE_NAME, PRESCRIPTION_TEMPLATE, document)
}
