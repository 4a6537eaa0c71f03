use anyhow::{Context, Result};
use liquid::{Parser, ParserBuilder};
use liquid_core::{Object, Value};

use crate::template_store::{Template, TemplateKind};
use crate::template_variables::Answers;

pub const PROJECT_NAME_VAR: &str = "project-name";
pub const AUTHOR_NAME_VAR: &str = "author-name";

/// Plain liquid, no filters registered: templates only ever output a variable as-is
pub fn create_liquid_engine() -> Result<Parser> {
    ParserBuilder::new()
        .build()
        .context("cannot build the template engine")
}

/// create liquid object for the templates, holding the two answers
pub fn create_liquid_object(answers: &Answers) -> Object {
    let mut liquid_object = Object::new();
    liquid_object.insert(
        PROJECT_NAME_VAR.into(),
        Value::Scalar(answers.project_name.clone().into()),
    );
    liquid_object.insert(
        AUTHOR_NAME_VAR.into(),
        Value::Scalar(answers.author_name.clone().into()),
    );
    liquid_object
}

/// Produce the final contents of one template
pub fn render_template(template: &Template, parser: &Parser, context: &Object) -> Result<String> {
    match template.kind {
        TemplateKind::Verbatim => Ok(template.contents.to_string()),
        TemplateKind::Rendered => render_string(parser, context, template.contents)
            .with_context(|| format!("cannot render {}", template.destination)),
    }
}

pub fn render_string(parser: &Parser, context: &Object, content: &str) -> Result<String> {
    let template = parser.parse(content)?;
    Ok(template.render(context)?)
}
