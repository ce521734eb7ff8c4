use reqwest::multipart::{Form, Part};
use tgb_core::{errors::Error, requests::FormPart, Result};

pub(crate) fn into_form(parts: Vec<FormPart>) -> Result<Form> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File {
                name,
                file_name,
                bytes,
            } => {
                let file = Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str("application/octet-stream")
                    .map_err(|e| Error::Encode(format!("error creating form file {name}: {e}")))?;
                form.part(name, file)
            }
        };
    }
    Ok(form)
}
