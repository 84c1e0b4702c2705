//! Form assembly and multipart submission
//!
//! [`SubmissionForm`] is a declarative name → value list built from a
//! [`SelectionState`]; it is converted to a `reqwest` multipart body only at
//! send time.

use std::future::Future;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use url::Url;

use crate::catalog::TagCategory;
use crate::dropzone::DropzoneKind;
use crate::error::{UploadError, UploadResult};
use crate::selection::{FileBlob, SelectionState};

/// Value carried by one form field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    File { blob: FileBlob, mime: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: &'static str,
    pub value: FieldValue,
}

/// Ordered form fields for one upload.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionForm {
    fields: Vec<FormField>,
}

impl SubmissionForm {
    /// Serialize the selection: `file`, optional `portrait`, `server`,
    /// `exposure`, `expiration`, then one comma-joined field per tag
    /// category. Empty tag categories are sent as empty strings.
    pub fn assemble(selection: &SelectionState) -> UploadResult<Self> {
        let file = selection.file().ok_or(UploadError::MissingCharacterFile)?;
        let server = selection.server();

        let mut fields = vec![FormField {
            name: DropzoneKind::Character.field_name(),
            value: FieldValue::File {
                blob: file.clone(),
                mime: DropzoneKind::Character.mime(),
            },
        }];

        if let Some(portrait) = selection.portrait() {
            fields.push(FormField {
                name: DropzoneKind::Portrait.field_name(),
                value: FieldValue::File {
                    blob: portrait.clone(),
                    mime: DropzoneKind::Portrait.mime(),
                },
            });
        }

        let text = |name: &'static str, value: String| FormField {
            name,
            value: FieldValue::Text(value),
        };
        fields.push(text("server", server.as_str().to_string()));
        fields.push(text("exposure", selection.exposure().as_str().to_string()));
        fields.push(text("expiration", selection.expiration().as_str().to_string()));
        for category in TagCategory::ALL {
            fields.push(text(category.field_name(), selection.ordered_tags(category).join(",")));
        }

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Value of a text field
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|f| f.name == name).and_then(|f| match &f.value {
            FieldValue::Text(value) => Some(value.as_str()),
            FieldValue::File { .. } => None,
        })
    }

    /// Blob of a file field
    pub fn file(&self, name: &str) -> Option<&FileBlob> {
        self.fields.iter().find(|f| f.name == name).and_then(|f| match &f.value {
            FieldValue::File { blob, .. } => Some(blob),
            FieldValue::Text(_) => None,
        })
    }

    pub fn into_multipart(self) -> UploadResult<Form> {
        let mut form = Form::new();
        for field in self.fields {
            form = match field.value {
                FieldValue::Text(value) => form.text(field.name, value),
                FieldValue::File { blob, mime } => {
                    let part = Part::bytes(blob.bytes.to_vec())
                        .file_name(blob.name)
                        .mime_str(mime)?;
                    form.part(field.name, part)
                }
            };
        }
        Ok(form)
    }
}

/// Outcome of a successful post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub status: u16,
    /// URL after redirects, usually the uploaded character's page
    pub final_url: Url,
}

/// Sends an assembled form somewhere.
pub trait Submitter {
    fn submit(&self, form: SubmissionForm) -> impl Future<Output = UploadResult<SubmitReceipt>> + Send;
}

/// Posts forms as multipart/form-data to a fixed endpoint.
///
/// Cloning shares the underlying connection pool, so build one at startup
/// and hand out clones.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: Client,
    endpoint: Url,
}

impl HttpSubmitter {
    /// Fails if the HTTP client (TLS backend) cannot be initialized.
    pub fn new(endpoint: Url) -> UploadResult<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Submitter for HttpSubmitter {
    async fn submit(&self, form: SubmissionForm) -> UploadResult<SubmitReceipt> {
        let file_name = form.file(DropzoneKind::Character.field_name()).map(|f| f.name.clone());
        tracing::info!(endpoint = %self.endpoint, file = ?file_name, "submitting character upload");

        let body = form.into_multipart()?;
        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "upload rejected");
            return Err(UploadError::Rejected {
                status: status.as_u16(),
            });
        }

        Ok(SubmitReceipt {
            status: status.as_u16(),
            final_url: response.url().clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Expiration, Server};

    fn selection_with_file() -> SelectionState {
        let mut s = SelectionState::new();
        s.set_file(FileBlob::new("hero.bic", vec![0xB1, 0xC0]));
        s
    }

    #[test]
    fn assemble_requires_character_file() {
        let err = SubmissionForm::assemble(&SelectionState::new()).unwrap_err();
        assert!(matches!(err, UploadError::MissingCharacterFile));
    }

    #[test]
    fn assemble_field_order_without_portrait() {
        let form = SubmissionForm::assemble(&selection_with_file()).unwrap();
        let names: Vec<_> = form.fields().iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["file", "server", "exposure", "expiration", "tags-type", "tags-features", "tags-purpose"]
        );
        assert_eq!(form.text("server"), Some("nwn"));
        assert_eq!(form.text("exposure"), Some("public"));
        assert_eq!(form.text("expiration"), Some("never"));
        assert_eq!(form.text("tags-features"), Some(""));
    }

    #[test]
    fn assemble_includes_portrait_part() {
        let mut s = selection_with_file();
        s.set_portrait(FileBlob::new("hero.tga", vec![1]));
        s.set_server(Server::Sinfar);
        s.set_expiration(Expiration::OneWeek);
        let form = SubmissionForm::assemble(&s).unwrap();

        assert_eq!(form.file("portrait").map(|p| p.name.as_str()), Some("hero.tga"));
        assert_eq!(form.text("server"), Some("sinfar"));
        assert_eq!(form.text("expiration"), Some("1-weeks"));
        assert_eq!(form.text("portrait"), None);
    }

    #[test]
    fn http_submitter_keeps_endpoint() {
        let endpoint = Url::parse("http://127.0.0.1:9/upload").unwrap();
        let submitter = HttpSubmitter::new(endpoint.clone()).unwrap();
        assert_eq!(submitter.endpoint(), &endpoint);
        assert_eq!(submitter.clone().endpoint(), &endpoint);
    }

    #[test]
    fn into_multipart_accepts_all_fields() {
        let mut s = selection_with_file();
        s.set_portrait(FileBlob::new("hero.tga", vec![1]));
        let form = SubmissionForm::assemble(&s).unwrap();
        assert!(form.into_multipart().is_ok());
    }
}
