//! Request body extraction for create and update requests.
//!
//! `ServerPayload` accepts `multipart/form-data` and `application/json` bodies. Multipart
//! text fields become string values; file parts under `flag` or `file` are written to the
//! upload store before the handler runs. A request with no body yields an empty payload.

use axum::{
    extract::{FromRequest, Multipart, Request},
    http::{
        header::{HeaderName, CONTENT_DISPOSITION, CONTENT_TYPE},
        HeaderMap,
    },
    Json,
};
use serde_json::{Map, Value};

use crate::server::{
    error::{validation::ValidationError, AppError},
    model::upload::{UploadField, UploadHeaders, UploadedFile, Uploads},
    state::AppState,
    util::storage::UploadStore,
};

const DEFAULT_FILE_CONTENT_TYPE: &str = "application/octet-stream";

/// Body fields plus the files stored for this request
#[derive(Debug, Default)]
pub struct ServerPayload {
    pub body: Map<String, Value>,
    pub uploads: Uploads,
}

enum BodyKind {
    Multipart,
    Json,
    Empty,
    Unsupported(String),
}

impl BodyKind {
    fn of(headers: &HeaderMap) -> Self {
        let Some(content_type) = headers.get(CONTENT_TYPE) else {
            return Self::Empty;
        };

        let content_type = content_type.to_str().unwrap_or_default();
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match mime.as_str() {
            "multipart/form-data" => Self::Multipart,
            "application/json" => Self::Json,
            _ => Self::Unsupported(content_type.to_string()),
        }
    }
}

impl FromRequest<AppState> for ServerPayload {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        match BodyKind::of(req.headers()) {
            BodyKind::Multipart => {
                let mut multipart = Multipart::from_request(req, state).await?;
                let mut payload = Self::default();

                if let Err(err) = payload.read_multipart(&mut multipart, &state.uploads).await {
                    state.uploads.discard(&payload.uploads).await;
                    return Err(err);
                }

                Ok(payload)
            }
            BodyKind::Json => {
                let Json(value) = Json::<Value>::from_request(req, state).await?;

                match value {
                    Value::Object(body) => Ok(Self {
                        body,
                        uploads: Uploads::default(),
                    }),
                    _ => Err(ValidationError::single("\"value\" must be of type object").into()),
                }
            }
            BodyKind::Empty => Ok(Self::default()),
            BodyKind::Unsupported(content_type) => Err(AppError::UnsupportedMediaType(format!(
                "Unsupported content type {content_type:?}, expected multipart/form-data or application/json"
            ))),
        }
    }
}

impl ServerPayload {
    async fn read_multipart(
        &mut self,
        multipart: &mut Multipart,
        store: &UploadStore,
    ) -> Result<(), AppError> {
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            let Some(original_name) = field.file_name().map(str::to_string) else {
                let value = field.text().await?;
                self.body.insert(name, Value::String(value));
                continue;
            };

            // Browsers send an empty file part when no file was picked
            if original_name.is_empty() {
                continue;
            }

            let Some(upload_field) = UploadField::from_name(&name) else {
                return Err(AppError::BadRequest(format!(
                    "Unexpected file field \"{name}\""
                )));
            };

            if self.uploads.get(upload_field).is_some() {
                return Err(AppError::BadRequest(format!(
                    "Too many files for field \"{name}\""
                )));
            }

            // Raw header value, `conf` is not a parseable MIME type
            let content_type = part_header(field.headers(), CONTENT_TYPE)
                .unwrap_or_else(|| DEFAULT_FILE_CONTENT_TYPE.to_string());
            let content_disposition = part_header(field.headers(), CONTENT_DISPOSITION)
                .unwrap_or_else(|| {
                    format!("form-data; name=\"{name}\"; filename=\"{original_name}\"")
                });

            let data = field.bytes().await?;
            let (filename, path) = store.save(&original_name, &data).await?;

            self.uploads.insert(
                upload_field,
                UploadedFile {
                    filename,
                    original_name,
                    path: path.to_string_lossy().into_owned(),
                    headers: UploadHeaders {
                        content_disposition,
                        content_type,
                    },
                    bytes: data.len() as u64,
                },
            );
        }

        Ok(())
    }
}

fn part_header(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
