//! Files received through multipart requests.
//!
//! Uploaded files are described with the object shape the validation layer checks:
//! `{filename, path, headers: {content-disposition, content-type}, bytes}`.

use serde::Serialize;

/// Multipart fields that may carry a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadField {
    Flag,
    File,
}

impl UploadField {
    pub const ALL: [UploadField; 2] = [UploadField::Flag, UploadField::File];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "flag" => Some(Self::Flag),
            "file" => Some(Self::File),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Flag => "flag",
            Self::File => "file",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadHeaders {
    #[serde(rename = "content-disposition")]
    pub content_disposition: String,
    #[serde(rename = "content-type")]
    pub content_type: String,
}

/// A file written to the upload directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedFile {
    /// Name the file is stored under, recorded on the server record
    pub filename: String,
    /// Name supplied by the client
    #[serde(skip)]
    pub original_name: String,
    pub path: String,
    pub headers: UploadHeaders,
    pub bytes: u64,
}

/// Files uploaded with a single request, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Uploads {
    pub flag: Option<UploadedFile>,
    pub file: Option<UploadedFile>,
}

impl Uploads {
    pub fn get(&self, field: UploadField) -> Option<&UploadedFile> {
        match field {
            UploadField::Flag => self.flag.as_ref(),
            UploadField::File => self.file.as_ref(),
        }
    }

    pub fn insert(&mut self, field: UploadField, file: UploadedFile) {
        match field {
            UploadField::Flag => self.flag = Some(file),
            UploadField::File => self.file = Some(file),
        }
    }

    /// Stored filename for `field`, if a file was uploaded under it.
    pub fn filename(&self, field: UploadField) -> Option<String> {
        self.get(field).map(|file| file.filename.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.flag.is_none() && self.file.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UploadedFile> {
        self.flag.iter().chain(self.file.iter())
    }
}
