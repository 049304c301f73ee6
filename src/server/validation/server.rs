//! Schemas for the server endpoints.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::server::{
    error::validation::ValidationError,
    model::{
        server::{
            QueryOptions, ServerFilter, SortCriterion, SortDirection, SortField, MAX_LIMIT,
        },
        upload::{UploadField, Uploads},
    },
    validation::custom,
};

const BODY_KEYS: [&str; 4] = ["name", "ip", "flag", "file"];
const QUERY_KEYS: [&str; 7] = ["name", "ip", "flag", "file", "sortBy", "limit", "page"];
const FILE_KEYS: [&str; 4] = ["filename", "path", "headers", "bytes"];
const HEADER_KEYS: [&str; 2] = ["content-disposition", "content-type"];

/// Validated body of a create request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateServerBody {
    pub name: String,
    /// Trimmed IP literal
    pub ip: String,
}

/// What an update request asks for a stored file reference when no file is uploaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileChange {
    #[default]
    Keep,
    /// The field was sent as `null`
    Clear,
}

/// Validated body of an update request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateServerBody {
    pub name: Option<String>,
    pub ip: Option<String>,
    pub flag: FileChange,
    pub file: FileChange,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Presence {
    Required,
    Optional,
}

/// Validates the body of `POST /servers`.
///
/// `name` and `ip` are required strings, `ip` must be an IP literal. `flag` and `file`
/// may be absent, `null` or an uploaded file object; the request's uploads are checked
/// against the same file object rules.
pub fn create_server(
    body: &Map<String, Value>,
    uploads: &Uploads,
) -> Result<CreateServerBody, ValidationError> {
    let mut errors = ValidationError::default();

    reject_unknown_keys(body, &BODY_KEYS, "", &mut errors);
    let name = string_field(body, "name", "", Presence::Required, &mut errors);
    let ip = ip_field(body.get("ip"), Presence::Required, &mut errors);
    check_files(body, uploads, &mut errors);

    match (name, ip) {
        (Some(name), Some(ip)) => errors.into_result(CreateServerBody {
            name: name.to_string(),
            ip,
        }),
        _ => Err(errors),
    }
}

/// Validates `PATCH /servers/{serverId}`.
///
/// Every body field is optional but at least one must be given, counting uploaded files.
pub fn update_server(
    server_id: &str,
    body: &Map<String, Value>,
    uploads: &Uploads,
) -> Result<(i32, UpdateServerBody), ValidationError> {
    let mut errors = ValidationError::default();

    let id = id_field(server_id, &mut errors);

    if body.is_empty() && uploads.is_empty() {
        errors.push("\"value\" must have at least 1 key");
    }

    reject_unknown_keys(body, &BODY_KEYS, "", &mut errors);
    let name = string_field(body, "name", "", Presence::Optional, &mut errors);
    let ip = ip_field(body.get("ip"), Presence::Optional, &mut errors);
    check_files(body, uploads, &mut errors);

    let update = UpdateServerBody {
        name: name.map(str::to_string),
        ip,
        flag: file_change(body.get("flag")),
        file: file_change(body.get("file")),
    };

    match id {
        Some(id) => errors.into_result((id, update)),
        None => Err(errors),
    }
}

/// Validates the query string of `GET /servers`.
///
/// Only the filter keys `name`, `ip`, `flag`, `file` and the option keys `sortBy`,
/// `limit`, `page` are accepted.
pub fn get_servers(
    query: &HashMap<String, String>,
) -> Result<(ServerFilter, QueryOptions), ValidationError> {
    let mut errors = ValidationError::default();

    let mut unknown: Vec<&String> = query
        .keys()
        .filter(|key| !QUERY_KEYS.contains(&key.as_str()))
        .collect();
    unknown.sort();
    for key in unknown {
        errors.push(format!("{} is not allowed", quoted(key)));
    }

    let mut text = |key: &str| {
        let value = query.get(key)?;
        if value.is_empty() {
            errors.push(format!("{} is not allowed to be empty", quoted(key)));
            return None;
        }
        Some(value.clone())
    };

    let name = text("name");
    let flag = text("flag");
    let file = text("file");

    let ip = query
        .get("ip")
        .map(|ip| Value::String(ip.clone()))
        .and_then(|ip| ip_field(Some(&ip), Presence::Optional, &mut errors));

    let mut options = QueryOptions::default();

    if let Some(sort_by) = query.get("sortBy") {
        match parse_sort_by(sort_by) {
            Some(criteria) => options.sort_by = criteria,
            None => errors.push(format!(
                "\"sortBy\" with value {:?} must be a comma-separated list of field[:asc|desc]",
                sort_by
            )),
        }
    }

    for (key, target) in [("limit", &mut options.limit), ("page", &mut options.page)] {
        if let Some(value) = query.get(key) {
            match custom::positive_integer(value) {
                Ok(number) => *target = number,
                Err(rule) => errors.push(format!("{} {}", quoted(key), rule)),
            }
        }
    }

    if options.limit > MAX_LIMIT {
        errors.push(format!("\"limit\" must be less than or equal to {MAX_LIMIT}"));
    }

    // The page offset has to fit a signed 64-bit SQL OFFSET
    let max_page = custom::max_page(options.limit.min(MAX_LIMIT));
    if options.page > max_page {
        errors.push(format!("\"page\" must be less than or equal to {max_page}"));
    }

    let filter = ServerFilter {
        name,
        ip,
        flag,
        file,
    };

    errors.into_result((filter, options))
}

/// Validates the `serverId` path parameter of `GET` and `DELETE /servers/{serverId}`.
pub fn server_id(value: &str) -> Result<i32, ValidationError> {
    let mut errors = ValidationError::default();

    match id_field(value, &mut errors) {
        Some(id) => Ok(id),
        None => Err(errors),
    }
}

fn id_field(value: &str, errors: &mut ValidationError) -> Option<i32> {
    let id = custom::object_id(value);
    if id.is_none() {
        errors.push("\"serverId\" must be a valid id");
    }
    id
}

fn quoted(label: &str) -> String {
    format!("\"{label}\"")
}

fn label(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        quoted(key)
    } else {
        quoted(&format!("{prefix}.{key}"))
    }
}

fn reject_unknown_keys(
    object: &Map<String, Value>,
    allowed: &[&str],
    prefix: &str,
    errors: &mut ValidationError,
) {
    for key in object.keys() {
        if !allowed.contains(&key.as_str()) {
            errors.push(format!("{} is not allowed", label(prefix, key)));
        }
    }
}

/// Checks that `key` holds a non-empty string, returning it when valid.
fn string_field<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    prefix: &str,
    presence: Presence,
    errors: &mut ValidationError,
) -> Option<&'a str> {
    match object.get(key) {
        None => {
            if presence == Presence::Required {
                errors.push(format!("{} is required", label(prefix, key)));
            }
            None
        }
        Some(Value::String(value)) if value.is_empty() => {
            errors.push(format!("{} is not allowed to be empty", label(prefix, key)));
            None
        }
        Some(Value::String(value)) => Some(value),
        Some(_) => {
            errors.push(format!("{} must be a string", label(prefix, key)));
            None
        }
    }
}

fn ip_field(
    value: Option<&Value>,
    presence: Presence,
    errors: &mut ValidationError,
) -> Option<String> {
    let value = match value {
        None if presence == Presence::Required => {
            errors.push("\"ip\" is required");
            return None;
        }
        None => return None,
        Some(Value::String(value)) => value.trim(),
        Some(_) => {
            errors.push("\"ip\" must be a string");
            return None;
        }
    };

    if value.is_empty() {
        errors.push("\"ip\" is not allowed to be empty");
        None
    } else if !custom::ip(value) {
        errors.push("\"ip\" must be a valid ip address");
        None
    } else {
        Some(value.to_string())
    }
}

/// Checks `flag` and `file` in the body and in the request's uploads.
fn check_files(body: &Map<String, Value>, uploads: &Uploads, errors: &mut ValidationError) {
    for field in UploadField::ALL {
        match body.get(field.name()) {
            None | Some(Value::Null) => {}
            Some(value) => check_file_object(field, value, errors),
        }

        if let Some(upload) = uploads.get(field) {
            match serde_json::to_value(upload) {
                Ok(value) => check_file_object(field, &value, errors),
                Err(e) => errors.push(format!("{} {}", quoted(field.name()), e)),
            }
        }
    }
}

fn check_file_object(field: UploadField, value: &Value, errors: &mut ValidationError) {
    let prefix = field.name();

    let Value::Object(object) = value else {
        errors.push(format!("{} must be of type object", quoted(prefix)));
        return;
    };

    reject_unknown_keys(object, &FILE_KEYS, prefix, errors);
    string_field(object, "filename", prefix, Presence::Required, errors);
    string_field(object, "path", prefix, Presence::Required, errors);

    match object.get("bytes") {
        None => errors.push(format!("{} is required", label(prefix, "bytes"))),
        Some(Value::Number(_)) => {}
        Some(_) => errors.push(format!("{} must be a number", label(prefix, "bytes"))),
    }

    let headers_prefix = format!("{prefix}.headers");
    match object.get("headers") {
        None => errors.push(format!("{} is required", quoted(&headers_prefix))),
        Some(Value::Object(headers)) => {
            reject_unknown_keys(headers, &HEADER_KEYS, &headers_prefix, errors);
            string_field(
                headers,
                "content-disposition",
                &headers_prefix,
                Presence::Required,
                errors,
            );
            if let Some(content_type) = string_field(
                headers,
                "content-type",
                &headers_prefix,
                Presence::Required,
                errors,
            ) {
                check_content_type(field, &headers_prefix, content_type, errors);
            }
        }
        Some(_) => errors.push(format!("{} must be of type object", quoted(&headers_prefix))),
    }
}

fn check_content_type(
    field: UploadField,
    headers_prefix: &str,
    content_type: &str,
    errors: &mut ValidationError,
) {
    let label = label(headers_prefix, "content-type");

    match field {
        UploadField::Flag if !custom::image_content_type(content_type) => errors.push(format!(
            "{} with value {:?} fails to match the required pattern: {}",
            label,
            content_type,
            custom::IMAGE_CONTENT_TYPE_PATTERN
        )),
        UploadField::File if content_type != custom::CONFIG_CONTENT_TYPE => errors.push(format!(
            "{} must be [{}]",
            label,
            custom::CONFIG_CONTENT_TYPE
        )),
        _ => {}
    }
}

fn file_change(value: Option<&Value>) -> FileChange {
    match value {
        Some(Value::Null) => FileChange::Clear,
        _ => FileChange::Keep,
    }
}

/// Parses `field[:asc|desc]` criteria separated by commas.
fn parse_sort_by(value: &str) -> Option<Vec<SortCriterion>> {
    value
        .split(',')
        .map(|criterion| {
            let (field, direction) = match criterion.trim().split_once(':') {
                Some((field, "asc")) => (field, SortDirection::Asc),
                Some((field, "desc")) => (field, SortDirection::Desc),
                Some(_) => return None,
                None => (criterion.trim(), SortDirection::Asc),
            };

            Some(SortCriterion {
                field: SortField::from_key(field)?,
                direction,
            })
        })
        .collect()
}
