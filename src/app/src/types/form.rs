use serde::{Deserialize, Serialize};

/// One entry of a submitted HTML form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FormEntry {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        filename: String,
        content_type: Option<String>,
        content: Vec<u8>,
    },
}

impl FormEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// Snapshot of a submitted form, collected by the shell.
///
/// Entries keep their submission order and names may repeat, the same way
/// the browser's `FormData` behaves.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormData {
    pub entries: Vec<FormEntry>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(FormEntry::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Append a file field
    pub fn file(
        mut self,
        name: impl Into<String>,
        filename: impl Into<String>,
        content_type: Option<String>,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        self.entries.push(FormEntry::File {
            name: name.into(),
            filename: filename.into(),
            content_type,
            content: content.into(),
        });
        self
    }

    /// First text value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.iter().find_map(|entry| match entry {
            FormEntry::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Same as [`FormData::get`] but treats an empty value as missing.
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    /// Remove every entry submitted under `name`
    pub fn delete(&mut self, name: &str) {
        self.entries.retain(|entry| entry.name() != name);
    }

    /// Encode as `multipart/form-data` with a freshly generated boundary.
    pub fn to_multipart(&self) -> Result<MultipartBody, String> {
        let boundary =
            random_boundary().map_err(|e| format!("Failed to generate multipart boundary: {e}"))?;
        Ok(self.to_multipart_with_boundary(&boundary))
    }

    pub fn to_multipart_with_boundary(&self, boundary: &str) -> MultipartBody {
        let mut body = Vec::new();

        for entry in &self.entries {
            body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
            match entry {
                FormEntry::Text { name, value } => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                            escape_field(name)
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(value.as_bytes());
                }
                FormEntry::File {
                    name,
                    filename,
                    content_type,
                    content,
                } => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                            escape_field(name),
                            escape_field(filename)
                        )
                        .as_bytes(),
                    );
                    let content_type = content_type
                        .as_deref()
                        .unwrap_or("application/octet-stream");
                    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
                    body.extend_from_slice(content);
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

        MultipartBody {
            boundary: boundary.to_string(),
            body,
        }
    }
}

/// Encoded `multipart/form-data` request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartBody {
    pub boundary: String,
    pub body: Vec<u8>,
}

impl MultipartBody {
    /// Value for the request's `Content-Type` header
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }
}

// Browsers percent-encode these in field names and filenames.
fn escape_field(value: &str) -> String {
    value
        .replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn random_boundary() -> Result<String, getrandom::Error> {
    let mut bytes = [0u8; 16];
    getrandom::fill(&mut bytes)?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("----DevconfFormBoundary{hex}"))
}
