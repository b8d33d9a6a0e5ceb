pub const CSV_MIME: &str = "text/csv";
pub const CSV_EXTENSION: &str = ".csv";

/// Raw file handed over by the drop target or the file picker.
/// Consumed by the upload request; nothing keeps it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.filter(|m| !m.is_empty()),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn has_csv_mime(&self) -> bool {
        self.mime.as_deref() == Some(CSV_MIME)
    }

    /// Same test the drop target applies: CSV MIME type or a `.csv` name.
    pub fn looks_like_csv(&self) -> bool {
        looks_like_csv(&self.name, self.mime.as_deref())
    }
}

/// Case-sensitive suffix match, like the browser client it replaces.
pub(crate) fn looks_like_csv(name: &str, mime: Option<&str>) -> bool {
    mime == Some(CSV_MIME) || name.ends_with(CSV_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_by_name_or_mime() {
        assert!(UploadedFile::new("scores.csv", None, vec![]).looks_like_csv());
        assert!(UploadedFile::new("export", Some(CSV_MIME.into()), vec![]).looks_like_csv());
        assert!(!UploadedFile::new("scores.txt", Some("text/plain".into()), vec![]).looks_like_csv());
        assert!(!UploadedFile::new("SCORES.CSV", None, vec![]).looks_like_csv());
    }

    #[test]
    fn empty_mime_is_dropped() {
        let file = UploadedFile::new("a.csv", Some(String::new()), b"Hour".to_vec());
        assert_eq!(file.mime, None);
        assert_eq!(file.size(), 4);
        assert!(!file.has_csv_mime());
    }
}
