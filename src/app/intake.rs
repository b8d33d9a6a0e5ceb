use {
    crate::{
        config::{BACKEND, DF},
        data::PredictError,
        domain::{UploadedFile, looks_like_csv},
        ui::UI_TEXT,
    },
    eframe::egui::DroppedFile,
    poll_promise::Promise,
};

#[cfg(not(target_arch = "wasm32"))]
use {anyhow::Context, std::path::Path};

/// Result of the native or browser file dialog: `None` when the user cancelled.
pub(crate) type PickedFile = Option<Result<UploadedFile, PredictError>>;

#[derive(Debug)]
pub(crate) enum DropOutcome {
    /// Nothing in the drop looked like a CSV file.
    Ignored,
    Accepted(UploadedFile),
    /// A CSV was dropped but its bytes couldn't be read.
    Unreadable(PredictError),
}

/// Drag-and-drop half of the intake surface.
#[derive(Debug, Default)]
pub(crate) struct FileIntake {
    drag_active: bool,
}

impl FileIntake {
    pub(crate) fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    /// Visual feedback only.
    pub(crate) fn set_drag_active(&mut self, hovering: bool) {
        if hovering != self.drag_active && DF.log_intake {
            log::info!("Drag {}", if hovering { "entered" } else { "left" });
        }
        self.drag_active = hovering;
    }

    /// First file with a CSV MIME type or `.csv` name wins. Anything else is dropped silently.
    pub(crate) fn handle_drop(&mut self, files: &[DroppedFile]) -> DropOutcome {
        self.drag_active = false;

        let Some(csv) = files.iter().find(|f| is_csv_drop(f)) else {
            if DF.log_intake {
                log::info!("Ignoring drop of {} non-CSV file(s)", files.len());
            }
            return DropOutcome::Ignored;
        };

        match read_dropped(csv) {
            Ok(file) => DropOutcome::Accepted(file),
            Err(e) => DropOutcome::Unreadable(e),
        }
    }
}

fn dropped_name(file: &DroppedFile) -> String {
    if !file.name.is_empty() {
        return file.name.clone();
    }
    file.path
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn is_csv_drop(file: &DroppedFile) -> bool {
    looks_like_csv(&dropped_name(file), Some(file.mime.as_str()))
}

fn read_dropped(file: &DroppedFile) -> Result<UploadedFile, PredictError> {
    let name = dropped_name(file);
    let mime = Some(file.mime.clone());

    if let Some(bytes) = &file.bytes {
        return Ok(UploadedFile::new(name, mime, bytes.to_vec()));
    }

    #[cfg(not(target_arch = "wasm32"))]
    if let Some(path) = &file.path {
        return read_file_bytes(path)
            .map(|bytes| UploadedFile::new(name, mime, bytes))
            .map_err(|e| PredictError::Validation(format!("{:#}", e)));
    }

    Err(PredictError::Validation(format!(
        "{} {}",
        UI_TEXT.error_unreadable_file, name
    )))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_file_bytes(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Checks applied to whatever the file dialog returned.
pub(crate) fn validate_picked(file: UploadedFile) -> Result<UploadedFile, PredictError> {
    if !file.looks_like_csv() {
        return Err(PredictError::Validation(UI_TEXT.error_invalid_type.clone()));
    }
    if file.size() > BACKEND.max_upload_bytes {
        return Err(PredictError::Validation(UI_TEXT.error_too_large.clone()));
    }
    Ok(file)
}

/// NATIVE: blocking OS dialog, resolved before this returns.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn pick_file() -> Promise<PickedFile> {
    let picked = rfd::FileDialog::new()
        .add_filter("CSV", &["csv"])
        .pick_file()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            read_file_bytes(&path)
                .map(|bytes| UploadedFile::new(name, None, bytes))
                .map_err(|e| PredictError::Validation(format!("{:#}", e)))
        });
    Promise::from_ready(picked)
}

/// WASM: browser file input, resolved from a local task.
#[cfg(target_arch = "wasm32")]
pub(crate) fn pick_file() -> Promise<PickedFile> {
    let (sender, promise) = Promise::new();
    wasm_bindgen_futures::spawn_local(async move {
        let picked = match rfd::AsyncFileDialog::new()
            .add_filter("CSV", &["csv"])
            .pick_file()
            .await
        {
            Some(handle) => {
                let bytes = handle.read().await;
                Some(Ok(UploadedFile::new(handle.file_name(), None, bytes)))
            }
            None => None,
        };
        sender.send(picked);
    });
    promise
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::{path::PathBuf, sync::Arc},
    };

    fn in_memory(name: &str, mime: &str, bytes: &[u8]) -> DroppedFile {
        DroppedFile {
            name: name.to_string(),
            mime: mime.to_string(),
            bytes: Some(Arc::from(bytes)),
            ..Default::default()
        }
    }

    #[test]
    fn non_csv_drops_are_ignored() {
        let mut intake = FileIntake::default();
        intake.set_drag_active(true);
        let drop = [
            in_memory("notes.txt", "text/plain", b"hello"),
            in_memory("scores.xlsx", "", b"PK"),
            in_memory("scores.CSV", "", b"Hour"),
        ];
        assert!(matches!(intake.handle_drop(&drop), DropOutcome::Ignored));
        assert!(!intake.is_drag_active());
    }

    #[test]
    fn first_csv_in_the_drop_wins() {
        let mut intake = FileIntake::default();
        let drop = [
            in_memory("readme.md", "text/markdown", b"#"),
            in_memory("export", "text/csv", b"Hour,PEDOCS Score\n"),
            in_memory("later.csv", "", b"other"),
        ];
        let DropOutcome::Accepted(file) = intake.handle_drop(&drop) else {
            panic!("expected the CSV to be accepted");
        };
        assert_eq!(file.name, "export");
        assert!(file.has_csv_mime());
        assert_eq!(file.bytes, b"Hour,PEDOCS Score\n");
    }

    #[test]
    fn empty_drop_is_ignored() {
        let mut intake = FileIntake::default();
        assert!(matches!(intake.handle_drop(&[]), DropOutcome::Ignored));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_drop_reads_from_disk() {
        let path = std::env::temp_dir().join(format!("pedocs_intake_{}.csv", std::process::id()));
        std::fs::write(&path, b"Hour,PEDOCS Score\n2024-11-04 00:00:00,40\n").unwrap();
        let dropped = DroppedFile {
            path: Some(path.clone()),
            ..Default::default()
        };

        let outcome = FileIntake::default().handle_drop(&[dropped]);
        std::fs::remove_file(&path).unwrap();

        let DropOutcome::Accepted(file) = outcome else {
            panic!("expected the file to be read");
        };
        assert!(file.name.starts_with("pedocs_intake_"));
        assert_eq!(file.mime, None);
        assert!(file.bytes.starts_with(b"Hour,"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn missing_file_on_disk_is_unreadable() {
        let dropped = DroppedFile {
            path: Some(PathBuf::from("/definitely/not/here/scores.csv")),
            ..Default::default()
        };
        let DropOutcome::Unreadable(err) = FileIntake::default().handle_drop(&[dropped]) else {
            panic!("expected a read failure");
        };
        assert!(err.to_string().contains("scores.csv"));
    }

    #[test]
    fn picked_files_must_be_csv_and_small_enough() {
        let ok = UploadedFile::new("scores.csv", None, vec![b'x'; 10]);
        assert!(validate_picked(ok).is_ok());

        let wrong_type = UploadedFile::new("scores.txt", None, vec![]);
        assert_eq!(
            validate_picked(wrong_type).unwrap_err().to_string(),
            "Invalid file type. Please upload a CSV file."
        );

        let huge = UploadedFile::new("scores.csv", None, vec![0; BACKEND.max_upload_bytes + 1]);
        assert_eq!(
            validate_picked(huge).unwrap_err().to_string(),
            "File too large. Please upload a file smaller than 5MB."
        );
    }

    #[test]
    fn intake_copy_states_the_picker_size_limit() {
        let limit = format!("{}MB", BACKEND.max_upload_bytes / (1024 * 1024));
        assert!(UI_TEXT.intake_supported.contains(&limit));
        assert!(UI_TEXT.error_too_large.contains(&limit));
    }
}
