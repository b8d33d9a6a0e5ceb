use std::sync::LazyLock;

pub struct UiText {
    // --- HEADER ---
    pub app_title: String,
    pub app_subtitle: String,

    // --- INTAKE ---
    pub intake_heading: String,
    pub intake_hint: String,
    pub intake_drop_now: String,
    pub intake_button: String,
    pub intake_button_busy: String,
    pub intake_supported: String,
    pub uploading_prefix: String,

    // --- INFO CARDS (value, caption) ---
    pub info_cards: &'static [(&'static str, &'static str)],

    // --- RESULTS ---
    pub results_heading: String,
    pub results_points_suffix: String,
    pub results_empty: String,
    pub upload_new_button: String,

    // --- PLOT LABELS ---
    pub plot_x_axis: String,
    pub plot_y_axis: String,

    // --- TOASTS ---
    pub toast_success_title: String,
    pub toast_failure_title: String,

    // --- ERRORS ---
    pub error_unexpected: String,
    pub error_invalid_type: String,
    pub error_too_large: String,
    pub error_unreadable_file: String,
}

// THE SINGLETON
pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "PEDOCS Score Predictions".to_string(),
    app_subtitle: "Upload your CSV data to generate future predictions for the next 24 hours"
        .to_string(),

    intake_heading: "Upload CSV File".to_string(),
    intake_hint: "Drag and drop your CSV file here, or click to browse".to_string(),
    intake_drop_now: "Release to upload".to_string(),
    intake_button: "Choose File".to_string(),
    intake_button_busy: "Processing...".to_string(),
    intake_supported: "Supported format: CSV files only. Choose File accepts up to 5MB.".to_string(),
    uploading_prefix: "Predicting from".to_string(),

    info_cards: &[
        ("24 Hours", "Prediction Window"),
        ("CSV Upload", "Drag & Drop Support"),
        ("Real-time", "Instant Predictions"),
    ],

    results_heading: "Prediction Results".to_string(),
    results_points_suffix: "data points".to_string(),
    results_empty: "The prediction service returned no points.".to_string(),
    upload_new_button: "Upload New File".to_string(),

    plot_x_axis: "Time".to_string(),
    plot_y_axis: "PEDOCS Score".to_string(),

    toast_success_title: "Success!".to_string(),
    toast_failure_title: "Upload Failed".to_string(),

    error_unexpected: "An unexpected error occurred".to_string(),
    error_invalid_type: "Invalid file type. Please upload a CSV file.".to_string(),
    error_too_large: "File too large. Please upload a file smaller than 5MB.".to_string(),
    error_unreadable_file: "Could not read dropped file".to_string(),
});
