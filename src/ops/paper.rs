use serde::Serialize;

/// What kind of document a file is, judged from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperKind {
    QuestionPaper,
    MarkScheme,
    Other,
}

impl PaperKind {
    /// Short badge shown next to a file
    pub fn badge(self) -> &'static str {
        match self {
            PaperKind::QuestionPaper => "QP",
            PaperKind::MarkScheme => "MS",
            PaperKind::Other => "",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaperKind::QuestionPaper => "Question Paper",
            PaperKind::MarkScheme => "Mark Scheme",
            PaperKind::Other => "Document",
        }
    }
}

/// Classify a file name by its `_ms` / `_qp` token.
pub fn classify(file_name: &str) -> PaperKind {
    let lower = file_name.to_lowercase();
    if lower.contains("_ms_") || lower.contains("_ms.") {
        PaperKind::MarkScheme
    } else if lower.contains("_qp_") || lower.contains("_qp.") {
        PaperKind::QuestionPaper
    } else {
        PaperKind::Other
    }
}

/// File name without a trailing `.pdf`.
pub fn display_name(file_name: &str) -> &str {
    let len = file_name.len();
    if len > 4
        && file_name.is_char_boundary(len - 4)
        && file_name[len - 4..].eq_ignore_ascii_case(".pdf")
    {
        &file_name[..len - 4]
    } else {
        file_name
    }
}
