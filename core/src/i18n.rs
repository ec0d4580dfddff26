/// User-facing summary strings in the supported languages
use crate::config::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ProcessingComplete,
    Success,
    Failure,
    FailedFiles,
    NoFilesSelected,
    Warning,
}

impl Message {
    pub fn text(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::ProcessingComplete, Language::En) => "Batch processing completed!",
            (Self::ProcessingComplete, Language::Zh) => "批量处理完成!",
            (Self::Success, Language::En) => "Success",
            (Self::Success, Language::Zh) => "成功",
            (Self::Failure, Language::En) => "Failure",
            (Self::Failure, Language::Zh) => "失败",
            (Self::FailedFiles, Language::En) => "Failed files:",
            (Self::FailedFiles, Language::Zh) => "失败的文件:",
            (Self::NoFilesSelected, Language::En) => "Please select files to process first",
            (Self::NoFilesSelected, Language::Zh) => "请先选择要处理的文件",
            (Self::Warning, Language::En) => "Warning",
            (Self::Warning, Language::Zh) => "警告",
        }
    }
}

/// `Batch processing completed!\nSuccess: 3 Failure: 2`
pub fn summary_line(language: Language, succeeded: usize, failed: usize) -> String {
    format!(
        "{}\n{}: {succeeded} {}: {failed}",
        Message::ProcessingComplete.text(language),
        Message::Success.text(language),
        Message::Failure.text(language),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_in_both_languages() {
        assert_eq!(
            summary_line(Language::En, 3, 2),
            "Batch processing completed!\nSuccess: 3 Failure: 2"
        );
        assert_eq!(summary_line(Language::Zh, 1, 0), "批量处理完成!\n成功: 1 失败: 0");
    }
}
