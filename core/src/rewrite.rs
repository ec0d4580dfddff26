/// Block-scoped texture rewriting for `.rvmat` material text.
///
/// The scan is a flat two-state machine over lines: a line containing
/// `class <Name>` opens the target block, a line whose trimmed text starts
/// with `};` closes it. Nothing is parsed into a tree, so a nested class
/// inside the target block closes it early.
use crate::error::RewriteError;
use log::debug;
use std::borrow::Cow;

/// Key whose assignment line gets replaced.
pub const ASSIGNMENT_KEY: &str = "texture=";

/// Why a rewrite left the document untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnchangedReason {
    BlockNotFound,
    AssignmentNotFound,
}

/// Result of [`rewrite_block_texture`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// The assignment on `line` (1-based) was replaced.
    Rewritten { content: String, line: usize },
    /// Output equals input.
    Unchanged {
        content: String,
        reason: UnchangedReason,
    },
}

impl RewriteOutcome {
    pub fn content(&self) -> &str {
        match self {
            Self::Rewritten { content, .. } | Self::Unchanged { content, .. } => content,
        }
    }

    pub fn into_content(self) -> String {
        match self {
            Self::Rewritten { content, .. } | Self::Unchanged { content, .. } => content,
        }
    }

    pub fn is_rewritten(&self) -> bool {
        matches!(self, Self::Rewritten { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Before,
    Inside { opened_at: usize },
    Done,
}

/// Replace the first `texture=` assignment inside the first `class <block_name>` block.
///
/// The replacement line keeps everything before `texture=` and ends with
/// `texture="<new_texture_path>";`; anything after the original assignment on
/// that line is dropped. A trailing `\r` survives so CRLF input stays CRLF.
/// Later blocks with the same name and later assignments in the same block are
/// never touched.
///
/// Returns [`RewriteError::UnterminatedBlock`] when the input ends while the
/// first target block is still open.
pub fn rewrite_block_texture(
    content: &str,
    block_name: &str,
    new_texture_path: &str,
) -> Result<RewriteOutcome, RewriteError> {
    let marker = format!("class {block_name}");
    let mut state = ScanState::Before;
    let mut rewritten_line = None;
    let mut lines: Vec<Cow<'_, str>> = Vec::new();

    for (idx, line) in content.split('\n').enumerate() {
        let line_no = idx + 1;
        match state {
            ScanState::Before if line.contains(&marker) => {
                state = ScanState::Inside { opened_at: line_no };
            }
            ScanState::Inside { .. } if line.trim().starts_with("};") => {
                state = ScanState::Done;
            }
            ScanState::Inside { .. }
                if rewritten_line.is_none() && line.contains(ASSIGNMENT_KEY) =>
            {
                lines.push(Cow::Owned(rewrite_assignment(line, new_texture_path)));
                rewritten_line = Some(line_no);
                continue;
            }
            _ => {}
        }
        lines.push(Cow::Borrowed(line));
    }

    if let ScanState::Inside { opened_at } = state {
        return Err(RewriteError::UnterminatedBlock {
            block: block_name.to_string(),
            line: opened_at,
        });
    }

    let outcome = match (state, rewritten_line) {
        (_, Some(line)) => {
            debug!("class {block_name}: replaced texture on line {line}");
            RewriteOutcome::Rewritten {
                content: lines.join("\n"),
                line,
            }
        }
        (ScanState::Before, None) => RewriteOutcome::Unchanged {
            content: content.to_string(),
            reason: UnchangedReason::BlockNotFound,
        },
        (_, None) => RewriteOutcome::Unchanged {
            content: content.to_string(),
            reason: UnchangedReason::AssignmentNotFound,
        },
    };

    Ok(outcome)
}

fn rewrite_assignment(line: &str, new_texture_path: &str) -> String {
    let prefix = line
        .find(ASSIGNMENT_KEY)
        .map(|pos| &line[..pos])
        .unwrap_or(line);
    let eol = if line.ends_with('\r') { "\r" } else { "" };
    format!("{prefix}{ASSIGNMENT_KEY}\"{new_texture_path}\";{eol}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "ambient[]={1,1,1,1};\n\
class Stage1\n\
{\n\
\ttexture=\"mod\\data\\skin_nohq.paa\";\n\
\tuvSource=\"tex\";\n\
};\n\
class Stage3\n\
{\n\
\ttexture=\"#(argb,8,8,3)color(0,0,0,0,MC)\";\n\
\tuvSource=\"tex\";\n\
};\n\
class Stage4\n\
{\n\
\ttexture=\"mod\\data\\skin_as.paa\";\n\
};\n";

    #[test]
    fn absent_block_is_a_no_op() {
        let doc = "class Stage1\n{\n\ttexture=\"a.paa\";\n};\n";
        for path in ["x.paa", "", "dz\\characters\\data\\generic_worn_mc.paa"] {
            let outcome = rewrite_block_texture(doc, "Stage3", path).unwrap();
            assert_eq!(outcome.content(), doc);
            assert_eq!(
                outcome,
                RewriteOutcome::Unchanged {
                    content: doc.to_string(),
                    reason: UnchangedReason::BlockNotFound,
                }
            );
        }
    }

    #[test]
    fn replaces_exactly_one_assignment() {
        let outcome = rewrite_block_texture(SAMPLE, "Stage3", "NEW.paa").unwrap();
        assert!(outcome.is_rewritten());

        let content = outcome.content();
        assert_eq!(content.matches("texture=\"NEW.paa\";").count(), 1);
        assert_eq!(content.lines().count(), SAMPLE.lines().count());
        assert!(content.contains("\ttexture=\"mod\\data\\skin_nohq.paa\";"));
        assert!(content.contains("\ttexture=\"mod\\data\\skin_as.paa\";"));
        assert!(matches!(outcome, RewriteOutcome::Rewritten { line: 9, .. }));
    }

    #[test]
    fn only_first_sibling_block_is_rewritten() {
        let doc = "class Stage3\n{\n\ttexture=\"OLD1\";\n};\nclass Stage3\n{\n\ttexture=\"OLD2\";\n};";
        let outcome = rewrite_block_texture(doc, "Stage3", "NEW").unwrap();
        assert_eq!(
            outcome.content(),
            "class Stage3\n{\n\ttexture=\"NEW\";\n};\nclass Stage3\n{\n\ttexture=\"OLD2\";\n};"
        );
    }

    #[test]
    fn only_first_assignment_in_block_is_rewritten() {
        let doc = "class Stage3\n{\n\ttexture=\"A\";\n\ttexture=\"B\";\n};";
        let outcome = rewrite_block_texture(doc, "Stage3", "NEW").unwrap();
        assert_eq!(
            outcome.content(),
            "class Stage3\n{\n\ttexture=\"NEW\";\n\ttexture=\"B\";\n};"
        );
    }

    #[test]
    fn same_path_round_trips() {
        let outcome =
            rewrite_block_texture(SAMPLE, "Stage3", "#(argb,8,8,3)color(0,0,0,0,MC)").unwrap();
        assert_eq!(outcome.content(), SAMPLE);
    }

    #[test]
    fn trailing_content_after_assignment_is_dropped() {
        let doc = "class Stage3\n{\n    texture=\"old.paa\"; // comment\n};";
        let outcome = rewrite_block_texture(doc, "Stage3", "new.paa").unwrap();
        assert_eq!(
            outcome.content(),
            "class Stage3\n{\n    texture=\"new.paa\";\n};"
        );
    }

    #[test]
    fn crlf_line_endings_survive() {
        let doc = "class Stage3\r\n{\r\n\ttexture=\"old.paa\";\r\n};\r\n";
        let outcome = rewrite_block_texture(doc, "Stage3", "new.paa").unwrap();
        assert_eq!(
            outcome.content(),
            "class Stage3\r\n{\r\n\ttexture=\"new.paa\";\r\n};\r\n"
        );
    }

    #[test]
    fn block_without_assignment_reports_reason() {
        let doc = "class Stage3\n{\n\tuvSource=\"tex\";\n};";
        let outcome = rewrite_block_texture(doc, "Stage3", "new.paa").unwrap();
        assert_eq!(
            outcome,
            RewriteOutcome::Unchanged {
                content: doc.to_string(),
                reason: UnchangedReason::AssignmentNotFound,
            }
        );
    }

    #[test]
    fn assignment_outside_block_is_ignored() {
        let doc = "texture=\"top.paa\";\nclass Stage3\n{\n};\ntexture=\"after.paa\";";
        let outcome = rewrite_block_texture(doc, "Stage3", "new.paa").unwrap();
        assert_eq!(outcome.content(), doc);
        assert!(!outcome.is_rewritten());
    }

    #[test]
    fn unterminated_block_is_an_error() {
        let doc = "class Stage1\n{\n};\nclass Stage3\n{\n\ttexture=\"old.paa\";";
        let err = rewrite_block_texture(doc, "Stage3", "new.paa").unwrap_err();
        assert_eq!(
            err,
            RewriteError::UnterminatedBlock {
                block: "Stage3".to_string(),
                line: 4,
            }
        );
    }

    #[test]
    fn unterminated_second_sibling_is_not_entered() {
        let doc = "class Stage3\n{\n\ttexture=\"a\";\n};\nclass Stage3\n{\n\ttexture=\"b\";";
        let outcome = rewrite_block_texture(doc, "Stage3", "new").unwrap();
        assert!(outcome.is_rewritten());
        assert!(outcome.content().ends_with("\ttexture=\"b\";"));
    }
}
