/// Template rewriting: point the Stage1/Stage4/Stage5 textures of a material
/// skeleton at `.paa` files derived from a target folder and file name.
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Built-in DayZ material skeleton.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/default.rvmat");

pub const TEXTURE_EXTENSION: &str = "paa";

/// A template block and the file tag of the texture it receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateStage {
    pub block: &'static str,
    pub tag: &'static str,
}

pub const TEMPLATE_STAGES: [TemplateStage; 3] = [
    TemplateStage { block: "Stage1", tag: "_nohq" },
    TemplateStage { block: "Stage4", tag: "_as" },
    TemplateStage { block: "Stage5", tag: "_smdi" },
];

static STAGE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    TEMPLATE_STAGES
        .iter()
        .map(|stage| {
            Regex::new(&format!(
                r#"(?s)class {}\b(\s*\{{)?.*?texture="[^"]*";"#,
                regex::escape(stage.block)
            ))
            .expect("valid template stage regex")
        })
        .collect()
});

/// Relative texture references computed for one generated material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDerivedPaths {
    /// Stage1, normal map.
    pub normal: String,
    /// Stage4, ambient shadow map.
    pub ambient_shadow: String,
    /// Stage5, specular/detail map.
    pub specular: String,
}

impl TemplateDerivedPaths {
    pub fn derive(folder_path: &str, filename: &str) -> Self {
        let folder = relative_folder(folder_path);
        let base = strip_extension(filename);
        let build = |tag: &str| {
            format!(
                "{}/{base}{tag}.{TEXTURE_EXTENSION}",
                folder.trim_end_matches('/')
            )
            .trim_start_matches('/')
            .to_string()
        };

        Self {
            normal: build(TEMPLATE_STAGES[0].tag),
            ambient_shadow: build(TEMPLATE_STAGES[1].tag),
            specular: build(TEMPLATE_STAGES[2].tag),
        }
    }

    /// Path substituted into `block`.
    fn for_block(&self, block: &str) -> Option<&str> {
        match block {
            "Stage1" => Some(&self.normal),
            "Stage4" => Some(&self.ambient_shadow),
            "Stage5" => Some(&self.specular),
            _ => None,
        }
    }
}

/// Drop a leading drive designator (`C:`) and switch to forward slashes.
pub fn relative_folder(folder_path: &str) -> String {
    let without_drive = folder_path
        .split_once(':')
        .map(|(_, rest)| rest)
        .unwrap_or(folder_path);
    without_drive.replace('\\', "/")
}

/// `skin.rvmat` -> `skin`. Dot files keep their name.
pub fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(pos) if pos > 0 => &filename[..pos],
        _ => filename,
    }
}

fn closes_before_texture(span: &str) -> bool {
    span.lines().any(|line| line.trim_start().starts_with("};"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateOutcome {
    pub content: String,
    pub paths: TemplateDerivedPaths,
    /// Blocks whose texture was substituted, in template order.
    pub applied: Vec<&'static str>,
    /// Blocks that were not found and left alone.
    pub missing: Vec<&'static str>,
}

/// Rewrite the Stage1, Stage4 and Stage5 textures of `content`.
///
/// Each block is matched once, from its `class` marker through its first
/// `texture="...";`, and that span becomes `class <Name>` followed by
/// `\t texture="<path>";` on the next line. An opening brace found right after
/// the marker is kept on its own line. Whatever follows the assignment,
/// including the closing `};`, is left as it was. A block that closes before
/// any texture counts as missing, so later blocks are never swallowed.
pub fn rewrite_template_textures(
    content: &str,
    folder_path: &str,
    filename: &str,
) -> TemplateOutcome {
    let paths = TemplateDerivedPaths::derive(folder_path, filename);
    let mut output = content.to_string();
    let mut applied = Vec::new();
    let mut missing = Vec::new();

    for (stage, pattern) in TEMPLATE_STAGES.iter().zip(STAGE_PATTERNS.iter()) {
        let texture = paths.for_block(stage.block).unwrap_or_default();
        let found = pattern
            .captures(&output)
            .and_then(|caps| Some((caps.get(0)?.range(), caps.get(1).is_some())));
        let Some((span, has_brace)) = found else {
            debug!("template has no class {}", stage.block);
            missing.push(stage.block);
            continue;
        };
        if closes_before_texture(&output[span.clone()]) {
            debug!("class {} has no texture before its closing brace", stage.block);
            missing.push(stage.block);
            continue;
        }

        let brace = if has_brace { "\n{" } else { "" };
        let rendered = format!("class {}{brace}\n\t texture=\"{texture}\";", stage.block);

        output.replace_range(span, &rendered);
        applied.push(stage.block);
    }

    TemplateOutcome {
        content: output,
        paths,
        applied,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "class Stage1\n{\n\ttexture=\"a_nohq.paa\";\n\tuvSource=\"tex\";\n};\n\
class Stage3\n{\n\ttexture=\"mc.paa\";\n};\n\
class Stage4\n{\n\ttexture=\"a_as.paa\";\n};\n\
class Stage5\n{\n\ttexture=\"a_smdi.paa\";\n};\n";

    #[test]
    fn derives_paths_from_windows_folder() {
        let paths = TemplateDerivedPaths::derive(r"C:\Projects\MyMod", "skin.rvmat");
        assert_eq!(paths.normal, "Projects/MyMod/skin_nohq.paa");
        assert_eq!(paths.ambient_shadow, "Projects/MyMod/skin_as.paa");
        assert_eq!(paths.specular, "Projects/MyMod/skin_smdi.paa");
    }

    #[test]
    fn derives_paths_without_drive() {
        let paths = TemplateDerivedPaths::derive(r"MyMod\data\", "jacket.rvmat");
        assert_eq!(paths.normal, "MyMod/data/jacket_nohq.paa");

        let paths = TemplateDerivedPaths::derive("", "jacket");
        assert_eq!(paths.specular, "jacket_smdi.paa");
    }

    #[test]
    fn strips_only_final_extension() {
        assert_eq!(strip_extension("skin.v2.rvmat"), "skin.v2");
        assert_eq!(strip_extension("skin"), "skin");
        assert_eq!(strip_extension(".rvmat"), ".rvmat");
    }

    #[test]
    fn rewrites_all_three_blocks() {
        let outcome = rewrite_template_textures(TEMPLATE, r"P:\MyMod\data", "shirt.rvmat");
        assert_eq!(outcome.applied, vec!["Stage1", "Stage4", "Stage5"]);
        assert!(outcome.missing.is_empty());

        let content = &outcome.content;
        assert!(content.starts_with(
            "class Stage1\n{\n\t texture=\"MyMod/data/shirt_nohq.paa\";\n\tuvSource=\"tex\";\n};"
        ));
        assert!(content.contains("class Stage4\n{\n\t texture=\"MyMod/data/shirt_as.paa\";\n};"));
        assert!(content.contains("class Stage5\n{\n\t texture=\"MyMod/data/shirt_smdi.paa\";\n};"));
        assert!(content.contains("class Stage3\n{\n\ttexture=\"mc.paa\";\n};"));
    }

    #[test]
    fn missing_block_leaves_others_independent() {
        let without_stage4 = TEMPLATE.replace("class Stage4\n{\n\ttexture=\"a_as.paa\";\n};\n", "");
        let full = rewrite_template_textures(TEMPLATE, "P:\\m", "x.rvmat");
        let partial = rewrite_template_textures(&without_stage4, "P:\\m", "x.rvmat");

        assert_eq!(partial.applied, vec!["Stage1", "Stage5"]);
        assert_eq!(partial.missing, vec!["Stage4"]);
        assert!(!partial.content.contains("x_as.paa"));
        assert!(partial.content.contains("texture=\"m/x_nohq.paa\";"));
        assert!(partial.content.contains("texture=\"m/x_smdi.paa\";"));
        assert_eq!(
            full.content.replace("class Stage4\n{\n\t texture=\"m/x_as.paa\";\n};\n", ""),
            partial.content
        );
    }

    #[test]
    fn stage_name_needs_word_boundary() {
        let doc = "class Stage10\n{\n\ttexture=\"ten.paa\";\n};\n";
        let outcome = rewrite_template_textures(doc, "", "x.rvmat");
        assert_eq!(outcome.content, doc);
        assert_eq!(outcome.missing, vec!["Stage1", "Stage4", "Stage5"]);
    }

    #[test]
    fn block_without_texture_does_not_reach_the_next_block() {
        let doc = "class Stage1\n{\n};\nclass Stage2\n{\n\ttexture=\"keep.paa\";\n};\n";
        let outcome = rewrite_template_textures(doc, "", "x.rvmat");
        assert_eq!(outcome.content, doc);
        assert!(outcome.missing.contains(&"Stage1"));
        assert!(outcome.applied.is_empty());
    }

    #[test]
    fn replacement_is_literal() {
        let doc = "class Stage1\n{\n\ttexture=\"old.paa\";\n};";
        let outcome = rewrite_template_textures(doc, "", "$1cash.rvmat");
        assert!(outcome.content.contains("texture=\"$1cash_nohq.paa\";"));
    }

    #[test]
    fn default_template_has_every_stage() {
        let outcome = rewrite_template_textures(DEFAULT_TEMPLATE, r"P:\Mod", "coat.rvmat");
        assert!(outcome.missing.is_empty());
        assert!(outcome.content.contains("class Stage3"));
        assert!(!outcome.content.contains("template_nohq.paa"));
    }
}
