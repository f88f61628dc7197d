//! Resume text handling: cleanup, section splitting, and skill mention counting.

use std::sync::LazyLock;

use regex::Regex;

static RE_NOISE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s\-\.+#]").unwrap());
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Headers longer than this many words are treated as body text.
const MAX_HEADER_WORDS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Experience,
    Education,
    Skills,
    Projects,
}

impl Section {
    /// Detection order matters: the first name found in a header wins.
    pub const ALL: [Section; 4] = [
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Projects,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Projects => "projects",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    pub experience: String,
    pub education: String,
    pub skills: String,
    pub projects: String,
}

impl Sections {
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::Experience => &self.experience,
            Section::Education => &self.education,
            Section::Skills => &self.skills,
            Section::Projects => &self.projects,
        }
    }

    fn get_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::Experience => &mut self.experience,
            Section::Education => &mut self.education,
            Section::Skills => &mut self.skills,
            Section::Projects => &mut self.projects,
        }
    }
}

/// A resume after extraction: the raw text, its cleaned single-line form,
/// and the sections split from the raw line structure.
#[derive(Debug, Clone)]
pub struct ResumeText {
    pub raw: String,
    pub cleaned: String,
    pub sections: Sections,
}

impl ResumeText {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let cleaned = preprocess_text(&raw);
        let sections = extract_sections(&raw);
        Self {
            raw,
            cleaned,
            sections,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.cleaned.is_empty()
    }
}

/// Replaces punctuation noise with spaces and collapses whitespace.
/// Keeps `-`, `.`, `+` and `#` so names like "C++" and "C#" survive.
pub fn preprocess_text(text: &str) -> String {
    let text = RE_NOISE.replace_all(text, " ");
    let text = RE_WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}

/// Splits resume text into known sections by walking it line by line.
///
/// A short line naming a section switches the current section and is not
/// itself kept. Lines before the first header belong to no section.
pub fn extract_sections(text: &str) -> Sections {
    let mut sections = Sections::default();
    let mut current: Option<Section> = None;

    for line in text.lines() {
        if let Some(section) = detect_header(line) {
            current = Some(section);
        } else if let Some(section) = current {
            let body = sections.get_mut(section);
            body.push_str(line);
            body.push('\n');
        }
    }

    sections
}

fn detect_header(line: &str) -> Option<Section> {
    let words = line.split_whitespace().count();
    if words == 0 || words > MAX_HEADER_WORDS {
        return None;
    }
    let lower = line.to_lowercase();
    Section::ALL
        .into_iter()
        .find(|section| lower.contains(section.name()))
}

/// Counts case-insensitive mentions of `term` in `text` that stand as a
/// whole token: the neighbouring characters must not be alphanumeric or `_`,
/// and a match may not run on into `+` or `#` ("C" is not a mention of "C++").
pub fn count_mentions(text: &str, term: &str) -> usize {
    let term = term.trim();
    if term.is_empty() {
        return 0;
    }
    let Ok(re) = Regex::new(&format!("(?i){}", regex::escape(term))) else {
        return 0;
    };

    re.find_iter(text)
        .filter(|m| {
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();
            !before.is_some_and(is_word_char) && !after.is_some_and(is_token_suffix)
        })
        .count()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_token_suffix(c: char) -> bool {
    is_word_char(c) || c == '+' || c == '#'
}
