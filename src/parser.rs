use serde::Serialize;

/// The three fields pulled out of a model reply. Missing sections stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedResult {
    pub summary: String,
    pub tone: String,
    pub improved_version: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Summary,
    Tone,
    ImprovedVersion,
}

impl Section {
    // Checked in this order.
    const ALL: [Section; 3] = [Section::Summary, Section::Tone, Section::ImprovedVersion];

    fn header(self) -> &'static str {
        match self {
            Section::Summary => "SUMMARY:",
            Section::Tone => "TONE:",
            Section::ImprovedVersion => "IMPROVED VERSION:",
        }
    }

    /// Header match is a case-sensitive prefix test on an already trimmed line.
    fn detect(line: &str) -> Option<Section> {
        Self::ALL
            .into_iter()
            .find(|section| line.starts_with(section.header()))
    }

    fn slot(self, result: &mut ParsedResult) -> &mut String {
        match self {
            Section::Summary => &mut result.summary,
            Section::Tone => &mut result.tone,
            Section::ImprovedVersion => &mut result.improved_version,
        }
    }
}

/// Split a raw model reply into summary / tone / improved version.
///
/// Lines are trimmed one by one. Anything before the first header is ignored,
/// as are blank lines and any text sharing a line with a header. When a header
/// repeats, the later section's content replaces the earlier one.
pub fn parse_output(output: &str) -> ParsedResult {
    let mut result = ParsedResult::default();
    let mut current: Option<Section> = None;
    let mut content: Vec<&str> = Vec::new();

    for line in output.lines() {
        let line = line.trim();

        if let Some(section) = Section::detect(line) {
            flush(&mut result, current, &mut content);
            current = Some(section);
            continue;
        }

        if !line.is_empty() && current.is_some() {
            content.push(line);
        }
    }

    flush(&mut result, current, &mut content);
    result
}

fn flush(result: &mut ParsedResult, section: Option<Section>, content: &mut Vec<&str>) {
    if let Some(section) = section {
        if !content.is_empty() {
            *section.slot(result) = content.join("\n").trim().to_string();
        }
    }
    content.clear();
}
