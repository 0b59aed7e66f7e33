//! Destination documents as an ordered list of opaque sections.
//!
//! A section starts at any line whose first byte is `[` and runs until the next such
//! line or the end of the text. Nothing inside a section is parsed, so everything that
//! is not removed is written back byte for byte.

/// Text of one section, header line included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Section<'a> {
    raw: &'a str,
}

impl Section<'_> {
    /// Whether this section is introduced by exactly `header`. The comparison is a
    /// case-sensitive prefix match on the header line, so `[mcp_servers.a]` does not
    /// match `[mcp_servers.ab]` or `[mcp_servers.a.env]`.
    fn opens_with(&self, header: &str) -> bool {
        self.raw.starts_with(header)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    preamble: &'a str,
    sections: Vec<Section<'a>>,
}

impl<'a> Document<'a> {
    pub fn parse(text: &'a str) -> Self {
        let mut starts = Vec::new();
        let mut offset = 0;
        for line in text.split_inclusive('\n') {
            if line.starts_with('[') {
                starts.push(offset);
            }
            offset += line.len();
        }

        let preamble_end = starts.first().copied().unwrap_or(text.len());
        let sections = starts
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = starts.get(i + 1).copied().unwrap_or(text.len());
                Section {
                    raw: &text[start..end],
                }
            })
            .collect();

        Self {
            preamble: &text[..preamble_end],
            sections,
        }
    }

    /// Drop every section introduced by `header`. Returns how many were removed.
    pub fn remove(&mut self, header: &str) -> usize {
        let before = self.sections.len();
        self.sections.retain(|section| !section.opens_with(header));
        before - self.sections.len()
    }

    pub fn render(&self) -> String {
        let mut out = String::from(self.preamble);
        for section in &self.sections {
            out.push_str(section.raw);
        }
        out
    }
}

/// Replace every run of three or more newlines with exactly two, leaving at most one
/// blank line between any two lines of text.
pub fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = 0usize;
    for ch in text.chars() {
        if ch == '\n' {
            run += 1;
            continue;
        }
        push_newlines(&mut out, run);
        run = 0;
        out.push(ch);
    }
    push_newlines(&mut out, run);
    out
}

fn push_newlines(out: &mut String, run: usize) {
    for _ in 0..run.min(2) {
        out.push('\n');
    }
}
