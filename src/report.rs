use std::io::{self, Write};
use serde::Serialize;
use crate::parser::ParsedResult;
use crate::pipeline::Transformation;

const WIDTH: usize = 70;

fn rule(w: &mut impl Write, ch: char) -> io::Result<()> {
    writeln!(w, "{}", ch.to_string().repeat(WIDTH))
}

/// Human-readable report: input, raw reply, then the parsed fields.
pub fn render_text(w: &mut impl Write, paragraph: &str, result: &Transformation) -> io::Result<()> {
    rule(w, '=')?;
    writeln!(w, "Text Transformer")?;
    rule(w, '=')?;

    writeln!(w, "\nInput Paragraph:")?;
    rule(w, '-')?;
    writeln!(w, "{}", paragraph.trim())?;
    rule(w, '-')?;

    writeln!(w, "\nRaw Output:")?;
    rule(w, '-')?;
    writeln!(w, "{}", result.raw)?;
    rule(w, '-')?;

    let parsed = &result.parsed;
    writeln!(w, "\nStructured Results:")?;
    rule(w, '-')?;
    writeln!(w, "\n SUMMARY:\n{}\n", parsed.summary)?;
    writeln!(w, " DETECTED TONE:\n{}\n", parsed.tone)?;
    writeln!(w, " IMPROVED VERSION:\n{}", parsed.improved_version)?;
    rule(w, '-')?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    paragraph: &'a str,
    raw: &'a str,
    #[serde(flatten)]
    parsed: &'a ParsedResult,
}

pub fn render_json(w: &mut impl Write, paragraph: &str, result: &Transformation) -> io::Result<()> {
    let report = JsonReport {
        paragraph: paragraph.trim(),
        raw: &result.raw,
        parsed: &result.parsed,
    };
    serde_json::to_writer_pretty(&mut *w, &report)?;
    writeln!(w)
}
