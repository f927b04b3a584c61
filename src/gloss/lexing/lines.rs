//! Logical line gathering.
//!
//! Block text arrives with whatever common indentation its host document
//! gave it, and long commands may wrap onto indented continuation lines.
//! This pass dedents the block uniformly, then walks the physical lines with
//! a buffer: an unindented line starts a new logical line, an indented line
//! continues the current one, and blank lines only separate. The output is
//! the ordered list of logical lines handed to the tokenizer.

/// Width of the leading space/tab run of one line, in characters.
fn leading_indent_width(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

/// Whether a line starts a new logical line (no leading whitespace).
fn starts_logical_line(line: &str) -> bool {
    line.chars().next().map_or(false, |c| !c.is_whitespace())
}

/// Strip the common indentation shared by all non-blank lines, the way a
/// fenced block is dedented. The strip is applied line-wise, so it can never
/// eat into a line's own content or swallow newlines.
fn strip_common_indent(source: &str) -> String {
    let indent = source
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(leading_indent_width)
        .min()
        .unwrap_or(0);
    if indent == 0 {
        return source.to_string();
    }
    source
        .split('\n')
        .map(|line| {
            let cut = line
                .char_indices()
                .nth(indent)
                .map(|(ix, _)| ix)
                .unwrap_or(line.len());
            &line[cut..]
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn flush_logical_line(buffer: &mut Vec<String>, out: &mut Vec<String>) {
    if !buffer.is_empty() {
        out.push(buffer.join(" "));
        buffer.clear();
    }
}

/// Gather the logical lines of one markup block.
pub fn gather_lines(source: &str) -> Vec<String> {
    let dedented = strip_common_indent(source);

    let mut logical_lines = Vec::new();
    let mut buffer: Vec<String> = Vec::new();
    for line in dedented.split('\n').filter(|line| !line.is_empty()) {
        if starts_logical_line(line) {
            flush_logical_line(&mut buffer, &mut logical_lines);
        }
        // Every buffered piece is trimmed, so trailing whitespace on a
        // command line never widens the join.
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            buffer.push(trimmed.to_string());
        }
    }
    flush_logical_line(&mut buffer, &mut logical_lines);
    logical_lines
}
