//! Spec numbering and file names
//!
//! Spec files are named `NNN-slug.md`: a zero-padded three-digit number
//! followed by a kebab-case slug of the title.

use std::path::Path;

/// Width of the zero-padded number prefix
pub const PREFIX_WIDTH: usize = 3;

/// Converts a title to a kebab-case slug
pub fn to_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for c in title.to_lowercase().chars() {
        let c = match c {
            ' ' | '_' => '-',
            c if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' => c,
            _ => continue,
        };
        if c == '-' && (slug.is_empty() || slug.ends_with('-')) {
            continue;
        }
        slug.push(c);
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Builds `NNN-slug.md`
pub fn file_name(number: u32, slug: &str) -> String {
    format!("{:0width$}-{}.md", number, slug, width = PREFIX_WIDTH)
}

/// Parses the `NNN-` prefix of a file name
pub fn filename_prefix(path: &Path) -> Option<u32> {
    let name = path.file_name()?.to_str()?;
    let bytes = name.as_bytes();

    if bytes.len() <= PREFIX_WIDTH || bytes[PREFIX_WIDTH] != b'-' {
        return None;
    }
    if !bytes[..PREFIX_WIDTH].iter().all(u8::is_ascii_digit) {
        return None;
    }

    name[..PREFIX_WIDTH].parse().ok()
}

/// True for `NNN-*.md`
pub fn is_spec_file_name(name: &str) -> bool {
    name.ends_with(".md") && filename_prefix(Path::new(name)).is_some()
}

/// Next free number: one past the highest, or 0 when there are none
pub fn next_number(numbers: impl IntoIterator<Item = u32>) -> u32 {
    numbers.into_iter().max().map_or(0, |max| max.saturating_add(1))
}

/// Normalizes a `--spec` argument (`7`, `07`, `007`) to its prefix
pub fn parse_reference(arg: &str) -> Option<String> {
    let arg = arg.trim();
    if arg.is_empty() || arg.len() > PREFIX_WIDTH || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("{:0>width$}", arg, width = PREFIX_WIDTH))
}
