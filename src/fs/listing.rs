use std::cmp::Ordering;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    Directory,
    File,
    Other,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Directory => "directory",
            EntryKind::File => "file",
            EntryKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntryInfo {
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

impl Ord for DirEntryInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind
            .cmp(&other.kind)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for DirEntryInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reads `dir` without following symlinks. Directories come first, then
/// files, then everything else; ties are broken by name.
pub fn list_directory(dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };
        entries.push(DirEntryInfo {
            name: entry.file_name().to_string_lossy().into_owned(),
            kind,
        });
    }
    entries.sort();
    Ok(entries)
}

const HEADERS: [&str; 3] = ["(index)", "Name", "Type"];

/// Renders entries as a boxed three-column table.
pub fn render_table(entries: &[DirEntryInfo], out: &mut dyn Write) -> io::Result<()> {
    let rows: Vec<[String; 3]> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            [
                index.to_string(),
                entry.name.clone(),
                entry.kind.label().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_rule(out, &widths, ('┌', '┬', '┐'))?;
    write_row(out, &widths, &HEADERS)?;
    write_rule(out, &widths, ('├', '┼', '┤'))?;
    for row in &rows {
        let cells = [row[0].as_str(), row[1].as_str(), row[2].as_str()];
        write_row(out, &widths, &cells)?;
    }
    write_rule(out, &widths, ('└', '┴', '┘'))
}

fn write_rule(out: &mut dyn Write, widths: &[usize; 3], (left, mid, right): (char, char, char)) -> io::Result<()> {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    writeln!(out, "{left}{}{right}", segments.join(&mid.to_string()))
}

fn write_row(out: &mut dyn Write, widths: &[usize; 3], cells: &[&str; 3]) -> io::Result<()> {
    let padded: Vec<String> = widths
        .iter()
        .zip(cells)
        .map(|(&width, cell)| format!(" {cell:<width$} "))
        .collect();
    writeln!(out, "│{}│", padded.join("│"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directories_sort_first() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("a.txt"), b"")?;
        fs::create_dir(dir.path().join("zeta"))?;

        let entries = list_directory(dir.path())?;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "zeta");
        assert!(entries[0].is_directory());
        assert!(!entries[0].is_file());
        assert_eq!(entries[1].name, "a.txt");
        assert!(entries[1].is_file());
        Ok(())
    }

    #[test]
    fn test_missing_directory_fails() {
        let result = list_directory(Path::new("/path/that/does/not/exist"));
        assert_eq!(result.map_err(|e| e.kind()), Err(io::ErrorKind::NotFound));
    }

    #[test]
    fn test_render_table() -> io::Result<()> {
        let entries = vec![
            DirEntryInfo { name: "docs".into(), kind: EntryKind::Directory },
            DirEntryInfo { name: "a.txt".into(), kind: EntryKind::File },
        ];
        let mut out = Vec::new();
        render_table(&entries, &mut out)?;
        let text = String::from_utf8(out).unwrap_or_default();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[1].contains("(index)"));
        assert!(lines[3].contains("docs") && lines[3].contains("directory"));
        assert!(lines[4].contains("a.txt") && lines[4].contains("file"));
        // every line of the box has the same display width
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
        Ok(())
    }
}
