/// One item in the workspace knowledge base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub body: PageBody,
}

/// Page content variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageBody {
    Note {
        lines: Vec<String>,
    },
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Rows injected into a prompt excerpt are capped to bound payload size
const MAX_EXCERPT_ROWS: usize = 12;

impl Page {
    pub fn note(id: &str, title: &str, lines: &[&str]) -> Self {
        Page {
            id: id.to_string(),
            title: title.to_string(),
            body: PageBody::Note {
                lines: lines.iter().map(|l| l.to_string()).collect(),
            },
        }
    }

    pub fn table(id: &str, title: &str, columns: &[&str], rows: &[&[&str]]) -> Self {
        Page {
            id: id.to_string(),
            title: title.to_string(),
            body: PageBody::Table {
                columns: columns.iter().map(|c| c.to_string()).collect(),
                rows: rows
                    .iter()
                    .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                    .collect(),
            },
        }
    }

    /// Flatten the page's textual content into one string for keyword
    /// matching: note lines joined, table rows one line each, tagged with
    /// the page title.
    pub fn flattened(&self) -> String {
        match &self.body {
            PageBody::Note { lines } => lines.join("\n"),
            PageBody::Table { rows, .. } => rows
                .iter()
                .map(|row| format!("{}: {}", self.title, row.join(" | ")))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Title-tagged excerpt for prompt injection; long tables are truncated
    pub fn excerpt(&self) -> String {
        match &self.body {
            PageBody::Note { lines } => format!("{}:\n{}", self.title, lines.join("\n")),
            PageBody::Table { columns, rows } => {
                let mut out = format!("{} ({}):\n", self.title, columns.join(" | "));
                for row in rows.iter().take(MAX_EXCERPT_ROWS) {
                    out.push_str(&row.join(" | "));
                    out.push('\n');
                }
                if rows.len() > MAX_EXCERPT_ROWS {
                    out.push_str(&format!("... {} more rows\n", rows.len() - MAX_EXCERPT_ROWS));
                }
                out
            }
        }
    }
}
