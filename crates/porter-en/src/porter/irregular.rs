// Irregular-form exception table
//
// Surface forms whose stem the rule pipeline cannot derive. The table is
// authored as stem -> surface forms and inverted once into a surface -> stem
// map; it is read-only afterwards.

use std::path::Path;

use hashbrown::HashMap;

use crate::handle::StemmerError;

/// Built-in stem -> surface form listing.
const DEFAULT_ENTRIES: &[(&str, &[&str])] = &[
    ("sky", &["sky", "skies"]),
    ("die", &["dying"]),
    ("lie", &["lying"]),
    ("tie", &["tying"]),
    ("news", &["news"]),
    ("inning", &["innings", "inning"]),
    ("outing", &["outings", "outing"]),
    ("canning", &["cannings", "canning"]),
    ("howe", &["howe"]),
    ("proceed", &["proceed"]),
    ("exceed", &["exceed"]),
    ("succeed", &["succeed"]),
];

/// Immutable surface form -> canonical stem lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrregularForms {
    forms: HashMap<String, String>,
}

impl Default for IrregularForms {
    fn default() -> Self {
        let mut forms = HashMap::new();
        for &(stem, surfaces) in DEFAULT_ENTRIES {
            for &surface in surfaces {
                forms.insert(surface.to_string(), stem.to_string());
            }
        }
        Self { forms }
    }
}

impl IrregularForms {
    /// A table with no entries: every word goes through the pipeline.
    pub fn empty() -> Self {
        Self {
            forms: HashMap::new(),
        }
    }

    /// Invert a stem -> surface forms listing.
    ///
    /// Stems and forms are ASCII-lowercased. A form listed twice under the
    /// same stem is accepted; a form listed under two different stems is an
    /// error.
    pub fn from_entries<I, S, F>(entries: I) -> Result<Self, StemmerError>
    where
        I: IntoIterator<Item = (S, F)>,
        S: AsRef<str>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        let mut forms: HashMap<String, String> = HashMap::new();
        for (stem, surfaces) in entries {
            let stem = stem.as_ref().trim().to_ascii_lowercase();
            if stem.is_empty() {
                return Err(StemmerError::EmptyEntry { stem });
            }
            for surface in surfaces {
                let surface = surface.as_ref().trim().to_ascii_lowercase();
                if surface.is_empty() {
                    return Err(StemmerError::EmptyEntry { stem });
                }
                if let Some(first) = forms.get(&surface) {
                    if *first != stem {
                        return Err(StemmerError::ConflictingForm {
                            form: surface,
                            first: first.clone(),
                            second: stem,
                        });
                    }
                    continue;
                }
                forms.insert(surface, stem.clone());
            }
        }
        Ok(Self { forms })
    }

    /// Parse a line-oriented listing.
    ///
    /// Each line reads `stem: form form ...`. Blank lines and everything
    /// after a `#` are ignored.
    ///
    /// ```text
    /// # irregular plurals
    /// sky: sky skies
    /// die: dying
    /// ```
    pub fn parse(text: &str) -> Result<Self, StemmerError> {
        let mut entries = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let malformed = || StemmerError::MalformedLine {
                line: idx + 1,
                content: raw.to_string(),
            };
            let (stem, rest) = line.split_once(':').ok_or_else(malformed)?;
            let forms: Vec<&str> = rest.split_whitespace().collect();
            if forms.is_empty() {
                return Err(malformed());
            }
            entries.push((stem, forms));
        }
        Self::from_entries(entries)
    }

    /// Read and parse a listing file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StemmerError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let table = Self::parse(&text)?;
        tracing::debug!(path = %path.display(), entries = table.len(), "loaded irregular forms");
        Ok(table)
    }

    /// Canonical stem for a lowercase surface form.
    pub fn lookup(&self, surface: &str) -> Option<&str> {
        self.forms.get(surface).map(String::as_str)
    }

    /// Number of surface forms in the table.
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Iterate over `(surface, stem)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.forms.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_lookups() {
        let table = IrregularForms::default();
        assert_eq!(table.lookup("skies"), Some("sky"));
        assert_eq!(table.lookup("sky"), Some("sky"));
        assert_eq!(table.lookup("dying"), Some("die"));
        assert_eq!(table.lookup("lying"), Some("lie"));
        assert_eq!(table.lookup("tying"), Some("tie"));
        assert_eq!(table.lookup("innings"), Some("inning"));
        assert_eq!(table.lookup("news"), Some("news"));
        assert_eq!(table.lookup("ties"), None);
        assert_eq!(table.lookup("Skies"), None);
    }

    #[test]
    fn default_table_size() {
        assert_eq!(IrregularForms::default().len(), 16);
    }

    #[test]
    fn default_entries_are_consistent() {
        let checked = IrregularForms::from_entries(DEFAULT_ENTRIES.iter().copied())
            .expect("default entries should validate");
        assert_eq!(checked, IrregularForms::default());
    }

    #[test]
    fn empty_table() {
        let table = IrregularForms::empty();
        assert!(table.is_empty());
        assert_eq!(table.lookup("skies"), None);
    }

    #[test]
    fn from_entries_lowercases() {
        let table = IrregularForms::from_entries([("Mouse", vec!["MICE", "mouse"])]).unwrap();
        assert_eq!(table.lookup("mice"), Some("mouse"));
        assert_eq!(table.lookup("mouse"), Some("mouse"));
    }

    #[test]
    fn from_entries_accepts_repeated_form_for_same_stem() {
        let table =
            IrregularForms::from_entries([("geese", vec!["geese"]), ("geese", vec!["geese"])])
                .unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn from_entries_rejects_conflicts() {
        let err = IrregularForms::from_entries([("lie", vec!["lay"]), ("lay", vec!["lay"])])
            .unwrap_err();
        match err {
            StemmerError::ConflictingForm {
                form,
                first,
                second,
            } => {
                assert_eq!(form, "lay");
                assert_eq!(first, "lie");
                assert_eq!(second, "lay");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_entries_rejects_empty() {
        assert!(matches!(
            IrregularForms::from_entries([("", vec!["x"])]),
            Err(StemmerError::EmptyEntry { .. })
        ));
        assert!(matches!(
            IrregularForms::from_entries([("ox", vec![" "])]),
            Err(StemmerError::EmptyEntry { stem }) if stem == "ox"
        ));
    }

    #[test]
    fn parse_listing() {
        let text = "# plurals\nsky: sky skies\n\nox: oxen   # irregular\n";
        let table = IrregularForms::parse(text).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.lookup("oxen"), Some("ox"));
        assert_eq!(table.lookup("skies"), Some("sky"));
    }

    #[test]
    fn parse_reports_line_numbers() {
        let err = IrregularForms::parse("sky: skies\nnocolon\n").unwrap_err();
        assert!(matches!(err, StemmerError::MalformedLine { line: 2, .. }));

        let err = IrregularForms::parse("\n\nox:\n").unwrap_err();
        assert!(matches!(err, StemmerError::MalformedLine { line: 3, .. }));
    }

    #[test]
    fn from_path_missing_file() {
        let err = IrregularForms::from_path("/nonexistent/porter/irregular.txt").unwrap_err();
        assert!(matches!(err, StemmerError::Io(_)));
    }

    #[test]
    fn iter_yields_all_pairs() {
        let table = IrregularForms::parse("ox: oxen\n").unwrap();
        let pairs: Vec<(&str, &str)> = table.iter().collect();
        assert_eq!(pairs, vec![("oxen", "ox")]);
    }
}
