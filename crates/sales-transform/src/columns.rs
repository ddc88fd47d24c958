//! Column-name normalization.

use std::collections::BTreeMap;

use polars::prelude::*;
use serde::Serialize;

use crate::error::{Result, TransformError};

/// A column whose name changed when surrounding whitespace was stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnRename {
    pub from: String,
    pub to: String,
}

/// Strips leading and trailing whitespace from every column name.
///
/// Column order is preserved. Returns the renamed frame and the list of
/// names that actually changed. Two columns that trim to the same name are
/// rejected rather than silently merged.
pub fn trim_column_names(df: &DataFrame) -> Result<(DataFrame, Vec<ColumnRename>)> {
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    let mut renames = Vec::new();
    let mut columns = Vec::with_capacity(df.width());

    for col in df.get_columns() {
        let original = col.name().to_string();
        let trimmed = original.trim().to_string();
        if let Some(first) = seen.get(&trimmed) {
            return Err(TransformError::DuplicateColumn {
                first: first.clone(),
                second: original,
                trimmed,
            });
        }
        seen.insert(trimmed.clone(), original.clone());

        if trimmed == original {
            columns.push(col.clone());
        } else {
            columns.push(col.clone().with_name(trimmed.as_str().into()));
            renames.push(ColumnRename {
                from: original,
                to: trimmed,
            });
        }
    }

    Ok((DataFrame::new(columns)?, renames))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_column_names_reports_renames() {
        let df = DataFrame::new(vec![
            Column::new(" CustomerID".into(), vec![1i64, 2]),
            Column::new("Name ".into(), vec!["Ann", "Bob"]),
            Column::new("Region".into(), vec!["East", "West"]),
        ])
        .unwrap();

        let (trimmed, renames) = trim_column_names(&df).unwrap();

        let names: Vec<&str> = trimmed
            .get_column_names()
            .iter()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(names, vec!["CustomerID", "Name", "Region"]);
        assert_eq!(
            renames,
            vec![
                ColumnRename {
                    from: " CustomerID".to_string(),
                    to: "CustomerID".to_string(),
                },
                ColumnRename {
                    from: "Name ".to_string(),
                    to: "Name".to_string(),
                },
            ]
        );
        assert_eq!(trimmed.height(), 2);
    }

    #[test]
    fn test_trim_column_names_noop() {
        let df = DataFrame::new(vec![Column::new("ProductID".into(), vec![101i64])]).unwrap();
        let (trimmed, renames) = trim_column_names(&df).unwrap();
        assert!(renames.is_empty());
        assert!(trimmed.equals(&df));
    }

    #[test]
    fn test_trim_column_names_collision() {
        let df = DataFrame::new(vec![
            Column::new("Name".into(), vec!["a"]),
            Column::new(" Name".into(), vec!["b"]),
        ])
        .unwrap();
        let result = trim_column_names(&df);
        assert!(matches!(
            result,
            Err(TransformError::DuplicateColumn { trimmed, .. }) if trimmed == "Name"
        ));
    }
}
