//! Exact duplicate row removal.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NewChunkedArray};

use sales_common::any_to_string;

use crate::error::Result;

fn row_key(df: &DataFrame, idx: usize) -> Result<Vec<Option<String>>> {
    let mut key = Vec::with_capacity(df.width());
    for col in df.get_columns() {
        let value = col.get(idx)?;
        if matches!(value, AnyValue::Null) {
            key.push(None);
        } else {
            key.push(Some(any_to_string(value)));
        }
    }
    Ok(key)
}

/// Drops rows that repeat an earlier row across every column.
///
/// The first occurrence is kept and row order is otherwise unchanged.
/// Nulls compare equal to nulls. Returns the filtered frame and the number
/// of rows removed.
pub fn remove_duplicates(df: &DataFrame) -> Result<(DataFrame, usize)> {
    if df.height() == 0 {
        return Ok((df.clone(), 0));
    }

    let mut seen = BTreeSet::new();
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        keep.push(seen.insert(row_key(df, idx)?));
    }

    let removed = keep.iter().filter(|kept| !**kept).count();
    if removed == 0 {
        return Ok((df.clone(), 0));
    }

    let mask = BooleanChunked::from_slice("dedupe".into(), &keep);
    Ok((df.filter(&mask)?, removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::Column;

    #[test]
    fn test_remove_duplicates_keeps_first() {
        let df = DataFrame::new(vec![
            Column::new("ProductID".into(), vec![101i64, 102, 101, 103]),
            Column::new("ProductName".into(), vec!["laptop", "hoodie", "laptop", "cable"]),
        ])
        .unwrap();

        let (deduped, removed) = remove_duplicates(&df).unwrap();

        assert_eq!(removed, 1);
        let ids: Vec<Option<i64>> = deduped
            .column("ProductID")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(ids, vec![Some(101), Some(102), Some(103)]);
    }

    #[test]
    fn test_remove_duplicates_partial_match_is_kept() {
        let df = DataFrame::new(vec![
            Column::new("ProductID".into(), vec![101i64, 101]),
            Column::new("ProductName".into(), vec!["laptop", "tablet"]),
        ])
        .unwrap();
        let (deduped, removed) = remove_duplicates(&df).unwrap();
        assert_eq!(removed, 0);
        assert_eq!(deduped.height(), 2);
    }

    #[test]
    fn test_remove_duplicates_nulls_compare_equal() {
        let df = DataFrame::new(vec![
            Column::new("PaymentType".into(), vec![None::<&str>, None]),
            Column::new("SaleAmount".into(), vec![Some(5.0), Some(5.0)]),
        ])
        .unwrap();
        let (deduped, removed) = remove_duplicates(&df).unwrap();
        assert_eq!(removed, 1);
        assert_eq!(deduped.height(), 1);
    }

    #[test]
    fn test_remove_duplicates_empty_frame() {
        let (deduped, removed) = remove_duplicates(&DataFrame::empty()).unwrap();
        assert_eq!(removed, 0);
        assert_eq!(deduped.height(), 0);
    }
}
