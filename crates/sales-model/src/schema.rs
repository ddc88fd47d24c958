//! Warehouse table definitions.

use crate::dataset::DatasetKind;

/// Storage types used by the warehouse tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Integer,
    Text,
    Real,
    /// Dates are stored as ISO text with `DATE` affinity.
    Date,
}

impl SqlType {
    pub fn as_sql(self) -> &'static str {
        match self {
            SqlType::Integer => "INTEGER",
            SqlType::Text => "TEXT",
            SqlType::Real => "REAL",
            SqlType::Date => "DATE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub primary_key: bool,
}

impl ColumnSpec {
    const fn key(name: &'static str) -> Self {
        Self {
            name,
            sql_type: SqlType::Integer,
            primary_key: true,
        }
    }

    const fn new(name: &'static str, sql_type: SqlType) -> Self {
        Self {
            name,
            sql_type,
            primary_key: false,
        }
    }
}

/// Declared (not enforced) foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub name: &'static str,
    pub dataset: DatasetKind,
    pub columns: &'static [ColumnSpec],
    pub foreign_keys: &'static [ForeignKey],
}

impl TableSpec {
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|column| column.name).collect()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn for_dataset(kind: DatasetKind) -> &'static TableSpec {
        match kind {
            DatasetKind::Customers => &CUSTOMER_TABLE,
            DatasetKind::Products => &PRODUCT_TABLE,
            DatasetKind::Sales => &SALE_TABLE,
        }
    }
}

pub const CUSTOMER_TABLE: TableSpec = TableSpec {
    name: "customer",
    dataset: DatasetKind::Customers,
    columns: &[
        ColumnSpec::key("customer_id"),
        ColumnSpec::new("name", SqlType::Text),
        ColumnSpec::new("region", SqlType::Text),
        ColumnSpec::new("join_date", SqlType::Text),
        ColumnSpec::new("last_active_year", SqlType::Date),
        ColumnSpec::new("preferred_contact_method", SqlType::Text),
    ],
    foreign_keys: &[],
};

pub const PRODUCT_TABLE: TableSpec = TableSpec {
    name: "product",
    dataset: DatasetKind::Products,
    columns: &[
        ColumnSpec::key("product_id"),
        ColumnSpec::new("product_name", SqlType::Text),
        ColumnSpec::new("category", SqlType::Text),
        ColumnSpec::new("unit_price", SqlType::Real),
        ColumnSpec::new("current_discount_percent", SqlType::Real),
        ColumnSpec::new("subcategory", SqlType::Text),
    ],
    foreign_keys: &[],
};

pub const SALE_TABLE: TableSpec = TableSpec {
    name: "sale",
    dataset: DatasetKind::Sales,
    columns: &[
        ColumnSpec::key("sale_id"),
        ColumnSpec::new("sale_date", SqlType::Date),
        ColumnSpec::new("customer_id", SqlType::Integer),
        ColumnSpec::new("product_id", SqlType::Integer),
        ColumnSpec::new("store_id", SqlType::Integer),
        ColumnSpec::new("campaign_id", SqlType::Integer),
        ColumnSpec::new("sale_amount", SqlType::Real),
        ColumnSpec::new("bonus_points", SqlType::Integer),
        ColumnSpec::new("payment_type", SqlType::Text),
    ],
    foreign_keys: &[
        ForeignKey {
            column: "customer_id",
            references_table: "customer",
            references_column: "customer_id",
        },
        ForeignKey {
            column: "product_id",
            references_table: "product",
            references_column: "product_id",
        },
    ],
};

/// All warehouse tables, parents first.
pub const WAREHOUSE_TABLES: [&TableSpec; 3] = [&CUSTOMER_TABLE, &PRODUCT_TABLE, &SALE_TABLE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_widths() {
        assert_eq!(CUSTOMER_TABLE.width(), 6);
        assert_eq!(PRODUCT_TABLE.width(), 6);
        assert_eq!(SALE_TABLE.width(), 9);
    }

    #[test]
    fn test_single_primary_key_per_table() {
        for table in WAREHOUSE_TABLES {
            let keys = table.columns.iter().filter(|c| c.primary_key).count();
            assert_eq!(keys, 1, "{}", table.name);
        }
    }

    #[test]
    fn test_sale_foreign_keys_reference_known_tables() {
        let names: Vec<&str> = WAREHOUSE_TABLES.iter().map(|t| t.name).collect();
        for fk in SALE_TABLE.foreign_keys {
            assert!(names.contains(&fk.references_table));
            assert!(SALE_TABLE.column_names().contains(&fk.column));
        }
    }

    #[test]
    fn test_for_dataset() {
        assert_eq!(TableSpec::for_dataset(DatasetKind::Sales).name, "sale");
        assert_eq!(
            TableSpec::for_dataset(DatasetKind::Customers).dataset,
            DatasetKind::Customers
        );
    }
}
