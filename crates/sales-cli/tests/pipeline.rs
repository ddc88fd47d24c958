//! End-to-end runs from raw CSVs to the warehouse.

use sales_cli::pipeline::{prepare_all, prepare_dataset, run_all};
use sales_cli::types::DatasetStatus;
use sales_model::{DatasetConfig, DatasetKind, EtlPaths, OutputNaming};
use sales_warehouse::{close_warehouse, open_warehouse, table_row_count};
use tempfile::TempDir;

const CUSTOMERS: &str = "CustomerID,Name,Region,JoinDate,LastActiveYear,PreferredContactMethod\n\
1001,William White,East,2021-11-11,2023,Email\n\
1002, Wylie Coyote ,East,2023-02-14,2024,Phone\n\
1002, Wylie Coyote ,East,2023-02-14,2024,Phone\n\
1003,Dan Brown,West,2023-10-19,2024,Email\n";

const PRODUCTS: &str = "ProductID ,ProductName,Category,UnitPrice,CurrentDiscountPercent,Subcategory\n\
101,laptop,Electronics,793.12,10,computers\n\
102,hoodie,Clothing,39.10,0,tops\n";

const SALES: &str = "TransactionID,SaleDate,CustomerID,ProductID,StoreID,CampaignID,SaleAmount,BonusPoints,PaymentType\n\
550,2024-01-06,1001,101,404,0,6344.96,100,Card\n\
551,01/06/2024,1002,102,403,0,19.99,,\n\
552,2024-01-16,1003,101,404,0,10.00,50,Cash\n";

fn project(files: &[(&str, &str)]) -> (TempDir, EtlPaths) {
    let dir = TempDir::new().unwrap();
    let paths = EtlPaths::from_root(dir.path());
    std::fs::create_dir_all(&paths.raw_dir).unwrap();
    for (name, content) in files {
        std::fs::write(paths.raw_file(name), content).unwrap();
    }
    (dir, paths)
}

#[test]
fn test_run_all_loads_cleaned_rows() {
    let (_dir, paths) = project(&[
        ("customers_data.csv", CUSTOMERS),
        ("products_data.csv", PRODUCTS),
        ("sales_data.csv", SALES),
    ]);

    let report = run_all(&paths, &DatasetConfig::defaults()).unwrap();

    assert_eq!(report.prepare.prepared_count(), 3);
    assert_eq!(report.load.total_rows(), 3 + 2 + 3);

    let prepared_sales =
        std::fs::read_to_string(paths.prepared_dir.join("sales_data_prepared.csv")).unwrap();
    assert!(prepared_sales.contains("551,2024-01-06,1002,102,403,0,19.99,19,Unknown"));
    let clamped = prepared_sales
        .lines()
        .find(|line| line.starts_with("552,"))
        .unwrap();
    assert!(clamped.starts_with("552,2024-01-16,1003,101,404,0,10"));
    assert!(clamped.ends_with(",10,Cash"));

    let prepared_customers =
        std::fs::read_to_string(paths.prepared_dir.join("customers_data_prepared.csv")).unwrap();
    assert!(prepared_customers.contains("1002,wylie coyote,East"));

    let conn = open_warehouse(&paths.warehouse_path).unwrap();
    assert_eq!(table_row_count(&conn, "customer").unwrap(), 3);
    assert_eq!(table_row_count(&conn, "product").unwrap(), 2);
    assert_eq!(table_row_count(&conn, "sale").unwrap(), 3);
    close_warehouse(conn).unwrap();
}

#[test]
fn test_missing_raw_file_is_skipped() {
    let (_dir, paths) = project(&[("products_data.csv", PRODUCTS)]);

    let report = prepare_all(&paths, &DatasetConfig::defaults()).unwrap();

    assert_eq!(report.prepared_count(), 1);
    assert_eq!(report.skipped_count(), 2);
    assert!(matches!(
        report.datasets[0].status,
        DatasetStatus::Skipped { .. }
    ));
    assert!(!paths.prepared_dir.join("customers_data_prepared.csv").exists());
}

#[test]
fn test_header_only_raw_file_is_skipped() {
    let (_dir, paths) = project(&[(
        "sales_data.csv",
        "TransactionID,SaleDate,CustomerID,ProductID,StoreID,CampaignID,SaleAmount,BonusPoints,PaymentType\n",
    )]);

    let outcome = prepare_dataset(&paths, &DatasetConfig::for_kind(DatasetKind::Sales)).unwrap();

    assert_eq!(
        outcome.status,
        DatasetStatus::Skipped {
            reason: "no data rows".to_string()
        }
    );
    assert!(outcome.cleaning.is_none());
}

#[test]
fn test_run_all_fails_when_prepared_data_is_missing() {
    let (_dir, paths) = project(&[("products_data.csv", PRODUCTS)]);

    let result = run_all(&paths, &DatasetConfig::defaults());

    let error = result.unwrap_err();
    assert!(format!("{error:#}").contains("CSV file not found"));
}

#[test]
fn test_run_all_with_clean_naming_loads_clean_files() {
    let (_dir, paths) = project(&[
        ("customers_data.csv", CUSTOMERS),
        ("products_data.csv", PRODUCTS),
        ("sales_data.csv", SALES),
    ]);
    // Leftover snapshot from an earlier default run
    std::fs::create_dir_all(&paths.prepared_dir).unwrap();
    std::fs::write(
        paths.prepared_dir.join("products_data_prepared.csv"),
        "ProductID,ProductName,Category,UnitPrice,CurrentDiscountPercent,Subcategory\n\
         900,stale,Old,1.0,0,none\n",
    )
    .unwrap();
    let configs: Vec<DatasetConfig> = DatasetConfig::defaults()
        .into_iter()
        .map(|config| config.with_naming(OutputNaming::Clean))
        .collect();

    let report = run_all(&paths, &configs).unwrap();

    assert_eq!(report.prepare.prepared_count(), 3);
    let sources: Vec<_> = report
        .load
        .tables
        .iter()
        .map(|table| table.source.clone().unwrap())
        .collect();
    assert_eq!(
        sources,
        vec![
            paths.clean_dir.join("customers_data_clean.csv"),
            paths.clean_dir.join("products_data_clean.csv"),
            paths.clean_dir.join("sales_data_clean.csv"),
        ]
    );

    let conn = open_warehouse(&paths.warehouse_path).unwrap();
    assert_eq!(table_row_count(&conn, "product").unwrap(), 2);
    let stale: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM product WHERE product_id = 900",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stale, 0);
    close_warehouse(conn).unwrap();
}
