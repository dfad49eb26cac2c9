// tests/finz_coverage.rs
//
// Unweighted FINZ coverage through the public engine API.

use portfolio_coverage::{Category, CompanyTable, CoverageEngine, CoverageError};
use serde_json::{json, Value};

fn engine() -> CoverageEngine {
    CoverageEngine::default()
}

fn table(rows: Vec<Value>) -> CompanyTable {
    CompanyTable::from_rows(
        rows.into_iter()
            .map(|v| v.as_object().cloned().expect("object row"))
            .collect(),
    )
}

fn five_companies() -> CompanyTable {
    table(vec![
        json!({"company_name": "Company A", "company_id": "A", "investment_value": 100000,
               "sbti_validated": true, "target_classification": "1.5°C"}),
        json!({"company_name": "Company B", "company_id": "B", "investment_value": 200000,
               "sbti_validated": true, "target_classification": "Well-below 2°C"}),
        json!({"company_name": "Company C", "company_id": "C", "investment_value": 150000,
               "sbti_validated": true, "target_classification": "1.5°C/1.5°C"}),
        json!({"company_name": "Company D", "company_id": "D", "investment_value": 50000,
               "sbti_validated": false, "target_classification": null}),
        json!({"company_name": "Company E", "company_id": "E", "investment_value": 500000,
               "sbti_validated": true, "target_classification": "2°C"}),
    ])
}

fn category_of(t: &CompanyTable, id: &str) -> String {
    t.rows()
        .iter()
        .find(|r| r["company_id"] == json!(id))
        .and_then(|r| r["finz_category"].as_str())
        .unwrap_or_default()
        .to_string()
}

#[test]
fn only_one_point_five_is_in_transition() {
    let r = engine().aggregate_coverage(&five_companies()).unwrap();
    let df = &r.company_data;
    assert_eq!(category_of(df, "A"), "In Transition");
    assert_eq!(category_of(df, "B"), "Assessed");
    assert_eq!(category_of(df, "C"), "In Transition");
    assert_eq!(category_of(df, "D"), "Assessed");
    assert_eq!(category_of(df, "E"), "Assessed");
}

#[test]
fn coverage_is_simple_sums_without_weighting() {
    let r = engine().aggregate_coverage(&five_companies()).unwrap();

    let it = r.coverage.tally(Category::InTransition);
    assert_eq!(it.value, 250_000.0);
    assert!((it.value_pct - 25.0).abs() < 1e-6);
    assert_eq!(it.count, 2);
    assert!((it.count_pct - 40.0).abs() < 1e-6);

    let a = r.coverage.tally(Category::Assessed);
    assert_eq!(a.value, 750_000.0);
    assert!((a.value_pct - 75.0).abs() < 1e-6);
    assert_eq!(a.count, 3);
    assert!((a.count_pct - 60.0).abs() < 1e-6);

    assert_eq!(r.coverage.total.value, 1_000_000.0);
    assert_eq!(r.coverage.total.count, 5);
}

#[test]
fn summary_has_headline_numbers() {
    let s = engine().aggregate_coverage(&five_companies()).unwrap().summary;
    assert!((s.finz_in_transition_value_pct - 25.0).abs() < 1e-6);
    assert!((s.finz_in_transition_count_pct - 40.0).abs() < 1e-6);
    assert_eq!(s.total_portfolio_value, 1_000_000.0);
    assert_eq!(s.total_companies, 5);
}

#[test]
fn caller_table_is_not_mutated() {
    let input = five_companies();
    let before = input.clone();
    let r = engine().aggregate_coverage(&input).unwrap();
    assert_eq!(input, before);
    assert!(!input.has_column("finz_category"));
    assert!(r.company_data.has_column("finz_category"));
}

#[test]
fn pass_through_columns_survive() {
    let r = engine().aggregate_coverage(&five_companies()).unwrap();
    for c in ["company_name", "company_id", "investment_value", "sbti_validated", "target_classification"] {
        assert!(r.company_data.has_column(c), "lost column {c}");
    }
    assert_eq!(r.company_data.get(1, "company_name"), Some(&json!("Company B")));
}

#[test]
fn empty_table_has_zero_percentages() {
    let t = CompanyTable::new(["company_id", "investment_value", "sbti_validated"]);
    let r = engine().aggregate_coverage(&t).unwrap();
    for c in Category::ALL {
        let tally = r.coverage.tally(c);
        assert_eq!(tally.count, 0);
        assert_eq!(tally.count_pct, 0.0);
        assert_eq!(tally.value_pct, 0.0);
    }
    assert_eq!(r.summary.total_companies, 0);
}

#[test]
fn zero_value_portfolio_has_zero_value_percentages() {
    let t = table(vec![
        json!({"investment_value": 0, "sbti_validated": true, "target_classification": "1.5°C"}),
        json!({"investment_value": null, "sbti_validated": false}),
    ]);
    let r = engine().aggregate_coverage(&t).unwrap();
    let it = r.coverage.tally(Category::InTransition);
    assert_eq!(it.value_pct, 0.0);
    assert!(!it.value_pct.is_nan());
    assert_eq!(it.count, 1);
    assert!((it.count_pct - 50.0).abs() < 1e-9);
}

#[test]
fn validated_without_classification_column_is_assessed() {
    let t = table(vec![
        json!({"investment_value": 10, "sbti_validated": true}),
        json!({"investment_value": 30, "sbti_validated": true}),
    ]);
    let r = engine().aggregate_coverage(&t).unwrap();
    assert_eq!(r.categories, vec![Category::Assessed, Category::Assessed]);
    assert!((r.coverage.tally(Category::Assessed).value_pct - 100.0).abs() < 1e-9);
}

#[test]
fn alternate_classification_column_names_are_accepted() {
    let t = table(vec![
        json!({"investment_value": 10, "sbti_validated": true, "Near Term Classification": "1.5°C"}),
        json!({"investment_value": 30, "sbti_validated": true, "Near Term Classification": "Well-below 2°C"}),
    ]);
    let r = engine().aggregate_coverage(&t).unwrap();
    assert_eq!(r.categories, vec![Category::InTransition, Category::Assessed]);
}

#[test]
fn totals_match_partitions_on_a_larger_table() {
    let classes = ["1.5°C", "2°C", "Well-below 2°C", "", "1.5°C/1.5°C"];
    let rows: Vec<Value> = (0..97)
        .map(|i| {
            let class = if i % 7 == 0 {
                Value::Null
            } else {
                json!(classes[i % classes.len()])
            };
            json!({
                "company_id": format!("C{i}"),
                "investment_value": (i as f64) * 1234.56 + 0.01,
                "sbti_validated": i % 3 != 0,
                "target_classification": class,
            })
        })
        .collect();
    let r = engine().aggregate_coverage(&table(rows)).unwrap();

    let count: usize = Category::ALL.iter().map(|c| r.coverage.tally(*c).count).sum();
    let value: f64 = Category::ALL.iter().map(|c| r.coverage.tally(*c).value).sum();
    assert_eq!(count, 97);
    assert_eq!(r.categories.len(), 97);
    assert!((value - r.coverage.total.value).abs() <= 1e-6 * r.coverage.total.value);
}

#[test]
fn missing_required_columns_are_named() {
    let mut no_flag = five_companies();
    no_flag.drop_column("sbti_validated");
    match engine().aggregate_coverage(&no_flag) {
        Err(CoverageError::MissingColumn { column }) => assert_eq!(column, "sbti_validated"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }

    let mut no_value = five_companies();
    no_value.drop_column("investment_value");
    let err = engine().aggregate_coverage(&no_value).unwrap_err();
    assert!(err.to_string().contains("investment_value"));
}

#[test]
fn report_serializes_to_key_value_structure() {
    let r = engine().aggregate_coverage(&five_companies()).unwrap();
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["coverage"]["in_transition"]["count"], json!(2));
    assert_eq!(v["coverage"]["total"]["count"], json!(5));
    assert_eq!(v["summary"]["total_companies"], json!(5));
    assert_eq!(v["taxonomy_version"], json!(2));
    assert!(v["company_data"]["rows"].is_array());
}
