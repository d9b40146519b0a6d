use assert_cmd::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

fn amort() -> Command {
    Command::new(cargo_bin!("amort"))
}

const REFERENCE_FLAGS: [&str; 8] = [
    "--loan-amount",
    "300000",
    "--interest-rate",
    "4.5",
    "--loan-term",
    "30",
    "--down-payment",
    "60000",
];

#[test]
fn test_payment_from_flags() -> Result<(), Box<dyn std::error::Error>> {
    amort()
        .arg("payment")
        .args(REFERENCE_FLAGS)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"monthlyPayment\": \"1216.04"))
        .stdout(predicate::str::contains("\"financedPrincipal\": \"240000\""));
    Ok(())
}

#[test]
fn test_minimal_output_is_the_payment() -> Result<(), Box<dyn std::error::Error>> {
    amort()
        .args(["summary", "--output", "minimal"])
        .args(REFERENCE_FLAGS)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1216.04"));
    Ok(())
}

#[test]
fn test_summary_from_json_file() -> Result<(), Box<dyn std::error::Error>> {
    let output = amort()
        .args(["summary", "--input", "tests/fixtures/reference_loan.json"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["result"]["months"], 360);
    assert!(value["result"].get("amortizationSchedule").is_none());
    assert_eq!(value["metadata"]["precision"], "rust_decimal_128bit");
    Ok(())
}

#[test]
fn test_summary_from_yaml_file_reports_savings() -> Result<(), Box<dyn std::error::Error>> {
    let output = amort()
        .args(["summary", "--input", "tests/fixtures/accelerated_loan.yaml"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let months = value["result"]["months"].as_u64().unwrap();
    assert!(months < 360);
    let warnings = value["warnings"].as_array().unwrap();
    assert!(warnings
        .iter()
        .any(|w| w.as_str().unwrap().contains("shortens payoff")));
    Ok(())
}

#[test]
fn test_schedule_from_stdin_as_csv() -> Result<(), Box<dyn std::error::Error>> {
    amort()
        .args(["schedule", "--output", "csv", "--every", "12"])
        .write_stdin(r#"{"loanAmount": 12000, "interestRate": 0, "loanTerm": 2}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("balance,interest,month,payment,principal,totalInterest"))
        .stdout(predicate::str::contains(",13,500,"));
    Ok(())
}

#[test]
fn test_compare_terms_csv() -> Result<(), Box<dyn std::error::Error>> {
    amort()
        .args(["compare", "--field", "loan-term", "--values", "15,30", "--output", "csv"])
        .args(REFERENCE_FLAGS)
        .assert()
        .success()
        .stdout(predicate::str::contains("15 years"))
        .stdout(predicate::str::contains("30 years"));
    Ok(())
}

#[test]
fn test_compare_down_payment_presets_on_small_loan() -> Result<(), Box<dyn std::error::Error>> {
    let output = amort()
        .args(["compare", "--field", "down-payment"])
        .args(["--loan-amount", "100000", "--interest-rate", "4.5", "--loan-term", "30"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let rows = value["result"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[4]["label"], "$40,000");
    Ok(())
}

#[test]
fn test_yearly_reports_interest_share() -> Result<(), Box<dyn std::error::Error>> {
    let output = amort().arg("yearly").args(REFERENCE_FLAGS).output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let years = value["result"].as_array().unwrap();
    assert_eq!(years.len(), 30);
    assert!(years[0]["interestSharePct"].as_str().unwrap().starts_with("73."));
    Ok(())
}

#[test]
fn test_page_with_month_search() -> Result<(), Box<dyn std::error::Error>> {
    let output = amort()
        .args(["page", "--month", "36", "--page-size", "50"])
        .args(REFERENCE_FLAGS)
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["result"]["totalRows"], 5);
    assert_eq!(value["result"]["rows"][0]["month"], 36);
    Ok(())
}

#[test]
fn test_invalid_parameters_fail() -> Result<(), Box<dyn std::error::Error>> {
    amort()
        .args(["summary"])
        .args(REFERENCE_FLAGS)
        .args(["--additional-payment=-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid parameters"));
    Ok(())
}

#[test]
fn test_excessive_term_fails() -> Result<(), Box<dyn std::error::Error>> {
    amort()
        .args(["schedule", "--loan-amount", "1000", "--interest-rate", "0"])
        .args(["--loan-term", "300000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot exceed 100 years"));
    Ok(())
}

#[test]
fn test_missing_flags_fail() -> Result<(), Box<dyn std::error::Error>> {
    amort()
        .args(["payment", "--loan-amount", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--interest-rate is required"));
    Ok(())
}

#[test]
fn test_version() -> Result<(), Box<dyn std::error::Error>> {
    amort()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("amort "));
    Ok(())
}
