//! Billed CLI — command-line client for the bills API.
//!
//! Set BILLED_API_TOKEN and BILLED_API_URL (or API_URL). Uses Bearer auth.

use std::sync::Arc;

use anyhow::Context;
use billed_api_client::ApiClient;
use billed_app::{NewBill, Session};
use billed_cli::{content_type_for_path, init_tracing, LoggingNavigator};
use billed_core::models::BillForm;
use billed_core::{BillsStore, Config, ErrorPresentation, ReceiptValidator};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "billed", about = "Billed expense-report CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a new expense report with a receipt image
    Submit {
        /// Path to the receipt image (jpg, jpeg, or png)
        #[arg(long)]
        receipt: std::path::PathBuf,
        /// Expense name
        #[arg(long)]
        name: String,
        /// Expense date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Amount in the account currency
        #[arg(long)]
        amount: i64,
        /// VAT amount
        #[arg(long)]
        vat: String,
        /// VAT percentage
        #[arg(long)]
        pct: i64,
        /// Expense category
        #[arg(long = "type")]
        expense_type: String,
        /// Optional commentary
        #[arg(long)]
        commentary: Option<String>,
        /// Email of the submitting employee
        #[arg(long, default_value = "employee@test.tld")]
        email: String,
    },
    /// List submitted bills
    List,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let client = ApiClient::from_env().context(
        "Failed to create API client. Set BILLED_API_TOKEN and BILLED_API_URL (or API_URL)",
    )?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Submit {
            receipt,
            name,
            date,
            amount,
            vat,
            pct,
            expense_type,
            commentary,
            email,
        } => {
            let data = std::fs::read(&receipt)
                .with_context(|| format!("Failed to read receipt file: {}", receipt.display()))?;
            if data.len() > config.max_receipt_size_bytes {
                anyhow::bail!(
                    "Receipt file too large: {} bytes (max: {} bytes)",
                    data.len(),
                    config.max_receipt_size_bytes
                );
            }
            let file_name = receipt
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("receipt")
                .to_string();
            let content_type = content_type_for_path(&receipt);

            let mut handler = NewBill::new(
                Session::employee(email),
                Arc::new(client) as Arc<dyn BillsStore>,
                Arc::new(LoggingNavigator),
            )
            .with_validator(ReceiptValidator::new(
                config.allowed_receipt_content_types.clone(),
            ));

            if let Err(err) = handler.handle_change_file(&file_name, &content_type, data) {
                anyhow::bail!(err.user_message());
            }

            let form = BillForm {
                expense_type,
                name,
                date,
                amount,
                vat,
                pct,
                commentary,
            };

            match handler.handle_submit(form).await {
                Ok(bill) => print_json(&bill)?,
                Err(err) => anyhow::bail!(err.user_message()),
            }
        }
        Commands::List => {
            let bills = client.list_bill_records().await?;
            print_json(&bills)?;
        }
    }

    Ok(())
}
