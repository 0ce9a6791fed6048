use analytics::{AnalyticsEngine, Period, ReportFilter, SourceFilter, StatusFilter};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use configuration::load_settings;
use core_types::draft::{EarningDraft, OrderDraft};
use core_types::enums::{OrderSource, PaymentGateway, PayoutStatus};
use core_types::records::OrderRecord;
use core_types::time;
use ledger::Desk;
use rust_decimal::Decimal;
use std::path::PathBuf;
use storage::FileStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// The main entry point for the khata order ledger.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings = load_settings()?;
    debug!(data_dir = %settings.data_dir.display(), "opening desk");
    let store = FileStore::new(&settings.data_dir);
    let mut desk = Desk::open(Box::new(store), &settings.seed_categories)?;
    let now = Utc::now();

    match cli.command {
        Commands::List(args) => handle_list(&desk, args),
        Commands::Add(args) => handle_add(&mut desk, args, now)?,
        Commands::Delete(args) => {
            desk.delete_order(args.id)?;
            println!("Deleted order {}", args.id);
        }
        Commands::Report(args) => handle_report(&desk, args, now),
        Commands::Payouts(args) => handle_payouts(&mut desk, args, now)?,
        Commands::Export(args) => handle_export(&desk, args, now)?,
        Commands::Import(args) => {
            let records = interchange::read_orders_file(&args.input, now)?;
            let added = desk.import_orders(records)?;
            println!("Successfully imported {added} orders.");
        }
        Commands::Categories(args) => match args.add {
            Some(name) => {
                if desk.add_category(&name)? {
                    println!("Added category \"{name}\"");
                } else {
                    println!("Category \"{name}\" already present or blank; nothing to do");
                }
            }
            None => {
                for name in desk.list_categories() {
                    println!("{name}");
                }
            }
        },
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A single-user order ledger with financial derivation and reporting.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List orders, newest first, optionally filtered by a search term.
    List(ListArgs),
    /// Record a new order entry.
    Add(AddArgs),
    /// Delete an order by id.
    Delete(DeleteArgs),
    /// Show the sales report for a period/source/status selection.
    Report(ReportArgs),
    /// Show the seller payout ledger, or mutate it.
    Payouts(PayoutsArgs),
    /// Export the order ledger to CSV.
    Export(ExportArgs),
    /// Import orders from a CSV file (rows are prepended).
    Import(ImportArgs),
    /// List product categories, or add one.
    Categories(CategoriesArgs),
}

#[derive(Parser)]
struct ListArgs {
    /// Case-insensitive search over customer name and order number.
    #[arg(long)]
    search: Option<String>,
}

#[derive(Parser)]
struct AddArgs {
    /// Order timestamp (RFC 3339). Defaults to now.
    #[arg(long)]
    date: Option<DateTime<Utc>>,

    #[arg(long, default_value = "")]
    order_number: String,

    #[arg(long, default_value = "")]
    customer: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    mobile: String,

    #[arg(long, default_value = "0")]
    amount: Decimal,

    #[arg(long, default_value = "0")]
    discount: Decimal,

    #[arg(long, default_value = "0")]
    wallet: Decimal,

    #[arg(long, default_value = "0")]
    referral: Decimal,

    /// Apply 18% GST on the discounted base.
    #[arg(long)]
    gst: bool,

    /// Split the net base with the seller.
    #[arg(long)]
    split: bool,

    /// Platform fee percent retained when splitting (0-20).
    #[arg(long, default_value_t = 10)]
    fee: u8,

    #[arg(long, value_enum, default_value = "website")]
    source: SourceArg,

    #[arg(long, default_value = "")]
    category: String,

    #[arg(long, value_enum, default_value = "none")]
    gateway: GatewayArg,

    /// Tag the order as speculative/unconfirmed.
    #[arg(long)]
    potential: bool,
}

#[derive(Parser)]
struct DeleteArgs {
    #[arg(long)]
    id: Uuid,
}

#[derive(Parser)]
struct ReportArgs {
    #[arg(long, value_enum, default_value = "all")]
    period: PeriodArg,

    /// Start date for --period custom (YYYY-MM-DD, business-local).
    #[arg(long)]
    from: Option<NaiveDate>,

    /// End date for --period custom (YYYY-MM-DD, business-local, inclusive).
    #[arg(long)]
    to: Option<NaiveDate>,

    #[arg(long, value_enum, default_value = "all")]
    source: SourceFilterArg,

    #[arg(long, value_enum, default_value = "all")]
    status: StatusFilterArg,
}

#[derive(Parser)]
struct PayoutsArgs {
    #[command(subcommand)]
    action: Option<PayoutAction>,
}

#[derive(Subcommand)]
enum PayoutAction {
    /// Record a payout obligation.
    Add {
        #[arg(long)]
        seller: String,
        #[arg(long, default_value = "0")]
        amount: Decimal,
        #[arg(long, value_enum, default_value = "unpaid")]
        status: PayoutStatusArg,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Settle a payout entry.
    MarkPaid {
        #[arg(long)]
        id: Uuid,
    },
    /// Delete a payout entry.
    Delete {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Parser)]
struct ExportArgs {
    /// Output path. Defaults to orders_<YYYY-MM-DD>.csv in the working directory.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct ImportArgs {
    #[arg(long)]
    input: PathBuf,
}

#[derive(Parser)]
struct CategoriesArgs {
    /// Add a category instead of listing them.
    #[arg(long)]
    add: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PeriodArg {
    All,
    Today,
    Yesterday,
    ThisWeek,
    ThisMonth,
    LastMonth,
    Custom,
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    Whatsapp,
    Website,
}

#[derive(Clone, Copy, ValueEnum)]
enum GatewayArg {
    None,
    Phonepe,
    Cashfree,
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceFilterArg {
    All,
    Whatsapp,
    Website,
}

#[derive(Clone, Copy, ValueEnum)]
enum StatusFilterArg {
    All,
    Confirmed,
    Potential,
}

#[derive(Clone, Copy, ValueEnum)]
enum PayoutStatusArg {
    Paid,
    Unpaid,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_list(desk: &Desk, args: ListArgs) {
    let engine = AnalyticsEngine::new();
    let orders = desk.list_orders();

    match args.search.as_deref() {
        Some(term) => {
            let matches = engine.search_orders(orders, term);
            let summary = engine.search_report(orders, term);
            print_orders_table(&matches);
            println!(
                "\n{} matching orders, total revenue {}",
                summary.matched,
                money(summary.revenue)
            );
        }
        None => print_orders_table(&orders.iter().collect::<Vec<_>>()),
    }
}

fn handle_add(desk: &mut Desk, args: AddArgs, now: DateTime<Utc>) -> anyhow::Result<()> {
    let draft = OrderDraft {
        order_date: args.date,
        order_number: args.order_number,
        customer_name: args.customer,
        email: args.email,
        mobile_number: args.mobile,
        order_amount: args.amount,
        discount_given: args.discount,
        wallet_amount: args.wallet,
        referral_amount: args.referral,
        gst_applied: args.gst,
        split_with_seller: args.split,
        platform_fee_percent: args.fee,
        source: match args.source {
            SourceArg::Whatsapp => OrderSource::Whatsapp,
            SourceArg::Website => OrderSource::Website,
        },
        category: args.category,
        gateway: match args.gateway {
            GatewayArg::None => PaymentGateway::None,
            GatewayArg::Phonepe => PaymentGateway::PhonePe,
            GatewayArg::Cashfree => PaymentGateway::Cashfree,
        },
        potential: args.potential,
    };

    let id = desk.create_order(draft, now)?;
    if let Some(order) = desk.list_orders().first() {
        println!(
            "Recorded order {}: customer pays {}, seller receives {}",
            id,
            money(order.total_paid),
            money(order.seller_income)
        );
    }
    Ok(())
}

fn handle_report(desk: &Desk, args: ReportArgs, now: DateTime<Utc>) {
    let filter = ReportFilter {
        period: match args.period {
            PeriodArg::All => Period::All,
            PeriodArg::Today => Period::Today,
            PeriodArg::Yesterday => Period::Yesterday,
            PeriodArg::ThisWeek => Period::ThisWeek,
            PeriodArg::ThisMonth => Period::ThisMonth,
            PeriodArg::LastMonth => Period::LastMonth,
            PeriodArg::Custom => Period::Custom {
                start: args.from,
                end: args.to,
            },
        },
        source: match args.source {
            SourceFilterArg::All => SourceFilter::All,
            SourceFilterArg::Whatsapp => SourceFilter::Whatsapp,
            SourceFilterArg::Website => SourceFilter::Website,
        },
        status: match args.status {
            StatusFilterArg::All => StatusFilter::All,
            StatusFilterArg::Confirmed => StatusFilter::Confirmed,
            StatusFilterArg::Potential => StatusFilter::Potential,
        },
    };

    let report = AnalyticsEngine::new().sales_report(desk.list_orders(), &filter, now);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![Cell::new("Total orders"), Cell::new(report.total_orders)]);
    table.add_row(vec![Cell::new("Total revenue"), Cell::new(money(report.total_revenue))]);
    table.add_row(vec![Cell::new("Avg order value"), Cell::new(money(report.avg_order))]);
    table.add_row(vec![Cell::new("Seller income"), Cell::new(money(report.seller_income))]);
    table.add_row(vec![Cell::new("GST collected"), Cell::new(money(report.total_gst))]);
    table.add_row(vec![Cell::new("Referral payout"), Cell::new(money(report.total_referrals))]);
    table.add_row(vec![
        Cell::new("Gateway charges"),
        Cell::new(money(report.total_gateway_charges)),
    ]);
    table.add_row(vec![Cell::new("Net profit"), Cell::new(money(report.net_profit))]);
    table.add_row(vec![
        Cell::new("WhatsApp revenue"),
        Cell::new(money(report.whatsapp_revenue)),
    ]);
    table.add_row(vec![
        Cell::new("Website revenue"),
        Cell::new(money(report.website_revenue)),
    ]);
    println!("{table}");

    if !report.category_share.is_empty() {
        let mut shares = Table::new();
        shares.load_preset(UTF8_FULL);
        shares.set_header(vec!["Category", "Revenue", "Share %"]);
        for share in &report.category_share {
            shares.add_row(vec![
                Cell::new(&share.category),
                Cell::new(money(share.revenue)),
                Cell::new(format!("{:.1}", share.percent)),
            ]);
        }
        println!("{shares}");
    }
}

fn handle_payouts(desk: &mut Desk, args: PayoutsArgs, now: DateTime<Utc>) -> anyhow::Result<()> {
    match args.action {
        Some(PayoutAction::Add {
            seller,
            amount,
            status,
            notes,
        }) => {
            let id = desk.create_earning(
                EarningDraft {
                    seller_name: seller,
                    payout_amount: amount,
                    status: match status {
                        PayoutStatusArg::Paid => PayoutStatus::Paid,
                        PayoutStatusArg::Unpaid => PayoutStatus::Unpaid,
                    },
                    date: None,
                    notes,
                },
                now,
            )?;
            println!("Recorded payout entry {id}");
        }
        Some(PayoutAction::MarkPaid { id }) => {
            desk.mark_paid(id)?;
            println!("Marked {id} as paid");
        }
        Some(PayoutAction::Delete { id }) => {
            desk.delete_earning(id)?;
            println!("Deleted payout entry {id}");
        }
        None => {
            let report = AnalyticsEngine::new().payout_report(desk.list_earnings());

            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Seller", "Amount", "Status", "Date", "Notes"]);
            for earning in desk.list_earnings() {
                table.add_row(vec![
                    Cell::new(&earning.seller_name),
                    Cell::new(money(earning.payout_amount)),
                    Cell::new(earning.status),
                    Cell::new(local_date(earning.date)),
                    Cell::new(&earning.notes),
                ]);
            }
            println!("{table}");
            println!(
                "\n{} sellers | {} paid ({}) | {} unpaid ({}) | total {}",
                report.total_sellers,
                report.paid_count,
                money(report.paid_balance),
                report.unpaid_count,
                money(report.unpaid_balance),
                money(report.total_payout)
            );
        }
    }
    Ok(())
}

fn handle_export(desk: &Desk, args: ExportArgs, now: DateTime<Utc>) -> anyhow::Result<()> {
    let path = args.output.unwrap_or_else(|| {
        let local_day = now.with_timezone(&time::business_zone()).format("%Y-%m-%d");
        PathBuf::from(format!("orders_{local_day}.csv"))
    });
    interchange::write_orders_file(desk.list_orders(), &path)?;
    println!("Exported {} orders to {}", desk.list_orders().len(), path.display());
    Ok(())
}

// ==============================================================================
// Rendering helpers
// ==============================================================================

fn print_orders_table(orders: &[&OrderRecord]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Id", "Date", "Number", "Customer", "Category", "Source", "Total Paid", "Potential",
    ]);
    for order in orders {
        table.add_row(vec![
            Cell::new(order.id),
            Cell::new(local_date(order.order_date)),
            Cell::new(&order.order_number),
            Cell::new(&order.customer_name),
            Cell::new(&order.category),
            Cell::new(order.source),
            Cell::new(money(order.total_paid)),
            Cell::new(if order.potential { "Yes" } else { "No" }),
        ]);
    }
    println!("{table}");
}

/// Money rendered to two decimals. Display-only; intermediate arithmetic is
/// never rounded.
fn money(value: Decimal) -> String {
    format!("{:.2}", value)
}

fn local_date(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&time::business_zone())
        .format("%Y-%m-%d %H:%M")
        .to_string()
}
