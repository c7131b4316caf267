use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use order_payment::application::checkout::Checkout;
use order_payment::domain::order::Order;
use order_payment::domain::ports::{AuthorizerRef, PaymentProcessorBox};
use order_payment::error::PaymentError;
use order_payment::infrastructure::authorizers::{NotARobot, SmsAuthorizer};
use order_payment::infrastructure::processors::{CreditProcessor, DebitProcessor, PaypalProcessor};
use order_payment::interfaces::console::logging;
use order_payment::interfaces::console::report::OrderReport;
use order_payment::interfaces::csv::item_reader::ItemReader;
use rust_decimal_macros::dec;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Method {
    Debit,
    Credit,
    Paypal,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum AuthorizerKind {
    Sms,
    Robot,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Line items CSV file (item, quantity, price). Uses a sample order when omitted.
    items: Option<PathBuf>,

    /// Payment method used to settle the order
    #[arg(long, value_enum, default_value_t = Method::Credit)]
    method: Method,

    /// Card security code for debit and credit payments
    #[arg(long, default_value = "8765")]
    security_code: String,

    /// Account email for PayPal payments
    #[arg(long, required_if_eq("method", "paypal"))]
    email: Option<String>,

    /// Authorizer gating credit and PayPal payments
    #[arg(long, value_enum, default_value_t = AuthorizerKind::Robot)]
    authorizer: AuthorizerKind,

    /// Code used to confirm the SMS authorizer
    #[arg(long, default_value = "2234")]
    sms_code: String,

    /// Skip the authorizer confirmation step
    #[arg(long)]
    no_confirm: bool,

    /// Print the final order as JSON instead of a status line
    #[arg(long)]
    json: bool,
}

fn sample_order() -> Order {
    let mut order = Order::new();
    order.add_item("mouse", 3, dec!(100));
    order.add_item("screen", 1, dec!(900));
    order.add_item("antivirus", 1, dec!(200));
    order
}

fn read_order(path: PathBuf) -> Result<Order> {
    let file = File::open(path).into_diagnostic()?;
    let reader = ItemReader::new(file);
    let mut order = Order::new();
    for item_result in reader.items() {
        match item_result {
            Ok(item) => order.push(item),
            Err(e) => {
                eprintln!("Error reading line item: {}", e);
            }
        }
    }
    Ok(order)
}

fn build_authorizer(cli: &Cli) -> AuthorizerRef {
    match cli.authorizer {
        AuthorizerKind::Sms => {
            let authorizer = SmsAuthorizer::new();
            if !cli.no_confirm {
                authorizer.confirm_authorization(&cli.sms_code);
            }
            Arc::new(authorizer)
        }
        AuthorizerKind::Robot => {
            let authorizer = NotARobot::new();
            if !cli.no_confirm {
                authorizer.not_a_robot();
            }
            Arc::new(authorizer)
        }
    }
}

fn build_processor(cli: &Cli) -> PaymentProcessorBox {
    match cli.method {
        Method::Debit => Box::new(DebitProcessor::new(cli.security_code.as_str())),
        Method::Credit => Box::new(CreditProcessor::new(
            cli.security_code.as_str(),
            build_authorizer(cli),
        )),
        Method::Paypal => Box::new(PaypalProcessor::new(
            cli.email.clone().unwrap_or_default(),
            build_authorizer(cli),
        )),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init("info").into_diagnostic()?;

    let mut order = match cli.items.clone() {
        Some(path) => read_order(path)?,
        None => sample_order(),
    };

    let stdout = io::stdout();
    let mut report = OrderReport::new(stdout.lock());
    match report.write_total(&order) {
        Ok(()) => {}
        Err(e @ PaymentError::Overflow) => eprintln!("Error computing total: {}", e),
        Err(e) => return Err(e).into_diagnostic(),
    }
    report.write_status(&order).into_diagnostic()?;
    report.write_separator().into_diagnostic()?;
    report.flush().into_diagnostic()?;

    let checkout = Checkout::new(build_processor(&cli));
    match checkout.settle(&mut order) {
        Ok(_) => {}
        Err(e @ (PaymentError::Unauthorized | PaymentError::Overflow)) => {
            report.write_error(&e).into_diagnostic()?
        }
        Err(e) => return Err(e).into_diagnostic(),
    }

    if cli.json {
        report.write_json(&order).into_diagnostic()?;
    } else {
        report.write_status(&order).into_diagnostic()?;
    }
    report.flush().into_diagnostic()?;

    Ok(())
}
