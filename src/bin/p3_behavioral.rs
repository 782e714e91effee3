// Pattern 3: Behavioral Patterns - Observer, Strategy
// Each pattern runs twice: without it, then with it.
//
// Usage: p3_behavioral [config.toml]

use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

use pattern_catalog::behavioral::observer::{
    DirectNotifier, HandlerError, NotificationRegistry, User,
};
use pattern_catalog::behavioral::strategy::{
    CreditCardPayment, PayPalPayment, PaymentProcessor, SwitchPaymentProcessor,
};
use pattern_catalog::{telemetry, CatalogConfig};

const UPDATE: &str = "Nova atualização disponível!";

// ============================================================================
// Observer
// ============================================================================

fn observer_without_pattern() {
    let notifier = DirectNotifier;
    notifier.send_notification("Alice", UPDATE);
    notifier.send_notification("Bob", UPDATE);
}

fn observer_with_pattern(config: &CatalogConfig) -> anyhow::Result<()> {
    let registry = NotificationRegistry::from_config(&config.observer);
    let alice = Arc::new(User::new("Alice"));
    let bob = Arc::new(User::new("Bob"));

    registry.register(alice.clone());
    registry.register(bob.clone());
    registry.notify(UPDATE)?;

    println!("Alice sai da lista:");
    registry.unregister(&alice);
    registry.notify("Manutenção às 22h.")?;

    println!("Inbox de Bob: {} mensagem(ns)", bob.inbox().len());
    Ok(())
}

fn observer_failure_policy(config: &CatalogConfig) {
    let registry = NotificationRegistry::from_config(&config.observer);
    registry.register(Arc::new(User::new("Carol")));
    registry.register(Arc::new(|_: &str| -> Result<(), HandlerError> {
        Err("caixa de entrada cheia".into())
    }));
    registry.register(Arc::new(User::new("Dave")));

    match registry.notify("Teste de falha") {
        Ok(delivered) => println!("Entregue para {} ouvinte(s)", delivered),
        Err(err) => {
            println!("Política {:?}: {}", registry.policy(), err);
            for failure in err.failures() {
                println!("  - {}", failure);
            }
        }
    }
}

// ============================================================================
// Strategy
// ============================================================================

fn strategy_without_pattern() {
    let processor = SwitchPaymentProcessor;
    for (method, amount) in [("credit_card", 100), ("paypal", 200), ("boleto", 50)] {
        match processor.process_payment(method, amount) {
            Ok(receipt) => println!("{}", receipt),
            Err(err) => println!("{}", err),
        }
    }
}

fn strategy_with_pattern() {
    let mut processor = PaymentProcessor::new(Box::new(CreditCardPayment));
    println!("{}", processor.execute_payment(100));

    processor.set_strategy(Box::new(PayPalPayment));
    println!("{}", processor.execute_payment(200));
}

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = CatalogConfig::load_or_default(config_path.as_deref())?;
    telemetry::init(&config.telemetry);

    println!("{}", "Pattern 3: Behavioral Patterns".bold());
    println!("===============================\n");

    println!("{}", "=== Observer (without) ===".yellow());
    observer_without_pattern();
    println!();

    println!("{}", "=== Observer (with) ===".green());
    observer_with_pattern(&config)?;
    println!();

    println!("{}", "=== Observer (handler failure) ===".green());
    observer_failure_policy(&config);
    println!();

    println!("{}", "=== Strategy (without) ===".yellow());
    strategy_without_pattern();
    println!();

    println!("{}", "=== Strategy (with) ===".green());
    strategy_with_pattern();

    Ok(())
}
