// Pattern: Strategy
// Payment methods as interchangeable trait objects vs. a string switch.

use crate::error::CatalogError;

// ============================================================================
// With the pattern
// ============================================================================

pub trait PaymentStrategy {
    /// Charges `amount` (whole reais) and returns the receipt line.
    fn pay(&self, amount: u64) -> String;
    fn name(&self) -> &str;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardPayment;

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: u64) -> String {
        format!("Pagamento de R${} realizado com Cartão de Crédito.", amount)
    }

    fn name(&self) -> &str {
        "credit_card"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PayPalPayment;

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: u64) -> String {
        format!("Pagamento de R${} realizado com PayPal.", amount)
    }

    fn name(&self) -> &str {
        "paypal"
    }
}

pub struct PaymentProcessor {
    strategy: Box<dyn PaymentStrategy>,
}

impl PaymentProcessor {
    pub fn new(strategy: Box<dyn PaymentStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn execute_payment(&self, amount: u64) -> String {
        self.strategy.pay(amount)
    }
}

// ============================================================================
// Without the pattern: every new method means editing this match
// ============================================================================

#[derive(Debug, Default)]
pub struct SwitchPaymentProcessor;

impl SwitchPaymentProcessor {
    pub fn process_payment(&self, method: &str, amount: u64) -> Result<String, CatalogError> {
        match method {
            "credit_card" => Ok(format!(
                "Pagamento de R${} realizado com Cartão de Crédito.",
                amount
            )),
            "paypal" => Ok(format!("Pagamento de R${} realizado com PayPal.", amount)),
            other => Err(CatalogError::invalid_payment_method(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_card() {
        let processor = PaymentProcessor::new(Box::new(CreditCardPayment));
        assert_eq!(
            processor.execute_payment(100),
            "Pagamento de R$100 realizado com Cartão de Crédito."
        );
    }

    #[test]
    fn test_strategy_switch() {
        let mut processor = PaymentProcessor::new(Box::new(CreditCardPayment));
        assert_eq!(processor.strategy_name(), "credit_card");

        processor.set_strategy(Box::new(PayPalPayment));
        assert_eq!(processor.strategy_name(), "paypal");
        assert_eq!(
            processor.execute_payment(200),
            "Pagamento de R$200 realizado com PayPal."
        );
    }

    #[test]
    fn test_switch_matches_strategies() {
        let switch = SwitchPaymentProcessor;
        assert_eq!(
            switch.process_payment("credit_card", 100).unwrap(),
            CreditCardPayment.pay(100)
        );
        assert_eq!(
            switch.process_payment("paypal", 200).unwrap(),
            PayPalPayment.pay(200)
        );
    }

    #[test]
    fn test_switch_rejects_unknown_method() {
        let err = SwitchPaymentProcessor
            .process_payment("boleto", 50)
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidPaymentMethod { ref method } if method == "boleto"
        ));
    }
}
