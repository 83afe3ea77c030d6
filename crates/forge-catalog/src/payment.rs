//! Legacy payment interface adapted onto a cents-only gateway

/// The interface existing callers expect: dollar amounts
pub trait PaymentProcessor: Send {
    /// Process a payment, returning the settlement line
    fn process(&self, amount: f64) -> String;
}

/// The new gateway only accepts whole cents
#[derive(Debug, Default)]
pub struct CentsGateway;

impl CentsGateway {
    /// Submit a charge in whole cents
    #[must_use]
    pub fn submit_cents(&self, cents: u64) -> String {
        format!("gateway captured {cents} cents")
    }
}

/// Bridges dollar-amount callers to the cents-only gateway
#[derive(Debug, Default)]
pub struct GatewayAdapter {
    gateway: CentsGateway,
}

impl GatewayAdapter {
    /// Adapter over a fresh gateway
    #[must_use]
    pub fn new(gateway: CentsGateway) -> Self {
        Self { gateway }
    }
}

impl PaymentProcessor for GatewayAdapter {
    fn process(&self, amount: f64) -> String {
        // Round half-cent edge cases up-front so the gateway sees whole cents
        let cents = (amount * 100.0).round().max(0.0) as u64;
        format!("Processed ${amount:.2}: {}", self.gateway.submit_cents(cents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_converts_dollars_to_cents() {
        let processor = GatewayAdapter::new(CentsGateway);
        assert_eq!(
            processor.process(150.75),
            "Processed $150.75: gateway captured 15075 cents"
        );
    }

    #[test]
    fn adapter_rounds_fractional_cents() {
        let processor = GatewayAdapter::new(CentsGateway);
        assert_eq!(
            processor.process(0.999),
            "Processed $1.00: gateway captured 100 cents"
        );
    }

    #[test]
    fn negative_amounts_clamp_to_zero() {
        let processor = GatewayAdapter::new(CentsGateway);
        assert_eq!(
            processor.process(-3.0),
            "Processed $-3.00: gateway captured 0 cents"
        );
    }
}
