// Pattern 5: Adapter
// Checkout code talks to `Transfer`. The wallet only knows `process_transfer`
// and expects the fee to be applied already, so an adapter bridges the two.

use crate::error::Result;
use crate::transcript::Transcript;

pub const BANK_FEE_MULTIPLIER: f64 = 1.02;
pub const WALLET_FEE_MULTIPLIER: f64 = 1.2;

// ============================================================================
// Target interface
// ============================================================================

pub trait Transfer {
    /// Applies the mechanism's fee to `amount` and performs the transfer.
    fn initiate_transfer(&self, amount: f64, out: &mut Transcript);
}

pub struct BankTransfer;

impl BankTransfer {
    pub fn calculate_fee(&self, amount: f64) -> f64 {
        amount * BANK_FEE_MULTIPLIER
    }
}

impl Transfer for BankTransfer {
    fn initiate_transfer(&self, amount: f64, out: &mut Transcript) {
        let calculated = self.calculate_fee(amount);
        out.line(format!("Ініціюємо банківський переказ: ${}", calculated));
    }
}

// ============================================================================
// Incompatible interface
// ============================================================================

pub trait ProcessTransfer {
    /// `amount` already includes every fee.
    fn process_transfer(&self, amount: f64, out: &mut Transcript);
}

pub struct WalletTransfer;

impl ProcessTransfer for WalletTransfer {
    fn process_transfer(&self, amount: f64, out: &mut Transcript) {
        out.line(format!("Здійснюємо переказ з гаманця: ${}", amount));
    }
}

// ============================================================================
// Adapter
// ============================================================================

pub struct TransferAdapter<W> {
    wallet: W,
}

impl<W: ProcessTransfer> TransferAdapter<W> {
    pub fn new(wallet: W) -> Self {
        Self { wallet }
    }

    pub fn calculate_fee(&self, amount: f64) -> f64 {
        amount * WALLET_FEE_MULTIPLIER
    }

    pub fn into_inner(self) -> W {
        self.wallet
    }
}

impl<W: ProcessTransfer> Transfer for TransferAdapter<W> {
    fn initiate_transfer(&self, amount: f64, out: &mut Transcript) {
        let calculated = self.calculate_fee(amount);
        self.wallet.process_transfer(calculated, out);
    }
}

fn purchase(transfer: &dyn Transfer, amount: f64, out: &mut Transcript) {
    transfer.initiate_transfer(amount, out);
}

// ============================================================================
// Demo
// ============================================================================

pub fn run(out: &mut Transcript) -> Result<()> {
    purchase(&BankTransfer, 1000.0, out);
    purchase(&BankTransfer, 10.0, out);
    purchase(&TransferAdapter::new(WalletTransfer), 1000.0, out);
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingWallet {
        received: RefCell<Vec<f64>>,
    }

    impl ProcessTransfer for RecordingWallet {
        fn process_transfer(&self, amount: f64, _out: &mut Transcript) {
            self.received.borrow_mut().push(amount);
        }
    }

    #[test]
    fn test_bank_applies_own_fee() {
        let mut out = Transcript::new();
        BankTransfer.initiate_transfer(1000.0, &mut out);
        assert_eq!(out.lines(), ["Ініціюємо банківський переказ: $1020"]);
    }

    #[test]
    fn test_bank_fractional_amount() {
        let mut out = Transcript::new();
        BankTransfer.initiate_transfer(10.0, &mut out);
        assert_eq!(
            out.lines()[0],
            format!("Ініціюємо банківський переказ: ${}", 10.0 * BANK_FEE_MULTIPLIER)
        );
    }

    #[test]
    fn test_adapter_delegates_adjusted_amount() {
        let adapter = TransferAdapter::new(RecordingWallet::default());
        let mut out = Transcript::new();
        adapter.initiate_transfer(250.0, &mut out);
        adapter.initiate_transfer(1000.0, &mut out);

        let wallet = adapter.into_inner();
        assert_eq!(
            *wallet.received.borrow(),
            vec![250.0 * WALLET_FEE_MULTIPLIER, 1000.0 * WALLET_FEE_MULTIPLIER]
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_adapter_output_reflects_fee() {
        let mut out = Transcript::new();
        TransferAdapter::new(WalletTransfer).initiate_transfer(1000.0, &mut out);
        assert_eq!(out.lines(), ["Здійснюємо переказ з гаманця: $1200"]);
    }

    #[test]
    fn test_wallet_takes_amount_as_is() {
        let mut out = Transcript::new();
        WalletTransfer.process_transfer(99.5, &mut out);
        assert_eq!(out.lines(), ["Здійснюємо переказ з гаманця: $99.5"]);
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        run(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            [
                "Ініціюємо банківський переказ: $1020",
                "Ініціюємо банківський переказ: $10.2",
                "Здійснюємо переказ з гаманця: $1200",
            ]
        );
    }
}
